//! Deck page sections, one module per section, in scroll order.

mod architecture;
mod conclusion;
mod database;
mod deep_dive;
mod excellence;
mod hero;
mod modules;
mod outcomes;
mod problem;
mod roadmap;
mod roles;
mod security;
mod solution;

pub use architecture::ArchitectureSection;
pub use conclusion::ConclusionSection;
pub use database::DatabaseDesignSection;
pub use deep_dive::FeatureDeepDiveSection;
pub use excellence::TechnicalExcellenceSection;
pub use hero::HeroSection;
pub use modules::{RecruiterModuleSection, StudentModuleSection};
pub use outcomes::OutcomesSection;
pub use problem::ProblemSection;
pub use roadmap::RoadmapSection;
pub use roles::RolesSection;
pub use security::SecurityPerformanceSection;
pub use solution::SolutionSection;
