//! Visual theme for the deck.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
