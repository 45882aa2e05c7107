//! Color constants for the deck's aurora/glass aesthetic.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID: &str = "#030014";
pub const PANEL: &str = "rgba(255, 255, 255, 0.05)";

// === PURPLE (Primary accent, headings, glass borders) ===
pub const PURPLE: &str = "#a78bfa";
pub const PURPLE_DEEP: &str = "#7c3aed";
pub const PURPLE_GLOW: &str = "rgba(168, 85, 247, 0.3)";

// === CYAN (Secondary accent, links, arrows) ===
pub const CYAN: &str = "#22d3ee";
pub const CYAN_GLOW: &str = "rgba(34, 211, 238, 0.3)";

// === SEMANTIC ACCENTS ===
pub const PINK: &str = "#f472b6";
pub const GREEN: &str = "#4ade80";
pub const YELLOW: &str = "#facc15";
pub const BLUE: &str = "#60a5fa";
pub const ORANGE: &str = "#fb923c";
pub const RED: &str = "#f87171";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#d1d5db";
pub const TEXT_MUTED: &str = "#9ca3af";
pub const TEXT_FAINT: &str = "#6b7280";
