//! Pages. The deck is a single scrolling page.

mod deck;

pub use deck::Deck;
