//! UI Components
//!
//! Reusable Leptos components.

mod joke_card;

pub use joke_card::JokeCard;
