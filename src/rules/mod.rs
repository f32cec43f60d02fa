//! Rules surface for callers driving a game.
//!
//! - `start_game`: Instantiate a decklist, shuffle, draw the opening hand
//! - `draw_card`: Top of Deck to Hand
//! - `legal_activations`: Everything the gate approves right now
//!
//! The core never prompts: callers pick an `Activation` and one of its
//! `selections()` and pass them to `Engine::activate`.

pub mod legal;
pub mod setup;

pub use legal::{legal_activations, Activation, Targets};
pub use setup::{draw_card, start_game};
