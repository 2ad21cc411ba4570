//! cardsift - command-line front end for the cardsift criteria engine.
//!
//! Reads a JSON card collection, applies `--where`, `--not` and `--pick`
//! filters, and prints the matching cards.

pub mod args;
pub mod logging;
pub mod run;
