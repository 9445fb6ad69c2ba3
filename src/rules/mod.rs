//! Actions, the rules engine trait, and turn keeping.
//!
//! `BoardState` implements `RulesEngine`; `Game` drives any `RulesEngine`
//! seat by seat. The engine never tracks whose turn it is, and `Game` never
//! interprets board geometry.

pub mod action;
pub mod engine;
pub mod game;

pub use action::Action;
pub use engine::RulesEngine;
pub use game::{ActionRecord, Game};
