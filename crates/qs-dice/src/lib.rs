//! Dice notation engine for Quasit.
//!
//! Parses `NdS+M` notation, applies roll-mode transforms (advantage and
//! disadvantage stacks, minion swarm multipliers), evaluates rolls with
//! crit explosion chains, and produces display-ready breakdowns with
//! per-die kept/dropped/exploding flags.

pub mod broadcast;
pub mod engine;
pub mod error;
pub mod menu;
pub mod notation;
pub mod roll;

pub use broadcast::{ROLL_EVENT, RollEvent};
pub use engine::Roller;
pub use error::{DiceError, DiceResult};
pub use menu::{MenuState, stack_params};
pub use notation::{DiceExpression, DropRule, RollMode, RollPlan, transform_notation};
pub use roll::{RollOutcome, RollRequest, RolledDie};
