//! Statblock text processing for Quasit.
//!
//! Rewrites free-form statblock text into interactive markup (roll
//! triggers, difficulty-class highlights, condition tooltips) through an
//! ordered pipeline of regex passes, and provides small helpers for the
//! odd field formats monster compendia use.

pub mod error;
pub mod fields;
pub mod markup;
pub mod source;
pub mod terms;

pub use error::{StatblockError, StatblockResult};
pub use fields::{PipePick, capitalize, extract_stat, strip_pipe};
pub use markup::{Pipeline, Stage, parse_text};
pub use source::prepare_monster_url;
pub use terms::{GAME_TERMS, GameTerm, term_description};
