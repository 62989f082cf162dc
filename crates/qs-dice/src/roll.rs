//! Roll requests and results.
//!
//! A `RollRequest` describes what the user asked for; a `RollOutcome` is
//! the fully resolved roll: every die in display order with its flags, the
//! kept total, and a breakdown string. Both are plain value objects,
//! constructed fresh per roll and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::notation::RollMode;

/// One rolled die face with its display flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledDie {
    /// The face value rolled.
    pub value: u32,
    /// Excluded from the total (advantage/disadvantage drop, or a minion 1).
    pub is_dropped: bool,
    /// The first non-dropped die of a non-minion roll. At most one per roll.
    pub is_primary: bool,
    /// Showing the maximum face for its side count.
    pub is_max_value: bool,
    /// Showing 1.
    pub is_min_value: bool,
    /// Part of a crit explosion chain. Exploding dice are never dropped.
    pub is_exploding: bool,
}

impl RolledDie {
    /// A freshly rolled die with max/min flags derived from `sides`.
    pub(crate) fn new(value: u32, sides: u32) -> Self {
        Self {
            value,
            is_max_value: value == sides,
            is_min_value: value == 1,
            ..Self::default()
        }
    }
}

/// Everything needed to evaluate one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// The base notation, e.g. `2d6+1` or a bare `+3` save bonus.
    pub notation: String,
    /// Roll mode.
    pub mode: RollMode,
    /// Extra advantage/disadvantage dice. Only meaningful outside normal mode.
    pub stack_count: u32,
    /// Whether a max-face primary die triggers an explosion chain.
    pub crit_enabled: bool,
    /// Whether this is a minion swarm attack.
    pub is_minion_attack: bool,
    /// Swarm size. Only meaningful when `is_minion_attack` is set.
    pub minion_count: u32,
}

impl RollRequest {
    /// A normal single roll of the given notation.
    pub fn new(notation: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
            mode: RollMode::Normal,
            stack_count: 1,
            crit_enabled: false,
            is_minion_attack: false,
            minion_count: 1,
        }
    }

    /// Set the roll mode.
    pub fn with_mode(mut self, mode: RollMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the advantage/disadvantage stack count (clamped to at least 1).
    pub fn with_stack_count(mut self, stack_count: u32) -> Self {
        self.stack_count = stack_count.max(1);
        self
    }

    /// Enable or disable crit explosions.
    pub fn with_crit(mut self, crit_enabled: bool) -> Self {
        self.crit_enabled = crit_enabled;
        self
    }

    /// Make this a minion attack with the given swarm size (at least 1).
    pub fn with_minions(mut self, minion_count: u32) -> Self {
        self.is_minion_attack = true;
        self.minion_count = minion_count.max(1);
        self
    }
}

/// A fully resolved roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Sum of kept dice plus the flat modifier.
    pub total: i64,
    /// The modifier as display text: `+3`, `-1`, or empty.
    pub modifier: String,
    /// Every die in display order, dropped dice included.
    pub dice: Vec<RolledDie>,
    /// Display string: `[v1, v2, ...]` with the modifier appended.
    pub breakdown: String,
    /// The original, untransformed notation.
    pub notation: String,
    /// Roll mode this was evaluated under.
    pub mode: RollMode,
    /// Stack count this was evaluated under.
    pub stack_count: u32,
    /// Whether minion swarm rules applied.
    pub is_minion_attack: bool,
    /// Swarm size used.
    pub minion_count: u32,
}

impl RollOutcome {
    /// The dice that counted towards the total, in display order.
    pub fn kept(&self) -> impl Iterator<Item = &RolledDie> {
        self.dice.iter().filter(|d| !d.is_dropped)
    }

    /// How many dice were dropped.
    pub fn dropped_count(&self) -> usize {
        self.dice.iter().filter(|d| d.is_dropped).count()
    }

    /// The primary die, if this roll has one. Minion rolls never do.
    pub fn primary(&self) -> Option<&RolledDie> {
        self.dice.iter().find(|d| d.is_primary)
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} = {}", self.notation, self.breakdown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults() {
        let req = RollRequest::new("2d6");
        assert_eq!(req.notation, "2d6");
        assert_eq!(req.mode, RollMode::Normal);
        assert_eq!(req.stack_count, 1);
        assert!(!req.crit_enabled);
        assert!(!req.is_minion_attack);
        assert_eq!(req.minion_count, 1);
    }

    #[test]
    fn builder_methods() {
        let req = RollRequest::new("1d20+3")
            .with_mode(RollMode::Advantage)
            .with_stack_count(2)
            .with_crit(true)
            .with_minions(4);
        assert_eq!(req.mode, RollMode::Advantage);
        assert_eq!(req.stack_count, 2);
        assert!(req.crit_enabled);
        assert!(req.is_minion_attack);
        assert_eq!(req.minion_count, 4);
    }

    #[test]
    fn stack_and_minions_clamped() {
        let req = RollRequest::new("2d6").with_stack_count(0).with_minions(0);
        assert_eq!(req.stack_count, 1);
        assert_eq!(req.minion_count, 1);
    }

    #[test]
    fn rolled_die_flags() {
        let max = RolledDie::new(6, 6);
        assert!(max.is_max_value);
        assert!(!max.is_min_value);

        let min = RolledDie::new(1, 6);
        assert!(min.is_min_value);
        assert!(!min.is_max_value);

        // d1: the only face is both min and max
        let d1 = RolledDie::new(1, 1);
        assert!(d1.is_max_value);
        assert!(d1.is_min_value);
    }

    #[test]
    fn outcome_helpers() {
        let outcome = RollOutcome {
            total: 9,
            modifier: "+1".to_string(),
            dice: vec![
                RolledDie {
                    value: 2,
                    is_dropped: true,
                    ..RolledDie::default()
                },
                RolledDie {
                    value: 5,
                    is_primary: true,
                    ..RolledDie::default()
                },
                RolledDie {
                    value: 3,
                    ..RolledDie::default()
                },
            ],
            breakdown: "[2, 5, 3]+1".to_string(),
            notation: "2d6+1".to_string(),
            mode: RollMode::Advantage,
            stack_count: 1,
            is_minion_attack: false,
            minion_count: 1,
        };
        assert_eq!(outcome.kept().map(|d| d.value).collect::<Vec<_>>(), [5, 3]);
        assert_eq!(outcome.dropped_count(), 1);
        assert_eq!(outcome.primary().unwrap().value, 5);
        assert_eq!(outcome.to_string(), "2d6+1: [2, 5, 3]+1 = 9");
    }
}
