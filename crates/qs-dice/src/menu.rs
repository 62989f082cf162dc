//! Context-menu roll dispatch.
//!
//! The UI opens a modifier menu on right-click and tracks a single signed
//! "stack index": 0 rolls normally, +n rolls with n-stack advantage, -n
//! with n-stack disadvantage. `MenuState` is an explicit value object
//! owned by the top-level UI controller; there is no module-level
//! singleton.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::notation::{DiceExpression, RollMode, is_bare_modifier};
use crate::roll::RollRequest;

/// Trailing signed bonus of a save shorthand like `STR+2`.
static TRAILING_BONUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]\d+)\s*$").unwrap());

/// Map a signed stack index to roll mode and stack count.
///
/// Public contract: `0` is `(normal, 1)`; positive `n` is `(advantage, n)`;
/// negative `-n` is `(disadvantage, n)`.
pub fn stack_params(index: i32) -> (RollMode, u32) {
    let mode = match index {
        0 => RollMode::Normal,
        i if i > 0 => RollMode::Advantage,
        _ => RollMode::Disadvantage,
    };
    (mode, index.unsigned_abs().max(1))
}

/// State of the context menu for one anchor: where it is, what it would
/// roll, and the currently selected stack index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    /// Whether the menu is currently shown.
    pub visible: bool,
    /// Screen position the menu is anchored to.
    pub anchor: (i32, i32),
    /// The notation carried by the trigger that opened the menu.
    pub notation: String,
    /// Whether crit explosions are enabled for the roll.
    pub crit_enabled: bool,
    /// Selected stack index; see [`stack_params`].
    pub stack_index: i32,
}

impl MenuState {
    /// Open the menu for a trigger, resetting the stack index.
    pub fn open(
        &mut self,
        anchor: (i32, i32),
        notation: impl Into<String>,
        default_crit: bool,
        initial_index: i32,
    ) {
        self.visible = true;
        self.anchor = anchor;
        self.notation = notation.into();
        self.crit_enabled = default_crit;
        self.stack_index = initial_index;
    }

    /// Close the menu.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Move the stack index by a delta (scroll wheel / arrow keys).
    pub fn adjust(&mut self, delta: i32) {
        self.stack_index = self.stack_index.saturating_add(delta);
    }

    /// Build the roll request for the current selection.
    ///
    /// Save shorthand with a trailing bonus (`STR+2`) rolls as that flat
    /// bonus (`1d20+2`); shorthand with no digits (`WIL-`) falls back to
    /// a flat `1d20`.
    pub fn selected_request(&self) -> RollRequest {
        let (mode, stack_count) = stack_params(self.stack_index);
        RollRequest::new(normalize_notation(&self.notation))
            .with_mode(mode)
            .with_stack_count(stack_count)
            .with_crit(self.crit_enabled)
    }
}

/// Reduce trigger text to something the evaluator understands.
fn normalize_notation(notation: &str) -> String {
    let trimmed = notation.trim();
    if DiceExpression::parse(trimmed).is_some() || is_bare_modifier(trimmed) {
        return trimmed.to_string();
    }
    match TRAILING_BONUS_RE.captures(trimmed) {
        Some(caps) => caps[1].to_string(),
        None => "1d20".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Roller;

    #[test]
    fn stack_index_mapping() {
        assert_eq!(stack_params(0), (RollMode::Normal, 1));
        assert_eq!(stack_params(1), (RollMode::Advantage, 1));
        assert_eq!(stack_params(2), (RollMode::Advantage, 2));
        assert_eq!(stack_params(-1), (RollMode::Disadvantage, 1));
        assert_eq!(stack_params(-3), (RollMode::Disadvantage, 3));
    }

    #[test]
    fn open_and_close() {
        let mut menu = MenuState::default();
        menu.open((120, 40), "2d6+1", true, 0);
        assert!(menu.visible);
        assert_eq!(menu.anchor, (120, 40));
        assert_eq!(menu.notation, "2d6+1");
        assert!(menu.crit_enabled);

        menu.close();
        assert!(!menu.visible);
        // Notation survives close so the roll can still be executed
        assert_eq!(menu.notation, "2d6+1");
    }

    #[test]
    fn adjust_moves_stack_index() {
        let mut menu = MenuState::default();
        menu.open((0, 0), "1d20", false, 0);
        menu.adjust(2);
        menu.adjust(-3);
        assert_eq!(menu.stack_index, -1);
    }

    #[test]
    fn selected_request_maps_index() {
        let mut menu = MenuState::default();
        menu.open((0, 0), "2d6+1", true, 2);
        let request = menu.selected_request();
        assert_eq!(request.notation, "2d6+1");
        assert_eq!(request.mode, RollMode::Advantage);
        assert_eq!(request.stack_count, 2);
        assert!(request.crit_enabled);
    }

    #[test]
    fn save_shorthand_with_bonus() {
        let mut menu = MenuState::default();
        menu.open((0, 0), "STR+2", false, 0);
        let request = menu.selected_request();
        assert_eq!(request.notation, "+2");

        let outcome = Roller::new(1).roll(&request);
        assert_eq!(outcome.dice.len(), 1);
        assert_eq!(outcome.total, i64::from(outcome.dice[0].value) + 2);
    }

    #[test]
    fn save_shorthand_without_digits_falls_back_to_d20() {
        for shorthand in ["WIL-", "INT/WILL++", "nonsense"] {
            let mut menu = MenuState::default();
            menu.open((0, 0), shorthand, false, 0);
            assert_eq!(menu.selected_request().notation, "1d20");
        }
    }

    #[test]
    fn bare_modifier_kept_as_is() {
        let mut menu = MenuState::default();
        menu.open((0, 0), "-1", false, -1);
        let request = menu.selected_request();
        assert_eq!(request.notation, "-1");
        assert_eq!(request.mode, RollMode::Disadvantage);
    }
}
