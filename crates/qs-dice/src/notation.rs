//! Dice notation parsing and roll-mode transforms.
//!
//! A notation is a string like `2d6`, `1d20+3`, or `4d8-1`. Roll modes
//! rewrite it into a dice-algebra form with drop suffixes: advantage adds
//! extra dice and drops the lowest (`3d20dl1+3`), disadvantage drops the
//! highest (`3d20dh1+3`). A bare modifier token such as `+2` is a flat
//! ability bonus and is reinterpreted as a d20 roll.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DiceError;

static NOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[dD](\d+)(?:\s*([+-])\s*(\d+))?$").unwrap());

static PLAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)[dD](\d+)(?:d([lh])(\d+))?(?:\s*([+-])\s*(\d+))?$").unwrap()
});

/// Largest accepted die count. Keeps the evaluator's arithmetic and
/// allocations bounded; anything above is treated as unrecognized.
pub const MAX_DICE: u32 = 10_000;

/// Largest accepted side count.
pub const MAX_SIDES: u32 = 10_000;

/// A parsed dice notation: `count` dice of `sides` sides plus a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpression {
    /// Number of dice to roll (at least 1).
    pub count: u32,
    /// Sides per die (at least 1).
    pub sides: u32,
    /// Flat modifier added to the total; 0 means no modifier.
    pub modifier: i32,
}

impl DiceExpression {
    /// Parse a notation like `2d6+1`. Returns `None` for anything that is
    /// not a whole-string `NdS[+-M]` match, has a zero count or sides, or
    /// exceeds [`MAX_DICE`]/[`MAX_SIDES`].
    pub fn parse(notation: &str) -> Option<Self> {
        let caps = NOTATION_RE.captures(notation.trim())?;
        let count: u32 = caps[1].parse().ok()?;
        let sides: u32 = caps[2].parse().ok()?;
        if count == 0 || sides == 0 || count > MAX_DICE || sides > MAX_SIDES {
            return None;
        }
        let modifier = parse_modifier(caps.get(3), caps.get(4))?;
        Some(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d{}{}",
            self.count,
            self.sides,
            modifier_suffix(self.modifier)
        )
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DiceError::InvalidNotation(s.to_string()))
    }
}

/// How a roll is made: straight, or with extra dice dropped low or high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollMode {
    /// Roll the notation as written.
    #[default]
    Normal,
    /// Roll extra dice and drop the lowest.
    Advantage,
    /// Roll extra dice and drop the highest.
    Disadvantage,
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

impl FromStr for RollMode {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "n" => Ok(Self::Normal),
            "advantage" | "adv" | "a" => Ok(Self::Advantage),
            "disadvantage" | "dis" | "d" => Ok(Self::Disadvantage),
            other => Err(DiceError::InvalidMode(other.to_string())),
        }
    }
}

/// Which rolled dice are discarded before summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DropRule {
    /// Keep every die.
    #[default]
    None,
    /// Drop the lowest `n` dice (advantage).
    Lowest(u32),
    /// Drop the highest `n` dice (disadvantage).
    Highest(u32),
}

/// A fully transformed roll: the parsed form of `NdS(dlK|dhK)[+-M]` algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollPlan {
    /// Total dice to roll, extra advantage/disadvantage dice included.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Drop rule applied after rolling.
    pub drop: DropRule,
    /// Flat modifier added to the kept sum.
    pub modifier: i32,
}

impl RollPlan {
    /// Parse transformed algebra like `3d20dl1+3`. Returns `None` for
    /// anything malformed, zero-count, zero-sided, or beyond
    /// [`MAX_DICE`]/[`MAX_SIDES`].
    pub fn parse(algebra: &str) -> Option<Self> {
        let caps = PLAN_RE.captures(algebra.trim())?;
        let count: u32 = caps[1].parse().ok()?;
        let sides: u32 = caps[2].parse().ok()?;
        if count == 0 || sides == 0 || count > MAX_DICE || sides > MAX_SIDES {
            return None;
        }
        let drop = match (caps.get(3), caps.get(4)) {
            (Some(dir), Some(n)) => {
                let n: u32 = n.as_str().parse().ok()?;
                if dir.as_str() == "l" {
                    DropRule::Lowest(n)
                } else {
                    DropRule::Highest(n)
                }
            }
            _ => DropRule::None,
        };
        let modifier = parse_modifier(caps.get(5), caps.get(6))?;
        Some(Self {
            count,
            sides,
            drop,
            modifier,
        })
    }
}

/// True if the token is a flat ability bonus like `+3` or `-1`.
pub(crate) fn is_bare_modifier(token: &str) -> bool {
    token.starts_with('+') || token.starts_with('-')
}

/// Render a modifier as a notation suffix: `+3`, `-1`, or empty for 0.
pub(crate) fn modifier_suffix(modifier: i32) -> String {
    match modifier {
        0 => String::new(),
        m if m > 0 => format!("+{m}"),
        m => m.to_string(),
    }
}

fn parse_modifier(sign: Option<regex::Match<'_>>, digits: Option<regex::Match<'_>>) -> Option<i32> {
    match (sign, digits) {
        (Some(sign), Some(digits)) => {
            let magnitude: i32 = digits.as_str().parse().ok()?;
            if sign.as_str() == "-" {
                Some(-magnitude)
            } else {
                Some(magnitude)
            }
        }
        _ => Some(0),
    }
}

/// Rewrite a notation for the given roll mode. This is a pure function:
///
/// - `normal`: bare modifiers become `1d20+N`; everything else is unchanged.
/// - `advantage`: `NdS+M` becomes `(N+stack)dS` with `dl{stack}`; a bare
///   modifier becomes `(1+stack)d20dl{stack}+N`.
/// - `disadvantage`: same with `dh{stack}` (drop highest).
///
/// Input that is neither a dice notation nor a bare modifier is returned
/// unchanged in every mode, as is input whose die count would overflow
/// once the stack is added.
pub fn transform_notation(notation: &str, mode: RollMode, stack_count: u32) -> String {
    let trimmed = notation.trim();
    let stack = stack_count.max(1);

    let drop_suffix = match mode {
        RollMode::Normal => {
            return if is_bare_modifier(trimmed) {
                format!("1d20{trimmed}")
            } else {
                notation.to_string()
            };
        }
        RollMode::Advantage => "dl",
        RollMode::Disadvantage => "dh",
    };

    if is_bare_modifier(trimmed) {
        return match 1u32.checked_add(stack) {
            Some(total) => format!("{total}d20{drop_suffix}{stack}{trimmed}"),
            None => notation.to_string(),
        };
    }

    match DiceExpression::parse(trimmed).and_then(|expr| {
        let total = expr.count.checked_add(stack)?;
        Some((expr, total))
    }) {
        Some((expr, total)) => format!(
            "{total}d{}{drop_suffix}{stack}{}",
            expr.sides,
            modifier_suffix(expr.modifier)
        ),
        None => notation.to_string(),
    }
}
