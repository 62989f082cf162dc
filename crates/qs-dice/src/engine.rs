//! Roll evaluation.
//!
//! `Roller` owns the RNG and turns a `RollRequest` into a `RollOutcome`:
//! transform the notation for the roll mode, roll the dice, mark drops
//! (advantage/disadvantage and minion 1s), identify the primary die, walk
//! the crit explosion chain, and render the breakdown. Evaluation never
//! fails; malformed notation degrades to a pass-through outcome.

use std::cmp::Reverse;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::notation::{DiceExpression, DropRule, RollPlan, modifier_suffix, transform_notation};
use crate::roll::{RollOutcome, RollRequest, RolledDie};

/// Safety bound on the explosion chain so a max-face-only die (d1 with
/// crits enabled) terminates. Unreachable for real dice.
const MAX_EXPLOSION_CHAIN: usize = 100;

/// Evaluates roll requests. Owns the pseudo-random source; everything
/// else is per-call state, so a `Roller` is freely reusable.
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// A roller with a fixed seed, for reproducible rolls.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Evaluate a roll request.
    pub fn roll(&mut self, request: &RollRequest) -> RollOutcome {
        let base = DiceExpression::parse(&request.notation);

        // Minion override: multiply the base die count by the swarm size
        // before the mode transform. Needs a parseable base notation.
        let minion = request.is_minion_attack && base.is_some();
        let transformed = match base.filter(|_| minion) {
            Some(expr) => {
                let Some(count) = expr.count.checked_mul(request.minion_count.max(1)) else {
                    return self.passthrough_outcome(request);
                };
                let swarm = DiceExpression { count, ..expr };
                transform_notation(&swarm.to_string(), request.mode, request.stack_count)
            }
            None => transform_notation(&request.notation, request.mode, request.stack_count),
        };

        let Some(plan) = RollPlan::parse(&transformed) else {
            // Best-effort: the literal string is returned as-is.
            return self.passthrough_outcome(request);
        };

        let mut dice: Vec<RolledDie> = (0..plan.count)
            .map(|_| RolledDie::new(self.rng.random_range(1..=plan.sides), plan.sides))
            .collect();

        mark_drops(&mut dice, plan.drop);
        if minion {
            // Swarm rule: every die showing 1 is wasted.
            for die in &mut dice {
                if die.value == 1 {
                    die.is_dropped = true;
                }
            }
        } else if let Some(pos) = dice.iter().position(|d| !d.is_dropped) {
            dice[pos].is_primary = true;
            if request.crit_enabled && dice[pos].value == plan.sides {
                self.explode(&mut dice, pos, plan.sides);
            }
        }

        let kept_sum: i64 = dice
            .iter()
            .filter(|d| !d.is_dropped)
            .map(|d| i64::from(d.value))
            .sum();

        let values: Vec<String> = dice.iter().map(|d| d.value.to_string()).collect();
        let modifier = modifier_suffix(plan.modifier);
        let breakdown = format!("[{}]{modifier}", values.join(", "));

        RollOutcome {
            total: kept_sum + i64::from(plan.modifier),
            modifier,
            dice,
            breakdown,
            notation: request.notation.clone(),
            mode: request.mode,
            stack_count: request.stack_count,
            is_minion_attack: request.is_minion_attack,
            minion_count: request.minion_count,
        }
    }

    /// Roll the explosion chain and splice it in right after the primary die.
    fn explode(&mut self, dice: &mut Vec<RolledDie>, primary_pos: usize, sides: u32) {
        let mut insert_at = primary_pos + 1;
        for _ in 0..MAX_EXPLOSION_CHAIN {
            let value = self.rng.random_range(1..=sides);
            let mut die = RolledDie::new(value, sides);
            die.is_exploding = true;
            dice.insert(insert_at, die);
            insert_at += 1;
            if value < sides {
                break;
            }
        }
    }

    fn passthrough_outcome(&self, request: &RollRequest) -> RollOutcome {
        RollOutcome {
            total: 0,
            modifier: String::new(),
            dice: Vec::new(),
            breakdown: request.notation.clone(),
            notation: request.notation.clone(),
            mode: request.mode,
            stack_count: request.stack_count,
            is_minion_attack: request.is_minion_attack,
            minion_count: request.minion_count,
        }
    }
}

/// Mark dropped dice per the drop rule. Ties are broken by roll order:
/// among equal values the earliest-rolled die is dropped first.
fn mark_drops(dice: &mut [RolledDie], rule: DropRule) {
    let (k, highest) = match rule {
        DropRule::None => return,
        DropRule::Lowest(k) => (k as usize, false),
        DropRule::Highest(k) => (k as usize, true),
    };
    let mut order: Vec<usize> = (0..dice.len()).collect();
    if highest {
        order.sort_by_key(|&i| (Reverse(dice[i].value), i));
    } else {
        order.sort_by_key(|&i| (dice[i].value, i));
    }
    for &i in order.iter().take(k.min(dice.len())) {
        dice[i].is_dropped = true;
    }
}
