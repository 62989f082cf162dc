use colored::Colorize;

use qs_dice::{RollMode, RollRequest, RolledDie, Roller};

pub fn run(
    notation: &str,
    mode: &str,
    stack: u32,
    crit: bool,
    minions: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mode: RollMode = mode.parse().map_err(|e| format!("{e}"))?;

    let mut request = RollRequest::new(notation)
        .with_mode(mode)
        .with_stack_count(stack)
        .with_crit(crit);
    if minions > 1 {
        request = request.with_minions(minions);
    }

    let mut roller = match seed {
        Some(seed) => Roller::new(seed),
        None => Roller::from_entropy(),
    };
    let outcome = roller.roll(&request);

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!("  {} {}", "Rolling".bold(), outcome.notation);
    if mode != RollMode::Normal {
        println!("  Mode: {mode} x{}", outcome.stack_count);
    }
    if outcome.is_minion_attack {
        println!("  Minions: {}", outcome.minion_count);
    }

    if outcome.dice.is_empty() {
        // Pass-through for notation the evaluator does not recognize
        println!("  {}", outcome.breakdown);
        return Ok(());
    }

    let faces: Vec<String> = outcome.dice.iter().map(render_die).collect();
    println!("  [{}]{}", faces.join(", "), outcome.modifier);
    println!("  Total: {}", outcome.total.to_string().bold());

    Ok(())
}

fn render_die(die: &RolledDie) -> String {
    let face = die.value.to_string();
    if die.is_dropped {
        return face.dimmed().strikethrough().to_string();
    }
    if die.is_exploding {
        return face.yellow().to_string();
    }
    if die.is_max_value {
        return face.green().to_string();
    }
    if die.is_min_value {
        return face.red().to_string();
    }
    face
}
