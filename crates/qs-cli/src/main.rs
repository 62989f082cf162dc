//! CLI frontend for the Quasit statblock dice companion.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quasit",
    about = "Quasit — statblock dice companion",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a dice notation like 2d6+1
    Roll {
        /// Dice notation (NdS+M), or a bare save bonus like +3
        notation: String,

        /// Roll mode: normal, advantage, or disadvantage
        #[arg(short, long, default_value = "normal")]
        mode: String,

        /// Extra advantage/disadvantage dice
        #[arg(long, default_value = "1")]
        stack: u32,

        /// Explode the primary die on a max face
        #[arg(long)]
        crit: bool,

        /// Roll as a minion swarm of this size
        #[arg(long, default_value = "1")]
        minions: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite statblock text into interactive markup
    Parse {
        /// Text to rewrite (reads stdin when omitted)
        text: Option<String>,
    },

    /// List the condition tooltip vocabulary
    Terms,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            notation,
            mode,
            stack,
            crit,
            minions,
            seed,
            json,
        } => commands::roll::run(&notation, &mode, stack, crit, minions, seed, json),
        Commands::Parse { text } => commands::parse::run(text.as_deref()),
        Commands::Terms => commands::terms::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
