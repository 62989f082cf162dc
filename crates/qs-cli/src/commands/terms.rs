use comfy_table::{ContentArrangement, Table};

use qs_statblock::GAME_TERMS;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Condition", "Description"]);

    for term in GAME_TERMS {
        table.add_row(vec![term.name, term.description]);
    }

    println!("{table}");
    println!();
    println!("  {} conditions", GAME_TERMS.len());

    Ok(())
}
