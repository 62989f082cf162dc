use std::io::Read;

use qs_statblock::parse_text;

pub fn run(text: Option<&str>) -> Result<(), String> {
    let input = match text {
        Some(text) => text.to_string(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| e.to_string())?;
            buffer
        }
    };

    println!("{}", parse_text(input.trim_end()));
    Ok(())
}
