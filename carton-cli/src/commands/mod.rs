pub mod inspect;
pub mod new;
pub mod sort;

use std::io::Read;

use anyhow::Context;

/// Returns `input`, or all of stdin when it is absent or `-`.
pub fn read_input(input: Option<&str>) -> anyhow::Result<String> {
    match input {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read cartons from stdin")?;
            Ok(text)
        }
    }
}
