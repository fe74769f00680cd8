//! Models command - list crop codes and their simulation models.

use colored::Colorize;
use harrow::{crops, models_for, resolve_model};

pub fn run(crop: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let selected: Vec<&str> = match &crop {
        Some(code) => {
            // Surfaces UnknownCrop for codes outside the table.
            resolve_model(code, None)?;
            vec![code.as_str()]
        }
        None => crops().collect(),
    };

    if json_output {
        let entries: Vec<_> = selected
            .iter()
            .map(|code| {
                let models = models_for(code).unwrap_or_default();
                serde_json::json!({
                    "crop": code,
                    "models": models,
                    "default": models.first(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for code in selected {
        let models = models_for(code).unwrap_or_default();
        let mut rendered = Vec::with_capacity(models.len());
        for (i, model) in models.iter().enumerate() {
            if i == 0 {
                rendered.push(format!("{} {}", model.white().bold(), "(default)".dimmed()));
            } else {
                rendered.push(model.to_string());
            }
        }
        println!("{}  {}", code.cyan().bold(), rendered.join(", "));
    }
    Ok(())
}
