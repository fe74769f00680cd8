//! Weather command - resolve and display a station record.

use std::path::Path;

use colored::Colorize;
use harrow::{Installation, WeatherResolver};

pub fn run(
    dssat: &Path,
    code: String,
    var: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let install = Installation::new(dssat);
    let resolver = WeatherResolver::new(&install, &code)?;

    if json_output {
        let mut out = serde_json::json!({
            "code": code,
            "file": resolver.path(),
        });
        match &var {
            Some(name) => {
                out["variable"] = serde_json::json!(name);
                out["values"] = serde_json::json!(resolver.get_val(name)?);
            }
            None => {
                out["variables"] = serde_json::json!(resolver.variables());
            }
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Weather record for station".cyan().bold(),
        code.white().bold()
    );
    println!("  file: {}", resolver.path().display());
    println!();

    match var {
        Some(name) => {
            let values = resolver.get_val(&name)?;
            let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
            println!("{} = {}", name.white().bold(), rendered.join(", "));
        }
        None => {
            for name in resolver.variables() {
                println!("  {}", name);
            }
        }
    }
    Ok(())
}
