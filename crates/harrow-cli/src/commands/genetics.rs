//! Genetics command - resolve and display a cultivar + ecotype record.

use std::path::Path;

use colored::Colorize;
use harrow::{resolve_model, GeneticResolver, Installation};

pub fn run(
    dssat: &Path,
    crop: String,
    cultivar: String,
    model: Option<String>,
    var: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let install = Installation::new(dssat);
    let model_code = resolve_model(&crop, model.as_deref())?;
    let resolver = GeneticResolver::new(&install, model_code, &cultivar)?;

    if json_output {
        let mut out = serde_json::json!({
            "crop": crop,
            "model": model_code,
            "cultivar": cultivar,
            "cultivar_file": resolver.cultivar_path(),
            "ecotype_file": resolver.ecotype_path(),
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
        "{} {} {} {}",
        "Genetic record for".cyan().bold(),
        cultivar.white().bold(),
        "under model".cyan().bold(),
        model_code.white().bold()
    );
    println!("  cultivar file: {}", resolver.cultivar_path().display());
    match resolver.ecotype_path() {
        Some(path) => println!("  ecotype file:  {}", path.display()),
        None => println!("  ecotype file:  {}", "none".dimmed()),
    }
    println!();

    match var {
        Some(name) => {
            let values = resolver.get_val(&name)?;
            if values.is_empty() {
                println!(
                    "{} {}",
                    name.white().bold(),
                    "matches no row for this cultivar".yellow()
                );
            } else {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                println!("{} = {}", name.white().bold(), rendered.join(", "));
            }
        }
        None => {
            for name in resolver.variables() {
                println!("  {}", name);
            }
        }
    }
    Ok(())
}
