//! Example: resolve the genetic and weather records of one treatment.
//!
//! Usage:
//!   cargo run --example resolve -- <dssat_root> <crop> <cultivar> <station>
//!
//! Example:
//!   cargo run --example resolve -- /opt/DSSAT48 MZ IB0001 UFGA

use std::env;
use std::path::Path;

use harrow::{GeneticRegistry, Installation, WeatherRegistry};

fn main() -> harrow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 5 {
        eprintln!("Usage: cargo run --example resolve -- <dssat_root> <crop> <cultivar> <station>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example resolve -- /opt/DSSAT48 MZ IB0001 UFGA");
        std::process::exit(1);
    }

    let root = Path::new(&args[1]);
    let (crop, cultivar, station) = (&args[2], &args[3], &args[4]);

    if !root.is_dir() {
        eprintln!("Error: Not a directory: {}", root.display());
        std::process::exit(1);
    }

    let install = Installation::new(root);
    let genetics = GeneticRegistry::new(&install, &[crop], &[cultivar], &["T1"], None)?;
    let weather = WeatherRegistry::new(&install, &[station], &["T1"])?;

    let resolver = genetics.resolver("T1")?;
    println!("## Genetic record");
    println!("  Model: {}", resolver.model());
    println!("  Cultivar file: {}", resolver.cultivar_path().display());
    match resolver.ecotype_path() {
        Some(path) => println!("  Ecotype file: {}", path.display()),
        None => println!("  Ecotype file: none"),
    }
    for var in genetics.variables() {
        let values = genetics.get_val(&var, "T1")?;
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        println!("  {:8} = {}", var, rendered.join(", "));
    }
    println!();

    println!("## Weather record");
    println!("  File: {}", weather.resolver("T1")?.path().display());
    for var in weather.variables() {
        let n = weather.get_val(&var, "T1")?.len();
        println!("  {:8} ({} values)", var, n);
    }

    Ok(())
}
