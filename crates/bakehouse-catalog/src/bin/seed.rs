//! # Menu Seed Generator
//!
//! Writes the built-in house menu to a JSON file that the storefront can
//! load through `BAKEHOUSE_CATALOG_PATH`.
//!
//! ## Usage
//! ```bash
//! # Write ./menu.json
//! cargo run -p bakehouse-catalog --bin seed
//!
//! # Custom destination
//! cargo run -p bakehouse-catalog --bin seed -- --out ./data/menu.json
//!
//! # Replace an existing file
//! cargo run -p bakehouse-catalog --bin seed -- --force
//! ```

use std::env;
use std::path::PathBuf;

use bakehouse_catalog::Catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut out = PathBuf::from("./menu.json");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Bakehouse Menu Seed Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --out <PATH>   Destination file (default: ./menu.json)");
                println!("  -f, --force        Overwrite an existing file");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    println!("🌱 Bakehouse Menu Seed Generator");
    println!("================================");
    println!("Output: {}", out.display());
    println!();

    if out.exists() && !force {
        println!("⚠ {} already exists", out.display());
        println!("  Pass --force to overwrite it.");
        return Ok(());
    }

    let catalog = Catalog::default_menu()?;
    let json = catalog.to_json_pretty()?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, json)?;

    println!("✓ Wrote {} products", catalog.len());

    // Verify the file loads back cleanly
    let reloaded = Catalog::from_path(&out)?;
    println!("  Search 'cheesecake': {} results", reloaded.search("cheesecake")?.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
