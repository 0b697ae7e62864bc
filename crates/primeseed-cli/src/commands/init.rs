//! Initialize a new primeseed project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = path
        .map(|p| Path::new(&p).to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    println!("{} Initializing primeseed project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Default config
    let config_path = base_path.join("primeseed.toml");
    if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    // Keep checkpoints out of version control
    let gitignore_path = base_path.join(".gitignore");
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, "seed_primes_checkpoint_*.json\n")?;
        println!("  {} Created {}", "✓".green(), gitignore_path.display());
    }

    println!();
    println!("{} Primeseed project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} primeseed scan --limit 10000", "1.".blue());
    println!("  {} primeseed verify", "2.".blue());
    println!("  {} primeseed gaps", "3.".blue());

    Ok(())
}
