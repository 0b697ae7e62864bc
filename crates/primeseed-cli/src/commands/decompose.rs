//! Show decomposition witnesses for given numbers.

use anyhow::{bail, Result};
use colored::Colorize;
use primeseed::prelude::*;

pub fn run(numbers: &[u64]) -> Result<()> {
    if numbers.is_empty() {
        bail!("No numbers given. Try {}.", "primeseed decompose 13".cyan());
    }

    for &n in numbers {
        if !is_prime(n) {
            println!("{} {} is not prime", "•".yellow(), n);
            continue;
        }

        let witnesses = decompositions(n);
        if witnesses.is_empty() {
            println!(
                "{} {} is a seed prime: no decomposition a + 2b exists",
                "✓".green(),
                n.to_string().cyan()
            );
        } else if witnesses.len() == 1 {
            println!("  {} = {}", n, witnesses[0]);
        } else {
            println!(
                "  {} = {} (and {} more)",
                n,
                witnesses[0],
                witnesses.len() - 1
            );
        }
    }

    Ok(())
}
