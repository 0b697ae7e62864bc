//! Regenerate the primes from the canonical seeds and verify coverage.

use anyhow::Result;
use colored::Colorize;
use primeseed::prelude::*;

use crate::config::Config;

pub fn run(limit: Option<u64>, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let limit = limit.unwrap_or(config.verify.limit);

    println!("{}", "Seed Prime Generation Verification".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Seeds: {:?}", SEED_PRIMES);
    println!("  Limit: {}", limit.to_string().cyan());
    println!();

    println!("{} Generating closure...", "→".blue());
    let closure = generate(&SEED_PRIMES, limit);
    for (generation, count) in closure.generation_sizes.iter().enumerate().skip(1) {
        println!(
            "  Generation {}: {} new primes",
            generation,
            count.to_string().cyan()
        );
    }

    let report = verify(&closure.generated, limit, config.verify.missing_sample);
    println!();
    println!("{}", "Coverage".blue().bold());
    println!(
        "  Total primes up to {}: {}",
        limit,
        report.total_primes.to_string().cyan()
    );
    println!(
        "  Generated:             {}",
        report.generated_count.to_string().cyan()
    );
    println!("  Coverage:              {:.2}%", report.coverage);

    if report.is_complete() {
        println!();
        println!(
            "{} All {} primes up to {} were generated",
            "✓".green().bold(),
            report.total_primes,
            limit
        );
    } else {
        println!();
        println!(
            "{} {} primes were not generated",
            "⚠".yellow().bold(),
            report.missing_total
        );
        println!("  Missing: {:?}", report.missing);
    }

    if verbose {
        println!();
        println!("{}", "Example derivations".blue().bold());
        let derived = closure
            .generated
            .iter()
            .filter_map(|p| closure.record[p].parents.map(|(a, b)| (*p, a, b)))
            .take(10);
        for (p, a, b) in derived {
            println!(
                "  {} = {} + 2×{} (generation {})",
                p, a, b, closure.record[&p].generation
            );
        }
    }

    if report.is_complete() {
        let floor = *SEED_PRIMES.last().unwrap();
        let counts = parent_pair_counts(limit, floor);
        let unique = unique_primes(&counts);
        let hubs = hub_primes(&counts, 5);

        println!();
        println!("{}", "Generation patterns".blue().bold());
        println!(
            "  Unique primes (1 parent pair):  {}",
            unique.len().to_string().cyan()
        );
        if !unique.is_empty() {
            let sample: Vec<u64> = unique.iter().copied().take(10).collect();
            println!("    First {}: {:?}", sample.len(), sample);
        }
        println!(
            "  Hub primes (>5 parent pairs):   {}",
            hubs.len().to_string().cyan()
        );
        for (p, count) in hubs.iter().take(5) {
            println!("    {}: {} parent pairs", p, count);
        }
        println!(
            "  Maximum generation depth:       {}",
            closure.max_generation().to_string().cyan()
        );
    }

    Ok(())
}
