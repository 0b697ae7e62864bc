//! Search a range for seed primes with checkpointed resumability.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use primeseed::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;

/// Default checkpoint spacing, scaled to the search limit.
fn auto_interval(limit: u64) -> u64 {
    if limit <= 1_000_000 {
        100_000
    } else if limit <= 10_000_000 {
        1_000_000
    } else {
        5_000_000
    }
}

pub fn run(limit: Option<u64>, interval: Option<u64>, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let limit = limit.unwrap_or(config.scan.limit);
    let interval = interval.unwrap_or_else(|| auto_interval(limit));

    println!("{}", "Seed Prime Search".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Limit:               {}", limit.to_string().cyan());
    println!("  Checkpoint interval: {}", interval.to_string().cyan());

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))?;

    let scanner = Scanner::new(limit, interval)
        .with_dir(&config.scan.checkpoint_dir)
        .with_cancel_flag(Arc::clone(&cancel));
    let checkpoint_file = scanner.checkpoint_file();

    if scanner.has_checkpoint() {
        println!(
            "{} Resuming from {}",
            "→".blue(),
            checkpoint_file.display().to_string().cyan()
        );
    } else if verbose {
        println!(
            "{} Checkpoints will be written to {}",
            "→".blue(),
            checkpoint_file.display()
        );
    }
    println!(
        "{} Press Ctrl-C to pause; progress is saved at every checkpoint",
        "→".blue()
    );
    println!();

    let pb = ProgressBar::new(limit);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} candidates")
            .unwrap()
            .progress_chars("#>-"),
    );

    let outcome = scanner.run(|p| {
        pb.set_position(p.current);
        pb.println(format!(
            "  checkpoint at {} ({:.1}%): {} seeds, {:.0} numbers/s, ETA {:.1} min",
            p.current,
            p.percent,
            p.seeds_found,
            p.rate,
            p.eta_secs / 60.0
        ));
    })?;

    match outcome {
        ScanOutcome::Complete { seeds } => {
            pb.finish_with_message("done");
            println!();
            println!("{} Search complete!", "✓".green().bold());
            println!("  Seed primes found: {:?}", seeds);
            if seeds == SEED_PRIMES {
                println!(
                    "  {} No seed primes beyond 167 up to {}",
                    "✓".green(),
                    limit.to_string().cyan()
                );
            } else {
                println!(
                    "  {} Unexpected seed set! Canonical list is {:?}",
                    "⚠".yellow().bold(),
                    SEED_PRIMES
                );
            }
        }
        ScanOutcome::Suspended {
            seeds,
            last_checked,
        } => {
            pb.abandon_with_message("paused");
            println!();
            println!(
                "{} Scan suspended after candidate {}",
                "•".yellow(),
                last_checked.to_string().yellow()
            );
            println!("  Seeds found so far: {:?}", seeds);
            println!(
                "  Checkpoint retained: {}",
                checkpoint_file.display().to_string().cyan()
            );
            println!("  Run {} again to resume", "primeseed scan".cyan());
        }
    }

    Ok(())
}
