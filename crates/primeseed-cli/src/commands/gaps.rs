//! Gap analysis of the canonical seed set.

use anyhow::Result;
use colored::Colorize;
use primeseed::prelude::*;

pub fn run() -> Result<()> {
    let seeds = SEED_PRIMES;

    println!("{}", "Seed Prime Gap Analysis".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Seeds: {:?}", seeds);
    println!("  Sum:   {}", seeds.iter().sum::<u64>());
    println!();

    let gaps = gap_sequence(&seeds);
    for (i, gap) in gaps.iter().enumerate() {
        println!("  {:3} - {:3} = {:3}", seeds[i + 1], seeds[i], gap);
    }
    println!();
    println!("  Gap sequence: {:?}", gaps);

    let ratios = gap_ratios(&gaps);
    println!();
    println!("{}", "Growth ratios".blue().bold());
    for (i, ratio) in ratios.iter().enumerate() {
        println!(
            "  gap[{}] / gap[{}] = {} / {} = {:.2}",
            i + 1,
            i,
            gaps[i + 1],
            gaps[i],
            ratio
        );
    }

    if let Some(t) = termination_check(&seeds) {
        println!();
        println!("{}", "Self-termination".blue().bold());
        println!(
            "  Predicted next gap: {}",
            t.next_gap.to_string().cyan()
        );
        println!(
            "  Next candidate: {} + {} = {}",
            seeds[seeds.len() - 1],
            t.next_gap,
            t.candidate.to_string().cyan()
        );
        if t.candidate_is_prime {
            println!(
                "  {} {} is prime, so the cascade would continue",
                "⚠".yellow().bold(),
                t.candidate
            );
        } else {
            if let Some((d, q)) = t.factor_pair {
                println!(
                    "  {} {} is composite: {} × {}",
                    "✓".green(),
                    t.candidate,
                    d,
                    q
                );
            }
            println!(
                "  The cascade breaks here, fixing the sequence at {} seeds",
                seeds.len().to_string().cyan()
            );
        }
    }

    Ok(())
}
