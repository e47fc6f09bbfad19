//! Cycles Binary
//!
//! Prints how many applications of each deterministic shuffle restore decks
//! across a range of sizes.
//!
//! Options: --min, --max, --shuffle, --budget, --seed

use clap::Parser;
use riffle::*;

#[derive(Parser, Debug)]
#[command(about = "Count shuffles needed to restore decks of each size")]
struct Args {
    /// Smallest deck size to report
    #[arg(long, default_value_t = MIN_DECK_SIZE)]
    min: usize,
    /// Largest deck size to report
    #[arg(long, default_value_t = STANDARD_DECK_SIZE)]
    max: usize,
    /// Restrict to one shuffle (stl, fy, out, in, inv-out, inv-in)
    #[arg(long)]
    shuffle: Option<Shuffle>,
    /// Give up on a deck after this many shuffles
    #[arg(long, default_value_t = RESTORE_BUDGET)]
    budget: usize,
    /// Seed for the random kinds
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    if args.min < MIN_DECK_SIZE || args.min > args.max {
        return Err(anyhow::anyhow!(
            "invalid size range {}..={} (minimum {})",
            args.min,
            args.max,
            MIN_DECK_SIZE
        ));
    }
    let shuffles = match args.shuffle {
        Some(shuffle) => vec![shuffle],
        None => Shuffle::all()
            .iter()
            .copied()
            .filter(|s| !s.is_random())
            .collect::<Vec<_>>(),
    };
    let mut shuffler = args
        .seed
        .map(Shuffler::<usize>::seeded)
        .unwrap_or_default();
    log::info!(
        "{:<8}{}",
        "size",
        shuffles.iter().map(|s| format!("{:>10}", s.to_string())).collect::<String>()
    );
    for size in args.min..=args.max {
        shuffler.generate(size);
        let counts = shuffles
            .iter()
            .map(|s| shuffler.restore_within(*s, args.budget))
            .collect::<anyhow::Result<Vec<usize>>>()?;
        log::info!(
            "{:<8}{}",
            size,
            counts.iter().map(|c| format!("{:>10}", c)).collect::<String>()
        );
    }
    Ok(())
}
