//! seed-runner: headless generator for Vietnamese seed data.
//!
//! Usage:
//!   seed-runner --seed 42 --kind customers --count 20
//!   seed-runner --seed 42 --kind reviews --count 100 --seller seller-123
//!   seed-runner --seed 42 --kind timestamps --count 50 --months 6
//!   seed-runner --config data/seed_config.json --kind reviews
//!   seed-runner --seed 42 --now 2025-03-01T09:00:00Z --kind reviews
//!   seed-runner --seed 42 --ipc-mode
//!
//! Records go to stdout as one JSON object per line; the summary goes to
//! stderr so stdout can be piped straight into an importer.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use seedgen_core::{
    batch::{tier_counts, to_json_lines, QualityDistribution},
    config::GeneratorConfig,
    customer_generator::{CustomerBatchPreferences, CustomerPreferences},
    engine::SeedEngine,
    review_generator::{ReviewOptions, ReviewRequest},
};
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Customer {
        #[serde(default)]
        preferences: CustomerPreferences,
    },
    Customers {
        count: usize,
        #[serde(default)]
        preferences: CustomerBatchPreferences,
    },
    Review {
        seller_id: String,
        tier: String,
        #[serde(default)]
        category: String,
        #[serde(default)]
        region: String,
        #[serde(default)]
        options: ReviewOptions,
    },
    SellerReviews {
        seller_id: String,
        count: usize,
        #[serde(default)]
        distribution: Option<QualityDistribution>,
        #[serde(default)]
        options: ReviewOptions,
    },
    Timestamps {
        count: usize,
        #[serde(default = "default_months")]
        months: u32,
    },
    Quit,
}

fn default_months() -> u32 {
    6
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match find_arg(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default_test(),
    };
    let seed = parse_arg(&args, "--seed", config.seed);
    let months = parse_arg(&args, "--months", config.timestamp_period_months);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let kind = find_arg(&args, "--kind").unwrap_or("reviews");
    let seller = find_arg(&args, "--seller").unwrap_or(config.seller_id.as_str());

    let mut engine = match find_arg(&args, "--now") {
        Some(now) => {
            let now: DateTime<Utc> = now
                .parse()
                .map_err(|e| anyhow::anyhow!("Cannot parse --now '{now}': {e}"))?;
            SeedEngine::build_at(seed, now)
        }
        None => SeedEngine::build(seed),
    };
    if ipc_mode {
        return run_ipc_loop(&mut engine);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match kind {
        "customers" => {
            let count = parse_arg(&args, "--count", config.customer_count);
            let customers =
                engine.generate_vietnamese_customers(count, &config.customer_preferences)?;
            write_lines(&mut out, &customers)?;
            eprintln!("seed-runner: {} customers (seed {seed})", customers.len());
        }
        "reviews" => {
            let count = parse_arg(&args, "--count", config.review_count);
            let mut reviews = engine.generate_seller_reviews(
                seller,
                count,
                Some(&config.quality_distribution),
                &ReviewOptions::default(),
            )?;
            engine.backdate_reviews(&mut reviews, months)?;
            write_lines(&mut out, &reviews)?;
            eprintln!("seed-runner: {} reviews for {seller} (seed {seed})", reviews.len());
            for (tier, n) in tier_counts(&reviews) {
                eprintln!("  {:<10} {n}", tier.key());
            }
        }
        "timestamps" => {
            let count = parse_arg(&args, "--count", config.review_count);
            let stamps = engine.generate_review_timestamps(count, months)?;
            write_lines(&mut out, &stamps)?;
            eprintln!("seed-runner: {} timestamps over {months} months", stamps.len());
        }
        other => bail!("unknown --kind '{other}' (expected customers, reviews or timestamps)"),
    }
    out.flush()?;
    Ok(())
}

/// One JSON request per stdin line, one JSON response per stdout line.
/// Malformed requests and generation errors are reported inline.
fn run_ipc_loop(engine: &mut SeedEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                stdout.flush()?;
                continue;
            }
        };
        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        let response = match handle_command(engine, cmd) {
            Ok(value) => value,
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(engine: &mut SeedEngine, cmd: IpcCommand) -> Result<serde_json::Value> {
    let value = match cmd {
        IpcCommand::Customer { preferences } => {
            serde_json::to_value(engine.generate_vietnamese_customer(&preferences)?)?
        }
        IpcCommand::Customers { count, preferences } => {
            serde_json::to_value(engine.generate_vietnamese_customers(count, &preferences)?)?
        }
        IpcCommand::Review { seller_id, tier, category, region, options } => {
            let request =
                ReviewRequest::from_keys(seller_id, &tier, &category, &region)?.with_options(options);
            serde_json::to_value(engine.generate_vietnamese_review(&request)?)?
        }
        IpcCommand::SellerReviews { seller_id, count, distribution, options } => serde_json::to_value(
            engine.generate_seller_reviews(&seller_id, count, distribution.as_ref(), &options)?,
        )?,
        IpcCommand::Timestamps { count, months } => {
            serde_json::to_value(engine.generate_review_timestamps(count, months)?)?
        }
        IpcCommand::Quit => serde_json::Value::Null,
    };
    Ok(value)
}

fn write_lines<T: Serialize>(out: &mut impl Write, records: &[T]) -> Result<()> {
    out.write_all(to_json_lines(records)?.as_bytes())?;
    Ok(())
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
