//! Stabalyzer demo front end.
//!
//! Reads a scraped game-state JSON payload from a file (or stdin with
//! "-"), runs the coalition analysis, and prints the ranked order sets as
//! text or JSON. Exits 0 on success and 1 on any configuration or runtime
//! error. The production front end owns scraping and signal handling; this
//! binary exists to exercise the full pipeline end to end.

use std::io::Read;
use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use stabalyzer::eval::Priority;
use stabalyzer::protocol::{
    build_output, format_order, parse_coalitions, parse_priority, select_coalition, ScrapedGame,
};
use stabalyzer::search::{analyze, AnalysisConfig};

#[derive(Parser)]
#[command(name = "stabalyzer", about = "Diplomacy position analyzer")]
struct Cli {
    /// Path to a scraped game-state JSON payload, or "-" for stdin.
    input: String,

    /// Coalition specification, e.g. "England+France,Russia".
    #[arg(short, long)]
    coalitions: String,

    /// Coalition to optimize for (defaults to the first).
    #[arg(long)]
    optimize_for: Option<String>,

    /// Rollout depth in Movement turns.
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Search time in seconds.
    #[arg(long, default_value_t = 60)]
    time: u64,

    /// Worker threads (defaults to the CPU count).
    #[arg(long)]
    threads: Option<usize>,

    /// Base PRNG seed (defaults to the wall clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Priority adjustment, e.g. "deny England lon"; repeatable.
    #[arg(long = "priority")]
    priorities: Vec<String>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Print predicted continuations and progress.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let payload = read_input(&cli.input)?;
    let scraped = ScrapedGame::from_json(&payload).map_err(|e| e.to_string())?;
    let state = scraped.to_state().map_err(|e| e.to_string())?;

    let coalitions = parse_coalitions(&cli.coalitions).map_err(|e| e.to_string())?;
    let coalition =
        select_coalition(&coalitions, cli.optimize_for.as_deref()).map_err(|e| e.to_string())?;

    let priorities: Vec<Priority> = cli
        .priorities
        .iter()
        .map(|p| parse_priority(p).map_err(|e| e.to_string()))
        .collect::<Result<_, _>>()?;

    let threads = cli
        .threads
        .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1));
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let config = AnalysisConfig {
        max_depth: cli.depth,
        threads,
        seed,
        search_time: Duration::from_secs(cli.time),
        ..AnalysisConfig::default()
    };

    if cli.verbose {
        eprintln!(
            "analyzing {} for {} with {} threads, seed {}",
            scraped.id, coalition.name, threads, seed
        );
    }

    let report = analyze(&state, &coalition, &priorities, &config);
    let output = build_output(&report, &state);

    if cli.json {
        let json = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    if output.candidates.is_empty() {
        println!("no candidate order sets (terminal position?)");
    }
    for (candidate, ranked) in output.candidates.iter().zip(report.candidates.iter()) {
        println!(
            "#{} expected value {:.3}, confidence {:?} ({} visits, stdev {:.3})",
            candidate.rank,
            candidate.expected_value,
            candidate.confidence.level,
            candidate.confidence.visits,
            candidate.confidence.stdev,
        );
        for line in candidate.orders.iter() {
            println!("  {}", line);
        }
        if cli.verbose {
            println!("  predicted replies:");
            for (order, _) in ranked.opponent_orders.iter() {
                println!("    {}", format_order(order, &state));
            }
            for turn in candidate.predicted_turns.iter().skip(1) {
                println!(
                    "  then {} {:?} {:?}:",
                    turn.turn.year, turn.turn.season, turn.turn.phase
                );
                for line in turn.coalition_orders.iter() {
                    println!("    {}", line);
                }
            }
        }
        println!();
    }
    println!(
        "{} simulations in {} ms",
        output.total_simulations, output.elapsed_ms
    );

    Ok(())
}

fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| e.to_string())?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))
    }
}
