//! Parallel search coordination.
//!
//! Fans the analysis out across independent worker threads — each with its
//! own tree, RNG, and transposition table — and merges their ranked moves
//! by canonical order-set fingerprint. Workers communicate with the
//! coordinator only through a channel; a panicking worker is logged and
//! its contribution skipped. The merge is associative and commutative
//! (visit sums and visit-weighted means), so the final ranking does not
//! depend on completion order.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;
use log::{debug, error};

use crate::eval::{Coalition, Priority};
use crate::map::Power;
use crate::mcts::{confidence_label, RankedMove, SearchTree};
use crate::state::{GameState, Order};
use crate::table::TranspositionTable;

/// Offset between consecutive worker seeds.
const WORKER_SEED_STRIDE: u64 = 7919;

/// Configuration for one analysis run.
#[derive(Clone)]
pub struct AnalysisConfig {
    /// Rollout depth in Movement turns.
    pub max_depth: usize,
    /// Worker count; 1 runs on the calling thread.
    pub threads: usize,
    pub seed: u64,
    pub search_time: Duration,
    /// Cooperative cancellation, polled at iteration boundaries.
    pub cancel: Option<Arc<AtomicBool>>,
    /// Invoked with cumulative simulation counts while workers run.
    pub progress: Option<Arc<dyn Fn(u64) + Send + Sync>>,
    pub table_capacity: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            max_depth: 4,
            threads: 1,
            seed: 0,
            search_time: Duration::from_secs(60),
            cancel: None,
            progress: None,
            table_capacity: crate::table::DEFAULT_CAPACITY,
        }
    }
}

/// The merged outcome of an analysis run.
pub struct AnalysisReport {
    /// At most three candidates, best first.
    pub candidates: Vec<RankedMove>,
    pub total_simulations: u64,
    pub elapsed_ms: u64,
    /// Merged transposition statistics from every worker.
    pub table: TranspositionTable,
}

enum WorkerMessage {
    Progress(u64),
    Result {
        ranked: Vec<RankedMove>,
        table: TranspositionTable,
        simulations: u64,
    },
    Failed(usize),
}

/// Searches the state for the coalition and returns the merged ranking.
pub fn analyze(
    state: &GameState,
    coalition: &Coalition,
    priorities: &[Priority],
    config: &AnalysisConfig,
) -> AnalysisReport {
    let started = Instant::now();
    let deadline = started + config.search_time;
    let cancel = config
        .cancel
        .clone()
        .unwrap_or_else(|| Arc::new(AtomicBool::new(false)));

    let mut worker_results: Vec<(Vec<RankedMove>, TranspositionTable, u64)> = Vec::new();

    if config.threads <= 1 {
        let mut tree = SearchTree::new(
            state.clone(),
            coalition.clone(),
            priorities.to_vec(),
            config.max_depth,
            config.seed,
            config.table_capacity,
        );
        let progress = config.progress.clone();
        tree.run(deadline, &cancel, |n| {
            if let Some(cb) = progress.as_ref() {
                cb(n);
            }
        });
        worker_results.push((tree.ranked_moves(), tree.table, tree.simulations));
    } else {
        let (sender, receiver) = unbounded::<WorkerMessage>();

        std::thread::scope(|scope| {
            for worker in 0..config.threads {
                let sender = sender.clone();
                let cancel = Arc::clone(&cancel);
                let state = state.clone();
                let coalition = coalition.clone();
                let priorities = priorities.to_vec();
                let seed = config.seed + worker as u64 * WORKER_SEED_STRIDE;
                let max_depth = config.max_depth;
                let table_capacity = config.table_capacity;

                scope.spawn(move || {
                    let outcome = catch_unwind(AssertUnwindSafe(|| {
                        let mut tree = SearchTree::new(
                            state,
                            coalition,
                            priorities,
                            max_depth,
                            seed,
                            table_capacity,
                        );
                        tree.run(deadline, &cancel, |n| {
                            let _ = sender.send(WorkerMessage::Progress(n));
                        });
                        (tree.ranked_moves(), tree.table, tree.simulations)
                    }));
                    let message = match outcome {
                        Ok((ranked, table, simulations)) => {
                            WorkerMessage::Result { ranked, table, simulations }
                        }
                        Err(_) => WorkerMessage::Failed(worker),
                    };
                    let _ = sender.send(message);
                });
            }
            drop(sender);

            let mut finished = 0;
            let mut progress_peak = 0u64;
            while finished < config.threads {
                match receiver.recv() {
                    Ok(WorkerMessage::Progress(n)) => {
                        // Workers report their own absolute counts; surface
                        // the largest as a coarse liveness signal.
                        progress_peak = progress_peak.max(n);
                        if let Some(cb) = config.progress.as_ref() {
                            cb(progress_peak);
                        }
                    }
                    Ok(WorkerMessage::Result { ranked, table, simulations }) => {
                        worker_results.push((ranked, table, simulations));
                        finished += 1;
                    }
                    Ok(WorkerMessage::Failed(worker)) => {
                        error!("search worker {} panicked; discarding its results", worker);
                        finished += 1;
                    }
                    Err(_) => break,
                }
            }
        });
    }

    let total_simulations: u64 = worker_results.iter().map(|r| r.2).sum();
    let mut table = TranspositionTable::with_capacity(config.table_capacity);
    for (_, worker_table, _) in worker_results.iter() {
        table.merge(worker_table);
    }
    debug!(
        "merged {} worker result sets, {} simulations",
        worker_results.len(),
        total_simulations
    );

    let candidates = merge_rankings(worker_results.into_iter().map(|r| r.0).collect());

    AnalysisReport {
        candidates,
        total_simulations,
        elapsed_ms: started.elapsed().as_millis() as u64,
        table,
    }
}

/// A canonical fingerprint of a coalition order set: one token per order,
/// region pairs in fixed shapes, tokens sorted.
pub fn fingerprint(orders: &[(Order, Power)]) -> String {
    let mut tokens: Vec<String> = orders.iter().map(|(o, _)| order_token(o)).collect();
    tokens.sort();
    tokens.join(";")
}

fn order_token(order: &Order) -> String {
    match *order {
        Order::Hold { unit } => format!("h:{}", unit.region.tag()),
        Order::Move { unit, dest, via_convoy } => format!(
            "m:{}-{}{}",
            unit.region.tag(),
            dest.region.tag(),
            if via_convoy { "~c" } else { "" }
        ),
        Order::Support { unit, supported, dest } => format!(
            "s:{}:{}-{}",
            unit.region.tag(),
            supported.region.tag(),
            dest.region.tag()
        ),
        Order::Convoy { unit, army, dest } => format!(
            "c:{}:{}-{}",
            unit.region.tag(),
            army.region.tag(),
            dest.region.tag()
        ),
        Order::Retreat { unit, dest } => {
            format!("r:{}-{}", unit.region.tag(), dest.region.tag())
        }
        Order::Disband { unit } => format!("d:{}", unit.region.tag()),
        Order::Build { kind, location, .. } => format!(
            "b:{}:{}",
            kind.letter().to_ascii_lowercase(),
            location.region.tag()
        ),
        Order::Waive { power } => format!("w:{}", power.name()),
    }
}

/// Merges per-worker rankings: matching fingerprints sum visits, average
/// expected value by visits, keep the best immediate score, average the
/// standard deviations, and re-label confidence from merged visits.
fn merge_rankings(rankings: Vec<Vec<RankedMove>>) -> Vec<RankedMove> {
    struct Merged {
        best: RankedMove,
        visits: u64,
        weighted_value: f64,
        stdev_sum: f64,
        contributions: u32,
        raw_score: i64,
    }

    let mut merged: Vec<(String, Merged)> = Vec::new();

    for ranking in rankings {
        for candidate in ranking {
            let key = fingerprint(&candidate.orders);
            match merged.iter_mut().find(|(k, _)| *k == key) {
                Some((_, entry)) => {
                    entry.visits += candidate.visits;
                    entry.weighted_value += candidate.expected_value * candidate.visits as f64;
                    entry.stdev_sum += candidate.stdev;
                    entry.contributions += 1;
                    entry.raw_score = entry.raw_score.max(candidate.raw_score);
                    if candidate.visits > entry.best.visits {
                        entry.best = candidate;
                    }
                }
                None => {
                    let entry = Merged {
                        visits: candidate.visits,
                        weighted_value: candidate.expected_value * candidate.visits as f64,
                        stdev_sum: candidate.stdev,
                        contributions: 1,
                        raw_score: candidate.raw_score,
                        best: candidate,
                    };
                    merged.push((key, entry));
                }
            }
        }
    }

    let mut candidates: Vec<RankedMove> = merged
        .into_iter()
        .map(|(_, entry)| {
            let mut candidate = entry.best;
            candidate.visits = entry.visits;
            candidate.expected_value = if entry.visits > 0 {
                entry.weighted_value / entry.visits as f64
            } else {
                0.0
            };
            candidate.stdev = entry.stdev_sum / entry.contributions as f64;
            candidate.raw_score = entry.raw_score;
            candidate.confidence = confidence_label(candidate.visits, candidate.stdev);
            candidate
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.expected_value
            .partial_cmp(&a.expected_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(3);
    candidates
}
