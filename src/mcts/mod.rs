//! Monte-Carlo Tree Search over Diplomacy turns.
//!
//! Nodes live in an arena indexed by position; children hold a parent
//! index used only for backpropagation, so no reference cycles exist. The
//! tree branches on the coalition's Movement-phase joint actions only:
//! each Movement node is seeded with a queue of sampled joint actions, and
//! Retreat/Build nodes are pass-throughs with a single auto-sampled child.
//!
//! Selection is UCT with C = sqrt(2); rollouts play every power with the
//! coherent sampler to a bounded Movement depth and return the coalition's
//! normalized fitness. Both a wall-clock deadline and a cancellation flag
//! are polled at every iteration boundary.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::adjudicate::adjudicate;
use crate::eval::{evaluate, is_terminal, Coalition, Fitness, Priority};
use crate::map::Power;
use crate::sample::{sample_all_powers, sample_joint};
use crate::state::{hash_state, GameState, Order, Phase, Turn};
use crate::table::{TranspositionEntry, TranspositionTable};

/// UCT exploration constant.
const UCT_C: f64 = std::f64::consts::SQRT_2;

/// Joint actions queued per Movement node at creation.
const JOINT_ACTIONS_PER_NODE: usize = 30;

/// Rollout scores normalize against the best non-terminal score: all 34
/// supply centers and 34 units.
const SCORE_NORMALIZATION: f64 = (34 * 1000 + 34) as f64;

/// How sure the search is about a ranked move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Labels confidence from visit count and value standard deviation.
pub fn confidence_label(visits: u64, stdev: f64) -> ConfidenceLevel {
    if visits > 1000 && stdev < 0.15 {
        ConfidenceLevel::High
    } else if visits > 500 || stdev < 0.25 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// One step of a candidate's most-visited continuation.
#[derive(Debug, Clone)]
pub struct PredictedTurn {
    /// The turn in which these orders were issued.
    pub turn: Turn,
    /// The state after they resolved.
    pub state: GameState,
    pub coalition_orders: Vec<(Order, Power)>,
    pub opponent_orders: Vec<(Order, Power)>,
}

/// A ranked candidate order set with its search statistics.
#[derive(Debug, Clone)]
pub struct RankedMove {
    pub orders: Vec<(Order, Power)>,
    pub opponent_orders: Vec<(Order, Power)>,
    /// Mean rollout value in [0, 1].
    pub expected_value: f64,
    pub visits: u64,
    pub stdev: f64,
    pub confidence: ConfidenceLevel,
    /// Fitness of the immediate successor state.
    pub fitness: Fitness,
    pub raw_score: i64,
    pub predicted_turns: Vec<PredictedTurn>,
}

struct Node {
    state: GameState,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Orders that produced this state from the parent.
    coalition_orders: Vec<(Order, Power)>,
    opponent_orders: Vec<(Order, Power)>,
    visits: u64,
    value: f64,
    value_sq: f64,
    untried: VecDeque<Vec<(Order, Power)>>,
    terminal: bool,
    hash: u64,
    depth: u32,
}

/// A single-threaded MCTS instance; one per search worker.
pub struct SearchTree {
    nodes: Vec<Node>,
    coalition: Coalition,
    priorities: Vec<Priority>,
    max_depth: usize,
    rng: SmallRng,
    pub table: TranspositionTable,
    pub simulations: u64,
}

impl SearchTree {
    pub fn new(
        state: GameState,
        coalition: Coalition,
        priorities: Vec<Priority>,
        max_depth: usize,
        seed: u64,
        table_capacity: usize,
    ) -> Self {
        let mut tree = SearchTree {
            nodes: Vec::new(),
            coalition,
            priorities,
            max_depth,
            rng: SmallRng::seed_from_u64(seed),
            table: TranspositionTable::with_capacity(table_capacity),
            simulations: 0,
        };
        tree.new_node(state, None, Vec::new(), Vec::new());
        tree
    }

    /// Runs iterations until the deadline passes or the flag is raised.
    /// Reports simulation counts through `progress` every so often.
    pub fn run(
        &mut self,
        deadline: Instant,
        cancel: &AtomicBool,
        mut progress: impl FnMut(u64),
    ) {
        const PROGRESS_STRIDE: u64 = 512;
        loop {
            if Instant::now() >= deadline || cancel.load(Ordering::Relaxed) {
                break;
            }
            self.iterate();
            if self.simulations % PROGRESS_STRIDE == 0 {
                progress(self.simulations);
            }
        }
        progress(self.simulations);
    }

    /// Runs exactly `iterations` simulations; the budgeted counterpart of
    /// [`SearchTree::run`] for reproducible comparisons.
    pub fn run_iterations(&mut self, iterations: u64) {
        for _ in 0..iterations {
            self.iterate();
        }
    }

    fn new_node(
        &mut self,
        state: GameState,
        parent: Option<usize>,
        coalition_orders: Vec<(Order, Power)>,
        opponent_orders: Vec<(Order, Power)>,
    ) -> usize {
        let hash = hash_state(&state);
        let terminal = is_terminal(&state, &self.coalition);
        let depth = parent.map(|p| self.nodes[p].depth + 1).unwrap_or(0);

        let mut untried: VecDeque<Vec<(Order, Power)>> = VecDeque::new();
        if !terminal && state.turn.phase == Phase::Movement {
            for _ in 0..JOINT_ACTIONS_PER_NODE {
                let action = sample_joint(&self.coalition.powers, &state, &mut self.rng);
                if !untried.contains(&action) {
                    untried.push_back(action);
                }
            }
        }

        let idx = self.nodes.len();
        self.nodes.push(Node {
            state,
            parent,
            children: Vec::new(),
            coalition_orders,
            opponent_orders,
            visits: 0,
            value: 0.0,
            value_sq: 0.0,
            untried,
            terminal,
            hash,
            depth,
        });
        idx
    }

    fn iterate(&mut self) {
        let selected = self.select();
        let expanded = self.expand(selected);
        let value = self.rollout(expanded);
        self.backprop(expanded, value);
        self.simulations += 1;
    }

    /// Descends by UCT until a node with unexpanded joint actions, a
    /// pass-through without its child, or a terminal node.
    fn select(&self) -> usize {
        let mut idx = 0;
        loop {
            let node = &self.nodes[idx];
            if node.terminal {
                return idx;
            }
            match node.state.turn.phase {
                Phase::Movement => {
                    if !node.untried.is_empty() || node.children.is_empty() {
                        return idx;
                    }
                    idx = self.best_uct_child(idx);
                }
                _ => {
                    if node.children.is_empty() {
                        return idx;
                    }
                    idx = node.children[0];
                }
            }
        }
    }

    fn best_uct_child(&self, idx: usize) -> usize {
        let parent_visits = self.nodes[idx].visits.max(1) as f64;
        let mut best = self.nodes[idx].children[0];
        let mut best_score = f64::NEG_INFINITY;
        for &child in self.nodes[idx].children.iter() {
            let node = &self.nodes[child];
            if node.visits == 0 {
                return child;
            }
            let mean = node.value / node.visits as f64;
            let explore = UCT_C * (parent_visits.ln() / node.visits as f64).sqrt();
            let score = mean + explore;
            if score > best_score {
                best_score = score;
                best = child;
            }
        }
        best
    }

    /// Expands one child. Movement nodes consume a queued coalition joint
    /// action composed with freshly sampled opponent orders; Retreat and
    /// Build nodes auto-sample everyone and cache a single child.
    fn expand(&mut self, idx: usize) -> usize {
        if self.nodes[idx].terminal {
            return idx;
        }
        match self.nodes[idx].state.turn.phase {
            Phase::Movement => {
                let coalition_action = match self.nodes[idx].untried.pop_front() {
                    Some(a) => a,
                    None => return idx,
                };
                let mut orders = coalition_action.clone();
                let opponents: Vec<Power> = crate::map::ALL_POWERS
                    .iter()
                    .copied()
                    .filter(|p| !self.coalition.contains(*p))
                    .collect();
                let mut opponent_orders: Vec<(Order, Power)> = Vec::new();
                {
                    let state = self.nodes[idx].state.clone();
                    for &power in opponents.iter() {
                        opponent_orders.extend(sample_joint(&[power], &state, &mut self.rng));
                    }
                }
                orders.extend(opponent_orders.iter().copied());

                let (next, _) = adjudicate(&self.nodes[idx].state, &orders);
                let child = self.new_node(next, Some(idx), coalition_action, opponent_orders);
                self.nodes[idx].children.push(child);
                child
            }
            _ => {
                if let Some(&child) = self.nodes[idx].children.first() {
                    return child;
                }
                let state = self.nodes[idx].state.clone();
                let orders = sample_all_powers(&self.coalition.powers, &state, &mut self.rng);
                let (next, _) = adjudicate(&state, &orders);
                let (ours, theirs): (Vec<_>, Vec<_>) = orders
                    .into_iter()
                    .partition(|(_, p)| self.coalition.contains(*p));
                let child = self.new_node(next, Some(idx), ours, theirs);
                self.nodes[idx].children.push(child);
                child
            }
        }
    }

    /// Random coherent play to the Movement-depth bound; returns the final
    /// state's normalized fitness.
    fn rollout(&mut self, idx: usize) -> f64 {
        let mut state = self.nodes[idx].state.clone();
        let mut movement_steps = 0;

        while movement_steps < self.max_depth {
            if is_terminal(&state, &self.coalition) {
                break;
            }
            let was_movement = state.turn.phase == Phase::Movement;
            let orders = sample_all_powers(&self.coalition.powers, &state, &mut self.rng);
            let (next, _) = adjudicate(&state, &orders);
            state = next;
            if was_movement {
                movement_steps += 1;
            }
        }

        let fitness = evaluate(&state, &self.coalition, &self.priorities);
        normalize_score(&fitness)
    }

    fn backprop(&mut self, idx: usize, value: f64) {
        let mut current = Some(idx);
        while let Some(i) = current {
            let node = &mut self.nodes[i];
            node.visits += 1;
            node.value += value;
            node.value_sq += value * value;
            self.table.put(TranspositionEntry {
                hash: node.hash,
                depth: node.depth,
                visits: node.visits,
                value: node.value,
            });
            current = node.parent;
        }
    }

    /// Ranks root children by mean value and returns the top three with
    /// their predicted continuations.
    pub fn ranked_moves(&self) -> Vec<RankedMove> {
        let mut visited: Vec<usize> = self.nodes[0]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].visits > 0)
            .collect();
        visited.sort_by(|&a, &b| {
            let mean_a = self.nodes[a].value / self.nodes[a].visits as f64;
            let mean_b = self.nodes[b].value / self.nodes[b].visits as f64;
            mean_b.partial_cmp(&mean_a).unwrap_or(std::cmp::Ordering::Equal)
        });
        visited.truncate(3);

        visited.into_iter().map(|c| self.ranked_move(c)).collect()
    }

    fn ranked_move(&self, child: usize) -> RankedMove {
        let node = &self.nodes[child];
        let mean = node.value / node.visits as f64;
        let variance = (node.value_sq / node.visits as f64 - mean * mean).max(0.0);
        let stdev = variance.sqrt();
        let fitness = evaluate(&node.state, &self.coalition, &self.priorities);

        RankedMove {
            orders: node.coalition_orders.clone(),
            opponent_orders: node.opponent_orders.clone(),
            expected_value: mean,
            visits: node.visits,
            stdev,
            confidence: confidence_label(node.visits, stdev),
            fitness,
            raw_score: fitness.score,
            predicted_turns: self.predicted_trail(child),
        }
    }

    /// Follows the most-visited child chain, emitting one entry per step
    /// that resolved a Movement turn.
    fn predicted_trail(&self, from: usize) -> Vec<PredictedTurn> {
        let mut trail = Vec::new();
        let mut idx = from;
        loop {
            let node = &self.nodes[idx];
            if let Some(parent) = node.parent {
                if self.nodes[parent].state.turn.phase == Phase::Movement {
                    trail.push(PredictedTurn {
                        turn: self.nodes[parent].state.turn,
                        state: node.state.clone(),
                        coalition_orders: node.coalition_orders.clone(),
                        opponent_orders: node.opponent_orders.clone(),
                    });
                }
            }
            let next = node
                .children
                .iter()
                .copied()
                .filter(|&c| self.nodes[c].visits > 0)
                .max_by_key(|&c| self.nodes[c].visits);
            match next {
                Some(n) => idx = n,
                None => break,
            }
        }
        trail
    }
}

/// Maps a fitness onto [0, 1]: wins saturate at 1, terminal losses at 0.
pub fn normalize_score(fitness: &Fitness) -> f64 {
    if fitness.win {
        return 1.0;
    }
    if fitness.terminal_loss {
        return 0.0;
    }
    (fitness.score as f64 / SCORE_NORMALIZATION).clamp(0.0, 1.0)
}
