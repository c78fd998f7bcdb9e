//! Runs one search per worker and reduces their reports to a single verdict.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::partition::Partition;
use crate::solve_puzzle::{solve_puzzle, SearchOutcome};
use crate::solver_data::SolverData;
use crate::structs::WorkerReport;
use crate::termination::{
    any_solved, mailboxes, select_winner, Cancellation, Mailbox, Peers, WorkerLink,
};
use log::{debug, info};
use rayon::prelude::*;
use std::process::ExitCode;
use std::time::Instant;
use thousands::Separable;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub corners: usize,
    pub active_workers: usize,
    /// One report per rank, in rank order.
    pub reports: Vec<WorkerReport>,
    pub winner: Option<usize>,
}

impl RunOutcome {
    pub fn solved(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winning_report(&self) -> Option<&WorkerReport> {
        self.winner.and_then(|rank| self.reports.get(rank))
    }

    pub fn total_steps(&self) -> u64 {
        self.reports.iter().map(|r| r.steps).sum()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.solved() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

pub fn solve(data: &SolverData, config: &SolverConfig) -> Result<RunOutcome> {
    let workers = config.workers.max(1);
    let partition = Partition::new(workers, data.corners().len(), config.all_corners);

    if data.corners().is_empty() {
        info!("No corner tiles found, the puzzle cannot be solved");
        return Ok(reduce(&partition, (0..workers).map(WorkerReport::idle).collect()));
    }

    info!(
        "Solving with {} workers ({} active for {} corners)",
        workers,
        partition.active_workers(),
        data.corners().len()
    );

    let (peers, boxes) = mailboxes(workers);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("worker-{i}"))
        .build()?;

    let reports: Vec<WorkerReport> = pool.install(|| {
        boxes
            .into_par_iter()
            .map(|mailbox| run_worker(data, &partition, config, mailbox, &peers))
            .collect()
    });

    let outcome = reduce(&partition, reports);
    match outcome.winner {
        Some(rank) => info!(
            "Worker {rank} owns the solution, {} steps in total",
            outcome.total_steps().separate_with_commas()
        ),
        None => info!(
            "No solution, {} steps in total",
            outcome.total_steps().separate_with_commas()
        ),
    }
    Ok(outcome)
}

/// One worker's whole life: search its corners until it solves one, is told to stop, or runs out.
///
/// The mailbox is dropped on return, so notices sent afterwards are discarded.
pub fn run_worker(
    data: &SolverData,
    partition: &Partition,
    config: &SolverConfig,
    mailbox: Mailbox,
    peers: &Peers,
) -> WorkerReport {
    let rank = mailbox.rank();
    let schedule = partition.schedule(rank);
    if schedule.is_empty() {
        debug!("Worker {rank}: idle");
        return WorkerReport::idle(rank);
    }

    let stopwatch = Instant::now();
    let mut link = WorkerLink::new(mailbox, peers);
    let mut steps: u64 = 0;
    let mut corners_tried = 0;
    let mut placements = None;

    for corner_index in schedule {
        // The mailbox is only polled between corners and inside the search.
        if link.is_stopped() || (corners_tried > 0 && link.poll()) {
            break;
        }

        let corner = data.corners()[corner_index];
        debug!(
            "Worker {rank}: start from tile {} in corner {} (rotation {})",
            corner.tile_id, corner.corner_type, corner.rotation
        );

        let mut puzzle = data.seeded_puzzle(corner_index);
        let result = solve_puzzle(&mut puzzle, &mut link, config.check_interval);
        steps += result.steps;
        corners_tried += 1;

        debug!(
            "Worker {rank}: {:?} after {} steps",
            result.outcome,
            result.steps.separate_with_commas()
        );

        match result.outcome {
            SearchOutcome::Solved => {
                debug!("Worker {rank}: solved, notified {} peers", link.notices_sent());
                placements = puzzle.placements();
                break;
            }
            SearchOutcome::Stopped => break,
            SearchOutcome::Exhausted => {}
        }
    }

    if let (true, Some(owner)) = (link.peer_found(), link.solution_owner()) {
        debug!("Worker {rank}: stopped early, worker {owner} found a solution");
    }

    WorkerReport {
        rank,
        active: true,
        solved: link.solved(),
        corners_tried,
        steps,
        solution_owner: link.solution_owner(),
        placements,
        elapsed: stopwatch.elapsed(),
    }
}

/// Barrier-side reductions: did anyone solve it, and which rank reports it.
pub fn reduce(partition: &Partition, reports: Vec<WorkerReport>) -> RunOutcome {
    let winner = if any_solved(&reports) {
        select_winner(&reports)
    } else {
        None
    };

    RunOutcome {
        corners: partition.corners(),
        active_workers: partition.active_workers(),
        reports,
        winner,
    }
}
