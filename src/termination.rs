//! Cooperative cross-worker cancellation and winner selection.
//!
//! Workers share no state. Each one owns a [`Mailbox`] and holds a [`Peers`]
//! handle with a sender for every mailbox. A worker that completes its board
//! posts one [`StopNotice`] to every other worker; the others only look at
//! their mailbox every `check_interval` recursive steps, so they unwind within
//! a bounded number of steps rather than immediately.

use crate::structs::WorkerReport;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::trace;

/// Hook the search engine calls at its check points.
pub trait Cancellation {
    /// Checked on every recursive entry. Must be cheap.
    fn is_stopped(&self) -> bool;

    /// Checked every `check_interval` entries. Returns true if the search must be abandoned.
    fn poll(&mut self) -> bool;

    /// Called once when the local board is complete.
    fn on_solved(&mut self);
}

/// Never stops. For running the search engine on its own.
#[derive(Debug, Default)]
pub struct NeverCancel {
    solved: bool,
}

impl Cancellation for NeverCancel {
    fn is_stopped(&self) -> bool {
        self.solved
    }

    fn poll(&mut self) -> bool {
        false
    }

    fn on_solved(&mut self) {
        self.solved = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopNotice {
    pub from: usize,
}

#[derive(Debug)]
pub struct Mailbox {
    rank: usize,
    receiver: Receiver<StopNotice>,
}

impl Mailbox {
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Non-blocking: returns a pending notice, if any, and consumes it.
    pub fn try_take(&self) -> Option<StopNotice> {
        match self.receiver.try_recv() {
            Ok(notice) => Some(notice),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Peers {
    senders: Vec<Sender<StopNotice>>,
}

impl Peers {
    /// Posts a notice from `from` to every other mailbox and returns how many were delivered.
    ///
    /// Never blocks. A mailbox whose worker already finished has been dropped; the
    /// notice for it is discarded.
    pub fn notify_all(&self, from: usize) -> usize {
        let mut delivered = 0;
        for (rank, sender) in self.senders.iter().enumerate() {
            if rank == from {
                continue;
            }
            match sender.send(StopNotice { from }) {
                Ok(()) => delivered += 1,
                Err(_) => trace!("Worker {from}: worker {rank} already finished, notice dropped"),
            }
        }
        delivered
    }
}

/// One mailbox per rank plus the shared sending side.
pub fn mailboxes(workers: usize) -> (Peers, Vec<Mailbox>) {
    let (senders, boxes) = (0..workers)
        .map(|rank| {
            let (sender, receiver) = unbounded();
            (sender, Mailbox { rank, receiver })
        })
        .unzip();
    (Peers { senders }, boxes)
}

/// A worker's view of the protocol: its mailbox, its peers and its stop flags.
pub struct WorkerLink<'a> {
    rank: usize,
    mailbox: Mailbox,
    peers: &'a Peers,
    solved: bool,
    peer_found: bool,
    solution_owner: Option<usize>,
    notices_sent: usize,
}

impl<'a> WorkerLink<'a> {
    pub fn new(mailbox: Mailbox, peers: &'a Peers) -> Self {
        WorkerLink {
            rank: mailbox.rank(),
            mailbox,
            peers,
            solved: false,
            peer_found: false,
            solution_owner: None,
            notices_sent: 0,
        }
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn peer_found(&self) -> bool {
        self.peer_found
    }

    /// Rank that reported a full board first as far as this worker knows.
    pub fn solution_owner(&self) -> Option<usize> {
        self.solution_owner
    }

    pub fn notices_sent(&self) -> usize {
        self.notices_sent
    }
}

impl Cancellation for WorkerLink<'_> {
    fn is_stopped(&self) -> bool {
        self.solved || self.peer_found
    }

    fn poll(&mut self) -> bool {
        if let Some(notice) = self.mailbox.try_take() {
            trace!("Worker {}: stop notice from worker {}", self.rank, notice.from);
            self.peer_found = true;
            self.solution_owner = Some(notice.from);
        }
        self.peer_found
    }

    fn on_solved(&mut self) {
        if self.solved {
            return;
        }
        self.solved = true;
        self.solution_owner = Some(self.rank);
        self.notices_sent = self.peers.notify_all(self.rank);
    }
}

/// Max-reduction over the active workers' success flags.
pub fn any_solved(reports: &[WorkerReport]) -> bool {
    reports
        .iter()
        .filter(|r| r.active)
        .map(|r| u8::from(r.solved))
        .max()
        .unwrap_or(0)
        == 1
}

/// Min-reduction over active ranks that completed a board. Lowest rank wins ties.
pub fn select_winner(reports: &[WorkerReport]) -> Option<usize> {
    let sentinel = reports.iter().filter(|r| r.active).count();
    let winner = reports
        .iter()
        .filter(|r| r.active)
        .map(|r| if r.solved { r.rank } else { sentinel })
        .min()
        .unwrap_or(sentinel);
    (winner < sentinel).then_some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(rank: usize, active: bool, solved: bool) -> WorkerReport {
        WorkerReport {
            rank,
            active,
            solved,
            ..WorkerReport::idle(rank)
        }
    }

    #[test]
    fn winner_notifies_every_other_worker_once() {
        let (peers, mut boxes) = mailboxes(3);
        let others = boxes.split_off(1);
        let mut link = WorkerLink::new(boxes.remove(0), &peers);

        link.on_solved();
        link.on_solved();

        assert!(link.solved());
        assert!(link.is_stopped());
        assert_eq!(link.solution_owner(), Some(0));
        assert_eq!(link.notices_sent(), 2);
        for mailbox in &others {
            assert_eq!(mailbox.try_take(), Some(StopNotice { from: 0 }));
            assert_eq!(mailbox.try_take(), None);
        }
    }

    #[test]
    fn poll_records_the_sender() {
        let (peers, mut boxes) = mailboxes(2);
        let mut link = WorkerLink::new(boxes.remove(0), &peers);

        assert!(!link.poll());
        assert!(!link.is_stopped());

        peers.notify_all(1);
        assert!(link.poll());
        assert!(link.is_stopped());
        assert!(link.peer_found());
        assert!(!link.solved());
        assert_eq!(link.solution_owner(), Some(1));
    }

    #[test]
    fn notices_to_finished_workers_are_dropped() {
        let (peers, mut boxes) = mailboxes(3);
        drop(boxes.pop());
        assert_eq!(peers.notify_all(0), 1);
    }

    #[test]
    fn reductions_pick_lowest_solved_rank() {
        let reports = vec![
            report(0, true, false),
            report(1, true, true),
            report(2, true, true),
            report(3, false, false),
        ];
        assert!(any_solved(&reports));
        assert_eq!(select_winner(&reports), Some(1));
    }

    #[test]
    fn reductions_without_success() {
        let reports = vec![report(0, true, false), report(1, false, false)];
        assert!(!any_solved(&reports));
        assert_eq!(select_winner(&reports), None);
        assert!(!any_solved(&[]));
        assert_eq!(select_winner(&[]), None);
    }
}
