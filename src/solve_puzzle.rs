use crate::puzzle::Puzzle;
use crate::termination::Cancellation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved,
    /// Every candidate below the seeded board was tried.
    Exhausted,
    /// Abandoned because the cancellation hook said so.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverResult {
    pub outcome: SearchOutcome,
    /// Recursive entries made by this search.
    pub steps: u64,
}

/// Depth-first placement search over one worker's private puzzle.
///
/// Cells are filled in raster order starting at the first empty one. At each
/// cell every unused tile is tried in id order, each in rotations 0..=3. Cells
/// already holding a tile (the seeded corner) are skipped.
pub struct Search<'a, C: Cancellation> {
    puzzle: &'a mut Puzzle,
    cancel: &'a mut C,
    check_interval: u64,
    steps: u64,
}

impl<'a, C: Cancellation> Search<'a, C> {
    pub fn new(puzzle: &'a mut Puzzle, cancel: &'a mut C, check_interval: u64) -> Self {
        Search {
            puzzle,
            cancel,
            check_interval: check_interval.max(1),
            steps: 0,
        }
    }

    pub fn run(mut self) -> SolverResult {
        let solved = match self.puzzle.board.first_empty() {
            // Nothing left to place, e.g. a 1x1 board holding its corner.
            None => !self.cancel.is_stopped(),
            Some((x, y)) => self.play(x, y),
        };

        let outcome = if solved {
            self.cancel.on_solved();
            SearchOutcome::Solved
        } else if self.cancel.is_stopped() {
            SearchOutcome::Stopped
        } else {
            SearchOutcome::Exhausted
        };

        SolverResult {
            outcome,
            steps: self.steps,
        }
    }

    fn play(&mut self, x: usize, y: usize) -> bool {
        if self.cancel.is_stopped() {
            return false;
        }

        self.steps += 1;
        if self.steps % self.check_interval == 0 && self.cancel.poll() {
            return false;
        }

        for index in 0..self.puzzle.tile_count() {
            if self.puzzle.tiles[index].used {
                continue;
            }
            self.puzzle.tiles[index].used = true;

            for rotation in 0..4u8 {
                self.puzzle.tiles[index].rotation = rotation;
                if !self.puzzle.can_place(x, y, &self.puzzle.tiles[index]) {
                    continue;
                }

                self.puzzle.board.set(x, y, index);
                match self.next_cell(x, y) {
                    None => return true,
                    Some((nx, ny)) => {
                        if self.play(nx, ny) {
                            return true;
                        }
                    }
                }
                self.puzzle.board.clear(x, y);

                if self.cancel.is_stopped() {
                    self.puzzle.tiles[index].used = false;
                    return false;
                }
            }

            self.puzzle.tiles[index].used = false;
        }
        false
    }

    /// Next empty cell after `(x, y)` in raster order, or `None` when the board is full.
    fn next_cell(&self, mut x: usize, mut y: usize) -> Option<(usize, usize)> {
        let last = self.puzzle.size() - 1;
        loop {
            if x < last {
                x += 1;
            } else if y < last {
                x = 0;
                y += 1;
            } else {
                return None;
            }

            if !self.puzzle.board.is_occupied(x, y) {
                return Some((x, y));
            }
        }
    }
}

pub fn solve_puzzle(
    puzzle: &mut Puzzle,
    cancel: &mut impl Cancellation,
    check_interval: u64,
) -> SolverResult {
    Search::new(puzzle, cancel, check_interval).run()
}
