use std::env;

/// Edge colour that must face the outside of the board. Never matched against a neighbour.
pub const BORDER_COLOR: u32 = 0;
/// Exclusive upper bound on the colour count given in the puzzle header.
pub const MAX_COLOR_COUNT: u32 = 256;
/// Recursive entries between two polls of a worker's mailbox.
pub const CHECK_INTERVAL: u64 = 1000;
/// Folder created under the documents directory when saving solutions.
pub const SOLUTION_DIR_NAME: &str = "EternitySolutions";

pub fn get_num_cores() -> usize {
    match env::var("CORES") {
        Ok(value) => value.parse::<usize>().unwrap_or_else(|_| num_cpus::get()),
        Err(_e) => num_cpus::get(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub workers: usize,
    pub check_interval: u64,
    /// Let each worker move on to the corners beyond `workers` once its own is exhausted.
    pub all_corners: bool,
}

impl SolverConfig {
    pub fn new(workers: usize) -> Self {
        SolverConfig {
            workers: workers.max(1),
            check_interval: CHECK_INTERVAL,
            all_corners: false,
        }
    }

    pub fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval.max(1);
        self
    }

    pub fn with_all_corners(mut self, all_corners: bool) -> Self {
        self.all_corners = all_corners;
        self
    }
}
