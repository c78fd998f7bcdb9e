/// Maps worker ranks onto indices of the corner list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    workers: usize,
    corners: usize,
    all_corners: bool,
}

impl Partition {
    pub fn new(workers: usize, corners: usize, all_corners: bool) -> Self {
        Partition {
            workers,
            corners,
            all_corners,
        }
    }

    pub fn corners(&self) -> usize {
        self.corners
    }

    pub fn active_workers(&self) -> usize {
        self.workers.min(self.corners)
    }

    pub fn is_active(&self, rank: usize) -> bool {
        rank < self.active_workers()
    }

    /// The corner a worker starts from: its own rank, when active.
    pub fn assigned_corner(&self, rank: usize) -> Option<usize> {
        self.is_active(rank).then_some(rank)
    }

    /// Corners a worker explores, in order.
    ///
    /// Without `all_corners` this is just the assigned corner and anything past
    /// index `workers - 1` goes unexplored. With it, worker `r` takes
    /// `r, r + workers, r + 2 * workers, ...`.
    pub fn schedule(&self, rank: usize) -> Vec<usize> {
        match self.assigned_corner(rank) {
            None => Vec::new(),
            Some(first) if self.all_corners => {
                (first..self.corners).step_by(self.workers).collect()
            }
            Some(first) => vec![first],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_count_is_min_of_workers_and_corners() {
        assert_eq!(Partition::new(4, 2, false).active_workers(), 2);
        assert_eq!(Partition::new(2, 4, false).active_workers(), 2);
        assert_eq!(Partition::new(3, 0, false).active_workers(), 0);
    }

    #[test]
    fn identity_mapping_by_rank() {
        let partition = Partition::new(4, 2, false);
        assert_eq!(partition.assigned_corner(0), Some(0));
        assert_eq!(partition.assigned_corner(1), Some(1));
        assert_eq!(partition.assigned_corner(2), None);
        assert!(partition.schedule(3).is_empty());
    }

    #[test]
    fn surplus_corners_are_skipped_by_default() {
        let partition = Partition::new(2, 5, false);
        assert_eq!(partition.schedule(0), vec![0]);
        assert_eq!(partition.schedule(1), vec![1]);
    }

    #[test]
    fn all_corners_strides_by_worker_count() {
        let partition = Partition::new(2, 5, true);
        assert_eq!(partition.schedule(0), vec![0, 2, 4]);
        assert_eq!(partition.schedule(1), vec![1, 3]);

        let mut covered: Vec<usize> = (0..2).flat_map(|r| partition.schedule(r)).collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![0, 1, 2, 3, 4]);
    }
}
