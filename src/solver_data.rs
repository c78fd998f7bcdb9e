use crate::corners::enumerate_corners;
use crate::puzzle::Puzzle;
use crate::structs::CornerInfo;
use log::info;

/// Read-only data every worker starts from: the loaded puzzle and its corner tiles.
#[derive(Debug, Clone)]
pub struct SolverData {
    puzzle: Puzzle,
    corners: Vec<CornerInfo>,
}

impl SolverData {
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn corners(&self) -> &[CornerInfo] {
        &self.corners
    }

    /// A private copy of the puzzle seeded with corner `corner_index`.
    pub fn seeded_puzzle(&self, corner_index: usize) -> Puzzle {
        let mut puzzle = self.puzzle.clone();
        puzzle.seed_corner(&self.corners[corner_index]);
        puzzle
    }
}

pub fn prepare_solver_data(puzzle: Puzzle) -> SolverData {
    info!(
        "Board {}x{}, {} tiles, {} colours",
        puzzle.size(),
        puzzle.size(),
        puzzle.tile_count(),
        puzzle.color_count()
    );

    let corners = enumerate_corners(&puzzle.tiles);
    for corner in &corners {
        info!(
            "Tile {} fits corner {} with rotation {}",
            corner.tile_id, corner.corner_type, corner.rotation
        );
    }
    info!("Corner tiles found: {}", corners.len());

    SolverData { puzzle, corners }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::CornerType;

    #[test]
    fn seeded_copies_leave_the_template_untouched() {
        let puzzle = Puzzle::new(
            2,
            1,
            vec![[0, 1, 1, 0], [0, 0, 1, 1], [1, 1, 0, 0], [1, 0, 0, 1]],
        );
        let data = prepare_solver_data(puzzle);
        assert_eq!(data.corners().len(), 4);
        assert_eq!(data.corners()[1].corner_type, CornerType::NorthEast);

        let seeded = data.seeded_puzzle(3);
        assert_eq!(seeded.board.get(1, 1), Some(3));
        assert!(data.puzzle().board.first_empty() == Some((0, 0)));
        assert!(data.puzzle().tiles.iter().all(|t| !t.used));
    }
}
