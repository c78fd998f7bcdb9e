use crate::config::BORDER_COLOR;
use std::fmt;
use std::time::Duration;

pub type Color = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    /// Base colours in North, East, South, West order.
    pub colors: [Color; 4],
    /// Quarter turns clockwise, 0..=3.
    pub rotation: u8,
    pub used: bool,
}

impl Tile {
    pub fn new(id: usize, colors: [Color; 4]) -> Self {
        Tile {
            id,
            colors,
            rotation: 0,
            used: false,
        }
    }

    /// Colour shown on `side` under the current rotation.
    #[inline(always)]
    pub fn color(&self, side: Side) -> Color {
        self.colors[(side as usize + 4 - (self.rotation as usize & 3)) % 4]
    }

    #[inline(always)]
    pub fn is_border(&self, side: Side) -> bool {
        self.color(side) == BORDER_COLOR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerType {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl CornerType {
    /// Priority order used when a rotation satisfies several corners at once.
    pub const PRIORITY: [CornerType; 4] = [
        CornerType::NorthWest,
        CornerType::NorthEast,
        CornerType::SouthWest,
        CornerType::SouthEast,
    ];

    pub fn sides(self) -> (Side, Side) {
        match self {
            CornerType::NorthWest => (Side::North, Side::West),
            CornerType::NorthEast => (Side::North, Side::East),
            CornerType::SouthWest => (Side::South, Side::West),
            CornerType::SouthEast => (Side::South, Side::East),
        }
    }

    /// Board cell `(x, y)` of this corner on a `size` x `size` board.
    pub fn position(self, size: usize) -> (usize, usize) {
        let last = size - 1;
        match self {
            CornerType::NorthWest => (0, 0),
            CornerType::NorthEast => (last, 0),
            CornerType::SouthWest => (0, last),
            CornerType::SouthEast => (last, last),
        }
    }
}

impl fmt::Display for CornerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CornerType::NorthWest => "NW",
            CornerType::NorthEast => "NE",
            CornerType::SouthWest => "SW",
            CornerType::SouthEast => "SE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerInfo {
    pub tile_id: usize,
    pub rotation: u8,
    pub corner_type: CornerType,
}

/// One cell of a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tile_id: usize,
    pub rotation: u8,
}

/// What one worker hands back to the coordinator once its search loop is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub rank: usize,
    pub active: bool,
    pub solved: bool,
    pub corners_tried: usize,
    /// Recursive entries across every corner this worker explored.
    pub steps: u64,
    pub solution_owner: Option<usize>,
    pub placements: Option<Vec<Placement>>,
    pub elapsed: Duration,
}

impl WorkerReport {
    pub fn idle(rank: usize) -> Self {
        WorkerReport {
            rank,
            active: false,
            solved: false,
            corners_tried: 0,
            steps: 0,
            solution_owner: None,
            placements: None,
            elapsed: Duration::ZERO,
        }
    }
}
