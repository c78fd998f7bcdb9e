//! Tiles, the board and the adjacency/border constraint.
//!
//! The board never owns tiles. Each cell holds an optional index into the
//! puzzle's tile arena, so the same tile cannot end up in two places as long
//! as callers respect the `used` flag.

use crate::config::{BORDER_COLOR, MAX_COLOR_COUNT};
use crate::error::InputError;
use crate::structs::{Color, CornerInfo, Placement, Side, Tile};
use std::io::Read;
use std::str::SplitWhitespace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<usize>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        self.cells[y * self.size + x]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, tile_index: usize) {
        self.cells[y * self.size + x] = Some(tile_index);
    }

    #[inline(always)]
    pub fn clear(&mut self, x: usize, y: usize) {
        self.cells[y * self.size + x] = None;
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// First empty cell scanning rows top to bottom, each row left to right.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|i| (i % self.size, i / self.size))
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    tile_count: usize,
    color_count: u32,
    pub tiles: Vec<Tile>,
    pub board: Board,
}

impl Puzzle {
    /// Builds a puzzle from base colours listed in tile-id order.
    ///
    /// # Panics
    ///
    /// Panics if the number of tiles is not `size * size`.
    pub fn new(size: usize, color_count: u32, colors: Vec<[Color; 4]>) -> Self {
        assert_eq!(colors.len(), size * size, "a {size}x{size} board needs {} tiles", size * size);
        let tiles = colors
            .into_iter()
            .enumerate()
            .map(|(id, c)| Tile::new(id, c))
            .collect();
        Puzzle {
            size,
            tile_count: size * size,
            color_count,
            tiles,
            board: Board::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn color_count(&self) -> u32 {
        self.color_count
    }

    /// True iff `tile`, under its current rotation, may sit at `(x, y)`.
    ///
    /// Sides on the board boundary must show the border colour and sides facing an
    /// occupied neighbour must show that neighbour's facing colour. `(x, y)` must be
    /// on the board.
    pub fn can_place(&self, x: usize, y: usize, tile: &Tile) -> bool {
        let last = self.size - 1;

        if x == 0 && tile.color(Side::West) != BORDER_COLOR {
            return false;
        }
        if y == 0 && tile.color(Side::North) != BORDER_COLOR {
            return false;
        }
        if x == last && tile.color(Side::East) != BORDER_COLOR {
            return false;
        }
        if y == last && tile.color(Side::South) != BORDER_COLOR {
            return false;
        }

        if x > 0 && !self.matches(x - 1, y, Side::West, tile) {
            return false;
        }
        if x < last && !self.matches(x + 1, y, Side::East, tile) {
            return false;
        }
        if y > 0 && !self.matches(x, y - 1, Side::North, tile) {
            return false;
        }
        if y < last && !self.matches(x, y + 1, Side::South, tile) {
            return false;
        }
        true
    }

    /// Checks the neighbour at `(nx, ny)`, which lies on `side` of the candidate tile.
    #[inline(always)]
    fn matches(&self, nx: usize, ny: usize, side: Side, tile: &Tile) -> bool {
        match self.board.get(nx, ny) {
            Some(neighbour) => self.tiles[neighbour].color(side.opposite()) == tile.color(side),
            None => true,
        }
    }

    /// Clears the board and every tile's search state, then seeds `corner`.
    pub fn seed_corner(&mut self, corner: &CornerInfo) {
        self.board.reset();
        for tile in &mut self.tiles {
            tile.used = false;
            tile.rotation = 0;
        }
        let (x, y) = corner.corner_type.position(self.size);
        let tile = &mut self.tiles[corner.tile_id];
        tile.rotation = corner.rotation;
        tile.used = true;
        self.board.set(x, y, corner.tile_id);
    }

    /// Row-major `(tile id, rotation)` pairs, or `None` while any cell is empty.
    pub fn placements(&self) -> Option<Vec<Placement>> {
        self.board
            .cells
            .iter()
            .map(|cell| {
                cell.map(|index| {
                    let tile = &self.tiles[index];
                    Placement {
                        tile_id: tile.id,
                        rotation: tile.rotation,
                    }
                })
            })
            .collect()
    }

    /// Parses `N`, the colour count and `N²` lines of North/East/South/West colours.
    pub fn parse(input: &str) -> Result<Puzzle, InputError> {
        let mut tokens = Tokens(input.split_whitespace());

        let size = tokens.next_u32("board dimension")? as usize;
        if size == 0 {
            return Err(InputError::ZeroDimension);
        }
        let color_count = tokens.next_u32("colour count")?;
        if color_count == 0 {
            return Err(InputError::ZeroColorCount);
        }
        if color_count >= MAX_COLOR_COUNT {
            return Err(InputError::ColorCountOutOfRange {
                value: color_count,
                max: MAX_COLOR_COUNT,
            });
        }

        let mut colors = Vec::with_capacity(size * size);
        for id in 0..size * size {
            let mut edges = [0; 4];
            for (side, edge) in Side::ALL.iter().zip(edges.iter_mut()) {
                *edge = tokens.next_u32(&format!("{side:?} colour of tile {id}"))?;
            }
            colors.push(edges);
        }

        Ok(Puzzle::new(size, color_count, colors))
    }

    pub fn read_from(mut reader: impl Read) -> Result<Puzzle, InputError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Puzzle::parse(&input)
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next_u32(&mut self, field: &str) -> Result<u32, InputError> {
        let token = self.0.next().ok_or_else(|| InputError::MissingField {
            field: field.to_string(),
        })?;
        token.parse::<u32>().map_err(|_| InputError::InvalidToken {
            field: field.to_string(),
            token: token.to_string(),
        })
    }
}
