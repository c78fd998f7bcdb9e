//! Random puzzles that are solvable by construction.

use crate::config::BORDER_COLOR;
use crate::puzzle::Puzzle;
use crate::structs::Color;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Write as _;

/// Builds a solved `size` x `size` board with interior colours in `1..=colors`, then
/// shuffles the tiles and gives each a random base orientation.
///
/// # Panics
///
/// Panics if `size` or `colors` is zero.
pub fn generate_puzzle(size: usize, colors: u32, rng: &mut impl Rng) -> Puzzle {
    assert!(size > 0 && colors > 0, "size and colour count must be positive");

    // Colour on the east side of (x, y) and on the south side of (x, y).
    let east: Vec<Color> = (0..size * size).map(|_| rng.random_range(1..=colors)).collect();
    let south: Vec<Color> = (0..size * size).map(|_| rng.random_range(1..=colors)).collect();
    let last = size - 1;

    let mut solved: Vec<[Color; 4]> = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let north = if y == 0 { BORDER_COLOR } else { south[(y - 1) * size + x] };
            let east_side = if x == last { BORDER_COLOR } else { east[y * size + x] };
            let south_side = if y == last { BORDER_COLOR } else { south[y * size + x] };
            let west = if x == 0 { BORDER_COLOR } else { east[y * size + x - 1] };
            solved.push([north, east_side, south_side, west]);
        }
    }

    solved.shuffle(rng);
    let scrambled = solved
        .into_iter()
        .map(|edges| {
            // Base colours that show `edges` once the tile is turned `r` times.
            let r = rng.random_range(0..4usize);
            [0, 1, 2, 3].map(|i| edges[(i + r) % 4])
        })
        .collect();

    Puzzle::new(size, colors, scrambled)
}

/// The puzzle in the same text format `Puzzle::parse` reads.
pub fn write_puzzle(puzzle: &Puzzle) -> String {
    let mut text = format!("{}\n{}\n", puzzle.size(), puzzle.color_count());
    for tile in &puzzle.tiles {
        let [n, e, s, w] = tile.colors;
        let _ = writeln!(text, "{n} {e} {s} {w}");
    }
    text
}
