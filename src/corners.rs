use crate::structs::{CornerInfo, CornerType, Tile};

/// First `(rotation, corner)` for which two adjacent sides of `tile` face outward.
///
/// Rotations are tried in ascending order and, within a rotation, corners in
/// `CornerType::PRIORITY` order. The tile's own rotation is left untouched.
pub fn classify_corner(tile: &Tile) -> Option<(u8, CornerType)> {
    let mut probe = *tile;
    for rotation in 0..4u8 {
        probe.rotation = rotation;
        for corner_type in CornerType::PRIORITY {
            let (a, b) = corner_type.sides();
            if probe.is_border(a) && probe.is_border(b) {
                return Some((rotation, corner_type));
            }
        }
    }
    None
}

/// Every corner-capable tile, in ascending tile id order.
pub fn enumerate_corners(tiles: &[Tile]) -> Vec<CornerInfo> {
    let mut sorted: Vec<&Tile> = tiles.iter().collect();
    sorted.sort_by_key(|t| t.id);

    sorted
        .into_iter()
        .filter_map(|tile| {
            classify_corner(tile).map(|(rotation, corner_type)| CornerInfo {
                tile_id: tile.id,
                rotation,
                corner_type,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_matching_corner_at_rotation_zero() {
        assert_eq!(
            classify_corner(&Tile::new(0, [0, 1, 2, 0])),
            Some((0, CornerType::NorthWest))
        );
        assert_eq!(
            classify_corner(&Tile::new(0, [0, 0, 2, 1])),
            Some((0, CornerType::NorthEast))
        );
        assert_eq!(
            classify_corner(&Tile::new(0, [1, 2, 0, 0])),
            Some((0, CornerType::SouthWest))
        );
        assert_eq!(
            classify_corner(&Tile::new(0, [1, 0, 0, 2])),
            Some((0, CornerType::SouthEast))
        );
    }

    #[test]
    fn north_west_wins_ties() {
        // Three border sides satisfy both NW and NE at rotation 0.
        assert_eq!(
            classify_corner(&Tile::new(0, [0, 0, 3, 0])),
            Some((0, CornerType::NorthWest))
        );
    }

    #[test]
    fn opposite_borders_are_not_a_corner() {
        assert_eq!(classify_corner(&Tile::new(0, [0, 1, 0, 2])), None);
        assert_eq!(classify_corner(&Tile::new(0, [3, 1, 0, 2])), None);
        assert_eq!(classify_corner(&Tile::new(0, [3, 1, 4, 2])), None);
    }

    #[test]
    fn classification_keeps_the_tile_rotation() {
        let mut tile = Tile::new(7, [0, 1, 2, 0]);
        tile.rotation = 3;
        let before = tile;
        assert_eq!(classify_corner(&tile), Some((0, CornerType::NorthWest)));
        assert_eq!(tile, before);
    }

    #[test]
    fn match_iff_two_adjacent_border_sides() {
        // Exhaustive over every placement of border colour on the four sides.
        for mask in 0u8..16 {
            let colors = [0, 1, 2, 3].map(|i| if mask & (1 << i) != 0 { 0 } else { 9 });
            let adjacent = (0..4).any(|i| mask & (1 << i) != 0 && mask & (1 << ((i + 1) % 4)) != 0);
            assert_eq!(
                classify_corner(&Tile::new(0, colors)).is_some(),
                adjacent,
                "mask {mask:04b}"
            );
        }
    }

    #[test]
    fn enumerates_in_tile_id_order() {
        let tiles = vec![
            Tile::new(0, [1, 2, 3, 4]),
            Tile::new(1, [0, 0, 6, 12]),
            Tile::new(2, [0, 1, 7, 0]),
            Tile::new(3, [0, 5, 0, 5]),
            Tile::new(4, [2, 0, 0, 9]),
        ];
        let corners = enumerate_corners(&tiles);
        let summary: Vec<(usize, CornerType)> =
            corners.iter().map(|c| (c.tile_id, c.corner_type)).collect();
        assert_eq!(
            summary,
            vec![
                (1, CornerType::NorthEast),
                (2, CornerType::NorthWest),
                (4, CornerType::SouthEast),
            ]
        );
        assert!(corners.iter().all(|c| c.rotation == 0));
    }

    #[test]
    fn no_corner_tiles_is_an_empty_list() {
        let tiles = vec![Tile::new(0, [1, 2, 3, 4]), Tile::new(1, [0, 1, 0, 1])];
        assert!(enumerate_corners(&tiles).is_empty());
    }
}
