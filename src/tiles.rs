use serde::{Deserialize, Serialize};

use crate::constants::TILE_SIZE;
use crate::projection::Bounds;

/// Index of a base-map tile image at some zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    pub tx: i64,
    pub tz: i64,
}

impl TileCoord {
    #[must_use]
    pub const fn new(tx: i64, tz: i64) -> Self {
        Self { tx, tz }
    }
}

/// Pixels per map unit at `zoom` (`2^zoom`)
#[must_use]
pub fn zoom_scale(zoom: i32) -> f64 {
    2f64.powi(zoom)
}

/// Tiles whose footprint intersects `bounds`, row by row from the north-west.
///
/// A tile spans `TILE_SIZE / 2^zoom` map units. Index ranges are floored at
/// the west/north edge and ceiled at the east/south edge, so a rectangle
/// that ends exactly on a tile edge does not pull in the next tile.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn covering_tiles(bounds: &Bounds, zoom: i32) -> Vec<TileCoord> {
    let scale = zoom_scale(zoom);
    let to_tile = |units: f64| units * scale / TILE_SIZE;

    let tx_min = to_tile(bounds.west).floor() as i64;
    let tz_min = to_tile(bounds.north).floor() as i64;
    let tx_max = to_tile(bounds.east()).ceil() as i64;
    let tz_max = to_tile(bounds.south()).ceil() as i64;

    (tz_min..tz_max)
        .flat_map(|tz| (tx_min..tx_max).map(move |tx| TileCoord::new(tx, tz)))
        .collect()
}

/// Area covered by a tile, in map units
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tile_rect(tile: TileCoord, zoom: i32) -> Bounds {
    let span = TILE_SIZE / zoom_scale(zoom);
    Bounds::new(tile.tx as f64 * span, tile.tz as f64 * span, span, span)
}

/// Image URL of a tile: `{root}{base_map_id}/z{zoom}/{tx},{tz}.png`
#[must_use]
pub fn tile_url(tiles_root: &str, base_map_id: &str, zoom: i32, tile: TileCoord) -> String {
    format!("{tiles_root}{base_map_id}/z{zoom}/{},{}.png", tile.tx, tile.tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covering_tiles_zoom_zero() {
        let tiles = covering_tiles(&Bounds::new(0.0, 0.0, 512.0, 512.0), 0);
        assert_eq!(
            tiles,
            vec![
                TileCoord::new(0, 0),
                TileCoord::new(1, 0),
                TileCoord::new(0, 1),
                TileCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_covering_tiles_partial_and_negative() {
        let tiles = covering_tiles(&Bounds::new(-10.0, 250.0, 20.0, 10.0), 0);
        assert_eq!(
            tiles,
            vec![
                TileCoord::new(-1, 0),
                TileCoord::new(0, 0),
                TileCoord::new(-1, 1),
                TileCoord::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_covering_tiles_zoomed_out() {
        // One tile spans 4096 units at zoom -4
        let tiles = covering_tiles(&Bounds::new(-5000.0, -100.0, 9000.0, 200.0), -4);
        let xs: Vec<i64> = tiles.iter().filter(|t| t.tz == -1).map(|t| t.tx).collect();
        assert_eq!(xs, vec![-2, -1, 0]);
        assert_eq!(tiles.len(), 6);
    }

    #[test]
    fn test_covering_tiles_empty_rectangle() {
        assert!(covering_tiles(&Bounds::new(256.0, 256.0, 0.0, 0.0), 0).is_empty());
    }

    #[test]
    fn test_tile_rect() {
        assert_eq!(tile_rect(TileCoord::new(1, -2), 0), Bounds::new(256.0, -512.0, 256.0, 256.0));
        assert_eq!(tile_rect(TileCoord::new(1, 0), 1), Bounds::new(128.0, 0.0, 128.0, 128.0));
        assert_eq!(tile_rect(TileCoord::new(-1, 0), -4), Bounds::new(-4096.0, 0.0, 4096.0, 4096.0));
    }

    #[test]
    fn test_tile_url() {
        let url = tile_url("https://tiles.example/", "terrain", -2, TileCoord::new(-3, 4));
        assert_eq!(url, "https://tiles.example/terrain/z-2/-3,4.png");
    }
}
