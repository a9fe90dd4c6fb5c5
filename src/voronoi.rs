//! Voronoi cells for hover and click regions around nodes.
//!
//! Each cell starts as the clip rectangle and is cut by the perpendicular
//! bisector between its site and every other site, nearest sites first.
//! Cutting stops once the next site is more than twice as far away as the
//! furthest remaining vertex, since no bisector beyond that can reach the
//! cell. The cells partition the clip rectangle.
//!
//! Sites that coincide with an earlier site get an empty cell; the earlier
//! site keeps the whole region.

use indexmap::IndexMap;

use crate::geometry::{
    clip_to_bisector, distance_squared, max_distance_squared, point_in_convex_polygon,
    polygon_area, Point,
};
use crate::projection::Bounds;

/// Compute one cell per site, in site order, clipped to `clip`.
///
/// Cells are convex polygons without a repeated closing vertex. A site that
/// coincides with an earlier one, or a clip rectangle without area, yields
/// an empty polygon.
#[must_use]
pub fn cell_polygons(sites: &[Point], clip: &Bounds) -> Vec<Vec<Point>> {
    if clip.width <= 0.0 || clip.height <= 0.0 {
        return vec![Vec::new(); sites.len()];
    }

    let rectangle = clip.corners();
    let mut by_distance: Vec<(f64, usize)> = Vec::with_capacity(sites.len());

    sites
        .iter()
        .enumerate()
        .map(|(index, &site)| {
            by_distance.clear();
            by_distance.extend(
                sites
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != index)
                    .map(|(other, &point)| (distance_squared(site, point), other)),
            );
            by_distance.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            let mut cell = rectangle.clone();
            for &(separation, other) in &by_distance {
                if separation == 0.0 {
                    if other < index {
                        return Vec::new();
                    }
                    continue;
                }
                // A bisector lies at half the separation; it cannot reach
                // vertices closer than that.
                if separation > 4.0 * max_distance_squared(&cell, site) {
                    break;
                }
                cell = clip_to_bisector(&cell, site, sites[other]);
                if cell.is_empty() {
                    break;
                }
            }
            cell
        })
        .collect()
}

/// A node's site and the region of the map nearest to it
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    pub site: Point,
    pub polygon: Vec<Point>,
}

impl VoronoiCell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// SVG `points` attribute value
    #[must_use]
    pub fn svg_points(&self) -> String {
        self.polygon
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Voronoi tessellation of projected node positions, keyed by node id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoronoiRegions {
    pub clip: Bounds,
    pub cells: IndexMap<String, VoronoiCell>,
}

impl VoronoiRegions {
    /// Tessellate the given `(id, position)` sites. Ties between coincident
    /// sites go to the one listed first.
    pub fn build<'a>(sites: impl IntoIterator<Item = (&'a str, Point)>, clip: Bounds) -> Self {
        let (ids, points): (Vec<&str>, Vec<Point>) = sites.into_iter().unzip();
        let polygons = cell_polygons(&points, &clip);

        let cells = ids
            .into_iter()
            .zip(points)
            .zip(polygons)
            .map(|((id, site), polygon)| (id.to_string(), VoronoiCell { site, polygon }))
            .collect();

        Self { clip, cells }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&VoronoiCell> {
        self.cells.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Id of the node whose cell contains `point`, if the point is on the map
    #[must_use]
    pub fn cell_at(&self, point: Point) -> Option<&str> {
        self.cells
            .iter()
            .find(|(_, cell)| point_in_convex_polygon(&cell.polygon, point))
            .map(|(id, _)| id.as_str())
    }

    /// Total area of all cells; equals the clip area when sites exist
    #[must_use]
    pub fn covered_area(&self) -> f64 {
        self.cells
            .values()
            .map(|cell| polygon_area(&cell.polygon))
            .sum()
    }
}
