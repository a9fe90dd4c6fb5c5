use serde::{Deserialize, Serialize};

use crate::models::Location;

/// Axis-aligned rectangle in drawing-plane units, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub west: f64,
    pub north: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(west: f64, north: f64, width: f64, height: f64) -> Self {
        Self { west, north, width, height }
    }

    #[must_use]
    pub fn east(&self) -> f64 {
        self.west + self.width
    }

    #[must_use]
    pub fn south(&self) -> f64 {
        self.north + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Grow the rectangle by `margin` on every side
    #[must_use]
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            west: self.west - margin,
            north: self.north - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    #[must_use]
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.west <= other.west
            && self.north <= other.north
            && self.east() >= other.east()
            && self.south() >= other.south()
    }

    /// Corners in drawing order: north-west, north-east, south-east, south-west
    #[must_use]
    pub fn corners(&self) -> Vec<(f64, f64)> {
        vec![
            (self.west, self.north),
            (self.east(), self.north),
            (self.east(), self.south()),
            (self.west, self.south()),
        ]
    }

    /// SVG `viewBox` attribute value
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.west, self.north, self.width, self.height)
    }
}

/// Which projection the map is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionKind {
    #[default]
    Real,
    Grid,
}

impl ProjectionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Grid => "Grid",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Real => Self::Grid,
            Self::Grid => Self::Real,
        }
    }
}

/// Maps raw node coordinates onto the drawing plane
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Real(RealProjection),
    Grid(GridProjection),
}

impl Projection {
    pub fn new<'a>(kind: ProjectionKind, locations: impl IntoIterator<Item = &'a Location>) -> Self {
        match kind {
            ProjectionKind::Real => Self::Real(RealProjection::new(locations)),
            ProjectionKind::Grid => Self::Grid(GridProjection::new(locations)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ProjectionKind {
        match self {
            Self::Real(_) => ProjectionKind::Real,
            Self::Grid(_) => ProjectionKind::Grid,
        }
    }

    #[must_use]
    pub fn project_x(&self, x: f64) -> f64 {
        match self {
            Self::Real(p) => p.project_x(x),
            Self::Grid(p) => p.project_x(x),
        }
    }

    #[must_use]
    pub fn project_z(&self, z: f64) -> f64 {
        match self {
            Self::Real(p) => p.project_z(z),
            Self::Grid(p) => p.project_z(z),
        }
    }

    #[must_use]
    pub fn project(&self, location: &Location) -> (f64, f64) {
        (self.project_x(location.x), self.project_z(location.z))
    }

    #[must_use]
    pub fn bounds_with_margin(&self, margin: f64) -> Bounds {
        match self {
            Self::Real(p) => p.bounds_with_margin(margin),
            Self::Grid(p) => p.bounds_with_margin(margin),
        }
    }
}

/// Draws nodes at their real coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RealProjection {
    west: f64,
    east: f64,
    north: f64,
    south: f64,
}

impl RealProjection {
    pub fn new<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Self {
        let mut extent: Option<Self> = None;
        for location in locations {
            let next = match extent {
                None => Self {
                    west: location.x,
                    east: location.x,
                    north: location.z,
                    south: location.z,
                },
                Some(e) => Self {
                    west: e.west.min(location.x),
                    east: e.east.max(location.x),
                    north: e.north.min(location.z),
                    south: e.south.max(location.z),
                },
            };
            extent = Some(next);
        }
        extent.unwrap_or_default()
    }

    #[must_use]
    pub fn project_x(&self, x: f64) -> f64 {
        x
    }

    #[must_use]
    pub fn project_z(&self, z: f64) -> f64 {
        z
    }

    #[must_use]
    pub fn bounds_with_margin(&self, margin: f64) -> Bounds {
        Bounds::new(self.west, self.north, self.east - self.west, self.south - self.north).inflate(margin)
    }
}

/// Lays nodes out on a grid by coordinate rank.
///
/// Keeps every "west of" and "north of" relation between nodes but
/// discards distances and angles, so clusters of close nodes get as much
/// room as isolated ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridProjection {
    xs: Vec<f64>,
    zs: Vec<f64>,
}

impl GridProjection {
    pub fn new<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Self {
        let (xs, zs): (Vec<f64>, Vec<f64>) = locations.into_iter().map(|l| (l.x, l.z)).unzip();
        Self {
            xs: sorted_distinct(xs),
            zs: sorted_distinct(zs),
        }
    }

    /// Rank of `x` among the distinct x coordinates of the node set
    #[must_use]
    pub fn project_x(&self, x: f64) -> f64 {
        rank(&self.xs, x)
    }

    /// Rank of `z` among the distinct z coordinates of the node set
    #[must_use]
    pub fn project_z(&self, z: f64) -> f64 {
        rank(&self.zs, z)
    }

    #[must_use]
    pub fn bounds_with_margin(&self, margin: f64) -> Bounds {
        Bounds::new(0.0, 0.0, last_rank(&self.xs), last_rank(&self.zs)).inflate(margin)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.zs.len()
    }
}

/// -0.0 and 0.0 share a rank
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn sorted_distinct(values: Vec<f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().map(unsigned_zero).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

#[allow(clippy::cast_precision_loss)]
fn last_rank(table: &[f64]) -> f64 {
    table.len().saturating_sub(1) as f64
}

/// Coordinates outside the table land halfway between their neighbours
/// so that ordering is still preserved.
#[allow(clippy::cast_precision_loss)]
fn rank(table: &[f64], value: f64) -> f64 {
    let value = unsigned_zero(value);
    match table.binary_search_by(|probe| probe.total_cmp(&value)) {
        Ok(index) => index as f64,
        Err(insert_at) => {
            crate::logging::log!("Coordinate {} is not part of the grid", value);
            insert_at as f64 - 0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations(points: &[(f64, f64)]) -> Vec<Location> {
        points.iter().map(|&(x, z)| Location::new(x, None, z)).collect()
    }

    #[test]
    fn test_real_projection_is_identity() {
        let locs = locations(&[(-100.5, 20.0), (3000.0, -7.25)]);
        let projection = Projection::new(ProjectionKind::Real, &locs);
        for loc in &locs {
            assert_eq!(projection.project(loc), (loc.x, loc.z));
        }
    }

    #[test]
    fn test_real_projection_bounds() {
        let locs = locations(&[(-10.0, 5.0), (30.0, -15.0), (0.0, 0.0)]);
        let projection = RealProjection::new(&locs);

        assert_eq!(projection.bounds_with_margin(0.0), Bounds::new(-10.0, -15.0, 40.0, 20.0));
        assert_eq!(projection.bounds_with_margin(2.0), Bounds::new(-12.0, -17.0, 44.0, 24.0));
    }

    #[test]
    fn test_real_projection_degenerate() {
        let single = RealProjection::new(&locations(&[(7.0, 9.0)]));
        assert_eq!(single.bounds_with_margin(0.0), Bounds::new(7.0, 9.0, 0.0, 0.0));
        assert_eq!(single.bounds_with_margin(1.0), Bounds::new(6.0, 8.0, 2.0, 2.0));

        let line = RealProjection::new(&locations(&[(1.0, 4.0), (1.0, 8.0)]));
        assert_eq!(line.bounds_with_margin(0.0).width, 0.0);

        let empty = RealProjection::new(&locations(&[]));
        assert_eq!(empty.bounds_with_margin(0.0), Bounds::default());
    }

    #[test]
    fn test_grid_projection_ranks() {
        let locs = locations(&[(1000.0, 5.0), (-3.0, 5.0), (12.0, -80.0), (1000.0, 60.0)]);
        let projection = GridProjection::new(&locs);

        assert_eq!(projection.columns(), 3);
        assert_eq!(projection.rows(), 3);
        assert_eq!(projection.project_x(-3.0), 0.0);
        assert_eq!(projection.project_x(12.0), 1.0);
        assert_eq!(projection.project_x(1000.0), 2.0);
        assert_eq!(projection.project_z(-80.0), 0.0);
        assert_eq!(projection.project_z(5.0), 1.0);
        assert_eq!(projection.project_z(60.0), 2.0);
    }

    #[test]
    fn test_grid_projection_preserves_order() {
        let locs = locations(&[(0.5, 3.0), (-2.0, 3.0), (9.0, 1.0), (0.5, -4.0), (100.0, 2.0)]);
        let projection = GridProjection::new(&locs);

        for a in &locs {
            for b in &locs {
                let (ax, bx) = (projection.project_x(a.x), projection.project_x(b.x));
                let (az, bz) = (projection.project_z(a.z), projection.project_z(b.z));
                assert_eq!(a.x < b.x, ax < bx);
                assert_eq!(a.x == b.x, ax == bx);
                assert_eq!(a.z < b.z, az < bz);
                assert_eq!(a.z == b.z, az == bz);
            }
        }
    }

    #[test]
    fn test_grid_projection_bounds() {
        let locs = locations(&[(1.0, 1.0), (2.0, 2.0), (3.0, 2.0)]);
        let projection = GridProjection::new(&locs);

        assert_eq!(projection.bounds_with_margin(0.0), Bounds::new(0.0, 0.0, 2.0, 1.0));
        assert_eq!(projection.bounds_with_margin(0.5), Bounds::new(-0.5, -0.5, 3.0, 2.0));
    }

    #[test]
    fn test_grid_projection_empty_and_single() {
        let empty = GridProjection::new(&locations(&[]));
        assert_eq!(empty.bounds_with_margin(0.0), Bounds::default());

        let single = GridProjection::new(&locations(&[(42.0, -42.0)]));
        assert_eq!(single.project_x(42.0), 0.0);
        assert_eq!(single.bounds_with_margin(0.0), Bounds::default());
    }

    #[test]
    fn test_grid_projection_signed_zero() {
        let projection = GridProjection::new(&locations(&[(-0.0, 0.0), (0.0, 1.0), (-1.0, 2.0)]));
        assert_eq!(projection.columns(), 2);
        assert_eq!(projection.project_x(0.0), 1.0);
        assert_eq!(projection.project_x(-0.0), 1.0);
    }

    #[test]
    fn test_grid_projection_unknown_coordinate_keeps_order() {
        let projection = GridProjection::new(&locations(&[(0.0, 0.0), (10.0, 0.0)]));
        let between = projection.project_x(5.0);
        assert!(between > projection.project_x(0.0));
        assert!(between < projection.project_x(10.0));
    }

    #[test]
    fn test_bounds_inflation_is_monotonic() {
        let locs = locations(&[(-5.0, 2.0), (8.0, 11.0), (3.0, -1.0)]);
        for kind in [ProjectionKind::Real, ProjectionKind::Grid] {
            let projection = Projection::new(kind, &locs);
            let tight = projection.bounds_with_margin(0.0);
            for margin in [0.0, 0.1, 1.0, 25.0] {
                assert!(projection.bounds_with_margin(margin).contains_bounds(&tight));
            }
        }
    }

    #[test]
    fn test_view_box() {
        assert_eq!(Bounds::new(-1.0, 2.5, 10.0, 4.0).view_box(), "-1 2.5 10 4");
    }

    #[test]
    fn test_kind_toggle() {
        assert_eq!(ProjectionKind::Real.toggled(), ProjectionKind::Grid);
        assert_eq!(ProjectionKind::Grid.toggled().as_str(), "Real");
    }
}
