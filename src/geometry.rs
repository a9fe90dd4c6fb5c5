/// A point on the drawing plane, `(x, y)` with y growing downwards
pub type Point = (f64, f64);

/// Relative tolerance for comparing positions on the drawing plane
const EPSILON: f64 = 1e-9;

/// Computes the 2D cross product to determine the orientation of a point relative to a line.
///
/// Returns a positive value if the point is to the left of the line (counter-clockwise),
/// negative if to the right (clockwise), and zero if collinear.
///
/// # Arguments
/// * `line_start` - Starting point of the line segment
/// * `line_end` - Ending point of the line segment
/// * `point` - Point to test
#[must_use]
pub fn cross_product_2d(line_start: Point, line_end: Point, point: Point) -> f64 {
    (line_end.0 - line_start.0) * (point.1 - line_start.1) -
    (line_end.1 - line_start.1) * (point.0 - line_start.0)
}

#[must_use]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

/// Absolute tolerance for lengths near `a` and `b`, scaled to their magnitude
fn tolerance(a: Point, b: Point) -> f64 {
    EPSILON * (1.0 + a.0.abs().max(a.1.abs()).max(b.0.abs()).max(b.1.abs()))
}

fn nearly_equal(a: Point, b: Point) -> bool {
    distance_squared(a, b).sqrt() <= tolerance(a, b)
}

/// Clips a convex polygon to the half-plane `normal · p <= offset`.
///
/// Sutherland–Hodgman against a single edge. Vertices exactly on the
/// boundary are kept; a vertex within rounding distance of the previous one
/// is dropped. Returns an empty polygon when nothing remains.
#[must_use]
pub fn clip_to_half_plane(polygon: &[Point], normal: Point, offset: f64) -> Vec<Point> {
    let side = |p: Point| normal.0 * p.0 + normal.1 * p.1 - offset;

    let mut clipped: Vec<Point> = Vec::with_capacity(polygon.len() + 1);
    let mut push = |vertex: Point| {
        if !clipped.last().is_some_and(|&last| nearly_equal(last, vertex)) {
            clipped.push(vertex);
        }
    };

    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let current_side = side(current);
        let next_side = side(next);

        if current_side <= 0.0 {
            push(current);
        }

        // Edge crosses the boundary
        if (current_side < 0.0 && next_side > 0.0) || (current_side > 0.0 && next_side < 0.0) {
            let t = current_side / (current_side - next_side);
            push((
                current.0 + t * (next.0 - current.0),
                current.1 + t * (next.1 - current.1),
            ));
        }
    }

    if clipped.len() > 1 && nearly_equal(clipped[0], clipped[clipped.len() - 1]) {
        clipped.pop();
    }
    if clipped.len() < 3 {
        clipped.clear();
    }
    clipped
}

/// Keeps the part of a convex polygon that is at least as close to `site`
/// as to `other`: the half-plane bounded by their perpendicular bisector.
#[must_use]
pub fn clip_to_bisector(polygon: &[Point], site: Point, other: Point) -> Vec<Point> {
    let normal = (other.0 - site.0, other.1 - site.1);
    let offset = (distance_squared(other, (0.0, 0.0)) - distance_squared(site, (0.0, 0.0))) / 2.0;
    clip_to_half_plane(polygon, normal, offset)
}

/// Area of a simple polygon (shoelace formula), independent of winding
#[must_use]
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let twice_area: f64 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.0 * b.1 - b.0 * a.1)
        .sum();
    twice_area.abs() / 2.0
}

/// Whether `point` lies inside or on the boundary of a convex polygon of either winding.
///
/// Points within rounding distance of an edge count as on it. Zero-length
/// edges are ignored; a polygon with no edge of positive length contains
/// nothing.
#[must_use]
pub fn point_in_convex_polygon(polygon: &[Point], point: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut has_edge = false;
    let mut has_left = false;
    let mut has_right = false;
    for (i, &start) in polygon.iter().enumerate() {
        let end = polygon[(i + 1) % polygon.len()];
        let length = distance_squared(start, end).sqrt();
        if length <= tolerance(start, end) {
            continue;
        }
        has_edge = true;

        // Signed distance of the point from the edge's line
        let distance = cross_product_2d(start, end, point) / length;
        let allowed = tolerance(start, point);
        has_left |= distance > allowed;
        has_right |= distance < -allowed;
        if has_left && has_right {
            return false;
        }
    }
    has_edge
}

/// Largest distance from `origin` to any vertex of `polygon`, squared
#[must_use]
pub fn max_distance_squared(polygon: &[Point], origin: Point) -> f64 {
    polygon
        .iter()
        .map(|&vertex| distance_squared(vertex, origin))
        .fold(0.0, f64::max)
}
