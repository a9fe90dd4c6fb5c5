use crate::constants::{CELL_STROKE_RATIO, MARKERS_PER_MAP_HEIGHT};
use crate::geometry::Point;
use crate::models::{RailNode, World};
use crate::projection::{Bounds, Projection, ProjectionKind};
use crate::voronoi::VoronoiRegions;

/// A node placed on the drawing plane
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub node: RailNode,
    pub position: Point,
}

/// Everything the map needs to draw one world with one projection.
///
/// Marker size is derived from the projected height of the node set so
/// that the map is [`MARKERS_PER_MAP_HEIGHT`] markers tall at any scale.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub projection: Projection,
    pub nodes: Vec<PlacedNode>,
    /// Marker diameter and label font size
    pub scale: f64,
    pub stroke_width: f64,
    pub view_box: Bounds,
    pub regions: VoronoiRegions,
}

impl MapLayout {
    #[must_use]
    pub fn compute(world: &World, kind: ProjectionKind) -> Self {
        let projection = Projection::new(kind, world.nodes().map(|node| &node.location));

        let nodes: Vec<PlacedNode> = world
            .nodes()
            .map(|node| PlacedNode {
                position: projection.project(&node.location),
                node: node.clone(),
            })
            .collect();

        let tight = projection.bounds_with_margin(0.0);
        let scale = if tight.height > 0.0 {
            tight.height / MARKERS_PER_MAP_HEIGHT
        } else {
            1.0
        };
        let stroke_width = CELL_STROKE_RATIO * scale;

        // Cells reach past the outermost markers and their borders
        let clip = projection.bounds_with_margin(scale + stroke_width);
        let regions = VoronoiRegions::build(
            nodes.iter().map(|placed| (placed.node.id.as_str(), placed.position)),
            clip,
        );

        crate::logging::log!(
            "Laid out {} nodes with {} projection",
            nodes.len(),
            kind.as_str()
        );

        Self {
            view_box: projection.bounds_with_margin(scale),
            projection,
            nodes,
            scale,
            stroke_width,
            regions,
        }
    }

    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.scale / 2.0
    }

    /// Offset of a label from its node marker
    #[must_use]
    pub fn label_offset(&self) -> Point {
        (self.scale * 0.4, self.scale * -0.4)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|placed| placed.node.id == id)
    }

    /// Node whose region contains a point on the drawing plane
    #[must_use]
    pub fn node_at(&self, point: Point) -> Option<&PlacedNode> {
        self.regions.cell_at(point).and_then(|id| self.get(id))
    }
}
