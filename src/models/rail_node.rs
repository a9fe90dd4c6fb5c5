use serde::{Deserialize, Serialize};

/// Raw spreadsheet location of a node. `y` is the height and plays no part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    pub z: f64,
}

impl Location {
    #[must_use]
    pub fn new(x: f64, y: Option<f64>, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A station or junction of the rail network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailNode {
    pub id: String,
    pub location: Location,
    /// Region labels from least to most specific, without empty or repeated entries
    pub regions: Vec<String>,
}

impl RailNode {
    /// A node is a station when its most specific region is the node itself
    #[must_use]
    pub fn is_station(&self) -> bool {
        self.regions.last().is_some_and(|region| *region == self.id)
    }

    #[must_use]
    pub fn is_junction(&self) -> bool {
        !self.is_station()
    }
}
