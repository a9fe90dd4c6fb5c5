/// Spreadsheet export of the rail network, one row per station or junction
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1zYh7a0l1Faa05buJpwo1HNeP538MA9BxAm643n0U7tY/export?gid=0&format=tsv";

/// Root of the base-map tile repository
pub const DEFAULT_TILES_ROOT: &str = "https://raw.githubusercontent.com/ccmap/tiles/master/";

pub const DEFAULT_BASE_MAP_ID: &str = "terrain";

/// At zoom -4 one tile covers 4096 world units
pub const DEFAULT_TILE_ZOOM: i32 = -4;

/// Range of base-map zoom levels settings may select
pub const MIN_TILE_ZOOM: i32 = -8;
pub const MAX_TILE_ZOOM: i32 = 2;

/// Edge length of a base-map tile image in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Coordinate columns, in (x, y, z) order
pub const COORDINATE_HEADERS: [&str; 3] = ["X", "Y", "Z"];

pub const NAME_HEADER: &str = "Name";

/// Region hierarchy columns, from least to most specific
pub const REGION_LEVELS: usize = 6;

pub const REGION_HEADERS: [&str; REGION_LEVELS] = [
    "Quadrant",
    "Region",
    "L3 Region",
    "L4 Region",
    "L5 Region",
    "Stop",
];

/// Cell value meaning "not applicable" in region columns
pub const PLACEHOLDER_CELL: &str = "-";

/// Marks a coordinate as approximate, e.g. `~1200`
pub const APPROXIMATE_MARKER: char = '~';

/// Node markers are sized so that the map is this many markers tall
pub const MARKERS_PER_MAP_HEIGHT: f64 = 50.0;

/// Voronoi border stroke width relative to the marker size
pub const CELL_STROKE_RATIO: f64 = 0.05;
