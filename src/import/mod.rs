pub mod shared;
pub mod tsv;

// Re-export commonly used items
pub use shared::{parse_coordinate, unique_in_order};
pub use tsv::{parse_rows, parse_tsv, ParsedSheet, SheetColumns, SkippedRow};
