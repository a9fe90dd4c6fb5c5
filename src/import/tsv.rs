use std::collections::HashMap;

use crate::constants::{COORDINATE_HEADERS, NAME_HEADER, PLACEHOLDER_CELL, REGION_HEADERS, REGION_LEVELS};
use crate::logging::log;
use crate::models::{Location, RailNode, World};

use super::shared::{parse_coordinate, unique_in_order};

/// Positions of the columns the parser reads, located by exact header match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetColumns {
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub z: Option<usize>,
    pub name: Option<usize>,
    /// One entry per region level, least specific first
    pub regions: [Option<usize>; REGION_LEVELS],
}

impl SheetColumns {
    /// Locate columns in the header row. Empty header cells are ignored;
    /// if a label repeats, the rightmost column wins.
    #[must_use]
    pub fn from_header(header: &csv::StringRecord) -> Self {
        let by_label: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .filter(|(_, label)| !label.is_empty())
            .map(|(index, label)| (label, index))
            .collect();

        let [x, y, z] = COORDINATE_HEADERS.map(|label| by_label.get(label).copied());

        Self {
            x,
            y,
            z,
            name: by_label.get(NAME_HEADER).copied(),
            regions: REGION_HEADERS.map(|label| by_label.get(label).copied()),
        }
    }

    fn cell<'r>(row: &'r csv::StringRecord, column: Option<usize>) -> Option<&'r str> {
        column.and_then(|index| row.get(index))
    }

    /// Build a node from one data row
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when the row has no finite
    /// X or Z coordinate, or no name.
    pub fn parse_row(&self, row: &csv::StringRecord) -> Result<RailNode, String> {
        let x = Self::cell(row, self.x)
            .and_then(parse_coordinate)
            .ok_or("no numeric X coordinate")?;
        let z = Self::cell(row, self.z)
            .and_then(parse_coordinate)
            .ok_or("no numeric Z coordinate")?;
        let y = Self::cell(row, self.y).and_then(parse_coordinate);

        let id = Self::cell(row, self.name)
            .filter(|name| !name.is_empty())
            .ok_or("missing Name")?
            .to_string();

        let labels = self
            .regions
            .iter()
            .filter_map(|&column| Self::cell(row, column))
            .filter(|label| !label.is_empty() && *label != PLACEHOLDER_CELL);
        let regions = unique_in_order(labels)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        Ok(RailNode {
            id,
            location: Location::new(x, y, z),
            regions,
        })
    }
}

/// A data row that did not become a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source text, header and blank lines included
    pub line: u64,
    pub reason: String,
}

/// Result of reading every row of a sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    pub world: World,
    pub skipped: Vec<SkippedRow>,
}

/// Line of the first record byte at `position`. The reader reports a record
/// after blank lines at the first blank line, so those are counted here.
fn record_line(raw: &str, position: &csv::Position) -> u64 {
    let start = usize::try_from(position.byte()).map_or(raw.len(), |byte| byte.min(raw.len()));
    let blank_lines = raw.as_bytes()[start..]
        .iter()
        .take_while(|&&byte| byte == b'\n' || byte == b'\r')
        .filter(|&&byte| byte == b'\n')
        .map(|_| 1u64)
        .sum::<u64>();
    position.line() + blank_lines
}

/// Read every data row of a non-empty sheet, keeping the rows that fail.
#[must_use]
pub fn parse_rows(raw: &str) -> ParsedSheet {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut records = reader.records();

    let columns = match records.next() {
        Some(Ok(header)) => SheetColumns::from_header(&header),
        Some(Err(e)) => {
            leptos::logging::error!("Failed to read header row: {}", e);
            SheetColumns::default()
        }
        None => SheetColumns::default(),
    };

    let mut parsed = ParsedSheet::default();

    for record in records {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                parsed.skipped.push(SkippedRow {
                    line: e.position().map_or(0, |position| record_line(raw, position)),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match columns.parse_row(&row) {
            Ok(node) => {
                parsed.world.insert(node);
            }
            Err(reason) => parsed.skipped.push(SkippedRow {
                line: row.position().map_or(0, |position| record_line(raw, position)),
                reason,
            }),
        }
    }

    parsed
}

/// Parse the tab-separated spreadsheet export into a [`World`].
///
/// Returns `None` while there is no text yet. Rows without usable
/// coordinates (section headings, notes) are skipped with a diagnostic
/// naming their 1-based line number, header included. A later row with an
/// already seen name replaces the earlier one.
#[must_use]
pub fn parse_tsv(raw: Option<&str>) -> Option<World> {
    let raw = raw.filter(|text| !text.is_empty())?;
    let ParsedSheet { world, skipped } = parse_rows(raw);

    for row in &skipped {
        leptos::logging::warn!("Skipping row {}: {}", row.line, row.reason);
    }
    log!("Parsed {} nodes, skipped {} rows", world.len(), skipped.len());

    Some(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name\tX\tY\tZ\tQuadrant\tRegion\tL3 Region\tL4 Region\tL5 Region\tStop";

    fn sheet(rows: &[&str]) -> String {
        std::iter::once(HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_absent_input() {
        assert!(parse_tsv(None).is_none());
        assert!(parse_tsv(Some("")).is_none());
    }

    #[test]
    fn test_header_only_gives_empty_world() {
        let world = parse_tsv(Some(HEADER)).expect("world should exist");
        assert!(world.is_empty());
    }

    #[test]
    fn test_single_station_row() {
        let text = sheet(&["A\t1\t0\t2\t\tA\t\t\t\t"]);
        let world = parse_tsv(Some(&text)).expect("world should exist");

        let node = world.get("A").expect("A should be parsed");
        assert_eq!(
            *node,
            RailNode {
                id: "A".to_string(),
                location: Location::new(1.0, Some(0.0), 2.0),
                regions: vec!["A".to_string()],
            }
        );
        assert!(node.is_station());
    }

    #[test]
    fn test_approximate_coordinates() {
        let text = sheet(&["B\t~5\t\t~-7\tNorth\t\t\t\t\t"]);
        let world = parse_tsv(Some(&text)).expect("world should exist");

        let node = world.get("B").expect("B should be parsed");
        assert_eq!(node.location, Location::new(5.0, None, -7.0));
        assert!(node.is_junction());
    }

    #[test]
    fn test_rows_without_coordinates_are_dropped() {
        let text = sheet(&[
            "Empty\t\t0\t2\t\t\t\t\t\t",
            "Letters\tabc\t0\t2\t\t\t\t\t\t",
            "NoZ\t1\t0\t\t\t\t\t\t\t",
            "Good\t1\t0\t2\t\t\t\t\t\t",
        ]);
        let world = parse_tsv(Some(&text)).expect("world should exist");

        assert_eq!(world.len(), 1);
        assert!(world.get("Empty").is_none());
        assert!(world.get("Letters").is_none());
        assert!(world.get("NoZ").is_none());
        assert!(world.get("Good").is_some());
    }

    #[test]
    fn test_duplicate_names_last_row_wins() {
        let text = sheet(&["A\t1\t\t1\t\t\t\t\t\t", "A\t9\t\t8\t\t\t\t\t\t"]);
        let world = parse_tsv(Some(&text)).expect("world should exist");

        assert_eq!(world.len(), 1);
        assert_eq!(world.get("A").map(|n| n.location), Some(Location::new(9.0, None, 8.0)));
    }

    #[test]
    fn test_regions_filtered_and_deduplicated() {
        let text = sheet(&["Spawn\t0\t64\t0\tNorth\tCore\t-\tCore\t\tSpawn"]);
        let world = parse_tsv(Some(&text)).expect("world should exist");

        let node = world.get("Spawn").expect("Spawn should be parsed");
        assert_eq!(node.regions, vec!["North", "Core", "Spawn"]);
        assert!(node.is_station());
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let text = "Notes\tZ\tStop\tX\tName\nhello\t3\tC\t4\tC\n";
        let world = parse_tsv(Some(text)).expect("world should exist");

        let node = world.get("C").expect("C should be parsed");
        assert_eq!(node.location, Location::new(4.0, None, 3.0));
        assert_eq!(node.regions, vec!["C"]);
    }

    #[test]
    fn test_cells_are_trimmed_and_crlf_accepted() {
        let text = "Name\t X \tZ\r\n  Padded \t 10 \t 20 \r\n";
        let world = parse_tsv(Some(text)).expect("world should exist");

        assert_eq!(world.get("Padded").map(|n| n.location), Some(Location::new(10.0, None, 20.0)));
    }

    #[test]
    fn test_short_rows_and_missing_name() {
        let text = sheet(&["Short\t1", "\t1\t\t2\t\t\t\t\t\t", "Ok\t3\t\t4"]);
        let world = parse_tsv(Some(&text)).expect("world should exist");

        assert_eq!(world.len(), 1);
        assert!(world.get("Ok").is_some());
    }

    #[test]
    fn test_missing_coordinate_column_drops_every_row() {
        let text = "Name\tX\nA\t1\nB\t2\n";
        let world = parse_tsv(Some(text)).expect("world should exist");
        assert!(world.is_empty());
    }

    #[test]
    fn test_skipped_rows_count_blank_lines() {
        let parsed = parse_rows("Name\tX\tZ\nA\t1\t2\n\nB\tabc\t2\nC\t1\t~\n");

        assert_eq!(parsed.world.len(), 1);
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedRow { line: 4, reason: "no numeric X coordinate".to_string() },
                SkippedRow { line: 5, reason: "no numeric Z coordinate".to_string() },
            ]
        );
    }

    #[test]
    fn test_skipped_rows_after_several_blank_lines() {
        let parsed = parse_rows("Name\tX\tZ\n\n\nNote\nA\t1\t2\n");

        assert_eq!(parsed.world.len(), 1);
        assert_eq!(parsed.skipped.iter().map(|row| row.line).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_fixture_skipped_lines() {
        let parsed = parse_rows(include_str!("../../test-data/rails.tsv"));
        let lines: Vec<u64> = parsed.skipped.iter().map(|row| row.line).collect();

        // Section headings on lines 2 and 8 (after the blank line 7), "Old Spawn" on line 5
        assert!(lines.contains(&2), "{lines:?}");
        assert!(lines.contains(&5), "{lines:?}");
        assert!(lines.contains(&8), "{lines:?}");
        assert!(!lines.contains(&7), "{lines:?}");
    }

    #[test]
    fn test_fixture() {
        let text = include_str!("../../test-data/rails.tsv");
        let world = parse_tsv(Some(text)).expect("world should exist");

        assert_eq!(world.len(), 8);
        assert!(world.get("Old Spawn").is_none());
        assert_eq!(world.get("Spawn").map(|n| n.location.x), Some(5.0));
        assert_eq!(world.get("Mount Augusta").map(|n| n.location.z), Some(-3300.0));
        assert_eq!(world.stations().count(), 6);
    }
}
