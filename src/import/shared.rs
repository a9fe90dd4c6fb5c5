use std::collections::HashSet;
use std::hash::Hash;

use crate::constants::APPROXIMATE_MARKER;

/// Parse a coordinate cell, ignoring the approximate marker (`~1200` reads as 1200).
/// Empty cells and values that are not finite numbers yield `None`.
#[must_use]
pub fn parse_coordinate(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    let cleaned = cell.replacen(APPROXIMATE_MARKER, "", 1);
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Drop repeated values, keeping the first occurrence of each
#[must_use]
pub fn unique_in_order<T: Eq + Hash + Clone>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_plain() {
        assert_eq!(parse_coordinate("12"), Some(12.0));
        assert_eq!(parse_coordinate("-3.5"), Some(-3.5));
        assert_eq!(parse_coordinate("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_coordinate_approximate() {
        assert_eq!(parse_coordinate("~5"), Some(5.0));
        assert_eq!(parse_coordinate("-~40"), Some(-40.0));
        assert_eq!(parse_coordinate("~ 7"), Some(7.0));
    }

    #[test]
    fn test_parse_coordinate_rejects_non_numbers() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate("~"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("NaN"), None);
    }

    #[test]
    fn test_unique_in_order() {
        let values = vec!["North", "Core", "North", "Spawn", "Core"];
        assert_eq!(unique_in_order(values), vec!["North", "Core", "Spawn"]);

        let empty: Vec<&str> = unique_in_order(Vec::new());
        assert!(empty.is_empty());
    }
}
