use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info};

use super::builder::GraphBuilder;
use crate::{CityGraph, Error};

/// Load a graph from an edge-list file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Malformed
/// records are skipped, never reported as errors.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<CityGraph, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open edge list '{}': {}", path.display(), e),
        )
    })?;
    info!("Loading edge list: {}", path.display());
    read_edge_list(file)
}

/// Parse an edge list held in memory
///
/// # Errors
///
/// Only fails on reader errors, which an in-memory source does not produce.
pub fn parse_edge_list(text: &str) -> Result<CityGraph, Error> {
    read_edge_list(text.as_bytes())
}

/// Read `CityA-CityB,distance` records, one per line.
///
/// Blank lines are ignored. Records with a missing field, a city field
/// without exactly one `-`, a blank city name, or a distance that is not a
/// non-negative integer are skipped. Fields after the distance are ignored.
///
/// A city field such as `A-B-C` is skipped as a whole; it is not truncated
/// to the edge `A-B`. Quotes carry no meaning: a `"` is an ordinary
/// character of the name or distance it appears in.
///
/// # Errors
///
/// Returns an error if the underlying reader fails.
pub fn read_edge_list<R: Read>(reader: R) -> Result<CityGraph, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut builder = GraphBuilder::new();
    for result in reader.records() {
        match result {
            Ok(record) => add_record(&mut builder, &record),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Skipping unreadable edge record: {e}");
                builder.skip();
            }
        }
    }

    Ok(builder.build())
}

fn add_record(builder: &mut GraphBuilder, record: &StringRecord) {
    let line = record.position().map_or(0, csv::Position::line);

    let (Some(cities), Some(distance)) = (record.get(0), record.get(1)) else {
        debug!("Skipping line {line}: expected `CityA-CityB,distance`");
        builder.skip();
        return;
    };

    match split_cities(cities) {
        Some((from, to)) => {
            builder.add_raw_edge(from, to, distance);
        }
        None => {
            debug!("Skipping line {line}: city pair {cities:?} is not `CityA-CityB`");
            builder.skip();
        }
    }
}

/// Split `CityA-CityB` on its single separator
fn split_cities(field: &str) -> Option<(&str, &str)> {
    let (from, to) = field.split_once('-')?;
    if to.contains('-') {
        return None;
    }
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cities() {
        assert_eq!(split_cities("Paris-Lyon"), Some(("Paris", "Lyon")));
        assert_eq!(split_cities("New York-Boston"), Some(("New York", "Boston")));
        assert_eq!(split_cities("Paris"), None);
        assert_eq!(split_cities("Aix-en-Provence"), None);
        assert_eq!(split_cities("-Lyon"), Some(("", "Lyon")));
    }

    #[test]
    fn test_parse_well_formed() {
        let g = parse_edge_list("A-B,5\nB-C,3\n").unwrap();
        assert_eq!(g.city_count(), 3);
        assert_eq!(g.serialize(), vec!["A-B,5", "B-A,5", "B-C,3", "C-B,3"]);
    }

    #[test]
    fn test_malformed_line_skipped() {
        let g = parse_edge_list("A-B,5\nC-D,far\n").unwrap();
        assert_eq!(g.serialize(), vec!["A-B,5", "B-A,5"]);
        assert!(!g.has_city("C"));
        assert!(!g.has_city("D"));
    }

    #[test]
    fn test_tolerates_noise() {
        let text = "\n\
            A-B,5\n\
            \n\
            justtext\n\
            B-C\n\
            -C,4\n\
            C-,4\n\
            C-D,-2\n\
            Aix-en-Provence,10\n\
            D-E, 7 \n\
            E-F,1,extra\r\n\
            F-G,2";
        let g = parse_edge_list(text).unwrap();
        assert_eq!(
            g.serialize(),
            vec!["A-B,5", "B-A,5", "D-E,7", "E-D,7", "E-F,1", "F-E,1", "F-G,2", "G-F,2"]
        );
    }

    #[test]
    fn test_quotes_are_plain_text() {
        let g = parse_edge_list("A-B,5\n\"Bad-C,3\nC-D,4\nD-E,6\n").unwrap();
        assert!(g.has_city("\"Bad"));
        assert!(g.has_city("D"));
        assert!(g.has_city("E"));
        assert_eq!(g.edge_count(), 8);

        let g = parse_edge_list("A-B,5\nX-Y,\"7\nC-D,4\n").unwrap();
        assert_eq!(g.serialize(), vec!["A-B,5", "B-A,5", "C-D,4", "D-C,4"]);
        assert!(!g.has_city("X"));
    }

    #[test]
    fn test_empty_input() {
        let g = parse_edge_list("").unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_edge_list("/definitely/not/here/cities.txt").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("cities.txt"));
    }
}
