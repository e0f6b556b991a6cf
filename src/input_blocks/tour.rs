use std::io::BufRead;
use std::path::Path;

use log::trace;

use crate::Result;
use crate::error::{Error, LineError};
use crate::input_blocks::layout::{ARROW, Layout, SUMMARY_MARKER, parse_int};
use crate::types::{Edge, Tour};

/// What a tour line was recognised as.
#[derive(Debug, PartialEq)]
pub(crate) enum TourLine {
    Edge(Edge),
    Total(f64),
    Ignored,
}

/// Classifies a line by substring: arrow first, then the summary marker.
pub(crate) fn classify_line(layout: Layout, line: &str) -> std::result::Result<TourLine, LineError> {
    if line.contains(ARROW) {
        parse_edge_line(layout, line).map(TourLine::Edge)
    } else if line.contains(SUMMARY_MARKER) {
        parse_summary_line(layout, line).map(TourLine::Total)
    } else {
        Ok(TourLine::Ignored)
    }
}

fn parse_edge_line(layout: Layout, line: &str) -> std::result::Result<Edge, LineError> {
    let (ends, rest) = line
        .split_once(':')
        .ok_or(LineError::Shape("\"<from> -> <to> : <weight>\""))?;
    let mut ids = ends.trim().split(ARROW);
    let (Some(from), Some(to), None) = (ids.next(), ids.next(), ids.next()) else {
        return Err(LineError::Shape("exactly two city ids around \"->\""));
    };
    let weight = rest
        .split_whitespace()
        .next()
        .ok_or(LineError::Shape("a weight after ':'"))?;
    Ok(Edge::new(parse_int(from)?, parse_int(to)?, layout.parse_number(weight)?))
}

fn parse_summary_line(layout: Layout, line: &str) -> std::result::Result<f64, LineError> {
    let (_, rest) = line
        .rsplit_once(':')
        .ok_or(LineError::Shape("\"Distancia total: <distance>\""))?;
    let total = rest
        .split_whitespace()
        .next()
        .ok_or(LineError::Shape("a distance after ':'"))?;
    layout.parse_number(total)
}

/// Builds a tour from the solver's output.
///
/// Lines that are neither legs nor the summary are skipped. Without a summary
/// line the total is zero; with several, the last one counts. `path` only
/// names the input in errors.
pub(crate) fn parse_tour<R: BufRead>(layout: Layout, reader: R, path: &Path) -> Result<Tour> {
    let mut tour = Tour::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::read(path, i + 1, e))?;
        match classify_line(layout, &line).map_err(|e| e.at(path, i + 1, &line))? {
            TourLine::Edge(edge) => {
                trace!("line {}: edge {} weighing {}", i + 1, edge, edge.weight);
                tour.edges.push(edge);
            }
            TourLine::Total(total) => {
                trace!("line {}: total distance {}", i + 1, total);
                tour.total_distance = total;
            }
            TourLine::Ignored => trace!("line {}: ignored", i + 1),
        }
    }

    Ok(tour)
}
