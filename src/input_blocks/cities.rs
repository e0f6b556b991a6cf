use std::io::BufRead;
use std::path::Path;

use log::trace;

use crate::Result;
use crate::error::Error;
use crate::input_blocks::layout::Layout;
use crate::types::{CityId, CityMap};

/// Builds a city map from coordinate lines, skipping blank ones.
///
/// A repeated id overwrites the earlier entry. `path` only names the input in errors.
pub(crate) fn parse_cities<R: BufRead>(layout: Layout, reader: R, path: &Path) -> Result<CityMap> {
    let mut cities = CityMap::new();
    let mut ordinal: CityId = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::read(path, i + 1, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        ordinal += 1;
        let city = layout
            .parse_city_line(ordinal, trimmed)
            .map_err(|e| e.at(path, i + 1, &line))?;
        trace!("line {}: city {} at ({}, {})", i + 1, city.id, city.x, city.y);
        if let Some(previous) = cities.insert(city) {
            trace!("city {} redefined, dropping ({}, {})", previous.id, previous.x, previous.y);
        }
    }

    Ok(cities)
}
