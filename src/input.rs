use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use log::debug;

use crate::Result;
use crate::error::Error;
use crate::input_blocks::cities::parse_cities;
use crate::input_blocks::layout::Layout;
use crate::input_blocks::tour::parse_tour;
use crate::types::{CityMap, Tour};

/// Name given to string input in error messages.
const STR_INPUT: &str = "<string>";

/// Reads the coordinate file and the tour file of one format variant.
///
/// The layout is fixed when the reader is built; both files are expected to
/// use it.
///
/// Coordinate file, positional layout (ids follow line order):
/// ```text
/// 0 0
/// 3 4
/// 10 2
/// ```
///
/// Coordinate file, labeled layout:
/// ```text
/// Cidade 1: (0, 0)
/// Cidade 2: (3, 4)
/// Cidade 3: (10, 2)
/// ```
///
/// Tour file (the labeled layout writes `5,00` instead of `5.00`):
/// ```text
/// Melhor caminho:
/// 1 -> 2: 5.00 Km
/// 2 -> 3: 7.28 Km
/// 3 -> 1: 10.20 Km
/// Distancia total: 22.48 Km
/// ```
///
/// <div class="warning">
///
/// > Nothing checks that the tour visits every city, that its legs chain up,
/// > or that the total matches the legs.
///
/// </div>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reader {
    layout: Layout,
}

impl Reader {
    pub fn new(layout: Layout) -> Self {
        Reader { layout }
    }

    /// Reads a coordinate file.
    pub fn read_cities(&self, path: impl AsRef<Path>) -> Result<CityMap> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file(path, e))?;
        let cities = parse_cities(self.layout, BufReader::new(file), path)?;
        debug!("read {} cities from {}", cities.len(), path.display());
        Ok(cities)
    }

    /// This is equivalent to [`Reader::read_cities`], but takes string as an input.
    pub fn cities_from_str(&self, input: &str) -> Result<CityMap> {
        parse_cities(self.layout, BufReader::new(Cursor::new(input)), Path::new(STR_INPUT))
    }

    /// Reads a tour file.
    pub fn read_tour(&self, path: impl AsRef<Path>) -> Result<Tour> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file(path, e))?;
        let tour = parse_tour(self.layout, BufReader::new(file), path)?;
        debug!("read {} edges from {}", tour.edges.len(), path.display());
        Ok(tour)
    }

    /// This is equivalent to [`Reader::read_tour`], but takes string as an input.
    pub fn tour_from_str(&self, input: &str) -> Result<Tour> {
        parse_tour(self.layout, BufReader::new(Cursor::new(input)), Path::new(STR_INPUT))
    }
}
