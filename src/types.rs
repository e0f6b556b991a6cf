use hashbrown::HashMap;

use crate::input_blocks::layout::{Layout, SUMMARY_MARKER};

/// Identifier of a city, 1-based.
pub type CityId = u32;

/// A labeled point on the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct City {
    pub id: CityId,
    pub x: i64,
    pub y: i64,
}

impl City {
    pub fn new(id: CityId, x: i64, y: i64) -> Self {
        City { id, x, y }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

/// Cities keyed by id, iterated in insertion order.
///
/// Inserting an id that is already present replaces its coordinates in place,
/// so the city keeps the position it was first seen at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityMap {
    cities: Vec<City>,
    index: HashMap<CityId, usize>,
}

impl CityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a city, returning the one it replaced (if any).
    pub fn insert(&mut self, city: City) -> Option<City> {
        match self.index.get(&city.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.cities[pos], city)),
            None => {
                self.index.insert(city.id, self.cities.len());
                self.cities.push(city);
                None
            }
        }
    }

    pub fn get(&self, id: CityId) -> Option<&City> {
        self.index.get(&id).map(|&pos| &self.cities[pos])
    }

    /// Position of the city in insertion order.
    pub fn ordinal(&self, id: CityId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Writes the cities in the given coordinate layout.
    ///
    /// The positional layout carries no ids, so reading the result back only
    /// reproduces the map when its ids are `1..=n` in order.
    pub fn to_layout_string(&self, layout: Layout) -> String {
        let mut output = String::new();
        for city in &self.cities {
            match layout {
                Layout::Positional => {
                    output.push_str(&format!("{} {}\n", city.x, city.y));
                }
                Layout::Labeled => {
                    output.push_str(&format!("Cidade {}: ({}, {})\n", city.id, city.x, city.y));
                }
            }
        }
        output
    }
}

impl FromIterator<City> for CityMap {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut map = CityMap::new();
        for city in iter {
            map.insert(city);
        }
        map
    }
}

/// One leg of a tour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: CityId,
    pub to: CityId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: CityId, to: CityId, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A tour as reported by the solver: its legs in traversal order and the total it printed.
///
/// `total_distance` is read from its own line and is not checked against the legs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tour {
    pub edges: Vec<Edge>,
    pub total_distance: f64,
}

impl Tour {
    pub fn new(edges: Vec<Edge>, total_distance: f64) -> Self {
        Tour {
            edges,
            total_distance,
        }
    }

    /// Writes the tour the way the solver does, with a header line first.
    pub fn to_layout_string(&self, layout: Layout) -> String {
        let mut output = String::from("Melhor caminho:\n");
        for edge in &self.edges {
            output.push_str(&format!(
                "{} -> {}: {} Km\n",
                edge.from,
                edge.to,
                layout.format_number(edge.weight)
            ));
        }
        output.push_str(&format!(
            "{}: {} Km\n",
            SUMMARY_MARKER,
            layout.format_number(self.total_distance)
        ));
        output
    }
}
