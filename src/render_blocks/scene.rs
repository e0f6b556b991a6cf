use std::ops::Range;

use crate::Result;
use crate::error::Error;
use crate::types::{CityId, CityMap, Edge, Tour};

pub const TITLE: &str = "Melhor Caminho - Força Bruta";
pub const DISTANCE_UNIT: &str = "Km";

/// Offset between a city marker and its id label, in plot units.
pub const LABEL_OFFSET: f64 = 1.0;

/// A city as it appears on the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CityMarker {
    pub id: CityId,
    pub at: (f64, f64),
    pub label: String,
    pub label_at: (f64, f64),
    /// Entry shown in the legend.
    pub legend: String,
    /// Index into the marker palette; distinct per city.
    pub color_index: usize,
}

/// A tour leg as it appears on the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub edge: Edge,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub label: String,
    pub label_at: (f64, f64),
}

/// Everything the chart shows, independent of the drawing backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub cities: Vec<CityMarker>,
    pub segments: Vec<Segment>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl Scene {
    /// Lays out the cities and the tour.
    ///
    /// Fails on the first leg whose endpoint is not in `cities`; no leg is
    /// ever left out of the scene.
    pub fn build(cities: &CityMap, tour: &Tour) -> Result<Scene> {
        let markers = cities
            .iter()
            .enumerate()
            .map(|(i, city)| {
                let (x, y) = city.position();
                CityMarker {
                    id: city.id,
                    at: (x, y),
                    label: city.id.to_string(),
                    label_at: (x + LABEL_OFFSET, y + LABEL_OFFSET),
                    legend: format!("Cidade {}", city.id),
                    color_index: i,
                }
            })
            .collect();

        let mut segments = Vec::with_capacity(tour.edges.len());
        for edge in &tour.edges {
            let from = lookup(cities, edge.from, edge)?;
            let to = lookup(cities, edge.to, edge)?;
            segments.push(Segment {
                edge: *edge,
                from,
                to,
                label: format_distance(edge.weight),
                label_at: ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0),
            });
        }

        let (x_range, y_range) = bounds(cities);

        Ok(Scene {
            title: TITLE.to_string(),
            subtitle: format!("Distância Total: {}", format_distance(tour.total_distance)),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            cities: markers,
            segments,
            x_range,
            y_range,
        })
    }
}

/// Formats a distance the way every chart label shows it, e.g. `5.00 Km`.
pub fn format_distance(distance: f64) -> String {
    format!("{:.2} {}", distance, DISTANCE_UNIT)
}

fn lookup(cities: &CityMap, id: CityId, edge: &Edge) -> Result<(f64, f64)> {
    cities
        .get(id)
        .map(|c| c.position())
        .ok_or(Error::UnknownCity { city: id, edge: *edge })
}

/// Axis ranges covering every city, its id label, and some padding.
fn bounds(cities: &CityMap) -> (Range<f64>, Range<f64>) {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for city in cities.iter() {
        let (x, y) = city.position();
        min = (min.0.min(x), min.1.min(y));
        max = (max.0.max(x + LABEL_OFFSET), max.1.max(y + LABEL_OFFSET));
    }
    if cities.is_empty() {
        min = (0.0, 0.0);
        max = (0.0, 0.0);
    }
    (pad(min.0, max.0), pad(min.1, max.1))
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let margin = ((max - min) * 0.1).max(1.0);
    (min - margin)..(max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::City;

    fn square() -> CityMap {
        [
            City::new(1, 0, 0),
            City::new(2, 10, 0),
            City::new(3, 10, 10),
            City::new(4, 0, 10),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_markers_follow_map_order() {
        let scene = Scene::build(&square(), &Tour::default()).unwrap();
        let ids: Vec<_> = scene.cities.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let colors: Vec<_> = scene.cities.iter().map(|m| m.color_index).collect();
        assert_eq!(colors, vec![0, 1, 2, 3]);

        let third = &scene.cities[2];
        assert_eq!(third.at, (10.0, 10.0));
        assert_eq!(third.label, "3");
        assert_eq!(third.label_at, (11.0, 11.0));
        assert_eq!(third.legend, "Cidade 3");
    }

    #[test]
    fn test_segments_and_labels() {
        let tour = Tour::new(
            vec![Edge::new(1, 3, 14.142135), Edge::new(3, 1, 14.142135)],
            28.284,
        );
        let scene = Scene::build(&square(), &tour).unwrap();

        assert_eq!(scene.segments.len(), 2);
        let first = &scene.segments[0];
        assert_eq!(first.from, (0.0, 0.0));
        assert_eq!(first.to, (10.0, 10.0));
        assert_eq!(first.label, "14.14 Km");
        assert_eq!(first.label_at, (5.0, 5.0));
        assert_eq!(scene.subtitle, "Distância Total: 28.28 Km");
        assert_eq!(scene.title, TITLE);
    }

    #[test]
    fn test_dangling_reference_fails() {
        let tour = Tour::new(vec![Edge::new(1, 2, 1.0), Edge::new(1, 99, 3.0)], 4.0);
        let err = Scene::build(&square(), &tour).unwrap_err();
        match err {
            Error::UnknownCity { city, edge } => {
                assert_eq!(city, 99);
                assert_eq!(edge, Edge::new(1, 99, 3.0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bounds_cover_cities_and_labels() {
        let scene = Scene::build(&square(), &Tour::default()).unwrap();
        assert!(scene.x_range.start < 0.0 && scene.x_range.end > 11.0);
        assert!(scene.y_range.start < 0.0 && scene.y_range.end > 11.0);
    }

    #[test]
    fn test_bounds_never_collapse() {
        let single: CityMap = [City::new(1, 5, 5)].into_iter().collect();
        let scene = Scene::build(&single, &Tour::default()).unwrap();
        assert!(scene.x_range.end - scene.x_range.start > 0.0);

        let empty = Scene::build(&CityMap::new(), &Tour::default()).unwrap();
        assert!(empty.y_range.end - empty.y_range.start > 0.0);
        assert_eq!(empty.subtitle, "Distância Total: 0.00 Km");
    }

    #[test]
    fn test_build_is_deterministic() {
        let tour = Tour::new(vec![Edge::new(4, 2, 14.14)], 14.14);
        assert_eq!(
            Scene::build(&square(), &tour).unwrap(),
            Scene::build(&square(), &tour).unwrap()
        );
    }
}
