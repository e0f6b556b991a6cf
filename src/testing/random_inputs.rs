use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::types::{City, CityMap, Edge, Tour};

/// Generates `n` cities with ids `1..=n` and coordinates in `0..=max_coord`.
pub fn random_cities(n: usize, max_coord: i64, seed: usize) -> CityMap {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    (1..=n)
        .map(|id| {
            City::new(
                id as u32,
                rng.random_range(0..=max_coord),
                rng.random_range(0..=max_coord),
            )
        })
        .collect()
}

/// Generates a closed tour over `cities` in a random order.
///
/// Weights are euclidean distances rounded to two decimals, so they survive
/// being written with two decimals and read back. The total is their sum.
pub fn random_tour(cities: &CityMap, seed: usize) -> Tour {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut order: Vec<&City> = cities.iter().collect();
    order.shuffle(&mut rng);

    let mut edges = Vec::with_capacity(order.len());
    if order.len() > 1 {
        for (i, &from) in order.iter().enumerate() {
            let to = order[(i + 1) % order.len()];
            edges.push(Edge::new(from.id, to.id, rounded_distance(from, to)));
        }
    }

    let total = (edges.iter().map(|e| e.weight).sum::<f64>() * 100.0).round() / 100.0;
    Tour::new(edges, total)
}

fn rounded_distance(a: &City, b: &City) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    ((dx * dx + dy * dy).sqrt() * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tour_visits_every_city_once() {
        let cities = random_cities(9, 100, 3);
        let tour = random_tour(&cities, 11);
        assert_eq!(tour.edges.len(), 9);

        let mut from: Vec<_> = tour.edges.iter().map(|e| e.from).collect();
        let mut to: Vec<_> = tour.edges.iter().map(|e| e.to).collect();
        from.sort();
        to.sort();
        assert_eq!(from, (1..=9).collect::<Vec<u32>>());
        assert_eq!(to, from);
        for pair in tour.edges.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_random_tour_is_seeded() {
        let cities = random_cities(6, 50, 1);
        assert_eq!(random_tour(&cities, 5), random_tour(&cities, 5));
        assert_eq!(random_cities(6, 50, 1), cities);
    }

    #[test]
    fn test_random_tour_single_city() {
        let cities = random_cities(1, 10, 0);
        let tour = random_tour(&cities, 0);
        assert!(tour.edges.is_empty());
        assert_eq!(tour.total_distance, 0.0);
    }
}
