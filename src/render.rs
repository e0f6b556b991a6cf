use std::path::Path;

use log::info;

use crate::Result;
use crate::render_blocks::plot::render_svg;
use crate::render_blocks::scene::Scene;
use crate::types::{CityMap, Tour};

/// Draws the cities and the tour into an SVG chart at `path`.
///
/// Each city gets a marker, its id and a legend entry; each leg gets a line
/// and its weight at the midpoint; the title carries the total distance.
///
/// The whole scene is laid out before anything is drawn, so a leg that names
/// an unknown city fails the call without producing a file.
pub fn render_tour(
    cities: &CityMap,
    tour: &Tour,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<()> {
    let path = path.as_ref();
    let scene = Scene::build(cities, tour)?;
    render_svg(&scene, path, size)?;
    info!(
        "chart with {} cities and {} edges written to {}",
        scene.cities.len(),
        scene.segments.len(),
        path.display()
    );
    Ok(())
}
