use log::info;

use crate::Result;
use crate::config::Config;
use crate::input::Reader;
use crate::output::to_dot_file;
use crate::render::render_tour;

/// Reads both input files and renders the chart.
///
/// Every path comes from `config`. Any read, parse or lookup failure aborts
/// the run before the chart is written.
pub fn run(config: &Config) -> Result<()> {
    let reader = Reader::new(config.layout);
    info!("reading {} input", config.layout);

    let cities = reader.read_cities(&config.cities_path)?;
    info!("{} cities in {}", cities.len(), config.cities_path.display());

    let tour = reader.read_tour(&config.tour_path)?;
    info!(
        "{} edges in {}, total distance {:.2}",
        tour.edges.len(),
        config.tour_path.display(),
        tour.total_distance
    );

    render_tour(&cities, &tour, &config.chart_path, config.chart_size)?;

    if let Some(dot_path) = &config.dot_path {
        to_dot_file(&cities, &tour, dot_path)?;
        info!("DOT graph written to {}", dot_path.display());
    }

    Ok(())
}
