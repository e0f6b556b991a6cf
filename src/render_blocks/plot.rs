use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::Result;
use crate::error::Error;
use crate::render_blocks::scene::Scene;

const FONT: &str = "sans-serif";

/// Draws the scene onto any plotters drawing area.
///
/// Segments go below the city markers; weight labels are red and sit at the
/// segment midpoints.
pub fn draw<DB: DrawingBackend>(scene: &Scene, root: &DrawingArea<DB, Shift>) -> Result<()> {
    root.fill(&WHITE).map_err(Error::render)?;
    let area = root
        .titled(&scene.title, (FONT, 28))
        .map_err(Error::render)?;

    let mut chart = ChartBuilder::on(&area)
        .caption(&scene.subtitle, (FONT, 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(scene.x_range.clone(), scene.y_range.clone())
        .map_err(Error::render)?;

    chart
        .configure_mesh()
        .x_desc(scene.x_label.as_str())
        .y_desc(scene.y_label.as_str())
        .draw()
        .map_err(Error::render)?;

    for segment in &scene.segments {
        chart
            .draw_series(LineSeries::new(
                [segment.from, segment.to],
                BLACK.stroke_width(2),
            ))
            .map_err(Error::render)?;
    }

    for marker in &scene.cities {
        let color = Palette99::pick(marker.color_index).to_rgba();
        chart
            .draw_series(std::iter::once(Circle::new(marker.at, 5, color.filled())))
            .map_err(Error::render)?
            .label(marker.legend.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
        chart
            .draw_series(std::iter::once(Text::new(
                marker.label.clone(),
                marker.label_at,
                (FONT, 16),
            )))
            .map_err(Error::render)?;
    }

    let weight_style = (FONT, 13).into_font().color(&RED);
    for segment in &scene.segments {
        chart
            .draw_series(std::iter::once(Text::new(
                segment.label.clone(),
                segment.label_at,
                weight_style.clone(),
            )))
            .map_err(Error::render)?;
    }

    if !scene.cities.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(Error::render)?;
    }

    Ok(())
}

/// Renders the scene as an SVG document.
pub fn render_svg_string(scene: &Scene, size: (u32, u32)) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw(scene, &root)?;
        root.present().map_err(Error::render)?;
    }
    Ok(svg)
}

/// Renders the scene and writes it to `path`.
///
/// Nothing is written unless drawing succeeds.
pub fn render_svg(scene: &Scene, path: impl AsRef<Path>, size: (u32, u32)) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg_string(scene, size)?;
    std::fs::write(path, svg).map_err(|e| Error::file(path, e))
}
