//! SVG rendering of the scatter figure with plotters.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use corrlab_core::constants::POINT_OPACITY;
use corrlab_core::plot::ScatterPlot;

/// Output size in pixels.
pub const SVG_SIZE: (u32, u32) = (800, 600);

const POINT_RADIUS: i32 = 3;

/// Errors raised while drawing a figure.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to draw plot: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Draw(err.to_string())
}

/// Render the figure to an SVG file.
pub fn render_svg(path: &Path, plot: &ScatterPlot) -> Result<(), PlotError> {
    let root = SVGBackend::new(path, SVG_SIZE).into_drawing_area();
    draw(&root, plot)
}

/// Render the figure to an SVG document in memory.
pub fn render_svg_string(plot: &ScatterPlot) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SVG_SIZE).into_drawing_area();
        draw(&root, plot)?;
    }
    Ok(svg)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &ScatterPlot,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(plot.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            plot.x_bounds[0]..plot.x_bounds[1],
            plot.y_bounds[0]..plot.y_bounds[1],
        )
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(plot.x_label)
        .y_desc(plot.y_label)
        .draw()
        .map_err(draw_err)?;

    let point_style = BLUE.mix(POINT_OPACITY).filled();
    chart
        .draw_series(
            plot.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), POINT_RADIUS, point_style)),
        )
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrlab_core::dataset::generate_seeded;
    use corrlab_core::params::Params;

    fn figure() -> ScatterPlot {
        let params = Params::new(50, 2.0, 1.0).unwrap();
        ScatterPlot::from_dataset(&generate_seeded(&params, 42))
    }

    #[test]
    fn svg_string_has_one_circle_per_point() {
        let svg = render_svg_string(&figure()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("y vs x (linear model with noise)"));
        assert_eq!(svg.matches("<circle").count(), 50);
    }

    #[test]
    fn svg_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scatter.svg");
        render_svg(&path, &figure()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("</svg>"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("scatter.svg");
        assert!(render_svg(&path, &figure()).is_err());
    }
}
