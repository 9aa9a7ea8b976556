use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::constants::{
    PLOT_FILE, PLOT_FOLDER, PLOT_FONT_SIZE, PLOT_I_LABEL, PLOT_Q_LABEL, PLOT_SIZE_X, PLOT_SIZE_Y,
    PLOT_TITLE, PLOT_X_LABEL, PLOT_Y_LABEL,
};
use crate::error::IqError;
use crate::recording::IqSeries;
use crate::util::get_min_max;

const Y_MARGIN_RATIO: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            output: Path::new(PLOT_FOLDER).join(PLOT_FILE),
            width: PLOT_SIZE_X,
            height: PLOT_SIZE_Y,
        }
    }
}

fn get_x_range(series: &IqSeries) -> (f64, f64) {
    let x_max = series.duration_sec();
    if x_max > 0.0 { (0.0, x_max) } else { (0.0, 1.0) }
}

fn get_y_range(series: &IqSeries) -> (f64, f64) {
    let Some((y_min, y_max)) = get_min_max(series.i.iter().chain(series.q.iter())) else {
        return (-1.0, 1.0);
    };
    let span = y_max - y_min;
    if !span.is_finite() {
        return (-1.0, 1.0);
    }
    if span <= f64::EPSILON {
        return (y_min - 1.0, y_max + 1.0);
    }
    (y_min - span * Y_MARGIN_RATIO, y_max + span * Y_MARGIN_RATIO)
}

fn create_parent_dir(path: &Path) -> Result<(), IqError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| IqError::FileAccess {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Draws I and Q against time as two overlaid line series and writes the
/// chart as a PNG.
pub fn plot_iq_time_graph(series: &IqSeries, opts: &PlotOptions) -> Result<(), IqError> {
    create_parent_dir(&opts.output)?;

    let root_area = BitMapBackend::new(&opts.output, (opts.width, opts.height)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let (x_min, x_max) = get_x_range(series);
    let (y_min, y_max) = get_y_range(series);

    let mut ctx = ChartBuilder::on(&root_area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .caption(PLOT_TITLE, ("sans-serif", PLOT_FONT_SIZE))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    ctx.configure_mesh()
        .x_desc(PLOT_X_LABEL)
        .y_desc(PLOT_Y_LABEL)
        .light_line_style(&BLACK.mix(0.1))
        .draw()?;

    for (label, values, color) in [
        (PLOT_I_LABEL, &series.i, BLUE),
        (PLOT_Q_LABEL, &series.q, RED),
    ] {
        // non-finite samples are not drawn
        let points = series
            .time
            .iter()
            .copied()
            .zip(values.iter().copied())
            .filter(|(_, v)| v.is_finite());
        ctx.draw_series(LineSeries::new(points, &color))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    ctx.configure_series_labels()
        .border_style(&BLACK.mix(0.3))
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root_area.present()?;
    log::info!("Plot written: {}", opts.output.display());
    Ok(())
}
