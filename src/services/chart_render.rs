use std::io;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::domain::manager::Rgb;
use crate::services::chart_spec::{Bar, ChartSlot, ChartSpec, Dataset};
use crate::services::render_targets::ChartSurface;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to prepare chart output {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to render chart: {0}")]
    Render(String),
}

const CHART_SIZE: (u32, u32) = (1000, 600);
const GRID_COLOR: RGBColor = RGBColor(31, 41, 55);
const TICK_COLOR: RGBColor = RGBColor(203, 213, 225);
const BACKGROUND: RGBColor = RGBColor(15, 23, 42);

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn y_upper_bound(max_value: i64) -> i64 {
    max_value.saturating_add(max_value / 10).saturating_add(1)
}

pub fn write_chart_png(output_path: &Path, spec: &ChartSpec) -> Result<(), ChartError> {
    match spec {
        ChartSpec::Bar { caption, bars } => {
            render_bar_png(output_path, caption, bars, spec.max_value())
        }
        ChartSpec::Line {
            caption,
            labels,
            datasets,
            filled,
            legend,
        } => render_line_png(
            output_path,
            caption,
            labels,
            datasets,
            *filled,
            *legend,
            spec.max_value(),
        ),
    }
}

fn render_bar_png(
    output_path: &Path,
    caption: &str,
    bars: &[Bar],
    max_value: i64,
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let max_x = bars.len().max(1) as i32;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 26).into_font().color(&TICK_COLOR))
        .x_label_area_size(55)
        .y_label_area_size(70)
        .build_cartesian_2d(0..max_x, 0..y_upper_bound(max_value))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(GRID_COLOR)
        .bold_line_style(GRID_COLOR)
        .label_style(("sans-serif", 16).into_font().color(&TICK_COLOR))
        .x_labels(bars.len().max(1))
        .x_label_formatter(&|index| {
            usize::try_from(*index)
                .ok()
                .and_then(|idx| bars.get(idx))
                .map(|bar| bar.label.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
            let color = rgb(bar.color);
            Rectangle::new(
                [(idx as i32, 0), (idx as i32 + 1, bar.value)],
                color.mix(0.8).filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

fn render_line_png(
    output_path: &Path,
    caption: &str,
    labels: &[String],
    datasets: &[Dataset],
    filled: bool,
    legend: bool,
    max_value: i64,
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let max_x = labels.len().saturating_sub(1).max(1) as i32;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 26).into_font().color(&TICK_COLOR))
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0..max_x, 0..y_upper_bound(max_value))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(GRID_COLOR)
        .bold_line_style(GRID_COLOR)
        .label_style(("sans-serif", 16).into_font().color(&TICK_COLOR))
        .x_labels(labels.len().clamp(1, 12))
        .x_label_formatter(&|index| {
            usize::try_from(*index)
                .ok()
                .and_then(|idx| labels.get(idx))
                .cloned()
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    for dataset in datasets {
        let color = rgb(dataset.color);
        let points: Vec<(i32, i64)> = dataset
            .values
            .iter()
            .enumerate()
            .map(|(idx, value)| (idx as i32, *value))
            .collect();

        if filled {
            chart
                .draw_series(
                    AreaSeries::new(points.iter().copied(), 0, color.mix(0.13))
                        .border_style(color.stroke_width(2)),
                )
                .map_err(|e| ChartError::Render(e.to_string()))?;
        } else {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(|e| ChartError::Render(e.to_string()))?
                .label(dataset.label.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }
        chart
            .draw_series(
                points
                    .iter()
                    .map(|point| Circle::new(*point, 3, color.filled())),
            )
            .map_err(|e| ChartError::Render(e.to_string()))?;
    }

    if legend && !filled {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(("sans-serif", 16).into_font().color(&TICK_COLOR))
            .background_style(BACKGROUND.mix(0.8))
            .border_style(GRID_COLOR)
            .draw()
            .map_err(|e| ChartError::Render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

/// Renders every mounted chart to `<output_dir>/<slot>.png`.
pub struct PngSurface {
    output_dir: PathBuf,
}

pub struct MountedPng {
    path: PathBuf,
}

impl PngSurface {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn chart_path(&self, slot: ChartSlot) -> PathBuf {
        self.output_dir.join(format!("{}.png", slot.name()))
    }
}

impl ChartSurface for PngSurface {
    type Handle = MountedPng;

    fn mount(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<MountedPng, ChartError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ChartError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.chart_path(slot);
        write_chart_png(&path, spec)?;
        info!(%slot, path = %path.display(), "chart written");
        Ok(MountedPng { path })
    }

    fn unmount(&mut self, _slot: ChartSlot, handle: &MountedPng) -> Result<(), ChartError> {
        match std::fs::remove_file(&handle.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ChartError::Io {
                path: handle.path.clone(),
                source,
            }),
        }
    }
}
