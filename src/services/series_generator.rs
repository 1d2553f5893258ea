use std::f64::consts::PI;

use tracing::debug;

use crate::domain::series::{GeneratorSettings, Series, SeriesParams};
use crate::services::sales_stats::round_half_up;
use crate::services::unit_sampler::UnitSampler;

/// Seasonal swing, noise and linear trend around `base`, floored at
/// `settings.floor`, then blended with a centered moving average.
///
/// Draws exactly one sample per point. A zero length yields an empty series.
pub fn generate_series_with_sampler<S: UnitSampler + ?Sized>(
    params: &SeriesParams,
    settings: &GeneratorSettings,
    sampler: &mut S,
) -> Series {
    let length = params.length;
    let adjustment = settings.length_adjustment(length);

    let raw: Series = (0..length)
        .map(|index| {
            let phase = index as f64 / length as f64 * PI * 2.0;
            let swing = phase.sin() * params.variance * settings.seasonal_factor;
            let noise = (sampler.sample() - 0.5) * params.variance;
            let linear_boost = index as f64 * params.trend * adjustment;
            round_half_up(params.base + swing + noise + linear_boost).max(settings.floor)
        })
        .collect();

    debug!(
        length,
        base = params.base,
        variance = params.variance,
        trend = params.trend,
        "generated raw series"
    );
    smooth_series(&raw, settings.smoothing_window)
}

/// Blends each point 50/50 with the mean of `[i - window, i + window]`
/// clipped to the series bounds. Reads only from `series`, so applying it
/// twice smooths further.
pub fn smooth_series(series: &[i64], window: usize) -> Series {
    (0..series.len())
        .map(|index| {
            let start = index.saturating_sub(window);
            let end = index.saturating_add(window).saturating_add(1).min(series.len());
            let slice = &series[start..end];
            let mean = slice.iter().map(|&value| value as f64).sum::<f64>() / slice.len() as f64;
            round_half_up((series[index] as f64 + mean) / 2.0)
        })
        .collect()
}
