use tracing::warn;

use crate::domain::series::{BestDay, Stats};

/// Rounds halves towards positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Sum of the series, clamped to the `i64` range when it overflows.
pub fn total(series: &[i64]) -> i64 {
    match series.iter().try_fold(0i64, |sum, &value| sum.checked_add(value)) {
        Some(sum) => sum,
        None => {
            warn!(points = series.len(), "series total overflows, clamping");
            series.iter().fold(0i64, |sum, &value| sum.saturating_add(value))
        }
    }
}

/// Rounded arithmetic mean; `0` for an empty series.
pub fn average(series: &[i64]) -> i64 {
    if series.is_empty() {
        return 0;
    }
    round_half_up(total(series) as f64 / series.len() as f64)
}

/// First position holding the maximum value.
pub fn best_day(series: &[i64]) -> Option<BestDay> {
    let mut best: Option<BestDay> = None;
    for (index, &value) in series.iter().enumerate() {
        match best {
            Some(current) if value <= current.value => {}
            _ => best = Some(BestDay { index, value }),
        }
    }
    best
}

impl Stats {
    pub fn compute(series: &[i64]) -> Self {
        Self {
            total: total(series),
            average: average(series),
            best: best_day(series),
        }
    }
}
