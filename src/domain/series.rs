pub type Series = Vec<i64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesParams {
    pub length: usize,
    pub base: f64,
    pub variance: f64,
    pub trend: f64,
}

impl SeriesParams {
    pub fn new(length: usize, base: f64, variance: f64, trend: f64) -> Self {
        Self {
            length,
            base,
            variance,
            trend,
        }
    }

    pub fn scaled(&self, base: f64, variance: f64, trend: f64) -> Self {
        Self {
            length: self.length,
            base: self.base * base,
            variance: self.variance * variance,
            trend: self.trend * trend,
        }
    }
}

/// Shape constants of the generator. The defaults match the dashboard's
/// richest variant; older snapshots used a floor of 60 and a seasonal
/// factor of 0.4 without the short-series multiplier.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub seasonal_factor: f64,
    pub floor: i64,
    pub short_series_threshold: usize,
    pub short_series_multiplier: f64,
    pub smoothing_window: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seasonal_factor: 0.5,
            floor: 40,
            short_series_threshold: 12,
            short_series_multiplier: 4.0,
            smoothing_window: 2,
        }
    }
}

impl GeneratorSettings {
    pub fn length_adjustment(&self, length: usize) -> f64 {
        if length > self.short_series_threshold {
            1.0
        } else {
            self.short_series_multiplier
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestDay {
    pub index: usize,
    pub value: i64,
}

impl BestDay {
    /// 1-based position used in reports and cards.
    pub fn day(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: i64,
    pub average: i64,
    pub best: Option<BestDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_adjustment_boosts_short_series_only() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.length_adjustment(7), 4.0);
        assert_eq!(settings.length_adjustment(12), 4.0);
        assert_eq!(settings.length_adjustment(13), 1.0);
        assert_eq!(settings.length_adjustment(30), 1.0);
    }

    #[test]
    fn best_day_is_reported_one_based() {
        let best = BestDay { index: 23, value: 190 };
        assert_eq!(best.day(), 24);
    }

    #[test]
    fn scaled_params_keep_length() {
        let params = SeriesParams::new(30, 100.0, 20.0, 1.0).scaled(1.1, 1.4, 1.4);
        assert_eq!(params.length, 30);
        assert!((params.base - 110.0).abs() < 1e-9);
        assert!((params.variance - 28.0).abs() < 1e-9);
        assert!((params.trend - 1.4).abs() < 1e-9);
    }
}
