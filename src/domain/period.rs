use serde::{Deserialize, Serialize};

use crate::domain::series::SeriesParams;

const MONTH_LABELS: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    pub fn key(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Accusative form used in captions ("Итого за неделю").
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "неделю",
            Period::Month => "месяц",
            Period::Year => "год",
        }
    }

    pub fn points(&self) -> usize {
        match self {
            Period::Week => 7,
            Period::Month => 30,
            Period::Year => 12,
        }
    }

    /// Multipliers applied to a manager's base, variance and trend.
    pub fn scale(&self) -> (f64, f64, f64) {
        match self {
            Period::Week => (0.9, 0.8, 0.6),
            Period::Month => (1.0, 1.0, 1.0),
            Period::Year => (1.1, 1.4, 1.4),
        }
    }

    pub fn params_for(&self, base: f64, variance: f64, trend: f64) -> SeriesParams {
        let (base_scale, variance_scale, trend_scale) = self.scale();
        SeriesParams::new(self.points(), base, variance, trend).scaled(
            base_scale,
            variance_scale,
            trend_scale,
        )
    }

    pub fn axis_labels(&self) -> Vec<String> {
        match self {
            Period::Year => MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
            _ => (1..=self.points()).map(|day| day.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
