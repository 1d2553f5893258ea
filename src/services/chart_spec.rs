use crate::domain::manager::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartSlot {
    Total,
    Daily,
    Comparison,
}

impl ChartSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ChartSlot::Total => "total",
            ChartSlot::Daily => "daily",
            ChartSlot::Comparison => "comparison",
        }
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub color: Rgb,
    pub values: Vec<i64>,
}

/// Renderer-independent description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Bar {
        caption: String,
        bars: Vec<Bar>,
    },
    Line {
        caption: String,
        labels: Vec<String>,
        datasets: Vec<Dataset>,
        filled: bool,
        legend: bool,
    },
}

impl ChartSpec {
    pub fn caption(&self) -> &str {
        match self {
            ChartSpec::Bar { caption, .. } | ChartSpec::Line { caption, .. } => caption,
        }
    }

    /// Largest plotted value, `0` when nothing is plotted.
    pub fn max_value(&self) -> i64 {
        let values: Box<dyn Iterator<Item = i64> + '_> = match self {
            ChartSpec::Bar { bars, .. } => Box::new(bars.iter().map(|bar| bar.value)),
            ChartSpec::Line { datasets, .. } => Box::new(
                datasets
                    .iter()
                    .flat_map(|dataset| dataset.values.iter().copied()),
            ),
        };
        values.max().unwrap_or(0).max(0)
    }
}
