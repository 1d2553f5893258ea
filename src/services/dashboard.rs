use tracing::info;

use crate::domain::manager::{Manager, Roster};
use crate::domain::period::Period;
use crate::domain::series::Stats;
use crate::services::chart_render::ChartError;
use crate::services::chart_spec::{Bar, ChartSlot, ChartSpec, Dataset};
use crate::services::dashboard_config::DashboardConfig;
use crate::services::render_targets::{ChartSurface, RenderTargets};
use crate::services::sales_book::SalesBook;
use crate::services::sales_stats::total;
use crate::services::unit_sampler::UnitSampler;

/// Period the summary cards always report on.
pub const CARD_PERIOD: Period = Period::Month;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub name: String,
    pub city: String,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotal {
    pub name: String,
    pub total: i64,
}

/// One card per manager, always computed over [`CARD_PERIOD`].
pub fn summary_cards(roster: &Roster, book: &SalesBook) -> Vec<SummaryCard> {
    roster
        .managers()
        .iter()
        .map(|manager| SummaryCard {
            name: manager.name.clone(),
            city: manager.city.clone(),
            stats: Stats::compute(book.series(&manager.id, CARD_PERIOD)),
        })
        .collect()
}

pub fn period_totals(roster: &Roster, book: &SalesBook, period: Period) -> Vec<PeriodTotal> {
    roster
        .managers()
        .iter()
        .map(|manager| PeriodTotal {
            name: manager.name.clone(),
            total: total(book.series(&manager.id, period)),
        })
        .collect()
}

pub struct Dashboard<S: ChartSurface> {
    config: DashboardConfig,
    book: SalesBook,
    period: Period,
    selected: String,
    targets: RenderTargets<S>,
    sampler: Box<dyn UnitSampler>,
}

impl<S: ChartSurface> Dashboard<S> {
    pub fn new(
        config: DashboardConfig,
        book: SalesBook,
        surface: S,
        sampler: Box<dyn UnitSampler>,
    ) -> Self {
        let selected = config.roster.first().id.clone();
        Self {
            config,
            book,
            period: Period::default(),
            selected,
            targets: RenderTargets::new(surface),
            sampler,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn selected_manager(&self) -> &Manager {
        self.config.roster.find_or_first(&self.selected)
    }

    pub fn targets(&self) -> &RenderTargets<S> {
        &self.targets
    }

    /// Mounts all three charts for the current state.
    pub fn init(&mut self) -> Result<(), ChartError> {
        self.refresh_all()
    }

    /// Unknown ids select the first manager. Only the daily chart is redrawn.
    pub fn select_manager(&mut self, manager_id: &str) -> Result<(), ChartError> {
        let manager = self.config.roster.find_or_first(manager_id);
        if manager.id != manager_id {
            info!(requested = manager_id, selected = %manager.id, "unknown manager, using first");
        }
        self.selected = manager.id.clone();
        let spec = self.daily_chart();
        self.targets.refresh(ChartSlot::Daily, &spec)
    }

    /// Returns `false` without touching anything when `period` is already active.
    pub fn switch_period(&mut self, period: Period) -> Result<bool, ChartError> {
        if period == self.period {
            return Ok(false);
        }
        self.period = period;
        if self.config.regenerate_on_switch {
            self.book.regenerate_period(
                &self.config.roster,
                period,
                &self.config.generator,
                &mut self.sampler,
            );
        }
        info!(%period, "switched period");
        self.refresh_all()?;
        Ok(true)
    }

    fn refresh_all(&mut self) -> Result<(), ChartError> {
        let charts = [
            (ChartSlot::Total, self.total_chart()),
            (ChartSlot::Daily, self.daily_chart()),
            (ChartSlot::Comparison, self.comparison_chart()),
        ];
        for (slot, spec) in &charts {
            self.targets.refresh(*slot, spec)?;
        }
        Ok(())
    }

    pub fn period_totals(&self) -> Vec<PeriodTotal> {
        period_totals(&self.config.roster, &self.book, self.period)
    }

    pub fn total_chart(&self) -> ChartSpec {
        let bars = self
            .config
            .roster
            .managers()
            .iter()
            .zip(self.period_totals())
            .map(|(manager, period_total)| Bar {
                label: period_total.name,
                value: period_total.total,
                color: manager.color,
            })
            .collect();
        ChartSpec::Bar {
            caption: format!("Итого за {}, тыс. ₽", self.period.label()),
            bars,
        }
    }

    pub fn daily_chart(&self) -> ChartSpec {
        let manager = self.selected_manager();
        ChartSpec::Line {
            caption: format!("{} — за {}, тыс. ₽", manager.name, self.period.label()),
            labels: self.period.axis_labels(),
            datasets: vec![self.dataset_for(manager)],
            filled: true,
            legend: false,
        }
    }

    pub fn comparison_chart(&self) -> ChartSpec {
        ChartSpec::Line {
            caption: format!("Сравнение менеджеров за {}, тыс. ₽", self.period.label()),
            labels: self.period.axis_labels(),
            datasets: self
                .config
                .roster
                .managers()
                .iter()
                .map(|manager| self.dataset_for(manager))
                .collect(),
            filled: false,
            legend: true,
        }
    }

    fn dataset_for(&self, manager: &Manager) -> Dataset {
        Dataset {
            label: manager.name.clone(),
            color: manager.color,
            values: self.book.series(&manager.id, self.period).to_vec(),
        }
    }
}
