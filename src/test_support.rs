use crate::domain::manager::{Manager, Rgb, Roster, SalesSource};
use crate::services::chart_render::ChartError;
use crate::services::chart_spec::{ChartSlot, ChartSpec};
use crate::services::render_targets::ChartSurface;
use crate::services::unit_sampler::UnitSampler;

// A UnitSampler that cycles through a fixed list of values
pub struct FixedSampler {
    values: Vec<f64>,
    draws: usize,
}

impl FixedSampler {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedSampler needs at least one value");
        Self { values, draws: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UnitSampler for FixedSampler {
    fn sample(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}

pub fn seeded_manager(id: &str, base: f64) -> Manager {
    Manager::seeded(id, &format!("Manager {id}"), "Москва", Rgb(0x34, 0xd3, 0x99), base, 0.0, 0.0)
}

pub fn fixed_manager(id: &str, month: Vec<i64>) -> Manager {
    Manager {
        id: id.to_string(),
        name: format!("Manager {id}"),
        city: "Казань".to_string(),
        color: Rgb(0x22, 0xc5, 0x5e),
        source: SalesSource::Fixed {
            week: None,
            month: Some(month),
            year: None,
        },
    }
}

pub fn two_manager_roster() -> Roster {
    Roster::new(vec![seeded_manager("alpha", 100.0), seeded_manager("beta", 200.0)])
        .expect("roster is not empty")
}

// A ChartSurface that records mount/unmount calls; captions equal to "fail" fail to mount
#[derive(Default)]
pub struct RecordingSurface {
    pub events: Vec<String>,
    pub mounted: Vec<(ChartSlot, ChartSpec)>,
    pub fail_unmount: bool,
    next_id: u32,
    live: usize,
}

impl RecordingSurface {
    pub fn live(&self) -> usize {
        self.live
    }

    pub fn last_mounted(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.mounted
            .iter()
            .rev()
            .find(|(mounted_slot, _)| *mounted_slot == slot)
            .map(|(_, spec)| spec)
    }
}

impl ChartSurface for RecordingSurface {
    type Handle = u32;

    fn mount(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<u32, ChartError> {
        if spec.caption() == "fail" {
            return Err(ChartError::Render("mount refused".to_string()));
        }
        self.next_id += 1;
        self.live += 1;
        self.events
            .push(format!("mount {slot} {}#{}", spec.caption(), self.next_id));
        self.mounted.push((slot, spec.clone()));
        Ok(self.next_id)
    }

    fn unmount(&mut self, slot: ChartSlot, handle: &u32) -> Result<(), ChartError> {
        if self.fail_unmount {
            return Err(ChartError::Render("unmount refused".to_string()));
        }
        self.live -= 1;
        self.events.push(format!("unmount {slot} #{handle}"));
        Ok(())
    }
}
