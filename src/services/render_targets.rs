use std::collections::BTreeMap;

use tracing::debug;

use crate::services::chart_render::ChartError;
use crate::services::chart_spec::{ChartSlot, ChartSpec};

/// Something that can materialize a chart and later dispose of it.
pub trait ChartSurface {
    type Handle;

    fn mount(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;
    fn unmount(&mut self, slot: ChartSlot, handle: &Self::Handle) -> Result<(), ChartError>;
}

/// Owns the handle currently mounted in each chart slot. Handles never leave
/// the registry; a refresh always disposes the old chart before mounting the
/// new one.
pub struct RenderTargets<S: ChartSurface> {
    surface: S,
    mounted: BTreeMap<ChartSlot, S::Handle>,
}

impl<S: ChartSurface> RenderTargets<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            mounted: BTreeMap::new(),
        }
    }

    pub fn refresh(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<(), ChartError> {
        self.unmount(slot)?;
        let handle = self.surface.mount(slot, spec)?;
        self.mounted.insert(slot, handle);
        debug!(%slot, caption = spec.caption(), "mounted chart");
        Ok(())
    }

    /// Returns whether something was mounted. A handle that fails to
    /// dispose stays registered.
    pub fn unmount(&mut self, slot: ChartSlot) -> Result<bool, ChartError> {
        match self.mounted.get(&slot) {
            Some(handle) => {
                self.surface.unmount(slot, handle)?;
                self.mounted.remove(&slot);
                debug!(%slot, "disposed chart");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn mounted_slots(&self) -> Vec<ChartSlot> {
        self.mounted.keys().copied().collect()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
