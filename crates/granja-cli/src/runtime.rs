// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use granja_app::{FarmSnapshot, OverviewCounts, demo_farm};

/// Serves the built-in data set. Every widget reads through this seam, so a
/// future data source only has to swap the `AppRuntime` implementation.
pub struct StaticRuntime {
    farm: FarmSnapshot,
}

impl StaticRuntime {
    pub fn new() -> Self {
        Self { farm: demo_farm() }
    }
}

impl Default for StaticRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl granja_tui::AppRuntime for StaticRuntime {
    fn load_farm(&mut self) -> Result<FarmSnapshot> {
        Ok(self.farm.clone())
    }

    fn load_overview_counts(&mut self) -> Result<OverviewCounts> {
        Ok(self.farm.overview_counts())
    }
}
