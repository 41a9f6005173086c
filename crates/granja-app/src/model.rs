// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropHealth {
    Optimal,
    Good,
    Stressed,
}

impl CropHealth {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Good => "good",
            Self::Stressed => "stressed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "optimal" => Some(Self::Optimal),
            "good" => Some(Self::Good),
            "stressed" => Some(Self::Stressed),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Good => "Good",
            Self::Stressed => "Stressed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldCondition {
    Normal,
    Warning,
}

impl FieldCondition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "needs attention",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Irrigation,
    Fertilizing,
    Harvest,
    Scouting,
    Maintenance,
}

impl TaskKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Irrigation => "irrigation",
            Self::Fertilizing => "fertilizing",
            Self::Harvest => "harvest",
            Self::Scouting => "scouting",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "irrigation" => Some(Self::Irrigation),
            "fertilizing" => Some(Self::Fertilizing),
            "harvest" => Some(Self::Harvest),
            "scouting" => Some(Self::Scouting),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Irrigation => "irrigation",
            Self::Fertilizing => "fertilizing",
            Self::Harvest => "harvest",
            Self::Scouting => "scouting",
            Self::Maintenance => "maintenance",
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Irrigation => '~',
            Self::Fertilizing => '+',
            Self::Harvest => '#',
            Self::Scouting => '?',
            Self::Maintenance => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    Dashboard,
    Fields,
    Tasks,
    Planning,
}

impl PageKind {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Fields, Self::Tasks, Self::Planning];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Fields => "fields",
            Self::Tasks => "tasks",
            Self::Planning => "planning",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Fields => "fields",
            Self::Tasks => "tasks",
            Self::Planning => "planning",
        }
    }

    pub fn parse_slug(value: &str) -> Option<Self> {
        match value {
            "dashboard" => Some(Self::Dashboard),
            "fields" => Some(Self::Fields),
            "tasks" => Some(Self::Tasks),
            "planning" => Some(Self::Planning),
            _ => None,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Dashboard => '=',
            Self::Fields => 'o',
            Self::Tasks => '>',
            Self::Planning => '%',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropStatus {
    pub crop: String,
    pub health: CropHealth,
    pub forecast: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub crop: String,
    /// Horizontal position on the map surface, 0..=100.
    pub col_pct: u8,
    /// Vertical position on the map surface, 0..=100.
    pub row_pct: u8,
    pub condition: FieldCondition,
    pub area_ha: f64,
    pub expected_yield_t_ha: f64,
    pub soil_moisture_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub kind: TaskKind,
    pub due: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldSample {
    pub period: String,
    pub tonnes_per_ha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OverviewCounts {
    pub fields_total: usize,
    pub fields_warning: usize,
    pub tasks_open: usize,
}
