// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::macros::date;

use crate::ids::{FieldId, TaskId};
use crate::model::{
    CropHealth, CropStatus, Field, FieldCondition, OverviewCounts, Task, TaskKind, YieldSample,
};

/// The complete data set behind every widget. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FarmSnapshot {
    pub crops: Vec<CropStatus>,
    pub fields: Vec<Field>,
    pub tasks: Vec<Task>,
    pub yields: Vec<YieldSample>,
}

impl FarmSnapshot {
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn overview_counts(&self) -> OverviewCounts {
        OverviewCounts {
            fields_total: self.fields.len(),
            fields_warning: self
                .fields
                .iter()
                .filter(|field| field.condition == FieldCondition::Warning)
                .count(),
            tasks_open: self.tasks.len(),
        }
    }
}

fn crop(name: &str, health: CropHealth, forecast: &str) -> CropStatus {
    CropStatus {
        crop: name.to_owned(),
        health,
        forecast: forecast.to_owned(),
    }
}

#[allow(clippy::too_many_arguments)]
fn field(
    id: i64,
    name: &str,
    crop: &str,
    col_pct: u8,
    row_pct: u8,
    condition: FieldCondition,
    area_ha: f64,
    expected_yield_t_ha: f64,
    soil_moisture_pct: u8,
) -> Field {
    Field {
        id: FieldId::new(id),
        name: name.to_owned(),
        crop: crop.to_owned(),
        col_pct,
        row_pct,
        condition,
        area_ha,
        expected_yield_t_ha,
        soil_moisture_pct,
    }
}

fn task(id: i64, title: &str, kind: TaskKind, due: time::Date) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_owned(),
        kind,
        due,
    }
}

fn sample(period: &str, tonnes_per_ha: f64) -> YieldSample {
    YieldSample {
        period: period.to_owned(),
        tonnes_per_ha,
    }
}

pub fn demo_farm() -> FarmSnapshot {
    FarmSnapshot {
        crops: vec![
            crop(
                "Winter Wheat",
                CropHealth::Optimal,
                "yield trending +4% vs. last season",
            ),
            crop("Corn", CropHealth::Good, "on track for late-Sep harvest"),
            crop(
                "Canola",
                CropHealth::Stressed,
                "heat stress; expect -6% without rain",
            ),
            crop("Barley", CropHealth::Good, "steady; protein within target"),
            crop(
                "Sugar Beet",
                CropHealth::Optimal,
                "canopy closed two weeks early",
            ),
        ],
        fields: vec![
            field(
                1,
                "North Field",
                "Winter Wheat",
                18,
                15,
                FieldCondition::Normal,
                42.5,
                8.1,
                61,
            ),
            field(
                2,
                "Creek Meadow",
                "Corn",
                62,
                22,
                FieldCondition::Normal,
                31.0,
                10.4,
                58,
            ),
            field(
                3,
                "Hilltop",
                "Canola",
                80,
                55,
                FieldCondition::Warning,
                24.8,
                3.2,
                34,
            ),
            field(
                4,
                "Long Acre",
                "Barley",
                35,
                62,
                FieldCondition::Normal,
                38.2,
                6.9,
                55,
            ),
            field(
                5,
                "South Slope",
                "Sugar Beet",
                55,
                84,
                FieldCondition::Warning,
                19.6,
                68.0,
                41,
            ),
        ],
        tasks: vec![
            task(
                1,
                "Irrigate Hilltop canola",
                TaskKind::Irrigation,
                date!(2026 - 08 - 09),
            ),
            task(
                2,
                "Second nitrogen pass on Creek Meadow",
                TaskKind::Fertilizing,
                date!(2026 - 08 - 11),
            ),
            task(
                3,
                "Combine service before wheat harvest",
                TaskKind::Maintenance,
                date!(2026 - 08 - 14),
            ),
            task(
                4,
                "Scout South Slope for leaf spot",
                TaskKind::Scouting,
                date!(2026 - 08 - 15),
            ),
            task(
                5,
                "Start North Field harvest",
                TaskKind::Harvest,
                date!(2026 - 08 - 20),
            ),
        ],
        yields: vec![
            sample("Mar", 1.4),
            sample("Apr", 2.9),
            sample("May", 4.6),
            sample("Jun", 6.2),
            sample("Jul", 7.8),
            sample("Aug", 8.1),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::demo_farm;
    use crate::ids::FieldId;
    use crate::model::FieldCondition;

    #[test]
    fn demo_farm_ids_are_unique() {
        let farm = demo_farm();

        let mut field_ids: Vec<i64> = farm.fields.iter().map(|field| field.id.get()).collect();
        field_ids.sort_unstable();
        field_ids.dedup();
        assert_eq!(field_ids.len(), farm.fields.len());

        let mut task_ids: Vec<i64> = farm.tasks.iter().map(|task| task.id.get()).collect();
        task_ids.sort_unstable();
        task_ids.dedup();
        assert_eq!(task_ids.len(), farm.tasks.len());
    }

    #[test]
    fn demo_farm_positions_stay_on_the_map() {
        let farm = demo_farm();
        for field in &farm.fields {
            assert!(field.col_pct <= 100, "{} col {}", field.name, field.col_pct);
            assert!(field.row_pct <= 100, "{} row {}", field.name, field.row_pct);
            assert!(field.soil_moisture_pct <= 100);
        }
    }

    #[test]
    fn field_lookup_checks_membership() {
        let farm = demo_farm();
        assert_eq!(
            farm.field(FieldId::new(3)).map(|field| field.name.as_str()),
            Some("Hilltop"),
        );
        assert!(farm.field(FieldId::new(99)).is_none());
    }

    #[test]
    fn overview_counts_derive_from_the_data_set() {
        let farm = demo_farm();
        let counts = farm.overview_counts();
        assert_eq!(counts.fields_total, farm.fields.len());
        assert_eq!(counts.tasks_open, farm.tasks.len());
        assert_eq!(
            counts.fields_warning,
            farm.fields
                .iter()
                .filter(|field| field.condition == FieldCondition::Warning)
                .count(),
        );
    }
}
