// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Shared fixtures for granja tests: small, fully deterministic farm data
//! sets with known shapes.

use granja_app::{
    CropHealth, CropStatus, FarmSnapshot, Field, FieldCondition, FieldId, Task, TaskId, TaskKind,
    YieldSample,
};
use time::macros::date;

pub fn sample_field(
    id: i64,
    name: &str,
    col_pct: u8,
    row_pct: u8,
    condition: FieldCondition,
) -> Field {
    Field {
        id: FieldId::new(id),
        name: name.to_owned(),
        crop: "Winter Wheat".to_owned(),
        col_pct,
        row_pct,
        condition,
        area_ha: 12.5,
        expected_yield_t_ha: 7.4,
        soil_moisture_pct: 52,
    }
}

pub fn sample_task(id: i64, title: &str, kind: TaskKind) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_owned(),
        kind,
        due: date!(2026 - 08 - 10),
    }
}

pub fn sample_crop(name: &str, health: CropHealth) -> CropStatus {
    CropStatus {
        crop: name.to_owned(),
        health,
        forecast: format!("{name} forecast"),
    }
}

/// Three fields (exactly one warning), two crops, two tasks, three yield
/// samples. Tests assert against these shapes.
pub fn small_farm() -> FarmSnapshot {
    FarmSnapshot {
        crops: vec![
            sample_crop("Winter Wheat", CropHealth::Optimal),
            sample_crop("Canola", CropHealth::Stressed),
        ],
        fields: vec![
            sample_field(1, "North Field", 10, 20, FieldCondition::Normal),
            sample_field(2, "Creek Meadow", 60, 30, FieldCondition::Normal),
            sample_field(3, "Hilltop", 85, 70, FieldCondition::Warning),
        ],
        tasks: vec![
            sample_task(1, "Irrigate Hilltop", TaskKind::Irrigation),
            sample_task(2, "Service combine", TaskKind::Maintenance),
        ],
        yields: vec![
            YieldSample {
                period: "Jun".to_owned(),
                tonnes_per_ha: 4.0,
            },
            YieldSample {
                period: "Jul".to_owned(),
                tonnes_per_ha: 6.5,
            },
            YieldSample {
                period: "Aug".to_owned(),
                tonnes_per_ha: 8.0,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::small_farm;
    use granja_app::FieldCondition;

    #[test]
    fn small_farm_has_the_documented_shape() {
        let farm = small_farm();
        assert_eq!(farm.crops.len(), 2);
        assert_eq!(farm.fields.len(), 3);
        assert_eq!(farm.tasks.len(), 2);
        assert_eq!(farm.yields.len(), 3);
        assert_eq!(
            farm.fields
                .iter()
                .filter(|field| field.condition == FieldCondition::Warning)
                .count(),
            1,
        );
    }
}
