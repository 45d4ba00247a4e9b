//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::computer_hardware;
use crate::domain::HardwareRecord;

/// Database row for a hardware record.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = computer_hardware)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HardwareRow {
    pub kind: String,
    pub model: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<&HardwareRecord> for HardwareRow {
    fn from(record: &HardwareRecord) -> Self {
        Self {
            kind: record.kind.clone(),
            model: record.model.clone(),
            quantity: record.quantity,
            price: record.price,
        }
    }
}

impl From<HardwareRow> for HardwareRecord {
    fn from(row: HardwareRow) -> Self {
        HardwareRecord::new(row.kind, row.model, row.quantity, row.price)
    }
}
