//! Attendance and dispensing models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

/// Sentinel medication value meaning "nothing dispensed".
pub const NO_MEDICATION: &str = "none";

/// A visit to the medical point, with an optional medication dispense.
///
/// Soldier name and barcode are a snapshot taken when the visit is saved;
/// later edits to the soldier record do not flow back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique record id, generated locally
    pub id: String,
    /// Barcode of the attending soldier at visit time
    pub soldier_barcode: String,
    /// Name of the attending soldier at visit time
    pub soldier_name: String,
    /// Presenting complaint
    pub complaint: String,
    /// Medication name, empty, or "none"
    pub dispensed_medication: String,
    /// Units dispensed
    pub medication_quantity: u32,
    /// Date of the visit
    pub visit_date: NaiveDate,
}

impl AttendanceRecord {
    /// Create a new attendance record with a fresh id.
    pub fn new(
        soldier_barcode: String,
        soldier_name: String,
        complaint: String,
        dispensed_medication: String,
        medication_quantity: u32,
        visit_date: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            soldier_barcode,
            soldier_name,
            complaint,
            dispensed_medication,
            medication_quantity,
            visit_date,
        }
    }

    /// Whether saving this visit requires a stock decrement.
    pub fn requests_medication(&self) -> bool {
        !self.dispensed_medication.is_empty()
            && self.dispensed_medication != NO_MEDICATION
            && self.medication_quantity > 0
    }

    /// Search predicate: case-insensitive on soldier name and complaint, raw
    /// substring on barcode.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.soldier_name.to_lowercase().contains(&q)
            || self.soldier_barcode.contains(query)
            || self.complaint.to_lowercase().contains(&q)
    }
}

impl Record for AttendanceRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
