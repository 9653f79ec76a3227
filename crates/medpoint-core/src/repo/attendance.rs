//! Attendance record operations and the visit-save flow.

use thiserror::Error;

use super::Repository;
use crate::models::AttendanceRecord;
use crate::store::{StoreError, StoreResult};

/// Errors from the all-or-nothing visit save.
#[derive(Error, Debug)]
pub enum VisitError {
    #[error("insufficient stock for {0}")]
    InsufficientStock(String),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl Repository {
    /// Add an attendance record without touching pharmacy stock.
    ///
    /// Callers saving a visit that names a medication should go through
    /// [`Repository::record_visit`] instead, which dispenses first.
    pub fn add_attendance(&mut self, record: AttendanceRecord) -> StoreResult<AttendanceRecord> {
        self.attendance.add(&self.store, record)
    }

    /// Replace the record with `id`. Returns false when no such record exists.
    pub fn update_attendance(&mut self, id: &str, record: AttendanceRecord) -> StoreResult<bool> {
        self.attendance.update(&self.store, id, record)
    }

    /// Delete the record with `id`. Returns false when no such record exists.
    pub fn delete_attendance(&mut self, id: &str) -> StoreResult<bool> {
        self.attendance.delete(&self.store, id)
    }

    /// All attendance records in insertion order.
    pub fn list_attendance_records(&self) -> &[AttendanceRecord] {
        self.attendance.list()
    }

    /// Get an attendance record by id.
    pub fn get_attendance(&self, id: &str) -> Option<&AttendanceRecord> {
        self.attendance.get(id)
    }

    /// Records matching the search query (soldier name, barcode, complaint).
    pub fn search_attendance_records(&self, query: &str) -> Vec<AttendanceRecord> {
        self.attendance
            .list()
            .iter()
            .filter(|r| r.matches_query(query))
            .cloned()
            .collect()
    }

    /// Save a new visit, all or nothing.
    ///
    /// When the visit names a medication, the stock decrement happens first;
    /// if the pharmacy cannot cover the requested quantity the save aborts
    /// and no attendance record is written.
    pub fn record_visit(
        &mut self,
        visit: AttendanceRecord,
    ) -> Result<AttendanceRecord, VisitError> {
        self.apply_dispense(&visit)?;
        Ok(self.add_attendance(visit)?)
    }

    /// Save an edited visit. Dispenses the submitted quantity, then replaces
    /// the record with `id` (false when absent).
    pub fn update_visit(&mut self, id: &str, visit: AttendanceRecord) -> Result<bool, VisitError> {
        self.apply_dispense(&visit)?;
        Ok(self.update_attendance(id, visit)?)
    }

    fn apply_dispense(&mut self, visit: &AttendanceRecord) -> Result<(), VisitError> {
        if !visit.requests_medication() {
            return Ok(());
        }
        if !self.dispense_medication(&visit.dispensed_medication, visit.medication_quantity)? {
            return Err(VisitError::InsufficientStock(
                visit.dispensed_medication.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PharmacyItem, NO_MEDICATION};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_with_stock(quantity: u32) -> Repository {
        let mut repo = Repository::open_in_memory().unwrap();
        repo.add_pharmacy_item(PharmacyItem::new(
            "Paracetamol".into(),
            "98765".into(),
            date(2025, 6, 1),
            date(2027, 6, 1),
            quantity,
        ))
        .unwrap();
        repo
    }

    fn visit(medication: &str, quantity: u32) -> AttendanceRecord {
        AttendanceRecord::new(
            "12345".into(),
            "A. Smith".into(),
            "Headache".into(),
            medication.into(),
            quantity,
            date(2026, 1, 15),
        )
    }

    #[test]
    fn test_record_visit_dispenses_and_appends() {
        let mut repo = setup_with_stock(10);

        let saved = repo.record_visit(visit("Paracetamol", 4)).unwrap();
        assert_eq!(repo.list_attendance_records().len(), 1);
        assert_eq!(repo.get_attendance(&saved.id).unwrap().soldier_name, "A. Smith");
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            6
        );
    }

    #[test]
    fn test_record_visit_insufficient_stock_writes_nothing() {
        let mut repo = setup_with_stock(3);

        let result = repo.record_visit(visit("Paracetamol", 4));
        assert!(matches!(result, Err(VisitError::InsufficientStock(_))));
        assert!(repo.list_attendance_records().is_empty());
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            3
        );
    }

    #[test]
    fn test_record_visit_without_medication_skips_dispense() {
        let mut repo = setup_with_stock(10);

        repo.record_visit(visit(NO_MEDICATION, 1)).unwrap();
        repo.record_visit(visit("", 1)).unwrap();
        assert_eq!(repo.list_attendance_records().len(), 2);
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            10
        );
    }

    #[test]
    fn test_update_visit_dispenses_submitted_quantity() {
        let mut repo = setup_with_stock(10);
        let saved = repo.record_visit(visit("Paracetamol", 4)).unwrap();

        assert!(repo.update_visit(&saved.id, visit("Paracetamol", 2)).unwrap());
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            4
        );
        assert_eq!(repo.list_attendance_records().len(), 1);
        assert_eq!(
            repo.list_attendance_records()[0].medication_quantity,
            2
        );
    }

    #[test]
    fn test_update_visit_insufficient_stock_keeps_record() {
        let mut repo = setup_with_stock(5);
        let saved = repo.record_visit(visit("Paracetamol", 4)).unwrap();

        let result = repo.update_visit(&saved.id, visit("Paracetamol", 4));
        assert!(matches!(result, Err(VisitError::InsufficientStock(_))));
        assert_eq!(
            repo.get_attendance(&saved.id).unwrap().medication_quantity,
            4
        );
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            1
        );
    }
}
