//! Hospital visit record operations.

use super::Repository;
use crate::models::HospitalVisit;
use crate::store::StoreResult;

impl Repository {
    /// Add a hospital visit record.
    pub fn add_hospital_visit(&mut self, visit: HospitalVisit) -> StoreResult<HospitalVisit> {
        self.hospital.add(&self.store, visit)
    }

    /// Replace the visit with `id`. Returns false when no such record exists.
    pub fn update_hospital_visit(&mut self, id: &str, visit: HospitalVisit) -> StoreResult<bool> {
        self.hospital.update(&self.store, id, visit)
    }

    /// Delete the visit with `id`. Returns false when no such record exists.
    pub fn delete_hospital_visit(&mut self, id: &str) -> StoreResult<bool> {
        self.hospital.delete(&self.store, id)
    }

    /// All hospital visits in insertion order.
    pub fn list_hospital_visits(&self) -> &[HospitalVisit] {
        self.hospital.list()
    }

    /// Get a hospital visit by id.
    pub fn get_hospital_visit(&self, id: &str) -> Option<&HospitalVisit> {
        self.hospital.get(id)
    }

    /// Visits matching the search query (patient name, barcode, or hospital).
    pub fn search_hospital_visits(&self, query: &str) -> Vec<HospitalVisit> {
        self.hospital
            .list()
            .iter()
            .filter(|v| v.matches_query(query))
            .cloned()
            .collect()
    }
}
