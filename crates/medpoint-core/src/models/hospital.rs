//! Hospital visit referral models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

/// A referral of a patient to an external hospital clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HospitalVisit {
    /// Unique record id, generated locally
    pub id: String,
    /// Patient name as entered on the referral
    pub patient_name: String,
    /// Patient barcode
    pub barcode: String,
    /// Receiving hospital
    pub hospital_name: String,
    /// Clinic within the hospital
    pub clinic_name: String,
    /// Date of the visit
    pub visit_date: NaiveDate,
    /// Scheduled follow-up review date
    pub review_date: NaiveDate,
}

impl HospitalVisit {
    /// Create a new hospital visit record with a fresh id.
    pub fn new(
        patient_name: String,
        barcode: String,
        hospital_name: String,
        clinic_name: String,
        visit_date: NaiveDate,
        review_date: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_name,
            barcode,
            hospital_name,
            clinic_name,
            visit_date,
            review_date,
        }
    }

    /// Search predicate: case-insensitive on patient and hospital names, raw
    /// substring on barcode.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.patient_name.to_lowercase().contains(&q)
            || self.barcode.contains(query)
            || self.hospital_name.to_lowercase().contains(&q)
    }
}

impl Record for HospitalVisit {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
