//! Export of filtered table rows to printable and CSV documents.

mod csv;
mod print;

pub use print::*;

use chrono::NaiveDate;

use crate::i18n::{label, Language};
use crate::models::{AttendanceRecord, HospitalVisit, PharmacyItem, Soldier};

/// A localized tabular view of filtered records, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    fn localized(lang: Language, title_key: &str, header_keys: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: label(lang, title_key).to_string(),
            headers: header_keys
                .iter()
                .map(|k| label(lang, k).to_string())
                .collect(),
            rows,
        }
    }

    /// Soldier roster view.
    pub fn soldiers(lang: Language, records: &[Soldier]) -> Self {
        Self::localized(
            lang,
            "soldiers",
            &["soldierName", "barcode", "company"],
            records
                .iter()
                .map(|r| vec![r.name.clone(), r.barcode.clone(), r.company.clone()])
                .collect(),
        )
    }

    /// Hospital referral view.
    pub fn hospital(lang: Language, records: &[HospitalVisit]) -> Self {
        Self::localized(
            lang,
            "hospital",
            &[
                "patientName",
                "barcode",
                "hospitalName",
                "clinicName",
                "visitDate",
                "reviewDate",
            ],
            records
                .iter()
                .map(|r| {
                    vec![
                        r.patient_name.clone(),
                        r.barcode.clone(),
                        r.hospital_name.clone(),
                        r.clinic_name.clone(),
                        format_date(r.visit_date),
                        format_date(r.review_date),
                    ]
                })
                .collect(),
        )
    }

    /// Pharmacy inventory view.
    pub fn pharmacy(lang: Language, records: &[PharmacyItem]) -> Self {
        Self::localized(
            lang,
            "pharmacy",
            &["medicationName", "barcode", "startDate", "expiryDate", "quantity"],
            records
                .iter()
                .map(|r| {
                    vec![
                        r.medication_name.clone(),
                        r.barcode.clone(),
                        format_date(r.start_date),
                        format_date(r.expiry_date),
                        r.quantity.to_string(),
                    ]
                })
                .collect(),
        )
    }

    /// Attendance log view.
    pub fn attendance(lang: Language, records: &[AttendanceRecord]) -> Self {
        Self::localized(
            lang,
            "attendance",
            &[
                "soldierName",
                "barcode",
                "complaint",
                "dispensedMedication",
                "quantity",
                "visitDate",
            ],
            records
                .iter()
                .map(|r| {
                    vec![
                        r.soldier_name.clone(),
                        r.soldier_barcode.clone(),
                        r.complaint.clone(),
                        r.dispensed_medication.clone(),
                        r.medication_quantity.to_string(),
                        format_date(r.visit_date),
                    ]
                })
                .collect(),
        )
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
