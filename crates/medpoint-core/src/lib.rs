//! Medical Point Core Library
//!
//! Local-first record management for a small military medical point: soldier
//! registry, hospital visit referrals, pharmacy inventory, and attendance
//! visits with medication dispensing.
//!
//! # Architecture
//!
//! ```text
//! Host UI (tables / forms / print)
//!                 │
//!                 │ FFI
//!                 ▼
//!           MedPointCore
//!                 │
//!            Repository ── four ordered collections
//!                 │        soldiers · hospital · pharmacy · attendance
//!                 │
//!                 │ write-through on every mutation
//!                 ▼
//!              Store
//!   (SQLite key-value, one JSON blob per collection)
//! ```
//!
//! # Core Principle
//!
//! **A visit that names a medication is saved all-or-nothing.** The stock
//! decrement happens first; if the pharmacy cannot cover the requested
//! quantity, the visit save aborts and no attendance record is written.
//!
//! # Modules
//!
//! - [`store`]: SQLite-backed key-value persistence
//! - [`models`]: domain types (Soldier, HospitalVisit, PharmacyItem, AttendanceRecord)
//! - [`repo`]: in-memory repository and cross-collection rules
//! - [`i18n`]: display language and bilingual labels
//! - [`export`]: printable HTML and CSV export

pub mod export;
pub mod i18n;
pub mod models;
pub mod repo;
pub mod store;

// Re-export commonly used types
pub use export::{PrintDocument, TableView};
pub use i18n::{label, Language};
pub use models::{
    AttendanceRecord, HospitalVisit, PharmacyItem, Record, Soldier, StockStatus, NO_MEDICATION,
};
pub use repo::{Repository, VisitError};
pub use store::{Store, StoreError};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedPointError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),
}

impl From<StoreError> for MedPointError {
    fn from(e: StoreError) -> Self {
        MedPointError::StorageError(e.to_string())
    }
}

impl From<serde_json::Error> for MedPointError {
    fn from(e: serde_json::Error) -> Self {
        MedPointError::SerializationError(e.to_string())
    }
}

impl From<VisitError> for MedPointError {
    fn from(e: VisitError) -> Self {
        match e {
            VisitError::InsufficientStock(name) => MedPointError::InsufficientStock(name),
            VisitError::Store(e) => MedPointError::StorageError(e.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for MedPointError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MedPointError::StorageError(format!("Lock poisoned: {}", e))
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, MedPointError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        MedPointError::InvalidInput(format!("{}: expected YYYY-MM-DD, got '{}'", field, value))
    })
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create the medical point database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<MedPointCore>, MedPointError> {
    let repo = Repository::open(&path)?;
    Ok(Arc::new(MedPointCore {
        repo: Arc::new(Mutex::new(repo)),
    }))
}

/// Create an in-memory instance (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<MedPointCore>, MedPointError> {
    let repo = Repository::open_in_memory()?;
    Ok(Arc::new(MedPointCore {
        repo: Arc::new(Mutex::new(repo)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe repository wrapper for FFI.
#[derive(uniffi::Object)]
pub struct MedPointCore {
    repo: Arc<Mutex<Repository>>,
}

#[uniffi::export]
impl MedPointCore {
    // =========================================================================
    // Soldier Operations
    // =========================================================================

    /// Register a new soldier.
    pub fn add_soldier(&self, record: FfiSoldierInput) -> Result<FfiSoldier, MedPointError> {
        let mut repo = self.repo.lock()?;
        let soldier = repo.add_soldier(record.into_model())?;
        Ok(soldier.into())
    }

    /// Replace the soldier with `id`. False when no such record exists.
    pub fn update_soldier(
        &self,
        id: String,
        record: FfiSoldierInput,
    ) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.update_soldier(&id, record.into_model())?)
    }

    /// Delete the soldier with `id`. False when no such record exists.
    pub fn delete_soldier(&self, id: String) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.delete_soldier(&id)?)
    }

    /// All soldiers in insertion order.
    pub fn list_soldiers(&self) -> Result<Vec<FfiSoldier>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo.list_soldiers().iter().cloned().map(Into::into).collect())
    }

    /// Soldiers matching the search query.
    pub fn search_soldiers(&self, query: String) -> Result<Vec<FfiSoldier>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .search_soldiers(&query)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Look up a soldier by exact barcode match (pre-fills the visit form).
    pub fn find_soldier_by_barcode(
        &self,
        barcode: String,
    ) -> Result<Option<FfiSoldier>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo.find_soldier_by_barcode(&barcode).cloned().map(Into::into))
    }

    // =========================================================================
    // Hospital Visit Operations
    // =========================================================================

    /// Add a hospital referral.
    pub fn add_hospital_visit(
        &self,
        record: FfiHospitalVisitInput,
    ) -> Result<FfiHospitalVisit, MedPointError> {
        let mut repo = self.repo.lock()?;
        let visit = repo.add_hospital_visit(record.into_model()?)?;
        Ok(visit.into())
    }

    /// Replace the referral with `id`. False when no such record exists.
    pub fn update_hospital_visit(
        &self,
        id: String,
        record: FfiHospitalVisitInput,
    ) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.update_hospital_visit(&id, record.into_model()?)?)
    }

    /// Delete the referral with `id`. False when no such record exists.
    pub fn delete_hospital_visit(&self, id: String) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.delete_hospital_visit(&id)?)
    }

    /// All hospital referrals in insertion order.
    pub fn list_hospital_visits(&self) -> Result<Vec<FfiHospitalVisit>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .list_hospital_visits()
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Referrals matching the search query.
    pub fn search_hospital_visits(
        &self,
        query: String,
    ) -> Result<Vec<FfiHospitalVisit>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .search_hospital_visits(&query)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    // =========================================================================
    // Pharmacy Operations
    // =========================================================================

    /// Add a pharmacy item.
    pub fn add_pharmacy_item(
        &self,
        record: FfiPharmacyItemInput,
    ) -> Result<FfiPharmacyItem, MedPointError> {
        let mut repo = self.repo.lock()?;
        let item = repo.add_pharmacy_item(record.into_model()?)?;
        Ok(item.into())
    }

    /// Replace the item with `id`. False when no such record exists.
    pub fn update_pharmacy_item(
        &self,
        id: String,
        record: FfiPharmacyItemInput,
    ) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.update_pharmacy_item(&id, record.into_model()?)?)
    }

    /// Delete the item with `id`. False when no such record exists.
    pub fn delete_pharmacy_item(&self, id: String) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.delete_pharmacy_item(&id)?)
    }

    /// All pharmacy items in insertion order.
    pub fn list_pharmacy_items(&self) -> Result<Vec<FfiPharmacyItem>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .list_pharmacy_items()
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Items matching the search query.
    pub fn search_pharmacy_items(
        &self,
        query: String,
    ) -> Result<Vec<FfiPharmacyItem>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .search_pharmacy_items(&query)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Find a medication by exact name (populates the dispense form).
    pub fn get_medication_by_name(
        &self,
        name: String,
    ) -> Result<Option<FfiPharmacyItem>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo.get_medication_by_name(&name).cloned().map(Into::into))
    }

    /// Dispense stock directly. False when the medication is unknown or the
    /// stock is insufficient; nothing is mutated in that case.
    pub fn dispense_medication(
        &self,
        medication_name: String,
        quantity: u32,
    ) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.dispense_medication(&medication_name, quantity)?)
    }

    // =========================================================================
    // Attendance Operations
    // =========================================================================

    /// Save a new visit, dispensing the named medication first. Fails with
    /// `InsufficientStock` (writing nothing) when the pharmacy cannot cover
    /// the requested quantity.
    pub fn record_attendance_visit(
        &self,
        record: FfiAttendanceInput,
    ) -> Result<FfiAttendanceRecord, MedPointError> {
        let mut repo = self.repo.lock()?;
        let saved = repo.record_visit(record.into_model()?)?;
        Ok(saved.into())
    }

    /// Save an edited visit, dispensing the submitted quantity first. False
    /// when no record with `id` exists.
    pub fn update_attendance_visit(
        &self,
        id: String,
        record: FfiAttendanceInput,
    ) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.update_visit(&id, record.into_model()?)?)
    }

    /// Delete the attendance record with `id`. False when no such record
    /// exists. Pharmacy stock is not restored.
    pub fn delete_attendance_record(&self, id: String) -> Result<bool, MedPointError> {
        let mut repo = self.repo.lock()?;
        Ok(repo.delete_attendance(&id)?)
    }

    /// All attendance records in insertion order.
    pub fn list_attendance_records(&self) -> Result<Vec<FfiAttendanceRecord>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .list_attendance_records()
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Records matching the search query.
    pub fn search_attendance_records(
        &self,
        query: String,
    ) -> Result<Vec<FfiAttendanceRecord>, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo
            .search_attendance_records(&query)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    // =========================================================================
    // Language & Export Operations
    // =========================================================================

    /// Current display language ("en" or "ar").
    pub fn get_language(&self) -> Result<String, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(repo.language().as_str().to_string())
    }

    /// Set and persist the display language.
    pub fn set_language(&self, language: String) -> Result<(), MedPointError> {
        let lang = Language::parse(&language).ok_or_else(|| {
            MedPointError::InvalidInput(format!("unsupported language: '{}'", language))
        })?;
        let mut repo = self.repo.lock()?;
        Ok(repo.set_language(lang)?)
    }

    /// Render the currently filtered rows of a collection as a standalone
    /// printable HTML document in the active display language.
    pub fn print_records(
        &self,
        collection: FfiCollection,
        query: String,
    ) -> Result<String, MedPointError> {
        let repo = self.repo.lock()?;
        let view = table_view(&repo, collection, &query);
        Ok(PrintDocument::new(view, repo.language()).to_html())
    }

    /// Export the currently filtered rows of a collection as CSV with
    /// localized headers.
    pub fn export_records_csv(
        &self,
        collection: FfiCollection,
        query: String,
    ) -> Result<String, MedPointError> {
        let repo = self.repo.lock()?;
        Ok(table_view(&repo, collection, &query).to_csv())
    }
}

fn table_view(repo: &Repository, collection: FfiCollection, query: &str) -> TableView {
    let lang = repo.language();
    match collection {
        FfiCollection::Soldiers => TableView::soldiers(lang, &repo.search_soldiers(query)),
        FfiCollection::Hospital => TableView::hospital(lang, &repo.search_hospital_visits(query)),
        FfiCollection::Pharmacy => TableView::pharmacy(lang, &repo.search_pharmacy_items(query)),
        FfiCollection::Attendance => {
            TableView::attendance(lang, &repo.search_attendance_records(query))
        }
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// Collection selector for print/export operations.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiCollection {
    Soldiers,
    Hospital,
    Pharmacy,
    Attendance,
}

/// FFI-safe soldier record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSoldier {
    pub id: String,
    pub name: String,
    pub barcode: String,
    pub company: String,
}

impl From<Soldier> for FfiSoldier {
    fn from(s: Soldier) -> Self {
        Self {
            id: s.id,
            name: s.name,
            barcode: s.barcode,
            company: s.company,
        }
    }
}

/// Soldier fields as entered in a form; the id is assigned by the core.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSoldierInput {
    pub name: String,
    pub barcode: String,
    pub company: String,
}

impl FfiSoldierInput {
    fn into_model(self) -> Soldier {
        Soldier::new(self.name, self.barcode, self.company)
    }
}

/// FFI-safe hospital referral record. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHospitalVisit {
    pub id: String,
    pub patient_name: String,
    pub barcode: String,
    pub hospital_name: String,
    pub clinic_name: String,
    pub visit_date: String,
    pub review_date: String,
}

impl From<HospitalVisit> for FfiHospitalVisit {
    fn from(v: HospitalVisit) -> Self {
        Self {
            id: v.id,
            patient_name: v.patient_name,
            barcode: v.barcode,
            hospital_name: v.hospital_name,
            clinic_name: v.clinic_name,
            visit_date: v.visit_date.to_string(),
            review_date: v.review_date.to_string(),
        }
    }
}

/// Hospital referral fields as entered in a form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHospitalVisitInput {
    pub patient_name: String,
    pub barcode: String,
    pub hospital_name: String,
    pub clinic_name: String,
    pub visit_date: String,
    pub review_date: String,
}

impl FfiHospitalVisitInput {
    fn into_model(self) -> Result<HospitalVisit, MedPointError> {
        Ok(HospitalVisit::new(
            self.patient_name,
            self.barcode,
            self.hospital_name,
            self.clinic_name,
            parse_date("visitDate", &self.visit_date)?,
            parse_date("reviewDate", &self.review_date)?,
        ))
    }
}

/// FFI-safe pharmacy item. `status` is the derived stock-status label key
/// as of today (available, expiringSoon, expired, outOfStock).
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPharmacyItem {
    pub id: String,
    pub medication_name: String,
    pub barcode: String,
    pub start_date: String,
    pub expiry_date: String,
    pub quantity: u32,
    pub status: String,
}

impl From<PharmacyItem> for FfiPharmacyItem {
    fn from(item: PharmacyItem) -> Self {
        let status = item.stock_status(Local::now().date_naive());
        Self {
            id: item.id,
            medication_name: item.medication_name,
            barcode: item.barcode,
            start_date: item.start_date.to_string(),
            expiry_date: item.expiry_date.to_string(),
            quantity: item.quantity,
            status: status.label_key().to_string(),
        }
    }
}

/// Pharmacy item fields as entered in a form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPharmacyItemInput {
    pub medication_name: String,
    pub barcode: String,
    pub start_date: String,
    pub expiry_date: String,
    pub quantity: u32,
}

impl FfiPharmacyItemInput {
    fn into_model(self) -> Result<PharmacyItem, MedPointError> {
        Ok(PharmacyItem::new(
            self.medication_name,
            self.barcode,
            parse_date("startDate", &self.start_date)?,
            parse_date("expiryDate", &self.expiry_date)?,
            self.quantity,
        ))
    }
}

/// FFI-safe attendance record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAttendanceRecord {
    pub id: String,
    pub soldier_barcode: String,
    pub soldier_name: String,
    pub complaint: String,
    pub dispensed_medication: String,
    pub medication_quantity: u32,
    pub visit_date: String,
}

impl From<AttendanceRecord> for FfiAttendanceRecord {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            id: r.id,
            soldier_barcode: r.soldier_barcode,
            soldier_name: r.soldier_name,
            complaint: r.complaint,
            dispensed_medication: r.dispensed_medication,
            medication_quantity: r.medication_quantity,
            visit_date: r.visit_date.to_string(),
        }
    }
}

/// Attendance fields as entered in the visit form. `dispensed_medication`
/// may be empty or "none" when nothing was given.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAttendanceInput {
    pub soldier_barcode: String,
    pub soldier_name: String,
    pub complaint: String,
    pub dispensed_medication: String,
    pub medication_quantity: u32,
    pub visit_date: String,
}

impl FfiAttendanceInput {
    fn into_model(self) -> Result<AttendanceRecord, MedPointError> {
        Ok(AttendanceRecord::new(
            self.soldier_barcode,
            self.soldier_name,
            self.complaint,
            self.dispensed_medication,
            self.medication_quantity,
            parse_date("visitDate", &self.visit_date)?,
        ))
    }
}
