//! Record repository: four in-memory collections over the persistent store.

mod attendance;
mod collection;
mod hospital;
mod pharmacy;
mod soldiers;

pub use attendance::VisitError;

use std::path::Path;

use tracing::info;

use crate::i18n::Language;
use crate::models::{AttendanceRecord, HospitalVisit, PharmacyItem, Soldier};
use crate::store::{Store, StoreResult};
use collection::Collection;

/// Storage keys, one per persisted collection plus the language setting.
pub mod keys {
    pub const SOLDIERS: &str = "medical-point-soldiers";
    pub const HOSPITAL: &str = "medical-point-hospital";
    pub const PHARMACY: &str = "medical-point-pharmacy";
    pub const ATTENDANCE: &str = "medical-point-attendance";
    pub const LANGUAGE: &str = "medical-point-language";
}

/// In-memory repository over the four persisted collections.
///
/// One instance per running application process owns the store; every
/// mutating operation writes the affected collection back before returning.
/// All operations run to completion without suspension, so check-then-act
/// sequences (notably the dispense stock check) cannot interleave with other
/// repository operations.
pub struct Repository {
    store: Store,
    language: Language,
    soldiers: Collection<Soldier>,
    hospital: Collection<HospitalVisit>,
    pharmacy: Collection<PharmacyItem>,
    attendance: Collection<AttendanceRecord>,
}

impl Repository {
    /// Open the repository at `path`, creating the store if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::from_store(Store::open(path)?)
    }

    /// Open an in-memory repository (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_store(Store::open_in_memory()?)
    }

    fn from_store(store: Store) -> StoreResult<Self> {
        let soldiers = Collection::load(&store, keys::SOLDIERS)?;
        let hospital = Collection::load(&store, keys::HOSPITAL)?;
        let pharmacy = Collection::load(&store, keys::PHARMACY)?;
        let attendance = Collection::load(&store, keys::ATTENDANCE)?;
        // Unknown or absent stored values fall back to English.
        let language = store
            .load(keys::LANGUAGE)?
            .and_then(|v| Language::parse(&v))
            .unwrap_or_default();

        info!(
            soldiers = soldiers.list().len(),
            hospital = hospital.list().len(),
            pharmacy = pharmacy.list().len(),
            attendance = attendance.list().len(),
            "opened medical point repository"
        );

        Ok(Self {
            store,
            language,
            soldiers,
            hospital,
            pharmacy,
            attendance,
        })
    }

    /// Current display language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Set and persist the display language.
    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.language = language;
        self.store.save(keys::LANGUAGE, language.as_str())
    }

    /// Underlying store (for advanced callers).
    pub fn store(&self) -> &Store {
        &self.store
    }
}
