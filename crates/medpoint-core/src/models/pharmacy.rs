//! Pharmacy inventory models.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Record;

/// How far ahead of the expiry date an item counts as expiring soon.
const EXPIRY_WARNING_DAYS: u64 = 30;

/// A stocked medication in the pharmacy inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyItem {
    /// Unique record id, generated locally
    pub id: String,
    /// Medication name; dispensing matches on this exactly
    pub medication_name: String,
    /// Item barcode
    pub barcode: String,
    /// Date the batch entered stock
    pub start_date: NaiveDate,
    /// Expiry date of the batch
    pub expiry_date: NaiveDate,
    /// Units in stock; decremented only by dispensing
    pub quantity: u32,
}

/// Derived stock status of a pharmacy item. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Available,
    ExpiringSoon,
    Expired,
    OutOfStock,
}

impl StockStatus {
    /// Label key for display lookup.
    pub fn label_key(self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::ExpiringSoon => "expiringSoon",
            StockStatus::Expired => "expired",
            StockStatus::OutOfStock => "outOfStock",
        }
    }
}

impl PharmacyItem {
    /// Create a new pharmacy item with a fresh id.
    pub fn new(
        medication_name: String,
        barcode: String,
        start_date: NaiveDate,
        expiry_date: NaiveDate,
        quantity: u32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            medication_name,
            barcode,
            start_date,
            expiry_date,
            quantity,
        }
    }

    /// Whether the batch has expired as of `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// Whether the batch expires within the warning window from `today`.
    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        let horizon = today + Days::new(EXPIRY_WARNING_DAYS);
        self.expiry_date >= today && self.expiry_date <= horizon
    }

    /// Derived status as of `today`. Expiry takes precedence over stock level.
    pub fn stock_status(&self, today: NaiveDate) -> StockStatus {
        if self.is_expired(today) {
            StockStatus::Expired
        } else if self.is_expiring_soon(today) {
            StockStatus::ExpiringSoon
        } else if self.quantity == 0 {
            StockStatus::OutOfStock
        } else {
            StockStatus::Available
        }
    }

    /// Search predicate: case-insensitive on medication name, raw substring
    /// on barcode.
    pub fn matches_query(&self, query: &str) -> bool {
        self.medication_name
            .to_lowercase()
            .contains(&query.to_lowercase())
            || self.barcode.contains(query)
    }
}

impl Record for PharmacyItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
