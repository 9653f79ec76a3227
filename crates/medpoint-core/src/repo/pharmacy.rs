//! Pharmacy record operations and stock dispensing.

use tracing::warn;

use super::Repository;
use crate::models::PharmacyItem;
use crate::store::StoreResult;

impl Repository {
    /// Add a pharmacy item.
    pub fn add_pharmacy_item(&mut self, item: PharmacyItem) -> StoreResult<PharmacyItem> {
        self.pharmacy.add(&self.store, item)
    }

    /// Replace the item with `id`. Returns false when no such record exists.
    pub fn update_pharmacy_item(&mut self, id: &str, item: PharmacyItem) -> StoreResult<bool> {
        self.pharmacy.update(&self.store, id, item)
    }

    /// Delete the item with `id`. Returns false when no such record exists.
    pub fn delete_pharmacy_item(&mut self, id: &str) -> StoreResult<bool> {
        self.pharmacy.delete(&self.store, id)
    }

    /// All pharmacy items in insertion order.
    pub fn list_pharmacy_items(&self) -> &[PharmacyItem] {
        self.pharmacy.list()
    }

    /// Get a pharmacy item by id.
    pub fn get_pharmacy_item(&self, id: &str) -> Option<&PharmacyItem> {
        self.pharmacy.get(id)
    }

    /// Find a medication by exact name match.
    ///
    /// Names are not policed for uniqueness; the first match wins.
    pub fn get_medication_by_name(&self, name: &str) -> Option<&PharmacyItem> {
        self.pharmacy
            .list()
            .iter()
            .find(|m| m.medication_name == name)
    }

    /// Items matching the search query (medication name or barcode).
    pub fn search_pharmacy_items(&self, query: &str) -> Vec<PharmacyItem> {
        self.pharmacy
            .list()
            .iter()
            .filter(|m| m.matches_query(query))
            .cloned()
            .collect()
    }

    /// Dispense `quantity` units of the named medication.
    ///
    /// Returns false with no mutation when no item matches the name exactly
    /// or its stock cannot cover the request. Otherwise decrements the first
    /// matching item in place, persists, and returns true. This is the only
    /// decrement path for stock, so quantities never go negative.
    pub fn dispense_medication(
        &mut self,
        medication_name: &str,
        quantity: u32,
    ) -> StoreResult<bool> {
        let Some(pos) = self
            .pharmacy
            .list()
            .iter()
            .position(|m| m.medication_name == medication_name)
        else {
            warn!(medication = medication_name, "dispense failed: no such medication");
            return Ok(false);
        };

        if self.pharmacy.list()[pos].quantity < quantity {
            warn!(
                medication = medication_name,
                requested = quantity,
                in_stock = self.pharmacy.list()[pos].quantity,
                "dispense failed: insufficient stock"
            );
            return Ok(false);
        }

        self.pharmacy.records_mut()[pos].quantity -= quantity;
        self.pharmacy.persist(&self.store)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, quantity: u32) -> PharmacyItem {
        PharmacyItem::new(
            name.into(),
            "98765".into(),
            date(2025, 6, 1),
            date(2027, 6, 1),
            quantity,
        )
    }

    #[test]
    fn test_dispense_decrements() {
        let mut repo = Repository::open_in_memory().unwrap();
        repo.add_pharmacy_item(item("Paracetamol", 10)).unwrap();

        assert!(repo.dispense_medication("Paracetamol", 4).unwrap());
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            6
        );

        // A follow-up request larger than the remaining stock is refused
        // and leaves the quantity untouched.
        assert!(!repo.dispense_medication("Paracetamol", 10).unwrap());
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            6
        );
    }

    #[test]
    fn test_dispense_unknown_medication() {
        let mut repo = Repository::open_in_memory().unwrap();
        repo.add_pharmacy_item(item("Paracetamol", 10)).unwrap();

        assert!(!repo.dispense_medication("Ibuprofen", 1).unwrap());
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            10
        );
    }

    #[test]
    fn test_dispense_exact_stock() {
        let mut repo = Repository::open_in_memory().unwrap();
        repo.add_pharmacy_item(item("Paracetamol", 4)).unwrap();

        assert!(repo.dispense_medication("Paracetamol", 4).unwrap());
        assert_eq!(
            repo.get_medication_by_name("Paracetamol").unwrap().quantity,
            0
        );
    }

    #[test]
    fn test_dispense_leaves_other_items_alone() {
        let mut repo = Repository::open_in_memory().unwrap();
        repo.add_pharmacy_item(item("Paracetamol", 10)).unwrap();
        repo.add_pharmacy_item(item("Ibuprofen", 5)).unwrap();

        assert!(repo.dispense_medication("Paracetamol", 3).unwrap());
        assert_eq!(
            repo.get_medication_by_name("Ibuprofen").unwrap().quantity,
            5
        );
    }

    #[test]
    fn test_duplicate_names_first_match_wins() {
        let mut repo = Repository::open_in_memory().unwrap();
        let first = repo.add_pharmacy_item(item("Paracetamol", 10)).unwrap();
        let second = repo.add_pharmacy_item(item("Paracetamol", 7)).unwrap();

        assert!(repo.dispense_medication("Paracetamol", 2).unwrap());
        assert_eq!(repo.get_pharmacy_item(&first.id).unwrap().quantity, 8);
        assert_eq!(repo.get_pharmacy_item(&second.id).unwrap().quantity, 7);
    }

    #[test]
    fn test_dispense_persists() {
        let mut repo = Repository::open_in_memory().unwrap();
        repo.add_pharmacy_item(item("Paracetamol", 10)).unwrap();
        repo.dispense_medication("Paracetamol", 4).unwrap();

        let blob = repo
            .store()
            .load(super::super::keys::PHARMACY)
            .unwrap()
            .unwrap();
        assert!(blob.contains("\"quantity\":6"));
    }
}
