//! Soldier record operations.

use super::Repository;
use crate::models::Soldier;
use crate::store::StoreResult;

impl Repository {
    /// Add a soldier record.
    pub fn add_soldier(&mut self, soldier: Soldier) -> StoreResult<Soldier> {
        self.soldiers.add(&self.store, soldier)
    }

    /// Replace the soldier with `id`. Returns false when no such record exists.
    pub fn update_soldier(&mut self, id: &str, soldier: Soldier) -> StoreResult<bool> {
        self.soldiers.update(&self.store, id, soldier)
    }

    /// Delete the soldier with `id`. Returns false when no such record exists.
    ///
    /// Attendance records referencing the soldier keep their snapshot of the
    /// name and barcode; nothing cascades.
    pub fn delete_soldier(&mut self, id: &str) -> StoreResult<bool> {
        self.soldiers.delete(&self.store, id)
    }

    /// All soldiers in insertion order.
    pub fn list_soldiers(&self) -> &[Soldier] {
        self.soldiers.list()
    }

    /// Get a soldier by id.
    pub fn get_soldier(&self, id: &str) -> Option<&Soldier> {
        self.soldiers.get(id)
    }

    /// Find a soldier by exact barcode match.
    ///
    /// Barcodes are not policed for uniqueness; the first match wins.
    pub fn find_soldier_by_barcode(&self, barcode: &str) -> Option<&Soldier> {
        self.soldiers.list().iter().find(|s| s.barcode == barcode)
    }

    /// Soldiers matching the search query (name, barcode, or company).
    pub fn search_soldiers(&self, query: &str) -> Vec<Soldier> {
        self.soldiers
            .list()
            .iter()
            .filter(|s| s.matches_query(query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Repository {
        Repository::open_in_memory().unwrap()
    }

    #[test]
    fn test_find_by_barcode() {
        let mut repo = setup();
        repo.add_soldier(Soldier::new("A. Smith".into(), "12345".into(), "Alpha".into()))
            .unwrap();

        let found = repo.find_soldier_by_barcode("12345").unwrap();
        assert_eq!(found.name, "A. Smith");
        assert!(repo.find_soldier_by_barcode("99999").is_none());
    }

    #[test]
    fn test_duplicate_barcode_first_match_wins() {
        let mut repo = setup();
        repo.add_soldier(Soldier::new("First".into(), "12345".into(), "Alpha".into()))
            .unwrap();
        repo.add_soldier(Soldier::new("Second".into(), "12345".into(), "Bravo".into()))
            .unwrap();

        assert_eq!(repo.find_soldier_by_barcode("12345").unwrap().name, "First");
    }

    #[test]
    fn test_search_soldiers() {
        let mut repo = setup();
        repo.add_soldier(Soldier::new("A. Smith".into(), "12345".into(), "Alpha".into()))
            .unwrap();
        repo.add_soldier(Soldier::new("B. Jones".into(), "67890".into(), "Bravo".into()))
            .unwrap();

        assert_eq!(repo.search_soldiers("smith").len(), 1);
        assert_eq!(repo.search_soldiers("678").len(), 1);
        assert_eq!(repo.search_soldiers("").len(), 2);
        assert!(repo.search_soldiers("charlie").is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let mut repo = setup();
        let added = repo
            .add_soldier(Soldier::new("A. Smith".into(), "12345".into(), "Alpha".into()))
            .unwrap();

        assert!(repo
            .update_soldier(
                &added.id,
                Soldier::new("A. Smith".into(), "12345".into(), "Bravo".into())
            )
            .unwrap());
        assert_eq!(repo.get_soldier(&added.id).unwrap().company, "Bravo");

        assert!(repo.delete_soldier(&added.id).unwrap());
        assert!(repo.get_soldier(&added.id).is_none());
        assert!(!repo.delete_soldier(&added.id).unwrap());
    }
}
