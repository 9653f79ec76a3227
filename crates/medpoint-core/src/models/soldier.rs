//! Soldier models.

use serde::{Deserialize, Serialize};

use super::Record;

/// A soldier registered as a patient at the medical point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Soldier {
    /// Unique record id, generated locally
    pub id: String,
    /// Full name
    pub name: String,
    /// Scanned or typed barcode; intended unique but not enforced
    pub barcode: String,
    /// Company the soldier belongs to
    pub company: String,
}

impl Soldier {
    /// Create a new soldier record with a fresh id.
    pub fn new(name: String, barcode: String, company: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            barcode,
            company,
        }
    }

    /// Search predicate: case-insensitive on name and company, raw substring
    /// on barcode.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.barcode.contains(query)
            || self.company.to_lowercase().contains(&q)
    }
}

impl Record for Soldier {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_soldier() {
        let soldier = Soldier::new("A. Smith".into(), "12345".into(), "Alpha".into());
        assert_eq!(soldier.name, "A. Smith");
        assert_eq!(soldier.barcode, "12345");
        assert_eq!(soldier.company, "Alpha");
        assert_eq!(soldier.id.len(), 36); // UUID format
    }

    #[test]
    fn test_matches_query() {
        let soldier = Soldier::new("A. Smith".into(), "12345".into(), "Alpha".into());
        assert!(soldier.matches_query("smith"));
        assert!(soldier.matches_query("234"));
        assert!(soldier.matches_query("alpha"));
        assert!(soldier.matches_query(""));
        assert!(!soldier.matches_query("bravo"));
    }
}
