//! End-to-end tests for the attendance visit flow.
//!
//! These exercise the barcode lookup, the dispense-before-save rule, and the
//! denormalized soldier snapshot through the public repository API.

use chrono::NaiveDate;

use medpoint_core::{AttendanceRecord, PharmacyItem, Repository, Soldier, VisitError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> Repository {
    let mut repo = Repository::open_in_memory().unwrap();
    repo.add_soldier(Soldier::new(
        "A. Smith".into(),
        "12345".into(),
        "Alpha".into(),
    ))
    .unwrap();
    repo.add_pharmacy_item(PharmacyItem::new(
        "Paracetamol".into(),
        "98765".into(),
        date(2025, 6, 1),
        date(2027, 6, 1),
        10,
    ))
    .unwrap();
    repo
}

fn visit_for(soldier: &Soldier, medication: &str, quantity: u32) -> AttendanceRecord {
    AttendanceRecord::new(
        soldier.barcode.clone(),
        soldier.name.clone(),
        "Headache".into(),
        medication.into(),
        quantity,
        date(2026, 1, 15),
    )
}

#[test]
fn barcode_scan_prefills_visit_and_dispense_decrements() {
    let mut repo = setup();

    // Scan finds the soldier; an unknown barcode does not.
    let soldier = repo.find_soldier_by_barcode("12345").cloned().unwrap();
    assert_eq!(soldier.name, "A. Smith");
    assert!(repo.find_soldier_by_barcode("99999").is_none());

    let saved = repo.record_visit(visit_for(&soldier, "Paracetamol", 4)).unwrap();

    assert_eq!(saved.soldier_name, "A. Smith");
    assert_eq!(repo.list_attendance_records().len(), 1);
    assert_eq!(
        repo.get_medication_by_name("Paracetamol").unwrap().quantity,
        6
    );
}

#[test]
fn dispense_sequence_paracetamol() {
    let mut repo = setup();

    assert!(repo.dispense_medication("Paracetamol", 4).unwrap());
    assert_eq!(
        repo.get_medication_by_name("Paracetamol").unwrap().quantity,
        6
    );

    assert!(!repo.dispense_medication("Paracetamol", 10).unwrap());
    assert_eq!(
        repo.get_medication_by_name("Paracetamol").unwrap().quantity,
        6
    );
}

#[test]
fn insufficient_stock_aborts_whole_visit_save() {
    let mut repo = setup();
    let soldier = repo.find_soldier_by_barcode("12345").cloned().unwrap();

    let result = repo.record_visit(visit_for(&soldier, "Paracetamol", 11));
    assert!(matches!(result, Err(VisitError::InsufficientStock(_))));

    // Nothing was written on either side.
    assert!(repo.list_attendance_records().is_empty());
    assert_eq!(
        repo.get_medication_by_name("Paracetamol").unwrap().quantity,
        10
    );
}

#[test]
fn deleting_soldier_leaves_attendance_snapshot_intact() {
    let mut repo = setup();
    let soldier = repo.find_soldier_by_barcode("12345").cloned().unwrap();
    repo.record_visit(visit_for(&soldier, "Paracetamol", 2)).unwrap();

    assert!(repo.delete_soldier(&soldier.id).unwrap());
    assert!(repo.find_soldier_by_barcode("12345").is_none());

    // The visit still carries the now-orphaned snapshot values.
    let records = repo.list_attendance_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].soldier_barcode, "12345");
    assert_eq!(records[0].soldier_name, "A. Smith");
}

#[test]
fn renaming_soldier_does_not_touch_existing_visits() {
    let mut repo = setup();
    let soldier = repo.find_soldier_by_barcode("12345").cloned().unwrap();
    repo.record_visit(visit_for(&soldier, "Paracetamol", 2)).unwrap();

    repo.update_soldier(
        &soldier.id,
        Soldier::new("A. Smith-Jones".into(), "12345".into(), "Alpha".into()),
    )
    .unwrap();

    assert_eq!(repo.list_attendance_records()[0].soldier_name, "A. Smith");
}

#[test]
fn visit_without_medication_never_touches_stock() {
    let mut repo = setup();
    let soldier = repo.find_soldier_by_barcode("12345").cloned().unwrap();

    repo.record_visit(visit_for(&soldier, "none", 1)).unwrap();
    repo.record_visit(visit_for(&soldier, "", 3)).unwrap();

    assert_eq!(repo.list_attendance_records().len(), 2);
    assert_eq!(
        repo.get_medication_by_name("Paracetamol").unwrap().quantity,
        10
    );
}
