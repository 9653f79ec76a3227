//! Display language selection and bilingual labels.
//!
//! One process-wide setting with two supported values. It affects only label
//! text and text direction, never stored data shapes.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English, left-to-right
    #[default]
    En,
    /// Arabic, right-to-left
    Ar,
}

impl Language {
    /// Stored value.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parse a stored value; anything but the two supported values is
    /// rejected (callers fall back to the default).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Text direction for rendered documents.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }
}

/// Look up a display label. Unknown keys fall back to the key itself.
pub fn label<'a>(lang: Language, key: &'a str) -> &'a str {
    match entry(key) {
        Some((en, ar)) => match lang {
            Language::En => en,
            Language::Ar => ar,
        },
        None => key,
    }
}

fn entry(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        "medicalPoint" => ("Medical Point", "النقطة الطبية"),
        "medicalPointDesc" => (
            "Comprehensive medical data management platform",
            "منصة شاملة لإدارة البيانات الطبية",
        ),
        "hospital" => ("Hospital", "المستشفى"),
        "hospitalDesc" => ("Manage patient visit records", "إدارة سجلات زيارات المرضى"),
        "pharmacy" => ("Pharmacy", "الصيدلية"),
        "pharmacyDesc" => ("Manage medication inventory", "إدارة مخزون الأدوية"),
        "attendance" => ("Attendance", "الحضور"),
        "attendanceDesc" => (
            "Track patient visits and medication dispensing",
            "تتبع زيارات المرضى وصرف الأدوية",
        ),
        "soldiers" => ("Soldiers", "الجنود"),
        "soldiersDesc" => ("Manage soldier patient data", "إدارة بيانات المرضى الجنود"),
        "open" => ("Open Module", "فتح الوحدة"),
        "patientName" => ("Patient Name", "اسم المريض"),
        "barcode" => ("Barcode", "الباركود"),
        "hospitalName" => ("Hospital Name", "اسم المستشفى"),
        "clinicName" => ("Clinic Name", "اسم العيادة"),
        "visitDate" => ("Visit Date", "تاريخ الزيارة"),
        "reviewDate" => ("Review Date", "تاريخ المراجعة"),
        "medicationName" => ("Medication Name", "اسم الدواء"),
        "startDate" => ("Start Date", "تاريخ البداية"),
        "expiryDate" => ("Expiry Date", "تاريخ الانتهاء"),
        "quantity" => ("Quantity", "الكمية"),
        "complaint" => ("Complaint", "الشكوى"),
        "dispensedMedication" => ("Dispensed Medication", "الدواء المصروف"),
        "soldierName" => ("Soldier Name", "اسم الجندي"),
        "company" => ("Company", "السرية"),
        "add" => ("Add", "إضافة"),
        "print" => ("Print", "طباعة"),
        "search" => ("Search", "بحث"),
        "actions" => ("Actions", "الإجراءات"),
        "edit" => ("Edit", "تعديل"),
        "delete" => ("Delete", "حذف"),
        "save" => ("Save", "حفظ"),
        "cancel" => ("Cancel", "إلغاء"),
        "backToHome" => ("Back to Home", "العودة للرئيسية"),
        "noData" => ("No data available", "لا توجد بيانات متاحة"),
        "scanBarcode" => ("Scan Barcode", "مسح الباركود"),
        "enterBarcode" => ("Enter Barcode", "إدخال الباركود"),
        "selectMedication" => ("Select Medication", "اختيار الدواء"),
        "quantityToDispense" => ("Quantity to Dispense", "الكمية المراد صرفها"),
        "insufficientStock" => ("Insufficient stock", "المخزون غير كافي"),
        "medicationDispensed" => ("Medication dispensed successfully", "تم صرف الدواء بنجاح"),
        "recordAdded" => ("Record added successfully", "تم إضافة السجل بنجاح"),
        "recordUpdated" => ("Record updated successfully", "تم تحديث السجل بنجاح"),
        "recordDeleted" => ("Record deleted successfully", "تم حذف السجل بنجاح"),
        "confirmDelete" => ("Confirm Delete", "تأكيد الحذف"),
        "confirmDeleteMessage" => (
            "Are you sure you want to delete this record?",
            "هل أنت متأكد من حذف هذا السجل؟",
        ),
        "yes" => ("Yes", "نعم"),
        "no" => ("No", "لا"),
        "records" => ("Records", "السجلات"),
        "medications" => ("Medications", "الأدوية"),
        "visits" => ("Visits", "الزيارات"),
        "record" => ("Record", "السجل"),
        "medication" => ("Medication", "الدواء"),
        "visit" => ("Visit", "الزيارة"),
        "soldier" => ("Soldier", "الجندي"),
        "none" => ("None", "لا يوجد"),
        "noMedication" => ("No Medication", "بدون دواء"),
        "available" => ("Available", "متوفر"),
        "expired" => ("Expired", "منتهي الصلاحية"),
        "expiringSoon" => ("Expiring Soon", "ينتهي قريباً"),
        "outOfStock" => ("Out of Stock", "نفد المخزون"),
        "status" => ("Status", "الحالة"),
        "soldierNotFound" => ("Soldier not found", "لم يتم العثور على الجندي"),
        "soldierFound" => ("Soldier found successfully", "تم العثور على الجندي بنجاح"),
        "success" => ("Success", "نجح"),
        "error" => ("Error", "خطأ"),
        _ => return None,
    };
    Some(pair)
}
