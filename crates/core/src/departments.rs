//! Department directory.
//!
//! Maps each department to whether a receiving specialist is currently marked available.
//! The directory is built once at startup and carried in [`crate::CoreConfig`]; there is no
//! update operation.

use referral_types::Department;
use std::collections::BTreeMap;

/// Static specialist-availability table.
///
/// Departments missing from the table are reported as unavailable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartmentDirectory {
    availability: BTreeMap<Department, bool>,
}

impl DepartmentDirectory {
    /// Builds a directory from explicit `(department, available)` entries.
    pub fn new(entries: impl IntoIterator<Item = (Department, bool)>) -> Self {
        Self {
            availability: entries.into_iter().collect(),
        }
    }

    /// The hospital's standard availability table.
    ///
    /// General Medicine has no entry and therefore reads as unavailable.
    pub fn standard() -> Self {
        Self::new([
            (Department::Neurology, true),
            (Department::Cardiology, true),
            (Department::Orthopedics, false),
            (Department::Pediatrics, true),
            (Department::Dermatology, true),
            (Department::Oncology, false),
            (Department::Endocrinology, true),
            (Department::Gastroenterology, true),
        ])
    }

    pub fn is_specialist_available(&self, department: Department) -> bool {
        self.availability.get(&department).copied().unwrap_or(false)
    }

    /// Every known department paired with its availability, in display order.
    pub fn entries(&self) -> Vec<(Department, bool)> {
        Department::ALL
            .into_iter()
            .map(|d| (d, self.is_specialist_available(d)))
            .collect()
    }
}

impl Default for DepartmentDirectory {
    fn default() -> Self {
        Self::standard()
    }
}
