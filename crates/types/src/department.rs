use crate::{IdError, IdResult};
use std::fmt;

/// A hospital department that can send or receive referrals.
///
/// Department names are matched exactly, including case and inner spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Department {
    GeneralMedicine,
    Neurology,
    Cardiology,
    Orthopedics,
    Pediatrics,
    Dermatology,
    Oncology,
    Endocrinology,
    Gastroenterology,
}

impl Department {
    /// Every known department, in display order.
    pub const ALL: [Department; 9] = [
        Department::GeneralMedicine,
        Department::Neurology,
        Department::Cardiology,
        Department::Orthopedics,
        Department::Pediatrics,
        Department::Dermatology,
        Department::Oncology,
        Department::Endocrinology,
        Department::Gastroenterology,
    ];

    /// Parses a department from its display name.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::UnknownDepartment`] if `input` is not one of [`Department::ALL`].
    pub fn parse(input: &str) -> IdResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == input)
            .ok_or_else(|| IdError::UnknownDepartment(input.to_owned()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::GeneralMedicine => "General Medicine",
            Department::Neurology => "Neurology",
            Department::Cardiology => "Cardiology",
            Department::Orthopedics => "Orthopedics",
            Department::Pediatrics => "Pediatrics",
            Department::Dermatology => "Dermatology",
            Department::Oncology => "Oncology",
            Department::Endocrinology => "Endocrinology",
            Department::Gastroenterology => "Gastroenterology",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
