//! Input validation utilities.
//!
//! This module contains functions for validating user inputs to ensure they meet
//! format requirements before any storage is touched. Each function returns the
//! validated type on success so callers do not re-check the same string later.

use crate::{ReferralError, ReferralResult};
use referral_types::{Department, DoctorId, PatientId, ReferralId};

/// Validates a patient identifier (`PAT` followed by six or more digits).
///
/// # Errors
///
/// Returns [`ReferralError::InvalidPatientId`] if the format does not match.
pub fn validate_patient_id(patient_id: &str) -> ReferralResult<PatientId> {
    PatientId::parse(patient_id).map_err(ReferralError::InvalidPatientId)
}

/// Validates a doctor identifier (`DOC` followed by six or more digits).
///
/// # Errors
///
/// Returns [`ReferralError::InvalidDoctorId`] if the format does not match.
pub fn validate_doctor_id(doctor_id: &str) -> ReferralResult<DoctorId> {
    DoctorId::parse(doctor_id).map_err(ReferralError::InvalidDoctorId)
}

/// Validates a referral identifier (`REF` followed by exactly six digits).
///
/// # Errors
///
/// Returns [`ReferralError::InvalidReferralId`] if the format does not match.
pub fn validate_referral_id(referral_id: &str) -> ReferralResult<ReferralId> {
    ReferralId::parse(referral_id).map_err(ReferralError::InvalidReferralId)
}

/// Validates that `department` is one of the known department names, case-sensitively.
///
/// # Errors
///
/// Returns [`ReferralError::InvalidDepartment`] for any other string.
pub fn validate_department(department: &str) -> ReferralResult<Department> {
    Department::parse(department).map_err(ReferralError::InvalidDepartment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_patient_id() {
        assert!(validate_patient_id("PAT123456").is_ok());
        assert!(matches!(
            validate_patient_id("PAT12"),
            Err(ReferralError::InvalidPatientId(_))
        ));
    }

    #[test]
    fn test_validate_doctor_id() {
        assert!(validate_doctor_id("DOC654321").is_ok());
        assert!(matches!(
            validate_doctor_id("DOC-654321"),
            Err(ReferralError::InvalidDoctorId(_))
        ));
    }

    #[test]
    fn test_validate_referral_id_is_stricter_than_patient_id() {
        assert!(validate_referral_id("REF000001").is_ok());
        assert!(matches!(
            validate_referral_id("REF0000001"),
            Err(ReferralError::InvalidReferralId(_))
        ));
        assert!(validate_patient_id("PAT0000001").is_ok());
    }

    #[test]
    fn test_validate_department_rejects_outside_allow_list() {
        assert_eq!(
            validate_department("Oncology").unwrap(),
            Department::Oncology
        );
        for name in ["oncology", "Radiology", "Cardiology ", "General  Medicine"] {
            assert!(
                matches!(
                    validate_department(name),
                    Err(ReferralError::InvalidDepartment(_))
                ),
                "expected '{}' to be rejected",
                name
            );
        }
    }
}
