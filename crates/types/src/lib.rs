//! # Referral Types
//!
//! Validated value types shared by every referral crate.
//!
//! Each type here can only be constructed through a parsing function, so once a caller holds a
//! [`PatientId`], [`DoctorId`], [`ReferralId`] or [`Department`] it may assume the value is
//! well formed.

mod department;
mod ids;

pub use department::Department;
pub use ids::{DoctorId, PatientId, ReferralId};

/// Errors that can occur when parsing validated referral types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input did not match the `PAT` + at least six digits format
    #[error("invalid patient ID format: '{0}'")]
    InvalidPatientId(String),

    /// The input did not match the `DOC` + at least six digits format
    #[error("invalid doctor ID format: '{0}'")]
    InvalidDoctorId(String),

    /// The input did not match the `REF` + exactly six digits format
    #[error("invalid referral ID format: '{0}'")]
    InvalidReferralId(String),

    /// The input is not one of the known department names
    #[error("unknown department: '{0}'")]
    UnknownDepartment(String),

    /// The referral sequence has no six-digit successor
    #[error("referral ID sequence exhausted after '{0}'")]
    SequenceExhausted(String),
}

/// Result type for referral type parsing.
pub type IdResult<T> = Result<T, IdError>;
