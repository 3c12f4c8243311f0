//! Identifier newtypes for patients, doctors and referrals.
//!
//! All three identifiers share the same shape: a fixed three-letter uppercase prefix followed by
//! ASCII decimal digits. Patient and doctor identifiers accept six or more digits, referral
//! identifiers accept exactly six.

use crate::{IdError, IdResult};
use std::fmt;

const PATIENT_PREFIX: &str = "PAT";
const DOCTOR_PREFIX: &str = "DOC";
const REFERRAL_PREFIX: &str = "REF";

/// Number of digits in a referral identifier.
const REFERRAL_DIGITS: usize = 6;

/// Largest number representable by a six-digit referral identifier.
const REFERRAL_MAX: u32 = 999_999;

/// Returns true if `input` is `prefix` followed by at least `min_digits` ASCII digits, and no
/// more than `max_digits` when a maximum is given.
fn is_prefixed_digits(
    input: &str,
    prefix: &str,
    min_digits: usize,
    max_digits: Option<usize>,
) -> bool {
    let Some(digits) = input.strip_prefix(prefix) else {
        return false;
    };

    digits.len() >= min_digits
        && max_digits.map_or(true, |max| digits.len() <= max)
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A patient identifier: `PAT` followed by six or more digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatientId(String);

impl PatientId {
    /// Validates and wraps a patient identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidPatientId`] if `input` is not `PAT` followed by at least six
    /// ASCII digits.
    pub fn parse(input: &str) -> IdResult<Self> {
        if Self::is_valid(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(IdError::InvalidPatientId(input.to_owned()))
    }

    /// Returns true if `input` is a well-formed patient identifier.
    pub fn is_valid(input: &str) -> bool {
        is_prefixed_digits(input, PATIENT_PREFIX, 6, None)
    }
}

/// A doctor identifier: `DOC` followed by six or more digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DoctorId(String);

impl DoctorId {
    /// Validates and wraps a doctor identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidDoctorId`] if `input` is not `DOC` followed by at least six
    /// ASCII digits.
    pub fn parse(input: &str) -> IdResult<Self> {
        if Self::is_valid(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(IdError::InvalidDoctorId(input.to_owned()))
    }

    /// Returns true if `input` is a well-formed doctor identifier.
    pub fn is_valid(input: &str) -> bool {
        is_prefixed_digits(input, DOCTOR_PREFIX, 6, None)
    }
}

/// A referral identifier: `REF` followed by exactly six digits.
///
/// Referral identifiers are allocated sequentially, so the type keeps the numeric part and
/// renders the canonical zero-padded form on display.
///
/// # Display format
/// Always `REF` followed by six zero-padded digits, for example `REF000042`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferralId(u32);

impl ReferralId {
    /// The first identifier handed out for an empty store.
    pub const FIRST: ReferralId = ReferralId(1);

    /// Validates and parses a referral identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidReferralId`] if `input` is not `REF` followed by exactly six
    /// ASCII digits.
    pub fn parse(input: &str) -> IdResult<Self> {
        if !Self::is_valid(input) {
            return Err(IdError::InvalidReferralId(input.to_owned()));
        }

        input[REFERRAL_PREFIX.len()..]
            .parse::<u32>()
            .map(Self)
            .map_err(|_| IdError::InvalidReferralId(input.to_owned()))
    }

    /// Returns true if `input` is a well-formed referral identifier.
    pub fn is_valid(input: &str) -> bool {
        is_prefixed_digits(input, REFERRAL_PREFIX, REFERRAL_DIGITS, Some(REFERRAL_DIGITS))
    }

    /// Builds a referral identifier from its numeric part.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::SequenceExhausted`] if `number` does not fit in six digits.
    pub fn from_number(number: u32) -> IdResult<Self> {
        if number > REFERRAL_MAX {
            return Err(IdError::SequenceExhausted(format!(
                "{REFERRAL_PREFIX}{REFERRAL_MAX:06}"
            )));
        }
        Ok(Self(number))
    }

    /// Returns the identifier that follows this one in the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::SequenceExhausted`] when called on `REF999999`.
    pub fn next(&self) -> IdResult<Self> {
        if self.0 >= REFERRAL_MAX {
            return Err(IdError::SequenceExhausted(self.to_string()));
        }
        Ok(Self(self.0 + 1))
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ReferralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:06}", REFERRAL_PREFIX, self.0)
    }
}
