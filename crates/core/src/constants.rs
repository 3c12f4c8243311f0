//! Constants used throughout the referral core crate.
//!
//! This module contains the storage layout and wire constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Default path of the referrals CSV file when no explicit path is configured.
pub const DEFAULT_REFERRALS_FILE: &str = "referrals.csv";

/// Column names of the referrals CSV file, in the order rows are written.
pub const REFERRAL_FIELDS: [&str; 9] = [
    "referral_id",
    "patient_id",
    "current_department",
    "referred_department",
    "reason",
    "referred_by",
    "notes",
    "timestamp",
    "specialist_available",
];

/// Format of the `timestamp` column (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored representation of an available specialist.
pub const STORED_TRUE: &str = "True";

/// Stored representation of an unavailable specialist.
pub const STORED_FALSE: &str = "False";

/// Confirmation message returned after a referral is written.
pub const REFERRAL_CREATED_MESSAGE: &str = "Referral created successfully.";
