//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::DEFAULT_REFERRALS_FILE;
use crate::departments::DepartmentDirectory;
use crate::{ReferralError, ReferralResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    referrals_file: PathBuf,
    departments: DepartmentDirectory,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ReferralError::InvalidInput`] if `referrals_file` is empty or names an existing
    /// directory.
    pub fn new(referrals_file: PathBuf, departments: DepartmentDirectory) -> ReferralResult<Self> {
        if referrals_file.as_os_str().is_empty() {
            return Err(ReferralError::InvalidInput(
                "referrals file path cannot be empty".into(),
            ));
        }

        if referrals_file.is_dir() {
            return Err(ReferralError::InvalidInput(format!(
                "referrals file path is a directory: {}",
                referrals_file.display()
            )));
        }

        Ok(Self {
            referrals_file,
            departments,
        })
    }

    pub fn referrals_file(&self) -> &Path {
        &self.referrals_file
    }

    pub fn departments(&self) -> &DepartmentDirectory {
        &self.departments
    }
}

/// Resolve the referrals file path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REFERRALS_FILE`].
pub fn referrals_file_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERRALS_FILE))
}
