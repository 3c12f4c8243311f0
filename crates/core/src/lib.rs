//! # Referral Core
//!
//! Core business logic for the hospital referral service.
//!
//! This crate contains pure data operations and file management:
//! - Input validation for patient, doctor and referral identifiers and department names
//! - The department directory (specialist availability)
//! - Append-only CSV storage and sequential referral identifier allocation
//!
//! **No API concerns**: HTTP servers and CLI parsing belong in `api-rest` and `referral-cli`.

pub mod config;
pub mod constants;
pub mod departments;
pub mod error;
pub mod id_generator;
pub mod service;
pub mod store;
pub mod validation;

// Use the shared api-shared crate for request/response types.
pub use api_shared as dto;

pub use config::CoreConfig;
pub use constants::DEFAULT_REFERRALS_FILE;
pub use departments::DepartmentDirectory;
pub use error::{ReferralError, ReferralResult};
pub use service::ReferralService;
pub use store::ReferralStore;

pub use referral_types::{Department, DoctorId, IdError, PatientId, ReferralId};
