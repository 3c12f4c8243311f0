//! Referral operations.
//!
//! [`ReferralService`] orchestrates validation, identifier allocation and storage for the two
//! referral operations (create and get). It is transport-agnostic; the REST API and the CLI both
//! call into it.

use crate::config::CoreConfig;
use crate::constants::{REFERRAL_CREATED_MESSAGE, TIMESTAMP_FORMAT};
use crate::id_generator::next_referral_id;
use crate::store::{NewReferral, ReferralStore};
use crate::validation::{
    validate_department, validate_doctor_id, validate_patient_id, validate_referral_id,
};
use crate::{ReferralError, ReferralResult};
use api_shared::{CreateReferralReq, CreateReferralRes, DepartmentInfo, ReferralRecord};
use referral_types::{Department, ReferralId};
use std::sync::Arc;

/// Pure referral operations - no API concerns
#[derive(Clone, Debug)]
pub struct ReferralService {
    cfg: Arc<CoreConfig>,
    store: ReferralStore,
}

impl ReferralService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let store = ReferralStore::new(cfg.referrals_file());
        Self { cfg, store }
    }

    pub fn store(&self) -> &ReferralStore {
        &self.store
    }

    /// Ensures the referrals file exists with its header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be created.
    pub fn initialise_store(&self) -> ReferralResult<()> {
        self.store.initialise()
    }

    /// Creates a referral and appends it to the store.
    ///
    /// Checks run in a fixed order (patient id, doctor id, then both departments) so the
    /// first failing field decides the error. Specialist availability is taken from the
    /// configured department directory for the referred department.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`ReferralError::InvalidPatientId`], [`ReferralError::InvalidDoctorId`] or
    ///   [`ReferralError::InvalidDepartment`] for malformed input,
    /// - an allocation or storage error if the id cannot be computed or the row cannot be written.
    #[tracing::instrument(skip(self, req), fields(patient_id = %req.patient_id))]
    pub fn create(&self, req: CreateReferralReq) -> ReferralResult<CreateReferralRes> {
        let patient_id = validate_patient_id(&req.patient_id)?;
        let referred_by = validate_doctor_id(&req.referred_by)?;
        let current_department = validate_department(&req.current_department)?;
        let referred_department = validate_department(&req.referred_department)?;

        let specialist_available = self
            .cfg
            .departments()
            .is_specialist_available(referred_department);

        self.store.initialise()?;
        let referral_id = next_referral_id(&self.store)?;
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

        self.store.append(&NewReferral {
            referral_id,
            patient_id,
            current_department,
            referred_department,
            reason: req.reason,
            referred_by,
            notes: req.notes,
            timestamp: timestamp.clone(),
            specialist_available,
        })?;

        tracing::info!(
            %referral_id,
            department = %referred_department,
            specialist_available,
            "referral created"
        );

        Ok(CreateReferralRes {
            message: REFERRAL_CREATED_MESSAGE.into(),
            referral_id: referral_id.to_string(),
            timestamp,
            notification: notify_department(&referral_id, referred_department),
        })
    }

    /// Fetches a stored referral by identifier.
    ///
    /// The identifier format is checked before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`ReferralError::InvalidReferralId`] if `referral_id` is not `REF` + six digits,
    /// - [`ReferralError::StoreEmpty`] if the file is absent or has zero length,
    /// - [`ReferralError::InvalidStructure`] if the header row is wrong,
    /// - [`ReferralError::NotFound`] if no row carries the id.
    #[tracing::instrument(skip(self))]
    pub fn get(&self, referral_id: &str) -> ReferralResult<ReferralRecord> {
        let referral_id = validate_referral_id(referral_id)?;

        if self.store.is_empty_resource()? {
            return Err(ReferralError::StoreEmpty);
        }

        self.store.find_by_id(&referral_id)
    }

    /// Lists every department with its specialist availability.
    pub fn departments(&self) -> Vec<DepartmentInfo> {
        self.cfg
            .departments()
            .entries()
            .into_iter()
            .map(|(department, available)| DepartmentInfo {
                name: department.to_string(),
                specialist_available: available,
            })
            .collect()
    }
}

/// Builds the confirmation text for a new referral. Nothing is sent.
pub fn notify_department(referral_id: &ReferralId, department: Department) -> String {
    format!("Notification sent to {department} for referral ID {referral_id}.")
}
