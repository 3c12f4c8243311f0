//! Request and response bodies for the referral API.
//!
//! Field names are part of the wire contract and match the CSV column names.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /referrals/create`.
///
/// Fields arrive as plain strings; format checks happen in the core service so every caller
/// gets the same error messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateReferralReq {
    pub patient_id: String,
    pub current_department: String,
    pub referred_department: String,
    pub reason: String,
    pub referred_by: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateReferralRes {
    pub message: String,
    pub referral_id: String,
    pub timestamp: String,
    /// Confirmation text only; no message is dispatched.
    pub notification: String,
}

/// A referral exactly as stored: every value is the raw column text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferralRecord {
    pub referral_id: String,
    pub patient_id: String,
    pub current_department: String,
    pub referred_department: String,
    pub reason: String,
    pub referred_by: String,
    pub notes: String,
    pub timestamp: String,
    /// `True` or `False`.
    pub specialist_available: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentInfo {
    pub name: String,
    pub specialist_available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListDepartmentsRes {
    pub departments: Vec<DepartmentInfo>,
}

/// Error body returned for every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referral_record_serialises_in_column_order() {
        let record = ReferralRecord {
            referral_id: "REF000001".into(),
            specialist_available: "False".into(),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"referral_id\":\"REF000001\",\"patient_id\""));
        assert!(json.ends_with("\"specialist_available\":\"False\"}"));
    }

    #[test]
    fn test_create_request_requires_every_field() {
        let missing_notes = r#"{
            "patient_id": "PAT123456",
            "current_department": "Cardiology",
            "referred_department": "Oncology",
            "reason": "Suspected mass",
            "referred_by": "DOC654321"
        }"#;
        assert!(serde_json::from_str::<CreateReferralReq>(missing_notes).is_err());
    }
}
