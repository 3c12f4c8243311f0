//! HTTP error mapping.

use api_shared::ErrorRes;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use referral_core::ReferralError;

/// The error type returned by every REST handler.
///
/// Decides the status code and `detail` text for core errors and for request bodies the JSON
/// extractor rejected, so every failure leaves as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Referral(ReferralError),
    Body(JsonRejection),
}

impl From<ReferralError> for ApiError {
    fn from(err: ReferralError) -> Self {
        Self::Referral(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Referral(
                ReferralError::InvalidPatientId(_)
                | ReferralError::InvalidDoctorId(_)
                | ReferralError::InvalidDepartment(_)
                | ReferralError::InvalidReferralId(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Referral(ReferralError::StoreEmpty | ReferralError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Referral(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `detail` field of the response body.
    ///
    /// Unclassified errors and body rejections pass their message through to the caller.
    pub fn detail(&self) -> String {
        let err = match self {
            ApiError::Body(rejection) => return rejection.body_text(),
            ApiError::Referral(err) => err,
        };

        match err {
            ReferralError::InvalidPatientId(_) => "Invalid patient ID format.".into(),
            ReferralError::InvalidDoctorId(_) => "Invalid doctor ID format.".into(),
            ReferralError::InvalidDepartment(_) => "Invalid department name.".into(),
            ReferralError::InvalidReferralId(_) => "Invalid referral ID format.".into(),
            ReferralError::StoreEmpty => "Referral database is empty.".into(),
            ReferralError::NotFound(_) => "Referral not found.".into(),
            ReferralError::InvalidStructure { .. } => "CSV structure is invalid.".into(),
            other => format!("Server error: {}", other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        match &self {
            ApiError::Referral(err) if status.is_server_error() => {
                tracing::error!("request failed: {:?}", err)
            }
            ApiError::Referral(err) => tracing::warn!("request rejected: {}", err),
            ApiError::Body(_) => tracing::warn!("request body rejected: {}", detail),
        }

        (status, Json(ErrorRes { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use referral_core::{IdError, ReferralId};

    #[test]
    fn test_client_errors_map_to_400() {
        let err = ApiError::Referral(ReferralError::InvalidDepartment(
            IdError::UnknownDepartment("Radiology".into()),
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Invalid department name.");
    }

    #[test]
    fn test_missing_records_map_to_404() {
        assert_eq!(
            ApiError::Referral(ReferralError::StoreEmpty).status(),
            StatusCode::NOT_FOUND
        );
        let err = ApiError::Referral(ReferralError::NotFound(ReferralId::FIRST));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Referral not found.");
    }

    #[test]
    fn test_storage_errors_pass_message_through() {
        let err = ApiError::Referral(ReferralError::FileRead(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.detail(),
            "Server error: failed to read referral file: permission denied"
        );
    }

    #[test]
    fn test_header_mismatch_maps_to_500() {
        let err = ApiError::Referral(ReferralError::InvalidStructure { found: vec![] });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "CSV structure is invalid.");
    }
}
