use crate::HealthRes;

/// Simple health service that can be used by both the REST API and the CLI
///
/// This service provides a standardised way to check the health status of the referral
/// service. It carries no state.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Referrals service is alive".into(),
        }
    }
}
