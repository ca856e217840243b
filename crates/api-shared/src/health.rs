use crate::HealthRes;

/// The fixed greeting returned by the liveness route.
pub const HEALTH_MESSAGE: &str = "Panchakarma ML API running 🚀";

/// Simple health service shared by every API front end
///
/// The response does not depend on any state, so repeated checks always return the same payload.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` carrying the fixed greeting.
    pub fn check_health() -> HealthRes {
        HealthRes {
            message: HEALTH_MESSAGE.into(),
        }
    }
}
