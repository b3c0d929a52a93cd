//! Contract for the host positioning capability.

/// Host fault code: the user denied the location permission.
pub const PERMISSION_DENIED: u16 = 1;
/// Host fault code: no position could be determined.
pub const POSITION_UNAVAILABLE: u16 = 2;
/// Host fault code: the position request timed out.
pub const TIMEOUT: u16 = 3;

/// A raw position fix as reported by the host.
#[derive(Debug, Clone, Copy)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy radius, when the host reports one.
    pub accuracy_meters: Option<f64>,
}

/// One-shot positioning capability provided by the host environment.
///
/// Failures carry the host's numeric fault code (see the constants in this
/// module); any unlisted code is treated as unknown.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    /// Whether the host exposes a positioning capability at all.
    fn is_available(&self) -> bool;

    /// Request a single position fix.
    async fn request_position(&self) -> Result<PositionFix, u16>;
}

/// Default source for headless builds: reports the capability absent.
///
/// Hosts with a real positioning backend implement [`PositionSource`]
/// themselves and pass that instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPositionSource;

impl PositionSource for SystemPositionSource {
    fn is_available(&self) -> bool {
        false
    }

    async fn request_position(&self) -> Result<PositionFix, u16> {
        Err(POSITION_UNAVAILABLE)
    }
}
