//! One-shot location lookup over a host position source.

use crate::error::LocationError;
use crate::source::PositionSource;
use crate::types::Coordinates;

/// Request the current location once.
///
/// Fails immediately with [`LocationError::NotSupported`] when the host
/// has no positioning capability, without issuing a position request.
/// Otherwise issues exactly one request and maps the host's fault code on
/// failure. No de-duplication of concurrent callers, no cancellation.
pub async fn current_location<S: PositionSource>(source: &S) -> Result<Coordinates, LocationError> {
    if !source.is_available() {
        return Err(LocationError::NotSupported);
    }

    match source.request_position().await {
        Ok(fix) => {
            tracing::debug!(
                latitude = fix.latitude,
                longitude = fix.longitude,
                "position fix acquired"
            );
            Ok(Coordinates {
                latitude: fix.latitude,
                longitude: fix.longitude,
            })
        }
        Err(code) => {
            let error = LocationError::from_code(code);
            tracing::warn!(code, error = %error, "position request failed");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{PositionFix, SystemPositionSource, PERMISSION_DENIED, TIMEOUT};
    use std::cell::Cell;

    /// Scripted source for driving the provider through each path.
    struct ScriptedSource {
        available: bool,
        result: Result<PositionFix, u16>,
        requested: Cell<bool>,
    }

    impl ScriptedSource {
        fn available(result: Result<PositionFix, u16>) -> Self {
            Self {
                available: true,
                result,
                requested: Cell::new(false),
            }
        }

        fn absent() -> Self {
            Self {
                available: false,
                result: Err(0),
                requested: Cell::new(false),
            }
        }
    }

    impl PositionSource for ScriptedSource {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn request_position(&self) -> Result<PositionFix, u16> {
            self.requested.set(true);
            self.result
        }
    }

    fn fix(latitude: f64, longitude: f64) -> PositionFix {
        PositionFix {
            latitude,
            longitude,
            accuracy_meters: Some(12.0),
        }
    }

    #[tokio::test]
    async fn test_success_extracts_coordinates() {
        let source = ScriptedSource::available(Ok(fix(35.1796, 129.0756)));

        let coords = current_location(&source).await.unwrap();

        assert!((coords.latitude - 35.1796).abs() < f64::EPSILON);
        assert!((coords.longitude - 129.0756).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_absent_capability_fails_before_requesting() {
        let source = ScriptedSource::absent();

        let result = current_location(&source).await;

        assert_eq!(result, Err(LocationError::NotSupported));
        assert!(!source.requested.get());
    }

    #[tokio::test]
    async fn test_permission_denied_code_maps() {
        let source = ScriptedSource::available(Err(PERMISSION_DENIED));

        let result = current_location(&source).await;

        assert_eq!(result, Err(LocationError::PermissionDenied));
        assert!(source.requested.get());
    }

    #[tokio::test]
    async fn test_timeout_code_maps() {
        let source = ScriptedSource::available(Err(TIMEOUT));

        assert_eq!(current_location(&source).await, Err(LocationError::Timeout));
    }

    #[tokio::test]
    async fn test_unrecognized_code_maps_to_unknown() {
        let source = ScriptedSource::available(Err(42));

        assert_eq!(
            current_location(&source).await,
            Err(LocationError::Unknown(42))
        );
    }

    #[tokio::test]
    async fn test_headless_default_reports_not_supported() {
        let result = current_location(&SystemPositionSource).await;

        assert_eq!(result, Err(LocationError::NotSupported));
    }
}
