//! Location-specific error types.

use thiserror::Error;

use crate::source::{PERMISSION_DENIED, POSITION_UNAVAILABLE, TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Positioning is not supported in this environment")]
    NotSupported,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location fault code {0}")]
    Unknown(u16),
}

impl LocationError {
    /// Map a host fault code to an error.
    pub fn from_code(code: u16) -> Self {
        match code {
            PERMISSION_DENIED => Self::PermissionDenied,
            POSITION_UNAVAILABLE => Self::PositionUnavailable,
            TIMEOUT => Self::Timeout,
            other => Self::Unknown(other),
        }
    }

    /// User-friendly message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotSupported => "Location is not available on this device.",
            Self::PermissionDenied => "We couldn't get permission to read your location.",
            Self::PositionUnavailable => "We couldn't read your location.",
            Self::Timeout => "The location request took too long.",
            Self::Unknown(_) => "Something went wrong while reading your location.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_maps_standard_codes() {
        assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
        assert_eq!(
            LocationError::from_code(2),
            LocationError::PositionUnavailable
        );
        assert_eq!(LocationError::from_code(3), LocationError::Timeout);
    }

    #[test]
    fn test_from_code_unrecognized_is_unknown() {
        assert_eq!(LocationError::from_code(0), LocationError::Unknown(0));
        assert_eq!(LocationError::from_code(99), LocationError::Unknown(99));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let messages = [
            LocationError::NotSupported.user_message(),
            LocationError::PermissionDenied.user_message(),
            LocationError::PositionUnavailable.user_message(),
            LocationError::Timeout.user_message(),
            LocationError::Unknown(5).user_message(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
