//! Controller-specific error types.

use thiserror::Error;

/// Errors that can occur while driving a screen.
///
/// Fetch failures are not errors at this level: the screen captures them
/// into its error state (the rendering layer shows a banner). This type
/// only covers breakdowns of the driver machinery itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    /// The completion-event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ControllerError::ChannelClosed;
        assert_eq!(err.to_string(), "event channel closed unexpectedly");
    }
}
