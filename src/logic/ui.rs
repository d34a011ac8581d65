//! UI timing logic
//!
//! Pure functions deciding when transient UI elements go away.

/// How long a success toast stays up
pub const TOAST_DURATION_MS: u128 = 1500;

/// Error toasts stay longer so the message can be read
pub const ERROR_TOAST_DURATION_MS: u128 = 4000;

/// Prefix marking a toast as an error
pub const ERROR_PREFIX: &str = "Error:";

pub fn is_error_toast(message: &str) -> bool {
    message.starts_with(ERROR_PREFIX)
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use syncpanel::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast("Sync started", 1000));
/// assert!(should_dismiss_toast("Sync started", 1500));
/// assert!(!should_dismiss_toast("Error: Sync is already running", 1500));
/// ```
pub fn should_dismiss_toast(message: &str, elapsed_ms: u128) -> bool {
    let limit = if is_error_toast(message) {
        ERROR_TOAST_DURATION_MS
    } else {
        TOAST_DURATION_MS
    };
    elapsed_ms >= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_toast_timing() {
        assert!(!should_dismiss_toast("Refreshing", 0));
        assert!(!should_dismiss_toast("Refreshing", 1499));
        assert!(should_dismiss_toast("Refreshing", 1500));
    }

    #[test]
    fn test_error_toast_lingers() {
        let msg = "Error: connection refused";
        assert!(is_error_toast(msg));
        assert!(!should_dismiss_toast(msg, 3999));
        assert!(should_dismiss_toast(msg, 4000));
    }
}
