//! Degraded-mode handling when the host booking system is absent.

use std::sync::atomic::{AtomicBool, Ordering};

/// What the host platform reported as available at startup.
#[derive(Debug, Clone, Copy)]
pub struct HostCapabilities {
    /// Whether the booking system's extension points are present.
    pub booking_hooks_available: bool,
}

/// A message for the host's admin notice area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminNotice {
    pub message: String,
}

static MISSING_HOST_WARNED: AtomicBool = AtomicBool::new(false);

/// Notice shown when the booking system is missing.
///
/// The warning is logged once per process; the notice itself is returned on
/// every call so the host can keep displaying it.
pub fn missing_host_notice() -> AdminNotice {
    if !MISSING_HOST_WARNED.swap(true, Ordering::Relaxed) {
        tracing::warn!("booking system extension points not found; per-event currency overrides are inactive");
    }
    AdminNotice {
        message: "Please ensure the events booking system is enabled for per-event currencies to work."
            .to_string(),
    }
}
