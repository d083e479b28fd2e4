use crate::app::infrastructure::error::AppError;

/// Whether this environment can show a native file chooser and hand back
/// usable file paths.
///
/// Evaluated once at startup; the capability does not change while the
/// application is running. Every open attempt checks the gate first and
/// fails with a descriptive error instead of attempting the dialog and
/// failing late.
#[derive(Debug, Clone)]
pub struct FileAccessGate {
    supported: bool,
    reason: Option<String>,
}

impl FileAccessGate {
    pub fn detect() -> Self {
        match probe() {
            Ok(()) => Self {
                supported: true,
                reason: None,
            },
            Err(reason) => Self {
                supported: false,
                reason: Some(reason),
            },
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// The error surfaced when an open is attempted despite the gate.
    pub fn deny(&self) -> AppError {
        let reason = self
            .reason
            .clone()
            .unwrap_or_else(|| "native file dialogs are unavailable".to_string());
        AppError::Unsupported(reason)
    }
}

// The chooser needs a display connection; a headless session has neither
// an X11 nor a Wayland socket to talk to.
#[cfg(target_os = "linux")]
fn probe() -> std::result::Result<(), String> {
    let has_display = std::env::var_os("WAYLAND_DISPLAY").is_some()
        || std::env::var_os("DISPLAY").is_some();
    if has_display {
        Ok(())
    } else {
        Err("no display server is available (DISPLAY and WAYLAND_DISPLAY are both unset)"
            .to_string())
    }
}

#[cfg(not(target_os = "linux"))]
fn probe() -> std::result::Result<(), String> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_present_iff_unsupported() {
        let gate = FileAccessGate::detect();
        assert_eq!(gate.is_supported(), gate.reason.is_none());
    }

    #[test]
    fn test_deny_is_descriptive() {
        let gate = FileAccessGate {
            supported: false,
            reason: Some("no display server is available".to_string()),
        };
        let msg = gate.deny().to_string();
        assert!(msg.contains("Cannot open files"));
        assert!(msg.contains("no display server"));
    }

    #[test]
    fn test_deny_has_fallback_message() {
        let gate = FileAccessGate {
            supported: false,
            reason: None,
        };
        assert!(gate.deny().to_string().contains("unavailable"));
    }
}
