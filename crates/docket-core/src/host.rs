use std::path::PathBuf;

use anyhow::{Context, anyhow};
use notify_rust::Notification;
use tracing::debug;

/// Capability surface over the native desktop. One implementation exists per
/// platform family; [`native`] picks the one compiled for the current
/// target, so no call site branches on the OS.
pub trait Host: Send + Sync {
    /// Platform token, one of the `std::env::consts::OS` values
    /// ("windows", "macos", "linux", "freebsd", ...).
    fn os(&self) -> &'static str;

    /// Dialog filter for application-like files; `None` means all files.
    fn app_file_filter(&self) -> Option<(&'static str, &'static [&'static str])>;

    /// Opens the native file picker and blocks until the user answers.
    /// Cancellation is `Ok(None)`, not an error.
    fn pick_app_file(&self) -> anyhow::Result<Option<PathBuf>> {
        let mut dialog = rfd::FileDialog::new().set_title("Select Application");
        if let Some((label, extensions)) = self.app_file_filter() {
            dialog = dialog.add_filter(label, extensions);
        }
        Ok(dialog.pick_file())
    }

    /// Launches the default browser detached. Returns once the opener
    /// process is spawned; runtime failures of the browser are not
    /// observable here.
    fn open_url(&self, url: &str) -> anyhow::Result<()> {
        debug!(url, "opening url in default browser");
        open::that_detached(url).with_context(|| format!("failed to launch browser for {url}"))
    }

    /// Fires a platform-native notification, best effort.
    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()>;
}

pub fn native() -> Box<dyn Host> {
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsHost)
    }
    #[cfg(target_os = "macos")]
    {
        Box::new(MacosHost)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Box::new(UnixHost)
    }
}

#[cfg(target_os = "windows")]
struct WindowsHost;

#[cfg(target_os = "windows")]
impl Host for WindowsHost {
    fn os(&self) -> &'static str {
        "windows"
    }

    fn app_file_filter(&self) -> Option<(&'static str, &'static [&'static str])> {
        Some(("Executables", &["exe"]))
    }

    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()> {
        debug!(title, "sending toast notification");
        Notification::new()
            .summary(title)
            .body(message)
            .show()
            .map(|_| ())
            .map_err(|err| anyhow!("failed to show notification: {err}"))
    }
}

#[cfg(target_os = "macos")]
struct MacosHost;

#[cfg(target_os = "macos")]
impl Host for MacosHost {
    fn os(&self) -> &'static str {
        "macos"
    }

    fn app_file_filter(&self) -> Option<(&'static str, &'static [&'static str])> {
        Some(("Applications", &["app"]))
    }

    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()> {
        debug!(title, "sending notification banner");
        Notification::new()
            .summary(title)
            .body(message)
            .sound_name("Ping")
            .show()
            .map(|_| ())
            .map_err(|err| anyhow!("failed to show notification: {err}"))
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
struct UnixHost;

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
impl Host for UnixHost {
    fn os(&self) -> &'static str {
        std::env::consts::OS
    }

    fn app_file_filter(&self) -> Option<(&'static str, &'static [&'static str])> {
        None
    }

    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()> {
        use notify_rust::Urgency;

        debug!(title, "sending desktop notification");
        Notification::new()
            .summary(title)
            .body(message)
            .urgency(Urgency::Critical)
            .show()
            .map(|_| ())
            .map_err(|err| anyhow!("failed to show notification: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::native;

    #[test]
    fn os_token_matches_the_compiled_target() {
        assert_eq!(native().os(), std::env::consts::OS);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn filter_restricts_to_executables() {
        let (label, extensions) = native().app_file_filter().unwrap();
        assert_eq!(label, "Executables");
        assert_eq!(extensions, ["exe"]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn filter_restricts_to_app_bundles() {
        let (label, extensions) = native().app_file_filter().unwrap();
        assert_eq!(label, "Applications");
        assert_eq!(extensions, ["app"]);
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn filter_is_unrestricted() {
        assert!(native().app_file_filter().is_none());
    }
}
