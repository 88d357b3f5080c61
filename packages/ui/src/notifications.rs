//! Toast notifications raised by the registration flow.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use registration::{Notifier, Severity};

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

/// Currently visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    entries: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    /// Add a notification and return its id.
    pub fn push(&mut self, severity: Severity, message: &str, timestamp: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            timestamp,
            severity,
            message: message.to_string(),
        });
        id
    }

    /// Remove a notification. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notifications: &mut Signal<Notifications>, severity: Severity, message: &str) -> u64 {
    match severity {
        Severity::Success => tracing::info!("{}", message),
        Severity::Error => tracing::error!("{}", message),
    }
    notifications
        .write()
        .push(severity, message, current_time())
}

/// [`Notifier`] that shows toasts and dismisses them after a delay.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    notifications: Signal<Notifications>,
    dismiss_after_secs: u32,
}

impl ToastNotifier {
    pub fn new(notifications: Signal<Notifications>, dismiss_after_secs: u32) -> Self {
        Self {
            notifications,
            dismiss_after_secs,
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        let id = notify(&mut self.notifications, severity, message);
        if self.dismiss_after_secs == 0 {
            return;
        }

        // Raised from tasks whose component may unmount right after (the
        // success path navigates away), so the timer lives at the root.
        let mut notifications = self.notifications;
        let secs = u64::from(self.dismiss_after_secs);
        spawn_forever(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(secs)).await;

            notifications.write().dismiss(id);
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
