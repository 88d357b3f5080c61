//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthSession, AuthState, LogoutButton};

pub mod notifications;
pub use notifications::{notify, use_notifications, Notifications, ToastNotifier};

mod toasts;
pub use toasts::{NotificationProvider, Toasts};

mod register_form;
pub use register_form::{use_registration_config, RegisterForm, RouterNavigation, ServerRegistration};
