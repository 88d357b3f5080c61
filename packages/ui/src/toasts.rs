use dioxus::prelude::*;
use registration::Severity;

use crate::notifications::{use_notifications, Notifications};
use crate::Icon;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};

const TOASTS_CSS: Asset = asset!("/assets/styling/toasts.css");

/// Provides the notification signal and renders the toast stack above `children`.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        {children}
        Toasts {}
    }
}

#[component]
pub fn Toasts() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications().entries().to_vec();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: TOASTS_CSS }

        div {
            class: "toasts",
            role: "status",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.severity {
                        Severity::Success => "toast success",
                        Severity::Error => "toast error",
                    },
                    if entry.severity == Severity::Success {
                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                    }
                    span { class: "toast-time", "{entry.timestamp}" }
                    span { class: "toast-message", "{entry.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| {
                            notifications.write().dismiss(entry.id);
                        },
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
