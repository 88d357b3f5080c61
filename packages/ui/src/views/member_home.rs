use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

/// Landing view after registration.
#[component]
pub fn MemberHomeView() -> Element {
    let auth = use_auth();
    let state = auth();

    let Some(user) = state.user else {
        return rsx! {
            section {
                class: "common__section",
                if state.loading { "Loading..." } else { "You are not signed in." }
            }
        };
    };

    let since = user.member_since_date().to_string();

    rsx! {
        section {
            class: "common__section",
            h2 { class: "common__title", "Welcome, {user.username}" }
            p { "{user.email} · {user.location}" }
            p { "Member since {since}" }
            LogoutButton { class: "button" }
        }
    }
}
