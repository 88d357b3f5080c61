use dioxus::prelude::*;

use crate::RegisterForm;

const REGISTER_CSS: Asset = asset!("/assets/styling/register.css");

/// Shared registration page.
#[component]
pub fn RegisterView() -> Element {
    rsx! {
        document::Stylesheet { href: REGISTER_CSS }

        section {
            class: "common__section",
            h2 { class: "common__title", "Register" }
            RegisterForm {}
        }
    }
}
