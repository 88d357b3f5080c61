//! Post-registration landing page.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::MemberHomeView;

use crate::Route;

#[component]
pub fn List() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Register {});
    }

    rsx! {
        MemberHomeView {}
    }
}
