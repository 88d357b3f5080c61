//! Registration page.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::RegisterView;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: nothing to register
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::List {});
    }

    rsx! {
        RegisterView {}
    }
}
