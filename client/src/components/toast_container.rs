//! Mount point for toasts created by [`crate::util::toast::show_toast`].

use leptos::prelude::*;

use crate::util::toast::TOAST_CONTAINER_ID;

#[component]
pub fn ToastContainer() -> impl IntoView {
    view! { <div id=TOAST_CONTAINER_ID class="toast-container" aria-live="polite"></div> }
}
