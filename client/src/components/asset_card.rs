//! Asset card. Activating it (click, Enter, Space) shows a toast.

use std::time::Duration;

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use pitstop::config::ShellConfig;
use pitstop::toast::{ASSET_DETAIL_MESSAGE, is_activation_key};

use crate::util::toast::show_toast;

#[component]
pub fn AssetCard(name: String, detail: String) -> impl IntoView {
    let config = expect_context::<StoredValue<ShellConfig>>();
    let open = move || {
        let duration = config.with_value(|cfg| Duration::from_millis(cfg.toast.duration_ms));
        show_toast(ASSET_DETAIL_MESSAGE, duration);
    };

    let on_keypress = move |ev: KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            open();
        }
    };

    view! {
        <article class="asset-card" tabindex="0" role="button" on:click=move |_| open() on:keypress=on_keypress>
            <h3 class="asset-card__name">{name}</h3>
            <p class="asset-card__detail">{detail}</p>
        </article>
    }
}
