//! Tab sections.
//!
//! ARCHITECTURE
//! ============
//! Each page is the body of one `.tab-content` section; the app shell decides
//! which one is active and delegates rendering details to `components`.

pub mod assets;
pub mod dashboard;
pub mod settings;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use self::assets::AssetsPage;
use self::dashboard::DashboardPage;
use self::settings::SettingsPage;

/// Render the body for section `id`; unknown ids render an empty section.
pub fn section_view(id: &str) -> AnyView {
    match id {
        "dashboard" => view! { <DashboardPage/> }.into_any(),
        "assets" => view! { <AssetsPage/> }.into_any(),
        "settings" => view! { <SettingsPage/> }.into_any(),
        _ => ().into_any(),
    }
}
