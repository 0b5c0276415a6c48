//! Assets section: a grid of asset cards.

use leptos::prelude::*;

use crate::components::asset_card::AssetCard;

const ASSETS: &[(&str, &str)] = &[
    ("Daily driver", "Oil change due soon"),
    ("Track car", "Tires inspected last week"),
    ("Trailer", "Registration renewed"),
];

#[component]
pub fn AssetsPage() -> impl IntoView {
    view! {
        <div class="assets-page">
            <h1>"Assets"</h1>
            <div class="assets-page__grid">
                {ASSETS
                    .iter()
                    .map(|(name, detail)| {
                        view! { <AssetCard name=(*name).to_owned() detail=(*detail).to_owned()/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
