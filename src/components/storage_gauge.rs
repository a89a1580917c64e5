//! Storage Gauge Component
//!
//! Bar whose width and color follow the latest usage snapshot.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StorageGauge() -> impl IntoView {
    let store = use_app_store();
    let usage = move || store.usage().get();

    view! {
        <div class="storage-gauge">
            <div class="gauge-track">
                <div
                    class="gauge-fill"
                    style=move || {
                        let u = usage();
                        format!("width: {:.2}%; background-color: {};", u.percentage, u.tier.color())
                    }
                ></div>
            </div>
            <p class="gauge-text">{move || usage().message}</p>
        </div>
    }
}
