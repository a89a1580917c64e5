//! Save Error Banner Component
//!
//! Shown while the last write to storage failed, with a retry action.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SaveErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <Show when=move || store.save_error().get().is_some()>
            <div class="save-error">
                <span class="save-error-text">
                    "Changes not saved: " {move || store.save_error().get().unwrap_or_default()}
                </span>
                <button class="retry-btn" on:click=move |_| {
                    if let Err(e) = ctx.retry_save() {
                        log::warn!("retry failed: {}", e);
                    }
                }>"Retry"</button>
            </div>
        </Show>
    }
}
