use leptos::prelude::*;

use crate::catalog::CatalogItem;
use crate::components::session_card::SessionCard;
use crate::state::{use_storefront, CatalogState};

#[component]
pub fn SessionsPage() -> impl IntoView {
    let storefront = use_storefront();
    let fallback_image = storefront.config().fallback_image;
    let on_add = Callback::new(move |item: CatalogItem| storefront.add(&item));

    view! {
        <div class="page sessions-page">
            <h2>"Our Sessions"</h2>

            {move || match storefront.catalog.get() {
                CatalogState::Loading => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Loading sessions..."</p>
                    </div>
                }.into_any(),
                CatalogState::Failed(e) => view! {
                    <div class="load-error">
                        <p class="status-text status-error">"Could not load the sessions."</p>
                        <p class="status-detail">{e}</p>
                        <button class="btn btn-secondary" on:click=move |_| storefront.load_catalog()>
                            "Try again"
                        </button>
                    </div>
                }.into_any(),
                CatalogState::Loaded(items) if items.is_empty() => view! {
                    <p class="empty-catalog">"No sessions available"</p>
                }.into_any(),
                CatalogState::Loaded(items) => {
                    let fallback = fallback_image.clone();
                    view! {
                        <div class="session-grid">
                            {items
                                .into_iter()
                                .map(|session| {
                                    view! {
                                        <SessionCard
                                            session=session
                                            on_add=on_add
                                            fallback_image=fallback.clone()
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
