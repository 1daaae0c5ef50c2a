use leptos::prelude::*;

use crate::catalog::CatalogItem;
use crate::format::format_price;

#[component]
pub fn SessionCard(
    session: CatalogItem,
    /// Invoked with the session when the visitor books it.
    #[prop(into)]
    on_add: Callback<CatalogItem>,
    /// Image used when the session has none.
    #[prop(into)]
    fallback_image: String,
) -> impl IntoView {
    let image = session.image.clone().unwrap_or(fallback_image);
    let instructor = session
        .instructor
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "To be assigned".to_string());
    let price = format_price(session.price);
    let name = session.name.clone();
    let description = session.description.clone();
    let duration = session.duration.clone();

    view! {
        <div class="session-card">
            <div class="session-card-image">
                <img src=image alt=name.clone() />
                <div class="session-card-price">{price}</div>
            </div>

            <div class="session-card-body">
                <h3>{name}</h3>
                <p class="session-card-description">{description}</p>

                <div class="session-card-meta">
                    <span class="meta-item">{duration}</span>
                    <span class="meta-item">{instructor}</span>
                </div>

                <button
                    class="btn btn-primary add-to-cart"
                    on:click=move |_| on_add.run(session.clone())
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
