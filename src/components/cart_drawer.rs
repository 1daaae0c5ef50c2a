use leptos::prelude::*;

use crate::catalog::ItemId;
use crate::components::cart_line::CartLineRow;
use crate::format::format_price;
use crate::state::use_storefront;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Slide-in cart panel. All changes go through the storefront, which
/// persists them and updates the cart signal this renders from.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let storefront = use_storefront();
    let cart = storefront.cart;

    let on_remove = Callback::new(move |id: ItemId| storefront.remove(&id));
    let on_increment = Callback::new(move |id: ItemId| storefront.increment(&id));
    let on_decrement = Callback::new(move |id: ItemId| storefront.decrement(&id));
    let on_clear = move |_| {
        if confirm("Empty the whole cart?") {
            storefront.clear_cart();
        }
    };

    view! {
        <div class="cart-modal" class:visible=move || storefront.cart_open.get()>
            <div class="cart-backdrop" on:click=move |_| storefront.close_cart()></div>
            <aside class="cart-panel">
                <div class="cart-panel-header">
                    <h2>"Your Cart"</h2>
                    <button
                        class="btn-close"
                        aria-label="Close cart"
                        on:click=move |_| storefront.close_cart()
                    >
                        "\u{2715}"
                    </button>
                </div>

                <div class="cart-items">
                    {move || {
                        let current = cart.get();
                        if current.is_empty() {
                            view! {
                                <div class="cart-empty">
                                    <p>"Your cart is empty"</p>
                                </div>
                            }.into_any()
                        } else {
                            current
                                .lines()
                                .iter()
                                .map(|line| {
                                    view! {
                                        <CartLineRow
                                            line=line.clone()
                                            on_remove=on_remove
                                            on_increment=on_increment
                                            on_decrement=on_decrement
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>

                <Show when=move || cart.with(|c| !c.is_empty())>
                    <div class="cart-footer">
                        <div class="cart-total">
                            <span>"Total"</span>
                            <span class="cart-total-amount">
                                {move || cart.with(|c| format_price(c.total()))}
                            </span>
                        </div>
                        <button class="btn btn-secondary" on:click=on_clear>
                            "Clear cart"
                        </button>
                    </div>
                </Show>
            </aside>
        </div>
    }
}
