use leptos::prelude::*;

use crate::cart::CartLine;
use crate::catalog::ItemId;
use crate::format::format_price;

/// One line of the cart drawer: name, duration, -/+ quantity, subtotal.
#[component]
pub fn CartLineRow(
    line: CartLine,
    #[prop(into)] on_remove: Callback<ItemId>,
    #[prop(into)] on_increment: Callback<ItemId>,
    /// Taking the last one off removes the line.
    #[prop(into)]
    on_decrement: Callback<ItemId>,
) -> impl IntoView {
    let id = line.id().clone();
    let quantity = line.quantity;
    let subtotal = format_price(line.subtotal());
    let duration = if line.item.duration.is_empty() {
        "N/A".to_string()
    } else {
        line.item.duration.clone()
    };

    let remove_id = id.clone();
    let minus_id = id.clone();
    let plus_id = id;

    view! {
        <div class="cart-line">
            <div class="cart-line-header">
                <h3>{line.item.name.clone()}</h3>
                <button
                    class="btn-remove"
                    aria-label="Remove"
                    on:click=move |_| on_remove.run(remove_id.clone())
                >
                    "\u{2715}"
                </button>
            </div>

            <p class="cart-line-meta">{duration}</p>

            <div class="cart-line-controls">
                <div class="quantity-controls">
                    <button
                        class="btn-quantity"
                        aria-label="Decrease"
                        on:click=move |_| on_decrement.run(minus_id.clone())
                    >
                        "\u{2212}"
                    </button>
                    <span class="quantity">{quantity}</span>
                    <button
                        class="btn-quantity"
                        aria-label="Increase"
                        on:click=move |_| on_increment.run(plus_id.clone())
                    >
                        "+"
                    </button>
                </div>
                <span class="cart-line-price">{subtotal}</span>
            </div>
        </div>
    }
}
