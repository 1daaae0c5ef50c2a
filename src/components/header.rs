use leptos::prelude::*;

use crate::state::use_storefront;

#[component]
pub fn Header() -> impl IntoView {
    let storefront = use_storefront();
    let menu_open = storefront.menu_open;
    let item_count = move || storefront.cart.with(|cart| cart.item_count());

    view! {
        <header class="site-header">
            <a href="/" class="logo" on:click=move |_| storefront.close_menu()>
                "Serenity Studio"
            </a>

            <nav class="main-nav" class:open=move || menu_open.get()>
                <a href="/" class="nav-link" on:click=move |_| storefront.close_menu()>"Home"</a>
                <a href="/sessions" class="nav-link" on:click=move |_| storefront.close_menu()>
                    "Sessions"
                </a>
                <a href="/preferences" class="nav-link" on:click=move |_| storefront.close_menu()>
                    "Preferences"
                </a>
            </nav>

            <div class="header-actions">
                <button
                    class="cart-button"
                    aria-label="Open cart"
                    on:click=move |_| storefront.open_cart()
                >
                    "Cart"
                    <Show when=move || { item_count() > 0 }>
                        <span class="cart-badge">{item_count}</span>
                    </Show>
                </button>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| storefront.toggle_menu()
                >
                    "\u{2630}"
                </button>
            </div>

            <div
                class="menu-overlay"
                class:visible=move || menu_open.get()
                on:click=move |_| storefront.close_menu()
            ></div>
        </header>
    }
}
