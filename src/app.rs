use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::cart_drawer::CartDrawer;
use crate::components::header::Header;
use crate::components::toast::Toast;
use crate::config::AppConfig;
use crate::pages::home::HomePage;
use crate::pages::preferences::PreferencesPage;
use crate::pages::sessions::SessionsPage;
use crate::state::Storefront;
use crate::theme::apply_theme;

#[component]
pub fn App() -> impl IntoView {
    let storefront = Storefront::new(AppConfig::default());
    provide_context(storefront);

    // Fetch the catalog once on mount
    Effect::new(move |_| {
        storefront.load_catalog();
    });

    // Apply theme to DOM whenever the preference changes
    Effect::new(move |_| {
        let theme = storefront.preferences.with(|p| p.theme);
        apply_theme(theme);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/sessions") view=SessionsPage />
                        <Route path=path!("/preferences") view=PreferencesPage />
                    </Routes>
                </main>
                <CartDrawer />
                <Toast />
            </div>
        </Router>
    }
}
