use leptos::prelude::*;

use crate::preferences::Theme;
use crate::state::use_storefront;

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let storefront = use_storefront();
    let prefs = storefront.preferences;
    let (status, set_status) = signal::<Option<String>>(None);

    let theme_label = move || match prefs.get().theme {
        Theme::Light => "\u{2600}\u{fe0f} Light",
        Theme::Dark => "\u{1f319} Dark",
    };

    let reset_all = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let confirmed = window
            .confirm_with_message(
                "This deletes your saved cart and preferences. Continue?",
            )
            .unwrap_or(false);
        if confirmed {
            storefront.reset_all();
            let _ = window.alert_with_message("All data has been deleted");
            set_status.set(Some("Stored data cleared".to_string()));
        }
    };

    view! {
        <div class="page preferences-page">
            <h2>"Preferences"</h2>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="form-group">
                    <label>"Theme"</label>
                    <button class="btn btn-secondary" on:click=move |_| storefront.toggle_theme()>
                        {theme_label}
                    </button>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Notifications"</h3>
                <div class="form-group">
                    <label>"Show a message when a session is added"</label>
                    <div
                        class="switch"
                        class:active=move || prefs.get().notifications
                        role="switch"
                        aria-checked=move || prefs.get().notifications.to_string()
                        on:click=move |_| storefront.toggle_notifications()
                    >
                        <div class="switch-knob"></div>
                    </div>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Data"</h3>
                <p class="section-description">
                    "Your cart and preferences are stored only in this browser."
                </p>
                <button class="btn btn-danger" on:click=reset_all>"Delete all data"</button>
                <Show when=move || status.get().is_some()>
                    <span class="status-text">{move || status.get().unwrap_or_default()}</span>
                </Show>
            </section>
        </div>
    }
}
