use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Find your calm"</h1>
                <p class="page-description">
                    "Yoga, meditation and bodywork sessions with experienced instructors."
                </p>
                <a href="/sessions" class="btn btn-primary">"Browse Sessions"</a>
            </section>

            <div class="card-grid">
                <div class="card">
                    <h3>"Choose"</h3>
                    <p>"Pick the sessions that suit you from our catalog"</p>
                </div>
                <div class="card">
                    <h3>"Book"</h3>
                    <p>"Add them to your cart; it is kept on this device"</p>
                </div>
                <div class="card">
                    <h3>"Relax"</h3>
                    <p>"Adjust quantities any time and check your total"</p>
                </div>
            </div>
        </div>
    }
}
