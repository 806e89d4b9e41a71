//! Landing page hero component

use leptos::prelude::*;

#[component]
pub fn Hero<F>(on_start: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    let stats = [
        ("98%", "Accuracy", "AI Vision"),
        ("< 5s", "Speed", "Real-time Analysis"),
        ("24/7", "Accessibility", "Always Available"),
        ("Free", "Cost", "Open Access"),
    ];

    view! {
        <div class="hero">
            <span class="hero-badge">"AI-Powered Agriculture"</span>
            <h1>
                "Empowering Farmers with " <br />
                <span class="accent">"Agricultural Intelligence"</span>
            </h1>
            <p class="hero-lead">
                "The Green Oracle is a smart diagnostic system designed to identify plant \
                 diseases instantly. Upload a photo of a leaf and get professional-grade \
                 advice for treatment and prevention."
            </p>
            <div class="hero-actions">
                <button class="btn btn-primary btn-large" on:click=move |_| on_start()>
                    "Diagnose My Plant"
                </button>
            </div>

            <div class="hero-stats">
                {stats
                    .into_iter()
                    .map(|(value, label, desc)| {
                        view! {
                            <div class="stat">
                                <div class="stat-value">{value}</div>
                                <div class="stat-label">{label}</div>
                                <div class="stat-desc">{desc}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
