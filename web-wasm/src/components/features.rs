//! Feature cards for the landing page

use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    let items = [
        (
            "Early Detection",
            "Identify diseases before they spread, minimizing yield loss and crop damage.",
        ),
        (
            "Actionable Guidance",
            "Receive step-by-step treatment plans and scientifically informed prevention measures.",
        ),
        (
            "Localized Knowledge",
            "Adapted for local agricultural environments and designed for ease of use in rural areas.",
        ),
    ];

    view! {
        <section class="features">
            <div class="section-heading">
                <h2>"Why The Green Oracle?"</h2>
                <p>
                    "Our platform goes beyond classification, serving as a comprehensive \
                     decision-support system for modern farming."
                </p>
            </div>
            <div class="feature-grid">
                {items
                    .into_iter()
                    .map(|(title, desc)| {
                        view! {
                            <div class="feature-card">
                                <h3>{title}</h3>
                                <p>{desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
