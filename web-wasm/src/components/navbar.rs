//! Navigation bar component

use leptos::prelude::*;

use green_oracle_common::View;

#[component]
pub fn Navbar<F>(current_view: Signal<View>, on_navigate: F) -> impl IntoView
where
    F: Fn(View) + 'static + Clone + Send + Sync,
{
    let link_class = move |view: View| {
        if current_view.get() == view {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        move |_| on_navigate(View::Home)
    };
    let go_home_brand = {
        let on_navigate = on_navigate.clone();
        move |_| on_navigate(View::Home)
    };
    let go_about = {
        let on_navigate = on_navigate.clone();
        move |_| on_navigate(View::About)
    };
    let go_diagnostic = move |_| on_navigate(View::Diagnostic);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="brand" on:click=go_home_brand>
                    <span class="brand-mark">"✦"</span>
                    <span class="brand-name">"Green " <span class="brand-accent">"Oracle"</span></span>
                </div>

                <div class="nav-links">
                    <button class=move || link_class(View::Home) on:click=go_home>
                        "Home"
                    </button>
                    <button class=move || link_class(View::About) on:click=go_about>
                        "About"
                    </button>
                    <button class="btn btn-primary btn-pill" on:click=go_diagnostic>
                        "Start Diagnosis"
                    </button>
                </div>
            </div>
        </nav>
    }
}
