//! Main application component
//!
//! Owns the single `AppState` and applies state machine transitions to
//! it; every screen is a rendering of that state. The one async call
//! (the Gemini request) runs through `spawn_local` and reports back via
//! the generation token it was started with, so a superseded attempt's
//! late reply is discarded.

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use green_oracle_common::{AppState, View, ANALYSIS_ERROR_MESSAGE};

use crate::api::gemini;
use crate::components::{
    features::Features, hero::Hero, navbar::Navbar, result_card::ResultCard,
    upload_section::UploadSection,
};
use crate::config;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::default());

    let navigate = move |view: View| state.update(|s| s.set_view(view));

    let on_analyze = move |image_base64: String| {
        let Some(generation) = state.try_update(|s| s.begin_analysis()) else {
            return;
        };
        spawn_local(async move {
            match gemini::analyze_leaf_image(config::api_key(), &image_base64).await {
                Ok(result) => {
                    state.update(|s| {
                        s.finish_success(generation, result);
                    });
                }
                Err(err) => {
                    // Full detail goes to the console only; the user gets
                    // the fixed retry message.
                    console::error!(format!("analysis failed: {}", err));
                    state.update(|s| {
                        s.finish_failure(generation, ANALYSIS_ERROR_MESSAGE);
                    });
                }
            }
        });
    };

    let on_reset = move || state.update(|s| s.reset());

    let current_view = Signal::derive(move || state.with(|s| s.current_view));
    let is_analyzing = Signal::derive(move || state.with(|s| s.is_analyzing()));

    view! {
        <div class="app-shell">
            <Navbar current_view=current_view on_navigate=navigate />

            <main class="main">
                {move || match current_view.get() {
                    View::Home => home_section(navigate).into_any(),
                    View::About => about_section(navigate).into_any(),
                    View::Diagnostic => view! {
                        <section class="diagnostic">
                            <div class="section-heading">
                                <h2>"Plant Diagnostic Hub"</h2>
                                <p>"Secure your harvest with precise, AI-driven identification."</p>
                            </div>

                            <Show when=move || state.with(|s| s.error.is_some())>
                                <div class="error-banner">
                                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                                </div>
                            </Show>

                            {move || match state.with(|s| s.result.clone()) {
                                Some(result) => view! {
                                    <ResultCard result=result on_reset=on_reset />
                                }.into_any(),
                                None => view! {
                                    <UploadSection
                                        is_analyzing=is_analyzing
                                        on_analyze=on_analyze
                                    />
                                }.into_any(),
                            }}
                        </section>
                    }.into_any(),
                }}
            </main>

            <footer class="footer">
                <span class="brand-name">"The Green Oracle"</span>
                <span class="footer-note">
                    "Student-driven Innovation for Sustainable Agriculture."
                </span>
            </footer>
        </div>
    }
}

fn home_section(navigate: impl Fn(View) + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <Hero on_start=move || navigate(View::Diagnostic) />
        <Features />
        <section class="mission">
            <h2>"Our Mission"</h2>
            <p>
                "Agriculture is the backbone of society, yet farmers face immense pressure \
                 from pests and diseases. The Green Oracle bridges the gap between complex \
                 diagnostic technology and rural accessibility."
            </p>
            <p>
                "By leveraging AI vision, we provide immediate, scientifically-backed \
                 answers that save crops, reduce chemical misuse, and ensure food security \
                 for local communities."
            </p>
            <button class="link-button" on:click=move |_| navigate(View::About)>
                "Read our full vision →"
            </button>
        </section>
    }
}

fn about_section(navigate: impl Fn(View) + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About The Green Oracle"</h1>
            <p>
                <strong>"The Green Oracle"</strong>
                " is a web-based smart plant disease detection system designed to support \
                 farmers, students, and home gardeners in identifying plant diseases \
                 accurately and at an early stage."
            </p>
            <h3>"The Problem"</h3>
            <p>
                "Agriculture faces several persistent challenges related to plant health \
                 management, including late detection of diseases, limited access to \
                 experts, and incorrect use of pesticides. These issues negatively impact \
                 food security and sustainable farming."
            </p>
            <h3>"Our Solution"</h3>
            <p>
                "By integrating image processing and machine learning, we offer a low-cost, \
                 accessible platform. Users upload leaf images and receive scientifically \
                 informed recommendations instantly."
            </p>
            <button class="btn btn-primary btn-large" on:click=move |_| navigate(View::Diagnostic)>
                "Start Diagnostic Journey"
            </button>
        </section>
    }
}
