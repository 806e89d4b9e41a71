//! Diagnosis result card
//!
//! Panel visibility follows the status predicates: treatment only for a
//! diseased plant, prevention for healthy and diseased, nothing for an
//! unrecognized image. List items keep the order the model returned.

use leptos::prelude::*;

use green_oracle_common::{DiagnosisResult, HealthStatus};

#[component]
pub fn ResultCard<F>(result: DiagnosisResult, on_reset: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    let status = result.status;

    let header_class = match status {
        HealthStatus::Healthy => "result-header healthy",
        HealthStatus::Diseased => "result-header diseased",
        HealthStatus::Unknown => "result-header unknown",
    };
    let status_line = format!("{} • {}", status.as_str(), result.confidence_label());

    let treatment = status.shows_treatment().then(|| {
        view! {
            <div class="panel panel-treatment">
                <h3>"Treatment Options"</h3>
                <ul>
                    {result
                        .treatment_options
                        .iter()
                        .map(|step| view! { <li>{step.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    let prevention = status.shows_prevention().then(|| {
        view! {
            <div class="panel panel-prevention">
                <h3>"Prevention"</h3>
                <ul>
                    {result
                        .prevention_measures
                        .iter()
                        .map(|step| view! { <li>{step.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    let healthy_note = (status == HealthStatus::Healthy).then(|| {
        view! {
            <div class="healthy-note">
                <p>
                    "Your plant appears to be thriving! Keep up with the preventive care \
                     mentioned above to maintain its health."
                </p>
            </div>
        }
    });

    let close = {
        let on_reset = on_reset.clone();
        move |_| on_reset()
    };

    view! {
        <div class="result-card">
            <div class=header_class>
                <div>
                    <h2>{result.disease_name.clone()}</h2>
                    <p class="status-line">{status_line}</p>
                </div>
                <button class="card-close" on:click=close>"✕"</button>
            </div>

            <div class="result-body">
                <div class="description">
                    <h3>"Description"</h3>
                    <p>{result.description.clone()}</p>
                </div>

                <div class="panel-grid">
                    {treatment}
                    {prevention}
                </div>

                {healthy_note}

                <div class="result-actions">
                    <button class="btn btn-dark" on:click=move |_| on_reset()>
                        "New Diagnosis"
                    </button>
                </div>
            </div>
        </div>
    }
}
