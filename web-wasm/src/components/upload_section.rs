//! Upload widget: file picker, drag & drop, and image-to-base64 encoding
//!
//! A selection only reaches the analysis callback when the file declares
//! an image MIME type and the read completes. Each selection bumps a
//! sequence number; the load handler of a superseded read sees a stale
//! number and drops its result (last-write-wins).

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, FileReader};

use green_oracle_common::Error;

const NOT_AN_IMAGE_NOTICE: &str = "That file is not an image. Please choose a photo of a leaf.";
const READ_ERROR_NOTICE: &str = "Could not read the selected file. Please try again.";

#[component]
pub fn UploadSection<F>(is_analyzing: Signal<bool>, on_analyze: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (preview, set_preview) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (read_seq, set_read_seq) = signal(0u64);

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file = {
        let on_analyze = on_analyze.clone();
        move |file: web_sys::File| {
            if !is_image_mime(&file.type_()) {
                set_notice.set(Some(NOT_AN_IMAGE_NOTICE.to_string()));
                return;
            }
            set_notice.set(None);

            let seq = read_seq.get_untracked() + 1;
            set_read_seq.set(seq);

            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(_) => {
                    report_read_failure("FileReader unavailable", set_notice);
                    return;
                }
            };

            let on_analyze = on_analyze.clone();
            let reader_clone = reader.clone();
            let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
                if read_seq.get_untracked() != seq {
                    // Superseded by a newer selection.
                    return;
                }
                let data_url = match reader_clone.result().ok().and_then(|v| v.as_string()) {
                    Some(data_url) => data_url,
                    None => {
                        report_read_failure("reader returned no data URL", set_notice);
                        return;
                    }
                };
                // The full data URL stays around for the preview; only the
                // payload after the comma goes to the model.
                set_preview.set(Some(data_url.clone()));
                match base64_payload(&data_url) {
                    Some(payload) => on_analyze(payload.to_string()),
                    None => report_read_failure("data URL without payload", set_notice),
                }
            }) as Box<dyn FnMut(_)>);

            let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
                if read_seq.get_untracked() == seq {
                    report_read_failure("reader error event", set_notice);
                }
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onload.forget();
            onerror.forget();

            let _ = reader.read_as_data_url(&file);
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if is_analyzing.get_untracked() {
                return;
            }
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_analyzing.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = {
        let handle_file = handle_file.clone();
        move |ev: web_sys::Event| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }
    };

    let on_pick = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_clear = move |_| {
        set_preview.set(None);
        set_notice.set(None);
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let heading = move || {
        if is_analyzing.get() {
            "Analyzing Image..."
        } else if preview.get().is_some() {
            "Analyze this plant?"
        } else {
            "Upload Leaf Photo"
        }
    };

    view! {
        <div class="upload-wrap">
            <div
                class=move || {
                    let mut classes = vec!["upload-area"];
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    if is_analyzing.get() {
                        classes.push("busy");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <Show when=move || notice.get().is_some()>
                    <p class="upload-notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || preview.get().is_some() && !is_analyzing.get()
                    fallback=|| view! { <div class="upload-icon">"📷"</div> }
                >
                    <div class="preview">
                        <img
                            src=move || preview.get().unwrap_or_default()
                            alt="Leaf preview"
                        />
                        <button class="preview-clear" on:click=on_clear>"✕"</button>
                    </div>
                </Show>

                <h3>{heading}</h3>
                <p class="text-muted">
                    "Take a clear photo of the infected area or drop your image here."
                </p>

                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    node_ref=input_ref
                    on:change=on_change
                />

                <Show when=move || preview.get().is_none() && !is_analyzing.get()>
                    <button class="btn btn-primary" on:click=on_pick>
                        "Choose Photo"
                    </button>
                </Show>

                <Show when=move || is_analyzing.get()>
                    <div class="spinner"></div>
                    <p class="analyzing-text">"Our Oracle is consulting the knowledge base..."</p>
                </Show>
            </div>

            <div class="upload-tips">
                <h4>"For Best Results"</h4>
                <p>
                    "Ensure the leaf is well-lit, centered, and the infection is clearly \
                     visible. Avoid busy backgrounds or multiple leaves in one shot."
                </p>
            </div>
        </div>
    }
}

/// Payload of a data URL, with the `data:<mime>;base64,` prefix stripped.
fn base64_payload(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Only files whose declared MIME type is `image/*` enter the read
/// pipeline; anything else never reaches the diagnosis client.
fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

fn read_error(detail: &str) -> Error {
    Error::FileRead(detail.to_string())
}

/// Read failures are logged with detail and surfaced as a widget notice,
/// distinct from the analysis error banner.
fn report_read_failure(detail: &str, set_notice: WriteSignal<Option<String>>) {
    console::error!(format!("{}", read_error(detail)));
    set_notice.set(Some(READ_ERROR_NOTICE.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_payload_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(base64_payload(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_base64_payload_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(base64_payload(data_url), Some("iVBORw0KGgo="));
    }

    #[test]
    fn test_base64_payload_without_prefix() {
        assert_eq!(base64_payload("not a data url"), None);
        assert_eq!(base64_payload(""), None);
    }

    #[test]
    fn test_image_mime_gate() {
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/webp"));

        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_read_failures_map_to_file_read_errors() {
        let error = read_error("reader error event");
        assert!(matches!(error, Error::FileRead(_)));
        assert_eq!(format!("{}", error), "File read error: reader error event");
    }

    #[test]
    fn test_read_notice_is_distinct_from_analysis_error() {
        assert_ne!(READ_ERROR_NOTICE, green_oracle_common::ANALYSIS_ERROR_MESSAGE);
        assert_ne!(NOT_AN_IMAGE_NOTICE, green_oracle_common::ANALYSIS_ERROR_MESSAGE);
    }
}
