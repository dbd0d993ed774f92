//! File picker that also accepts drag-and-drop.
//!
//! Dropped files are written into the native input and a bubbling `change`
//! event is dispatched, so both paths reach the same handler.

use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_icons::Icon;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, File, HtmlInputElement};

use super::{css, modifier};
use crate::components::icons as ic;
use crate::core::selection;

fn dispatch_change(input: &HtmlInputElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = Event::new_with_event_init_dict("change", &init) {
        let _ = input.dispatch_event(&event);
    }
}

fn first_file(ev: &ev::Event) -> Option<File> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[component]
pub fn DropZone(
    input_id: &'static str,
    #[prop(into)] accept: Signal<String>,
    #[prop(into)] description: Signal<&'static str>,
    #[prop(into)] file_name: Signal<Option<String>>,
    on_select: Callback<File>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let highlighted = RwSignal::new(false);

    let on_change = move |ev: ev::Event| {
        if let Some(file) = first_file(&ev) {
            on_select.run(file);
        }
    };

    let on_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
        highlighted.set(true);
    };

    let on_dragleave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        highlighted.set(false);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        highlighted.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if !selection::accepts_drop(files.length()) {
            debug!("drop carried no files");
            return;
        }
        if let Some(input) = input_ref.get() {
            input.set_files(Some(&files));
            dispatch_change(&input);
        }
    };

    let on_clear_click = move |ev: ev::MouseEvent| {
        // Keep the enclosing label from reopening the file dialog.
        ev.prevent_default();
        on_clear.run(());
    };

    view! {
        <label
            for=input_id
            class=move || modifier(css::dropzone, css::dropzoneActive, highlighted.get())
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                id=input_id
                type="file"
                class=css::fileInput
                accept=accept
                on:change=on_change
            />
            <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
            {move || match file_name.get() {
                Some(name) => {
                    view! {
                        <span class=css::fileRow>
                            <span class=css::fileName>{name}</span>
                            <button
                                type="button"
                                class=css::iconButton
                                title="Remove file"
                                on:click=on_clear_click
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </span>
                    }
                        .into_any()
                }
                None => {
                    view! { <span class=css::prompt>"Drop a file here or click to browse"</span> }
                        .into_any()
                }
            }}
            <span class=css::hint>{description}</span>
        </label>
    }
}
