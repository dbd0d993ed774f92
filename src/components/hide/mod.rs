//! Hide-data panel.
//!
//! Carrier kind and file, the text to embed, an optional password, and the
//! advisory capacity of the chosen file.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::form::{DropZone, KindPicker, PasswordField, css as form};
use crate::config::HIDE_INPUT_ID;
use crate::core::{Side, selection};

stylance::import_crate_style!(css, "src/components/hide/hide.module.css");

#[component]
pub fn HidePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;

    let kind = Signal::derive(move || session.with(|s| s.hide().selection.kind()));
    let file_name = Signal::derive(move || session.with(|s| s.hide().selection.file_name()));
    let payload = Signal::derive(move || session.with(|s| s.hide().payload.clone()));
    let password = Signal::derive(move || session.with(|s| s.hide().password.clone()));
    let show_password = Signal::derive(move || session.with(|s| s.hide().show_password));
    let capacity = Signal::derive(move || session.with(|s| s.hide().capacity()));
    let overfull = Signal::derive(move || session.with(|s| s.hide().payload_fits() == Some(false)));
    let busy = Signal::derive(move || session.with(|s| s.hide_busy()));

    let accept = Signal::derive(move || ctx.formats.with(|f| f.accept_attr(kind.get())));
    let description = Signal::derive(move || selection::describe_media_kind(kind.get()));

    let set_password = Callback::new(move |value: String| {
        session.update(|s| s.set_hide_password(value));
    });
    let toggle_password = Callback::new(move |_| {
        session.update(|s| s.toggle_hide_password_visibility());
    });

    view! {
        <div class=css::card>
            <div class=form::field>
                <span class=form::label>"Carrier type"</span>
                <KindPicker selected=kind on_change=Callback::new(move |k| ctx.set_hide_kind(k)) />
            </div>

            <div class=form::field>
                <span class=form::label>"Carrier file"</span>
                <DropZone
                    input_id=HIDE_INPUT_ID
                    accept=accept
                    description=description
                    file_name=file_name
                    on_select=Callback::new(move |file| ctx.select_file(Side::Hide, file))
                    on_clear=Callback::new(move |_| ctx.clear_file(Side::Hide))
                />
                {move || {
                    capacity
                        .get()
                        .map(|c| {
                            let text = format!(
                                "Capacity: {} bits (about {} characters)",
                                c.bits,
                                c.chars(),
                            );
                            view! { <span class=css::capacity>{text}</span> }
                        })
                }}
            </div>

            <div class=form::field>
                <label class=form::label for="hide-payload">"Text to hide"</label>
                <textarea
                    id="hide-payload"
                    class=form::textarea
                    placeholder="Enter the text to hide..."
                    prop:value=payload
                    on:input=move |ev| session.update(|s| s.set_payload(event_target_value(&ev)))
                ></textarea>
                <Show when=move || overfull.get()>
                    <span class=css::warning>"This text may not fit in the selected file."</span>
                </Show>
            </div>

            <div class=form::field>
                <span class=form::label>"Password (optional)"</span>
                <PasswordField
                    value=password
                    visible=show_password
                    placeholder="Encrypt the hidden text"
                    on_input=set_password
                    on_toggle=toggle_password
                />
            </div>

            <button class=form::submit disabled=busy on:click=move |_| ctx.hide()>
                {move || if busy.get() { "Processing..." } else { "Hide data" }}
            </button>
        </div>
    }
}
