//! Extract-data panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::form::{DropZone, KindPicker, PasswordField, css as form};
use crate::components::icons as ic;
use crate::config::EXTRACT_INPUT_ID;
use crate::core::{Side, selection};

stylance::import_crate_style!(css, "src/components/extract/extract.module.css");

#[component]
pub fn ExtractPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;

    let kind = Signal::derive(move || session.with(|s| s.extract().selection.kind()));
    let file_name = Signal::derive(move || session.with(|s| s.extract().selection.file_name()));
    let password = Signal::derive(move || session.with(|s| s.extract().password.clone()));
    let show_password = Signal::derive(move || session.with(|s| s.extract().show_password));
    let extracted = Signal::derive(move || session.with(|s| s.extract().extracted().to_string()));
    let busy = Signal::derive(move || session.with(|s| s.extract_busy()));

    let accept = Signal::derive(move || ctx.formats.with(|f| f.accept_attr(kind.get())));
    let description = Signal::derive(move || selection::describe_media_kind(kind.get()));

    let set_kind = Callback::new(move |k| ctx.set_extract_kind(k));
    let set_password = Callback::new(move |value: String| {
        session.update(|s| s.set_extract_password(value));
    });
    let toggle_password = Callback::new(move |_| {
        session.update(|s| s.toggle_extract_password_visibility());
    });

    view! {
        <div class=css::card>
            <div class=form::field>
                <span class=form::label>"Carrier type"</span>
                <KindPicker selected=kind on_change=set_kind />
            </div>

            <div class=form::field>
                <span class=form::label>"File with hidden data"</span>
                <DropZone
                    input_id=EXTRACT_INPUT_ID
                    accept=accept
                    description=description
                    file_name=file_name
                    on_select=Callback::new(move |file| ctx.select_file(Side::Extract, file))
                    on_clear=Callback::new(move |_| ctx.clear_file(Side::Extract))
                />
            </div>

            <div class=form::field>
                <span class=form::label>"Password (if one was used)"</span>
                <PasswordField
                    value=password
                    visible=show_password
                    placeholder="Password used when hiding"
                    on_input=set_password
                    on_toggle=toggle_password
                />
            </div>

            <button class=form::submit disabled=busy on:click=move |_| ctx.extract()>
                {move || if busy.get() { "Processing..." } else { "Extract data" }}
            </button>

            <Show when=move || !extracted.with(|t| t.is_empty())>
                <div class=css::result>
                    <div class=css::resultHeader>
                        <span class=form::label>"Extracted data"</span>
                        <button
                            type="button"
                            class=css::copyButton
                            title="Copy to clipboard"
                            on:click=move |_| ctx.copy_extracted()
                        >
                            <Icon icon=ic::COPY />
                            <span>"Copy"</span>
                        </button>
                    </div>
                    <pre class=css::resultText>{extracted}</pre>
                </div>
            </Show>
        </div>
    }
}
