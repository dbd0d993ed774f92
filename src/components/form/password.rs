use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

/// Optional password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
    on_input: Callback<String>,
    on_toggle: Callback<()>,
    placeholder: &'static str,
) -> impl IntoView {
    let toggle_icon = Signal::derive(move || if visible.get() { ic::EYE_OFF } else { ic::EYE });
    let toggle_title = Signal::derive(move || {
        if visible.get() {
            "Hide password"
        } else {
            "Show password"
        }
    });

    view! {
        <div class=css::password>
            <input
                class=css::input
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                autocomplete="off"
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button
                type="button"
                class=css::iconButton
                title=toggle_title
                on:click=move |_| on_toggle.run(())
            >
                <Icon icon=toggle_icon />
            </button>
        </div>
    }
}
