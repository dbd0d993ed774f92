use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, modifier};
use crate::components::icons as ic;
use crate::models::MediaKind;

/// One button per [`MediaKind`], highlighting `selected`.
#[component]
pub fn KindPicker(
    #[prop(into)] selected: Signal<MediaKind>,
    on_change: Callback<MediaKind>,
) -> impl IntoView {
    view! {
        <div class=css::kinds role="radiogroup">
            {MediaKind::ALL
                .into_iter()
                .map(move |kind| {
                    let checked = move || selected.get() == kind;
                    view! {
                        <button
                            type="button"
                            role="radio"
                            aria-checked=move || checked().to_string()
                            class=move || modifier(css::kind, css::kindSelected, checked())
                            on:click=move |_| on_change.run(kind)
                        >
                            <Icon icon=ic::media_kind(kind) />
                            <span>{kind.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
