//! Page header with the tab switcher.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::Tab;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::header>
            <h1 class=css::title>
                <span class=css::logo><Icon icon=ic::LOCK /></span>
                {APP_NAME}
            </h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
            <nav class=css::tabs role="tablist">
                <TabButton tab=Tab::Hide icon=ic::LOCK />
                <TabButton tab=Tab::Extract icon=ic::SEARCH />
            </nav>
        </header>
    }
}

#[component]
fn TabButton(tab: Tab, icon: icondata::Icon) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let active = Signal::derive(move || ctx.tab.get() == tab);

    view! {
        <button
            type="button"
            role="tab"
            aria-selected=move || active.get().to_string()
            class=move || {
                if active.get() {
                    format!("{} {}", css::tab, css::tabActive)
                } else {
                    css::tab.to_string()
                }
            }
            on:click=move |_| ctx.tab.set(tab)
        >
            <Icon icon=icon />
            <span>{tab.label()}</span>
        </button>
    }
}
