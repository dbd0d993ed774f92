//! Notification banner.
//!
//! Shows the session's current notification and schedules its expiry. The
//! timer only clears a notification whose lifetime has elapsed, so one that
//! fires late can never clear a newer message. Manual dismissal is keyed by
//! [`NoticeId`](crate::models::NoticeId).

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Platform;
use crate::models::Severity;
use crate::utils::BrowserPlatform;

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;

    let current = Memo::new(move |_| session.with(|s| s.notice.current().cloned()));

    // Replacing the stored timeout drops the previous one, which cancels it.
    let timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move || {
        let expires_at = current.with(|n| n.as_ref().map(|n| n.expires_at()));
        let next = expires_at.map(|expires_at| {
            let delay = (expires_at - BrowserPlatform.now_ms()).ceil().max(0.0) as u32;
            Timeout::new(delay, move || {
                let now = BrowserPlatform.now_ms();
                session.update(|s| {
                    s.notice.expire(now);
                });
            })
        });
        timer.set_value(next);
    });

    move || {
        current.get().map(move |notice| {
            let id = notice.id;
            let role = if notice.is_error() { "alert" } else { "status" };
            let (tone, icon) = match notice.severity {
                Severity::Info => (css::info, ic::INFO),
                Severity::Success => (css::success, ic::SUCCESS),
                Severity::Error => (css::error, ic::ERROR),
            };

            view! {
                <div
                    class=format!("{} {}", css::toast, tone)
                    role=role
                >
                    <span class=css::icon><Icon icon=icon /></span>
                    <span class=css::text>{notice.text}</span>
                    <button
                        type="button"
                        class=css::close
                        title="Dismiss"
                        on:click=move |_| {
                            session.update(|s| {
                                s.notice.dismiss(id);
                            })
                        }
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            }
        })
    }
}
