//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] shared with every
//! component. Operation flows live in [`crate::core`]; this module only wires
//! them to signals and spawns them on the browser's event loop.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;
use web_sys::File;

use crate::components::{ExtractPanel, Header, HidePanel, Toast};
use crate::core::{
    ServiceLocator, Session, SessionCell, Side, StegoClient, capacity, clipboard, extract, hide,
    selection, startup,
};
use crate::models::{MediaKind, SupportedFormats, Tab};
use crate::utils::{BrowserPlatform, GlooTransport, dom};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Global application context provided to all components.
///
/// `web_sys::File` is not `Send`, so the session lives in a local signal.
/// Every field is a signal handle, which keeps the context `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Both forms, the notification slot and in-flight tokens.
    pub session: RwSignal<Session<File>, LocalStorage>,
    /// Panel currently shown.
    pub tab: RwSignal<Tab>,
    /// Extensions the service accepts, used for the inputs' `accept` lists.
    pub formats: RwSignal<SupportedFormats>,
    client: StoredValue<StegoClient<GlooTransport>>,
}

impl AppContext {
    pub fn new() -> Self {
        let base = ServiceLocator::from_build_env().resolve(&dom::hostname());
        info!(base = %base, "service located");

        Self {
            session: RwSignal::new_local(Session::new()),
            tab: RwSignal::new(Tab::default()),
            formats: RwSignal::new(SupportedFormats::default()),
            client: StoredValue::new(StegoClient::new(GlooTransport, base)),
        }
    }

    fn client(&self) -> StegoClient<GlooTransport> {
        self.client.get_value()
    }

    /// Health probe and format discovery, both fire-and-forget.
    pub fn start(self) {
        let client = self.client();
        spawn_local(async move {
            startup::probe_health(&self, &client, &BrowserPlatform).await;
            let formats = startup::load_supported_formats(&client).await;
            self.formats.set(formats);
        });
    }

    /// Record a newly chosen file. On the hide side this also asks for its capacity.
    pub fn select_file(self, side: Side, file: File) {
        selection::select(&self, side, file);
        if side == Side::Hide {
            self.negotiate_capacity();
        }
    }

    pub fn clear_file(self, side: Side) {
        selection::clear(&self, &BrowserPlatform, side);
    }

    pub fn set_hide_kind(self, kind: MediaKind) {
        let renegotiate = self.update(|s| {
            let changed = s.hide().selection.kind() != kind;
            s.set_hide_kind(kind);
            changed && s.hide().selection.has_file()
        });
        if renegotiate {
            self.negotiate_capacity();
        }
    }

    pub fn set_extract_kind(self, kind: MediaKind) {
        self.session.update(|s| s.set_extract_kind(kind));
    }

    fn negotiate_capacity(self) {
        let client = self.client();
        spawn_local(async move {
            capacity::negotiate(&self, &client, &BrowserPlatform).await;
        });
    }

    pub fn hide(self) {
        let client = self.client();
        spawn_local(async move {
            hide::execute(&self, &client, &BrowserPlatform).await;
        });
    }

    pub fn extract(self) {
        let client = self.client();
        spawn_local(async move {
            extract::execute(&self, &client, &BrowserPlatform).await;
        });
    }

    pub fn copy_extracted(self) {
        let text = self.session.with_untracked(|s| s.extract().extracted().to_string());
        spawn_local(async move {
            clipboard::copy(&self, &BrowserPlatform, &text).await;
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for AppContext {
    type File = File;

    fn update<R>(&self, f: impl FnOnce(&mut Session<File>) -> R) -> R {
        let mut session = self.session.write();
        f(&mut session)
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root component: provides [`AppContext`] and lays out both panels.
///
/// Both panels stay mounted so switching tabs keeps each side's native file
/// input in step with its selection.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.start();

    let display = move |tab: Tab| move || if ctx.tab.get() == tab { "block" } else { "none" };
    let busy = Signal::derive(move || ctx.session.with(|s| s.is_busy()));

    view! {
        <div class=css::app>
            <Show when=move || busy.get()>
                <div class=css::progress role="progressbar" aria-label="Request in progress"></div>
            </Show>
            <Header />
            <main class=css::main>
                <section style:display=display(Tab::Hide)>
                    <HidePanel />
                </section>
                <section style:display=display(Tab::Extract)>
                    <ExtractPanel />
                </section>
            </main>
            <Toast />
        </div>
    }
}
