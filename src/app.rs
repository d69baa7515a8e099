//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use futures::StreamExt;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::FileTree;
use crate::config::{DEMO_LISTING, OPEN_FILE_EVENT};
use crate::core::{OpenFile, Relay, RepoStore, relay};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Repository**: the collapsible tree and its flattened view
/// - **Relays**: typed events from the tree to its consumers
/// - **Opened**: the last file an "open file" notification asked for
#[derive(Clone)]
pub struct AppContext {
    /// Repository tree (toggle, prefetch, flattened file list).
    pub repo: RepoStore,

    /// A file was picked in the tree and should be opened.
    pub file_opened_relay: Relay<OpenFile>,

    /// Path of the most recently opened file.
    pub opened: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(repo: RepoStore, file_opened_relay: Relay<OpenFile>) -> Self {
        Self {
            repo,
            file_opened_relay,
            opened: RwSignal::new(None),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Builds the repository tree from the embedded listing
/// - Renders listing errors through an ErrorBoundary
/// - Renders the Workspace once the tree is available
#[component]
pub fn App() -> impl IntoView {
    let repo = RepoStore::load(DEMO_LISTING);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::error>
                    <h1>"Could not load repository"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {repo.map(|repo| view! { <Workspace repo=repo /> })}
        </ErrorBoundary>
    }
}

/// Tree sidebar plus the pane showing what was opened.
#[component]
fn Workspace(repo: RepoStore) -> impl IntoView {
    let (file_opened_relay, mut file_opened_stream) = relay::<OpenFile>();
    let ctx = AppContext::new(repo, file_opened_relay);
    provide_context(ctx.clone());

    // Record opened files and forward them to window listeners (editor).
    // Ends once the tree and the context drop their relays.
    let opened = ctx.opened;
    spawn_local(async move {
        while let Some(OpenFile { path }) = file_opened_stream.next().await {
            dom::dispatch_window_event(OPEN_FILE_EVENT, &path);
            opened.set(Some(path));
        }
    });

    view! {
        <div class=css::workspace>
            <aside class=css::sidebar>
                <FileTree />
            </aside>
            <main class=css::editor>
                {move || match opened.get() {
                    Some(path) => view! { <p class=css::openedPath>{path}</p> }.into_any(),
                    None => view! { <p class=css::placeholder>"Select a file to open it"</p> }.into_any(),
                }}
            </main>
        </div>
    }
}
