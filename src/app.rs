//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chat::ChatPage;
use crate::state::conversation::ConversationState;
use crate::state::templates::TemplatesState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
/// Conversation and template state live here for the page session; nothing
/// is persisted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let conversation = RwSignal::new(ConversationState::default());
    let templates = RwSignal::new(TemplatesState::default());

    provide_context(conversation);
    provide_context(templates);

    view! {
        <Stylesheet id="leptos" href="/pkg/futurenest-client.css"/>
        <Title text="FutureNest Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
