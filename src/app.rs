//! Root application component with routing and meta context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, path::PathPage};

/// Root application component.
///
/// Sets up client-side routing: the animated home page at `/` and the
/// find-path app at `/path-app`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="huskymap" href="/style/huskymap.css"/>
        <Title text="uw huskymap"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("path-app") view=PathPage/>
                </Routes>
            </main>
        </Router>
    }
}
