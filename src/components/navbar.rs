//! Static navigation bar linking the home and find-path pages.

use leptos::prelude::*;
use leptos_router::components::A;

/// Purely cosmetic navbar; the router links handle everything.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <nav>
                <ul class="navbar__items">
                    <li class="navbar__item">
                        <A href="/">"home"</A>
                    </li>
                    <li class="navbar__item">
                        <A href="/path-app">"find path"</A>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
