//! Find-path page: the map canvas plus the slide-up control footer.

use leptos::prelude::*;

use crate::components::building_selector::BuildingSelector;
use crate::components::map_view::MapView;
use crate::net::api::{self, ApiError};
use crate::net::emailjs;
use crate::state::email;
use crate::state::path::PathState;
use crate::util::browser;

/// Find-path page — owns the page's view state and wires the fetch calls.
///
/// State lives for a single visit: created on mount, dropped on navigation.
/// The reset button reloads the page outright, as does submitting the same
/// building for both ends.
#[component]
pub fn PathPage() -> impl IntoView {
    let path = RwSignal::new(PathState::default());
    provide_context(path);

    // Building list fetch, once on mount.
    leptos::task::spawn_local(async move {
        match api::fetch_buildings().await {
            Ok(buildings) => path.update(|p| p.load_buildings(buildings)),
            Err(ApiError::Status(status)) => {
                browser::alert(&format!("Oops something went wrong! Expected: 200, Was: {status}"));
            }
            Err(err) => {
                log::error!("building list fetch failed: {err}");
                browser::alert("There was an error contacting the server.");
            }
        }
    });

    let busy = Signal::derive(move || path.get().busy);
    let names = Signal::derive(move || path.get().building_names());
    let start_value = Signal::derive(move || path.get().start_value);
    let dest_value = Signal::derive(move || path.get().dest_value);
    let on_start = Callback::new(move |name: String| path.update(|p| p.select_start(&name)));
    let on_dest = Callback::new(move |name: String| path.update(|p| p.select_dest(&name)));

    let on_find = move |_| find_path(path);
    let on_reset = move |_| browser::reload();
    let on_toggle = move |_| path.update(|p| p.footer_on = !p.footer_on);

    let footer_class = move || {
        if path.get().footer_on {
            "footer footer--open"
        } else {
            "footer"
        }
    };

    view! {
        <div class="path-page">
            <MapView/>
            <div class=footer_class>
                <button class="footer__toggle" on:click=on_toggle>
                    {move || if path.get().footer_on { "\u{25bc}" } else { "\u{25b2}" }}
                </button>
                <div class="footer__panel">
                    <BuildingSelector
                        busy=busy
                        names=names
                        start_value=start_value
                        dest_value=dest_value
                        on_start=on_start
                        on_dest=on_dest
                    />
                    <div class="footer__actions">
                        <button class="footer__find" on:click=on_find>
                            "find path"
                        </button>
                        <button class="footer__reset" on:click=on_reset>
                            "reset"
                        </button>
                        {move || {
                            path.get()
                                .cost
                                .map(|cost| view! { <span class="footer__cost">{format!("{cost} feet")}</span> })
                        }}
                    </div>
                    <EmailForm/>
                </div>
            </div>
        </div>
    }
}

/// Degenerate-selection check, then the `/path` and `/email-directions`
/// fetches. The two requests are deliberately independent tasks: no
/// ordering between them, no cancellation, no retry.
fn find_path(path: RwSignal<PathState>) {
    let state = path.get();
    if state.selection_is_degenerate() {
        browser::alert("Start and destination is the same! Resetting now.");
        browser::reload();
        return;
    }

    let start = state.start.clone();
    let dest = state.dest.clone();
    let incomplete = state.selection_is_incomplete();

    leptos::task::spawn_local({
        let start = start.clone();
        let dest = dest.clone();
        async move {
            match api::fetch_path(&start, &dest).await {
                Ok(response) => path.update(|p| p.apply_path(&response)),
                Err(ApiError::Status(status)) => {
                    // The server answers 400 when a parameter is missing.
                    if incomplete {
                        browser::alert("Please enter both a start and destination building.");
                    } else {
                        browser::alert(&format!(
                            "Oops something went wrong! Expected: 200, Was: {status}"
                        ));
                    }
                }
                Err(err) => {
                    log::error!("path fetch failed: {err}");
                    browser::alert("There was an error contacting the server.");
                }
            }
        }
    });

    leptos::task::spawn_local(async move {
        match api::fetch_directions(&start, &dest).await {
            Ok(directions) => path.update(|p| p.directions = Some(directions)),
            Err(ApiError::Status(status)) => {
                browser::alert(&format!(
                    "Oops something went wrong with fetching the emailable path! Expected: 200, Was: {status}"
                ));
            }
            Err(err) => {
                log::error!("directions fetch failed: {err}");
                browser::alert("There was an error contacting the server. Try again later!");
            }
        }
    });
}

/// Email form — hidden until a path has been fetched.
#[component]
fn EmailForm() -> impl IntoView {
    let path = expect_context::<RwSignal<PathState>>();

    let on_input = move |ev| path.update(|p| p.email = event_target_value(&ev));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send_directions(path);
    };

    view! {
        <Show when=move || path.get().has_path()>
            <form class="footer__email" on:submit=on_submit>
                <input
                    type="email"
                    class="footer__email-input"
                    placeholder="Enter email"
                    prop:value=move || path.get().email
                    on:input=on_input
                />
                <button type="submit" class="footer__email-send">
                    "send"
                </button>
                <Show when=move || path.get().email_sent>
                    <small class="footer__email-sent">"email successfully sent!"</small>
                </Show>
            </form>
        </Show>
    }
}

/// Validate the address, then relay the directions through the external
/// email service.
fn send_directions(path: RwSignal<PathState>) {
    let state = path.get();
    let Some(directions) = state.directions.clone() else {
        // The directions fetch runs concurrently with the path fetch and
        // may still be in flight.
        browser::alert("Directions are still loading, try again in a moment.");
        return;
    };
    if !email::validate(&state.email) {
        browser::alert("You have entered an invalid email address!");
        return;
    }

    path.update(|p| p.email_sent = false);
    leptos::task::spawn_local(async move {
        match emailjs::send_directions(&state.email, &state.start_value, &state.dest_value, &directions).await {
            Ok(()) => path.update(|p| p.email_sent = true),
            Err(err) => {
                log::error!("email relay failed: {err}");
                browser::alert(&format!("Failed to send directions. Error: {err}"));
            }
        }
    });
}
