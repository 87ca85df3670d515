//! Purely cosmetic animated home page. Stores no state and performs no
//! network calls.

use leptos::prelude::*;

/// Title rendered letter by letter with a staggered reveal.
const TITLE: &str = "uw huskymap";

/// Delay before the first letter appears, in milliseconds.
const STAGGER_BASE_MS: usize = 200;

/// Additional delay per letter, in milliseconds.
const STAGGER_STEP_MS: usize = 60;

/// Home page — animated splash with usage notes for the find-path page.
///
/// Four animations, all CSS keyframes: a skewed vertical sliding bar, a
/// horizontal banner slide, the staggered letter reveal, and a color pulse
/// on the welcome heading.
#[component]
pub fn HomePage() -> impl IntoView {
    let letters = TITLE
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            let delay = format!("animation-delay: {}ms", STAGGER_BASE_MS + idx * STAGGER_STEP_MS);
            // Plain spaces collapse between inline blocks.
            let glyph = if ch == ' ' { '\u{a0}' } else { ch };
            view! {
                <span class="home-page__letter" style=delay>
                    {glyph.to_string()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <div class="home-page__slide-bar"></div>
            <div class="home-page__banner">{letters}</div>
            <div class="home-page__welcome">
                <h1>"hi there! welcome to uw husky map"</h1>
            </div>
            <div class="home-page__notes">
                <p>
                    "on the \"find path\" page you will find the path-finder app. \
                     a few things to take note of:"
                </p>
                <p>
                    "the location selection menu can be accessed via the arrow \
                     button in the lower left corner"
                </p>
                <p>
                    "input start and destination buildings and press find path. \
                     reset via the reset button. once a path has been found, you \
                     can email it to yourself via the email field that shows up"
                </p>
            </div>
        </div>
    }
}
