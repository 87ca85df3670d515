//! Start/destination dropdown pair.

use leptos::prelude::*;

/// Dropdown pair for picking the start and destination buildings.
///
/// Purely presentational: selection changes are reported upward through the
/// callbacks. No validation beyond what the dropdown structurally
/// guarantees — only names from the last-fetched building list are offered.
#[component]
pub fn BuildingSelector(
    busy: Signal<bool>,
    names: Signal<Vec<String>>,
    start_value: Signal<String>,
    dest_value: Signal<String>,
    on_start: Callback<String>,
    on_dest: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="selector">
            <BuildingDropdown label="Start" busy=busy names=names value=start_value on_select=on_start/>
            <BuildingDropdown label="Destination" busy=busy names=names value=dest_value on_select=on_dest/>
        </div>
    }
}

/// One labeled dropdown. Disabled while the building list is loading.
#[component]
fn BuildingDropdown(
    label: &'static str,
    busy: Signal<bool>,
    names: Signal<Vec<String>>,
    value: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="selector__row">
            <h4 class="selector__label">{label} ": "</h4>
            <select
                class="selector__dropdown"
                disabled=move || busy.get()
                prop:value=move || value.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                <option value="">
                    {move || if busy.get() { "Loading buildings..." } else { "Select a building" }}
                </option>
                {move || {
                    names
                        .get()
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}
