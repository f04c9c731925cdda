use crate::list_controller::{SortDirection, SortField, SortSelection, ViewMode};
use leptos::*;

/// A button that selects `field` and shows its current direction.
#[component]
pub fn SortButton(
    field: SortField,
    #[prop(into)] sort: Signal<SortSelection>,
    #[prop(into)] on_sort: Callback<SortField>,
) -> impl IntoView {
    let direction = move || sort.get().direction_for(field);
    let indicator = move || direction().map(SortDirection::arrow).unwrap_or_default();

    view! {
        <button
            class="btn btn-sort"
            class:active=move || direction().is_some()
            on:click=move |_| on_sort.call(field)
        >
            { field.label() }
            " "
            { indicator }
        </button>
    }
}

pub fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

#[component]
pub fn SortToolbar(
    #[prop(into)] sort: Signal<SortSelection>,
    #[prop(into)] on_sort: Callback<SortField>,
    #[prop(into)] view_mode: Signal<ViewMode>,
    #[prop(into)] on_toggle_view: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="list-toolbar">
            <div class="sort-controls">
                <span class="toolbar-label">{ "Sort by:" }</span>
                {SortField::ALL
                    .into_iter()
                    .map(|field| view! { <SortButton field=field sort=sort on_sort=on_sort /> })
                    .collect_view()}
            </div>
            <button class="btn btn-secondary btn-view-mode" on:click=move |_| on_toggle_view.call(())>
                { move || format!("Show as {}", view_mode.get().toggled().label().to_lowercase()) }
            </button>
        </div>
    }
}
