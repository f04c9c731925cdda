//! The review list: loads on mount and on every refresh signal, polls in the
//! background, and renders the sorted projection as cards or a table.
use crate::api::HttpReviewStore;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_message::ErrorMessage;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::review_card::ReviewCard;
use crate::components::review_table::ReviewTable;
use crate::components::sort_toolbar::SortToolbar;
use crate::config::AppConfig;
use crate::list_controller::{
    sorted_reviews, LoadState, ReviewListController, ReviewListState, SortField, ViewMode,
};
use crate::models::review::Review;
use crate::polling::start_polling;
use leptos::logging::log;
use leptos::*;
use std::rc::Rc;

type ListController = ReviewListController<HttpReviewStore, RwSignal<ReviewListState>>;

fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        logging::error!("[LIST] Could not show alert: {}", message);
    }
}

#[component]
pub fn ReviewList(
    #[prop(into)] refresh: Signal<u32>,
    #[prop(into)] on_edit: Callback<Review>,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = create_rw_signal(ReviewListState::default());
    let store = Rc::new(HttpReviewStore::new(config.api_base_url.clone()));
    let controller: StoredValue<ListController> =
        store_value(ReviewListController::new(store, state));

    // Manual load on mount and whenever the refresh signal changes.
    create_effect(move |_| {
        let generation = refresh.get();
        log!("[LIST] Reloading reviews (refresh #{})", generation);
        if let Some(controller) = controller.try_get_value() {
            spawn_local(async move { controller.reload().await });
        }
    });

    // One poll timer for the component's lifetime.
    let poll_interval = config.poll_interval;
    create_effect(move |_| {
        let handle = start_polling("review list", poll_interval, move || {
            if let Some(controller) = controller.try_get_value() {
                spawn_local(async move { controller.poll().await });
            }
        });
        on_cleanup(move || handle.cancel());
    });

    let load_state = create_memo(move |_| state.with(|state| state.load_state.clone()));
    let sort = create_memo(move |_| state.with(|state| state.sort));
    let view_mode = create_memo(move |_| state.with(|state| state.view_mode));
    let sorted = create_memo(move |_| state.with(|state| sorted_reviews(&state.reviews, state.sort)));
    let is_empty = create_memo(move |_| sorted.with(Vec::is_empty));
    let pending_delete = create_memo(move |_| state.with(|state| state.pending_delete.clone()));

    let retry = Callback::new(move |_| {
        if let Some(controller) = controller.try_get_value() {
            spawn_local(async move { controller.reload().await });
        }
    });
    let on_sort = Callback::new(move |field: SortField| state.update(|state| state.select_sort(field)));
    let on_toggle_view = Callback::new(move |_| state.update(ReviewListState::toggle_view_mode));
    let on_delete = Callback::new(move |(id, name): (i64, String)| {
        state.update(|state| state.request_delete(id, name))
    });
    let on_cancel_delete = Callback::new(move |_| state.update(ReviewListState::cancel_delete));
    let on_confirm_delete = Callback::new(move |_| {
        let Some(controller) = controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = controller.confirm_delete().await {
                alert(&err.to_string());
            }
        });
    });

    let list_view = move || match view_mode.get() {
        ViewMode::Cards => view! {
            <div class="review-grid">
                <For
                    each=move || sorted.get()
                    key=|review| (review.review_id, review.updated_at.clone())
                    children=move |review| view! {
                        <ReviewCard review=review on_edit=on_edit on_delete=on_delete />
                    }
                />
            </div>
        }
        .into_view(),
        ViewMode::Table => view! {
            <ReviewTable
                reviews=sorted
                sort=sort
                on_sort=on_sort
                on_edit=on_edit
                on_delete=on_delete
            />
        }
        .into_view(),
    };

    view! {
        {move || match load_state.get() {
            LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
            LoadState::Error(message) => view! {
                <ErrorMessage message=message on_retry=retry />
            }
            .into_view(),
            LoadState::Ready if is_empty.get() => view! {
                <div class="empty-state">
                    <p>{ "No reviews available." }</p>
                    <p class="empty-state-subtitle">{ "Reviews will appear here when added." }</p>
                </div>
            }
            .into_view(),
            LoadState::Ready => view! {
                <div class="review-list">
                    <div class="section-header">
                        <h2 class="section-title">
                            { move || format!("Reviews ({})", sorted.with(Vec::len)) }
                        </h2>
                        <button
                            class="btn btn-secondary btn-refresh"
                            aria-label="Refresh reviews"
                            on:click=move |_| on_refresh.call(())
                        >
                            { "Refresh" }
                        </button>
                    </div>
                    <SortToolbar
                        sort=sort
                        on_sort=on_sort
                        view_mode=view_mode
                        on_toggle_view=on_toggle_view
                    />
                    {list_view}
                </div>
            }
            .into_view(),
        }}
        {move || pending_delete.get().map(|pending| view! {
            <ConfirmDialog
                title="Delete Review"
                message=pending.prompt()
                confirm_text="Delete"
                cancel_text="Cancel"
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        })}
    }
}
