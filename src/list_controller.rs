//! State and orchestration behind the review list.
//!
//! [`ReviewListState`] is a plain value with synchronous transitions; the
//! [`ReviewListController`] drives it from the remote store. Manual reloads
//! and polls are not sequenced against each other, so whichever list
//! response resolves last replaces the collection.
use crate::api::{ApiError, ReviewStore};
use crate::models::review::Review;
use crate::models::timestamp::timestamp_millis;
use crate::utils::leptos_owner::StateCell;
use leptos::logging::{error, log, warn};
use std::cmp::Ordering;
use std::rc::Rc;
use thiserror::Error;

pub const LOAD_FALLBACK_MESSAGE: &str = "Error loading reviews. Please try again.";
pub const DELETE_FALLBACK_MESSAGE: &str = "Error deleting review. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// What caused a reload. Only manual reloads show the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    Manual,
    Silent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Cards => Self::Table,
            Self::Table => Self::Cards,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cards => "Cards",
            Self::Table => "Table",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    ContactPreference,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        Self::Name,
        Self::ContactPreference,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::ContactPreference => "Contact preference",
            Self::CreatedAt => "Created",
            Self::UpdatedAt => "Updated",
        }
    }

    /// Ascending order for this field.
    fn compare(self, a: &Review, b: &Review, names: &NameOrder) -> Ordering {
        match self {
            Self::Name => names.compare(&a.user_name, &b.user_name),
            // Reviewers who want contact come first.
            Self::ContactPreference => b.preferred_contact_again.cmp(&a.preferred_contact_again),
            Self::CreatedAt => timestamp_millis(&a.created_at).cmp(&timestamp_millis(&b.created_at)),
            Self::UpdatedAt => timestamp_millis(&a.updated_at).cmp(&timestamp_millis(&b.updated_at)),
        }
    }
}

/// Name ordering for one sort. In the browser this is `localeCompare` with
/// the default locale, whose arguments are built once per sort.
struct NameOrder {
    #[cfg(target_arch = "wasm32")]
    locales: js_sys::Array,
    #[cfg(target_arch = "wasm32")]
    options: js_sys::Object,
}

impl NameOrder {
    #[cfg(target_arch = "wasm32")]
    fn new() -> Self {
        Self {
            locales: js_sys::Array::new(),
            options: js_sys::Object::new(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn new() -> Self {
        Self {}
    }

    #[cfg(target_arch = "wasm32")]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        js_sys::JsString::from(a)
            .locale_compare(b, &self.locales, &self.options)
            .cmp(&0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortSelection {
    #[default]
    Unsorted,
    By(SortField, SortDirection),
}

impl SortSelection {
    /// Next selection after the user picks `field`: the same field cycles
    /// ascending, descending, unsorted; a new field starts ascending.
    pub fn select(self, field: SortField) -> Self {
        match self {
            Self::By(current, SortDirection::Ascending) if current == field => {
                Self::By(field, SortDirection::Descending)
            }
            Self::By(current, SortDirection::Descending) if current == field => Self::Unsorted,
            _ => Self::By(field, SortDirection::Ascending),
        }
    }

    pub fn direction_for(self, field: SortField) -> Option<SortDirection> {
        match self {
            Self::By(current, direction) if current == field => Some(direction),
            _ => None,
        }
    }
}

/// Returns `reviews` ordered by `selection`. The sort is stable; unsorted
/// keeps server order.
pub fn sorted_reviews(reviews: &[Review], selection: SortSelection) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    if let SortSelection::By(field, direction) = selection {
        let names = NameOrder::new();
        sorted.sort_by(|a, b| {
            let ordering = field.compare(a, b, &names);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

/// A deletion the user has asked for but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: i64,
    pub display_name: String,
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete the review from {}? This action cannot be undone.",
            self.display_name
        )
    }
}

/// A failed delete. Shown to the user as a blocking alert rather than list
/// state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DeleteError {
    pub id: i64,
    pub message: String,
    #[source]
    pub source: ApiError,
}

impl DeleteError {
    fn new(id: i64, source: ApiError) -> Self {
        Self {
            id,
            message: match &source {
                ApiError::Remote { message, .. } => format!("Error deleting: {message}"),
                _ => DELETE_FALLBACK_MESSAGE.to_string(),
            },
            source,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewListState {
    pub reviews: Vec<Review>,
    pub load_state: LoadState,
    pub view_mode: ViewMode,
    pub sort: SortSelection,
    pub pending_delete: Option<PendingDelete>,
}

impl ReviewListState {
    pub fn begin_load(&mut self, trigger: LoadTrigger) {
        if trigger == LoadTrigger::Manual {
            self.load_state = LoadState::Loading;
        }
    }

    /// A successful load replaces the whole collection; a failed one keeps
    /// the last good list.
    pub fn finish_load(&mut self, result: Result<Vec<Review>, ApiError>) {
        match result {
            Ok(reviews) => {
                self.reviews = reviews;
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                self.load_state = LoadState::Error(err.user_message(LOAD_FALLBACK_MESSAGE));
            }
        }
    }

    pub fn select_sort(&mut self, field: SortField) {
        self.sort = self.sort.select(field);
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn request_delete(&mut self, id: i64, display_name: impl Into<String>) {
        self.pending_delete = Some(PendingDelete {
            id,
            display_name: display_name.into(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn sorted(&self) -> Vec<Review> {
        sorted_reviews(&self.reviews, self.sort)
    }
}

/// Drives a [`ReviewListState`] from a [`ReviewStore`].
pub struct ReviewListController<S, C> {
    store: Rc<S>,
    state: C,
}

impl<S, C: Clone> Clone for ReviewListController<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            state: self.state.clone(),
        }
    }
}

impl<S, C> ReviewListController<S, C>
where
    S: ReviewStore,
    C: StateCell<ReviewListState>,
{
    pub fn new(store: Rc<S>, state: C) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub async fn load(&self, trigger: LoadTrigger) {
        self.state.update_state(|state| state.begin_load(trigger));
        let result = self.store.list().await;
        if let Err(err) = &result {
            match trigger {
                LoadTrigger::Manual => error!("[LIST] Loading reviews failed: {}", err),
                LoadTrigger::Silent => warn!("[POLL] Background reload failed: {}", err),
            }
        }
        self.state.update_state(|state| state.finish_load(result));
    }

    /// Reload with the loading indicator, used on mount, refresh and retry.
    pub async fn reload(&self) {
        self.load(LoadTrigger::Manual).await;
    }

    pub async fn poll(&self) {
        self.load(LoadTrigger::Silent).await;
    }

    /// Deletes the pending review, if any, then reloads the list. The pending
    /// request is taken before the delete is sent, so the dialog closes at
    /// once and a repeated confirm finds nothing to delete.
    pub async fn confirm_delete(&self) -> Result<(), DeleteError> {
        let pending = self
            .state
            .update_state(|state| state.pending_delete.take())
            .flatten();
        let Some(pending) = pending else {
            return Ok(());
        };
        self.delete(pending.id).await
    }

    /// Issues the delete even when `id` is not in the cached list; the
    /// server decides.
    pub async fn delete(&self, id: i64) -> Result<(), DeleteError> {
        if let Err(err) = self.store.delete(id).await {
            error!("[LIST] Deleting review {} failed: {}", id, err);
            return Err(DeleteError::new(id, err));
        }
        log!("[LIST] Review {} deleted, reloading", id);
        self.load(LoadTrigger::Silent).await;
        Ok(())
    }
}
