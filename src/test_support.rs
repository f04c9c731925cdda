//! In-memory [`ReviewStore`] for exercising controllers without a network.
use crate::api::{ApiError, ReviewStore};
use crate::models::review::{HealthStatus, Review, ReviewUpdate};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};

pub fn review(id: i64, name: &str, contact_again: bool, created: &str, updated: &str) -> Review {
    Review {
        review_id: id,
        contact_number: "+15551234567".into(),
        user_name: name.into(),
        product_name: "Espresso Machine".into(),
        product_review: "Makes a decent cup every morning.".into(),
        preferred_contact_method: if contact_again { "Email".into() } else { String::new() },
        preferred_contact_again: contact_again,
        created_at: created.into(),
        updated_at: updated.into(),
    }
}

/// Copies the editable fields of `update` over `review`, keeping the
/// server-owned identity and timestamps.
pub fn apply_update(review: &mut Review, update: &ReviewUpdate) {
    review.contact_number = update.contact_number.clone();
    review.user_name = update.user_name.clone();
    review.product_name = update.product_name.clone();
    review.product_review = update.product_review.clone();
    review.preferred_contact_method = update.preferred_contact_method.clone();
    review.preferred_contact_again = update.preferred_contact_again;
}

#[derive(Default)]
pub struct MemoryStore {
    reviews: RefCell<Vec<Review>>,
    list_calls: Cell<usize>,
    deleted: RefCell<Vec<i64>>,
    updates: RefCell<Vec<(i64, ReviewUpdate)>>,
    next_list_error: RefCell<Option<ApiError>>,
    next_delete_error: RefCell<Option<ApiError>>,
    next_update_error: RefCell<Option<ApiError>>,
    gate_lists: Cell<bool>,
    list_gates: RefCell<Vec<Option<oneshot::Sender<Vec<Review>>>>>,
    gate_updates: Cell<bool>,
    update_gate: RefCell<Option<oneshot::Sender<()>>>,
    clock: Cell<u32>,
}

impl MemoryStore {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: RefCell::new(reviews),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Review> {
        self.reviews.borrow().clone()
    }

    pub fn remove(&self, id: i64) {
        self.reviews.borrow_mut().retain(|review| review.review_id != id);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn deleted_ids(&self) -> Vec<i64> {
        self.deleted.borrow().clone()
    }

    pub fn updates(&self) -> Vec<(i64, ReviewUpdate)> {
        self.updates.borrow().clone()
    }

    pub fn fail_next_list(&self, err: ApiError) {
        self.next_list_error.replace(Some(err));
    }

    pub fn fail_next_delete(&self, err: ApiError) {
        self.next_delete_error.replace(Some(err));
    }

    pub fn fail_next_update(&self, err: ApiError) {
        self.next_update_error.replace(Some(err));
    }

    /// Makes each `list` call wait until [`MemoryStore::release_list`]
    /// hands it a response.
    pub fn gate_lists(&self) {
        self.gate_lists.set(true);
    }

    pub fn pending_lists(&self) -> usize {
        self.list_gates.borrow().iter().flatten().count()
    }

    /// Completes the `call`-th gated list request (0-based) with `reviews`.
    pub fn release_list(&self, call: usize, reviews: Vec<Review>) {
        let sender = self
            .list_gates
            .borrow_mut()
            .get_mut(call)
            .and_then(Option::take);
        if let Some(sender) = sender {
            let _ = sender.send(reviews);
        }
    }

    /// Makes the next `update` calls wait for [`MemoryStore::release_update`].
    pub fn gate_updates(&self) {
        self.gate_updates.set(true);
    }

    pub fn release_update(&self) {
        if let Some(sender) = self.update_gate.take() {
            let _ = sender.send(());
        }
    }

    fn tick(&self) -> String {
        let minute = self.clock.get() + 1;
        self.clock.set(minute);
        format!("2030-01-01T00:{:02}:00", minute % 60)
    }

    fn not_found(id: i64) -> ApiError {
        ApiError::Remote {
            message: format!("Review {id} not found"),
            status: 404,
            status_text: "Not Found".into(),
        }
    }
}

impl ReviewStore for MemoryStore {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            message: "ok".into(),
        })
    }

    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(err) = self.next_list_error.take() {
            return Err(err);
        }
        if self.gate_lists.get() {
            let (sender, receiver) = oneshot::channel();
            self.list_gates.borrow_mut().push(Some(sender));
            return receiver.await.map_err(|_| ApiError::Network {
                message: "request abandoned".into(),
            });
        }
        Ok(self.snapshot())
    }

    async fn get(&self, id: i64) -> Result<Review, ApiError> {
        self.reviews
            .borrow()
            .iter()
            .find(|review| review.review_id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: i64, draft: &ReviewUpdate) -> Result<Review, ApiError> {
        self.updates.borrow_mut().push((id, draft.clone()));
        if self.gate_updates.get() {
            let (sender, receiver) = oneshot::channel();
            self.update_gate.replace(Some(sender));
            let _ = receiver.await;
        }
        if let Some(err) = self.next_update_error.take() {
            return Err(err);
        }
        let stamp = self.tick();
        let mut reviews = self.reviews.borrow_mut();
        let review = reviews
            .iter_mut()
            .find(|review| review.review_id == id)
            .ok_or_else(|| Self::not_found(id))?;
        apply_update(review, draft);
        review.updated_at = stamp;
        Ok(review.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.deleted.borrow_mut().push(id);
        if let Some(err) = self.next_delete_error.take() {
            return Err(err);
        }
        self.remove(id);
        Ok(())
    }
}
