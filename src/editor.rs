//! Draft and validation state for editing one review.
//!
//! A field's error is only refreshed on input once the field is touched,
//! either by leaving it or by a submit attempt. A successful submit does not
//! touch the list; the caller reloads it.
use crate::api::{ApiError, ReviewStore};
use crate::models::review::{Review, ReviewUpdate};
use crate::utils::leptos_owner::StateCell;
use crate::validation::{
    validate_contact_method, validate_contact_number, validate_product_name,
    validate_product_review, validate_user_name,
};
use leptos::logging::{error, log};

pub const SUBMIT_FALLBACK_MESSAGE: &str = "Error updating review. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ContactNumber,
    UserName,
    ProductName,
    ProductReview,
    ContactMethod,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Self::ContactNumber,
        Self::UserName,
        Self::ProductName,
        Self::ProductReview,
        Self::ContactMethod,
    ];

    /// Form control id and wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ContactNumber => "contact_number",
            Self::UserName => "user_name",
            Self::ProductName => "product_name",
            Self::ProductReview => "product_review",
            Self::ContactMethod => "preferred_contact_method",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Touch {
    #[default]
    Untouched,
    Touched,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub touch: Touch,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldStates {
    contact_number: FieldState,
    user_name: FieldState,
    product_name: FieldState,
    product_review: FieldState,
    contact_method: FieldState,
}

impl FieldStates {
    fn get(&self, field: Field) -> &FieldState {
        match field {
            Field::ContactNumber => &self.contact_number,
            Field::UserName => &self.user_name,
            Field::ProductName => &self.product_name,
            Field::ProductReview => &self.product_review,
            Field::ContactMethod => &self.contact_method,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::ContactNumber => &mut self.contact_number,
            Field::UserName => &mut self.user_name,
            Field::ProductName => &mut self.product_name,
            Field::ProductReview => &mut self.product_review,
            Field::ContactMethod => &mut self.contact_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    review_id: i64,
    values: ReviewUpdate,
    fields: FieldStates,
    saving: bool,
    submit_error: Option<String>,
}

impl ReviewDraft {
    /// Seeds a draft from a snapshot of `review`.
    pub fn open(review: &Review) -> Self {
        Self {
            review_id: review.review_id,
            values: ReviewUpdate::from(review),
            fields: FieldStates::default(),
            saving: false,
            submit_error: None,
        }
    }

    pub fn review_id(&self) -> i64 {
        self.review_id
    }

    pub fn values(&self) -> &ReviewUpdate {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::ContactNumber => &self.values.contact_number,
            Field::UserName => &self.values.user_name,
            Field::ProductName => &self.values.product_name,
            Field::ProductReview => &self.values.product_review,
            Field::ContactMethod => &self.values.preferred_contact_method,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ContactNumber => &mut self.values.contact_number,
            Field::UserName => &mut self.values.user_name,
            Field::ProductName => &mut self.values.product_name,
            Field::ProductReview => &mut self.values.product_review,
            Field::ContactMethod => &mut self.values.preferred_contact_method,
        }
    }

    pub fn contact_again(&self) -> bool {
        self.values.preferred_contact_again
    }

    pub fn touch(&self, field: Field) -> Touch {
        self.fields.get(field).touch
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.fields.get(field).error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    fn check(&self, field: Field) -> Option<String> {
        let value = self.value(field);
        match field {
            Field::ContactNumber => validate_contact_number(value),
            Field::UserName => validate_user_name(value),
            Field::ProductName => validate_product_name(value),
            Field::ProductReview => validate_product_review(value),
            Field::ContactMethod => validate_contact_method(value, self.contact_again()),
        }
    }

    fn revalidate(&mut self, field: Field) {
        let error = self.check(field);
        self.fields.get_mut(field).error = error;
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        *self.value_mut(field) = value;
        if self.touch(field) == Touch::Touched {
            self.revalidate(field);
        }
    }

    /// The user left `field`: from now on it shows its error.
    pub fn blur(&mut self, field: Field) {
        self.fields.get_mut(field).touch = Touch::Touched;
        self.revalidate(field);
    }

    /// Turning contact off clears the method along with its error and touch
    /// state.
    pub fn set_contact_again(&mut self, wanted: bool) {
        self.values.preferred_contact_again = wanted;
        if wanted {
            if self.touch(Field::ContactMethod) == Touch::Touched {
                self.revalidate(Field::ContactMethod);
            }
        } else {
            self.values.preferred_contact_method.clear();
            *self.fields.get_mut(Field::ContactMethod) = FieldState::default();
        }
    }

    fn relevant_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|field| *field != Field::ContactMethod || self.contact_again())
    }

    /// Validates every relevant field and marks them touched. Returns the
    /// payload to send when nothing failed.
    pub fn validate_all(&mut self) -> Option<ReviewUpdate> {
        let fields: Vec<Field> = self.relevant_fields().collect();
        for field in fields {
            self.fields.get_mut(field).touch = Touch::Touched;
            self.revalidate(field);
        }
        let valid = Field::ALL.iter().all(|field| self.error(*field).is_none());
        valid.then(|| self.values.clone())
    }

    /// Starts a submit: validates, and when valid flags the draft as saving.
    pub fn begin_submit(&mut self) -> Option<(i64, ReviewUpdate)> {
        let payload = self.validate_all()?;
        self.saving = true;
        self.submit_error = None;
        Some((self.review_id, payload))
    }

    pub fn finish_submit(&mut self, result: &Result<Review, ApiError>) {
        self.saving = false;
        self.submit_error = result
            .as_ref()
            .err()
            .map(|err| err.user_message(SUBMIT_FALLBACK_MESSAGE));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, or the editor went away; nothing was sent.
    NotSent,
    Saved(Review),
    Failed(ApiError),
}

/// Validates the draft held in `draft` and, when valid, sends it.
pub async fn submit<S, C>(store: &S, draft: &C) -> SubmitOutcome
where
    S: ReviewStore,
    C: StateCell<ReviewDraft>,
{
    let Some((id, payload)) = draft.update_state(ReviewDraft::begin_submit).flatten() else {
        log!("[EDITOR] Submit blocked by validation");
        return SubmitOutcome::NotSent;
    };
    let result = store.update(id, &payload).await;
    draft.update_state(|draft| draft.finish_submit(&result));
    match result {
        Ok(review) => {
            log!("[EDITOR] Review {} saved", id);
            SubmitOutcome::Saved(review)
        }
        Err(err) => {
            error!("[EDITOR] Saving review {} failed: {}", id, err);
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_controller::{ReviewListController, ReviewListState};
    use crate::models::timestamp::timestamp_millis;
    use crate::test_support::{review, MemoryStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn valid_review() -> Review {
        review(
            10,
            "Anne-Marie O'Brien",
            false,
            "2024-05-01T10:00:00",
            "2024-05-01T10:00:00",
        )
    }

    #[test]
    fn open_seeds_untouched_draft() {
        let draft = ReviewDraft::open(&valid_review());
        assert_eq!(draft.review_id(), 10);
        assert_eq!(draft.value(Field::UserName), "Anne-Marie O'Brien");
        assert!(Field::ALL
            .iter()
            .all(|field| draft.touch(*field) == Touch::Untouched && draft.error(*field).is_none()));
    }

    #[test]
    fn untouched_field_does_not_show_errors_while_typing() {
        let mut draft = ReviewDraft::open(&valid_review());
        draft.update_field(Field::UserName, "A".into());
        assert_eq!(draft.error(Field::UserName), None);

        draft.blur(Field::UserName);
        assert_eq!(
            draft.error(Field::UserName),
            Some("User name must be at least 2 characters")
        );

        draft.update_field(Field::UserName, "Al".into());
        assert_eq!(draft.error(Field::UserName), None);
    }

    #[test]
    fn method_not_required_without_contact() {
        let mut draft = ReviewDraft::open(&valid_review());
        assert!(draft.validate_all().is_some());
        assert_eq!(draft.touch(Field::ContactMethod), Touch::Untouched);
    }

    #[test]
    fn enabling_contact_requires_a_method() {
        let mut draft = ReviewDraft::open(&valid_review());
        draft.set_contact_again(true);

        assert!(draft.validate_all().is_none());
        assert_eq!(
            draft.error(Field::ContactMethod),
            Some("Preferred contact method is required")
        );

        draft.update_field(Field::ContactMethod, "SMS".into());
        assert_eq!(draft.error(Field::ContactMethod), None);
        assert!(draft.validate_all().is_some());
    }

    #[test]
    fn disabling_contact_clears_method_and_its_state() {
        let mut draft = ReviewDraft::open(&valid_review());
        draft.set_contact_again(true);
        draft.blur(Field::ContactMethod);
        assert!(draft.error(Field::ContactMethod).is_some());

        draft.update_field(Field::ContactMethod, "Phone".into());
        draft.set_contact_again(false);

        assert_eq!(draft.value(Field::ContactMethod), "");
        assert_eq!(draft.error(Field::ContactMethod), None);
        assert_eq!(draft.touch(Field::ContactMethod), Touch::Untouched);
    }

    #[test]
    fn failed_validation_touches_every_relevant_field() {
        let mut draft = ReviewDraft::open(&Review {
            contact_number: "12345".into(),
            ..valid_review()
        });

        assert!(draft.begin_submit().is_none());
        assert!(!draft.is_saving());
        assert!(draft.error(Field::ContactNumber).is_some());
        for field in [
            Field::ContactNumber,
            Field::UserName,
            Field::ProductName,
            Field::ProductReview,
        ] {
            assert_eq!(draft.touch(field), Touch::Touched);
        }
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() {
        let store = MemoryStore::with_reviews(vec![valid_review()]);
        let draft = Rc::new(RefCell::new(ReviewDraft::open(&valid_review())));
        draft
            .borrow_mut()
            .update_field(Field::ProductReview, "meh".into());

        let outcome = submit(&store, &draft).await;

        assert_eq!(outcome, SubmitOutcome::NotSent);
        assert!(store.updates().is_empty());
        assert_eq!(
            draft.borrow().error(Field::ProductReview),
            Some("Product review must be at least 10 characters")
        );
    }

    #[tokio::test]
    async fn draft_is_saving_while_update_is_in_flight() {
        let store = MemoryStore::with_reviews(vec![valid_review()]);
        store.gate_updates();
        let draft = Rc::new(RefCell::new(ReviewDraft::open(&valid_review())));

        let observe = async {
            assert!(draft.borrow().is_saving());
            assert_eq!(store.updates().len(), 1);
            store.release_update();
        };
        let (outcome, ()) = futures::join!(submit(&store, &draft), observe);

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert!(!draft.borrow().is_saving());
        assert_eq!(draft.borrow().submit_error(), None);
    }

    #[tokio::test]
    async fn failed_submit_stays_open_with_inline_error() {
        let store = MemoryStore::with_reviews(vec![valid_review()]);
        store.fail_next_update(ApiError::Remote {
            message: "Contact number already registered".into(),
            status: 409,
            status_text: "Conflict".into(),
        });
        let draft = Rc::new(RefCell::new(ReviewDraft::open(&valid_review())));

        let outcome = submit(&store, &draft).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let draft = draft.borrow();
        assert!(!draft.is_saving());
        assert_eq!(draft.submit_error(), Some("Contact number already registered"));
    }

    #[tokio::test]
    async fn network_failure_on_submit_uses_generic_message() {
        let store = MemoryStore::with_reviews(vec![valid_review()]);
        store.fail_next_update(ApiError::Network {
            message: "offline".into(),
        });
        let draft = Rc::new(RefCell::new(ReviewDraft::open(&valid_review())));

        submit(&store, &draft).await;

        assert_eq!(draft.borrow().submit_error(), Some(SUBMIT_FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn submitted_draft_appears_after_reload() {
        let original = valid_review();
        let store = Rc::new(MemoryStore::with_reviews(vec![original.clone()]));
        let draft = Rc::new(RefCell::new(ReviewDraft::open(&original)));
        {
            let mut draft = draft.borrow_mut();
            draft.update_field(Field::ProductName, "Stovetop Kettle".into());
            draft.set_contact_again(true);
            draft.update_field(Field::ContactMethod, "WhatsApp".into());
        }

        let outcome = submit(store.as_ref(), &draft).await;
        assert!(matches!(outcome, SubmitOutcome::Saved(_)));

        let list = ReviewListController::new(
            Rc::clone(&store),
            Rc::new(RefCell::new(ReviewListState::default())),
        );
        list.reload().await;

        let state = list.state().borrow();
        let reloaded = &state.reviews[0];
        assert_eq!(ReviewUpdate::from(reloaded), draft.borrow().values().clone());
        assert!(timestamp_millis(&reloaded.updated_at) >= timestamp_millis(&original.updated_at));
        assert_eq!(reloaded.created_at, original.created_at);
    }
}
