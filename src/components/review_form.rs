use crate::api::HttpReviewStore;
use crate::config::AppConfig;
use crate::editor::{submit, Field, ReviewDraft, SubmitOutcome};
use crate::models::review::Review;
use crate::validation::CONTACT_METHODS;
use leptos::ev::SubmitEvent;
use leptos::*;
use std::rc::Rc;

#[component]
fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <span class="field-error">{ message }</span> })
    }
}

#[component]
fn FieldLabel(field: Field, label: &'static str) -> impl IntoView {
    view! {
        <label for=field.name()>
            { label }
            " "
            <span class="required">{ "*" }</span>
        </label>
    }
}

#[component]
fn TextField(
    draft: RwSignal<ReviewDraft>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = Signal::derive(move || draft.with(|draft| draft.error(field).map(str::to_string)));

    view! {
        <div class="form-group">
            <FieldLabel field=field label=label />
            <input
                type=input_type
                id=field.name()
                name=field.name()
                placeholder=placeholder
                class:error=move || error.with(Option::is_some)
                prop:value=move || draft.with(|draft| draft.value(field).to_string())
                on:input=move |ev| draft.update(|draft| draft.update_field(field, event_target_value(&ev)))
                on:blur=move |_| draft.update(|draft| draft.blur(field))
            />
            <FieldError error=error />
        </div>
    }
}

/// Edit form for one review. The list is reloaded by the caller after
/// `on_success`; this form never writes to it.
#[component]
pub fn ReviewForm(
    review: Review,
    #[prop(into)] on_success: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let store = store_value(Rc::new(HttpReviewStore::new(config.api_base_url)));
    let draft = create_rw_signal(ReviewDraft::open(&review));

    let saving = Signal::derive(move || draft.with(ReviewDraft::is_saving));
    let contact_again = Signal::derive(move || draft.with(ReviewDraft::contact_again));
    let review_error = Signal::derive(move || {
        draft.with(|draft| draft.error(Field::ProductReview).map(str::to_string))
    });
    let method_error = Signal::derive(move || {
        draft.with(|draft| draft.error(Field::ContactMethod).map(str::to_string))
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(store) = store.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let SubmitOutcome::Saved(_) = submit(store.as_ref(), &draft).await {
                on_success.call(());
            }
        });
    };

    view! {
        <div class="review-form-container">
            <h2 class="form-title">{ "Edit Review" }</h2>

            {move || draft.with(|draft| draft.submit_error().map(str::to_string)).map(|message| view! {
                <div class="error-message" role="alert">
                    <span>{ message }</span>
                </div>
            })}

            <form class="review-form" on:submit=handle_submit>
                <TextField
                    draft=draft
                    field=Field::ContactNumber
                    label="Contact Number"
                    input_type="tel"
                    placeholder="+1234567890"
                />
                <TextField
                    draft=draft
                    field=Field::UserName
                    label="User Name"
                    placeholder="John Doe"
                />
                <TextField
                    draft=draft
                    field=Field::ProductName
                    label="Product Name"
                    placeholder="Product X"
                />

                <div class="form-group">
                    <FieldLabel field=Field::ProductReview label="Product Review" />
                    <textarea
                        id=Field::ProductReview.name()
                        name=Field::ProductReview.name()
                        rows="6"
                        placeholder="Write your review here..."
                        class:error=move || review_error.with(Option::is_some)
                        prop:value=move || draft.with(|draft| draft.value(Field::ProductReview).to_string())
                        on:input=move |ev| {
                            draft.update(|draft| draft.update_field(Field::ProductReview, event_target_value(&ev)))
                        }
                        on:blur=move |_| draft.update(|draft| draft.blur(Field::ProductReview))
                    ></textarea>
                    {move || match review_error.get() {
                        Some(message) => view! { <span class="field-error">{ message }</span> }.into_view(),
                        None => view! {
                            <small class="form-hint">
                                { "Minimum 10 characters, maximum 5000 characters" }
                            </small>
                        }
                        .into_view(),
                    }}
                </div>

                <div class="form-group checkbox-group">
                    <label for="preferred_contact_again" class="checkbox-label">
                        <input
                            type="checkbox"
                            id="preferred_contact_again"
                            name="preferred_contact_again"
                            prop:checked=move || contact_again.get()
                            on:change=move |ev| {
                                draft.update(|draft| draft.set_contact_again(event_target_checked(&ev)))
                            }
                        />
                        <span>{ "Wants to be contacted again" }</span>
                    </label>
                </div>

                <Show when=move || contact_again.get()>
                    <div class="form-group">
                        <FieldLabel field=Field::ContactMethod label="Preferred Contact Method" />
                        <select
                            id=Field::ContactMethod.name()
                            name=Field::ContactMethod.name()
                            class:error=move || method_error.with(Option::is_some)
                            prop:value=move || draft.with(|draft| draft.value(Field::ContactMethod).to_string())
                            on:change=move |ev| {
                                draft.update(|draft| draft.update_field(Field::ContactMethod, event_target_value(&ev)))
                            }
                            on:blur=move |_| draft.update(|draft| draft.blur(Field::ContactMethod))
                        >
                            <option value="">{ "Select a method" }</option>
                            {CONTACT_METHODS
                                .into_iter()
                                .map(|method| view! { <option value=method>{ method }</option> })
                                .collect_view()}
                        </select>
                        <FieldError error=method_error />
                    </div>
                </Show>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=move || saving.get()
                        on:click=move |_| on_cancel.call(())
                    >
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        { move || if saving.get() { "Saving..." } else { "Update" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
