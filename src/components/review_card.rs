use crate::models::review::Review;
use crate::models::timestamp::format_timestamp;
use leptos::*;

/// Contact preference badges shared by the card and table views.
#[component]
pub fn ContactBadges(contact_again: bool, #[prop(into)] method: String) -> impl IntoView {
    let (class, label) = if contact_again {
        ("badge badge-success", "Wants future contact")
    } else {
        ("badge badge-neutral", "No future contact")
    };
    view! {
        <div class="review-preferences">
            <span class=class>{ label }</span>
            {contact_again.then(|| view! { <span class="badge badge-info">{ method }</span> })}
        </div>
    }
}

#[component]
pub fn ReviewCard(
    review: Review,
    #[prop(into)] on_edit: Callback<Review>,
    #[prop(into)] on_delete: Callback<(i64, String)>,
) -> impl IntoView {
    let created = format_timestamp(&review.created_at);
    let updated = review
        .was_edited()
        .then(|| format_timestamp(&review.updated_at));
    let id = review.review_id;
    let display_name = review.user_name.clone();
    let edit_target = review.clone();

    view! {
        <div class="review-card">
            <div class="review-card-header">
                <div class="review-user-info">
                    <h3 class="review-user-name">{ review.user_name }</h3>
                    <span class="review-contact">{ review.contact_number }</span>
                </div>
                <div class="review-card-actions">
                    <button
                        class="btn btn-edit"
                        aria-label="Edit review"
                        on:click=move |_| on_edit.call(edit_target.clone())
                    >
                        { "Edit" }
                    </button>
                    <button
                        class="btn btn-delete"
                        aria-label="Delete review"
                        on:click=move |_| on_delete.call((id, display_name.clone()))
                    >
                        { "Delete" }
                    </button>
                </div>
            </div>

            <div class="review-product-info">
                <h4 class="review-product-name">{ review.product_name }</h4>
            </div>

            <div class="review-content">
                <p class="review-text">{ review.product_review }</p>
            </div>

            <div class="review-footer">
                <ContactBadges
                    contact_again=review.preferred_contact_again
                    method=review.preferred_contact_method
                />
                <div class="review-dates">
                    <small class="review-date">{ format!("Created: {created}") }</small>
                    {updated.map(|updated| view! {
                        <small class="review-date">{ format!("Updated: {updated}") }</small>
                    })}
                </div>
            </div>
        </div>
    }
}
