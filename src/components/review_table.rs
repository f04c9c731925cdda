use crate::components::review_card::ContactBadges;
use crate::components::sort_toolbar::{aria_sort, SortButton};
use crate::list_controller::{SortField, SortSelection};
use crate::models::review::Review;
use crate::models::timestamp::format_timestamp;
use leptos::*;

#[component]
fn SortableHeader(
    field: SortField,
    #[prop(into)] sort: Signal<SortSelection>,
    #[prop(into)] on_sort: Callback<SortField>,
) -> impl IntoView {
    view! {
        <th aria-sort=move || aria_sort(sort.get().direction_for(field))>
            <SortButton field=field sort=sort on_sort=on_sort />
        </th>
    }
}

/// Tabular rendering of the same projection the cards show.
#[component]
pub fn ReviewTable(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(into)] sort: Signal<SortSelection>,
    #[prop(into)] on_sort: Callback<SortField>,
    #[prop(into)] on_edit: Callback<Review>,
    #[prop(into)] on_delete: Callback<(i64, String)>,
) -> impl IntoView {
    view! {
        <table class="review-table">
            <thead>
                <tr>
                    <SortableHeader field=SortField::Name sort=sort on_sort=on_sort />
                    <th>{ "Contact" }</th>
                    <th>{ "Product" }</th>
                    <th>{ "Review" }</th>
                    <SortableHeader field=SortField::ContactPreference sort=sort on_sort=on_sort />
                    <SortableHeader field=SortField::CreatedAt sort=sort on_sort=on_sort />
                    <SortableHeader field=SortField::UpdatedAt sort=sort on_sort=on_sort />
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || reviews.get()
                    key=|review| (review.review_id, review.updated_at.clone())
                    children=move |review| {
                        let id = review.review_id;
                        let display_name = review.user_name.clone();
                        let edit_target = review.clone();
                        view! {
                            <tr>
                                <td>{ review.user_name }</td>
                                <td>{ review.contact_number }</td>
                                <td>{ review.product_name }</td>
                                <td class="review-text-cell">{ review.product_review }</td>
                                <td>
                                    <ContactBadges
                                        contact_again=review.preferred_contact_again
                                        method=review.preferred_contact_method
                                    />
                                </td>
                                <td>{ format_timestamp(&review.created_at) }</td>
                                <td>{ format_timestamp(&review.updated_at) }</td>
                                <td class="review-card-actions">
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
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
