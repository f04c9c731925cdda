use leptos::*;

/// Inline error panel, with a Retry button when `on_retry` is given.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-container" role="alert">
            <div class="error-content">
                <h3>{ "Error" }</h3>
                <p>{ message }</p>
                {on_retry.map(|retry| view! {
                    <button class="btn btn-primary" on:click=move |_| retry.call(())>
                        { "Retry" }
                    </button>
                })}
            </div>
        </div>
    }
}
