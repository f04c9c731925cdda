use leptos::*;

/// Modal confirmation. Clicking the overlay counts as cancelling.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(default = "Confirm")] confirm_text: &'static str,
    #[prop(default = "Cancel")] cancel_text: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-dialog-overlay" on:click=move |_| on_cancel.call(())>
            <div
                class="confirm-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="confirm-dialog-title"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="confirm-dialog-header">
                    <button
                        class="confirm-dialog-close"
                        aria-label="Close dialog"
                        on:click=move |_| on_cancel.call(())
                    >
                        { "×" }
                    </button>
                </div>
                <div class="confirm-dialog-content">
                    <h3 id="confirm-dialog-title" class="confirm-dialog-title">{ title }</h3>
                    <p class="confirm-dialog-message">{ message }</p>
                </div>
                <div class="confirm-dialog-actions">
                    <button class="btn btn-secondary" autofocus=true on:click=move |_| on_cancel.call(())>
                        { cancel_text }
                    </button>
                    <button
                        class="btn btn-primary btn-confirm-delete"
                        on:click=move |_| on_confirm.call(())
                    >
                        { confirm_text }
                    </button>
                </div>
            </div>
        </div>
    }
}
