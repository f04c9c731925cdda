//! Application shell for Review Desk.
//! Switches between the review list and the editor, shows the API status and
//! owns the theme toggle.
use crate::api::{HttpReviewStore, ReviewStore};
use crate::components::{review_form::ReviewForm, review_list::ReviewList};
use crate::config::AppConfig;
use crate::models::review::Review;
use crate::theme::{use_theme, Theme, ThemeContext};
use leptos::logging::warn;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Checking,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn class(self) -> &'static str {
        match self {
            Self::Checking => "api-status checking",
            Self::Online => "api-status online",
            Self::Offline => "api-status offline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Online => "API Online",
            Self::Offline => "API Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    List,
    Edit(Review),
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::from_build_env());
    ThemeContext::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/review-desk.css" />
        <Title text="TWS - Reviews" />
        <Router>
            <Routes>
                <Route path="" view=ReviewDesk />
            </Routes>
        </Router>
    }
}

#[component]
fn ReviewDesk() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let theme = use_theme();
    let (screen, set_screen) = create_signal(Screen::List);
    let (refresh, set_refresh) = create_signal(0u32);
    let (api_status, set_api_status) = create_signal(ApiStatus::Checking);

    let base_url = config.api_base_url.clone();
    create_effect(move |_| {
        let store = HttpReviewStore::new(base_url.clone());
        spawn_local(async move {
            let status = match store.health_check().await {
                Ok(_) => ApiStatus::Online,
                Err(err) => {
                    warn!("[API] Health check failed: {}", err);
                    ApiStatus::Offline
                }
            };
            let _ = set_api_status.try_set(status);
        });
    });

    let on_edit = Callback::new(move |review: Review| set_screen.set(Screen::Edit(review)));
    let on_refresh = Callback::new(move |_| set_refresh.update(|count| *count += 1));
    let on_cancel = Callback::new(move |_| set_screen.set(Screen::List));
    let on_success = Callback::new(move |_| {
        set_screen.set(Screen::List);
        set_refresh.update(|count| *count += 1);
    });
    let editing = move || matches!(screen.get(), Screen::Edit(_));

    view! {
        <div class="app">
            <header class="app-header">
                <div class="header-content">
                    <h1 class="app-title">{ "TWS - Reviews" }</h1>
                    <div class="header-actions">
                        <div class=move || api_status.get().class()>
                            <span class="status-indicator"></span>
                            <span class="status-text">{ move || api_status.get().label() }</span>
                        </div>
                        <button
                            class="btn btn-theme"
                            aria-label=move || {
                                format!("Switch to {} theme", theme.theme().get().toggled().as_str())
                            }
                            on:click=move |_| theme.toggle()
                        >
                            { move || if theme.theme().get() == Theme::Dark { "☀" } else { "☾" } }
                        </button>
                        <Show when=editing>
                            <button class="btn btn-secondary" on:click=move |_| on_cancel.call(())>
                                { "Back" }
                            </button>
                        </Show>
                    </div>
                </div>
            </header>

            <main class="app-main">
                {move || match screen.get() {
                    Screen::List => view! {
                        <ReviewList refresh=refresh on_edit=on_edit on_refresh=on_refresh />
                    }
                    .into_view(),
                    Screen::Edit(review) => view! {
                        <ReviewForm review=review on_success=on_success on_cancel=on_cancel />
                    }
                    .into_view(),
                }}
            </main>

            <footer class="app-footer">
                <p>
                    { "Connected to " }
                    <a href=config.api_base_url target="_blank" rel="noopener noreferrer">
                        { "TWS Backend API" }
                    </a>
                </p>
            </footer>
        </div>
    }
}
