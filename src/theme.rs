//! Dark/light theme, read from storage at start-up, applied to the document
//! root and written back whenever it changes.
use leptos::logging::log;
use leptos::*;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Where the theme becomes visible, normally the `<html>` element.
pub trait ThemeTarget {
    fn apply(&self, theme: Theme);
}

/// Reads the stored theme (dark when absent or unknown) and applies it.
pub fn init_theme(storage: &impl ThemeStorage, target: &impl ThemeTarget) -> Theme {
    let theme = storage
        .load()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default();
    target.apply(theme);
    theme
}

/// Persists and applies `theme`.
pub fn commit_theme(theme: Theme, storage: &impl ThemeStorage, target: &impl ThemeTarget) {
    storage.save(theme.as_str());
    target.apply(theme);
}

/// `localStorage`; does nothing outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    fn load(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()??
            .get_item(THEME_KEY)
            .ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load(&self) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&self, value: &str) {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(THEME_KEY, value).is_err() {
                leptos::logging::warn!("[THEME] Could not persist theme preference");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self, _value: &str) {}
}

/// Toggles the `dark` / `light` class on `document.documentElement`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    #[cfg(target_arch = "wasm32")]
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().as_str());
        let _ = classes.add_1(theme.as_str());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply(&self, _theme: Theme) {}
}

/// The theme shared through Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Creates the context for the current component tree. The stored
    /// preference is read once the app runs in the browser.
    pub fn provide() -> Self {
        let context = Self {
            theme: create_rw_signal(Theme::default()),
        };
        create_effect(move |_| {
            let theme = init_theme(&BrowserStorage, &DocumentRoot);
            log!("[THEME] Starting with {} theme", theme.as_str());
            context.theme.set(theme);
        });
        provide_context(context);
        context
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        commit_theme(next, &BrowserStorage, &DocumentRoot);
        self.theme.set(next);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(ThemeContext::provide)
}
