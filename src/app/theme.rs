use leptos::prelude::*;

use crate::effects::theme::{PreferenceStore, StorageError, Theme, ThemeStore};

/// `window.localStorage`, looked up on every call so a missing or blocked
/// storage shows up as an error instead of a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// Toggles the store in `slot`, opening it first if nothing has yet.
fn toggle_or_open<S: PreferenceStore>(
    slot: &mut Option<ThemeStore<S>>,
    open: impl FnOnce() -> ThemeStore<S>,
) -> Theme {
    slot.get_or_insert_with(open).toggle()
}

fn open_store(theme: RwSignal<Theme>) -> ThemeStore<BrowserStorage> {
    let mut store = ThemeStore::open(BrowserStorage);
    store.subscribe(move |t| theme.set(t));
    store
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: StoredValue<Option<ThemeStore<BrowserStorage>>>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn toggle(&self) {
        let theme = self.theme;
        self.store.update_value(|slot| {
            toggle_or_open(slot, || open_store(theme));
        });
    }

    pub fn icon_class(&self) -> &'static str {
        match self.get() {
            Theme::Dark => "fa-solid fa-sun",
            Theme::Light => "fa-solid fa-moon",
        }
    }
}

/// Starts at the default theme so server and client render the same markup,
/// then restores the stored preference once mounted in the browser.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::default()),
        store: StoredValue::new(None),
    };

    Effect::new(move |_| {
        ctx.store.update_value(|slot| {
            if slot.is_none() {
                *slot = Some(open_store(ctx.theme));
            }
        });
    });

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="theme-toggle-btn"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            <i class=move || theme.icon_class()></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::theme::{MemoryStore, THEME_KEY};

    #[test]
    fn toggle_before_mount_opens_and_persists() {
        let backend = MemoryStore::new();
        let mut slot = None;
        let theme = toggle_or_open(&mut slot, || ThemeStore::open(backend.clone()));
        assert_eq!(theme, Theme::Light);
        assert!(slot.is_some());
        assert_eq!(backend.load(THEME_KEY), Ok(Some("light".to_string())));
    }

    #[test]
    fn toggle_before_mount_starts_from_the_stored_value() {
        let backend = MemoryStore::with_value(THEME_KEY, "light");
        let mut slot = None;
        assert_eq!(
            toggle_or_open(&mut slot, || ThemeStore::open(backend.clone())),
            Theme::Dark
        );
        assert_eq!(backend.load(THEME_KEY), Ok(Some("dark".to_string())));
    }

    #[test]
    fn open_store_is_reused() {
        let backend = MemoryStore::new();
        let mut slot = Some(ThemeStore::open(backend.clone()));
        toggle_or_open(&mut slot, || panic!("store already open"));
        assert_eq!(
            toggle_or_open(&mut slot, || panic!("store already open")),
            Theme::Dark
        );
        assert_eq!(backend.load(THEME_KEY), Ok(Some("dark".to_string())));
    }
}
