//! Dark/light preference with best-effort persistence.
//!
//! `ThemeStore` is the single owner of the current value. Storage problems
//! never surface to callers: the store logs them and keeps going in memory.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Key-value backend for UI preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose reads work but every write fails, like a full quota.
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let values = HashMap::from([(key.to_string(), value.to_string())]);
        Self {
            values: Arc::new(Mutex::new(values)),
            fail_writes: false,
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        let mut values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

type Observer = Box<dyn Fn(Theme) + Send + Sync>;

pub struct ThemeStore<S> {
    backend: Option<S>,
    current: Theme,
    observers: Vec<Observer>,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn open(backend: S) -> Self {
        let (current, backend) = match backend.load(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => (theme, Some(backend)),
                Err(e) => {
                    log::warn!("ignoring stored preference: {e}");
                    (Theme::default(), Some(backend))
                }
            },
            Ok(None) => (Theme::default(), Some(backend)),
            Err(e) => {
                log::warn!("theme preference not restored, {e}");
                (Theme::default(), None)
            }
        };
        Self {
            backend,
            current,
            observers: Vec::new(),
        }
    }

    /// Store with no persistence at all.
    pub fn detached() -> Self {
        Self {
            backend: None,
            current: Theme::default(),
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn is_persistent(&self) -> bool {
        self.backend.is_some()
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
        for observer in &self.observers {
            observer(theme);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Registers `observer` and immediately hands it the current value.
    pub fn subscribe(&mut self, observer: impl Fn(Theme) + Send + Sync + 'static) {
        observer(self.current);
        self.observers.push(Box::new(observer));
    }

    fn persist(&mut self) {
        let Some(backend) = &self.backend else {
            return;
        };
        if let Err(e) = backend.save(THEME_KEY, self.current.as_str()) {
            log::warn!("keeping theme in memory only, {e}");
            self.backend = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unavailable;

    impl PreferenceStore for Unavailable {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    /// Stands in for the `data-theme` attribute on the document root.
    fn root_attribute<S: PreferenceStore>(store: &mut ThemeStore<S>) -> Arc<Mutex<String>> {
        let attr = Arc::new(Mutex::new(String::new()));
        let sink = attr.clone();
        store.subscribe(move |t| *sink.lock().unwrap() = t.to_string());
        attr
    }

    #[test]
    fn parses_only_known_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn fresh_load_defaults_to_dark_then_toggles_to_light() {
        let backend = MemoryStore::new();
        let mut store = ThemeStore::open(backend.clone());
        let attr = root_attribute(&mut store);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(*attr.lock().unwrap(), "dark");

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(*attr.lock().unwrap(), "light");
        assert_eq!(backend.load(THEME_KEY), Ok(Some("light".to_string())));
    }

    #[test]
    fn restores_persisted_value() {
        let store = ThemeStore::open(MemoryStore::with_value(THEME_KEY, "light"));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn garbage_value_falls_back_to_dark() {
        let store = ThemeStore::open(MemoryStore::with_value(THEME_KEY, "sepia"));
        assert_eq!(store.get(), Theme::Dark);
        assert!(store.is_persistent());
    }

    #[test]
    fn double_toggle_round_trips_and_stays_persisted() {
        let backend = MemoryStore::new();
        let mut store = ThemeStore::open(backend.clone());
        let original = store.get();

        store.toggle();
        assert_eq!(
            backend.load(THEME_KEY).unwrap().as_deref(),
            Some(store.get().as_str())
        );
        store.toggle();
        assert_eq!(
            backend.load(THEME_KEY).unwrap().as_deref(),
            Some(store.get().as_str())
        );
        assert_eq!(store.get(), original);
    }

    #[test]
    fn unavailable_storage_is_memory_only() {
        let mut store = ThemeStore::open(Unavailable);
        assert_eq!(store.get(), Theme::Dark);
        assert!(!store.is_persistent());
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    #[test]
    fn failed_write_detaches_backend() {
        let backend = MemoryStore::read_only();
        let mut store = ThemeStore::open(backend.clone());
        let attr = root_attribute(&mut store);
        assert!(store.is_persistent());

        store.toggle();
        assert!(!store.is_persistent());
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(*attr.lock().unwrap(), "light");
        assert_eq!(backend.load(THEME_KEY), Ok(None));
    }

    #[test]
    fn every_observer_sees_changes() {
        let mut store = ThemeStore::<MemoryStore>::detached();
        let a = root_attribute(&mut store);
        let b = root_attribute(&mut store);
        store.set(Theme::Light);
        assert_eq!(*a.lock().unwrap(), "light");
        assert_eq!(*b.lock().unwrap(), "light");
    }
}
