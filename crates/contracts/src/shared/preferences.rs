//! Catalog UI preferences kept in the browser's key-value storage.
//!
//! Reads fall back to defaults key by key; writes never fail loudly.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::enums::{GridDensity, SortMode};

pub const GRID_COLS_KEY: &str = "jc:gridCols";
pub const SORT_KEY: &str = "jc:sort";
pub const SHOW_ALL_KEY: &str = "jc:showAll";
pub const PAGE_KEY: &str = "jc:page";

/// Ошибки хранилища настроек
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Строковое key-value хранилище (localStorage в браузере)
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Сохраняемая часть состояния каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub grid: GridDensity,
    pub sort: SortMode,
    pub show_all: bool,
    /// 1-based
    pub page: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            grid: GridDensity::Three,
            sort: SortMode::Default,
            show_all: false,
            page: 1,
        }
    }
}

impl Preferences {
    pub fn load(store: &impl PreferenceStore) -> Self {
        let grid = store
            .read(GRID_COLS_KEY)
            .map(|v| GridDensity::from_token(&v))
            .unwrap_or_default();

        let sort = store
            .read(SORT_KEY)
            .and_then(|v| SortMode::from_token(&v))
            .unwrap_or_default();

        let show_all = store.read(SHOW_ALL_KEY).is_some_and(|v| v.trim() == "1");

        let page = store
            .read(PAGE_KEY)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        Self {
            grid,
            sort,
            show_all,
            page,
        }
    }

    /// Ошибки записи игнорируются: состояние в памяти остаётся рабочим
    pub fn save(&self, store: &impl PreferenceStore) {
        let page = self.page.to_string();
        let entries = [
            (GRID_COLS_KEY, self.grid.token()),
            (SORT_KEY, self.sort.token()),
            (SHOW_ALL_KEY, if self.show_all { "1" } else { "0" }),
            (PAGE_KEY, page.as_str()),
        ];
        for (key, value) in entries {
            let _ = store.write(key, value);
        }
    }
}

/// In-memory store for tests and for environments without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
