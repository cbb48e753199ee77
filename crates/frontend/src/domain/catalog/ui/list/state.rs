//! Reactive wrapper around the catalog reducer.
//!
//! The reducer stays pure; this controller owns the signal and performs the
//! effects it asks for: storage writes and the switch delay. The URL rewrite
//! is published through `synced_category` and performed by the page, which
//! owns the router handle.

use crate::shared::storage::LocalStorage;
use contracts::domain::a001_product::Catalog;
use contracts::enums::Category;
use contracts::shared::preferences::Preferences;
use contracts::usecases::u102_catalog_view::{CatalogEvent, CatalogViewState, Effect};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct CatalogController {
    state: RwSignal<CatalogViewState>,
    synced_category: RwSignal<Option<Category>>,
}

impl CatalogController {
    pub fn new(url_category: Option<&str>) -> Self {
        let prefs = Preferences::load(&LocalStorage);
        let state = CatalogViewState::init(url_category, prefs, Catalog::global());
        log::debug!(
            "catalog opened: category='{}', page={}",
            state.category,
            state.page
        );
        Self {
            state: RwSignal::new(state),
            synced_category: RwSignal::new(None),
        }
    }

    pub fn state(&self) -> RwSignal<CatalogViewState> {
        self.state
    }

    /// Категория, которую нужно отразить в адресной строке
    pub fn synced_category(&self) -> ReadSignal<Option<Category>> {
        self.synced_category.read_only()
    }

    /// Прогнать событие через редьюсер и выполнить эффекты
    pub fn dispatch(&self, event: CatalogEvent) {
        let effects = self.state.try_update(|state| {
            let transition = state.clone().reduce(event, Catalog::global());
            *state = transition.state;
            transition.effects
        });

        // None: страница уже размонтирована
        for effect in effects.into_iter().flatten() {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::PersistPreferences(prefs) => prefs.save(&LocalStorage),
            Effect::ScheduleCategoryLoad { ticket, delay_ms } => {
                let this = *self;
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    this.dispatch(CatalogEvent::CategoryLoaded { ticket });
                });
            }
            Effect::SyncUrl(category) => {
                log::debug!("category switched to '{}'", category);
                self.synced_category.try_set(Some(category));
            }
        }
    }
}
