//! State machine of the product listing page.
//!
//! `CatalogViewState::reduce` takes the current state and one user event and
//! returns the next state plus the side effects the host has to run (timers,
//! storage writes, URL updates). Nothing here touches the DOM.

use crate::domain::a001_product::{Catalog, Product};
use crate::enums::{Category, GridDensity, SortMode};
use crate::shared::preferences::Preferences;
use crate::usecases::u101_catalog_query::{clamp_page, total_pages, CatalogPage, CatalogQuery, PAGE_SIZE};

/// Искусственная задержка смены категории (показ скелетона)
pub const CATEGORY_SWITCH_DELAY_MS: u32 = 250;

/// Смена категории, ожидающая срабатывания таймера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwitch {
    pub target: Category,
    pub ticket: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    CategorySwitching,
    ModalOpen { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    SelectCategory(Category),
    CategoryLoaded { ticket: u64 },
    /// Raw `?category=` value seen by the router
    UrlCategoryChanged(Option<String>),
    Search(String),
    SetSort(SortMode),
    SetGridDensity(GridDensity),
    SetShowAll(bool),
    SetPage(i64),
    PrevPage,
    NextPage,
    /// `slot` is the card position on the current page
    OpenQuickView { slot: usize },
    /// Close button, overlay click or Escape
    CloseQuickView,
}

/// Побочные эффекты, которые выполняет хост (страница)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistPreferences(Preferences),
    ScheduleCategoryLoad { ticket: u64, delay_ms: u32 },
    SyncUrl(Category),
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: CatalogViewState,
    pub effects: Vec<Effect>,
}

/// Состояние страницы каталога
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewState {
    pub category: Category,
    pub search: String,
    pub sort: SortMode,
    pub grid: GridDensity,
    pub show_all: bool,
    /// 1-based, always within `[1, total_pages]`
    pub page: usize,
    /// Absolute index into the filtered, sorted, unpaginated list
    pub quick_view: Option<usize>,
    pub pending_switch: Option<PendingSwitch>,
    last_ticket: u64,
}

impl CatalogViewState {
    /// Initial state on mount: category from the URL, the rest from storage.
    pub fn init(url_category: Option<&str>, prefs: Preferences, catalog: &Catalog) -> Self {
        let mut state = Self {
            category: Category::from_query_or_default(url_category),
            search: String::new(),
            sort: prefs.sort,
            grid: prefs.grid,
            show_all: prefs.show_all,
            page: prefs.page,
            quick_view: None,
            pending_switch: None,
            last_ticket: 0,
        };
        state.clamp(catalog);
        state
    }

    pub fn phase(&self) -> ViewPhase {
        if self.pending_switch.is_some() {
            ViewPhase::CategorySwitching
        } else if let Some(index) = self.quick_view {
            ViewPhase::ModalOpen { index }
        } else {
            ViewPhase::Idle
        }
    }

    pub fn is_switching(&self) -> bool {
        self.pending_switch.is_some()
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            grid: self.grid,
            sort: self.sort,
            show_all: self.show_all,
            page: self.page,
        }
    }

    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category,
            search: self.search.clone(),
            sort: self.sort,
            page: self.page,
            page_size: PAGE_SIZE,
            show_all: self.show_all,
        }
    }

    pub fn page_view<'a>(&self, catalog: &'a Catalog) -> CatalogPage<'a> {
        self.query().run(catalog)
    }

    pub fn total_pages(&self, catalog: &Catalog) -> usize {
        total_pages(self.query().filtered(catalog).len(), PAGE_SIZE)
    }

    /// Товар для quick view; `None`, если окно закрыто
    pub fn quick_view_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        let index = self.quick_view?;
        self.query().filtered(catalog).get(index).copied()
    }

    pub fn reduce(mut self, event: CatalogEvent, catalog: &Catalog) -> Transition {
        let before = self.preferences();
        let mut effects = Vec::new();

        match event {
            CatalogEvent::SelectCategory(target) => {
                self.quick_view = None;
                self.last_ticket += 1;
                let ticket = self.last_ticket;
                self.pending_switch = Some(PendingSwitch { target, ticket });
                effects.push(Effect::ScheduleCategoryLoad {
                    ticket,
                    delay_ms: CATEGORY_SWITCH_DELAY_MS,
                });
            }
            CatalogEvent::CategoryLoaded { ticket } => {
                // Только последний выбор применяется
                if let Some(pending) = self.pending_switch.filter(|p| p.ticket == ticket) {
                    self.pending_switch = None;
                    self.enter_category(pending.target);
                    effects.push(Effect::SyncUrl(pending.target));
                }
            }
            CatalogEvent::UrlCategoryChanged(raw) => {
                let target = Category::from_query_or_default(raw.as_deref());
                if target != self.category || self.pending_switch.is_some() {
                    self.pending_switch = None;
                    self.enter_category(target);
                }
            }
            CatalogEvent::Search(text) => {
                self.search = text;
                self.quick_view = None;
            }
            CatalogEvent::SetSort(mode) => {
                self.sort = mode;
                self.quick_view = None;
            }
            CatalogEvent::SetGridDensity(grid) => self.grid = grid,
            CatalogEvent::SetShowAll(show_all) => self.show_all = show_all,
            CatalogEvent::SetPage(page) => {
                self.page = clamp_page(page, self.total_pages(catalog));
            }
            CatalogEvent::PrevPage => {
                self.page = clamp_page(self.page as i64 - 1, self.total_pages(catalog));
            }
            CatalogEvent::NextPage => {
                self.page = clamp_page(self.page as i64 + 1, self.total_pages(catalog));
            }
            CatalogEvent::OpenQuickView { slot } => {
                let page = self.page_view(catalog);
                let index = page.absolute_index(slot);
                if slot < page.items.len() && index < page.filtered_count {
                    self.quick_view = Some(index);
                }
            }
            CatalogEvent::CloseQuickView => self.quick_view = None,
        }

        self.clamp(catalog);

        let after = self.preferences();
        if after != before {
            effects.push(Effect::PersistPreferences(after));
        }

        Transition {
            state: self,
            effects,
        }
    }

    /// Сброс поиска, страницы и quick view при смене категории
    fn enter_category(&mut self, category: Category) {
        self.category = category;
        self.search.clear();
        self.page = 1;
        self.quick_view = None;
    }

    fn clamp(&mut self, catalog: &Catalog) {
        self.page = clamp_page(self.page as i64, self.total_pages(catalog));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::global()
    }

    fn fresh(category: &str) -> CatalogViewState {
        CatalogViewState::init(Some(category), Preferences::default(), catalog())
    }

    fn apply(state: CatalogViewState, event: CatalogEvent) -> CatalogViewState {
        state.reduce(event, catalog()).state
    }

    #[test]
    fn test_init_from_url_and_storage() {
        let prefs = Preferences {
            grid: GridDensity::Four,
            sort: SortMode::PriceDesc,
            show_all: true,
            page: 2,
        };
        let state = CatalogViewState::init(Some("outdoor swing"), prefs, catalog());
        assert_eq!(state.category, Category::OutdoorSwing);
        assert_eq!(state.grid, GridDensity::Four);
        assert_eq!(state.sort, SortMode::PriceDesc);
        assert!(state.show_all);
        assert_eq!(state.page, 2);
        assert_eq!(state.phase(), ViewPhase::Idle);
    }

    #[test]
    fn test_init_clamps_stored_page() {
        let prefs = Preferences {
            page: 40,
            ..Preferences::default()
        };
        let state = CatalogViewState::init(None, prefs, catalog());
        assert_eq!(state.category, Category::AcrylicSwing);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_outdoor_scenario() {
        let state = fresh("Outdoor Swing");
        let page = state.page_view(catalog());
        let ids: Vec<u32> = page.items.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, (21..=29).collect::<Vec<_>>());
        assert_eq!((page.page, page.total_pages), (1, 2));

        let state = apply(state, CatalogEvent::NextPage);
        let page = state.page_view(catalog());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.value(), 30);
    }

    #[test]
    fn test_select_category_is_delayed_and_last_write_wins() {
        let state = apply(fresh("Outdoor Swing"), CatalogEvent::OpenQuickView { slot: 0 });
        assert!(matches!(state.phase(), ViewPhase::ModalOpen { .. }));

        let first = state.reduce(CatalogEvent::SelectCategory(Category::WickerSwing), catalog());
        assert_eq!(first.state.phase(), ViewPhase::CategorySwitching);
        assert_eq!(first.state.quick_view, None);
        let first_ticket = match first.effects.as_slice() {
            [Effect::ScheduleCategoryLoad { ticket, delay_ms }] => {
                assert_eq!(*delay_ms, CATEGORY_SWITCH_DELAY_MS);
                *ticket
            }
            other => panic!("unexpected effects {:?}", other),
        };
        assert_eq!(first.state.category, Category::OutdoorSwing);

        let second = first
            .state
            .reduce(CatalogEvent::SelectCategory(Category::WoodenSwing), catalog());
        let second_ticket = second.state.pending_switch.unwrap().ticket;
        assert_ne!(first_ticket, second_ticket);

        // Старый таймер срабатывает первым и игнорируется
        let stale = second
            .state
            .reduce(CatalogEvent::CategoryLoaded { ticket: first_ticket }, catalog());
        assert!(stale.effects.is_empty());
        assert_eq!(stale.state.phase(), ViewPhase::CategorySwitching);

        let done = stale
            .state
            .reduce(CatalogEvent::CategoryLoaded { ticket: second_ticket }, catalog());
        assert_eq!(done.state.category, Category::WoodenSwing);
        assert_eq!(done.state.phase(), ViewPhase::Idle);
        assert!(done.effects.contains(&Effect::SyncUrl(Category::WoodenSwing)));
    }

    #[test]
    fn test_link_back_to_previous_category_after_sidebar_switch() {
        let state = fresh("Acrylic swing");
        let t = state.reduce(CatalogEvent::SelectCategory(Category::WickerSwing), catalog());
        let ticket = t.state.pending_switch.unwrap().ticket;
        let done = t.state.reduce(CatalogEvent::CategoryLoaded { ticket }, catalog());
        assert!(done.effects.contains(&Effect::SyncUrl(Category::WickerSwing)));

        // Роутер возвращает синхронизированный URL: ничего не меняется
        let echoed = done
            .state
            .clone()
            .reduce(CatalogEvent::UrlCategoryChanged(Some("Wicker Swing".into())), catalog());
        assert_eq!(echoed.state, done.state);
        assert!(echoed.effects.is_empty());

        // Ссылка обратно на исходную категорию
        let back = apply(
            echoed.state,
            CatalogEvent::UrlCategoryChanged(Some("Acrylic swing".into())),
        );
        assert_eq!(back.category, Category::AcrylicSwing);
        assert_eq!(back.phase(), ViewPhase::Idle);

        // Ссылка без ?category= ведёт на категорию по умолчанию
        let t = back.reduce(CatalogEvent::SelectCategory(Category::WoodenSwing), catalog());
        let ticket = t.state.pending_switch.unwrap().ticket;
        let done = t.state.reduce(CatalogEvent::CategoryLoaded { ticket }, catalog());
        let reset = apply(done.state, CatalogEvent::UrlCategoryChanged(None));
        assert_eq!(reset.category, Category::default());
    }

    #[test]
    fn test_category_switch_resets_search_page_and_modal() {
        let mut state = fresh("Acrylic swing");
        state = apply(state, CatalogEvent::SetPage(2));
        state = apply(state, CatalogEvent::Search("swing".into()));
        assert_eq!(state.page, 2);

        let t = state.reduce(CatalogEvent::SelectCategory(Category::CarvingSwing), catalog());
        let ticket = t.state.pending_switch.unwrap().ticket;
        let done = t.state.reduce(CatalogEvent::CategoryLoaded { ticket }, catalog());

        assert_eq!(done.state.search, "");
        assert_eq!(done.state.page, 1);
        assert_eq!(done.state.quick_view, None);
        assert!(done
            .effects
            .iter()
            .any(|e| matches!(e, Effect::PersistPreferences(p) if p.page == 1)));
    }

    #[test]
    fn test_url_category_change_applies_immediately() {
        let state = apply(fresh("Acrylic swing"), CatalogEvent::SetPage(2));
        let t = state.reduce(
            CatalogEvent::UrlCategoryChanged(Some("WICKER SWING".into())),
            catalog(),
        );
        assert_eq!(t.state.category, Category::WickerSwing);
        assert_eq!(t.state.page, 1);
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::SyncUrl(_))));

        // Повтор того же значения ничего не меняет
        let again = t
            .state
            .clone()
            .reduce(CatalogEvent::UrlCategoryChanged(Some("Wicker Swing".into())), catalog());
        assert_eq!(again.state, t.state);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_unknown_url_category_falls_back() {
        let state = fresh("Outdoor Swing");
        let state = apply(state, CatalogEvent::UrlCategoryChanged(Some("garden".into())));
        assert_eq!(state.category, Category::AcrylicSwing);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut state = fresh("Outdoor Swing");
        for (requested, expected) in [(0i64, 1usize), (-5, 1), (1, 1), (2, 2), (3, 2), (99, 2)] {
            state = apply(state, CatalogEvent::SetPage(requested));
            assert_eq!(state.page, expected, "requested {}", requested);
        }
        state = apply(state, CatalogEvent::NextPage);
        assert_eq!(state.page, 2);
        state = apply(state, CatalogEvent::PrevPage);
        state = apply(state, CatalogEvent::PrevPage);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_narrowing_clamps_page() {
        let state = apply(fresh("Outdoor Swing"), CatalogEvent::SetPage(2));
        assert_eq!(state.page, 2);
        let state = apply(state, CatalogEvent::Search("swing 1".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.page_view(catalog()).items.len(), 2);

        let state = apply(state, CatalogEvent::Search("no such swing".into()));
        let page = state.page_view(catalog());
        assert_eq!((state.page, page.total_pages), (1, 1));
        assert!(page.is_empty());
    }

    #[test]
    fn test_quick_view_uses_absolute_index() {
        let state = apply(fresh("Outdoor Swing"), CatalogEvent::SetPage(2));
        // На второй странице только один товар
        let missing = apply(state.clone(), CatalogEvent::OpenQuickView { slot: 2 });
        assert_eq!(missing.quick_view, None);

        let state = apply(fresh("Acrylic swing"), CatalogEvent::SetPage(2));
        let state = apply(state, CatalogEvent::Search("".into()));
        let opened = apply(state, CatalogEvent::OpenQuickView { slot: 0 });
        assert_eq!(opened.quick_view, Some(9));
        assert_eq!(opened.quick_view_product(catalog()).unwrap().id.value(), 10);
    }

    #[test]
    fn test_quick_view_third_item_of_second_page() {
        // В стандартном каталоге на второй странице один товар, нужен каталог побольше
        let catalog = Catalog::from_templates(
            &crate::domain::a001_product::DEFAULT_TEMPLATES,
            20,
        );
        let state = CatalogViewState::init(None, Preferences::default(), &catalog);
        let state = state.reduce(CatalogEvent::SetPage(2), &catalog).state;
        let state = state.reduce(CatalogEvent::OpenQuickView { slot: 2 }, &catalog).state;
        assert_eq!(state.quick_view, Some(11));
        assert_eq!(state.phase(), ViewPhase::ModalOpen { index: 11 });
        assert_eq!(state.quick_view_product(&catalog).unwrap().id.value(), 12);

        let state = state.reduce(CatalogEvent::CloseQuickView, &catalog).state;
        assert_eq!(state.phase(), ViewPhase::Idle);
    }

    #[test]
    fn test_sort_closes_modal_and_persists() {
        let state = apply(fresh("Outdoor Swing"), CatalogEvent::OpenQuickView { slot: 1 });
        let t = state.reduce(CatalogEvent::SetSort(SortMode::PriceDesc), catalog());
        assert_eq!(t.state.quick_view, None);
        assert_eq!(
            t.effects,
            vec![Effect::PersistPreferences(Preferences {
                sort: SortMode::PriceDesc,
                ..Preferences::default()
            })]
        );

        let prices: Vec<u32> = t
            .state
            .page_view(catalog())
            .items
            .iter()
            .map(|p| p.price.unwrap())
            .collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_grid_and_show_all_persist() {
        let t = fresh("Outdoor Swing").reduce(CatalogEvent::SetGridDensity(GridDensity::Four), catalog());
        assert!(matches!(
            t.effects.as_slice(),
            [Effect::PersistPreferences(p)] if p.grid == GridDensity::Four
        ));

        let t = t.state.reduce(CatalogEvent::SetShowAll(true), catalog());
        assert_eq!(t.state.page_view(catalog()).items.len(), 10);
        assert!(matches!(
            t.effects.as_slice(),
            [Effect::PersistPreferences(p)] if p.show_all
        ));

        // Повторная установка того же значения не пишет в хранилище
        let t = t.state.reduce(CatalogEvent::SetShowAll(true), catalog());
        assert!(t.effects.is_empty());
    }
}
