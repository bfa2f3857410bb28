use shopfront_engine::CatalogSummary;
use shopfront_source::ProductSource;
use shopfront_types::{Category, CategoryFilter, Criteria, Product, SortKey};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Phase of the listing view state machine
#[derive(Debug, Clone)]
pub enum ListPhase {
    /// Initial phase, re-entered on every load/retry
    Loading,
    /// Fetch failed; `load()` again to retry
    Error { message: String },
    /// Catalog loaded; `visible` is derived from the current criteria
    Ready(CatalogView),
}

impl ListPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, ListPhase::Ready(_))
    }
}

/// Loaded catalog plus the criteria-derived visible list
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub visible: Vec<Product>,
}

struct ListState {
    phase: ListPhase,
    criteria: Criteria,
}

/// Controller for the listing view.
///
/// Owns the full product list, the category list and the active criteria.
/// Criteria outlive individual loads (a retry keeps the user's selections);
/// they reset only when the controller itself is recreated.
pub struct ListController<S> {
    source: Arc<S>,
    state: Arc<Mutex<ListState>>,
    load_epoch: Arc<AtomicU64>,
}

impl<S: ProductSource> ListController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(ListState {
                phase: ListPhase::Loading,
                criteria: Criteria::default(),
            })),
            load_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch products and categories, replacing any previous catalog.
    ///
    /// Both fetches run concurrently and both must succeed. If another
    /// `load()` starts while this one is in flight, this one's result is
    /// disregarded when it settles.
    pub async fn load(&self) {
        let token = self.load_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().unwrap().phase = ListPhase::Loading;

        let result = futures::future::try_join(
            self.source.list_products(),
            self.source.list_categories(),
        )
        .await;

        let mut state = self.state.lock().unwrap();
        if self.load_epoch.load(Ordering::SeqCst) != token {
            debug!(token, "discarding stale catalog load");
            return;
        }

        state.phase = match result {
            Ok((products, categories)) => {
                let visible = shopfront_engine::apply(&products, &state.criteria);
                debug!(
                    products = products.len(),
                    categories = categories.len(),
                    "catalog loaded"
                );
                ListPhase::Ready(CatalogView {
                    products,
                    categories,
                    visible,
                })
            }
            Err(err) => ListPhase::Error {
                message: err.to_string(),
            },
        };
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.update_criteria(|criteria| criteria.category = category);
    }

    pub fn set_search(&self, search: impl Into<String>) {
        let search = search.into();
        self.update_criteria(|criteria| criteria.search = search);
    }

    pub fn set_sort(&self, sort: SortKey) {
        self.update_criteria(|criteria| criteria.sort = sort);
    }

    /// Reset category and search; the sort key is kept.
    pub fn clear_filters(&self) {
        self.update_criteria(|criteria| criteria.clear_filters());
    }

    pub fn phase(&self) -> ListPhase {
        self.state.lock().unwrap().phase.clone()
    }

    pub fn criteria(&self) -> Criteria {
        self.state.lock().unwrap().criteria.clone()
    }

    /// Result-count summary for the current Ready view, None otherwise.
    pub fn summary(&self) -> Option<CatalogSummary> {
        let state = self.state.lock().unwrap();
        match &state.phase {
            ListPhase::Ready(view) => Some(shopfront_engine::summarize(
                &view.visible,
                &view.products,
                &state.criteria,
            )),
            _ => None,
        }
    }

    fn update_criteria(&self, mutate: impl FnOnce(&mut Criteria)) {
        let mut state = self.state.lock().unwrap();
        mutate(&mut state.criteria);

        // Visible list is a pure function of (products, criteria); re-derive
        // whenever criteria change while a catalog is loaded.
        if let ListState {
            phase: ListPhase::Ready(view),
            criteria,
        } = &mut *state
        {
            view.visible = shopfront_engine::apply(&view.products, criteria);
        }
    }
}
