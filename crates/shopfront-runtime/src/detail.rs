use shopfront_source::ProductSource;
use shopfront_types::{Product, ProductId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long the add-to-cart acknowledgement stays set after the most
/// recent add.
const ACK_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Phase of the detail view state machine
#[derive(Debug, Clone)]
pub enum DetailPhase {
    Loading,
    /// `retryable` is false for the not-found case, which offers only
    /// navigation away
    Error { message: String, retryable: bool },
    Ready(Product),
}

impl DetailPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, DetailPhase::Ready(_))
    }
}

/// Snapshot of the detail view: the product plus its transient UI state
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: Product,
    pub quantity: u32,
    pub wishlisted: bool,
    pub cart_ack: bool,
}

struct DetailState {
    phase: DetailPhase,
    // Transient view state lives at controller scope, not per-load: it
    // survives navigation between products and retries, and disappears
    // with the controller.
    quantity: u32,
    wishlisted: bool,
    cart_ack: bool,
    ack_generation: u64,
    ack_timer: Option<JoinHandle<()>>,
}

impl Drop for DetailState {
    fn drop(&mut self) {
        if let Some(timer) = self.ack_timer.take() {
            timer.abort();
        }
    }
}

/// Controller for the product detail view, keyed by product id.
///
/// `load()` with a different id restarts from Loading; a superseded fetch's
/// result is disregarded. The acknowledgement timer is the only scheduled
/// background task and dies with the controller.
pub struct DetailController<S> {
    source: Arc<S>,
    state: Arc<Mutex<DetailState>>,
    load_epoch: Arc<AtomicU64>,
}

impl<S: ProductSource> DetailController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(DetailState {
                phase: DetailPhase::Loading,
                quantity: 1,
                wishlisted: false,
                cart_ack: false,
                ack_generation: 0,
                ack_timer: None,
            })),
            load_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch the product for `id`, re-entering Loading.
    pub async fn load(&self, id: ProductId) {
        let token = self.load_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().unwrap().phase = DetailPhase::Loading;

        let result = self.source.get_product(id).await;

        let mut state = self.state.lock().unwrap();
        if self.load_epoch.load(Ordering::SeqCst) != token {
            debug!(%id, token, "discarding stale product load");
            return;
        }

        state.phase = match result {
            Ok(product) => DetailPhase::Ready(product),
            Err(err) => {
                let retryable = !err.is_not_found();
                DetailPhase::Error {
                    message: err.to_string(),
                    retryable,
                }
            }
        };
    }

    pub fn increment_quantity(&self) {
        let mut state = self.state.lock().unwrap();
        state.quantity = state.quantity.saturating_add(1);
    }

    /// Decrement with a floor of 1.
    pub fn decrement_quantity(&self) {
        let mut state = self.state.lock().unwrap();
        if state.quantity > 1 {
            state.quantity -= 1;
        }
    }

    /// Direct quantity entry. Anything that is not a positive integer in
    /// range is ignored without a state change (the original UI silently
    /// rejects such input).
    pub fn set_quantity(&self, value: i64) {
        let Ok(value) = u32::try_from(value) else {
            return;
        };
        if value < 1 {
            return;
        }
        self.state.lock().unwrap().quantity = value;
    }

    pub fn toggle_wishlist(&self) {
        let mut state = self.state.lock().unwrap();
        state.wishlisted = !state.wishlisted;
    }

    /// Set the acknowledgement flag and (re)start the clear timer.
    ///
    /// Re-invoking before expiry restarts the timer instead of letting the
    /// earlier one fire: the flag stays continuously set until
    /// `ACK_CLEAR_DELAY` after the most recent call. Must run inside a tokio
    /// runtime.
    pub fn add_to_cart(&self) {
        let mut state = self.state.lock().unwrap();
        state.cart_ack = true;
        state.ack_generation += 1;
        let generation = state.ack_generation;

        if let Some(previous) = state.ack_timer.take() {
            previous.abort();
        }

        // The timer holds only a weak reference so a dropped controller is
        // never kept alive (or mutated) by a pending clear. The deadline is
        // anchored here, at the add itself, not at the task's first poll.
        let deadline = tokio::time::Instant::now() + ACK_CLEAR_DELAY;
        let weak: Weak<Mutex<DetailState>> = Arc::downgrade(&self.state);
        state.ack_timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(state) = weak.upgrade() {
                let mut state = state.lock().unwrap();
                if state.ack_generation == generation {
                    state.cart_ack = false;
                    state.ack_timer = None;
                }
            }
        }));
    }

    pub fn phase(&self) -> DetailPhase {
        self.state.lock().unwrap().phase.clone()
    }

    /// Full view snapshot, None outside Ready.
    pub fn view(&self) -> Option<ProductView> {
        let state = self.state.lock().unwrap();
        match &state.phase {
            DetailPhase::Ready(product) => Some(ProductView {
                product: product.clone(),
                quantity: state.quantity,
                wishlisted: state.wishlisted,
                cart_ack: state.cart_ack,
            }),
            _ => None,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.state.lock().unwrap().quantity
    }

    pub fn is_wishlisted(&self) -> bool {
        self.state.lock().unwrap().wishlisted
    }

    pub fn cart_acknowledged(&self) -> bool {
        self.state.lock().unwrap().cart_ack
    }
}
