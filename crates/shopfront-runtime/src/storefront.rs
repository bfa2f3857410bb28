use crate::detail::DetailController;
use crate::list::ListController;
use shopfront_source::ProductSource;
use std::sync::Arc;

/// Entry point for the storefront runtime: wraps one product source and
/// mints controllers backed by it.
///
/// Controllers share the source but never each other's state; each owns its
/// phase machine exclusively.
pub struct Storefront<S> {
    source: Arc<S>,
}

impl<S: ProductSource> Storefront<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> Arc<S> {
        self.source.clone()
    }

    /// A fresh listing controller (Loading phase, default criteria).
    pub fn list(&self) -> ListController<S> {
        ListController::new(self.source.clone())
    }

    /// A fresh detail controller (Loading phase, default view state).
    pub fn detail(&self) -> DetailController<S> {
        DetailController::new(self.source.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListPhase;
    use shopfront_testing::{ScriptedSource, fixtures};

    #[tokio::test]
    async fn test_controllers_are_independent() {
        let storefront = Storefront::new(ScriptedSource::new(
            fixtures::storefront_catalog(),
            fixtures::storefront_categories(),
        ));

        let first = storefront.list();
        let second = storefront.list();
        first.load().await;

        // A recreated controller starts over: fresh phase, fresh criteria
        assert!(first.phase().is_ready());
        assert!(matches!(second.phase(), ListPhase::Loading));
    }
}
