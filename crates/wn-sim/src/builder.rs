//! Fluent builder for constructing a [`NetworkCore`].

use wn_core::CostModel;
use wn_resolve::{PathBook, PathSearch};

use crate::{NetworkCore, SimResult};

/// Fluent builder for [`NetworkCore<S>`].
///
/// # Required inputs
///
/// - `S: PathSearch`: the search engine (e.g. [`wn_resolve::LinearDijkstra`])
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.cost_model(m)`     | `CostModel::default()` (1.25, 0.01) |
/// | `.requests(book)`    | empty `PathBook`                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut core = CoreBuilder::new(HeapDijkstra)
///     .cost_model(CostModel { maintenance_penalty: 1.5, ..Default::default() })
///     .build()?;
/// ```
pub struct CoreBuilder<S: PathSearch> {
    search:     S,
    cost_model: Option<CostModel>,
    requests:   Option<PathBook>,
}

impl<S: PathSearch> CoreBuilder<S> {
    pub fn new(search: S) -> Self {
        Self {
            search,
            cost_model: None,
            requests:   None,
        }
    }

    /// Override the edge cost tuning.
    pub fn cost_model(mut self, model: CostModel) -> Self {
        self.cost_model = Some(model);
        self
    }

    /// Start with an existing set of outstanding requests.
    pub fn requests(mut self, book: PathBook) -> Self {
        self.requests = Some(book);
        self
    }

    /// Validate inputs and return a core holding the empty version-0
    /// snapshot.
    pub fn build(self) -> SimResult<NetworkCore<S>> {
        let cost_model = self.cost_model.unwrap_or_default();
        cost_model.validate()?;

        Ok(NetworkCore::new(
            self.search,
            cost_model,
            self.requests.unwrap_or_default(),
        ))
    }
}
