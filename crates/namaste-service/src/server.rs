//! Shared server state and query execution.

use std::sync::Arc;
use std::time::Duration;

use namaste_loader::CodeStore;
use namaste_resolver::{
    RecordStore, ResolverConfig, ResolverResult, StoreError, TerminologyResolver,
};

/// Resolver over a shared, type-erased record store.
pub type SharedResolver = TerminologyResolver<Arc<dyn RecordStore>>;

/// NAMASTE terminology server state, cloned into every handler.
#[derive(Clone)]
pub struct TerminologyServer {
    resolver: Arc<SharedResolver>,
    query_timeout: Duration,
}

impl TerminologyServer {
    /// Creates a server over any record store.
    pub fn new(store: Arc<dyn RecordStore>, config: ResolverConfig, query_timeout: Duration) -> Self {
        Self {
            resolver: Arc::new(TerminologyResolver::with_config(store, config)),
            query_timeout,
        }
    }

    /// Creates a server over a loaded code store.
    pub fn from_code_store(store: CodeStore, config: ResolverConfig, query_timeout: Duration) -> Self {
        Self::new(Arc::new(store), config, query_timeout)
    }

    /// Returns the resolver.
    pub fn resolver(&self) -> &SharedResolver {
        &self.resolver
    }

    /// Returns the per-query timeout.
    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Runs a resolver call on the blocking pool, bounded by the query timeout.
    ///
    /// Running past the timeout yields `StoreError::Timeout`; a panicked or
    /// cancelled task yields `StoreError::Unavailable`.
    pub async fn run<T, F>(&self, query: F) -> ResolverResult<T>
    where
        F: FnOnce(&SharedResolver) -> ResolverResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let resolver = Arc::clone(&self.resolver);
        let task = tokio::task::spawn_blocking(move || query(&resolver));

        match tokio::time::timeout(self.query_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(StoreError::Unavailable(join_error.to_string()).into()),
            Err(_) => Err(StoreError::Timeout {
                elapsed_ms: self.query_timeout.as_millis() as u64,
            }
            .into()),
        }
    }
}

impl std::fmt::Debug for TerminologyServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminologyServer")
            .field("resolver", &self.resolver)
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}
