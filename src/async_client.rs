//! Async wrapper around [`Ygodeck`] for use in async runtimes.
//!
//! Runs all service operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Catalog reads and deck statements are short, local, CPU/disk-bound work,
//! making this approach efficient.
//!
//! # Example
//!
//! ```no_run
//! use ygodeck::AsyncYgodeck;
//!
//! #[tokio::main]
//! async fn main() {
//!     let svc = AsyncYgodeck::builder().build().await.unwrap();
//!
//!     let cards = svc
//!         .run(|s| Ok(s.cards().search(&Default::default())))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, YgodeckError};
use crate::models::DeckRules;
use crate::Ygodeck;

// ---------------------------------------------------------------------------
// AsyncYgodeckBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncYgodeck`] instance.
#[derive(Default)]
pub struct AsyncYgodeckBuilder {
    data_dir: Option<PathBuf>,
    catalog_ttl: Option<Duration>,
    rules: Option<DeckRules>,
}

impl AsyncYgodeckBuilder {
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = Some(ttl);
        self
    }

    pub fn rules(mut self, rules: DeckRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build the async service. Initialization (directory and schema
    /// creation) runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncYgodeck> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Ygodeck::builder();
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(ttl) = self.catalog_ttl {
                builder = builder.catalog_ttl(ttl);
            }
            if let Some(rules) = self.rules {
                builder = builder.rules(rules);
            }
            Ok(AsyncYgodeck::wrap(builder.build()?))
        })
        .await
        .map_err(|e| YgodeckError::Store(format!("task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncYgodeck
// ---------------------------------------------------------------------------

/// Async handle over a [`Ygodeck`] service.
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The mutex both satisfies the runtime's
/// `Send` requirements and serializes deck-store statements.
#[derive(Clone)]
pub struct AsyncYgodeck {
    inner: Arc<Mutex<Ygodeck>>,
}

impl AsyncYgodeck {
    pub fn builder() -> AsyncYgodeckBuilder {
        AsyncYgodeckBuilder::default()
    }

    /// Wrap an already-built sync service, e.g. one constructed with a test
    /// clock.
    pub fn wrap(service: Ygodeck) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Run a sync service operation on the blocking thread pool.
    ///
    /// The closure receives a `&Ygodeck` reference and returns a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Ygodeck) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let svc = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = svc
                .lock()
                .map_err(|_| YgodeckError::Store("service lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| YgodeckError::Store(format!("task join error: {e}")))?
    }
}
