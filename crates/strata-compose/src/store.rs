use std::io;
use std::sync::Arc;

use strata_io::{InputStream, OutputStream, Sink, Source, Store, Transformation};

/// A store viewed through a composed transformation.
///
/// Output streams encode through the transformation before reaching the
/// underlying store and input streams decode on the way back. `exists` and
/// `delete` go straight to the underlying store.
///
/// The transformation is fixed when the view is created. Each `input` and
/// `output` call wraps the underlying store afresh, so the view holds no
/// per-call state of its own.
pub struct TransformedStore<S> {
    store: S,
    transformation: Arc<dyn Transformation>,
}

impl<S: Store> TransformedStore<S> {
    pub fn new(store: S, transformation: Arc<dyn Transformation>) -> Self {
        Self {
            store,
            transformation,
        }
    }

    /// The underlying store, without the transformation.
    pub fn raw(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: Store> Source for TransformedStore<S> {
    fn input(&self) -> io::Result<InputStream> {
        self.transformation.unapply(Box::new(&self.store)).input()
    }
}

impl<S: Store> Sink for TransformedStore<S> {
    fn output(&self) -> io::Result<OutputStream> {
        self.transformation.apply(Box::new(&self.store)).output()
    }
}

impl<S: Store> Store for TransformedStore<S> {
    fn exists(&self) -> io::Result<bool> {
        self.store.exists()
    }

    fn delete(&self) -> io::Result<()> {
        self.store.delete()
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for TransformedStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformedStore")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
