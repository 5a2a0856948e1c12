use std::sync::Arc;

use strata_io::{Sink, Source, Store, Transformation};
use tracing::{debug, trace};

use crate::error::{ComposeError, ComposeResult};
use crate::store::TransformedStore;

/// Folds transformations into one and optionally binds the result to a
/// store.
///
/// ```
/// use strata_compose::Composer;
/// use strata_codec::{Crc32Trailer, ReverseBytes};
///
/// let composer = Composer::start(ReverseBytes).append(Crc32Trailer);
/// assert_eq!(composer.depth(), 2);
/// let composed = composer.build();
/// # let _ = composed;
/// ```
///
/// For `start(t1).append(t2)…append(tn)`, data written through the composed
/// transformation is encoded by `t1` first and by `tn` last; data read is
/// decoded by `tn` first and by `t1` last.
pub struct Composer {
    current: Arc<dyn Transformation>,
    depth: usize,
}

impl Composer {
    /// Seed a composer with its first transformation.
    pub fn start<T: Transformation + 'static>(initial: T) -> Self {
        Self::seeded(Arc::new(initial))
    }

    /// Compose every transformation yielded by `chain`, in order.
    ///
    /// Fails with [`ComposeError::EmptyChain`] if `chain` is empty.
    pub fn from_chain<I, T>(chain: I) -> ComposeResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Transformation + 'static,
    {
        let mut chain = chain.into_iter();
        let initial = chain.next().ok_or(ComposeError::EmptyChain)?;
        Ok(chain.fold(Self::start(initial), Self::append))
    }

    fn seeded(current: Arc<dyn Transformation>) -> Self {
        Self { current, depth: 1 }
    }

    /// Apply `next` after everything composed so far.
    ///
    /// The new composition writes through the current one first and then
    /// through `next`, and reads through `next` first.
    pub fn append<T: Transformation + 'static>(mut self, next: T) -> Self {
        self.current = Arc::new(Composite {
            previous: Arc::clone(&self.current),
            next: Arc::new(next),
        });
        self.depth += 1;
        trace!(depth = self.depth, "appended transformation");
        self
    }

    /// The composed transformation.
    ///
    /// Calling this again without an intervening [`append`](Self::append)
    /// returns the same composition.
    pub fn build(&self) -> Arc<dyn Transformation> {
        Arc::clone(&self.current)
    }

    /// Bind the current composition to `store`.
    ///
    /// The returned view captures the composition as it is now; appending to
    /// this composer afterwards does not affect it.
    pub fn bind<S: Store>(&self, store: S) -> TransformedStore<S> {
        debug!(depth = self.depth, "bound composed transformation to store");
        TransformedStore::new(store, self.build())
    }

    /// Number of transformations folded into the composition.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl From<Arc<dyn Transformation>> for Composer {
    fn from(initial: Arc<dyn Transformation>) -> Self {
        Self::seeded(initial)
    }
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer").field("depth", &self.depth).finish()
    }
}

/// `previous` composed with `next`: writes go through `previous` and then
/// `next`; reads come back through `next` and then `previous`.
struct Composite {
    previous: Arc<dyn Transformation>,
    next: Arc<dyn Transformation>,
}

impl Transformation for Composite {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        self.previous.apply(self.next.apply(sink))
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        self.previous.unapply(self.next.unapply(source))
    }
}
