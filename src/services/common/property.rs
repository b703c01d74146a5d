use std::{fmt, sync::Arc};

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Observable state owned by a service.
///
/// The owning service is the only writer; readers take snapshots with
/// [`Property::get`] or follow changes through [`Property::watch`]. Clones
/// share the same value.
#[derive(Clone)]
pub struct Property<T> {
    cell: Arc<watch::Sender<T>>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Creates the property holding `initial`.
    pub fn new(initial: T) -> Self {
        let (cell, _) = watch::channel(initial);
        Self {
            cell: Arc::new(cell),
        }
    }

    /// Stores `value`, waking watchers only when it differs from the current
    /// one. Returns whether it did.
    pub(crate) fn set(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        self.cell.send_if_modified(|current| {
            let changed = *current != value;
            if changed {
                *current = value;
            }
            changed
        })
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }

    /// Stream starting with the current value, then every change.
    ///
    /// Intermediate values are skipped when the watcher falls behind.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + 'static {
        WatchStream::new(self.cell.subscribe())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.cell.borrow()).finish()
    }
}
