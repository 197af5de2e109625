//! Observer pattern for cell re-evaluation events.
//!
//! The notebook notifies every registered observer once per recomputed
//! cell, in topological order.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::graph::CellId;

/// Emitted after a cell has been recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellEvent {
    /// The recomputed cell.
    pub cell: CellId,
    /// Evaluation pass that recomputed it (starts at 1).
    pub generation: u64,
    /// Time spent computing the cell.
    pub duration: Duration,
}

/// Observer trait for receiving cell events.
pub trait CellObserver: Send + Sync {
    /// Receive a cell event.
    fn on_evaluated(&self, event: &CellEvent);
}

/// Subject that manages a collection of observers.
pub struct CellSubject {
    observers: RwLock<Vec<Arc<dyn CellObserver>>>,
}

impl CellSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn CellObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of an event.
    pub fn notify(&self, event: &CellEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_evaluated(event);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for CellSubject {
    fn default() -> Self {
        Self::new()
    }
}
