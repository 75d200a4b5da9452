//! Shared Tracker
//!
//! A toggle reads the completed set and then rewrites it in two cascades, so
//! two toggles must never interleave. `SharedTracker` serialises access behind
//! a mutex for hosts that drive the tracker from more than one thread.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use super::tracker::{CompletionTracker, Status, ToggleOutcome};

/// A cloneable handle to a tracker guarded by a mutex.
#[derive(Debug, Clone)]
pub struct SharedTracker {
    inner: Arc<Mutex<CompletionTracker>>,
}

impl SharedTracker {
    /// Wrap a tracker.
    pub fn new(tracker: CompletionTracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Toggle a course. The whole cascade runs under the lock.
    pub fn toggle(&self, id: &str) -> Option<ToggleOutcome> {
        self.inner.lock().toggle(id)
    }

    /// Status of a course.
    pub fn status(&self, id: &str) -> Option<Status> {
        self.inner.lock().status(id)
    }

    /// Snapshot of every course's status.
    pub fn statuses(&self) -> IndexMap<String, Status> {
        self.inner.lock().statuses()
    }

    /// Run a read-only closure against the tracker while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&CompletionTracker) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<CompletionTracker> for SharedTracker {
    fn from(tracker: CompletionTracker) -> Self {
        Self::new(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Course, CurriculumGraph, Link};
    use std::thread;

    #[test]
    fn concurrent_toggles_stay_consistent() {
        let ids: Vec<String> = (0..20).map(|i| format!("C{i}")).collect();
        let graph = CurriculumGraph::from_parts(
            ids.iter().map(|id| Course::new(id.as_str(), id.as_str(), 1, "Core")),
            ids.windows(2).map(|pair| Link::new(pair[0].as_str(), pair[1].as_str())),
        );
        let shared = SharedTracker::from(CompletionTracker::new(Arc::new(graph)));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for round in 0..50 {
                        shared.toggle(&format!("C{}", (worker * 7 + round * 3) % 20));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(shared.read(CompletionTracker::is_consistent));
    }

    #[test]
    fn status_goes_through_the_lock() {
        let graph = CurriculumGraph::from_parts(
            [Course::new("A", "A", 1, "Core")],
            Vec::<Link>::new(),
        );
        let shared = SharedTracker::new(CompletionTracker::new(Arc::new(graph)));
        shared.toggle("A");
        assert_eq!(shared.status("A"), Some(Status::Completed));
        assert_eq!(shared.statuses().len(), 1);
    }
}
