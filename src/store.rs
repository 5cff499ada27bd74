//! Single-slot storage for the current target name.

use std::sync::{PoisonError, RwLock};

/// Holds at most one target name. Last write wins; no history is kept.
pub trait TargetStore: Send + Sync {
    fn get_target(&self) -> Option<String>;
    fn set_target(&self, name: String);
}

/// In-process [`TargetStore`] guarded by a single `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryTargetStore {
    slot: RwLock<Option<String>>,
}

impl InMemoryTargetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `name`.
    pub fn with_target(name: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(name.into())),
        }
    }

    pub fn has_target(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl TargetStore for InMemoryTargetStore {
    fn get_target(&self) -> Option<String> {
        // A poisoned slot still holds a complete value.
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_target(&self, name: String) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_empty() {
        let store = InMemoryTargetStore::new();
        assert_eq!(store.get_target(), None);
        assert!(!store.has_target());
    }

    #[test]
    fn last_write_wins() {
        let store = InMemoryTargetStore::new();
        store.set_target("Ahmed Al-Rashid".into());
        store.set_target("John Smith".into());
        assert_eq!(store.get_target().as_deref(), Some("John Smith"));
    }

    #[test]
    fn with_target_prepopulates() {
        let store = InMemoryTargetStore::with_target("Bill Smith");
        assert!(store.has_target());
        assert_eq!(store.get_target().as_deref(), Some("Bill Smith"));
    }

    #[test]
    fn concurrent_writers_leave_one_value() {
        let store = Arc::new(InMemoryTargetStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.set_target(format!("name-{i}"));
                        assert!(store.get_target().is_some());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let last = store.get_target().unwrap();
        assert!(last.starts_with("name-"));
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let store = Arc::new(InMemoryTargetStore::with_target("before"));
        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.slot.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.get_target().as_deref(), Some("before"));
        store.set_target("after".into());
        assert_eq!(store.get_target().as_deref(), Some("after"));
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Arc<dyn TargetStore> = Arc::new(InMemoryTargetStore::new());
        store.set_target("Mary".into());
        assert_eq!(store.get_target().as_deref(), Some("Mary"));
    }
}
