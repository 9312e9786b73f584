//! Provider registry
//!
//! Decides which provider handles a call. Precedence, highest first:
//!
//! 1. a provider passed explicitly for this call,
//! 2. a default installed with [`ProviderRegistry::set_default`],
//! 3. the built-in provider, constructed on first use and cached.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ports::{NotificationProvider, ProviderError};

/// Builds the built-in provider
pub type ProviderFactory =
    Box<dyn Fn() -> Result<Arc<dyn NotificationProvider>, ProviderError> + Send + Sync>;

/// Holds the default provider slots. Shareable across threads.
pub struct ProviderRegistry {
    default_override: Mutex<Option<Arc<dyn NotificationProvider>>>,
    builtin: Mutex<Option<Arc<dyn NotificationProvider>>>,
    factory: ProviderFactory,
}

impl ProviderRegistry {
    /// Create a registry whose built-in provider comes from `factory`.
    ///
    /// The factory runs at most once per successful construction; a
    /// failure is returned to the caller and not cached.
    pub fn with_builtin<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn NotificationProvider>, ProviderError> + Send + Sync + 'static,
    {
        Self {
            default_override: Mutex::new(None),
            builtin: Mutex::new(None),
            factory: Box::new(factory),
        }
    }

    /// Install a provider used by every call without an explicit one
    pub fn set_default(&self, provider: Arc<dyn NotificationProvider>) {
        tracing::debug!(provider = provider.name(), "default provider set");
        *lock(&self.default_override) = Some(provider);
    }

    /// Remove the installed default, falling back to the built-in provider
    pub fn reset_default(&self) {
        if lock(&self.default_override).take().is_some() {
            tracing::debug!("default provider reset");
        }
    }

    /// Current default: the installed one, else the cached built-in
    pub fn default_provider(&self) -> Result<Arc<dyn NotificationProvider>, ProviderError> {
        if let Some(provider) = lock(&self.default_override).as_ref() {
            return Ok(Arc::clone(provider));
        }
        self.builtin_provider()
    }

    /// Provider for one call: `explicit` if given, else the default
    pub fn resolve(
        &self,
        explicit: Option<Arc<dyn NotificationProvider>>,
    ) -> Result<Arc<dyn NotificationProvider>, ProviderError> {
        match explicit {
            Some(provider) => Ok(provider),
            None => self.default_provider(),
        }
    }

    fn builtin_provider(&self) -> Result<Arc<dyn NotificationProvider>, ProviderError> {
        let mut slot = lock(&self.builtin);
        if let Some(provider) = slot.as_ref() {
            return Ok(Arc::clone(provider));
        }

        let provider = (self.factory)()?;
        tracing::debug!(provider = provider.name(), "built-in provider constructed");
        *slot = Some(Arc::clone(&provider));
        Ok(provider)
    }
}

// Slots hold plain values, so a panic elsewhere cannot leave them half-written
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationRequest;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct NamedProvider(&'static str);

    #[async_trait]
    impl NotificationProvider for NamedProvider {
        fn name(&self) -> &str {
            self.0
        }

        async fn send(&self, _request: &NotificationRequest) -> Result<bool, ProviderError> {
            Ok(true)
        }
    }

    fn counting_registry(builds: Arc<AtomicUsize>) -> ProviderRegistry {
        ProviderRegistry::with_builtin(move || {
            builds.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(NamedProvider("builtin")) as Arc<dyn NotificationProvider>)
        })
    }

    #[test]
    fn builtin_is_lazy_and_cached() {
        let builds = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(Arc::clone(&builds));
        assert_eq!(builds.load(Ordering::SeqCst), 0);

        let first = registry.default_provider().unwrap();
        let second = registry.default_provider().unwrap();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "builtin");
    }

    #[test]
    fn installed_default_wins_over_builtin() {
        let builds = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(Arc::clone(&builds));

        registry.set_default(Arc::new(NamedProvider("global")));

        assert_eq!(registry.default_provider().unwrap().name(), "global");
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn explicit_wins_over_everything() {
        let builds = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(Arc::clone(&builds));
        registry.set_default(Arc::new(NamedProvider("global")));

        let resolved = registry
            .resolve(Some(Arc::new(NamedProvider("explicit"))))
            .unwrap();

        assert_eq!(resolved.name(), "explicit");
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn reset_restores_cached_builtin() {
        let builds = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(Arc::clone(&builds));
        let builtin = registry.default_provider().unwrap();

        registry.set_default(Arc::new(NamedProvider("global")));
        registry.reset_default();
        registry.reset_default();

        let restored = registry.default_provider().unwrap();
        assert!(Arc::ptr_eq(&builtin, &restored));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_construction_is_not_cached() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let registry = ProviderRegistry::with_builtin(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::backend_unavailable("no session bus"))
        });

        assert!(registry.default_provider().err().unwrap().is_backend_unavailable());
        assert!(registry.default_provider().is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        let registry = Arc::new(counting_registry(Arc::new(AtomicUsize::new(0))));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.default_provider().map(|p| p.name().to_string())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "builtin");
        }
    }
}
