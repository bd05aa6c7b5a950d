//! Time-boxed memo of the registry name lists.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::registry::records::RegistryKind;

/// Default lifetime of a cached name list.
pub const DEFAULT_NAME_CACHE_TTL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
struct CachedNames {
    names: Vec<String>,
    fetched_at: Instant,
}

#[derive(Debug, Default)]
struct Slots {
    products: Option<CachedNames>,
    distributors: Option<CachedNames>,
}

impl Slots {
    fn slot(&self, kind: RegistryKind) -> Option<&CachedNames> {
        match kind {
            RegistryKind::Products => self.products.as_ref(),
            RegistryKind::Distributors => self.distributors.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: RegistryKind) -> &mut Option<CachedNames> {
        match kind {
            RegistryKind::Products => &mut self.products,
            RegistryKind::Distributors => &mut self.distributors,
        }
    }
}

#[derive(Debug)]
pub(crate) struct NameCache {
    ttl: Duration,
    slots: RwLock<Slots>,
}

impl NameCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: RwLock::new(Slots::default()),
        }
    }

    /// Cached names for `kind`, if present and younger than the TTL.
    pub(crate) async fn get(&self, kind: RegistryKind) -> Option<Vec<String>> {
        let slots = self.slots.read().await;

        slots
            .slot(kind)
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.names.clone())
    }

    pub(crate) async fn store(&self, kind: RegistryKind, names: Vec<String>) {
        let mut slots = self.slots.write().await;

        *slots.slot_mut(kind) = Some(CachedNames {
            names,
            fetched_at: Instant::now(),
        });
    }

    /// Drop every cached list; any registry write calls this.
    pub(crate) async fn invalidate(&self) {
        let mut slots = self.slots.write().await;

        *slots = Slots::default();

        debug!("registry name cache cleared");
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn empty_cache_misses() {
        let cache = NameCache::default();

        assert_eq!(cache.get(RegistryKind::Products).await, None);
    }

    #[tokio::test]
    async fn stored_names_are_returned_per_kind() {
        let cache = NameCache::default();

        cache
            .store(RegistryKind::Products, names(&["FLOUR", "SUGAR"]))
            .await;

        assert_eq!(
            cache.get(RegistryKind::Products).await,
            Some(names(&["FLOUR", "SUGAR"]))
        );
        assert_eq!(cache.get(RegistryKind::Distributors).await, None);
    }

    #[tokio::test]
    async fn zero_ttl_never_serves_stale_names() {
        let cache = NameCache::new(Duration::ZERO);

        cache
            .store(RegistryKind::Distributors, names(&["METRO"]))
            .await;

        assert_eq!(cache.get(RegistryKind::Distributors).await, None);
    }

    #[tokio::test]
    async fn invalidate_clears_both_lists() {
        let cache = NameCache::default();

        cache.store(RegistryKind::Products, names(&["FLOUR"])).await;
        cache
            .store(RegistryKind::Distributors, names(&["METRO"]))
            .await;

        cache.invalidate().await;

        assert_eq!(cache.get(RegistryKind::Products).await, None);
        assert_eq!(cache.get(RegistryKind::Distributors).await, None);
    }
}
