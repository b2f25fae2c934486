//! Product page cache
//!
//! Products are cached together with the tag set derived from them, so a
//! change to any course, section or lesson in the tree can evict exactly the
//! pages that rendered it.

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use storefront::{
    catalog::{ProductUuid, PublicProduct},
    tags::{CacheTagSet, derive_product_tags},
};

#[derive(Debug)]
struct CachedProduct {
    product: Arc<PublicProduct>,
    tags: CacheTagSet,
}

#[derive(Debug, Default)]
struct Entries {
    products: FxHashMap<ProductUuid, CachedProduct>,
    generation: u64,
}

/// Invalidation epoch observed before a load.
///
/// A load that started before an invalidation must not be cached, since the
/// invalidation could not evict what was not there yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeneration(u64);

/// In-process tag-indexed cache of public products.
#[derive(Debug, Default)]
pub struct TagCache {
    entries: RwLock<Entries>,
}

impl TagCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached product, if present.
    pub fn get(&self, product: ProductUuid) -> Option<(Arc<PublicProduct>, CacheTagSet)> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        entries
            .products
            .get(&product)
            .map(|entry| (Arc::clone(&entry.product), entry.tags.clone()))
    }

    /// Current invalidation epoch. Read it before loading a product that will
    /// be passed to [`TagCache::associate_tags`].
    pub fn generation(&self) -> CacheGeneration {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        CacheGeneration(entries.generation)
    }

    /// Cache `product` under the tags derived from its tree, replacing any
    /// previous entry. Returns the product and its tags.
    ///
    /// Nothing is cached when an invalidation ran after `loaded_at`.
    pub fn associate_tags(
        &self,
        product: PublicProduct,
        loaded_at: CacheGeneration,
    ) -> (Arc<PublicProduct>, CacheTagSet) {
        let tags = derive_product_tags(&product);
        let product = Arc::new(product);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if entries.generation != loaded_at.0 {
            tracing::debug!(
                product_uuid = %product.id,
                "skipping cache insert for product loaded before an invalidation"
            );

            return (product, tags);
        }

        entries.products.insert(
            product.id,
            CachedProduct {
                product: Arc::clone(&product),
                tags: tags.clone(),
            },
        );

        (product, tags)
    }

    /// Evict every entry carrying at least one of `tags`, returning how many
    /// were evicted.
    pub fn invalidate(&self, tags: &CacheTagSet) -> usize {
        if tags.is_empty() {
            return 0;
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.products.len();

        entries.generation = entries.generation.wrapping_add(1);
        entries
            .products
            .retain(|_, entry| !entry.tags.intersects(tags));

        before - entries.products.len()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .products
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
