/// Tunables for a [`crate::Pager`].
///
/// `max_cache_size` is accepted and stored but not enforced: the cache is
/// an unbounded `HashMap` for now. Wiring up eviction would mean adding an
/// LRU policy over clean pages (dirty pages can't be evicted without a
/// flush first) — not needed until something actually fills the cache.
#[derive(Debug, Clone, Copy)]
pub struct PagerConfig {
    /// Size, in bytes, of every page. Every `Pager` in this workspace uses 4096.
    pub page_size: usize,
    /// Soft bound on the number of cached pages. Not currently enforced.
    pub max_cache_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: page::PAGE_SIZE,
            max_cache_size: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_page_size_constant() {
        let config = PagerConfig::default();
        assert_eq!(config.page_size, page::PAGE_SIZE);
    }
}
