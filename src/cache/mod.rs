mod key_pool;
mod lru;
mod recognition;
mod stats;

pub use key_pool::RequestKeyPool;
pub use lru::SmallLru;
pub use recognition::RecognitionCache;
pub use stats::{CacheStats, CacheStatsSnapshot};

/// Default fixed capacity for caches that don't get an explicit override
/// (spec.md §5 "Resource bounds": 2048 entries per cache).
pub const DEFAULT_CACHE_CAPACITY: usize = 2048;
