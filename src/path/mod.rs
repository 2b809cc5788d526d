mod cache;
mod normalize;

pub use cache::TokenizationCache;
pub use normalize::{normalize_path, split_segments, strip_query_and_fragment};
