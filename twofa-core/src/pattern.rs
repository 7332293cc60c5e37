//! pattern.rs - Manages the parsing and caching of code patterns.
//!
//! This module provides a thread-safe, cached mechanism to turn a pattern
//! string into a parsed tree ready for generation. It uses a global, shared
//! cache so that concurrent authentication attempts sharing one configured
//! pattern parse it only once.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use twofa_patgen::{parse, ParseError, Sequence};

lazy_static! {
    /// A thread-safe, global cache for parsed patterns.
    /// The key is a hash of the pattern string.
    static ref PARSED_PATTERN_CACHE: RwLock<HashMap<u64, Arc<Sequence>>> =
        RwLock::new(HashMap::new());
}

fn hash_pattern(pattern: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    pattern.hash(&mut hasher);
    hasher.finish()
}

/// Gets a parsed pattern tree from the cache, parsing it if not found.
///
/// Returns an `Arc` to the parsed tree, allowing for cheap sharing across
/// repositories and calls. Parse failures are never cached: a fixed
/// configuration will parse cleanly on its next lookup.
pub fn get_or_parse(pattern: &str) -> Result<Arc<Sequence>, ParseError> {
    let cache_key = hash_pattern(pattern);

    // Attempt to acquire a read lock first.
    {
        let cache = PARSED_PATTERN_CACHE.read().unwrap();
        if let Some(tree) = cache.get(&cache_key) {
            debug!("Serving parsed pattern from cache for key: {}", &cache_key);
            return Ok(Arc::clone(tree));
        }
    } // Read lock is released here.

    debug!("Pattern not found in cache. Parsing now.");
    let tree = Arc::new(parse(pattern)?);

    PARSED_PATTERN_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&tree));

    debug!("Successfully parsed and cached pattern for key: {}", &cache_key);
    Ok(tree)
}
