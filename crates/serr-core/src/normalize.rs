//! Argument normalization.
//!
//! A single left-to-right scan resolves the argument list into an [`ArgMap`].
//! Pairs and pair collections are stored directly under their own keys. Plain
//! values alternate between key and value through a pending-key slot. Later
//! writes win on key collisions. A trailing plain key without a value is
//! dropped.
//!
//! A pair-shaped element never consumes the pending key: `["k1", pair]`
//! stores `pair` and leaves `"k1"` pending. A plain value whose text is empty
//! cannot become a key; the slot stays empty and the next plain value is
//! taken as the key instead.

use crate::arg::{Arg, ErrorArg};
use crate::error::ArgMap;

/// Resolve an argument list into a key → value map.
pub fn normalize<I>(args: I) -> ArgMap
where
    I: IntoIterator<Item = Arg>,
{
    let mut map = ArgMap::default();
    let mut pending: Option<String> = None;

    for arg in args {
        match arg {
            Arg::Pair(pair) => store(&mut map, pair),
            Arg::Pairs(pairs) => {
                for pair in pairs {
                    store(&mut map, pair);
                }
            }
            Arg::Plain(value) => match pending.take() {
                None => {
                    let key = value.to_string();
                    if !key.is_empty() {
                        pending = Some(key);
                    }
                }
                Some(key) => {
                    map.insert(key, value);
                }
            },
        }
    }

    if let Some(key) = pending {
        tracing::trace!(key = %key, "dropping trailing argument key without a value");
    }

    map
}

#[inline]
fn store(map: &mut ArgMap, pair: ErrorArg) {
    map.insert(pair.key, pair.value);
}
