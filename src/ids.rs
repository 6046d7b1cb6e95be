//! Id Generation
//!
//! Time + counter + random ids for checkboxes and notes. Not
//! cryptographic, just collision-safe for per-item collections.

use std::cell::Cell;

thread_local! {
    static COUNTER: Cell<u32> = Cell::new(0);
}

/// Current wall clock as epoch millis
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Current wall clock as epoch millis
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn random_suffix() -> u32 {
    (js_sys::Math::random() * 0x10000 as f64) as u32
}

#[cfg(not(target_arch = "wasm32"))]
fn random_suffix() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos & 0xffff
}

/// New id like `cb-18f2c3a9b10-3-a2f1`.
///
/// The counter makes two calls in the same millisecond still unique
/// within this execution context.
pub fn generate_id(prefix: &str) -> String {
    let seq = COUNTER.with(|c| {
        let v = c.get().wrapping_add(1);
        c.set(v);
        v
    });
    format!("{}-{:x}-{:x}-{:04x}", prefix, now_millis(), seq, random_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_in_a_burst() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id("cb")).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn id_carries_prefix() {
        assert!(generate_id("note").starts_with("note-"));
    }
}
