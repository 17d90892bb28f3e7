//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets a distinct
/// default name to prevent accidental matches between tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Spells a counter value with letters only.
///
/// Names in the API are alphabetic, so numeric suffixes would make factory rows
/// fail validation when echoed back through an update.
///
/// # Returns
/// - `String` - Base-26 rendering of `n` using `a..=z`
pub fn alphabetic_suffix(mut n: u64) -> String {
    let mut suffix = String::new();
    loop {
        suffix.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    suffix
}
