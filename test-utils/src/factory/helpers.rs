//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a syntactically valid Steam64 ID from a counter value.
///
/// Every Steam64 ID starts with `7656119`; the remaining ten digits are
/// the zero-padded counter.
pub fn steam_id_from(value: u64) -> String {
    format!("7656119{:010}", value)
}
