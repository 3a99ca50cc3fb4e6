//! Counter domain rules.
//!
//! The counter is a single non-negative integer living in the store under a
//! fixed key. The service never caches it: every read or increment is a
//! store round trip, so concurrent replicas always agree.

/// Default store key holding the counter value.
pub const DEFAULT_COUNTER_KEY: &str = "visit_count";

/// Interpret a raw store value as a counter reading.
///
/// A missing key reads as zero (the key is created lazily by the first
/// increment). Anything that does not parse as a non-negative base-10
/// integer also reads as zero rather than failing the request.
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// Clamp a store-side increment result to the non-negative domain.
///
/// INCR on a store returns a signed integer; the counter contract only
/// exposes increments, so a negative value can only come from out-of-band
/// writes and is reported as zero.
pub fn clamp_count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}
