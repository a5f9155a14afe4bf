//! Rate Limit Tracking
//!
//! Keeps the reset timestamp reported by the most recent response.

use crate::client::transport::TransportResponse;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Response header carrying the quota reset time in epoch seconds
pub const RESET_HEADER: &str = "RateLimit-Reset";

/// Marks an empty slot
const UNSET: i64 = i64::MIN;

/// Rate limit details captured from the last response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitDetails {
    /// When the quota resets, in epoch seconds
    pub reset_at: Option<i64>,
}

impl RateLimitDetails {
    /// Reset time as a UTC timestamp
    pub fn reset_time(&self) -> Option<DateTime<Utc>> {
        self.reset_at
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    /// Seconds from `now` until the reset, zero once it has passed
    pub fn seconds_until_reset(&self, now: DateTime<Utc>) -> Option<i64> {
        self.reset_at
            .map(|secs| secs.saturating_sub(now.timestamp()).max(0))
    }
}

/// Last-write-wins slot for the reset timestamp.
///
/// Every completed call overwrites the slot, with nothing when the header is
/// missing. Concurrent calls race on it without locking; a reader sees
/// whichever write landed last.
#[derive(Debug)]
pub struct RateLimitSlot {
    reset_at: AtomicI64,
}

impl Default for RateLimitSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimitSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            reset_at: AtomicI64::new(UNSET),
        }
    }

    /// Overwrite the slot from a response's headers and return the new value
    pub fn update_from_response(&self, response: &dyn TransportResponse) -> Option<i64> {
        let reset_at = response
            .header(RESET_HEADER)
            .map(|value| parse_reset(&value));
        self.store(reset_at);
        reset_at
    }

    /// Overwrite the slot
    pub fn store(&self, reset_at: Option<i64>) {
        self.reset_at
            .store(reset_at.unwrap_or(UNSET), Ordering::Relaxed);
    }

    /// Current details
    pub fn details(&self) -> RateLimitDetails {
        let raw = self.reset_at.load(Ordering::Relaxed);
        RateLimitDetails {
            reset_at: (raw != UNSET).then_some(raw),
        }
    }
}

/// Integer-cast parse of a header value.
///
/// Leading whitespace is skipped and the leading signed run of digits is
/// taken; anything after it is ignored. No digits yields 0. Out-of-range
/// values saturate.
pub fn parse_reset(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }

    // i64::MIN is the empty-slot marker
    result.max(UNSET + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::BufferedResponse;

    #[test]
    fn test_parse_reset() {
        assert_eq!(parse_reset("1700000000"), 1_700_000_000);
        assert_eq!(parse_reset("  1700000000 "), 1_700_000_000);
        assert_eq!(parse_reset("+12"), 12);
        assert_eq!(parse_reset("-5"), -5);
        assert_eq!(parse_reset("60s"), 60);
        assert_eq!(parse_reset("soon"), 0);
        assert_eq!(parse_reset(""), 0);
        assert_eq!(parse_reset("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_reset("-99999999999999999999999"), i64::MIN + 1);
    }

    #[test]
    fn test_slot_reflects_only_last_response() {
        let slot = RateLimitSlot::new();
        assert_eq!(slot.details().reset_at, None);

        let with_header = BufferedResponse::ok("").with_header(RESET_HEADER, "1700000000");
        assert_eq!(slot.update_from_response(&with_header), Some(1_700_000_000));
        assert_eq!(slot.details().reset_at, Some(1_700_000_000));

        let without_header = BufferedResponse::ok("");
        assert_eq!(slot.update_from_response(&without_header), None);
        assert_eq!(slot.details().reset_at, None);
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let slot = RateLimitSlot::new();
        let response = BufferedResponse::ok("").with_header("ratelimit-reset", "7");
        slot.update_from_response(&response);
        assert_eq!(slot.details().reset_at, Some(7));
    }

    #[test]
    fn test_reset_time_conversions() {
        let details = RateLimitDetails {
            reset_at: Some(1_700_000_000),
        };
        let reset = details.reset_time().unwrap();
        assert_eq!(reset.timestamp(), 1_700_000_000);

        let now = DateTime::<Utc>::from_timestamp(1_699_999_940, 0).unwrap();
        assert_eq!(details.seconds_until_reset(now), Some(60));

        let later = DateTime::<Utc>::from_timestamp(1_700_000_100, 0).unwrap();
        assert_eq!(details.seconds_until_reset(later), Some(0));

        assert_eq!(RateLimitDetails::default().reset_time(), None);
    }

    #[test]
    fn test_saturated_reset_values() {
        let slot = RateLimitSlot::new();
        let response =
            BufferedResponse::ok("").with_header(RESET_HEADER, "-99999999999999999999");
        slot.update_from_response(&response);

        let details = slot.details();
        assert_eq!(details.reset_at, Some(i64::MIN + 1));
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(details.seconds_until_reset(now), Some(0));

        let far = RateLimitDetails {
            reset_at: Some(i64::MAX),
        };
        let before_epoch = DateTime::<Utc>::from_timestamp(-1_000, 0).unwrap();
        assert_eq!(far.seconds_until_reset(before_epoch), Some(i64::MAX));
    }
}
