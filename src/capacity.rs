//! Capacity Model
//!
//! Estimates how much of the storage budget is in use and classifies it
//! for the gauge. Sizes assume 2 bytes per character (UTF-16), which is an
//! approximation of what the browser charges, not an exact encoding size.

use crate::error::StorageResult;
use crate::models::{Tier, UsageSnapshot};
use crate::storage::KeyValueStore;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Shown instead of the size readout once usage passes the budget
pub const CRITICAL_MESSAGE: &str = "Storage limit exceeded! Please delete some tasks.";

/// Estimated size of one stored entry
pub fn entry_bytes(key: &str, value: &str) -> u64 {
    let chars = key.encode_utf16().count() + value.encode_utf16().count();
    2 * chars as u64
}

/// Sum the estimated size of every entry in the store, not only the task key
pub fn measure_store_bytes<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<u64> {
    let total = store
        .entries()?
        .iter()
        .map(|(key, value)| entry_bytes(key, value))
        .sum();
    Ok(total)
}

/// Render a byte count in 1024-based units, e.g. `1536 -> "1.5 KB"`
pub fn format_human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Classify `bytes` against `max_bytes`.
///
/// The tier uses the raw percentage; only the display percentage is clamped
/// to 100.
pub fn classify_usage(bytes: u64, max_bytes: u64) -> UsageSnapshot {
    let raw = if max_bytes == 0 {
        if bytes == 0 { 0.0 } else { f64::INFINITY }
    } else {
        bytes as f64 / max_bytes as f64 * 100.0
    };

    let tier = if raw > 100.0 {
        Tier::Critical
    } else if raw > 50.0 {
        Tier::Warning
    } else {
        Tier::Normal
    };

    let message = match tier {
        Tier::Critical => CRITICAL_MESSAGE.to_string(),
        Tier::Warning | Tier::Normal => {
            format!("{} / {}", format_human_size(bytes), format_human_size(max_bytes))
        }
    };

    UsageSnapshot {
        total_bytes: bytes,
        percentage: raw.min(100.0),
        tier,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rstest::rstest;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_human_size(0), "0 Bytes");
    }

    #[rstest]
    #[case(1, "1 Bytes")]
    #[case(500, "500 Bytes")]
    #[case(1023, "1023 Bytes")]
    #[case(1024, "1 KB")]
    #[case(1536, "1.5 KB")]
    #[case(1_048_576, "1 MB")]
    #[case(5 * 1024 * 1024, "5 MB")]
    #[case(1_073_741_824, "1 GB")]
    #[case(3 * 1024 * 1024 * 1024 * 1024, "3072 GB")]
    fn test_format_units(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_human_size(bytes), expected);
    }

    #[test]
    fn test_format_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2050...
        assert_eq!(format_human_size(1234), "1.21 KB");
    }

    #[rstest]
    #[case(0, Tier::Normal)]
    #[case(500_000, Tier::Normal)] // exactly 50%
    #[case(500_001, Tier::Warning)] // 50.0001%
    #[case(1_000_000, Tier::Warning)] // exactly 100%
    #[case(1_000_001, Tier::Critical)]
    #[case(3_000_000, Tier::Critical)] // 300%
    fn test_classify_boundaries(#[case] bytes: u64, #[case] tier: Tier) {
        let snapshot = classify_usage(bytes, 1_000_000);
        assert_eq!(snapshot.tier, tier);
        assert!(snapshot.percentage <= 100.0);
    }

    #[test]
    fn test_display_percentage_clamped_but_bytes_kept() {
        let snapshot = classify_usage(3_000_000, 1_000_000);
        assert_eq!(snapshot.percentage, 100.0);
        assert_eq!(snapshot.total_bytes, 3_000_000);
        assert_eq!(snapshot.message, CRITICAL_MESSAGE);
    }

    #[test]
    fn test_message_shows_sizes_below_critical() {
        let snapshot = classify_usage(1536, 1024 * 1024);
        assert_eq!(snapshot.tier, Tier::Normal);
        assert_eq!(snapshot.message, "1.5 KB / 1 MB");

        let snapshot = classify_usage(768 * 1024, 1024 * 1024);
        assert_eq!(snapshot.tier, Tier::Warning);
        assert_eq!(snapshot.percentage, 75.0);
        assert_eq!(snapshot.message, "768 KB / 1 MB");
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(classify_usage(0, 0).tier, Tier::Normal);
        assert_eq!(classify_usage(0, 0).percentage, 0.0);

        let snapshot = classify_usage(10, 0);
        assert_eq!(snapshot.tier, Tier::Critical);
        assert_eq!(snapshot.percentage, 100.0);
    }

    #[test]
    fn test_measure_counts_every_key() {
        let store = MemoryStore::new();
        store.insert("tasks", "[]"); // 7 chars
        store.insert("theme", "dark"); // 9 chars

        assert_eq!(measure_store_bytes(&store).unwrap(), 32);
    }

    #[test]
    fn test_measure_counts_utf16_units() {
        let store = MemoryStore::new();
        // Each kana is one UTF-16 unit; the emoji is a surrogate pair
        store.insert("k", "タスク😀");

        assert_eq!(measure_store_bytes(&store).unwrap(), 2 * (1 + 3 + 2));
    }

    #[test]
    fn test_measure_empty_store() {
        assert_eq!(measure_store_bytes(&MemoryStore::new()).unwrap(), 0);
    }
}
