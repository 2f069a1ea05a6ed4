//! Size formatting utilities.
//!
//! This module turns a byte count into the string printed next to a path,
//! either as a plain byte count or scaled to the largest binary unit that
//! does not exceed it.

/// One kilobyte (binary).
pub const KB: u64 = 1024;

/// One megabyte (binary).
pub const MB: u64 = 1024 * KB;

/// One gigabyte (binary).
pub const GB: u64 = 1024 * MB;

/// Units above plain bytes, largest first.
const UNITS: &[(u64, &str)] = &[(GB, "GB"), (MB, "MB"), (KB, "KB")];

/// Format a byte count for display.
///
/// With `human_readable == false` the result is the exact byte count with a
/// `B` suffix. Otherwise values below one kilobyte are still shown as whole
/// bytes and larger values are divided by the largest of `KB`, `MB` or `GB`
/// not exceeding them, rounded half up to one decimal place.
///
/// # Examples
///
/// ```
/// # use path_size::utils::format_size;
/// assert_eq!(format_size(1536, false), "1536B");
/// assert_eq!(format_size(1536, true), "1.5KB");
/// assert_eq!(format_size(1023, true), "1023B");
/// ```
#[must_use]
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{bytes}B");
    }

    UNITS
        .iter()
        .find(|(unit, _)| bytes >= *unit)
        .map_or_else(
            || format!("{bytes}B"),
            |&(unit, suffix)| {
                let tenths = scaled_tenths(bytes, unit);
                format!("{}.{}{suffix}", tenths / 10, tenths % 10)
            },
        )
}

/// `bytes / unit` in tenths, rounded half up.
///
/// Computed in `u128` so `u64::MAX` cannot overflow the intermediate product.
fn scaled_tenths(bytes: u64, unit: u64) -> u128 {
    let unit = u128::from(unit);
    (u128::from(bytes) * 10 + unit / 2) / unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_raw() {
        assert_eq!(format_size(0, false), "0B");
        assert_eq!(format_size(1, false), "1B");
        assert_eq!(format_size(1024, false), "1024B");
        assert_eq!(format_size(GB * 3, false), "3221225472B");
        assert_eq!(format_size(u64::MAX, false), format!("{}B", u64::MAX));
    }

    #[test]
    fn test_format_size_bytes_scale() {
        assert_eq!(format_size(0, true), "0B");
        assert_eq!(format_size(1, true), "1B");
        assert_eq!(format_size(1023, true), "1023B");
    }

    #[test]
    fn test_format_size_unit_boundaries() {
        assert_eq!(format_size(1024, true), "1.0KB");
        assert_eq!(format_size(1536, true), "1.5KB");
        assert_eq!(format_size(2048, true), "2.0KB");
        assert_eq!(format_size(1_048_576, true), "1.0MB");
        assert_eq!(format_size(MB * 3 / 2, true), "1.5MB");
        assert_eq!(format_size(1_073_741_824, true), "1.0GB");
    }

    #[test]
    fn test_format_size_stays_in_gb() {
        assert_eq!(format_size(GB * 1024, true), "1024.0GB");
        assert_eq!(format_size(GB * 5 / 2, true), "2.5GB");
    }

    #[test]
    fn test_format_size_rounds_half_up() {
        // 1075.2 bytes is exactly 1.05 KB
        assert_eq!(format_size(1075, true), "1.0KB");
        assert_eq!(format_size(1076, true), "1.1KB");
        // 1.95 KB rounds up into the next whole number
        assert_eq!(format_size(1997, true), "2.0KB");
        // just under 1 MB still reports in KB
        assert_eq!(format_size(MB - 1, true), "1024.0KB");
    }

    #[test]
    fn test_scaled_tenths() {
        assert_eq!(scaled_tenths(1024, KB), 10);
        assert_eq!(scaled_tenths(1536, KB), 15);
        assert_eq!(scaled_tenths(u64::MAX, GB), 171_798_691_840);
    }

    #[test]
    fn test_units_are_binary_multiples() {
        assert_eq!(KB, 1 << 10);
        assert_eq!(MB, 1 << 20);
        assert_eq!(GB, 1 << 30);
    }
}
