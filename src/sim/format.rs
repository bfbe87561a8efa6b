//! Formatting helpers for tickets, money and durations.

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Number of decimal digits in `n` (`0` has one digit).
pub const fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Zero-pad `number` to the digit length of `chances`, so ticket labels
/// and drawn numbers line up in the log.
///
/// ```
/// use lottery::sim::format_ticket_number;
/// assert_eq!(format_ticket_number(7, 100), "007");
/// assert_eq!(format_ticket_number(5, 9), "5");
/// ```
pub fn format_ticket_number(number: u64, chances: u64) -> String {
    format!("{number:0>width$}", width = digit_count(chances))
}

/// Render a monetary amount with thousands separators and two decimals,
/// e.g. `12500000.5` as `12,500,000.50`.
///
/// A product that overflowed `f64` renders as `∞`.
pub fn format_money(amount: f64) -> String {
    if amount.is_nan() {
        return "n/a".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}∞");
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if amount.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Round `d` to the nearest multiple of `unit`, halfway values rounding up.
pub fn round_duration(d: Duration, unit: Duration) -> Duration {
    let unit = unit.as_nanos();
    if unit == 0 {
        return d;
    }
    let nanos = d.as_nanos();
    let rem = nanos % unit;
    let rounded = if rem * 2 < unit {
        nanos - rem
    } else {
        nanos - rem + unit
    };
    duration_from_nanos(rounded)
}

fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    #[allow(clippy::cast_possible_truncation)]
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Duration::new(secs, subsec)
}

/// Render a duration the way a stopwatch reads: `0s`, `250ms`, `1.5s`,
/// `1m30s`, `1h0m0s`. Precision stops at milliseconds.
pub fn format_duration(d: Duration) -> String {
    let total_ms = d.as_nanos() / NANOS_PER_MILLI;
    if total_ms == 0 {
        return "0s".to_string();
    }
    if total_ms < 1000 {
        return format!("{total_ms}ms");
    }

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h{minutes}m");
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{seconds}");
    if millis > 0 {
        let frac = format!("{millis:03}");
        let _ = write!(out, ".{}", frac.trim_end_matches('0'));
    }
    out.push('s');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(25_000_000), 8);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_format_ticket_number() {
        assert_eq!(format_ticket_number(7, 100), "007");
        assert_eq!(format_ticket_number(42, 100), "042");
        assert_eq!(format_ticket_number(5, 9), "5");
        // Ticket counts can outgrow the width of the odds.
        assert_eq!(format_ticket_number(1234, 10), "1234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(0.5), "0.50");
        assert_eq!(format_money(999.999), "1,000.00");
        assert_eq!(format_money(12_500_000.5), "12,500,000.50");
        assert_eq!(format_money(123_456.0), "123,456.00");
        assert_eq!(format_money(-1234.5), "-1,234.50");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_format_money_overflow() {
        // A finite cost times the odds can still overflow.
        let estimated = 1e300 * 25_000_000.0_f64;
        assert!(estimated.is_infinite());
        assert_eq!(format_money(estimated), "∞");
        assert_eq!(format_money(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_money(f64::NAN), "n/a");
        assert_eq!(format_money(1e20), "100,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_round_duration() {
        let s = Duration::from_secs(1);
        assert_eq!(round_duration(Duration::from_millis(1499), s), Duration::from_secs(1));
        assert_eq!(round_duration(Duration::from_millis(1500), s), Duration::from_secs(2));
        assert_eq!(round_duration(Duration::from_millis(400), s), Duration::ZERO);
        assert_eq!(round_duration(Duration::from_millis(1500), Duration::ZERO), Duration::from_millis(1500));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_secs(26 * 3600 + 61)), "26h1m1s");
    }
}
