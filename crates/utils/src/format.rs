//! Display formatting for tables and the TUI.

/// SOL amount with four decimals (`6.7` → `6.7000`).
pub fn format_sol(sol: f64) -> String {
    format!("{sol:.4}")
}

/// Boost multiplier (`1.35` → `x1.35`).
pub fn format_boost(boost: f64) -> String {
    format!("x{boost:.2}")
}

/// Estate with its tile count (`Town (14 tiles)`).
pub fn format_estate(name: &str, tiles: u32) -> String {
    format!("{name} ({tiles} tiles)")
}

/// RPC latency with a quality label.
pub fn format_latency(ms: u64) -> String {
    let quality = if ms < 200 {
        "✓ excellent"
    } else if ms < 500 {
        "✓ good"
    } else if ms < 1000 {
        "⚠ slow"
    } else {
        "✗ very slow"
    };
    format!("{quality} ({ms}ms)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sol() {
        assert_eq!(format_sol(6.7), "6.7000");
        assert_eq!(format_sol(0.0), "0.0000");
        assert_eq!(format_sol(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_boost() {
        assert_eq!(format_boost(1.0), "x1.00");
        assert_eq!(format_boost(1.35), "x1.35");
    }

    #[test]
    fn test_format_estate() {
        assert_eq!(format_estate("Fortified City", 28), "Fortified City (28 tiles)");
    }

    #[test]
    fn test_format_latency_buckets() {
        assert!(format_latency(50).starts_with("✓ excellent"));
        assert!(format_latency(300).starts_with("✓ good"));
        assert!(format_latency(700).starts_with("⚠ slow"));
        assert!(format_latency(5000).ends_with("(5000ms)"));
    }
}
