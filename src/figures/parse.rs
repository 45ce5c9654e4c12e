use crate::table::cell::parse_number;

/// Compute cost in billions of operations from text like `4.1B`, `7G` or `1200M`.
///
/// `B` and `G` mean billions, `M` means millions. Values without a unit
/// suffix, or whose magnitude does not parse, are missing.
pub fn parse_flops_billions(raw: &str) -> Option<f64> {
    let s = raw.trim().to_uppercase();
    let (magnitude, divisor) = if let Some(m) = s.strip_suffix('B') {
        (m, 1.0)
    } else if let Some(m) = s.strip_suffix('G') {
        (m, 1.0)
    } else if let Some(m) = s.strip_suffix('M') {
        (m, 1000.0)
    } else {
        return None;
    };
    parse_number(magnitude).map(|v| v / divisor)
}

/// Sample count with thousands separators removed: `12,345` -> 12345.
pub fn parse_sample_count(raw: &str) -> Option<f64> {
    parse_number(&raw.replace(',', ""))
}

/// Tick label for a sample-count axis: `1K`, `10K`, `100K`, `1M`.
pub fn format_sample_tick(value: f64) -> String {
    if value >= 1e6 {
        format!("{}M", trim_float(value / 1e6))
    } else if value >= 1e3 {
        format!("{}K", trim_float(value / 1e3))
    } else {
        trim_float(value)
    }
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
