// SPDX-License-Identifier: PMPL-1.0-or-later

//! Number formatting for metric values.

use crate::indicators::Indicator;

/// Insert `,` thousands separators: `1234567` → `"1,234,567"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A whole-number count with thousands separators. Negative and fractional
/// inputs are rounded and signed.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let magnitude = thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a value of `indicator` for display: counts get thousands
/// separators, everything else two decimals.
pub fn format_indicator_value(indicator: Indicator, value: f64) -> String {
    if indicator.is_count() {
        format_count(value)
    } else {
        format_decimal(value)
    }
}
