//! Raw value to display string conversions.
//!
//! All functions are pure. Out-of-table lookups are format errors, never
//! silently clamped.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoomrError};

use super::revision::{FrequencyRule, GainRule, PanRule, PanScale, QFactorRule};

/// The three equalizer bands of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EqBandKind {
    #[serde(rename = "hi")]
    High,
    #[serde(rename = "mid")]
    Mid,
    #[serde(rename = "lo")]
    Low,
}

impl EqBandKind {
    /// Bands in record (and display) order.
    pub const ALL: [EqBandKind; 3] = [EqBandKind::High, EqBandKind::Mid, EqBandKind::Low];

    pub fn label(self) -> &'static str {
        match self {
            EqBandKind::High => "hi",
            EqBandKind::Mid => "mid",
            EqBandKind::Low => "lo",
        }
    }

    /// Enumerated frequency table for this band.
    pub fn frequency_table(self) -> &'static [&'static str] {
        match self {
            EqBandKind::High => HIGH_FREQUENCIES,
            EqBandKind::Mid => MID_FREQUENCIES,
            EqBandKind::Low => LOW_FREQUENCIES,
        }
    }
}

pub static HIGH_FREQUENCIES: &[&str] = &[
    "500", "630", "800", "1.0k", "1.3k", "1.6k", "2.0k", "2.5k", "3.2k", "4k", "5k", "6.3k", "8k",
    "10k", "12.5k", "16k", "18k",
];

pub static MID_FREQUENCIES: &[&str] = &[
    "40", "50", "63", "80", "100", "125", "160", "200", "250", "315", "400", "500", "630", "800",
    "1.0k", "1.3k", "1.6k", "2.0k", "2.5k", "3.2k", "4k", "5k", "6.3k", "8k", "10k", "12.5k",
    "16k", "18k",
];

pub static LOW_FREQUENCIES: &[&str] = &[
    "40", "50", "63", "80", "100", "125", "160", "200", "250", "315", "400", "500", "630", "800",
    "1.0k", "1.3k", "1.6k",
];

/// `C`, `L<delta>` or `R<delta>`.
pub fn pan_display(raw: i32, rule: PanRule) -> String {
    let distance = (i64::from(raw) - i64::from(rule.center)).abs();
    let delta = match rule.scale {
        PanScale::Doubled => distance * 2,
        PanScale::Direct => distance,
    };

    if raw == rule.center {
        "C".to_string()
    } else if raw < rule.center {
        format!("L{}", delta)
    } else {
        format!("R{}", delta)
    }
}

/// `0`, `-<delta>` or `+<delta>`, with the rule's unit appended.
pub fn gain_display(raw: i32, rule: GainRule) -> String {
    let unit = rule.unit.unwrap_or("");
    let delta = (i64::from(raw) - i64::from(rule.zero)).abs();

    if raw == rule.zero {
        format!("0{}", unit)
    } else if raw < rule.zero {
        format!("-{}{}", delta, unit)
    } else {
        format!("+{}{}", delta, unit)
    }
}

/// Frequency of a band, looked up or formatted per the rule.
pub fn frequency_display(band: EqBandKind, raw: i32, rule: FrequencyRule) -> Result<String> {
    match rule {
        FrequencyRule::Enumerated => {
            let table = band.frequency_table();
            usize::try_from(raw)
                .ok()
                .and_then(|index| table.get(index))
                .map(|name| name.to_string())
                .ok_or_else(|| {
                    ZoomrError::format(format!(
                        "Frequency index {} out of range for {} band (0..{})",
                        raw,
                        band.label(),
                        table.len()
                    ))
                })
        }
        FrequencyRule::Hertz => Ok(hertz_display(raw)),
    }
}

/// Hz below 1000, otherwise kHz with a `k` suffix.
///
/// Whole kilohertz drop the `.0`, except 1000 and 2000 which keep it
/// (`1.0k`, `2.0k`) to match the recorder's own labels.
pub fn hertz_display(raw: i32) -> String {
    if raw < 1000 {
        return raw.to_string();
    }

    let whole = raw / 1000;
    let millis = raw % 1000;

    if millis == 0 {
        return match raw {
            1000 | 2000 => format!("{}.0k", whole),
            _ => format!("{}k", whole),
        };
    }

    let fraction = format!("{:03}", millis);
    format!("{}.{}k", whole, fraction.trim_end_matches('0'))
}

/// Q factor for the mid band; `None` for high and low.
pub fn q_factor_display(band: EqBandKind, raw: i32, rule: QFactorRule) -> Option<String> {
    if band != EqBandKind::Mid {
        return None;
    }

    Some(match rule {
        QFactorRule::Tenths => {
            let tenths = i64::from(raw) + 1;
            let sign = if tenths < 0 { "-" } else { "" };
            let magnitude = tenths.abs();
            format!("{}{}.{}", sign, magnitude / 10, magnitude % 10)
        }
        QFactorRule::Raw => raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const DOUBLED: PanRule = PanRule {
        center: 50,
        scale: PanScale::Doubled,
    };
    const DIRECT: PanRule = PanRule {
        center: 0,
        scale: PanScale::Direct,
    };

    #[test_case(50, DOUBLED, "C" ; "doubled center")]
    #[test_case(49, DOUBLED, "L2" ; "doubled one below")]
    #[test_case(51, DOUBLED, "R2" ; "doubled one above")]
    #[test_case(0, DOUBLED, "L100" ; "doubled hard left")]
    #[test_case(100, DOUBLED, "R100" ; "doubled hard right")]
    #[test_case(0, DIRECT, "C" ; "direct center")]
    #[test_case(-1, DIRECT, "L1" ; "direct one below")]
    #[test_case(1, DIRECT, "R1" ; "direct one above")]
    #[test_case(-50, DIRECT, "L50" ; "direct hard left")]
    fn test_pan_display(raw: i32, rule: PanRule, expected: &str) {
        assert_eq!(pan_display(raw, rule), expected);
    }

    #[test_case(12, None, "0")]
    #[test_case(13, None, "+1")]
    #[test_case(11, None, "-1")]
    #[test_case(0, None, "-12")]
    #[test_case(12, Some("dB"), "0dB")]
    #[test_case(15, Some("dB"), "+3dB")]
    #[test_case(9, Some("dB"), "-3dB")]
    fn test_gain_display(raw: i32, unit: Option<&'static str>, expected: &str) {
        assert_eq!(gain_display(raw, GainRule { zero: 12, unit }), expected);
    }

    #[test]
    fn test_gain_display_zero_centered() {
        let rule = GainRule { zero: 0, unit: None };
        assert_eq!(gain_display(0, rule), "0");
        assert_eq!(gain_display(1, rule), "+1");
        assert_eq!(gain_display(-1, rule), "-1");
    }

    #[test_case(EqBandKind::High, 0, "500")]
    #[test_case(EqBandKind::High, 16, "18k")]
    #[test_case(EqBandKind::Mid, 0, "40")]
    #[test_case(EqBandKind::Mid, 14, "1.0k")]
    #[test_case(EqBandKind::Mid, 27, "18k")]
    #[test_case(EqBandKind::Low, 16, "1.6k")]
    fn test_enumerated_frequency(band: EqBandKind, raw: i32, expected: &str) {
        assert_eq!(frequency_display(band, raw, FrequencyRule::Enumerated).unwrap(), expected);
    }

    #[test]
    fn test_enumerated_frequency_out_of_table() {
        assert!(frequency_display(EqBandKind::High, 17, FrequencyRule::Enumerated).is_err());
        assert!(frequency_display(EqBandKind::Low, 17, FrequencyRule::Enumerated).is_err());
        assert!(frequency_display(EqBandKind::Mid, 28, FrequencyRule::Enumerated).is_err());
        assert!(frequency_display(EqBandKind::Mid, -1, FrequencyRule::Enumerated).is_err());
    }

    #[test_case(40, "40")]
    #[test_case(800, "800")]
    #[test_case(1000, "1.0k")]
    #[test_case(2000, "2.0k")]
    #[test_case(3000, "3k")]
    #[test_case(4000, "4k")]
    #[test_case(10000, "10k")]
    #[test_case(1300, "1.3k")]
    #[test_case(1250, "1.25k")]
    #[test_case(12500, "12.5k")]
    #[test_case(6300, "6.3k")]
    fn test_hertz_display(raw: i32, expected: &str) {
        assert_eq!(hertz_display(raw), expected);
    }

    #[test]
    fn test_q_factor_only_for_mid() {
        assert_eq!(q_factor_display(EqBandKind::High, 4, QFactorRule::Tenths), None);
        assert_eq!(q_factor_display(EqBandKind::Low, 4, QFactorRule::Raw), None);
        let tenths = |raw| q_factor_display(EqBandKind::Mid, raw, QFactorRule::Tenths);
        assert_eq!(tenths(4).as_deref(), Some("0.5"));
        assert_eq!(tenths(9).as_deref(), Some("1.0"));
        assert_eq!(tenths(15).as_deref(), Some("1.6"));
        assert_eq!(q_factor_display(EqBandKind::Mid, 7, QFactorRule::Raw).as_deref(), Some("7"));
    }

    #[test]
    fn test_extreme_raw_values_do_not_overflow() {
        let tenths = |raw| q_factor_display(EqBandKind::Mid, raw, QFactorRule::Tenths);
        assert_eq!(tenths(i32::MAX).as_deref(), Some("214748364.8"));
        assert_eq!(tenths(i32::MIN).as_deref(), Some("-214748364.7"));

        let pan = PanRule {
            center: 50,
            scale: PanScale::Doubled,
        };
        assert_eq!(pan_display(i32::MIN, pan), "L4294967396");
        assert_eq!(gain_display(i32::MAX, GainRule { zero: 12, unit: None }), "+2147483635");
    }
}
