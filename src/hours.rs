use std::str::FromStr;

/// How fractional hours are turned into an `H:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    /// Nearest whole minute, always two minute digits.
    #[default]
    Rounded,
    /// Raw fractional minutes, padded only when they print as one character.
    /// `2.1` becomes `2:6.000000000000005`.
    Legacy,
}

impl FromStr for HourFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rounded" => Ok(Self::Rounded),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown hour format '{other}'")),
        }
    }
}

pub fn format_hours(hours: f64, format: HourFormat) -> String {
    match format {
        HourFormat::Rounded => format_rounded(hours),
        HourFormat::Legacy => format_legacy(hours),
    }
}

fn format_rounded(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!(
        "{}:{:02}",
        total_minutes.div_euclid(60),
        total_minutes.rem_euclid(60)
    )
}

fn format_legacy(hours: f64) -> String {
    let minutes = js_number((hours % 1.0) * 60.0);
    if minutes.len() == 1 {
        format!("{}:0{minutes}", js_number(hours.floor()))
    } else {
        format!("{}:{minutes}", js_number(hours.floor()))
    }
}

/// Renders a number the way `Number.prototype.toString` does: shortest
/// round-trip digits, exponent form outside `[1e-6, 1e21)`, and no `-0`.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp_form = format!("{value:e}");
    match exp_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_formats_whole_and_half_hours() {
        assert_eq!(format_hours(2.0, HourFormat::Rounded), "2:00");
        assert_eq!(format_hours(2.5, HourFormat::Rounded), "2:30");
        assert_eq!(format_hours(0.0, HourFormat::Rounded), "0:00");
    }

    #[test]
    fn rounded_snaps_to_the_nearest_minute() {
        assert_eq!(format_hours(2.1, HourFormat::Rounded), "2:06");
        assert_eq!(format_hours(7.333, HourFormat::Rounded), "7:20");
        assert_eq!(format_hours(0.9999, HourFormat::Rounded), "1:00");
        assert_eq!(format_hours(41.75, HourFormat::Rounded), "41:45");
    }

    #[test]
    fn legacy_pads_single_character_minutes() {
        assert_eq!(format_hours(2.0, HourFormat::Legacy), "2:00");
        assert_eq!(format_hours(2.5, HourFormat::Legacy), "2:30");
        assert_eq!(format_hours(0.25, HourFormat::Legacy), "0:15");
    }

    #[test]
    fn legacy_keeps_float_noise_in_minutes() {
        assert_eq!(format_hours(2.1, HourFormat::Legacy), "2:6.000000000000005");
        assert_eq!(format_hours(8.1, HourFormat::Legacy), "8:5.999999999999979");
        assert_eq!(format_hours(0.125, HourFormat::Legacy), "0:7.5");
    }

    #[test]
    fn legacy_uses_exponent_form_for_tiny_remainders() {
        let total = 0.2 + 2.2 + 0.6;
        assert_eq!(format_hours(total, HourFormat::Legacy), "3:2.6645352591003757e-14");
        assert_eq!(format_hours(total, HourFormat::Rounded), "3:00");
    }

    #[test]
    fn legacy_never_prints_negative_zero() {
        assert_eq!(format_hours(-1.0, HourFormat::Legacy), "-1:00");
        assert_eq!(format_hours(-0.0, HourFormat::Legacy), "0:00");
    }

    #[test]
    fn js_number_switches_notation_at_the_same_bounds() {
        assert_eq!(js_number(123.0), "123");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(0.0000001), "1e-7");
        assert_eq!(js_number(-2.5e-9), "-2.5e-9");
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("legacy".parse::<HourFormat>(), Ok(HourFormat::Legacy));
        assert_eq!(" Rounded ".parse::<HourFormat>(), Ok(HourFormat::Rounded));
        assert!("minutes".parse::<HourFormat>().is_err());
    }
}
