//! Simple TOML parser for the panel configuration
//!
//! This is a minimal TOML parser that handles only the subset `panel.toml`
//! uses. It does NOT support the full TOML spec and needs no allocator.
//!
//! Supported features:
//! - `key = integer` pairs (optional sign, `_` digit separators)
//! - `[section]` and `[section.subsection]` headers
//! - Comments (`# ...`), including trailing comments
//!
//! NOT supported:
//! - Strings, floats, booleans, arrays and tables as values
//! - Dotted keys outside section headers
//!
//! Keys that are absent keep their [`PanelConfig::default`] value.

use super::types::{AxisCalibration, PanelConfig, ADC_MAX};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value is not an integer, or the line is not `key = value`
    InvalidValue,
    /// Key not valid in its section
    UnknownKey,
    /// Value outside its allowed range, or an inconsistent pair
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Thresholds,
    JoystickX,
    JoystickY,
    Ranges,
    Timing,
    Tones,
}

/// Parse TOML text into a [`PanelConfig`]
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(line[1..line.len() - 1].trim())?;
            continue;
        }

        let (key, value) = split_key_value(line).ok_or(ParseError::InvalidValue)?;
        let value = parse_int(value)?;
        apply_value(&mut config, section, key, value)?;
    }

    validate(&config)?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header {
        "thresholds" => Ok(Section::Thresholds),
        "joystick.x" => Ok(Section::JoystickX),
        "joystick.y" => Ok(Section::JoystickY),
        "ranges" => Ok(Section::Ranges),
        "timing" => Ok(Section::Timing),
        "tones" => Ok(Section::Tones),
        _ => Err(ParseError::InvalidSection),
    }
}

fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse a decimal integer with optional sign and `_` separators
fn parse_int(value: &str) -> Result<i32, ParseError> {
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let mut result: i64 = 0;
    let mut seen_digit = false;

    for b in digits.bytes() {
        match b {
            b'0'..=b'9' => {
                result = result * 10 + (b - b'0') as i64;
                if result > i32::MAX as i64 + 1 {
                    return Err(ParseError::OutOfRange);
                }
                seen_digit = true;
            }
            b'_' if seen_digit => {}
            _ => return Err(ParseError::InvalidValue),
        }
    }

    if !seen_digit {
        return Err(ParseError::InvalidValue);
    }

    let result = if negative { -result } else { result };
    i32::try_from(result).map_err(|_| ParseError::OutOfRange)
}

fn as_raw(value: i32) -> Result<u16, ParseError> {
    if (0..=ADC_MAX as i32).contains(&value) {
        Ok(value as u16)
    } else {
        Err(ParseError::OutOfRange)
    }
}

fn as_millis(value: i32) -> Result<u32, ParseError> {
    if value >= 0 {
        Ok(value as u32)
    } else {
        Err(ParseError::OutOfRange)
    }
}

fn apply_axis(axis: &mut AxisCalibration, key: &str, value: i32) -> Result<(), ParseError> {
    let raw = as_raw(value)?;
    match key {
        "low" => axis.low = raw,
        "middle_low" => axis.middle_low = raw,
        "middle_high" => axis.middle_high = raw,
        "high" => axis.high = raw,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_value(
    config: &mut PanelConfig,
    section: Section,
    key: &str,
    value: i32,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Thresholds => match key {
            "fan_low" => config.thresholds.fan_low = value,
            "fan_medium" => config.thresholds.fan_medium = value,
            "fan_high" => config.thresholds.fan_high = value,
            "humidifier_on" => config.thresholds.humidifier_on = value,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::JoystickX => apply_axis(&mut config.x_axis, key, value)?,
        Section::JoystickY => apply_axis(&mut config.y_axis, key, value)?,
        Section::Ranges => match key {
            "temperature_min" => config.temperature.min = value,
            "temperature_max" => config.temperature.max = value,
            "humidity_min" => config.humidity.min = value,
            "humidity_max" => config.humidity.max = value,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Timing => match key {
            "tick_ms" => config.timing.tick_ms = as_millis(value)?,
            "debounce_ms" => config.timing.debounce_ms = as_millis(value)?,
            "settle_ms" => config.timing.settle_ms = as_millis(value)?,
            "samples" => {
                config.timing.samples = u16::try_from(value).map_err(|_| ParseError::OutOfRange)?
            }
            "sample_interval_ms" => config.timing.sample_interval_ms = as_millis(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Tones => match key {
            "confirm_ms" => config.tones.confirm_ms = as_millis(value)?,
            "alert_ms" => config.tones.alert_ms = as_millis(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
    }
    Ok(())
}

/// Cross-field checks that single keys cannot express
fn validate(config: &PanelConfig) -> Result<(), ParseError> {
    for range in [&config.temperature, &config.humidity] {
        if range.min >= range.max || !range.within_limit() {
            return Err(ParseError::OutOfRange);
        }
    }
    if !config.x_axis.is_usable() || !config.y_axis.is_usable() {
        return Err(ParseError::OutOfRange);
    }
    if config.timing.tick_ms == 0 || config.timing.samples == 0 {
        return Err(ParseError::OutOfRange);
    }
    Ok(())
}
