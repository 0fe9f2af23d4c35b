//! Build script for ambiente-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections every panel.toml must carry, with their integer keys
const SECTIONS: &[(&str, &[&str])] = &[
    (
        "thresholds",
        &["fan_low", "fan_medium", "fan_high", "humidifier_on"],
    ),
    (
        "ranges",
        &[
            "temperature_min",
            "temperature_max",
            "humidity_min",
            "humidity_max",
        ],
    ),
    (
        "timing",
        &[
            "tick_ms",
            "debounce_ms",
            "settle_ms",
            "samples",
            "sample_interval_ms",
        ],
    ),
    ("tones", &["confirm_ms", "alert_ms"]),
];

const AXIS_KEYS: &[&str] = &["low", "middle_low", "middle_high", "high"];

const ADC_MAX: i64 = 4095;

/// Largest magnitude of a `[ranges]` bound
const RANGE_LIMIT: i64 = 10_000;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds panel.toml at build time.                   ║\n\
            ║  Please create one in the ambiente-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();

    for (section, keys) in SECTIONS {
        check_section(&config, section, keys, &mut errors);
    }
    for axis in ["x", "y"] {
        let section = format!("joystick.{}", axis);
        let table = config.get("joystick").and_then(|j| j.get(axis));
        check_table(table, &section, AXIS_KEYS, &mut errors);
    }

    if errors.is_empty() {
        validate_ranges(&config, &mut errors);
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid panel.toml                                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    warn_threshold_order(&config);

    println!("cargo:warning=panel.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn check_section(config: &toml::Value, section: &str, keys: &[&str], errors: &mut Vec<String>) {
    check_table(config.get(section), section, keys, errors);
}

fn check_table(
    table: Option<&toml::Value>,
    section: &str,
    keys: &[&str],
    errors: &mut Vec<String>,
) {
    let table = match table {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return;
        }
    };

    for key in keys {
        match table.get(*key) {
            Some(toml::Value::Integer(_)) => {}
            Some(_) => errors.push(format!("[{}] '{}' must be an integer", section, key)),
            None => errors.push(format!("[{}] missing '{}'", section, key)),
        }
    }

    for key in table.keys() {
        if !keys.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn int(config: &toml::Value, section: &str, key: &str) -> i64 {
    section
        .split('.')
        .try_fold(config, |value, part| value.get(part))
        .and_then(|table| table.get(key))
        .and_then(|value| value.as_integer())
        .unwrap_or_default()
}

/// Range checks, run once every key is known to be an integer
fn validate_ranges(config: &toml::Value, errors: &mut Vec<String>) {
    for axis in ["joystick.x", "joystick.y"] {
        for key in AXIS_KEYS {
            let value = int(config, axis, key);
            if !(0..=ADC_MAX).contains(&value) {
                errors.push(format!("[{}] {} must be 0-{}", axis, key, ADC_MAX));
            }
        }
        if int(config, axis, "low") == int(config, axis, "high") {
            errors.push(format!("[{}] low and high must differ", axis));
        }
    }

    for name in ["temperature", "humidity"] {
        let min = int(config, "ranges", &format!("{}_min", name));
        let max = int(config, "ranges", &format!("{}_max", name));
        if min >= max {
            errors.push(format!("[ranges] {}_min must be below {}_max", name, name));
        }
        if min.abs() > RANGE_LIMIT || max.abs() > RANGE_LIMIT {
            errors.push(format!("[ranges] {} bounds must be within ±{}", name, RANGE_LIMIT));
        }
    }

    for key in ["tick_ms", "samples"] {
        if int(config, "timing", key) < 1 {
            errors.push(format!("[timing] {} must be at least 1", key));
        }
    }
    for (section, keys) in &SECTIONS[2..] {
        for key in keys.iter() {
            if int(config, section, key) < 0 {
                errors.push(format!("[{}] {} cannot be negative", section, key));
            }
        }
    }
    if int(config, "timing", "samples") > u16::MAX as i64 {
        errors.push(format!("[timing] samples must be at most {}", u16::MAX));
    }
}

/// Fan thresholds load in any order; warn when they are not ascending
fn warn_threshold_order(config: &toml::Value) {
    let low = int(config, "thresholds", "fan_low");
    let medium = int(config, "thresholds", "fan_medium");
    let high = int(config, "thresholds", "fan_high");

    if !(low <= medium && medium <= high) {
        println!(
            "cargo:warning=panel.toml fan thresholds are not ascending ({} / {} / {})",
            low, medium, high
        );
    }
}
