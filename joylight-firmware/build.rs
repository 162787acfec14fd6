//! Build script for joylight-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and compiles it into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use joylight_core::config::BoardConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths and scripts
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml and write `board_config.rs` into `OUT_DIR`
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the joylight-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse into the firmware's own config type; unknown keys are rejected
    let config: BoardConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Configuration validation failed                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("• {}", e))
        );
    }

    let generated = render_config(&config);
    fs::write(out_dir.join("board_config.rs"), generated).expect("write board_config.rs");

    println!("cargo:warning=board.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the configuration as a Rust constant
fn render_config(config: &BoardConfig) -> String {
    format!(
        "// Generated by build.rs from board.toml\n\
         pub const BOARD_CONFIG: BoardConfig = BoardConfig {{\n    \
             loop_period_ms: {loop_period_ms},\n    \
             joystick: JoystickConfig {{\n        \
                 adc_max: {adc_max},\n        \
                 center: {center},\n        \
                 deadzone: {deadzone},\n    \
             }},\n    \
             input: InputConfig {{\n        \
                 debounce_ms: {debounce_ms},\n    \
             }},\n    \
             leds: LedConfig {{\n        \
                 pwm_max: {pwm_max},\n        \
                 clock_divider: {clock_divider},\n    \
             }},\n    \
             display: DisplayConfig {{\n        \
                 i2c_address: {i2c_address:#04x},\n        \
                 i2c_frequency_hz: {i2c_frequency_hz},\n    \
             }},\n\
         }};\n",
        loop_period_ms = config.loop_period_ms,
        adc_max = config.joystick.adc_max,
        center = config.joystick.center,
        deadzone = config.joystick.deadzone,
        debounce_ms = config.input.debounce_ms,
        pwm_max = config.leds.pwm_max,
        clock_divider = config.leds.clock_divider,
        i2c_address = config.display.i2c_address,
        i2c_frequency_hz = config.display.i2c_frequency_hz,
    )
}
