//! Generates the default easing and gamma lookup tables.
//!
//! The tables are written to `$OUT_DIR/tables.rs` and pulled into
//! `src/table/mod.rs` with `include!`, so the firmware never evaluates
//! transcendental functions at runtime.
#![allow(clippy::print_stdout)]

use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs};

/// Number of samples in every easing curve
const EASING_SAMPLES: usize = 256;

/// Highest output level of the 12-bit PWM domain
const MAX_LEVEL: u32 = (1 << 12) - 1;

/// Perceptual gamma exponent
const GAMMA: f64 = 2.2;

fn s_curve(t: f64) -> f64 {
    (1.0 - libm::cos(core::f64::consts::PI * t)) / 2.0
}

fn linear(t: f64) -> f64 {
    t
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn write_easing(out: &mut String, name: &str, doc: &str, curve: fn(f64) -> f64) {
    writeln!(out, "/// {doc}").unwrap();
    writeln!(out, "pub(crate) const {name}: [f32; {EASING_SAMPLES}] = [").unwrap();
    for i in 0..EASING_SAMPLES {
        let sample = match i {
            0 => 0.0,
            i if i == EASING_SAMPLES - 1 => 1.0,
            i => curve(i as f64 / (EASING_SAMPLES - 1) as f64).clamp(0.0, 1.0) as f32,
        };
        writeln!(out, "    {sample:?},").unwrap();
    }
    writeln!(out, "];\n").unwrap();
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
fn write_gamma(out: &mut String, name: &str, gamma: f64) {
    let max = MAX_LEVEL as f64;
    writeln!(out, "/// Gamma {gamma} correction for the 12-bit domain").unwrap();
    writeln!(out, "pub(crate) const {name}: [u16; {}] = [", MAX_LEVEL + 1).unwrap();
    for level in 0..=MAX_LEVEL {
        let corrected = libm::round(libm::pow(level as f64 / max, gamma) * max) as u16;
        writeln!(out, "    {corrected},").unwrap();
    }
    writeln!(out, "];\n").unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut out = String::new();
    out.push_str("// @generated by build.rs\n\n");
    write_easing(
        &mut out,
        "S_CURVE_SAMPLES",
        "Cosine ease-in/ease-out",
        s_curve,
    );
    write_easing(&mut out, "LINEAR_SAMPLES", "Constant-rate progress", linear);
    write_gamma(&mut out, "GAMMA_2_2_LEVELS", GAMMA);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR env var not set"));
    fs::write(out_dir.join("tables.rs"), out).expect("failed to write lookup tables");
}
