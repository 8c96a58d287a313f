//! Draw command implementation.

use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::time::Instant;

use dragonfold::{FoldPolicy, Gradient, generate_dragon_curve};

use super::common::{DrawStyle, curve_to_svg, parse_folds};
use super::render::{PNG_FILENAME, render_png};

/// Execute the draw command.
pub fn cmd_draw(args: &[String]) {
    let mut folds_arg: Option<&String> = None;
    let mut angle = FRAC_PI_2;
    let mut alternate = false;
    let mut style = DrawStyle::default();
    let mut output_path: Option<&str> = None;
    let mut save = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--angle" => {
                i += 1;
                if i < args.len() {
                    angle = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid angle: {} (expected radians)", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--alternate" => {
                alternate = true;
            }
            "-g" | "--gradient" => {
                i += 1;
                if i < args.len() {
                    style.gradient = parse_gradient(&args[i]);
                }
            }
            "--background" => {
                i += 1;
                if i < args.len() {
                    style.background = args[i].clone();
                }
            }
            "-w" | "--stroke-width" => {
                i += 1;
                if i < args.len() {
                    style.stroke_width = args[i].parse().unwrap_or(2.0);
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--save" => {
                save = true;
            }
            arg => {
                if folds_arg.is_none() {
                    folds_arg = Some(&args[i]);
                } else {
                    eprintln!("Unexpected argument: {}", arg);
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let folds = parse_folds(folds_arg);
    let policy = FoldPolicy::from_alternate(alternate);

    let start = Instant::now();
    let points = generate_dragon_curve(folds, angle, policy);
    eprintln!(
        "Generated {} points ({} folds) in {:?}",
        points.len(),
        folds,
        start.elapsed()
    );

    let svg = curve_to_svg(&points, folds, &style);

    match output_path {
        Some("-") | None => {
            println!("{}", svg);
        }
        Some(path) => {
            fs::write(path, &svg).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }

    if save {
        match render_png(&svg, PNG_FILENAME) {
            Ok(()) => eprintln!("Wrote: {}", PNG_FILENAME),
            Err(e) => {
                eprintln!("PNG render failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Parse a gradient name, treating "none" as solid-color mode and
/// rejecting anything outside the known set.
fn parse_gradient(name: &str) -> Option<Gradient> {
    if name.eq_ignore_ascii_case("none") {
        return None;
    }
    match Gradient::from_name(name) {
        Some(g) => Some(g),
        None => {
            eprintln!(
                "Unknown gradient: {}. Use 'gradients' command to list available gradients.",
                name
            );
            std::process::exit(1);
        }
    }
}
