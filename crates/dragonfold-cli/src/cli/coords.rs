//! Coords command implementation - dump curve coordinates.

use std::f64::consts::FRAC_PI_2;
use std::fs;

use serde::Serialize;

use dragonfold::{FoldPolicy, generate_dragon_curve};

use super::common::parse_folds;

/// Output format for coordinate dumps.
#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Plain,
    Json,
}

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

/// JSON output: the generation parameters plus the polyline.
#[derive(Serialize)]
struct JsonCurve {
    folds: u32,
    angle: f64,
    alternate: bool,
    points: Vec<JsonPoint>,
}

/// Execute the coords command.
pub fn cmd_coords(args: &[String]) {
    let mut folds_arg: Option<&String> = None;
    let mut angle = FRAC_PI_2;
    let mut alternate = false;
    let mut format = OutputFormat::Plain;
    let mut output_path: Option<&str> = None;

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
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].to_lowercase().as_str() {
                        "plain" => OutputFormat::Plain,
                        "json" => OutputFormat::Json,
                        other => {
                            eprintln!("Unknown format: {}. Use 'plain' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
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
    let points = generate_dragon_curve(folds, angle, FoldPolicy::from_alternate(alternate));
    eprintln!("Generated {} points", points.len());

    let output = match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            for p in &points {
                out.push_str(&format!("{:.6},{:.6}\n", p.x, p.y));
            }
            out
        }
        OutputFormat::Json => {
            let curve = JsonCurve {
                folds,
                angle,
                alternate,
                points: points.iter().map(|p| JsonPoint { x: p.x, y: p.y }).collect(),
            };
            serde_json::to_string(&curve).expect("Failed to serialize JSON")
        }
    };

    match output_path {
        Some("-") | None => {
            println!("{}", output);
        }
        Some(path) => {
            fs::write(path, &output).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}
