//! dragonfold - dragon curve generation and rendering
//!
//! Usage:
//!   dragonfold draw <folds> [options]     Render the curve as SVG/PNG
//!   dragonfold coords <folds> [options]   Dump curve coordinates
//!   dragonfold info <folds>               Show fold/corner arithmetic
//!   dragonfold gradients                  List available color gradients

use std::env;

mod cli;

use cli::{cmd_coords, cmd_draw, cmd_gradients, cmd_info};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "draw" => cmd_draw(&args[2..]),
        "coords" => cmd_coords(&args[2..]),
        "info" => cmd_info(&args[2..]),
        "gradients" => cmd_gradients(),
        "help" | "--help" | "-h" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("dragonfold - dragon curve generation and rendering");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} draw <folds> [options]      Render the curve as SVG (and optionally PNG)", prog);
    eprintln!("  {} coords <folds> [options]    Dump curve coordinates", prog);
    eprintln!("  {} info <folds>                Show fold/corner arithmetic", prog);
    eprintln!("  {} gradients                   List available color gradients", prog);
    eprintln!();
    eprintln!("Draw options:");
    eprintln!("  -a, --angle <rad>       Fold angle in radians (default: pi/2)");
    eprintln!("  --alternate             Alternate fold directions up/down");
    eprintln!("  -g, --gradient <name>   Color gradient: none, viridis, inferno, cool, tab");
    eprintln!("                          (default: none = solid orange)");
    eprintln!("  --background <color>    Background color (default: black)");
    eprintln!("  -w, --stroke-width <n>  Stroke width (default: 2.0)");
    eprintln!("  -o, --output <file>     Output SVG file (- for stdout, default: stdout)");
    eprintln!("  --save                  Also rasterize to dragon_curve.png (2000x2000)");
    eprintln!();
    eprintln!("Coords options:");
    eprintln!("  -a, --angle <rad>       Fold angle in radians (default: pi/2)");
    eprintln!("  --alternate             Alternate fold directions up/down");
    eprintln!("  -f, --format <fmt>      Output format: plain, json (default: plain)");
    eprintln!("  -o, --output <file>     Output file (- for stdout, default: stdout)");
    eprintln!();
    eprintln!("The point count is 2^folds + 1 and doubles with every fold;");
    eprintln!("keep folds at roughly 25 or below.");
}
