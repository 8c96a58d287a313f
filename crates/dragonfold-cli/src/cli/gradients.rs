//! Gradients command implementation.

use dragonfold::Gradient;

/// Execute the gradients command.
pub fn cmd_gradients() {
    println!("Available gradients:");
    println!("  none (solid orange)");
    for gradient in Gradient::all() {
        println!("  {}", gradient.name());
    }
}
