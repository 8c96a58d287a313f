//! Info command implementation - fold/corner arithmetic for a fold count.

use dragonfold::{nb_corners, nb_folds, nb_points};

use super::common::parse_folds;

/// Execute the info command.
pub fn cmd_info(args: &[String]) {
    let folds = parse_folds(args.first());

    let corners = nb_corners(folds);
    let points = nb_points(folds);

    println!("Folds:    {}", folds);
    println!("Corners:  {}", corners);
    println!("Points:   {}", points);
    println!("nb_folds({}) = {}", corners, nb_folds(corners as f64));
}
