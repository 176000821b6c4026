//! Terminal terrain + pathfinding demo.
//!
//! Generates a diamond-square map, runs one A* search between the first
//! and last walkable cells, and prints the result as ASCII.
//!
//! Run: cargo run --bin terrain-path [seed]

use gridway_core::{Grid, Point, Terrain};
use gridway_search::Pathfinder;
use gridway_terrain::{DiamondSquareBuilder, MapBuilder};

fn glyph(t: Terrain) -> char {
    match t {
        Terrain::DeepWater => '~',
        Terrain::ShallowWater => '-',
        Terrain::Desert => '.',
        Terrain::Plains => ',',
        Terrain::Grassland => '"',
        Terrain::Forest => 'T',
        Terrain::Hills => 'n',
        Terrain::Mountains => '^',
        Terrain::Peaks => 'A',
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("Error: seed must be an integer: {e}");
            std::process::exit(1);
        })
        .unwrap_or(2026);

    let map = DiamondSquareBuilder::new(5, seed).build();
    let mut grid = match Grid::from_map(&map) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let walkables: Vec<Point> = grid
        .bounds()
        .iter()
        .filter(|&p| grid.is_walkable(p))
        .collect();
    let (Some(&start), Some(&target)) = (walkables.first(), walkables.last()) else {
        eprintln!("map {}x{} has no walkable cells", grid.width(), grid.height());
        std::process::exit(1);
    };

    let mut finder = Pathfinder::new(grid.bounds());
    match finder.find_path(&grid, start, target) {
        Some(path) => {
            println!(
                "seed {seed}: path {start} -> {target}, {} steps, cost {}",
                path.len() - 1,
                finder.cost_to(target).unwrap_or(0),
            );
            grid.set_current_path(path);
        }
        None => println!("seed {seed}: no path from {start} to {target}"),
    }

    for y in 0..grid.height() {
        let mut line = String::with_capacity(grid.width() as usize);
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let on_path = grid.current_path().is_some_and(|path| path.contains(&p));
            if p == start {
                line.push('S');
            } else if p == target {
                line.push('G');
            } else if on_path {
                line.push('*');
            } else {
                line.push(grid.at(p).map_or(' ', glyph));
            }
        }
        println!("{line}");
    }
}
