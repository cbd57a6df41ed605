//! Pattern file tool - inspect, advance and convert Game of Life
//! patterns from the command line.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use life_patterns::files::{self, FileError};
use life_patterns::format::{CellsWriter, PatternWriter};
use life_patterns::life;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pattern-file> [steps] [output-file]", args[0]);
        eprintln!();
        eprintln!("Inspect a Game of Life pattern file (.cells or .rle), optionally");
        eprintln!("advance it a number of generations and write the result. The");
        eprintln!("output format is chosen by the output file extension.");
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
    let output = args.get(3).map(PathBuf::from);

    let pattern = files::load_pattern(&input).unwrap_or_else(|e| exit_with_error(e));

    if let Some(name) = &pattern.metadata.name {
        println!("Name: {name}");
    }
    if let Some(author) = &pattern.metadata.author {
        println!("Author: {author}");
    }
    if let Some(description) = &pattern.metadata.description {
        println!("Description: {description}");
    }

    let mut grid = pattern.grid;
    println!(
        "Grid: {}x{} cells, population {}",
        grid.width(),
        grid.height(),
        life::population(&grid)
    );

    for _ in 0..steps {
        life::step(&mut grid);
    }
    if steps > 0 {
        println!(
            "After {steps} generations: population {}",
            life::population(&grid)
        );
    }

    // Echo small grids so the pattern is visible in the terminal.
    if grid.width() <= 72 && grid.height() <= 48 {
        println!();
        print!("{}", CellsWriter.serialize(&grid));
    }

    if let Some(path) = output {
        files::save_pattern(&path, &grid).unwrap_or_else(|e| exit_with_error(e));
        println!("Wrote {}", path.display());
    }
}

fn exit_with_error(error: FileError) -> ! {
    eprintln!("Error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    process::exit(1)
}
