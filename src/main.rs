mod align;
mod diff;
mod git;
mod rows;
mod split;
mod text;
mod theme;
mod ui;
mod viewer;

use crossterm::terminal;
use std::fs;
use std::io;
use std::path::Path;
use viewer::Viewer;

fn print_help() {
    println!("sidediff - side-by-side diff viewer for the terminal");
    println!("\nUsage:");
    println!("  sidediff <old> <new>   Compare two files");
    println!("  sidediff <file>        Compare a file against its git HEAD version");
    println!("\nKeys:");
    println!("  ↑/↓        Scroll one row");
    println!("  PgUp/PgDn  Scroll one page");
    println!("  Home/End   Jump to start/end");
    println!("  t          Toggle theme");
    println!("  q/Esc/^X   Quit");
}

fn read_file(path: &str) -> String {
    if !Path::new(path).exists() {
        eprintln!("Error: file '{}' does not exist.", path);
        std::process::exit(1);
    }
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "-h" || args[1] == "--help") {
        print_help();
        return Ok(());
    }

    let (original, modified, left_title, right_title) = match args.len() {
        // One path: committed version on the left, working copy on the right.
        2 => {
            let path = &args[1];
            let head = match git::head_content(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error: cannot diff '{}' against HEAD: {}", path, e);
                    std::process::exit(1);
                }
            };
            let working = read_file(path);
            (head, working, format!("{} @ HEAD", path), path.clone())
        }
        3 => {
            let old_path = &args[1];
            let new_path = &args[2];
            (
                read_file(old_path),
                read_file(new_path),
                old_path.clone(),
                new_path.clone(),
            )
        }
        _ => {
            eprintln!("Error: expected one or two paths.");
            eprintln!("Usage: sidediff <old> <new>  |  sidediff <file>");
            std::process::exit(1);
        }
    };

    let (width, _) = terminal::size()?;
    if width < viewer::MIN_WIDTH {
        eprintln!(
            "Error: terminal too narrow for a two-pane view (min {} columns).",
            viewer::MIN_WIDTH
        );
        std::process::exit(1);
    }

    let model = align::align_texts(&original, &modified);
    Viewer::new(model, left_title, right_title).run()
}
