mod chat;
mod cli;
mod config;
mod content;
mod course;
mod markdown;
mod model;
mod steps;
mod tui;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{e}");
        process::exit(1);
    }
}
