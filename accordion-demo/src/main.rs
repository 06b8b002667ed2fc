mod cli;
mod demo;
mod error;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

use crate::cli::{Args, Mode};
use crate::error::DemoError;
use crate::terminal::Terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn init_logging(path: &Path, level: LevelFilter) -> Result<(), DemoError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| DemoError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let log_file = File::create(path).map_err(|source| DemoError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

fn run(mode: Mode) -> Result<(), DemoError> {
    let mut group = demo::parent_group(mode)?;
    let mut term = Terminal::new()?;

    loop {
        let mut root = demo::screen(&mut group, mode);
        term.render(&root)?;

        for event in term.poll(POLL_INTERVAL)? {
            match event {
                Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    info!("Quit requested");
                    return Ok(());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if demo::click(&mut group, &root, term.layout(), mouse.column, mouse.row)
                        .is_some()
                    {
                        // Later clicks in this batch hit-test the new layout
                        root = demo::screen(&mut group, mode);
                        term.render(&root)?;
                    }
                }
                _ => {}
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_path = match args.log_file.clone().or_else(paths::log_file) {
        Some(path) => path,
        None => {
            eprintln!("Error: {}", DemoError::NoLogDir);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&log_path, args.log_level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    info!("Starting demo in {} mode", args.mode);

    if let Err(e) = run(args.mode) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
