use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::{env, process};

use linecore::core::Command;
use linecore::services::settings::{self, Settings};
use linecore::view::Frame;
use linecore::{CommandOutcome, Session};

mod logging;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: linecore <file> [script]");
        process::exit(2);
    };

    if let Err(e) = settings::ensure_settings_file() {
        eprintln!("linecore: settings unavailable: {e}");
    }
    let settings = settings::load_settings().unwrap_or_else(Settings::default);
    let logging = logging::init(settings.log_filter.as_deref());

    let mut session = Session::open(
        Path::new(path),
        Box::new(settings.metrics.to_metrics()),
        settings.viewport.to_geometry(),
    );

    let script: Box<dyn BufRead> = match args.get(2) {
        Some(script) => Box::new(BufReader::new(File::open(script)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut stdout = io::stdout().lock();
    for (number, line) in script.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(command) = Command::parse(&line) else {
            eprintln!("line {}: unknown command: {}", number + 1, line);
            continue;
        };
        match session.execute(command) {
            CommandOutcome::Block(block) => {
                stdout.write_all(&block)?;
                stdout.write_all(b"\n")?;
            }
            CommandOutcome::Rejected(reason) => {
                eprintln!("line {}: {}: {}", number + 1, line, reason);
            }
            CommandOutcome::Changed | CommandOutcome::Unchanged => {}
        }
    }

    print_frame(&mut stdout, &session.frame())?;
    if session.is_modified() {
        tracing::info!("exiting with unsaved changes");
        if let Some(logging) = &logging {
            eprintln!(
                "linecore: unsaved changes (log: {})",
                logging.log_dir().display()
            );
        }
    }
    Ok(())
}

fn print_frame(out: &mut impl Write, frame: &Frame<'_>) -> io::Result<()> {
    for line in &frame.lines {
        write!(out, "{:>5} ", line.row + 1)?;
        out.write_all(line.visible_text())?;
        out.write_all(b"\n")?;
    }
    writeln!(
        out,
        "-- cursor {}:{}{} --",
        frame.cursor.0 + 1,
        frame.cursor.1 + 1,
        if frame.modified { " [modified]" } else { "" }
    )
}
