use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use tintlog::cli::Cli;
use tintlog::config::{Config, Source};
use tintlog::{Level, LogError, Logger, terminate};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tintlog: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &Config) -> Result<(), LogError> {
    match config.open_output()? {
        Some(file) => emit(&mut Logger::new(file), config),
        None => emit(&mut Logger::new(io::stderr()), config),
    }
}

/// Write every message from the configured source to `logger`.
fn emit<W: Write>(logger: &mut Logger<W>, config: &Config) -> Result<(), LogError> {
    match &config.source {
        Source::Message(message) => write_one(logger, config.level, message),
        Source::Stdin => {
            let mut reader = io::stdin().lock();
            let mut buf = Vec::new();
            loop {
                buf.clear();
                if reader.read_until(b'\n', &mut buf)? == 0 {
                    return Ok(());
                }
                // Invalid UTF-8 is replaced, not dropped.
                let line = String::from_utf8_lossy(trim_line_ending(&buf));
                write_one(logger, config.level, &line)?;
            }
        }
    }
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Write one record; a fatal record ends the process even if the write failed.
fn write_one<W: Write>(logger: &mut Logger<W>, level: Level, message: &str) -> Result<(), LogError> {
    let written = logger.try_log(level, message);
    if level == Level::Fatal {
        terminate();
    }
    written
}
