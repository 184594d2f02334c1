use axmlfmt::{Destination, Formatter, format_files};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Formats Android XML layouts and resources.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Files to format. Reads standard input when none are given
    files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing them
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// Write nothing; list files that are not formatted and exit with status 1
    #[arg(short, long)]
    check: bool,

    /// Number of spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long, default_value_t = false)]
    tabs: bool,
}

impl Args {
    fn formatter(&self) -> Formatter {
        if self.tabs {
            Formatter::new("\t")
        } else {
            Formatter::new(" ".repeat(self.indent))
        }
    }
}

fn format_stdin(formatter: &Formatter, check: bool) -> ExitCode {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        log::error!("Failed to read standard input: {}", e);
        return ExitCode::FAILURE;
    }

    let formatted = match formatter.format_str(&input) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::error!("<stdin>: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if check {
        return if formatted == input {
            ExitCode::SUCCESS
        } else {
            println!("<stdin>");
            ExitCode::FAILURE
        };
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(formatted.as_bytes()).and_then(|_| stdout.flush()) {
        log::error!("Failed to write standard output: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("axmlfmt=warn")).init();

    let args = Args::parse();
    let formatter = args.formatter();

    if args.files.is_empty() {
        if args.write {
            log::warn!("--write has no effect when reading standard input");
        }
        return format_stdin(&formatter, args.check);
    }

    let destination = if args.write {
        Destination::InPlace
    } else {
        Destination::Stdout
    };

    let mut failed = false;
    for result in format_files(&args.files, &formatter) {
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                log::error!("{}", e);
                failed = true;
                continue;
            }
        };

        if args.check {
            if report.is_changed() {
                println!("{}", report.path.display());
                failed = true;
            }
            continue;
        }

        if let Err(e) = destination.emit(&report) {
            log::error!("{}", e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
