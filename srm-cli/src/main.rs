use clap::Parser;
use colored::{control, Colorize};
use srm::{search, SearchConfig, SearchError, SearchOutput};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

type Result<T> = std::result::Result<T, SearchError>;

/// Match a regex pattern against every line in a given file or all files
/// in a given directory recursively.
#[derive(Parser)]
#[command(name = "srm", version, about)]
struct Cli {
    /// Path of file or directory to search in.
    path: PathBuf,

    /// Regex to search for in file[s].
    regex: String,

    /// Space separated list of regexes for files to exclude.
    #[arg(short = 'e', long = "exclude", num_args = 0..)]
    exclude: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SRM_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    // Escape codes are part of the output contract, terminal or not
    control::set_override(true);
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = SearchConfig::new(cli.regex, cli.path).with_exclude_patterns(cli.exclude);

    match search(&config) {
        Ok(output) => {
            print_matches(&output);
            Ok(())
        }
        Err(SearchError::NotFileOrDirectory(path)) => {
            eprintln!(
                "File: {} is a neither a file nor a directory. Skipping...",
                path.display()
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn print_matches(output: &SearchOutput) {
    for file_result in &output.file_results {
        for m in &file_result.matches {
            println!(
                "{}:{}: {}",
                file_result.path.display(),
                m.line_number,
                m.text.bright_green()
            );
        }
    }
}
