use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::utilities::build_url::Request;

#[derive(Parser, Debug)]
#[command(version, about = "Prints the first gif images found on a search results page")]
struct Args {
    /// URL prefix of the search page, e.g. https://example.com/search/
    base_path: Option<String>,

    /// Text appended to the base path, sent without URL encoding
    search_query: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,

    /// TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(long)]
    verbose: bool,
}

/// Flags recognised in front of the positional arguments.
const LEADING_FLAGS: [&str; 5] = ["--verbose", "--help", "-h", "--version", "-V"];

#[derive(Debug)]
pub struct Invocation {
    pub request: Request,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug)]
pub enum ParseOutcome {
    Run(Invocation),
    /// Not enough arguments, or a `--config` without its file.
    Usage,
    /// `--help` or `--version`: clap prints and exits.
    Exit(clap::Error),
}

pub fn parse_args<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = match Args::try_parse_from(options_before_positionals(args)) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return ParseOutcome::Exit(e)
        }
        Err(_) => return ParseOutcome::Usage,
    };

    match (args.base_path, args.search_query) {
        (Some(base_path), Some(search_query)) => ParseOutcome::Run(Invocation {
            request: Request::new(base_path, search_query),
            config: args.config,
            verbose: args.verbose,
        }),
        _ => ParseOutcome::Usage,
    }
}

/// Options are only read before the first positional argument. From there on
/// everything is passed through as-is, so a base path or query starting with
/// `-` is never mistaken for a flag.
fn options_before_positionals<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut parsed: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--config") => {
                parsed.push(arg);
                parsed.extend(args.next());
            }
            Some(flag) if flag.starts_with("--config=") || LEADING_FLAGS.contains(&flag) => {
                parsed.push(arg);
            }
            Some("--") => {
                parsed.push(arg);
                parsed.extend(args);
                return parsed;
            }
            _ => {
                parsed.push(OsString::from("--"));
                parsed.push(arg);
                parsed.extend(args);
                return parsed;
            }
        }
    }

    parsed
}

pub fn usage() -> String {
    let program = env!("CARGO_PKG_NAME");
    format!(
        "Usage: {} <base_path> <search_query>\nExample: {} https://example.com/search/ cats",
        program, program
    )
}
