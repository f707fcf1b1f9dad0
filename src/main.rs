//! CLI entry point for tree

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser};
use dirtree::tree::{DEFAULT_DEPTH, DEFAULT_PATH};
use dirtree::{OutputConfig, TreeBuilder, TreeConfig, TreeError, TreeFormatter};
use tracing_subscriber::{EnvFilter, fmt};

const HELP_TEXT: &str = "usage: tree [--help] [<option> ...] [<path>]

These are the available options:
  -d or --depth     The depth of the tree (default: 1). Usage: -d 2.

If no path provided, \"./\" is used
";

const BAD_FORMAT_TEXT: &str = "The command was badly formatted, so arguments could not be parsed. \
Please use 'tree --help' for help.";

#[derive(Parser, Debug)]
#[command(name = "tree")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Descend N directory levels
    #[arg(short = 'd', long = "depth", value_name = "N", default_value_t = DEFAULT_DEPTH, value_parser = parse_depth)]
    depth: usize,

    /// File or directory to display
    #[arg(default_value = DEFAULT_PATH)]
    path: PathBuf,
}

/// What a successfully parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Run(TreeConfig),
}

/// Accept digits only: no sign, no whitespace, not empty.
fn parse_depth(s: &str) -> Result<usize, String> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid depth '{}': expected digits only", s));
    }
    s.parse::<usize>().map_err(|e| format!("invalid depth '{}': {}", s, e))
}

/// Parse `tree [--help] [-d <n> | --depth <n>] [<path>]`.
///
/// `--help` is honoured only as the first argument and ignores everything after it.
fn parse_invocation<I, T>(argv: I) -> Result<Invocation, TreeError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.get(1).is_some_and(|arg| arg == "--help") {
        return Ok(Invocation::Help);
    }

    let matches = Args::command()
        .try_get_matches_from(&argv)
        .map_err(|e| TreeError::ArgumentFormat(e.to_string()))?;

    let from_cli = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);
    if from_cli("depth") && from_cli("path") {
        let depth_index = matches.index_of("depth");
        let path_index = matches.index_of("path");
        if path_index < depth_index {
            return Err(TreeError::ArgumentFormat(
                "options must come before the path".to_string(),
            ));
        }
    }

    let args =
        Args::from_arg_matches(&matches).map_err(|e| TreeError::ArgumentFormat(e.to_string()))?;
    Ok(Invocation::Run(TreeConfig::new(args.path, args.depth)))
}

/// Decide whether to style output from the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_logging();

    let config = match parse_invocation(std::env::args_os()) {
        Ok(Invocation::Help) => {
            print!("{}", HELP_TEXT);
            return;
        }
        Ok(Invocation::Run(config)) => config,
        Err(e) => {
            tracing::debug!("argument parsing failed: {}", e);
            eprintln!("{}", BAD_FORMAT_TEXT);
            process::exit(1);
        }
    };
    tracing::debug!(?config, "resolved configuration");

    let tree = match TreeBuilder::new(config).build() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("tree: {}", e);
            process::exit(1);
        }
    };

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(),
    });
    if let Err(e) = formatter.print(&tree) {
        eprintln!("tree: error writing output: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, TreeError> {
        parse_invocation(std::iter::once("tree").chain(args.iter().copied()))
    }

    fn run(path: &str, depth: usize) -> Invocation {
        Invocation::Run(TreeConfig::new(path, depth))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]).unwrap(), run("./", 1));
    }

    #[test]
    fn test_path_only() {
        assert_eq!(parse(&["some/dir"]).unwrap(), run("some/dir", 1));
    }

    #[test]
    fn test_depth_short_and_long() {
        assert_eq!(parse(&["-d", "3"]).unwrap(), run("./", 3));
        assert_eq!(parse(&["--depth", "0", "x"]).unwrap(), run("x", 0));
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["--help"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["--help", "-d", "abc", "a", "b"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn test_help_not_first_is_rejected() {
        assert!(parse(&["-d", "2", "--help"]).is_err());
    }

    #[test]
    fn test_non_numeric_depth_rejected() {
        assert!(matches!(
            parse(&["-d", "abc"]),
            Err(TreeError::ArgumentFormat(_))
        ));
        assert!(parse(&["-d", "+3"]).is_err());
        assert!(parse(&["-d", ""]).is_err());
        assert!(parse(&["-d"]).is_err());
    }

    #[test]
    fn test_trailing_arguments_rejected() {
        assert!(parse(&["-d", "3", "extra_path", "garbage"]).is_err());
        assert!(parse(&["a", "b"]).is_err());
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(parse(&["-x"]).is_err());
        assert!(parse(&["--level", "2"]).is_err());
    }

    #[test]
    fn test_path_before_option_rejected() {
        assert!(parse(&["some/dir", "-d", "2"]).is_err());
    }

    #[test]
    fn test_repeated_depth_rejected() {
        assert!(parse(&["-d", "1", "-d", "2"]).is_err());
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("0"), Ok(0));
        assert_eq!(parse_depth("42"), Ok(42));
        assert!(parse_depth("-1").is_err());
        assert!(parse_depth(" 1").is_err());
        assert!(parse_depth("99999999999999999999999999").is_err());
    }
}
