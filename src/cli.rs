//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::logging::{self, Verbosity};
use crate::core::paths::{resolve_root, DEFAULT_EXT, DEFAULT_OUTPUT, DEFAULT_TEST_DIR};
use crate::flows::combine::{run_combine, CombineOptions, EmitOptions};

/// combine-tests - gather test files into one annotated text file.
#[derive(Parser, Debug)]
#[command(name = "combine-tests")]
#[command(
    author,
    version,
    about,
    long_about = r#"combine-tests finds every *.test.<EXT> file under ROOT/<TEST_DIR> (recursively),
and joins them in sorted path order into a single document. Each file is preceded
by a `// file: <path relative to ROOT>` header and its content is trimmed.

The document is printed to stdout and written to ROOT/<OUTPUT>, replacing any
previous file. Files that cannot be read as UTF-8 are reported and skipped.

Examples:
    combine-tests --root ~/code/my-app
    combine-tests --root . --test-dir tests --ext js
    COMBINE_TESTS_ROOT=/srv/app combine-tests --stats
"#
)]
pub struct Cli {
    /// Project directory containing the test directory.
    #[arg(
        long,
        env = "COMBINE_TESTS_ROOT",
        default_value = ".",
        value_name = "ROOT",
        long_help = "Project directory containing the test directory (defaults to the current\n\
directory). Header paths are relative to this root and the output file is written\n\
directly inside it. A missing root is not an error: it simply yields no matches."
    )]
    pub root: PathBuf,

    /// Name of the test directory under ROOT.
    #[arg(
        long,
        env = "COMBINE_TESTS_DIR",
        default_value = DEFAULT_TEST_DIR,
        value_name = "NAME"
    )]
    pub test_dir: String,

    /// Extension matched by the *.test.<EXT> pattern.
    #[arg(
        long,
        env = "COMBINE_TESTS_EXT",
        default_value = DEFAULT_EXT,
        value_name = "EXT",
        long_help = "Extension matched by the *.test.<EXT> pattern. A leading dot is accepted,\n\
so `--ext .ts` and `--ext ts` are equivalent. Matching is case-sensitive."
    )]
    pub ext: String,

    /// Output file name, written inside ROOT.
    #[arg(
        long,
        env = "COMBINE_TESTS_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        value_name = "FILE"
    )]
    pub output: String,

    /// Print a JSON summary to stderr.
    #[arg(
        long,
        long_help = "Print a one-line JSON summary (matched, included, failed, bytes, output)\n\
to stderr after the run."
    )]
    pub stats: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored diagnostics. Useful when your terminal does not support\n\
ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no confirmation line, no logs).
    #[arg(
        short,
        long,
        long_help = "Suppress the confirmation line and log output. The combined document is\n\
still printed to stdout and read errors are still reported."
    )]
    pub quiet: bool,

    /// Verbose mode (repeat for more detail).
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        long_help = "Increase log detail on stderr: -v info, -vv debug, -vvv trace.\n\
RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    fn combine_options(&self) -> CombineOptions {
        CombineOptions {
            test_dir: self.test_dir.clone(),
            ext: self.ext.clone(),
            output: self.output.clone(),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbosity());

    if cli.no_color {
        colored::control::set_override(false);
    }

    let opts = cli.combine_options();
    let emit = EmitOptions {
        quiet: cli.quiet,
        stats: cli.stats,
    };
    debug!(?cli, "parsed arguments");

    let root = resolve_root(cli.root);
    run_combine(&root, &opts, emit)
}
