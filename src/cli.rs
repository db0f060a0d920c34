//! CLI module - Command-line interface definition and run entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::selector::{Selector, DEFAULT_ALLOW_NAMES, DEFAULT_SUFFIXES};
use crate::report::excerpts::{ExcerptSpec, DEFAULT_ASSETS_DIR, DEFAULT_MANIFEST};
use crate::report::{self, SnapshotOptions};

/// zrzut - snapshot a project's selected files into a single text report.
#[derive(Parser, Debug)]
#[command(name = "zrzut")]
#[command(
    author,
    version,
    about,
    long_about = r#"zrzut walks a project tree, selects files by suffix or exact file name,
and concatenates their contents into one plain-text report.

The report holds up to three sections, in a fixed order:
1. excerpts of selected asset files (--assets / --excerpt), each under a
   labeled header
2. one content block per selected file, naming it by absolute path
3. an indented tree of all folders and files under the root (--tree)

With no section flags the report is the bare sequence of content blocks.

Examples:
    zrzut
    zrzut ~/projects/app -o snapshot.txt --assets --tree
    zrzut . --ext rs --ext toml --name Makefile
    zrzut . --excerpt "piesni.json:40" --tree --stats
"#
)]
pub struct Cli {
    /// Root directory to snapshot.
    #[arg(
        value_name = "ROOT",
        default_value = ".",
        env = "ZRZUT_ROOT",
        long_help = "Root directory to snapshot (defaults to the current directory).\n\n\
The root is canonicalized first, so file paths in the report are absolute."
    )]
    pub root: PathBuf,

    /// Report file to write (overwritten if it exists).
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "wynikowy.txt",
        env = "ZRZUT_OUTPUT",
        long_help = "Report file to write. An existing file is overwritten unconditionally.\n\n\
When the path lies inside ROOT, the report lists itself in the tree section\n\
like any other file."
    )]
    pub output: PathBuf,

    /// File suffixes whose contents are dumped (leading dot optional).
    #[arg(
        long,
        value_name = "SUFFIX",
        default_values_t = DEFAULT_SUFFIXES.iter().map(|s| s.to_string()),
        long_help = "File suffixes whose contents are dumped. Repeat the flag for several\n\
suffixes. Values are compared case-sensitively against the end of the base\n\
file name; a leading dot may be omitted (rs and .rs are equivalent).\n\n\
Passing --ext replaces the default suffix set (Kotlin sources: .kt, .kts)."
    )]
    pub ext: Vec<String>,

    /// File names dumped regardless of suffix.
    #[arg(
        long,
        value_name = "NAME",
        default_values_t = DEFAULT_ALLOW_NAMES.iter().map(|s| s.to_string()),
        long_help = "Exact file names whose contents are dumped even when no suffix matches.\n\
Repeat the flag for several names. Comparison is case-sensitive and against\n\
the base file name only.\n\n\
Passing --name replaces the default allow-list (Android resource files plus\n\
two liturgical-calendar asset files)."
    )]
    pub name: Vec<String>,

    /// Start the report with excerpts of the built-in asset manifest.
    #[arg(
        long,
        long_help = "Start the report with an asset excerpt section using the built-in\n\
manifest: Wigilia Paschalna.json and piesni.json limited to their first 100\n\
lines, 11 czerwca - św. Barnaby Apostoła.json in full."
    )]
    pub assets: bool,

    /// Asset excerpt entry, NAME or NAME:LINES (implies --assets).
    #[arg(
        long,
        value_name = "NAME[:LINES]",
        value_parser = parse_excerpt_spec,
        long_help = "Replace the built-in asset manifest with custom entries. Repeat the flag\n\
for several entries. NAME alone excerpts the whole file; NAME:LINES limits\n\
the excerpt to the first LINES lines.\n\n\
Entries are resolved under ROOT/--assets-dir. Providing any --excerpt\n\
enables the excerpt section."
    )]
    pub excerpt: Vec<ExcerptSpec>,

    /// Directory holding the excerpted assets, relative to ROOT.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// End the report with an indented folder/file tree.
    #[arg(
        long,
        long_help = "End the report with an indented tree of every folder and file under\n\
ROOT. The tree lists all files, including those whose contents were not\n\
dumped."
    )]
    pub tree: bool,

    /// Directory names whose subtrees are never visited.
    #[arg(
        long,
        value_name = "NAME",
        default_values_t = [String::from(".git")],
        long_help = "Directory base names to skip entirely, at any depth. Repeat the flag for\n\
several names. Skipped directories appear in neither the content section\n\
nor the tree.\n\n\
Passing --skip replaces the default (.git)."
    )]
    pub skip: Vec<String>,

    /// Print dump statistics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Quiet mode (suppress warnings and the completion message).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (report each dumped file on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored stderr diagnostics. This is useful when piping to files\n\
or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

fn parse_excerpt_spec(s: &str) -> Result<ExcerptSpec, String> {
    s.parse()
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let selector = Selector::new(&cli.ext, &cli.name);
    let excerpts = if !cli.excerpt.is_empty() {
        Some(cli.excerpt)
    } else if cli.assets {
        Some(DEFAULT_MANIFEST.clone())
    } else {
        None
    };

    let options = SnapshotOptions {
        selector,
        skip_dirs: cli.skip,
        assets_dir: cli.assets_dir,
        excerpts,
        tree: cli.tree,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    match report::write_snapshot(&cli.root, &cli.output, &options) {
        Ok(summary) => {
            if cli.stats {
                eprintln!("📄 Snapshot Statistics:");
                eprintln!("   Files dumped: {}", summary.files_dumped);
                eprintln!("   Files skipped: {}", summary.files_skipped);
                eprintln!();
            }
            if !cli.quiet {
                eprintln!("report written to {}", cli.output.display());
            }
            Ok(())
        }
        Err(err) => {
            // Report failures are diagnosed on stderr; the process still
            // exits normally.
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            Ok(())
        }
    }
}
