use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};
use crate::detector::CycleSearchMode;

#[derive(Parser)]
#[command(
    name = "import-carousel",
    about = "🎠 Detect circular imports in JavaScript and TypeScript projects",
    long_about = "import-carousel walks a project tree, extracts ES module imports and CommonJS \
                  requires from every .js/.jsx/.ts/.tsx file, resolves them to files inside the \
                  project and reports the circular import chains it finds, with the line and \
                  source text of every import along the way.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Take a ride around the project and report every loop found
    ///
    /// Discovers source files under ROOT, builds the file-level import graph
    /// and searches it for cycles.
    #[command(
        long_about = "Analyze a project for circular imports. This command discovers source \
                      files (skipping node_modules, .git, dist, build, .next, coverage and \
                      declaration files), extracts import and require statements, resolves \
                      relative paths, bare directory specifiers and packages/apps monorepo \
                      layouts, then runs a depth-first search over the resulting graph. Use \
                      --output to also write the raw interchange artifact consumed by \
                      downstream renderers."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Write the raw interchange artifact to this file after a
        /// successful run
        #[arg(short, long, env = "IMPORT_CAROUSEL_OUTPUT")]
        output: Option<PathBuf>,

        /// Exit with error code if cycles found
        #[arg(long, env = "IMPORT_CAROUSEL_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Cycle search strategy
        #[arg(
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_MODE,
            env = "IMPORT_CAROUSEL_MODE"
        )]
        mode: CycleSearchMode,
    },

    /// Re-render a previously written interchange artifact
    ///
    /// Parses the raw text produced by `inspect --output` (or `--format raw`)
    /// and prints it again in any supported format.
    #[command(
        long_about = "Parse an interchange artifact back into cycle records and render it in \
                      the requested format. Useful for turning a stored CI artifact into GitHub \
                      annotations or JSON without walking the project again."
    )]
    Replay {
        /// Interchange artifact to read
        #[arg(value_name = "FILE", env = "IMPORT_CAROUSEL_INPUT")]
        input: PathBuf,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
    /// The raw interchange text
    Raw,
}
