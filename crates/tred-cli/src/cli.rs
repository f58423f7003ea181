//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// Input graph description format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputFormat {
    /// Detect from content: `{` → json, leading count header → matrix,
    /// otherwise edge-list (default).
    Auto,
    /// `V <label>` / `E <from> <to>` records.
    EdgeList,
    /// `numVertices numEdges` header plus 1-based `from to` lines.
    Matrix,
    /// A JSON graph document.
    Json,
}

/// Reduction algorithm selector for the `reduce` subcommand.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Algorithm {
    /// Closure-based edge elimination (default).
    Closure,
    /// Incidence-matrix multiplication elimination.
    Matrix,
}

/// All top-level subcommands exposed by the `tred` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Print the transitive closure of a graph.
    Closure {
        /// Path to a graph description, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Break cycles and print the transitive reduction of a graph.
    Reduce {
        /// Path to a graph description, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Reduction algorithm: closure (default) or matrix.
        #[arg(long, default_value = "closure", value_enum)]
        algorithm: Algorithm,
        /// Also print the self-loops and back edges removed before reduction.
        #[arg(long)]
        show_removed: bool,
    },

    /// Report whether a graph is acyclic and which edges a breaking pass
    /// would remove.
    Cycles {
        /// Path to a graph description, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List vertices reachable from a source, or test a single path.
    Reach {
        /// Path to a graph description, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex label.
        #[arg(value_name = "FROM")]
        from: String,
        /// Optional target label; when given, reports path existence and
        /// exits 1 if no path exists.
        #[arg(value_name = "TO")]
        to: Option<String>,
    },

    /// Run the full break/reduce pipeline and check every invariant.
    Verify {
        /// Path to a graph description, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the tred-core library version.
    Version,
}

/// Root CLI parser for the `tred` binary.
#[derive(Parser)]
#[command(name = "tred", about = "Transitive closure and reduction of directed graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Input format (applies to every file-reading subcommand).
    #[arg(long, global = true, default_value = "auto", value_enum)]
    pub input: InputFormat,

    /// Output format.
    #[arg(long, global = true, default_value = "human", value_enum)]
    pub format: OutputFormat,

    /// Maximum input size in bytes.
    #[arg(long, global = true, default_value_t = 16 * 1024 * 1024)]
    pub max_file_size: u64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
