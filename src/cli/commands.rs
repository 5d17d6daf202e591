//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagdex")]
#[command(about = "Query values by tag combination", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Manifest to load instead of the workspace one
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List every tag, or the tags of one value
    Tags {
        /// Only show tags of this value
        #[arg(long, value_name = "VALUE")]
        of: Option<String>,
    },

    /// List every value, or the values of one tag
    Values {
        /// Only show values carrying this tag
        #[arg(long, value_name = "TAG")]
        tag: Option<String>,
    },

    /// Check whether a value carries all given tags
    Has {
        value: String,
        tags: Vec<String>,
    },

    /// Values carrying all of the tags
    Intersect {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Values carrying any of the tags
    Union {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Values whose tags are exactly these
    Exact {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Values tagged FROM carrying none of EXCLUDING
    Difference {
        from: String,
        excluding: Vec<String>,
    },

    /// Values not carrying TAG
    Complement { tag: String },

    /// Values carrying exactly one of the tags
    Symdiff {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Evaluate a boolean query (e.g. "work AND NOT done")
    Query { expression: String },
}
