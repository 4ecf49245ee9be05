use clap::{Parser, Subcommand};

pub const DEFAULT_REPO_ROOT: &str = ".";
pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_INDEX: &str = "index.html";

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio: check that README.md and index.html agree on PR links and deployment statuses",
    version
)]
pub struct Cli {
    /// Defaults to `consistency-check` with default paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare the PR list and cloud deployment statuses of both documents
    ConsistencyCheck {
        /// Directory that relative document and registry paths resolve against.
        /// Defaults to the current working directory, not the binary's location
        #[arg(long, default_value = DEFAULT_REPO_ROOT)]
        repo_root: String,

        /// Markdown document
        #[arg(long, default_value = DEFAULT_README)]
        readme: String,

        /// HTML document
        #[arg(long, default_value = DEFAULT_INDEX)]
        index: String,

        /// TOML registry of known projects (`[[project]] label = "..."`)
        #[arg(long)]
        projects: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the known projects whose deployment status is checked
    Projects {
        /// Directory that a relative registry path resolves against.
        /// Defaults to the current working directory
        #[arg(long, default_value = DEFAULT_REPO_ROOT)]
        repo_root: String,

        /// TOML registry of known projects
        #[arg(long)]
        projects: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// The command run when `folio` is invoked without a subcommand.
    pub fn default_check() -> Self {
        Self::ConsistencyCheck {
            repo_root: DEFAULT_REPO_ROOT.to_string(),
            readme: DEFAULT_README.to_string(),
            index: DEFAULT_INDEX.to_string(),
            projects: None,
            json: false,
        }
    }
}
