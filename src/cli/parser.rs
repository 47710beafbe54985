use clap::{Parser, Subcommand};

/// Command-line interface definition for wap-render
#[derive(Parser)]
#[command(
    name = "wap-render",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a Weekly Activity Plan (WAP) from YAML/JSON into a paginated PDF grid",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a WAP document to PDF
    Render {
        /// Input document (.yaml, .yml or .json)
        input: String,

        /// Output PDF (default: input path with .pdf extension)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Overwrite the output file without asking
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Lay out a WAP document and report problems without writing a PDF
    Check {
        /// Input document (.yaml, .yml or .json)
        input: String,
    },

    /// Print the top-level field types declared by a JSON schema
    Schema {
        /// JSON schema file
        path: String,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
