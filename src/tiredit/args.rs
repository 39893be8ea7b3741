use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tiredit", version)]
#[command(about = "Edit tirific def file parameters from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the editable parameters found in a def file
    #[command(alias = "ls")]
    Params {
        /// Input def file
        file: PathBuf,
    },

    /// Show ring radii and values for one parameter
    #[command(alias = "s")]
    Show {
        /// Input def file
        file: PathBuf,

        /// Parameter name (e.g. VROT or VROT_2)
        param: String,
    },

    /// Set ring values for a parameter and write a new def file
    Set {
        /// Input def file
        file: PathBuf,

        /// Parameter name (e.g. VROT or VROT_2)
        param: String,

        /// Ring edits as RING=VALUE, e.g. -r 3=120.5 (repeatable)
        #[arg(short = 'r', long = "ring", required = true, num_args = 1..)]
        rings: Vec<String>,

        /// Output def file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Rewrite a def file unchanged (normalizes line spacing)
    Rewrite {
        /// Input def file
        file: PathBuf,

        /// Output def file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show or change configuration
    Config {
        /// Config key (legacy-spacing, add-param, remove-param)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
