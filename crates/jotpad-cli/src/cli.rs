use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jotpad")]
#[command(about = "Keep short notes from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the notes document is stored in
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Storage key the notes document lives under
    #[arg(long, global = true, value_name = "NAME")]
    pub key: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Answer yes to delete confirmations
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive note pad (default)
    Shell,
    /// List notes, most recently updated first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(long)]
        title: Option<String>,
        /// Note body
        #[arg(long)]
        body: Option<String>,
    },
    /// Change the title and/or body of a note
    Edit {
        /// Note ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New body
        #[arg(long)]
        body: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
}
