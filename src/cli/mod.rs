pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// styleguide - Living styleguide generator for documented stylesheets
#[derive(Parser, Debug)]
#[command(name = "styleguide")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a styleguide page from documented stylesheets
    Build(build::BuildArgs),

    /// List documented blocks in section order
    List(list::ListArgs),

    /// Check documentation blocks without rendering
    Validate(validate::ValidateArgs),

    /// Initialize a styleguide project (generates styleguide.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
