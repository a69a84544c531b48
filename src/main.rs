use clap::Parser;
use miette::Result;
use styleguide::cli::{Cli, Commands};
use styleguide::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Build(args) => styleguide::cli::build::run(args, &printer)?,
        Commands::List(args) => styleguide::cli::list::run(args, &printer)?,
        Commands::Validate(args) => styleguide::cli::validate::run(args, &printer)?,
        Commands::Init(args) => styleguide::cli::init::run(args, &printer)?,
        Commands::Completions(args) => styleguide::cli::completions::run(args)?,
    }

    Ok(())
}
