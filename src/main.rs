use clap::Parser;

use css_guard::cli::{Cli, Commands};
use css_guard::commands::{run_check, run_ci, run_config, run_init, run_visual};

fn main() {
    let cli = Cli::parse();
    css_guard::logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Visual(args) => run_visual(args, &cli),
        Commands::Ci(args) => run_ci(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
