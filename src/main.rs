use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use sitemap_gen::cli::{Cli, Commands};
use sitemap_gen::commands::{run_config, run_generate, run_init};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
