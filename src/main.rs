use asciify::cli::{self, Args, Command};
use asciify::config::Config;
use clap::Parser;

/// Install the logger. `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(args: Args) -> Result<(), cli::CliError> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Convert(convert) => cli::run_convert(convert, &config).await,
        Command::Render(render) => cli::run_render(render, &config),
        Command::Config { action } => {
            cli::handle_config_action(action, &config, args.config.as_deref())
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
