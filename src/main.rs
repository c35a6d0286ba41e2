use clap::Parser;
use helptree::application::{
    ConvertOptions, ConvertTreeService, QualifyOptions, QualifyTagsService,
};
use helptree::cli::{format_convert_summary, format_qualify_summary, Cli, Commands};
use helptree::error::HelptreeError;
use helptree::infrastructure::{CommandConverter, Config, DocumentTree};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries progress lines and summaries only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), HelptreeError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            source,
            target,
            dry_run,
        } => {
            let converter = CommandConverter::new(config.get_converter());
            let service = ConvertTreeService::new(converter);
            let report = service.execute(ConvertOptions {
                source,
                target,
                dry_run,
            })?;
            println!("{}", format_convert_summary(&report));
            Ok(())
        }
        Commands::Qualify {
            target,
            prefix,
            dry_run,
        } => {
            let tree = DocumentTree::open(&target)?;
            let service = QualifyTagsService::new(tree);
            let report = service.execute(QualifyOptions {
                prefix,
                separator_escape: config.separator_escape,
                dry_run,
            })?;
            println!("{}", format_qualify_summary(&report));
            Ok(())
        }
    }
}
