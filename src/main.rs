use clap::Parser;
use tagdex::application::{
    init::init, load_index, ConfigService, LookupService, QueryService, SetOperation,
};
use tagdex::cli::{format_tag_list, format_value_list, Cli, Commands};
use tagdex::error::TagdexError;
use tagdex::infrastructure::{Config, FileSystemRepository, TagRepository};

fn main() {
    let cli = Cli::parse();

    tagdex::logging::init(&startup_log_level());

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Workspace log level if one is discoverable, otherwise the default
fn startup_log_level() -> String {
    FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .map(|config| config.log_level)
        .unwrap_or_else(|_| Config::default().log_level)
}

fn run(cli: Cli) -> Result<(), TagdexError> {
    let manifest = cli.manifest.as_deref();

    match cli.command {
        Commands::Init { path } => {
            let manifest_path = init(&path)?;
            println!("Initialized tagdex workspace at {}", path.display());
            println!("Manifest: {}", manifest_path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("manifest = {}", config.manifest.display());
                println!("case_insensitive = {}", config.case_insensitive);
                println!("log_level = {}", config.log_level);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: tagdex config [--list | <key> [<value>]]");
                println!("Valid keys: manifest, case_insensitive, log_level");
            }
            Ok(())
        }
        Commands::Tags { of } => {
            let service = LookupService::new(load_index(manifest)?);
            print!("{}", format_tag_list(&service.tags(of.as_deref())));
            Ok(())
        }
        Commands::Values { tag } => {
            let service = LookupService::new(load_index(manifest)?);
            print!("{}", format_value_list(&service.values(tag.as_deref())));
            Ok(())
        }
        Commands::Has { value, tags } => {
            let service = LookupService::new(load_index(manifest)?);
            println!("{}", service.has_tags(&value, &tags));
            Ok(())
        }
        Commands::Query { expression } => {
            let service = QueryService::new(load_index(manifest)?);
            print!("{}", format_value_list(&service.execute(&expression)?));
            Ok(())
        }
        Commands::Intersect { tags } => lookup(manifest, SetOperation::Intersect(tags)),
        Commands::Union { tags } => lookup(manifest, SetOperation::Union(tags)),
        Commands::Exact { tags } => lookup(manifest, SetOperation::Exact(tags)),
        Commands::Difference { from, excluding } => {
            lookup(manifest, SetOperation::Difference { from, excluding })
        }
        Commands::Complement { tag } => lookup(manifest, SetOperation::Complement(tag)),
        Commands::Symdiff { tags } => lookup(manifest, SetOperation::SymmetricDifference(tags)),
    }
}

fn lookup(manifest: Option<&std::path::Path>, operation: SetOperation) -> Result<(), TagdexError> {
    let service = LookupService::new(load_index(manifest)?);
    print!("{}", format_value_list(&service.execute(&operation)));
    Ok(())
}
