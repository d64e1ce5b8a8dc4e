//! CLI entry point for `tenancy-filter`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tenancy_filter::compiler::predicate::PredicateCompiler;
use tenancy_filter::declaration::map::DeclarationMap;
use tenancy_filter::scope::context::{ContextRegistry, StaticContext};
use tenancy_filter::scope::value::{StaticValue, ValueRegistry};
use tenancy_filter::scope::FilterScope;

#[derive(Parser)]
#[command(
    name = "tenancy-filter",
    about = "Compile tenant-isolation predicates from a declaration document"
)]
struct Cli {
    /// JSON document mapping resource types to tenancy declarations
    declarations: PathBuf,

    /// Resource type to compile the predicate for
    #[arg(long)]
    resource_type: String,

    /// Table alias substituted for the $this marker
    #[arg(long, default_value = "t0")]
    table_alias: String,

    /// Value holder as identifier=value (repeatable)
    #[arg(long = "value")]
    values: Vec<String>,

    /// Context provider as identifier[=true|false]; bare form means true (repeatable)
    #[arg(long = "context")]
    contexts: Vec<String>,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tenancy_filter=trace")),
            )
            .init();
    }

    let document = match std::fs::read_to_string(&cli.declarations) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.declarations.display());
            process::exit(2);
        }
    };

    let declarations = match DeclarationMap::load_from_json(&document) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", cli.declarations.display());
            process::exit(2);
        }
    };

    let mut values = ValueRegistry::new();
    for pair in &cli.values {
        match pair.split_once('=') {
            Some((identifier, value)) => values.register(StaticValue::new(identifier, value)),
            None => {
                eprintln!("Invalid --value '{pair}': expected identifier=value");
                process::exit(2);
            }
        }
    }

    let mut contexts = ContextRegistry::new();
    for flag in &cli.contexts {
        match flag.split_once('=') {
            Some((identifier, raw)) => match raw.parse::<bool>() {
                Ok(contextual) => contexts.register(StaticContext::new(identifier, contextual)),
                Err(_) => {
                    eprintln!("Invalid --context '{flag}': expected identifier[=true|false]");
                    process::exit(2);
                }
            },
            None => contexts.register(StaticContext::new(flag.as_str(), true)),
        }
    }

    let scope = FilterScope::with(values, contexts);
    let compiler = PredicateCompiler::new(declarations);

    match compiler.compile(&cli.resource_type, &cli.table_alias, &scope) {
        Ok(predicate) => println!("{predicate}"),
        Err(e) => {
            eprintln!("Error compiling predicate for '{}': {e}", cli.resource_type);
            process::exit(2);
        }
    }
}
