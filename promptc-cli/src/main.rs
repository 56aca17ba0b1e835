//! Command-line interface for promptc
//! This binary compiles .prompt template files into source modules for a
//! target language, one exported function per prompt.
//!
//! Usage:
//!   promptc `<path>` [--backend `<name>`] [--out `<dir>`]  - Generate a module for a prompt file
//!   promptc `<path>` --tokens                              - Dump the scanned token stream as JSON
//!   promptc --list-backends                                - List all available backends

use clap::{Arg, ArgAction, Command};
use promptc_codegen::backend::GenOptions;
use promptc_codegen::registry::BackendRegistry;
use promptc_config::{Loader, PromptcConfig};
use promptc_parser::ast::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

fn main() {
    let matches = Command::new("promptc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for prompt template files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the .prompt file")
                .required_unless_present("list-backends")
                .index(1),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .short('b')
                .help("Target backend (default: from configuration)"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Directory to write the generated module into (default: stdout)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("max-line-length")
                .long("max-line-length")
                .value_parser(clap::value_parser!(u64))
                .help("Override the parameter-wrap width threshold"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Dump the scanned token stream as JSON instead of generating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-backends")
                .long("list-backends")
                .help("List available backends")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-backends") {
        handle_list_backends_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing backends");

    if matches.get_flag("tokens") {
        handle_tokens_command(path);
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<u64>("max-line-length").copied(),
    );
    let backend = matches
        .get_one::<String>("backend")
        .unwrap_or(&config.codegen.default_backend)
        .clone();
    handle_generate_command(path, &backend, matches.get_one::<String>("out"), &config);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer the optional user file and CLI overrides over the defaults.
fn load_config(file: Option<&String>, max_line_length: Option<u64>) -> PromptcConfig {
    let mut loader = Loader::new();
    if let Some(path) = file {
        loader = loader.with_file(path);
    }
    if let Some(width) = max_line_length {
        loader = loader
            .set_override("codegen.max_line_length", width as i64)
            .unwrap_or_else(|e| {
                eprintln!("Invalid override: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the generate command
fn handle_generate_command(path: &str, backend: &str, out_dir: Option<&String>, config: &PromptcConfig) {
    let content = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let file = File::parse(&name, content).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });
    debug!(prompts = file.prompts.len(), "assembled {}", path);

    let registry = BackendRegistry::with_defaults();
    let backend = registry.get(backend).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable backends:");
        for name in registry.list_backends() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    let opts = GenOptions {
        max_line_length: config.codegen.max_line_length,
    };
    // The whole module is rendered before anything touches the destination;
    // a failing file leaves it untouched.
    let module = backend.generate(&file, &opts).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });

    match out_dir {
        Some(dir) => {
            let dest = Path::new(dir).join(format!("{}.{}", file.name, backend.extension()));
            std::fs::write(&dest, &module).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", dest.display(), e);
                std::process::exit(1);
            });
        }
        None => {
            std::io::stdout().write_all(&module).unwrap_or_else(|e| {
                eprintln!("Failed to write output: {}", e);
                std::process::exit(1);
            });
        }
    }
}

/// Handle the tokens inspection command
fn handle_tokens_command(path: &str) {
    let content = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });
    let tokens = promptc_parser::token::scan(&content);
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Error formatting tokens: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the list-backends command
fn handle_list_backends_command() {
    let registry = BackendRegistry::with_defaults();
    println!("Available backends:\n");

    for name in registry.list_backends() {
        let backend = registry.get(&name).expect("listed backend is registered");
        println!("  {} (.{})", name, backend.extension());
        println!("    {}", backend.description());
        println!();
    }
}
