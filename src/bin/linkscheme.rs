//! Command-line interface for linkscheme
//! Renders or opens `type:path` links using the schemes from configuration.
//!
//! Usage:
//!   linkscheme export `<link>` [--backend `<tag>`] [--description `<text>`] [--links-to-notes]
//!   linkscheme uri `<link>`                 - Print the uri a link resolves to
//!   linkscheme open `<link>` [--new-window] - Open a link in the browser
//!   linkscheme list-schemes                 - List registered link schemes

use clap::{Arg, ArgAction, ArgMatches, Command};
use linkscheme::{Backend, LinkConfig, LinkError, Loader, OpenTarget, SchemeRegistry};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("linkscheme")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render and open base-relative links for different output formats")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Print debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("export")
                .about("Render a link for an export backend")
                .arg(link_arg())
                .arg(
                    Arg::new("backend")
                        .long("backend")
                        .short('b')
                        .help("Backend tag (markdown, html, latex, ascii, texinfo); others print the uri"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('d')
                        .help("Human-readable link text"),
                )
                .arg(
                    Arg::new("links-to-notes")
                        .long("links-to-notes")
                        .help("Omit the uri annotation from described ascii links")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("uri")
                .about("Print the uri a link resolves to")
                .arg(link_arg()),
        )
        .subcommand(
            Command::new("open")
                .about("Open a link with the system browser")
                .arg(link_arg())
                .arg(
                    Arg::new("new-window")
                        .long("new-window")
                        .help("Ask for a new browser window")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-schemes").about("List registered link schemes"))
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn link_arg() -> Arg {
    Arg::new("link")
        .help("Link to process, e.g. gh:rust-lang/rust")
        .required(true)
        .index(1)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), LinkError> {
    let config = load_config(matches.get_one::<String>("config"))?;
    let registry = config.registry()?;

    match matches.subcommand() {
        Some(("export", export_matches)) => {
            handle_export_command(&config, &registry, export_matches)
        }
        Some(("uri", uri_matches)) => handle_uri_command(&registry, uri_matches),
        Some(("open", open_matches)) => handle_open_command(&config, &registry, open_matches),
        Some(("list-schemes", _)) => {
            handle_list_schemes_command(&registry);
            Ok(())
        }
        _ => unreachable!(),
    }
}

fn load_config(path: Option<&String>) -> Result<LinkConfig, LinkError> {
    if let Some(path) = path {
        tracing::debug!(path = path.as_str(), "loading configuration file");
    }
    Loader::for_cli(path.map(Path::new)).build()
}

fn link_of(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("link")
        .expect("link is a required argument")
}

/// Handle the export command
fn handle_export_command(
    config: &LinkConfig,
    registry: &SchemeRegistry,
    matches: &ArgMatches,
) -> Result<(), LinkError> {
    let link = link_of(matches);
    let backend = matches
        .get_one::<String>("backend")
        .map(|tag| Backend::from_tag(tag))
        .unwrap_or(config.export.backend);
    let description = matches.get_one::<String>("description").map(String::as_str);

    let mut ctx = config.export.context.clone();
    if matches.get_flag("links-to-notes") {
        ctx.links_to_notes = true;
    }

    let output = registry
        .export_link(link, description, backend, &ctx)
        .ok_or_else(|| LinkError::UnknownScheme(link.to_string()))?;
    println!("{}", output);
    Ok(())
}

/// Handle the uri command
fn handle_uri_command(registry: &SchemeRegistry, matches: &ArgMatches) -> Result<(), LinkError> {
    let link = link_of(matches);
    let uri = registry
        .uri_for(link)
        .ok_or_else(|| LinkError::UnknownScheme(link.to_string()))?;
    println!("{}", uri);
    Ok(())
}

/// Handle the open command
fn handle_open_command(
    config: &LinkConfig,
    registry: &SchemeRegistry,
    matches: &ArgMatches,
) -> Result<(), LinkError> {
    let link = link_of(matches);
    let target = if matches.get_flag("new-window") {
        OpenTarget::NewWindow
    } else {
        config.open_target()
    };

    registry
        .open_link(link, target, &config.navigator())
        .ok_or_else(|| LinkError::UnknownScheme(link.to_string()))?
}

/// Handle the list-schemes command
fn handle_list_schemes_command(registry: &SchemeRegistry) {
    println!("Registered link schemes:\n");

    for tag in registry.list_schemes() {
        if let Some(scheme) = registry.get(tag) {
            println!("  {}", tag);
            println!("    {}", scheme.base());
            println!();
        }
    }
}
