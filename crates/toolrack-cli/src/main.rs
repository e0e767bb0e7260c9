//! toolrack CLI
//!
//! Non-interactive access to the catalog engine: search the merged registry,
//! list it, inspect one record, or see how a route string resolves.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use toolrack_core::config::Directories;
use toolrack_core::nav;
use toolrack_core::registry::ToolRegistry;
use toolrack_core::search::{CategoryFilter, filter_tools};
use toolrack_core::{Category, NavTarget, Route, ToolRecord};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toolrack")]
#[command(about = "Search and browse the toolrack catalog", version)]
#[command(after_help = "\
Examples:
  toolrack search pdf                  Find tools matching a query
  toolrack search tax --limit 3        Cap the result list
  toolrack search conv --json          JSON output for scripting
  toolrack list --category finance     All finance tools
  toolrack categories                  Category record counts
  toolrack show /bmi-calculator        One record's detail
  toolrack resolve '/tools?search=qr'  How a route string resolves
  toolrack resolve 'resume builder'    How a raw query resolves
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog (title, description, and category name)
    Search {
        /// Search query
        query: String,

        /// Restrict matches to one category
        #[arg(long)]
        category: Option<Category>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the full catalog
    List {
        /// Restrict the listing to one category
        #[arg(long)]
        category: Option<Category>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the categories with their record counts
    Categories,

    /// Show one record by its route path
    Show {
        /// Route path, e.g. /bmi-calculator
        path: String,
    },

    /// Print how a route string or raw query resolves
    Resolve {
        /// A path ("/", "/tools?search=q", "/some-tool") or a raw query
        target: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = ToolRegistry::load(&Directories::new());

    match cli.command {
        Commands::Search {
            query,
            category,
            limit,
            json,
        } => run_search(&registry, &query, category, limit, json),
        Commands::List { category, json } => run_list(&registry, category, json),
        Commands::Categories => run_categories(&registry),
        Commands::Show { path } => run_show(&registry, &path),
        Commands::Resolve { target } => run_resolve(&registry, &target),
    }
}

fn category_filter(category: Option<Category>) -> CategoryFilter {
    category.map_or(CategoryFilter::All, CategoryFilter::Only)
}

fn run_search(
    registry: &ToolRegistry,
    query: &str,
    category: Option<Category>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut matches = filter_tools(registry.records(), query, category_filter(category));
    if let Some(limit) = limit {
        matches.truncate(limit);
    }
    print_records(&matches, json)
}

fn run_list(registry: &ToolRegistry, category: Option<Category>, json: bool) -> Result<()> {
    let records = filter_tools(registry.records(), "", category_filter(category));
    print_records(&records, json)
}

fn run_categories(registry: &ToolRegistry) -> Result<()> {
    for (category, count) in registry.category_counts() {
        let plural = if count == 1 { "tool" } else { "tools" };
        println!("  {:<14} {count} {plural}", category.name());
    }
    Ok(())
}

fn run_show(registry: &ToolRegistry, path: &str) -> Result<()> {
    let Some(record) = registry.find_by_path(path) else {
        bail!("no tool is registered at {path}");
    };

    println!("{}", record.title);
    println!("  category:    {}", record.category.name());
    println!("  path:        {}", record.path);
    println!("  description: {}", record.description);
    if !record.icon.is_empty() {
        println!("  icon:        {}", record.icon);
    }
    Ok(())
}

fn run_resolve(registry: &ToolRegistry, target: &str) -> Result<()> {
    // Anything that does not look like a path is treated as a raw query,
    // resolved the way an unmatched Enter would be
    let route = if target.starts_with('/') {
        Route::parse(target)
    } else {
        nav::resolve(&NavTarget::Query {
            query: target.to_string(),
        })
    };

    match &route {
        Route::Home => println!("home view ({})", route.to_path()),
        Route::Tools { search: None } => println!("tools page ({})", route.to_path()),
        Route::Tools {
            search: Some(query),
        } => println!(
            "tools page seeded with search \"{query}\" ({})",
            route.to_path()
        ),
        Route::Tool { path } => match registry.find_by_path(path) {
            Some(record) => println!("tool detail: {} ({path})", record.title),
            None => println!("not found: no tool is registered at {path}"),
        },
    }
    Ok(())
}

fn print_records(records: &[&ToolRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for record in records {
        println!(
            "  {:<28} {:<13} {}",
            record.title,
            record.category.name(),
            record.path
        );
        println!("      {}", record.description);
    }
    Ok(())
}
