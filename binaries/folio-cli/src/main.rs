//! Folio CLI
//!
//! Serve the portfolio, or query its catalogs from the terminal.
//!
//! ```bash
//! folio serve --port 8080
//! folio list blog --query react
//! folio list experience --category Leadership --json
//! folio show projects weather-dashboard
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_config::SiteConfig;
use folio_core::content::Catalogs;
use folio_core::{Catalog, CatalogEntry, CatalogKind, Category, EntryDetail, FilterState};
use folio_web::{routes, AppState};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - a filterable portfolio site")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/folio/config.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Site content YAML, replacing the built-in portfolio
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the visible entries of a catalog
    List {
        /// blog, projects or experience
        catalog: CatalogKind,

        /// Case-insensitive text matched against title and summary
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category label, or "All". Defaults to the catalog's default tab
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one entry in full
    Show {
        catalog: CatalogKind,
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// List a catalog's category tabs
    Categories { catalog: CatalogKind },

    /// Print the HTTP route table
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SiteConfig::load(cli.config.as_deref())
        .context("failed to read config file")?
        .with_env()
        .context("invalid environment override")?;
    if let Some(content) = cli.content {
        config.content = Some(content);
    }

    init_logging(&config);
    tracing::debug!(content = ?config.content, "configuration resolved");

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = load_state(&config)?;
            let addr = config.server.bind_addr();
            tracing::info!(addr = %addr, "starting server");
            folio_web::serve(Arc::new(state), &addr)
                .await
                .with_context(|| format!("server on {addr} stopped"))?;
        }

        Commands::List {
            catalog,
            query,
            category,
            json,
        } => {
            let state = load_state(&config)?;
            let catalog = state.catalogs.get(catalog);
            let (filter, visible) = list_entries(catalog, &query, category.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!(
                    "{} | category: {} | query: {:?} | {} of {}",
                    catalog.kind().label(),
                    filter.category,
                    filter.query,
                    visible.len(),
                    catalog.len()
                );
                println!("{:-<72}", "");
                for entry in &visible {
                    println!("{:28} {:16} {}", entry.id.as_str(), entry.category, entry.title);
                }
            }
        }

        Commands::Show { catalog, id, json } => {
            let state = load_state(&config)?;
            let entry = find_entry(&state.catalogs, catalog, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                print_entry(entry);
            }
        }

        Commands::Categories { catalog } => {
            let state = load_state(&config)?;
            let catalog = state.catalogs.get(catalog);
            let default = catalog.default_category();
            println!("{}", folio_core::filter::ALL_CATEGORIES);
            for label in catalog.categories() {
                let marker = if default == Some(label.as_str()) { " (default)" } else { "" };
                println!("{label}{marker}");
            }
        }

        Commands::Routes => routes::print_routes(),
    }

    Ok(())
}

/// `RUST_LOG` wins, then the configured filter. Logs go to stderr so JSON output stays clean.
fn init_logging(config: &SiteConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_state(config: &SiteConfig) -> Result<AppState> {
    AppState::from_config(config).context("failed to load site content")
}

/// Filter a catalog the way its listing page would: the default tab unless
/// a category is given, where "All" selects every category.
fn list_entries<'a>(
    catalog: &'a Catalog,
    query: &str,
    category: Option<&str>,
) -> (FilterState, Vec<&'a CatalogEntry>) {
    let mut filter = FilterState::for_catalog(catalog).with_query(query);
    if let Some(category) = category {
        filter.set_category(Category::from_param(Some(category)));
    }
    let visible = filter.apply(catalog);
    tracing::debug!(
        catalog = %catalog.kind(),
        category = %filter.category,
        visible = visible.len(),
        "listed catalog"
    );
    (filter, visible)
}

fn find_entry<'a>(catalogs: &'a Catalogs, kind: CatalogKind, id: &str) -> Result<&'a CatalogEntry> {
    match catalogs.get(kind).get(id) {
        Some(entry) => Ok(entry),
        None => {
            tracing::warn!(catalog = %kind, id = %id, "entry not found");
            bail!("no {} entry with id '{}'", kind, id)
        }
    }
}

fn print_entry(entry: &CatalogEntry) {
    println!("{}", entry.title);
    println!("{:=<width$}", "", width = entry.title.chars().count());
    println!("id:       {}", entry.id);
    println!("category: {}", entry.category);
    if !entry.tags.is_empty() {
        println!("tags:     {}", entry.tags.join(", "));
    }

    match &entry.detail {
        EntryDetail::Blog(blog) => {
            println!("date:     {} ({})", blog.date, blog.read_time);
            println!();
            println!("{}", entry.summary);
            for section in &blog.sections {
                println!("\n## {}", section.heading);
                for paragraph in &section.paragraphs {
                    println!("{paragraph}");
                }
                for bullet in &section.bullets {
                    println!("  - {bullet}");
                }
            }
        }
        EntryDetail::Project(project) => {
            println!();
            println!("{}", entry.summary);
            if !project.challenges.is_empty() {
                println!("\nChallenges:");
                for challenge in &project.challenges {
                    println!("  - {challenge}");
                }
            }
            if let Some(live) = &project.live_url {
                println!("live:     {live}");
            }
            if let Some(code) = &project.code_url {
                println!("code:     {code}");
            }
        }
        EntryDetail::Experience(record) => {
            println!("company:  {} ({})", record.company, record.location);
            println!("period:   {}", record.period);
            println!();
            for achievement in &record.achievements {
                println!("  - {}", achievement.replace("**", ""));
            }
        }
    }
}
