use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lingraph::{browser_url, preview_dot, ApiServer, AppConfig, AuthorLookup, NameList};
use lingraph_kg::render::{author_query, chain_query, fanout_query, path_query};
use lingraph_kg::{
    candidates_after, AuthorTemplate, EntryCatalog, EntrySuperType, SchemaRegistry,
};

#[derive(Parser)]
#[command(name = "lingraph")]
#[command(about = "Interactive graph-query composition for the lingraph knowledge graph", long_about = None)]
struct Cli {
    /// Data directory holding the external tables
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Suggest legal continuations after a token
    Suggest {
        /// Chain token (entry name, type, relation, ANY, R)
        token: String,
    },

    /// Show an entry's type and one-hop neighborhood
    Info {
        /// Entry name
        name: String,
    },

    /// Render a free chain query from tokens
    Chain {
        /// Chain tokens, in order
        tokens: Vec<String>,
    },

    /// Render a fan-out query around key entries
    Fanout {
        /// Target super type (publication, hypothesis, framework, data, topic)
        #[arg(short, long)]
        target: String,

        /// Maximum path length
        #[arg(short, long, default_value = "3")]
        length: u32,

        /// Key entity names
        keys: Vec<String>,
    },

    /// Render a canned author template query
    Author {
        /// Author identifier
        #[arg(long)]
        id: String,

        /// Template (disagreement, agreement, shared_topic)
        #[arg(long, default_value = "disagreement")]
        template: String,
    },

    /// Render a two-endpoint path search
    Path {
        /// From endpoint (ANY, super type, or entry name)
        #[arg(long)]
        from: String,

        /// To endpoint (ANY, super type, or entry name)
        #[arg(long)]
        to: String,

        /// Maximum hop count
        #[arg(short, long, default_value = "1")]
        length: u32,
    },

    /// Fetch recent papers for an author id via the external lookup
    AuthorInfo {
        /// Author identifier
        id: String,
    },

    /// Ensure the entry name list exists and print a summary
    Names,

    /// Emit Graphviz DOT for the one-hop preview around an entry
    Preview {
        /// Pivot entry name
        name: String,
    },

    /// List known entry names, optionally filtered
    Entries {
        /// Filter by super type
        #[arg(long)]
        super_type: Option<String>,

        /// List author entries only
        #[arg(long)]
        authors: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "lingraph=info,lingraph_kg=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::default();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let registry = SchemaRegistry::new();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            let catalog = load_catalog(&config)?;
            let server = ApiServer::new(config, registry, catalog);
            server.start().await?;
        }

        Commands::Suggest { ref token } => {
            let catalog = load_catalog(&config)?;
            let candidates = candidates_after(&registry.classify(token), &catalog);
            println!("Type candidates: {}", candidates.type_names().join(", "));
            println!(
                "Relation candidates: {}",
                candidates.relation_names().join(", ")
            );
        }

        Commands::Info { ref name } => {
            let catalog = load_catalog(&config)?;
            let type_label = catalog
                .type_of(name)
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default();
            println!("- {} **{}** ", name, type_label);
            let outgoing = catalog.outgoing(name);
            if !outgoing.is_empty() {
                println!("outgoing:");
                for edge in outgoing {
                    println!("  {} -[{}]-> {}", edge.from, edge.relation.as_str(), edge.to);
                }
            }
            let incoming = catalog.incoming(name);
            if !incoming.is_empty() {
                println!("incoming:");
                for edge in incoming {
                    println!("  {} -[{}]-> {}", edge.from, edge.relation.as_str(), edge.to);
                }
            }
        }

        Commands::Chain { ref tokens } => {
            let chain: Vec<_> = tokens.iter().map(|raw| registry.classify(raw)).collect();
            print_query(&config, &chain_query(&chain))?;
        }

        Commands::Fanout {
            ref target,
            length,
            ref keys,
        } => {
            let target = EntrySuperType::from_str(target)
                .with_context(|| format!("Unknown super type: {target}"))?;
            print_query(&config, &fanout_query(keys, target, length))?;
        }

        Commands::Author {
            ref id,
            ref template,
        } => {
            let template = AuthorTemplate::from_str(template)
                .with_context(|| format!("Unknown template: {template}"))?;
            print_query(&config, &author_query(template, id))?;
        }

        Commands::Path {
            ref from,
            ref to,
            length,
        } => {
            let from = registry.classify(from);
            let to = registry.classify(to);
            print_query(&config, &path_query(&from, &to, length))?;
        }

        Commands::AuthorInfo { ref id } => {
            let command = config
                .author_info_cmd
                .as_deref()
                .context("No author lookup command configured (LINGRAPH_AUTHOR_CMD)")?;
            let lookup = AuthorLookup::new(command);
            for line in lookup.run(id).await? {
                println!(" {}", line);
            }
        }

        Commands::Names => {
            let list = NameList::ensure(&config.names_path(), config.names_cmd.as_deref()).await?;
            println!("{} entry names", list.len());
        }

        Commands::Preview { ref name } => {
            let catalog = load_catalog(&config)?;
            print!("{}", preview_dot(&catalog, name));
        }

        Commands::Entries {
            ref super_type,
            authors,
        } => {
            let catalog = load_catalog(&config)?;
            let names: Vec<String> = if authors {
                catalog.author_names().into_iter().map(str::to_string).collect()
            } else if let Some(label) = super_type.as_deref() {
                let super_type = EntrySuperType::from_str(label)
                    .with_context(|| format!("Unknown super type: {label}"))?;
                catalog
                    .names_of_super_type(super_type)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            } else {
                let mut names: Vec<String> = catalog.names().map(str::to_string).collect();
                names.sort_unstable();
                names
            };
            for name in names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> Result<EntryCatalog> {
    EntryCatalog::load(&config.entries_path(), &config.relations_path())
        .context("Failed to load the entry catalog; check the data directory")
}

fn print_query(config: &AppConfig, query: &str) -> Result<()> {
    println!("{}", query);
    println!();
    println!("{}", browser_url(&config.browser_url, query)?);
    Ok(())
}
