mod render;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use weave_core::{
    DocumentService, DocumentStore, InMemoryStore, IngestReport, IngestionOptions,
    MetadataFilter, Pattern, VirtualDocumentSummary, WeaviateStore, DEFAULT_SELECTION_LIMIT,
};

#[derive(Parser)]
#[command(name = "weave", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Weaviate base URL
    #[arg(long, env = "WEAVIATE_URL", default_value = "http://localhost:8080", global = true)]
    weaviate_url: String,

    /// Weaviate API key, sent as a bearer token
    #[arg(long, env = "WEAVIATE_API_KEY", global = true)]
    weaviate_api_key: Option<String>,

    /// Use the seeded in-memory store instead of Weaviate
    #[arg(long, env = "WEAVE_MOCK", default_value_t = false, global = true)]
    mock: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect or delete collections.
    #[command(subcommand)]
    Collection(CollectionCommand),
    /// Inspect, create or delete documents inside a collection.
    #[command(subcommand)]
    Document(DocumentCommand),
}

#[derive(Subcommand)]
enum CollectionCommand {
    /// List collection names.
    #[command(alias = "ls")]
    List,
    /// Print the number of collections.
    Count,
    /// Print the property names declared for a collection.
    Schema {
        collection: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Count text documents and image stacks in a collection.
    Summary {
        collection: String,
        #[arg(long, default_value = "10000")]
        limit: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Delete collections by name or by glob/regex pattern.
    #[command(alias = "rm")]
    Delete {
        names: Vec<String>,
        #[arg(long)]
        pattern: Option<String>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

#[derive(Args)]
struct DisplayArgs {
    /// Print full content and group metadata.
    #[arg(long, default_value_t = false)]
    long: bool,
    /// Content lines shown per chunk.
    #[arg(long, default_value = "5")]
    short: usize,
}

#[derive(Subcommand)]
enum DocumentCommand {
    /// List chunks, or virtual documents with --virtual.
    #[command(alias = "ls")]
    List {
        collection: String,
        #[arg(long, default_value = "50")]
        limit: usize,
        /// Regroup chunks into the files they were cut from.
        #[arg(long = "virtual", short = 'w', default_value_t = false)]
        virtual_view: bool,
        /// One line per virtual document.
        #[arg(long, default_value_t = false)]
        summary: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Show one chunk by ID, or one virtual document with --name.
    Show {
        collection: String,
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "1000")]
        limit: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Count chunks in a collection.
    Count {
        collection: String,
        #[arg(long, default_value = "10000")]
        limit: usize,
    },
    /// Delete chunks by ID or --metadata, whole virtual documents by --name or
    /// --pattern, or everything with --all.
    #[command(alias = "rm")]
    Delete {
        collection: String,
        ids: Vec<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        pattern: Option<String>,
        /// key=value; repeat to require several fields.
        #[arg(long = "metadata", value_name = "KEY=VALUE")]
        metadata: Vec<String>,
        #[arg(long, default_value_t = false)]
        all: bool,
        #[arg(long, default_value_t = DEFAULT_SELECTION_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Chunk a text file, image or folder into a collection.
    Create {
        collection: String,
        path: PathBuf,
        #[arg(long, default_value = "1000")]
        chunk_size: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        mock = cli.mock,
        "weave boot"
    );

    if cli.mock {
        let service = DocumentService::new(InMemoryStore::with_sample_data());
        run(&service, cli.command).await
    } else {
        let store = WeaviateStore::new(&cli.weaviate_url, cli.weaviate_api_key)
            .with_context(|| format!("invalid weaviate url {}", cli.weaviate_url))?;
        run(&DocumentService::new(store), cli.command).await
    }
}

async fn run<S>(service: &DocumentService<S>, command: Command) -> anyhow::Result<()>
where
    S: DocumentStore + Send + Sync,
{
    match command {
        Command::Collection(command) => run_collection(service, command).await,
        Command::Document(command) => run_document(service, command).await,
    }
}

async fn run_collection<S>(
    service: &DocumentService<S>,
    command: CollectionCommand,
) -> anyhow::Result<()>
where
    S: DocumentStore + Send + Sync,
{
    match command {
        CollectionCommand::List => {
            let names = service.collections().await?;
            if names.is_empty() {
                println!("No collections found");
            }
            for name in names {
                println!("{name}");
            }
        }
        CollectionCommand::Count => {
            println!("{}", service.count_collections().await?);
        }
        CollectionCommand::Schema { collection, json } => {
            let properties = service.collection_schema(&collection).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&properties)?);
            } else {
                println!("{} properties in {collection}", properties.len());
                for property in properties {
                    println!("  {property}");
                }
            }
        }
        CollectionCommand::Summary {
            collection,
            limit,
            json,
        } => {
            let summary = service.summarize(&collection, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render::summary_block(&summary));
            }
        }
        CollectionCommand::Delete {
            names,
            pattern,
            dry_run,
        } => {
            let patterns = match pattern {
                Some(raw) => vec![Pattern::new(raw)?],
                None if names.is_empty() => bail!("pass collection names or --pattern"),
                None => names.into_iter().map(Pattern::exact).collect(),
            };

            for pattern in patterns {
                let report = service
                    .delete_collections_by_pattern(&pattern, dry_run)
                    .await?;
                if report.matched.is_empty() {
                    println!("No collections match '{}'", pattern.as_str());
                } else if dry_run {
                    println!("Would delete {} collection(s):", report.matched.len());
                    for name in &report.matched {
                        println!("  {name}");
                    }
                } else {
                    for name in &report.deleted {
                        println!("Deleted collection {name}");
                    }
                }
            }
        }
    }
    Ok(())
}

async fn run_document<S>(service: &DocumentService<S>, command: DocumentCommand) -> anyhow::Result<()>
where
    S: DocumentStore + Send + Sync,
{
    match command {
        DocumentCommand::List {
            collection,
            limit,
            virtual_view,
            summary,
            json,
            display,
        } => {
            if virtual_view || summary {
                let documents = service.virtual_documents(&collection, limit).await?;
                if json {
                    let summaries: Vec<VirtualDocumentSummary> =
                        documents.iter().map(|document| document.summary()).collect();
                    println!("{}", serde_json::to_string_pretty(&summaries)?);
                    return Ok(());
                }

                println!("{} virtual document(s) in {collection}", documents.len());
                for (index, document) in documents.iter().enumerate() {
                    if summary {
                        println!("{}", render::virtual_line(index, document));
                    } else {
                        println!("{}", render::virtual_block(index, document, display.short, display.long));
                    }
                }
            } else {
                let chunks = service.chunks(&collection, limit).await?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&chunks)?);
                    return Ok(());
                }

                println!("{} chunk(s) in {collection}", chunks.len());
                for (index, chunk) in chunks.iter().enumerate() {
                    println!("{}", render::chunk_block(index, chunk, display.short, display.long));
                }
            }
        }
        DocumentCommand::Show {
            collection,
            id,
            name,
            limit,
            json,
            display,
        } => match (id, name) {
            (Some(id), None) => {
                let chunk = service.document(&collection, &id).await?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&chunk)?);
                } else {
                    println!("{}", render::chunk_block(0, &chunk, display.short, display.long));
                }
            }
            (None, Some(name)) => {
                let documents = service
                    .select_by_pattern(&collection, &Pattern::exact(name.as_str()), limit)
                    .await?;
                let Some(document) = documents.first() else {
                    bail!("no virtual document named '{name}' in {collection}");
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(&document.summary())?);
                } else {
                    println!("{}", render::virtual_block(0, document, display.short, display.long));
                }
            }
            _ => bail!("pass exactly one of a chunk ID or --name"),
        },
        DocumentCommand::Count { collection, limit } => {
            println!("{}", service.count(&collection, limit).await?);
        }
        DocumentCommand::Delete {
            collection,
            ids,
            name,
            pattern,
            metadata,
            all,
            limit,
            dry_run,
        } => {
            let selectors = [
                !ids.is_empty(),
                name.is_some(),
                pattern.is_some(),
                !metadata.is_empty(),
                all,
            ];
            if selectors.iter().filter(|set| **set).count() != 1 {
                bail!("pass exactly one of chunk IDs, --name, --pattern, --metadata or --all");
            }

            let report = if let Some(raw) = pattern {
                let pattern = Pattern::new(raw)?;
                service
                    .delete_by_pattern(&collection, &pattern, limit, dry_run)
                    .await?
            } else if let Some(name) = name {
                service.delete_by_name(&collection, &name, limit, dry_run).await?
            } else if !metadata.is_empty() {
                let filters = metadata
                    .iter()
                    .map(|raw| raw.parse::<MetadataFilter>())
                    .collect::<Result<Vec<_>, _>>()?;
                service
                    .delete_by_metadata(&collection, &filters, limit, dry_run)
                    .await?
            } else if all {
                service.delete_all(&collection, dry_run).await?
            } else {
                service.delete_by_ids(&collection, &ids, dry_run).await?
            };

            if report.chunk_ids.is_empty() {
                println!("Nothing matched in {collection}");
                return Ok(());
            }
            for filename in &report.matched_documents {
                println!("  {filename}");
            }
            if dry_run {
                println!(
                    "Would delete {} chunk(s) from {collection}",
                    report.chunk_ids.len()
                );
            } else {
                println!("Deleted {} chunk(s) from {collection}", report.deleted);
            }
        }
        DocumentCommand::Create {
            collection,
            path,
            chunk_size,
        } => {
            let options = IngestionOptions { chunk_size };
            let report = if path.is_dir() {
                service.ingest_folder(&collection, &path, &options).await?
            } else {
                service.ingest_file(&collection, &path, &options).await?
            };
            print_ingest_report(&report);
        }
    }
    Ok(())
}

fn print_ingest_report(report: &IngestReport) {
    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    println!(
        "Created {} chunk(s) from {} file(s) in {}",
        report.created,
        report.files.len(),
        report.collection
    );
    if report.failed > 0 {
        println!("{} chunk(s) failed to write", report.failed);
    }
}
