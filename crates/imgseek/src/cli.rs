//! Command line interface
//!
//! Flags override the configuration file, which overrides the built-in
//! defaults. Output goes to the writer handed to [`run`]; logs go through
//! tracing.

use clap::{Parser, Subcommand};
use imgseek_application::ports::services::{IndexingServiceInterface, SearchServiceInterface};
use imgseek_domain::value_objects::SearchResult;
use imgseek_infrastructure::config::{AppConfig, ConfigLoader};
use imgseek_infrastructure::di::{AppContext, init_app};
use imgseek_infrastructure::logging::init_logging;
use imgseek_server::{ImageSearchServer, SearchState};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command line interface for imgseek
#[derive(Parser, Debug)]
#[command(name = "imgseek")]
#[command(about = "Search a folder of images with plain-language descriptions")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// imgseek subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Embed every image under a folder and write the index file
    Build {
        /// Folder scanned recursively for images
        #[arg(long, alias = "image_folder")]
        image_folder: Option<PathBuf>,

        /// Where the index file is written
        #[arg(long, alias = "index_path")]
        index_path: Option<PathBuf>,
    },

    /// Print the images that best match a text description
    Search {
        /// Text description of the wanted images
        #[arg(short, long)]
        query: String,

        /// Index file to search
        #[arg(long, alias = "index_path")]
        index_path: Option<PathBuf>,

        /// Number of results
        #[arg(short = 'k', long, alias = "top_k")]
        top_k: Option<usize>,
    },

    /// Serve the search page and JSON API
    Serve {
        /// Index file to search
        #[arg(long, alias = "index_path")]
        index_path: Option<PathBuf>,

        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Load configuration, install logging and dispatch the subcommand
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Build {
            image_folder,
            index_path,
        } => {
            let context = init_app(config).await?;
            build(&context, image_folder, index_path, out).await
        }
        Command::Search {
            query,
            index_path,
            top_k,
        } => {
            let context = init_app(config).await?;
            search(&context, &query, index_path, top_k, out).await
        }
        Command::Serve {
            index_path,
            host,
            port,
        } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let context = init_app(config).await?;
            serve(&context, index_path).await
        }
    }
}

fn load_config(cli: &Cli) -> imgseek_domain::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    loader.load()
}

async fn build<W: Write>(
    context: &AppContext,
    image_folder: Option<PathBuf>,
    index_path: Option<PathBuf>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let image_folder = image_folder.unwrap_or_else(|| context.config.index.image_folder.clone());
    let index_path = index_path.unwrap_or_else(|| context.config.index.index_path.clone());

    let result = context
        .indexing_service()
        .build_index(&image_folder, &index_path)
        .await?;

    writeln!(
        out,
        "Index build complete: {} indexed, {} skipped",
        result.images_indexed, result.images_skipped
    )?;
    writeln!(out, "Index saved to {}", result.index_path.display())?;
    Ok(())
}

async fn search<W: Write>(
    context: &AppContext,
    query: &str,
    index_path: Option<PathBuf>,
    top_k: Option<usize>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let top_k = top_k.unwrap_or(context.config.search.cli_top_k);
    let results = context
        .search_service(index_path)
        .search(query, top_k)
        .await?;

    out.write_all(format_results(query, &results).as_bytes())?;
    Ok(())
}

async fn serve(
    context: &AppContext,
    index_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = SearchState::new(
        context.search_service(index_path),
        context.config.search.clone(),
    );
    info!(
        "Open http://{} in a browser to search",
        context.config.server.address()
    );

    ImageSearchServer::new(context.config.server.clone(), state)
        .start()
        .await
        .map_err(|e| e as Box<dyn std::error::Error>)
}

/// Render search results the way the `search` subcommand prints them
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    let mut text = format!("\nQuery: {}\n\nFound {} results:\n\n", query, results.len());
    for (rank, result) in results.iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\n   Similarity: {:.4}\n\n",
            rank + 1,
            result.path,
            result.score
        ));
    }
    text
}
