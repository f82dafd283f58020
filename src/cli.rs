//! Command-line interface

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use payscreen::config::Config;
use payscreen::elastic::{ElasticClient, SANCTIONS_INDEX, PC_INDEX, VARIANTS_INDEX};
use payscreen::embedder::Embedder;
use payscreen::pipeline::{Pipeline, ProcessOptions};
use payscreen::sanctions::SanctionsLoader;
use payscreen::search::{HybridSearcher, IndexType, SearchRequest};

#[derive(Parser)]
#[command(
    name = "payscreen",
    version,
    about = "Sanctions screening for payment descriptions"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a payment description to its canonical name form
    Normalize {
        text: String,
        /// Also generate an embedding for the normalized form
        #[arg(long)]
        embeddings: bool,
        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the smart pre-filter and print the screening decision
    Screen {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Hybrid search against the sanctions indexes
    Search {
        query: String,
        /// Maximum results
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
        /// Minimum similarity score
        #[arg(short = 't', long, default_value_t = 0.7)]
        threshold: f32,
        /// Which corpus to search: payments, sanctions, or both
        #[arg(long, default_value = "both")]
        index_type: String,
        #[arg(long)]
        json: bool,
    },
    /// Bulk-load a sanctions entity file (JSON array or JSON lines)
    Index {
        file: PathBuf,
    },
    /// Create the screening indexes (optionally dropping existing ones)
    InitIndices {
        #[arg(long)]
        recreate: bool,
    },
    /// Probe Elasticsearch, the embedding model, and index existence
    Health,
    /// Run the HTTP screening API
    #[cfg(feature = "serve")]
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

pub fn run_with(cli: Cli) -> Result<()> {
    let config = Config::load(&std::env::current_dir().unwrap_or_else(|_| ".".into()));

    match cli.command {
        Command::Normalize {
            text,
            embeddings,
            json,
        } => normalize(&config, &text, embeddings, json),
        Command::Screen { text, json } => screen(&config, &text, json),
        Command::Search {
            query,
            limit,
            threshold,
            index_type,
            json,
        } => search(&config, query, limit, threshold, &index_type, json),
        Command::Index { file } => index(&config, &file),
        Command::InitIndices { recreate } => init_indices(&config, recreate),
        Command::Health => health(&config),
        #[cfg(feature = "serve")]
        Command::Serve { port } => serve(&config, port),
    }
}

/// Build the pipeline, attaching the embedding model when requested.
/// Model failures degrade to a lexical-only pipeline, never abort.
fn build_pipeline(config: &Config, want_embedder: bool) -> Arc<Pipeline> {
    let pipeline = Pipeline::new(config);
    let pipeline = if want_embedder {
        match Embedder::with_model(&config.vector.model_name) {
            Ok(embedder) => pipeline.with_embedder(Arc::new(embedder)),
            Err(e) => {
                tracing::warn!(error = %e, "embedding model unavailable, continuing without vectors");
                pipeline
            }
        }
    } else {
        pipeline
    };
    Arc::new(pipeline)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("failed to start async runtime")
}

fn normalize(config: &Config, text: &str, embeddings: bool, json: bool) -> Result<()> {
    let pipeline = build_pipeline(config, embeddings);
    let result = pipeline.process(
        text,
        &ProcessOptions {
            generate_variants: true,
            generate_embeddings: embeddings,
            ..Default::default()
        },
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.success {
        println!("{} {}", "normalized:".bold(), result.normalized);
        println!("{} {}", "language:".bold(), result.language);
        println!("{} {:?}", "kind:".bold(), result.entity_kind);
        println!("{} {}", "variants:".bold(), result.variants.join(", "));
        if let Some(first) = result.embeddings.as_ref().and_then(|e| e.first()) {
            println!("{} {}-dim", "embedding:".bold(), first.len());
        }
    } else {
        println!("{} {}", "failed:".red().bold(), result.errors.join("; "));
    }
    Ok(())
}

fn screen(config: &Config, text: &str, json: bool) -> Result<()> {
    let pipeline = build_pipeline(config, false);
    let decision = pipeline.screen(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    let label = format!("{:?}", decision.decision).to_uppercase();
    let colored_label = match label.as_str() {
        "BLOCK" => label.as_str().red().bold(),
        "REVIEW" => label.as_str().yellow().bold(),
        "FULLSEARCH" => label.as_str().cyan().bold(),
        _ => label.as_str().green().bold(),
    };
    println!("{colored_label} (confidence {:.2})", decision.confidence);
    println!("{}", decision.reasoning);
    Ok(())
}

fn search(
    config: &Config,
    query: String,
    limit: usize,
    threshold: f32,
    index_type: &str,
    json: bool,
) -> Result<()> {
    let index_type = match index_type {
        "payments" => IndexType::Payments,
        "sanctions" => IndexType::Sanctions,
        _ => IndexType::Both,
    };
    let pipeline = build_pipeline(config, true);
    let es = Arc::new(ElasticClient::new(
        &config.elasticsearch,
        config.search_timeout(),
    )?);
    let searcher = HybridSearcher::new(es, pipeline, config.vector.index_name.clone());

    let request = SearchRequest {
        query,
        limit,
        threshold,
        index_type,
    };
    let response = runtime()?.block_on(searcher.search(&request));

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "query: {} -> {} ({}, {} results, {:.3}s)",
        response.query.as_str().bold(),
        response.normalized_query.as_str().bold(),
        response.language,
        response.total,
        response.processing_time
    );
    for (i, hit) in response.results.iter().enumerate() {
        let name = hit.source["name"].as_str().unwrap_or("?");
        println!(
            "{:>3}. {:.3}  {}  [{}] {}",
            i + 1,
            hit.score,
            name,
            hit.index,
            hit.id
        );
    }
    Ok(())
}

fn index(config: &Config, file: &std::path::Path) -> Result<()> {
    let pipeline = build_pipeline(config, true);
    let es = Arc::new(ElasticClient::new(
        &config.elasticsearch,
        config.search_timeout(),
    )?);
    let loader = SanctionsLoader::new(pipeline, es);

    let flag = loader.interrupt_flag();
    ctrlc::set_handler(move || {
        if flag.swap(true, std::sync::atomic::Ordering::SeqCst) {
            // second interrupt: stop immediately
            std::process::exit(130);
        }
        eprintln!("finishing current batch, Ctrl-C again to abort");
    })
    .context("failed to install interrupt handler")?;

    let summary = runtime()?
        .block_on(loader.run(file))
        .with_context(|| format!("loading {}", file.display()))?;

    if summary.interrupted {
        std::process::exit(130);
    }
    if summary.indexed == 0 && summary.failed > 0 {
        anyhow::bail!("all {} entities failed to index", summary.failed);
    }
    Ok(())
}

fn init_indices(config: &Config, recreate: bool) -> Result<()> {
    let es = ElasticClient::new(&config.elasticsearch, config.search_timeout())?;
    runtime()?.block_on(async {
        for (name, mapping) in [
            (SANCTIONS_INDEX, payscreen::elastic::sanctions_mapping()),
            (VARIANTS_INDEX, payscreen::elastic::variants_mapping()),
            (PC_INDEX, payscreen::elastic::parent_child_mapping()),
        ] {
            if recreate {
                let _ = es.delete_index(name).await;
            }
            if !es.index_exists(name).await? {
                es.create_index(name, &mapping).await?;
                println!("created {name}");
            } else {
                println!("{name} already exists");
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn health(config: &Config) -> Result<()> {
    let pipeline = build_pipeline(config, true);
    let es = ElasticClient::new(&config.elasticsearch, config.search_timeout())?;
    let report = runtime()?.block_on(payscreen::health::health_check(
        &es,
        &pipeline,
        &config.vector.index_name,
    ));
    println!("{}", serde_json::to_string_pretty(&report)?);
    if report.status == "unhealthy" {
        anyhow::bail!("elasticsearch unreachable at {}", config.elasticsearch.url());
    }
    Ok(())
}

#[cfg(feature = "serve")]
fn serve(config: &Config, port: u16) -> Result<()> {
    use payscreen::serve::{serve as run_server, AppState};

    let pipeline = build_pipeline(config, true);
    let es = Arc::new(ElasticClient::new(
        &config.elasticsearch,
        config.search_timeout(),
    )?);
    let searcher = HybridSearcher::new(
        es.clone(),
        pipeline.clone(),
        config.vector.index_name.clone(),
    );
    let state = Arc::new(AppState {
        pipeline,
        es,
        searcher,
        payments_index: config.vector.index_name.clone(),
    });

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    runtime()?.block_on(run_server(state, addr))
}
