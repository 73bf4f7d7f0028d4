use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kanban_board::{
    domain::EditorPreset, load_or_empty, reduce, render::render_board, AppConfig, AppState,
    Event, GroupingMode, Priority, SortKey, SortOrder, SourceConfig, TicketStatus,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "kanban", version, about = "Print a kanban board grouped and sorted")]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Endpoint returning `{ tickets, users }`
    #[arg(long, conflicts_with = "file")]
    source: Option<String>,

    /// Read `{ tickets, users }` from a local JSON file instead
    #[arg(long)]
    file: Option<PathBuf>,

    /// Column grouping: status, user or priority; anything else shows no columns
    #[arg(short, long)]
    group: Option<String>,

    /// Sort within columns: none, priority or title; anything else keeps input order
    #[arg(short, long)]
    sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(short, long)]
    order: Option<SortOrder>,

    /// Add a ticket with this title before printing
    #[arg(long)]
    add: Option<String>,

    /// Status for the added ticket
    #[arg(long, requires = "add", default_value = "Backlog")]
    add_status: TicketStatus,

    /// Priority (0-4) for the added ticket
    #[arg(long, requires = "add", default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=4))]
    add_priority: i64,

    /// Assignee user id for the added ticket
    #[arg(long, requires = "add")]
    add_user: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("KANBAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("kanban_board=info,warn"));

    let format = env::var("KANBAN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let base = match &cli.config {
        Some(path) => AppConfig::load_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let mut config = base
        .with_overrides(|name| env::var(name).ok())
        .context("reading KANBAN_* environment")?;

    if let Some(url) = &cli.source {
        config.source = SourceConfig::Http { url: url.clone() };
    }
    if let Some(path) = &cli.file {
        config.source = SourceConfig::File { path: path.clone() };
    }
    if let Some(group) = &cli.group {
        config.grouping = GroupingMode::from_name(group);
    }
    if let Some(key) = &cli.sort {
        config.sort.key = SortKey::from_name(key);
    }
    if let Some(order) = cli.order {
        config.sort.order = order;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    debug!(?config, "resolved configuration");

    let source = config.source.build()?;
    let snapshot = load_or_empty(source.as_ref()).await;

    let mut state = AppState::new(config.grouping, config.sort);
    state = reduce(state, Event::LoadSucceeded(snapshot));

    if let Some(title) = cli.add {
        let priority = Priority::try_from(cli.add_priority)?;
        let events = [
            Event::EditorOpened(EditorPreset {
                status: Some(cli.add_status),
                priority,
                user_id: cli.add_user,
            }),
            Event::EditorTitleChanged(title),
            Event::TicketSubmitted,
        ];
        state = events.into_iter().fold(state, reduce);
    }

    print!("{}", render_board(&state.view()));
    Ok(())
}
