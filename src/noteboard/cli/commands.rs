//! # CLI Layer
//!
//! This module is **one possible UI client** for the board, not the board itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the base URL and build the HTTP sync client
//! 3. **Dispatch**: Mount the board, then replay the interaction a command stands for
//! 4. **Output Formatting**: Render the board and outcome messages
//!
//! Every board command starts by mounting (listing notes from the server), exactly like
//! the board does when it first appears. Request failures are logged and the command
//! carries on with whatever state it has.

use super::render::{outcome_message, render_board, write_message};
use super::session::run_session;
use super::setup::{Cli, Commands};
use clap::Parser;
use noteboard::board::{BoardEvent, NoteBoard, Outcome};
use noteboard::config::{config_dir, BoardConfig};
use noteboard::error::{NoteboardError, Result};
use noteboard::model::NoteId;
use noteboard::sync::http::HttpSyncClient;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

struct AppContext {
    client: HttpSyncClient,
    board: NoteBoard,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config_dir()?;
    let config = BoardConfig::load(&config_dir)?;

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(config, config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config)?;
    let mounted = ctx.dispatch(BoardEvent::Mount).await;

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add { title, content }) => handle_add(&mut ctx, title, content).await,
        Some(Commands::Edit { id, title, content }) => {
            handle_edit(&mut ctx, &mounted, id, title, content).await
        }
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids).await,
        Some(Commands::Board) => handle_board(&mut ctx).await,
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("noteboard={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli, config: &BoardConfig) -> Result<AppContext> {
    let mut config = config.clone();
    if let Some(url) = &cli.base_url {
        config.set_base_url(url)?;
    }
    debug!(base_url = %config.base_url, "using notes endpoint");

    Ok(AppContext {
        client: HttpSyncClient::new(config.base_url),
        board: NoteBoard::new(),
    })
}

impl AppContext {
    async fn dispatch(&mut self, event: BoardEvent) -> Outcome {
        self.board.dispatch(&self.client, event).await
    }

    fn report(&self, outcome: &Outcome) -> Result<()> {
        if let Some(message) = outcome_message(outcome, self.board.state()) {
            write_message(&mut std::io::stdout(), &message)?;
        }
        Ok(())
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print!("{}", render_board(ctx.board.state()));
    Ok(())
}

async fn handle_add(ctx: &mut AppContext, title: String, content: String) -> Result<()> {
    ctx.dispatch(BoardEvent::EditTitle(title)).await;
    ctx.dispatch(BoardEvent::EditContent(content)).await;
    let outcome = ctx.dispatch(BoardEvent::Submit).await;
    ctx.report(&outcome)?;
    handle_list(ctx)
}

async fn handle_edit(
    ctx: &mut AppContext,
    mounted: &Outcome,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if ctx.dispatch(BoardEvent::ClickNote(id)).await == Outcome::Ignored {
        return Err(match mounted {
            Outcome::Failed => NoteboardError::Unavailable(format!(
                "could not load notes, note {} cannot be edited",
                id
            )),
            _ => NoteboardError::NoteNotFound(id),
        });
    }
    if let Some(title) = title {
        ctx.dispatch(BoardEvent::EditTitle(title)).await;
    }
    if let Some(content) = content {
        ctx.dispatch(BoardEvent::EditContent(content)).await;
    }
    let outcome = ctx.dispatch(BoardEvent::Submit).await;
    ctx.report(&outcome)?;
    handle_list(ctx)
}

async fn handle_delete(ctx: &mut AppContext, ids: Vec<NoteId>) -> Result<()> {
    for id in ids {
        let outcome = ctx.dispatch(BoardEvent::ClickDelete(id)).await;
        ctx.report(&outcome)?;
    }
    handle_list(ctx)
}

async fn handle_board(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    run_session(&mut ctx.board, &ctx.client, stdin.lock(), std::io::stdout()).await
}

fn handle_config(
    mut config: BoardConfig,
    config_dir: PathBuf,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("base-url"), None) => {
            println!("base-url = {}", config.base_url);
        }
        (Some("base-url"), Some(url)) => {
            config.set_base_url(&url)?;
            config.save(&config_dir)?;
            println!("base-url = {}", config.base_url);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}
