//! # Interactive Session
//!
//! The keyboard loop behind `catalog-viewer interactive`, split in two halves
//! that share nothing but the store:
//!
//! - [`run_session`] reads commands and fires controller operations without
//!   waiting for them, so input stays responsive while a request is in flight.
//! - [`render_loop`] follows the store's `watch` channel and prints each new
//!   view, skipping states that would render identically.

use crate::controller::SyncController;
use crate::model::SyncState;
use crate::service::CatalogService;
use crate::view::CatalogView;
use std::io::{self, Write};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Printed under every rendered view.
pub const PROMPT: &str = "[r]efresh  [c]reate  [q]uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Refresh,
    Create,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command `{0}`; use r, c or q")]
pub struct UnknownCommand(pub String);

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, UnknownCommand> {
        match line.trim() {
            "" => Ok(None),
            "r" | "refresh" => Ok(Some(Self::Refresh)),
            "c" | "create" => Ok(Some(Self::Create)),
            "q" | "quit" => Ok(Some(Self::Quit)),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Writes a view only when it differs from the last one written.
#[derive(Debug, Default)]
pub struct ViewRenderer {
    last: Option<CatalogView>,
}

impl ViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if something was written.
    pub fn render(&mut self, state: &SyncState, out: &mut impl Write) -> io::Result<bool> {
        let view = CatalogView::from_state(state);
        if self.last.as_ref() == Some(&view) {
            return Ok(false);
        }
        writeln!(out, "{view}")?;
        writeln!(out, "{PROMPT}")?;
        out.flush()?;
        self.last = Some(view);
        Ok(true)
    }
}

/// Renders every distinct state until the store shuts down, then hands the
/// writer back.
pub async fn render_loop<W: Write>(
    mut updates: watch::Receiver<SyncState>,
    mut out: W,
) -> io::Result<W> {
    let mut renderer = ViewRenderer::new();
    loop {
        let state = updates.borrow_and_update().clone();
        renderer.render(&state, &mut out)?;
        if updates.changed().await.is_err() {
            return Ok(out);
        }
    }
}

/// Reads commands from `input` until `q` or end of input.
///
/// Unknown commands are reported on `feedback`. Operations run concurrently
/// and are all awaited before returning; none is cancelled.
pub async fn run_session<S, R, W>(
    controller: &SyncController<S>,
    input: R,
    mut feedback: W,
) -> io::Result<()>
where
    S: CatalogService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut tasks = JoinSet::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(feedback, "{e}")?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            SessionCommand::Refresh => {
                let controller = controller.clone();
                tasks.spawn(async move { controller.refresh().await });
            }
            SessionCommand::Create => {
                let controller = controller.clone();
                tasks.spawn(async move { controller.create_placeholder().await });
            }
            SessionCommand::Quit => break,
        }
    }

    info!(pending = tasks.len(), "Session ended");
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!(error = %e, "Operation failed"),
            Err(e) => error!("Operation task failed: {:?}", e),
        }
    }
    Ok(())
}
