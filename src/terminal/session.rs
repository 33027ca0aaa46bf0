//! Terminal session loop
//!
//! Reads command lines, feeds the resulting page events through the
//! dispatcher and renders every result on the console host. Navigation and
//! reloads open the target page and run its load handler, as a browser would.

use std::io::Write;

use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::host::ConsoleHost;
use super::parser::{Command, HELP_TEXT, parse_command};
use crate::events::{Dispatcher, Page, PageEvent};
use crate::render::apply;

const MAX_LINE_LENGTH: usize = 1024;

/// Runs commands from `reader` until EOF or `QUIT`.
pub async fn run_session<R, W>(
    mut reader: R,
    dispatcher: &mut Dispatcher,
    host: &mut ConsoleHost<W>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line = String::new();
    host.note(&format!("On the {} page. Type HELP for commands.", dispatcher.page()));

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("Input closed");
            break;
        }
        if line.len() > MAX_LINE_LENGTH {
            host.note("Command too long");
            continue;
        }

        let command = parse_command(&line);
        match command {
            Command::Quit => break,
            Command::Help => host.note(HELP_TEXT),
            Command::Unknown(ref raw) if raw.is_empty() => {}
            Command::Unknown(raw) => {
                warn!("Unknown command: {}", raw);
                host.note(&format!("Unknown command: {} (try HELP)", raw));
            }
            command => {
                if let Some(page) = command.target_page() {
                    if page != dispatcher.page() || matches!(command, Command::Open(_)) {
                        open_page(dispatcher, host, page).await;
                    }
                }
                for event in command.into_events() {
                    let dispatched = dispatcher.dispatch(event).await;
                    apply(host, dispatched);
                    settle(dispatcher, host).await;
                }
            }
        }
    }
    Ok(())
}

async fn open_page<W: Write>(dispatcher: &mut Dispatcher, host: &mut ConsoleHost<W>, page: Page) {
    dispatcher.open(page);
    load_page(dispatcher, host, page).await;
}

/// Announces the freshly opened page and runs its load handler.
async fn load_page<W: Write>(dispatcher: &mut Dispatcher, host: &mut ConsoleHost<W>, page: Page) {
    host.note(&format!("-- {} page --", page));
    let dispatched = dispatcher.dispatch(PageEvent::Load).await;
    apply(host, dispatched);
}

/// Follows a pending navigation or reload, if the last result asked for one.
async fn settle<W: Write>(dispatcher: &mut Dispatcher, host: &mut ConsoleHost<W>) {
    if let Some(target) = host.take_navigation() {
        match dispatcher.follow(&target) {
            Some(page) => load_page(dispatcher, host, page).await,
            None => host.note(&format!("{} is outside this client", target)),
        }
    } else if host.take_reload() {
        let page = dispatcher.page();
        open_page(dispatcher, host, page).await;
    }
}
