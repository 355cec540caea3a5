use std::io::{BufRead, Write};

use anyhow::Context;

use cartkit_cart::CartState;
use cartkit_demo::{Command, DemoConfig, DemoError, Outcome, Session};
use cartkit_events::{InMemoryEventBus, StateChanged, Subscription};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    cartkit_observability::init(&config.observability);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let catalog = config.load_catalog()?;
    tracing::info!(entries = catalog.len(), "catalog loaded");

    let mut session = Session::new(catalog, InMemoryEventBus::new());
    let observer = session.subscribe();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", cartkit_demo::command::HELP)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = Command::parse(&line).and_then(|cmd| session.execute(cmd));
        match result {
            Ok(Outcome::Print(text)) => writeln!(stdout, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(err @ (DemoError::Parse(_) | DemoError::UnknownItem(_) | DemoError::Domain(_))) => {
                writeln!(stdout, "error: {err}")?;
            }
            Err(err) => return Err(err.into()),
        }

        log_changes(&observer);
    }

    let cart = session.finish();
    tracing::info!(
        total = %cart.total(),
        items = cart.item_count(),
        "session finished"
    );
    Ok(())
}

fn log_changes(observer: &Subscription<StateChanged<CartState>>) {
    for change in observer.drain() {
        tracing::info!(
            sequence = change.sequence_number(),
            action = change.action_type(),
            lines = change.state().items().len(),
            total = %change.state().total(),
            "cart changed"
        );
    }
}
