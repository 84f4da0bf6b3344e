use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use tvmaze_browser::cli::{self, Args, Command, HELP};
use tvmaze_browser::config::Config;
use tvmaze_browser::logging::init_tracing;
use tvmaze_browser::shutdown::ShutdownCoordinator;
use tvmaze_browser::ui::app::{app_store, AppEnvironment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    let env = AppEnvironment::from_config(&config).context("Failed to set up catalog client")?;
    tracing::info!(base_url = %config.catalog.base_url, "Starting session");

    let store = app_store(env);
    let handle = store.handle();
    let updates = store.subscribe();

    let coordinator = ShutdownCoordinator::new();
    let store_task = tokio::spawn(store.run(coordinator.handle()));

    let printer_shutdown = coordinator.handle();
    let mut printer_updates = updates.clone();
    let printer = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = printer_shutdown.wait() => break,
                changed = printer_updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = printer_updates.borrow_and_update().clone();
                    println!("{}", cli::render(&state));
                }
            }
        }
    });

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(command) => {
                        let state = updates.borrow().clone();
                        match command.into_intent(&state) {
                            Ok(Some(intent)) => {
                                handle.send(intent);
                            }
                            Ok(None) => {}
                            Err(err) => eprintln!("{}", err),
                        }
                    }
                    Err(err) => eprintln!("{}", err),
                }
            }
        }
    }

    coordinator.signal();
    let _ = printer.await;
    let final_state = store_task.await?;
    tracing::info!(query = %final_state.shows.search_term, "Session ended");
    Ok(())
}
