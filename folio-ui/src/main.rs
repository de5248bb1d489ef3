use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target};
use folio_config::ConfigLoader;
use folio_ui::carousel::CarouselSnapshot;
use folio_ui::runtime::CarouselHandle;
use folio_ui::sim::{SimCommand, parse_command};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Drive a headless carousel from stdin and print every state change.
#[derive(Debug, Parser)]
#[command(name = "folio-sim", version)]
struct Args {
    /// Number of items in the carousel.
    #[arg(long, default_value_t = 13)]
    items: usize,
    /// Config file (TOML or JSON). Defaults to the env/file lookup.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start with the reduced-motion preference set.
    #[arg(long)]
    reduced_motion: bool,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_ui", LevelFilter::Debug)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let config = ConfigLoader::load_from_file(path).with_context(|| {
                format!("failed to load config {}", path.display())
            })?;
            config.validate()?;
            config
        }
        None => {
            ConfigLoader::new()
                .load()
                .context("failed to load folio config")?
                .config
        }
    };

    let items: Vec<String> =
        (0..args.items).map(|i| format!("project-{i}")).collect();
    let handle =
        CarouselHandle::spawn(items, config.carousel, args.reduced_motion)?;
    let mut updates = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_snapshot(&handle.snapshot());
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(SimCommand::Quit) => break,
                    Ok(SimCommand::Show) => print_snapshot(&handle.snapshot()),
                    Ok(SimCommand::Wait(duration)) => tokio::time::sleep(duration).await,
                    Ok(SimCommand::Input(input)) => {
                        let outcome = handle.dispatch(input).await?;
                        println!(
                            "{:?}: navigated={} suppress_default={}",
                            input,
                            outcome.navigation.is_some(),
                            outcome.suppress_default
                        );
                    }
                    Err(err) => eprintln!("error: {err}"),
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                print_snapshot(&snapshot);
            }
        }
    }

    let last = handle.shutdown().await?;
    log::info!("carousel stopped at index {}", last.current_index);
    Ok(())
}

fn print_snapshot(snapshot: &CarouselSnapshot) {
    let window = snapshot
        .visible
        .map(|w| {
            format!(
                "[{} {} ({}) {} {}]",
                w.far_left, w.left, w.center, w.right, w.far_right
            )
        })
        .unwrap_or_else(|| "[]".to_string());
    println!(
        "index={} dir={:?} paused={} reduced_motion={} transition={}ms window={}",
        snapshot.current_index,
        snapshot.direction,
        snapshot.is_paused,
        snapshot.reduced_motion,
        snapshot.transition.as_millis(),
        window
    );
}
