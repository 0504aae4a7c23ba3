/// Hymn: chants stanzas to stdout until Ctrl+C.
///
/// Usage: hymn [--seed <n>] [--lexicon <file.ron>] [--line-delay-ms <ms>] [-v]

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use endless_hymn::core::display::{ConsoleSink, StopFlag};
use endless_hymn::core::hymn::Hymn;
use endless_hymn::schema::lexicon::Lexicon;

/// The Endless Hymn: stanzas in archaic and alien tongues, forever
#[derive(Parser)]
#[command(name = "hymn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed the random source for a reproducible hymn
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read word pools from a RON lexicon file instead of the built-in ones
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Delay after each stanza and chorus line, in milliseconds
    #[arg(long, default_value = "500")]
    line_delay_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the hymn.
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut builder = Hymn::builder().line_delay(Duration::from_millis(cli.line_delay_ms));
    if let Some(path) = &cli.lexicon {
        builder = builder.lexicon(Lexicon::load_from_ron(path)?);
    }
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut hymn = builder.build()?;

    let stop = StopFlag::new();
    watch_for_interrupt(stop.clone())?;

    let mut sink = ConsoleSink::new(std::io::stdout(), stop);
    hymn.run(&mut sink)?;
    Ok(())
}

/// Raise `stop` on the first Ctrl+C.
///
/// The handler is registered before this returns, so an interrupt can never
/// fall through to the default terminate-the-process behaviour once the
/// hymn is running. A second Ctrl+C is swallowed.
fn watch_for_interrupt(stop: StopFlag) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut interrupts = {
        let _guard = runtime.enter();
        interrupt_listener()?
    };

    std::thread::Builder::new()
        .name("interrupt-watch".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                if interrupts.recv().await.is_some() {
                    stop.raise();
                } else {
                    warn!("interrupt listener closed");
                }
            });
        })?;
    Ok(())
}

#[cfg(unix)]
fn interrupt_listener() -> std::io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn interrupt_listener() -> std::io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
