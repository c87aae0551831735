use std::path::PathBuf;

use clap::Parser;
use gesture_remote::{
    AppError, Configuration, CoordinatorBuilder,
    intake::{FrameSource, ReplaySource, SubprocessSource},
    output::{ActionDisplay, KeySink, LogKeySink},
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "gesture-remote", about = "Control a media player with hand gestures")]
struct Cli {
    /// TOML configuration file (missing file means defaults)
    #[arg(long, default_value = "gesture-remote.toml")]
    config: PathBuf,

    /// Replay a recorded landmark session instead of starting the provider
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Log key presses instead of sending them
    #[arg(long)]
    dry_run: bool,

    /// Landmark provider executable (overrides the configuration)
    #[arg(long)]
    provider: Option<String>,
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn key_sink(dry_run: bool) -> Result<Box<dyn KeySink>, AppError> {
    if dry_run {
        return Ok(Box::new(LogKeySink::new()));
    }

    #[cfg(feature = "keyboard")]
    {
        Ok(Box::new(gesture_remote::output::EnigoKeySink::new()?))
    }
    #[cfg(not(feature = "keyboard"))]
    {
        tracing::warn!("Built without the `keyboard` feature, key presses are only logged");
        Ok(Box::new(LogKeySink::new()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut configuration = Configuration::load(&cli.config)?;
    if let Some(program) = cli.provider {
        configuration.provider.program = program;
        configuration.validate()?;
    }
    init_logging(configuration.logging.max_level()?);

    // A replay has no preview window, so the label only goes to the log.
    let (source, display): (Box<dyn FrameSource>, Option<Box<dyn ActionDisplay>>) =
        match &cli.replay {
            Some(path) => (
                Box::new(ReplaySource::open(path, configuration.provider.max_hands).await?),
                None,
            ),
            None => {
                let mut provider = SubprocessSource::spawn(&configuration.provider)?;
                let display = provider
                    .take_display()
                    .map(|d| Box::new(d) as Box<dyn ActionDisplay>);
                (Box::new(provider), display)
            }
        };

    let mut builder = CoordinatorBuilder::new(configuration)
        .source(source)
        .key_sink(key_sink(cli.dry_run)?);
    if let Some(display) = display {
        builder = builder.action_display(display);
    }
    let coordinator = builder.build()?;

    let cancel_token = coordinator.cancel_token();
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel_token.cancelled() => {}
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!("Failed to listen for Ctrl-C: {}", e);
                    return;
                }
                tracing::info!("Ctrl-C received, shutting down");
                cancel_token.cancel();
            }
        }
    });

    coordinator.run().await?;
    Ok(())
}
