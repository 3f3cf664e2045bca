use std::panic::PanicHookInfo;
use std::{env, panic};

use tracing::level_filters::LevelFilter;
use tracing::{error, Subscriber};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use opts::LogFormat;

mod opts;

fn tracing_panic_hook(panic_info: &PanicHookInfo) {
    let payload = panic_info.payload();

    let payload = payload.downcast_ref::<&str>().map_or_else(
        || payload.downcast_ref::<String>().map(String::as_str),
        |s| Some(&**s),
    );

    let location = panic_info.location().map(ToString::to_string);
    let backtrace = backtrace::Backtrace::new();

    error!(
        panic.payload = payload,
        panic.location = location,
        panic.backtrace = ?backtrace,
        "A panic occurred",
    );
}

fn boxed_subscriber_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        LogFormat::Human => Box::new(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        LogFormat::JSON => Box::new(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        ),
    }
}

/// Default filter directive when `RUST_LOG` is not set.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Init logger with `tracing_subscriber`, setup eyre trace helper and panic handler.
///
/// `RUST_LOG` takes precedence over `verbose`.
///
/// This must be called after eyre setup or panic handler will not work.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    tracing_subscriber::Registry::default()
        .with(filter)
        .with(ErrorLayer::default())
        .with(boxed_subscriber_layer(format))
        .init();

    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        tracing_panic_hook(panic_info);
        prev_hook(panic_info);
    }));
}

#[cfg(any(test, feature = "tests"))]
pub fn test_init_logger() {
    drop(
        tracing_subscriber::Registry::default()
            .with(LevelFilter::DEBUG)
            .with(ErrorLayer::default())
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    );
}

/// Initialize color-eyre error handling, with `NO_COLOR` support.
///
/// # Errors
/// Returns an error if `color-eyre` has already been initialized.
pub fn init_color_eyre() -> eyre::Result<()> {
    if env::var("NO_COLOR").is_ok() {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    } else {
        color_eyre::install()?;
    }
    Ok(())
}
