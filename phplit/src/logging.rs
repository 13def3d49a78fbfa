use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr log subscriber.
///
/// Nothing is installed unless `RUST_LOG` is set or `verbose` is true.
/// `RUST_LOG` wins; `--verbose` alone logs the phplit crates at debug level.
pub fn init(verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) if verbose => {
            EnvFilter::new("phplit=debug,phplit_config=debug,phplit_dumper=debug")
        }
        Err(_) => return,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
