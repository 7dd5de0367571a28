use env_logger::Target;

/// Logs go to stderr so they never interleave with menu output on stdout.
/// Only warnings show by default; `RUST_LOG` overrides the filter.
pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, log::LevelFilter::Warn)
        .target(Target::Stderr)
        .format_timestamp(None);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
