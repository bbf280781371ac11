use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend once.
///
/// `filter` uses the `env_logger` syntax (e.g. "info",
/// "tiamat_engine=debug"). When `None`, `RUST_LOG` is honored and the
/// fallback level is `info`.
///
/// Idempotent — later calls are ignored, so library consumers and binaries
/// can both call it without coordinating.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
