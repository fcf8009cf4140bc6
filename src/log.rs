use log::LevelFilter;

/// Initialize logging for wordseek.
///
/// # Behavior
/// - Uses `Debug` level if `debug_enabled` is true, otherwise `Info` level.
/// - `RUST_LOG` overrides the default when explicitly set.
/// - Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    match builder.try_init() {
        Ok(()) => log::debug!("Logger initialized at {level:?} level"),
        Err(e) => log::debug!("Logger already initialized: {e}"),
    }
}
