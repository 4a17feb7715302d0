use std::io::Write;

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Initialize stderr logging. `RUST_LOG` overrides the default level.
pub(super) fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "[{}] {}", level_label(record.level()), record.args()))
        .try_init();
}
