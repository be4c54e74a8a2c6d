use env_logger::Env;

/// One-time logger setup for the binaries. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
