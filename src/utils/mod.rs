use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber honoring `RUST_LOG` overrides.
pub fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("expense_core=info".parse().expect("valid directive"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
