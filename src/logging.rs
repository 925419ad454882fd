use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "books_query=info";

/// Falls back to INFO for this crate when `RUST_LOG` is unset or invalid.
fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref()))
        .init();
}
