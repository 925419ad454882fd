use tracing::{debug, info};

use crate::catalog::Catalog;

pub struct SetupResult {
    pub catalog: Catalog,
}

pub async fn setup_all() -> anyhow::Result<SetupResult> {
    let catalog = Catalog::default();
    debug!(books = %serde_json::to_string(catalog.books())?, "catalog contents");
    info!("Seeded catalog with {} books", catalog.len());
    Ok(SetupResult { catalog })
}
