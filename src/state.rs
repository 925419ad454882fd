use std::sync::Arc;

use juniper::Context as JuniperContext;

use crate::catalog::Catalog;

pub type AppState = Arc<AppData>;

#[derive(Clone)]
pub struct AppData {
    pub catalog: Catalog,
}

impl JuniperContext for AppData {}

impl AppData {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
