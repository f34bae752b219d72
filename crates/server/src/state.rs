use std::sync::Arc;

use booking::AdmissionEngine;
use database::store::SeaOrmStore;
use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// The admission engine must be a single process-wide instance: its per-car
/// lock registry is what serializes concurrent reservation requests, so
/// handlers share it through state instead of constructing one per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub engine: Arc<AdmissionEngine<SeaOrmStore>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let engine = Arc::new(AdmissionEngine::new(SeaOrmStore::new(db.clone())));
        Self { db, engine }
    }
}
