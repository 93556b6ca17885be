use crate::config::AppConfig;
use crate::store::MarketStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MarketStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self {
            store: Arc::new(MarketStore::new()),
            config,
        })
    }

    /// State with a fixed config and an empty store, for unit tests.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            seed_demo_data: false,
        });
        Self {
            store: Arc::new(MarketStore::new()),
            config,
        }
    }
}
