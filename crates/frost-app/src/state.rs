use frost_config::Config;
use tokio::sync::RwLock;

use crate::status::BotStatus;

pub struct AppState {
    pub config: RwLock<Config>,
    pub status: BotStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            status: BotStatus::default(),
        }
    }
}
