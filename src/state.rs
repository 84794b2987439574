use chrono::{DateTime, Utc};

use crate::models::Variant;

// shared with every handler; nothing in here changes after startup
#[derive(Debug, Clone)]
pub struct AppState {
    pub variant: Variant,
    pub started_at: DateTime<Utc>,
}

impl AppState {

    pub fn new(variant: Variant) -> Self {

        Self {
            variant,
            started_at: Utc::now(),
        }

    }
}
