use std::sync::Arc;

use crate::resolver::SourceResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<SourceResolver>,
}

impl AppState {
    pub fn new(resolver: SourceResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
