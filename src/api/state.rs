use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{AttributeDefinition, CandidateItem};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    /// Attribute definition catalog, immutable entries keyed by id
    pub attributes: HashMap<Uuid, AttributeDefinition>,
    /// Wardrobe entries keyed by id
    pub items: HashMap<Uuid, CandidateItem>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                attributes: HashMap::new(),
                items: HashMap::new(),
            })),
        }
    }
}
