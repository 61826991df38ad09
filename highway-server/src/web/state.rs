//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::highway::Highway;

/// Shared application state.
///
/// The highway sits behind a single lock, so requests are applied one at a
/// time in arrival order.
#[derive(Clone, Default)]
pub struct AppState {
    pub highway: Arc<Mutex<Highway>>,
}

impl AppState {
    /// Create a new app state around an existing highway.
    pub fn new(highway: Highway) -> Self {
        Self {
            highway: Arc::new(Mutex::new(highway)),
        }
    }
}
