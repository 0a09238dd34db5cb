use std::sync::Arc;

use services::SessionController;

/// UI-facing surface of the application, implemented by the composition
/// root (e.g. `crates/app`).
pub trait UiApp: Send + Sync {
    fn session_controller(&self) -> Arc<SessionController>;
}

#[derive(Clone)]
pub struct AppContext {
    session_controller: Arc<SessionController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_controller: app.session_controller(),
        }
    }

    #[must_use]
    pub fn session_controller(&self) -> Arc<SessionController> {
        Arc::clone(&self.session_controller)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
