use web_sys::window;

/// Full-page navigation, outside the client-side router
pub trait Navigator: Send + Sync {
    /// Navigate to `path`, replacing the current history entry
    fn replace(&self, path: &str);
}

/// Uses `window.location.replace`, which also resets all in-memory state
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn replace(&self, path: &str) {
        match window() {
            Some(w) => {
                if let Err(e) = w.location().replace(path) {
                    log::error!("navigation to {} failed: {:?}", path, e);
                }
            }
            None => log::warn!("no window; cannot navigate to {}", path),
        }
    }
}
