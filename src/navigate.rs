use crate::core::Navigator;
use web_sys as web;

/// Navigates the current tab by assigning `window.location.href`.
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&mut self, url: &str) {
        let Some(window) = web::window() else {
            log::error!("[click] no window to navigate");
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("[click] navigation to {} failed: {:?}", url, e);
        }
    }
}
