use super::storage;

/// Blocking confirmation shown after a successful write.
pub fn alert(message: &str) {
    log::info!("{}", message);
    if let Ok(window) = storage::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("Failed to show alert");
        }
    }
}

pub fn navigate_to(path: &str) {
    match storage::window() {
        Ok(window) => {
            if window.location().set_href(path).is_err() {
                log::error!("Failed to navigate to {}", path);
            }
        }
        Err(err) => log::warn!("Cannot navigate to {}: {}", path, err),
    }
}
