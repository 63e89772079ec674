use super::js_error;

/// Native `window.confirm`. A missing window or a thrown error counts as "no".
pub fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.confirm_with_message(message) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("confirm dialog failed: {}", js_error(e));
            false
        }
    }
}

/// Native `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!("alert dialog failed: {}", js_error(e));
        }
    }
}
