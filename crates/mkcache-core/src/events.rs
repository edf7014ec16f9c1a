//! Application-level lifecycle events.

use tracing::{error, info, warn};

use crate::errors::MkcacheError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn MkcacheError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error
        );
    }
}
