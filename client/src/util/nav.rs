//! Full-page navigation and browser dialogs.
//!
//! Used from async tasks where a router handle is not at hand. Outside the
//! browser both calls are no-ops.

/// Replace the current location with `path`.
pub fn go(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Milliseconds since the Unix epoch from the browser clock; `0.0` natively.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Today's date in the browser locale; empty natively.
pub fn today_label() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_date_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
