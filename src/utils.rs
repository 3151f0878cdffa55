use log::{info, Level};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, panics are
    // forwarded to `console.error` with a readable message instead of the
    // opaque "unreachable executed".
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route the `log` facade to the browser console.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    if console_log::init_with_level(Level::Info).is_ok() {
        info!("venx-backdrop: logging initialized");
    }
}

/// Escape the five HTML-significant characters so link titles and urls can be
/// interpolated into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
