// Console logging helpers

pub fn clog(msg: &str) {
    // Debug builds only
    #[cfg(debug_assertions)]
    gloo::console::log!(msg);
    #[cfg(not(debug_assertions))]
    let _ = msg;
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}
