use shared::constants::API_PREFIX;
use web_sys::window;

const DEV_API_ORIGIN: &str = "http://127.0.0.1:8000";

pub fn get_api_base_url() -> String {
    // A build-time override wins, e.g. when the API lives on another host
    if let Some(origin) = option_env!("CONNECTIONS_API_URL") {
        return origin.trim_end_matches('/').to_string();
    }

    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            // Served by the API itself, or behind the same reverse proxy
            if !origin.is_empty() && origin != "null" {
                return origin;
            }
        }
    }

    DEV_API_ORIGIN.to_string()
}

pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}{}", base.trim_end_matches('/'), API_PREFIX, path)
}
