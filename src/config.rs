/// Settings the window and the form start from.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub inner_size: (f32, f32),
    pub min_inner_size: (f32, f32),
    pub default_port: String,
    pub default_api_url: String,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "ApiCaller".to_string(),
            inner_size: (1280.0, 800.0),
            min_inner_size: (420.0, 300.0),
            default_port: "9000".to_string(),
            default_api_url: "/api/hello".to_string(),
            log_filter: "info".to_string(),
        }
    }
}
