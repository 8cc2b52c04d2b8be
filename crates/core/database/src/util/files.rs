use huddle_config::config;

/// Resolve a stored file reference into a publicly servable URL
///
/// File contents live behind a separate file service, this only
/// derives the address a client should fetch from.
pub async fn attachment_url(file_id: &str) -> String {
    let config = config().await;
    format!("{}/{}", config.hosts.files, file_id)
}
