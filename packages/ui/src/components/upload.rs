//! Inline image uploads.
//!
//! There is no separate upload endpoint: a chosen file is base64-encoded
//! into a data URL and sent inside the JSON payload.

use std::sync::Arc;

use base64::Engine as _;
use dioxus::html::FileEngine;

/// Read the first selected file and encode it as a base64 data URL.
pub async fn read_file_as_data_url(file_engine: Arc<dyn FileEngine>) -> Option<String> {
    let name = file_engine.files().into_iter().next()?;
    let bytes = file_engine.read_file(&name).await?;
    Some(to_data_url(&name, &bytes))
}

pub fn to_data_url(name: &str, bytes: &[u8]) -> String {
    let mime = guess_mime(name);
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

/// Wrap a freshly chosen image for a draft payload.
///
/// Only data URLs are sent: an unchanged image (a plain `https://...` URL
/// already owned by the server) is omitted so the backend keeps it as is.
pub fn data_url_image(url: &str) -> Option<api::Image> {
    if url.starts_with("data:") {
        Some(api::Image::new(url))
    } else {
        None
    }
}

fn guess_mime(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("avatar.PNG"), "image/png");
        assert_eq!(guess_mime("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("no-extension"), "application/octet-stream");
    }

    #[test]
    fn test_data_url_image_only_wraps_data_urls() {
        assert!(data_url_image("data:image/png;base64,AAAA").is_some());
        assert!(data_url_image("https://cdn.example.com/a.png").is_none());
        assert!(data_url_image("").is_none());
    }

    #[test]
    fn test_to_data_url() {
        let url = to_data_url("logo.png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
        assert!(url.starts_with("data:"));
    }
}
