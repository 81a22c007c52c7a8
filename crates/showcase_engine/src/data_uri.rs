use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// `data:{mime};base64,{payload}`. An empty MIME type falls back to octet-stream.
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime = mime_type.trim();
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
