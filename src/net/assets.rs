//! Asset-store client: binary upload returning a publicly resolvable URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The asset store is an external service; the create-vibe flow is its only
//! caller. An upload either succeeds with a public URL or fails before any
//! store mutation happens — there is no partial state to clean up.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so an upload failure can be turned into a
//! toast without crashing the component tree. No automatic retry; the form
//! retains its values and retry is a manual resubmit.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use crate::net::types::UploadedAsset;
use crate::state::collection::DEFAULT_IMAGE_URL;

/// Key namespace for vibe images.
pub const ASSET_NAMESPACE: &str = "vibes";

/// Optional image payload for a new vibe, made explicit so the upload branch
/// is exhaustively handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    None,
    File { bytes: Vec<u8>, filename: String },
}

/// Build a collision-free destination key: namespace, timestamp, original
/// filename.
pub fn destination_key(namespace: &str, now_ms: u64, filename: &str) -> String {
    format!("{namespace}/{now_ms}-{filename}")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_failed_message(status: u16) -> String {
    format!("upload failed: {status}")
}

/// Resolve the image URL for a new vibe from an optional upload outcome.
///
/// `None` means no file was supplied and the fixed default applies; a failed
/// upload propagates so the caller aborts before touching the store.
pub fn resolved_image_url(upload: Option<Result<UploadedAsset, String>>) -> Result<String, String> {
    match upload {
        None => Ok(DEFAULT_IMAGE_URL.to_owned()),
        Some(Ok(asset)) => Ok(asset.public_url),
        Some(Err(e)) => Err(e),
    }
}

/// Upload `bytes` to the asset store under `destination_key`.
///
/// # Errors
///
/// Returns an error string if the request fails, the service responds with a
/// non-OK status, or the response body cannot be parsed.
pub async fn upload(bytes: Vec<u8>, destination_key: &str) -> Result<UploadedAsset, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/assets/{destination_key}");
        let body = js_sys::Uint8Array::from(bytes.as_slice());
        let resp = gloo_net::http::Request::put(&url)
            .header("content-type", "application/octet-stream")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(upload_failed_message(resp.status()));
        }
        resp.json::<UploadedAsset>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, destination_key);
        Err("not available on server".to_owned())
    }
}

/// Read a browser `File` into an [`ImageSource`] payload.
///
/// # Errors
///
/// Returns an error string when the file's contents cannot be read. The
/// caller must treat this like a failed upload: the vibe is not created.
#[cfg(feature = "hydrate")]
pub async fn image_source_from_file(file: web_sys::File) -> Result<ImageSource, String> {
    let filename = file.name();
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("failed to read file: {filename}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageSource::File { bytes, filename })
}
