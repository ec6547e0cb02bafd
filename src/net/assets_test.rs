use super::*;

// =============================================================
// Destination keys
// =============================================================

#[test]
fn destination_key_combines_namespace_timestamp_filename() {
    let key = destination_key(ASSET_NAMESPACE, 1_722_000_000_123, "mood.png");
    assert_eq!(key, "vibes/1722000000123-mood.png");
}

#[test]
fn destination_keys_differ_per_timestamp() {
    let a = destination_key(ASSET_NAMESPACE, 1, "same.png");
    let b = destination_key(ASSET_NAMESPACE, 2, "same.png");
    assert_ne!(a, b);
}

// =============================================================
// Image URL resolution
// =============================================================

#[test]
fn no_image_source_resolves_to_default_url() {
    assert_eq!(resolved_image_url(None).unwrap(), DEFAULT_IMAGE_URL);
}

#[test]
fn successful_upload_resolves_to_public_url() {
    let asset = UploadedAsset {
        public_url: "https://cdn.example.com/vibes/1-a.png".to_owned(),
    };
    assert_eq!(
        resolved_image_url(Some(Ok(asset))).unwrap(),
        "https://cdn.example.com/vibes/1-a.png"
    );
}

#[test]
fn failed_upload_propagates_the_error() {
    let err = resolved_image_url(Some(Err("upload failed: 500".to_owned()))).unwrap_err();
    assert_eq!(err, "upload failed: 500");
}

#[test]
fn upload_failed_message_includes_status() {
    assert_eq!(upload_failed_message(503), "upload failed: 503");
}

// =============================================================
// ImageSource
// =============================================================

#[test]
fn image_source_variants_are_distinct() {
    let file = ImageSource::File {
        bytes: vec![1, 2, 3],
        filename: "a.png".to_owned(),
    };
    assert_ne!(file, ImageSource::None);
}
