use super::*;

#[test]
fn user_deserializes_from_service_payload() {
    let user: User = serde_json::from_str(r#"{"id":"u-7","email":"vibe@example.com"}"#).unwrap();
    assert_eq!(user.id, "u-7");
    assert_eq!(user.email, "vibe@example.com");
}

#[test]
fn uploaded_asset_maps_camel_case_public_url() {
    let asset: UploadedAsset =
        serde_json::from_str(r#"{"publicUrl":"https://cdn.example.com/vibes/1-a.png"}"#).unwrap();
    assert_eq!(asset.public_url, "https://cdn.example.com/vibes/1-a.png");
}
