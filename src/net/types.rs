//! Wire types shared with the external services.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The authenticated user as reported by the session provider.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Successful asset-store upload result.
///
/// The service reports the field as `publicUrl`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    pub public_url: String,
}
