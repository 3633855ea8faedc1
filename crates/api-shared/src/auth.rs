/// Validates the provided API key against the key resolved at startup.
///
/// Returns `Ok(())` if the key matches. A server started without a key rejects every call.
#[allow(clippy::result_large_err)]
pub fn validate_api_key(provided_key: &str, expected_key: Option<&str>) -> Result<(), tonic::Status> {
    let expected_key =
        expected_key.ok_or_else(|| tonic::Status::internal("API key not configured"))?;

    if provided_key == expected_key {
        Ok(())
    } else {
        tracing::warn!("rejected request with invalid API key");
        Err(tonic::Status::unauthenticated("Invalid API key"))
    }
}
