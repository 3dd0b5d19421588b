use super::RenderError;

/// Parses `input` as JSON and pretty-prints it with 2-space indentation.
///
/// Object keys keep their input order.
pub fn format(input: &str) -> Result<String, RenderError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| RenderError::InvalidJson(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| RenderError::InvalidJson(e.to_string()))
}
