//! Built-in decode capabilities

/// JSON via serde_json. The parsed value is discarded.
pub(crate) fn decode_json(raw: &[u8]) -> Result<(), String> {
    serde_json::from_slice::<serde_json::Value>(raw)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// YAML via serde_yml.
pub(crate) fn decode_yaml(raw: &[u8]) -> Result<(), String> {
    serde_yml::from_slice::<serde_yml::Value>(raw)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// TOML. The toml crate parses from `str`, so invalid UTF-8 is itself a
/// content failure.
pub(crate) fn decode_toml(raw: &[u8]) -> Result<(), String> {
    let text = std::str::from_utf8(raw).map_err(|err| err.to_string())?;
    toml::from_str::<toml::Value>(text)
        .map(|_| ())
        .map_err(|err| err.to_string())
}
