use super::ValidationError;

const PROVINCE_NAMES: &[(&str, &str)] = &[
    ("ontario", "ON"),
    ("british columbia", "BC"),
    ("alberta", "AB"),
    ("quebec", "QC"),
    ("manitoba", "MB"),
    ("saskatchewan", "SK"),
    ("nova scotia", "NS"),
    ("new brunswick", "NB"),
    ("newfoundland and labrador", "NL"),
    ("prince edward island", "PE"),
    ("northwest territories", "NT"),
    ("nunavut", "NU"),
    ("yukon", "YT"),
];

/// Resolve a province input to a two-letter code.
///
/// Accepts a code or a full English name, case-insensitive. Anything else
/// falls back to the upper-cased first two characters: lossy on purpose, so
/// a misspelled province still produces a routable profile instead of a
/// dead-end. Only blank input is an error.
pub(crate) fn normalize_jurisdiction(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::UnresolvedJurisdiction);
    }

    let lowered = trimmed.to_lowercase();
    if let Some((_, code)) = PROVINCE_NAMES
        .iter()
        .find(|(name, _)| *name == lowered.as_str())
    {
        return Ok((*code).to_string());
    }

    Ok(trimmed.chars().take(2).collect::<String>().to_uppercase())
}
