/// Failures surfaced by conversions. Unmapped characters are never errors;
/// only values the UTF-8 encoder cannot represent are.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("codepoint {0} is outside the Basic Multilingual Plane")]
    CodepointOutOfRange(u32),
    #[error("entity &#{0}; is outside the Basic Multilingual Plane")]
    EntityOutOfRange(String),
}
