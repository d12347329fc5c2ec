//! Text form of codepoint sequences: decimal integers separated by
//! whitespace and/or commas.

use thaana_core::Codepoint;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCodepointsError {
    #[error("codepoint list is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid codepoint: {0:?}")]
    InvalidNumber(String),
}

pub fn parse_codepoints(input: &[u8]) -> Result<Vec<Codepoint>, ParseCodepointsError> {
    let text = std::str::from_utf8(input).map_err(|_| ParseCodepointsError::InvalidUtf8)?;
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Codepoint>()
                .map_err(|_| ParseCodepointsError::InvalidNumber(token.to_string()))
        })
        .collect()
}

pub fn format_codepoints(codepoints: &[Codepoint]) -> String {
    codepoints
        .iter()
        .map(Codepoint::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
