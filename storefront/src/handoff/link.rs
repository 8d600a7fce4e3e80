//! Messaging deep-link composition
//!
//! `<base>/<recipient>?text=<block>` where the block is built from lines that
//! are percent-encoded one by one and joined with an encoded newline.

use urlencoding::encode;

use crate::core::Config;

/// Percent-encoded `\n`
pub const LINE_BREAK: &str = "%0A";

/// Encode each line independently and join them with [`LINE_BREAK`]
pub fn encode_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| encode(line.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Fixed endpoint and recipient every handoff link points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base_url: String,
    recipient: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>, recipient: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            recipient: recipient.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.messaging_base_url, &config.messaging_phone)
    }

    /// Compose the final URL around an already-encoded text block
    pub fn compose(&self, encoded_text: &str) -> String {
        format!("{}/{}?text={}", self.base_url, self.recipient, encoded_text)
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lines_joins_with_encoded_newline() {
        let block = encode_lines(["a b", "c&d", "50%"]);
        assert_eq!(block, "a%20b%0Ac%26d%0A50%25");
    }

    #[test]
    fn test_encode_lines_accents_and_dash() {
        assert_eq!(encode_lines(["Olá"]), "Ol%C3%A1");
        assert_eq!(encode_lines(["—"]), "%E2%80%94");
        assert_eq!(encode_lines(Vec::<String>::new()), "");
    }

    #[test]
    fn test_compose() {
        let builder = LinkBuilder::new("https://wa.me/", "5543984336883");
        assert_eq!(
            builder.compose("oi"),
            "https://wa.me/5543984336883?text=oi"
        );
        assert_eq!(builder.recipient(), "5543984336883");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.messaging_phone = "5511999999999".into();
        let builder = LinkBuilder::from_config(&config);
        assert_eq!(builder.compose(""), "https://wa.me/5511999999999?text=");
    }
}
