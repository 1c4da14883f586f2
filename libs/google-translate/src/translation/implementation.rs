use anyhow::{ensure, Context};
use serde_json::Value;

use crate::Client;

use super::{Translation, TranslationRequest, TranslationResponse};

impl Translation for Client {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> anyhow::Result<TranslationResponse> {
        let text = self
            .string_response(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", request.target_lang.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .await?;

        let translated_text =
            parse_segments(&text).context("failed to parse response")?;

        Ok(TranslationResponse { translated_text })
    }
}

/// The gtx endpoint answers with nested arrays; the first element holds one
/// `[translated, source, ...]` entry per sentence segment.
fn parse_segments(raw: &str) -> anyhow::Result<String> {
    let value: Value = serde_json::from_str(raw)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .context("missing segment array")?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(text);
        }
    }

    ensure!(!translated.is_empty(), "no translated segments in response");

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gtx_segments() {
        let raw =
            r#"[[["Hola, mundo!","Hello, world!",null,null,1]],null,"en"]"#;

        assert_eq!(parse_segments(raw).unwrap(), "Hola, mundo!");
    }

    #[test]
    fn concatenates_sentence_segments() {
        let raw = r#"[[["Olá. ","Hello. ",null,null,1],["Tudo bem?","How are you?",null,null,1]],null,"en"]"#;

        assert_eq!(parse_segments(raw).unwrap(), "Olá. Tudo bem?");
    }

    #[test]
    fn rejects_payload_without_segments() {
        assert!(parse_segments("{}").is_err());
        assert!(parse_segments("[[]]").is_err());
    }
}
