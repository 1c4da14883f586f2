use anyhow::Context;
use google_translate::translation::{Translation, TranslationRequest};
use huggingface::text_generation::{CompletionRequest, TextGeneration};

/// Soft cap applied to generated summaries, counted in whitespace-separated
/// tokens. The prompt only asks the model to be concise; this enforces it.
const SUMMARY_WORD_CAP: usize = 20;

#[derive(Debug)]
pub struct Summarization {
    pub summary: String,
    pub translated_text: String,
}

#[derive(Clone, Copy, Debug)]
pub struct Sampling {
    pub temperature: f64,
    pub top_p: f64,
}

#[derive(Clone, Debug)]
pub struct Summarizer<T, G> {
    translator: T,
    generator: G,
    sampling: Sampling,
}

impl<T, G> Summarizer<T, G>
where
    T: Translation,
    G: TextGeneration,
{
    pub fn new(translator: T, generator: G, sampling: Sampling) -> Self {
        Self {
            translator,
            generator,
            sampling,
        }
    }

    /// Translates `text` into `lang`, then asks the generation provider for
    /// a summary of the translated text, so the summary language follows the
    /// translation. A translation failure short-circuits; the generator is
    /// only reached with a translation in hand.
    pub async fn summarize(
        &self,
        text: &str,
        lang: &str,
    ) -> anyhow::Result<Summarization> {
        let translated = self
            .translator
            .translate(TranslationRequest {
                text: text.to_string(),
                target_lang: lang.to_string(),
            })
            .await
            .context("failed to translate text")?;

        let completion = self
            .generator
            .completions(CompletionRequest {
                prompt: build_prompt(&translated.translated_text, lang),
                temperature: self.sampling.temperature,
                top_p: self.sampling.top_p,
                max_tokens: None,
            })
            .await
            .context("failed to generate summary")?;

        let raw = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .context("completion carried no choices")?;

        Ok(Summarization {
            summary: cap_words(raw.trim(), SUMMARY_WORD_CAP),
            translated_text: translated.translated_text,
        })
    }
}

fn build_prompt(text: &str, lang: &str) -> String {
    format!(
        "Provide a concise summary of the following text in {}:\n\n{}\n\nSummary:",
        lang, text
    )
}

fn cap_words(text: &str, cap: usize) -> String {
    text.split_whitespace()
        .take(cap)
        .collect::<Vec<_>>()
        .join(" ")
}
