use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jaen::errors::ProviderError;
use jaen::translate::formatted::translate_formatted;
use jaen::Translator;

/// Marks every translated string so tests can see exactly which pieces went
/// through the provider.
struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, ProviderError> {
        Ok(format!("<{text}>"))
    }
}

/// Fails the first `failures` calls, then behaves like [`EchoTranslator`].
struct FlakyTranslator {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyTranslator {
    fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FlakyTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(ProviderError::Status {
                code: 403,
                body: "Forbidden".to_string(),
            })
        } else {
            Ok(format!("<{text}>"))
        }
    }
}

#[tokio::test]
async fn bold_span_is_rewrapped_and_plain_segment_translated_separately() {
    let out = translate_formatted(&EchoTranslator, "**こんにちは**世界")
        .await
        .unwrap();
    assert_eq!(out, "**<こんにちは>**<世界>");
}

#[tokio::test]
async fn line_count_is_preserved_and_blank_lines_pass_through() {
    let input = "一行目\n\n**二**行目\n";
    let out = translate_formatted(&EchoTranslator, input).await.unwrap();

    assert_eq!(out.split('\n').count(), input.split('\n').count());
    assert_eq!(out, "<一行目>\n\n**<二>**<行目>\n");
}

#[tokio::test]
async fn whitespace_only_lines_become_blank_output_lines() {
    let out = translate_formatted(&EchoTranslator, "上\n   \n下").await.unwrap();
    assert_eq!(out, "<上>\n\n<下>");
}

#[tokio::test]
async fn whitespace_between_markers_is_not_translated() {
    // The gap between the two spans is whitespace-only plain text; it is
    // dropped rather than sent to the provider.
    let out = translate_formatted(&EchoTranslator, "~~あ~~ `い`").await.unwrap();
    assert_eq!(out, "~~<あ>~~`<い>`");
}

#[tokio::test]
async fn asymmetric_wrappers_are_normalized_from_the_kind_table() {
    // The italic pattern matches `*漢字*`; output markers come from the
    // fixed wrapper lookup, not from the input bytes.
    let out = translate_formatted(&EchoTranslator, "*漢字*です").await.unwrap();
    assert_eq!(out, "*<漢字>*<です>");
}

#[tokio::test]
async fn span_failure_falls_back_to_whole_text_translation() {
    let translator = FlakyTranslator::new(1);
    let out = translate_formatted(&translator, "**太字**と平文")
        .await
        .unwrap();

    // First per-span call failed, then one whole-text call succeeded.
    assert_eq!(translator.call_count(), 2);
    assert_eq!(out, "<**太字**と平文>");
}

#[tokio::test]
async fn fallback_failure_propagates_the_provider_error() {
    let translator = FlakyTranslator::new(usize::MAX);
    let err = translate_formatted(&translator, "**太字**と平文")
        .await
        .unwrap_err();

    // One span attempt plus exactly one whole-text retry.
    assert_eq!(translator.call_count(), 2);
    assert_eq!(err.status(), Some(403));
}
