//! Copy generator — the single generation pipeline both front ends call:
//! validate → resolve tone → build prompt → one model call → parse.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::parser::{parse_completion, GeneratedCopy};
use crate::generation::prompts::{build_prompt, COPY_SYSTEM};
use crate::generation::tone::{resolve_tone, ToneCategory};
use crate::llm_client::CompletionClient;

/// One generation request. Built per invocation and discarded after use.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyRequest {
    pub brand: String,
    pub product: String,
    pub audience: String,
    /// When absent, the tone is auto-detected from the other fields.
    #[serde(default)]
    pub tone: Option<ToneCategory>,
}

/// The generated copy plus the tone that steered it.
#[derive(Debug, Clone, Serialize)]
pub struct CopyOutcome {
    pub copy: GeneratedCopy,
    pub tone: ToneCategory,
    /// True when the tone came from the lexicon scan rather than the caller.
    pub tone_detected: bool,
}

/// Rejects requests with a blank brand, product, or audience before any
/// model call is attempted.
pub fn validate_request(request: &CopyRequest) -> Result<(), AppError> {
    for (field, value) in [
        ("brand", &request.brand),
        ("product", &request.product),
        ("audience", &request.audience),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }
    Ok(())
}

/// Runs the full pipeline for one request. Exactly one model call; any
/// failure from the completion service surfaces as `AppError::Completion`.
pub async fn generate_copy(
    llm: &dyn CompletionClient,
    request: &CopyRequest,
) -> Result<CopyOutcome, AppError> {
    validate_request(request)?;

    let (tone, tone_detected) = match request.tone {
        Some(tone) => (tone, false),
        None => {
            let combined = format!(
                "{} {} {}",
                request.brand, request.product, request.audience
            );
            (resolve_tone(&combined), true)
        }
    };

    if tone_detected {
        info!("auto-detected tone: {tone}");
    }

    let prompt = build_prompt(&request.brand, &request.product, &request.audience, tone);
    let raw = llm.complete(COPY_SYSTEM, &prompt).await?;
    let copy = parse_completion(&raw);

    Ok(CopyOutcome {
        copy,
        tone,
        tone_detected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::CompletionError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock backend returning a canned completion and counting calls.
    struct FixedCompletion {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl FixedCompletion {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for FixedCompletion {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.to_string())
        }
    }

    /// Mock backend that always fails, as a dead API key would.
    struct FailingCompletion;

    #[async_trait]
    impl CompletionClient for FailingCompletion {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            })
        }
    }

    const COMPLETION: &str = "\
HEADLINE: Sip Smarter
DESCRIPTION: Acme eco bottles cut waste without cutting corners.
HASHTAGS: #Acme #EcoBottle #CampusLife
CALL TO ACTION: Fill up today.";

    fn request(tone: Option<ToneCategory>) -> CopyRequest {
        CopyRequest {
            brand: "Acme".to_string(),
            product: "eco bottle".to_string(),
            audience: "students".to_string(),
            tone,
        }
    }

    #[tokio::test]
    async fn test_pipeline_parses_mock_completion() {
        let llm = FixedCompletion::new(COMPLETION);
        let outcome = generate_copy(&llm, &request(Some(ToneCategory::Casual)))
            .await
            .unwrap();
        assert_eq!(outcome.copy.headline, "Sip Smarter");
        assert_eq!(outcome.copy.hashtags.len(), 3);
        assert_eq!(outcome.copy.cta, "Fill up today.");
        assert_eq!(outcome.tone, ToneCategory::Casual);
        assert!(!outcome.tone_detected);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_omitted_tone_is_auto_detected_to_default() {
        // "Acme eco bottle students" carries no lexicon keywords
        let llm = FixedCompletion::new(COMPLETION);
        let outcome = generate_copy(&llm, &request(None)).await.unwrap();
        assert_eq!(outcome.tone, ToneCategory::Professional);
        assert!(outcome.tone_detected);
    }

    #[tokio::test]
    async fn test_blank_field_rejected_without_model_call() {
        let llm = FixedCompletion::new(COMPLETION);
        for blank in ["brand", "product", "audience"] {
            let mut req = request(None);
            match blank {
                "brand" => req.brand = "   ".to_string(),
                "product" => req.product = String::new(),
                _ => req.audience = "\t".to_string(),
            }
            let err = generate_copy(&llm, &req).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{blank} must fail validation");
        }
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0, "no model call may happen");
    }

    #[tokio::test]
    async fn test_api_failure_surfaces_as_completion_error() {
        let err = generate_copy(&FailingCompletion, &request(Some(ToneCategory::Exciting)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Completion(_)));
    }
}
