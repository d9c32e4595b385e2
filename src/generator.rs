//! The generation controller: drives one or more completion calls, feeds
//! each raw response through extraction and classification, and decides
//! whether to retry with an intensified prompt.
//!
//! Attempts are strictly sequential. Each retry prompt is built from the
//! previous attempt's failure reason, so attempts cannot overlap without
//! breaking the escalation strategy.

use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use tokio::time::sleep;

use crate::classifier;
use crate::client::CompletionClient;
use crate::extract;
use crate::grammar::MIN_SCRIPT_LEN;
use crate::models::Document;

/// Default attempt budget.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Fixed pause between rejected attempts.
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(1500);

/// Base instructions sent with every request: the response grammar the
/// extractor expects.
const SYSTEM_PROMPT: &str = r#"You are an expert Perl programmer. Generate high-quality, production-ready Perl code with modern practices.

Respond using marker-delimited sections. Every marker must appear on its own line, exactly as written:

### BEGIN DESCRIPTION ###
Brief description of what the script does.
### END DESCRIPTION ###

### BEGIN SCRIPT ###
The complete Perl script, with shebang and all code. This section is mandatory.
### END SCRIPT ###

### BEGIN FILE ###
filename: helper.pl
description: what this file does
kind: helper
The complete content of the additional file. Repeat this section for each additional file; omit it when there are none.
### END FILE ###

### BEGIN DEPENDENCIES ###
Core: List::Util, File::Spec
CPAN: Module::Name (cpan install Module::Name - what it is for)
System: perl 5.10+
### END DEPENDENCIES ###

### BEGIN FEATURES ###
- one feature per line
### END FEATURES ###

### BEGIN USAGE ###
perl script.pl --help
perl script.pl input.txt output.txt
### END USAGE ###

### BEGIN FUNCTIONS ###
function_name: what it does - Parameters: param1, param2
### END FUNCTIONS ###

### BEGIN SECTIONS ###
- Configuration
- Main Logic
### END SECTIONS ###

### BEGIN TESTING ###
- test case description
Sample input: example input data
Expected output: example output
### END TESTING ###

### BEGIN BEST PRACTICES ###
- practice applied
### END BEST PRACTICES ###

### BEGIN NOTES ###
- important note
### END NOTES ###

RULES:
1. The SCRIPT section is mandatory and must contain complete, executable Perl code.
2. Use strict and warnings in every script.
3. Do not wrap the response in a markdown code fence.
4. Omit sections you have nothing to say for; never invent placeholder content."#;

/// Why an attempt was rejected; drives the escalation directive appended
/// to the next prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The collaborator was unreachable or errored.
    Transport(String),
    /// No main script survived extraction. Covers responses with no
    /// recoverable script at all and responses whose script was below the
    /// minimum content length; extraction drops both the same way.
    MissingScript,
}

impl FailureReason {
    /// The structural requirement the next attempt must be told about.
    fn directive(&self) -> &'static str {
        match self {
            FailureReason::Transport(_) => "",
            FailureReason::MissingScript => {
                "Your previous response was missing the mandatory SCRIPT section. \
                 Include all section markers exactly as specified, especially \
                 '### BEGIN SCRIPT ###' and '### END SCRIPT ###' around the \
                 complete, executable Perl program."
            }
        }
    }
}

/// Bounded retry loop around a completion client.
pub struct GenerationController<C: CompletionClient> {
    client: C,
    max_attempts: u32,
    backoff: Duration,
    streaming: bool,
    last_raw: Option<String>,
}

impl<C: CompletionClient> GenerationController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
            streaming: false,
            last_raw: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Consume streamed fragments instead of a single response body.
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// The raw text of the most recent attempt, kept for diagnostics when
    /// generation exhausts its budget.
    pub fn last_raw_response(&self) -> Option<&str> {
        self.last_raw.as_deref()
    }

    /// Run up to `max_attempts` sequential generation attempts and return
    /// the first accepted document, or `None` when the budget exhausts.
    pub async fn generate(&mut self, request: &str) -> Option<Document> {
        let mut failure: Option<FailureReason> = None;

        for attempt in 1..=self.max_attempts {
            info!("generation attempt {}/{}", attempt, self.max_attempts);

            let directive = failure.as_ref().map(FailureReason::directive);
            let prompt = build_prompt(request, directive.filter(|d| !d.is_empty()));

            match self.run_attempt(&prompt).await {
                Ok(doc) => {
                    info!("attempt {} accepted", attempt);
                    return Some(doc);
                }
                Err(reason) => {
                    warn!("attempt {} rejected: {:?}", attempt, reason);
                    failure = Some(reason);
                }
            }

            if attempt < self.max_attempts {
                debug!("backing off {:?} before next attempt", self.backoff);
                sleep(self.backoff).await;
            }
        }

        warn!("generation budget exhausted after {} attempts", self.max_attempts);
        None
    }

    /// One completion call plus extraction and acceptance check.
    async fn run_attempt(&mut self, prompt: &str) -> Result<Document, FailureReason> {
        let raw = if self.streaming {
            self.collect_stream(prompt).await
        } else {
            self.client.complete(prompt).await
        }
        .map_err(|e| FailureReason::Transport(e.to_string()))?;

        self.last_raw = Some(raw.clone());

        let mut doc = extract::extract(&raw);
        classifier::classify(&mut doc);

        if doc.is_success() && doc.primary_artifact.trim().len() > MIN_SCRIPT_LEN {
            doc.metadata.model = self.client.model().to_string();
            doc.metadata.generated_at = Utc::now();
            Ok(doc)
        } else {
            Err(FailureReason::MissingScript)
        }
    }

    /// Assemble a streamed response: fragments concatenated in arrival
    /// order, extraction deferred until the stream ends. A stream that
    /// errors mid-way discards the partial text.
    async fn collect_stream(
        &self,
        prompt: &str,
    ) -> Result<String, crate::client::ClientError> {
        let mut rx = self.client.complete_streamed(prompt).await?;
        let mut assembled = String::new();
        while let Some(fragment) = rx.recv().await {
            assembled.push_str(&fragment);
        }
        debug!("assembled {} streamed characters", assembled.len());
        Ok(assembled)
    }
}

/// Attempt-specific prompt: base grammar instructions, the user request,
/// and the escalation directive naming the previous structural failure.
fn build_prompt(request: &str, directive: Option<&str>) -> String {
    let mut prompt = format!("{}\n\nUser Request: {}\n", SYSTEM_PROMPT, request);
    if let Some(directive) = directive {
        prompt.push_str("\nIMPORTANT: ");
        prompt.push_str(directive);
        prompt.push('\n');
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalation_directive_is_appended() {
        let base = build_prompt("make a csv parser", None);
        assert!(!base.contains("IMPORTANT:"));

        let escalated = build_prompt(
            "make a csv parser",
            Some(FailureReason::MissingScript.directive()),
        );
        assert!(escalated.contains("IMPORTANT:"));
        assert!(escalated.contains("### BEGIN SCRIPT ###"));
        assert!(escalated.contains("missing the mandatory SCRIPT section"));
    }
}
