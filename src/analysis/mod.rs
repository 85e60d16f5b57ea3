/*!
 * Document analysis pipeline.
 *
 * Composes extraction, prompt construction, model invocation with retry, and
 * title post-processing into a fixed pipeline:
 * extract -> build prompt -> invoke model -> normalize -> date fallback.
 *
 * Every entity is created fresh per call; no state survives between documents.
 */

use std::path::Path;

use log::debug;

use crate::errors::AppError;
use crate::extraction;
use crate::providers::Provider;
use crate::providers::gemini::Gemini;

pub mod prompt;
pub mod retry;
pub mod title;

pub use retry::RetryPolicy;

/// Default model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default display format the model is asked to use for extracted dates
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Default word separator in produced titles
pub const DEFAULT_SEPARATOR: &str = "_";

/// Immutable configuration for a document analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// API key for the model provider
    pub api_key: String,

    /// Model name to use
    pub model: String,

    /// Whether the title should carry a date extracted from the content
    pub include_date: bool,

    /// Display format for extracted dates, passed into the prompt text
    pub date_format: String,

    /// Word separator used in the produced title
    pub separator: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            include_date: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with the given API key and defaults elsewhere
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set whether to include a date in the title
    pub fn include_date(mut self, include_date: bool) -> Self {
        self.include_date = include_date;
        self
    }

    /// Set the date display format
    pub fn date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Set the title word separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Analysis service wiring the pipeline to a Gemini client
#[derive(Debug)]
pub struct AnalysisService {
    /// Provider client, constructed explicitly from the configuration
    provider: Gemini,

    /// Configuration for the analysis pipeline
    config: AnalysisConfig,

    /// Retry policy for model invocations
    policy: RetryPolicy,
}

impl AnalysisService {
    /// Create a new analysis service from the given configuration.
    ///
    /// Fails with a validation error before any I/O when the API key is missing.
    pub fn new(config: AnalysisConfig) -> Result<Self, AppError> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Validation(
                "API key is required. Set via --api-key, env var ENTITLE_API_KEY, or config file."
                    .to_string(),
            ));
        }

        let provider = Gemini::new(&config.api_key, &config.model);

        Ok(Self {
            provider,
            config,
            policy: RetryPolicy::default(),
        })
    }

    /// Override the retry policy
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configuration this service was built with
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a document and return the finalized title
    pub async fn analyze_document<P: AsRef<Path>>(&self, path: P) -> Result<String, AppError> {
        suggest_title(&self.provider, path.as_ref(), &self.config, &self.policy).await
    }
}

/// Run the full analysis pipeline against any provider.
///
/// A failure at any stage aborts the pipeline and propagates unmodified; no
/// partial title is ever returned.
pub async fn suggest_title<P>(
    provider: &P,
    path: &Path,
    config: &AnalysisConfig,
    policy: &RetryPolicy,
) -> Result<String, AppError>
where
    P: Provider + ?Sized,
{
    let content = extraction::extract_content(path)?;
    debug!("Extracted {} characters from {:?}", content.chars().count(), path);

    let prompt = prompt::build_prompt(
        &content,
        config.include_date,
        &config.date_format,
        &config.separator,
    );

    let raw_title = retry::generate_with_retry(provider, &prompt, policy).await?;
    debug!("Model replied with raw title: {}", raw_title);

    let normalized = title::normalize_title(&raw_title, &config.separator);
    Ok(title::apply_date_fallback(
        &normalized,
        config.include_date,
        &config.separator,
    ))
}
