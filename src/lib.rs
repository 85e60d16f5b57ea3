/*!
 * # entitle - AI-powered document title suggester
 *
 * A Rust library for suggesting descriptive, filename-safe titles for
 * documents using a generative language model.
 *
 * ## Features
 *
 * - Extract text content from plain-text and PDF documents
 * - Build instruction prompts from document content and formatting options
 * - Invoke the Gemini API with bounded exponential-backoff retry on rate limits
 * - Normalize model replies into lowercase, separator-delimited titles
 * - Substitute a generated timestamp when no date is found in the content
 * - Rename documents in place with dry-run and overwrite confirmation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration discovery, loading and validation
 * - `extraction`: Document content extraction (PDF and plain text)
 * - `analysis`: The title analysis pipeline:
 *   - `analysis::prompt`: Instruction prompt construction
 *   - `analysis::retry`: Bounded exponential-backoff retry
 *   - `analysis::title`: Title normalization and date fallback
 * - `providers`: Client implementations for generative model services:
 *   - `providers::gemini`: Gemini API client
 * - `file_utils`: File path helpers and title sanitization
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod extraction;
pub mod file_utils;
pub mod providers;

// Re-export main types for easier usage
pub use analysis::{AnalysisConfig, AnalysisService, RetryPolicy, suggest_title};
pub use app_config::Config;
pub use errors::{AppError, ExtractionError, ProviderError};
