/*!
 * Provider implementations for generative text services.
 *
 * This module contains the common provider interface and the client
 * implementation for the Gemini API.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for generative model providers
///
/// This trait defines the interface the analysis pipeline depends on, allowing
/// real clients and test doubles to be used interchangeably.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Send a prompt to the model and return the raw reply text
    ///
    /// # Arguments
    /// * `prompt` - The full instruction prompt, including document content
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The model reply or a classified error
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

pub mod gemini;
