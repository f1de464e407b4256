//! Model client trait: prompt in, raw model text out.

use crate::error::Result;

#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a prompt and return the model's raw reply text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
