//! Trait abstraction for the key-value store to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Durable string-keyed key-value store scoped to the user's data directory.
///
/// The registration aggregator only needs these two operations; everything
/// else (JSON encoding, list semantics) lives above this seam so tests can
/// swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}
