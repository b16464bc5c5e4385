//! Page content source for the navigable content region
//!
//! Navigation swaps the main region's text without restarting the app; the
//! fragment for a page comes from an optional on-disk content directory so
//! the organization can edit copy without a rebuild, with built-in defaults
//! as fallback.

use crate::state::View;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Trait for page-fragment loading, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load the text fragment for a page.
    async fn load(&self, view: View) -> Result<String>;
}

/// Reads `<content_dir>/<slug>.md` when the file exists, otherwise serves
/// the built-in copy. An override file that exists but cannot be read is an
/// error; the caller renders it inline.
pub struct FileContentSource {
    content_dir: Option<PathBuf>,
}

impl FileContentSource {
    pub fn new(content_dir: Option<PathBuf>) -> Self {
        Self { content_dir }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load(&self, view: View) -> Result<String> {
        if let Some(dir) = &self.content_dir {
            let path = dir.join(format!("{}.md", view.slug()));
            if path.exists() {
                return tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("reading page fragment {}", path.display()));
            }
        }
        Ok(builtin_page(view).to_string())
    }
}

fn builtin_page(view: View) -> &'static str {
    match view {
        View::Home => {
            "Welcome to the Amparo community portal.\n\n\
             We connect volunteers and donors with local outreach projects.\n\
             Browse the current projects or register as a volunteer to take\n\
             part in the next campaign."
        }
        View::Projects => "Current projects run by the organization.",
        View::Register => "Fill in your details to join the volunteer program.",
    }
}
