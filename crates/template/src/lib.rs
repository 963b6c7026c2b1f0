//! Document template boundary.
//!
//! The wizard core hands a flat placeholder map ([`RenderContext`]) and the bytes of a template
//! file to a [`TemplateRenderer`], and receives the rendered document bytes back. Nothing in
//! this crate knows about investigations; it only substitutes named values.
//!
//! The bundled [`PlaceholderRenderer`] handles UTF-8 templates (plain text, Markdown, flat
//! WordprocessingML XML) containing `{{ name }}` placeholders. Zip-packaged `.docx` files need
//! a renderer that understands the package format and are handled outside this crate.

mod context;
mod placeholder;

pub use context::RenderContext;
pub use placeholder::{Escape, PlaceholderRenderer};

use thiserror::Error;

/// Errors returned by the template boundary crate.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template is not UTF-8 text: {0}")]
    NotText(#[from] std::string::FromUtf8Error),

    #[error("unterminated placeholder starting at byte {0}")]
    UnterminatedPlaceholder(usize),

    #[error("failed to serialise render context: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for Results that can fail with a [`TemplateError`].
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Renders a template with a flat placeholder map.
pub trait TemplateRenderer {
    /// Renders `template` with the values in `context`.
    ///
    /// Implementations must not produce partial output: on error nothing is returned.
    fn render(&self, template: &[u8], context: &RenderContext) -> TemplateResult<Vec<u8>>;
}
