//! Export of laid-out diagrams.
//!
//! The only backend is [`svg`], which renders a
//! [`FlowLayout`](crate::layout::FlowLayout) into an in-memory SVG document.
//! [`Error`] converts into [`DiagramError::Export`](crate::DiagramError::Export)
//! at the crate boundary.

pub mod svg;

use thiserror::Error;

/// Failures while turning a layout into an output document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),
}
