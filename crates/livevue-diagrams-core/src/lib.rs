//! Core types for the LiveVue architecture diagram generator.
//!
//! - **Identifiers**: interned node and participant ids ([`identifier::Id`])
//! - **Colors**: CSS color parsing ([`color::Color`])
//! - **Geometry**: points, sizes, bounds and insets ([`geometry`] module)
//! - **Semantic**: flow, sequence, class and state models ([`semantic`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod semantic;
