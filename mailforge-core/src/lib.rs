//! mailforge-core: the document model and rendering engine behind Mailforge
//!
//! This crate is the pure half of the system: no I/O, no async, no error
//! channel in the hot path. It owns:
//!
//! - the typed [`document`] model (header, ordered content blocks, footer,
//!   global theme) and the per-type default registry
//! - [`theme`] resolution from the fixed catalog, including derived button
//!   tokens and contrast enforcement
//! - the [`render`] engine, a deterministic function from document + theme to
//!   a complete email-client-safe HTML string
//! - the versioned [`session`] schema for local editor checkpoints
//!
//! # Quick Start
//!
//! ```rust
//! use mailforge_core::prelude::*;
//!
//! let mut doc = EmailDocument::default();
//! doc.push_block(BlockKind::Hero);
//! doc.push_block(BlockKind::FeatureList);
//!
//! let theme = GlobalThemeSettings::default();
//! let html = render(&doc, &theme);
//! assert!(html.starts_with("<!DOCTYPE html"));
//! ```
//!
//! The HTTP service in `mailforge-server` layers export, test-send, and
//! shareable previews on top of this crate.

pub mod document;
pub mod render;
pub mod session;
pub mod theme;

pub mod prelude {
    //! Convenience re-exports for common types and functions.

    pub use crate::document::{
        blocks::BlockStyle, BlockBody, BlockKind, ColorValue, ContentBlock, EmailDocument,
        FontSizeValue, FooterConfig, GlobalThemeSettings, HeaderConfig, PaddingValue,
    };
    pub use crate::render::{render, render_with, RenderMode, RenderOptions};
    pub use crate::session::{load_session, save_session, EditorMode, SavedSession};
    pub use crate::theme::{resolve_color_scheme, ColorMode, ColorScheme};
}
