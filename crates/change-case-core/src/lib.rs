#![warn(missing_docs)]
//! Change Case Core - headless naming-convention conversion for multi-selection editors
//!
//! # Overview
//!
//! `change-case-core` converts the text under one or more selections between naming
//! conventions (`camelCase`, `snake_case`, `kebab-case`, ...) and strips accents. It does not
//! own a text buffer: the host editor is reached through the [`TextDocument`] and
//! [`TextEditor`] traits, and a rope-backed [`MemoryEditor`] is provided for tests and tools.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Commands (run by name / pick with preview) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Reconciliation (sort + per-line offsets)   │  ← New selections
//! ├─────────────────────────────────────────────┤
//! │  Batch edit (one atomic host transaction)   │  ← Buffer write
//! ├─────────────────────────────────────────────┤
//! │  Transformation (line-local)                │  ← Replacement text
//! ├─────────────────────────────────────────────┤
//! │  Extraction + word-span resolution          │  ← (text, range) per selection
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything up to the batch edit is computed against the pre-edit document. The host applies
//! all replacements as one transaction, and only after it commits are the selections
//! recomputed and written back.
//!
//! # Quick Start
//!
//! ```rust
//! use change_case_core::{ChangeCase, ChangeCaseConfig, MemoryEditor, Position, Range, Selection, TextEditor};
//!
//! let mut editor = MemoryEditor::new("fooBar = x;").with_selections(vec![
//!     Selection::from_range(Range::on_line(0, 0, 6)),
//!     Selection::from_range(Range::on_line(0, 9, 10)),
//! ]);
//!
//! ChangeCase::default()
//!     .run_command("snakeCase", Some(&mut editor), &ChangeCaseConfig::default())
//!     .unwrap();
//!
//! assert_eq!(editor.text(), "foo_bar = x;");
//! // The second selection moved right by the growth of the first.
//! assert!(editor.selections().contains(&Selection::from_range(Range::on_line(0, 10, 11))));
//! ```
//!
//! # Module Description
//!
//! - [`selection`] - positions, ranges and selections
//! - [`word`] - change-case word-span resolution
//! - [`transform`] - line-local application of a transformation
//! - [`batch`] - per-selection replacement actions and the atomic batch edit
//! - [`reconcile`] - selection reconciliation after the edit
//! - [`case`] / [`catalog`] - the named transformations
//! - [`commands`] - command surface
//! - [`config`] - options and providers
//! - [`host`] - host seam traits; [`document`] - in-memory host

pub mod batch;
pub mod case;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod document;
mod error;
pub mod host;
pub mod line_ending;
pub mod line_index;
pub mod reconcile;
pub mod selection;
pub mod transform;
pub mod word;

pub use batch::{
    Extracted, ReplacementAction, apply_batch, build_replacement_actions, clamp_position,
    extract_text,
};
pub use catalog::{Catalog, TransformFn, Transformation};
pub use commands::{ChangeCase, CommandResult, PICK_COMMAND_ID, QuickPickItem};
pub use config::{ChangeCaseConfig, ConfigProvider, JsonConfig};
pub use document::{Document, MemoryEditor};
pub use error::{CommandError, EditError};
pub use host::{BufferEdit, LineInfo, TextDocument, TextEditor};
pub use line_ending::LineEnding;
pub use line_index::LineIndex;
pub use reconcile::{LineRunningOffsets, reconcile_selections};
pub use selection::{Position, Range, Selection, SelectionDirection};
pub use transform::{Transformed, apply_transformation};
pub use word::{WordCharClass, resolve_word_span};
