//! Command surface.
//!
//! One command per catalog transformation, plus a picker command that lists every
//! transformation (previewing the result when exactly one single-line selection exists) and
//! runs the chosen one.
//!
//! # Example
//!
//! ```rust
//! use change_case_core::{ChangeCase, ChangeCaseConfig, MemoryEditor, Position, Selection};
//!
//! let commands = ChangeCase::default();
//! let mut editor = MemoryEditor::new("let someValue = 1;")
//!     .with_selections(vec![Selection::caret(Position::new(0, 6))]);
//!
//! commands
//!     .run_command("snakeCase", Some(&mut editor), &ChangeCaseConfig::default())
//!     .unwrap();
//!
//! assert_eq!(editor.text(), "let some_value = 1;");
//! ```

use crate::batch::{apply_batch, extract_text};
use crate::catalog::{Catalog, Transformation};
use crate::config::{ChangeCaseConfig, ConfigProvider};
use crate::error::CommandError;
use crate::host::TextEditor;
use crate::selection::Selection;

/// Prefix shared by all command ids.
pub const COMMAND_PREFIX: &str = "extension.changeCaseExtends";

/// Id of the picker command.
pub const PICK_COMMAND_ID: &str = "extension.changeCaseExtends.commands";

/// An entry offered by the picker command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPickItem {
    /// Transformation name.
    pub label: String,
    /// Preview (`Convert to ...`) or the transformation's description.
    pub description: String,
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// The conversion was applied; holds the new selection set.
    Converted {
        /// Reconciled selections, as written back to the editor.
        selections: Vec<Selection>,
    },
    /// The picker was dismissed without choosing a transformation.
    Dismissed,
}

/// The change-case command set over a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct ChangeCase {
    catalog: Catalog,
}

impl ChangeCase {
    /// Commands over a custom catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Command id for a transformation name.
    pub fn command_id(name: &str) -> String {
        format!("{COMMAND_PREFIX}.{name}")
    }

    /// All command ids: the picker first, then one per transformation in catalog order.
    pub fn command_ids(&self) -> Vec<String> {
        std::iter::once(PICK_COMMAND_ID.to_string())
            .chain(self.catalog.iter().map(|t| Self::command_id(t.name)))
            .collect()
    }

    /// The transformation a command id runs (`None` for the picker or unknown ids).
    pub fn transformation_for_command_id(&self, id: &str) -> Option<&Transformation> {
        let name = id.strip_prefix(COMMAND_PREFIX)?.strip_prefix('.')?;
        self.catalog.find(name)
    }

    /// Convert every selection of `editor` with the transformation called `name`.
    ///
    /// Unknown names, a missing editor and edits rejected by the host are errors, and in each
    /// of those cases the buffer and selections are untouched.
    pub fn run_command<E, C>(
        &self,
        name: &str,
        editor: Option<&mut E>,
        config: &C,
    ) -> Result<CommandResult, CommandError>
    where
        E: TextEditor,
        C: ConfigProvider + ?Sized,
    {
        let span = tracing::debug_span!("change_case", name);
        let _guard = span.enter();

        let Some(transformation) = self.catalog.find(name) else {
            tracing::debug!("Unknown transformation, ignoring");
            return Err(CommandError::UnknownTransformation(name.to_string()));
        };
        let Some(editor) = editor else {
            tracing::debug!("No active editor, ignoring");
            return Err(CommandError::NoActiveEditor);
        };

        let config = ChangeCaseConfig::resolve(config);
        let selections = apply_batch(
            editor,
            &transformation.transform,
            config.include_dot_in_current_word,
        )?;

        tracing::debug!(selections = selections.len(), "Converted selections");
        Ok(CommandResult::Converted { selections })
    }

    /// Items for the picker.
    ///
    /// With exactly one selection on a single line, each description previews the conversion
    /// of that selection (a caret previews its word). Otherwise the catalog descriptions are
    /// used.
    pub fn quick_pick_items<E, C>(&self, editor: Option<&E>, config: &C) -> Vec<QuickPickItem>
    where
        E: TextEditor,
        C: ConfigProvider + ?Sized,
    {
        let preview_text = editor.and_then(|editor| {
            let selections = editor.selections();
            let [selection] = selections.as_slice() else {
                return None;
            };
            if !selection.is_single_line() {
                return None;
            }
            let config = ChangeCaseConfig::resolve(config);
            let extracted = extract_text(
                selection,
                editor.document(),
                config.include_dot_in_current_word,
            );
            Some(extracted.text).filter(|text| !text.is_empty())
        });

        self.catalog
            .iter()
            .map(|t| QuickPickItem {
                label: t.name.to_string(),
                description: match &preview_text {
                    Some(text) => format!("Convert to {}", t.apply(text)),
                    None => t.description.to_string(),
                },
            })
            .collect()
    }

    /// Show the picker via `picker` and run the chosen transformation.
    ///
    /// `picker` returns the chosen label, or `None` when dismissed.
    pub fn pick_and_run<E, C, P>(
        &self,
        editor: Option<&mut E>,
        config: &C,
        picker: P,
    ) -> Result<CommandResult, CommandError>
    where
        E: TextEditor,
        C: ConfigProvider + ?Sized,
        P: FnOnce(&[QuickPickItem]) -> Option<String>,
    {
        let items = self.quick_pick_items(editor.as_deref(), config);
        match picker(&items) {
            Some(label) => self.run_command(&label, editor, config),
            None => {
                tracing::debug!("Picker dismissed");
                Ok(CommandResult::Dismissed)
            }
        }
    }

    /// Dispatch a command id: the picker id runs [`ChangeCase::pick_and_run`], any other
    /// known id runs its transformation.
    pub fn execute<E, C, P>(
        &self,
        command_id: &str,
        editor: Option<&mut E>,
        config: &C,
        picker: P,
    ) -> Result<CommandResult, CommandError>
    where
        E: TextEditor,
        C: ConfigProvider + ?Sized,
        P: FnOnce(&[QuickPickItem]) -> Option<String>,
    {
        if command_id == PICK_COMMAND_ID {
            return self.pick_and_run(editor, config, picker);
        }

        match self.transformation_for_command_id(command_id) {
            Some(t) => self.run_command(t.name, editor, config),
            None => Err(CommandError::UnknownTransformation(command_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryEditor, Position};

    #[test]
    fn test_command_ids_cover_catalog() {
        let commands = ChangeCase::default();
        let ids = commands.command_ids();
        assert_eq!(ids.len(), commands.catalog().len() + 1);
        assert_eq!(ids[0], PICK_COMMAND_ID);
        assert!(ids.contains(&"extension.changeCaseExtends.kebabCase".to_string()));
    }

    #[test]
    fn test_transformation_for_command_id() {
        let commands = ChangeCase::default();
        let t = commands
            .transformation_for_command_id("extension.changeCaseExtends.pathCase")
            .unwrap();
        assert_eq!(t.name, "pathCase");
        assert!(commands.transformation_for_command_id(PICK_COMMAND_ID).is_none());
        assert!(
            commands
                .transformation_for_command_id("extension.changeCaseExtendspathCase")
                .is_none()
        );
    }

    #[test]
    fn test_unknown_name_is_rejected_before_touching_editor() {
        let commands = ChangeCase::default();
        let mut editor = MemoryEditor::new("fooBar")
            .with_selections(vec![Selection::caret(Position::new(0, 2))]);

        let err = commands
            .run_command("shoutCase", Some(&mut editor), &ChangeCaseConfig::default())
            .unwrap_err();

        assert_eq!(err, CommandError::UnknownTransformation("shoutCase".into()));
        assert_eq!(editor.text(), "fooBar");
        assert_eq!(
            editor.selections(),
            vec![Selection::caret(Position::new(0, 2))]
        );
    }

    #[test]
    fn test_missing_editor() {
        let commands = ChangeCase::default();
        let err = commands
            .run_command::<MemoryEditor, _>("snakeCase", None, &ChangeCaseConfig::default())
            .unwrap_err();
        assert_eq!(err, CommandError::NoActiveEditor);
    }

    #[test]
    fn test_execute_dispatches_by_id() {
        let commands = ChangeCase::default();
        let mut editor = MemoryEditor::new("some words")
            .with_selections(vec![Selection::new(Position::new(0, 0), Position::new(0, 10))]);

        commands
            .execute(
                "extension.changeCaseExtends.constantCase",
                Some(&mut editor),
                &ChangeCaseConfig::default(),
                |_| None,
            )
            .unwrap();

        assert_eq!(editor.text(), "SOME_WORDS");
    }
}
