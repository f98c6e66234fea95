use change_case_core::{
    ChangeCase, ChangeCaseConfig, CommandError, CommandResult, JsonConfig, MemoryEditor,
    PICK_COMMAND_ID, Position, Range, Selection, TextEditor,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn include_dot() -> JsonConfig {
    JsonConfig::new(json!({ "changeCase": { "includeDotInCurrentWord": true } }))
}

#[test]
fn test_caret_conversion_respects_dot_option() {
    let commands = ChangeCase::default();

    let mut editor = MemoryEditor::new("const foo.bar-baz = 1;")
        .with_selections(vec![Selection::caret(Position::new(0, 11))]);
    commands
        .run_command("snakeCase", Some(&mut editor), &JsonConfig::default())
        .unwrap();
    assert_eq!(editor.text(), "const foo.bar_baz = 1;");

    let mut editor = MemoryEditor::new("const foo.bar-baz = 1;")
        .with_selections(vec![Selection::caret(Position::new(0, 11))]);
    let result = commands
        .run_command("snakeCase", Some(&mut editor), &include_dot())
        .unwrap();
    assert_eq!(editor.text(), "const foo_bar_baz = 1;");
    assert_eq!(
        result,
        CommandResult::Converted {
            selections: vec![Selection::from_range(Range::on_line(0, 6, 17))]
        }
    );
}

#[test]
fn test_preview_for_single_selection() {
    let commands = ChangeCase::default();
    let editor = MemoryEditor::new("my_value")
        .with_selections(vec![Selection::caret(Position::new(0, 3))]);

    let items = commands.quick_pick_items(Some(&editor), &ChangeCaseConfig::default());

    assert_eq!(items.len(), commands.catalog().len());
    assert_eq!(items[0].label, "camelCase");
    assert_eq!(items[0].description, "Convert to myValue");
    let constant = items.iter().find(|i| i.label == "constantCase").unwrap();
    assert_eq!(constant.description, "Convert to MY_VALUE");
}

#[test]
fn test_no_preview_for_multiple_or_multi_line_selections() {
    let commands = ChangeCase::default();
    let catalog_descriptions: Vec<String> = commands
        .catalog()
        .iter()
        .map(|t| t.description.to_string())
        .collect();

    let multiple = MemoryEditor::new("one two").with_selections(vec![
        Selection::caret(Position::new(0, 1)),
        Selection::caret(Position::new(0, 5)),
    ]);
    let items = commands.quick_pick_items(Some(&multiple), &ChangeCaseConfig::default());
    let descriptions: Vec<String> = items.into_iter().map(|i| i.description).collect();
    assert_eq!(descriptions, catalog_descriptions);

    let multi_line = MemoryEditor::new("one\ntwo").with_selections(vec![Selection::new(
        Position::new(0, 0),
        Position::new(1, 3),
    )]);
    let items = commands.quick_pick_items(Some(&multi_line), &ChangeCaseConfig::default());
    assert_eq!(items[0].description, catalog_descriptions[0]);

    let items = commands.quick_pick_items::<MemoryEditor, _>(None, &ChangeCaseConfig::default());
    assert_eq!(items[0].description, catalog_descriptions[0]);
}

#[test]
fn test_no_preview_when_caret_has_no_word() {
    let commands = ChangeCase::default();
    let editor = MemoryEditor::new("a = b")
        .with_selections(vec![Selection::caret(Position::new(0, 2))]);

    let items = commands.quick_pick_items(Some(&editor), &ChangeCaseConfig::default());
    assert_eq!(items[4].label, "kebabCase");
    assert_eq!(
        items[4].description,
        "Convert to a string with all the words separated by a hyphen"
    );
}

#[test]
fn test_pick_and_run_applies_choice() {
    let commands = ChangeCase::default();
    let mut editor = MemoryEditor::new("Ça va très bien")
        .with_selections(vec![Selection::from_range(Range::on_line(0, 0, 15))]);

    let result = commands
        .pick_and_run(Some(&mut editor), &ChangeCaseConfig::default(), |items| {
            assert_eq!(items.last().unwrap().description, "Convert to Ca va tres bien");
            Some("removeAccents".to_string())
        })
        .unwrap();

    assert_eq!(editor.text(), "Ca va tres bien");
    assert!(matches!(result, CommandResult::Converted { .. }));
}

#[test]
fn test_dismissed_picker_is_noop() {
    let commands = ChangeCase::default();
    let mut editor = MemoryEditor::new("fooBar")
        .with_selections(vec![Selection::caret(Position::new(0, 1))]);

    let result = commands
        .execute(
            PICK_COMMAND_ID,
            Some(&mut editor),
            &ChangeCaseConfig::default(),
            |_| None,
        )
        .unwrap();

    assert_eq!(result, CommandResult::Dismissed);
    assert_eq!(editor.text(), "fooBar");
    assert_eq!(
        editor.selections(),
        vec![Selection::caret(Position::new(0, 1))]
    );
}

#[test]
fn test_unknown_command_id() {
    let commands = ChangeCase::default();
    let mut editor = MemoryEditor::new("x");
    let err = commands
        .execute(
            "extension.changeCaseExtends.leetCase",
            Some(&mut editor),
            &ChangeCaseConfig::default(),
            |_| None,
        )
        .unwrap_err();

    assert!(matches!(err, CommandError::UnknownTransformation(_)));
}

#[test]
fn test_every_command_id_runs() {
    let commands = ChangeCase::default();
    for id in commands.command_ids().iter().skip(1) {
        let mut editor = MemoryEditor::new("mixed_Input value")
            .with_selections(vec![Selection::from_range(Range::on_line(0, 0, 17))]);
        let result = commands.execute(id, Some(&mut editor), &ChangeCaseConfig::default(), |_| {
            None
        });
        assert!(result.is_ok(), "{id}");
    }
}
