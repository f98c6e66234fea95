//! Command interface example
//!
//! Drives the change-case commands against the in-memory editor.

use change_case_core::{
    ChangeCase, ChangeCaseConfig, CommandResult, JsonConfig, MemoryEditor, Position, Range,
    Selection, TextEditor,
};
use serde_json::json;

fn main() {
    println!("=== Change case command interface ===\n");

    let commands = ChangeCase::default();
    println!("Registered commands:");
    for id in commands.command_ids() {
        println!("  {id}");
    }
    println!();

    // 1. Carets expand to the word under them.
    let mut editor = MemoryEditor::new("let userName = get-user-name();").with_selections(vec![
        Selection::caret(Position::new(0, 6)),
        Selection::caret(Position::new(0, 20)),
    ]);
    commands
        .run_command("snakeCase", Some(&mut editor), &ChangeCaseConfig::default())
        .unwrap();
    println!("1. snakeCase on two carets:");
    println!("  text: '{}'", editor.text());
    println!("  selections: {:?}\n", editor.selections());
    assert_eq!(editor.text(), "let user_name = get_user_name();");

    // 2. Dots join the word when the option is enabled.
    let settings = JsonConfig::new(json!({ "changeCase": { "includeDotInCurrentWord": true } }));
    let mut editor = MemoryEditor::new("config.max_size = 1")
        .with_selections(vec![Selection::caret(Position::new(0, 2))]);
    commands
        .run_command("constantCase", Some(&mut editor), &settings)
        .unwrap();
    println!("2. constantCase with includeDotInCurrentWord:");
    println!("  text: '{}'\n", editor.text());
    assert_eq!(editor.text(), "CONFIG_MAX_SIZE = 1");

    // 3. The picker previews a single selection.
    let mut editor = MemoryEditor::new("Crème brûlée recipe")
        .with_selections(vec![Selection::from_range(Range::on_line(0, 0, 12))]);
    println!("3. Picker:");
    let result = commands
        .pick_and_run(Some(&mut editor), &ChangeCaseConfig::default(), |items| {
            for item in items {
                println!("  {:<16} {}", item.label, item.description);
            }
            Some("removeAccents".to_string())
        })
        .unwrap();
    println!("  text: '{}'", editor.text());
    if let CommandResult::Converted { selections } = result {
        println!("  selections: {selections:?}");
    }
}
