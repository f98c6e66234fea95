//! Multi-line selections are converted line by line; line breaks are preserved.

use change_case_core::{MemoryEditor, Position, Selection, TextEditor, apply_batch, case};

fn main() {
    let mut editor = MemoryEditor::new("First Name\r\nLast Name\r\nEmail Address").with_selections(
        vec![Selection::new(Position::new(0, 0), Position::new(2, 13))],
    );

    let selections = apply_batch(&mut editor, &case::camel_case, false).unwrap();

    assert_eq!(editor.text(), "firstName\r\nlastName\r\nemailAddress");
    println!("{:?}", editor.text());
    println!("{:?}", editor.selections());
    println!("{selections:?}");
}
