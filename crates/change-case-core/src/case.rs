//! Naming-convention conversions.
//!
//! Word splitting follows `heck`: any non-alphanumeric character and lower-to-upper case
//! transitions separate words, and separators are dropped. Every conversion is idempotent on
//! its own output.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase,
    ToTrainCase,
};
use unicode_normalization::UnicodeNormalization;

fn lower_words_joined(text: &str, separator: &str) -> String {
    // heck's snake case only ever emits '_' between words.
    text.to_snake_case().replace('_', separator)
}

/// `fooBar`
pub fn camel_case(text: &str) -> String {
    text.to_lower_camel_case()
}

/// `Foo Bar`
pub fn capital_case(text: &str) -> String {
    text.to_title_case()
}

/// `FOO_BAR`
pub fn constant_case(text: &str) -> String {
    text.to_shouty_snake_case()
}

/// `foo.bar`
pub fn dot_case(text: &str) -> String {
    lower_words_joined(text, ".")
}

/// `foo-bar`
pub fn kebab_case(text: &str) -> String {
    text.to_kebab_case()
}

/// `foo bar`
pub fn no_case(text: &str) -> String {
    lower_words_joined(text, " ")
}

/// `FooBar`
pub fn pascal_case(text: &str) -> String {
    text.to_pascal_case()
}

/// `Foo_Bar`
pub fn pascal_snake_case(text: &str) -> String {
    text.to_train_case().replace('-', "_")
}

/// `foo/bar`
pub fn path_case(text: &str) -> String {
    lower_words_joined(text, "/")
}

/// `Foo bar`
pub fn sentence_case(text: &str) -> String {
    let lower = no_case(text);
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `foo_bar`
pub fn snake_case(text: &str) -> String {
    text.to_snake_case()
}

/// `Foo-Bar`
pub fn train_case(text: &str) -> String {
    text.to_train_case()
}

/// Strip diacritics: `Crème Brûlée` becomes `Creme Brulee`.
///
/// Decomposes to NFD, drops combining diacritical marks (U+0300..=U+036F) and maps the
/// Vietnamese `đ`/`Đ`, which have no decomposition, to `d`/`D`. Everything else, including
/// case and separators, is preserved.
pub fn remove_accents(text: &str) -> String {
    text.nfd()
        .filter(|ch| !('\u{0300}'..='\u{036f}').contains(ch))
        .map(|ch| match ch {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}
