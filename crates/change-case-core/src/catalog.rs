//! The ordered catalog of named transformations.

use crate::case;

/// A pure conversion from input text to output text.
pub type TransformFn = fn(&str) -> String;

/// One named transformation.
#[derive(Debug, Clone, Copy)]
pub struct Transformation {
    /// Unique name, also used as the picker label.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// The conversion.
    pub transform: TransformFn,
}

impl Transformation {
    /// Apply the conversion.
    pub fn apply(&self, text: &str) -> String {
        (self.transform)(text)
    }
}

const BUILTIN: &[Transformation] = &[
    Transformation {
        name: "camelCase",
        description: "Convert to a string with the separators denoted by having the next letter capitalized",
        transform: case::camel_case,
    },
    Transformation {
        name: "capitalCase",
        description: "Convert to a string with the first letter of each word capitalized",
        transform: case::capital_case,
    },
    Transformation {
        name: "constantCase",
        description: "Convert to a string with all the words capitalized and separated by an underscore",
        transform: case::constant_case,
    },
    Transformation {
        name: "dotCase",
        description: "Convert to a string with all the words separated by a dot",
        transform: case::dot_case,
    },
    Transformation {
        name: "kebabCase",
        description: "Convert to a string with all the words separated by a hyphen",
        transform: case::kebab_case,
    },
    Transformation {
        name: "noCase",
        description: "Convert to a string with all the words separated by a space",
        transform: case::no_case,
    },
    Transformation {
        name: "pascalCase",
        description: "Convert to a string with all the words capitalized and concatenated",
        transform: case::pascal_case,
    },
    Transformation {
        name: "pascalSnakeCase",
        description: "Convert to a string with all the words capitalized and separated by an underscore",
        transform: case::pascal_snake_case,
    },
    Transformation {
        name: "pathCase",
        description: "Convert to a string with all the words separated by a forward slash",
        transform: case::path_case,
    },
    Transformation {
        name: "sentenceCase",
        description: "Convert to a string with the first letter of the first word capitalized",
        transform: case::sentence_case,
    },
    Transformation {
        name: "snakeCase",
        description: "Convert to a string with all the words separated by an underscore",
        transform: case::snake_case,
    },
    Transformation {
        name: "trainCase",
        description: "Convert to a string with all the words capitalized and separated by a hyphen",
        transform: case::train_case,
    },
    Transformation {
        name: "removeAccents",
        description: "Remove accents from the string",
        transform: case::remove_accents,
    },
];

/// An ordered collection of transformations with unique names.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Transformation>,
}

impl Catalog {
    /// The built-in conversions, in picker order.
    pub fn builtin() -> Self {
        Self {
            records: BUILTIN.to_vec(),
        }
    }

    /// A catalog from custom records. Later records whose name is already taken are dropped.
    pub fn from_records(records: impl IntoIterator<Item = Transformation>) -> Self {
        let mut out: Vec<Transformation> = Vec::new();
        for record in records {
            if out.iter().any(|existing| existing.name == record.name) {
                tracing::debug!(name = record.name, "Dropping duplicate transformation");
                continue;
            }
            out.push(record);
        }
        Self { records: out }
    }

    /// Look up a transformation by name.
    pub fn find(&self, name: &str) -> Option<&Transformation> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Transformation> {
        self.records.iter()
    }

    /// Names in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.records.iter().map(|record| record.name).collect()
    }

    /// Number of transformations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no transformations.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
