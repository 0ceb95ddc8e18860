//! Semantic categories assigned to tokens.

use std::fmt;

use serde::{Serialize, Serializer};

/// The semantic category of a classified token.
///
/// The seven built-in categories cover what every grammar needs. Grammars
/// that distinguish more (annotations, string interpolation, ...) use
/// [`Category::Custom`] with a stable lowercase name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Comment,
    String,
    Number,
    Keyword,
    Type,
    Operator,
    /// Fallback for tokens no rule matched.
    #[default]
    Plain,
    /// Grammar-specific category, identified by name.
    Custom(&'static str),
}

impl Category {
    /// Stable lowercase name, used by dumps and renderers.
    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Operator => "operator",
            Category::Plain => "plain",
            Category::Custom(name) => name,
        }
    }

    #[inline]
    pub fn is_plain(self) -> bool {
        self == Category::Plain
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
