//! Line ending helpers.
//!
//! Text is stored verbatim, so a document may mix terminators. A line ends at LF (`'\n'`), CRLF
//! (`"\r\n"`) or a lone CR (`'\r'`), the same set the rope index breaks lines on. Multi-line
//! text is split on those terminators and rejoined with the very same ones, so lines keep their
//! own ending through a conversion.

/// The terminator at the end of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
    /// Classic Mac CR (`'\r'`).
    Cr,
}

impl LineEnding {
    /// The terminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Length of the terminator in characters.
    pub fn char_len(self) -> usize {
        self.as_str().len()
    }

    /// The terminator `line` ends with, if any.
    pub fn trailing(line: &str) -> Option<Self> {
        if line.ends_with("\r\n") {
            Some(Self::Crlf)
        } else if line.ends_with('\n') {
            Some(Self::Lf)
        } else if line.ends_with('\r') {
            Some(Self::Cr)
        } else {
            None
        }
    }

    /// Split `text` into lines, pairing each line's content with its own terminator.
    ///
    /// N terminators always yield N+1 segments; only the last segment has no terminator, so a
    /// trailing terminator produces a trailing empty line.
    pub fn split_lines(text: &str) -> Vec<(&str, Option<Self>)> {
        let mut lines = Vec::new();
        let mut rest = text;
        while let Some(idx) = rest.find(['\n', '\r']) {
            let ending = if rest[idx..].starts_with("\r\n") {
                Self::Crlf
            } else if rest[idx..].starts_with('\r') {
                Self::Cr
            } else {
                Self::Lf
            };
            lines.push((&rest[..idx], Some(ending)));
            rest = &rest[idx + ending.as_str().len()..];
        }
        lines.push((rest, None));
        lines
    }
}
