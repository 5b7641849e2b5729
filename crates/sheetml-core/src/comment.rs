//! Cell comments
//!
//! ## Example
//!
//! ```rust
//! use sheetml_core::{Cell, Comment};
//!
//! let mut cell = Cell::new(1);
//! cell.comment = Some(Comment::new("Author", "This is a note"));
//! assert_eq!(cell.comment.unwrap().to_string(), "[Author]: This is a note");
//! ```

/// A cell comment (`ss:Comment`)
///
/// Rich text in the comment's `Data` child is flattened to plain text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    /// Author of the comment (`ss:Author`)
    pub author: String,
    /// Comment text content
    pub text: String,
    /// Whether the comment box is always shown (`ss:ShowAlways`)
    pub show_always: bool,
}

impl Comment {
    /// Create a new comment with the given author and text
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            show_always: false,
        }
    }

    /// Check if this comment has an author
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_author() {
            write!(f, "[{}]: {}", self.author, self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}
