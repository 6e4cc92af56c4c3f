use serde::Deserialize;

pub const UNKNOWN_AUTHOR: &str = "unknown author";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Book {
    /// First author's name, or [`UNKNOWN_AUTHOR`] when there is none to show.
    pub fn author_label(&self) -> &str {
        match self.authors.first() {
            Some(author) if !author.name.trim().is_empty() => &author.name,
            _ => UNKNOWN_AUTHOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, UNKNOWN_AUTHOR};

    #[test]
    fn first_author_is_shown() -> anyhow::Result<()> {
        let book: Book = serde_json::from_str(
            r#"{ "id": 84, "title": "Frankenstein", "authors": [{ "name": "Shelley, Mary" }, { "name": "Other" }] }"#,
        )?;

        assert_eq!("Shelley, Mary", book.author_label());

        Ok(())
    }

    #[test]
    fn missing_authors_use_placeholder() -> anyhow::Result<()> {
        let book: Book = serde_json::from_str(r#"{ "id": 1, "title": "T" }"#)?;

        assert!(book.authors.is_empty());
        assert_eq!(UNKNOWN_AUTHOR, book.author_label());

        Ok(())
    }

    #[test]
    fn blank_author_name_uses_placeholder() -> anyhow::Result<()> {
        let book: Book =
            serde_json::from_str(r#"{ "id": 1, "title": "T", "authors": [{ "name": " " }] }"#)?;

        assert_eq!(UNKNOWN_AUTHOR, book.author_label());

        Ok(())
    }
}
