use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;

use super::Book;

/// Books kept from a single page.
pub const MAX_BOOKS: usize = 10;

/// ```json
/// {
///   "count": 76543,
///   "next": "https://gutendex.com/books/?page=2",
///   "previous": null,
///   "results": [{ "id": 84, "title": "Frankenstein", "authors": [{ "name": "Shelley, Mary" }] }]
/// }
/// ```
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct ResultPage {
    #[serde(default, deserialize_with = "first_books")]
    pub results: Vec<Book>,
}

struct FirstBooks;

impl<'de> Visitor<'de> for FirstBooks {
    type Value = Vec<Book>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of books")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(vec![])
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut books = Vec::with_capacity(MAX_BOOKS);

        while books.len() < MAX_BOOKS {
            match seq.next_element::<Book>()? {
                Some(book) => books.push(book),
                None => return Ok(books),
            }
        }

        // the remainder is consumed without being built
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(books)
    }
}

fn first_books<'de, D>(deserializer: D) -> Result<Vec<Book>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FirstBooks)
}

#[cfg(test)]
mod tests {
    use super::{ResultPage, MAX_BOOKS};

    fn page_of(n: usize) -> String {
        let results = (1..=n)
            .map(|id| format!(r#"{{ "id": {}, "title": "Book {}", "authors": [] }}"#, id, id))
            .collect::<Vec<_>>()
            .join(",");

        format!(r#"{{ "count": {}, "next": null, "results": [{}] }}"#, n, results)
    }

    #[test]
    fn keeps_first_ten() -> anyhow::Result<()> {
        let page: ResultPage = serde_json::from_str(&page_of(15))?;

        assert_eq!(MAX_BOOKS, page.results.len());
        assert_eq!(1, page.results[0].id);
        assert_eq!(10, page.results[9].id);

        Ok(())
    }

    #[test]
    fn short_page_is_kept_whole() -> anyhow::Result<()> {
        let page: ResultPage = serde_json::from_str(&page_of(3))?;

        assert_eq!(3, page.results.len());

        Ok(())
    }

    #[test]
    fn missing_or_null_results_are_empty() -> anyhow::Result<()> {
        let missing: ResultPage = serde_json::from_str(r#"{ "count": 0 }"#)?;
        let null: ResultPage = serde_json::from_str(r#"{ "results": null }"#)?;

        assert!(missing.results.is_empty());
        assert!(null.results.is_empty());

        Ok(())
    }

    #[test]
    fn malformed_book_is_an_error() -> anyhow::Result<()> {
        let r = serde_json::from_str::<ResultPage>(r#"{ "results": [{ "id": "x" }] }"#);

        assert!(r.is_err());

        Ok(())
    }
}
