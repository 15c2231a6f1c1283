use crate::error::{Error, Result};
use crate::parser::extract::fields;
use crate::parser::text::EntryText;
use crate::record::Author;

const PERSON_SEPARATOR: &str = " and ";
const NAME_SEPARATOR: &str = ", ";

/// Authors from the last `author = ` line of the entry. An entry without one
/// has no authors.
pub fn extract(text: &EntryText) -> Result<Vec<Author>> {
    match fields::scan_last(text, fields::AUTHOR) {
        Some(raw) => parse_list(&raw),
        None => Ok(Vec::new()),
    }
}

/// Parse `"Last, First and Last, First"` into authors, in source order.
pub fn parse_list(raw: &str) -> Result<Vec<Author>> {
    raw.split(PERSON_SEPARATOR).map(parse_person).collect()
}

fn parse_person(token: &str) -> Result<Author> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == ',')
        .collect();

    let parts: Vec<&str> = cleaned.split(NAME_SEPARATOR).collect();
    match parts.as_slice() {
        [last, first] => Ok(Author {
            first: first.to_string(),
            last: last.to_string(),
        }),
        _ => Err(Error::MalformedAuthor {
            token: token.to_string(),
            parts: parts.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(authors: &[Author]) -> Vec<String> {
        authors.iter().map(Author::display_name).collect()
    }

    #[test]
    fn two_authors_in_order() {
        let authors = parse_list("Doe, Jane and Smith, John").unwrap();
        assert_eq!(
            authors,
            vec![
                Author { first: "Jane".into(), last: "Doe".into() },
                Author { first: "John".into(), last: "Smith".into() },
            ]
        );
        assert_eq!(names(&authors), ["Jane Doe", "John Smith"]);
    }

    #[test]
    fn strips_import_punctuation() {
        let authors = parse_list("{O'Neil}, J. R. and M{\\\"u}ller, Hans").unwrap();
        assert_eq!(names(&authors), ["J R ONeil", "Hans Muller"]);
    }

    #[test]
    fn multi_word_names() {
        let authors = parse_list("van der Berg, Anna Maria").unwrap();
        assert_eq!(authors[0].last, "van der Berg");
        assert_eq!(authors[0].first, "Anna Maria");
    }

    #[test]
    fn missing_comma_is_malformed() {
        let err = parse_list("JohnDoe").unwrap_err();
        assert!(matches!(err, Error::MalformedAuthor { ref token, parts: 1 } if token == "JohnDoe"));
    }

    #[test]
    fn too_many_parts_is_malformed() {
        let err = parse_list("Doe, Jane and King, Jr., Martin").unwrap_err();
        assert!(matches!(err, Error::MalformedAuthor { parts: 3, .. }));
    }

    #[test]
    fn last_author_line_wins() {
        let text = EntryText::from_raw(
            "  author = {Doe, Jane},\n  title = {X},\n  author = {Roe, Richard},",
        );
        let authors = extract(&text).unwrap();
        assert_eq!(names(&authors), ["Richard Roe"]);
    }

    #[test]
    fn no_author_line() {
        let text = EntryText::from_raw("  title = {X},");
        assert!(extract(&text).unwrap().is_empty());
    }
}
