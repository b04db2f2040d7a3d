//! Slug normalization, random suffixes, and key assembly.

use clap::ValueEnum;
use rand::Rng;

/// The alphabet the random suffix is drawn from.
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The number of random characters appended to every key.
pub const SUFFIX_LENGTH: usize = 6;

/// The kind of configuration object a key tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// A field group.
    Group,

    /// A single field within a group.
    Field,

    /// A flexible-content layout.
    Layout,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Group => write!(f, "group"),
            Category::Field => write!(f, "field"),
            Category::Layout => write!(f, "layout"),
        }
    }
}

/// Normalizes a human-readable name into a machine-safe slug.
///
/// Spaces and hyphens become underscores, every other
/// non-alphanumeric character is dropped, the result is lowercased,
/// runs of underscores collapse to one, and leading and trailing
/// underscores are stripped. Any input is accepted; a name with no
/// alphanumeric characters yields the empty string.
pub fn normalize(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        if c == ' ' || c == '-' || c == '_' {
            if !slug.is_empty() && !prev_underscore {
                slug.push('_');
            }
            prev_underscore = true;
        } else if c.is_alphanumeric() {
            // `to_lowercase` may expand a single character.
            slug.extend(c.to_lowercase());
            prev_underscore = false;
        }
    }
    if slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// Generates a random string of `length` characters from `[a-z0-9]`.
///
/// Each character is drawn uniformly and independently from the
/// thread-local generator. Uniqueness is probabilistic only.
pub fn generate_suffix(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

/// Assembles a key of the form `<category>_<slug>_<suffix>`.
pub fn generate_key(category: Category, name: &str) -> String {
    let slug = normalize(name);
    let suffix = generate_suffix(SUFFIX_LENGTH);
    format!("{category}_{slug}_{suffix}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Hero Title"), "hero_title");
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(normalize("  multi   space--dash  "), "multi_space_dash");
        assert_eq!(normalize("already_snake__case"), "already_snake_case");
    }

    #[test]
    fn test_normalize_strips_special_characters() {
        assert_eq!(normalize("My Group!"), "my_group");
        assert_eq!(normalize("Price ($USD)"), "price_usd");
    }

    #[test]
    fn test_normalize_empty_and_degenerate_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("___"), "");
        assert_eq!(normalize(" - - "), "");
    }

    #[test]
    fn test_normalize_output_charset() {
        let inputs = [
            "Hero Title",
            "a--b__c  d",
            "MIXED Case 123",
            "trailing punctuation?!",
            "-leading and trailing-",
        ];
        for input in inputs {
            let slug = normalize(input);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in slug {slug:?} for input {input:?}"
            );
            assert!(!slug.contains("__"), "doubled underscore in {slug:?}");
            assert!(!slug.starts_with('_') && !slug.ends_with('_'));
        }
    }

    #[test]
    fn test_suffix_length_and_alphabet() {
        let suffix = generate_suffix(SUFFIX_LENGTH);
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix.bytes().all(|b| SUFFIX_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_suffix_zero_length() {
        assert_eq!(generate_suffix(0), "");
    }

    #[test]
    fn test_generate_key_prefix_and_shape() {
        for (category, prefix) in [
            (Category::Group, "group_"),
            (Category::Field, "field_"),
            (Category::Layout, "layout_"),
        ] {
            let key = generate_key(category, "Hero Title");
            assert!(key.starts_with(prefix), "key {key:?} missing prefix {prefix:?}");
            let suffix = &key[key.len() - SUFFIX_LENGTH..];
            assert!(suffix.bytes().all(|b| SUFFIX_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_key_with_empty_slug() {
        // A name with no alphanumerics leaves the slug empty and the
        // two joining underscores adjacent.
        let key = generate_key(Category::Field, "!!!");
        assert!(key.starts_with("field__"));
        assert_eq!(key.len(), "field__".len() + SUFFIX_LENGTH);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Group.to_string(), "group");
        assert_eq!(Category::Field.to_string(), "field");
        assert_eq!(Category::Layout.to_string(), "layout");
    }
}
