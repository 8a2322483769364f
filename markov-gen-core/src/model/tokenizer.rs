/// Normalizes a single word.
///
/// Lowercases the input and strips leading and trailing characters that
/// are not ASCII letters or digits. Internal punctuation (for example the
/// apostrophe in "don't") is preserved. May return an empty string.
pub fn normalize(word: &str) -> String {
	word.to_lowercase()
		.trim_matches(|c: char| !c.is_ascii_alphanumeric())
		.to_owned()
}

/// Tokenizes raw text into an ordered sequence of word tokens.
///
/// # Behavior
/// - Splits on runs of whitespace.
/// - Normalizes each piece with `normalize`.
/// - Discards pieces that become empty after stripping.
///
/// Empty input yields an empty sequence; there are no error conditions.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace()
		.map(normalize)
		.filter(|token| !token.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lowercase_and_split() {
		assert_eq!(tokenize("The CAT Sat"), vec!["the", "cat", "sat"]);
	}

	#[test]
	fn test_strip_surrounding_punctuation() {
		assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
		assert_eq!(tokenize("\"quoted\" (parens)"), vec!["quoted", "parens"]);
	}

	#[test]
	fn test_internal_punctuation_preserved() {
		assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
		assert_eq!(tokenize("e-mail me"), vec!["e-mail", "me"]);
	}

	#[test]
	fn test_digits_kept() {
		assert_eq!(tokenize("route 66!"), vec!["route", "66"]);
	}

	#[test]
	fn test_empty_and_punctuation_only() {
		assert_eq!(tokenize(""), Vec::<String>::new());
		assert_eq!(tokenize("   \t\n "), Vec::<String>::new());
		assert_eq!(tokenize("... --- !!!"), Vec::<String>::new());
	}

	#[test]
	fn test_normalize_single_word() {
		assert_eq!(normalize("The!"), "the");
		assert_eq!(normalize("---"), "");
	}
}
