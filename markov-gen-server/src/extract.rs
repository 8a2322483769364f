//! Text extraction collaborator: fetches a URL server-side and reduces
//! the HTML to plain text.
//!
//! This is string substitution only: element removal, tag stripping,
//! entity decoding and whitespace normalization. No parsing engine, no
//! format guarantees beyond "the output is a string".

use std::time::Duration;

use reqwest::{Client, Url};

/// Elements removed with their entire content before tag stripping.
const STRIPPED_ELEMENTS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

/// Extraction context holding a reusable HTTP client.
pub struct TextExtractor {
	client: Client,
}

impl TextExtractor {
	/// Creates a new extractor with a request timeout.
	pub fn new() -> reqwest::Result<Self> {
		let client = Client::builder()
			.timeout(Duration::new(10, 0))
			.build()?;
		Ok(Self { client })
	}

	/// Fetches `url` and returns its plain-text reduction.
	///
	/// # Errors
	/// Returns an error string if the request fails, the response status
	/// is not a success, or the body cannot be read.
	pub async fn extract_text(&self, url: &Url) -> Result<String, String> {
		let response = self.client
			.get(url.clone())
			.header("User-Agent", "Mozilla/5.0 (compatible; MarkovBot/1.0)")
			.header("Accept", "text/html,application/xhtml+xml,text/plain")
			.send()
			.await
			.map_err(|e| format!("Failed to fetch: {e}"))?;

		if !response.status().is_success() {
			return Err(format!("Failed to fetch: {}", response.status()));
		}

		let html = response
			.text()
			.await
			.map_err(|e| format!("Failed to read response: {e}"))?;

		Ok(html_to_text(&html))
	}
}

/// Validates that `url` parses and uses an http or https scheme.
pub fn validate_url(url: &str) -> Result<Url, String> {
	let parsed = Url::parse(url).map_err(|e| format!("Invalid URL: {e}"))?;
	match parsed.scheme() {
		"http" | "https" => Ok(parsed),
		other => Err(format!("Invalid URL protocol: {other}")),
	}
}

/// Reduces an HTML document to plain text.
///
/// # Behavior
/// - Removes script/style/nav/header/footer elements with their content.
/// - Drops every remaining tag.
/// - Decodes the common HTML entities.
/// - Collapses whitespace runs to single spaces and trims.
pub fn html_to_text(html: &str) -> String {
	let mut text = html.to_owned();
	for tag in STRIPPED_ELEMENTS {
		text = strip_elements(&text, tag);
	}
	let text = decode_entities(&strip_tags(&text));
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes `<tag ...> ... </tag>` elements with their content.
///
/// Tag-name matching is ASCII case-insensitive, and the name must be
/// terminated by `>`, `/` or whitespace so that stripping `nav` does not
/// consume a `<navbar>` element. An unterminated element drops the rest
/// of the input, like the content of a truncated script block.
fn strip_elements(html: &str, tag: &str) -> String {
	// ASCII lowercasing keeps byte offsets aligned with the input.
	let mut lower = html.to_owned();
	lower.make_ascii_lowercase();

	let open = format!("<{tag}");
	let close = format!("</{tag}");

	let mut out = String::with_capacity(html.len());
	let mut pos = 0;

	while let Some(offset) = lower[pos..].find(&open) {
		let start = pos + offset;
		let after_name = start + open.len();
		let next = lower[after_name..].chars().next();
		if !matches!(next, Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace()) {
			// Longer tag name sharing the prefix; keep scanning.
			out.push_str(&html[pos..after_name]);
			pos = after_name;
			continue;
		}

		out.push_str(&html[pos..start]);
		pos = match find_element_end(&lower, after_name, &close) {
			Some(end) => end,
			None => lower.len(),
		};
	}

	out.push_str(&html[pos..]);
	out
}

/// Finds the byte offset just past the closing tag starting the search at
/// `from`. `None` if the element is never closed.
fn find_element_end(lower: &str, from: usize, close: &str) -> Option<usize> {
	let mut pos = from;
	while let Some(offset) = lower[pos..].find(close) {
		let start = pos + offset;
		let after_name = start + close.len();
		let next = lower[after_name..].chars().next();
		if matches!(next, Some(c) if c == '>' || c.is_ascii_whitespace()) {
			return lower[after_name..].find('>').map(|end| after_name + end + 1);
		}
		pos = start + 1;
	}
	None
}

/// Drops every remaining tag, replacing each with a space.
fn strip_tags(html: &str) -> String {
	let mut out = String::with_capacity(html.len());
	let mut in_tag = false;
	for c in html.chars() {
		match c {
			'<' => in_tag = true,
			'>' if in_tag => {
				in_tag = false;
				out.push(' ');
			}
			_ if !in_tag => out.push(c),
			_ => (),
		}
	}
	out
}

/// Decodes the common HTML entities.
fn decode_entities(text: &str) -> String {
	text.replace("&nbsp;", " ")
		.replace("&amp;", "&")
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&rsquo;", "'")
		.replace("&lsquo;", "'")
		.replace("&rdquo;", "\"")
		.replace("&ldquo;", "\"")
		.replace("&mdash;", "-")
		.replace("&ndash;", "-")
}
