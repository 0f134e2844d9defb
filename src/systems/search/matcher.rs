use std::path::Path;

/// Lowercase, whitespace-separated tokens of a query.
///
/// A candidate matches when every keyword is a substring of its lowercase
/// form. An empty keyword set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
	pub fn parse(query: &str) -> Self {
		Self(query.split_whitespace().map(str::to_lowercase).collect())
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Test a candidate string against every keyword.
	pub fn matches(&self, candidate: &str) -> bool {
		if self.0.is_empty() {
			return false;
		}
		let candidate = candidate.to_lowercase();
		self.0.iter().all(|keyword| candidate.contains(keyword.as_str()))
	}

	/// Test the full path, so keywords may match any ancestor component.
	pub fn matches_path(&self, path: &Path) -> bool {
		self.matches(&path.to_string_lossy())
	}
}
