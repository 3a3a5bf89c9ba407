// ---------------------------------------------------------------------------
// Text matching helpers
// ---------------------------------------------------------------------------
//
// Case-insensitive substring matching shared by the named search operations.
// Lowercasing uses str::to_lowercase, which is locale-independent; exact
// Unicode case-folding rules are not part of the contract.
// ---------------------------------------------------------------------------

/// True if `needle` occurs as a case-insensitive substring of `haystack`.
///
/// The empty needle matches every haystack, including the empty one.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
