/// Marks the node being visited as the end of a stored key.
pub const TERMINAL_MARKER: char = ']';
/// Closes the scope of the node being visited.
pub const CLOSE_MARKER: char = '>';

pub fn is_reserved(c: char) -> bool {
    c == TERMINAL_MARKER || c == CLOSE_MARKER
}

/// Case-folds a key the way every stored and looked-up key is folded.
///
/// Each char is mapped on its own, so a key folds to a prefix of the folded
/// key it starts. `str::to_lowercase` does not: a final `Σ` becomes `ς`.
pub fn normalize(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
