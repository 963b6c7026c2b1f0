//! Input sanitising for values that end up in file names.

/// Characters that are not allowed in file names on common filesystems.
const UNSAFE_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Removes characters that are unsafe in a file name.
///
/// Strips `< > : " / \ | ? *` and control characters, collapses runs of whitespace to a single
/// space, and trims leading/trailing spaces and dots. The result may be empty.
pub fn sanitize_file_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| !UNSAFE_FILE_NAME_CHARS.contains(c) && !c.is_control())
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c == '.' || c == ' ')
        .to_string()
}
