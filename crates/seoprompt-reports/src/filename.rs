/// File stem used when none is configured.
pub const DEFAULT_FILE_STEM: &str = "seo_prompt";

/// Clean a user-supplied file stem so it names a single file.
///
/// This function:
/// - Replaces path separators with hyphens
/// - Neutralizes ".." path traversal
/// - Replaces characters that are reserved on Windows
/// - Falls back to [`DEFAULT_FILE_STEM`] when nothing usable remains
pub fn sanitize_file_stem(stem: &str) -> String {
    let cleaned = stem
        .trim()
        .replace(std::path::MAIN_SEPARATOR, "-")
        .replace('/', "-")
        .replace('\\', "-")
        .replace("..", "dotdot")
        .replace(':', "_")
        .replace('*', "_")
        .replace('?', "_")
        .replace('<', "_")
        .replace('>', "_")
        .replace('|', "_")
        .replace('"', "_")
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>();

    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c == '-' || c.is_whitespace());

    if cleaned.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_stems() {
        assert_eq!(sanitize_file_stem("seo_prompt"), "seo_prompt");
        assert_eq!(sanitize_file_stem("카페-블로그"), "카페-블로그");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_file_stem("drafts/cafe"), "drafts-cafe");
        assert_eq!(sanitize_file_stem("../../etc/passwd"), "dotdot-dotdot-etc-passwd");
        assert_eq!(sanitize_file_stem("a:b*c?"), "a_b_c_");
    }

    #[test]
    fn test_sanitize_falls_back_to_default() {
        assert_eq!(sanitize_file_stem(""), DEFAULT_FILE_STEM);
        assert_eq!(sanitize_file_stem("  /  "), DEFAULT_FILE_STEM);
        assert_eq!(sanitize_file_stem("..."), "dotdot");
    }
}
