//! Relative path fragment normalization.

/// Separator recognized at the end of a user-entered path.
pub const SEPARATOR: char = '/';

/// Strip every trailing separator from a user-entered path fragment.
///
/// Leading separators and inner structure are kept as typed. Nothing is
/// checked against the filesystem: `"../x/"` becomes `"../x"` and an empty
/// answer stays empty.
pub fn normalize_path_fragment(raw: &str) -> String {
    raw.trim_end_matches(SEPARATOR).to_string()
}

/// Join a normalized fragment with a child segment using `/`.
///
/// An empty base yields the child unchanged, so an empty public path puts
/// files at the project root.
pub fn join(base: &str, child: &str) -> String {
    if base.is_empty() {
        child.to_string()
    } else {
        format!("{}{}{}", base, SEPARATOR, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_trailing_slash() {
        assert_eq!(normalize_path_fragment("public/"), "public");
    }

    #[test]
    fn strips_repeated_trailing_slashes() {
        assert_eq!(normalize_path_fragment("public/src///"), "public/src");
    }

    #[test]
    fn keeps_leading_and_inner_separators() {
        assert_eq!(normalize_path_fragment("/var//www/"), "/var//www");
    }

    #[test]
    fn empty_and_slash_only_inputs() {
        assert_eq!(normalize_path_fragment(""), "");
        assert_eq!(normalize_path_fragment("///"), "");
    }

    #[test]
    fn clean_input_is_untouched() {
        for input in ["public", "app/views", "../shared", " spaced ", "a\\b"] {
            assert_eq!(normalize_path_fragment(input), input);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in ["", "/", "a/", "a//", "/a/b/", "a/b", "x/./"] {
            let once = normalize_path_fragment(input);
            assert!(!once.ends_with(SEPARATOR));
            assert_eq!(normalize_path_fragment(&once), once);
        }
    }

    #[test]
    fn join_with_empty_base() {
        assert_eq!(join("", "index.html"), "index.html");
        assert_eq!(join("public", "index.html"), "public/index.html");
    }
}
