//! Glob expansion for task inputs.
//!
//! Patterns are relative to the project root. Matching follows the usual
//! build-tool conventions: `*` stays within one path segment, `**` crosses
//! directories, dotfiles only match when the pattern names the dot.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::errors::TaskError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// A file selected by an input pattern, with the directory its pattern is anchored at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPath {
    pub path: PathBuf,
    /// Glob base; copies preserve the path below it
    pub base: PathBuf,
}

impl MatchedPath {
    /// Path below the glob base, e.g. `icons/a.woff` for `fonts/**/*` matching `fonts/icons/a.woff`
    pub fn relative(&self) -> PathBuf {
        match self.path.strip_prefix(&self.base) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => self
                .path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_default(),
        }
    }
}

/// True when the pattern contains glob metacharacters
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// The directory part of a pattern before its first wildcard segment.
///
/// For a literal path this is the parent directory.
pub fn glob_base(pattern: &str) -> PathBuf {
    if !is_glob(pattern) {
        return Path::new(pattern)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
    }

    let mut base = PathBuf::new();
    for segment in pattern.split('/') {
        if is_glob(segment) {
            break;
        }
        if segment.is_empty() && base.as_os_str().is_empty() && pattern.starts_with('/') {
            base.push("/");
            continue;
        }
        base.push(segment);
    }
    base
}

/// Drop `.` components. `glob` strips them from the paths it yields, so bases
/// and literal paths must match that form to compare equal.
fn without_cur_dir(path: PathBuf) -> PathBuf {
    if !path.components().any(|c| c == Component::CurDir) {
        return path;
    }
    path.components()
        .filter(|c| *c != Component::CurDir)
        .collect()
}

/// Expand patterns against `root`, keeping pattern order and dropping repeats.
///
/// Wildcard patterns that match nothing contribute nothing. A literal path that
/// does not exist is an error. With `files_only`, directories are skipped.
pub fn expand_patterns(
    root: &Path,
    patterns: &[String],
    files_only: bool,
) -> Result<Vec<MatchedPath>, TaskError> {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    for pattern in patterns {
        let base = without_cur_dir(root.join(glob_base(pattern)));

        if !is_glob(pattern) {
            let path = without_cur_dir(root.join(pattern));
            if !path.exists() {
                return Err(TaskError::MissingInput {
                    pattern: pattern.clone(),
                });
            }
            if files_only && !path.is_file() {
                continue;
            }
            if seen.insert(path.clone()) {
                matched.push(MatchedPath { path, base });
            }
            continue;
        }

        let full_pattern = anchored_pattern(root, pattern);
        let entries =
            glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|source| TaskError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;

        for entry in entries {
            let path = without_cur_dir(entry.map_err(|source| TaskError::Glob {
                pattern: pattern.clone(),
                source,
            })?);
            if files_only && !path.is_file() {
                continue;
            }
            if seen.insert(path.clone()) {
                matched.push(MatchedPath {
                    path,
                    base: base.clone(),
                });
            }
        }
    }

    Ok(matched)
}

fn anchored_pattern(root: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let root = Pattern::escape(&root.to_string_lossy());
    format!("{}/{}", root.trim_end_matches('/'), pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, rel).unwrap();
    }

    #[test]
    fn test_glob_base() {
        let cases = vec![
            ("themes/okta/static/fonts/*", "themes/okta/static/fonts"),
            ("dist/js/**/*.min.js", "dist/js"),
            ("css/animate.css", "css"),
            ("*.scss", ""),
            ("animate.css", ""),
            ("a/b[0-9]/c.js", "a"),
        ];

        for (pattern, expected) in cases {
            assert_eq!(glob_base(pattern), PathBuf::from(expected), "pattern {}", pattern);
        }
    }

    #[test]
    fn test_expand_keeps_pattern_order_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "js/vendor/b.js");
        touch(dir.path(), "js/vendor/a.js");
        touch(dir.path(), "js/app.js");

        let patterns = vec![
            "js/app.js".to_string(),
            "js/vendor/*.js".to_string(),
            "js/vendor/a.js".to_string(),
        ];
        let matched = expand_patterns(dir.path(), &patterns, true).unwrap();

        let rel: Vec<PathBuf> = matched
            .iter()
            .map(|m| m.path.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("js/app.js"),
                PathBuf::from("js/vendor/a.js"),
                PathBuf::from("js/vendor/b.js"),
            ]
        );
    }

    #[test]
    fn test_single_star_does_not_cross_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "fonts/a.woff");
        touch(dir.path(), "fonts/nested/b.woff");
        touch(dir.path(), "fonts/.hidden");

        let matched = expand_patterns(dir.path(), &["fonts/*".to_string()], true).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].relative(), PathBuf::from("a.woff"));

        let deep = expand_patterns(dir.path(), &["fonts/**/*".to_string()], true).unwrap();
        let rel: Vec<PathBuf> = deep.iter().map(MatchedPath::relative).collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("a.woff"), PathBuf::from("nested/b.woff")]
        );
    }

    #[test]
    fn test_missing_literal_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = expand_patterns(dir.path(), &["css/animate.css".to_string()], true);
        assert!(matches!(result, Err(TaskError::MissingInput { .. })));
    }

    #[test]
    fn test_wildcard_without_matches_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        let matched = expand_patterns(dir.path(), &["dist/**/*.min.js".to_string()], false).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_relative_root_keeps_bases_and_dedups() {
        // A directory under the working directory, reached through a `./` prefix
        let dir = tempfile::tempdir_in(".").unwrap();
        let root = Path::new(".").join(dir.path().file_name().unwrap());
        touch(&root, "fonts/a.woff");
        touch(&root, "fonts/fa/a.woff");
        touch(&root, "js/a.js");

        let fonts = expand_patterns(&root, &["fonts/**/*".to_string()], true).unwrap();
        let rel: Vec<PathBuf> = fonts.iter().map(MatchedPath::relative).collect();
        assert_eq!(rel, vec![PathBuf::from("a.woff"), PathBuf::from("fa/a.woff")]);

        let scripts = expand_patterns(
            &root,
            &["js/a.js".to_string(), "js/*.js".to_string()],
            true,
        )
        .unwrap();
        assert_eq!(scripts.len(), 1);
    }

    #[test]
    fn test_without_cur_dir() {
        assert_eq!(without_cur_dir(PathBuf::from("./fonts/a.woff")), PathBuf::from("fonts/a.woff"));
        assert_eq!(without_cur_dir(PathBuf::from("./")), PathBuf::new());
        assert_eq!(without_cur_dir(PathBuf::from("/site/./css")), PathBuf::from("/site/css"));
    }

    #[test]
    fn test_root_with_glob_characters_is_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site[1]");
        touch(&root, "css/a.scss");

        let matched = expand_patterns(&root, &["css/*.scss".to_string()], true).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].relative(), PathBuf::from("a.scss"));
    }
}
