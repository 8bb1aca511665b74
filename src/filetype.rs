//! Language detection from a file name's extension.

use std::fmt;
use std::path::Path;

/// Language of a changed file, as far as its extension tells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    JavaScript,
    TypeScript,
    Java,
    Python,
    Ruby,
    Php,
    Html,
    Css,
    Json,
    Xml,
    Yaml,
    Markdown,
    Cpp,
    C,
    CSharp,
    Go,
    Rust,
    Kotlin,
    Swift,
    Text,
}

impl FileType {
    /// Detect from the extension of `path`, case-insensitively.
    ///
    /// ```
    /// use diffpane::filetype::FileType;
    ///
    /// assert_eq!(FileType::from_path("src/App.TSX"), FileType::TypeScript);
    /// assert_eq!(FileType::from_path("Makefile"), FileType::Text);
    /// ```
    pub fn from_path(path: &str) -> Self {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| Self::from_extension(&ext.to_ascii_lowercase()))
            .unwrap_or(FileType::Text)
    }

    fn from_extension(ext: &str) -> Self {
        match ext {
            "js" | "jsx" => FileType::JavaScript,
            "ts" | "tsx" => FileType::TypeScript,
            "java" => FileType::Java,
            "py" => FileType::Python,
            "rb" => FileType::Ruby,
            "php" => FileType::Php,
            "html" => FileType::Html,
            "css" | "scss" | "sass" => FileType::Css,
            "json" => FileType::Json,
            "xml" => FileType::Xml,
            "yml" | "yaml" => FileType::Yaml,
            "md" => FileType::Markdown,
            "cpp" => FileType::Cpp,
            "c" | "h" => FileType::C,
            "cs" => FileType::CSharp,
            "go" => FileType::Go,
            "rs" => FileType::Rust,
            "kt" => FileType::Kotlin,
            "swift" => FileType::Swift,
            _ => FileType::Text,
        }
    }

    /// Lowercase language name
    pub fn name(self) -> &'static str {
        match self {
            FileType::JavaScript => "javascript",
            FileType::TypeScript => "typescript",
            FileType::Java => "java",
            FileType::Python => "python",
            FileType::Ruby => "ruby",
            FileType::Php => "php",
            FileType::Html => "html",
            FileType::Css => "css",
            FileType::Json => "json",
            FileType::Xml => "xml",
            FileType::Yaml => "yaml",
            FileType::Markdown => "markdown",
            FileType::Cpp => "cpp",
            FileType::C => "c",
            FileType::CSharp => "csharp",
            FileType::Go => "go",
            FileType::Rust => "rust",
            FileType::Kotlin => "kotlin",
            FileType::Swift => "swift",
            FileType::Text => "text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileType::TypeScript => "📘",
            FileType::Java => "☕",
            FileType::Python => "🐍",
            FileType::Html => "🌐",
            FileType::Css => "🎨",
            FileType::Json => "📋",
            FileType::Markdown => "📝",
            _ => "📄",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn detect_common_extensions() {
        assert_eq!(FileType::from_path("src/components/Button.js"), FileType::JavaScript);
        assert_eq!(FileType::from_path("lib.rs"), FileType::Rust);
        assert_eq!(FileType::from_path("styles/site.scss"), FileType::Css);
        assert_eq!(FileType::from_path("include/util.h"), FileType::C);
        assert_eq!(FileType::from_path(".github/ci.yml"), FileType::Yaml);
    }

    #[test]
    fn detect_is_case_insensitive() {
        assert_eq!(FileType::from_path("README.MD"), FileType::Markdown);
    }

    #[test]
    fn unknown_or_missing_extension_is_text() {
        assert_eq!(FileType::from_path(""), FileType::Text);
        assert_eq!(FileType::from_path("Dockerfile"), FileType::Text);
        assert_eq!(FileType::from_path("archive.tar.zst"), FileType::Text);
    }

    #[test]
    fn names_and_icons() {
        assert_eq!(FileType::CSharp.to_string(), "csharp");
        assert_eq!(FileType::Python.icon(), "🐍");
        assert_eq!(FileType::Go.icon(), "📄");
    }
}
