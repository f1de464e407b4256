//! Language catalog: the languages the reviewer knows how to talk about.
//!
//! Each language carries a machine `value` (sent to the model in the review
//! prompt) and a human `label` (shown to the user and used in the fix prompt).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    Python,
    Java,
    CSharp,
    Cpp,
    C,
    TypeScript,
    Php,
    Ruby,
    Go,
    Swift,
    Kotlin,
    Rust,
    Dart,
    Sql,
    Html,
    Css,
    R,
    Perl,
    Shell,
}

const ALL: [Language; 20] = [
    Language::JavaScript,
    Language::Python,
    Language::Java,
    Language::CSharp,
    Language::Cpp,
    Language::C,
    Language::TypeScript,
    Language::Php,
    Language::Ruby,
    Language::Go,
    Language::Swift,
    Language::Kotlin,
    Language::Rust,
    Language::Dart,
    Language::Sql,
    Language::Html,
    Language::Css,
    Language::R,
    Language::Perl,
    Language::Shell,
];

impl Language {
    /// The full catalog, in selector order.
    pub fn all() -> &'static [Language] {
        &ALL
    }

    /// Machine identifier (selector value).
    pub fn value(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::TypeScript => "typescript",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
            Language::Dart => "dart",
            Language::Sql => "sql",
            Language::Html => "html",
            Language::Css => "css",
            Language::R => "r",
            Language::Perl => "perl",
            Language::Shell => "shell",
        }
    }

    /// Human-readable name (selector label).
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::TypeScript => "TypeScript",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Rust => "Rust",
            Language::Dart => "Dart",
            Language::Sql => "SQL",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::R => "R",
            Language::Perl => "Perl",
            Language::Shell => "Shell Script",
        }
    }

    /// Guess a language from a file extension (lowercased, without the dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        let lang = match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Language::JavaScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cs" => Language::CSharp,
            "cpp" | "cc" | "cxx" | "hpp" => Language::Cpp,
            "c" | "h" => Language::C,
            "ts" | "tsx" => Language::TypeScript,
            "php" => Language::Php,
            "rb" => Language::Ruby,
            "go" => Language::Go,
            "swift" => Language::Swift,
            "kt" | "kts" => Language::Kotlin,
            "rs" => Language::Rust,
            "dart" => Language::Dart,
            "sql" => Language::Sql,
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "r" => Language::R,
            "pl" | "pm" => Language::Perl,
            "sh" | "bash" | "zsh" => Language::Shell,
            _ => return None,
        };
        Some(lang)
    }
}

impl std::str::FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" => Ok(Language::JavaScript),
            "python" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "csharp" | "c#" => Ok(Language::CSharp),
            "cpp" | "c++" => Ok(Language::Cpp),
            "c" => Ok(Language::C),
            "typescript" => Ok(Language::TypeScript),
            "php" => Ok(Language::Php),
            "ruby" => Ok(Language::Ruby),
            "go" => Ok(Language::Go),
            "swift" => Ok(Language::Swift),
            "kotlin" => Ok(Language::Kotlin),
            "rust" => Ok(Language::Rust),
            "dart" => Ok(Language::Dart),
            "sql" => Ok(Language::Sql),
            "html" => Ok(Language::Html),
            "css" => Ok(Language::Css),
            "r" => Ok(Language::R),
            "perl" => Ok(Language::Perl),
            "shell" | "sh" | "shell script" => Ok(Language::Shell),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_entries_and_starts_with_javascript() {
        assert_eq!(Language::all().len(), 20);
        assert_eq!(Language::all()[0], Language::JavaScript);
        assert_eq!(Language::default(), Language::JavaScript);
    }

    #[test]
    fn value_and_label_pairs() {
        assert_eq!(Language::CSharp.value(), "csharp");
        assert_eq!(Language::CSharp.label(), "C#");
        assert_eq!(Language::Shell.value(), "shell");
        assert_eq!(Language::Shell.label(), "Shell Script");
    }

    #[test]
    fn parses_values_case_insensitively() {
        assert_eq!("Rust".parse::<Language>(), Ok(Language::Rust));
        assert_eq!("c++".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!("brainfuck".parse::<Language>(), Err(()));
    }

    #[test]
    fn guesses_from_extension() {
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("TSX"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("xyz"), None);
    }
}
