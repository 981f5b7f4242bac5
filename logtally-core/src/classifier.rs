/// Severity category assigned to a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Warning,
    Info,
    /// No keyword matched. Never reported.
    None,
}

/// Keywords in precedence order; the first one found wins.
const KEYWORDS: [(&[u8], Category); 3] = [
    (b"ERROR", Category::Error),
    (b"WARNING", Category::Warning),
    (b"INFO", Category::Info),
];

impl Category {
    /// Report label, `None` for the unreported category.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Category::Error => Some("ERROR"),
            Category::Warning => Some("WARNING"),
            Category::Info => Some("INFO"),
            Category::None => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().unwrap_or("NONE"))
    }
}

/// Classifies one line (without its terminator) by case-sensitive substring match.
pub fn classify(line: &[u8]) -> Category {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| contains(line, keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::None)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack.windows(needle.len()).any(|w| w == needle)
}
