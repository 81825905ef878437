//! Static category configuration and display metadata.

use once_cell::sync::Lazy;

/// Name of the category used when a stored name matches nothing in the
/// fixed list. Referenced by name, never by table position.
pub const FALLBACK_CATEGORY: &str = "Other";

/// One classification bucket with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Single-glyph marker rendered next to the category.
    pub icon: char,
    /// Hex color, e.g. `#D4AF37`.
    pub color: &'static str,
    /// RGB decoded from `color` for terminal truecolor output.
    pub rgb: (u8, u8, u8),
}

const CATEGORY_TABLE: [(&str, char, &str); 6] = [
    ("Food & Dining", '◆', "#D4AF37"),
    ("Transport", '▲', "#C0C0C0"),
    ("Shopping", '■', "#B76E79"),
    ("Entertainment", '●', "#7B8D8E"),
    ("Bills & Utilities", '◈', "#8B7355"),
    ("Other", '○', "#A9A9A9"),
];

/// The fixed, ordered category list. Not user-editable.
pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    CATEGORY_TABLE
        .iter()
        .map(|&(name, icon, color)| Category {
            name,
            icon,
            color,
            rgb: hex_rgb(color),
        })
        .collect()
});

static FALLBACK: Lazy<&'static Category> = Lazy::new(|| {
    CATEGORIES
        .iter()
        .find(|category| category.name == FALLBACK_CATEGORY)
        .expect("fallback category present in the fixed table")
});

/// Exact-match lookup; unknown names resolve to the fallback metadata.
pub fn resolve(name: &str) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|category| category.name == name)
        .unwrap_or_else(|| *FALLBACK)
}

/// The category a fresh draft starts out with.
pub fn default_draft_category() -> &'static str {
    CATEGORIES[0].name
}

fn hex_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim_start_matches('#');
    let channel = |range| u8::from_str_radix(&digits[range], 16).unwrap_or(0xA9);
    (channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_six_unique_categories() {
        assert_eq!(CATEGORIES.len(), 6);
        let mut names: Vec<_> = CATEGORIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn resolve_returns_exact_metadata() {
        let transport = resolve("Transport");
        assert_eq!(transport.icon, '▲');
        assert_eq!(transport.color, "#C0C0C0");
        assert_eq!(transport.rgb, (0xC0, 0xC0, 0xC0));
    }

    #[test]
    fn resolve_falls_back_for_unknown_names() {
        let unknown = resolve("Nonexistent");
        assert_eq!(unknown.name, FALLBACK_CATEGORY);
        assert_eq!(unknown.icon, '○');
        assert_eq!(unknown.color, "#A9A9A9");
    }

    #[test]
    fn fallback_is_found_by_name_not_position() {
        let by_name = resolve(FALLBACK_CATEGORY);
        assert_eq!(by_name.name, "Other");
    }

    #[test]
    fn draft_default_is_first_category() {
        assert_eq!(default_draft_category(), "Food & Dining");
    }
}
