use crate::domain::model::{CategoryFilter, DisplayCard};

/// 搜尋字串先去除前後空白再轉小寫；空字串符合所有卡片
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `needle` 必須已經過 [`normalize_query`] 處理
pub fn card_matches(card: &DisplayCard, filter: CategoryFilter, needle: &str) -> bool {
    if !filter.admits(card.category) {
        return false;
    }
    card.keywords.to_lowercase().contains(needle)
        || card.text_content().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CardSource, Category};

    fn card(title: &str, category: Category, keywords: &str) -> DisplayCard {
        DisplayCard {
            title: title.to_string(),
            description: "desc".to_string(),
            category,
            keywords: keywords.to_string(),
            image: String::new(),
            image_alt: title.to_string(),
            link: String::new(),
            link_label: "View on GitHub".to_string(),
            source: CardSource::External,
        }
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let c = card("Parser", Category::Systems, "tiny-parser lexer");
        let needle = normalize_query("  LEXER ");
        assert!(card_matches(&c, CategoryFilter::All, &needle));
    }

    #[test]
    fn test_text_content_also_matches() {
        let c = card("Parser", Category::Systems, "");
        assert!(card_matches(&c, CategoryFilter::All, "github"));
    }

    #[test]
    fn test_category_must_match() {
        let c = card("Parser", Category::Systems, "parser");
        assert!(!card_matches(&c, CategoryFilter::Only(Category::Ml), ""));
        assert!(card_matches(&c, CategoryFilter::Only(Category::Systems), ""));
    }
}
