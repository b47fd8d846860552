//! 專案格線的互動狀態
//!
//! 卡片渲染後就不再變動，篩選只切換可見性；鍵盤焦點只在可見卡片之間移動。

use crate::domain::model::{Category, CategoryFilter, DisplayCard};
use crate::domain::services::filter::{card_matches, normalize_query};
use crate::domain::services::navigation::{next_position, GridLayout, NavKey};

#[derive(Debug, Clone)]
pub struct ProjectGrid {
    cards: Vec<DisplayCard>,
    visible: Vec<bool>,
    filter: CategoryFilter,
    query: String,
    focused: Option<usize>,
}

impl ProjectGrid {
    pub fn new(cards: Vec<DisplayCard>) -> Self {
        let visible = vec![true; cards.len()];
        Self {
            cards,
            visible,
            filter: CategoryFilter::All,
            query: String::new(),
            focused: None,
        }
    }

    pub fn cards(&self) -> &[DisplayCard] {
        &self.cards
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// 切換分類按鈕：沿用目前的搜尋字串
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// 搜尋框輸入：沿用目前的分類
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.refresh();
    }

    pub fn apply(&mut self, filter: CategoryFilter, query: &str) {
        self.filter = filter;
        self.query = query.to_string();
        self.refresh();
    }

    fn refresh(&mut self) {
        let needle = normalize_query(&self.query);
        for (card, visible) in self.cards.iter().zip(self.visible.iter_mut()) {
            *visible = card_matches(card, self.filter, &needle);
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &DisplayCard> {
        self.cards
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(card, visible)| visible.then_some(card))
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }

    /// 滑鼠點選或 Tab 聚焦某張卡片；隱藏的卡片無法聚焦
    pub fn focus(&mut self, index: usize) -> bool {
        if self.is_visible(index) {
            self.focused = Some(index);
            true
        } else {
            false
        }
    }

    /// 依方向鍵移動焦點，回傳新的卡片索引；沒有可見卡片時不動作。
    /// 目前焦點不在可見卡片上時，視為從第一張之前開始。
    pub fn navigate(&mut self, key: NavKey, layout: GridLayout) -> Option<usize> {
        let visible = self.visible_indices();
        let current = self
            .focused
            .and_then(|focused| visible.iter().position(|&i| i == focused));

        let position = next_position(current, key, visible.len(), layout.columns())?;
        let index = visible[position];
        self.focused = Some(index);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CardSource;

    fn card(title: &str, category: Category, keywords: &str) -> DisplayCard {
        DisplayCard {
            title: title.to_string(),
            description: format!("{} description", title),
            category,
            keywords: keywords.to_string(),
            image: String::new(),
            image_alt: title.to_string(),
            link: String::new(),
            link_label: "View on GitHub".to_string(),
            source: CardSource::External,
        }
    }

    fn grid() -> ProjectGrid {
        ProjectGrid::new(vec![
            card("classifier", Category::Ml, "classifier sklearn pipeline"),
            card("kernel", Category::Systems, "kernel scheduler"),
            card("portfolio", Category::Web, "portfolio site"),
            card("allocator", Category::Systems, "allocator arena"),
            card("notebook", Category::Ml, "notebook experiments"),
        ])
    }

    const WIDE: GridLayout = GridLayout {
        grid_width: 960.0,
        card_width: 300.0,
    };

    #[test]
    fn test_everything_visible_initially() {
        let grid = grid();
        assert_eq!(grid.visible_indices(), vec![0, 1, 2, 3, 4]);
        assert_eq!(grid.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_category_only() {
        let mut grid = grid();
        grid.select_category(CategoryFilter::Only(Category::Systems));
        assert_eq!(grid.visible_indices(), vec![1, 3]);
        assert!(grid.visible_cards().all(|c| c.category == Category::Systems));
    }

    #[test]
    fn test_search_keeps_category() {
        let mut grid = grid();
        grid.select_category(CategoryFilter::Only(Category::Ml));
        grid.search("  NoteBook ");
        assert_eq!(grid.visible_indices(), vec![4]);

        grid.select_category(CategoryFilter::All);
        assert_eq!(grid.visible_indices(), vec![4]);
        assert_eq!(grid.query(), "  NoteBook ");
    }

    #[test]
    fn test_search_matches_text_content() {
        let mut grid = grid();
        grid.search("kernel description");
        assert_eq!(grid.visible_indices(), vec![1]);
    }

    #[test]
    fn test_no_match_hides_everything() {
        let mut grid = grid();
        grid.apply(CategoryFilter::Only(Category::Web), "kernel");
        assert!(grid.visible_indices().is_empty());
        assert_eq!(grid.navigate(NavKey::Right, WIDE), None);
    }

    #[test]
    fn test_filter_never_changes_category() {
        let mut grid = grid();
        let before: Vec<_> = grid.cards().iter().map(|c| c.category).collect();
        grid.apply(CategoryFilter::Only(Category::Ml), "x");
        let after: Vec<_> = grid.cards().iter().map(|c| c.category).collect();
        assert_eq!(before, after);
        assert_eq!(grid.count_in(Category::Systems), 2);
    }

    #[test]
    fn test_navigation_skips_hidden_cards() {
        let mut grid = grid();
        grid.select_category(CategoryFilter::Only(Category::Systems));

        assert_eq!(grid.navigate(NavKey::Right, WIDE), Some(1));
        assert_eq!(grid.navigate(NavKey::Right, WIDE), Some(3));
        assert_eq!(grid.navigate(NavKey::Right, WIDE), Some(1));
        assert_eq!(grid.navigate(NavKey::Left, WIDE), Some(3));
    }

    #[test]
    fn test_vertical_navigation_uses_columns() {
        let mut grid = grid();
        assert!(grid.focus(1));

        // 960 / 300 => 3 欄
        assert_eq!(grid.navigate(NavKey::Down, WIDE), Some(4));
        assert_eq!(grid.navigate(NavKey::Down, WIDE), Some(2));
        assert_eq!(grid.navigate(NavKey::Up, WIDE), Some(4));
    }

    #[test]
    fn test_hidden_focus_restarts_from_front() {
        let mut grid = grid();
        grid.focus(2);
        grid.select_category(CategoryFilter::Only(Category::Ml));

        assert!(!grid.focus(2));
        assert_eq!(grid.navigate(NavKey::Right, WIDE), Some(0));
    }
}
