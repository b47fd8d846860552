use folio::app::grid::ProjectGrid;
use folio::domain::model::{CardSource, Category, CategoryFilter, DisplayCard};
use folio::domain::services::navigation::{GridLayout, NavKey};

fn card(title: &str, description: &str, category: Category) -> DisplayCard {
    DisplayCard {
        title: title.replace('-', " "),
        description: description.to_string(),
        category,
        keywords: format!("{} {}", title, description),
        image: format!("https://og.example/token/someone/{}", title),
        image_alt: title.to_string(),
        link: format!("https://github.com/someone/{}", title),
        link_label: "View on GitHub".to_string(),
        source: CardSource::Repository {
            full_name: format!("someone/{}", title),
        },
    }
}

fn sample_cards() -> Vec<DisplayCard> {
    vec![
        card("image-classifier", "CNN trained on CIFAR.", Category::Ml),
        card("tiny-kernel", "A hobby x86 kernel.", Category::Systems),
        card("portfolio", "Personal site with dark mode.", Category::Web),
        card("arena-alloc", "Bump allocator in C.", Category::Systems),
        card("forecast", "Time series notebooks.", Category::Ml),
        card("Remire.co", "Global hiring platform.", Category::Web),
    ]
}

fn expected_visible(cards: &[DisplayCard], filter: CategoryFilter, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => c.category == category,
        })
        .filter(|(_, c)| {
            c.keywords.to_lowercase().contains(&needle)
                || format!("{} {} {}", c.title, c.description, c.link_label)
                    .to_lowercase()
                    .contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_visible_set_matches_predicate_for_all_combinations() {
    let filters = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Ml),
        CategoryFilter::Only(Category::Systems),
        CategoryFilter::Only(Category::Web),
    ];
    let queries = [
        "", "  ", "kernel", "KERNEL", " c ", "tiny kernel", "tiny-kernel", "github", "notebook",
        "hiring", "nothing-matches-this", "a",
    ];

    let mut grid = ProjectGrid::new(sample_cards());
    for filter in filters {
        for query in queries {
            grid.apply(filter, query);
            assert_eq!(
                grid.visible_indices(),
                expected_visible(grid.cards(), filter, query),
                "filter={} query={:?}",
                filter,
                query
            );
        }
    }
}

#[test]
fn test_systems_with_empty_query_shows_only_systems() {
    let mut grid = ProjectGrid::new(sample_cards());
    grid.select_category("systems".parse().unwrap());
    grid.search("");

    for (index, card) in grid.cards().iter().enumerate() {
        assert_eq!(grid.is_visible(index), card.category == Category::Systems);
    }
}

#[test]
fn test_keyboard_walk_over_filtered_grid() {
    let mut grid = ProjectGrid::new(sample_cards());
    grid.select_category(CategoryFilter::Only(Category::Ml));
    let layout = GridLayout::new(700.0, 320.0);

    let key = |name: &str| name.parse::<NavKey>().unwrap();
    assert_eq!(grid.navigate(key("ArrowRight"), layout), Some(0));
    assert_eq!(grid.navigate(key("ArrowDown"), layout), Some(0));
    assert_eq!(grid.navigate(key("ArrowRight"), layout), Some(4));
    assert_eq!(grid.navigate(key("ArrowUp"), layout), Some(4));
    assert_eq!(grid.navigate(key("ArrowLeft"), layout), Some(0));
}
