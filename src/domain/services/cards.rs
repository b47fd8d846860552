use crate::domain::model::{
    CardSource, Category, DisplayCard, ExternalProjectEntry, RepositoryRecord,
};
use crate::domain::services::category::classify_language;
use rand::Rng;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 13;
pub const REPOSITORY_LINK_LABEL: &str = "View on GitHub";

/// 預覽圖網址的快取破壞參數，小寫 base-36
pub fn cache_bust_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

pub fn repository_preview_url(opengraph_base: &str, token: &str, full_name: &str) -> String {
    format!("{}/{}/{}", opengraph_base.trim_end_matches('/'), token, full_name)
}

pub fn display_title(repository_name: &str) -> String {
    repository_name.replace('-', " ")
}

pub fn repository_card(
    repository: &RepositoryRecord,
    description: String,
    image: String,
) -> DisplayCard {
    DisplayCard {
        title: display_title(&repository.name),
        keywords: format!("{} {}", repository.name, description),
        description,
        category: classify_language(repository.language.as_deref()),
        image,
        image_alt: repository.name.clone(),
        link: repository.html_url.clone(),
        link_label: REPOSITORY_LINK_LABEL.to_string(),
        source: CardSource::Repository {
            full_name: repository.full_name.clone(),
        },
    }
}

// 外部專案一律歸類為 web
pub fn external_card(entry: &ExternalProjectEntry, image: String) -> DisplayCard {
    DisplayCard {
        title: entry.title.clone(),
        description: entry.description.clone(),
        category: Category::Web,
        keywords: format!("{} {}", entry.title, entry.description),
        image,
        image_alt: entry.title.clone(),
        link: entry.url.clone(),
        link_label: entry.link_label.clone(),
        source: CardSource::External,
    }
}
