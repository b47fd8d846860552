use crate::domain::model::{DisplayCard, RenderResult};
use chrono::Datelike;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_card(card: &DisplayCard) -> String {
    format!(
        r#"<article class="project-card" data-category="{category}" data-keywords="{keywords}" tabindex="0">
  <img src="{image}" alt="{alt}" loading="lazy">
  <div class="project-info">
    <h3>{title}</h3>
    <p>{description}</p>
    <a href="{link}" class="project-link" target="_blank" rel="noopener">{label}</a>
  </div>
</article>"#,
        category = card.category,
        keywords = html_escape(&card.keywords),
        image = html_escape(&card.image),
        alt = html_escape(&card.image_alt),
        title = html_escape(&card.title),
        description = html_escape(&card.description),
        link = html_escape(&card.link),
        label = html_escape(&card.link_label),
    )
}

/// 專案格線的 HTML 片段，頁尾註解帶上產生年份與計數器目標
pub fn render_grid(result: &RenderResult) -> String {
    let mut html = String::new();
    for card in &result.cards {
        html.push_str(&render_card(card));
        html.push('\n');
    }
    html.push_str(&format!(
        "<!-- {} projects, generated {} -->\n",
        result.total_displayed,
        result.generated_at.year()
    ));
    html
}
