use crate::domain::model::Category;

pub fn classify_language(language: Option<&str>) -> Category {
    match language {
        Some("Python") | Some("Jupyter Notebook") => Category::Ml,
        Some("C") | Some("C++") => Category::Systems,
        _ => Category::Web,
    }
}
