//! README 轉一句話描述
//!
//! 移除 Markdown/HTML 標記後，取第一個長度超過 20 字元的句子，
//! 超過 140 字元就截斷成 137 字元加上刪節號。

use regex::Regex;
use std::sync::LazyLock;

const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SUMMARY_CHARS: usize = 140;
const TRUNCATED_CHARS: usize = 137;
const ELLIPSIS: char = '…';

static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#.*$").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\|.*\|").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s").unwrap());

/// 清掉圖片、連結語法、標題、標籤、註解與表格，並壓縮空白
pub fn strip_markup(markdown: &str) -> String {
    let text = IMAGE.replace_all(markdown, "");
    let text = LINK.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    let text = COMMENT.replace_all(&text, "");
    let text = TABLE_ROW.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

pub fn summarize_readme(markdown: &str) -> Option<String> {
    let cleaned = strip_markup(markdown);

    let sentence = SENTENCE_END
        .split(&cleaned)
        .find(|s| s.chars().count() > MIN_SENTENCE_CHARS)?
        .trim();

    Some(finish_sentence(sentence))
}

fn finish_sentence(sentence: &str) -> String {
    if sentence.chars().count() > MAX_SUMMARY_CHARS {
        let mut truncated: String = sentence.chars().take(TRUNCATED_CHARS).collect();
        truncated.push(ELLIPSIS);
        truncated
    } else if sentence.ends_with(['.', '!', '?']) {
        sentence.to_string()
    } else {
        format!("{}.", sentence)
    }
}
