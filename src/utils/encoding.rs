use url::form_urlencoded;

/// form 編碼會跳脫、但 URL 元件保留原樣的字元
const UNRESERVED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%7E", "~"),
];

/// 百分比編碼單一 URL 元件，空白編成 `%20` 而不是 `+`
pub fn encode_component(value: &str) -> String {
    // byte_serialize 會把 '+' 本身編成 %2B，所以剩下的 '+' 都代表空白
    let encoded = form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20");

    // '%' 一律編成 %25，所以這些序列只可能來自對應的字元
    UNRESERVED_MARKS
        .iter()
        .fold(encoded, |acc, (escaped, mark)| acc.replace(escaped, mark))
}
