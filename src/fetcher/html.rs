//! HTML → 正規化テキスト

use scraper::Html;

/// タグを除去して全テキストノードを連結し、小文字化する
///
/// 空白の整形はしない（パーサが返すテキストをそのまま使う）。
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_and_lowercases() {
        let html = "<html><head><title>ACME</title></head>\
                    <body><h1>Probiotic</h1><p>Gut <b>Health</b></p></body></html>";
        let text = html_to_text(html);

        assert!(text.contains("acme"));
        assert!(text.contains("probiotic"));
        assert!(text.contains("gut health"));
        assert!(!text.contains('<'));
        assert!(!text.contains("body"));
    }

    #[test]
    fn test_attribute_values_are_not_text() {
        let html = r#"<html><body><img alt="probiotic"><a href="/gut-health">Link</a></body></html>"#;
        let text = html_to_text(html);

        assert!(!text.contains("probiotic"));
        assert!(!text.contains("gut-health"));
        assert_eq!(text.trim(), "link");
    }

    #[test]
    fn test_entities_are_decoded() {
        let text = html_to_text("<p>Women&#39;s Health &amp; Wellness</p>");
        assert!(text.contains("women's health & wellness"));
    }

    #[test]
    fn test_plain_text_and_empty() {
        assert_eq!(html_to_text("FORTIFIED"), "fortified");
        assert_eq!(html_to_text(""), "");
    }
}
