use crate::models::NameUrlPair;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<div>` per result with the URL as a link
    #[default]
    Html,
    /// One `name: url` line per result
    Text,
}

impl OutputFormat {
    pub fn render(&self, pairs: &[NameUrlPair]) -> String {
        match self {
            OutputFormat::Html => formatted_list(pairs),
            OutputFormat::Text => text_list(pairs),
        }
    }
}

/// Render pairs as HTML fragments, one per pair in input order.
pub fn formatted_list(pairs: &[NameUrlPair]) -> String {
    pairs
        .iter()
        .map(|pair| {
            let name = escape_html(&pair.name);
            let url = escape_html(&pair.url);
            format!(
                "<div style=\"margin-bottom: 8px;\">{name}: <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: blue;\">{url}</a></div>\n"
            )
        })
        .collect()
}

pub fn text_list(pairs: &[NameUrlPair]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{}: {}\n", pair.name, pair.url))
        .collect()
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pair::test_helpers::mock_pair;

    #[test]
    fn test_empty_input_renders_empty_string() {
        assert_eq!(formatted_list(&[]), "");
        assert_eq!(text_list(&[]), "");
    }

    #[test]
    fn test_single_pair_fragment() {
        let html = formatted_list(&[NameUrlPair::new("Acme", "http://a.test")]);
        assert_eq!(
            html,
            "<div style=\"margin-bottom: 8px;\">Acme: <a href=\"http://a.test\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: blue;\">http://a.test</a></div>\n"
        );
    }

    #[test]
    fn test_one_fragment_per_pair_in_order() {
        let pairs = vec![mock_pair("Gamma"), mock_pair("Alpha"), mock_pair("Beta")];
        let html = formatted_list(&pairs);

        let fragments: Vec<&str> = html.lines().collect();
        assert_eq!(fragments.len(), 3);
        assert!(fragments[0].contains("Gamma: <a href=\"http://gamma.test\""));
        assert!(fragments[1].contains("Alpha: <a href=\"http://alpha.test\""));
        assert!(fragments[2].contains("Beta: <a href=\"http://beta.test\""));
    }

    #[test]
    fn test_name_and_url_are_escaped() {
        let pair = NameUrlPair::new(
            "<script>alert('x')</script>",
            "http://a.test/?q=1&r=\"2\"",
        );
        let html = formatted_list(&[pair]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;: "));
        assert!(html.contains("href=\"http://a.test/?q=1&amp;r=&quot;2&quot;\""));
    }

    #[test]
    fn test_text_list() {
        let pairs = vec![mock_pair("Acme"), mock_pair("Beta")];
        assert_eq!(
            OutputFormat::Text.render(&pairs),
            "Acme: http://acme.test\nBeta: http://beta.test\n"
        );
    }
}
