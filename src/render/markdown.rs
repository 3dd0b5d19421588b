use markdown::Options;

use super::RenderError;

/// Converts Markdown (GFM) to HTML that is safe to inject into a page.
///
/// Raw HTML in the source is escaped and links or images with unsafe
/// protocols (`javascript:`, `data:` …) lose their URL.
pub fn to_safe_html(input: &str) -> Result<String, RenderError> {
    let mut options = Options::gfm();
    options.compile.allow_dangerous_html = false;
    options.compile.allow_dangerous_protocol = false;

    markdown::to_html_with_options(input, &options)
        .map_err(|e| RenderError::Markdown(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_emphasis() {
        let html = to_safe_html("# Title\n\nSome *text*").unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_gfm_table() {
        let html = to_safe_html("| a | b |\n|---|---|\n| 1 | 2 |").unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = to_safe_html("<script>alert(1)</script>").unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_javascript_link_is_dropped() {
        let html = to_safe_html("[click](javascript:alert(1))").unwrap();
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(to_safe_html("").unwrap(), "");
    }
}
