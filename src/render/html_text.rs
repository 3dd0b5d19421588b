//! Plain-text view of rendered HTML.
//!
//! The HTML handled here is the output of [`super::markdown::to_safe_html`],
//! so a small tag scanner is enough: block tags start a new block, inline
//! tags are dropped, and the handful of entities the renderer emits are
//! decoded.

/// Kind of a text block, used by the PDF layout to pick a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    ListItem,
    Code,
    TableRow,
}

/// One block of plain text extracted from HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub kind: BlockKind,
    pub text: String,
}

struct Scanner {
    blocks: Vec<TextBlock>,
    kind: BlockKind,
    text: String,
    preformatted: bool,
}

impl Scanner {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            kind: BlockKind::Paragraph,
            text: String::new(),
            preformatted: false,
        }
    }

    fn flush(&mut self) {
        let text = if self.preformatted {
            self.text.trim_matches('\n').to_string()
        } else {
            self.text.trim().to_string()
        };
        if !text.is_empty() {
            self.blocks.push(TextBlock {
                kind: self.kind,
                text,
            });
        }
        self.text.clear();
        self.kind = BlockKind::Paragraph;
    }

    fn push_text(&mut self, raw: &str) {
        let decoded = decode_entities(raw);
        if self.preformatted {
            self.text.push_str(&decoded);
            return;
        }
        for c in decoded.chars() {
            if c.is_whitespace() {
                if !self.text.is_empty() && !self.text.ends_with(' ') {
                    self.text.push(' ');
                }
            } else {
                self.text.push(c);
            }
        }
    }

    fn tag(&mut self, tag: &str) {
        let closing = tag.starts_with('/');
        let name: String = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match name.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                if !closing {
                    let level = name.as_bytes()[1] - b'0';
                    self.kind = BlockKind::Heading(level);
                }
            }
            "li" => {
                self.flush();
                if !closing {
                    self.kind = BlockKind::ListItem;
                }
            }
            "pre" => {
                self.flush();
                self.preformatted = !closing;
                if !closing {
                    self.kind = BlockKind::Code;
                }
            }
            "tr" => {
                self.flush();
                if !closing {
                    self.kind = BlockKind::TableRow;
                }
            }
            "td" | "th" if closing => self.text.push_str(" | "),
            "br" => {
                if self.preformatted {
                    self.text.push('\n');
                } else {
                    self.flush();
                }
            }
            "p" | "div" | "blockquote" | "ul" | "ol" | "table" | "thead" | "tbody" | "hr" => {
                self.flush();
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<TextBlock> {
        self.flush();
        for block in &mut self.blocks {
            if block.kind == BlockKind::TableRow {
                let trimmed = block.text.trim_end_matches(" | ").trim_end_matches(" |");
                block.text = trimmed.to_string();
            }
        }
        self.blocks
    }
}

/// Splits HTML into text blocks.
pub fn text_blocks(html: &str) -> Vec<TextBlock> {
    let mut scanner = Scanner::new();
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        scanner.push_text(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => {
                scanner.tag(&rest[open + 1..open + close]);
                rest = &rest[open + close + 1..];
            }
            None => {
                scanner.push_text(&rest[open..]);
                rest = "";
            }
        }
    }
    scanner.push_text(rest);

    scanner.finish()
}

/// Plain text of an HTML fragment, one block per line.
pub fn plain_text(html: &str) -> String {
    text_blocks(html)
        .into_iter()
        .map(|block| match block.kind {
            BlockKind::ListItem => format!("- {}", block.text),
            _ => block.text,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let blocks = text_blocks("<h1>Title</h1>\n<p>Hello <em>world</em></p>");
        assert_eq!(
            blocks,
            vec![
                TextBlock {
                    kind: BlockKind::Heading(1),
                    text: "Title".to_string()
                },
                TextBlock {
                    kind: BlockKind::Paragraph,
                    text: "Hello world".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_list_items() {
        let text = plain_text("<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
        assert_eq!(text, "- one\n- two");
    }

    #[test]
    fn test_code_block_keeps_newlines() {
        let blocks = text_blocks("<pre><code class=\"language-sql\">SELECT 1;\nSELECT 2;\n</code></pre>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Code);
        assert_eq!(blocks[0].text, "SELECT 1;\nSELECT 2;");
    }

    #[test]
    fn test_entities_decoded_once() {
        assert_eq!(plain_text("<p>a &lt; b &amp;&amp; c &amp;lt; d</p>"), "a < b && c &lt; d");
    }

    #[test]
    fn test_table_rows() {
        let html = "<table>\n<thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n<tbody>\n<tr>\n<td>1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>";
        assert_eq!(plain_text(html), "a | b\n1 | 2");
    }

    #[test]
    fn test_unclosed_tag_is_text() {
        assert_eq!(plain_text("1 < 2"), "1 < 2");
    }
}
