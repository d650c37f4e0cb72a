//! Rendering of post bodies (HTML) as styled terminal text.
//!
//! Only the subset produced by the blog editor is understood: headings,
//! paragraphs, lists, links, emphasis, code and line breaks. Unknown tags
//! are dropped while their text is kept; `script` and `style` are dropped
//! entirely.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{BODY_TEXT, CODE_TEXT, HEADING_TEXT, LINK_TEXT};

/// Rendered body plus the link targets referenced as `[n]` markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Open {
        name: String,
        href: Option<String>,
        self_closing: bool,
    },
    Close(String),
}

pub fn render_html(html: &str) -> RichText {
    let mut renderer = Renderer::new();
    for token in tokenize(html) {
        renderer.token(token);
    }
    renderer.finish()
}

fn tokenize(html: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = html;

    while !rest.is_empty() {
        if let Some(comment) = rest.strip_prefix("<!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        if starts_tag(rest) {
            match rest.find('>') {
                Some(end) => {
                    if let Some(token) = parse_tag(&rest[1..end]) {
                        tokens.push(token);
                    }
                    rest = &rest[end + 1..];
                }
                None => {
                    tokens.push(Token::Text(rest.to_string()));
                    break;
                }
            }
            continue;
        }

        // A '<' that does not open a tag is literal text.
        let skip = usize::from(rest.starts_with('<'));
        let end = rest[skip..]
            .find('<')
            .map(|idx| idx + skip)
            .unwrap_or(rest.len());
        tokens.push(Token::Text(rest[..end].to_string()));
        rest = &rest[end..];
    }

    tokens
}

fn starts_tag(input: &str) -> bool {
    let mut chars = input.chars();
    chars.next() == Some('<')
        && matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!')
}

fn parse_tag(inner: &str) -> Option<Token> {
    let inner = inner.trim();
    if inner.starts_with('!') || inner.starts_with('?') {
        return None;
    }

    if let Some(closing) = inner.strip_prefix('/') {
        let name = tag_name(closing);
        return (!name.is_empty()).then_some(Token::Close(name));
    }

    let self_closing = inner.ends_with('/');
    let name = tag_name(inner);
    if name.is_empty() {
        return None;
    }
    let href = if name == "a" {
        attribute(inner, "href")
    } else {
        None
    };

    Some(Token::Open {
        name,
        href,
        self_closing,
    })
}

/// Everything up to whitespace or `/`. A name with stray characters
/// (`<b</p>` yields `b<`) matches no known tag and is dropped.
fn tag_name(raw: &str) -> String {
    raw.trim_start()
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '/')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn attribute(inner: &str, attr: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `inner`.
    let lowered = inner.to_ascii_lowercase();
    let needle = format!("{}=", attr);
    let start = lowered.find(&needle)? + needle.len();
    let value = inner[start..].trim_start();

    let raw = match value.chars().next()? {
        quote @ ('"' | '\'') => {
            let body = &value[1..];
            &body[..body.find(quote).unwrap_or(body.len())]
        }
        _ => {
            let end = value
                .find(|c: char| c.is_whitespace() || c == '/')
                .unwrap_or(value.len());
            &value[..end]
        }
    };

    let decoded = decode_entities(raw.trim());
    (!decoded.is_empty()).then_some(decoded)
}

/// Decodes the named entities the editor emits plus numeric references.
/// Unknown entities are left as written.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let decoded = candidate
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| entity(&candidate[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    if let Some(numeric) = name.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "ccedil" => 'ç',
        "Ccedil" => 'Ç',
        "ouml" => 'ö',
        "Ouml" => 'Ö',
        "uuml" => 'ü',
        "Uuml" => 'Ü',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "laquo" => '«',
        "raquo" => '»',
        _ => return None,
    };
    Some(c)
}

#[derive(Debug, Clone, Copy)]
enum ListKind {
    Bullet,
    Ordered(usize),
}

/// One open element that changes the text style.
#[derive(Debug, Clone)]
struct StyleFrame {
    tag: String,
    style: Style,
    block: bool,
    /// Target of an open `<a>`.
    href: Option<String>,
}

struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<StyleFrame>,
    lists: Vec<ListKind>,
    links: Vec<String>,
    skip_depth: usize,
}

impl Renderer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            styles: Vec::new(),
            lists: Vec::new(),
            links: Vec::new(),
            skip_depth: 0,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .map_or_else(|| Style::default().fg(BODY_TEXT), |frame| frame.style)
    }

    fn in_pre(&self) -> bool {
        self.styles.iter().any(|frame| frame.tag == "pre")
    }

    fn push_style(&mut self, tag: &str, patch: Style, block: bool, href: Option<String>) {
        let style = self.style().patch(patch);
        self.styles.push(StyleFrame {
            tag: tag.to_string(),
            style,
            block,
            href,
        });
    }

    /// Pops `frame`, emitting the link marker of an `<a>`.
    fn retire(&mut self, frame: StyleFrame) {
        if let Some(href) = frame.href {
            self.links.push(href);
            let marker = format!("[{}]", self.links.len());
            self.current.push(Span::styled(
                marker,
                Style::default().fg(LINK_TEXT).add_modifier(Modifier::DIM),
            ));
        }
    }

    /// Inline styles never cross a block boundary.
    fn close_inline(&mut self) {
        while self.styles.last().is_some_and(|frame| !frame.block) {
            if let Some(frame) = self.styles.pop() {
                self.retire(frame);
            }
        }
    }

    /// Closes the innermost open `tag` and everything opened after it.
    /// Inline tags only match inside the current block; unmatched closes
    /// are ignored.
    fn close_frame(&mut self, tag: &str, block: bool) {
        let found = self
            .styles
            .iter()
            .rev()
            .take_while(|frame| block || !frame.block)
            .position(|frame| frame.tag == tag);
        let Some(depth) = found else {
            return;
        };
        let keep = self.styles.len() - depth - 1;
        while self.styles.len() > keep {
            if let Some(frame) = self.styles.pop() {
                self.retire(frame);
            }
        }
    }

    fn token(&mut self, token: Token) {
        match token {
            Token::Open { name, .. } if self.skip_depth > 0 => {
                if is_skipped(&name) {
                    self.skip_depth += 1;
                }
            }
            Token::Close(name) if self.skip_depth > 0 => {
                if is_skipped(&name) {
                    self.skip_depth -= 1;
                }
            }
            Token::Text(_) if self.skip_depth > 0 => {}
            Token::Text(text) => self.text(&text),
            Token::Open {
                name,
                href,
                self_closing,
            } => self.open(&name, href, self_closing),
            Token::Close(name) => self.close(&name),
        }
    }

    fn open(&mut self, name: &str, href: Option<String>, self_closing: bool) {
        if is_skipped(name) {
            if !self_closing {
                self.skip_depth += 1;
            }
            return;
        }
        if is_block(name) {
            self.close_inline();
        }

        match name {
            "br" => self.line_break(),
            "hr" => {
                self.paragraph_break();
                self.lines.push(Line::from(Span::styled(
                    "────────",
                    Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM),
                )));
                self.paragraph_break();
            }
            "p" | "div" | "blockquote" | "section" | "article" | "figure" => {
                self.paragraph_break()
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.paragraph_break();
                self.push_style(name, heading_style(name), true, None);
            }
            "pre" => {
                self.paragraph_break();
                self.push_style(name, Style::default().fg(CODE_TEXT), true, None);
            }
            "ul" => {
                self.flush_line();
                self.lists.push(ListKind::Bullet);
            }
            "ol" => {
                self.flush_line();
                self.lists.push(ListKind::Ordered(0));
            }
            "li" => {
                self.flush_line();
                let depth = self.lists.len().max(1);
                let marker = match self.lists.last_mut() {
                    Some(ListKind::Ordered(n)) => {
                        *n += 1;
                        format!("{}. ", n)
                    }
                    _ => "• ".to_string(),
                };
                let indent = "  ".repeat(depth - 1);
                self.current
                    .push(Span::styled(format!("{}{}", indent, marker), self.style()));
            }
            _ if self_closing => {}
            "strong" | "b" => {
                self.push_style(name, Style::default().add_modifier(Modifier::BOLD), false, None)
            }
            "em" | "i" => {
                self.push_style(name, Style::default().add_modifier(Modifier::ITALIC), false, None)
            }
            "u" => self.push_style(
                name,
                Style::default().add_modifier(Modifier::UNDERLINED),
                false,
                None,
            ),
            "code" => self.push_style(name, Style::default().fg(CODE_TEXT), false, None),
            "a" => self.push_style(
                name,
                Style::default()
                    .fg(LINK_TEXT)
                    .add_modifier(Modifier::UNDERLINED),
                false,
                href,
            ),
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        if is_block(name) {
            self.close_inline();
        }

        match name {
            "p" | "div" | "blockquote" | "section" | "article" | "figure" => {
                self.paragraph_break()
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "pre" => {
                self.close_frame(name, true);
                self.paragraph_break();
            }
            "ul" | "ol" => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.paragraph_break();
                }
            }
            "li" => self.flush_line(),
            "strong" | "b" | "em" | "i" | "u" | "code" | "a" => self.close_frame(name, false),
            _ => {}
        }
    }

    fn text(&mut self, raw: &str) {
        let decoded = decode_entities(raw);

        if self.in_pre() {
            let mut parts = decoded.split('\n');
            if let Some(first) = parts.next() {
                self.push_text(first.to_string());
            }
            for part in parts {
                self.line_break();
                self.push_text(part.to_string());
            }
            return;
        }

        let mut collapsed = String::with_capacity(decoded.len());
        let mut in_space = false;
        for c in decoded.chars() {
            if c.is_whitespace() {
                if !in_space {
                    collapsed.push(' ');
                }
                in_space = true;
            } else {
                collapsed.push(c);
                in_space = false;
            }
        }

        let line_has_text = self
            .current
            .iter()
            .any(|span| !span.content.trim().is_empty());
        let text = if !line_has_text || self.ends_with_space() {
            collapsed.trim_start().to_string()
        } else {
            collapsed
        };
        self.push_text(text);
    }

    fn ends_with_space(&self) -> bool {
        self.current
            .last()
            .is_some_and(|span| span.content.ends_with(' '))
    }

    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let style = self.style();
        self.current.push(Span::styled(text, style));
    }

    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn line_break(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn paragraph_break(&mut self) {
        self.flush_line();
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> RichText {
        while let Some(frame) = self.styles.pop() {
            self.retire(frame);
        }
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        RichText {
            lines: self.lines,
            links: self.links,
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "blockquote"
            | "section"
            | "article"
            | "figure"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "pre"
            | "ul"
            | "ol"
            | "li"
            | "hr"
    )
}

fn is_skipped(name: &str) -> bool {
    matches!(name, "script" | "style" | "head")
}

fn heading_style(name: &str) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match name {
        "h1" => style.fg(HEADING_TEXT).add_modifier(Modifier::UNDERLINED),
        "h2" | "h3" => style.fg(HEADING_TEXT),
        _ => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &RichText) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let text = render_html("<p>Birinci</p><p>İkinci</p>");
        assert_eq!(plain(&text), vec!["Birinci", "", "İkinci"]);
    }

    #[test]
    fn whitespace_is_collapsed() {
        let text = render_html("<p>  çok\n   boşluk  var </p>");
        assert_eq!(plain(&text), vec!["çok boşluk var "]);
    }

    #[test]
    fn heading_is_bold() {
        let text = render_html("<h2>Başlık</h2><p>metin</p>");
        let heading = &text.lines[0].spans[0];
        assert_eq!(heading.content, "Başlık");
        assert!(heading.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(plain(&text), vec!["Başlık", "", "metin"]);
    }

    #[test]
    fn links_are_collected_with_markers() {
        let text = render_html(r#"<p>Bkz. <a href="https://kofu.com.tr">site</a>.</p>"#);
        assert_eq!(text.links, vec!["https://kofu.com.tr".to_string()]);
        assert_eq!(plain(&text), vec!["Bkz. site[1]."]);
    }

    #[test]
    fn lists_get_markers() {
        let text = render_html("<ul><li>bir</li><li>iki</li></ul><ol><li>a</li><li>b</li></ol>");
        assert_eq!(plain(&text), vec!["• bir", "• iki", "", "1. a", "2. b"]);
    }

    #[test]
    fn script_and_comments_are_dropped() {
        let text = render_html("<p>a<script>alert(1)</script>b<!-- gizli --></p>");
        assert_eq!(plain(&text), vec!["ab"]);
    }

    #[test]
    fn br_breaks_line() {
        let text = render_html("satır<br>diğer<br/>son");
        assert_eq!(plain(&text), vec!["satır", "diğer", "son"]);
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt; &#231;&#x131;"), "a & b <c> çı");
        assert_eq!(decode_entities("fish & chips &unknown;"), "fish & chips &unknown;");
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        let text = render_html("<p>3 < 5</p>");
        assert_eq!(plain(&text), vec!["3 < 5"]);
    }

    fn is_bold(span: &Span<'_>) -> bool {
        span.style.add_modifier.contains(Modifier::BOLD)
    }

    #[test]
    fn malformed_tag_does_not_open_bold() {
        let text = render_html("<p>a<b</p><p>sonra</p>");
        assert_eq!(plain(&text), vec!["a", "", "sonra"]);
        assert!(text.lines.iter().flat_map(|l| &l.spans).all(|s| !is_bold(s)));
    }

    #[test]
    fn unclosed_bold_ends_with_its_paragraph() {
        let text = render_html("<p>a <b>kalın</p><p>düz</p>");
        assert!(is_bold(&text.lines[0].spans[1]));
        let next = &text.lines[2].spans[0];
        assert_eq!(next.content, "düz");
        assert!(!is_bold(next));
    }

    #[test]
    fn stray_close_keeps_heading_style() {
        let text = render_html("<h2>Baş</i>lık</h2>");
        assert_eq!(plain(&text), vec!["Başlık"]);
        assert!(text.lines[0].spans.iter().all(is_bold));
    }

    #[test]
    fn misnested_inline_close_pops_both() {
        let text = render_html("<p><b><i>x</b>y</p>");
        let spans = &text.lines[0].spans;
        assert_eq!(spans[1].content, "y");
        assert!(!is_bold(&spans[1]));
        assert!(!spans[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn unclosed_link_is_numbered_at_block_end() {
        let text = render_html(r#"<p><a href="https://a.test">bir</p><p>iki</p>"#);
        assert_eq!(text.links, vec!["https://a.test".to_string()]);
        assert_eq!(plain(&text), vec!["bir[1]", "", "iki"]);
    }

    #[test]
    fn unclosed_tags_at_end_of_body() {
        let text = render_html(r#"<h1>Son <a href="https://b.test">bağ"#);
        assert_eq!(text.links, vec!["https://b.test".to_string()]);
        assert_eq!(plain(&text), vec!["Son bağ[1]"]);
    }
}
