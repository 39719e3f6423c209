//! MarkdownV2 escaping, deep links and the `/list` rendering.
//!
//! Deep links look like `https://t.me/<bot>?start=download_<name>` where spaces in the display
//! name become `_`. Inside the list message the name part is MarkdownV2-escaped; Telegram strips
//! those escapes when it parses the entity, and [`decode_deep_link`] strips any that survive.

/// Characters that must be backslash-escaped in Telegram MarkdownV2 text.
pub const MARKDOWN_V2_RESERVED: &str = "_*[]()~`>#+-=|{}.!";

/// `start` payload prefix for download links.
pub const DEEP_LINK_PREFIX: &str = "download_";

/// Maximum length of one Telegram text message, in UTF-16 code units.
pub const MESSAGE_TEXT_LIMIT: usize = 4096;

/// Prefixes every reserved MarkdownV2 character (and the backslash itself) with one backslash.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || MARKDOWN_V2_RESERVED.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Reverses [`escape_markdown_v2`]: drops a backslash that precedes a reserved character or
/// another backslash. Other backslashes are kept.
pub fn unescape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\\' || MARKDOWN_V2_RESERVED.contains(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Deep-link form of a display name: spaces become `_`.
pub fn encode_deep_link(display_name: &str) -> String {
    display_name.replace(' ', "_")
}

/// Inverse of [`encode_deep_link`] for names without underscores. Leftover MarkdownV2 escapes
/// are removed first.
pub fn decode_deep_link(payload: &str) -> String {
    unescape_markdown_v2(payload).replace('_', " ")
}

/// Payload of a `/start download_<name>` argument, or None for any other `/start` argument.
pub fn parse_deep_link(start_argument: &str) -> Option<&str> {
    start_argument.strip_prefix(DEEP_LINK_PREFIX)
}

/// Plain (unescaped) deep link for a display name.
pub fn deep_link_url(bot_username: &str, display_name: &str) -> String {
    format!(
        "https://t.me/{}?start={}{}",
        bot_username,
        DEEP_LINK_PREFIX,
        encode_deep_link(display_name)
    )
}

/// Renders the `/list` body as MarkdownV2 pages: an escaped header, then one line per file,
/// `<n>\. [<name>](https://t.me/<bot>?start=download_<name>)` with the name escaped.
///
/// Lines are packed into pages of at most [`MESSAGE_TEXT_LIMIT`] UTF-16 units of escaped source.
/// The header opens the first page only; numbering continues across pages. A single over-long
/// line gets a page of its own.
pub fn render_file_list(header: &str, display_names: &[String], bot_username: &str) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = escape_markdown_v2(header);
    page.push('\n');
    for (i, name) in display_names.iter().enumerate() {
        let escaped = escape_markdown_v2(name);
        let line = format!(
            "{}\\. [{}]({})\n",
            i + 1,
            escaped,
            deep_link_url(bot_username, &escaped)
        );
        if !page.is_empty() && utf16_len(&page) + utf16_len(&line) > MESSAGE_TEXT_LIMIT {
            pages.push(std::mem::take(&mut page));
        }
        page.push_str(&line);
    }
    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
