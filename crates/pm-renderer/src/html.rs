//! Escaping and shared table markup.

use std::borrow::Cow;
use std::fmt::Write;

/// Escape text for use in HTML content and double-quoted attributes.
///
/// Single quotes are left alone: every attribute this crate writes is
/// double-quoted, and font stacks routinely contain `'`.
///
/// # Example
///
/// ```
/// use pm_renderer::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\" <3"), "Tom &amp; &quot;Jerry&quot; &lt;3");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape multi-line text and turn each line break into `<br />`.
///
/// `\r\n` and `\n` are both treated as a single break.
#[must_use]
pub fn text_with_breaks(s: &str) -> String {
    escape_html(s).replace("\r\n", "\n").replace('\n', "<br />")
}

/// Append an empty row of `height` pixels used to separate sections.
pub(crate) fn spacer_row(height: u16, out: &mut String) {
    let _ = write!(
        out,
        r#"<tr><td style="font-size: {height}px; line-height: {height}px;">&nbsp;</td></tr>"#
    );
}

/// Opening tag for a layout table that spans its parent.
pub(crate) const PRESENTATION_TABLE_START: &str =
    r#"<table role="presentation" border="0" cellpadding="0" cellspacing="0" width="100%">"#;

/// Inline style shared by the offer and footer cards.
pub(crate) const CARD_CELL_STYLE: &str =
    "padding: 20px; border: 1px solid #e2e8f0; border-radius: 8px;";
