//! Spinner markup placed into buttons.

const NBSP: &str = "&nbsp;";

/// The bare spinner `<span>`.
pub fn spinner(class: &str) -> String {
    format!(r#"<span class="{}"></span>"#, escape(class))
}

/// Spinner followed by a label, e.g. `⟳ アップロード中`.
pub fn labelled_spinner(class: &str, label: &str) -> String {
    format!("{}{NBSP}{}", spinner(class), escape(label))
}

/// Spinner alone, padded so the button keeps roughly its width.
pub fn padded_spinner(class: &str) -> String {
    format!("{NBSP}{}{NBSP}", spinner(class))
}

/// Whether `html` currently shows a spinner of this class.
pub fn shows_spinner(html: &str, class: &str) -> bool {
    html.contains(&spinner(class))
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Double-quoted JS string literal, safe inside an inline event handler.
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
pub(crate) fn visible_text(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace(NBSP, " ").trim().to_string()
}
