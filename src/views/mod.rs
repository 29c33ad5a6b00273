//! Server-rendered HTML views
//!
//! Every view is a pure function of its page state. Values coming from the
//! backend go through [`escape`] before they reach the markup.

pub mod customers;
pub mod landing;

pub use customers::render_customer_page;
pub use landing::render_landing_page;

const PAGE_CLASS: &str = "min-h-screen bg-gradient-to-br from-yellow-600 to-orange-700";

/// Wrap `body` in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Full-screen centred message, used for loading and error views
pub fn full_screen_message(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            r#"<div class="{PAGE_CLASS} flex items-center justify-center">
  <div class="text-white text-2xl">{}</div>
</div>"#,
            escape(message)
        ),
    )
}

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Plain number formatting: `6200.0` renders as `6200`, `78.5` as `78.5`
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

/// Optional amount, empty when the backend sent nothing
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
