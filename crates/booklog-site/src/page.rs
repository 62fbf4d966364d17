//! The HTML page shell shared by every generated page.

use booklog_renderer::escape_html;

/// Wrap a body fragment in a complete HTML5 document.
#[must_use]
pub fn page_shell(title: &str, lang: &str, css_href: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n",
            "<meta charset=\"UTF-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"{css}\">\n",
            "</head>\n",
            "<body>\n",
            "<main class=\"container\">\n",
            "{body}\n",
            "</main>\n",
            "</body>\n",
            "</html>\n",
        ),
        lang = lang,
        title = escape_html(title),
        css = escape_html(css_href),
        body = body,
    )
}
