use crate::tracking;
use openbuild_document::style::to_inline_style;
use openbuild_document::{Element, ElementType, PageSettings};
use tracing::debug;

/// Title used when the page has none
pub const DEFAULT_TITLE: &str = "OpenBuild Page";

/// File name used when the title has no usable characters
pub const DEFAULT_FILE_NAME: &str = "openbuild-page.html";

/// Options for HTML export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Emit Google Tag Manager / Facebook Pixel / TikTok Pixel snippets for
    /// the ids set in the page settings
    pub tracking_scripts: bool,
    /// Indentation string for the document skeleton
    pub indent: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            tracking_scripts: true,
            indent: "    ".to_string(),
        }
    }
}

pub(crate) struct Context<'a> {
    options: &'a ExportOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a ExportOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        self.add_indent();
        self.add(text);
        self.add("\n");
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render the element tree and page settings as a standalone HTML document.
///
/// Only desktop styles are emitted; the exported page is not responsive.
pub fn export_html(
    elements: &[Element],
    settings: &PageSettings,
    options: &ExportOptions,
) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(settings, &mut ctx);

    ctx.add_line(&format!("<body{}>", body_style(settings)));
    ctx.indent();

    if options.tracking_scripts {
        tracking::gtm_noscript(settings, &mut ctx);
    }

    for element in elements {
        let html = element_html(element);
        ctx.add_line(&html);
    }

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    let output = ctx.get_output();
    debug!(roots = elements.len(), bytes = output.len(), "Exported HTML document");
    output
}

fn compile_head(settings: &PageSettings, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_text(page_title(settings))));

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line("body {");
    ctx.indent();
    ctx.add_line("margin: 0;");
    ctx.add_line(
        "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, \
         Arial, sans-serif;",
    );
    ctx.add_line("--background: 220 13% 95%;");
    ctx.add_line("--foreground: 215 25% 27%;");
    ctx.add_line("background-color: hsl(var(--background));");
    ctx.add_line("color: hsl(var(--foreground));");
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_line("</style>");

    if ctx.options.tracking_scripts {
        tracking::head_snippets(settings, ctx);
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn page_title(settings: &PageSettings) -> &str {
    let title = settings.page_title.trim();
    if title.is_empty() {
        DEFAULT_TITLE
    } else {
        title
    }
}

/// ` style="..."` for the body, or nothing when no background is set
fn body_style(settings: &PageSettings) -> String {
    let mut declarations = Vec::new();

    let color = settings.body_background_color.trim();
    if !color.is_empty() {
        declarations.push(format!("background-color:{}", color));
    }

    let image = settings.body_background_image_url.trim();
    if !image.is_empty() {
        declarations.push(format!("background-image:url('{}')", image));
        declarations.push("background-size:cover".to_string());
        declarations.push("background-position:center".to_string());
    }

    if declarations.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape_attribute(&declarations.join(";")))
    }
}

/// Single element with its subtree, on one line
pub fn element_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.element_type.html_tag();

    out.push('<');
    out.push_str(tag);
    out.push_str(&format!(
        " style=\"{}\"",
        escape_attribute(&to_inline_style(&element.styles.desktop))
    ));

    for (name, value) in element.attributes.entries() {
        if value.is_empty() {
            continue;
        }
        out.push_str(&format!(
            " {}=\"{}\"",
            html_attribute_name(&name),
            escape_attribute(&value.to_string())
        ));
    }

    if is_self_closing(element) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match element.element_type {
        ElementType::Textarea => {
            out.push_str(element.content.as_deref().unwrap_or_default());
        }
        ElementType::Input
            if element.attributes.value.as_deref().is_some_and(|v| !v.is_empty()) => {}
        _ => {
            out.push_str(element.content.as_deref().unwrap_or_default());
            for child in &element.children {
                write_element(child, out);
            }
        }
    }

    out.push_str(&format!("</{}>", tag));
}

/// HTML name for a stored attribute key
fn html_attribute_name(key: &str) -> &str {
    match key {
        "htmlFor" => "for",
        "iconName" => "data-icon",
        "size" => "data-size",
        "strokeWidth" => "data-stroke-width",
        other => other,
    }
}

fn is_self_closing(element: &Element) -> bool {
    match element.element_type {
        ElementType::Img | ElementType::Hr => true,
        ElementType::Input => !matches!(
            element.attributes.input_type.as_deref(),
            Some("submit") | Some("button")
        ),
        _ => false,
    }
}

fn escape_attribute(text: &str) -> String {
    text.replace('"', "&quot;")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Download name for an exported page: lowercase, runs of anything that is
/// not a letter or digit collapsed to `-`.
pub fn export_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        format!("{}.html", slug)
    }
}
