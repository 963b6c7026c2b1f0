//! `{{ name }}` placeholder substitution for text templates.

use crate::{RenderContext, TemplateError, TemplateRenderer, TemplateResult};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// How substituted values are escaped before insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Escape {
    /// Values are inserted verbatim.
    #[default]
    None,
    /// `&`, `<`, `>`, `"` and `'` are replaced with XML entities.
    Xml,
}

/// Renderer for UTF-8 templates with `{{ name }}` placeholders.
///
/// - Whitespace inside the braces is ignored (`{{oos_id}}` and `{{ oos_id }}` are equivalent).
/// - A placeholder with no value in the context renders as the empty string.
/// - Brace pairs whose content is not a plain identifier (letters, digits, `_`) are left
///   untouched, so template expressions meant for another engine pass through.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderRenderer {
    escape: Escape,
}

impl PlaceholderRenderer {
    pub fn new(escape: Escape) -> Self {
        Self { escape }
    }

    /// Chooses XML escaping for XML-based template extensions, none otherwise.
    pub fn for_extension(extension: &str) -> Self {
        let escape = match extension.to_ascii_lowercase().as_str() {
            "xml" | "docx" | "fodt" | "html" => Escape::Xml,
            _ => Escape::None,
        };
        Self::new(escape)
    }

    pub fn escape(&self) -> Escape {
        self.escape
    }

    /// Renders a template held as a string.
    pub fn render_str(&self, template: &str, context: &RenderContext) -> TemplateResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                return Err(TemplateError::UnterminatedPlaceholder(offset + start));
            };

            let raw = &after_open[..end];
            let name = raw.trim();
            if is_identifier(name) {
                self.push_escaped(&mut out, context.get(name).unwrap_or(""));
            } else {
                out.push_str(OPEN);
                out.push_str(raw);
                out.push_str(CLOSE);
            }

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }

    fn push_escaped(&self, out: &mut String, value: &str) {
        match self.escape {
            Escape::None => out.push_str(value),
            Escape::Xml => {
                for c in value.chars() {
                    match c {
                        '&' => out.push_str("&amp;"),
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '"' => out.push_str("&quot;"),
                        '\'' => out.push_str("&apos;"),
                        _ => out.push(c),
                    }
                }
            }
        }
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &[u8], context: &RenderContext) -> TemplateResult<Vec<u8>> {
        let template = String::from_utf8(template.to_vec())?;
        self.render_str(&template, context).map(String::into_bytes)
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        [
            ("oos_id", "OOS-250117"),
            ("client_name", "Smith & Sons <Compounding>"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn substitutes_placeholders_with_and_without_spaces() {
        let renderer = PlaceholderRenderer::default();
        let out = renderer
            .render_str("ID: {{oos_id}} / {{ oos_id }}", &context())
            .expect("render");
        assert_eq!(out, "ID: OOS-250117 / OOS-250117");
    }

    #[test]
    fn missing_values_render_empty() {
        let renderer = PlaceholderRenderer::default();
        let out = renderer
            .render_str("[{{ sample_id }}]", &context())
            .expect("render");
        assert_eq!(out, "[]");
    }

    #[test]
    fn non_identifier_expressions_pass_through() {
        let renderer = PlaceholderRenderer::default();
        let out = renderer
            .render_str("{{ oos_id|upper }} {%p if x %}", &context())
            .expect("render");
        assert_eq!(out, "{{ oos_id|upper }} {%p if x %}");
    }

    #[test]
    fn xml_escaping_applies_to_values_only() {
        let renderer = PlaceholderRenderer::new(Escape::Xml);
        let out = renderer
            .render_str("<w:t>{{ client_name }}</w:t>", &context())
            .expect("render");
        assert_eq!(out, "<w:t>Smith &amp; Sons &lt;Compounding&gt;</w:t>");
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let renderer = PlaceholderRenderer::default();
        let err = renderer
            .render_str("ok {{ oos_id }} then {{ broken", &context())
            .expect_err("should reject");
        assert!(matches!(err, TemplateError::UnterminatedPlaceholder(21)));
    }

    #[test]
    fn render_rejects_binary_templates() {
        let renderer = PlaceholderRenderer::default();
        let zip_magic = [0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe, 0x00];
        let err = renderer
            .render(&zip_magic, &context())
            .expect_err("should reject");
        assert!(matches!(err, TemplateError::NotText(_)));
    }

    #[test]
    fn extension_selects_escaping() {
        assert_eq!(PlaceholderRenderer::for_extension("XML").escape(), Escape::Xml);
        assert_eq!(PlaceholderRenderer::for_extension("txt").escape(), Escape::None);
    }
}
