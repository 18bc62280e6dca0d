//! Diagram descriptors: the name/content pairs handed to the output writer.

/// File format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Markdown,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Markdown => "md",
        }
    }
}

/// One rendered diagram, ready to be written as `<name>.<extension>`.
///
/// # Examples
///
/// ```
/// use livevue_diagrams::{DiagramDescriptor, Format};
///
/// let descriptor = DiagramDescriptor::new("ssr_process", Format::Markdown, "```mermaid\n```\n");
/// assert_eq!(descriptor.file_name(), "ssr_process.md");
/// assert_eq!(descriptor.title(), "Ssr Process");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDescriptor {
    name: String,
    format: Format,
    content: String,
}

impl DiagramDescriptor {
    pub fn new(name: impl Into<String>, format: Format, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format,
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }

    /// Heading used for this diagram in the index document.
    pub fn title(&self) -> String {
        title_case(&self.name)
    }
}

/// Turns `snake_case` into `Title Case`.
///
/// Underscores become spaces; each word gets an upper-case first letter and
/// lower-case rest.
pub fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("architecture"), "Architecture");
        assert_eq!(title_case("component_flow"), "Component Flow");
        assert_eq!(title_case("ssr_process"), "Ssr Process");
        assert_eq!(title_case("class_diagram"), "Class Diagram");
        assert_eq!(title_case("SSR_MODULE"), "Ssr Module");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_file_name_uses_format_extension() {
        let svg = DiagramDescriptor::new("data_flow", Format::Svg, "<svg/>");
        assert_eq!(svg.file_name(), "data_flow.svg");
        assert_eq!(svg.content(), "<svg/>");
        assert_eq!(svg.format(), Format::Svg);
    }
}
