//! Command-line argument definitions.
//!
//! Without flags the tool produces both variants into the directories named
//! by the configuration.

use clap::{Parser, ValueEnum};

/// Which set of diagrams to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Variant {
    /// SVG drawings and Mermaid Markdown
    #[default]
    All,
    /// SVG drawings only
    Svg,
    /// Mermaid Markdown only
    Mermaid,
}

impl Variant {
    pub fn includes_svg(self) -> bool {
        matches!(self, Self::All | Self::Svg)
    }

    pub fn includes_mermaid(self) -> bool {
        matches!(self, Self::All | Self::Mermaid)
    }
}

/// Command-line arguments for the LiveVue diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram variant to generate
    #[arg(long, value_enum, default_value_t = Variant::All)]
    pub variant: Variant,

    /// Directory for the SVG files (overrides the configuration)
    #[arg(long)]
    pub svg_dir: Option<String>,

    /// Directory for the Mermaid Markdown files (overrides the configuration)
    #[arg(long)]
    pub mermaid_dir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["livevue-diagrams"]);

        assert_eq!(args.variant, Variant::All);
        assert!(args.svg_dir.is_none());
        assert!(args.mermaid_dir.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_variant_and_directories() {
        let args = Args::parse_from([
            "livevue-diagrams",
            "--variant",
            "mermaid",
            "--mermaid-dir",
            "docs/diagrams",
            "-c",
            "custom.toml",
        ]);

        assert_eq!(args.variant, Variant::Mermaid);
        assert_eq!(args.mermaid_dir.as_deref(), Some("docs/diagrams"));
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["livevue-diagrams", "--variant", "png"]).is_err());
    }

    #[test]
    fn test_variant_selection() {
        assert!(Variant::All.includes_svg() && Variant::All.includes_mermaid());
        assert!(Variant::Svg.includes_svg() && !Variant::Svg.includes_mermaid());
        assert!(!Variant::Mermaid.includes_svg() && Variant::Mermaid.includes_mermaid());
    }
}
