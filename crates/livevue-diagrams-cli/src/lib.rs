//! CLI logic for the LiveVue diagram generator.
//!
//! This module loads the configuration, applies command-line overrides and
//! drives [`Generator`] for the selected variants.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Variant};

use std::path::Path;

use log::info;

use livevue_diagrams::{DiagramError, Generator, config::AppConfig};

/// Run the LiveVue diagram generator
///
/// Generates the SVG diagrams, the Mermaid documents or both, according to
/// `args.variant`, and prints a start and completion line for each variant.
///
/// # Errors
///
/// Returns `DiagramError` for:
/// - Configuration loading errors
/// - Invalid diagram models
/// - Layout and rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), DiagramError> {
    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args);
    info!(
        variant:? = args.variant,
        svg_dir = app_config.output().svg_dir().display().to_string(),
        mermaid_dir = app_config.output().mermaid_dir().display().to_string();
        "Generating diagrams"
    );

    let generator = Generator::new(app_config);
    let output = generator.config().output();

    if args.variant.includes_svg() {
        println!("{}", start_message(Variant::Svg));
        let written = generator.generate_svg(output.svg_dir())?;
        info!(files = written.len(); "SVG diagrams written");
        println!("{}", completion_message(Variant::Svg, output.svg_dir()));
    }

    if args.variant.includes_mermaid() {
        println!("{}", start_message(Variant::Mermaid));
        let written = generator.generate_mermaid(output.mermaid_dir())?;
        info!(files = written.len(); "Mermaid documents written");
        println!("{}", completion_message(Variant::Mermaid, output.mermaid_dir()));
    }

    Ok(())
}

/// Replaces configured directories with the ones given on the command line.
fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut output = config.output().clone();
    if let Some(dir) = &args.svg_dir {
        output = output.with_svg_dir(dir);
    }
    if let Some(dir) = &args.mermaid_dir {
        output = output.with_mermaid_dir(dir);
    }
    config.with_output(output)
}

fn start_message(variant: Variant) -> &'static str {
    match variant {
        Variant::Mermaid => "Generating LiveVue Mermaid diagrams...",
        Variant::All | Variant::Svg => "Generating LiveVue architecture diagrams...",
    }
}

fn completion_message(variant: Variant, dir: &Path) -> String {
    let subject = match variant {
        Variant::Mermaid => "Mermaid diagrams",
        Variant::All | Variant::Svg => "Diagrams",
    };
    format!("{subject} generated successfully in {}/", dir.display())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn args(svg_dir: Option<&str>, mermaid_dir: Option<&str>) -> Args {
        Args {
            variant: Variant::All,
            svg_dir: svg_dir.map(str::to_string),
            mermaid_dir: mermaid_dir.map(str::to_string),
            config: None,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_overrides_replace_only_given_dirs() {
        let config = apply_overrides(AppConfig::default(), &args(Some("svg-out"), None));

        assert_eq!(config.output().svg_dir(), Path::new("svg-out"));
        assert_eq!(config.output().mermaid_dir(), Path::new("mermaid"));
    }

    #[test]
    fn test_progress_messages_per_variant() {
        assert_eq!(
            start_message(Variant::Svg),
            "Generating LiveVue architecture diagrams..."
        );
        assert_eq!(
            completion_message(Variant::Svg, Path::new("output")),
            "Diagrams generated successfully in output/"
        );
        assert_eq!(
            start_message(Variant::Mermaid),
            "Generating LiveVue Mermaid diagrams..."
        );
        assert_eq!(
            completion_message(Variant::Mermaid, Path::new("mermaid")),
            "Mermaid diagrams generated successfully in mermaid/"
        );
    }
}
