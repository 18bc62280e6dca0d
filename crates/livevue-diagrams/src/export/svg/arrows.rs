use std::collections::BTreeMap;

use svg::node::element::{Definitions, Marker, Path};

use livevue_diagrams_core::color::Color;

/// Id of the arrow-head marker drawn in `color`.
pub fn marker_id(color: Color) -> String {
    format!("arrow-right-{}", color.to_id_safe_string())
}

/// `marker-end` attribute value referring to the marker of `color`.
pub fn marker_reference(color: Color) -> String {
    format!("url(#{})", marker_id(color))
}

/// Creates one arrow-head marker per distinct color, in a stable order.
pub fn create_marker_definitions<I>(colors: I) -> Definitions
where
    I: IntoIterator<Item = Color>,
{
    let unique: BTreeMap<String, Color> = colors
        .into_iter()
        .map(|color| (marker_id(color), color))
        .collect();

    unique
        .into_iter()
        .fold(Definitions::new(), |defs, (id, color)| {
            defs.add(
                Marker::new()
                    .set("id", id)
                    .set("viewBox", "0 0 10 10")
                    .set("refX", 9)
                    .set("refY", 5)
                    .set("markerWidth", 6)
                    .set("markerHeight", 6)
                    .set("orient", "auto")
                    .add(
                        Path::new()
                            .set("d", "M 0 0 L 10 5 L 0 10 z")
                            .set("fill", color),
                    ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_marker_per_color() {
        let gray = Color::new("#555555").unwrap();
        let red = Color::new("red").unwrap();

        let defs = create_marker_definitions([gray, red, gray]).to_string();

        assert_eq!(defs.matches("<marker").count(), 2);
        assert!(defs.contains(&marker_id(gray)));
        assert!(defs.contains(&marker_id(red)));
    }

    #[test]
    fn test_marker_reference() {
        let color = Color::new("#555555").unwrap();
        assert_eq!(
            marker_reference(color),
            format!("url(#arrow-right-{})", color.to_id_safe_string())
        );
    }
}
