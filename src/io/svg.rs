//! SVG export of a scene seen from +Z.
//!
//! Each object becomes one `<polygon>` outline. SVG's y axis points down, so
//! y is negated on the way out; the picture reads the same as the scene does
//! from above.

use super::IoError;
use crate::float_types::Real;
use crate::scene::MemoryScene;
use ::svg::Document;
use ::svg::node::element::Polygon;
use std::io::Write;

/// Blank border around the drawing, as a fraction of its larger side.
const MARGIN_FRACTION: Real = 0.05;

impl MemoryScene {
    /// Render every object as an outline polygon.
    ///
    /// Fails with [`IoError::Empty`] when the scene holds nothing to draw.
    pub fn to_svg(&self) -> Result<String, IoError> {
        let bbox = self
            .bounding_box()
            .ok_or_else(|| IoError::Empty("scene has no objects".to_string()))?;

        let size = bbox.extents();
        let margin = size.x.max(size.y) * MARGIN_FRACTION;
        let stroke = (size.x.max(size.y) / 500.0).max(Real::EPSILON);

        let mut document = Document::new().set(
            "viewBox",
            format!(
                "{} {} {} {}",
                bbox.mins.x - margin,
                -bbox.maxs.y - margin,
                size.x + 2.0 * margin,
                size.y + 2.0 * margin
            ),
        );

        for object in self.objects() {
            let points = object
                .circle
                .ring()
                .iter()
                .map(|p| format!("{},{}", p.x, -p.y))
                .collect::<Vec<_>>()
                .join(" ");
            let polygon = Polygon::new()
                .set("id", object.name.clone())
                .set("points", points)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", stroke.to_string());
            document = document.add(polygon);
        }

        Ok(document.to_string())
    }

    /// [`to_svg`](Self::to_svg) straight into `writer`.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<(), IoError> {
        writer.write_all(self.to_svg()?.as_bytes())?;
        Ok(())
    }
}
