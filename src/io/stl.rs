//! STL export of anything that can hand out triangles.
//!
//! Circles are flat discs, so every facet of a flower carries the +Z normal.

use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use std::fmt::Write as _;
use std::io::Cursor;

/// Render `shape` as an ASCII STL solid called `name`.
///
/// ```rust
/// # use rosette::{flower::{build_flower, FlowerParams}, io::stl::to_stl_ascii, scene::MemoryScene};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut scene = MemoryScene::new();
/// build_flower(&mut scene, &FlowerParams::default())?;
/// let text = to_stl_ascii(&scene, "flower");
/// assert!(text.starts_with("solid flower"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D + ?Sized>(shape: &T, name: &str) -> String {
    let mut out = format!("solid {name}\n");
    shape.visit_triangles(|tri| write_ascii_facet(&mut out, &tri));
    out.push_str(&format!("endsolid {name}\n"));
    out
}

fn write_ascii_facet(out: &mut String, tri: &[Vertex; 3]) {
    let n = tri[0].normal;
    // writing into a String cannot fail
    let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
    out.push_str("    outer loop\n");
    for v in tri {
        let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", v.pos.x, v.pos.y, v.pos.z);
    }
    out.push_str("    endloop\n  endfacet\n");
}

/// Render `shape` as binary STL.
///
/// Binary STL stores single precision only and has no slot for a solid name;
/// `_name` keeps the call shape identical to [`to_stl_ascii`].
pub fn to_stl_binary<T: Triangulated3D + ?Sized>(
    shape: &T,
    _name: &str,
) -> std::io::Result<Vec<u8>> {
    let mut facets = Vec::with_capacity(shape.triangle_count());
    shape.visit_triangles(|tri| facets.push(to_stl_triangle(&tri)));

    let mut cursor = Cursor::new(Vec::new());
    stl_io::write_stl(&mut cursor, facets.iter())?;
    Ok(cursor.into_inner())
}

#[allow(clippy::unnecessary_cast)]
fn to_stl_triangle(tri: &[Vertex; 3]) -> stl_io::Triangle {
    let n = tri[0].normal;
    stl_io::Triangle {
        normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
        vertices: tri
            .map(|v| stl_io::Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])),
    }
}

impl crate::scene::MemoryScene {
    /// Every object of the scene as one ASCII solid.
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}

impl crate::primitive::CirclePrimitive {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
