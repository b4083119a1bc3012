//! Procedural **flower arrangements** of circle primitives.
//!
//! A flower is one circle at the origin plus a ring of circles whose centers
//! are found by polar-to-Cartesian conversion while an angle accumulator
//! walks a full turn. With the default parameters (radius 3, step 60°,
//! 64 vertices) the result is the classic seven-circle "seed of life".
//!
//! Generators talk to a [`scene::SceneContext`], never to a global host:
//! [`scene::MemoryScene`] holds real geometry that can be exported,
//! [`scene::RecordingScene`] only records the calls it receives.
//!
//! ```
//! use rosette::{build_flower, FlowerParams, MemoryScene};
//!
//! let mut scene = MemoryScene::new();
//! let summary = build_flower(&mut scene, &FlowerParams::default()).unwrap();
//! assert_eq!(summary.total(), 7);
//! assert_eq!(scene.len(), 7);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - **svg-io**: `.svg` outline export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod flower;
pub mod float_types;
pub mod io;
pub mod polar;
pub mod primitive;
pub mod scene;
pub mod triangulated;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use flower::{FlowerParams, FlowerSummary, build_flower};
pub use primitive::CirclePrimitive;
pub use scene::{MemoryScene, RecordingScene, SceneContext};
