//! # curve2svg
//!
//! Export 2D Bezier curve scenes to SVG, mimicking a top-down
//! orthographic render.
//!
//! ## Features
//!
//! - **Path conversion**: closed cubic-Bezier splines become SVG path
//!   data with a Y-flip view transform and configurable coordinate space
//! - **Array expansion**: linear array modifiers become extra positioned
//!   instances of the same shape, without touching the source scene
//! - **Depth ordering**: instances paint back-to-front by scene z
//! - **Material fills**: linear diffuse colors are gamma-decoded to
//!   display values; alpha passes through untouched
//!
//! ## Example
//!
//! ```rust,ignore
//! use curve2svg::{ExportOptions, export_scene, parse_snapshot};
//!
//! let xml = std::fs::read_to_string("scene.xml").unwrap();
//! let scene = parse_snapshot(&xml).unwrap();
//! let options = ExportOptions { output: "out.svg".into(), ..Default::default() };
//! let report = export_scene(&scene, &options).unwrap();
//! println!("{} diagnostics", report.diagnostics.len());
//! ```

pub mod error;
pub mod export;
pub mod scene;

// Re-export commonly used items
pub use error::ExportError;
pub use export::{
    Document, ExportOptions, ExportReport, RenderStrategy, TransformSpace, compose_document,
    document_to_svg, export_scene,
};
pub use scene::{SceneSnapshot, parse_snapshot};
