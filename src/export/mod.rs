//! Scene-to-SVG export pipeline.
//!
//! One export invocation is a synchronous batch pass over a read-only
//! [`SceneSnapshot`]: filter eligible curve objects, convert their
//! splines to path data, expand array instances, depth-sort, render and
//! atomically write the SVG.

pub mod array;
pub mod collect;
pub mod color;
pub mod compose;
pub mod options;
pub mod path;
pub mod svg;

pub use compose::{Background, Document, Instance, ShapeDefinition, compose_document};
pub use options::{ExportOptions, RenderStrategy, TransformSpace};
pub use svg::{document_to_svg, write_svg};

use crate::error::ExportError;
use crate::scene::types::SceneSnapshot;

/// Record a non-fatal diagnostic: logged at info level and accumulated
/// into the report
pub(crate) fn note(log: &mut Vec<String>, message: String) {
    tracing::info!("{}", message);
    log.push(message);
}

/// Result of a successful export
#[derive(Debug)]
pub struct ExportReport {
    /// The composed document that was rendered
    pub document: Document,
    /// The SVG text that was written
    pub svg: String,
    /// Accumulated non-fatal diagnostics, in occurrence order
    pub diagnostics: Vec<String>,
}

/// Run the full pipeline: compose, render, write.
///
/// Either the file at `options.output` is written completely or the
/// export fails with no file produced.
pub fn export_scene(
    scene: &SceneSnapshot,
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    tracing::info!("export start");

    let mut log = Vec::new();
    let document = compose_document(scene, options, &mut log);
    let svg = document_to_svg(&document, options.strategy);

    tracing::debug!("save: start");
    write_svg(&options.output, &svg)?;
    tracing::debug!("save: end");

    tracing::info!("export end");

    Ok(ExportReport {
        document,
        svg,
        diagnostics: log,
    })
}
