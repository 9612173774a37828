//! SVG rendering of a composed document, plus the atomic file write.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::export::color::hex_color;
use crate::export::compose::{Document, ShapeDefinition};
use crate::export::options::RenderStrategy;
use crate::export::path::fmt_num;

fn write_svg_header(out: &mut String, doc: &Document) {
    let w = doc.width as f64;
    let h = doc.height as f64;

    let _ = writeln!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    );
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        doc.width,
        doc.height,
        fmt_num(-w / 2.0),
        fmt_num(-h / 2.0),
        fmt_num(w),
        fmt_num(h)
    );

    if let Some(bg) = &doc.background {
        let _ = writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="100%" height="100%" fill="{}" opacity="{}"/>"#,
            fmt_num(-w / 2.0),
            fmt_num(-h / 2.0),
            hex_color(bg.fill),
            fmt_num(bg.opacity)
        );
    }
}

fn paint_attrs(shape: &ShapeDefinition) -> String {
    let color = hex_color(shape.fill);
    format!(
        r#"fill="{}" opacity="{}" stroke="{}""#,
        color,
        fmt_num(shape.opacity),
        color
    )
}

/// Render a document to an SVG string.
///
/// Both strategies paint the instance list in order, so they produce
/// identical rendering; only the document structure differs.
pub fn document_to_svg(doc: &Document, strategy: RenderStrategy) -> String {
    let mut out = String::new();
    write_svg_header(&mut out, doc);

    let by_id: HashMap<&str, &ShapeDefinition> =
        doc.shapes.iter().map(|s| (s.id.as_str(), s)).collect();

    match strategy {
        RenderStrategy::Definitions => {
            let _ = writeln!(out, "    <defs>");
            for shape in &doc.shapes {
                let _ = writeln!(
                    out,
                    r#"        <g id="{}" {}>"#,
                    shape.id,
                    paint_attrs(shape)
                );
                for d in &shape.paths {
                    let _ = writeln!(out, r#"            <path d="{}"/>"#, d);
                }
                let _ = writeln!(out, "        </g>");
            }
            let _ = writeln!(out, "    </defs>");

            for instance in &doc.instances {
                let _ = writeln!(
                    out,
                    r##"    <use xlink:href="#{}" x="{}" y="{}"/>"##,
                    instance.shape_id,
                    fmt_num(instance.position.x),
                    fmt_num(instance.position.y)
                );
            }
        }
        RenderStrategy::Direct => {
            for instance in &doc.instances {
                let Some(shape) = by_id.get(instance.shape_id.as_str()) else {
                    continue;
                };
                let _ = writeln!(
                    out,
                    r#"    <g transform="translate({},{})" {}>"#,
                    fmt_num(instance.position.x),
                    fmt_num(instance.position.y),
                    paint_attrs(shape)
                );
                for d in &shape.paths {
                    let _ = writeln!(out, r#"        <path d="{}"/>"#, d);
                }
                let _ = writeln!(out, "    </g>");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "export.svg".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the rendered SVG atomically.
///
/// The content goes to a sibling temp file first and is renamed over the
/// target, so either the complete file exists at `path` or nothing does.
pub fn write_svg(path: &Path, svg: &str) -> Result<(), ExportError> {
    let tmp = temp_path(path);

    if let Err(e) = fs::write(&tmp, svg) {
        let _ = fs::remove_file(&tmp);
        return Err(ExportError::write(path, e));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ExportError::write(path, e));
    }

    Ok(())
}
