//! Document composition.
//!
//! Orchestrates one export pass: filter the snapshot, build one shape
//! definition per eligible object, expand array instances, and sort the
//! instance list back-to-front by depth.

use crate::export::array::{array_rule, expand_instances};
use crate::export::collect::collect_objects;
use crate::export::color::{decode_color, opacity};
use crate::export::note;
use crate::export::options::{ExportOptions, TransformSpace};
use crate::export::path::{spline_path_data, view_flip};
use crate::scene::types::{SceneSnapshot, Vec3};

/// One reusable shape: the paths of all Bezier splines of one object
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDefinition {
    /// Unique within the document
    pub id: String,
    /// One `d` attribute value per drawable spline
    pub paths: Vec<String>,
    /// Display RGB fill
    pub fill: (u8, u8, u8),
    pub opacity: f64,
}

/// One positioned occurrence of a shape.
///
/// x/y are canvas coordinates; z is scene depth and only orders drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub shape_id: String,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub fill: (u8, u8, u8),
    pub opacity: f64,
}

/// The composed output document: shape definitions referenced by id and
/// instances in paint order (back to front)
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    pub background: Option<Background>,
    pub shapes: Vec<ShapeDefinition>,
    pub instances: Vec<Instance>,
}

/// Reduce an object name to a usable XML id
fn sanitize_id(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if id.is_empty() { "shape".to_string() } else { id }
}

/// Make an id unique against the already-used set, suffixing on collision
fn unique_id(base: String, used: &mut Vec<String>) -> String {
    let mut id = base.clone();
    let mut n = 2;
    while used.contains(&id) {
        id = format!("{}-{}", base, n);
        n += 1;
    }
    used.push(id.clone());
    id
}

/// Compose the full document from a scene snapshot.
///
/// Never fails: ineligible objects and undrawable splines are skipped
/// with diagnostics and every remaining object contributes exactly one
/// shape definition.
pub fn compose_document(
    scene: &SceneSnapshot,
    options: &ExportOptions,
    log: &mut Vec<String>,
) -> Document {
    let background = if options.use_background {
        let [r, g, b, a] = options.background_color;
        Some(Background {
            fill: decode_color([r, g, b]),
            opacity: opacity(a),
        })
    } else {
        None
    };

    let mut doc = Document {
        width: options.width,
        height: options.height,
        background,
        shapes: Vec::new(),
        instances: Vec::new(),
    };

    let flip = view_flip();
    let mut used_ids = Vec::new();

    for obj in collect_objects(scene, log) {
        tracing::debug!("add data: {}", obj.name);

        // collect_objects guarantees curve data and an occupied slot 0
        let Some(curve) = &obj.curve else { continue };
        let Some(material) = &curve.materials[0] else {
            continue;
        };

        let matrix = match options.space {
            TransformSpace::World => flip.mul(&obj.matrix_world.without_translation()),
            TransformSpace::Local => flip,
        };

        let mut paths = Vec::new();
        for spline in &curve.splines {
            if let Some(d) = spline_path_data(spline, &matrix, options.scale, log) {
                paths.push(d);
            }
        }
        if paths.is_empty() {
            note(log, format!("This curve has no drawable spline: {}", obj.name));
        }

        let id = unique_id(sanitize_id(&obj.name), &mut used_ids);
        doc.shapes.push(ShapeDefinition {
            id: id.clone(),
            paths,
            fill: decode_color(material.diffuse_color),
            opacity: opacity(material.alpha),
        });

        let t = obj.matrix_world.translation();
        let base = Vec3::new(t.x * options.scale, -t.y * options.scale, t.z);

        for position in expand_instances(base, array_rule(obj), options.scale) {
            doc.instances.push(Instance {
                shape_id: id.clone(),
                position,
            });
        }
    }

    // Lower z paints first so higher z ends up on top; stable for ties
    doc.instances
        .sort_by(|a, b| a.position.z.total_cmp(&b.position.z));

    doc
}
