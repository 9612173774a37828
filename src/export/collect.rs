//! Scene filtering.

use crate::export::note;
use crate::scene::types::{CurveDimensions, ObjectKind, SceneObject, SceneSnapshot};

/// Collect the exportable objects from a snapshot.
///
/// Keeps objects that are visible, are 2D curves, and carry a material
/// in slot 0. Every rejection past the visibility/type gates gets one
/// info-level diagnostic naming the object; a rejected object never
/// stops collection of the ones after it.
pub fn collect_objects<'a>(scene: &'a SceneSnapshot, log: &mut Vec<String>) -> Vec<&'a SceneObject> {
    let mut out = Vec::new();

    for obj in &scene.objects {
        if !obj.visible {
            continue;
        }

        if obj.kind != ObjectKind::Curve {
            continue;
        }

        let Some(curve) = &obj.curve else {
            note(log, format!("This object has no curve data: {}", obj.name));
            continue;
        };

        if curve.dimensions != CurveDimensions::TwoD {
            note(log, format!("This curve is not 2D: {}", obj.name));
            continue;
        }

        if curve.materials.is_empty() {
            note(log, format!("This curve has no material: {}", obj.name));
            continue;
        }

        if curve.materials[0].is_none() {
            note(
                log,
                format!("This material slot has no material: {}", obj.name),
            );
            continue;
        }

        out.push(obj);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::types::*;

    fn curve_data(dimensions: CurveDimensions, materials: Vec<Option<Material>>) -> CurveData {
        CurveData {
            dimensions,
            splines: Vec::new(),
            materials,
        }
    }

    fn material() -> Material {
        Material {
            diffuse_color: [1.0, 1.0, 1.0],
            alpha: 1.0,
        }
    }

    fn object(name: &str, curve: Option<CurveData>) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            visible: true,
            kind: ObjectKind::Curve,
            matrix_world: Mat4::identity(),
            curve,
            modifiers: Vec::new(),
        }
    }

    fn eligible(name: &str) -> SceneObject {
        object(
            name,
            Some(curve_data(CurveDimensions::TwoD, vec![Some(material())])),
        )
    }

    #[test]
    fn keeps_eligible_objects() {
        let scene = SceneSnapshot {
            objects: vec![eligible("a"), eligible("b")],
        };
        let mut log = Vec::new();
        let out = collect_objects(&scene, &mut log);
        assert_eq!(out.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn skips_invisible_and_non_curves_silently() {
        let mut hidden = eligible("hidden");
        hidden.visible = false;
        let mut lamp = eligible("lamp");
        lamp.kind = ObjectKind::Other;

        let scene = SceneSnapshot {
            objects: vec![hidden, lamp],
        };
        let mut log = Vec::new();
        assert!(collect_objects(&scene, &mut log).is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn skips_3d_curves_with_diagnostic() {
        let scene = SceneSnapshot {
            objects: vec![object(
                "solid",
                Some(curve_data(CurveDimensions::ThreeD, vec![Some(material())])),
            )],
        };
        let mut log = Vec::new();
        assert!(collect_objects(&scene, &mut log).is_empty());
        assert!(log[0].contains("not 2D"));
        assert!(log[0].contains("solid"));
    }

    #[test]
    fn skips_missing_material_slots() {
        let scene = SceneSnapshot {
            objects: vec![
                object("bare", Some(curve_data(CurveDimensions::TwoD, vec![]))),
                object("empty", Some(curve_data(CurveDimensions::TwoD, vec![None]))),
            ],
        };
        let mut log = Vec::new();
        assert!(collect_objects(&scene, &mut log).is_empty());
        assert!(log[0].contains("has no material"));
        assert!(log[1].contains("slot has no material"));
    }

    #[test]
    fn empty_material_slot_does_not_truncate_collection() {
        // An empty slot skips that object only; the ones after it survive
        let scene = SceneSnapshot {
            objects: vec![
                object("empty", Some(curve_data(CurveDimensions::TwoD, vec![None]))),
                eligible("after"),
            ],
        };
        let mut log = Vec::new();
        let out = collect_objects(&scene, &mut log);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "after");
    }
}
