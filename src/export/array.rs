//! Array modifier expansion.
//!
//! The original exporter duplicated real scene objects to realize array
//! modifiers and deleted them again afterwards. Here the duplication is
//! pure data: a base canvas position plus a rule produce the full list
//! of instance positions, and the scene is never touched.

use crate::scene::types::{ArrayModifier, Modifier, SceneObject, Vec3};

/// Find the array rule to honor for an object, if any.
///
/// Only modifier slots 0 and 1 are examined, in that order, and only the
/// first eligible rule is used; a second array modifier on the same
/// object is ignored. Eligible means enabled, count > 1, and using
/// constant offset (other offset modes are not honored).
pub fn array_rule(obj: &SceneObject) -> Option<&ArrayModifier> {
    obj.modifiers.iter().take(2).find_map(|m| match m {
        Modifier::Array(a) if a.enabled && a.count > 1 && a.constant_offset => Some(a),
        _ => None,
    })
}

/// Expand a base position into the full instance position list.
///
/// The base is in canvas coordinates (x/y scaled, y flipped; z is scene
/// depth). Offsets are applied cumulatively: instance `i` sits at
/// `base + offset * i`, with the x/y offset mapped into canvas space and
/// the depth offset left in scene units.
pub fn expand_instances(base: Vec3, rule: Option<&ArrayModifier>, scale: f64) -> Vec<Vec3> {
    let mut out = vec![base];

    if let Some(rule) = rule {
        for i in 1..rule.count {
            let i = f64::from(i);
            out.push(Vec3::new(
                base.x + rule.offset.x * scale * i,
                base.y - rule.offset.y * scale * i,
                base.z + rule.offset.z * i,
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::types::{Mat4, ObjectKind};

    fn array(enabled: bool, count: u32, constant_offset: bool, offset: Vec3) -> Modifier {
        Modifier::Array(ArrayModifier {
            enabled,
            count,
            constant_offset,
            offset,
        })
    }

    fn object_with(modifiers: Vec<Modifier>) -> SceneObject {
        SceneObject {
            name: "obj".to_string(),
            visible: true,
            kind: ObjectKind::Curve,
            matrix_world: Mat4::identity(),
            curve: None,
            modifiers,
        }
    }

    #[test]
    fn no_rule_yields_base_only() {
        let base = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(expand_instances(base, None, 100.0), vec![base]);
    }

    #[test]
    fn count_expansion_with_scale() {
        let base = Vec3::zero();
        let rule = ArrayModifier {
            enabled: true,
            count: 4,
            constant_offset: true,
            offset: Vec3::new(1.0, 0.0, 0.0),
        };
        let positions = expand_instances(base, Some(&rule), 2.0);
        let xs: Vec<f64> = positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn y_offset_is_flipped_and_z_unscaled() {
        let rule = ArrayModifier {
            enabled: true,
            count: 2,
            constant_offset: true,
            offset: Vec3::new(0.0, 1.0, 0.5),
        };
        let positions = expand_instances(Vec3::zero(), Some(&rule), 10.0);
        assert_eq!(positions[1], Vec3::new(0.0, -10.0, 0.5));
    }

    #[test]
    fn disabled_rule_is_not_found() {
        let obj = object_with(vec![array(false, 4, true, Vec3::new(1.0, 0.0, 0.0))]);
        assert!(array_rule(&obj).is_none());
    }

    #[test]
    fn count_one_rule_is_not_found() {
        let obj = object_with(vec![array(true, 1, true, Vec3::new(1.0, 0.0, 0.0))]);
        assert!(array_rule(&obj).is_none());
    }

    #[test]
    fn non_constant_offset_is_not_found() {
        let obj = object_with(vec![array(true, 4, false, Vec3::new(1.0, 0.0, 0.0))]);
        assert!(array_rule(&obj).is_none());
    }

    #[test]
    fn first_eligible_of_two_slots_wins() {
        let obj = object_with(vec![
            Modifier::Other("Subsurf".to_string()),
            array(true, 3, true, Vec3::new(0.0, 1.0, 0.0)),
        ]);
        assert_eq!(array_rule(&obj).unwrap().count, 3);
    }

    #[test]
    fn slot_two_is_ignored() {
        let obj = object_with(vec![
            Modifier::Other("Subsurf".to_string()),
            Modifier::Other("Mirror".to_string()),
            array(true, 3, true, Vec3::new(0.0, 1.0, 0.0)),
        ]);
        assert!(array_rule(&obj).is_none());
    }
}
