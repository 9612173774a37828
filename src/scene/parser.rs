use crate::error::ExportError;
use crate::scene::types::*;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse a whitespace-separated float list
fn parse_floats(s: &str) -> Vec<f64> {
    s.split_whitespace().filter_map(|t| t.parse().ok()).collect()
}

/// Parse a "x y z" attribute value into a Vec3
pub fn parse_vec3(s: &str) -> Vec3 {
    let parts = parse_floats(s);
    if parts.len() == 3 {
        Vec3::new(parts[0], parts[1], parts[2])
    } else {
        tracing::warn!("Invalid vector, using zero: {}", s);
        Vec3::zero()
    }
}

/// Parse 16 row-major floats into a Mat4
pub fn parse_mat4(s: &str) -> Mat4 {
    let parts = parse_floats(s);
    if parts.len() == 16 {
        let mut m = [[0.0; 4]; 4];
        for (i, v) in parts.iter().enumerate() {
            m[i / 4][i % 4] = *v;
        }
        Mat4::from_rows(m)
    } else {
        tracing::warn!("Invalid matrix, using identity: {}", s);
        Mat4::identity()
    }
}

fn attr_map(e: &BytesStart) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
        let value = std::str::from_utf8(&attr.value).unwrap_or("");
        out.push((key.to_string(), value.to_string()));
    }
    out
}

fn parse_modifier(e: &BytesStart) -> Modifier {
    let mut kind = String::new();
    let mut enabled = true;
    let mut count: u32 = 0;
    let mut constant_offset = false;
    let mut offset = Vec3::zero();

    for (key, value) in attr_map(e) {
        match key.as_str() {
            "Type" => kind = value,
            "Enabled" => enabled = value == "1",
            "Count" => count = value.parse().unwrap_or(0),
            "UseConstantOffset" => constant_offset = value == "1",
            "Offset" => offset = parse_vec3(&value),
            _ => {}
        }
    }

    if kind == "Array" {
        Modifier::Array(ArrayModifier {
            enabled,
            count,
            constant_offset,
            offset,
        })
    } else {
        Modifier::Other(kind)
    }
}

fn parse_material(e: &BytesStart) -> Material {
    let mut diffuse_color = [0.0; 3];
    let mut alpha = 1.0;

    for (key, value) in attr_map(e) {
        match key.as_str() {
            "DiffuseColor" => {
                let parts = parse_floats(&value);
                if parts.len() == 3 {
                    diffuse_color = [parts[0], parts[1], parts[2]];
                }
            }
            "Alpha" => alpha = value.parse().unwrap_or(1.0),
            _ => {}
        }
    }

    Material {
        diffuse_color,
        alpha,
    }
}

fn parse_point(e: &BytesStart) -> BezierPoint {
    let mut co = Vec3::zero();
    let mut handle_left = Vec3::zero();
    let mut handle_right = Vec3::zero();

    for (key, value) in attr_map(e) {
        match key.as_str() {
            "Co" => co = parse_vec3(&value),
            "HandleLeft" => handle_left = parse_vec3(&value),
            "HandleRight" => handle_right = parse_vec3(&value),
            _ => {}
        }
    }

    BezierPoint {
        co,
        handle_left,
        handle_right,
    }
}

fn parse_spline_inner(reader: &mut Reader<&[u8]>, e: &BytesStart) -> Result<Spline, ExportError> {
    let mut kind = SplineKind::Bezier;
    let mut cyclic = false;

    for (key, value) in attr_map(e) {
        match key.as_str() {
            "Type" => {
                kind = match value.as_str() {
                    "Poly" => SplineKind::Poly,
                    "Nurbs" => SplineKind::Nurbs,
                    _ => SplineKind::Bezier,
                }
            }
            "Cyclic" => cyclic = value == "1",
            _ => {}
        }
    }

    let mut points = Vec::new();
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                if tag_name(e) == "Point" {
                    points.push(parse_point(e));
                }
            }
            Ok(Event::Empty(ref e)) => {
                if tag_name(e) == "Point" {
                    points.push(parse_point(e));
                }
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExportError::snapshot(format!("error parsing Spline: {:?}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(Spline {
        kind,
        points,
        cyclic,
    })
}

fn parse_curve_inner(reader: &mut Reader<&[u8]>, e: &BytesStart) -> Result<CurveData, ExportError> {
    let mut dimensions = CurveDimensions::TwoD;

    for (key, value) in attr_map(e) {
        if key == "Dimensions" && value == "3D" {
            dimensions = CurveDimensions::ThreeD;
        }
    }

    let mut splines = Vec::new();
    let mut materials = Vec::new();
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let tag = tag_name(e).to_string();
                if tag == "Spline" {
                    splines.push(parse_spline_inner(reader, e)?);
                } else {
                    depth += 1;
                    if tag == "Material" {
                        materials.push(Some(parse_material(e)));
                    }
                }
            }
            Ok(Event::Empty(ref e)) => match tag_name(e) {
                "Material" => materials.push(Some(parse_material(e))),
                "MaterialSlot" => materials.push(None),
                "Spline" => splines.push(Spline {
                    kind: SplineKind::Bezier,
                    points: Vec::new(),
                    cyclic: false,
                }),
                _ => {}
            },
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExportError::snapshot(format!("error parsing Curve: {:?}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(CurveData {
        dimensions,
        splines,
        materials,
    })
}

fn parse_object_inner(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart,
) -> Result<SceneObject, ExportError> {
    let mut name = String::new();
    let mut visible = true;
    let mut kind = ObjectKind::Other;

    for (key, value) in attr_map(e) {
        match key.as_str() {
            "Name" => name = value,
            "Visible" => visible = value == "1",
            "Type" => {
                if value == "Curve" {
                    kind = ObjectKind::Curve;
                }
            }
            _ => {}
        }
    }

    let mut matrix_world = Mat4::identity();
    let mut curve = None;
    let mut modifiers = Vec::new();

    let mut buf = Vec::new();
    let mut depth = 1;
    let mut current_tag = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let tag = tag_name(e).to_string();
                if tag == "Curve" {
                    curve = Some(parse_curve_inner(reader, e)?);
                } else {
                    depth += 1;
                    if tag == "Modifier" {
                        modifiers.push(parse_modifier(e));
                    }
                    current_tag = tag;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if tag_name(e) == "Modifier" {
                    modifiers.push(parse_modifier(e));
                }
            }
            Ok(Event::Text(ref e)) => {
                if current_tag == "MatrixWorld" {
                    let text = String::from_utf8_lossy(e.as_ref());
                    matrix_world = parse_mat4(&text);
                }
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                current_tag.clear();
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExportError::snapshot(format!("error parsing Object: {:?}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(SceneObject {
        name,
        visible,
        kind,
        matrix_world,
        curve,
        modifiers,
    })
}

fn tag_name<'a>(e: &'a BytesStart) -> &'a str {
    std::str::from_utf8(e.name().into_inner()).unwrap_or("")
}

/// Parse a scene snapshot XML document into a [`SceneSnapshot`]
pub fn parse_snapshot(xml: &str) -> Result<SceneSnapshot, ExportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut objects = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if tag_name(e) == "Object" {
                    objects.push(parse_object_inner(&mut reader, e)?);
                }
            }
            Ok(Event::Empty(ref e)) => {
                if tag_name(e) == "Object" {
                    // Object with no children: attributes only
                    let mut name = String::new();
                    let mut visible = true;
                    let mut kind = ObjectKind::Other;
                    for (key, value) in attr_map(e) {
                        match key.as_str() {
                            "Name" => name = value,
                            "Visible" => visible = value == "1",
                            "Type" => {
                                if value == "Curve" {
                                    kind = ObjectKind::Curve;
                                }
                            }
                            _ => {}
                        }
                    }
                    objects.push(SceneObject {
                        name,
                        visible,
                        kind,
                        matrix_world: Mat4::identity(),
                        curve: None,
                        modifiers: Vec::new(),
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExportError::snapshot(format!("XML parsing error: {:?}", e)));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(SceneSnapshot { objects })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
<Scene>
  <Object Name="disc" Type="Curve" Visible="1">
    <MatrixWorld>1 0 0 2  0 1 0 3  0 0 1 4  0 0 0 1</MatrixWorld>
    <Curve Dimensions="2D">
      <Spline Type="Bezier" Cyclic="1">
        <Point Co="0 1 0" HandleLeft="-1 1 0" HandleRight="1 1 0"/>
        <Point Co="1 0 0" HandleLeft="1 1 0" HandleRight="1 -1 0"/>
      </Spline>
      <Material DiffuseColor="1 0.5 0" Alpha="0.9"/>
      <MaterialSlot/>
    </Curve>
    <Modifier Type="Array" Enabled="1" Count="3" UseConstantOffset="1" Offset="1 0 0"/>
    <Modifier Type="Subsurf"/>
  </Object>
  <Object Name="lamp" Type="Lamp" Visible="0"/>
</Scene>
"#;

    #[test]
    fn parses_objects_and_attributes() {
        let scene = parse_snapshot(SAMPLE).unwrap();
        assert_eq!(scene.objects.len(), 2);

        let disc = &scene.objects[0];
        assert_eq!(disc.name, "disc");
        assert!(disc.visible);
        assert_eq!(disc.kind, ObjectKind::Curve);
        assert_eq!(
            disc.matrix_world.translation(),
            Vec3::new(2.0, 3.0, 4.0)
        );

        let lamp = &scene.objects[1];
        assert_eq!(lamp.kind, ObjectKind::Other);
        assert!(!lamp.visible);
    }

    #[test]
    fn parses_curve_data() {
        let scene = parse_snapshot(SAMPLE).unwrap();
        let curve = scene.objects[0].curve.as_ref().unwrap();
        assert_eq!(curve.dimensions, CurveDimensions::TwoD);
        assert_eq!(curve.splines.len(), 1);

        let spline = &curve.splines[0];
        assert_eq!(spline.kind, SplineKind::Bezier);
        assert!(spline.cyclic);
        assert_eq!(spline.points.len(), 2);
        assert_eq!(spline.points[0].co, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(spline.points[1].handle_left, Vec3::new(1.0, 1.0, 0.0));

        assert_eq!(curve.materials.len(), 2);
        let mat = curve.materials[0].as_ref().unwrap();
        assert_eq!(mat.diffuse_color, [1.0, 0.5, 0.0]);
        assert_eq!(mat.alpha, 0.9);
        assert!(curve.materials[1].is_none());
    }

    #[test]
    fn parses_modifiers() {
        let scene = parse_snapshot(SAMPLE).unwrap();
        let mods = &scene.objects[0].modifiers;
        assert_eq!(mods.len(), 2);
        match &mods[0] {
            Modifier::Array(a) => {
                assert!(a.enabled);
                assert_eq!(a.count, 3);
                assert!(a.constant_offset);
                assert_eq!(a.offset, Vec3::new(1.0, 0.0, 0.0));
            }
            other => panic!("expected array modifier, got {:?}", other),
        }
        assert_eq!(mods[1], Modifier::Other("Subsurf".to_string()));
    }

    #[test]
    fn invalid_matrix_falls_back_to_identity() {
        let xml = r#"<Scene><Object Name="o" Type="Curve">
            <MatrixWorld>1 2 3</MatrixWorld></Object></Scene>"#;
        let scene = parse_snapshot(xml).unwrap();
        assert_eq!(scene.objects[0].matrix_world, Mat4::identity());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_snapshot("<Scene><Object").is_err());
    }
}
