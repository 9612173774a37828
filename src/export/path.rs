//! Spline to SVG path conversion.
//!
//! A closed Bezier spline becomes one `M` command followed by one `C`
//! command per control-point pair, plus a final `C` segment connecting
//! the last point back to the first. The closing segment is emitted
//! unconditionally; exported curves are always treated as loops.

use crate::export::note;
use crate::scene::types::{Mat4, Spline, SplineKind, Vec3};

/// Format a number with 6 decimal places, treating -0 as 0
pub(crate) fn fmt_num(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.6}", n)
}

/// View transform: negates Y, leaves X and Z unchanged.
///
/// SVG's y axis points down while the scene's points up; composing this
/// in front of any object matrix maps scene space onto the canvas.
pub fn view_flip() -> Mat4 {
    Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, -1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

fn project(matrix: &Mat4, scale: f64, p: Vec3) -> (f64, f64) {
    let w = matrix.transform_point(p);
    (w.x * scale, w.y * scale)
}

fn curve_command(matrix: &Mat4, scale: f64, c1: Vec3, c2: Vec3, end: Vec3) -> String {
    let (c1x, c1y) = project(matrix, scale, c1);
    let (c2x, c2y) = project(matrix, scale, c2);
    let (x, y) = project(matrix, scale, end);
    format!(
        "C{},{} {},{} {},{}",
        fmt_num(c1x),
        fmt_num(c1y),
        fmt_num(c2x),
        fmt_num(c2y),
        fmt_num(x),
        fmt_num(y)
    )
}

/// Convert one spline to a path command list.
///
/// The caller supplies the full point transform (view flip, optionally
/// composed with the object's world matrix) and the canvas scale.
/// Returns `None` for non-Bezier splines and splines with fewer than two
/// points; both are skipped with a diagnostic, never an error.
///
/// An `N`-point spline always yields `N + 1` commands: the initial move,
/// `N - 1` curve segments, and the unconditional closing segment.
pub fn spline_commands(
    spline: &Spline,
    matrix: &Mat4,
    scale: f64,
    log: &mut Vec<String>,
) -> Option<Vec<String>> {
    if spline.kind != SplineKind::Bezier {
        note(log, format!("Spline type is not Bezier: {:?}", spline.kind));
        return None;
    }

    if spline.points.len() < 2 {
        note(
            log,
            format!("Spline has fewer than 2 points: {}", spline.points.len()),
        );
        return None;
    }

    let points = &spline.points;
    let mut commands = Vec::with_capacity(points.len() + 1);

    let (mx, my) = project(matrix, scale, points[0].co);
    commands.push(format!("M{},{}", fmt_num(mx), fmt_num(my)));

    for pair in points.windows(2) {
        commands.push(curve_command(
            matrix,
            scale,
            pair[0].handle_right,
            pair[1].handle_left,
            pair[1].co,
        ));
    }

    // Close the loop back to the first point
    let first = &points[0];
    let last = &points[points.len() - 1];
    commands.push(curve_command(
        matrix,
        scale,
        last.handle_right,
        first.handle_left,
        first.co,
    ));

    Some(commands)
}

/// Convert one spline to an SVG path `d` attribute value
pub fn spline_path_data(
    spline: &Spline,
    matrix: &Mat4,
    scale: f64,
    log: &mut Vec<String>,
) -> Option<String> {
    spline_commands(spline, matrix, scale, log).map(|commands| commands.join(" "))
}
