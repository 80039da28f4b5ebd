use mondaine_engine::coords::Vec2;

use super::DialGeometry;

/// How far the blade extends behind the pivot, in reference units.
const TAIL: f32 = 12.5;
const TAIL_HALF_WIDTH: f32 = 3.5;
const TIP_HALF_WIDTH: f32 = 2.5;

/// Outline of a tapered hour/minute hand pointing along `angle`.
///
/// Corners run: tail left, tail right, tip right, tip left (left/right seen
/// looking from the pivot toward the tip on a y-down screen).
pub fn hand_blade(geom: &DialGeometry, length: f32, angle: f64) -> [Vec2; 4] {
    let dir = Vec2::from_angle(angle);
    let across = dir.perp();

    let tail = geom.center - dir * geom.units(TAIL);
    let tip = geom.center + dir * length;
    let tail_half = across * geom.units(TAIL_HALF_WIDTH);
    let tip_half = across * geom.units(TIP_HALF_WIDTH);

    [tail + tail_half, tail - tail_half, tip - tip_half, tip + tip_half]
}
