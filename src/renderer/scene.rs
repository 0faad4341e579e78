//! Scene construction: session state -> display list
//!
//! Pure and deterministic apart from the wave phase, which is passed in.

use glam::Vec2;

use super::draw::{DrawCmd, Paint, Rect, Stroke, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Beam, CONNECTION_POINTS, Session, Vehicle, deck_y_at};
use crate::span_x;

/// Pixel size of a loaded bridge photo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

/// Loaded photos, indexed by `MaterialKind::index`. `None` until loaded.
pub type ImageTable = [Option<ImageSize>; 4];

const POINT_RADIUS: f32 = 8.0;
const SELECTION_RING_RADIUS: f32 = 13.0;
const BEAM_WIDTH: f32 = 3.0;
const BEAM_ALPHA: f32 = 0.5;
const OVERLAY_ALPHA: f32 = 0.85;
const OVERLAY_RISE: f32 = 30.0;
const OVERLAY_MIN_HEIGHT: f32 = 60.0;
const WAVE_ROWS: usize = 4;
const WAVE_STEP: usize = 15;
const VEHICLE_FONT: &str = "40px Arial";

/// Everything a frame depends on
#[derive(Debug, Clone)]
pub struct SceneInput<'a> {
    pub beams: &'a [Beam],
    pub selected_point: Option<usize>,
    pub vehicle: &'a Vehicle,
    /// Traversal fraction while a test is drawn
    pub vehicle_position: Option<f32>,
    pub bridge_failed: bool,
    pub images: ImageTable,
    /// Wall-clock ms driving the river waves
    pub wave_time: f64,
    pub image_overlays: bool,
}

impl<'a> SceneInput<'a> {
    pub fn new(session: &'a Session, images: ImageTable, settings: &Settings, now: f64) -> Self {
        Self {
            beams: &session.beams,
            selected_point: session.selected_point,
            vehicle: session.vehicle(),
            vehicle_position: session.vehicle_position,
            bridge_failed: session.bridge_failed,
            images,
            wave_time: settings.wave_time(now),
            image_overlays: settings.image_overlays,
        }
    }
}

/// Build the full frame, back to front
pub fn build_scene(input: &SceneInput) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(64 + input.beams.len() * 2);

    background(&mut cmds, input.wave_time);

    if input.image_overlays {
        for beam in input.beams {
            if let Some(cmd) = beam_overlay(beam, &input.images) {
                cmds.push(cmd);
            }
        }
    }

    for beam in input.beams {
        cmds.push(DrawCmd::Polyline {
            points: vec![beam.start, beam.end],
            stroke: Stroke {
                color: beam.material.color,
                width: BEAM_WIDTH,
            },
            alpha: BEAM_ALPHA,
        });
    }

    connection_points(&mut cmds, input.selected_point);

    if let Some(position) = input.vehicle_position {
        vehicle(&mut cmds, input, position);
    }

    cmds
}

fn background(cmds: &mut Vec<DrawCmd>, wave_time: f64) {
    cmds.push(DrawCmd::Clear);
    cmds.push(DrawCmd::FillRect {
        rect: Rect::new(0.0, 0.0, CANVAS_WIDTH, DECK_Y),
        paint: Paint::Vertical(colors::SKY),
    });
    cmds.push(DrawCmd::FillRect {
        rect: Rect::new(0.0, DECK_Y, CANVAS_WIDTH, CANVAS_HEIGHT - DECK_Y),
        paint: Paint::Vertical(colors::RIVER),
    });

    for row in 0..WAVE_ROWS {
        cmds.push(DrawCmd::Polyline {
            points: wave_points(row, wave_time),
            stroke: Stroke {
                color: colors::WAVE,
                width: 1.5,
            },
            alpha: 1.0,
        });
    }

    // Banks
    for x in [0.0, CANVAS_WIDTH - 80.0] {
        cmds.push(DrawCmd::FillRect {
            rect: Rect::new(x, DECK_Y, 80.0, CANVAS_HEIGHT - DECK_Y),
            paint: Paint::Solid(colors::GROUND),
        });
    }

    for x in [25.0, CANVAS_WIDTH - 25.0] {
        tree(cmds, x);
    }
}

/// One row of the river's sine ripple
pub fn wave_points(row: usize, wave_time: f64) -> Vec<Vec2> {
    let base = 265.0 + row as f64 * 18.0;
    (0..CANVAS_WIDTH as usize)
        .step_by(WAVE_STEP)
        .map(|x| {
            let x = x as f64;
            let y = base + ((x + wave_time / 800.0) / 25.0).sin() * 4.0;
            Vec2::new(x as f32, y as f32)
        })
        .collect()
}

fn tree(cmds: &mut Vec<DrawCmd>, x: f32) {
    cmds.push(DrawCmd::FillRect {
        rect: Rect::new(x - 5.0, 220.0, 10.0, 30.0),
        paint: Paint::Solid(colors::TRUNK),
    });
    cmds.push(DrawCmd::Circle {
        center: Vec2::new(x, 215.0),
        radius: 20.0,
        fill: Some(colors::CROWN),
        stroke: None,
    });
}

/// Photo strip behind a beam.
///
/// The beam's horizontal share of the span selects the matching slice of the
/// photo; the vertical band is always the middle 40% of the image. Returns
/// `None` when the photo is not loaded or the slice would fall outside it.
pub fn beam_overlay(beam: &Beam, images: &ImageTable) -> Option<DrawCmd> {
    let kind = beam.material.kind;
    let image = images[kind.index()]?;
    if image.width <= 0.0 || image.height <= 0.0 {
        return None;
    }

    let (min_x, max_x) = beam.x_range();
    let min_y = beam.start.y.min(beam.end.y);
    let max_y = beam.start.y.max(beam.end.y);
    let width = max_x - min_x;

    let src = Rect::new(
        (min_x - SPAN_START_X) / SPAN_WIDTH * image.width,
        image.height * 0.3,
        width / SPAN_WIDTH * image.width,
        image.height * 0.4,
    );
    if !src.has_area() || !src.within(image.width, image.height) {
        return None;
    }

    let dst = Rect::new(
        min_x,
        min_y - OVERLAY_RISE,
        width,
        (max_y - min_y).max(OVERLAY_MIN_HEIGHT),
    );

    Some(DrawCmd::Image {
        kind,
        src,
        dst,
        alpha: OVERLAY_ALPHA,
    })
}

fn connection_points(cmds: &mut Vec<DrawCmd>, selected: Option<usize>) {
    for (i, point) in CONNECTION_POINTS.iter().enumerate() {
        let fill = if selected == Some(i) {
            colors::POINT_SELECTED
        } else {
            colors::POINT
        };
        cmds.push(DrawCmd::Circle {
            center: *point,
            radius: POINT_RADIUS,
            fill: Some(fill),
            stroke: Some(Stroke {
                color: colors::POINT_OUTLINE,
                width: 2.0,
            }),
        });
    }

    if let Some(point) = selected.and_then(|i| CONNECTION_POINTS.get(i)) {
        cmds.push(DrawCmd::Circle {
            center: *point,
            radius: SELECTION_RING_RADIUS,
            fill: None,
            stroke: Some(Stroke {
                color: colors::SELECTION_RING,
                width: 3.0,
            }),
        });
    }
}

/// Canvas position of the vehicle glyph's anchor, if it is on screen.
///
/// A failing bridge ignores the structure and scripts a drop below the deck
/// past midspan.
pub fn vehicle_anchor(beams: &[Beam], position: f32, failing: bool) -> Option<Vec2> {
    if !(0.0..=1.0).contains(&position) {
        return None;
    }
    let x = span_x(position);
    let y = if failing {
        DECK_Y + (position - 0.5) * FALL_SCALE
    } else if !beams.is_empty() {
        deck_y_at(beams, x)
    } else {
        DECK_Y
    };
    Some(Vec2::new(x, y))
}

fn vehicle(cmds: &mut Vec<DrawCmd>, input: &SceneInput, position: f32) {
    let Some(anchor) = vehicle_anchor(input.beams, position, input.bridge_failed) else {
        return;
    };

    cmds.push(DrawCmd::Text {
        text: input.vehicle.icon,
        pos: anchor - Vec2::new(0.0, 10.0),
        font: VEHICLE_FONT,
    });

    if input.bridge_failed {
        cmds.push(DrawCmd::Circle {
            center: anchor - Vec2::new(0.0, 35.0),
            radius: 12.0,
            fill: Some(colors::IMPACT),
            stroke: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MATERIALS, MaterialKind, VEHICLES};

    const LOADED: ImageSize = ImageSize {
        width: 1000.0,
        height: 500.0,
    };

    fn overlay_kinds(cmds: &[DrawCmd]) -> Vec<MaterialKind> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Image { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    fn beam(a: usize, b: usize, m: usize) -> Beam {
        Beam::new(CONNECTION_POINTS[a], CONNECTION_POINTS[b], MATERIALS[m])
    }

    fn input<'a>(beams: &'a [Beam]) -> SceneInput<'a> {
        SceneInput {
            beams,
            selected_point: None,
            vehicle: &VEHICLES[0],
            vehicle_position: None,
            bridge_failed: false,
            images: [None; 4],
            wave_time: 0.0,
            image_overlays: true,
        }
    }

    fn circles_at(cmds: &[DrawCmd], at: Vec2) -> Vec<&DrawCmd> {
        cmds.iter()
            .filter(|c| matches!(c, DrawCmd::Circle { center, .. } if *center == at))
            .collect()
    }

    #[test]
    fn test_empty_scene_layers() {
        let cmds = build_scene(&input(&[]));
        assert_eq!(cmds[0], DrawCmd::Clear);
        assert!(matches!(cmds[1], DrawCmd::FillRect { paint: Paint::Vertical(g), .. } if g == colors::SKY));
        assert!(matches!(cmds[2], DrawCmd::FillRect { paint: Paint::Vertical(g), .. } if g == colors::RIVER));
        // 4 waves + 2 banks + 2 trees x 2 parts + 6 points
        assert_eq!(cmds.len(), 3 + 4 + 2 + 4 + 6);
        assert!(matches!(cmds.last(), Some(DrawCmd::Circle { .. })));
    }

    #[test]
    fn test_wave_rows() {
        let row = wave_points(2, 0.0);
        assert_eq!(row.len(), 40);
        assert_eq!(row[0], Vec2::new(0.0, 301.0));
        assert_eq!(row.last().map(|p| p.x), Some(585.0));
        assert!(row.iter().all(|p| (297.0..=305.0).contains(&p.y)));

        // Phase moves with time
        assert_ne!(wave_points(0, 0.0), wave_points(0, 20_000.0));
    }

    #[test]
    fn test_overlay_skipped_until_image_loads() {
        let beams = [beam(0, 1, 0), beam(1, 2, 2)];
        let mut inp = input(&beams);
        assert!(overlay_kinds(&build_scene(&inp)).is_empty());

        inp.images[MaterialKind::Wood.index()] = Some(LOADED);
        assert_eq!(overlay_kinds(&build_scene(&inp)), vec![MaterialKind::Wood]);

        inp.image_overlays = false;
        assert!(overlay_kinds(&build_scene(&inp)).is_empty());
    }

    #[test]
    fn test_overlay_geometry() {
        let mut images = [None; 4];
        images[0] = Some(LOADED);
        // (150,200) -> (250,180), drawn right to left
        let cmd = beam_overlay(&beam(2, 1, 0), &images).unwrap();
        let DrawCmd::Image { src, dst, alpha, .. } = cmd else {
            panic!("expected image");
        };
        assert_eq!(src, Rect::new(200.0, 150.0, 200.0, 200.0));
        assert_eq!(dst, Rect::new(150.0, 150.0, 100.0, 60.0));
        assert_eq!(alpha, OVERLAY_ALPHA);

        // Full span
        let cmd = beam_overlay(&beam(0, 5, 0), &images).unwrap();
        let DrawCmd::Image { src, .. } = cmd else {
            panic!("expected image");
        };
        assert_eq!(src, Rect::new(0.0, 150.0, 1000.0, 200.0));
    }

    #[test]
    fn test_overlay_skips_degenerate_source() {
        let mut images = [None; 4];
        images[0] = Some(LOADED);
        let vertical = Beam::new(Vec2::new(300.0, 100.0), Vec2::new(300.0, 200.0), MATERIALS[0]);
        assert!(beam_overlay(&vertical, &images).is_none());

        // Off the left edge of the span
        let off = Beam::new(Vec2::new(0.0, 250.0), Vec2::new(40.0, 250.0), MATERIALS[0]);
        assert!(beam_overlay(&off, &images).is_none());

        images[0] = Some(ImageSize { width: 0.0, height: 0.0 });
        assert!(beam_overlay(&beam(0, 1, 0), &images).is_none());
    }

    #[test]
    fn test_beams_drawn_after_overlays() {
        let beams = [beam(0, 1, 0)];
        let mut inp = input(&beams);
        inp.images[0] = Some(LOADED);
        let cmds = build_scene(&inp);
        let image_at = cmds.iter().position(|c| matches!(c, DrawCmd::Image { .. })).unwrap();
        let stroke_at = cmds
            .iter()
            .position(|c| matches!(c, DrawCmd::Polyline { stroke, .. } if stroke.color == MATERIALS[0].color))
            .unwrap();
        assert!(image_at < stroke_at);
    }

    #[test]
    fn test_selected_point_highlight() {
        let mut inp = input(&[]);
        inp.selected_point = Some(3);
        let cmds = build_scene(&inp);
        let at = circles_at(&cmds, CONNECTION_POINTS[3]);
        assert_eq!(at.len(), 2);
        assert!(matches!(at[0], DrawCmd::Circle { fill: Some(c), .. } if *c == colors::POINT_SELECTED));
        assert!(matches!(at[1], DrawCmd::Circle { fill: None, radius, .. } if *radius == SELECTION_RING_RADIUS));

        let other = circles_at(&cmds, CONNECTION_POINTS[0]);
        assert!(matches!(other[0], DrawCmd::Circle { fill: Some(c), .. } if *c == colors::POINT));
    }

    #[test]
    fn test_vehicle_rides_on_beams() {
        let beams = [beam(2, 3, 0)];
        let anchor = vehicle_anchor(&beams, 0.5, false).unwrap();
        assert_eq!(anchor, Vec2::new(300.0, 162.0));

        // No beams: rest at the water line
        assert_eq!(vehicle_anchor(&[], 0.5, false), Some(Vec2::new(300.0, DECK_Y)));
    }

    #[test]
    fn test_failing_vehicle_follows_scripted_drop() {
        let beams = [beam(2, 3, 0)];
        assert_eq!(vehicle_anchor(&beams, 0.5, true), Some(Vec2::new(300.0, 250.0)));
        assert_eq!(vehicle_anchor(&beams, 0.75, true), Some(Vec2::new(425.0, 325.0)));
        assert_eq!(vehicle_anchor(&beams, 0.0, true), Some(Vec2::new(50.0, 100.0)));
        // Overshoot past the far bank is not drawn
        assert_eq!(vehicle_anchor(&beams, 1.25, true), None);
    }

    #[test]
    fn test_vehicle_glyph_and_impact() {
        let beams = [beam(0, 5, 2)];
        let mut inp = input(&beams);
        inp.vehicle_position = Some(0.5);
        let cmds = build_scene(&inp);
        assert!(matches!(
            cmds.last(),
            Some(DrawCmd::Text { text, pos, .. }) if *text == "🚲" && *pos == Vec2::new(300.0, 222.0)
        ));

        inp.bridge_failed = true;
        let cmds = build_scene(&inp);
        let n = cmds.len();
        assert!(matches!(&cmds[n - 2], DrawCmd::Text { pos, .. } if *pos == Vec2::new(300.0, 240.0)));
        assert!(matches!(
            &cmds[n - 1],
            DrawCmd::Circle { center, fill: Some(c), .. } if *center == Vec2::new(300.0, 215.0) && *c == colors::IMPACT
        ));
    }

    #[test]
    fn test_scene_from_session() {
        let mut session = Session::default();
        session.selected_point = Some(1);
        session.vehicle_position = Some(0.1);
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let inp = SceneInput::new(&session, [None; 4], &settings, 99_999.0);
        assert_eq!(inp.wave_time, 0.0);
        assert_eq!(inp.selected_point, Some(1));
        assert_eq!(inp.vehicle.icon, "🚲");
        assert!(inp.image_overlays);
    }
}
