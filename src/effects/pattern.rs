use crate::assets::color::Rgb;
use crate::render::canvas::Canvas;

/// Alpha of pattern marks.
pub const PATTERN_ALPHA: u8 = 40;

const DOT_STEP: u32 = 40;
const DOT_SIZE: f64 = 4.0;
const LINE_STEP: u32 = 60;

/// Background texture laid over the whole canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Small dots on a square grid.
    #[default]
    Dots,
    /// Parallel 1px diagonals.
    Lines,
}

/// Cover the canvas with a faint `kind` pattern in `color`.
pub fn geometric_pattern(canvas: &mut Canvas, color: Rgb, kind: PatternKind) {
    use vello_cpu::kurbo::Shape as _;

    let (w, h) = (canvas.width(), canvas.height());
    let fill = color.with_alpha(PATTERN_ALPHA);
    let mut path = vello_cpu::kurbo::BezPath::new();
    match kind {
        PatternKind::Dots => {
            for x in (0..w).step_by(DOT_STEP as usize) {
                for y in (0..h).step_by(DOT_STEP as usize) {
                    let (x, y) = (f64::from(x), f64::from(y));
                    let dot = vello_cpu::kurbo::Ellipse::from_rect(vello_cpu::kurbo::Rect::new(
                        x,
                        y,
                        x + DOT_SIZE,
                        y + DOT_SIZE,
                    ));
                    path.extend(dot.path_elements(0.1));
                }
            }
            canvas.fill_path(&path, fill);
        }
        PatternKind::Lines => {
            for i in (0..w + h).step_by(LINE_STEP as usize) {
                let i = f64::from(i);
                path.move_to((i, 0.0));
                path.line_to((0.0, i));
            }
            canvas.stroke_path(&path, 1.0, fill);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pattern.rs"]
mod tests;
