//! Backend-neutral draw list
//!
//! Lowers a `RenderFrame` into the primitives a 2D canvas needs: the jar
//! outline, then per token a faint halo, a coloured disc and a centred label.

use serde::Serialize;

use super::contrast::foreground_for;
use super::frame::RenderFrame;
use crate::sim::ContainerBounds;

pub const BORDER_WIDTH: f32 = 6.0;
pub const BORDER_COLOR: &str = "rgba(200,220,255,.5)";
pub const HALO_COLOR: &str = "rgba(255,255,255,.08)";
/// Disc radius relative to the token radius (the rest shows as halo)
pub const DISC_SCALE: f32 = 0.92;
/// Label size relative to the token radius
pub const FONT_SCALE: f32 = 0.9;
pub const FONT_FAMILY: &str = "system-ui, \"Microsoft JhengHei\"";
/// Labels sit slightly below centre to look optically centred
pub const LABEL_OFFSET_Y: f32 = 1.0;

/// One segment of a canvas path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathOp {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Stroke a closed path
    Stroke {
        path: Vec<PathOp>,
        line_width: f32,
        color: String,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: String,
    },
    /// Text centred on (x, y)
    FillText {
        text: String,
        x: f32,
        y: f32,
        font_px: u32,
        color: String,
    },
}

/// Clockwise rounded rectangle with quadratic corners, starting top-left
pub fn rounded_rect_path(bounds: &ContainerBounds) -> Vec<PathOp> {
    let (x, y, w, h) = (bounds.x, bounds.y, bounds.width, bounds.height);
    let r = bounds.effective_corner_radius();
    vec![
        PathOp::MoveTo { x: x + r, y },
        PathOp::LineTo { x: x + w - r, y },
        PathOp::QuadTo { cx: x + w, cy: y, x: x + w, y: y + r },
        PathOp::LineTo { x: x + w, y: y + h - r },
        PathOp::QuadTo { cx: x + w, cy: y + h, x: x + w - r, y: y + h },
        PathOp::LineTo { x: x + r, y: y + h },
        PathOp::QuadTo { cx: x, cy: y + h, x, y: y + h - r },
        PathOp::LineTo { x, y: y + r },
        PathOp::QuadTo { cx: x, cy: y, x: x + r, y },
    ]
}

#[inline]
pub fn font_px(radius: f32) -> u32 {
    (radius * FONT_SCALE).floor().max(0.0) as u32
}

/// CSS font shorthand for a label on a token of `radius`
pub fn font_css(radius: f32) -> String {
    format!("{}px {}", font_px(radius), FONT_FAMILY)
}

/// Draw list for one frame, outline first, tokens in spawn order
pub fn build(frame: &RenderFrame) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + frame.tokens.len() * 3);
    commands.push(DrawCommand::Stroke {
        path: rounded_rect_path(&frame.bounds),
        line_width: BORDER_WIDTH,
        color: BORDER_COLOR.to_string(),
    });

    for t in &frame.tokens {
        commands.push(DrawCommand::FillCircle {
            x: t.x,
            y: t.y,
            radius: t.radius,
            color: HALO_COLOR.to_string(),
        });
        commands.push(DrawCommand::FillCircle {
            x: t.x,
            y: t.y,
            radius: t.radius * DISC_SCALE,
            color: t.color.clone(),
        });
        commands.push(DrawCommand::FillText {
            text: t.label.clone(),
            x: t.x,
            y: t.y + LABEL_OFFSET_Y,
            font_px: font_px(t.radius),
            color: foreground_for(&t.color).css().to_string(),
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TokenSnapshot;

    fn frame() -> RenderFrame {
        RenderFrame {
            bounds: ContainerBounds::from_surface(400.0, 300.0, 30.0, 22.0),
            tokens: vec![
                TokenSnapshot {
                    x: 100.0,
                    y: 120.0,
                    radius: 34.0,
                    label: "Ann".into(),
                    color: "#8ab4f8".into(),
                },
                TokenSnapshot {
                    x: 200.0,
                    y: 220.0,
                    radius: 34.0,
                    label: "Bo".into(),
                    color: "#a78bfa".into(),
                },
            ],
        }
    }

    #[test]
    fn test_outline_then_three_commands_per_token() {
        let cmds = build(&frame());
        assert_eq!(cmds.len(), 7);
        assert!(matches!(cmds[0], DrawCommand::Stroke { line_width, .. } if line_width == BORDER_WIDTH));
    }

    #[test]
    fn test_token_layers() {
        let cmds = build(&frame());
        match &cmds[1] {
            DrawCommand::FillCircle { radius, color, .. } => {
                assert_eq!(*radius, 34.0);
                assert_eq!(color, HALO_COLOR);
            }
            other => panic!("expected halo, got {other:?}"),
        }
        match &cmds[2] {
            DrawCommand::FillCircle { radius, color, .. } => {
                assert!((radius - 31.28).abs() < 1e-4);
                assert_eq!(color, "#8ab4f8");
            }
            other => panic!("expected disc, got {other:?}"),
        }
        match &cmds[3] {
            DrawCommand::FillText { text, y, font_px, color, .. } => {
                assert_eq!(text, "Ann");
                assert_eq!(*y, 121.0);
                assert_eq!(*font_px, 30);
                assert_eq!(color, "#111827");
            }
            other => panic!("expected label, got {other:?}"),
        }
        match &cmds[6] {
            DrawCommand::FillText { color, .. } => assert_eq!(color, "rgba(255,255,255,.95)"),
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn test_rounded_rect_closes() {
        let b = ContainerBounds::from_surface(400.0, 300.0, 30.0, 22.0);
        let path = rounded_rect_path(&b);
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], PathOp::MoveTo { x: 52.0, y: 30.0 });
        assert_eq!(path[8], PathOp::QuadTo { cx: 30.0, cy: 30.0, x: 52.0, y: 30.0 });
    }

    #[test]
    fn test_font_css() {
        assert_eq!(font_css(34.0), "30px system-ui, \"Microsoft JhengHei\"");
        assert_eq!(font_px(10.0), 9);
    }
}
