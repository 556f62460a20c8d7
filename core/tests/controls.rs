//! Control-driven operations: tool switching, background, clear, resize, export.

mod common;

use common::{decode_data_url, Op, TestSurface, PAINT};
use image::GenericImageView;
use pretty_assertions::assert_eq;
use sketchboard_core::background::{SUNSET_ACCENT, SUNSET_PALETTE};
use sketchboard_core::board::{EXPORT_FILENAME, FALLBACK_FONT_FAMILY};
use sketchboard_core::{
    Board, BoardConfig, BoardError, Features, FontStatus, InputError, Point, Surface, Tool,
    ToolChange,
};

fn board_with(config: BoardConfig) -> Board<TestSurface> {
    let mut board = Board::new(TestSurface::new(), config);
    board.initialize(120.0, 80.0, FontStatus::Loaded);
    board
}

fn board() -> Board<TestSurface> {
    board_with(BoardConfig::default())
}

// ─── Initialization ─────────────────────────────────────────────────────

#[test]
fn initialize_sizes_and_clears() {
    let mut board = Board::new(TestSurface::new(), BoardConfig::default());
    board.initialize(120.0, 80.0, FontStatus::Loaded);
    assert_eq!(
        board.surface_mut().take_ops(),
        vec![
            Op::Resize(120.0, 80.0),
            Op::ClearRect(0.0, 0.0, 120.0, 80.0),
            Op::Font("20px 'Dancing Script', cursive".into()),
        ]
    );
    assert!(board.surface().is_blank());
}

#[test]
fn initialize_paints_sunset_when_enabled() {
    let config = BoardConfig {
        features: Features {
            sunset_on_start: true,
            ..Features::default()
        },
        ..BoardConfig::default()
    };
    let mut board = board_with(config);
    let gradient = board
        .surface_mut()
        .take_ops()
        .into_iter()
        .find_map(|op| match op {
            Op::GradientRect(gradient, ..) => Some(gradient),
            _ => None,
        })
        .expect("sunset painted on start");
    assert_eq!(gradient.stops[0].color, "#000000");
    assert_eq!(board.surface().pixel(0, 0), PAINT);
}

#[test]
fn sunset_on_start_needs_sunset_feature() {
    let config = BoardConfig {
        features: Features {
            sunset: false,
            sunset_on_start: true,
            ..Features::default()
        },
        ..BoardConfig::default()
    };
    let mut board = board_with(config);
    let ops = board.surface_mut().take_ops();
    assert!(!ops.iter().any(|op| matches!(op, Op::GradientRect(..))));
    assert!(board.surface().is_blank());
}

#[test]
fn font_failure_falls_back() {
    let mut board = Board::new(TestSurface::new(), BoardConfig::default());
    board.initialize(10.0, 10.0, FontStatus::Fallback);
    assert_eq!(board.font_family(), FALLBACK_FONT_FAMILY);
}

// ─── Tool switching ─────────────────────────────────────────────────────

#[test]
fn text_controls_visible_only_for_text_tool() {
    let mut board = board();
    assert_eq!(
        board.select_tool("text").unwrap(),
        ToolChange {
            tool: Tool::Text,
            text_controls_visible: true,
        }
    );
    for name in ["pencil", "brush", "eraser", "rectangle", "circle", "triangle"] {
        let change = board.select_tool(name).unwrap();
        assert!(!change.text_controls_visible, "{name}");
    }
}

#[test]
fn unknown_tool_keeps_current() {
    let mut board = board();
    board.select_tool("brush").unwrap();
    assert_eq!(
        board.select_tool("airbrush"),
        Err(BoardError::Input(InputError::UnknownTool("airbrush".into())))
    );
    assert_eq!(board.tool(), Tool::Brush);
}

#[test]
fn disabled_features_reject_tools() {
    let config = BoardConfig {
        features: Features {
            shapes: false,
            text: false,
            ..Features::default()
        },
        ..BoardConfig::default()
    };
    let mut board = board_with(config);
    assert_eq!(
        board.select_tool("circle"),
        Err(BoardError::ToolDisabled(Tool::Circle))
    );
    assert_eq!(
        board.select_tool("text"),
        Err(BoardError::ToolDisabled(Tool::Text))
    );
    assert_eq!(board.tool(), Tool::Pencil);
}

// ─── Background ─────────────────────────────────────────────────────────

#[test]
fn background_walks_palette_and_wraps() {
    let mut board = board();
    let mut seen = Vec::new();
    for _ in 0..SUNSET_PALETTE.len() + 2 {
        seen.push(board.cycle_background().unwrap());
    }
    let mut expected = SUNSET_PALETTE.to_vec();
    expected.extend_from_slice(&SUNSET_PALETTE[..2]);
    assert_eq!(seen, expected);
    assert_eq!(board.background_index(), 2);
}

#[test]
fn background_fills_whole_surface() {
    let mut board = board();
    board.surface_mut().take_ops();
    board.cycle_background().unwrap();
    let ops = board.surface_mut().take_ops();
    let [Op::GradientRect(gradient, x, y, w, h)] = ops.as_slice() else {
        panic!("expected one gradient fill, got {ops:?}");
    };
    assert_eq!((*x, *y, *w, *h), (0.0, 0.0, 120.0, 80.0));
    assert_eq!((gradient.y0, gradient.y1), (0.0, 80.0));
    assert_eq!(gradient.stops[0].color, "orange");
    assert_eq!(gradient.stops[1].color, SUNSET_ACCENT);
    assert!(board
        .surface()
        .pixels
        .pixels()
        .all(|pixel| *pixel == PAINT));
}

#[test]
fn background_disabled() {
    let mut config = BoardConfig::default();
    config.features.sunset = false;
    let mut board = board_with(config);
    assert_eq!(
        board.cycle_background(),
        Err(BoardError::BackgroundDisabled)
    );
    assert_eq!(board.background_index(), 0);
}

// ─── Clear, resize, export ──────────────────────────────────────────────

#[test]
fn clear_then_export_is_blank() {
    let mut board = board();
    board.cycle_background().unwrap();
    board.clear();
    assert!(board.surface().is_blank());

    let download = board.export().unwrap();
    assert_eq!(download.filename, EXPORT_FILENAME);
    assert_eq!(download.mime, "image/png");
    let image = decode_data_url(&download.href);
    assert_eq!(image.dimensions(), (120, 80));
    assert!(image.to_rgba8().pixels().all(|pixel| pixel.0[3] == 0));
}

#[test]
fn resize_blanks_and_matches_viewport() {
    let mut board = board();
    board.cycle_background().unwrap();
    board.resize(300.0, 200.0);
    assert_eq!(board.surface().width(), 300.0);
    assert_eq!(board.surface().height(), 200.0);
    assert!(board.surface().is_blank());

    let image = decode_data_url(&board.export().unwrap().href);
    assert_eq!(image.dimensions(), (300, 200));
}

#[test]
fn export_keeps_drawing() {
    let mut board = board();
    board.cycle_background().unwrap();
    let image = decode_data_url(&board.export().unwrap().href).to_rgba8();
    assert_eq!(*image.get_pixel(60, 40), PAINT);
}

#[test]
fn export_failure_is_reported() {
    let mut board = board();
    board.surface_mut().fail_encode = true;
    let error = board.export().unwrap_err();
    assert!(matches!(error, BoardError::Export(_)));
    assert_eq!(
        error.to_string(),
        "failed to export drawing: image encoding failed: canvas is tainted"
    );
}

#[test]
fn clear_mid_stroke_keeps_next_segment_anchored() {
    let mut board = board();
    board.pointer_down(Point::new(5.0, 5.0));
    board.surface_mut().take_ops();
    board.clear();
    assert_eq!(
        board.surface_mut().take_ops(),
        vec![
            Op::ClearRect(0.0, 0.0, 120.0, 80.0),
            Op::BeginPath,
            Op::MoveTo(5.0, 5.0),
        ]
    );
    assert!(board.is_drawing());

    board.pointer_move(Point::new(20.0, 20.0));
    let path = board
        .surface_mut()
        .take_ops()
        .into_iter()
        .filter(|op| matches!(op, Op::MoveTo(..) | Op::LineTo(..)))
        .collect::<Vec<_>>();
    assert_eq!(path, vec![Op::LineTo(20.0, 20.0), Op::MoveTo(20.0, 20.0)]);
}

#[test]
fn clear_while_idle_only_wipes() {
    let mut board = board();
    board.surface_mut().take_ops();
    board.clear();
    assert_eq!(
        board.surface_mut().take_ops(),
        vec![Op::ClearRect(0.0, 0.0, 120.0, 80.0)]
    );
}
