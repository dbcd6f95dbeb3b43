use board_cells::axis::AxisErrorKind;
use board_cells::{
    Axis, BoardSize, CellDetectConfig, GridCellMapper, MapError, PixelRect, PuzzleGrid,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn testdata_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata")
        .join(name)
}

#[derive(Deserialize)]
struct Expected {
    expected: Vec<[usize; 2]>,
}

#[test]
fn fixture_with_missing_top_row_maps_every_detection() {
    let path = testdata_path("akari_7x7_missing_top_row.json");
    let cfg = CellDetectConfig::load_json(&path).expect("load config");
    let expected: Expected =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read fixture"))
            .expect("parse expected slots");

    let (rows, cols) = cfg.dimensions().expect("dimensions from level data");
    assert_eq!((rows, cols), (7, 7));

    let mapping = cfg.run(rows, cols).expect("mapping");
    assert_eq!(mapping.cells.len(), cfg.rectangles.len());
    for (i, (cell, want)) in mapping.cells.iter().zip(&expected.expected).enumerate() {
        assert_eq!([cell.row, cell.col], *want, "rectangle #{i}");
        assert_eq!(cell.rect, cfg.rectangles[i]);
    }

    // Row 0 was never detected but is still located.
    assert_eq!(mapping.y.shift, 1);
    assert!(mapping.missing_slots().iter().any(|&(r, _)| r == 0));
    for slot in mapping.slot_centers() {
        assert!((slot.center.x - (slot.col as f64 * 60.0 + 30.0)).abs() < 4.0);
        assert!((slot.center.y - (slot.row as f64 * 60.0 + 30.0)).abs() < 4.0);
    }
    assert!(mapping.has_collisions());
}

#[test]
fn overflow_fixture_reports_column_axis() {
    let cfg = CellDetectConfig::load_json(testdata_path("overflow_6_columns.json")).unwrap();
    let (rows, cols) = cfg.dimensions().unwrap();
    let err = cfg.run(rows, cols).unwrap_err();
    assert_eq!(err.axis(), Some(Axis::X));
    assert_eq!(err.kind(), AxisErrorKind::Overflow);
}

#[test]
fn cells_are_distinct_and_order_preserving() {
    let board = BoardSize::new(500, 500);
    let rects = vec![
        PixelRect::from_origin_size(310, 110, 80, 80),
        PixelRect::from_origin_size(10, 410, 80, 80),
        PixelRect::from_origin_size(210, 10, 80, 80),
        PixelRect::from_origin_size(410, 210, 80, 80),
    ];
    let mapping = GridCellMapper::default()
        .identify(board, 5, 5, &rects)
        .unwrap();

    let slots: Vec<(usize, usize)> = mapping.cells.iter().map(|c| c.slot()).collect();
    assert_eq!(slots, vec![(1, 3), (4, 0), (0, 2), (2, 4)]);
    for (cell, rect) in mapping.cells.iter().zip(&rects) {
        assert_eq!(cell.rect, *rect);
        assert!(cell.row < 5 && cell.col < 5);
    }
}

#[test]
fn level_data_drives_grid_size() {
    let grid: PuzzleGrid = ". . 1\n# . .\n\nmeta".parse().unwrap();
    let rects = vec![
        PixelRect::from_origin_size(4, 4, 40, 40),
        PixelRect::from_origin_size(104, 54, 40, 40),
    ];
    let mapping = GridCellMapper::default()
        .identify(BoardSize::new(150, 100), grid.rows(), grid.cols(), &rects)
        .unwrap();
    assert_eq!(mapping.cells[0].slot(), (0, 0));
    assert_eq!(mapping.cells[1].slot(), (1, 2));
    assert_eq!(grid.get(1, 0), Some("#"));
}

#[test]
fn empty_detection_is_an_input_error() {
    let err = GridCellMapper::default()
        .identify(BoardSize::new(100, 100), 2, 2, &[])
        .unwrap_err();
    assert_eq!(err, MapError::Empty);
    assert_eq!(err.kind(), AxisErrorKind::Input);
}

#[test]
fn cells_serialize_for_http_layer() {
    let rects = vec![PixelRect::from_origin_size(0, 0, 10, 10)];
    let cells = board_cells::identify_grid_cells(BoardSize::new(10, 10), 1, 1, &rects).unwrap();
    let json = serde_json::to_value(serde_json::json!({ "cells": cells })).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "cells": [{ "rect": { "min": [0, 0], "max": [10, 10] }, "row": 0, "col": 0 }]
        })
    );
}
