use narwhal::{
    CellSizing, Error, FillOrder, FitPolicy, GridSpec, Rect, Size, layout, place_items,
    place_sections,
};

fn spec_4x3(fit: FitPolicy) -> GridSpec {
    GridSpec {
        canvas: Size::new(1000, 600),
        margin: 20,
        h_spacing: 10,
        v_spacing: 10,
        columns: 4,
        rows: 3,
        fit,
        ..Default::default()
    }
}

fn mixed_items(n: usize) -> Vec<Size> {
    let shapes = [
        Size::new(200, 100),
        Size::new(100, 200),
        Size::new(50, 50),
        Size::new(640, 480),
        Size::new(1950, 1500),
    ];
    (0..n).map(|i| shapes[i % shapes.len()]).collect()
}

#[test]
fn twelve_items_fill_exactly_one_canvas() {
    let spec = spec_4x3(FitPolicy::Contain);
    let out = place_items(&mixed_items(12), &spec).unwrap();
    assert_eq!(out.canvas_count, 1);
    assert_eq!(out.placements.len(), 12);

    let canvas = Rect::new(0, 0, spec.canvas.width, spec.canvas.height);
    for p in &out.placements {
        assert_eq!(p.canvas, 0);
        assert!(canvas.contains_rect(&p.cell), "{p:?}");
        assert!(canvas.contains_rect(&p.rect), "{p:?}");
    }
}

#[test]
fn thirteenth_item_opens_a_second_canvas() {
    let out = place_items(&mixed_items(13), &spec_4x3(FitPolicy::Contain)).unwrap();
    assert_eq!(out.canvas_count, 2);
    assert_eq!(out.canvas(0).count(), 12);
    assert_eq!(out.canvas(1).count(), 1);

    let pages = out.pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1][0].item, 12);
    assert_eq!((pages[1][0].row, pages[1][0].column), (0, 0));
}

#[test]
fn canvas_count_is_ceiling_of_capacity() {
    let spec = spec_4x3(FitPolicy::Contain);
    for n in [1usize, 11, 12, 24, 25, 37] {
        let out = place_items(&mixed_items(n), &spec).unwrap();
        assert_eq!(out.canvas_count, n.div_ceil(12), "n = {n}");
        let items: Vec<usize> = out.placements.iter().map(|p| p.item).collect();
        assert_eq!(items, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn zero_items_give_zero_canvases() {
    let out = place_items(&[], &spec_4x3(FitPolicy::Cover)).unwrap();
    assert_eq!(out.canvas_count, 0);
    assert!(out.is_empty());
    assert!(out.pages().is_empty());
}

#[test]
fn contain_never_exceeds_the_cell() {
    let out = place_items(&mixed_items(20), &spec_4x3(FitPolicy::Contain)).unwrap();
    for p in &out.placements {
        assert!(p.rect.width <= p.cell.width, "{p:?}");
        assert!(p.rect.height <= p.cell.height, "{p:?}");
        assert!(p.cell.contains_rect(&p.rect), "{p:?}");
    }
}

#[test]
fn cover_always_covers_the_cell() {
    let out = place_items(&mixed_items(20), &spec_4x3(FitPolicy::Cover)).unwrap();
    for p in &out.placements {
        assert!(p.rect.width >= p.cell.width, "{p:?}");
        assert!(p.rect.height >= p.cell.height, "{p:?}");
        assert!(p.rect.contains_rect(&p.cell), "{p:?}");
    }
}

fn assert_partial_canvases_centered(spec: &GridSpec) {
    for n in 1..12 {
        let out = place_items(&mixed_items(n), spec).unwrap();
        let bbox = Rect::bounding(out.placements.iter().map(|p| &p.cell)).unwrap();
        let left_gap = bbox.left;
        let right_gap = spec.canvas.width - bbox.right();
        let top_gap = bbox.top;
        let bottom_gap = spec.canvas.height - bbox.bottom();
        assert!((left_gap - right_gap).abs() <= 1, "n = {n}: {bbox:?}");
        assert!((top_gap - bottom_gap).abs() <= 1, "n = {n}: {bbox:?}");
    }
}

#[test]
fn partial_canvas_is_centered() {
    assert_partial_canvases_centered(&spec_4x3(FitPolicy::Contain));
}

#[test]
fn partial_column_major_canvas_is_centered() {
    assert_partial_canvases_centered(&GridSpec {
        fill_order: FillOrder::ColumnMajor,
        ..spec_4x3(FitPolicy::Contain)
    });
}

#[test]
fn fixed_grid_keeps_partial_canvas_in_full_grid_positions() {
    let spec = GridSpec {
        center_occupied: false,
        ..spec_4x3(FitPolicy::Contain)
    };
    let full = place_items(&mixed_items(12), &spec).unwrap();
    let partial = place_items(&mixed_items(3), &spec).unwrap();
    for (a, b) in partial.placements.iter().zip(&full.placements) {
        assert_eq!(a.cell, b.cell);
    }
}

#[test]
fn column_major_fills_down_first() {
    let spec = GridSpec {
        fill_order: FillOrder::ColumnMajor,
        ..spec_4x3(FitPolicy::Contain)
    };
    let out = place_items(&mixed_items(12), &spec).unwrap();
    let cells: Vec<(u32, u32)> = out
        .placements
        .iter()
        .take(4)
        .map(|p| (p.row, p.column))
        .collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    assert!(out.placements[1].cell.top > out.placements[0].cell.top);
}

#[test]
fn captions_sit_below_the_item_across_the_full_cell() {
    let spec = GridSpec {
        caption_height: Some(30),
        ..spec_4x3(FitPolicy::Contain)
    };
    let out = place_items(&mixed_items(5), &spec).unwrap();
    for p in &out.placements {
        let caption = p.caption.expect("caption reserved");
        assert_eq!(caption.left, p.cell.left);
        assert_eq!(caption.width, p.cell.width);
        assert_eq!(caption.bottom(), p.cell.bottom());
        assert!(p.rect.bottom() <= caption.top, "{p:?}");
    }
}

#[test]
fn aspect_cells_keep_their_ratio() {
    let spec = GridSpec {
        canvas: Size::new(5_943_600, 6_858_000),
        margin: 228_600,
        h_spacing: 0,
        v_spacing: 36_576,
        columns: 8,
        rows: 6,
        cell_sizing: CellSizing::Aspect { ratio: 1.2 },
        ..Default::default()
    };
    let out = place_items(&mixed_items(48), &spec).unwrap();
    assert_eq!(out.canvas_count, 1);
    let ratio = out.cell_size.width as f64 / out.cell_size.height as f64;
    assert!((ratio - 1.2).abs() < 1e-3, "ratio {ratio}");
}

#[test]
fn sections_start_on_fresh_canvases() {
    let main = mixed_items(13);
    let new = mixed_items(2);
    let last = mixed_items(1);
    let out = place_sections(&[main, new, last], &spec_4x3(FitPolicy::Contain)).unwrap();
    assert_eq!(out.canvas_count, 4);
    let per_canvas: Vec<usize> = out.pages().iter().map(|p| p.len()).collect();
    assert_eq!(per_canvas, vec![12, 1, 2, 1]);
    assert_eq!(out.placements.last().map(|p| p.item), Some(15));
}

#[test]
fn unsatisfiable_grid_is_reported() {
    let spec = GridSpec {
        canvas: Size::new(10, 10),
        margin: 1,
        columns: 100,
        rows: 100,
        h_spacing: 0,
        v_spacing: 0,
        ..Default::default()
    };
    let err = layout(&mixed_items(3), &spec).unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }), "{err}");
}

#[test]
fn huge_fixed_cells_are_reported_instead_of_overflowing() {
    let spec = GridSpec {
        cell_sizing: CellSizing::Fixed {
            width: i64::MAX / 2,
            height: 10,
        },
        ..spec_4x3(FitPolicy::Contain)
    };
    assert!(spec.validate().is_ok());
    let err = place_items(&mixed_items(3), &spec).unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry { .. }), "{err}");
}

#[test]
fn layout_serializes_to_json() {
    let out = place_items(&mixed_items(2), &spec_4x3(FitPolicy::Contain)).unwrap();
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["canvas_count"], 1);
    assert_eq!(value["placements"][1]["item"], 1);
    assert!(value["placements"][0]["caption"].is_null());
}
