use deckkit_designer::editor::{ClickLatch, PolygonEditor};
use deckkit_designer::grid::GridResolution;
use deckkit_designer::model::Point;

fn square_editor() -> PolygonEditor {
    PolygonEditor::with_vertices(
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ],
        GridResolution::TwelveInch,
    )
}

#[test]
fn test_new_editor_has_default_rectangle() {
    let editor = PolygonEditor::new();
    assert_eq!(editor.vertex_count(), 4);
    assert_eq!(editor.vertices()[2], Point::new(20.0, 13.0));
    assert_eq!(editor.grid_resolution(), GridResolution::TwelveInch);
    assert!((editor.metrics().area - 260.0).abs() < 1e-9);
}

#[test]
fn test_add_vertex_snaps_and_appends() {
    let mut editor = square_editor();
    assert!(editor.add_vertex(Point::new(4.4, 12.6)));
    assert_eq!(editor.vertex_count(), 5);
    assert_eq!(editor.vertices()[4], Point::new(4.0, 13.0));
}

#[test]
fn test_add_vertex_on_existing_vertex_is_allowed() {
    let mut editor = square_editor();
    assert!(editor.add_vertex(Point::new(10.1, 9.9)));
    assert_eq!(editor.vertices()[4], Point::new(10.0, 10.0));
    assert_eq!(editor.vertices()[2], editor.vertices()[4]);
}

#[test]
fn test_drag_moves_vertex_in_place() {
    let mut editor = square_editor();
    assert!(editor.begin_drag(2));
    assert_eq!(editor.session().selected(), Some(2));
    assert!(editor.session().is_dragging());

    assert!(editor.update_drag(Point::new(12.3, 11.6)));
    assert_eq!(editor.vertices()[2], Point::new(12.0, 12.0));
    assert_eq!(editor.vertex_count(), 4);

    editor.end_drag();
    assert_eq!(editor.session().selected(), None);
    assert!(!editor.session().is_dragging());
}

#[test]
fn test_update_drag_without_drag_is_noop() {
    let mut editor = square_editor();
    assert!(!editor.update_drag(Point::new(3.0, 3.0)));
    assert_eq!(editor, square_editor());
}

#[test]
fn test_begin_drag_rejects_missing_vertex() {
    let mut editor = square_editor();
    assert!(!editor.begin_drag(4));
    assert!(!editor.session().is_dragging());
    assert!(editor.vertex(4).is_err());
}

#[test]
fn test_click_after_drag_release_is_swallowed_once() {
    let mut editor = square_editor();
    editor.begin_drag(0);
    editor.update_drag(Point::new(1.0, 1.0));
    editor.end_drag();
    assert_eq!(editor.session().click_latch(), ClickLatch::Armed);

    assert!(!editor.add_vertex(Point::new(5.0, 5.0)));
    assert_eq!(editor.vertex_count(), 4);
    assert_eq!(editor.session().click_latch(), ClickLatch::Disarmed);

    assert!(editor.add_vertex(Point::new(5.0, 5.0)));
    assert_eq!(editor.vertex_count(), 5);
}

#[test]
fn test_release_without_drag_does_not_arm_latch() {
    let mut editor = square_editor();
    editor.end_drag();
    assert_eq!(editor.session().click_latch(), ClickLatch::Disarmed);
    assert!(editor.add_vertex(Point::new(5.0, 5.0)));
}

#[test]
fn test_delete_near_within_half_step() {
    let mut editor = square_editor();
    let removed = editor.delete_near(Point::new(10.3, 0.2));
    assert_eq!(removed, Some(1));
    assert_eq!(
        editor.vertices(),
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0)
        ]
    );
}

#[test]
fn test_delete_near_outside_threshold_is_noop() {
    let mut editor = square_editor();
    assert_eq!(editor.delete_near(Point::new(5.0, 5.0)), None);
    assert_eq!(editor.vertex_count(), 4);
}

#[test]
fn test_delete_threshold_follows_grid() {
    let mut editor = square_editor();
    let cursor = Point::new(10.9, 0.0);
    editor.set_grid_resolution(GridResolution::TwelveInch);
    assert_eq!(editor.delete_near(cursor), None);

    editor.set_grid_resolution(GridResolution::TwentyFourInch);
    assert_eq!(editor.delete_near(cursor), Some(1));
}

#[test]
fn test_delete_exactly_at_threshold() {
    let mut editor = square_editor();
    assert_eq!(editor.delete_near(Point::new(0.5, 0.0)), Some(0));
}

#[test]
fn test_delete_tie_removes_lowest_index() {
    let mut editor = PolygonEditor::with_vertices(
        vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(1.0, 1.0)],
        GridResolution::TwelveInch,
    );
    assert_eq!(editor.delete_near(Point::new(1.0, 1.0)), Some(0));
    assert_eq!(editor.vertices(), &[Point::new(2.0, 2.0), Point::new(1.0, 1.0)]);
}

#[test]
fn test_delete_on_empty_outline() {
    let mut editor = PolygonEditor::with_vertices(Vec::new(), GridResolution::TwelveInch);
    assert_eq!(editor.delete_near(Point::new(0.0, 0.0)), None);
}

#[test]
fn test_insert_midpoint() {
    let mut editor = square_editor();
    assert!(editor.insert_midpoint(1));
    assert_eq!(editor.vertex_count(), 5);
    assert_eq!(
        editor.vertices(),
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0)
        ]
    );
}

#[test]
fn test_insert_midpoint_on_closing_edge() {
    let mut editor = square_editor();
    assert!(editor.insert_midpoint(3));
    assert_eq!(editor.vertices()[4], Point::new(0.0, 5.0));
}

#[test]
fn test_insert_midpoint_snaps() {
    let mut editor = PolygonEditor::with_vertices(
        vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0)],
        GridResolution::TwelveInch,
    );
    assert!(editor.insert_midpoint(0));
    // 1.5 rounds half up
    assert_eq!(editor.vertices()[1], Point::new(2.0, 0.0));
}

#[test]
fn test_insert_midpoint_needs_an_edge() {
    let mut editor =
        PolygonEditor::with_vertices(vec![Point::new(0.0, 0.0)], GridResolution::TwelveInch);
    assert!(!editor.insert_midpoint(0));

    let mut two = PolygonEditor::with_vertices(
        vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0)],
        GridResolution::TwelveInch,
    );
    assert!(!two.insert_midpoint(1));
    assert!(two.insert_midpoint(0));
    assert_eq!(two.vertices()[1], Point::new(2.0, 0.0));
}

#[test]
fn test_set_edge_length_moves_only_end_vertex() {
    let mut editor = square_editor();
    assert!(editor.set_edge_length(0, 14.0));
    assert_eq!(editor.vertices()[0], Point::new(0.0, 0.0));
    assert_eq!(editor.vertices()[1], Point::new(14.0, 0.0));
    assert_eq!(editor.vertices()[2], Point::new(10.0, 10.0));
}

#[test]
fn test_set_edge_length_closing_edge_moves_first_vertex() {
    let mut editor = square_editor();
    assert!(editor.set_edge_length(3, 4.0));
    assert_eq!(editor.vertices()[0], Point::new(0.0, 6.0));
    assert_eq!(editor.vertices()[3], Point::new(0.0, 10.0));
}

#[test]
fn test_set_edge_length_result_is_snapped() {
    let mut editor = square_editor();
    editor.set_grid_resolution(GridResolution::TwentyFourInch);
    assert!(editor.set_edge_length(0, 7.0));
    assert_eq!(editor.vertices()[1], Point::new(8.0, 0.0));
}

#[test]
fn test_set_edge_length_rejects_bad_values() {
    let mut editor = square_editor();
    assert!(!editor.set_edge_length(0, 0.0));
    assert!(!editor.set_edge_length(0, -3.0));
    assert!(!editor.set_edge_length(0, f64::NAN));
    assert!(!editor.set_edge_length(0, f64::INFINITY));
    assert!(!editor.set_edge_length(9, 3.0));
    assert_eq!(editor, square_editor());

    let mut single =
        PolygonEditor::with_vertices(vec![Point::new(0.0, 0.0)], GridResolution::TwelveInch);
    assert!(!single.set_edge_length(0, 3.0));
}

#[test]
fn test_edge_edit_commit() {
    let mut editor = square_editor();
    assert!(editor.open_edge_edit(0));
    let edit = *editor.session().edge_edit().unwrap();
    assert_eq!(edit.edge_index, 0);
    assert_eq!(edit.pending, Some(10.0));
    assert_eq!(edit.anchor, Point::new(5.0, 0.0));

    editor.set_pending_length_text("12");
    assert!(editor.commit_edge_edit());
    assert!(editor.session().edge_edit().is_none());
    assert_eq!(editor.vertices()[1], Point::new(12.0, 0.0));
}

#[test]
fn test_edge_edit_pending_is_rounded_length() {
    let mut editor = PolygonEditor::with_vertices(
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 2.0)],
        GridResolution::TwelveInch,
    );
    editor.open_edge_edit(0);
    assert_eq!(editor.session().edge_edit().unwrap().pending, Some(1.41));
}

#[test]
fn test_edge_edit_invalid_input_closes_without_change() {
    let mut editor = square_editor();
    editor.open_edge_edit(1);
    editor.set_pending_length_text("abc");
    assert!(!editor.commit_edge_edit());
    assert!(editor.session().edge_edit().is_none());
    assert_eq!(editor, square_editor());

    editor.open_edge_edit(1);
    editor.set_pending_length_text("-5");
    assert!(!editor.commit_edge_edit());
    assert!(editor.session().edge_edit().is_none());
}

#[test]
fn test_edge_edit_cancel() {
    let mut editor = square_editor();
    editor.open_edge_edit(2);
    editor.set_pending_length_text("3");
    editor.cancel_edge_edit();
    assert!(editor.session().edge_edit().is_none());
    assert_eq!(editor.vertices(), square_editor().vertices());
}

#[test]
fn test_click_ignored_while_editing_length() {
    let mut editor = square_editor();
    editor.open_edge_edit(0);
    assert!(!editor.add_vertex(Point::new(4.0, 4.0)));
    assert_eq!(editor.vertex_count(), 4);
    assert!(editor.session().edge_edit().is_some());
}

#[test]
fn test_clear_empties_outline() {
    let mut editor = square_editor();
    editor.begin_drag(1);
    editor.clear();
    assert_eq!(editor.vertex_count(), 0);
    assert!(!editor.session().is_dragging());
    assert_eq!(editor.metrics().area, 0.0);
}

#[test]
fn test_grid_change_does_not_resnap() {
    let mut editor = PolygonEditor::with_vertices(
        vec![Point::new(0.5, 0.5), Point::new(1.5, 0.5)],
        GridResolution::SixInch,
    );
    editor.set_grid_resolution(GridResolution::FortyEightInch);
    assert_eq!(editor.vertices()[0], Point::new(0.5, 0.5));
    assert!(editor.add_vertex(Point::new(3.0, 1.0)));
    assert_eq!(editor.vertices()[2], Point::new(4.0, 0.0));
}

#[test]
fn test_selection_follows_insert_and_delete() {
    let mut editor = square_editor();
    editor.begin_drag(3);
    editor.insert_midpoint(0);
    assert_eq!(editor.session().selected(), Some(4));

    editor.delete_near(Point::new(0.0, 0.0));
    assert_eq!(editor.session().selected(), Some(3));

    editor.delete_near(Point::new(0.0, 10.0));
    assert_eq!(editor.session().selected(), None);
    assert!(!editor.session().is_dragging());
}
