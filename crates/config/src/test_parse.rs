#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use cellgrid::{CellRect, ItemId, Margins, Point};

    use crate::*;

    #[test]
    fn minimal_scenario_parses() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
        )"#;
        let s = load_from_str(ron, None).unwrap();
        assert_eq!((s.config.columns(), s.config.rows()), (6, 4));
        assert!(s.items.is_empty());
        assert!(s.events.is_empty());
    }

    #[test]
    fn items_default_span_and_margins() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [
                (id: 1, at: (2, 3)),
                (id: 2, at: (0, 0), span: (2, 1), margins: (left: 4, bottom: 2)),
            ],
        )"#;
        let s = load_from_str(ron, None).unwrap();
        assert_eq!(
            s.items,
            vec![
                ItemSpec {
                    id: ItemId::new(1),
                    rect: CellRect::unit(2, 3),
                    margins: Margins::ZERO,
                },
                ItemSpec {
                    id: ItemId::new(2),
                    rect: CellRect::new(0, 0, 2, 1).unwrap(),
                    margins: Margins {
                        left: 4,
                        top: 0,
                        right: 0,
                        bottom: 2,
                    },
                },
            ]
        );
    }

    #[test]
    fn events_parse_in_order() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            events: [
                press(item: 7, x: 10.0, y: 20.0),
                move(x: 110.5, y: 20.0),
                release(x: 150.0, y: 20.0),
                cancel,
            ],
        )"#;
        let s = load_from_str(ron, None).unwrap();
        assert_eq!(
            s.events,
            vec![
                GestureEvent::Press {
                    item: ItemId::new(7),
                    at: Point::new(10.0, 20.0),
                },
                GestureEvent::Move {
                    at: Point::new(110.5, 20.0),
                },
                GestureEvent::Release {
                    at: Point::new(150.0, 20.0),
                },
                GestureEvent::Cancel,
            ]
        );
    }

    #[test]
    fn syntax_error_reports_location() {
        let ron = "(\n    canvas: (width: 600, height: 400),\n    cell_hint: (width: 100 height: 100),\n)";
        let err = load_from_str(ron, Some(Path::new("bad.ron"))).unwrap_err();
        match &err {
            Error::Parse { line, excerpt, .. } => {
                assert_eq!(*line, 3);
                assert!(excerpt.contains("cell_hint"));
                assert!(excerpt.contains('^'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(err.pretty().starts_with("Scenario parse error at bad.ron:3:"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            colour: "red",
        )"#;
        assert!(matches!(
            load_from_str(ron, None),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn non_positive_geometry_is_a_validation_error() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 0, height: 100),
        )"#;
        let err = load_from_str(ron, None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("target_cell_width"));
    }

    #[test]
    fn zero_span_is_a_validation_error() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 3, at: (0, 0), span: (0, 1))],
        )"#;
        let err = load_from_str(ron, None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().starts_with("item 3:"));
    }

    #[test]
    fn negative_margins_are_rejected() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 4, at: (0, 0), margins: (left: -2))],
        )"#;
        let err = load_from_str(ron, None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.to_string(), "item 4: margins must not be negative");
    }

    #[test]
    fn margins_must_leave_room_inside_the_cells() {
        let wide = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 5, at: (0, 0), margins: (left: 60, right: 40))],
        )"#;
        let err = load_from_str(wide, None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().starts_with("item 5: margins leave no room"));

        let huge = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 6, at: (0, 0), margins: (top: 2147483647, bottom: 2147483647))],
        )"#;
        assert!(matches!(
            load_from_str(huge, None),
            Err(Error::Validation { .. })
        ));

        let fits = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 7, at: (0, 0), span: (2, 1), margins: (left: 99, right: 100))],
        )"#;
        assert!(load_from_str(fits, None).is_ok());
    }

    #[test]
    fn non_finite_pointer_positions_are_rejected() {
        for pos in ["x: NaN, y: 10.0", "x: 10.0, y: inf", "x: -inf, y: 0.0"] {
            let ron = format!(
                r#"(
                    canvas: (width: 600, height: 400),
                    cell_hint: (width: 100, height: 100),
                    items: [(id: 1, at: (0, 0))],
                    events: [press(item: 1, x: 50.0, y: 50.0), release({pos})],
                )"#
            );
            let err = load_from_str(&ron, None).unwrap_err();
            assert!(matches!(err, Error::Validation { .. }), "{pos}: {err:?}");
            assert!(err.to_string().starts_with("event 2:"), "{pos}: {err}");
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 3, at: (0, 0)), (id: 3, at: (1, 0))],
        )"#;
        assert_eq!(
            load_from_str(ron, None).unwrap_err().to_string(),
            "duplicate item id 3"
        );
    }

    #[test]
    fn overlapping_seeds_fail_when_seeding() {
        let ron = r#"(
            canvas: (width: 600, height: 400),
            cell_hint: (width: 100, height: 100),
            items: [(id: 1, at: (0, 0), span: (2, 2)), (id: 2, at: (1, 1))],
        )"#;
        let s = load_from_str(ron, None).unwrap();
        assert_eq!(
            s.seed().unwrap_err(),
            cellgrid::Error::InvalidPosition {
                rect: CellRect::unit(1, 1)
            }
        );
    }

    #[test]
    fn demo_scenario_seeds_cleanly() {
        let s = demo().unwrap();
        assert_eq!((s.config.columns(), s.config.rows()), (9, 16));
        let grid = s.seed().unwrap();
        assert_eq!(grid.items().len(), 5);
        assert_eq!(s.events.len(), 13);
    }

    #[test]
    fn load_from_path_checks_extension_and_reads_file() {
        let dir = tempfile::tempdir().unwrap();

        let wrong = dir.path().join("grid.txt");
        fs::write(&wrong, DEMO_SCENARIO).unwrap();
        assert!(matches!(
            load_from_path(&wrong),
            Err(Error::Read { .. })
        ));

        let missing = dir.path().join("missing.ron");
        let err = load_from_path(&missing).unwrap_err();
        assert_eq!(err.path(), Some(missing.as_path()));

        let good = dir.path().join("grid.ron");
        fs::write(&good, DEMO_SCENARIO).unwrap();
        assert_eq!(load_from_path(&good).unwrap(), demo().unwrap());
    }
}
