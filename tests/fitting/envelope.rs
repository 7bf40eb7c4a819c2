#[cfg(test)]
mod verify {
    use plotfit::fitting::{corner_lines, max_gradient, min_gradient, FitError};
    use plotfit::language::{Line, MeasurementRecord, RecordCollection};
    use plotfit::parsing;

    fn records(list: &[(f64, f64, f64, f64)]) -> RecordCollection {
        list.iter()
            .map(|&(x, ux, y, uy)| MeasurementRecord { x, ux, y, uy })
            .collect()
    }

    #[test]
    fn overlapping_boxes() {
        let data = records(&[(0.0, 1.0, 0.0, 1.0), (2.0, 1.0, 2.0, 1.0)]);
        let lines = corner_lines(&data.x(), &data.ux(), &data.y(), &data.uy()).unwrap();

        let max = data
            .max_gradient()
            .unwrap();
        let min = data
            .min_gradient()
            .unwrap();

        assert!(lines.contains(&max));
        assert!(lines.contains(&min));
        assert!(max.slope >= min.slope);
    }

    #[test]
    fn bounds_contain_best_fit() {
        let content = parsing::load(std::path::Path::new("tests/samples/springs.txt")).unwrap();
        let data = parsing::parse(&content, 0.1, 0.2).unwrap();

        let best = data
            .best_fit()
            .unwrap();
        let max = data
            .max_gradient()
            .unwrap();
        let min = data
            .min_gradient()
            .unwrap();

        assert!(max.slope > best.slope);
        assert!(min.slope < best.slope);
        assert!(max.is_finite());
        assert!(min.is_finite());
    }

    #[test]
    fn only_ends_matter() {
        let a = records(&[
            (1.0, 0.1, 2.0, 0.5),
            (2.0, 0.1, 40.0, 0.5),
            (3.0, 0.1, 6.0, 0.5),
        ]);
        let b = records(&[(1.0, 0.1, 2.0, 0.5), (3.0, 0.1, 6.0, 0.5)]);

        assert_eq!(a.max_gradient(), b.max_gradient());
        assert_eq!(a.min_gradient(), b.min_gradient());
    }

    #[test]
    fn known_extremes() {
        let x = [0.0, 4.0];
        let ux = [1.0, 1.0];
        let y = [0.0, 6.0];
        let uy = [1.0, 1.0];

        // (1, -1) to (3, 7), and (-1, 1) to (5, 5)
        assert_eq!(
            max_gradient(&x, &ux, &y, &uy),
            Ok(Line {
                slope: 4.0,
                intercept: -5.0
            })
        );
        assert_eq!(
            min_gradient(&x, &ux, &y, &uy),
            Ok(Line {
                slope: 4.0 / 6.0,
                intercept: 5.0 - (4.0 / 6.0) * 5.0
            })
        );
    }

    #[test]
    fn single_record() {
        let data = records(&[(1.0, 0.1, 1.0, 0.1)]);
        assert_eq!(
            data.max_gradient(),
            Err(FitError::InsufficientData { found: 1 })
        );
        assert_eq!(
            data.min_gradient(),
            Err(FitError::InsufficientData { found: 1 })
        );
    }
}
