#[cfg(test)]
mod verify {
    use plotfit::fitting::{line_of_best_fit, FitError};
    use plotfit::parsing;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn collinear_points() {
        let line = line_of_best_fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
        assert!(close(line.slope, 1.0));
        assert!(close(line.intercept, 0.0));
    }

    #[test]
    fn two_points_give_the_line_through_them() {
        let line = line_of_best_fit(&[1.0, 3.0], &[5.0, 1.0]).unwrap();
        assert!(close(line.slope, -2.0));
        assert!(close(line.intercept, 7.0));
    }

    #[test]
    fn through_the_centroid() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.1, 2.9, 5.2, 6.8, 9.1];
        let line = line_of_best_fit(&x, &y).unwrap();

        let mx = x.iter().sum::<f64>() / 5.0;
        let my = y.iter().sum::<f64>() / 5.0;
        assert!(close(line.slope * mx + line.intercept, my));
    }

    #[test]
    fn from_parsed_records() {
        let records = parsing::parse("1 3\n2 5\n3 7\n", 0.0, 0.0).unwrap();
        let line = records
            .best_fit()
            .unwrap();
        assert!(close(line.slope, 2.0));
        assert!(close(line.intercept, 1.0));
    }

    #[test]
    fn vertical_data() {
        let line = line_of_best_fit(&[2.0, 2.0], &[0.0, 1.0]).unwrap();
        assert!(!line.is_finite());
    }

    #[test]
    fn empty_collection() {
        let records = parsing::parse("", 0.0, 0.0).unwrap();
        assert_eq!(
            records.best_fit(),
            Err(FitError::InsufficientData { found: 0 })
        );
    }
}
