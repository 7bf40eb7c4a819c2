#[cfg(test)]
mod verify {
    use plotfit::language::MeasurementRecord;
    use plotfit::parsing::{self, ParsingError};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn defaults_fill_missing_uncertainties() {
        let records = parsing::parse(
            trim(
                r#"
10 20
30 5 40 6
            "#,
            ),
            0.1,
            0.2,
        )
        .unwrap();

        assert_eq!(
            records[..],
            [
                MeasurementRecord {
                    x: 10.0,
                    ux: 0.1,
                    y: 20.0,
                    uy: 0.2
                },
                MeasurementRecord {
                    x: 30.0,
                    ux: 5.0,
                    y: 40.0,
                    uy: 6.0
                },
            ]
        );
    }

    #[test]
    fn three_fields_are_x_y_uy() {
        let records = parsing::parse("1.5 3 0.25", 0.01, 0.02).unwrap();
        assert_eq!(
            records[0],
            MeasurementRecord {
                x: 1.5,
                ux: 0.01,
                y: 3.0,
                uy: 0.25
            }
        );
    }

    #[test]
    fn noise_and_blank_lines() {
        let records = parsing::parse(
            trim(
                r#"
Measurements taken on the bench

t = 1.0 s, d = 4.9 m
t = 2.0 s, d = 19.6 m

(end)
            "#,
            ),
            0.0,
            0.0,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records.x(), vec![1.0, 2.0]);
        assert_eq!(records.y(), vec![4.9, 19.6]);
        assert_eq!(records.ux(), vec![0.0, 0.0]);
    }

    #[test]
    fn windows_line_endings() {
        let records = parsing::parse("1 2\r\n3 4\r\n", 0.0, 0.0).unwrap();
        assert_eq!(records.y(), vec![2.0, 4.0]);
    }

    #[test]
    fn one_field_aborts() {
        let result = parsing::parse("10 20\n30 40\n50\n60 70\n", 0.0, 0.0);
        assert_eq!(
            result,
            Err(ParsingError::MalformedRecord {
                line: 3,
                fields: vec![50.0]
            })
        );
    }

    #[test]
    fn five_fields_abort() {
        let result = parsing::parse("1 2\n1 2 3 4 5\n", 0.0, 0.0);
        match result {
            Err(ParsingError::MalformedRecord { line, fields }) => {
                assert_eq!(line, 2);
                assert_eq!(fields.len(), 5);
            }
            Ok(records) => panic!("Expected parsing to fail, but got {:?}", records),
        }
    }

    #[test]
    fn nothing_numeric() {
        let records = parsing::parse("\n\nno data\n", 0.0, 0.0).unwrap();
        assert!(records.is_empty());
    }
}
