#[cfg(test)]
mod verify {
    use proptest::prelude::*;

    use plotfit::parsing::{scan, NumericToken};

    #[test]
    fn number_followed_by_unit() {
        let text = "3.14m";
        let token = scan(text).unwrap();
        assert_eq!(
            token,
            NumericToken {
                value: 3.14,
                span: 0..4
            }
        );
        assert_eq!(&text[token.span.end..], "m");
    }

    #[test]
    fn empty_and_wordy() {
        assert_eq!(scan(""), None);
        assert_eq!(scan("abc"), None);
        assert_eq!(scan("."), None);
    }

    #[test]
    fn consuming_a_line() {
        let mut rest = "x = 1.5 ± 0.1, y = 20 ± 2";
        let mut values = Vec::new();

        while let Some(token) = scan(rest) {
            values.push(token.value);
            rest = &rest[token.span.end..];
        }

        assert_eq!(values, vec![1.5, 0.1, 20.0, 2.0]);
        assert_eq!(rest, "");
    }

    proptest! {
        #[test]
        fn decimal_strings_scan_whole(text in "[0-9]{1,25}(\\.[0-9]{0,25})?") {
            let token = scan(&text).unwrap();
            let expected: f64 = text.parse().unwrap();
            prop_assert_eq!(token.value, expected);
            prop_assert_eq!(token.span, 0..text.len());
        }

        #[test]
        fn leading_point_digits_are_fractional(digits in "[0-9]{1,25}") {
            let text = format!(".{}", digits);
            let token = scan(&text).unwrap();
            let expected: f64 = format!("0.{}", digits).parse().unwrap();
            prop_assert_eq!(token.value, expected);
            prop_assert_eq!(token.span, 1..text.len());
        }

        #[test]
        fn residual_makes_progress(text in "[ a-z0-9.,;]{0,40}") {
            let mut rest = text.as_str();
            let mut seen = 0;

            while let Some(token) = scan(rest) {
                prop_assert!(token.span.start < token.span.end);
                prop_assert!(token.span.end <= rest.len());
                rest = &rest[token.span.end..];

                seen += 1;
                prop_assert!(seen <= text.len());
            }
        }
    }
}
