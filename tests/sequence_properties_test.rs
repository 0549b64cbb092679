//! Integration tests for the sequence generator properties

use fizzbuzz_core::{Error, Label, SequenceGenerator, generate, sequence_len};
use std::thread;

#[test]
fn test_length_matches_range() {
    let ranges = [(0, 0), (1, 100), (-15, 15), (10, 9), (100, -100), (-1, -1)];

    for (start, end) in ranges {
        let labels = generate(start, end, 3, 5).unwrap();
        let expected = if start > end { 0 } else { (end - start + 1) as usize };
        assert_eq!(labels.len(), expected, "range {start}..={end}");
        assert_eq!(labels.len() as u128, sequence_len(start, end));
    }
}

#[test]
fn test_element_matches_offset() {
    let generator = SequenceGenerator::new(2, 9).unwrap();
    let start = -37;
    let labels = generator.generate(start, 80).unwrap();

    for (i, label) in labels.into_iter().enumerate() {
        let n = start + i as i64;
        let expected = match (n % 2 == 0, n % 9 == 0) {
            (true, true) => Label::FizzBuzz,
            (true, false) => Label::Fizz,
            (false, true) => Label::Buzz,
            (false, false) => Label::Number(n),
        };
        assert_eq!(label, expected, "n = {n}");
    }
}

#[test]
fn test_zero_modulus_fails_for_any_range() {
    for (start, end) in [(0, 0), (1, 1000), (5, 1)] {
        assert!(matches!(
            generate(start, end, 0, 5),
            Err(Error::InvalidArgument { name: "fizz", .. })
        ));
        assert!(matches!(
            generate(start, end, 3, 0),
            Err(Error::InvalidArgument { name: "buzz", .. })
        ));
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let expected = generate(-500, 500, 3, 5).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| generate(-500, 500, 3, 5).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_labels_render_as_text() {
    let text: Vec<String> = generate(9, 15, 3, 5)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        text,
        ["fizz", "buzz", "11", "fizz", "13", "14", "fizzbuzz"]
    );
}

#[test]
fn test_full_domain_fails_without_panicking() {
    let result = std::panic::catch_unwind(|| generate(i64::MIN, i64::MAX, 3, 5));
    assert!(matches!(
        result,
        Ok(Err(Error::RangeTooLarge { .. }))
    ));
}
