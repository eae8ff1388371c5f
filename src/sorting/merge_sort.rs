// Instrumented merge sort
// Recursive divide over [left, right] with a stable, frame-by-frame merge

use log::debug;

use super::runner::validate_input;
use super::types::{SortError, SortValue};
use crate::trace::{format_values, Annotation, Highlight, TraceRecorder};

/// Sort `array` in place, recording every divide, comparison and placement.
///
/// Frame order for a run:
/// 1. initial unsorted array
/// 2. per range of length > 1: Dividing, then both halves, then the merge
/// 3. terminal frame with the whole array Sorted
pub fn merge_sort<T: SortValue>(
    array: &mut [T],
    recorder: &mut TraceRecorder<T>,
) -> Result<(), SortError> {
    validate_input(array)?;
    let n = array.len();

    recorder.record(
        array,
        &Annotation::uniform(n, Highlight::Default),
        format!("Initial unsorted array: {}", format_values(array)),
    )?;

    sort_range(array, 0, n - 1, recorder)?;

    recorder.record(
        array,
        &Annotation::uniform(n, Highlight::Sorted),
        format!("Merge Sort completed! Sorted array: {}", format_values(array)),
    )?;

    Ok(())
}

fn sort_range<T: SortValue>(
    array: &mut [T],
    left: usize,
    right: usize,
    recorder: &mut TraceRecorder<T>,
) -> Result<(), SortError> {
    if left >= right {
        return Ok(());
    }
    if right >= array.len() {
        return Err(SortError::InvariantViolation(format!(
            "range [{}, {}] exceeds array of length {}",
            left,
            right,
            array.len()
        )));
    }

    // floor((left + right) / 2) without overflow
    let mid = left + (right - left) / 2;
    debug!("divide [{}, {}] at mid = {}", left, right, mid);

    recorder.record(
        array,
        &Annotation::range(array.len(), left, right, Highlight::Dividing),
        format!("Dividing [{}..{}] at mid = {}", left, right, mid),
    )?;

    sort_range(array, left, mid, recorder)?;
    sort_range(array, mid + 1, right, recorder)?;
    merge(array, left, mid, right, recorder)
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
///
/// Ties take the left element, which keeps equal values in input order.
fn merge<T: SortValue>(
    array: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    recorder: &mut TraceRecorder<T>,
) -> Result<(), SortError> {
    let n = array.len();
    if !(left <= mid && mid < right && right < n) {
        return Err(SortError::InvariantViolation(format!(
            "merge bounds left={} mid={} right={} invalid for length {}",
            left, mid, right, n
        )));
    }

    let left_half = array[left..=mid].to_vec();
    let right_half = array[mid + 1..=right].to_vec();

    let mut annotation = Annotation::range(n, left, right, Highlight::Merging);
    recorder.record(
        array,
        &annotation,
        format!("Merging subarrays [{}] to [{}]", left, right),
    )?;

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_half.len() && j < right_half.len() {
        let (a, b) = (left_half[i], right_half[j]);

        // Comparison is shown before the write it decides
        let mut comparing = annotation.clone();
        // Once j > 0 this cell may already be overwritten; the caption carries the left value
        comparing.set(left + i, Highlight::Comparing);
        comparing.set(mid + 1 + j, Highlight::Comparing);
        recorder.record(array, &comparing, format!("Comparing {} and {}", a, b))?;

        let value = if a <= b {
            i += 1;
            a
        } else {
            j += 1;
            b
        };

        array[k] = value;
        annotation.set(k, Highlight::Placed);
        recorder.record(
            array,
            &annotation,
            format!("Placed {} at position {}", value, k),
        )?;
        k += 1;
    }

    for &value in &left_half[i..] {
        array[k] = value;
        annotation.set(k, Highlight::Placed);
        recorder.record(
            array,
            &annotation,
            format!("Copying remaining left: {}", value),
        )?;
        k += 1;
    }

    for &value in &right_half[j..] {
        array[k] = value;
        annotation.set(k, Highlight::Placed);
        recorder.record(
            array,
            &annotation,
            format!("Copying remaining right: {}", value),
        )?;
        k += 1;
    }

    recorder.record(
        array,
        &Annotation::range(n, left, right, Highlight::SortedLocally),
        format!("Subarray [{}] to [{}] merged successfully", left, right),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;
    use std::fmt;

    fn traced(input: &[i64]) -> (Vec<i64>, Trace<i64>) {
        let mut array = input.to_vec();
        let mut recorder = TraceRecorder::new(array.len());
        merge_sort(&mut array, &mut recorder).unwrap();
        (array, recorder.finish())
    }

    #[test]
    fn test_lecture_example() {
        let input = [38, 27, 43, 10, 3, 82, 9, 15];
        let (sorted, trace) = traced(&input);

        assert_eq!(sorted, vec![3, 9, 10, 15, 27, 38, 43, 82]);
        assert_eq!(trace.final_array(), Some(&[3, 9, 10, 15, 27, 38, 43, 82][..]));

        let first_divide = trace
            .iter()
            .find(|f| !f.annotation().indices_with(Highlight::Dividing).is_empty())
            .unwrap();
        assert_eq!(
            first_divide.annotation().indices_with(Highlight::Dividing),
            (0..=7).collect::<Vec<_>>()
        );
        assert!(first_divide.description().contains("mid = 3"));
        assert_eq!(first_divide.array(), &input);
    }

    #[test]
    fn test_two_element_frame_sequence() {
        let (_, trace) = traced(&[2, 1]);
        let descriptions: Vec<&str> = trace.iter().map(|f| f.description()).collect();

        assert_eq!(
            descriptions,
            vec![
                "Initial unsorted array: [2, 1]",
                "Dividing [0..1] at mid = 0",
                "Merging subarrays [0] to [1]",
                "Comparing 2 and 1",
                "Placed 1 at position 0",
                "Copying remaining left: 2",
                "Subarray [0] to [1] merged successfully",
                "Merge Sort completed! Sorted array: [1, 2]",
            ]
        );
    }

    #[test]
    fn test_compare_recorded_before_write() {
        let (_, trace) = traced(&[2, 1]);

        let compare = trace.get(3).unwrap();
        assert_eq!(compare.array(), &[2, 1]);
        assert_eq!(compare.annotation().indices_with(Highlight::Comparing), vec![0, 1]);

        let placed = trace.get(4).unwrap();
        assert_eq!(placed.array(), &[1, 1]);
        assert_eq!(placed.annotation().indices_with(Highlight::Placed), vec![0]);
    }

    #[test]
    fn test_single_element() {
        let (sorted, trace) = traced(&[42]);
        assert_eq!(sorted, vec![42]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().annotation().indices_with(Highlight::Sorted), vec![0]);
    }

    #[test]
    fn test_empty_input_rejected_without_frames() {
        let mut array: Vec<i64> = Vec::new();
        let mut recorder = TraceRecorder::new(0);
        let result = merge_sort(&mut array, &mut recorder);
        assert!(matches!(result, Err(SortError::InvalidInput(_))));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_unorderable_input_rejected_without_frames() {
        let mut array = vec![3.0, f64::NAN, 1.0];
        let mut recorder = TraceRecorder::new(3);
        let result = merge_sort(&mut array, &mut recorder);
        assert!(matches!(result, Err(SortError::InvalidInput(_))));
        assert!(recorder.is_empty());
        assert_eq!(array[0], 3.0);
        assert_eq!(array[2], 1.0);
    }

    #[test]
    fn test_merge_rejects_bad_bounds() {
        let mut array = vec![1, 2, 3];
        let mut recorder = TraceRecorder::new(3);
        let result = merge(&mut array, 0, 1, 5, &mut recorder);
        assert!(matches!(result, Err(SortError::InvariantViolation(_))));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_sorted_locally_after_each_merge() {
        let (_, trace) = traced(&[4, 3, 2, 1]);
        let merged: Vec<Vec<usize>> = trace
            .iter()
            .filter(|f| f.description().ends_with("merged successfully"))
            .map(|f| f.annotation().indices_with(Highlight::SortedLocally))
            .collect();

        assert_eq!(merged, vec![vec![0, 1], vec![2, 3], vec![0, 1, 2, 3]]);
    }

    #[derive(Clone, Copy, Debug)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    impl fmt::Display for Tagged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}{}", self.key, self.tag)
        }
    }

    #[test]
    fn test_merge_is_stable() {
        let input = vec![
            Tagged { key: 2, tag: 'a' },
            Tagged { key: 1, tag: 'b' },
            Tagged { key: 2, tag: 'c' },
            Tagged { key: 1, tag: 'd' },
            Tagged { key: 2, tag: 'e' },
        ];
        let mut array = input.clone();
        let mut recorder = TraceRecorder::new(array.len());
        merge_sort(&mut array, &mut recorder).unwrap();

        let tags: String = array.iter().map(|t| t.tag).collect();
        assert_eq!(tags, "bdace");
    }
}
