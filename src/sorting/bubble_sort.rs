// Instrumented bubble sort
// Adjacent compare/swap passes; each pass settles one position at the tail

use log::debug;

use super::runner::validate_input;
use super::types::{SortError, SortValue};
use crate::trace::{format_values, Annotation, Highlight, TraceRecorder};

/// Sort `array` in place, recording every comparison and its outcome.
///
/// With `early_exit`, a pass that performs no swap ends the run right
/// after its pass-complete frame. This changes the frame count, not the
/// result.
pub fn bubble_sort<T: SortValue>(
    array: &mut [T],
    early_exit: bool,
    recorder: &mut TraceRecorder<T>,
) -> Result<(), SortError> {
    validate_input(array)?;
    let n = array.len();

    // Carries the settled tail across frames
    let mut base = Annotation::uniform(n, Highlight::Default);

    recorder.record(
        array,
        &base,
        format!("Initial unsorted array: {}", format_values(array)),
    )?;

    for pass in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - 1 - pass {
            let (a, b) = (array[j], array[j + 1]);

            let mut step = base.clone();
            step.set(j, Highlight::Comparing);
            step.set(j + 1, Highlight::Comparing);
            recorder.record(array, &step, format!("Comparing {} and {}", a, b))?;

            if a > b {
                array.swap(j, j + 1);
                swapped = true;

                step.set(j, Highlight::Placed);
                step.set(j + 1, Highlight::Placed);
                recorder.record(array, &step, format!("Swapped {} and {}", a, b))?;
            } else {
                recorder.record(array, &base, format!("No swap needed: {} <= {}", a, b))?;
            }
        }

        let settled = n - 1 - pass;
        base.set(settled, Highlight::Sorted);
        recorder.record(
            array,
            &base,
            format!(
                "Pass {} complete: {} is in its final position",
                pass + 1,
                array[settled]
            ),
        )?;

        if early_exit && !swapped {
            debug!("pass {} made no swaps, stopping early", pass + 1);
            break;
        }
    }

    recorder.record(
        array,
        &Annotation::uniform(n, Highlight::Sorted),
        format!("Bubble Sort completed! Sorted array: {}", format_values(array)),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;

    fn traced(input: &[i64], early_exit: bool) -> (Vec<i64>, Trace<i64>) {
        let mut array = input.to_vec();
        let mut recorder = TraceRecorder::new(array.len());
        bubble_sort(&mut array, early_exit, &mut recorder).unwrap();
        (array, recorder.finish())
    }

    #[test]
    fn test_lecture_example() {
        let (sorted, trace) = traced(&[5, 1, 4, 2, 8], true);
        assert_eq!(sorted, vec![1, 2, 4, 5, 8]);

        let compare = trace.get(1).unwrap();
        assert_eq!(compare.array(), &[5, 1, 4, 2, 8]);
        assert_eq!(compare.annotation().indices_with(Highlight::Comparing), vec![0, 1]);
        assert_eq!(compare.description(), "Comparing 5 and 1");

        let swap = trace.get(2).unwrap();
        assert_eq!(swap.array(), &[1, 5, 4, 2, 8]);
        assert_eq!(swap.annotation().indices_with(Highlight::Placed), vec![0, 1]);

        assert_eq!(trace.final_array(), Some(&[1, 2, 4, 5, 8][..]));
    }

    #[test]
    fn test_no_swap_frame_keeps_array() {
        let (_, trace) = traced(&[1, 2], true);
        let no_swap = trace.get(2).unwrap();
        assert_eq!(no_swap.description(), "No swap needed: 1 <= 2");
        assert_eq!(no_swap.array(), &[1, 2]);
        assert!(no_swap.annotation().indices_with(Highlight::Comparing).is_empty());
    }

    #[test]
    fn test_early_exit_frame_counts() {
        // initial, 2 x (compare + no swap), pass complete, terminal
        let (_, with_exit) = traced(&[1, 2, 3], true);
        assert_eq!(with_exit.len(), 7);

        let (_, without_exit) = traced(&[1, 2, 3], false);
        assert_eq!(without_exit.len(), 10);
    }

    #[test]
    fn test_full_run_is_n_squared_plus_one() {
        let input = [9, 7, 5, 3, 1, 8];
        let (_, trace) = traced(&input, false);
        assert_eq!(trace.len(), input.len() * input.len() + 1);
    }

    #[test]
    fn test_sorted_tail_grows() {
        let (_, trace) = traced(&[3, 2, 1], false);
        let passes: Vec<Vec<usize>> = trace
            .iter()
            .filter(|f| f.description().starts_with("Pass "))
            .map(|f| f.annotation().indices_with(Highlight::Sorted))
            .collect();

        assert_eq!(passes, vec![vec![2], vec![1, 2]]);
        assert_eq!(
            trace.last().unwrap().annotation().indices_with(Highlight::Sorted),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_single_element() {
        let (_, trace) = traced(&[7], true);
        assert_eq!(trace.len(), 2);
        assert!(trace.last().unwrap().description().starts_with("Bubble Sort completed!"));
    }

    #[test]
    fn test_empty_input_rejected_without_frames() {
        let mut array: Vec<i64> = Vec::new();
        let mut recorder = TraceRecorder::new(0);
        assert!(matches!(
            bubble_sort(&mut array, true, &mut recorder),
            Err(SortError::InvalidInput(_))
        ));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_unorderable_input_rejected_without_frames() {
        let mut array = vec![3.0, f64::NAN, 1.0];
        let mut recorder = TraceRecorder::new(3);
        assert!(matches!(
            bubble_sort(&mut array, true, &mut recorder),
            Err(SortError::InvalidInput(_))
        ));
        assert!(recorder.is_empty());
        assert_eq!(array[0], 3.0);
        assert_eq!(array[2], 1.0);
    }
}
