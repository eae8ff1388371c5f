// Run driver
// Validates input, owns the working array and dispatches to an algorithm

use log::{info, warn};

use super::bubble_sort::bubble_sort;
use super::merge_sort::merge_sort;
use super::types::{RunStatus, SortAlgorithm, SortError, SortOptions, SortRun, SortValue};
use crate::trace::TraceRecorder;

/// Reject input no frame should ever be recorded for
pub fn validate_input<T: SortValue>(input: &[T]) -> Result<(), SortError> {
    let first = input
        .first()
        .ok_or_else(|| SortError::InvalidInput("cannot sort an empty array".to_string()))?;

    for (index, value) in input.iter().enumerate() {
        if value.partial_cmp(value).is_none() || value.partial_cmp(first).is_none() {
            return Err(SortError::InvalidInput(format!(
                "element {} at index {} is not orderable",
                value, index
            )));
        }
    }

    Ok(())
}

/// Sort a copy of `input` with the chosen algorithm and return its trace.
///
/// Cancellation is not an error: the run comes back with
/// `RunStatus::Cancelled` and the frames recorded up to that point.
pub fn run_sort<T: SortValue>(
    algorithm: SortAlgorithm,
    input: &[T],
    options: &SortOptions,
) -> Result<SortRun<T>, SortError> {
    validate_input(input)?;

    let mut working = input.to_vec();
    let mut recorder = TraceRecorder::new(working.len())
        .with_cancel(options.cancel.clone())
        .with_frame_budget(options.frame_budget);

    let outcome = match algorithm {
        SortAlgorithm::MergeSort => merge_sort(&mut working, &mut recorder),
        SortAlgorithm::BubbleSort => bubble_sort(&mut working, options.early_exit, &mut recorder),
    };

    let status = match outcome {
        Ok(()) => RunStatus::Completed,
        Err(SortError::Cancelled { frames }) => {
            warn!("{} cancelled after {} frames", algorithm.display_name(), frames);
            RunStatus::Cancelled
        }
        Err(e) => return Err(e),
    };

    let trace = recorder.finish();
    info!(
        "{} traced {} values in {} frames ({})",
        algorithm.display_name(),
        input.len(),
        trace.len(),
        status.to_string()
    );

    Ok(SortRun {
        algorithm,
        input: input.to_vec(),
        trace,
        status,
    })
}
