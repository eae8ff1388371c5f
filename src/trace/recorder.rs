// Trace recording
// Append-only frame sequence and the recorder that grows it during a run

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use super::frame::{Annotation, Frame};

/// Errors raised while recording a frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Frame shape mismatch: expected {expected} positions, got array {array} / annotation {annotation}")]
    ShapeMismatch {
        expected: usize,
        array: usize,
        annotation: usize,
    },

    #[error("Recording stopped after {frames} frames")]
    Cancelled { frames: usize },
}

/// Shared cancellation switch for a running recorder
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Ordered, sealed sequence of frames from one run
///
/// Only the recorder can append; a finished trace is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace<T> {
    frames: Vec<Frame<T>>,
}

impl<T> Trace<T> {
    /// Rebuild a trace from frames read back from storage.
    /// Every frame must be well formed and share one array length.
    pub fn from_frames(frames: Vec<Frame<T>>) -> Result<Self, RecordError> {
        let expected = frames.first().map(|f| f.array().len()).unwrap_or(0);
        for frame in &frames {
            if frame.array().len() != expected || !frame.is_well_formed() {
                return Err(RecordError::ShapeMismatch {
                    expected,
                    array: frame.array().len(),
                    annotation: frame.annotation().len(),
                });
            }
        }
        Ok(Trace { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame<T>> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame<T>> {
        self.frames.iter()
    }

    pub fn first(&self) -> Option<&Frame<T>> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }

    /// Array snapshot of the last frame
    pub fn final_array(&self) -> Option<&[T]> {
        self.frames.last().map(|f| f.array())
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Frame<T>;
    type IntoIter = std::slice::Iter<'a, Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Appends frames to a trace under construction
pub struct TraceRecorder<T> {
    expected_len: usize,
    frames: Vec<Frame<T>>,
    cancel: CancelFlag,
    frame_budget: Option<usize>,
}

impl<T: Clone> TraceRecorder<T> {
    /// Create a recorder for arrays of `expected_len` positions
    pub fn new(expected_len: usize) -> Self {
        TraceRecorder {
            expected_len,
            frames: Vec::new(),
            cancel: CancelFlag::new(),
            frame_budget: None,
        }
    }

    /// Stop recording once the flag is raised
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Stop recording once `budget` frames exist
    pub fn with_frame_budget(mut self, budget: Option<usize>) -> Self {
        self.frame_budget = budget;
        self
    }

    /// Copy the array and annotation into a new frame and append it.
    ///
    /// Shape and cancellation are checked before anything is appended, so
    /// an error never leaves a partial frame behind.
    pub fn record(
        &mut self,
        array: &[T],
        annotation: &Annotation,
        description: impl Into<String>,
    ) -> Result<(), RecordError> {
        if array.len() != self.expected_len || annotation.len() != self.expected_len {
            return Err(RecordError::ShapeMismatch {
                expected: self.expected_len,
                array: array.len(),
                annotation: annotation.len(),
            });
        }

        let budget_spent = self
            .frame_budget
            .map(|budget| self.frames.len() >= budget)
            .unwrap_or(false);
        if self.cancel.is_cancelled() || budget_spent {
            return Err(RecordError::Cancelled {
                frames: self.frames.len(),
            });
        }

        self.frames
            .push(Frame::snapshot(array, annotation, description.into()));
        Ok(())
    }

    /// Number of frames recorded so far
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seal the recorded frames into a read-only trace
    pub fn finish(self) -> Trace<T> {
        Trace {
            frames: self.frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::frame::Highlight;

    #[test]
    fn test_record_appends_one_frame() {
        let mut recorder = TraceRecorder::new(3);
        let annotation = Annotation::uniform(3, Highlight::Default);

        recorder.record(&[1, 2, 3], &annotation, "first").unwrap();
        assert_eq!(recorder.len(), 1);
        recorder.record(&[2, 1, 3], &annotation, "second").unwrap();
        assert_eq!(recorder.len(), 2);

        let trace = recorder.finish();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.first().unwrap().description(), "first");
        assert_eq!(trace.final_array(), Some(&[2, 1, 3][..]));
    }

    #[test]
    fn test_record_rejects_wrong_array_length() {
        let mut recorder = TraceRecorder::new(3);
        let annotation = Annotation::uniform(3, Highlight::Default);

        let result = recorder.record(&[1, 2], &annotation, "short");
        assert!(matches!(result, Err(RecordError::ShapeMismatch { expected: 3, array: 2, .. })));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_record_rejects_wrong_annotation_length() {
        let mut recorder = TraceRecorder::new(2);
        let annotation = Annotation::uniform(4, Highlight::Default);

        assert!(recorder.record(&[1, 2], &annotation, "bad").is_err());
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_cancel_keeps_prefix() {
        let cancel = CancelFlag::new();
        let mut recorder = TraceRecorder::new(1).with_cancel(cancel.clone());
        let annotation = Annotation::uniform(1, Highlight::Default);

        recorder.record(&[7], &annotation, "kept").unwrap();
        cancel.cancel();
        let result = recorder.record(&[7], &annotation, "dropped");

        assert_eq!(result, Err(RecordError::Cancelled { frames: 1 }));
        let trace = recorder.finish();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().unwrap().description(), "kept");
    }

    #[test]
    fn test_frame_budget() {
        let mut recorder = TraceRecorder::new(1).with_frame_budget(Some(2));
        let annotation = Annotation::uniform(1, Highlight::Default);

        recorder.record(&[1], &annotation, "a").unwrap();
        recorder.record(&[1], &annotation, "b").unwrap();
        assert!(matches!(
            recorder.record(&[1], &annotation, "c"),
            Err(RecordError::Cancelled { frames: 2 })
        ));
    }

    #[test]
    fn test_from_frames_rejects_mixed_lengths() {
        let a = Frame::snapshot(&[1, 2], &Annotation::uniform(2, Highlight::Default), "a".into());
        let b = Frame::snapshot(&[1], &Annotation::uniform(1, Highlight::Default), "b".into());

        assert!(Trace::from_frames(vec![a.clone()]).is_ok());
        assert!(Trace::from_frames(vec![a, b]).is_err());
    }
}
