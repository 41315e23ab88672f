//! Depth-first walk state shared across start attempts.
//!
//! The walk keeps its own frame stack instead of recursing, so the longest
//! path it can explore is bounded by heap memory rather than the thread's
//! call stack.

use std::ops::ControlFlow;

use crate::builder::SearchMode;

use super::on_complete;

/// A vertex on the current path and the position of the next candidate to
/// try from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    cursor: usize,
}

/// Working path, visitation marks, and collected results for one run.
///
/// `path`, `visited`, and `frames` always agree: a vertex is marked exactly
/// while it is on the path, and every path vertex owns one frame. Each
/// [`Walk::root_at`] call returns with all three empty or cleared.
pub(super) struct Walk<'a> {
    adjacency: &'a [Vec<usize>],
    mode: SearchMode,
    path: Vec<usize>,
    visited: Vec<bool>,
    frames: Vec<Frame>,
    found: Vec<Vec<usize>>,
    expansions: u64,
}

impl<'a> Walk<'a> {
    pub(super) fn new(adjacency: &'a [Vec<usize>], mode: SearchMode) -> Self {
        Self {
            adjacency,
            mode,
            path: Vec::with_capacity(adjacency.len()),
            visited: vec![false; adjacency.len()],
            frames: Vec::with_capacity(adjacency.len()),
            found: Vec::new(),
            expansions: 0,
        }
    }

    /// Explores every path starting at `start`.
    ///
    /// Candidates are taken from each frame in adjacency order, so paths are
    /// discovered in the same order as a recursive depth-first search.
    /// Returns [`ControlFlow::Break`] once a path completes in
    /// [`SearchMode::FirstOnly`].
    pub(super) fn root_at(&mut self, start: usize) -> ControlFlow<()> {
        if self.push(start).is_break() {
            self.unwind();
            return ControlFlow::Break(());
        }
        let adjacency = self.adjacency;
        while let Some(frame) = self.frames.last_mut() {
            let candidates = adjacency.get(frame.vertex).map_or(&[][..], Vec::as_slice);
            let mut next = None;
            while let Some(&candidate) = candidates.get(frame.cursor) {
                frame.cursor += 1;
                if !self.visited.get(candidate).copied().unwrap_or(true) {
                    next = Some(candidate);
                    break;
                }
            }
            match next {
                Some(vertex) => {
                    if self.push(vertex).is_break() {
                        self.unwind();
                        return ControlFlow::Break(());
                    }
                }
                None => self.pop(),
            }
        }
        ControlFlow::Continue(())
    }

    pub(super) fn found(&self) -> &[Vec<usize>] {
        &self.found
    }

    pub(super) const fn expansions(&self) -> u64 {
        self.expansions
    }

    pub(super) fn into_found(self) -> Vec<Vec<usize>> {
        self.found
    }

    /// Places `vertex` on the path. A completed path is recorded and popped
    /// straight away; otherwise the vertex gets a frame to extend from.
    fn push(&mut self, vertex: usize) -> ControlFlow<()> {
        self.expansions += 1;
        if let Some(mark) = self.visited.get_mut(vertex) {
            *mark = true;
        }
        self.path.push(vertex);
        self.frames.push(Frame { vertex, cursor: 0 });
        if self.path.len() < self.adjacency.len() {
            return ControlFlow::Continue(());
        }
        self.found.push(self.path.clone());
        self.pop();
        on_complete(self.mode)
    }

    fn pop(&mut self) {
        if self.frames.pop().is_none() {
            return;
        }
        if let Some(vertex) = self.path.pop() {
            if let Some(mark) = self.visited.get_mut(vertex) {
                *mark = false;
            }
        }
    }

    fn unwind(&mut self) {
        while !self.frames.is_empty() {
            self.pop();
        }
    }
}
