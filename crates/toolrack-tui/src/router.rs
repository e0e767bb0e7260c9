//! The view stack.
//!
//! Views are pushed by committed navigation and popped with Backspace. The
//! stack never empties; Home is always at the bottom.

use toolrack_core::ToolRecord;

#[derive(Debug, Clone)]
pub enum View {
    Home,
    Tools,
    Detail(ToolRecord),
    NotFound(String),
}

#[derive(Debug)]
pub struct Router {
    stack: Vec<View>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![View::Home],
        }
    }

    #[must_use]
    pub fn current(&self) -> &View {
        // Invariant: the stack is never empty
        self.stack.last().unwrap_or(&View::Home)
    }

    pub fn push(&mut self, view: View) {
        self.stack.push(view);
    }

    /// Pop the current view. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
