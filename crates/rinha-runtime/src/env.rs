//! Environment frames
//!
//! Bindings live in a chain of reference-counted frames. Each `let` or call
//! introduces one child frame that may shadow, but never overwrite, bindings
//! in its parents. Closures hold the frame chain by reference, so a frame is
//! kept alive by every closure and child frame that still points at it.
//!
//! `define` inserts into the *current* frame after creation. `let` relies on
//! this: the bound expression is evaluated in the same frame object that
//! afterwards receives the binding, so a closure produced by that expression
//! sees its own name once the insert lands (letrec-style self-reference).

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
struct Frame<'ast> {
    vars: RefCell<HashMap<&'ast str, Value<'ast>>>,
    parent: Option<Rc<Frame<'ast>>>,
}

/// Handle to an environment frame chain. Cloning is a refcount bump; clones
/// observe the same bindings.
#[derive(Debug, Clone)]
pub struct Environment<'ast> {
    frame: Rc<Frame<'ast>>,
}

impl<'ast> Environment<'ast> {
    /// Empty root environment
    pub fn new() -> Self {
        Self {
            frame: Rc::new(Frame {
                vars: RefCell::new(HashMap::new()),
                parent: None,
            }),
        }
    }

    /// New empty frame chained onto this one
    pub fn child(&self) -> Self {
        Self {
            frame: Rc::new(Frame {
                vars: RefCell::new(HashMap::new()),
                parent: Some(Rc::clone(&self.frame)),
            }),
        }
    }

    /// Bind `name` in the current frame, shadowing any outer binding
    pub fn define(&self, name: &'ast str, value: Value<'ast>) {
        self.frame.vars.borrow_mut().insert(name, value);
    }

    /// Look up `name`, walking the chain from innermost frame outward
    pub fn get(&self, name: &str) -> Option<Value<'ast>> {
        let mut frame = Some(&self.frame);
        while let Some(current) = frame {
            if let Some(value) = current.vars.borrow().get(name) {
                return Some(value.clone());
            }
            frame = current.parent.as_ref();
        }
        None
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}
