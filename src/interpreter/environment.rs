use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an environment frame.
///
/// Frames are shared, not stacked: every closure created in a scope keeps
/// that scope's frame alive, and several closures may hold the same frame
/// at once. Single ownership cannot express that, hence `Rc`; the
/// `RefCell` allows `let` to insert into a frame other handles also see.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of the lexical environment chain: its own bindings plus an
/// optional link to the enclosing frame.
///
/// Name resolution walks the chain outward; insertion always lands in the
/// frame it was called on. A recursive closure makes the chain cyclic
/// (frame → function value → same frame), which reference counting never
/// reclaims; that is an accepted cost of this representation.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    outer:    Option<Env>,
}

impl Environment {
    /// Creates the root frame of a fresh session.
    #[must_use]
    pub fn new_root() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a frame enclosed by `outer`, as used for function call
    /// bodies. Lookups that miss locally continue through `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { bindings: HashMap::new(),
                                    outer:    Some(Rc::clone(outer)), }))
    }

    /// Resolves `name` against this frame, then outward through the chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }

        self.outer
            .as_ref()
            .and_then(|outer| outer.borrow().get(name))
    }

    /// Binds `name` in this frame.
    ///
    /// An inner frame may shadow an outer binding of the same name; the
    /// outer frame is never written through an inner `set`.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }
}
