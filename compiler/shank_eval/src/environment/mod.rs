//! Variable storage for function activations.
//!
//! Every variable lives in a [`Slot`]. An [`Activation`] maps the
//! case-folded names of one function call to its slots. A `var` argument
//! passes the caller's slot itself, so both activations see every write;
//! everything else gets a fresh slot holding a copy.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use shank_ir::fold_name;

use crate::Value;

/// Single-threaded shared storage for one variable.
///
/// Not `Clone`: share with [`Slot::alias`], copy with
/// `Slot::new(slot.get())`.
#[repr(transparent)]
pub struct Slot(Rc<RefCell<Value>>);

impl Slot {
    #[inline]
    pub fn new(value: Value) -> Self {
        Slot(Rc::new(RefCell::new(value)))
    }

    /// Another handle onto the same storage.
    #[inline]
    pub fn alias(&self) -> Slot {
        Slot(Rc::clone(&self.0))
    }

    /// Whether both handles point at the same storage.
    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &Slot) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A copy of the current value.
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Value> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Value> {
        self.0.borrow_mut()
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&*self.0.borrow()).finish()
    }
}

/// The flat variable mapping of one function call.
///
/// Block statements do not open scopes; only calls create activations.
#[derive(Debug)]
pub struct Activation {
    function: String,
    slots: FxHashMap<String, Slot>,
}

impl Activation {
    pub fn new(function: impl Into<String>) -> Self {
        Activation {
            function: function.into(),
            slots: FxHashMap::default(),
        }
    }

    /// Name of the function this activation belongs to.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Bind `name` to `slot`, replacing any earlier binding of that name.
    pub fn bind(&mut self, name: &str, slot: Slot) {
        self.slots.insert(fold_name(name), slot);
    }

    /// Bind `name` to a fresh slot holding `value`.
    pub fn declare(&mut self, name: &str, value: Value) {
        self.bind(name, Slot::new(value));
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(&fold_name(name))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
