// src/value/mod.rs

use crate::autograd::{BackwardOp, OpKind};
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

mod arithmetic_methods;
mod autograd_methods;
mod traits;

/// Identity of a node in the computation graph.
///
/// Two handles have the same `NodeId` if and only if they point to the same
/// shared node. The id is only meaningful while the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally:
/// 1.  **Shared Ownership:** cloning a `Value` yields another handle to the same
///     node. Every node that used this one as an operand keeps a handle, so the
///     node lives as long as its longest holder.
/// 2.  **Interior Mutability:** the gradient (and the value, for optimizer
///     updates) can be changed through a shared handle.
///
/// `Rc` makes `Value` neither `Send` nor `Sync`; graphs are built and
/// differentiated on a single thread.
///
/// Node data is read-only from outside the crate; values change through
/// [`Value::set_value`] and gradients through the backward pass.
///
/// ```compile_fail
/// let v = scalargrad_core::Value::new(1.0);
/// v.write_data().grad = 2.0;
/// ```
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `value`, with zero gradient and no label.
    pub fn new(value: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(value, None))),
        }
    }

    /// Creates a labeled leaf node.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(value, Some(label.into())))),
        }
    }

    /// Creates a node produced by `op`. Used by the operations in [`crate::ops`].
    pub(crate) fn from_op(value: f64, op: BackwardOp, label: Option<String>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(value, op, label))),
        }
    }

    /// Returns the current scalar.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the scalar in place.
    ///
    /// Meant for optimizer updates on parameters (leaves). Changing the value of
    /// a derived node does not recompute anything downstream.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the gradient of this node.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Returns a copy of the label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns the kind of operation that produced this node.
    pub fn op_kind(&self) -> OpKind {
        self.read_data().op.kind()
    }

    /// Returns the operands of this node, one handle per edge.
    ///
    /// A node built as `x * x` returns `x` twice.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().op.inputs().into_iter().cloned().collect()
    }

    /// True when this node has no operands.
    pub fn is_leaf(&self) -> bool {
        matches!(self.read_data().op, BackwardOp::Constant)
    }

    /// Returns the identity of the shared node behind this handle.
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.data) as usize)
    }

    /// Borrows the node data immutably.
    ///
    /// Panics if the node is currently borrowed mutably.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node data mutably.
    ///
    /// Panics if the node is currently borrowed.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// Operands are not printed.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        f.debug_struct("Value")
            .field("label", &data.label)
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("op", &data.op.kind())
            .finish()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
