use std::fmt::Debug;

use crate::utils::myers_diff::myers_diff;

/// A maximal run of aligned elements: present in both inputs (`Equal`),
/// only in the original (`Delete`), or only in the revision (`Insert`).
///
/// `Equal` runs carry the original-side elements, which matters whenever
/// element equality is coarser than identity (line-ending equivalent
/// tokens, for instance).
#[derive(Debug, Clone, PartialEq)]
pub enum RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    Equal(Vec<T>),
    Delete(Vec<T>),
    Insert(Vec<T>),
}

impl<T> RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    /// Align `old` against `new` and return maximal runs in order.
    pub fn runs_between(old: &[T], new: &[T]) -> Vec<Self> {
        Self::coalesce(myers_diff(old, new))
    }

    pub fn elements(&self) -> &[T] {
        match self {
            RawOperation::Equal(elements)
            | RawOperation::Delete(elements)
            | RawOperation::Insert(elements) => elements,
        }
    }

    /// Merge adjacent runs of the same variant so consumers only ever see
    /// maximal runs; the aligner's recursion can emit a run in pieces.
    fn coalesce(operations: Vec<Self>) -> Vec<Self> {
        let mut result: Vec<Self> = Vec::with_capacity(operations.len());

        for operation in operations {
            if operation.elements().is_empty() {
                continue;
            }
            match result.last_mut() {
                Some(last)
                    if std::mem::discriminant(last) == std::mem::discriminant(&operation) =>
                {
                    last.append(operation);
                }
                _ => result.push(operation),
            }
        }

        result
    }

    fn append(&mut self, other: Self) {
        match (self, other) {
            (RawOperation::Equal(elements), RawOperation::Equal(more))
            | (RawOperation::Delete(elements), RawOperation::Delete(more))
            | (RawOperation::Insert(elements), RawOperation::Insert(more)) => {
                elements.extend(more);
            }
            _ => unreachable!("only runs of the same variant can be joined"),
        }
    }
}
