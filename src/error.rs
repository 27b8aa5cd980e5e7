//! Error types for traversal operations.
//!
//! Every failure is fatal for the call that produced it: no partial result
//! is ever returned, and sibling chunks that finished before the failure was
//! observed have their output discarded. Callers recover by fixing the
//! callable or the input and re-invoking the whole operation.

/// Represents a failed traversal operation.
///
/// # Examples
///
/// ```rust
/// use sifter::TraverseError;
///
/// let error = TraverseError::AbsentMapping { index: 2 };
/// assert_eq!(
///     format!("{}", error),
///     "map transform produced no value for element at index 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    /// A map transform returned `None` for the element at `index`.
    ///
    /// Map must produce exactly one output value per input element; an
    /// absent value is a contract violation, not a valid mapped value.
    AbsentMapping {
        /// Index of the offending element in the source collection.
        index: usize,
    },
    /// A user-supplied transform, predicate, or combiner panicked.
    ///
    /// The panic is caught at the chunk boundary and reported here, so a
    /// panicking callable behaves the same whether the call ran inline or
    /// on an executor.
    CallablePanicked {
        /// Text extracted from the panic payload, when it carried one.
        detail: String,
    },
    /// Reduce without an initial value was invoked on an empty collection.
    ///
    /// With no elements there is nothing to seed the accumulator with; this
    /// is a defined failure, never a silent default.
    EmptySource,
    /// An executor never ran the task for the chunk at `ordinal`.
    ///
    /// This indicates a broken [`Executor`](crate::Executor) implementation:
    /// `run_all` returned before every task had completed.
    ChunkLost {
        /// Ordinal of the chunk whose task was dropped.
        ordinal: usize,
    },
}

impl std::fmt::Display for TraverseError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbsentMapping { index } => write!(
                formatter,
                "map transform produced no value for element at index {index}"
            ),
            Self::CallablePanicked { detail } => {
                write!(formatter, "callable panicked: {detail}")
            }
            Self::EmptySource => {
                write!(formatter, "reduce without an initial value requires a non-empty collection")
            }
            Self::ChunkLost { ordinal } => {
                write!(formatter, "executor dropped the task for chunk {ordinal}")
            }
        }
    }
}

impl std::error::Error for TraverseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_mapping_display() {
        let error = TraverseError::AbsentMapping { index: 7 };
        assert_eq!(
            format!("{error}"),
            "map transform produced no value for element at index 7"
        );
    }

    #[test]
    fn test_callable_panicked_display() {
        let error = TraverseError::CallablePanicked {
            detail: "boom".to_string(),
        };
        assert_eq!(format!("{error}"), "callable panicked: boom");
    }

    #[test]
    fn test_empty_source_display() {
        assert_eq!(
            format!("{}", TraverseError::EmptySource),
            "reduce without an initial value requires a non-empty collection"
        );
    }

    #[test]
    fn test_chunk_lost_display() {
        assert_eq!(
            format!("{}", TraverseError::ChunkLost { ordinal: 3 }),
            "executor dropped the task for chunk 3"
        );
    }
}
