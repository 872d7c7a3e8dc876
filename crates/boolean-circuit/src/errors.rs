//! Errors that may be output by this library.

use crate::gate::GateKind;
use std::fmt::{self, Display, Formatter};

/// Errors that may occur when building, validating, evaluating, or encoding
/// for a boolean circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// A gate has a fan-in outside the range allowed for its kind.
    ArityViolation {
        /// The kind of the offending gate.
        kind: GateKind,
        /// Received number of predecessors.
        got: usize,
        /// Minimum allowed number of predecessors.
        min: usize,
        /// Maximum allowed number of predecessors.
        max: usize,
    },
    /// The circuit does not have the shape it claims to have.
    StructuralInvalid(String),
    /// An output wire was connected more than once.
    DuplicateOutputWiring(usize),
    /// A gate was reached while it was still being evaluated.
    CycleDetected(usize),
    /// A bit vector or buffer list has the wrong length.
    ShapeMismatch {
        /// Received length.
        got: usize,
        /// Expected length.
        needed: usize,
    },
    /// An input buffer holds more bits than its variable has wires.
    BufferTooLarge {
        /// Index of the input variable.
        var: usize,
        /// Number of bits in the buffer.
        bits: usize,
        /// Number of wires allotted to the variable.
        wires: usize,
    },
    /// A gate kind tag that does not name any kind.
    UnknownGateKind(u8),
    /// A gate index that does not (yet) exist in the circuit.
    InvalidGateRef {
        /// The offending gate index.
        gate: usize,
        /// Number of gates in the circuit at the time.
        ngates: usize,
    },
    /// An output wire number past the end of the output wires.
    InvalidOutputWire {
        /// The offending output wire number.
        wire: usize,
        /// Number of output wires in the circuit.
        noutputs: usize,
    },
    /// The circuit has no output wires to evaluate.
    NoOutputWires,
}

impl Display for CircuitError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CircuitError::ArityViolation {
                kind,
                got,
                min,
                max,
            } => write!(
                f,
                "invalid fan-in for {} gate: got {} but require between {} and {}",
                kind, got, min, max
            ),
            CircuitError::StructuralInvalid(s) => write!(f, "invalid circuit structure: {}", s),
            CircuitError::DuplicateOutputWiring(wire) => {
                write!(f, "output wire {} is already connected", wire)
            }
            CircuitError::CycleDetected(gate) => write!(f, "cycle detected at gate {}", gate),
            CircuitError::ShapeMismatch { got, needed } => write!(
                f,
                "invalid number of values: needed {} but got {}",
                needed, got
            ),
            CircuitError::BufferTooLarge { var, bits, wires } => write!(
                f,
                "input variable {} has {} wires but was given {} bits",
                var, wires, bits
            ),
            CircuitError::UnknownGateKind(tag) => write!(f, "unknown gate kind {}", tag),
            CircuitError::InvalidGateRef { gate, ngates } => write!(
                f,
                "gate {} does not exist in a circuit with {} gates",
                gate, ngates
            ),
            CircuitError::InvalidOutputWire { wire, noutputs } => write!(
                f,
                "output wire {} does not exist in a circuit with {} output wires",
                wire, noutputs
            ),
            CircuitError::NoOutputWires => f.write_str("circuit has no output wires"),
        }
    }
}

impl std::error::Error for CircuitError {}
