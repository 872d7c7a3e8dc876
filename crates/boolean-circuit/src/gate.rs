//! Gate kinds, their fan-in table, and the gate representation.

use crate::{errors::CircuitError, Index};
use itertools::Itertools;
use smallvec::SmallVec;
use std::ops::RangeInclusive;

/// The largest fan-in of any gate kind.
pub const MAX_FAN_IN: usize = 2;

pub(crate) const NKINDS: usize = 8;

/// The kinds of gate a circuit may contain.
///
/// The discriminants are stable tags; see [`GateKind::tag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GateKind {
    /// An input wire.
    Input = 0,
    /// An output wire, equal to the single gate wired into it.
    Output = 1,
    /// Logical AND of two predecessors.
    And = 2,
    /// Logical OR of two predecessors.
    Or = 3,
    /// Logical negation of one predecessor.
    Not = 4,
    /// Exclusive OR of two predecessors.
    Xor = 5,
    /// A constant bit.
    Const = 6,
    /// The value of one predecessor.
    Copy = 7,
}

impl GateKind {
    /// Every gate kind, in tag order.
    pub const ALL: [GateKind; NKINDS] = [
        GateKind::Input,
        GateKind::Output,
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Xor,
        GateKind::Const,
        GateKind::Copy,
    ];

    /// Minimum number of predecessors a gate of this kind may have.
    pub const fn min_fan_in(&self) -> usize {
        match self {
            GateKind::Input | GateKind::Output | GateKind::Const => 0,
            GateKind::Not | GateKind::Copy => 1,
            GateKind::And | GateKind::Or | GateKind::Xor => 2,
        }
    }

    /// Maximum number of predecessors a gate of this kind may have.
    ///
    /// `Output` gates start with no predecessor and gain one when wired.
    pub const fn max_fan_in(&self) -> usize {
        match self {
            GateKind::Input | GateKind::Const => 0,
            GateKind::Output | GateKind::Not | GateKind::Copy => 1,
            GateKind::And | GateKind::Or | GateKind::Xor => 2,
        }
    }

    /// The inclusive range of allowed fan-in.
    pub fn fan_in(&self) -> RangeInclusive<usize> {
        self.min_fan_in()..=self.max_fan_in()
    }

    /// Returns `true` if a gate of this kind may have `n` predecessors.
    pub fn accepts(&self, n: usize) -> bool {
        self.fan_in().contains(&n)
    }

    /// Check `n` against the fan-in table.
    pub(crate) fn check_fan_in(&self, n: usize) -> Result<(), CircuitError> {
        if self.accepts(n) {
            Ok(())
        } else {
            Err(CircuitError::ArityViolation {
                kind: *self,
                got: n,
                min: self.min_fan_in(),
                max: self.max_fan_in(),
            })
        }
    }

    /// The stable numeric tag of this kind.
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for GateKind {
    type Error = CircuitError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        GateKind::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(CircuitError::UnknownGateKind(tag))
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            GateKind::Input => "Input",
            GateKind::Output => "Output",
            GateKind::And => "And",
            GateKind::Or => "Or",
            GateKind::Not => "Not",
            GateKind::Xor => "Xor",
            GateKind::Const => "Const",
            GateKind::Copy => "Copy",
        };
        f.write_str(name)
    }
}

/// A single node of the circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gate {
    pub(crate) kind: GateKind,
    pub(crate) value: bool,
    pub(crate) preds: SmallVec<[Index; MAX_FAN_IN]>,
}

impl Gate {
    pub(crate) fn new(kind: GateKind, value: bool, preds: &[Index]) -> Self {
        Gate {
            kind,
            value,
            preds: SmallVec::from_slice(preds),
        }
    }

    /// The kind of this gate.
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// The constant bit of a `Const` gate, `None` for every other kind.
    #[inline]
    pub fn constant(&self) -> Option<bool> {
        (self.kind == GateKind::Const).then_some(self.value)
    }

    /// Indices of the gates feeding this one, in order.
    #[inline]
    pub fn predecessors(&self) -> &[Index] {
        &self.preds
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            GateKind::Const => write!(f, "Const {}", self.value),
            kind => write!(f, "{} ( {} )", kind, self.preds.iter().join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_in_table() {
        let table = [
            (GateKind::Input, 0, 0),
            (GateKind::Output, 0, 1),
            (GateKind::And, 2, 2),
            (GateKind::Or, 2, 2),
            (GateKind::Not, 1, 1),
            (GateKind::Xor, 2, 2),
            (GateKind::Const, 0, 0),
            (GateKind::Copy, 1, 1),
        ];
        for (kind, min, max) in table {
            assert_eq!(kind.min_fan_in(), min, "{kind}");
            assert_eq!(kind.max_fan_in(), max, "{kind}");
            assert!(max <= MAX_FAN_IN);
        }
    }

    #[test]
    fn test_check_fan_in() {
        assert!(GateKind::Output.check_fan_in(1).is_ok());
        assert_eq!(
            GateKind::Not.check_fan_in(2),
            Err(CircuitError::ArityViolation {
                kind: GateKind::Not,
                got: 2,
                min: 1,
                max: 1
            })
        );
    }

    #[test]
    fn test_tags() {
        for (i, kind) in GateKind::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, i);
            assert_eq!(GateKind::try_from(kind.tag()), Ok(*kind));
        }
        assert_eq!(
            GateKind::try_from(8u8),
            Err(CircuitError::UnknownGateKind(8))
        );
        assert_eq!(
            GateKind::try_from(255u8),
            Err(CircuitError::UnknownGateKind(255))
        );
    }

    #[test]
    fn test_gate_display() {
        assert_eq!(Gate::new(GateKind::And, false, &[3, 4]).to_string(), "And ( 3, 4 )");
        assert_eq!(Gate::new(GateKind::Const, true, &[]).to_string(), "Const true");
        assert_eq!(Gate::new(GateKind::Input, false, &[]).to_string(), "Input (  )");
    }

    #[test]
    fn test_constant_only_for_const() {
        assert_eq!(Gate::new(GateKind::Const, true, &[]).constant(), Some(true));
        assert_eq!(Gate::new(GateKind::Not, true, &[0]).constant(), None);
    }
}
