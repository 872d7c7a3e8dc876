//! This module implements functions for building common circuits.
//!
//! Multi-bit variables are laid out least-significant bit first, so bit `i` of
//! a variable is the `i`th wire of its run.

use crate::{circuit::Circuit, errors::CircuitError, gate::GateKind, Index};

fn require_bits(nbits: usize) -> Result<(), CircuitError> {
    if nbits == 0 {
        Err(CircuitError::StructuralInvalid(
            "variables must have at least one bit".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// A circuit that outputs its inputs unchanged, with one `Copy` gate per
/// wire. The output variables mirror the input variables `var_wires`.
pub fn identity(var_wires: &[usize]) -> Result<Circuit, CircuitError> {
    let nwires = var_wires.iter().sum();
    let mut circuit = Circuit::new(nwires, nwires, var_wires.to_vec(), var_wires.to_vec());
    for wire in 0..nwires {
        let x = circuit.input_gate(wire);
        let copy = circuit.add_gate(GateKind::Copy, false, &[x])?;
        circuit.connect_output(copy, wire)?;
    }
    Ok(circuit)
}

/// A circuit combining two `nbits`-bit inputs bit by bit with the binary gate
/// `kind`.
///
/// # Errors
///
/// Errors out if `kind` does not take two inputs or `nbits` is zero.
pub fn bitwise(kind: GateKind, nbits: usize) -> Result<Circuit, CircuitError> {
    require_bits(nbits)?;
    let mut circuit = Circuit::new(2 * nbits, nbits, vec![nbits, nbits], vec![nbits]);
    for i in 0..nbits {
        let (x, y) = (circuit.input_gate(i), circuit.input_gate(nbits + i));
        let z = circuit.add_binary_gate(kind, x, y)?;
        circuit.connect_output(z, i)?;
    }
    Ok(circuit)
}

// Returns (sum, carry).
fn full_adder(
    circuit: &mut Circuit,
    x: Index,
    y: Index,
    carry: Index,
) -> Result<(Index, Index), CircuitError> {
    let xy = circuit.add_binary_gate(GateKind::Xor, x, y)?;
    let sum = circuit.add_binary_gate(GateKind::Xor, xy, carry)?;
    let both = circuit.add_binary_gate(GateKind::And, x, y)?;
    let propagated = circuit.add_binary_gate(GateKind::And, xy, carry)?;
    let carry = circuit.add_binary_gate(GateKind::Or, both, propagated)?;
    Ok((sum, carry))
}

/// A ripple-carry adder of two `nbits`-bit inputs. The single output variable
/// has `nbits + 1` wires, the last being the carry out.
pub fn adder(nbits: usize) -> Result<Circuit, CircuitError> {
    require_bits(nbits)?;
    let mut circuit = Circuit::new(2 * nbits, nbits + 1, vec![nbits, nbits], vec![nbits + 1]);

    // Half adder for the low bit.
    let (x, y) = (circuit.input_gate(0), circuit.input_gate(nbits));
    let sum = circuit.add_binary_gate(GateKind::Xor, x, y)?;
    let mut carry = circuit.add_binary_gate(GateKind::And, x, y)?;
    circuit.connect_output(sum, 0)?;

    for i in 1..nbits {
        let (x, y) = (circuit.input_gate(i), circuit.input_gate(nbits + i));
        let (sum, next) = full_adder(&mut circuit, x, y, carry)?;
        circuit.connect_output(sum, i)?;
        carry = next;
    }
    circuit.connect_output(carry, nbits)?;
    Ok(circuit)
}

/// A circuit with a single output wire that is `true` iff its two `nbits`-bit
/// inputs are equal.
pub fn equality(nbits: usize) -> Result<Circuit, CircuitError> {
    require_bits(nbits)?;
    let mut circuit = Circuit::new(2 * nbits, 1, vec![nbits, nbits], vec![1]);
    let mut acc = None;
    for i in 0..nbits {
        let (x, y) = (circuit.input_gate(i), circuit.input_gate(nbits + i));
        let differ = circuit.add_binary_gate(GateKind::Xor, x, y)?;
        let same = circuit.add_gate(GateKind::Not, false, &[differ])?;
        acc = Some(match acc {
            None => same,
            Some(prev) => circuit.add_binary_gate(GateKind::And, prev, same)?,
        });
    }
    if let Some(result) = acc {
        circuit.connect_output(result, 0)?;
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{u64_from_bits, u64_to_bits, u64s_to_bits};
    use proptest::prelude::*;

    #[test]
    fn test_identity() {
        let c = identity(&[3, 5]).unwrap();
        assert!(c.is_valid());
        assert_eq!(c.count(GateKind::Copy), 8);
        let inputs = u64_to_bits(0b1011_0110, 8);
        assert_eq!(c.evaluate(&inputs), Ok(inputs));
    }

    #[test]
    fn test_zero_bits() {
        assert!(matches!(adder(0), Err(CircuitError::StructuralInvalid(_))));
        assert!(matches!(equality(0), Err(CircuitError::StructuralInvalid(_))));
    }

    #[test]
    fn test_bitwise_rejects_unary_kinds() {
        assert!(matches!(
            bitwise(GateKind::Not, 4),
            Err(CircuitError::ArityViolation {
                kind: GateKind::Not,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_adder_carry() {
        let c = adder(4).unwrap();
        assert!(c.is_valid());
        let out = c.evaluate(&u64s_to_bits(&[0b1111, 0b0001], 4)).unwrap();
        assert_eq!(u64_from_bits(&out), 0b10000);
        assert_eq!(c.unpack_outputs(&out).unwrap(), vec![vec![0x10]]);
    }

    proptest! {
        #[test]
        fn test_bitwise(x in any::<u16>(), y in any::<u16>()) {
            let (x, y) = (u64::from(x), u64::from(y));
            for (kind, expected) in [
                (GateKind::And, x & y),
                (GateKind::Or, x | y),
                (GateKind::Xor, x ^ y),
            ] {
                let c = bitwise(kind, 16).unwrap();
                let out = c.evaluate(&u64s_to_bits(&[x, y], 16)).unwrap();
                prop_assert_eq!(u64_from_bits(&out), expected);
            }
        }

        #[test]
        fn test_adder(x in any::<u32>(), y in any::<u32>()) {
            let c = adder(32).unwrap();
            let inputs = c
                .pack_inputs(&[x.to_be_bytes(), y.to_be_bytes()])
                .unwrap();
            let out = c.evaluate(&inputs).unwrap();
            prop_assert_eq!(u64_from_bits(&out), u64::from(x) + u64::from(y));
        }

        #[test]
        fn test_equality(x in any::<u8>(), flip in 0usize..9) {
            let c = equality(8).unwrap();
            // flip == 8 leaves the operands equal.
            let y = if flip < 8 { x ^ (1 << flip) } else { x };
            let inputs = c.pack_inputs(&[[x], [y]]).unwrap();
            prop_assert_eq!(c.evaluate(&inputs).unwrap(), vec![x == y]);
        }
    }
}
