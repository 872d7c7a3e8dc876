//! This module implements helper functions for generating random circuits.

use crate::{circuit::Circuit, errors::CircuitError, gate::GateKind, Index};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Pick a gate that may feed a new logic gate: any input wire or any logic
/// gate already in the circuit. Output wires are never picked, so generated
/// circuits are acyclic.
fn random_source(rng: &mut impl Rng, circuit: &Circuit) -> Index {
    let nin = circuit.ninput_wires();
    let nio = nin + circuit.noutput_wires();
    let nlogic = circuit.ngates() - nio;
    let ix = rng.gen_range(0..nin + nlogic);
    if ix < nin {
        ix
    } else {
        ix - nin + nio
    }
}

/// Append a random logic gate.
fn random_gate(rng: &mut impl Rng, circuit: &mut Circuit) -> Result<Index, CircuitError> {
    let coin = Uniform::from(0usize..6);
    match coin.sample(rng) {
        0 => circuit.add_gate(GateKind::Const, rng.gen(), &[]),
        1 => {
            let x = random_source(rng, circuit);
            circuit.add_gate(GateKind::Not, false, &[x])
        }
        2 => {
            let x = random_source(rng, circuit);
            circuit.add_gate(GateKind::Copy, false, &[x])
        }
        n => {
            let kind = [GateKind::And, GateKind::Or, GateKind::Xor][n - 3];
            let (x, y) = (random_source(rng, circuit), random_source(rng, circuit));
            circuit.add_binary_gate(kind, x, y)
        }
    }
}

/// Output a random, valid, acyclic circuit with `ninputs` input wires,
/// `ngates` logic gates, and `noutputs` output wires, together with a random
/// input for it. Inputs and outputs each form a single variable.
pub fn random_circuit<R: Rng>(
    ninputs: usize,
    ngates: usize,
    noutputs: usize,
    rng: &mut R,
) -> Result<(Circuit, Vec<bool>), CircuitError> {
    debug_assert!(ninputs > 0);
    let mut circuit = Circuit::new(ninputs, noutputs, vec![ninputs], vec![noutputs]);
    for _ in 0..ngates {
        random_gate(rng, &mut circuit)?;
    }
    for wire in 0..noutputs {
        let source = random_source(rng, &circuit);
        circuit.connect_output(source, wire)?;
    }
    let inputs = (0..ninputs).map(|_| rng.gen()).collect();
    Ok((circuit, inputs))
}

#[cfg(test)]
use proptest::prelude::*;
#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

/// Generate an arbitrary circuit of at most the given size, along with an
/// input for it.
#[cfg(test)]
pub fn arbitrary_circuit(
    max_inputs: usize,
    max_gates: usize,
    max_outputs: usize,
) -> impl Strategy<Value = (Circuit, Vec<bool>)> {
    debug_assert!(max_inputs > 1);
    debug_assert!(max_outputs > 1);

    (1..max_inputs, 0..max_gates, 1..max_outputs, any::<u64>()).prop_map(
        |(ninputs, ngates, noutputs, seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            random_circuit(ninputs, ngates, noutputs, &mut rng)
                .expect("generated circuits are well formed")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluate in gate order. Generated logic gates only refer to earlier
    /// gates, so a single forward pass suffices.
    fn forward_eval(circuit: &Circuit, inputs: &[bool]) -> Vec<bool> {
        let gates = circuit.gates();
        let mut values = vec![false; gates.len()];
        values[..inputs.len()].copy_from_slice(inputs);
        let logic = circuit.ninput_wires() + circuit.noutput_wires();
        for (ix, gate) in gates.iter().enumerate().skip(logic) {
            let p = gate.predecessors();
            values[ix] = match gate.kind() {
                GateKind::Const => gate.constant().unwrap(),
                GateKind::Not => !values[p[0]],
                GateKind::Copy => values[p[0]],
                GateKind::And => values[p[0]] & values[p[1]],
                GateKind::Or => values[p[0]] | values[p[1]],
                GateKind::Xor => values[p[0]] ^ values[p[1]],
                kind => panic!("unexpected {kind} gate"),
            };
        }
        (0..circuit.noutput_wires())
            .map(|wire| {
                let output = &gates[circuit.output_gate(wire)];
                values[output.predecessors()[0]]
            })
            .collect()
    }

    #[test]
    fn test_random_circuit() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let size = Uniform::from(1usize..500);
        for _ in 0..20 {
            let (ninputs, ngates, noutputs) =
                (size.sample(&mut rng), size.sample(&mut rng), size.sample(&mut rng));
            let (circuit, inputs) = random_circuit(ninputs, ngates, noutputs, &mut rng).unwrap();
            assert!(circuit.is_valid());
            assert_eq!(circuit.ngates(), ninputs + noutputs + ngates);
            assert_eq!(inputs.len(), ninputs);
            assert_eq!(
                circuit.evaluate(&inputs).unwrap(),
                forward_eval(&circuit, &inputs)
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(
            std::env::var("PROPTEST_CASES")
                .map(|x| x.parse().expect("PROPTEST_CASES is a number"))
                .unwrap_or(64)
        ))]
        #[test]
        fn test_arbitrary_circuit_evaluation((circuit, inputs) in arbitrary_circuit(16, 200, 16)) {
            let first = circuit.evaluate(&inputs).unwrap();
            prop_assert_eq!(&first, &forward_eval(&circuit, &inputs));
            prop_assert_eq!(circuit.evaluate(&inputs).unwrap(), first);
        }
    }
}
