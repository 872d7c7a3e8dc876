//! Plaintext evaluation of a [`Circuit`] on concrete input bits.
//!
//! Evaluation walks the gate graph depth-first from each output wire, using an
//! explicit work stack so that long dependency chains cannot exhaust the native
//! stack. Results are memoized for the whole call, so gates shared between
//! outputs are computed once.

use crate::{circuit::Circuit, errors::CircuitError, gate::GateKind, Index};
use log::{debug, trace};

/// Specifies what debug information [`Circuit::evaluate_with`] emits.
/// When specified, this emits information through `log::debug!` and
/// `log::trace!`.
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    /// Show brief info about the circuit before evaluating it.
    pub meta: bool,
    /// Show the value computed for every gate.
    pub gates: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    // On the current path from an output wire.
    Visiting,
    Done(bool),
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Enter(Index),
    Exit(Index),
}

struct Evaluator<'a> {
    circuit: &'a Circuit,
    inputs: &'a [bool],
    marks: Vec<Mark>,
    stack: Vec<Step>,
    trace: bool,
}

impl<'a> Evaluator<'a> {
    fn new(circuit: &'a Circuit, inputs: &'a [bool], trace: bool) -> Self {
        Evaluator {
            circuit,
            inputs,
            marks: vec![Mark::Unvisited; circuit.gates.len()],
            stack: Vec::new(),
            trace,
        }
    }

    /// Evaluate gate `root` and everything it depends on.
    fn eval(&mut self, root: Index) -> Result<bool, CircuitError> {
        let circuit = self.circuit;
        self.stack.clear();
        self.stack.push(Step::Enter(root));
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Enter(ix) => {
                    let gate = circuit.gates.get(ix).ok_or(CircuitError::InvalidGateRef {
                        gate: ix,
                        ngates: circuit.gates.len(),
                    })?;
                    match self.marks[ix] {
                        Mark::Done(_) => {}
                        Mark::Visiting => return Err(CircuitError::CycleDetected(ix)),
                        Mark::Unvisited => {
                            self.marks[ix] = Mark::Visiting;
                            self.stack.push(Step::Exit(ix));
                            if gate.kind != GateKind::Input {
                                // Reversed so the first predecessor is evaluated first.
                                for &p in gate.preds.iter().rev() {
                                    self.stack.push(Step::Enter(p));
                                }
                            }
                        }
                    }
                }
                Step::Exit(ix) => {
                    let value = self.apply(ix)?;
                    if self.trace {
                        trace!("gate {} = {} -> {}", ix, circuit.gates[ix], value);
                    }
                    self.marks[ix] = Mark::Done(value);
                }
            }
        }
        self.value(root)
    }

    /// Compute gate `ix`, all of whose predecessors are done.
    fn apply(&self, ix: Index) -> Result<bool, CircuitError> {
        let gate = &self.circuit.gates[ix];
        let exactly = |n: usize| {
            if gate.preds.len() == n {
                Ok(())
            } else {
                Err(CircuitError::ArityViolation {
                    kind: gate.kind,
                    got: gate.preds.len(),
                    min: n,
                    max: n,
                })
            }
        };
        match gate.kind {
            GateKind::Input => self.inputs.get(ix).copied().ok_or_else(|| {
                CircuitError::StructuralInvalid(format!(
                    "input gate {} lies outside the input wire range",
                    ix
                ))
            }),
            GateKind::Output | GateKind::Copy => {
                exactly(1)?;
                self.value(gate.preds[0])
            }
            GateKind::Not => {
                exactly(1)?;
                Ok(!self.value(gate.preds[0])?)
            }
            GateKind::And => {
                exactly(2)?;
                Ok(self.value(gate.preds[0])? & self.value(gate.preds[1])?)
            }
            GateKind::Or => {
                exactly(2)?;
                Ok(self.value(gate.preds[0])? | self.value(gate.preds[1])?)
            }
            GateKind::Xor => {
                exactly(2)?;
                Ok(self.value(gate.preds[0])? ^ self.value(gate.preds[1])?)
            }
            GateKind::Const => {
                exactly(0)?;
                Ok(gate.value)
            }
        }
    }

    fn value(&self, ix: Index) -> Result<bool, CircuitError> {
        match self.marks.get(ix) {
            Some(Mark::Done(value)) => Ok(*value),
            Some(_) => Err(CircuitError::StructuralInvalid(format!(
                "gate {} was used before it was evaluated",
                ix
            ))),
            None => Err(CircuitError::InvalidGateRef {
                gate: ix,
                ngates: self.marks.len(),
            }),
        }
    }
}

impl Circuit {
    /// Evaluates the circuit on `inputs`, one bit per input wire, returning one
    /// bit per output wire.
    ///
    /// # Errors
    ///
    /// Errors out if `inputs` does not hold exactly one bit per input wire, if
    /// the circuit has no output wires, or if any output wire cannot be
    /// evaluated (a cycle, a gate with the wrong fan-in). No partial output is
    /// returned.
    pub fn evaluate(&self, inputs: &[bool]) -> Result<Vec<bool>, CircuitError> {
        self.evaluate_with(inputs, &DebugInfo::default())
    }

    /// Evaluates the circuit on `inputs`, emitting the debug information
    /// selected by `trace`.
    pub fn evaluate_with(
        &self,
        inputs: &[bool],
        trace: &DebugInfo,
    ) -> Result<Vec<bool>, CircuitError> {
        if inputs.len() != self.ninput_wires {
            return Err(CircuitError::ShapeMismatch {
                got: inputs.len(),
                needed: self.ninput_wires,
            });
        }
        if self.noutput_wires < 1 {
            return Err(CircuitError::NoOutputWires);
        }
        if trace.meta {
            debug!("{}", self.info());
        }

        let mut evaluator = Evaluator::new(self, inputs, trace.gates);
        let outputs: Result<Vec<bool>, CircuitError> = (0..self.noutput_wires)
            .map(|wire| evaluator.eval(self.output_gate(wire)))
            .collect();
        if let Err(e) = &outputs {
            debug!("circuit evaluation failed: {}", e);
        }
        outputs
    }
}
