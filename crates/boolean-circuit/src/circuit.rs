use crate::{
    errors::CircuitError,
    gate::{Gate, GateKind, NKINDS},
    Index,
};
use log::debug;

/// A boolean circuit, represented as a vector of [`Gate`]s.
///
/// Gates `[0, ninput_wires)` are the input wires and gates
/// `[ninput_wires, ninput_wires + noutput_wires)` are the output wires. The
/// input and output wires are further partitioned, in order, into variables
/// occupying a contiguous run of wires each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit {
    /// The circuit gates.
    pub(crate) gates: Vec<Gate>,
    /// The number of input wires.
    pub(crate) ninput_wires: usize,
    /// The number of output wires.
    pub(crate) noutput_wires: usize,
    /// The number of wires held by each input variable.
    pub(crate) input_var_wires: Vec<usize>,
    /// The number of wires held by each output variable.
    pub(crate) output_var_wires: Vec<usize>,
}

impl Circuit {
    /// Creates a new `Circuit` with `ninput_wires` input wires and
    /// `noutput_wires` unconnected output wires.
    ///
    /// `input_var_wires[i]` is the number of wires of the `i`th input
    /// variable, and likewise for `output_var_wires`. These are recorded as
    /// given; [`Circuit::validate`] checks that they sum to the wire counts.
    pub fn new(
        ninput_wires: usize,
        noutput_wires: usize,
        input_var_wires: Vec<usize>,
        output_var_wires: Vec<usize>,
    ) -> Self {
        let mut gates = Vec::with_capacity(ninput_wires + noutput_wires);
        gates.extend((0..ninput_wires).map(|_| Gate::new(GateKind::Input, false, &[])));
        gates.extend((0..noutput_wires).map(|_| Gate::new(GateKind::Output, false, &[])));
        Circuit {
            gates,
            ninput_wires,
            noutput_wires,
            input_var_wires,
            output_var_wires,
        }
    }

    /// Extends the circuit with a gate of kind `kind`, returning the index of
    /// the new gate. `value` is only meaningful for `Const` gates.
    ///
    /// # Errors
    ///
    /// Errors out, leaving the circuit untouched, if the number of
    /// predecessors is not allowed for `kind` or if a predecessor does not
    /// exist yet.
    pub fn add_gate(
        &mut self,
        kind: GateKind,
        value: bool,
        predecessors: &[Index],
    ) -> Result<Index, CircuitError> {
        if let Err(e) = kind.check_fan_in(predecessors.len()) {
            debug!("rejecting gate {:?} <- {:?}: {}", kind, predecessors, e);
            return Err(e);
        }
        let ngates = self.gates.len();
        if let Some(&gate) = predecessors.iter().find(|&&p| p >= ngates) {
            debug!("rejecting gate {:?} <- {:?}: forward reference", kind, predecessors);
            return Err(CircuitError::InvalidGateRef { gate, ngates });
        }
        self.gates.push(Gate::new(kind, value, predecessors));
        Ok(ngates)
    }

    /// Extends the circuit with a two-input gate.
    pub fn add_binary_gate(
        &mut self,
        kind: GateKind,
        x: Index,
        y: Index,
    ) -> Result<Index, CircuitError> {
        self.add_gate(kind, false, &[x, y])
    }

    /// Connects the result of gate `gate` to output wire `wire`.
    ///
    /// # Errors
    ///
    /// Errors out, leaving the circuit untouched, if the output wire is
    /// already connected or if either index is out of range.
    pub fn connect_output(&mut self, gate: Index, wire: usize) -> Result<(), CircuitError> {
        if wire >= self.noutput_wires {
            return Err(CircuitError::InvalidOutputWire {
                wire,
                noutputs: self.noutput_wires,
            });
        }
        let ngates = self.gates.len();
        if gate >= ngates {
            return Err(CircuitError::InvalidGateRef { gate, ngates });
        }
        let output = self.output_gate(wire);
        let preds = &mut self.gates[output].preds;
        if !preds.is_empty() {
            debug!("output wire {} is already connected to {:?}", wire, preds);
            return Err(CircuitError::DuplicateOutputWiring(wire));
        }
        preds.push(gate);
        Ok(())
    }

    /// Returns the gate index of input wire `wire`.
    #[inline]
    pub fn input_gate(&self, wire: usize) -> Index {
        wire
    }

    /// Returns the gate index of output wire `wire`.
    #[inline]
    pub fn output_gate(&self, wire: usize) -> Index {
        self.ninput_wires + wire
    }

    /// Returns the number of input wires.
    pub fn ninput_wires(&self) -> usize {
        self.ninput_wires
    }

    /// Returns the number of output wires.
    pub fn noutput_wires(&self) -> usize {
        self.noutput_wires
    }

    /// Returns the number of input variables.
    pub fn ninput_vars(&self) -> usize {
        self.input_var_wires.len()
    }

    /// Returns the number of output variables.
    pub fn noutput_vars(&self) -> usize {
        self.output_var_wires.len()
    }

    /// Returns the number of wires of each input variable.
    pub fn input_var_wires(&self) -> &[usize] {
        &self.input_var_wires
    }

    /// Returns the number of wires of each output variable.
    pub fn output_var_wires(&self) -> &[usize] {
        &self.output_var_wires
    }

    /// Returns the number of gates, including input and output wires.
    pub fn ngates(&self) -> usize {
        self.gates.len()
    }

    /// Returns the gates.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the gate at index `i`, if any.
    pub fn gate(&self, i: Index) -> Option<&Gate> {
        self.gates.get(i)
    }

    /// Returns the number of gates of kind `kind`.
    pub fn count(&self, kind: GateKind) -> usize {
        self.gates.iter().filter(|g| g.kind == kind).count()
    }

    /// Summarize the circuit.
    pub fn info(&self) -> CircuitInfo {
        let mut counts = [0; NKINDS];
        for gate in &self.gates {
            counts[usize::from(gate.kind.tag())] += 1;
        }
        CircuitInfo {
            ngates: self.gates.len(),
            ninput_vars: self.ninput_vars(),
            noutput_vars: self.noutput_vars(),
            counts,
        }
    }

    /// Returns `true` if the circuit is well formed; see [`Circuit::validate`].
    /// This does not check for cycles, which are reported by evaluation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the structure of the circuit.
    ///
    /// # Errors
    ///
    /// Errors out if there are fewer gates than input and output wires, if
    /// input and output gates are not exactly where the wire counts put them,
    /// if any gate's fan-in is outside its kind's range, if an output wire is
    /// not connected, if any gate refers to a gate that does not exist, or if
    /// the variable partitions do not sum to the wire counts.
    pub fn validate(&self) -> Result<(), CircuitError> {
        let nio = self.ninput_wires + self.noutput_wires;
        if self.gates.len() < nio {
            return Err(CircuitError::StructuralInvalid(format!(
                "{} gates cannot hold {} input and {} output wires",
                self.gates.len(),
                self.ninput_wires,
                self.noutput_wires
            )));
        }
        for (i, gate) in self.gates.iter().enumerate() {
            let expected = if i < self.ninput_wires {
                Some(GateKind::Input)
            } else if i < nio {
                Some(GateKind::Output)
            } else {
                None
            };
            match (expected, gate.kind) {
                (Some(kind), found) if kind != found => {
                    return Err(CircuitError::StructuralInvalid(format!(
                        "gate {} should be {} but is {}",
                        i, kind, found
                    )))
                }
                (None, found @ (GateKind::Input | GateKind::Output)) => {
                    return Err(CircuitError::StructuralInvalid(format!(
                        "{} gate {} lies outside the wire range",
                        found, i
                    )))
                }
                _ => {}
            }
            gate.kind.check_fan_in(gate.preds.len())?;
            if gate.kind == GateKind::Output && gate.preds.is_empty() {
                return Err(CircuitError::StructuralInvalid(format!(
                    "output wire {} is not connected",
                    i - self.ninput_wires
                )));
            }
            if let Some(&p) = gate.preds.iter().find(|&&p| p >= self.gates.len()) {
                return Err(CircuitError::InvalidGateRef {
                    gate: p,
                    ngates: self.gates.len(),
                });
            }
        }
        check_partition(&self.input_var_wires, self.ninput_wires, "input")?;
        check_partition(&self.output_var_wires, self.noutput_wires, "output")
    }
}

/// Check that the per-variable wire counts `var_wires` sum to `nwires`.
pub(crate) fn check_partition(
    var_wires: &[usize],
    nwires: usize,
    side: &str,
) -> Result<(), CircuitError> {
    let total: usize = var_wires.iter().sum();
    if total == nwires {
        Ok(())
    } else {
        Err(CircuitError::StructuralInvalid(format!(
            "{} variables cover {} wires but the circuit has {}",
            side, total, nwires
        )))
    }
}

/// Gate statistics for a [`Circuit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitInfo {
    ngates: usize,
    ninput_vars: usize,
    noutput_vars: usize,
    counts: [usize; NKINDS],
}

impl CircuitInfo {
    /// Returns the total number of gates.
    pub fn ngates(&self) -> usize {
        self.ngates
    }

    /// Returns the number of gates of kind `kind`.
    pub fn count(&self, kind: GateKind) -> usize {
        self.counts[usize::from(kind.tag())]
    }
}

impl std::fmt::Display for CircuitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "circuit info:")?;
        writeln!(f, "  gates:            {:16}", self.ngates)?;
        writeln!(f, "  input variables:  {:16}", self.ninput_vars)?;
        write!(f, "  output variables: {:16}", self.noutput_vars)?;
        for kind in GateKind::ALL {
            write!(f, "\n  {:<18}{:16}", format!("{}:", kind), self.count(kind))?;
        }
        Ok(())
    }
}
