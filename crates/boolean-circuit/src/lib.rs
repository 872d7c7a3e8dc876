//! Implementation of a flat boolean circuit representation, together with a
//! structural validator, a plaintext evaluator, and the bit-packing layer that
//! maps byte-oriented variables onto circuit wires.
//!
//! Circuits are encoded as a vector of gates. Each gate names its predecessors
//! as indices into that vector, with its own output wire implicit. The first
//! `ninput_wires` gates are always the input wires and the following
//! `noutput_wires` gates are always the output wires; everything after that is
//! logic.

#![deny(missing_docs)]
#![deny(clippy::all)]

pub mod builder;
mod circuit;
pub mod circuitgen;
mod codec;
mod errors;
mod eval;
mod gate;
pub mod util;

pub use crate::{
    circuit::{Circuit, CircuitInfo},
    errors::CircuitError,
    eval::DebugInfo,
    gate::{Gate, GateKind, MAX_FAN_IN},
};

// Type denoting a gate index.
pub(crate) type Index = usize;
