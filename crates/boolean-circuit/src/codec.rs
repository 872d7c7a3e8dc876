//! Conversion between byte-oriented variables and the circuit's wire bits.

use crate::{
    circuit::{check_partition, Circuit},
    errors::CircuitError,
    util::{bits_to_bytes, bytes_to_bits},
};

impl Circuit {
    /// Convert one byte buffer per input variable into a bit vector aligned
    /// with the circuit's input wires.
    ///
    /// Each buffer is read big-endian and zero-padded to its variable's wire
    /// count. Fewer buffers than input variables may be given; the wires of
    /// the missing trailing variables are `false`.
    ///
    /// # Errors
    ///
    /// Errors out if there are more buffers than input variables, if a buffer
    /// holds more bits than its variable has wires, or if the input variables
    /// do not cover the input wires.
    pub fn pack_inputs<B: AsRef<[u8]>>(&self, buffers: &[B]) -> Result<Vec<bool>, CircuitError> {
        if buffers.len() > self.ninput_vars() {
            return Err(CircuitError::ShapeMismatch {
                got: buffers.len(),
                needed: self.ninput_vars(),
            });
        }
        check_partition(&self.input_var_wires, self.ninput_wires, "input")?;

        let mut bits = Vec::with_capacity(self.ninput_wires);
        for (var, (buffer, &nwires)) in buffers.iter().zip(&self.input_var_wires).enumerate() {
            let buffer = buffer.as_ref();
            if buffer.len() * 8 > nwires {
                return Err(CircuitError::BufferTooLarge {
                    var,
                    bits: buffer.len() * 8,
                    wires: nwires,
                });
            }
            bits.extend(bytes_to_bits(buffer, nwires));
        }
        bits.resize(self.ninput_wires, false);
        Ok(bits)
    }

    /// Convert output wire bits into one minimal big-endian byte buffer per
    /// output variable.
    ///
    /// # Errors
    ///
    /// Errors out if `bits` does not hold exactly one bit per output wire, or
    /// if the output variables do not cover the output wires.
    pub fn unpack_outputs(&self, bits: &[bool]) -> Result<Vec<Vec<u8>>, CircuitError> {
        if bits.len() != self.noutput_wires {
            return Err(CircuitError::ShapeMismatch {
                got: bits.len(),
                needed: self.noutput_wires,
            });
        }
        check_partition(&self.output_var_wires, self.noutput_wires, "output")?;

        let mut rest = bits;
        let mut buffers = Vec::with_capacity(self.noutput_vars());
        for &nwires in &self.output_var_wires {
            let (var, tail) = rest.split_at(nwires);
            buffers.push(bits_to_bytes(var));
            rest = tail;
        }
        Ok(buffers)
    }
}
