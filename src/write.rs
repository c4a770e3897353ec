// Joseph Prichard
// 1/5/2023
// In-memory writer implementing a bit layer, used to pack symbol codes into bytes

use log::debug;
use crate::bitwise::set_bit;
use crate::error::{Error, Result};
use crate::tree::{CodeTable, SymbolCode};

pub struct BitWriter {
    // the packed bytes, the last one may be partially written
    buffer: Vec<u8>,
    // the total number of bits written
    bit_position: u64,
}

impl BitWriter {
    pub fn new() -> BitWriter {
        BitWriter { buffer: vec![], bit_position: 0 }
    }

    pub fn with_capacity(byte_len: usize) -> BitWriter {
        BitWriter { buffer: Vec::with_capacity(byte_len), bit_position: 0 }
    }

    pub fn bit_len(&self) -> u64 {
        self.bit_position
    }

    pub fn write_bit(&mut self, bit: u8) {
        // start a new zeroed byte at every byte boundary
        let offset = (self.bit_position % 8) as u32;
        if offset == 0 {
            self.buffer.push(0);
        }
        if bit > 0 {
            if let Some(last) = self.buffer.last_mut() {
                *last = set_bit(*last, offset);
            }
        }
        self.bit_position += 1;
    }

    pub fn write_symbol(&mut self, symbol: &SymbolCode) {
        for i in 0..symbol.bit_len {
            self.write_bit(symbol.get_bit(i));
        }
    }

    // the unwritten bits of the last byte are already zero, so padding only moves the position
    pub fn align_to_byte(&mut self) {
        self.bit_position = ((self.bit_position + 7) / 8) * 8;
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.buffer
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        BitWriter::new()
    }
}

// concatenates the code of every byte and zero pads the final partial byte
pub fn pack_bytes(bytes: &[u8], code_table: &CodeTable) -> Result<Vec<u8>> {
    let mut writer = BitWriter::with_capacity(bytes.len());
    for &byte in bytes {
        let symbol = code_table.get(byte).ok_or(Error::UnknownSymbol(byte))?;
        writer.write_symbol(symbol);
    }
    debug!("Packed {} symbols into {} bits", bytes.len(), writer.bit_len());
    Ok(writer.into_bytes())
}
