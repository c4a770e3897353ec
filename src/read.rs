// Joseph Prichard
// 1/5/2023
// In-memory reader implementing a bit layer, used to walk packed codes back through a tree

use log::debug;
use crate::bitwise::get_bit;
use crate::error::{Error, Result};
use crate::tree::Tree;

pub struct BitReader<'a> {
    // the packed bytes to read from
    buffer: &'a [u8],
    // the total number of bits read
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> BitReader<'a> {
        BitReader { buffer, bit_position: 0 }
    }

    pub fn read_len(&self) -> usize {
        self.bit_position
    }

    #[cfg(test)]
    fn eof(&self) -> bool {
        self.bit_position >= self.buffer.len() * 8
    }

    // returns None once every bit has been read
    pub fn read_bit(&mut self) -> Option<u8> {
        let byte = *self.buffer.get(self.bit_position / 8)?;
        let bit = get_bit(byte, (self.bit_position % 8) as u32);
        self.bit_position += 1;
        Some(bit)
    }
}

// decodes exactly size symbols, any bits left over after the last symbol are padding
pub fn unpack_bytes(tree: &Tree, packed: &[u8], size: usize) -> Result<Vec<u8>> {
    // every symbol takes at least one bit, so a larger declared size cannot be honest
    let mut output = Vec::with_capacity(size.min(packed.len() * 8));
    if size == 0 {
        return Ok(output);
    }
    let corrupt = |decoded: usize| Error::CorruptStream { decoded, expected: size };
    // a tree without internal nodes cannot encode anything
    if tree.is_leaf() {
        return Err(corrupt(0));
    }

    let mut reader = BitReader::new(packed);
    let mut node = tree;
    while output.len() < size {
        let bit = reader.read_bit().ok_or_else(|| corrupt(output.len()))?;
        if let Tree::Internal { left, right, .. } = node {
            node = if bit == 0 { &**left } else { &**right };
        }
        if let Tree::Leaf { symbol, .. } = node {
            let symbol = symbol.ok_or_else(|| corrupt(output.len()))?;
            output.push(symbol);
            node = tree;
        }
    }
    debug!("Decoded {} symbols from {} of {} payload bits", size, reader.read_len(), packed.len() * 8);
    Ok(output)
}
