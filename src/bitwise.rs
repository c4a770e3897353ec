// Joseph Prichard
// 1/5/2023
// Bit and byte primitives: bits are indexed from the most significant end of a byte

// returns bit n of the byte, where bit 0 is the most significant bit
pub fn get_bit(byte: u8, n: u32) -> u8 {
    (byte >> (7 - n)) & 1
}

pub fn set_bit(byte: u8, n: u32) -> u8 {
    byte | (1 << (7 - n))
}

// converts a byte into an 8 character string of '0' and '1', most significant bit first
#[cfg(test)]
pub(crate) fn byte_to_bits(byte: u8) -> String {
    (0..8).map(|i| if get_bit(byte, i) == 1 { '1' } else { '0' }).collect()
}

// converts a string of at most 8 '0' and '1' characters back into a byte, most significant bit first
#[cfg(test)]
pub(crate) fn bits_to_byte(bits: &str) -> u8 {
    let mut byte = 0;
    for (i, c) in bits.chars().take(8).enumerate() {
        if c == '1' {
            byte = set_bit(byte, i as u32);
        }
    }
    byte
}

pub fn int32_to_bytes(num: u32) -> [u8; 4] {
    num.to_le_bytes()
}

pub fn bytes_to_int32(buffer: [u8; 4]) -> u32 {
    u32::from_le_bytes(buffer)
}
