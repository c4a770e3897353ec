// Joseph Prichard
// 1/5/2023
// Byte layout of a compressed file: node count, node table, original length, packed payload

use crate::bitwise::{bytes_to_int32, int32_to_bytes};
use crate::error::{Error, Result};
use crate::table::{bytes_to_rows, rows_to_bytes, NodeRow, ROW_SIZE};

pub const HEADER_SIZE: usize = 1;
pub const LENGTH_SIZE: usize = 4;
pub const MAX_NODES: usize = u8::MAX as usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    // internal nodes of the tree in postorder
    pub rows: Vec<NodeRow>,
    // number of bytes before compression
    pub original_len: u32,
    // packed codes, zero padded at the end
    pub payload: Vec<u8>,
}

impl Container {
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn byte_len(&self) -> usize {
        HEADER_SIZE + self.rows.len() * ROW_SIZE + LENGTH_SIZE + self.payload.len()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.rows.len() > MAX_NODES {
            return Err(Error::InvalidNodeRow { row: MAX_NODES });
        }
        let mut buffer = Vec::with_capacity(self.byte_len());
        buffer.push(self.rows.len() as u8);
        buffer.extend(rows_to_bytes(&self.rows));
        buffer.extend(int32_to_bytes(self.original_len));
        buffer.extend_from_slice(&self.payload);
        Ok(buffer)
    }

    pub fn from_bytes(buffer: &[u8]) -> Result<Container> {
        let node_count = *buffer.first().ok_or(Error::MalformedContainer {
            required: HEADER_SIZE,
            actual: 0,
        })? as usize;

        // the header declares the table size, the length field must follow it
        let table_end = HEADER_SIZE + node_count * ROW_SIZE;
        let payload_start = table_end + LENGTH_SIZE;
        if buffer.len() < payload_start {
            return Err(Error::MalformedContainer { required: payload_start, actual: buffer.len() });
        }

        let rows = bytes_to_rows(&buffer[HEADER_SIZE..table_end])?;
        let mut length = [0u8; LENGTH_SIZE];
        length.copy_from_slice(&buffer[table_end..payload_start]);

        Ok(Container {
            rows,
            original_len: bytes_to_int32(length),
            payload: buffer[payload_start..].to_vec(),
        })
    }
}

macro_rules! row_format {
    () => ("{:>10}\t{:>15}\t\t{:>15}\t\t{:>8}\t\t{:25}")
}

// prints a summary row for each named container
pub fn list_containers(containers: &[(String, Container)]) {
    println!(row_format!(), "nodes", "compressed", "uncompressed", "ratio", "name");
    for (name, container) in containers {
        let compressed = container.byte_len();
        let ratio = if container.original_len == 0 {
            String::from("-")
        } else {
            format!("{:.2}%", (compressed as f64) / (container.original_len as f64) * 100.0)
        };
        println!(row_format!(), container.node_count(), compressed, container.original_len, &ratio, name);
    }
    println!();
}
