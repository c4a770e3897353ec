// Joseph Prichard
// 1/5/2023
// Serialization of a numbered tree into a table of fixed size node rows, and reconstruction from that table

use crate::error::{Error, Result};
use crate::tree::Tree;

pub const ROW_SIZE: usize = 4;

// one internal node: each child is either a leaf holding a symbol or an internal node referenced by its postorder index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRow {
    pub left_internal: bool,
    pub left_data: u8,
    pub right_internal: bool,
    pub right_data: u8,
}

impl NodeRow {
    pub fn new(left_internal: bool, left_data: u8, right_internal: bool, right_data: u8) -> NodeRow {
        NodeRow { left_internal, left_data, right_internal, right_data }
    }

    pub fn to_bytes(&self) -> [u8; ROW_SIZE] {
        [self.left_internal as u8, self.left_data, self.right_internal as u8, self.right_data]
    }

    pub fn from_bytes(bytes: &[u8], row: usize) -> Result<NodeRow> {
        match bytes {
            [left_internal, left_data, right_internal, right_data] => Ok(NodeRow {
                left_internal: read_flag(*left_internal, row)?,
                left_data: *left_data,
                right_internal: read_flag(*right_internal, row)?,
                right_data: *right_data,
            }),
            _ => Err(Error::InvalidNodeRow { row }),
        }
    }
}

fn read_flag(byte: u8, row: usize) -> Result<bool> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(Error::InvalidNodeRow { row }),
    }
}

// emits a row for each internal node in postorder, the tree must be numbered first
pub fn tree_to_rows(tree: &Tree) -> Vec<NodeRow> {
    let mut rows = vec![];
    write_rows(tree, &mut rows);
    rows
}

fn write_rows(tree: &Tree, rows: &mut Vec<NodeRow>) {
    if let Tree::Internal { left, right, .. } = tree {
        write_rows(left, rows);
        write_rows(right, rows);
        let (left_internal, left_data) = child_entry(left);
        let (right_internal, right_data) = child_entry(right);
        rows.push(NodeRow { left_internal, left_data, right_internal, right_data });
    }
}

fn child_entry(child: &Tree) -> (bool, u8) {
    match child {
        Tree::Leaf { symbol, .. } => (false, symbol.unwrap_or(0)),
        Tree::Internal { index, .. } => {
            // invariant: number_nodes runs before serialization and indices fit a byte
            let index = index.expect("Expected internal nodes to be numbered before serialization");
            (true, index as u8)
        }
    }
}

pub fn rows_to_bytes(rows: &[NodeRow]) -> Vec<u8> {
    rows.iter().flat_map(|row| row.to_bytes()).collect()
}

pub fn bytes_to_rows(bytes: &[u8]) -> Result<Vec<NodeRow>> {
    if bytes.len() % ROW_SIZE != 0 {
        return Err(Error::InvalidNodeRow { row: bytes.len() / ROW_SIZE });
    }
    bytes.chunks_exact(ROW_SIZE)
        .enumerate()
        .map(|(row, chunk)| NodeRow::from_bytes(chunk, row))
        .collect()
}

// rebuilds the tree rooted at rows[root_index] by following the stored child indices, any row order works
pub fn read_tree_general(rows: &[NodeRow], root_index: usize) -> Result<Tree> {
    let mut visited = vec![false; rows.len()];
    read_general_from(rows, root_index, &mut visited)
}

fn read_general_from(rows: &[NodeRow], row_index: usize, visited: &mut [bool]) -> Result<Tree> {
    let row = rows.get(row_index).ok_or(Error::InvalidNodeRow { row: row_index })?;
    // every row owns its subtree, so reaching a row twice means a cycle or a shared child
    if visited[row_index] {
        return Err(Error::InvalidNodeRow { row: row_index });
    }
    visited[row_index] = true;
    let left = if row.left_internal {
        read_general_from(rows, row.left_data as usize, visited)?
    } else {
        Tree::leaf(row.left_data, 0)
    };
    let right = if row.right_internal {
        read_general_from(rows, row.right_data as usize, visited)?
    } else {
        Tree::leaf(row.right_data, 0)
    };
    Ok(Tree::internal(left, right))
}

// rebuilds the tree rooted at rows[root_index] assuming the rows are in postorder, child indices are ignored
pub fn read_tree_postorder(rows: &[NodeRow], root_index: usize) -> Result<Tree> {
    if root_index >= rows.len() {
        return Err(Error::InvalidNodeRow { row: root_index });
    }
    // every row below the cursor is still unconsumed, walking backwards visits root, right, then left
    let mut cursor = root_index;
    read_postorder_from(rows, &mut cursor)
}

fn read_postorder_from(rows: &[NodeRow], cursor: &mut usize) -> Result<Tree> {
    let row_index = *cursor;
    let row = rows[row_index];
    let right = if row.right_internal {
        *cursor = next_row(*cursor, row_index)?;
        read_postorder_from(rows, cursor)?
    } else {
        Tree::leaf(row.right_data, 0)
    };
    let left = if row.left_internal {
        *cursor = next_row(*cursor, row_index)?;
        read_postorder_from(rows, cursor)?
    } else {
        Tree::leaf(row.left_data, 0)
    };
    Ok(Tree::internal(left, right))
}

fn next_row(cursor: usize, parent: usize) -> Result<usize> {
    cursor.checked_sub(1).ok_or(Error::InvalidNodeRow { row: parent })
}
