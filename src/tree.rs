// Joseph Prichard
// 1/5/2023
// Type definitions and utilities for the binary tree structure used for huffman coding

use std::fmt;
use crate::freq::{FreqTable, TABLE_SIZE};

// a huffman tree: the weight and index fields are only meaningful while a tree is being built or serialized
#[derive(Debug, Clone)]
pub enum Tree {
    Leaf {
        // None marks the tree built from zero symbols
        symbol: Option<u8>,
        weight: u64,
        index: Option<usize>,
    },
    Internal {
        left: Box<Tree>,
        right: Box<Tree>,
        weight: u64,
        // postorder position among the internal nodes
        index: Option<usize>,
    },
}

impl Tree {
    // creates a leaf structure with no children
    pub fn leaf(symbol: u8, weight: u64) -> Tree {
        Tree::Leaf { symbol: Some(symbol), weight, index: None }
    }

    pub fn empty() -> Tree {
        Tree::Leaf { symbol: None, weight: 0, index: None }
    }

    // moves the left and right nodes, the weight of the parent is the sum of the children
    pub fn internal(left: Tree, right: Tree) -> Tree {
        let weight = left.weight() + right.weight();
        Tree::Internal { left: Box::new(left), right: Box::new(right), weight, index: None }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Leaf { symbol: None, .. })
    }

    pub fn symbol(&self) -> Option<u8> {
        match self {
            Tree::Leaf { symbol, .. } => *symbol,
            Tree::Internal { .. } => None,
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Tree::Leaf { weight, .. } | Tree::Internal { weight, .. } => *weight,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Tree::Leaf { index, .. } | Tree::Internal { index, .. } => *index,
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            Tree::Leaf { .. } => 0,
            Tree::Internal { left, right, .. } => 1 + left.internal_count() + right.internal_count(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf { symbol: None, .. } => 0,
            Tree::Leaf { .. } => 1,
            Tree::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    // zeroes the construction weights once the tree is finished
    pub fn clear_weights(&mut self) {
        match self {
            Tree::Leaf { weight, .. } => *weight = 0,
            Tree::Internal { left, right, weight, .. } => {
                *weight = 0;
                left.clear_weights();
                right.clear_weights();
            }
        }
    }
}

// trees are equal when they have the same shape and the same leaf symbols
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tree::Leaf { symbol: a, .. }, Tree::Leaf { symbol: b, .. }) => a == b,
            (
                Tree::Internal { left: l1, right: r1, .. },
                Tree::Internal { left: l2, right: r2, .. },
            ) => l1 == l2 && r1 == r2,
            _ => false,
        }
    }
}

impl Eq for Tree {}

// number the internal nodes in postorder starting from 0, returns the count of numbered nodes
pub fn number_nodes(tree: &mut Tree) -> usize {
    if let Tree::Leaf { symbol: None, index, .. } = tree {
        // the empty tree is numbered as a single node
        *index = Some(0);
        return 0;
    }
    let mut counter = 0;
    number_nodes_from(tree, &mut counter);
    counter
}

fn number_nodes_from(tree: &mut Tree, counter: &mut usize) {
    if let Tree::Internal { left, right, index, .. } = tree {
        number_nodes_from(left, counter);
        number_nodes_from(right, counter);
        *index = Some(*counter);
        *counter += 1;
    }
}

// a code stored in the low bit_len bits of encoded_symbol, first bit in the most significant position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolCode {
    pub plain_symbol: u8,
    pub encoded_symbol: u64,
    pub bit_len: u8,
}

impl SymbolCode {
    pub fn new() -> SymbolCode {
        SymbolCode { plain_symbol: 0, encoded_symbol: 0, bit_len: 0 }
    }

    pub fn append_bit(&self, bit: u64) -> SymbolCode {
        SymbolCode {
            plain_symbol: self.plain_symbol,
            encoded_symbol: (self.encoded_symbol << 1) | bit,
            bit_len: self.bit_len + 1,
        }
    }

    // returns bit i of the code, where bit 0 is the first bit written
    pub fn get_bit(&self, i: u8) -> u8 {
        ((self.encoded_symbol >> (self.bit_len - 1 - i)) & 1) as u8
    }

    pub fn is_prefix_of(&self, other: &SymbolCode) -> bool {
        self.bit_len <= other.bit_len
            && (other.encoded_symbol >> (other.bit_len - self.bit_len)) == self.encoded_symbol
    }
}

impl Default for SymbolCode {
    fn default() -> Self {
        SymbolCode::new()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.bit_len {
            write!(f, "{}", self.get_bit(i))?;
        }
        Ok(())
    }
}

// maps each symbol in a tree to its code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: Box<[Option<SymbolCode>; TABLE_SIZE]>,
}

impl CodeTable {
    pub fn get(&self, symbol: u8) -> Option<&SymbolCode> {
        self.codes[symbol as usize].as_ref()
    }

    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolCode> + '_ {
        self.codes.iter().flatten()
    }
}

pub fn create_code_table(tree: &Tree) -> CodeTable {
    let mut codes: Box<[Option<SymbolCode>; TABLE_SIZE]> = Box::new([None; TABLE_SIZE]);
    walk_code_tree(tree, SymbolCode::new(), codes.as_mut_slice());
    CodeTable { codes }
}

fn walk_code_tree(node: &Tree, mut symbol_code: SymbolCode, codes: &mut [Option<SymbolCode>]) {
    match node {
        Tree::Leaf { symbol: Some(symbol), .. } => {
            symbol_code.plain_symbol = *symbol;
            codes[*symbol as usize] = Some(symbol_code);
        }
        Tree::Leaf { symbol: None, .. } => {}
        Tree::Internal { left, right, .. } => {
            walk_code_tree(left, symbol_code.append_bit(0), codes);
            walk_code_tree(right, symbol_code.append_bit(1), codes);
        }
    }
}

// the average number of bits per symbol needed to encode a buffer with these frequencies
pub fn avg_length(tree: &Tree, freq_table: &FreqTable) -> f64 {
    let total = freq_table.total();
    if total == 0 {
        return 0.0;
    }
    let code_table = create_code_table(tree);
    let weighted_sum: u64 = freq_table
        .iter()
        .filter_map(|(symbol, count)| code_table.get(symbol).map(|code| count * code.bit_len as u64))
        .sum();
    weighted_sum as f64 / total as f64
}
