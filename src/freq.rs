// Joseph Prichard
// 1/5/2023
// Frequency table counting the occurrences of each byte in a buffer

pub const TABLE_SIZE: usize = 256;

// maps each symbol present in the input to its count, symbols can be present with a count of 0
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreqTable {
    counts: Box<[Option<u64>; TABLE_SIZE]>,
}

impl FreqTable {
    pub fn new() -> FreqTable {
        FreqTable { counts: Box::new([None; TABLE_SIZE]) }
    }

    pub fn increment(&mut self, symbol: u8) {
        let count = self.counts[symbol as usize].get_or_insert(0);
        *count += 1;
    }

    pub fn insert(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = Some(count);
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts[symbol as usize]
    }

    // number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total(&self) -> u64 {
        self.iter().map(|(_, count)| count).sum()
    }

    // iterates the present symbols in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(i, count)| count.map(|c| (i as u8, c)))
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        FreqTable::new()
    }
}

impl FromIterator<(u8, u64)> for FreqTable {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut freq_table = FreqTable::new();
        for (symbol, count) in iter {
            freq_table.insert(symbol, count);
        }
        freq_table
    }
}

pub fn create_freq_table(bytes: &[u8]) -> FreqTable {
    let mut freq_table = FreqTable::new();
    // iterate through each byte in the buffer and increment count
    for &byte in bytes {
        freq_table.increment(byte);
    }

    // a lone symbol gets a partner with no occurrences so it never ends up with an empty code
    if freq_table.len() == 1 {
        let dummy = match freq_table.iter().next() {
            Some((0, _)) => 1,
            _ => 0,
        };
        freq_table.insert(dummy, 0);
    }
    freq_table
}
