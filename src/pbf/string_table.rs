use std::collections::HashMap;

/// interns strings into a block-local string table, index 0 reserved for
/// the empty string per the OSM PBF convention (§4.4).
#[derive(Debug, Default)]
pub struct StringTable {
    index: HashMap<String, u32>,
    strings: Vec<String>,
}

impl StringTable {
    pub fn new() -> StringTable {
        StringTable {
            index: HashMap::new(),
            strings: vec![String::new()],
        }
    }

    /// interns `s`, returning its index. repeated calls with equal strings
    /// return the same index.
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.index.get(s) {
            return idx;
        }
        let idx = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), idx);
        idx
    }

    pub fn into_bytes(self) -> Vec<Vec<u8>> {
        self.strings.into_iter().map(String::into_bytes).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}
