//! Replays a fixed sequence of draws for deterministic tests.

use rand::{CryptoRng, RngCore};

pub(crate) struct Scripted {
    values: Vec<u64>,
    pos: usize,
}

impl Scripted {
    pub(crate) fn new(values: &[u64]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = *self
            .values
            .get(self.pos)
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.pos));
        self.pos += 1;
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

// Test-only: lets scripted draws stand in for the secure source.
impl CryptoRng for Scripted {}
