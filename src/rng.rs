//! Word selection randomness.
//!
//! With the `rng` feature (default) indices come from `getrandom`, which is
//! backed by `crypto.getRandomValues` in the browser. Without it, or if the
//! platform source fails, a small LCG keeps the game playable. Not crypto
//! secure in either case, and it does not need to be.

/// Chooses an index into a pool of `len` words.
pub trait WordPicker {
    /// `None` when `len == 0`; otherwise an index in `0..len`.
    fn pick(&mut self, len: usize) -> Option<usize>;
}

/// Uniform picker used by the game.
#[derive(Clone, Debug)]
pub struct RandomPicker {
    fallback: u64,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            fallback: 0x2545_f491_4f6c_dd1d,
        }
    }

    fn next_u64(&mut self) -> u64 {
        #[cfg(feature = "rng")]
        {
            let mut buf = [0u8; 8];
            match getrandom::getrandom(&mut buf) {
                Ok(()) => return u64::from_le_bytes(buf),
                Err(e) => log::warn!("getrandom failed ({}), using fallback generator", e),
            }
        }
        // Linear congruential step; the high bits are the well-mixed ones.
        self.fallback = self
            .fallback
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.fallback >> 11
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = len as u64;
        // Rejection sampling keeps the choice uniform for any pool size.
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let v = self.next_u64();
            if v < zone {
                return Some((v % len) as usize);
            }
        }
    }
}

/// Replays a fixed list of indices (wrapped into range), cycling forever.
/// Handy for tests and demos that need a known word order.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedPicker {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            pos: 0,
        }
    }

    /// Always the first word of the pool.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl WordPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let raw = match self.script.get(self.pos % self.script.len().max(1)) {
            Some(&i) => i,
            None => 0,
        };
        self.pos += 1;
        Some(raw % len)
    }
}
