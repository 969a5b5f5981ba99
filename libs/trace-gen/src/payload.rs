use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest payload code point (`'0'`).
pub const PAYLOAD_MIN: u8 = 48;
/// Highest payload code point (`'~'`).
pub const PAYLOAD_MAX: u8 = 126;

// ═══════════════════════════════════════════════════════════════
//  Alphabet
// ═══════════════════════════════════════════════════════════════

/// Uniform sampler over the printable range `PAYLOAD_MIN..=PAYLOAD_MAX`.
#[derive(Debug, Clone)]
pub struct PayloadAlphabet {
    dist: Uniform<u8>,
}

impl Default for PayloadAlphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadAlphabet {
    /// Number of distinct payload characters.
    pub const SIZE: usize = (PAYLOAD_MAX - PAYLOAD_MIN) as usize + 1;

    pub fn new() -> Self {
        Self {
            dist: Uniform::new_inclusive(PAYLOAD_MIN, PAYLOAD_MAX),
        }
    }

    pub fn contains(c: char) -> bool {
        (char::from(PAYLOAD_MIN)..=char::from(PAYLOAD_MAX)).contains(&c)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(self.dist.sample(rng))
    }

    /// Replace the contents of `buf` with `len` independently sampled characters.
    ///
    /// The buffer keeps its allocation, so one `String` can serve a whole trace.
    pub fn fill<R: Rng + ?Sized>(&self, rng: &mut R, len: usize, buf: &mut String) {
        buf.clear();
        buf.reserve(len);
        for _ in 0..len {
            buf.push(self.sample(rng));
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  RNG
// ═══════════════════════════════════════════════════════════════

/// RNG for a trace run: reproducible with a seed, OS entropy otherwise.
pub fn trace_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
