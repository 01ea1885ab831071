use rand::Rng;

const PREFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const PREFIX_LEN: usize = 7;

/// Fallback keys for elements without a DOM id.
///
/// A random per-session prefix keeps keys apart from page-authored ids; the
/// counter makes them unique within the session.
#[derive(Clone, Debug)]
pub struct ElementKeyGen {
    prefix: String,
    next: u64,
}

impl ElementKeyGen {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let prefix = (0..PREFIX_LEN)
            .map(|_| PREFIX_ALPHABET[rng.gen_range(0..PREFIX_ALPHABET.len())] as char)
            .collect::<String>();
        Self::with_prefix(prefix)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    pub fn next_key(&mut self) -> String {
        let n = self.next;
        self.next = self.next.wrapping_add(1);
        format!("{}-{}", self.prefix, n)
    }
}

impl Default for ElementKeyGen {
    fn default() -> Self {
        Self::new()
    }
}
