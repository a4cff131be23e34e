//! Length-preserving literal redaction

use memchr::memmem::Finder;

/// Byte written over every matched pattern occurrence.
pub const FILLER: u8 = b'x';

pub struct Redactor {
    passes: Vec<(Finder<'static>, String)>,
}

impl Redactor {
    pub fn new(patterns: &[String]) -> Self {
        let passes = patterns
            .iter()
            .map(|p| (Finder::new(p.as_bytes()).into_owned(), p.clone()))
            .collect();
        Self { passes }
    }

    /// Overwrites every non-overlapping occurrence of each pattern, in
    /// pattern order, with a same-length run of [`FILLER`]. Each pattern
    /// scans the buffer as left by the previous one, so a later pattern can
    /// match filler produced by an earlier substitution.
    pub fn redact_in_place(&self, data: &mut [u8]) {
        for (finder, _) in &self.passes {
            let len = finder.needle().len();
            // zero-width needles match everywhere; skip them
            if len == 0 {
                continue;
            }
            let hits: Vec<usize> = finder.find_iter(data).collect();
            for start in hits {
                data[start..start + len].fill(FILLER);
            }
        }
    }

    pub fn redact(&self, input: &[u8]) -> Vec<u8> {
        let mut data = input.to_vec();
        self.redact_in_place(&mut data);
        data
    }

    /// Pattern texts in application order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.passes.iter().map(|(_, text)| text.as_str())
    }
}
