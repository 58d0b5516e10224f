//! Partition a flat line sequence into numbered, fixed-size parts.
//!
//! Odd-indexed parts hold `odd` lines and even-indexed parts hold `even`
//! lines. The last part is padded with empty lines up to its target, so every
//! part has exactly the size its index calls for.

use crate::error::ExportError;

/// Line appended to the final part until it reaches its target size.
pub const PADDING_LINE: &str = "\n";

/// Largest accepted target, in lines.
pub const MAX_TARGET: usize = 1_000_000;

/// Target sizes keyed on part index parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSizes {
    odd: usize,
    even: usize,
}

impl ChunkSizes {
    pub fn new(odd: usize, even: usize) -> Result<Self, ExportError> {
        for (which, value) in [("odd", odd), ("even", even)] {
            if !(1..=MAX_TARGET).contains(&value) {
                return Err(ExportError::InvalidTarget {
                    which,
                    value,
                    max: MAX_TARGET,
                });
            }
        }
        Ok(Self { odd, even })
    }

    /// Required line count for the part at 1-based `index`.
    pub fn target(&self, index: usize) -> usize {
        if index % 2 == 1 { self.odd } else { self.even }
    }
}

/// One output part. `lines` always has exactly `target(index)` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub lines: Vec<String>,
    /// How many trailing entries of `lines` are padding.
    pub padding: usize,
}

impl Chunk {
    /// `part_001.txt`, `part_002.txt`, ... (at least three digits).
    pub fn file_name(&self) -> String {
        format!("part_{:03}.txt", self.index)
    }

    /// Lines taken from the input, without padding.
    pub fn content_lines(&self) -> &[String] {
        &self.lines[..self.lines.len().saturating_sub(self.padding)]
    }
}

/// Lazily yields chunks over a borrowed line sequence, so each part can be
/// written out before the next one is built.
pub struct Partitioner<'a> {
    lines: &'a [String],
    sizes: ChunkSizes,
    pos: usize,
    index: usize,
}

impl<'a> Partitioner<'a> {
    pub fn new(lines: &'a [String], sizes: ChunkSizes) -> Self {
        Self {
            lines,
            sizes,
            pos: 0,
            index: 1,
        }
    }
}

impl Iterator for Partitioner<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.pos >= self.lines.len() {
            return None;
        }

        let target = self.sizes.target(self.index);
        let end = self.pos.saturating_add(target).min(self.lines.len());
        let mut lines = self.lines[self.pos..end].to_vec();

        let padding = target - lines.len();
        lines.resize(target, PADDING_LINE.to_string());

        let chunk = Chunk {
            index: self.index,
            lines,
            padding,
        };

        // A short slice is the true remainder, so stepping by the full target is safe.
        self.pos = self.pos.saturating_add(target);
        self.index += 1;
        Some(chunk)
    }
}

pub fn partition(lines: &[String], sizes: ChunkSizes) -> Vec<Chunk> {
    Partitioner::new(lines, sizes).collect()
}

/// Number of parts `len` lines produce, without building them.
pub fn plan_count(len: usize, sizes: ChunkSizes) -> usize {
    let mut pos = 0;
    let mut index = 1;
    while pos < len {
        pos = pos.saturating_add(sizes.target(index));
        index += 1;
    }
    index - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("L{i}\n")).collect()
    }

    fn sizes(odd: usize, even: usize) -> ChunkSizes {
        ChunkSizes::new(odd, even).unwrap()
    }

    #[test]
    fn test_target_alternates_by_parity() {
        let s = sizes(225, 180);
        assert_eq!(s.target(1), 225);
        assert_eq!(s.target(2), 180);
        assert_eq!(s.target(3), 225);
        assert_eq!(s.target(100), 180);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(ChunkSizes::new(0, 5).is_err());
        assert!(ChunkSizes::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_targets_rejected() {
        assert!(ChunkSizes::new(MAX_TARGET, MAX_TARGET).is_ok());
        match ChunkSizes::new(5, usize::MAX) {
            Err(ExportError::InvalidTarget { which, value, max }) => {
                assert_eq!(which, "even");
                assert_eq!(value, usize::MAX);
                assert_eq!(max, MAX_TARGET);
            }
            other => panic!("expected InvalidTarget, got {other:?}"),
        }
        assert!(ChunkSizes::new(MAX_TARGET + 1, 5).is_err());
    }

    #[test]
    fn test_content_lines_tolerates_bad_padding() {
        let chunk = Chunk { index: 1, lines: vec!["a\n".into()], padding: 5 };
        assert!(chunk.content_lines().is_empty());
    }

    #[test]
    fn test_seven_lines_four_two() {
        let chunks = partition(&numbered(7), sizes(4, 2));
        assert_eq!(chunks.len(), 3);

        assert_eq!(chunks[0].lines, vec!["L1\n", "L2\n", "L3\n", "L4\n"]);
        assert_eq!(chunks[1].lines, vec!["L5\n", "L6\n"]);
        assert_eq!(chunks[2].lines, vec!["L7\n", "\n", "\n", "\n"]);

        assert_eq!(chunks[0].padding, 0);
        assert_eq!(chunks[1].padding, 0);
        assert_eq!(chunks[2].padding, 3);
    }

    #[test]
    fn test_empty_sequence_yields_nothing() {
        assert!(partition(&[], sizes(4, 2)).is_empty());
        assert_eq!(plan_count(0, sizes(4, 2)), 0);
    }

    #[test]
    fn test_exact_odd_target_single_chunk() {
        let chunks = partition(&numbered(225), sizes(225, 180));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 1);
        assert_eq!(chunks[0].padding, 0);
    }

    #[test]
    fn test_odd_target_plus_one() {
        let chunks = partition(&numbered(226), sizes(225, 180));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines.len(), 225);
        assert_eq!(chunks[0].padding, 0);
        assert_eq!(chunks[1].lines.len(), 180);
        assert_eq!(chunks[1].lines[0], "L226\n");
        assert_eq!(chunks[1].padding, 179);
    }

    #[test]
    fn test_exact_boundary_has_no_trailing_padding_chunk() {
        // 4 + 2 + 4 = 10
        let chunks = partition(&numbered(10), sizes(4, 2));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].padding, 0);
    }

    #[test]
    fn test_short_sequence_single_padded_chunk() {
        let chunks = partition(&numbered(3), sizes(225, 180));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].lines.len(), 225);
        assert_eq!(chunks[0].content_lines(), numbered(3).as_slice());
    }

    #[test]
    fn test_invariants_over_many_lengths() {
        let s = sizes(5, 3);
        for len in 0..60 {
            let input = numbered(len);
            let chunks = partition(&input, s);

            let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
            assert_eq!(indices, (1..=chunks.len()).collect::<Vec<_>>());

            for c in &chunks {
                assert_eq!(c.lines.len(), s.target(c.index));
                assert!(c.lines[c.lines.len() - c.padding..].iter().all(|l| l == PADDING_LINE));
            }
            // only the last part may carry padding
            for c in chunks.iter().rev().skip(1) {
                assert_eq!(c.padding, 0);
            }

            let rejoined: Vec<String> = chunks.iter().flat_map(|c| c.content_lines().to_vec()).collect();
            assert_eq!(rejoined, input);
            assert_eq!(plan_count(len, s), chunks.len());
        }
    }

    #[test]
    fn test_file_name_padding() {
        let chunk = |index| Chunk { index, lines: vec![], padding: 0 };
        assert_eq!(chunk(1).file_name(), "part_001.txt");
        assert_eq!(chunk(42).file_name(), "part_042.txt");
        assert_eq!(chunk(1234).file_name(), "part_1234.txt");
    }
}
