//! Control flow labels.
use crate::constants::END_LABEL;
use log::trace;
use std::fmt;

/// Unique number identifying a label within one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(pub usize);

/// Hands out monotonically increasing label ids.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    next: usize,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self) -> LabelId {
        let id = LabelId(self.next);
        self.next += 1;
        trace!("allocated label {}", id.0);
        id
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Jump target in the assembly output.
///
/// Labels are symbolic. Resolving them to offsets is left to
/// the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Start of the `else` branch of a conditional.
    Else(LabelId),
    /// First instruction after a conditional.
    EndIf(LabelId),
    /// Final halt of the program.
    End,
}

impl fmt::Display for Label {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Else(id)  => write!(f, "else_part_{}", id.0),
            Label::EndIf(id) => write!(f, "end_if_{}", id.0),
            Label::End       => write!(f, "{END_LABEL}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_alloc_unique() {
        let mut labels = LabelAllocator::new();
        let ids = (0..3).map(|_| labels.alloc()).collect::<Vec<_>>();
        assert_eq!(ids, vec![LabelId(0), LabelId(1), LabelId(2)]);
        assert_eq!(labels.count(), 3);

        labels.reset();
        assert_eq!(labels.alloc(), LabelId(0));
    }

    #[test]
    fn test_label_names() {
        assert_eq!(Label::Else(LabelId(1)).to_string(), "else_part_1");
        assert_eq!(Label::EndIf(LabelId(2)).to_string(), "end_if_2");
        assert_eq!(Label::End.to_string(), "end");
    }
}
