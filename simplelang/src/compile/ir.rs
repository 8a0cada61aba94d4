use super::label::Label;
use crate::constants::Address;
use std::fmt;

/// Assembly instruction or label.
///
/// Operates on the single accumulator register `A` and
/// memory cells `M <addr>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IR {
    /// `ldi A n`
    /// Load immediate into the accumulator.
    LoadImm(i32),
    /// `mov A M addr`
    /// Load memory cell into the accumulator.
    Load(Address),
    /// `mov M A addr`
    /// Store the accumulator into a memory cell.
    Store(Address),
    /// `add M addr`
    /// Add memory cell to the accumulator.
    Add(Address),
    /// `sub M addr`
    /// Subtract memory cell from the accumulator.
    Sub(Address),
    /// `cmp A n`
    /// Compare the accumulator with an immediate.
    Cmp(i32),
    /// `jne label`
    /// Jump when the last comparison was not equal.
    JumpNotEq(Label),
    /// `jmp label`
    Jump(Label),
    /// `hlt`
    Halt,
    /// `label:`
    Label(Label),
}

/// Outputs instruction as assembly.
impl fmt::Display for IR {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IR::LoadImm(n)       => write!(f, "ldi A {n}"),
            IR::Load(addr)       => write!(f, "mov A M {addr}"),
            IR::Store(addr)      => write!(f, "mov M A {addr}"),
            IR::Add(addr)        => write!(f, "add M {addr}"),
            IR::Sub(addr)        => write!(f, "sub M {addr}"),
            IR::Cmp(n)           => write!(f, "cmp A {n}"),
            IR::JumpNotEq(label) => write!(f, "jne {label}"),
            IR::Jump(label)      => write!(f, "jmp {label}"),
            IR::Halt             => write!(f, "hlt"),
            IR::Label(label)     => write!(f, "{label}:"),
        }
    }
}

/// Generated program, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyProgram {
    pub code: Vec<IR>,
}

impl AssemblyProgram {
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Each instruction rendered as one line of text.
    pub fn lines(&self) -> Vec<String> {
        self.code.iter().map(IR::to_string).collect()
    }
}

/// One instruction or label per line.
impl fmt::Display for AssemblyProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ir in &self.code {
            writeln!(f, "{ir}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compile::label::LabelId;

    #[test]
    fn test_mnemonics() {
        let program = AssemblyProgram {
            code: vec![
                IR::LoadImm(5),
                IR::Store(100),
                IR::Load(100),
                IR::Add(101),
                IR::Sub(102),
                IR::Cmp(-3),
                IR::JumpNotEq(Label::Else(LabelId(1))),
                IR::Jump(Label::EndIf(LabelId(2))),
                IR::Label(Label::End),
                IR::Halt,
            ],
        };

        assert_eq!(
            program.to_string(),
            "ldi A 5\n\
             mov M A 100\n\
             mov A M 100\n\
             add M 101\n\
             sub M 102\n\
             cmp A -3\n\
             jne else_part_1\n\
             jmp end_if_2\n\
             end:\n\
             hlt\n"
        );
    }
}
