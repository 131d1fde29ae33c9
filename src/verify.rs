//! Whole-store invariant checks, runnable as a self-test at initialization.
//!
//! These prove the properties the resolver relies on: contiguous operand
//! slots, no mode-exclusion conflicts, resolvable links, acyclic encoding
//! and CONTINUED chains, and an opcode index that only points at terminal
//! entries carrying the matching identifier.

use std::{error, fmt};

use num_enum::TryFromPrimitive;

use crate::index;
use crate::schema::flags::{Attrs, Category, EflagsEffect};
use crate::schema::opcode::Opcode;
use crate::tables;
use crate::template::{EntryRef, Identity};

/// Longest encoding chain the checker will follow before declaring a cycle.
const CHAIN_LIMIT: usize = 64;
/// Longest CONTINUED chain the checker will follow.
const EXTRAS_LIMIT: usize = 8;

#[derive(Debug, Clone)]
pub enum TableError {
    /// A used operand slot follows an unused one.
    SlotGap(&'static str),
    /// An INVALID entry carries operands, flags or a category.
    InvalidNotEmpty,
    /// An entry is flagged both X64_INVALID and X86_INVALID.
    ModeExclusion(&'static str),
    /// A non-END link does not resolve to an entry.
    DanglingLink(&'static str),
    /// An opcode-index slot resolves to a non-terminal entry.
    IndexNotTerminal(Opcode),
    /// An opcode-index slot resolves to an entry with another identity.
    IndexIdentityMismatch(Opcode),
    /// An encoding chain reaches an entry with another identity.
    ChainIdentityMismatch(Opcode),
    /// An encoding chain exceeds [`CHAIN_LIMIT`] links.
    ChainCycle(Opcode),
    /// An operand-overflow chain is malformed or unterminated.
    ExtrasMalformed(&'static str),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotGap(mn) => write!(f, "`{mn}`: gap in operand slots"),
            Self::InvalidNotEmpty => write!(f, "INVALID entry carries payload"),
            Self::ModeExclusion(mn) => write!(f, "`{mn}`: excluded from both modes"),
            Self::DanglingLink(mn) => write!(f, "`{mn}`: link does not resolve"),
            Self::IndexNotTerminal(op) => write!(f, "index for {op:?} is not terminal"),
            Self::IndexIdentityMismatch(op) => write!(f, "index for {op:?} has wrong identity"),
            Self::ChainIdentityMismatch(op) => {
                write!(f, "encoding chain of {op:?} changes identity")
            }
            Self::ChainCycle(op) => write!(f, "encoding chain of {op:?} does not terminate"),
            Self::ExtrasMalformed(mn) => write!(f, "`{mn}`: malformed CONTINUED chain"),
        }
    }
}

impl error::Error for TableError {}

/// Runs every check; the first violation is returned.
pub fn check_tables() -> Result<(), TableError> {
    check_entries()?;
    check_index()?;
    Ok(())
}

fn check_entries() -> Result<(), TableError> {
    let mut result = Ok(());
    tables::for_each_entry(|e| {
        if result.is_err() {
            return;
        }
        if !e.slots_contiguous() {
            result = Err(TableError::SlotGap(e.mnemonic));
            return;
        }
        if matches!(e.identity, Identity::Invalid)
            && (!e.dsts[0].is_none()
                || !e.srcs[0].is_none()
                || e.category != Category::UNCATEGORIZED
                || e.eflags != EflagsEffect::NONE)
        {
            result = Err(TableError::InvalidNotEmpty);
            return;
        }
        if e.attrs.contains(Attrs::X64_INVALID) && e.attrs.contains(Attrs::X86_INVALID) {
            result = Err(TableError::ModeExclusion(e.mnemonic));
            return;
        }
        if !matches!(e.link, EntryRef::End) && tables::entry_at(e.link).is_none() {
            result = Err(TableError::DanglingLink(e.mnemonic));
            return;
        }
        if e.attrs.contains(Attrs::HAS_EXTRAS) {
            let mut link = e.extras_link();
            let mut steps = 0usize;
            loop {
                match tables::entry_at(link) {
                    None if matches!(link, EntryRef::End) => break,
                    Some(more) if matches!(more.identity, Identity::Continued) => {
                        steps += 1;
                        if steps > EXTRAS_LIMIT {
                            result = Err(TableError::ExtrasMalformed(e.mnemonic));
                            return;
                        }
                        link = more.link;
                    }
                    _ => {
                        result = Err(TableError::ExtrasMalformed(e.mnemonic));
                        return;
                    }
                }
            }
        }
    });
    result
}

fn check_index() -> Result<(), TableError> {
    for raw in 0..Opcode::COUNT as u16 {
        let op = Opcode::try_from_primitive(raw).expect("enumeration is dense");
        let head = index::encoding_head_ref(op);
        if matches!(head, EntryRef::End) {
            continue;
        }
        let Some(entry) = tables::entry_at(head) else {
            return Err(TableError::IndexNotTerminal(op));
        };
        match entry.identity {
            Identity::Op(found) if found == op => {}
            Identity::Op(_) => return Err(TableError::IndexIdentityMismatch(op)),
            _ => return Err(TableError::IndexNotTerminal(op)),
        }
        // Follow the encoding chain; an entry that overflows into the extras
        // table ends its chain there.
        let mut current = entry;
        let mut steps = 0usize;
        while !current.attrs.contains(Attrs::HAS_EXTRAS) {
            let link = current.link;
            if matches!(link, EntryRef::End) {
                break;
            }
            steps += 1;
            if steps > CHAIN_LIMIT {
                return Err(TableError::ChainCycle(op));
            }
            let Some(next) = tables::entry_at(link) else {
                return Err(TableError::IndexNotTerminal(op));
            };
            match next.identity {
                Identity::Op(found) if found == op => {}
                _ => return Err(TableError::ChainIdentityMismatch(op)),
            }
            current = next;
        }
    }
    Ok(())
}
