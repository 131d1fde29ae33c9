//! x86 / x86-64 opcode classification engine
//!
//! Resolves raw instruction bytes to instruction templates: the opcode
//! identity, operand type descriptors, implicit operands, flag effects and
//! encoding constraints of one instruction form. The template store is
//! immutable static data; decoding is pure and allocation-free.

mod bytes;
/// Decode context: mode, prefixes, ModR/M
pub mod context;
/// The resolver
pub mod decode;
/// Opcode index: identifier to encoding-chain head
pub mod index;
/// Instruction template records
pub mod template;
/// Table invariant checks
pub mod verify;

mod tables;

/// Stable external enumerations
pub mod schema {
    /// Encoding attributes, categories and flag effects
    pub mod flags;
    /// Opcode identifiers
    pub mod opcode;
    /// Operand type and size descriptors
    pub mod operand;
}

pub use self::context::{DecodeContext, Mode};
pub use self::decode::{DecodeError, Decoded, decode};
pub use self::index::encoding_head;
pub use self::schema::opcode::Opcode;
pub use self::template::{Entry, Template};
