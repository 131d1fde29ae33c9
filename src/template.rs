//! Instruction template records.
//!
//! The template store is a collection of static tables of [`Entry`] records.
//! An entry either describes one concrete instruction form (a terminal
//! template) or redirects the lookup to another table ([`Identity::Dispatch`]).
//! Cross-table references are typed [`EntryRef`] indices, never pointers, so
//! the whole store can be plain immutable `static` data.

use crate::schema::flags::{Attrs, Category, EflagsEffect};
use crate::schema::opcode::Opcode;
use crate::schema::operand::{OperandDesc, Reg};

/// Maximum destination operands a resolved template can carry, including
/// operands collected from a CONTINUED chain.
pub const MAX_DSTS: usize = 8;
/// Maximum source operands a resolved template can carry.
pub const MAX_SRCS: usize = 12;

/// Effect of a decoding prefix byte on the decode context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixEffect {
    /// 0x66 operand-size override; also a mandatory-prefix candidate.
    OpndSize,
    /// 0x67 address-size override.
    AddrSize,
    /// 0xF0.
    Lock,
    /// 0xF3; also a mandatory-prefix candidate.
    Rep,
    /// 0xF2; also a mandatory-prefix candidate.
    Repne,
    /// Segment override.
    Seg(Reg),
    /// REX byte (64-bit mode only); must be the last prefix byte.
    Rex,
    /// Two-byte VEX introducer 0xC5.
    Vex2,
    /// Three-byte VEX introducer 0xC4.
    Vex3,
    /// Four-byte EVEX introducer 0x62.
    Evex,
    /// XOP introducer 0x8F.
    Xop,
}

/// Dispatch kinds: how a non-terminal entry selects the next table and the
/// index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchKind {
    /// Second-byte table, indexed by the next opcode byte.
    Escape,
    /// 0F 38 table, indexed by the next opcode byte.
    Escape38,
    /// 0F 3A table, indexed by the next opcode byte.
    Escape3A,
    /// Base-extensions family, indexed by ModR/M.reg.
    Extension,
    /// Prefix-extensions family: 0..3 by mandatory prefix, 4..7 with VEX,
    /// 8..11 with EVEX.
    PrefixExt,
    /// 0 in 32-bit mode, 1 in 64-bit mode.
    X64Ext,
    /// 0 if the byte is not a VEX introducer here, 1 if it is.
    VexPrefixExt,
    /// 0 if not XOP, 1 if XOP.
    XopPrefixExt,
    /// 0 if not EVEX, 1 if EVEX.
    EvexPrefixExt,
    /// 0 / 1 by REX.B.
    RexBExt,
    /// 0 / 1 by REX.W.
    RexWExt,
    /// 0 non-VEX, 1 VEX.L=0, 2 VEX.L=1.
    VexLExt,
    /// 0 / 1 by VEX.W (XOP.W for XOP encodings).
    VexWExt,
    /// `(W << 1) | b` from the EVEX prefix.
    EvexWbExt,
    /// 0 if ModR/M.mod selects memory, 1 if register.
    ModExt,
    /// ModR/M.r/m when mod = 3.
    RmExt,
    /// x87: low table by ModR/M.reg, high table by `modrm - 0xC0`.
    FloatExt,
    /// 3DNow!: trailing immediate byte.
    SuffixExt,
    /// 0 without REP, 2 with 0xF3.
    RepExt,
    /// 0 without prefix, 2 with 0xF3, 4 with 0xF2.
    RepneExt,
    /// 0 legacy, 1 VEX, 2 EVEX.
    EVexExt,
}

/// Opcode identity of an entry: a real opcode, one of the sentinels, or a
/// dispatch tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// A concrete instruction template.
    Op(Opcode),
    /// Explicitly undefined encoding.
    Invalid,
    /// Operand-overflow continuation of a preceding template.
    Continued,
    /// A decoding prefix, not an instruction.
    Prefix(PrefixEffect),
    /// Not terminal; redirects the lookup.
    Dispatch(DispatchKind),
}

/// A typed reference to an entry in the template store, or the END sentinel.
///
/// References are (table, index) pairs resolved by `tables::entry_at`; END is
/// always distinguishable from a real reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryRef {
    /// Chain terminator / null reference.
    End,
    OneByte(u8),
    TwoByte(u8),
    ThreeByte38(u8),
    ThreeByte3A(u8),
    Xop8(u8),
    Xop9(u8),
    XopA(u8),
    /// `family[table][index]` for the two-dimensional dispatch families.
    Family(DispatchKind, u8, u8),
    /// x87 `[opcode - 0xD8][reg]`, ModR/M below 0xC0.
    FloatLow(u8, u8),
    /// x87 `[opcode - 0xD8][modrm - 0xC0]`.
    FloatHigh(u8, u8),
    /// 3DNow! suffix table.
    Suffix(u8),
    /// CONTINUED entry in the extras table.
    Extra(u16),
}

/// Mandatory-prefix selector carried in the packed opcode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mand {
    None = 0,
    P66 = 1,
    PF2 = 2,
    PF3 = 3,
}

/// Packed encoded-opcode word.
///
/// Layout, defined once here and consumed only through the accessors:
/// - bits 0..=23: the literal opcode bytes, most significant byte first
///   (`0x0f3817` for `0F 38 17`);
/// - bits 24..=25: mandatory-prefix selector ([`Mand`]);
/// - bits 26..=28: `/reg` opcode extension;
/// - bit 29: set when the `/reg` extension is meaningful.
///
/// For dispatch entries the whole word is the sub-table index instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeBits(u32);

impl OpcodeBits {
    pub const EMPTY: OpcodeBits = OpcodeBits(0);

    /// Literal opcode bytes only.
    #[must_use]
    pub const fn bytes(raw: u32) -> Self {
        Self(raw & 0x00ff_ffff)
    }

    /// Opcode bytes with a mandatory prefix.
    #[must_use]
    pub const fn with_prefix(mand: Mand, raw: u32) -> Self {
        Self(raw & 0x00ff_ffff | (mand as u32) << 24)
    }

    /// Attach a `/reg` opcode extension.
    #[must_use]
    pub const fn with_reg(self, reg: u8) -> Self {
        Self(self.0 | ((reg & 7) as u32) << 26 | 1 << 29)
    }

    /// Sub-table index for a dispatch entry.
    #[must_use]
    pub const fn table(index: u8) -> Self {
        Self(index as u32)
    }

    #[inline]
    #[must_use]
    pub const fn opcode_bytes(self) -> u32 {
        self.0 & 0x00ff_ffff
    }

    #[inline]
    #[must_use]
    pub const fn mandatory_prefix(self) -> Mand {
        match (self.0 >> 24) & 3 {
            0 => Mand::None,
            1 => Mand::P66,
            2 => Mand::PF2,
            _ => Mand::PF3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn reg_extension(self) -> Option<u8> {
        if self.0 & 1 << 29 != 0 {
            Some((self.0 >> 26) as u8 & 7)
        } else {
            None
        }
    }

    /// Sub-table index carried by a dispatch entry.
    #[inline]
    #[must_use]
    pub const fn sub_table(self) -> u8 {
        self.0 as u8
    }
}

/// One record of the template store.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub identity: Identity,
    pub code: OpcodeBits,
    pub category: Category,
    /// Disassembly/logging name; the resolver never inspects it.
    pub mnemonic: &'static str,
    pub dsts: [OperandDesc; 2],
    pub srcs: [OperandDesc; 3],
    pub attrs: Attrs,
    pub eflags: EflagsEffect,
    /// Encoding chain, or the operand-overflow chain when
    /// [`Attrs::HAS_EXTRAS`] is set.
    pub link: EntryRef,
}

impl Entry {
    /// Whether the entry redirects the lookup instead of terminating it.
    #[inline]
    #[must_use]
    pub const fn is_dispatch(&self) -> bool {
        matches!(self.identity, Identity::Dispatch(_))
    }

    /// Whether the entry is a concrete instruction template.
    #[inline]
    #[must_use]
    pub const fn is_instruction(&self) -> bool {
        matches!(self.identity, Identity::Op(_))
    }

    /// The operand-overflow link, honoring [`Attrs::EXTRAS_IN_CODE`].
    #[must_use]
    pub fn extras_link(&self) -> EntryRef {
        if self.attrs.contains(Attrs::EXTRAS_IN_CODE) {
            EntryRef::Extra(self.code.sub_table() as u16)
        } else {
            self.link
        }
    }

    /// Checks the contiguous-slot invariant: no used slot follows an unused
    /// one in the same direction.
    #[must_use]
    pub fn slots_contiguous(&self) -> bool {
        fn contiguous(slots: &[OperandDesc]) -> bool {
            let mut seen_none = false;
            for s in slots {
                if s.is_none() {
                    seen_none = true;
                } else if seen_none {
                    return false;
                }
            }
            true
        }
        contiguous(&self.dsts) && contiguous(&self.srcs)
    }
}

/// A fully resolved template: the terminal entry's identity plus the operand
/// descriptors of the entry and its CONTINUED chain, with variable widths
/// already resolved against the decode context. Fixed-capacity, no heap.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub opcode: Opcode,
    pub mnemonic: &'static str,
    pub category: Category,
    pub attrs: Attrs,
    pub eflags: EflagsEffect,
    /// The terminal store entry the template was resolved from.
    pub entry: &'static Entry,
    dsts: [OperandDesc; MAX_DSTS],
    ndsts: u8,
    srcs: [OperandDesc; MAX_SRCS],
    nsrcs: u8,
}

impl Template {
    pub(crate) fn new(opcode: Opcode, entry: &'static Entry) -> Self {
        Self {
            opcode,
            mnemonic: entry.mnemonic,
            category: entry.category,
            attrs: entry.attrs,
            eflags: entry.eflags,
            entry,
            dsts: [OperandDesc::NONE; MAX_DSTS],
            ndsts: 0,
            srcs: [OperandDesc::NONE; MAX_SRCS],
            nsrcs: 0,
        }
    }

    pub(crate) fn push_dst(&mut self, d: OperandDesc) {
        debug_assert!((self.ndsts as usize) < MAX_DSTS, "destination slots exhausted");
        if (self.ndsts as usize) < MAX_DSTS {
            self.dsts[self.ndsts as usize] = d;
            self.ndsts += 1;
        }
    }

    pub(crate) fn push_src(&mut self, s: OperandDesc) {
        debug_assert!((self.nsrcs as usize) < MAX_SRCS, "source slots exhausted");
        if (self.nsrcs as usize) < MAX_SRCS {
            self.srcs[self.nsrcs as usize] = s;
            self.nsrcs += 1;
        }
    }

    /// Destination operand descriptors, in slot order.
    #[must_use]
    pub fn dsts(&self) -> &[OperandDesc] {
        &self.dsts[..self.ndsts as usize]
    }

    /// Source operand descriptors, in slot order.
    #[must_use]
    pub fn srcs(&self) -> &[OperandDesc] {
        &self.srcs[..self.nsrcs as usize]
    }
}

#[test]
fn test_opcode_bits_packing() {
    let c = OpcodeBits::with_prefix(Mand::P66, 0x0f3817).with_reg(5);
    assert_eq!(c.opcode_bytes(), 0x0f3817);
    assert_eq!(c.mandatory_prefix(), Mand::P66);
    assert_eq!(c.reg_extension(), Some(5));

    let plain = OpcodeBits::bytes(0x90);
    assert_eq!(plain.opcode_bytes(), 0x90);
    assert_eq!(plain.mandatory_prefix(), Mand::None);
    assert_eq!(plain.reg_extension(), None);

    assert_eq!(OpcodeBits::table(17).sub_table(), 17);
}

#[test]
fn test_slot_invariant_check() {
    use crate::schema::operand::{OpSize, OperandKind};

    let used = OperandDesc::new(OperandKind::Imm, OpSize::B1);
    let mut e = Entry {
        identity: Identity::Invalid,
        code: OpcodeBits::EMPTY,
        category: Category::UNCATEGORIZED,
        mnemonic: "",
        dsts: [OperandDesc::NONE; 2],
        srcs: [used, OperandDesc::NONE, used],
        attrs: Attrs::empty(),
        eflags: EflagsEffect::NONE,
        link: EntryRef::End,
    };
    assert!(!e.slots_contiguous());
    e.srcs = [used, used, OperandDesc::NONE];
    assert!(e.slots_contiguous());
}
