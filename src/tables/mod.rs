//! The template store: every opcode map and dispatch family, and the typed
//! reference resolution that ties them together.

mod defs;
mod extras;
mod float;
mod groups;
mod one_byte;
mod prefix_ext;
mod suffix;
mod t3a;
mod t38;
mod two_byte;
mod vex;

use crate::template::{DispatchKind, Entry, EntryRef};

// Row-index enumerations, re-exported for the opcode index.
pub(crate) use groups::{Grp, Mx, Rx, Wx};
pub(crate) use one_byte::{Rn, Rp};
pub(crate) use prefix_ext::Pe;
pub(crate) use vex::{Evr, Wb, Wv};

/// Which opcode map the resolver is currently reading bytes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpcodeMap {
    One,
    Two,
    T38,
    T3A,
    Xop8,
    Xop9,
    XopA,
}

/// The 256-entry table backing a map.
pub(crate) fn map_table(map: OpcodeMap) -> &'static [Entry; 256] {
    match map {
        OpcodeMap::One => &one_byte::ONE_BYTE,
        OpcodeMap::Two => &two_byte::TWO_BYTE,
        OpcodeMap::T38 => &t38::THREE_BYTE_38,
        OpcodeMap::T3A => &t3a::THREE_BYTE_3A,
        OpcodeMap::Xop8 => &vex::XOP_8,
        OpcodeMap::Xop9 => &vex::XOP_9,
        OpcodeMap::XopA => &vex::XOP_A,
    }
}

/// Entry of a two-dimensional dispatch family. `None` when the indices fall
/// outside the family, or for the kinds the resolver handles without a
/// family array (escapes, x87, 3DNow!).
pub(crate) fn family_entry(kind: DispatchKind, table: u8, index: u8) -> Option<&'static Entry> {
    let t = table as usize;
    let i = index as usize;
    match kind {
        DispatchKind::Extension => groups::GROUPS.get(t)?.get(i),
        DispatchKind::PrefixExt => prefix_ext::PREFIX_EXT.get(t)?.get(i),
        DispatchKind::X64Ext => vex::X64_EXT.get(t)?.get(i),
        DispatchKind::VexPrefixExt => vex::VEX_PREFIX_EXT.get(t)?.get(i),
        DispatchKind::XopPrefixExt => vex::XOP_PREFIX_EXT.get(t)?.get(i),
        DispatchKind::EvexPrefixExt => vex::EVEX_PREFIX_EXT.get(t)?.get(i),
        DispatchKind::RexBExt => vex::REX_B_EXT.get(t)?.get(i),
        DispatchKind::RexWExt => groups::REX_W_EXT.get(t)?.get(i),
        DispatchKind::VexLExt => vex::VEX_L_EXT.get(t)?.get(i),
        DispatchKind::VexWExt => vex::VEX_W_EXT.get(t)?.get(i),
        DispatchKind::EvexWbExt => vex::EVEX_WB_EXT.get(t)?.get(i),
        DispatchKind::ModExt => groups::MOD_EXT.get(t)?.get(i),
        DispatchKind::RmExt => groups::RM_EXT.get(t)?.get(i),
        DispatchKind::RepExt => one_byte::REP_EXT.get(t)?.get(i),
        DispatchKind::RepneExt => one_byte::REPNE_EXT.get(t)?.get(i),
        DispatchKind::EVexExt => vex::E_VEX_EXT.get(t)?.get(i),
        DispatchKind::Escape
        | DispatchKind::Escape38
        | DispatchKind::Escape3A
        | DispatchKind::FloatExt
        | DispatchKind::SuffixExt => None,
    }
}

/// x87 low-map entry: `[opcode - 0xD8][ModR/M.reg]`.
pub(crate) fn float_low(table: u8, reg: u8) -> Option<&'static Entry> {
    float::FLOAT_LOW.get(table as usize)?.get(reg as usize)
}

/// x87 high-map entry: `[opcode - 0xD8][modrm - 0xC0]`.
pub(crate) fn float_high(table: u8, index: u8) -> Option<&'static Entry> {
    float::FLOAT_HIGH.get(table as usize)?.get(index as usize)
}

/// 3DNow! suffix entry.
pub(crate) fn suffix_entry(byte: u8) -> &'static Entry {
    &suffix::SUFFIX[byte as usize]
}

/// CONTINUED entry in the extras table.
pub(crate) fn extra_entry(index: u16) -> Option<&'static Entry> {
    extras::EXTRAS.get(index as usize)
}

/// Resolves a typed cross-table reference. END resolves to `None`.
pub(crate) fn entry_at(r: EntryRef) -> Option<&'static Entry> {
    match r {
        EntryRef::End => None,
        EntryRef::OneByte(b) => Some(&one_byte::ONE_BYTE[b as usize]),
        EntryRef::TwoByte(b) => Some(&two_byte::TWO_BYTE[b as usize]),
        EntryRef::ThreeByte38(b) => Some(&t38::THREE_BYTE_38[b as usize]),
        EntryRef::ThreeByte3A(b) => Some(&t3a::THREE_BYTE_3A[b as usize]),
        EntryRef::Xop8(b) => Some(&vex::XOP_8[b as usize]),
        EntryRef::Xop9(b) => Some(&vex::XOP_9[b as usize]),
        EntryRef::XopA(b) => Some(&vex::XOP_A[b as usize]),
        EntryRef::Family(kind, table, index) => family_entry(kind, table, index),
        EntryRef::FloatLow(table, reg) => float_low(table, reg),
        EntryRef::FloatHigh(table, index) => float_high(table, index),
        EntryRef::Suffix(b) => Some(suffix_entry(b)),
        EntryRef::Extra(i) => extra_entry(i),
    }
}

/// Walks every entry of the store, for the invariant checks.
pub(crate) fn for_each_entry(mut f: impl FnMut(&'static Entry)) {
    for e in map_table(OpcodeMap::One).iter() {
        f(e);
    }
    for e in map_table(OpcodeMap::Two).iter() {
        f(e);
    }
    for e in map_table(OpcodeMap::T38).iter() {
        f(e);
    }
    for e in map_table(OpcodeMap::T3A).iter() {
        f(e);
    }
    for e in map_table(OpcodeMap::Xop8).iter() {
        f(e);
    }
    for e in map_table(OpcodeMap::Xop9).iter() {
        f(e);
    }
    for e in map_table(OpcodeMap::XopA).iter() {
        f(e);
    }
    for row in groups::GROUPS.iter() {
        row.iter().for_each(&mut f);
    }
    for row in prefix_ext::PREFIX_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in groups::MOD_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in groups::RM_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in groups::REX_W_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::X64_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::REX_B_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::VEX_PREFIX_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::XOP_PREFIX_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::EVEX_PREFIX_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::VEX_L_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::VEX_W_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::EVEX_WB_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in vex::E_VEX_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in one_byte::REP_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in one_byte::REPNE_EXT.iter() {
        row.iter().for_each(&mut f);
    }
    for row in float::FLOAT_LOW.iter() {
        row.iter().for_each(&mut f);
    }
    for row in float::FLOAT_HIGH.iter() {
        row.iter().for_each(&mut f);
    }
    for e in suffix::SUFFIX.iter() {
        f(e);
    }
    for e in extras::EXTRAS.iter() {
        f(e);
    }
}
