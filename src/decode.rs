//! The resolver: walks the template store from the one-byte root table to a
//! terminal template, absorbing prefixes and following dispatch entries.
//!
//! Decoding is a pure function of the byte window and the mode; the store is
//! never mutated and the resolver allocates nothing.

use std::{error, fmt};

use crate::bytes::{self, Cursor};
use crate::context::{DecodeContext, Evex, Mode, ModRm, Rex, Vex, Xop};
use crate::schema::flags::Attrs;
use crate::schema::opcode::Opcode;
use crate::schema::operand::{OpSize, OperandDesc, OperandKind};
use crate::tables::{self, OpcodeMap};
use crate::template::{DispatchKind, Entry, Identity, PrefixEffect, Template};

/// Hard bound on dispatch hops for one decode. The deepest chain the store
/// contains is well under this; exceeding it means a malformed table.
pub const DEPTH_LIMIT: usize = 16;

/// Bound on CONTINUED chain length when collecting overflow operands.
const EXTRAS_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte stream reached an explicitly undefined encoding.
    InvalidByte,
    /// The instruction is not legal in the current mode.
    InvalidInMode,
    /// Prefix / VEX / EVEX / REX constraints unsatisfied.
    InvalidPrefix,
    /// The instruction would exceed the 15-byte limit.
    InvalidLength,
    /// The buffer ended before the instruction did.
    Truncated,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidByte => "undefined opcode",
            Self::InvalidInMode => "instruction not valid in this mode",
            Self::InvalidPrefix => "prefix constraints unsatisfied",
            Self::InvalidLength => "instruction exceeds 15 bytes",
            Self::Truncated => "byte stream truncated",
        })
    }
}

impl error::Error for DecodeError {}

impl From<bytes::Error> for DecodeError {
    fn from(err: bytes::Error) -> Self {
        match err {
            bytes::Error::Truncated => Self::Truncated,
            bytes::Error::Limit => Self::InvalidLength,
        }
    }
}

/// A successfully resolved instruction.
#[derive(Debug, Clone, Copy)]
pub struct Decoded {
    pub template: Template,
    /// Total bytes consumed, prefixes through trailing immediates.
    pub length: u8,
}

/// Decodes one instruction starting at `buffer[offset]`.
///
/// `max_length` caps the window; it is clamped to the 15-byte architectural
/// limit. The returned template borrows nothing from `buffer`.
pub fn decode(
    mode: Mode,
    buffer: &[u8],
    offset: usize,
    max_length: usize,
) -> Result<Decoded, DecodeError> {
    Resolver {
        cur: Cursor::new(buffer, offset, max_length),
        ctx: DecodeContext::new(mode),
        map: OpcodeMap::One,
        rep_consumed: false,
        ea_consumed: false,
    }
    .run()
}

struct Resolver<'input> {
    cur: Cursor<'input>,
    ctx: DecodeContext,
    map: OpcodeMap,
    /// An F2/F3 prefix was used up by a REP/REPNE/prefix-extension dispatch.
    rep_consumed: bool,
    /// ModR/M, SIB and displacement bytes already consumed (3DNow! path).
    ea_consumed: bool,
}

impl Resolver<'_> {
    fn run(mut self) -> Result<Decoded, DecodeError> {
        let entry = self.classify()?;
        let opcode = match entry.identity {
            Identity::Op(op) => op,
            Identity::Invalid => return Err(DecodeError::InvalidByte),
            // CONTINUED entries live only in the extras table; reaching one
            // here means a malformed table.
            Identity::Continued | Identity::Prefix(_) | Identity::Dispatch(_) => {
                debug_assert!(false, "non-terminal entry at end of traversal");
                return Err(DecodeError::InvalidByte);
            }
        };
        self.validate(entry)?;
        if entry.attrs.contains(Attrs::HAS_MODRM) && self.ctx.modrm.is_none() {
            self.parse_modrm()?;
        }
        let template = self.build_template(opcode, entry)?;
        if !self.ea_consumed {
            self.skip_ea()?;
        }
        self.skip_immediates(&template)?;
        let length = self.cur.consumed() as u8;
        Ok(Decoded { template, length })
    }

    /// Steps 1 and 2 of the traversal: absorb prefixes, then follow dispatch
    /// entries until a non-dispatch entry is reached.
    fn classify(&mut self) -> Result<&'static Entry, DecodeError> {
        'next_byte: loop {
            let byte = self.cur.read()?;
            let mut entry = &tables::map_table(self.map)[byte as usize];
            let mut hops = 0usize;
            loop {
                match entry.identity {
                    Identity::Prefix(effect) => {
                        self.apply_prefix(effect, byte)?;
                        continue 'next_byte;
                    }
                    Identity::Dispatch(DispatchKind::Escape) => {
                        self.map = OpcodeMap::Two;
                        continue 'next_byte;
                    }
                    Identity::Dispatch(DispatchKind::Escape38) => {
                        self.map = OpcodeMap::T38;
                        continue 'next_byte;
                    }
                    Identity::Dispatch(DispatchKind::Escape3A) => {
                        self.map = OpcodeMap::T3A;
                        continue 'next_byte;
                    }
                    Identity::Dispatch(kind) => {
                        hops += 1;
                        debug_assert!(hops <= DEPTH_LIMIT, "dispatch chain exceeds DEPTH_LIMIT");
                        if hops > DEPTH_LIMIT {
                            return Err(DecodeError::InvalidByte);
                        }
                        entry = self.dispatch(kind, entry)?;
                    }
                    _ => return Ok(entry),
                }
            }
        }
    }

    fn parse_modrm(&mut self) -> Result<ModRm, DecodeError> {
        if let Some(m) = self.ctx.modrm {
            return Ok(m);
        }
        let m = ModRm::decode(self.cur.read()?);
        self.ctx.modrm = Some(m);
        Ok(m)
    }

    /// One dispatch hop: compute the kind-specific index and fetch the next
    /// entry.
    fn dispatch(
        &mut self,
        kind: DispatchKind,
        entry: &'static Entry,
    ) -> Result<&'static Entry, DecodeError> {
        let table = entry.code.sub_table();
        let index = match kind {
            DispatchKind::Extension => self.parse_modrm()?.reg,
            DispatchKind::PrefixExt => self.prefix_ext_index(table)?,
            DispatchKind::X64Ext => self.ctx.mode.is_64() as u8,
            DispatchKind::VexPrefixExt | DispatchKind::EvexPrefixExt => {
                if self.ctx.mode.is_64() {
                    1
                } else {
                    // In 32-bit mode the introducer doubles as LES/LDS/BOUND;
                    // a register-form ModR/M next means the extended prefix.
                    (self.cur.peek()? & 0xc0 == 0xc0) as u8
                }
            }
            DispatchKind::XopPrefixExt => (self.cur.peek()? & 0x38 != 0) as u8,
            DispatchKind::RexBExt => self.ctx.rex.map(Rex::b).unwrap_or(false) as u8,
            DispatchKind::RexWExt => self.ctx.rex.map(Rex::w).unwrap_or(false) as u8,
            DispatchKind::VexLExt => match self.ctx.vex_l() {
                None => 0,
                Some(false) => 1,
                Some(true) => 2,
            },
            DispatchKind::VexWExt => self.ctx.rex_w() as u8,
            DispatchKind::EvexWbExt => {
                let e = self.ctx.evex.ok_or(DecodeError::InvalidPrefix)?;
                (e.w as u8) << 1 | e.b as u8
            }
            DispatchKind::ModExt => self.parse_modrm()?.is_register() as u8,
            DispatchKind::RmExt => self.parse_modrm()?.rm,
            DispatchKind::FloatExt => {
                let m = self.parse_modrm()?;
                return if m.raw <= 0xbf {
                    tables::float_low(table, m.reg)
                } else {
                    tables::float_high(table, m.raw - 0xc0)
                }
                .ok_or(DecodeError::InvalidByte);
            }
            DispatchKind::SuffixExt => {
                // The 3DNow! suffix trails the operand bytes.
                self.parse_modrm()?;
                self.skip_ea()?;
                self.ea_consumed = true;
                let suffix = self.cur.read()?;
                return Ok(tables::suffix_entry(suffix));
            }
            DispatchKind::RepExt => {
                self.rep_consumed = true;
                if self.ctx.rep { 2 } else { 0 }
            }
            DispatchKind::RepneExt => {
                self.rep_consumed = true;
                if self.ctx.repne {
                    4
                } else if self.ctx.rep {
                    2
                } else {
                    0
                }
            }
            DispatchKind::EVexExt => {
                if self.ctx.evex.is_some() {
                    2
                } else if self.ctx.vex.is_some() || self.ctx.xop.is_some() {
                    1
                } else {
                    0
                }
            }
            DispatchKind::Escape | DispatchKind::Escape38 | DispatchKind::Escape3A => {
                debug_assert!(false, "escape handled in classify");
                return Err(DecodeError::InvalidByte);
            }
        };
        tables::family_entry(kind, table, index).ok_or(DecodeError::InvalidByte)
    }

    /// Mandatory-prefix slot selection (0..11) for PREFIX_EXT rows.
    ///
    /// Exactly one mandatory prefix is used. F2/F3 beats 0x66; when both are
    /// present, 0x66 must be a mere size modifier, which requires the row's
    /// 66 slot to be empty. A lone 0x66 likewise falls back to slot 0 when
    /// the row has no 66 form.
    fn prefix_ext_index(&mut self, table: u8) -> Result<u8, DecodeError> {
        let pp = if let Some(v) = self.ctx.vex {
            Some(v.pp)
        } else if let Some(e) = self.ctx.evex {
            Some(e.pp)
        } else {
            self.ctx.xop.map(|x| x.pp)
        };
        if let Some(pp) = pp {
            let slot = match pp {
                0 => 0,
                1 => 2,
                2 => 1,
                _ => 3,
            };
            let base = if self.ctx.evex.is_some() { 8 } else { 4 };
            return Ok(base + slot);
        }

        let slot_66_empty = tables::family_entry(DispatchKind::PrefixExt, table, 2)
            .map(|e| matches!(e.identity, Identity::Invalid))
            .unwrap_or(true);
        if self.ctx.rep || self.ctx.repne {
            if self.ctx.opnd_prefix && !slot_66_empty {
                return Err(DecodeError::InvalidPrefix);
            }
            self.rep_consumed = true;
            Ok(if self.ctx.rep { 1 } else { 3 })
        } else if self.ctx.opnd_prefix && !slot_66_empty {
            Ok(2)
        } else {
            Ok(0)
        }
    }

    fn apply_prefix(&mut self, effect: PrefixEffect, byte: u8) -> Result<(), DecodeError> {
        // REX must be the last prefix byte.
        if self.ctx.rex.is_some() {
            return Err(DecodeError::InvalidPrefix);
        }
        match effect {
            PrefixEffect::OpndSize => self.ctx.opnd_prefix = true,
            PrefixEffect::AddrSize => self.ctx.addr_prefix = true,
            PrefixEffect::Lock => self.ctx.lock = true,
            PrefixEffect::Rep => {
                self.ctx.rep = true;
                self.ctx.repne = false;
            }
            PrefixEffect::Repne => {
                self.ctx.repne = true;
                self.ctx.rep = false;
            }
            PrefixEffect::Seg(r) => self.ctx.seg = Some(r),
            PrefixEffect::Rex => self.ctx.rex = Some(Rex(byte)),
            PrefixEffect::Vex2 => {
                self.reject_legacy_before_extended()?;
                let b1 = self.cur.read()?;
                let vex = Vex::from_2byte(b1);
                self.map = self.extended_map(vex.map)?;
                self.ctx.vex = Some(vex);
            }
            PrefixEffect::Vex3 => {
                self.reject_legacy_before_extended()?;
                let b1 = self.cur.read()?;
                let b2 = self.cur.read()?;
                let vex = Vex::from_3byte(b1, b2);
                self.map = self.extended_map(vex.map)?;
                self.ctx.vex = Some(vex);
            }
            PrefixEffect::Evex => {
                self.reject_legacy_before_extended()?;
                let p0 = self.cur.read()?;
                let p1 = self.cur.read()?;
                let p2 = self.cur.read()?;
                let evex = Evex::parse(p0, p1, p2).ok_or(DecodeError::InvalidPrefix)?;
                self.map = self.extended_map(evex.map)?;
                self.ctx.evex = Some(evex);
            }
            PrefixEffect::Xop => {
                self.reject_legacy_before_extended()?;
                let b1 = self.cur.read()?;
                let b2 = self.cur.read()?;
                let xop = Xop::from_bytes(b1, b2);
                self.map = match xop.map {
                    8 => OpcodeMap::Xop8,
                    9 => OpcodeMap::Xop9,
                    10 => OpcodeMap::XopA,
                    _ => return Err(DecodeError::InvalidPrefix),
                };
                self.ctx.xop = Some(xop);
            }
        }
        Ok(())
    }

    /// A legacy mandatory prefix or LOCK in front of a VEX/EVEX/XOP
    /// introducer is an invalid encoding; the introducer carries those bits
    /// itself.
    fn reject_legacy_before_extended(&self) -> Result<(), DecodeError> {
        if self.ctx.opnd_prefix || self.ctx.rep || self.ctx.repne || self.ctx.lock {
            return Err(DecodeError::InvalidPrefix);
        }
        Ok(())
    }

    fn extended_map(&self, mm: u8) -> Result<OpcodeMap, DecodeError> {
        match mm {
            1 => Ok(OpcodeMap::Two),
            2 => Ok(OpcodeMap::T38),
            3 => Ok(OpcodeMap::T3A),
            _ => Err(DecodeError::InvalidPrefix),
        }
    }

    /// Step 3 and 4: prefix, VEX/EVEX/REX and mode constraints.
    fn validate(&mut self, entry: &'static Entry) -> Result<(), DecodeError> {
        let attrs = entry.attrs;
        if attrs.contains(Attrs::X64_INVALID) && self.ctx.mode.is_64() {
            return Err(DecodeError::InvalidInMode);
        }
        if attrs.contains(Attrs::X86_INVALID) && !self.ctx.mode.is_64() {
            return Err(DecodeError::InvalidInMode);
        }

        // An extended prefix changes the opcode space: it must land on an
        // entry of the matching class, and vice versa.
        let wants_vex = attrs.contains(Attrs::REQUIRES_VEX);
        let wants_evex = attrs.contains(Attrs::REQUIRES_EVEX);
        let has_vex = self.ctx.vex.is_some() || self.ctx.xop.is_some();
        let has_evex = self.ctx.evex.is_some();
        if wants_vex != has_vex || wants_evex != has_evex {
            return Err(DecodeError::InvalidPrefix);
        }
        if attrs.contains(Attrs::REQUIRES_REX) && self.ctx.rex.is_none() {
            return Err(DecodeError::InvalidPrefix);
        }
        if attrs.contains(Attrs::REQUIRES_PREFIX)
            && self.ctx.effective_mandatory() != entry.code.mandatory_prefix()
        {
            return Err(DecodeError::InvalidPrefix);
        }
        // A recorded F2/F3 that nothing consumed and nothing requires is a
        // prefix present when not required.
        if (self.ctx.rep || self.ctx.repne)
            && !self.rep_consumed
            && !attrs.contains(Attrs::REQUIRES_PREFIX)
        {
            return Err(DecodeError::InvalidPrefix);
        }

        let vlen = self
            .ctx
            .vector_len(attrs.contains(Attrs::EVEX_LL_ER) && attrs.contains(Attrs::EVEX_B_SAE));
        if attrs.contains(Attrs::VEX_L_0) && (has_vex || has_evex) && vlen != 0 {
            return Err(DecodeError::InvalidPrefix);
        }
        if attrs.contains(Attrs::VEX_L_1) && vlen != 1 {
            return Err(DecodeError::InvalidPrefix);
        }
        if attrs.contains(Attrs::EVEX_LL_0) {
            match self.ctx.evex {
                Some(e) if e.ll == 0 => {}
                _ => return Err(DecodeError::InvalidPrefix),
            }
        }
        if attrs.contains(Attrs::NOT_K0) {
            match self.ctx.evex {
                Some(e) if e.aaa != 0 => {}
                _ => return Err(DecodeError::InvalidPrefix),
            }
        }
        // The VSIB width flags pin the index-register class, which EVEX
        // derives from L'L.
        if attrs.contains(Attrs::VSIB_ZMM) {
            match self.ctx.evex {
                Some(e) if e.ll == 2 => {}
                _ => return Err(DecodeError::InvalidPrefix),
            }
        }
        if attrs.contains(Attrs::VSIB_YMM) {
            match self.ctx.evex {
                Some(e) if e.ll == 1 => {}
                _ => return Err(DecodeError::InvalidPrefix),
            }
        }

        // VSIB operands exist only in SIB-encoded memory forms.
        let has_vsib = entry
            .dsts
            .iter()
            .chain(entry.srcs.iter())
            .any(|o| matches!(o.kind, OperandKind::Vsib));
        if has_vsib {
            let m = self.parse_modrm()?;
            if m.is_register() || m.rm != 4 {
                return Err(DecodeError::InvalidPrefix);
            }
        }
        Ok(())
    }

    /// Step 5: concatenate primary and CONTINUED operands, resolving
    /// variable widths against the final context.
    fn build_template(
        &mut self,
        opcode: Opcode,
        entry: &'static Entry,
    ) -> Result<Template, DecodeError> {
        let sizes = SizeCx::new(&self.ctx, entry.attrs);
        let mut t = Template::new(opcode, entry);
        for d in entry.dsts.iter().take_while(|o| !o.is_none()) {
            t.push_dst(sizes.resolve(*d));
        }
        for s in entry.srcs.iter().take_while(|o| !o.is_none()) {
            t.push_src(sizes.resolve(*s));
        }
        if entry.attrs.contains(Attrs::HAS_EXTRAS) {
            let mut link = entry.extras_link();
            let mut steps = 0usize;
            while let Some(more) = tables::entry_at(link) {
                debug_assert!(
                    matches!(more.identity, Identity::Continued),
                    "overflow link must reach a CONTINUED entry"
                );
                if !matches!(more.identity, Identity::Continued) {
                    break;
                }
                steps += 1;
                debug_assert!(steps <= EXTRAS_LIMIT, "CONTINUED chain too long");
                if steps > EXTRAS_LIMIT {
                    break;
                }
                for d in more.dsts.iter().take_while(|o| !o.is_none()) {
                    t.push_dst(sizes.resolve(*d));
                }
                for s in more.srcs.iter().take_while(|o| !o.is_none()) {
                    t.push_src(sizes.resolve(*s));
                }
                link = more.link;
            }
        }
        Ok(t)
    }

    /// Consumes the SIB and displacement bytes implied by a parsed ModR/M.
    fn skip_ea(&mut self) -> Result<(), DecodeError> {
        let Some(m) = self.ctx.modrm else {
            return Ok(());
        };
        if m.is_register() {
            return Ok(());
        }
        let disp = if self.ctx.address_bytes() == 2 {
            // 16-bit addressing: no SIB, disp16 for the direct form.
            match m.mod_bits {
                0 => {
                    if m.rm == 6 {
                        2
                    } else {
                        0
                    }
                }
                1 => 1,
                _ => 2,
            }
        } else {
            let mut disp = match m.mod_bits {
                0 => 0,
                1 => 1,
                _ => 4,
            };
            if m.rm == 4 {
                let sib = self.cur.read()?;
                self.ctx.sib = Some(sib);
                if m.mod_bits == 0 && sib & 7 == 5 {
                    disp = 4;
                }
            } else if m.mod_bits == 0 && m.rm == 5 {
                // disp32, RIP-relative in 64-bit mode.
                disp = 4;
            }
            disp
        };
        self.cur.skip(disp)?;
        Ok(())
    }

    /// Consumes the immediate bytes the resolved operands imply. Values are
    /// not decoded at this layer.
    fn skip_immediates(&mut self, template: &Template) -> Result<(), DecodeError> {
        let mut len = 0usize;
        for o in template.dsts().iter().chain(template.srcs().iter()) {
            len += match o.kind {
                OperandKind::MemOffs => self.ctx.address_bytes() as usize,
                OperandKind::VecIs4 => 1,
                OperandKind::Imm | OperandKind::Rel | OperandKind::FarPtr => {
                    o.size.bytes().unwrap_or(0) as usize
                }
                _ => 0,
            };
        }
        self.cur.skip(len)?;
        Ok(())
    }
}

/// Variable-width resolution context, computed once per decode at the very
/// end of a successful traversal.
struct SizeCx {
    v: OpSize,
    y: OpSize,
    z: OpSize,
    p: OpSize,
    vs: OpSize,
    vd64: OpSize,
    vx: OpSize,
    vl: OpSize,
    vh: OpSize,
    vq: OpSize,
}

impl SizeCx {
    fn new(ctx: &DecodeContext, attrs: Attrs) -> Self {
        let w = ctx.rex_w();
        let osz = ctx.opnd_prefix;
        let m64 = ctx.mode.is_64();
        let vlen = ctx.vector_len(attrs.contains(Attrs::EVEX_LL_ER) && attrs.contains(Attrs::EVEX_B_SAE));
        SizeCx {
            v: if w {
                OpSize::B8
            } else if osz {
                OpSize::B2
            } else {
                OpSize::B4
            },
            y: if w { OpSize::B8 } else { OpSize::B4 },
            z: if osz { OpSize::B2 } else { OpSize::B4 },
            p: if w {
                OpSize::B10
            } else if osz {
                OpSize::B4
            } else {
                OpSize::B6
            },
            vs: if osz {
                OpSize::B2
            } else if m64 {
                OpSize::B8
            } else {
                OpSize::B4
            },
            vd64: if m64 {
                OpSize::B8
            } else if osz {
                OpSize::B2
            } else {
                OpSize::B4
            },
            vx: if vlen >= 1 { OpSize::B32 } else { OpSize::B16 },
            vl: match vlen {
                0 => OpSize::B16,
                1 => OpSize::B32,
                _ => OpSize::B64,
            },
            vh: match vlen {
                0 => OpSize::B8,
                1 => OpSize::B16,
                _ => OpSize::B32,
            },
            vq: match vlen {
                0 => OpSize::B4,
                1 => OpSize::B8,
                _ => OpSize::B16,
            },
        }
    }

    fn resolve(&self, desc: OperandDesc) -> OperandDesc {
        let size = match desc.size {
            OpSize::V => self.v,
            OpSize::Y => self.y,
            OpSize::Z => self.z,
            OpSize::P => self.p,
            OpSize::Vs => self.vs,
            OpSize::Vd64 => self.vd64,
            OpSize::Vx => self.vx,
            OpSize::Vl => self.vl,
            OpSize::Vh => self.vh,
            OpSize::Vq => self.vq,
            concrete => concrete,
        };
        OperandDesc::new(desc.kind, size)
    }
}
