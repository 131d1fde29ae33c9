//! Decode context: everything the resolver accumulates while walking one
//! instruction — mode, legacy prefixes, REX/VEX/EVEX/XOP state, and the
//! ModR/M and SIB bytes once they have been parsed.
//!
//! The context is caller-private and lives for a single decode call.

use crate::schema::operand::Reg;
use crate::template::Mand;

/// Architecture mode of the code being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 32-bit protected mode.
    Mode32,
    /// 64-bit long mode.
    Mode64,
}

impl Mode {
    #[inline]
    #[must_use]
    pub const fn is_64(self) -> bool {
        matches!(self, Mode::Mode64)
    }
}

/// REX prefix byte (`0x40..=0x4F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rex(pub u8);

impl Rex {
    /// REX.W: 64-bit operand size.
    #[inline]
    #[must_use]
    pub const fn w(self) -> bool {
        self.0 & 0b1000 != 0
    }
    /// REX.R: extends ModR/M.reg.
    #[inline]
    #[must_use]
    pub const fn r(self) -> bool {
        self.0 & 0b0100 != 0
    }
    /// REX.X: extends SIB.index.
    #[inline]
    #[must_use]
    pub const fn x(self) -> bool {
        self.0 & 0b0010 != 0
    }
    /// REX.B: extends ModR/M.r/m or SIB.base.
    #[inline]
    #[must_use]
    pub const fn b(self) -> bool {
        self.0 & 0b0001 != 0
    }
}

/// Decoded VEX prefix payload (from the 2-byte or 3-byte form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vex {
    /// Opcode map: 1 = 0F, 2 = 0F 38, 3 = 0F 3A.
    pub map: u8,
    /// Embedded mandatory prefix: 0 none, 1 = 66, 2 = F3, 3 = F2.
    pub pp: u8,
    /// Vector length: false = 128, true = 256.
    pub l: bool,
    /// Inverted extra register selector, already un-inverted.
    pub vvvv: u8,
    pub w: bool,
}

impl Vex {
    /// `C5 xx`: map is implicitly 0F, W is implicitly 0.
    #[must_use]
    pub const fn from_2byte(b1: u8) -> Self {
        Self {
            map: 1,
            pp: b1 & 3,
            l: b1 & 0b100 != 0,
            vvvv: !(b1 >> 3) & 0xf,
            w: false,
        }
    }

    /// `C4 xx xx`.
    #[must_use]
    pub const fn from_3byte(b1: u8, b2: u8) -> Self {
        Self {
            map: b1 & 0x1f,
            pp: b2 & 3,
            l: b2 & 0b100 != 0,
            vvvv: !(b2 >> 3) & 0xf,
            w: b2 & 0x80 != 0,
        }
    }
}

/// Decoded EVEX prefix payload (`62` + three bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evex {
    /// Opcode map: 1 = 0F, 2 = 0F 38, 3 = 0F 3A.
    pub map: u8,
    pub pp: u8,
    /// L'L vector length selector: 0 = 128, 1 = 256, 2 = 512.
    pub ll: u8,
    pub vvvv: u8,
    pub w: bool,
    /// Opmask selector; 0 means k0 (no masking).
    pub aaa: u8,
    /// Broadcast / rounding-control / SAE bit.
    pub b: bool,
    /// Merge-zeroing bit.
    pub z: bool,
}

impl Evex {
    /// Parses the three payload bytes. Returns `None` when reserved bits do
    /// not have their fixed values.
    #[must_use]
    pub const fn parse(p0: u8, p1: u8, p2: u8) -> Option<Self> {
        if p0 & 0b0000_1100 != 0 || p1 & 0b0000_0100 == 0 {
            return None;
        }
        Some(Self {
            map: p0 & 3,
            pp: p1 & 3,
            ll: (p2 >> 5) & 3,
            vvvv: !(p1 >> 3) & 0xf,
            w: p1 & 0x80 != 0,
            aaa: p2 & 7,
            b: p2 & 0b0001_0000 != 0,
            z: p2 & 0x80 != 0,
        })
    }
}

/// Decoded XOP prefix payload (`8F` + two bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xop {
    /// Opcode map: 8, 9 or 10.
    pub map: u8,
    pub pp: u8,
    pub l: bool,
    pub vvvv: u8,
    pub w: bool,
}

impl Xop {
    #[must_use]
    pub const fn from_bytes(b1: u8, b2: u8) -> Self {
        Self {
            map: b1 & 0x1f,
            pp: b2 & 3,
            l: b2 & 0b100 != 0,
            vvvv: !(b2 >> 3) & 0xf,
            w: b2 & 0x80 != 0,
        }
    }
}

/// Parsed ModR/M byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModRm {
    pub raw: u8,
    /// Mod field (bits 7-6).
    pub mod_bits: u8,
    /// Reg field (bits 5-3): register or opcode extension.
    pub reg: u8,
    /// R/M field (bits 2-0).
    pub rm: u8,
}

impl ModRm {
    #[must_use]
    pub const fn decode(raw: u8) -> Self {
        Self {
            raw,
            mod_bits: raw >> 6,
            reg: (raw >> 3) & 7,
            rm: raw & 7,
        }
    }

    /// Whether the r/m field selects a register rather than memory.
    #[inline]
    #[must_use]
    pub const fn is_register(self) -> bool {
        self.mod_bits == 3
    }
}

/// Per-call decode state. Owned by the caller of the resolver; built up as
/// prefixes and encoding bytes are consumed.
#[derive(Debug, Clone)]
pub struct DecodeContext {
    pub mode: Mode,
    /// 0x66 seen.
    pub opnd_prefix: bool,
    /// 0x67 seen.
    pub addr_prefix: bool,
    pub lock: bool,
    /// 0xF3 seen last (of F2/F3).
    pub rep: bool,
    /// 0xF2 seen last (of F2/F3).
    pub repne: bool,
    pub seg: Option<Reg>,
    pub rex: Option<Rex>,
    pub vex: Option<Vex>,
    pub evex: Option<Evex>,
    pub xop: Option<Xop>,
    pub modrm: Option<ModRm>,
    pub sib: Option<u8>,
}

impl DecodeContext {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            opnd_prefix: false,
            addr_prefix: false,
            lock: false,
            rep: false,
            repne: false,
            seg: None,
            rex: None,
            vex: None,
            evex: None,
            xop: None,
            modrm: None,
            sib: None,
        }
    }

    /// The recorded legacy mandatory prefix. F2/F3 take precedence over 66;
    /// the conflict rule between them is the resolver's business.
    #[must_use]
    pub fn mandatory_prefix(&self) -> Mand {
        if self.rep {
            Mand::PF3
        } else if self.repne {
            Mand::PF2
        } else if self.opnd_prefix {
            Mand::P66
        } else {
            Mand::None
        }
    }

    /// The mandatory prefix the encoding carries: the pp bits of an extended
    /// prefix when one is present, the recorded legacy prefix otherwise.
    #[must_use]
    pub fn effective_mandatory(&self) -> Mand {
        let pp = if let Some(v) = self.vex {
            v.pp
        } else if let Some(e) = self.evex {
            e.pp
        } else if let Some(x) = self.xop {
            x.pp
        } else {
            return self.mandatory_prefix();
        };
        match pp {
            0 => Mand::None,
            1 => Mand::P66,
            2 => Mand::PF3,
            _ => Mand::PF2,
        }
    }

    /// Any of VEX/EVEX/XOP present.
    #[inline]
    #[must_use]
    pub fn extended_prefix(&self) -> bool {
        self.vex.is_some() || self.evex.is_some() || self.xop.is_some()
    }

    /// Effective W bit across REX and the extended prefixes.
    #[must_use]
    pub fn rex_w(&self) -> bool {
        self.rex.map(Rex::w).unwrap_or(false)
            || self.vex.map(|v| v.w).unwrap_or(false)
            || self.evex.map(|e| e.w).unwrap_or(false)
            || self.xop.map(|x| x.w).unwrap_or(false)
    }

    /// VEX.L (or XOP.L), when a VEX-class prefix is present.
    #[must_use]
    pub fn vex_l(&self) -> Option<bool> {
        if let Some(v) = self.vex {
            Some(v.l)
        } else if let Some(x) = self.xop {
            Some(x.l)
        } else {
            None
        }
    }

    /// Vector length selector: 0 = 128, 1 = 256, 2 = 512.
    ///
    /// `ll_is_rounding` is set for templates where EVEX.b turns L'L into a
    /// rounding control; the vector length is then the full 512 bits.
    #[must_use]
    pub fn vector_len(&self, ll_is_rounding: bool) -> u8 {
        if let Some(e) = self.evex {
            if ll_is_rounding && e.b { 2 } else { e.ll }
        } else {
            match self.vex_l() {
                Some(true) => 1,
                _ => 0,
            }
        }
    }

    /// Effective address size in bytes.
    #[must_use]
    pub fn address_bytes(&self) -> u8 {
        match (self.mode, self.addr_prefix) {
            (Mode::Mode64, false) => 8,
            (Mode::Mode64, true) | (Mode::Mode32, false) => 4,
            (Mode::Mode32, true) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vex_forms() {
        // C5 F8: R=1 vvvv=1111 L=0 pp=00
        let v = Vex::from_2byte(0xf8);
        assert_eq!(v.map, 1);
        assert_eq!(v.pp, 0);
        assert!(!v.l);
        assert_eq!(v.vvvv, 0);
        assert!(!v.w);

        // C4 E2 69: map=2, W=0, vvvv=0b1101 -> 2, pp=01
        let v = Vex::from_3byte(0xe2, 0x69);
        assert_eq!(v.map, 2);
        assert_eq!(v.pp, 1);
        assert_eq!(v.vvvv, 2);
        assert!(!v.w);
    }

    #[test]
    fn test_evex_parse() {
        // 62 F1 7C 48: map 0F, W=0, vvvv=1111->0, pp=00, L'L=2, aaa=0
        let e = Evex::parse(0xf1, 0x7c, 0x48).unwrap();
        assert_eq!(e.map, 1);
        assert_eq!(e.pp, 0);
        assert_eq!(e.ll, 2);
        assert_eq!(e.vvvv, 0);
        assert!(!e.w);
        assert_eq!(e.aaa, 0);
        assert!(!e.b);
        // Reserved bit violations.
        assert!(Evex::parse(0xf5, 0x7c, 0x48).is_none());
        assert!(Evex::parse(0xf1, 0x78, 0x48).is_none());
    }

    #[test]
    fn test_modrm_fields() {
        let m = ModRm::decode(0xd0);
        assert_eq!(m.mod_bits, 3);
        assert_eq!(m.reg, 2);
        assert_eq!(m.rm, 0);
        assert!(m.is_register());
        assert!(!ModRm::decode(0x05).is_register());
    }

    #[test]
    fn test_context_mandatory() {
        let mut c = DecodeContext::new(Mode::Mode64);
        assert_eq!(c.mandatory_prefix(), Mand::None);
        c.opnd_prefix = true;
        assert_eq!(c.mandatory_prefix(), Mand::P66);
        c.rep = true;
        assert_eq!(c.mandatory_prefix(), Mand::PF3);
        c.vex = Some(Vex::from_2byte(0xf9)); // pp=01
        assert_eq!(c.effective_mandatory(), Mand::P66);
        assert_eq!(c.address_bytes(), 8);
        c.addr_prefix = true;
        assert_eq!(c.address_bytes(), 4);
    }
}
