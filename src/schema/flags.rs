use bitflags::bitflags;
use num_enum::TryFromPrimitive;

bitflags! {
    /// Semantic category bitmask attached to every instruction template.
    ///
    /// Purely informational; the resolver never branches on it. Consumers use
    /// it for classification and statistics. An empty set is the
    /// "uncategorized" sentinel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u32 {
        const INTEGER = 1 << 0;
        const FP      = 1 << 1;
        const SIMD    = 1 << 2;
        const LOAD    = 1 << 3;
        const STORE   = 1 << 4;
        const BRANCH  = 1 << 5;
        const STATE   = 1 << 6;
        const CONVERT = 1 << 7;
        const MATH    = 1 << 8;
    }
}

impl Category {
    /// The uncategorized sentinel.
    pub const UNCATEGORIZED: Category = Category::empty();
}

bitflags! {
    /// Architectural flag bits, used for the per-template read and write sets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Eflags: u16 {
        const CF = 1 << 0;
        const PF = 1 << 1;
        const AF = 1 << 2;
        const ZF = 1 << 3;
        const SF = 1 << 4;
        const OF = 1 << 5;
        const TF = 1 << 6;
        const IF = 1 << 7;
        const DF = 1 << 8;
        const NT = 1 << 9;
        const RF = 1 << 10;
        const AC = 1 << 11;
    }
}

impl Eflags {
    /// The six arithmetic status flags.
    pub const ARITH: Eflags = Eflags::CF
        .union(Eflags::PF)
        .union(Eflags::AF)
        .union(Eflags::ZF)
        .union(Eflags::SF)
        .union(Eflags::OF);
}

/// Flag effect of a template: which flag bits the instruction reads and which
/// it writes, packed into one 32-bit word (reads in the low half, writes in
/// the high half). Table data stores the packed word; everything else goes
/// through [`EflagsEffect::reads`] and [`EflagsEffect::writes`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EflagsEffect(u32);

impl EflagsEffect {
    pub const NONE: EflagsEffect = EflagsEffect(0);

    #[must_use]
    pub const fn new(reads: Eflags, writes: Eflags) -> Self {
        Self(reads.bits() as u32 | (writes.bits() as u32) << 16)
    }

    #[inline]
    #[must_use]
    pub const fn reads(self) -> Eflags {
        Eflags::from_bits_retain(self.0 as u16)
    }

    #[inline]
    #[must_use]
    pub const fn writes(self) -> Eflags {
        Eflags::from_bits_retain((self.0 >> 16) as u16)
    }
}

impl core::fmt::Debug for EflagsEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EflagsEffect")
            .field("reads", &self.reads())
            .field("writes", &self.writes())
            .finish()
    }
}

/// EVEX compressed-displacement tuple type. Selects the scale factor applied
/// to a signed 8-bit displacement in EVEX encodings. Stored packed in the
/// high bits of [`Attrs`]; read it through [`Attrs::tuple_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum TupleType {
    None = 0,
    /// Full vector, broadcast capable
    Fv,
    /// Half vector
    Hv,
    /// Full vector memory
    Fvm,
    /// Tuple1 scalar
    T1s,
    /// Tuple1 fixed
    T1f,
    T2,
    T4,
    T8,
    /// Half vector memory
    Hvm,
    /// Quarter vector memory
    Qvm,
    /// Eighth vector memory
    Ovm,
    M128,
    /// MOVDDUP special case
    Dup,
}

bitflags! {
    /// Per-template encoding attributes.
    ///
    /// Bits 24..=27 hold the EVEX tuple type as a packed field; combine with
    /// [`Attrs::with_tuple`] and read with [`Attrs::tuple_type`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attrs: u32 {
        /// A ModR/M byte follows the opcode bytes.
        const HAS_MODRM = 1 << 0;
        /// Operands continue in a CONTINUED chain in the extras table.
        const HAS_EXTRAS = 1 << 1;
        /// The extras link is stored in the code field, not the link field.
        const EXTRAS_IN_CODE = 1 << 2;
        /// Not legal in 64-bit mode.
        const X64_INVALID = 1 << 3;
        /// Legal only in 64-bit mode.
        const X86_INVALID = 1 << 4;
        /// The mandatory prefix encoded in the opcode bits must be present.
        const REQUIRES_PREFIX = 1 << 5;
        /// The encoding must be VEX-prefixed.
        const REQUIRES_VEX = 1 << 6;
        /// The encoding must be EVEX-prefixed.
        const REQUIRES_EVEX = 1 << 7;
        /// The encoding requires a REX byte.
        const REQUIRES_REX = 1 << 8;
        /// VEX.L must be 0.
        const VEX_L_0 = 1 << 9;
        /// VEX.L must be 1.
        const VEX_L_1 = 1 << 10;
        /// EVEX.L'L must be 0.
        const EVEX_LL_0 = 1 << 11;
        /// The EVEX opmask selector must not be k0.
        const NOT_K0 = 1 << 12;
        /// The SIB index register must be a YMM.
        const VSIB_YMM = 1 << 13;
        /// The SIB index register must be a ZMM.
        const VSIB_ZMM = 1 << 14;
        /// Execution is conditional on a condition code.
        const PRED_CC = 1 << 15;
        /// Execution is conditional on other machine state.
        const PRED_COMPLEX = 1 << 16;
        /// EVEX.b selects suppress-all-exceptions semantics.
        const EVEX_B_SAE = 1 << 17;
        /// EVEX.L'L encodes an embedded rounding mode when EVEX.b is set.
        const EVEX_LL_ER = 1 << 18;
        /// Override the disp8 compression input size.
        const DISP8_OPSZ_1 = 1 << 19;
        const DISP8_OPSZ_2 = 1 << 20;
        const DISP8_OPSZ_4 = 1 << 21;
        const DISP8_OPSZ_8 = 1 << 22;
        /// Packed tuple-type field; not a flag.
        const TUPLE_MASK = 0xf << 24;
    }
}

impl Attrs {
    /// Pack `tuple` into the tuple-type field.
    #[must_use]
    pub const fn with_tuple(self, tuple: TupleType) -> Attrs {
        Attrs::from_bits_retain(self.bits() & !Attrs::TUPLE_MASK.bits() | (tuple as u32) << 24)
    }

    /// The EVEX compressed-displacement tuple type.
    #[must_use]
    pub const fn tuple_type(self) -> TupleType {
        match (self.bits() >> 24) & 0xf {
            0 => TupleType::None,
            1 => TupleType::Fv,
            2 => TupleType::Hv,
            3 => TupleType::Fvm,
            4 => TupleType::T1s,
            5 => TupleType::T1f,
            6 => TupleType::T2,
            7 => TupleType::T4,
            8 => TupleType::T8,
            9 => TupleType::Hvm,
            10 => TupleType::Qvm,
            11 => TupleType::Ovm,
            12 => TupleType::M128,
            _ => TupleType::Dup,
        }
    }
}

#[test]
fn test_tuple_packing() {
    let a = Attrs::HAS_MODRM
        .union(Attrs::REQUIRES_EVEX)
        .with_tuple(TupleType::Fv);
    assert_eq!(a.tuple_type(), TupleType::Fv);
    assert!(a.contains(Attrs::HAS_MODRM));
    assert!(a.contains(Attrs::REQUIRES_EVEX));
    assert!(!a.contains(Attrs::REQUIRES_VEX));
    let b = a.with_tuple(TupleType::T1s);
    assert_eq!(b.tuple_type(), TupleType::T1s);
}

#[test]
fn test_eflags_effect_halves() {
    let e = EflagsEffect::new(Eflags::CF, Eflags::ARITH);
    assert_eq!(e.reads(), Eflags::CF);
    assert_eq!(e.writes(), Eflags::ARITH);
    assert_eq!(EflagsEffect::NONE.reads(), Eflags::empty());
    assert_eq!(EflagsEffect::NONE.writes(), Eflags::empty());
}
