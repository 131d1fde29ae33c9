//! Authoring shorthands for the hand-written template tables.
//!
//! Every entry in the store is one line built from these constants and
//! constructors; the compiled representation is always the plain [`Entry`]
//! record.

use crate::schema::flags::{Attrs, Category, Eflags, EflagsEffect, TupleType};
use crate::schema::opcode::Opcode;
use crate::schema::operand::{OpSize, OperandDesc, OperandKind, Reg};
use crate::template::{
    DispatchKind, Entry, EntryRef, Identity, Mand, OpcodeBits, PrefixEffect,
};

pub(crate) use crate::template::EntryRef::End as END;

const fn od(kind: OperandKind, size: OpSize) -> OperandDesc {
    OperandDesc::new(kind, size)
}

// ---------------------------------------------------------------------------
// Operand descriptor shorthands
// ---------------------------------------------------------------------------

pub(crate) const XX: OperandDesc = OperandDesc::NONE;

// ModR/M r/m, general registers or memory
pub(crate) const EB: OperandDesc = od(OperandKind::RegMem, OpSize::B1);
pub(crate) const EW: OperandDesc = od(OperandKind::RegMem, OpSize::B2);
pub(crate) const ED: OperandDesc = od(OperandKind::RegMem, OpSize::B4);
pub(crate) const EQ: OperandDesc = od(OperandKind::RegMem, OpSize::B8);
pub(crate) const EV: OperandDesc = od(OperandKind::RegMem, OpSize::V);
pub(crate) const EY: OperandDesc = od(OperandKind::RegMem, OpSize::Y);
/// r/m promoted to 64 bits by default in 64-bit mode (CALL/JMP).
pub(crate) const EVD: OperandDesc = od(OperandKind::RegMem, OpSize::Vd64);
/// r/m at stack width (PUSH Ev).
pub(crate) const EVS: OperandDesc = od(OperandKind::RegMem, OpSize::Vs);

// ModR/M reg, general registers
pub(crate) const GB: OperandDesc = od(OperandKind::Greg, OpSize::B1);
pub(crate) const GW: OperandDesc = od(OperandKind::Greg, OpSize::B2);
pub(crate) const GD: OperandDesc = od(OperandKind::Greg, OpSize::B4);
pub(crate) const GV: OperandDesc = od(OperandKind::Greg, OpSize::V);
pub(crate) const GY: OperandDesc = od(OperandKind::Greg, OpSize::Y);

// ModR/M r/m as register only
pub(crate) const RD: OperandDesc = od(OperandKind::Grm, OpSize::B4);
pub(crate) const RV: OperandDesc = od(OperandKind::Grm, OpSize::V);
pub(crate) const RY: OperandDesc = od(OperandKind::Grm, OpSize::Vd64);
/// General register selected by VEX.vvvv (BMI).
pub(crate) const BY: OperandDesc = od(OperandKind::GregVex, OpSize::Y);

// Immediates, branch targets, far pointers, absolute offsets
pub(crate) const IB: OperandDesc = od(OperandKind::Imm, OpSize::B1);
pub(crate) const IW: OperandDesc = od(OperandKind::Imm, OpSize::B2);
pub(crate) const IZ: OperandDesc = od(OperandKind::Imm, OpSize::Z);
pub(crate) const IV: OperandDesc = od(OperandKind::Imm, OpSize::V);
pub(crate) const JB: OperandDesc = od(OperandKind::Rel, OpSize::B1);
pub(crate) const JZ: OperandDesc = od(OperandKind::Rel, OpSize::Z);
pub(crate) const AP: OperandDesc = od(OperandKind::FarPtr, OpSize::P);
pub(crate) const OB: OperandDesc = od(OperandKind::MemOffs, OpSize::B1);
pub(crate) const OV: OperandDesc = od(OperandKind::MemOffs, OpSize::V);

// Memory-only r/m
pub(crate) const MB: OperandDesc = od(OperandKind::Mem, OpSize::B1);
pub(crate) const MW: OperandDesc = od(OperandKind::Mem, OpSize::B2);
pub(crate) const MD: OperandDesc = od(OperandKind::Mem, OpSize::B4);
pub(crate) const MQ: OperandDesc = od(OperandKind::Mem, OpSize::B8);
pub(crate) const MDQ: OperandDesc = od(OperandKind::Mem, OpSize::B16);
pub(crate) const MV: OperandDesc = od(OperandKind::Mem, OpSize::V);
pub(crate) const MP: OperandDesc = od(OperandKind::Mem, OpSize::P);
/// BOUND range: two packed bounds.
pub(crate) const MA: OperandDesc = od(OperandKind::Mem, OpSize::B8);
pub(crate) const M80: OperandDesc = od(OperandKind::Mem, OpSize::B10);
/// x87 environment block.
pub(crate) const MFE: OperandDesc = od(OperandKind::Mem, OpSize::B28);
/// x87 state block (FNSAVE/FRSTOR).
pub(crate) const MFS: OperandDesc = od(OperandKind::Mem, OpSize::B108);
/// FXSAVE area.
pub(crate) const MFX: OperandDesc = od(OperandKind::Mem, OpSize::B512);
/// XSAVE area.
pub(crate) const MXS: OperandDesc = od(OperandKind::Mem, OpSize::Xsave);
pub(crate) const MX: OperandDesc = od(OperandKind::Mem, OpSize::Vx);
pub(crate) const ME: OperandDesc = od(OperandKind::Mem, OpSize::Vl);

// MMX
pub(crate) const PQ: OperandDesc = od(OperandKind::MmxReg, OpSize::B8);
pub(crate) const PD: OperandDesc = od(OperandKind::MmxReg, OpSize::B4);
pub(crate) const QQ: OperandDesc = od(OperandKind::MmxRm, OpSize::B8);
pub(crate) const QD: OperandDesc = od(OperandKind::MmxRm, OpSize::B4);

// XMM fixed-width and scalar slices
pub(crate) const VDQ: OperandDesc = od(OperandKind::VecReg, OpSize::B16);
pub(crate) const VSS: OperandDesc = od(OperandKind::VecReg, OpSize::Lo4);
pub(crate) const VSD: OperandDesc = od(OperandKind::VecReg, OpSize::Lo8);
pub(crate) const VQ: OperandDesc = od(OperandKind::VecReg, OpSize::Lo8);
pub(crate) const WDQ: OperandDesc = od(OperandKind::VecRm, OpSize::B16);
pub(crate) const WSS: OperandDesc = od(OperandKind::VecRm, OpSize::Lo4);
pub(crate) const WSD: OperandDesc = od(OperandKind::VecRm, OpSize::Lo8);
pub(crate) const WQ: OperandDesc = od(OperandKind::VecRm, OpSize::Lo8);
pub(crate) const WD: OperandDesc = od(OperandKind::VecRm, OpSize::Lo4);
pub(crate) const WW: OperandDesc = od(OperandKind::VecRm, OpSize::Lo2);
pub(crate) const WB8: OperandDesc = od(OperandKind::VecRm, OpSize::Lo1);
pub(crate) const HDQ: OperandDesc = od(OperandKind::VecVex, OpSize::B16);
pub(crate) const HSS: OperandDesc = od(OperandKind::VecVex, OpSize::Lo4);
pub(crate) const HSD: OperandDesc = od(OperandKind::VecVex, OpSize::Lo8);

// VEX.L-sized (128/256) and EVEX L'L-sized (128/256/512) vectors
pub(crate) const VX: OperandDesc = od(OperandKind::VecReg, OpSize::Vx);
pub(crate) const WX: OperandDesc = od(OperandKind::VecRm, OpSize::Vx);
pub(crate) const HXV: OperandDesc = od(OperandKind::VecVex, OpSize::Vx);
pub(crate) const LX: OperandDesc = od(OperandKind::VecIs4, OpSize::Vx);
pub(crate) const VE: OperandDesc = od(OperandKind::VecReg, OpSize::Vl);
pub(crate) const WE: OperandDesc = od(OperandKind::VecRm, OpSize::Vl);
pub(crate) const HE: OperandDesc = od(OperandKind::VecVex, OpSize::Vl);
/// Half-width r/m for widening conversions.
pub(crate) const WH: OperandDesc = od(OperandKind::VecRm, OpSize::Vh);
/// Quarter-width r/m for widening byte conversions.
pub(crate) const WQT: OperandDesc = od(OperandKind::VecRm, OpSize::Vq);
/// Half-width destination register for narrowing conversions.
pub(crate) const VHR: OperandDesc = od(OperandKind::VecReg, OpSize::Vh);
/// Fixed 32-bit immediate (XOP BEXTR).
pub(crate) const ID: OperandDesc = od(OperandKind::Imm, OpSize::B4);

// Opmask registers
pub(crate) const KB: OperandDesc = od(OperandKind::MaskReg, OpSize::B1);
pub(crate) const KW: OperandDesc = od(OperandKind::MaskReg, OpSize::B2);
pub(crate) const KD: OperandDesc = od(OperandKind::MaskReg, OpSize::B4);
pub(crate) const KQ: OperandDesc = od(OperandKind::MaskReg, OpSize::B8);
pub(crate) const KRB: OperandDesc = od(OperandKind::MaskRm, OpSize::B1);
pub(crate) const KRW: OperandDesc = od(OperandKind::MaskRm, OpSize::B2);
pub(crate) const KRD: OperandDesc = od(OperandKind::MaskRm, OpSize::B4);
pub(crate) const KRQ: OperandDesc = od(OperandKind::MaskRm, OpSize::B8);
pub(crate) const KV: OperandDesc = od(OperandKind::MaskVex, OpSize::B8);
/// EVEX.aaa opmask selector.
pub(crate) const KA: OperandDesc = od(OperandKind::MaskEvex, OpSize::B8);

// Bounds, segment, control, debug registers
pub(crate) const BNDR: OperandDesc = od(OperandKind::BndReg, OpSize::B16);
pub(crate) const BNDM: OperandDesc = od(OperandKind::BndRm, OpSize::B16);
pub(crate) const SW: OperandDesc = od(OperandKind::Sreg, OpSize::B2);
pub(crate) const CR: OperandDesc = od(OperandKind::Creg, OpSize::Vd64);
pub(crate) const DR: OperandDesc = od(OperandKind::Dreg, OpSize::Vd64);

// VSIB memory
pub(crate) const VMX: OperandDesc = od(OperandKind::Vsib, OpSize::Vx);
pub(crate) const VME: OperandDesc = od(OperandKind::Vsib, OpSize::Vl);

// Implicit fixed registers
const fn imp(r: Reg, size: OpSize) -> OperandDesc {
    od(OperandKind::Implicit(r), size)
}
pub(crate) const AL: OperandDesc = imp(Reg::Al, OpSize::B1);
pub(crate) const CL: OperandDesc = imp(Reg::Cl, OpSize::B1);
pub(crate) const DL: OperandDesc = imp(Reg::Dl, OpSize::B1);
pub(crate) const BL: OperandDesc = imp(Reg::Bl, OpSize::B1);
pub(crate) const AH: OperandDesc = imp(Reg::Ah, OpSize::B1);
pub(crate) const CH: OperandDesc = imp(Reg::Ch, OpSize::B1);
pub(crate) const DH: OperandDesc = imp(Reg::Dh, OpSize::B1);
pub(crate) const BH: OperandDesc = imp(Reg::Bh, OpSize::B1);
pub(crate) const AX: OperandDesc = imp(Reg::Ax, OpSize::B2);
pub(crate) const DX: OperandDesc = imp(Reg::Dx, OpSize::B2);
pub(crate) const EAX: OperandDesc = imp(Reg::Eax, OpSize::B4);
pub(crate) const ECX: OperandDesc = imp(Reg::Ecx, OpSize::B4);
pub(crate) const EDX: OperandDesc = imp(Reg::Edx, OpSize::B4);
pub(crate) const EBX: OperandDesc = imp(Reg::Ebx, OpSize::B4);
pub(crate) const SEG_ES: OperandDesc = imp(Reg::Es, OpSize::B2);
pub(crate) const SEG_CS: OperandDesc = imp(Reg::Cs, OpSize::B2);
pub(crate) const SEG_SS: OperandDesc = imp(Reg::Ss, OpSize::B2);
pub(crate) const SEG_DS: OperandDesc = imp(Reg::Ds, OpSize::B2);
pub(crate) const SEG_FS: OperandDesc = imp(Reg::Fs, OpSize::B2);
pub(crate) const SEG_GS: OperandDesc = imp(Reg::Gs, OpSize::B2);
pub(crate) const ST0: OperandDesc = imp(Reg::St0, OpSize::B10);
pub(crate) const ST1: OperandDesc = imp(Reg::St1, OpSize::B10);
pub(crate) const ST2: OperandDesc = imp(Reg::St2, OpSize::B10);
pub(crate) const ST3: OperandDesc = imp(Reg::St3, OpSize::B10);
pub(crate) const ST4: OperandDesc = imp(Reg::St4, OpSize::B10);
pub(crate) const ST5: OperandDesc = imp(Reg::St5, OpSize::B10);
pub(crate) const ST6: OperandDesc = imp(Reg::St6, OpSize::B10);
pub(crate) const ST7: OperandDesc = imp(Reg::St7, OpSize::B10);
pub(crate) const XMM0: OperandDesc = imp(Reg::Xmm0, OpSize::B16);

// Implicit variable-sized registers (number follows the 0..7 encoding order)
const fn impv(n: u8) -> OperandDesc {
    od(OperandKind::ImplicitVar(n), OpSize::V)
}
/// Stack-width implicit register (PUSH/POP forms).
pub(crate) const fn gprs(n: u8) -> OperandDesc {
    od(OperandKind::ImplicitVar(n), OpSize::Vs)
}
/// REX.W-width implicit register (BSWAP).
pub(crate) const fn gpry(n: u8) -> OperandDesc {
    od(OperandKind::ImplicitVar(n), OpSize::Y)
}
pub(crate) const XAX: OperandDesc = impv(0);
pub(crate) const XCX: OperandDesc = impv(1);
pub(crate) const XDX: OperandDesc = impv(2);
pub(crate) const XBX: OperandDesc = impv(3);
pub(crate) const XSP: OperandDesc = impv(4);
pub(crate) const XBP: OperandDesc = impv(5);
pub(crate) const XSI: OperandDesc = impv(6);
pub(crate) const XDI: OperandDesc = impv(7);

// Stack, strings, constants, flags, ports
pub(crate) const STK_PUSH: OperandDesc = od(OperandKind::StackPush, OpSize::Vs);
pub(crate) const STK_POP: OperandDesc = od(OperandKind::StackPop, OpSize::Vs);
/// PUSHA/POPA eight-register stack block.
pub(crate) const STK_PUSHA: OperandDesc = od(OperandKind::StackPush, OpSize::B32);
pub(crate) const STK_POPA: OperandDesc = od(OperandKind::StackPop, OpSize::B32);
pub(crate) const XFL: OperandDesc = od(OperandKind::Flags, OpSize::Vs);
pub(crate) const PORT: OperandDesc = od(OperandKind::Port, OpSize::B2);
pub(crate) const ONE: OperandDesc = od(OperandKind::Const(1), OpSize::B1);
pub(crate) const FPC: OperandDesc = od(OperandKind::FpConst, OpSize::B10);
pub(crate) const XB: OperandDesc = od(OperandKind::StrSrc, OpSize::B1);
pub(crate) const XV: OperandDesc = od(OperandKind::StrSrc, OpSize::V);
pub(crate) const YB: OperandDesc = od(OperandKind::StrDst, OpSize::B1);
pub(crate) const YV: OperandDesc = od(OperandKind::StrDst, OpSize::V);
/// MASKMOVQ / MASKMOVDQU implicit destinations at DS:rDI.
pub(crate) const YQ: OperandDesc = od(OperandKind::StrDst, OpSize::B8);
pub(crate) const YDQ: OperandDesc = od(OperandKind::StrDst, OpSize::B16);
pub(crate) const ZB: OperandDesc = od(OperandKind::Xlat, OpSize::B1);
/// Low dword of an XMM register (MOVD store forms).
pub(crate) const VD4: OperandDesc = od(OperandKind::VecReg, OpSize::Lo4);

// ---------------------------------------------------------------------------
// Operand slot packing
// ---------------------------------------------------------------------------

pub(crate) const fn d0() -> [OperandDesc; 2] {
    [XX, XX]
}
pub(crate) const fn d1(a: OperandDesc) -> [OperandDesc; 2] {
    [a, XX]
}
pub(crate) const fn d2(a: OperandDesc, b: OperandDesc) -> [OperandDesc; 2] {
    [a, b]
}
pub(crate) const fn s0() -> [OperandDesc; 3] {
    [XX, XX, XX]
}
pub(crate) const fn s1(a: OperandDesc) -> [OperandDesc; 3] {
    [a, XX, XX]
}
pub(crate) const fn s2(a: OperandDesc, b: OperandDesc) -> [OperandDesc; 3] {
    [a, b, XX]
}
pub(crate) const fn s3(a: OperandDesc, b: OperandDesc, c: OperandDesc) -> [OperandDesc; 3] {
    [a, b, c]
}

// ---------------------------------------------------------------------------
// Flag-effect shorthands
// ---------------------------------------------------------------------------

const fn fl(reads: Eflags, writes: Eflags) -> EflagsEffect {
    EflagsEffect::new(reads, writes)
}

pub(crate) const FNONE: EflagsEffect = EflagsEffect::NONE;
/// Writes all six arithmetic flags.
pub(crate) const FW6: EflagsEffect = fl(Eflags::empty(), Eflags::ARITH);
/// Writes the five arithmetic flags other than CF (INC, DEC).
pub(crate) const FWNC: EflagsEffect =
    fl(Eflags::empty(), Eflags::ARITH.difference(Eflags::CF));
pub(crate) const FWI: EflagsEffect = fl(Eflags::empty(), Eflags::IF);
/// INTO: conditional on OF, then clears TF and IF.
pub(crate) const FINTO: EflagsEffect = fl(Eflags::OF, Eflags::TF.union(Eflags::IF));
/// Reads CF, writes all six (ADC, SBB).
pub(crate) const FRCW6: EflagsEffect = fl(Eflags::CF, Eflags::ARITH);
/// Reads AF, writes all six (AAA, AAS).
pub(crate) const FRAW6: EflagsEffect = fl(Eflags::AF, Eflags::ARITH);
/// Reads CF and AF, writes all six (DAA, DAS).
pub(crate) const FRCAW6: EflagsEffect = fl(Eflags::CF.union(Eflags::AF), Eflags::ARITH);
/// Reads ZF, writes all six (REPE/REPNE string compares).
pub(crate) const FRZW6: EflagsEffect = fl(Eflags::ZF, Eflags::ARITH);
pub(crate) const FWC: EflagsEffect = fl(Eflags::empty(), Eflags::CF);
pub(crate) const FRWC: EflagsEffect = fl(Eflags::CF, Eflags::CF);
pub(crate) const FRWO: EflagsEffect = fl(Eflags::OF, Eflags::OF);
pub(crate) const FWZ: EflagsEffect = fl(Eflags::empty(), Eflags::ZF);
pub(crate) const FWCO: EflagsEffect = fl(Eflags::empty(), Eflags::CF.union(Eflags::OF));
/// Reads CF, writes CF and OF (RCL, RCR).
pub(crate) const FRCWCO: EflagsEffect = fl(Eflags::CF, Eflags::CF.union(Eflags::OF));
pub(crate) const FWD: EflagsEffect = fl(Eflags::empty(), Eflags::DF);
pub(crate) const FWAC: EflagsEffect = fl(Eflags::empty(), Eflags::AC);
/// Reads DF (plain string operations).
pub(crate) const FRD: EflagsEffect = fl(Eflags::DF, Eflags::empty());
/// Writes CF, ZF, PF (COMIS*, FCOMI forms).
pub(crate) const FWCZP: EflagsEffect =
    fl(Eflags::empty(), Eflags::CF.union(Eflags::ZF).union(Eflags::PF));

const ALLF: Eflags = Eflags::all();
/// POPF / IRET: every modelled flag bit is written.
pub(crate) const FPOPF: EflagsEffect = fl(Eflags::empty(), ALLF);
/// PUSHF: every modelled flag bit is read.
pub(crate) const FPUSHF: EflagsEffect = fl(ALLF, Eflags::empty());
const F5: Eflags = Eflags::CF
    .union(Eflags::PF)
    .union(Eflags::AF)
    .union(Eflags::ZF)
    .union(Eflags::SF);
/// LAHF reads the five low status flags.
pub(crate) const FR5: EflagsEffect = fl(F5, Eflags::empty());
/// SAHF writes the five low status flags.
pub(crate) const FW5: EflagsEffect = fl(Eflags::empty(), F5);
/// INT and relatives clear TF and IF.
pub(crate) const FINT: EflagsEffect = fl(Eflags::empty(), Eflags::TF.union(Eflags::IF));

// Condition-code read sets, in Jcc encoding order.
pub(crate) const FRO: EflagsEffect = fl(Eflags::OF, Eflags::empty());
pub(crate) const FRC: EflagsEffect = fl(Eflags::CF, Eflags::empty());
pub(crate) const FRZ: EflagsEffect = fl(Eflags::ZF, Eflags::empty());
pub(crate) const FRCZ: EflagsEffect = fl(Eflags::CF.union(Eflags::ZF), Eflags::empty());
pub(crate) const FRS: EflagsEffect = fl(Eflags::SF, Eflags::empty());
pub(crate) const FRP: EflagsEffect = fl(Eflags::PF, Eflags::empty());
pub(crate) const FRSO: EflagsEffect = fl(Eflags::SF.union(Eflags::OF), Eflags::empty());
pub(crate) const FRSOZ: EflagsEffect =
    fl(Eflags::SF.union(Eflags::OF).union(Eflags::ZF), Eflags::empty());

// ---------------------------------------------------------------------------
// Attribute shorthands
// ---------------------------------------------------------------------------

pub(crate) const NA: Attrs = Attrs::empty();
pub(crate) const MRM: Attrs = Attrs::HAS_MODRM;
pub(crate) const MRMP: Attrs = MRM.union(Attrs::REQUIRES_PREFIX);
/// Invalid outside 64-bit mode.
pub(crate) const O64: Attrs = Attrs::X86_INVALID;
/// Invalid in 64-bit mode.
pub(crate) const I64: Attrs = Attrs::X64_INVALID;
pub(crate) const MRM_I64: Attrs = MRM.union(I64);
pub(crate) const PREDCC: Attrs = Attrs::PRED_CC;
pub(crate) const PREDCX: Attrs = Attrs::PRED_COMPLEX;
pub(crate) const VEXM: Attrs = Attrs::REQUIRES_VEX.union(MRM);
pub(crate) const VEXMP: Attrs = VEXM.union(Attrs::REQUIRES_PREFIX);
pub(crate) const VEX0: Attrs = Attrs::REQUIRES_VEX;
pub(crate) const EVXM: Attrs = Attrs::REQUIRES_EVEX.union(MRM);
pub(crate) const EVXMP: Attrs = EVXM.union(Attrs::REQUIRES_PREFIX);
pub(crate) const XTRA: Attrs = Attrs::HAS_EXTRAS;

pub(crate) const fn fv(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::Fv)
}
pub(crate) const fn hv(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::Hv)
}
pub(crate) const fn fvm(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::Fvm)
}
pub(crate) const fn t1s(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::T1s)
}
pub(crate) const fn hvm(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::Hvm)
}
pub(crate) const fn qvm(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::Qvm)
}
pub(crate) const fn dup(a: Attrs) -> Attrs {
    a.with_tuple(TupleType::Dup)
}

// ---------------------------------------------------------------------------
// Entry constructors
// ---------------------------------------------------------------------------

/// Terminal template entry.
pub(crate) const fn ent(
    op: Opcode,
    code: u32,
    mn: &'static str,
    cat: Category,
    dsts: [OperandDesc; 2],
    srcs: [OperandDesc; 3],
    attrs: Attrs,
    eflags: EflagsEffect,
    link: EntryRef,
) -> Entry {
    Entry {
        identity: Identity::Op(op),
        code: OpcodeBits::bytes(code),
        category: cat,
        mnemonic: mn,
        dsts,
        srcs,
        attrs,
        eflags,
        link,
    }
}

/// Terminal entry with a mandatory prefix in its opcode bits.
pub(crate) const fn entp(
    op: Opcode,
    mand: Mand,
    code: u32,
    mn: &'static str,
    cat: Category,
    dsts: [OperandDesc; 2],
    srcs: [OperandDesc; 3],
    attrs: Attrs,
    eflags: EflagsEffect,
    link: EntryRef,
) -> Entry {
    let mut e = ent(op, code, mn, cat, dsts, srcs, attrs, eflags, link);
    e.code = OpcodeBits::with_prefix(mand, code);
    e
}

/// Terminal entry reached through a `reg`-indexed group.
pub(crate) const fn entr(
    op: Opcode,
    code: u32,
    reg: u8,
    mn: &'static str,
    cat: Category,
    dsts: [OperandDesc; 2],
    srcs: [OperandDesc; 3],
    attrs: Attrs,
    eflags: EflagsEffect,
    link: EntryRef,
) -> Entry {
    let mut e = ent(op, code, mn, cat, dsts, srcs, attrs, eflags, link);
    e.code = OpcodeBits::bytes(code).with_reg(reg);
    e
}

/// Group entry with a mandatory prefix.
pub(crate) const fn entpr(
    op: Opcode,
    mand: Mand,
    code: u32,
    reg: u8,
    mn: &'static str,
    cat: Category,
    dsts: [OperandDesc; 2],
    srcs: [OperandDesc; 3],
    attrs: Attrs,
    eflags: EflagsEffect,
    link: EntryRef,
) -> Entry {
    let mut e = ent(op, code, mn, cat, dsts, srcs, attrs, eflags, link);
    e.code = OpcodeBits::with_prefix(mand, code).with_reg(reg);
    e
}

/// Dispatch entry: redirect to `family[table][computed index]`.
pub(crate) const fn dis(kind: DispatchKind, table: u8, mn: &'static str) -> Entry {
    Entry {
        identity: Identity::Dispatch(kind),
        code: OpcodeBits::table(table),
        category: Category::UNCATEGORIZED,
        mnemonic: mn,
        dsts: [XX, XX],
        srcs: [XX, XX, XX],
        attrs: NA,
        eflags: FNONE,
        link: END,
    }
}

/// Explicitly undefined encoding.
pub(crate) const fn inv() -> Entry {
    Entry {
        identity: Identity::Invalid,
        code: OpcodeBits::EMPTY,
        category: Category::UNCATEGORIZED,
        mnemonic: "(bad)",
        dsts: [XX, XX],
        srcs: [XX, XX, XX],
        attrs: NA,
        eflags: FNONE,
        link: END,
    }
}

/// Decoding prefix byte.
pub(crate) const fn pfx(effect: PrefixEffect, mn: &'static str) -> Entry {
    Entry {
        identity: Identity::Prefix(effect),
        code: OpcodeBits::EMPTY,
        category: Category::UNCATEGORIZED,
        mnemonic: mn,
        dsts: [XX, XX],
        srcs: [XX, XX, XX],
        attrs: NA,
        eflags: FNONE,
        link: END,
    }
}

/// CONTINUED entry in the extras table.
pub(crate) const fn cont(
    dsts: [OperandDesc; 2],
    srcs: [OperandDesc; 3],
    link: EntryRef,
) -> Entry {
    Entry {
        identity: Identity::Continued,
        code: OpcodeBits::EMPTY,
        category: Category::UNCATEGORIZED,
        mnemonic: "(more operands)",
        dsts,
        srcs,
        attrs: NA,
        eflags: FNONE,
        link,
    }
}

/// Invalid filler for sparse table slots.
pub(crate) const IE: Entry = inv();

// Chain-link shorthands.
pub(crate) const fn ob(byte: u8) -> EntryRef {
    EntryRef::OneByte(byte)
}
pub(crate) const fn tb(byte: u8) -> EntryRef {
    EntryRef::TwoByte(byte)
}
pub(crate) const fn grp(table: u8, reg: u8) -> EntryRef {
    EntryRef::Family(DispatchKind::Extension, table, reg)
}
pub(crate) const fn pe(table: u8, idx: u8) -> EntryRef {
    EntryRef::Family(DispatchKind::PrefixExt, table, idx)
}
pub(crate) const fn extra(index: u16) -> EntryRef {
    EntryRef::Extra(index)
}

// Category shorthands, so table lines stay short.
pub(crate) const INT: Category = Category::INTEGER;
pub(crate) const FPU: Category = Category::FP;
pub(crate) const SSE: Category = Category::SIMD;
pub(crate) const SSEFP: Category = Category::SIMD.union(Category::FP);
pub(crate) const BR: Category = Category::BRANCH;
pub(crate) const LD: Category = Category::LOAD;
pub(crate) const ST: Category = Category::STORE;
pub(crate) const LDST: Category = Category::LOAD.union(Category::STORE);
pub(crate) const SYS: Category = Category::STATE;
pub(crate) const CVT: Category = Category::CONVERT;
pub(crate) const MTH: Category = Category::MATH;
pub(crate) const UNC: Category = Category::UNCATEGORIZED;
