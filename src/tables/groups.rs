//! Base-extension families indexed by ModR/M fields: the classic opcode
//! groups, the mod-selected and r/m-selected sub-families, and the REX.W
//! rows used by the save/restore instructions.

use super::defs::*;
use super::extras::{XT_CMPXCHG8B, XT_CPUID};
use super::prefix_ext::Pe;
use super::vex::Evr;
use crate::schema::flags::Attrs;
use crate::schema::opcode::Opcode::*;
use crate::template::DispatchKind::*;
use crate::template::{Entry, EntryRef};

/// Group tables, indexed by ModR/M.reg.
#[repr(u8)]
pub(crate) enum Grp {
    G1b,
    G1v,
    G1b82,
    G1vIb,
    G1a,
    G2b,
    G2v,
    G2b1,
    G2v1,
    G2bCl,
    G2vCl,
    G3b,
    G3v,
    G4,
    G5,
    G6,
    G7,
    G8,
    G9,
    G10,
    G11b,
    G11v,
    G12,
    G13,
    G14,
    G15,
    G16,
    GP,
    G17,
    Tbm1,
    Tbm2,
    Gpf6,
}

/// Mod-extension rows: index 0 for memory forms, 1 for register forms.
#[repr(u8)]
pub(crate) enum Mx {
    G7r0,
    G7r1,
    G7r2,
    G7r3,
    G7r7,
    G9r1,
    G9r6,
    G9r7,
    G15r0,
    G15r1,
    G15r2,
    G15r3,
    G15r4,
    G15r5,
    G15r6,
    G15r7,
    Movlps12,
    Vmovlps12,
    Movhps16,
    Vmovhps16,
}

/// R/M-extension rows, consulted when ModR/M.mod = 3.
#[repr(u8)]
pub(crate) enum Rx {
    G7r0m3,
    G7r1m3,
    G7r2m3,
    G7r7m3,
}

/// REX.W rows: index 0 without REX.W, 1 with it.
#[repr(u8)]
pub(crate) enum Wx {
    Fxsave,
    Fxrstor,
    Cmpxchg8b,
    Xsave,
    Xrstor,
    Xsaveopt,
}

pub(crate) static GROUPS: [[Entry; 8]; 32] = [
    // group 1, 0x80: Eb, Ib
    [
        entr(Add, 0x80, 0, "add", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G1vIb as u8, 0)),
        entr(Or, 0x80, 1, "or", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G1vIb as u8, 1)),
        entr(Adc, 0x80, 2, "adc", INT, d1(EB), s2(IB, EB), MRM, FRCW6, grp(Grp::G1vIb as u8, 2)),
        entr(Sbb, 0x80, 3, "sbb", INT, d1(EB), s2(IB, EB), MRM, FRCW6, grp(Grp::G1vIb as u8, 3)),
        entr(And, 0x80, 4, "and", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G1vIb as u8, 4)),
        entr(Sub, 0x80, 5, "sub", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G1vIb as u8, 5)),
        entr(Xor, 0x80, 6, "xor", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G1vIb as u8, 6)),
        entr(Cmp, 0x80, 7, "cmp", INT, d0(), s2(EB, IB), MRM, FW6, grp(Grp::G1vIb as u8, 7)),
    ],
    // group 1, 0x81: Ev, Iz
    [
        entr(Add, 0x81, 0, "add", INT, d1(EV), s2(IZ, EV), MRM, FW6, grp(Grp::G1b as u8, 0)),
        entr(Or, 0x81, 1, "or", INT, d1(EV), s2(IZ, EV), MRM, FW6, grp(Grp::G1b as u8, 1)),
        entr(Adc, 0x81, 2, "adc", INT, d1(EV), s2(IZ, EV), MRM, FRCW6, grp(Grp::G1b as u8, 2)),
        entr(Sbb, 0x81, 3, "sbb", INT, d1(EV), s2(IZ, EV), MRM, FRCW6, grp(Grp::G1b as u8, 3)),
        entr(And, 0x81, 4, "and", INT, d1(EV), s2(IZ, EV), MRM, FW6, grp(Grp::G1b as u8, 4)),
        entr(Sub, 0x81, 5, "sub", INT, d1(EV), s2(IZ, EV), MRM, FW6, grp(Grp::G1b as u8, 5)),
        entr(Xor, 0x81, 6, "xor", INT, d1(EV), s2(IZ, EV), MRM, FW6, grp(Grp::G1b as u8, 6)),
        entr(Cmp, 0x81, 7, "cmp", INT, d0(), s2(EV, IZ), MRM, FW6, grp(Grp::G1b as u8, 7)),
    ],
    // group 1, 0x82: 32-bit-only alias of 0x80; decodes, never re-encodes
    [
        entr(Add, 0x82, 0, "add", INT, d1(EB), s2(IB, EB), MRM_I64, FW6, END),
        entr(Or, 0x82, 1, "or", INT, d1(EB), s2(IB, EB), MRM_I64, FW6, END),
        entr(Adc, 0x82, 2, "adc", INT, d1(EB), s2(IB, EB), MRM_I64, FRCW6, END),
        entr(Sbb, 0x82, 3, "sbb", INT, d1(EB), s2(IB, EB), MRM_I64, FRCW6, END),
        entr(And, 0x82, 4, "and", INT, d1(EB), s2(IB, EB), MRM_I64, FW6, END),
        entr(Sub, 0x82, 5, "sub", INT, d1(EB), s2(IB, EB), MRM_I64, FW6, END),
        entr(Xor, 0x82, 6, "xor", INT, d1(EB), s2(IB, EB), MRM_I64, FW6, END),
        entr(Cmp, 0x82, 7, "cmp", INT, d0(), s2(EB, IB), MRM_I64, FW6, END),
    ],
    // group 1, 0x83: Ev, Ib sign-extended
    [
        entr(Add, 0x83, 0, "add", INT, d1(EV), s2(IB, EV), MRM, FW6, END),
        entr(Or, 0x83, 1, "or", INT, d1(EV), s2(IB, EV), MRM, FW6, END),
        entr(Adc, 0x83, 2, "adc", INT, d1(EV), s2(IB, EV), MRM, FRCW6, END),
        entr(Sbb, 0x83, 3, "sbb", INT, d1(EV), s2(IB, EV), MRM, FRCW6, END),
        entr(And, 0x83, 4, "and", INT, d1(EV), s2(IB, EV), MRM, FW6, END),
        entr(Sub, 0x83, 5, "sub", INT, d1(EV), s2(IB, EV), MRM, FW6, END),
        entr(Xor, 0x83, 6, "xor", INT, d1(EV), s2(IB, EV), MRM, FW6, END),
        entr(Cmp, 0x83, 7, "cmp", INT, d0(), s2(EV, IB), MRM, FW6, END),
    ],
    // group 1a, 0x8F
    [
        entr(Pop, 0x8f, 0, "pop", INT, d2(EVS, XSP), s2(XSP, STK_POP), MRM, FNONE, ob(0x07)),
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
    ],
    // group 2, 0xC0: Eb, Ib
    [
        entr(Rol, 0xc0, 0, "rol", INT, d1(EB), s2(IB, EB), MRM, FWCO, grp(Grp::G2v1 as u8, 0)),
        entr(Ror, 0xc0, 1, "ror", INT, d1(EB), s2(IB, EB), MRM, FWCO, grp(Grp::G2v1 as u8, 1)),
        entr(Rcl, 0xc0, 2, "rcl", INT, d1(EB), s2(IB, EB), MRM, FRCWCO, grp(Grp::G2v1 as u8, 2)),
        entr(Rcr, 0xc0, 3, "rcr", INT, d1(EB), s2(IB, EB), MRM, FRCWCO, grp(Grp::G2v1 as u8, 3)),
        entr(Shl, 0xc0, 4, "shl", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G2v1 as u8, 4)),
        entr(Shr, 0xc0, 5, "shr", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G2v1 as u8, 5)),
        entr(Shl, 0xc0, 6, "shl", INT, d1(EB), s2(IB, EB), MRM, FW6, END),
        entr(Sar, 0xc0, 7, "sar", INT, d1(EB), s2(IB, EB), MRM, FW6, grp(Grp::G2v1 as u8, 7)),
    ],
    // group 2, 0xC1: Ev, Ib
    [
        entr(Rol, 0xc1, 0, "rol", INT, d1(EV), s2(IB, EV), MRM, FWCO, grp(Grp::G2b as u8, 0)),
        entr(Ror, 0xc1, 1, "ror", INT, d1(EV), s2(IB, EV), MRM, FWCO, grp(Grp::G2b as u8, 1)),
        entr(Rcl, 0xc1, 2, "rcl", INT, d1(EV), s2(IB, EV), MRM, FRCWCO, grp(Grp::G2b as u8, 2)),
        entr(Rcr, 0xc1, 3, "rcr", INT, d1(EV), s2(IB, EV), MRM, FRCWCO, grp(Grp::G2b as u8, 3)),
        entr(Shl, 0xc1, 4, "shl", INT, d1(EV), s2(IB, EV), MRM, FW6, grp(Grp::G2b as u8, 4)),
        entr(Shr, 0xc1, 5, "shr", INT, d1(EV), s2(IB, EV), MRM, FW6, grp(Grp::G2b as u8, 5)),
        entr(Shl, 0xc1, 6, "shl", INT, d1(EV), s2(IB, EV), MRM, FW6, END),
        entr(Sar, 0xc1, 7, "sar", INT, d1(EV), s2(IB, EV), MRM, FW6, grp(Grp::G2b as u8, 7)),
    ],
    // group 2, 0xD0: Eb, 1
    [
        entr(Rol, 0xd0, 0, "rol", INT, d1(EB), s2(ONE, EB), MRM, FWCO, grp(Grp::G2vCl as u8, 0)),
        entr(Ror, 0xd0, 1, "ror", INT, d1(EB), s2(ONE, EB), MRM, FWCO, grp(Grp::G2vCl as u8, 1)),
        entr(Rcl, 0xd0, 2, "rcl", INT, d1(EB), s2(ONE, EB), MRM, FRCWCO, grp(Grp::G2vCl as u8, 2)),
        entr(Rcr, 0xd0, 3, "rcr", INT, d1(EB), s2(ONE, EB), MRM, FRCWCO, grp(Grp::G2vCl as u8, 3)),
        entr(Shl, 0xd0, 4, "shl", INT, d1(EB), s2(ONE, EB), MRM, FW6, grp(Grp::G2vCl as u8, 4)),
        entr(Shr, 0xd0, 5, "shr", INT, d1(EB), s2(ONE, EB), MRM, FW6, grp(Grp::G2vCl as u8, 5)),
        entr(Shl, 0xd0, 6, "shl", INT, d1(EB), s2(ONE, EB), MRM, FW6, END),
        entr(Sar, 0xd0, 7, "sar", INT, d1(EB), s2(ONE, EB), MRM, FW6, grp(Grp::G2vCl as u8, 7)),
    ],
    // group 2, 0xD1: Ev, 1
    [
        entr(Rol, 0xd1, 0, "rol", INT, d1(EV), s2(ONE, EV), MRM, FWCO, grp(Grp::G2b1 as u8, 0)),
        entr(Ror, 0xd1, 1, "ror", INT, d1(EV), s2(ONE, EV), MRM, FWCO, grp(Grp::G2b1 as u8, 1)),
        entr(Rcl, 0xd1, 2, "rcl", INT, d1(EV), s2(ONE, EV), MRM, FRCWCO, grp(Grp::G2b1 as u8, 2)),
        entr(Rcr, 0xd1, 3, "rcr", INT, d1(EV), s2(ONE, EV), MRM, FRCWCO, grp(Grp::G2b1 as u8, 3)),
        entr(Shl, 0xd1, 4, "shl", INT, d1(EV), s2(ONE, EV), MRM, FW6, grp(Grp::G2b1 as u8, 4)),
        entr(Shr, 0xd1, 5, "shr", INT, d1(EV), s2(ONE, EV), MRM, FW6, grp(Grp::G2b1 as u8, 5)),
        entr(Shl, 0xd1, 6, "shl", INT, d1(EV), s2(ONE, EV), MRM, FW6, END),
        entr(Sar, 0xd1, 7, "sar", INT, d1(EV), s2(ONE, EV), MRM, FW6, grp(Grp::G2b1 as u8, 7)),
    ],
    // group 2, 0xD2: Eb, CL
    [
        entr(Rol, 0xd2, 0, "rol", INT, d1(EB), s2(CL, EB), MRM, FWCO, END),
        entr(Ror, 0xd2, 1, "ror", INT, d1(EB), s2(CL, EB), MRM, FWCO, END),
        entr(Rcl, 0xd2, 2, "rcl", INT, d1(EB), s2(CL, EB), MRM, FRCWCO, END),
        entr(Rcr, 0xd2, 3, "rcr", INT, d1(EB), s2(CL, EB), MRM, FRCWCO, END),
        entr(Shl, 0xd2, 4, "shl", INT, d1(EB), s2(CL, EB), MRM, FW6, END),
        entr(Shr, 0xd2, 5, "shr", INT, d1(EB), s2(CL, EB), MRM, FW6, END),
        entr(Shl, 0xd2, 6, "shl", INT, d1(EB), s2(CL, EB), MRM, FW6, END),
        entr(Sar, 0xd2, 7, "sar", INT, d1(EB), s2(CL, EB), MRM, FW6, END),
    ],
    // group 2, 0xD3: Ev, CL
    [
        entr(Rol, 0xd3, 0, "rol", INT, d1(EV), s2(CL, EV), MRM, FWCO, grp(Grp::G2bCl as u8, 0)),
        entr(Ror, 0xd3, 1, "ror", INT, d1(EV), s2(CL, EV), MRM, FWCO, grp(Grp::G2bCl as u8, 1)),
        entr(Rcl, 0xd3, 2, "rcl", INT, d1(EV), s2(CL, EV), MRM, FRCWCO, grp(Grp::G2bCl as u8, 2)),
        entr(Rcr, 0xd3, 3, "rcr", INT, d1(EV), s2(CL, EV), MRM, FRCWCO, grp(Grp::G2bCl as u8, 3)),
        entr(Shl, 0xd3, 4, "shl", INT, d1(EV), s2(CL, EV), MRM, FW6, grp(Grp::G2bCl as u8, 4)),
        entr(Shr, 0xd3, 5, "shr", INT, d1(EV), s2(CL, EV), MRM, FW6, grp(Grp::G2bCl as u8, 5)),
        entr(Shl, 0xd3, 6, "shl", INT, d1(EV), s2(CL, EV), MRM, FW6, END),
        entr(Sar, 0xd3, 7, "sar", INT, d1(EV), s2(CL, EV), MRM, FW6, grp(Grp::G2bCl as u8, 7)),
    ],
    // group 3, 0xF6: Eb
    [
        entr(Test, 0xf6, 0, "test", INT, d0(), s2(EB, IB), MRM, FW6, END),
        entr(Test, 0xf6, 1, "test", INT, d0(), s2(EB, IB), MRM, FW6, END),
        entr(Not, 0xf6, 2, "not", INT, d1(EB), s1(EB), MRM, FNONE, END),
        entr(Neg, 0xf6, 3, "neg", INT, d1(EB), s1(EB), MRM, FW6, END),
        entr(Mul, 0xf6, 4, "mul", INT.union(MTH), d1(AX), s2(EB, AL), MRM, FW6, END),
        entr(Imul, 0xf6, 5, "imul", INT.union(MTH), d1(AX), s2(EB, AL), MRM, FW6, END),
        entr(Div, 0xf6, 6, "div", INT.union(MTH), d2(AL, AH), s2(EB, AX), MRM, FW6, END),
        entr(Idiv, 0xf6, 7, "idiv", INT.union(MTH), d2(AL, AH), s2(EB, AX), MRM, FW6, END),
    ],
    // group 3, 0xF7: Ev
    [
        entr(Test, 0xf7, 0, "test", INT, d0(), s2(EV, IZ), MRM, FW6, grp(Grp::G3b as u8, 0)),
        entr(Test, 0xf7, 1, "test", INT, d0(), s2(EV, IZ), MRM, FW6, END),
        entr(Not, 0xf7, 2, "not", INT, d1(EV), s1(EV), MRM, FNONE, grp(Grp::G3b as u8, 2)),
        entr(Neg, 0xf7, 3, "neg", INT, d1(EV), s1(EV), MRM, FW6, grp(Grp::G3b as u8, 3)),
        entr(Mul, 0xf7, 4, "mul", INT.union(MTH), d2(XAX, XDX), s2(EV, XAX), MRM, FW6, grp(Grp::G3b as u8, 4)),
        entr(Imul, 0xf7, 5, "imul", INT.union(MTH), d2(XAX, XDX), s2(EV, XAX), MRM, FW6, grp(Grp::G3b as u8, 5)),
        entr(Div, 0xf7, 6, "div", INT.union(MTH), d2(XAX, XDX), s3(EV, XDX, XAX), MRM, FW6, grp(Grp::G3b as u8, 6)),
        entr(Idiv, 0xf7, 7, "idiv", INT.union(MTH), d2(XAX, XDX), s3(EV, XDX, XAX), MRM, FW6, grp(Grp::G3b as u8, 7)),
    ],
    // group 4, 0xFE
    [
        entr(Inc, 0xfe, 0, "inc", INT, d1(EB), s1(EB), MRM, FWNC, EntryRef::Family(X64Ext, 0, 0)),
        entr(Dec, 0xfe, 1, "dec", INT, d1(EB), s1(EB), MRM, FWNC, EntryRef::Family(X64Ext, 8, 0)),
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
    ],
    // group 5, 0xFF
    [
        entr(Inc, 0xff, 0, "inc", INT, d1(EV), s1(EV), MRM, FWNC, grp(Grp::G4 as u8, 0)),
        entr(Dec, 0xff, 1, "dec", INT, d1(EV), s1(EV), MRM, FWNC, grp(Grp::G4 as u8, 1)),
        entr(Call, 0xff, 2, "call", BR, d2(XSP, STK_PUSH), s2(EVD, XSP), MRM, FNONE, END),
        entr(CallFar, 0xff, 3, "lcall", BR, d2(XSP, STK_PUSH), s2(MP, XSP), MRM, FNONE, END),
        entr(Jmp, 0xff, 4, "jmp", BR, d0(), s1(EVD), MRM, FNONE, END),
        entr(JmpFar, 0xff, 5, "ljmp", BR, d0(), s1(MP), MRM, FNONE, END),
        entr(Push, 0xff, 6, "push", INT, d2(XSP, STK_PUSH), s2(EVS, XSP), MRM, FNONE, ob(0x68)),
        IE,
    ],
    // group 6, 0F 00
    [
        entr(Sldt, 0x0f00, 0, "sldt", SYS, d1(EV), s0(), MRM, FNONE, END),
        entr(Str, 0x0f00, 1, "str", SYS, d1(EV), s0(), MRM, FNONE, END),
        entr(Lldt, 0x0f00, 2, "lldt", SYS, d0(), s1(EW), MRM, FNONE, END),
        entr(Ltr, 0x0f00, 3, "ltr", SYS, d0(), s1(EW), MRM, FNONE, END),
        entr(Verr, 0x0f00, 4, "verr", SYS, d0(), s1(EW), MRM, FWZ, END),
        entr(Verw, 0x0f00, 5, "verw", SYS, d0(), s1(EW), MRM, FWZ, END),
        IE,
        IE,
    ],
    // group 7, 0F 01
    [
        dis(ModExt, Mx::G7r0 as u8, "(grp 7 /0)"),
        dis(ModExt, Mx::G7r1 as u8, "(grp 7 /1)"),
        dis(ModExt, Mx::G7r2 as u8, "(grp 7 /2)"),
        dis(ModExt, Mx::G7r3 as u8, "(grp 7 /3)"),
        entr(Smsw, 0x0f01, 4, "smsw", SYS, d1(EV), s0(), MRM, FNONE, END),
        IE,
        entr(Lmsw, 0x0f01, 6, "lmsw", SYS, d0(), s1(EW), MRM, FNONE, END),
        dis(ModExt, Mx::G7r7 as u8, "(grp 7 /7)"),
    ],
    // group 8, 0F BA
    [
        IE,
        IE,
        IE,
        IE,
        entr(Bt, 0x0fba, 4, "bt", INT, d0(), s2(EV, IB), MRM, FWC, END),
        entr(Bts, 0x0fba, 5, "bts", INT, d1(EV), s2(IB, EV), MRM, FWC, END),
        entr(Btr, 0x0fba, 6, "btr", INT, d1(EV), s2(IB, EV), MRM, FWC, END),
        entr(Btc, 0x0fba, 7, "btc", INT, d1(EV), s2(IB, EV), MRM, FWC, END),
    ],
    // group 9, 0F C7
    [
        IE,
        dis(ModExt, Mx::G9r1 as u8, "(grp 9 /1)"),
        IE,
        IE,
        IE,
        IE,
        dis(ModExt, Mx::G9r6 as u8, "(grp 9 /6)"),
        dis(ModExt, Mx::G9r7 as u8, "(grp 9 /7)"),
    ],
    // group 10, 0F B9: UD1 for every reg value
    [
        entr(Ud1, 0x0fb9, 0, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 1, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 2, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 3, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 4, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 5, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 6, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
        entr(Ud1, 0x0fb9, 7, "ud1", INT, d0(), s2(GV, EV), MRM, FNONE, END),
    ],
    // group 11, 0xC6
    [
        entr(Mov, 0xc6, 0, "mov", INT.union(ST), d1(EB), s1(IB), MRM, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
    ],
    // group 11, 0xC7
    [
        entr(Mov, 0xc7, 0, "mov", INT.union(ST), d1(EV), s1(IZ), MRM, FNONE, grp(Grp::G11b as u8, 0)),
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
    ],
    // group 12, 0F 71
    [
        IE,
        IE,
        dis(PrefixExt, Pe::Psrlw71 as u8, "(psrlw imm)"),
        IE,
        dis(PrefixExt, Pe::Psraw71 as u8, "(psraw imm)"),
        IE,
        dis(PrefixExt, Pe::Psllw71 as u8, "(psllw imm)"),
        IE,
    ],
    // group 13, 0F 72
    [
        IE,
        IE,
        dis(PrefixExt, Pe::Psrld72 as u8, "(psrld imm)"),
        IE,
        dis(PrefixExt, Pe::Psrad72 as u8, "(psrad imm)"),
        IE,
        dis(PrefixExt, Pe::Pslld72 as u8, "(pslld imm)"),
        IE,
    ],
    // group 14, 0F 73
    [
        IE,
        IE,
        dis(PrefixExt, Pe::Psrlq73 as u8, "(psrlq imm)"),
        IE,
        IE,
        IE,
        dis(PrefixExt, Pe::Psllq73 as u8, "(psllq imm)"),
        IE,
    ],
    // group 15, 0F AE
    [
        dis(ModExt, Mx::G15r0 as u8, "(fxsave)"),
        dis(ModExt, Mx::G15r1 as u8, "(fxrstor)"),
        dis(ModExt, Mx::G15r2 as u8, "(ldmxcsr)"),
        dis(ModExt, Mx::G15r3 as u8, "(stmxcsr)"),
        dis(ModExt, Mx::G15r4 as u8, "(xsave)"),
        dis(ModExt, Mx::G15r5 as u8, "(xrstor/lfence)"),
        dis(ModExt, Mx::G15r6 as u8, "(xsaveopt/mfence)"),
        dis(ModExt, Mx::G15r7 as u8, "(clflush/sfence)"),
    ],
    // group 16, 0F 18: prefetch hints; reserved forms decode as nop
    [
        entr(Prefetchnta, 0x0f18, 0, "prefetchnta", LD, d0(), s1(MB), MRM, FNONE, END),
        entr(Prefetcht0, 0x0f18, 1, "prefetcht0", LD, d0(), s1(MB), MRM, FNONE, END),
        entr(Prefetcht1, 0x0f18, 2, "prefetcht1", LD, d0(), s1(MB), MRM, FNONE, END),
        entr(Prefetcht2, 0x0f18, 3, "prefetcht2", LD, d0(), s1(MB), MRM, FNONE, END),
        entr(Nop, 0x0f18, 4, "nop", UNC, d0(), s0(), MRM, FNONE, END),
        entr(Nop, 0x0f18, 5, "nop", UNC, d0(), s0(), MRM, FNONE, END),
        entr(Nop, 0x0f18, 6, "nop", UNC, d0(), s0(), MRM, FNONE, END),
        entr(Nop, 0x0f18, 7, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    ],
    // group P, 0F 0D: AMD prefetch
    [
        entr(Prefetch, 0x0f0d, 0, "prefetch", LD, d0(), s1(MB), MRM, FNONE, END),
        entr(Prefetchw, 0x0f0d, 1, "prefetchw", LD, d0(), s1(MB), MRM, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
    ],
    // group 17, VEX 0F 38 F3: BMI1
    [
        IE,
        entr(Blsr, 0x0f38f3, 1, "blsr", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Blsmsk, 0x0f38f3, 2, "blsmsk", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Blsi, 0x0f38f3, 3, "blsi", INT, d1(BY), s1(EY), VEXM, FW6, END),
        IE,
        IE,
        IE,
        IE,
    ],
    // XOP map 9, 0x01: TBM
    [
        IE,
        entr(Blcfill, 0x8f0901, 1, "blcfill", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Blsfill, 0x8f0901, 2, "blsfill", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Blcs, 0x8f0901, 3, "blcs", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Tzmsk, 0x8f0901, 4, "tzmsk", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Blcic, 0x8f0901, 5, "blcic", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(Blsic, 0x8f0901, 6, "blsic", INT, d1(BY), s1(EY), VEXM, FW6, END),
        entr(T1mskc, 0x8f0901, 7, "t1mskc", INT, d1(BY), s1(EY), VEXM, FW6, END),
    ],
    // XOP map 9, 0x02: TBM
    [
        IE,
        entr(Blcmsk, 0x8f0902, 1, "blcmsk", INT, d1(BY), s1(EY), VEXM, FW6, END),
        IE,
        IE,
        IE,
        IE,
        entr(Blci, 0x8f0902, 6, "blci", INT, d1(BY), s1(EY), VEXM, FW6, END),
        IE,
    ],
    // EVEX 0F 38 C6: AVX-512PF gather/scatter prefetch (dps forms)
    [
        IE,
        entpr(Vgatherpf0dps, crate::template::Mand::P66, 0x0f38c6, 1, "vgatherpf0dps", SSE.union(LD), d0(), s2(VME, KA), t1s(EVXMP.union(Attrs::NOT_K0).union(Attrs::VSIB_ZMM)), FNONE, END),
        entpr(Vgatherpf1dps, crate::template::Mand::P66, 0x0f38c6, 2, "vgatherpf1dps", SSE.union(LD), d0(), s2(VME, KA), t1s(EVXMP.union(Attrs::NOT_K0).union(Attrs::VSIB_ZMM)), FNONE, END),
        IE,
        IE,
        entpr(Vscatterpf0dps, crate::template::Mand::P66, 0x0f38c6, 5, "vscatterpf0dps", SSE.union(ST), d0(), s2(VME, KA), t1s(EVXMP.union(Attrs::NOT_K0).union(Attrs::VSIB_ZMM)), FNONE, END),
        entpr(Vscatterpf1dps, crate::template::Mand::P66, 0x0f38c6, 6, "vscatterpf1dps", SSE.union(ST), d0(), s2(VME, KA), t1s(EVXMP.union(Attrs::NOT_K0).union(Attrs::VSIB_ZMM)), FNONE, END),
        IE,
    ],
];

pub(crate) static MOD_EXT: [[Entry; 2]; 20] = [
    // grp 7 /0: sgdt / VM instructions
    [
        entr(Sgdt, 0x0f01, 0, "sgdt", SYS, d1(MP), s0(), MRM, FNONE, END),
        dis(RmExt, Rx::G7r0m3 as u8, "(grp 7 /0 reg)"),
    ],
    // grp 7 /1: sidt / monitor group
    [
        entr(Sidt, 0x0f01, 1, "sidt", SYS, d1(MP), s0(), MRM, FNONE, END),
        dis(RmExt, Rx::G7r1m3 as u8, "(grp 7 /1 reg)"),
    ],
    // grp 7 /2: lgdt / xgetbv group
    [
        entr(Lgdt, 0x0f01, 2, "lgdt", SYS, d0(), s1(MP), MRM, FNONE, END),
        dis(RmExt, Rx::G7r2m3 as u8, "(grp 7 /2 reg)"),
    ],
    // grp 7 /3: lidt only
    [
        entr(Lidt, 0x0f01, 3, "lidt", SYS, d0(), s1(MP), MRM, FNONE, END),
        IE,
    ],
    // grp 7 /7: invlpg / swapgs group
    [
        entr(Invlpg, 0x0f01, 7, "invlpg", SYS, d0(), s1(MB), MRM, FNONE, END),
        dis(RmExt, Rx::G7r7m3 as u8, "(grp 7 /7 reg)"),
    ],
    // grp 9 /1: cmpxchg8b (memory only)
    [dis(RexWExt, Wx::Cmpxchg8b as u8, "(cmpxchg8b)"), IE],
    // grp 9 /6: vmptrld group / rdrand
    [
        dis(PrefixExt, Pe::Vmptrld as u8, "(vmptrld)"),
        entr(Rdrand, 0x0fc7, 6, "rdrand", INT, d1(RV), s0(), MRM, FW6, END),
    ],
    // grp 9 /7: vmptrst / rdseed
    [
        entr(Vmptrst, 0x0fc7, 7, "vmptrst", SYS, d1(MQ), s0(), MRM, FNONE, END),
        entr(Rdseed, 0x0fc7, 7, "rdseed", INT, d1(RV), s0(), MRM, FW6, END),
    ],
    // grp 15 /0../7
    [dis(RexWExt, Wx::Fxsave as u8, "(fxsave)"), IE],
    [dis(RexWExt, Wx::Fxrstor as u8, "(fxrstor)"), IE],
    [dis(EVexExt, Evr::Ldmxcsr as u8, "(ldmxcsr)"), IE],
    [dis(EVexExt, Evr::Stmxcsr as u8, "(stmxcsr)"), IE],
    [dis(RexWExt, Wx::Xsave as u8, "(xsave)"), IE],
    [
        dis(RexWExt, Wx::Xrstor as u8, "(xrstor)"),
        entr(Lfence, 0x0fae, 5, "lfence", SYS, d0(), s0(), MRM, FNONE, END),
    ],
    [
        dis(RexWExt, Wx::Xsaveopt as u8, "(xsaveopt)"),
        entr(Mfence, 0x0fae, 6, "mfence", SYS, d0(), s0(), MRM, FNONE, END),
    ],
    [
        entr(Clflush, 0x0fae, 7, "clflush", SYS.union(ST), d0(), s1(MB), MRM, FNONE, END),
        entr(Sfence, 0x0fae, 7, "sfence", SYS, d0(), s0(), MRM, FNONE, END),
    ],
    // 0F 12: movlps (memory) / movhlps (register)
    [
        ent(Movlps, 0x0f12, "movlps", SSEFP.union(LD), d1(VQ), s1(MQ), MRM, FNONE, pe(Pe::Movlps13 as u8, 0)),
        ent(Movhlps, 0x0f12, "movhlps", SSEFP, d1(VQ), s1(WQ), MRM, FNONE, END),
    ],
    [
        ent(Vmovlps, 0x0f12, "vmovlps", SSEFP.union(LD), d1(VDQ), s2(HDQ, MQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        ent(Vmovhlps, 0x0f12, "vmovhlps", SSEFP, d1(VDQ), s2(HDQ, WQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
    ],
    // 0F 16: movhps (memory) / movlhps (register)
    [
        ent(Movhps, 0x0f16, "movhps", SSEFP.union(LD), d1(VQ), s1(MQ), MRM, FNONE, pe(Pe::Movhps17 as u8, 0)),
        ent(Movlhps, 0x0f16, "movlhps", SSEFP, d1(VQ), s1(WQ), MRM, FNONE, END),
    ],
    [
        ent(Vmovhps, 0x0f16, "vmovhps", SSEFP.union(LD), d1(VDQ), s2(HDQ, MQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        ent(Vmovlhps, 0x0f16, "vmovlhps", SSEFP, d1(VDQ), s2(HDQ, WQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
    ],
];

pub(crate) static RM_EXT: [[Entry; 8]; 4] = [
    // 0F 01 /0, mod 3
    [
        IE,
        entr(Vmcall, 0x0f01, 0, "vmcall", SYS, d0(), s0(), MRM, FNONE, END),
        entr(Vmlaunch, 0x0f01, 0, "vmlaunch", SYS, d0(), s0(), MRM, FNONE, END),
        entr(Vmresume, 0x0f01, 0, "vmresume", SYS, d0(), s0(), MRM, FNONE, END),
        entr(Vmxoff, 0x0f01, 0, "vmxoff", SYS, d0(), s0(), MRM, FNONE, END),
        IE,
        IE,
        IE,
    ],
    // 0F 01 /1, mod 3
    [
        entr(Monitor, 0x0f01, 1, "monitor", SYS, d0(), s3(XAX, ECX, EDX), MRM, FNONE, END),
        entr(Mwait, 0x0f01, 1, "mwait", SYS, d0(), s2(EAX, ECX), MRM, FNONE, END),
        entr(Clac, 0x0f01, 1, "clac", SYS, d0(), s0(), MRM, FWAC, END),
        entr(Stac, 0x0f01, 1, "stac", SYS, d0(), s0(), MRM, FWAC, END),
        IE,
        IE,
        IE,
        IE,
    ],
    // 0F 01 /2, mod 3
    [
        entr(Xgetbv, 0x0f01, 2, "xgetbv", SYS, d2(EAX, EDX), s1(ECX), MRM, FNONE, END),
        entr(Xsetbv, 0x0f01, 2, "xsetbv", SYS, d0(), s3(ECX, EDX, EAX), MRM, FNONE, END),
        IE,
        IE,
        entr(Vmfunc, 0x0f01, 2, "vmfunc", SYS, d0(), s1(EAX), MRM, FNONE, END),
        entr(Xend, 0x0f01, 2, "xend", SYS, d0(), s0(), MRM, FNONE, END),
        entr(Xtest, 0x0f01, 2, "xtest", SYS, d0(), s0(), MRM, FW6, END),
        IE,
    ],
    // 0F 01 /7, mod 3
    [
        entr(Swapgs, 0x0f01, 7, "swapgs", SYS, d0(), s0(), MRM.union(O64), FNONE, END),
        entr(Rdtscp, 0x0f01, 7, "rdtscp", SYS, d1(EAX), s0(), MRM.union(XTRA), FNONE, extra(XT_CPUID)),
        IE,
        IE,
        IE,
        IE,
        IE,
        IE,
    ],
];

pub(crate) static REX_W_EXT: [[Entry; 2]; 6] = [
    [
        entr(Fxsave, 0x0fae, 0, "fxsave", SYS.union(ST), d1(MFX), s0(), MRM, FNONE, END),
        entr(Fxsave64, 0x0fae, 0, "fxsave64", SYS.union(ST), d1(MFX), s0(), MRM.union(Attrs::REQUIRES_REX), FNONE, END),
    ],
    [
        entr(Fxrstor, 0x0fae, 1, "fxrstor", SYS.union(LD), d0(), s1(MFX), MRM, FNONE, END),
        entr(Fxrstor64, 0x0fae, 1, "fxrstor64", SYS.union(LD), d0(), s1(MFX), MRM.union(Attrs::REQUIRES_REX), FNONE, END),
    ],
    [
        entr(Cmpxchg8b, 0x0fc7, 1, "cmpxchg8b", INT, d2(MQ, XAX), s3(MQ, XAX, XDX), MRM.union(XTRA), FWZ, extra(XT_CMPXCHG8B)),
        entr(Cmpxchg16b, 0x0fc7, 1, "cmpxchg16b", INT, d2(MDQ, XAX), s3(MDQ, XAX, XDX), MRM.union(XTRA).union(Attrs::REQUIRES_REX), FWZ, extra(XT_CMPXCHG8B)),
    ],
    [
        entr(Xsave, 0x0fae, 4, "xsave", SYS.union(ST), d1(MXS), s2(EDX, EAX), MRM, FNONE, END),
        entr(Xsave64, 0x0fae, 4, "xsave64", SYS.union(ST), d1(MXS), s2(EDX, EAX), MRM.union(Attrs::REQUIRES_REX), FNONE, END),
    ],
    [
        entr(Xrstor, 0x0fae, 5, "xrstor", SYS.union(LD), d0(), s3(MXS, EDX, EAX), MRM, FNONE, END),
        entr(Xrstor64, 0x0fae, 5, "xrstor64", SYS.union(LD), d0(), s3(MXS, EDX, EAX), MRM.union(Attrs::REQUIRES_REX), FNONE, END),
    ],
    [
        entr(Xsaveopt, 0x0fae, 6, "xsaveopt", SYS.union(ST), d1(MXS), s2(EDX, EAX), MRM, FNONE, END),
        entr(Xsaveopt, 0x0fae, 6, "xsaveopt64", SYS.union(ST), d1(MXS), s2(EDX, EAX), MRM.union(Attrs::REQUIRES_REX), FNONE, END),
    ],
];
