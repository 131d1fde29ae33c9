//! The one-byte root opcode map, plus the REP/REPNE string-operation
//! families whose dispatch entries live only in this map.

use super::defs::*;
use super::extras::{
    XT_CMPS, XT_ENTER, XT_IRET, XT_MOVS, XT_POPA, XT_PUSHA, XT_REP_CMPS, XT_REP_CX, XT_REP_MOVS,
};
use super::groups::Grp;
use super::prefix_ext::Pe;
use crate::schema::opcode::Opcode::*;
use crate::schema::operand::Reg;
use crate::template::DispatchKind::*;
use crate::template::{Entry, PrefixEffect};

/// REP-extension rows: index 0 without a prefix, 2 with 0xF3.
#[repr(u8)]
pub(crate) enum Rp {
    InsB,
    InsV,
    OutsB,
    OutsV,
    MovsB,
    MovsV,
    StosB,
    StosV,
    LodsB,
    LodsV,
}

/// REPNE-extension rows: index 0 bare, 2 with 0xF3, 4 with 0xF2.
#[repr(u8)]
pub(crate) enum Rn {
    CmpsB,
    CmpsV,
    ScasB,
    ScasV,
}

pub(crate) static ONE_BYTE: [Entry; 256] = [
    /* 00 */ ent(Add, 0x00, "add", INT, d1(EB), s2(GB, EB), MRM, FW6, ob(0x03)),
    /* 01 */ ent(Add, 0x01, "add", INT, d1(EV), s2(GV, EV), MRM, FW6, ob(0x00)),
    /* 02 */ ent(Add, 0x02, "add", INT, d1(GB), s2(EB, GB), MRM, FW6, ob(0x05)),
    /* 03 */ ent(Add, 0x03, "add", INT, d1(GV), s2(EV, GV), MRM, FW6, ob(0x02)),
    /* 04 */ ent(Add, 0x04, "add", INT, d1(AL), s2(IB, AL), NA, FW6, grp(Grp::G1v as u8, 0)),
    /* 05 */ ent(Add, 0x05, "add", INT, d1(XAX), s2(IZ, XAX), NA, FW6, ob(0x04)),
    /* 06 */ ent(Push, 0x06, "push", INT, d2(XSP, STK_PUSH), s2(SEG_ES, XSP), I64, FNONE, ob(0x0e)),
    /* 07 */ ent(Pop, 0x07, "pop", INT, d2(SEG_ES, XSP), s2(XSP, STK_POP), I64, FNONE, ob(0x17)),
    /* 08 */ ent(Or, 0x08, "or", INT, d1(EB), s2(GB, EB), MRM, FW6, ob(0x0b)),
    /* 09 */ ent(Or, 0x09, "or", INT, d1(EV), s2(GV, EV), MRM, FW6, ob(0x08)),
    /* 0A */ ent(Or, 0x0a, "or", INT, d1(GB), s2(EB, GB), MRM, FW6, ob(0x0d)),
    /* 0B */ ent(Or, 0x0b, "or", INT, d1(GV), s2(EV, GV), MRM, FW6, ob(0x0a)),
    /* 0C */ ent(Or, 0x0c, "or", INT, d1(AL), s2(IB, AL), NA, FW6, grp(Grp::G1v as u8, 1)),
    /* 0D */ ent(Or, 0x0d, "or", INT, d1(XAX), s2(IZ, XAX), NA, FW6, ob(0x0c)),
    /* 0E */ ent(Push, 0x0e, "push", INT, d2(XSP, STK_PUSH), s2(SEG_CS, XSP), I64, FNONE, ob(0x16)),
    /* 0F */ dis(Escape, 0, "(two-byte)"),
    /* 10 */ ent(Adc, 0x10, "adc", INT, d1(EB), s2(GB, EB), MRM, FRCW6, ob(0x13)),
    /* 11 */ ent(Adc, 0x11, "adc", INT, d1(EV), s2(GV, EV), MRM, FRCW6, ob(0x10)),
    /* 12 */ ent(Adc, 0x12, "adc", INT, d1(GB), s2(EB, GB), MRM, FRCW6, ob(0x15)),
    /* 13 */ ent(Adc, 0x13, "adc", INT, d1(GV), s2(EV, GV), MRM, FRCW6, ob(0x12)),
    /* 14 */ ent(Adc, 0x14, "adc", INT, d1(AL), s2(IB, AL), NA, FRCW6, grp(Grp::G1v as u8, 2)),
    /* 15 */ ent(Adc, 0x15, "adc", INT, d1(XAX), s2(IZ, XAX), NA, FRCW6, ob(0x14)),
    /* 16 */ ent(Push, 0x16, "push", INT, d2(XSP, STK_PUSH), s2(SEG_SS, XSP), I64, FNONE, ob(0x1e)),
    /* 17 */ ent(Pop, 0x17, "pop", INT, d2(SEG_SS, XSP), s2(XSP, STK_POP), I64, FNONE, ob(0x1f)),
    /* 18 */ ent(Sbb, 0x18, "sbb", INT, d1(EB), s2(GB, EB), MRM, FRCW6, ob(0x1b)),
    /* 19 */ ent(Sbb, 0x19, "sbb", INT, d1(EV), s2(GV, EV), MRM, FRCW6, ob(0x18)),
    /* 1A */ ent(Sbb, 0x1a, "sbb", INT, d1(GB), s2(EB, GB), MRM, FRCW6, ob(0x1d)),
    /* 1B */ ent(Sbb, 0x1b, "sbb", INT, d1(GV), s2(EV, GV), MRM, FRCW6, ob(0x1a)),
    /* 1C */ ent(Sbb, 0x1c, "sbb", INT, d1(AL), s2(IB, AL), NA, FRCW6, grp(Grp::G1v as u8, 3)),
    /* 1D */ ent(Sbb, 0x1d, "sbb", INT, d1(XAX), s2(IZ, XAX), NA, FRCW6, ob(0x1c)),
    /* 1E */ ent(Push, 0x1e, "push", INT, d2(XSP, STK_PUSH), s2(SEG_DS, XSP), I64, FNONE, tb(0xa0)),
    /* 1F */ ent(Pop, 0x1f, "pop", INT, d2(SEG_DS, XSP), s2(XSP, STK_POP), I64, FNONE, tb(0xa1)),
    /* 20 */ ent(And, 0x20, "and", INT, d1(EB), s2(GB, EB), MRM, FW6, ob(0x23)),
    /* 21 */ ent(And, 0x21, "and", INT, d1(EV), s2(GV, EV), MRM, FW6, ob(0x20)),
    /* 22 */ ent(And, 0x22, "and", INT, d1(GB), s2(EB, GB), MRM, FW6, ob(0x25)),
    /* 23 */ ent(And, 0x23, "and", INT, d1(GV), s2(EV, GV), MRM, FW6, ob(0x22)),
    /* 24 */ ent(And, 0x24, "and", INT, d1(AL), s2(IB, AL), NA, FW6, grp(Grp::G1v as u8, 4)),
    /* 25 */ ent(And, 0x25, "and", INT, d1(XAX), s2(IZ, XAX), NA, FW6, ob(0x24)),
    /* 26 */ pfx(PrefixEffect::Seg(Reg::Es), "es:"),
    /* 27 */ ent(Daa, 0x27, "daa", INT, d1(AL), s1(AL), I64, FRCAW6, END),
    /* 28 */ ent(Sub, 0x28, "sub", INT, d1(EB), s2(GB, EB), MRM, FW6, ob(0x2b)),
    /* 29 */ ent(Sub, 0x29, "sub", INT, d1(EV), s2(GV, EV), MRM, FW6, ob(0x28)),
    /* 2A */ ent(Sub, 0x2a, "sub", INT, d1(GB), s2(EB, GB), MRM, FW6, ob(0x2d)),
    /* 2B */ ent(Sub, 0x2b, "sub", INT, d1(GV), s2(EV, GV), MRM, FW6, ob(0x2a)),
    /* 2C */ ent(Sub, 0x2c, "sub", INT, d1(AL), s2(IB, AL), NA, FW6, grp(Grp::G1v as u8, 5)),
    /* 2D */ ent(Sub, 0x2d, "sub", INT, d1(XAX), s2(IZ, XAX), NA, FW6, ob(0x2c)),
    /* 2E */ pfx(PrefixEffect::Seg(Reg::Cs), "cs:"),
    /* 2F */ ent(Das, 0x2f, "das", INT, d1(AL), s1(AL), I64, FRCAW6, END),
    /* 30 */ ent(Xor, 0x30, "xor", INT, d1(EB), s2(GB, EB), MRM, FW6, ob(0x33)),
    /* 31 */ ent(Xor, 0x31, "xor", INT, d1(EV), s2(GV, EV), MRM, FW6, ob(0x30)),
    /* 32 */ ent(Xor, 0x32, "xor", INT, d1(GB), s2(EB, GB), MRM, FW6, ob(0x35)),
    /* 33 */ ent(Xor, 0x33, "xor", INT, d1(GV), s2(EV, GV), MRM, FW6, ob(0x32)),
    /* 34 */ ent(Xor, 0x34, "xor", INT, d1(AL), s2(IB, AL), NA, FW6, grp(Grp::G1v as u8, 6)),
    /* 35 */ ent(Xor, 0x35, "xor", INT, d1(XAX), s2(IZ, XAX), NA, FW6, ob(0x34)),
    /* 36 */ pfx(PrefixEffect::Seg(Reg::Ss), "ss:"),
    /* 37 */ ent(Aaa, 0x37, "aaa", INT, d1(AX), s1(AX), I64, FRAW6, END),
    /* 38 */ ent(Cmp, 0x38, "cmp", INT, d0(), s2(EB, GB), MRM, FW6, ob(0x3b)),
    /* 39 */ ent(Cmp, 0x39, "cmp", INT, d0(), s2(EV, GV), MRM, FW6, ob(0x38)),
    /* 3A */ ent(Cmp, 0x3a, "cmp", INT, d0(), s2(GB, EB), MRM, FW6, ob(0x3d)),
    /* 3B */ ent(Cmp, 0x3b, "cmp", INT, d0(), s2(GV, EV), MRM, FW6, ob(0x3a)),
    /* 3C */ ent(Cmp, 0x3c, "cmp", INT, d0(), s2(AL, IB), NA, FW6, grp(Grp::G1v as u8, 7)),
    /* 3D */ ent(Cmp, 0x3d, "cmp", INT, d0(), s2(XAX, IZ), NA, FW6, ob(0x3c)),
    /* 3E */ pfx(PrefixEffect::Seg(Reg::Ds), "ds:"),
    /* 3F */ ent(Aas, 0x3f, "aas", INT, d1(AX), s1(AX), I64, FRAW6, END),
    /* 40 */ dis(X64Ext, 0, "(rex)"),
    /* 41 */ dis(X64Ext, 1, "(rex.b)"),
    /* 42 */ dis(X64Ext, 2, "(rex.x)"),
    /* 43 */ dis(X64Ext, 3, "(rex.xb)"),
    /* 44 */ dis(X64Ext, 4, "(rex.r)"),
    /* 45 */ dis(X64Ext, 5, "(rex.rb)"),
    /* 46 */ dis(X64Ext, 6, "(rex.rx)"),
    /* 47 */ dis(X64Ext, 7, "(rex.rxb)"),
    /* 48 */ dis(X64Ext, 8, "(rex.w)"),
    /* 49 */ dis(X64Ext, 9, "(rex.wb)"),
    /* 4A */ dis(X64Ext, 10, "(rex.wx)"),
    /* 4B */ dis(X64Ext, 11, "(rex.wxb)"),
    /* 4C */ dis(X64Ext, 12, "(rex.wr)"),
    /* 4D */ dis(X64Ext, 13, "(rex.wrb)"),
    /* 4E */ dis(X64Ext, 14, "(rex.wrx)"),
    /* 4F */ dis(X64Ext, 15, "(rex.wrxb)"),
    /* 50 */ ent(Push, 0x50, "push", INT, d2(XSP, STK_PUSH), s2(gprs(0), XSP), NA, FNONE, ob(0x51)),
    /* 51 */ ent(Push, 0x51, "push", INT, d2(XSP, STK_PUSH), s2(gprs(1), XSP), NA, FNONE, ob(0x52)),
    /* 52 */ ent(Push, 0x52, "push", INT, d2(XSP, STK_PUSH), s2(gprs(2), XSP), NA, FNONE, ob(0x53)),
    /* 53 */ ent(Push, 0x53, "push", INT, d2(XSP, STK_PUSH), s2(gprs(3), XSP), NA, FNONE, ob(0x54)),
    /* 54 */ ent(Push, 0x54, "push", INT, d2(XSP, STK_PUSH), s2(gprs(4), XSP), NA, FNONE, ob(0x55)),
    /* 55 */ ent(Push, 0x55, "push", INT, d2(XSP, STK_PUSH), s2(gprs(5), XSP), NA, FNONE, ob(0x56)),
    /* 56 */ ent(Push, 0x56, "push", INT, d2(XSP, STK_PUSH), s2(gprs(6), XSP), NA, FNONE, ob(0x57)),
    /* 57 */ ent(Push, 0x57, "push", INT, d2(XSP, STK_PUSH), s2(gprs(7), XSP), NA, FNONE, grp(Grp::G5 as u8, 6)),
    /* 58 */ ent(Pop, 0x58, "pop", INT, d2(gprs(0), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x59)),
    /* 59 */ ent(Pop, 0x59, "pop", INT, d2(gprs(1), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x5a)),
    /* 5A */ ent(Pop, 0x5a, "pop", INT, d2(gprs(2), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x5b)),
    /* 5B */ ent(Pop, 0x5b, "pop", INT, d2(gprs(3), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x5c)),
    /* 5C */ ent(Pop, 0x5c, "pop", INT, d2(gprs(4), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x5d)),
    /* 5D */ ent(Pop, 0x5d, "pop", INT, d2(gprs(5), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x5e)),
    /* 5E */ ent(Pop, 0x5e, "pop", INT, d2(gprs(6), XSP), s2(XSP, STK_POP), NA, FNONE, ob(0x5f)),
    /* 5F */ ent(Pop, 0x5f, "pop", INT, d2(gprs(7), XSP), s2(XSP, STK_POP), NA, FNONE, grp(Grp::G1a as u8, 0)),
    /* 60 */ ent(Pusha, 0x60, "pusha", INT, d2(XSP, STK_PUSHA), s3(XSP, XAX, XCX), I64.union(XTRA), FNONE, extra(XT_PUSHA)),
    /* 61 */ ent(Popa, 0x61, "popa", INT, d2(XSP, XDI), s2(XSP, STK_POPA), I64.union(XTRA), FNONE, extra(XT_POPA)),
    /* 62 */ dis(EvexPrefixExt, 0, "(evex)"),
    /* 63 */ dis(X64Ext, 16, "(movsxd/arpl)"),
    /* 64 */ pfx(PrefixEffect::Seg(Reg::Fs), "fs:"),
    /* 65 */ pfx(PrefixEffect::Seg(Reg::Gs), "gs:"),
    /* 66 */ pfx(PrefixEffect::OpndSize, "data16"),
    /* 67 */ pfx(PrefixEffect::AddrSize, "addr"),
    /* 68 */ ent(Push, 0x68, "push", INT, d2(XSP, STK_PUSH), s2(IZ, XSP), NA, FNONE, ob(0x6a)),
    /* 69 */ ent(Imul, 0x69, "imul", INT, d1(GV), s2(EV, IZ), MRM, FW6, ob(0x6b)),
    /* 6A */ ent(Push, 0x6a, "push", INT, d2(XSP, STK_PUSH), s2(IB, XSP), NA, FNONE, ob(0x06)),
    /* 6B */ ent(Imul, 0x6b, "imul", INT, d1(GV), s2(EV, IB), MRM, FW6, grp(Grp::G3v as u8, 5)),
    /* 6C */ dis(RepExt, Rp::InsB as u8, "(ins)"),
    /* 6D */ dis(RepExt, Rp::InsV as u8, "(ins)"),
    /* 6E */ dis(RepExt, Rp::OutsB as u8, "(outs)"),
    /* 6F */ dis(RepExt, Rp::OutsV as u8, "(outs)"),
    /* 70 */ ent(Jo, 0x70, "jo", BR, d0(), s1(JB), PREDCC, FRO, tb(0x80)),
    /* 71 */ ent(Jno, 0x71, "jno", BR, d0(), s1(JB), PREDCC, FRO, tb(0x81)),
    /* 72 */ ent(Jb, 0x72, "jb", BR, d0(), s1(JB), PREDCC, FRC, tb(0x82)),
    /* 73 */ ent(Jnb, 0x73, "jnb", BR, d0(), s1(JB), PREDCC, FRC, tb(0x83)),
    /* 74 */ ent(Jz, 0x74, "jz", BR, d0(), s1(JB), PREDCC, FRZ, tb(0x84)),
    /* 75 */ ent(Jnz, 0x75, "jnz", BR, d0(), s1(JB), PREDCC, FRZ, tb(0x85)),
    /* 76 */ ent(Jbe, 0x76, "jbe", BR, d0(), s1(JB), PREDCC, FRCZ, tb(0x86)),
    /* 77 */ ent(Jnbe, 0x77, "jnbe", BR, d0(), s1(JB), PREDCC, FRCZ, tb(0x87)),
    /* 78 */ ent(Js, 0x78, "js", BR, d0(), s1(JB), PREDCC, FRS, tb(0x88)),
    /* 79 */ ent(Jns, 0x79, "jns", BR, d0(), s1(JB), PREDCC, FRS, tb(0x89)),
    /* 7A */ ent(Jp, 0x7a, "jp", BR, d0(), s1(JB), PREDCC, FRP, tb(0x8a)),
    /* 7B */ ent(Jnp, 0x7b, "jnp", BR, d0(), s1(JB), PREDCC, FRP, tb(0x8b)),
    /* 7C */ ent(Jl, 0x7c, "jl", BR, d0(), s1(JB), PREDCC, FRSO, tb(0x8c)),
    /* 7D */ ent(Jnl, 0x7d, "jnl", BR, d0(), s1(JB), PREDCC, FRSO, tb(0x8d)),
    /* 7E */ ent(Jle, 0x7e, "jle", BR, d0(), s1(JB), PREDCC, FRSOZ, tb(0x8e)),
    /* 7F */ ent(Jnle, 0x7f, "jnle", BR, d0(), s1(JB), PREDCC, FRSOZ, tb(0x8f)),
    /* 80 */ dis(Extension, Grp::G1b as u8, "(grp 1)"),
    /* 81 */ dis(Extension, Grp::G1v as u8, "(grp 1)"),
    /* 82 */ dis(Extension, Grp::G1b82 as u8, "(grp 1)"),
    /* 83 */ dis(Extension, Grp::G1vIb as u8, "(grp 1)"),
    /* 84 */ ent(Test, 0x84, "test", INT, d0(), s2(EB, GB), MRM, FW6, ob(0x85)),
    /* 85 */ ent(Test, 0x85, "test", INT, d0(), s2(EV, GV), MRM, FW6, ob(0xa8)),
    /* 86 */ ent(Xchg, 0x86, "xchg", INT, d2(EB, GB), s2(EB, GB), MRM, FNONE, ob(0x91)),
    /* 87 */ ent(Xchg, 0x87, "xchg", INT, d2(EV, GV), s2(EV, GV), MRM, FNONE, ob(0x86)),
    /* 88 */ ent(Mov, 0x88, "mov", INT.union(ST), d1(EB), s1(GB), MRM, FNONE, ob(0x8b)),
    /* 89 */ ent(Mov, 0x89, "mov", INT.union(ST), d1(EV), s1(GV), MRM, FNONE, ob(0x88)),
    /* 8A */ ent(Mov, 0x8a, "mov", INT.union(LD), d1(GB), s1(EB), MRM, FNONE, ob(0xb8)),
    /* 8B */ ent(Mov, 0x8b, "mov", INT.union(LD), d1(GV), s1(EV), MRM, FNONE, ob(0x8a)),
    /* 8C */ ent(MovSeg, 0x8c, "mov", INT, d1(EV), s1(SW), MRM, FNONE, END),
    /* 8D */ ent(Lea, 0x8d, "lea", INT, d1(GV), s1(MV), MRM, FNONE, END),
    /* 8E */ ent(MovSeg, 0x8e, "mov", INT, d1(SW), s1(EV), MRM, FNONE, ob(0x8c)),
    /* 8F */ dis(XopPrefixExt, 0, "(xop)"),
    /* 90 */ dis(PrefixExt, Pe::Nop90 as u8, "(nop/pause)"),
    /* 91 */ ent(Xchg, 0x91, "xchg", INT, d2(XAX, XCX), s2(XCX, XAX), NA, FNONE, ob(0x92)),
    /* 92 */ ent(Xchg, 0x92, "xchg", INT, d2(XAX, XDX), s2(XDX, XAX), NA, FNONE, ob(0x93)),
    /* 93 */ ent(Xchg, 0x93, "xchg", INT, d2(XAX, XBX), s2(XBX, XAX), NA, FNONE, ob(0x94)),
    /* 94 */ ent(Xchg, 0x94, "xchg", INT, d2(XAX, XSP), s2(XSP, XAX), NA, FNONE, ob(0x95)),
    /* 95 */ ent(Xchg, 0x95, "xchg", INT, d2(XAX, XBP), s2(XBP, XAX), NA, FNONE, ob(0x96)),
    /* 96 */ ent(Xchg, 0x96, "xchg", INT, d2(XAX, XSI), s2(XSI, XAX), NA, FNONE, ob(0x97)),
    /* 97 */ ent(Xchg, 0x97, "xchg", INT, d2(XAX, XDI), s2(XDI, XAX), NA, FNONE, END),
    /* 98 */ ent(Cwde, 0x98, "cwde", INT.union(CVT), d1(XAX), s1(AX), NA, FNONE, END),
    /* 99 */ ent(Cdq, 0x99, "cdq", INT.union(CVT), d1(XDX), s1(XAX), NA, FNONE, END),
    /* 9A */ ent(CallFar, 0x9a, "lcall", BR, d2(XSP, STK_PUSH), s2(AP, XSP), I64, FNONE, grp(Grp::G5 as u8, 3)),
    /* 9B */ ent(Fwait, 0x9b, "fwait", FPU, d0(), s0(), NA, FNONE, END),
    /* 9C */ ent(Pushf, 0x9c, "pushf", INT, d2(XSP, STK_PUSH), s2(XFL, XSP), NA, FPUSHF, END),
    /* 9D */ ent(Popf, 0x9d, "popf", INT, d2(XSP, XFL), s2(XSP, STK_POP), NA, FPOPF, END),
    /* 9E */ ent(Sahf, 0x9e, "sahf", INT, d0(), s1(AH), NA, FW5, END),
    /* 9F */ ent(Lahf, 0x9f, "lahf", INT, d1(AH), s0(), NA, FR5, END),
    /* A0 */ ent(Mov, 0xa0, "mov", INT.union(LD), d1(AL), s1(OB), NA, FNONE, ob(0xa3)),
    /* A1 */ ent(Mov, 0xa1, "mov", INT.union(LD), d1(XAX), s1(OV), NA, FNONE, ob(0xa0)),
    /* A2 */ ent(Mov, 0xa2, "mov", INT.union(ST), d1(OB), s1(AL), NA, FNONE, grp(Grp::G11v as u8, 0)),
    /* A3 */ ent(Mov, 0xa3, "mov", INT.union(ST), d1(OV), s1(XAX), NA, FNONE, ob(0xa2)),
    /* A4 */ dis(RepExt, Rp::MovsB as u8, "(movs)"),
    /* A5 */ dis(RepExt, Rp::MovsV as u8, "(movs)"),
    /* A6 */ dis(RepneExt, Rn::CmpsB as u8, "(cmps)"),
    /* A7 */ dis(RepneExt, Rn::CmpsV as u8, "(cmps)"),
    /* A8 */ ent(Test, 0xa8, "test", INT, d0(), s2(AL, IB), NA, FW6, ob(0xa9)),
    /* A9 */ ent(Test, 0xa9, "test", INT, d0(), s2(XAX, IZ), NA, FW6, grp(Grp::G3b as u8, 0)),
    /* AA */ dis(RepExt, Rp::StosB as u8, "(stos)"),
    /* AB */ dis(RepExt, Rp::StosV as u8, "(stos)"),
    /* AC */ dis(RepExt, Rp::LodsB as u8, "(lods)"),
    /* AD */ dis(RepExt, Rp::LodsV as u8, "(lods)"),
    /* AE */ dis(RepneExt, Rn::ScasB as u8, "(scas)"),
    /* AF */ dis(RepneExt, Rn::ScasV as u8, "(scas)"),
    /* B0 */ ent(Mov, 0xb0, "mov", INT, d1(AL), s1(IB), NA, FNONE, ob(0xb1)),
    /* B1 */ ent(Mov, 0xb1, "mov", INT, d1(CL), s1(IB), NA, FNONE, ob(0xb2)),
    /* B2 */ ent(Mov, 0xb2, "mov", INT, d1(DL), s1(IB), NA, FNONE, ob(0xb3)),
    /* B3 */ ent(Mov, 0xb3, "mov", INT, d1(BL), s1(IB), NA, FNONE, ob(0xb4)),
    /* B4 */ ent(Mov, 0xb4, "mov", INT, d1(AH), s1(IB), NA, FNONE, ob(0xb5)),
    /* B5 */ ent(Mov, 0xb5, "mov", INT, d1(CH), s1(IB), NA, FNONE, ob(0xb6)),
    /* B6 */ ent(Mov, 0xb6, "mov", INT, d1(DH), s1(IB), NA, FNONE, ob(0xb7)),
    /* B7 */ ent(Mov, 0xb7, "mov", INT, d1(BH), s1(IB), NA, FNONE, ob(0xa1)),
    /* B8 */ ent(Mov, 0xb8, "mov", INT, d1(XAX), s1(IV), NA, FNONE, ob(0xb9)),
    /* B9 */ ent(Mov, 0xb9, "mov", INT, d1(XCX), s1(IV), NA, FNONE, ob(0xba)),
    /* BA */ ent(Mov, 0xba, "mov", INT, d1(XDX), s1(IV), NA, FNONE, ob(0xbb)),
    /* BB */ ent(Mov, 0xbb, "mov", INT, d1(XBX), s1(IV), NA, FNONE, ob(0xbc)),
    /* BC */ ent(Mov, 0xbc, "mov", INT, d1(XSP), s1(IV), NA, FNONE, ob(0xbd)),
    /* BD */ ent(Mov, 0xbd, "mov", INT, d1(XBP), s1(IV), NA, FNONE, ob(0xbe)),
    /* BE */ ent(Mov, 0xbe, "mov", INT, d1(XSI), s1(IV), NA, FNONE, ob(0xbf)),
    /* BF */ ent(Mov, 0xbf, "mov", INT, d1(XDI), s1(IV), NA, FNONE, ob(0xb0)),
    /* C0 */ dis(Extension, Grp::G2b as u8, "(grp 2)"),
    /* C1 */ dis(Extension, Grp::G2v as u8, "(grp 2)"),
    /* C2 */ ent(Ret, 0xc2, "ret", BR, d1(XSP), s3(IW, XSP, STK_POP), NA, FNONE, END),
    /* C3 */ ent(Ret, 0xc3, "ret", BR, d1(XSP), s2(XSP, STK_POP), NA, FNONE, ob(0xc2)),
    /* C4 */ dis(VexPrefixExt, 0, "(vex 3-byte)"),
    /* C5 */ dis(VexPrefixExt, 1, "(vex 2-byte)"),
    /* C6 */ dis(Extension, Grp::G11b as u8, "(grp 11)"),
    /* C7 */ dis(Extension, Grp::G11v as u8, "(grp 11)"),
    /* C8 */ ent(Enter, 0xc8, "enter", INT, d2(XSP, STK_PUSH), s3(IW, IB, XSP), XTRA, FNONE, extra(XT_ENTER)),
    /* C9 */ ent(Leave, 0xc9, "leave", INT, d2(XSP, XBP), s2(XBP, STK_POP), NA, FNONE, END),
    /* CA */ ent(RetFar, 0xca, "lret", BR, d1(XSP), s3(IW, XSP, STK_POP), NA, FNONE, END),
    /* CB */ ent(RetFar, 0xcb, "lret", BR, d1(XSP), s2(XSP, STK_POP), NA, FNONE, ob(0xca)),
    /* CC */ ent(Int3, 0xcc, "int3", BR, d2(XSP, STK_PUSH), s2(XSP, XFL), NA, FINT, END),
    /* CD */ ent(Int, 0xcd, "int", BR, d2(XSP, STK_PUSH), s3(IB, XSP, XFL), NA, FINT, END),
    /* CE */ ent(Into, 0xce, "into", BR, d2(XSP, STK_PUSH), s2(XSP, XFL), I64.union(PREDCC), FINTO, END),
    /* CF */ ent(Iret, 0xcf, "iret", BR, d2(XSP, XFL), s3(XSP, STK_POP, STK_POP), XTRA, FPOPF, extra(XT_IRET)),
    /* D0 */ dis(Extension, Grp::G2b1 as u8, "(grp 2)"),
    /* D1 */ dis(Extension, Grp::G2v1 as u8, "(grp 2)"),
    /* D2 */ dis(Extension, Grp::G2bCl as u8, "(grp 2)"),
    /* D3 */ dis(Extension, Grp::G2vCl as u8, "(grp 2)"),
    /* D4 */ ent(Aam, 0xd4, "aam", INT, d1(AX), s2(IB, AL), I64, FW6, END),
    /* D5 */ ent(Aad, 0xd5, "aad", INT, d1(AX), s3(IB, AL, AH), I64, FW6, END),
    /* D6 */ ent(Salc, 0xd6, "salc", INT, d1(AL), s0(), I64, FRC, END),
    /* D7 */ ent(Xlat, 0xd7, "xlat", INT.union(LD), d1(AL), s1(ZB), NA, FNONE, END),
    /* D8 */ dis(FloatExt, 0, "(float d8)"),
    /* D9 */ dis(FloatExt, 1, "(float d9)"),
    /* DA */ dis(FloatExt, 2, "(float da)"),
    /* DB */ dis(FloatExt, 3, "(float db)"),
    /* DC */ dis(FloatExt, 4, "(float dc)"),
    /* DD */ dis(FloatExt, 5, "(float dd)"),
    /* DE */ dis(FloatExt, 6, "(float de)"),
    /* DF */ dis(FloatExt, 7, "(float df)"),
    /* E0 */ ent(Loopne, 0xe0, "loopne", BR, d1(XCX), s2(JB, XCX), PREDCX, FRZ, END),
    /* E1 */ ent(Loope, 0xe1, "loope", BR, d1(XCX), s2(JB, XCX), PREDCX, FRZ, END),
    /* E2 */ ent(Loop, 0xe2, "loop", BR, d1(XCX), s2(JB, XCX), PREDCX, FNONE, END),
    /* E3 */ ent(Jecxz, 0xe3, "jecxz", BR, d0(), s2(JB, XCX), PREDCX, FNONE, END),
    /* E4 */ ent(In, 0xe4, "in", INT, d1(AL), s1(IB), NA, FNONE, ob(0xe5)),
    /* E5 */ ent(In, 0xe5, "in", INT, d1(XAX), s1(IB), NA, FNONE, ob(0xec)),
    /* E6 */ ent(Out, 0xe6, "out", INT, d0(), s2(AL, IB), NA, FNONE, ob(0xe7)),
    /* E7 */ ent(Out, 0xe7, "out", INT, d0(), s2(XAX, IB), NA, FNONE, ob(0xee)),
    /* E8 */ ent(Call, 0xe8, "call", BR, d2(XSP, STK_PUSH), s2(JZ, XSP), NA, FNONE, grp(Grp::G5 as u8, 2)),
    /* E9 */ ent(Jmp, 0xe9, "jmp", BR, d0(), s1(JZ), NA, FNONE, ob(0xeb)),
    /* EA */ ent(JmpFar, 0xea, "ljmp", BR, d0(), s1(AP), I64, FNONE, grp(Grp::G5 as u8, 5)),
    /* EB */ ent(Jmp, 0xeb, "jmp", BR, d0(), s1(JB), NA, FNONE, grp(Grp::G5 as u8, 4)),
    /* EC */ ent(In, 0xec, "in", INT, d1(AL), s1(PORT), NA, FNONE, ob(0xed)),
    /* ED */ ent(In, 0xed, "in", INT, d1(XAX), s1(PORT), NA, FNONE, END),
    /* EE */ ent(Out, 0xee, "out", INT, d0(), s2(AL, PORT), NA, FNONE, ob(0xef)),
    /* EF */ ent(Out, 0xef, "out", INT, d0(), s2(XAX, PORT), NA, FNONE, END),
    /* F0 */ pfx(PrefixEffect::Lock, "lock"),
    /* F1 */ ent(Int1, 0xf1, "int1", BR, d2(XSP, STK_PUSH), s2(XSP, XFL), NA, FINT, END),
    /* F2 */ pfx(PrefixEffect::Repne, "repne"),
    /* F3 */ pfx(PrefixEffect::Rep, "rep"),
    /* F4 */ ent(Hlt, 0xf4, "hlt", SYS, d0(), s0(), NA, FNONE, END),
    /* F5 */ ent(Cmc, 0xf5, "cmc", INT, d0(), s0(), NA, FRWC, END),
    /* F6 */ dis(Extension, Grp::G3b as u8, "(grp 3)"),
    /* F7 */ dis(Extension, Grp::G3v as u8, "(grp 3)"),
    /* F8 */ ent(Clc, 0xf8, "clc", INT, d0(), s0(), NA, FWC, END),
    /* F9 */ ent(Stc, 0xf9, "stc", INT, d0(), s0(), NA, FWC, END),
    /* FA */ ent(Cli, 0xfa, "cli", SYS, d0(), s0(), NA, FWI, END),
    /* FB */ ent(Sti, 0xfb, "sti", SYS, d0(), s0(), NA, FWI, END),
    /* FC */ ent(Cld, 0xfc, "cld", INT, d0(), s0(), NA, FWD, END),
    /* FD */ ent(Std, 0xfd, "std", INT, d0(), s0(), NA, FWD, END),
    /* FE */ dis(Extension, Grp::G4 as u8, "(grp 4)"),
    /* FF */ dis(Extension, Grp::G5 as u8, "(grp 5)"),
];

/// String operations under the REP family. Index 2 is the 0xF3-prefixed form.
pub(crate) static REP_EXT: [[Entry; 4]; 10] = [
    // ins
    [
        ent(Ins, 0x6c, "ins", INT.union(ST), d2(YB, XDI), s2(PORT, XDI), NA, FRD, END),
        IE,
        ent(RepIns, 0x6c, "rep ins", INT.union(ST), d2(YB, XDI), s3(PORT, XDI, XCX), XTRA.union(PREDCX), FRD, extra(XT_REP_CX)),
        IE,
    ],
    [
        ent(Ins, 0x6d, "ins", INT.union(ST), d2(YV, XDI), s2(PORT, XDI), NA, FRD, END),
        IE,
        ent(RepIns, 0x6d, "rep ins", INT.union(ST), d2(YV, XDI), s3(PORT, XDI, XCX), XTRA.union(PREDCX), FRD, extra(XT_REP_CX)),
        IE,
    ],
    // outs
    [
        ent(Outs, 0x6e, "outs", INT.union(LD), d1(XSI), s3(XB, PORT, XSI), NA, FRD, END),
        IE,
        ent(RepOuts, 0x6e, "rep outs", INT.union(LD), d2(XSI, XCX), s3(XB, PORT, XCX), PREDCX, FRD, END),
        IE,
    ],
    [
        ent(Outs, 0x6f, "outs", INT.union(LD), d1(XSI), s3(XV, PORT, XSI), NA, FRD, END),
        IE,
        ent(RepOuts, 0x6f, "rep outs", INT.union(LD), d2(XSI, XCX), s3(XV, PORT, XCX), PREDCX, FRD, END),
        IE,
    ],
    // movs
    [
        ent(Movs, 0xa4, "movs", INT.union(LDST), d2(YB, XDI), s3(XB, XSI, XDI), XTRA, FRD, extra(XT_MOVS)),
        IE,
        ent(RepMovs, 0xa4, "rep movs", INT.union(LDST), d2(YB, XDI), s3(XB, XSI, XDI), XTRA.union(PREDCX), FRD, extra(XT_REP_MOVS)),
        IE,
    ],
    [
        ent(Movs, 0xa5, "movs", INT.union(LDST), d2(YV, XDI), s3(XV, XSI, XDI), XTRA, FRD, extra(XT_MOVS)),
        IE,
        ent(RepMovs, 0xa5, "rep movs", INT.union(LDST), d2(YV, XDI), s3(XV, XSI, XDI), XTRA.union(PREDCX), FRD, extra(XT_REP_MOVS)),
        IE,
    ],
    // stos
    [
        ent(Stos, 0xaa, "stos", INT.union(ST), d2(YB, XDI), s2(AL, XDI), NA, FRD, END),
        IE,
        ent(RepStos, 0xaa, "rep stos", INT.union(ST), d2(YB, XDI), s3(AL, XDI, XCX), XTRA.union(PREDCX), FRD, extra(XT_REP_CX)),
        IE,
    ],
    [
        ent(Stos, 0xab, "stos", INT.union(ST), d2(YV, XDI), s2(XAX, XDI), NA, FRD, END),
        IE,
        ent(RepStos, 0xab, "rep stos", INT.union(ST), d2(YV, XDI), s3(XAX, XDI, XCX), XTRA.union(PREDCX), FRD, extra(XT_REP_CX)),
        IE,
    ],
    // lods
    [
        ent(Lods, 0xac, "lods", INT.union(LD), d2(AL, XSI), s2(XB, XSI), NA, FRD, END),
        IE,
        ent(RepLods, 0xac, "rep lods", INT.union(LD), d2(AL, XSI), s3(XB, XSI, XCX), XTRA.union(PREDCX), FRD, extra(XT_REP_CX)),
        IE,
    ],
    [
        ent(Lods, 0xad, "lods", INT.union(LD), d2(XAX, XSI), s2(XV, XSI), NA, FRD, END),
        IE,
        ent(RepLods, 0xad, "rep lods", INT.union(LD), d2(XAX, XSI), s3(XV, XSI, XCX), XTRA.union(PREDCX), FRD, extra(XT_REP_CX)),
        IE,
    ],
];

/// String compares and scans: index 2 is REPE (0xF3), index 4 REPNE (0xF2).
pub(crate) static REPNE_EXT: [[Entry; 6]; 4] = [
    // cmps
    [
        ent(Cmps, 0xa6, "cmps", INT.union(LD), d2(XSI, XDI), s3(XB, YB, XSI), XTRA, FW6, extra(XT_CMPS)),
        IE,
        ent(RepeCmps, 0xa6, "repe cmps", INT.union(LD), d2(XSI, XDI), s3(XB, YB, XSI), XTRA.union(PREDCX), FRZW6, extra(XT_REP_CMPS)),
        IE,
        ent(RepneCmps, 0xa6, "repne cmps", INT.union(LD), d2(XSI, XDI), s3(XB, YB, XSI), XTRA.union(PREDCX), FRZW6, extra(XT_REP_CMPS)),
        IE,
    ],
    [
        ent(Cmps, 0xa7, "cmps", INT.union(LD), d2(XSI, XDI), s3(XV, YV, XSI), XTRA, FW6, extra(XT_CMPS)),
        IE,
        ent(RepeCmps, 0xa7, "repe cmps", INT.union(LD), d2(XSI, XDI), s3(XV, YV, XSI), XTRA.union(PREDCX), FRZW6, extra(XT_REP_CMPS)),
        IE,
        ent(RepneCmps, 0xa7, "repne cmps", INT.union(LD), d2(XSI, XDI), s3(XV, YV, XSI), XTRA.union(PREDCX), FRZW6, extra(XT_REP_CMPS)),
        IE,
    ],
    // scas
    [
        ent(Scas, 0xae, "scas", INT.union(LD), d1(XDI), s3(YB, AL, XDI), NA, FW6, END),
        IE,
        ent(RepeScas, 0xae, "repe scas", INT.union(LD), d2(XDI, XCX), s3(YB, AL, XCX), XTRA.union(PREDCX), FRZW6, extra(XT_CMPS)),
        IE,
        ent(RepneScas, 0xae, "repne scas", INT.union(LD), d2(XDI, XCX), s3(YB, AL, XCX), XTRA.union(PREDCX), FRZW6, extra(XT_CMPS)),
        IE,
    ],
    [
        ent(Scas, 0xaf, "scas", INT.union(LD), d1(XDI), s3(YV, XAX, XDI), NA, FW6, END),
        IE,
        ent(RepeScas, 0xaf, "repe scas", INT.union(LD), d2(XDI, XCX), s3(YV, XAX, XCX), XTRA.union(PREDCX), FRZW6, extra(XT_CMPS)),
        IE,
        ent(RepneScas, 0xaf, "repne scas", INT.union(LD), d2(XDI, XCX), s3(YV, XAX, XCX), XTRA.union(PREDCX), FRZW6, extra(XT_CMPS)),
        IE,
    ],
];
