//! x87 tables: one low table per opcode byte D8..DF indexed by ModR/M.reg
//! for the memory forms, and one high table indexed by `modrm - 0xC0` for
//! the register forms.
//!
//! The sandpile-documented duplicate encodings (FCOM2, FCOMP3, FCOMP5,
//! FSTP1, FSTP8, FSTP9, FXCH4, FXCH7) decode to their canonical identifiers
//! through chain-less entries, so re-encoding always emits the canonical
//! byte pattern.

use super::defs::*;
use crate::schema::opcode::Opcode::{self, *};
use crate::schema::operand::{OpSize, OperandDesc, OperandKind, Reg};
use crate::template::Entry;

const fn sti(i: usize) -> OperandDesc {
    let r = match i {
        0 => Reg::St0,
        1 => Reg::St1,
        2 => Reg::St2,
        3 => Reg::St3,
        4 => Reg::St4,
        5 => Reg::St5,
        6 => Reg::St6,
        _ => Reg::St7,
    };
    OperandDesc::new(OperandKind::Implicit(r), OpSize::B10)
}

pub(crate) static FLOAT_LOW: [[Entry; 8]; 8] = [
    // D8: m32real arithmetic
    [
        entr(Fadd, 0xd8, 0, "fadd", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fmul, 0xd8, 1, "fmul", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fcom, 0xd8, 2, "fcom", FPU, d0(), s2(MD, ST0), MRM, FNONE, END),
        entr(Fcomp, 0xd8, 3, "fcomp", FPU, d0(), s2(MD, ST0), MRM, FNONE, END),
        entr(Fsub, 0xd8, 4, "fsub", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fsubr, 0xd8, 5, "fsubr", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fdiv, 0xd8, 6, "fdiv", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fdivr, 0xd8, 7, "fdivr", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
    ],
    // D9: m32real load/store, control state
    [
        entr(Fld, 0xd9, 0, "fld", FPU.union(LD), d1(ST0), s1(MD), MRM, FNONE, END),
        IE,
        entr(Fst, 0xd9, 2, "fst", FPU.union(ST), d1(MD), s1(ST0), MRM, FNONE, END),
        entr(Fstp, 0xd9, 3, "fstp", FPU.union(ST), d1(MD), s1(ST0), MRM, FNONE, END),
        entr(Fldenv, 0xd9, 4, "fldenv", FPU.union(SYS), d0(), s1(MFE), MRM, FNONE, END),
        entr(Fldcw, 0xd9, 5, "fldcw", FPU.union(SYS), d0(), s1(MW), MRM, FNONE, END),
        entr(Fnstenv, 0xd9, 6, "fnstenv", FPU.union(SYS), d1(MFE), s0(), MRM, FNONE, END),
        entr(Fnstcw, 0xd9, 7, "fnstcw", FPU.union(SYS), d1(MW), s0(), MRM, FNONE, END),
    ],
    // DA: m32int arithmetic
    [
        entr(Fiadd, 0xda, 0, "fiadd", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fimul, 0xda, 1, "fimul", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Ficom, 0xda, 2, "ficom", FPU, d0(), s2(MD, ST0), MRM, FNONE, END),
        entr(Ficomp, 0xda, 3, "ficomp", FPU, d0(), s2(MD, ST0), MRM, FNONE, END),
        entr(Fisub, 0xda, 4, "fisub", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fisubr, 0xda, 5, "fisubr", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fidiv, 0xda, 6, "fidiv", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
        entr(Fidivr, 0xda, 7, "fidivr", FPU.union(MTH), d1(ST0), s2(MD, ST0), MRM, FNONE, END),
    ],
    // DB: m32int load/store, m80real
    [
        entr(Fild, 0xdb, 0, "fild", FPU.union(LD), d1(ST0), s1(MD), MRM, FNONE, END),
        entr(Fisttp, 0xdb, 1, "fisttp", FPU.union(ST), d1(MD), s1(ST0), MRM, FNONE, END),
        entr(Fist, 0xdb, 2, "fist", FPU.union(ST), d1(MD), s1(ST0), MRM, FNONE, END),
        entr(Fistp, 0xdb, 3, "fistp", FPU.union(ST), d1(MD), s1(ST0), MRM, FNONE, END),
        IE,
        entr(Fld, 0xdb, 5, "fld", FPU.union(LD), d1(ST0), s1(M80), MRM, FNONE, END),
        IE,
        entr(Fstp, 0xdb, 7, "fstp", FPU.union(ST), d1(M80), s1(ST0), MRM, FNONE, END),
    ],
    // DC: m64real arithmetic
    [
        entr(Fadd, 0xdc, 0, "fadd", FPU.union(MTH), d1(ST0), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fmul, 0xdc, 1, "fmul", FPU.union(MTH), d1(ST0), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fcom, 0xdc, 2, "fcom", FPU, d0(), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fcomp, 0xdc, 3, "fcomp", FPU, d0(), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fsub, 0xdc, 4, "fsub", FPU.union(MTH), d1(ST0), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fsubr, 0xdc, 5, "fsubr", FPU.union(MTH), d1(ST0), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fdiv, 0xdc, 6, "fdiv", FPU.union(MTH), d1(ST0), s2(MQ, ST0), MRM, FNONE, END),
        entr(Fdivr, 0xdc, 7, "fdivr", FPU.union(MTH), d1(ST0), s2(MQ, ST0), MRM, FNONE, END),
    ],
    // DD: m64real load/store, save areas
    [
        entr(Fld, 0xdd, 0, "fld", FPU.union(LD), d1(ST0), s1(MQ), MRM, FNONE, END),
        entr(Fisttp, 0xdd, 1, "fisttp", FPU.union(ST), d1(MQ), s1(ST0), MRM, FNONE, END),
        entr(Fst, 0xdd, 2, "fst", FPU.union(ST), d1(MQ), s1(ST0), MRM, FNONE, END),
        entr(Fstp, 0xdd, 3, "fstp", FPU.union(ST), d1(MQ), s1(ST0), MRM, FNONE, END),
        entr(Frstor, 0xdd, 4, "frstor", FPU.union(SYS), d0(), s1(MFS), MRM, FNONE, END),
        IE,
        entr(Fnsave, 0xdd, 6, "fnsave", FPU.union(SYS), d1(MFS), s0(), MRM, FNONE, END),
        entr(Fnstsw, 0xdd, 7, "fnstsw", FPU.union(SYS), d1(MW), s0(), MRM, FNONE, END),
    ],
    // DE: m16int arithmetic
    [
        entr(Fiadd, 0xde, 0, "fiadd", FPU.union(MTH), d1(ST0), s2(MW, ST0), MRM, FNONE, END),
        entr(Fimul, 0xde, 1, "fimul", FPU.union(MTH), d1(ST0), s2(MW, ST0), MRM, FNONE, END),
        entr(Ficom, 0xde, 2, "ficom", FPU, d0(), s2(MW, ST0), MRM, FNONE, END),
        entr(Ficomp, 0xde, 3, "ficomp", FPU, d0(), s2(MW, ST0), MRM, FNONE, END),
        entr(Fisub, 0xde, 4, "fisub", FPU.union(MTH), d1(ST0), s2(MW, ST0), MRM, FNONE, END),
        entr(Fisubr, 0xde, 5, "fisubr", FPU.union(MTH), d1(ST0), s2(MW, ST0), MRM, FNONE, END),
        entr(Fidiv, 0xde, 6, "fidiv", FPU.union(MTH), d1(ST0), s2(MW, ST0), MRM, FNONE, END),
        entr(Fidivr, 0xde, 7, "fidivr", FPU.union(MTH), d1(ST0), s2(MW, ST0), MRM, FNONE, END),
    ],
    // DF: m16int load/store, packed BCD, m64int
    [
        entr(Fild, 0xdf, 0, "fild", FPU.union(LD), d1(ST0), s1(MW), MRM, FNONE, END),
        entr(Fisttp, 0xdf, 1, "fisttp", FPU.union(ST), d1(MW), s1(ST0), MRM, FNONE, END),
        entr(Fist, 0xdf, 2, "fist", FPU.union(ST), d1(MW), s1(ST0), MRM, FNONE, END),
        entr(Fistp, 0xdf, 3, "fistp", FPU.union(ST), d1(MW), s1(ST0), MRM, FNONE, END),
        entr(Fbld, 0xdf, 4, "fbld", FPU.union(LD), d1(ST0), s1(M80), MRM, FNONE, END),
        entr(Fild, 0xdf, 5, "fild", FPU.union(LD), d1(ST0), s1(MQ), MRM, FNONE, END),
        entr(Fbstp, 0xdf, 6, "fbstp", FPU.union(ST), d1(M80), s1(ST0), MRM, FNONE, END),
        entr(Fistp, 0xdf, 7, "fistp", FPU.union(ST), d1(MQ), s1(ST0), MRM, FNONE, END),
    ],
];

const fn fe(op: Opcode, code: u32, mn: &'static str, dsts: [OperandDesc; 2], srcs: [OperandDesc; 3]) -> Entry {
    ent(op, code, mn, FPU, dsts, srcs, MRM, FNONE, END)
}

const fn build_high_d8() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xd8c0 + i as u32;
        t[i] = fe(Fadd, c, "fadd", d1(ST0), s2(sti(i), ST0));
        t[8 + i] = fe(Fmul, c + 8, "fmul", d1(ST0), s2(sti(i), ST0));
        t[16 + i] = fe(Fcom, c + 16, "fcom", d0(), s2(sti(i), ST0));
        t[24 + i] = fe(Fcomp, c + 24, "fcomp", d0(), s2(sti(i), ST0));
        t[32 + i] = fe(Fsub, c + 32, "fsub", d1(ST0), s2(sti(i), ST0));
        t[40 + i] = fe(Fsubr, c + 40, "fsubr", d1(ST0), s2(sti(i), ST0));
        t[48 + i] = fe(Fdiv, c + 48, "fdiv", d1(ST0), s2(sti(i), ST0));
        t[56 + i] = fe(Fdivr, c + 56, "fdivr", d1(ST0), s2(sti(i), ST0));
        i += 1;
    }
    t
}

const fn build_high_d9() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xd9c0 + i as u32;
        t[i] = fe(Fld, c, "fld", d1(ST0), s1(sti(i)));
        t[8 + i] = fe(Fxch, c + 8, "fxch", d2(ST0, sti(i)), s2(sti(i), ST0));
        // D9 D8..DF: FSTP1, an undocumented FSTP duplicate
        t[24 + i] = fe(Fstp, c + 24, "fstp", d1(sti(i)), s1(ST0));
        i += 1;
    }
    t[16] = fe(Fnop, 0xd9d0, "fnop", d0(), s0());
    t[32] = fe(Fchs, 0xd9e0, "fchs", d1(ST0), s1(ST0));
    t[33] = fe(Fabs, 0xd9e1, "fabs", d1(ST0), s1(ST0));
    t[36] = fe(Ftst, 0xd9e4, "ftst", d0(), s1(ST0));
    t[37] = fe(Fxam, 0xd9e5, "fxam", d0(), s1(ST0));
    t[40] = fe(Fld1, 0xd9e8, "fld1", d1(ST0), s1(FPC));
    t[41] = fe(Fldl2t, 0xd9e9, "fldl2t", d1(ST0), s1(FPC));
    t[42] = fe(Fldl2e, 0xd9ea, "fldl2e", d1(ST0), s1(FPC));
    t[43] = fe(Fldpi, 0xd9eb, "fldpi", d1(ST0), s1(FPC));
    t[44] = fe(Fldlg2, 0xd9ec, "fldlg2", d1(ST0), s1(FPC));
    t[45] = fe(Fldln2, 0xd9ed, "fldln2", d1(ST0), s1(FPC));
    t[46] = fe(Fldz, 0xd9ee, "fldz", d1(ST0), s1(FPC));
    t[48] = fe(F2xm1, 0xd9f0, "f2xm1", d1(ST0), s1(ST0));
    t[49] = fe(Fyl2x, 0xd9f1, "fyl2x", d1(ST1), s2(ST0, ST1));
    t[50] = fe(Fptan, 0xd9f2, "fptan", d2(ST0, ST1), s1(ST0));
    t[51] = fe(Fpatan, 0xd9f3, "fpatan", d1(ST1), s2(ST0, ST1));
    t[52] = fe(Fxtract, 0xd9f4, "fxtract", d2(ST0, ST1), s1(ST0));
    t[53] = fe(Fprem1, 0xd9f5, "fprem1", d1(ST0), s2(ST0, ST1));
    t[54] = fe(Fdecstp, 0xd9f6, "fdecstp", d0(), s0());
    t[55] = fe(Fincstp, 0xd9f7, "fincstp", d0(), s0());
    t[56] = fe(Fprem, 0xd9f8, "fprem", d1(ST0), s2(ST0, ST1));
    t[57] = fe(Fyl2xp1, 0xd9f9, "fyl2xp1", d1(ST1), s2(ST0, ST1));
    t[58] = fe(Fsqrt, 0xd9fa, "fsqrt", d1(ST0), s1(ST0));
    t[59] = fe(Fsincos, 0xd9fb, "fsincos", d2(ST0, ST1), s1(ST0));
    t[60] = fe(Frndint, 0xd9fc, "frndint", d1(ST0), s1(ST0));
    t[61] = fe(Fscale, 0xd9fd, "fscale", d1(ST0), s2(ST0, ST1));
    t[62] = fe(Fsin, 0xd9fe, "fsin", d1(ST0), s1(ST0));
    t[63] = fe(Fcos, 0xd9ff, "fcos", d1(ST0), s1(ST0));
    t
}

const fn fcmov(op: Opcode, code: u32, mn: &'static str, i: usize, fl: crate::schema::flags::EflagsEffect) -> Entry {
    ent(op, code, mn, FPU, d1(ST0), s1(sti(i)), MRM.union(PREDCC), fl, END)
}

const fn build_high_da() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xdac0 + i as u32;
        t[i] = fcmov(Fcmovb, c, "fcmovb", i, FRC);
        t[8 + i] = fcmov(Fcmove, c + 8, "fcmove", i, FRZ);
        t[16 + i] = fcmov(Fcmovbe, c + 16, "fcmovbe", i, FRCZ);
        t[24 + i] = fcmov(Fcmovu, c + 24, "fcmovu", i, FRP);
        i += 1;
    }
    t[41] = fe(Fucompp, 0xdae9, "fucompp", d0(), s2(ST0, ST1));
    t
}

const fn build_high_db() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xdbc0 + i as u32;
        t[i] = fcmov(Fcmovnb, c, "fcmovnb", i, FRC);
        t[8 + i] = fcmov(Fcmovne, c + 8, "fcmovne", i, FRZ);
        t[16 + i] = fcmov(Fcmovnbe, c + 16, "fcmovnbe", i, FRCZ);
        t[24 + i] = fcmov(Fcmovnu, c + 24, "fcmovnu", i, FRP);
        t[40 + i] = ent(Fucomi, c + 40, "fucomi", FPU, d0(), s2(ST0, sti(i)), MRM, FWCZP, END);
        t[48 + i] = ent(Fcomi, c + 48, "fcomi", FPU, d0(), s2(ST0, sti(i)), MRM, FWCZP, END);
        i += 1;
    }
    t[34] = fe(Fnclex, 0xdbe2, "fnclex", d0(), s0());
    t[35] = fe(Fninit, 0xdbe3, "fninit", d0(), s0());
    t
}

const fn build_high_dc() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xdcc0 + i as u32;
        t[i] = fe(Fadd, c, "fadd", d1(sti(i)), s2(ST0, sti(i)));
        t[8 + i] = fe(Fmul, c + 8, "fmul", d1(sti(i)), s2(ST0, sti(i)));
        // DC D0..DF: FCOM2 / FCOMP3, undocumented duplicates
        t[16 + i] = fe(Fcom, c + 16, "fcom", d0(), s2(sti(i), ST0));
        t[24 + i] = fe(Fcomp, c + 24, "fcomp", d0(), s2(sti(i), ST0));
        t[32 + i] = fe(Fsubr, c + 32, "fsubr", d1(sti(i)), s2(ST0, sti(i)));
        t[40 + i] = fe(Fsub, c + 40, "fsub", d1(sti(i)), s2(ST0, sti(i)));
        t[48 + i] = fe(Fdivr, c + 48, "fdivr", d1(sti(i)), s2(ST0, sti(i)));
        t[56 + i] = fe(Fdiv, c + 56, "fdiv", d1(sti(i)), s2(ST0, sti(i)));
        i += 1;
    }
    t
}

const fn build_high_dd() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xddc0 + i as u32;
        t[i] = fe(Ffree, c, "ffree", d0(), s1(sti(i)));
        // DD C8..CF: FXCH4
        t[8 + i] = fe(Fxch, c + 8, "fxch", d2(ST0, sti(i)), s2(sti(i), ST0));
        t[16 + i] = fe(Fst, c + 16, "fst", d1(sti(i)), s1(ST0));
        t[24 + i] = fe(Fstp, c + 24, "fstp", d1(sti(i)), s1(ST0));
        t[32 + i] = fe(Fucom, c + 32, "fucom", d0(), s2(sti(i), ST0));
        t[40 + i] = fe(Fucomp, c + 40, "fucomp", d0(), s2(sti(i), ST0));
        i += 1;
    }
    t
}

const fn build_high_de() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xdec0 + i as u32;
        t[i] = fe(Faddp, c, "faddp", d1(sti(i)), s2(ST0, sti(i)));
        t[8 + i] = fe(Fmulp, c + 8, "fmulp", d1(sti(i)), s2(ST0, sti(i)));
        // DE D0..D7: FCOMP5
        t[16 + i] = fe(Fcomp, c + 16, "fcomp", d0(), s2(sti(i), ST0));
        t[32 + i] = fe(Fsubrp, c + 32, "fsubrp", d1(sti(i)), s2(ST0, sti(i)));
        t[40 + i] = fe(Fsubp, c + 40, "fsubp", d1(sti(i)), s2(ST0, sti(i)));
        t[48 + i] = fe(Fdivrp, c + 48, "fdivrp", d1(sti(i)), s2(ST0, sti(i)));
        t[56 + i] = fe(Fdivp, c + 56, "fdivp", d1(sti(i)), s2(ST0, sti(i)));
        i += 1;
    }
    t[25] = fe(Fcompp, 0xded9, "fcompp", d0(), s2(ST0, ST1));
    t
}

const fn build_high_df() -> [Entry; 64] {
    let mut t = [IE; 64];
    let mut i = 0;
    while i < 8 {
        let c = 0xdfc0 + i as u32;
        // DF C0..C7: FFREEP, undocumented but widely implemented
        t[i] = fe(Ffreep, c, "ffreep", d0(), s1(sti(i)));
        // DF C8..CF: FXCH7; D0..DF: FSTP8 / FSTP9
        t[8 + i] = fe(Fxch, c + 8, "fxch", d2(ST0, sti(i)), s2(sti(i), ST0));
        t[16 + i] = fe(Fstp, c + 16, "fstp", d1(sti(i)), s1(ST0));
        t[24 + i] = fe(Fstp, c + 24, "fstp", d1(sti(i)), s1(ST0));
        t[40 + i] = ent(Fucomip, c + 40, "fucomip", FPU, d0(), s2(ST0, sti(i)), MRM, FWCZP, END);
        t[48 + i] = ent(Fcomip, c + 48, "fcomip", FPU, d0(), s2(ST0, sti(i)), MRM, FWCZP, END);
        i += 1;
    }
    t[32] = ent(Fnstsw, 0xdfe0, "fnstsw", FPU.union(SYS), d1(AX), s0(), MRM, FNONE, END);
    t
}

pub(crate) static FLOAT_HIGH: [[Entry; 64]; 8] = [
    build_high_d8(),
    build_high_d9(),
    build_high_da(),
    build_high_db(),
    build_high_dc(),
    build_high_dd(),
    build_high_de(),
    build_high_df(),
];
