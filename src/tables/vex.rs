//! Families keyed on the extended-prefix machinery: the VEX/EVEX/XOP
//! introducer dispatch rows, the mode rows for the REX byte range, and the
//! W/L-selected sub-tables, plus the XOP opcode maps.

use super::defs::*;
use super::groups::Grp;
use crate::schema::flags::Attrs;
use crate::schema::opcode::Opcode::*;
use crate::template::DispatchKind::*;
use crate::template::Mand::P66;
use crate::template::{Entry, PrefixEffect};

/// VEX.W rows: index 0 for W=0, 1 for W=1.
#[repr(u8)]
pub(crate) enum Wv {
    K90np,
    K90p66,
    K91np,
    K91p66,
    K92f2,
    K93f2,
    Pgather90,
    Pgather91,
    Gather92,
    Gather93,
    Fma98,
    FmaA8,
    FmaB8,
}

/// EVEX (W, b) rows: index is `(W << 1) | b`.
#[repr(u8)]
pub(crate) enum Wb {
    Add58np,
    Add58f3,
    Add58p66,
    Add58f2,
    Mul59np,
    Mul59p66,
    Sub5Cnp,
    Sub5Cp66,
    Div5Enp,
    Div5Ep66,
    Min5Dnp,
    Min5Dp66,
    Max5Fnp,
    Max5Fp66,
    Sqrt51np,
    Sqrt51p66,
    Popcnt55,
}

/// Legacy/VEX/EVEX three-way rows.
#[repr(u8)]
pub(crate) enum Evr {
    Ldmxcsr,
    Stmxcsr,
    Set90,
    Set91,
    Set92,
    Set93,
}

const fn x64row(table: u8) -> crate::template::EntryRef {
    crate::template::EntryRef::Family(X64Ext, table, 0)
}

/// 0x40..0x4F plus 0x63: one-byte opcodes that change meaning in 64-bit mode.
/// Index 0 is the 32-bit reading, 1 the 64-bit one.
pub(crate) static X64_EXT: [[Entry; 2]; 17] = [
    [ent(Inc, 0x40, "inc", INT, d1(XAX), s1(XAX), I64, FWNC, x64row(1)), pfx(PrefixEffect::Rex, "rex")],
    [ent(Inc, 0x41, "inc", INT, d1(XCX), s1(XCX), I64, FWNC, x64row(2)), pfx(PrefixEffect::Rex, "rex.b")],
    [ent(Inc, 0x42, "inc", INT, d1(XDX), s1(XDX), I64, FWNC, x64row(3)), pfx(PrefixEffect::Rex, "rex.x")],
    [ent(Inc, 0x43, "inc", INT, d1(XBX), s1(XBX), I64, FWNC, x64row(4)), pfx(PrefixEffect::Rex, "rex.xb")],
    [ent(Inc, 0x44, "inc", INT, d1(XSP), s1(XSP), I64, FWNC, x64row(5)), pfx(PrefixEffect::Rex, "rex.r")],
    [ent(Inc, 0x45, "inc", INT, d1(XBP), s1(XBP), I64, FWNC, x64row(6)), pfx(PrefixEffect::Rex, "rex.rb")],
    [ent(Inc, 0x46, "inc", INT, d1(XSI), s1(XSI), I64, FWNC, x64row(7)), pfx(PrefixEffect::Rex, "rex.rx")],
    [ent(Inc, 0x47, "inc", INT, d1(XDI), s1(XDI), I64, FWNC, END), pfx(PrefixEffect::Rex, "rex.rxb")],
    [ent(Dec, 0x48, "dec", INT, d1(XAX), s1(XAX), I64, FWNC, x64row(9)), pfx(PrefixEffect::Rex, "rex.w")],
    [ent(Dec, 0x49, "dec", INT, d1(XCX), s1(XCX), I64, FWNC, x64row(10)), pfx(PrefixEffect::Rex, "rex.wb")],
    [ent(Dec, 0x4a, "dec", INT, d1(XDX), s1(XDX), I64, FWNC, x64row(11)), pfx(PrefixEffect::Rex, "rex.wx")],
    [ent(Dec, 0x4b, "dec", INT, d1(XBX), s1(XBX), I64, FWNC, x64row(12)), pfx(PrefixEffect::Rex, "rex.wxb")],
    [ent(Dec, 0x4c, "dec", INT, d1(XSP), s1(XSP), I64, FWNC, x64row(13)), pfx(PrefixEffect::Rex, "rex.wr")],
    [ent(Dec, 0x4d, "dec", INT, d1(XBP), s1(XBP), I64, FWNC, x64row(14)), pfx(PrefixEffect::Rex, "rex.wrb")],
    [ent(Dec, 0x4e, "dec", INT, d1(XSI), s1(XSI), I64, FWNC, x64row(15)), pfx(PrefixEffect::Rex, "rex.wrx")],
    [ent(Dec, 0x4f, "dec", INT, d1(XDI), s1(XDI), I64, FWNC, END), pfx(PrefixEffect::Rex, "rex.wrxb")],
    [
        ent(Arpl, 0x63, "arpl", SYS, d1(EW), s1(GW), MRM.union(I64), FWZ, END),
        ent(Movsxd, 0x63, "movsxd", INT.union(CVT), d1(GV), s1(ED), MRM.union(O64), FNONE, END),
    ],
];

/// 0x90 splits on REX.B: plain NOP, or an XCHG with r8.
pub(crate) static REX_B_EXT: [[Entry; 2]; 1] = [[
    ent(Nop, 0x90, "nop", UNC, d0(), s0(), NA, FNONE, END),
    ent(Xchg, 0x90, "xchg", INT, d2(XAX, XAX), s2(XAX, XAX), NA, FNONE, END),
]];

/// 0xC4 / 0xC5: LES/LDS in 32-bit mode, VEX introducers otherwise.
pub(crate) static VEX_PREFIX_EXT: [[Entry; 2]; 2] = [
    [
        ent(Les, 0xc4, "les", INT.union(LD), d2(GV, SEG_ES), s1(MP), MRM.union(I64), FNONE, END),
        pfx(PrefixEffect::Vex3, "vex"),
    ],
    [
        ent(Lds, 0xc5, "lds", INT.union(LD), d2(GV, SEG_DS), s1(MP), MRM.union(I64), FNONE, END),
        pfx(PrefixEffect::Vex2, "vex"),
    ],
];

/// 0x8F: group 1a POP, or the XOP introducer when reg != 0.
pub(crate) static XOP_PREFIX_EXT: [[Entry; 2]; 1] = [[
    dis(Extension, Grp::G1a as u8, "(grp 1a)"),
    pfx(PrefixEffect::Xop, "xop"),
]];

/// 0x62: BOUND in 32-bit mode, the EVEX introducer otherwise.
pub(crate) static EVEX_PREFIX_EXT: [[Entry; 2]; 1] = [[
    ent(Bound, 0x62, "bound", INT, d0(), s2(GV, MA), MRM.union(I64), FNONE, END),
    pfx(PrefixEffect::Evex, "evex"),
]];

/// 0F 77: EMMS without VEX, VZEROUPPER/VZEROALL by VEX.L.
pub(crate) static VEX_L_EXT: [[Entry; 3]; 1] = [[
    ent(Emms, 0x0f77, "emms", SSE.union(SYS), d0(), s0(), NA, FNONE, END),
    ent(Vzeroupper, 0x0f77, "vzeroupper", SSE.union(SYS), d0(), s0(), VEX0, FNONE, END),
    ent(Vzeroall, 0x0f77, "vzeroall", SSE.union(SYS), d0(), s0(), VEX0.union(Attrs::VEX_L_1), FNONE, END),
]];

pub(crate) static VEX_W_EXT: [[Entry; 2]; 13] = [
    // 0F 90: kmov load/reg forms
    [
        ent(Kmovw, 0x0f90, "kmovw", SSE.union(LD), d1(KW), s1(KRW), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        ent(Kmovq, 0x0f90, "kmovq", SSE.union(LD), d1(KQ), s1(KRQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
    ],
    [
        entp(Kmovb, P66, 0x0f90, "kmovb", SSE.union(LD), d1(KB), s1(KRB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        entp(Kmovd, P66, 0x0f90, "kmovd", SSE.union(LD), d1(KD), s1(KRD), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
    ],
    // 0F 91: kmov stores
    [
        ent(Kmovw, 0x0f91, "kmovw", SSE.union(ST), d1(KRW), s1(KW), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        ent(Kmovq, 0x0f91, "kmovq", SSE.union(ST), d1(KRQ), s1(KQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
    ],
    [
        entp(Kmovb, P66, 0x0f91, "kmovb", SSE.union(ST), d1(KRB), s1(KB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        entp(Kmovd, P66, 0x0f91, "kmovd", SSE.union(ST), d1(KRD), s1(KD), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
    ],
    // 0F 92 / 93 with F2: kmovd/kmovq against general registers
    [
        entp(Kmovd, crate::template::Mand::PF2, 0x0f92, "kmovd", SSE, d1(KD), s1(RD), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        entp(Kmovq, crate::template::Mand::PF2, 0x0f92, "kmovq", SSE, d1(KQ), s1(RY), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
    ],
    [
        entp(Kmovd, crate::template::Mand::PF2, 0x0f93, "kmovd", SSE, d1(GD), s1(KD), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        entp(Kmovq, crate::template::Mand::PF2, 0x0f93, "kmovq", SSE, d1(GY), s1(KQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
    ],
    // 0F 38 90/91: integer gathers (mask register in vvvv is also written)
    [
        entp(Vpgatherdd, P66, 0x0f3890, "vpgatherdd", SSE.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
        entp(Vpgatherdq, P66, 0x0f3890, "vpgatherdq", SSE.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
    ],
    [
        entp(Vpgatherqd, P66, 0x0f3891, "vpgatherqd", SSE.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
        entp(Vpgatherqq, P66, 0x0f3891, "vpgatherqq", SSE.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
    ],
    // 0F 38 92/93: floating-point gathers
    [
        entp(Vgatherdps, P66, 0x0f3892, "vgatherdps", SSEFP.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
        entp(Vgatherdpd, P66, 0x0f3892, "vgatherdpd", SSEFP.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
    ],
    [
        entp(Vgatherqps, P66, 0x0f3893, "vgatherqps", SSEFP.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
        entp(Vgatherqpd, P66, 0x0f3893, "vgatherqpd", SSEFP.union(LD), d2(VX, HXV), s2(VMX, HXV), VEXMP, FNONE, END),
    ],
    // 0F 38 98/A8/B8: FMA, ps by W0 and pd by W1
    [
        entp(Vfmadd132ps, P66, 0x0f3898, "vfmadd132ps", SSEFP.union(MTH), d1(VX), s3(HXV, WX, VX), VEXMP, FNONE, END),
        entp(Vfmadd132pd, P66, 0x0f3898, "vfmadd132pd", SSEFP.union(MTH), d1(VX), s3(HXV, WX, VX), VEXMP, FNONE, END),
    ],
    [
        entp(Vfmadd213ps, P66, 0x0f38a8, "vfmadd213ps", SSEFP.union(MTH), d1(VX), s3(HXV, WX, VX), VEXMP, FNONE, END),
        entp(Vfmadd213pd, P66, 0x0f38a8, "vfmadd213pd", SSEFP.union(MTH), d1(VX), s3(HXV, WX, VX), VEXMP, FNONE, END),
    ],
    [
        entp(Vfmadd231ps, P66, 0x0f38b8, "vfmadd231ps", SSEFP.union(MTH), d1(VX), s3(HXV, WX, VX), VEXMP, FNONE, END),
        entp(Vfmadd231pd, P66, 0x0f38b8, "vfmadd231pd", SSEFP.union(MTH), d1(VX), s3(HXV, WX, VX), VEXMP, FNONE, END),
    ],
];

const ER: Attrs = Attrs::EVEX_B_SAE.union(Attrs::EVEX_LL_ER);
const SAE: Attrs = Attrs::EVEX_B_SAE;

/// Full-vector EVEX arithmetic row pair: the b=1 entry doubles as the
/// embedded-broadcast form for memory operands.
const fn evex_fv_np(op: crate::schema::opcode::Opcode, code: u32, mn: &'static str, extra_b: Attrs) -> [Entry; 4] {
    [
        ent(op, code, mn, SSEFP.union(MTH), d1(VE), s3(HE, WE, KA), fv(EVXM), FNONE, END),
        ent(op, code, mn, SSEFP.union(MTH), d1(VE), s3(HE, WE, KA), fv(EVXM).union(extra_b), FNONE, END),
        IE,
        IE,
    ]
}

const fn evex_fv_p66(op: crate::schema::opcode::Opcode, code: u32, mn: &'static str, extra_b: Attrs) -> [Entry; 4] {
    [
        IE,
        IE,
        entp(op, P66, code, mn, SSEFP.union(MTH), d1(VE), s3(HE, WE, KA), fv(EVXMP), FNONE, END),
        entp(op, P66, code, mn, SSEFP.union(MTH), d1(VE), s3(HE, WE, KA), fv(EVXMP).union(extra_b), FNONE, END),
    ]
}

pub(crate) static EVEX_WB_EXT: [[Entry; 4]; 17] = [
    evex_fv_np(Vaddps, 0x0f58, "vaddps", ER),
    // vaddss: W must be 0, tuple1 scalar
    [
        entp(Vaddss, crate::template::Mand::PF3, 0x0f58, "vaddss", SSEFP.union(MTH), d1(VSS), s3(HSS, WSS, KA), t1s(EVXMP), FNONE, END),
        entp(Vaddss, crate::template::Mand::PF3, 0x0f58, "vaddss", SSEFP.union(MTH), d1(VSS), s3(HSS, WSS, KA), t1s(EVXMP).union(ER), FNONE, END),
        IE,
        IE,
    ],
    evex_fv_p66(Vaddpd, 0x0f58, "vaddpd", ER),
    // vaddsd: W must be 1
    [
        IE,
        IE,
        entp(Vaddsd, crate::template::Mand::PF2, 0x0f58, "vaddsd", SSEFP.union(MTH), d1(VSD), s3(HSD, WSD, KA), t1s(EVXMP), FNONE, END),
        entp(Vaddsd, crate::template::Mand::PF2, 0x0f58, "vaddsd", SSEFP.union(MTH), d1(VSD), s3(HSD, WSD, KA), t1s(EVXMP).union(ER), FNONE, END),
    ],
    evex_fv_np(Vmulps, 0x0f59, "vmulps", ER),
    evex_fv_p66(Vmulpd, 0x0f59, "vmulpd", ER),
    evex_fv_np(Vsubps, 0x0f5c, "vsubps", ER),
    evex_fv_p66(Vsubpd, 0x0f5c, "vsubpd", ER),
    evex_fv_np(Vdivps, 0x0f5e, "vdivps", ER),
    evex_fv_p66(Vdivpd, 0x0f5e, "vdivpd", ER),
    evex_fv_np(Vminps, 0x0f5d, "vminps", SAE),
    evex_fv_p66(Vminpd, 0x0f5d, "vminpd", SAE),
    evex_fv_np(Vmaxps, 0x0f5f, "vmaxps", SAE),
    evex_fv_p66(Vmaxpd, 0x0f5f, "vmaxpd", SAE),
    // vsqrtps / vsqrtpd take no vvvv operand
    [
        ent(Vsqrtps, 0x0f51, "vsqrtps", SSEFP.union(MTH), d1(VE), s2(WE, KA), fv(EVXM), FNONE, END),
        ent(Vsqrtps, 0x0f51, "vsqrtps", SSEFP.union(MTH), d1(VE), s2(WE, KA), fv(EVXM).union(ER), FNONE, END),
        IE,
        IE,
    ],
    [
        IE,
        IE,
        entp(Vsqrtpd, P66, 0x0f51, "vsqrtpd", SSEFP.union(MTH), d1(VE), s2(WE, KA), fv(EVXMP), FNONE, END),
        entp(Vsqrtpd, P66, 0x0f51, "vsqrtpd", SSEFP.union(MTH), d1(VE), s2(WE, KA), fv(EVXMP).union(ER), FNONE, END),
    ],
    // 0F 38 55: element population count, dword by W0 and qword by W1
    [
        entp(Vpopcntd, P66, 0x0f3855, "vpopcntd", SSE.union(MTH), d1(VE), s2(WE, KA), fv(EVXMP), FNONE, END),
        entp(Vpopcntd, P66, 0x0f3855, "vpopcntd", SSE.union(MTH), d1(VE), s2(WE, KA), fv(EVXMP), FNONE, END),
        entp(Vpopcntq, P66, 0x0f3855, "vpopcntq", SSE.union(MTH), d1(VE), s2(WE, KA), fv(EVXMP), FNONE, END),
        entp(Vpopcntq, P66, 0x0f3855, "vpopcntq", SSE.union(MTH), d1(VE), s2(WE, KA), fv(EVXMP), FNONE, END),
    ],
];

pub(crate) static E_VEX_EXT: [[Entry; 3]; 6] = [
    // 0F AE /2 memory
    [
        entr(Ldmxcsr, 0x0fae, 2, "ldmxcsr", SSE.union(SYS), d0(), s1(MD), MRM, FNONE, END),
        entr(Vldmxcsr, 0x0fae, 2, "vldmxcsr", SSE.union(SYS), d0(), s1(MD), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        IE,
    ],
    // 0F AE /3 memory
    [
        entr(Stmxcsr, 0x0fae, 3, "stmxcsr", SSE.union(SYS), d1(MD), s0(), MRM, FNONE, END),
        entr(Vstmxcsr, 0x0fae, 3, "vstmxcsr", SSE.union(SYS), d1(MD), s0(), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        IE,
    ],
    // 0F 90..93: setcc against the opmask moves
    [
        ent(Seto, 0x0f90, "seto", INT, d1(EB), s0(), MRM.union(PREDCC), FRO, END),
        dis(PrefixExt, super::prefix_ext::Pe::Kmov90 as u8, "(kmov)"),
        IE,
    ],
    [
        ent(Setno, 0x0f91, "setno", INT, d1(EB), s0(), MRM.union(PREDCC), FRO, END),
        dis(PrefixExt, super::prefix_ext::Pe::Kmov91 as u8, "(kmov)"),
        IE,
    ],
    [
        ent(Setb, 0x0f92, "setb", INT, d1(EB), s0(), MRM.union(PREDCC), FRC, END),
        dis(PrefixExt, super::prefix_ext::Pe::Kmov92 as u8, "(kmov)"),
        IE,
    ],
    [
        ent(Setnb, 0x0f93, "setnb", INT, d1(EB), s0(), MRM.union(PREDCC), FRC, END),
        dis(PrefixExt, super::prefix_ext::Pe::Kmov93 as u8, "(kmov)"),
        IE,
    ],
];

/// XOP opcode map 8 (four-operand forms).
pub(crate) static XOP_8: [Entry; 256] = build_xop8();
/// XOP opcode map 9 (TBM groups and arithmetic).
pub(crate) static XOP_9: [Entry; 256] = build_xop9();
/// XOP opcode map 10 (immediate forms).
pub(crate) static XOP_A: [Entry; 256] = build_xopa();

const fn build_xop8() -> [Entry; 256] {
    let mut t = [IE; 256];
    t[0xa2] = ent(Vpcmov, 0x8f08a2, "vpcmov", SSE, d1(VX), s3(HXV, WX, LX), VEXM, FNONE, END);
    t
}

const fn build_xop9() -> [Entry; 256] {
    let mut t = [IE; 256];
    t[0x01] = dis(Extension, Grp::Tbm1 as u8, "(tbm grp 1)");
    t[0x02] = dis(Extension, Grp::Tbm2 as u8, "(tbm grp 2)");
    t
}

const fn build_xopa() -> [Entry; 256] {
    let mut t = [IE; 256];
    t[0x10] = ent(Bextr, 0x8f0a10, "bextr", INT, d1(GY), s2(EY, ID), VEXM, FW6, END);
    t
}
