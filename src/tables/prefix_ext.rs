//! The prefix-extensions family: one row per opcode whose meaning depends on
//! the mandatory prefix and on VEX/EVEX encoding.
//!
//! Row layout: index 0..3 selects by mandatory prefix (none / F3 / 66 / F2),
//! 4..7 the same with VEX, 8..11 the same with EVEX. The resolver treats an
//! empty 66 slot as "0x66 is only a size modifier" and falls back to slot 0.

use super::defs::*;
use super::vex::{Wb, Wv};
use crate::schema::flags::Attrs;
use crate::schema::opcode::Opcode::*;
use crate::template::DispatchKind::*;
use crate::template::Entry;
use crate::template::Mand::{P66, PF2, PF3};

/// Row indices into [`PREFIX_EXT`], in table order.
#[repr(u8)]
pub(crate) enum Pe {
    Nop90,
    Movlps13,
    Movhps17,
    Vmptrld,
    Psrlw71,
    Psraw71,
    Psllw71,
    Psrld72,
    Psrad72,
    Pslld72,
    Psrlq73,
    Psllq73,
    Movups10,
    Movups11,
    Movlps12,
    Unpck14,
    Unpck15,
    Movhps16,
    Movaps28,
    Movaps29,
    Cvt2A,
    Movnt2B,
    Cvtt2C,
    Cvt2D,
    Ucomis2E,
    Comis2F,
    Movmsk50,
    Sqrt51,
    Rsqrt52,
    Rcp53,
    And54,
    Andn55,
    Or56,
    Xor57,
    Add58,
    Mul59,
    Cvt5A,
    Cvt5B,
    Sub5C,
    Min5D,
    Div5E,
    Max5F,
    Punpcklbw60,
    Punpcklwd61,
    Punpckldq62,
    Packsswb63,
    Pcmpgtb64,
    Pcmpgtw65,
    Pcmpgtd66,
    Packuswb67,
    Punpckhbw68,
    Punpckhwd69,
    Punpckhdq6A,
    Packssdw6B,
    Punpcklqdq6C,
    Punpckhqdq6D,
    Movd6E,
    Movq6F,
    Pshuf70,
    Pcmpeqb74,
    Pcmpeqw75,
    Pcmpeqd76,
    Hadd7C,
    Hsub7D,
    Movd7E,
    Movq7F,
    Kmov90,
    Kmov91,
    Kmov92,
    Kmov93,
    PopcntB8,
    BsfBC,
    BsrBD,
    CmpC2,
    PinsrwC4,
    PextrwC5,
    ShufC6,
    AddsubD0,
    PsrlwD1,
    PsrldD2,
    PsrlqD3,
    PaddqD4,
    PmullwD5,
    MovqD6,
    PmovmskbD7,
    PsubusbD8,
    PsubuswD9,
    PminubDA,
    PandDB,
    PaddusbDC,
    PadduswDD,
    PmaxubDE,
    PandnDF,
    PavgbE0,
    PsrawE1,
    PsradE2,
    PavgwE3,
    PmulhuwE4,
    PmulhwE5,
    CvtE6,
    MovntE7,
    PsubsbE8,
    PsubswE9,
    PminswEA,
    PorEB,
    PaddsbEC,
    PaddswED,
    PmaxswEE,
    PxorEF,
    LddquF0,
    PsllwF1,
    PslldF2,
    PsllqF3,
    PmuludqF4,
    PmaddwdF5,
    PsadbwF6,
    MaskmovF7,
    PsubbF8,
    PsubwF9,
    PsubdFA,
    PsubqFB,
    PaddbFC,
    PaddwFD,
    PadddFE,
    Pshufb3800,
    Phaddw3801,
    Phaddd3802,
    Phaddsw3803,
    Pmaddubsw3804,
    Phsubw3805,
    Phsubd3806,
    Phsubsw3807,
    Psignb3808,
    Psignw3809,
    Psignd380A,
    Pmulhrsw380B,
    Pblendvb3810,
    Blendvps3814,
    Blendvpd3815,
    Ptest3817,
    Vbroadcastss3818,
    Vbroadcastsd3819,
    Pabsb381C,
    Pabsw381D,
    Pabsd381E,
    Pmovsxbw3820,
    Pmovsxbd3821,
    Pmovsxbq3822,
    Pmovsxwd3823,
    Pmovsxwq3824,
    Pmovsxdq3825,
    Pmuldq3828,
    Pcmpeqq3829,
    Movntdqa382A,
    Packusdw382B,
    Pmovzxbw3830,
    Pmovzxbd3831,
    Pmovzxbq3832,
    Pmovzxwd3833,
    Pmovzxwq3834,
    Pmovzxdq3835,
    Pcmpgtq3837,
    Pminsb3838,
    Pminsd3839,
    Pminuw383A,
    Pminud383B,
    Pmaxsb383C,
    Pmaxsd383D,
    Pmaxuw383E,
    Pmaxud383F,
    Pmulld3840,
    Phminposuw3841,
    Vpopcnt3855,
    Vpbroadcastd3858,
    Vpbroadcastq3859,
    Vpbroadcastb3878,
    Vpbroadcastw3879,
    Gather3890,
    Gather3891,
    Gather3892,
    Gather3893,
    Fma3898,
    Fma38A8,
    Fma38B8,
    Aesimc38DB,
    Aesenc38DC,
    Aesenclast38DD,
    Aesdec38DE,
    Aesdeclast38DF,
    MovbeF0,
    MovbeF1,
    AndnF2,
    BzhiF5,
    AdcxF6,
    BextrF7,
    Roundps3A08,
    Roundpd3A09,
    Roundss3A0A,
    Roundsd3A0B,
    Blendps3A0C,
    Blendpd3A0D,
    Pblendw3A0E,
    Palignr3A0F,
    Pextrb3A14,
    Pextrw3A15,
    Pextrd3A16,
    Extractps3A17,
    Vinsertf3A18,
    Vextractf3A19,
    Pinsrb3A20,
    Insertps3A21,
    Pinsrd3A22,
    Dpps3A40,
    Dppd3A41,
    Mpsadbw3A42,
    Pclmul3A44,
    Vblendvps3A4A,
    Vblendvpd3A4B,
    Vpblendvb3A4C,
    Pcmpestrm3A60,
    Pcmpestri3A61,
    Pcmpistrm3A62,
    Pcmpistri3A63,
    Aeskeygen3ADF,
    Vperm3A06,
}

pub(crate) static PREFIX_EXT: [[Entry; 12]; 225] = [
    // 0x90: nop / pause
    [
        dis(RexBExt, 0, "(nop/xchg)"),
        entp(Pause, PF3, 0x90, "pause", SYS, d0(), s0(), Attrs::REQUIRES_PREFIX, FNONE, END),
        ent(Nop, 0x90, "nop", UNC, d0(), s0(), NA, FNONE, END),
        ent(Nop, 0x90, "nop", UNC, d0(), s0(), NA, FNONE, END),
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F 13: movlps/movlpd stores
    [
        ent(Movlps, 0x0f13, "movlps", SSEFP.union(ST), d1(MQ), s1(VQ), MRM, FNONE, END),
        IE,
        entp(Movlpd, P66, 0x0f13, "movlpd", SSEFP.union(ST), d1(MQ), s1(VSD), MRMP, FNONE, END),
        IE,
        ent(Vmovlps, 0x0f13, "vmovlps", SSEFP.union(ST), d1(MQ), s1(VDQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        entp(Vmovlpd, P66, 0x0f13, "vmovlpd", SSEFP.union(ST), d1(MQ), s1(VDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 17: movhps/movhpd stores
    [
        ent(Movhps, 0x0f17, "movhps", SSEFP.union(ST), d1(MQ), s1(VQ), MRM, FNONE, END),
        IE,
        entp(Movhpd, P66, 0x0f17, "movhpd", SSEFP.union(ST), d1(MQ), s1(VSD), MRMP, FNONE, END),
        IE,
        ent(Vmovhps, 0x0f17, "vmovhps", SSEFP.union(ST), d1(MQ), s1(VDQ), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        entp(Vmovhpd, P66, 0x0f17, "vmovhpd", SSEFP.union(ST), d1(MQ), s1(VDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F C7 /6 memory: vmptrld / vmxon / vmclear
    [
        entr(Vmptrld, 0x0fc7, 6, "vmptrld", SYS, d0(), s1(MQ), MRM, FNONE, END),
        entpr(Vmxon, PF3, 0x0fc7, 6, "vmxon", SYS, d0(), s1(MQ), MRMP, FNONE, END),
        entpr(Vmclear, P66, 0x0fc7, 6, "vmclear", SYS, d0(), s1(MQ), MRMP, FNONE, END),
        IE,
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F 71 /2: psrlw by immediate
    [
        entr(Psrlw, 0x0f71, 2, "psrlw", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psrlw, P66, 0x0f71, 2, "psrlw", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsrlw, P66, 0x0f71, 2, "vpsrlw", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 71 /4: psraw by immediate
    [
        entr(Psraw, 0x0f71, 4, "psraw", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psraw, P66, 0x0f71, 4, "psraw", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsraw, P66, 0x0f71, 4, "vpsraw", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 71 /6: psllw by immediate
    [
        entr(Psllw, 0x0f71, 6, "psllw", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psllw, P66, 0x0f71, 6, "psllw", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsllw, P66, 0x0f71, 6, "vpsllw", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 72 /2: psrld by immediate
    [
        entr(Psrld, 0x0f72, 2, "psrld", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psrld, P66, 0x0f72, 2, "psrld", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsrld, P66, 0x0f72, 2, "vpsrld", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 72 /4: psrad by immediate
    [
        entr(Psrad, 0x0f72, 4, "psrad", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psrad, P66, 0x0f72, 4, "psrad", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsrad, P66, 0x0f72, 4, "vpsrad", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 72 /6: pslld by immediate
    [
        entr(Pslld, 0x0f72, 6, "pslld", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Pslld, P66, 0x0f72, 6, "pslld", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpslld, P66, 0x0f72, 6, "vpslld", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 73 /2: psrlq by immediate
    [
        entr(Psrlq, 0x0f73, 2, "psrlq", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psrlq, P66, 0x0f73, 2, "psrlq", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsrlq, P66, 0x0f73, 2, "vpsrlq", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 73 /6: psllq by immediate
    [
        entr(Psllq, 0x0f73, 6, "psllq", SSE, d1(QQ), s2(IB, QQ), MRM, FNONE, END),
        IE,
        entpr(Psllq, P66, 0x0f73, 6, "psllq", SSE, d1(WDQ), s2(IB, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entpr(Vpsllq, P66, 0x0f73, 6, "vpsllq", SSE, d1(HXV), s2(IB, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 10: movups / movss / movupd / movsd loads
    [
        ent(Movups, 0x0f10, "movups", SSEFP.union(LD), d1(VDQ), s1(WDQ), MRM, FNONE, pe(Pe::Movups11 as u8, 0)),
        entp(Movss, PF3, 0x0f10, "movss", SSEFP.union(LD), d1(VSS), s1(WSS), MRMP, FNONE, pe(Pe::Movups11 as u8, 1)),
        entp(Movupd, P66, 0x0f10, "movupd", SSEFP.union(LD), d1(VDQ), s1(WDQ), MRMP, FNONE, pe(Pe::Movups11 as u8, 2)),
        entp(Movsd, PF2, 0x0f10, "movsd", SSEFP.union(LD), d1(VSD), s1(WSD), MRMP, FNONE, pe(Pe::Movups11 as u8, 3)),
        ent(Vmovups, 0x0f10, "vmovups", SSEFP.union(LD), d1(VX), s1(WX), VEXM, FNONE, pe(Pe::Movups11 as u8, 4)),
        entp(Vmovss, PF3, 0x0f10, "vmovss", SSEFP.union(LD), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, pe(Pe::Movups11 as u8, 5)),
        entp(Vmovupd, P66, 0x0f10, "vmovupd", SSEFP.union(LD), d1(VX), s1(WX), VEXMP, FNONE, pe(Pe::Movups11 as u8, 6)),
        entp(Vmovsd, PF2, 0x0f10, "vmovsd", SSEFP.union(LD), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, pe(Pe::Movups11 as u8, 7)),
        ent(Vmovups, 0x0f10, "vmovups", SSEFP.union(LD), d1(VE), s2(WE, KA), fvm(EVXM), FNONE, pe(Pe::Movups11 as u8, 8)),
        IE,
        entp(Vmovupd, P66, 0x0f10, "vmovupd", SSEFP.union(LD), d1(VE), s2(WE, KA), fvm(EVXMP), FNONE, pe(Pe::Movups11 as u8, 10)),
        IE,
    ],
    // 0F 11: the store forms
    [
        ent(Movups, 0x0f11, "movups", SSEFP.union(ST), d1(WDQ), s1(VDQ), MRM, FNONE, END),
        entp(Movss, PF3, 0x0f11, "movss", SSEFP.union(ST), d1(WSS), s1(VSS), MRMP, FNONE, END),
        entp(Movupd, P66, 0x0f11, "movupd", SSEFP.union(ST), d1(WDQ), s1(VDQ), MRMP, FNONE, END),
        entp(Movsd, PF2, 0x0f11, "movsd", SSEFP.union(ST), d1(WSD), s1(VSD), MRMP, FNONE, END),
        ent(Vmovups, 0x0f11, "vmovups", SSEFP.union(ST), d1(WX), s1(VX), VEXM, FNONE, END),
        entp(Vmovss, PF3, 0x0f11, "vmovss", SSEFP.union(ST), d1(WSS), s2(HSS, VSS), VEXMP, FNONE, END),
        entp(Vmovupd, P66, 0x0f11, "vmovupd", SSEFP.union(ST), d1(WX), s1(VX), VEXMP, FNONE, END),
        entp(Vmovsd, PF2, 0x0f11, "vmovsd", SSEFP.union(ST), d1(WSD), s2(HSD, VSD), VEXMP, FNONE, END),
        ent(Vmovups, 0x0f11, "vmovups", SSEFP.union(ST), d1(WE), s2(VE, KA), fvm(EVXM), FNONE, END),
        IE,
        entp(Vmovupd, P66, 0x0f11, "vmovupd", SSEFP.union(ST), d1(WE), s2(VE, KA), fvm(EVXMP), FNONE, END),
        IE,
    ],
    // 0F 12: movlps/movhlps via mod, movsldup, movlpd, movddup
    [
        dis(ModExt, super::groups::Mx::Movlps12 as u8, "(movlps)"),
        entp(Movsldup, PF3, 0x0f12, "movsldup", SSEFP, d1(VDQ), s1(WDQ), MRMP, FNONE, END),
        entp(Movlpd, P66, 0x0f12, "movlpd", SSEFP.union(LD), d1(VSD), s1(MQ), MRMP, FNONE, pe(Pe::Movlps13 as u8, 2)),
        entp(Movddup, PF2, 0x0f12, "movddup", SSEFP, d1(VDQ), s1(WQ), MRMP, FNONE, END),
        dis(ModExt, super::groups::Mx::Vmovlps12 as u8, "(vmovlps)"),
        entp(Vmovsldup, PF3, 0x0f12, "vmovsldup", SSEFP, d1(VX), s1(WX), VEXMP, FNONE, END),
        entp(Vmovlpd, P66, 0x0f12, "vmovlpd", SSEFP.union(LD), d1(VDQ), s2(HDQ, MQ), VEXMP.union(Attrs::VEX_L_0), FNONE, pe(Pe::Movlps13 as u8, 6)),
        entp(Vmovddup, PF2, 0x0f12, "vmovddup", SSEFP, d1(VX), s1(WX), dup(VEXMP), FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 14: unpcklps / unpcklpd
    [
        ent(Unpcklps, 0x0f14, "unpcklps", SSEFP, d1(VDQ), s2(WQ, VDQ), MRM, FNONE, END),
        IE,
        entp(Unpcklpd, P66, 0x0f14, "unpcklpd", SSEFP, d1(VDQ), s2(WQ, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vunpcklps, 0x0f14, "vunpcklps", SSEFP, d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        IE,
        entp(Vunpcklpd, P66, 0x0f14, "vunpcklpd", SSEFP, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 15: unpckhps / unpckhpd
    [
        ent(Unpckhps, 0x0f15, "unpckhps", SSEFP, d1(VDQ), s2(WQ, VDQ), MRM, FNONE, END),
        IE,
        entp(Unpckhpd, P66, 0x0f15, "unpckhpd", SSEFP, d1(VDQ), s2(WQ, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vunpckhps, 0x0f15, "vunpckhps", SSEFP, d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        IE,
        entp(Vunpckhpd, P66, 0x0f15, "vunpckhpd", SSEFP, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 16: movhps/movlhps via mod, movshdup, movhpd
    [
        dis(ModExt, super::groups::Mx::Movhps16 as u8, "(movhps)"),
        entp(Movshdup, PF3, 0x0f16, "movshdup", SSEFP, d1(VDQ), s1(WDQ), MRMP, FNONE, END),
        entp(Movhpd, P66, 0x0f16, "movhpd", SSEFP.union(LD), d1(VSD), s1(MQ), MRMP, FNONE, pe(Pe::Movhps17 as u8, 2)),
        IE,
        dis(ModExt, super::groups::Mx::Vmovhps16 as u8, "(vmovhps)"),
        entp(Vmovshdup, PF3, 0x0f16, "vmovshdup", SSEFP, d1(VX), s1(WX), VEXMP, FNONE, END),
        entp(Vmovhpd, P66, 0x0f16, "vmovhpd", SSEFP.union(LD), d1(VDQ), s2(HDQ, MQ), VEXMP.union(Attrs::VEX_L_0), FNONE, pe(Pe::Movhps17 as u8, 6)),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 28: movaps / movapd loads
    [
        ent(Movaps, 0x0f28, "movaps", SSEFP.union(LD), d1(VDQ), s1(WDQ), MRM, FNONE, pe(Pe::Movaps29 as u8, 0)),
        IE,
        entp(Movapd, P66, 0x0f28, "movapd", SSEFP.union(LD), d1(VDQ), s1(WDQ), MRMP, FNONE, pe(Pe::Movaps29 as u8, 2)),
        IE,
        ent(Vmovaps, 0x0f28, "vmovaps", SSEFP.union(LD), d1(VX), s1(WX), VEXM, FNONE, pe(Pe::Movaps29 as u8, 4)),
        IE,
        entp(Vmovapd, P66, 0x0f28, "vmovapd", SSEFP.union(LD), d1(VX), s1(WX), VEXMP, FNONE, pe(Pe::Movaps29 as u8, 6)),
        IE,
        ent(Vmovaps, 0x0f28, "vmovaps", SSEFP.union(LD), d1(VE), s2(WE, KA), fvm(EVXM), FNONE, pe(Pe::Movaps29 as u8, 8)),
        IE,
        entp(Vmovapd, P66, 0x0f28, "vmovapd", SSEFP.union(LD), d1(VE), s2(WE, KA), fvm(EVXMP), FNONE, pe(Pe::Movaps29 as u8, 10)),
        IE,
    ],
    // 0F 29: movaps / movapd stores
    [
        ent(Movaps, 0x0f29, "movaps", SSEFP.union(ST), d1(WDQ), s1(VDQ), MRM, FNONE, END),
        IE,
        entp(Movapd, P66, 0x0f29, "movapd", SSEFP.union(ST), d1(WDQ), s1(VDQ), MRMP, FNONE, END),
        IE,
        ent(Vmovaps, 0x0f29, "vmovaps", SSEFP.union(ST), d1(WX), s1(VX), VEXM, FNONE, END),
        IE,
        entp(Vmovapd, P66, 0x0f29, "vmovapd", SSEFP.union(ST), d1(WX), s1(VX), VEXMP, FNONE, END),
        IE,
        ent(Vmovaps, 0x0f29, "vmovaps", SSEFP.union(ST), d1(WE), s2(VE, KA), fvm(EVXM), FNONE, END),
        IE,
        entp(Vmovapd, P66, 0x0f29, "vmovapd", SSEFP.union(ST), d1(WE), s2(VE, KA), fvm(EVXMP), FNONE, END),
        IE,
    ],
    // 0F 2A: cvtpi2ps / cvtsi2ss / cvtpi2pd / cvtsi2sd
    [
        ent(Cvtpi2ps, 0x0f2a, "cvtpi2ps", SSEFP.union(CVT), d1(VQ), s1(QQ), MRM, FNONE, END),
        entp(Cvtsi2ss, PF3, 0x0f2a, "cvtsi2ss", SSEFP.union(CVT), d1(VSS), s1(EY), MRMP, FNONE, END),
        entp(Cvtpi2pd, P66, 0x0f2a, "cvtpi2pd", SSEFP.union(CVT), d1(VDQ), s1(QQ), MRMP, FNONE, END),
        entp(Cvtsi2sd, PF2, 0x0f2a, "cvtsi2sd", SSEFP.union(CVT), d1(VSD), s1(EY), MRMP, FNONE, END),
        IE,
        entp(Vcvtsi2ss, PF3, 0x0f2a, "vcvtsi2ss", SSEFP.union(CVT), d1(VSS), s2(HSS, EY), VEXMP, FNONE, END),
        IE,
        entp(Vcvtsi2sd, PF2, 0x0f2a, "vcvtsi2sd", SSEFP.union(CVT), d1(VSD), s2(HSD, EY), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 2B: movntps / movntpd
    [
        ent(Movntps, 0x0f2b, "movntps", SSEFP.union(ST), d1(MDQ), s1(VDQ), MRM, FNONE, END),
        IE,
        entp(Movntpd, P66, 0x0f2b, "movntpd", SSEFP.union(ST), d1(MDQ), s1(VDQ), MRMP, FNONE, END),
        IE,
        ent(Vmovntps, 0x0f2b, "vmovntps", SSEFP.union(ST), d1(MX), s1(VX), VEXM, FNONE, END),
        IE,
        entp(Vmovntpd, P66, 0x0f2b, "vmovntpd", SSEFP.union(ST), d1(MX), s1(VX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 2C: truncating conversions to integer
    [
        ent(Cvttps2pi, 0x0f2c, "cvttps2pi", SSEFP.union(CVT), d1(PQ), s1(WQ), MRM, FNONE, END),
        entp(Cvttss2si, PF3, 0x0f2c, "cvttss2si", SSEFP.union(CVT), d1(GY), s1(WSS), MRMP, FNONE, END),
        entp(Cvttpd2pi, P66, 0x0f2c, "cvttpd2pi", SSEFP.union(CVT), d1(PQ), s1(WDQ), MRMP, FNONE, END),
        entp(Cvttsd2si, PF2, 0x0f2c, "cvttsd2si", SSEFP.union(CVT), d1(GY), s1(WSD), MRMP, FNONE, END),
        IE,
        entp(Vcvttss2si, PF3, 0x0f2c, "vcvttss2si", SSEFP.union(CVT), d1(GY), s1(WSS), VEXMP, FNONE, END),
        IE,
        entp(Vcvttsd2si, PF2, 0x0f2c, "vcvttsd2si", SSEFP.union(CVT), d1(GY), s1(WSD), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 2D: rounding conversions to integer
    [
        ent(Cvtps2pi, 0x0f2d, "cvtps2pi", SSEFP.union(CVT), d1(PQ), s1(WQ), MRM, FNONE, END),
        entp(Cvtss2si, PF3, 0x0f2d, "cvtss2si", SSEFP.union(CVT), d1(GY), s1(WSS), MRMP, FNONE, END),
        entp(Cvtpd2pi, P66, 0x0f2d, "cvtpd2pi", SSEFP.union(CVT), d1(PQ), s1(WDQ), MRMP, FNONE, END),
        entp(Cvtsd2si, PF2, 0x0f2d, "cvtsd2si", SSEFP.union(CVT), d1(GY), s1(WSD), MRMP, FNONE, END),
        IE,
        entp(Vcvtss2si, PF3, 0x0f2d, "vcvtss2si", SSEFP.union(CVT), d1(GY), s1(WSS), VEXMP, FNONE, END),
        IE,
        entp(Vcvtsd2si, PF2, 0x0f2d, "vcvtsd2si", SSEFP.union(CVT), d1(GY), s1(WSD), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 2E: unordered compare, sets ZF/PF/CF
    [
        ent(Ucomiss, 0x0f2e, "ucomiss", SSEFP, d0(), s2(VSS, WSS), MRM, FW6, END),
        IE,
        entp(Ucomisd, P66, 0x0f2e, "ucomisd", SSEFP, d0(), s2(VSD, WSD), MRMP, FW6, END),
        IE,
        ent(Vucomiss, 0x0f2e, "vucomiss", SSEFP, d0(), s2(VSS, WSS), VEXM, FW6, END),
        IE,
        entp(Vucomisd, P66, 0x0f2e, "vucomisd", SSEFP, d0(), s2(VSD, WSD), VEXMP, FW6, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 2F: ordered compare
    [
        ent(Comiss, 0x0f2f, "comiss", SSEFP, d0(), s2(VSS, WSS), MRM, FW6, END),
        IE,
        entp(Comisd, P66, 0x0f2f, "comisd", SSEFP, d0(), s2(VSD, WSD), MRMP, FW6, END),
        IE,
        ent(Vcomiss, 0x0f2f, "vcomiss", SSEFP, d0(), s2(VSS, WSS), VEXM, FW6, END),
        IE,
        entp(Vcomisd, P66, 0x0f2f, "vcomisd", SSEFP, d0(), s2(VSD, WSD), VEXMP, FW6, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 50: movmskps / movmskpd
    [
        ent(Movmskps, 0x0f50, "movmskps", SSEFP, d1(GD), s1(WDQ), MRM, FNONE, END),
        IE,
        entp(Movmskpd, P66, 0x0f50, "movmskpd", SSEFP, d1(GD), s1(WDQ), MRMP, FNONE, END),
        IE,
        ent(Vmovmskps, 0x0f50, "vmovmskps", SSEFP, d1(GD), s1(WX), VEXM, FNONE, END),
        IE,
        entp(Vmovmskpd, P66, 0x0f50, "vmovmskpd", SSEFP, d1(GD), s1(WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 51: square roots
    [
        ent(Sqrtps, 0x0f51, "sqrtps", SSEFP.union(MTH), d1(VDQ), s1(WDQ), MRM, FNONE, END),
        entp(Sqrtss, PF3, 0x0f51, "sqrtss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Sqrtpd, P66, 0x0f51, "sqrtpd", SSEFP.union(MTH), d1(VDQ), s1(WDQ), MRMP, FNONE, END),
        entp(Sqrtsd, PF2, 0x0f51, "sqrtsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vsqrtps, 0x0f51, "vsqrtps", SSEFP.union(MTH), d1(VX), s1(WX), VEXM, FNONE, END),
        entp(Vsqrtss, PF3, 0x0f51, "vsqrtss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vsqrtpd, P66, 0x0f51, "vsqrtpd", SSEFP.union(MTH), d1(VX), s1(WX), VEXMP, FNONE, END),
        entp(Vsqrtsd, PF2, 0x0f51, "vsqrtsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Sqrt51np as u8, "(vsqrtps)"),
        IE,
        dis(EvexWbExt, Wb::Sqrt51p66 as u8, "(vsqrtpd)"),
        IE,
    ],
    // 0F 52: reciprocal square root estimate
    [
        ent(Rsqrtps, 0x0f52, "rsqrtps", SSEFP.union(MTH), d1(VDQ), s1(WDQ), MRM, FNONE, END),
        entp(Rsqrtss, PF3, 0x0f52, "rsqrtss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        IE,
        IE,
        ent(Vrsqrtps, 0x0f52, "vrsqrtps", SSEFP.union(MTH), d1(VX), s1(WX), VEXM, FNONE, END),
        entp(Vrsqrtss, PF3, 0x0f52, "vrsqrtss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        IE,
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 53: reciprocal estimate
    [
        ent(Rcpps, 0x0f53, "rcpps", SSEFP.union(MTH), d1(VDQ), s1(WDQ), MRM, FNONE, END),
        entp(Rcpss, PF3, 0x0f53, "rcpss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        IE,
        IE,
        ent(Vrcpps, 0x0f53, "vrcpps", SSEFP.union(MTH), d1(VX), s1(WX), VEXM, FNONE, END),
        entp(Vrcpss, PF3, 0x0f53, "vrcpss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        IE,
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 54: andps / andpd
    [
        ent(Andps, 0x0f54, "andps", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        IE,
        entp(Andpd, P66, 0x0f54, "andpd", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vandps, 0x0f54, "vandps", SSEFP, d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        IE,
        entp(Vandpd, P66, 0x0f54, "vandpd", SSEFP, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        ent(Vandps, 0x0f54, "vandps", SSEFP, d1(VE), s3(HE, WE, KA), fv(EVXM), FNONE, END),
        IE,
        entp(Vandpd, P66, 0x0f54, "vandpd", SSEFP, d1(VE), s3(HE, WE, KA), fv(EVXMP), FNONE, END),
        IE,
    ],
    // 0F 55: andnps / andnpd
    [
        ent(Andnps, 0x0f55, "andnps", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        IE,
        entp(Andnpd, P66, 0x0f55, "andnpd", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vandnps, 0x0f55, "vandnps", SSEFP, d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        IE,
        entp(Vandnpd, P66, 0x0f55, "vandnpd", SSEFP, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 56: orps / orpd
    [
        ent(Orps, 0x0f56, "orps", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        IE,
        entp(Orpd, P66, 0x0f56, "orpd", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vorps, 0x0f56, "vorps", SSEFP, d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        IE,
        entp(Vorpd, P66, 0x0f56, "vorpd", SSEFP, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 57: xorps / xorpd
    [
        ent(Xorps, 0x0f57, "xorps", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        IE,
        entp(Xorpd, P66, 0x0f57, "xorpd", SSEFP, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vxorps, 0x0f57, "vxorps", SSEFP, d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        IE,
        entp(Vxorpd, P66, 0x0f57, "vxorpd", SSEFP, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        ent(Vxorps, 0x0f57, "vxorps", SSEFP, d1(VE), s3(HE, WE, KA), fv(EVXM), FNONE, END),
        IE,
        entp(Vxorpd, P66, 0x0f57, "vxorpd", SSEFP, d1(VE), s3(HE, WE, KA), fv(EVXMP), FNONE, END),
        IE,
    ],
    // 0F 58: adds
    [
        ent(Addps, 0x0f58, "addps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        entp(Addss, PF3, 0x0f58, "addss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Addpd, P66, 0x0f58, "addpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Addsd, PF2, 0x0f58, "addsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vaddps, 0x0f58, "vaddps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        entp(Vaddss, PF3, 0x0f58, "vaddss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vaddpd, P66, 0x0f58, "vaddpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vaddsd, PF2, 0x0f58, "vaddsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Add58np as u8, "(vaddps)"),
        dis(EvexWbExt, Wb::Add58f3 as u8, "(vaddss)"),
        dis(EvexWbExt, Wb::Add58p66 as u8, "(vaddpd)"),
        dis(EvexWbExt, Wb::Add58f2 as u8, "(vaddsd)"),
    ],
    // 0F 59: multiplies
    [
        ent(Mulps, 0x0f59, "mulps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        entp(Mulss, PF3, 0x0f59, "mulss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Mulpd, P66, 0x0f59, "mulpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Mulsd, PF2, 0x0f59, "mulsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vmulps, 0x0f59, "vmulps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        entp(Vmulss, PF3, 0x0f59, "vmulss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vmulpd, P66, 0x0f59, "vmulpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vmulsd, PF2, 0x0f59, "vmulsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Mul59np as u8, "(vmulps)"),
        IE,
        dis(EvexWbExt, Wb::Mul59p66 as u8, "(vmulpd)"),
        IE,
    ],
    // 0F 5A: precision conversions
    [
        ent(Cvtps2pd, 0x0f5a, "cvtps2pd", SSEFP.union(CVT), d1(VDQ), s1(WQ), MRM, FNONE, END),
        entp(Cvtss2sd, PF3, 0x0f5a, "cvtss2sd", SSEFP.union(CVT), d1(VSD), s2(WSS, VSD), MRMP, FNONE, END),
        entp(Cvtpd2ps, P66, 0x0f5a, "cvtpd2ps", SSEFP.union(CVT), d1(VQ), s1(WDQ), MRMP, FNONE, END),
        entp(Cvtsd2ss, PF2, 0x0f5a, "cvtsd2ss", SSEFP.union(CVT), d1(VSS), s2(WSD, VSS), MRMP, FNONE, END),
        ent(Vcvtps2pd, 0x0f5a, "vcvtps2pd", SSEFP.union(CVT), d1(VX), s1(WH), VEXM, FNONE, END),
        entp(Vcvtss2sd, PF3, 0x0f5a, "vcvtss2sd", SSEFP.union(CVT), d1(VSD), s2(HSD, WSS), VEXMP, FNONE, END),
        entp(Vcvtpd2ps, P66, 0x0f5a, "vcvtpd2ps", SSEFP.union(CVT), d1(VHR), s1(WX), VEXMP, FNONE, END),
        entp(Vcvtsd2ss, PF2, 0x0f5a, "vcvtsd2ss", SSEFP.union(CVT), d1(VSS), s2(HSS, WSD), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 5B: dword/float conversions
    [
        ent(Cvtdq2ps, 0x0f5b, "cvtdq2ps", SSEFP.union(CVT), d1(VDQ), s1(WDQ), MRM, FNONE, END),
        entp(Cvttps2dq, PF3, 0x0f5b, "cvttps2dq", SSEFP.union(CVT), d1(VDQ), s1(WDQ), MRMP, FNONE, END),
        entp(Cvtps2dq, P66, 0x0f5b, "cvtps2dq", SSEFP.union(CVT), d1(VDQ), s1(WDQ), MRMP, FNONE, END),
        IE,
        ent(Vcvtdq2ps, 0x0f5b, "vcvtdq2ps", SSEFP.union(CVT), d1(VX), s1(WX), VEXM, FNONE, END),
        entp(Vcvttps2dq, PF3, 0x0f5b, "vcvttps2dq", SSEFP.union(CVT), d1(VX), s1(WX), VEXMP, FNONE, END),
        entp(Vcvtps2dq, P66, 0x0f5b, "vcvtps2dq", SSEFP.union(CVT), d1(VX), s1(WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 5C: subtracts
    [
        ent(Subps, 0x0f5c, "subps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        entp(Subss, PF3, 0x0f5c, "subss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Subpd, P66, 0x0f5c, "subpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Subsd, PF2, 0x0f5c, "subsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vsubps, 0x0f5c, "vsubps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        entp(Vsubss, PF3, 0x0f5c, "vsubss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vsubpd, P66, 0x0f5c, "vsubpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vsubsd, PF2, 0x0f5c, "vsubsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Sub5Cnp as u8, "(vsubps)"),
        IE,
        dis(EvexWbExt, Wb::Sub5Cp66 as u8, "(vsubpd)"),
        IE,
    ],
    // 0F 5D: minimums
    [
        ent(Minps, 0x0f5d, "minps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        entp(Minss, PF3, 0x0f5d, "minss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Minpd, P66, 0x0f5d, "minpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Minsd, PF2, 0x0f5d, "minsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vminps, 0x0f5d, "vminps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        entp(Vminss, PF3, 0x0f5d, "vminss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vminpd, P66, 0x0f5d, "vminpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vminsd, PF2, 0x0f5d, "vminsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Min5Dnp as u8, "(vminps)"),
        IE,
        dis(EvexWbExt, Wb::Min5Dp66 as u8, "(vminpd)"),
        IE,
    ],
    // 0F 5E: divides
    [
        ent(Divps, 0x0f5e, "divps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        entp(Divss, PF3, 0x0f5e, "divss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Divpd, P66, 0x0f5e, "divpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Divsd, PF2, 0x0f5e, "divsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vdivps, 0x0f5e, "vdivps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        entp(Vdivss, PF3, 0x0f5e, "vdivss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vdivpd, P66, 0x0f5e, "vdivpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vdivsd, PF2, 0x0f5e, "vdivsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Div5Enp as u8, "(vdivps)"),
        IE,
        dis(EvexWbExt, Wb::Div5Ep66 as u8, "(vdivpd)"),
        IE,
    ],
    // 0F 5F: maximums
    [
        ent(Maxps, 0x0f5f, "maxps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END),
        entp(Maxss, PF3, 0x0f5f, "maxss", SSEFP.union(MTH), d1(VSS), s2(WSS, VSS), MRMP, FNONE, END),
        entp(Maxpd, P66, 0x0f5f, "maxpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Maxsd, PF2, 0x0f5f, "maxsd", SSEFP.union(MTH), d1(VSD), s2(WSD, VSD), MRMP, FNONE, END),
        ent(Vmaxps, 0x0f5f, "vmaxps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXM, FNONE, END),
        entp(Vmaxss, PF3, 0x0f5f, "vmaxss", SSEFP.union(MTH), d1(VSS), s2(HSS, WSS), VEXMP, FNONE, END),
        entp(Vmaxpd, P66, 0x0f5f, "vmaxpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vmaxsd, PF2, 0x0f5f, "vmaxsd", SSEFP.union(MTH), d1(VSD), s2(HSD, WSD), VEXMP, FNONE, END),
        dis(EvexWbExt, Wb::Max5Fnp as u8, "(vmaxps)"),
        IE,
        dis(EvexWbExt, Wb::Max5Fp66 as u8, "(vmaxpd)"),
        IE,
    ],
    // 0F 60..67, 68..6B: MMX/SSE2 pack and unpack, compares
    mmx_row(Pe::Punpcklbw60 as u8, Punpcklbw, Vpunpcklbw, 0x0f60, "punpcklbw", "vpunpcklbw"),
    mmx_row(Pe::Punpcklwd61 as u8, Punpcklwd, Vpunpcklwd, 0x0f61, "punpcklwd", "vpunpcklwd"),
    mmx_row(Pe::Punpckldq62 as u8, Punpckldq, Vpunpckldq, 0x0f62, "punpckldq", "vpunpckldq"),
    mmx_row(Pe::Packsswb63 as u8, Packsswb, Vpacksswb, 0x0f63, "packsswb", "vpacksswb"),
    mmx_row(Pe::Pcmpgtb64 as u8, Pcmpgtb, Vpcmpgtb, 0x0f64, "pcmpgtb", "vpcmpgtb"),
    mmx_row(Pe::Pcmpgtw65 as u8, Pcmpgtw, Vpcmpgtw, 0x0f65, "pcmpgtw", "vpcmpgtw"),
    mmx_row(Pe::Pcmpgtd66 as u8, Pcmpgtd, Vpcmpgtd, 0x0f66, "pcmpgtd", "vpcmpgtd"),
    mmx_row(Pe::Packuswb67 as u8, Packuswb, Vpackuswb, 0x0f67, "packuswb", "vpackuswb"),
    mmx_row(Pe::Punpckhbw68 as u8, Punpckhbw, Vpunpckhbw, 0x0f68, "punpckhbw", "vpunpckhbw"),
    mmx_row(Pe::Punpckhwd69 as u8, Punpckhwd, Vpunpckhwd, 0x0f69, "punpckhwd", "vpunpckhwd"),
    mmx_row(Pe::Punpckhdq6A as u8, Punpckhdq, Vpunpckhdq, 0x0f6a, "punpckhdq", "vpunpckhdq"),
    mmx_row(Pe::Packssdw6B as u8, Packssdw, Vpackssdw, 0x0f6b, "packssdw", "vpackssdw"),
    // 0F 6C / 6D: qword unpacks, SSE2 only
    [
        IE,
        IE,
        entp(Punpcklqdq, P66, 0x0f6c, "punpcklqdq", SSE, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpunpcklqdq, P66, 0x0f6c, "vpunpcklqdq", SSE, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE,
        IE,
        entp(Punpckhqdq, P66, 0x0f6d, "punpckhqdq", SSE, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpunpckhqdq, P66, 0x0f6d, "vpunpckhqdq", SSE, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 6E: movd loads (movq with REX.W)
    [
        ent(Movd, 0x0f6e, "movd", SSE.union(LD), d1(PD), s1(EY), MRM, FNONE, END),
        IE,
        entp(Movd, P66, 0x0f6e, "movd", SSE.union(LD), d1(VD4), s1(EY), MRMP, FNONE, pe(Pe::Movd6E as u8, 0)),
        IE,
        IE,
        IE,
        entp(Vmovd, P66, 0x0f6e, "vmovd", SSE.union(LD), d1(VD4), s1(EY), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 6F: movq / movdqu / movdqa loads
    [
        ent(Movq, 0x0f6f, "movq", SSE.union(LD), d1(PQ), s1(QQ), MRM, FNONE, pe(Pe::Movq7F as u8, 0)),
        entp(Movdqu, PF3, 0x0f6f, "movdqu", SSE.union(LD), d1(VDQ), s1(WDQ), MRMP, FNONE, pe(Pe::Movq7F as u8, 1)),
        entp(Movdqa, P66, 0x0f6f, "movdqa", SSE.union(LD), d1(VDQ), s1(WDQ), MRMP, FNONE, pe(Pe::Movq7F as u8, 2)),
        IE,
        IE,
        entp(Vmovdqu, PF3, 0x0f6f, "vmovdqu", SSE.union(LD), d1(VX), s1(WX), VEXMP, FNONE, pe(Pe::Movq7F as u8, 5)),
        entp(Vmovdqa, P66, 0x0f6f, "vmovdqa", SSE.union(LD), d1(VX), s1(WX), VEXMP, FNONE, pe(Pe::Movq7F as u8, 6)),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 70: pshufw / pshufhw / pshufd / pshuflw
    [
        ent(Pshufw, 0x0f70, "pshufw", SSE, d1(PQ), s2(QQ, IB), MRM, FNONE, END),
        entp(Pshufhw, PF3, 0x0f70, "pshufhw", SSE, d1(VDQ), s2(WDQ, IB), MRMP, FNONE, END),
        entp(Pshufd, P66, 0x0f70, "pshufd", SSE, d1(VDQ), s2(WDQ, IB), MRMP, FNONE, END),
        entp(Pshuflw, PF2, 0x0f70, "pshuflw", SSE, d1(VDQ), s2(WDQ, IB), MRMP, FNONE, END),
        IE,
        entp(Vpshufhw, PF3, 0x0f70, "vpshufhw", SSE, d1(VX), s2(WX, IB), VEXMP, FNONE, END),
        entp(Vpshufd, P66, 0x0f70, "vpshufd", SSE, d1(VX), s2(WX, IB), VEXMP, FNONE, END),
        entp(Vpshuflw, PF2, 0x0f70, "vpshuflw", SSE, d1(VX), s2(WX, IB), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 74..76: byte/word/dword equality compares
    mmx_row(Pe::Pcmpeqb74 as u8, Pcmpeqb, Vpcmpeqb, 0x0f74, "pcmpeqb", "vpcmpeqb"),
    mmx_row(Pe::Pcmpeqw75 as u8, Pcmpeqw, Vpcmpeqw, 0x0f75, "pcmpeqw", "vpcmpeqw"),
    mmx_row(Pe::Pcmpeqd76 as u8, Pcmpeqd, Vpcmpeqd, 0x0f76, "pcmpeqd", "vpcmpeqd"),
    // 0F 7C / 7D: horizontal add/sub
    [
        IE,
        IE,
        entp(Haddpd, P66, 0x0f7c, "haddpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Haddps, PF2, 0x0f7c, "haddps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        entp(Vhaddpd, P66, 0x0f7c, "vhaddpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vhaddps, PF2, 0x0f7c, "vhaddps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    [
        IE,
        IE,
        entp(Hsubpd, P66, 0x0f7d, "hsubpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Hsubps, PF2, 0x0f7d, "hsubps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        entp(Vhsubpd, P66, 0x0f7d, "vhsubpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vhsubps, PF2, 0x0f7d, "vhsubps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 7E: movd stores / movq load
    [
        ent(Movd, 0x0f7e, "movd", SSE.union(ST), d1(EY), s1(PD), MRM, FNONE, pe(Pe::Movd6E as u8, 2)),
        entp(Movq, PF3, 0x0f7e, "movq", SSE.union(LD), d1(VQ), s1(WQ), MRMP, FNONE, pe(Pe::MovqD6 as u8, 2)),
        entp(Movd, P66, 0x0f7e, "movd", SSE.union(ST), d1(EY), s1(VD4), MRMP, FNONE, pe(Pe::Movd7E as u8, 0)),
        IE,
        IE,
        entp(Vmovq, PF3, 0x0f7e, "vmovq", SSE.union(LD), d1(VQ), s1(WQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        entp(Vmovd, P66, 0x0f7e, "vmovd", SSE.union(ST), d1(EY), s1(VD4), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 7F: movq / movdqu / movdqa stores
    [
        ent(Movq, 0x0f7f, "movq", SSE.union(ST), d1(QQ), s1(PQ), MRM, FNONE, END),
        entp(Movdqu, PF3, 0x0f7f, "movdqu", SSE.union(ST), d1(WDQ), s1(VDQ), MRMP, FNONE, END),
        entp(Movdqa, P66, 0x0f7f, "movdqa", SSE.union(ST), d1(WDQ), s1(VDQ), MRMP, FNONE, END),
        IE,
        IE,
        entp(Vmovdqu, PF3, 0x0f7f, "vmovdqu", SSE.union(ST), d1(WX), s1(VX), VEXMP, FNONE, END),
        entp(Vmovdqa, P66, 0x0f7f, "vmovdqa", SSE.union(ST), d1(WX), s1(VX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 90..93 under VEX: opmask moves
    [
        IE, IE, IE, IE,
        dis(VexWExt, Wv::K90np as u8, "(kmovw/kmovq)"),
        IE,
        dis(VexWExt, Wv::K90p66 as u8, "(kmovb/kmovd)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE,
        dis(VexWExt, Wv::K91np as u8, "(kmovw/kmovq)"),
        IE,
        dis(VexWExt, Wv::K91p66 as u8, "(kmovb/kmovd)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE,
        ent(Kmovw, 0x0f92, "kmovw", SSE, d1(KW), s1(RD), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        entp(Kmovb, P66, 0x0f92, "kmovb", SSE, d1(KB), s1(RD), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        dis(VexWExt, Wv::K92f2 as u8, "(kmovd/kmovq)"),
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE,
        ent(Kmovw, 0x0f93, "kmovw", SSE, d1(GD), s1(KW), VEXM.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        entp(Kmovb, P66, 0x0f93, "kmovb", SSE, d1(GD), s1(KB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        dis(VexWExt, Wv::K93f2 as u8, "(kmovd/kmovq)"),
        IE, IE, IE, IE,
    ],
    // 0F B8: popcnt
    [
        IE,
        entp(Popcnt, PF3, 0x0fb8, "popcnt", INT.union(MTH), d1(GV), s1(EV), MRMP, FW6, END),
        IE,
        IE,
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F BC: bsf / tzcnt
    [
        ent(Bsf, 0x0fbc, "bsf", INT, d1(GV), s1(EV), MRM, FW6, END),
        entp(Tzcnt, PF3, 0x0fbc, "tzcnt", INT.union(MTH), d1(GV), s1(EV), MRMP, FW6, END),
        IE,
        IE,
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F BD: bsr / lzcnt
    [
        ent(Bsr, 0x0fbd, "bsr", INT, d1(GV), s1(EV), MRM, FW6, END),
        entp(Lzcnt, PF3, 0x0fbd, "lzcnt", INT.union(MTH), d1(GV), s1(EV), MRMP, FW6, END),
        IE,
        IE,
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F C2: compare with predicate immediate
    [
        ent(Cmpps, 0x0fc2, "cmpps", SSEFP, d1(VDQ), s3(WDQ, IB, VDQ), MRM, FNONE, END),
        entp(Cmpss, PF3, 0x0fc2, "cmpss", SSEFP, d1(VSS), s3(WSS, IB, VSS), MRMP, FNONE, END),
        entp(Cmppd, P66, 0x0fc2, "cmppd", SSEFP, d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        entp(Cmpsd, PF2, 0x0fc2, "cmpsd", SSEFP, d1(VSD), s3(WSD, IB, VSD), MRMP, FNONE, END),
        ent(Vcmpps, 0x0fc2, "vcmpps", SSEFP, d1(VX), s3(HXV, WX, IB), VEXM, FNONE, END),
        entp(Vcmpss, PF3, 0x0fc2, "vcmpss", SSEFP, d1(VSS), s3(HSS, WSS, IB), VEXMP, FNONE, END),
        entp(Vcmppd, P66, 0x0fc2, "vcmppd", SSEFP, d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        entp(Vcmpsd, PF2, 0x0fc2, "vcmpsd", SSEFP, d1(VSD), s3(HSD, WSD, IB), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F C4: pinsrw
    [
        ent(Pinsrw, 0x0fc4, "pinsrw", SSE, d1(PQ), s3(EW, IB, PQ), MRM, FNONE, END),
        IE,
        entp(Pinsrw, P66, 0x0fc4, "pinsrw", SSE, d1(VDQ), s3(EW, IB, VDQ), MRMP, FNONE, pe(Pe::PinsrwC4 as u8, 0)),
        IE,
        IE,
        IE,
        entp(Vpinsrw, P66, 0x0fc4, "vpinsrw", SSE, d1(VDQ), s3(EW, IB, HDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F C5: pextrw from register
    [
        ent(Pextrw, 0x0fc5, "pextrw", SSE, d1(GD), s2(QQ, IB), MRM, FNONE, END),
        IE,
        entp(Pextrw, P66, 0x0fc5, "pextrw", SSE, d1(GD), s2(WDQ, IB), MRMP, FNONE, pe(Pe::PextrwC5 as u8, 0)),
        IE,
        IE,
        IE,
        entp(Vpextrw, P66, 0x0fc5, "vpextrw", SSE, d1(GD), s2(WDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F C6: shufps / shufpd
    [
        ent(Shufps, 0x0fc6, "shufps", SSEFP, d1(VDQ), s3(WDQ, IB, VDQ), MRM, FNONE, END),
        IE,
        entp(Shufpd, P66, 0x0fc6, "shufpd", SSEFP, d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        ent(Vshufps, 0x0fc6, "vshufps", SSEFP, d1(VX), s3(HXV, WX, IB), VEXM, FNONE, END),
        IE,
        entp(Vshufpd, P66, 0x0fc6, "vshufpd", SSEFP, d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F D0: addsubpd / addsubps
    [
        IE,
        IE,
        entp(Addsubpd, P66, 0x0fd0, "addsubpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        entp(Addsubps, PF2, 0x0fd0, "addsubps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        entp(Vaddsubpd, P66, 0x0fd0, "vaddsubpd", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        entp(Vaddsubps, PF2, 0x0fd0, "vaddsubps", SSEFP.union(MTH), d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F D1..D5
    shift_row(Pe::PsrlwD1 as u8, Psrlw, Vpsrlw, 0x0fd1, "psrlw", "vpsrlw"),
    shift_row(Pe::PsrldD2 as u8, Psrld, Vpsrld, 0x0fd2, "psrld", "vpsrld"),
    shift_row(Pe::PsrlqD3 as u8, Psrlq, Vpsrlq, 0x0fd3, "psrlq", "vpsrlq"),
    mmx_row(Pe::PaddqD4 as u8, Paddq, Vpaddq, 0x0fd4, "paddq", "vpaddq"),
    mmx_row(Pe::PmullwD5 as u8, Pmullw, Vpmullw, 0x0fd5, "pmullw", "vpmullw"),
    // 0F D6: movq store / movq2dq / movdq2q
    [
        IE,
        entp(Movq2dq, PF3, 0x0fd6, "movq2dq", SSE, d1(VDQ), s1(QQ), MRMP, FNONE, END),
        entp(Movq, P66, 0x0fd6, "movq", SSE.union(ST), d1(WQ), s1(VQ), MRMP, FNONE, END),
        entp(Movdq2q, PF2, 0x0fd6, "movdq2q", SSE, d1(PQ), s1(WQ), MRMP, FNONE, END),
        IE,
        IE,
        entp(Vmovq, P66, 0x0fd6, "vmovq", SSE.union(ST), d1(WQ), s1(VQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F D7: pmovmskb
    [
        ent(Pmovmskb, 0x0fd7, "pmovmskb", SSE, d1(GD), s1(QQ), MRM, FNONE, END),
        IE,
        entp(Pmovmskb, P66, 0x0fd7, "pmovmskb", SSE, d1(GD), s1(WDQ), MRMP, FNONE, pe(Pe::PmovmskbD7 as u8, 0)),
        IE,
        IE,
        IE,
        entp(Vpmovmskb, P66, 0x0fd7, "vpmovmskb", SSE, d1(GD), s1(WX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F D8..DF
    mmx_row(Pe::PsubusbD8 as u8, Psubusb, Vpsubusb, 0x0fd8, "psubusb", "vpsubusb"),
    mmx_row(Pe::PsubuswD9 as u8, Psubusw, Vpsubusw, 0x0fd9, "psubusw", "vpsubusw"),
    mmx_row(Pe::PminubDA as u8, Pminub, Vpminub, 0x0fda, "pminub", "vpminub"),
    mmx_row(Pe::PandDB as u8, Pand, Vpand, 0x0fdb, "pand", "vpand"),
    mmx_row(Pe::PaddusbDC as u8, Paddusb, Vpaddusb, 0x0fdc, "paddusb", "vpaddusb"),
    mmx_row(Pe::PadduswDD as u8, Paddusw, Vpaddusw, 0x0fdd, "paddusw", "vpaddusw"),
    mmx_row(Pe::PmaxubDE as u8, Pmaxub, Vpmaxub, 0x0fde, "pmaxub", "vpmaxub"),
    mmx_row(Pe::PandnDF as u8, Pandn, Vpandn, 0x0fdf, "pandn", "vpandn"),
    // 0F E0..E5
    mmx_row(Pe::PavgbE0 as u8, Pavgb, Vpavgb, 0x0fe0, "pavgb", "vpavgb"),
    shift_row(Pe::PsrawE1 as u8, Psraw, Vpsraw, 0x0fe1, "psraw", "vpsraw"),
    shift_row(Pe::PsradE2 as u8, Psrad, Vpsrad, 0x0fe2, "psrad", "vpsrad"),
    mmx_row(Pe::PavgwE3 as u8, Pavgw, Vpavgw, 0x0fe3, "pavgw", "vpavgw"),
    mmx_row(Pe::PmulhuwE4 as u8, Pmulhuw, Vpmulhuw, 0x0fe4, "pmulhuw", "vpmulhuw"),
    mmx_row(Pe::PmulhwE5 as u8, Pmulhw, Vpmulhw, 0x0fe5, "pmulhw", "vpmulhw"),
    // 0F E6: packed dword/double conversions
    [
        IE,
        entp(Cvtdq2pd, PF3, 0x0fe6, "cvtdq2pd", SSEFP.union(CVT), d1(VDQ), s1(WQ), MRMP, FNONE, END),
        entp(Cvttpd2dq, P66, 0x0fe6, "cvttpd2dq", SSEFP.union(CVT), d1(VQ), s1(WDQ), MRMP, FNONE, END),
        entp(Cvtpd2dq, PF2, 0x0fe6, "cvtpd2dq", SSEFP.union(CVT), d1(VQ), s1(WDQ), MRMP, FNONE, END),
        IE,
        entp(Vcvtdq2pd, PF3, 0x0fe6, "vcvtdq2pd", SSEFP.union(CVT), d1(VX), s1(WH), VEXMP, FNONE, END),
        entp(Vcvttpd2dq, P66, 0x0fe6, "vcvttpd2dq", SSEFP.union(CVT), d1(VHR), s1(WX), VEXMP, FNONE, END),
        entp(Vcvtpd2dq, PF2, 0x0fe6, "vcvtpd2dq", SSEFP.union(CVT), d1(VHR), s1(WX), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F E7: non-temporal stores
    [
        ent(Movntq, 0x0fe7, "movntq", SSE.union(ST), d1(MQ), s1(PQ), MRM, FNONE, END),
        IE,
        entp(Movntdq, P66, 0x0fe7, "movntdq", SSE.union(ST), d1(MDQ), s1(VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vmovntdq, P66, 0x0fe7, "vmovntdq", SSE.union(ST), d1(MX), s1(VX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F E8..EF
    mmx_row(Pe::PsubsbE8 as u8, Psubsb, Vpsubsb, 0x0fe8, "psubsb", "vpsubsb"),
    mmx_row(Pe::PsubswE9 as u8, Psubsw, Vpsubsw, 0x0fe9, "psubsw", "vpsubsw"),
    mmx_row(Pe::PminswEA as u8, Pminsw, Vpminsw, 0x0fea, "pminsw", "vpminsw"),
    mmx_row(Pe::PorEB as u8, Por, Vpor, 0x0feb, "por", "vpor"),
    mmx_row(Pe::PaddsbEC as u8, Paddsb, Vpaddsb, 0x0fec, "paddsb", "vpaddsb"),
    mmx_row(Pe::PaddswED as u8, Paddsw, Vpaddsw, 0x0fed, "paddsw", "vpaddsw"),
    mmx_row(Pe::PmaxswEE as u8, Pmaxsw, Vpmaxsw, 0x0fee, "pmaxsw", "vpmaxsw"),
    mmx_row(Pe::PxorEF as u8, Pxor, Vpxor, 0x0fef, "pxor", "vpxor"),
    // 0F F0: lddqu
    [
        IE,
        IE,
        IE,
        entp(Lddqu, PF2, 0x0ff0, "lddqu", SSE.union(LD), d1(VDQ), s1(MDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vlddqu, PF2, 0x0ff0, "vlddqu", SSE.union(LD), d1(VX), s1(MX), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F F1..F6
    shift_row(Pe::PsllwF1 as u8, Psllw, Vpsllw, 0x0ff1, "psllw", "vpsllw"),
    shift_row(Pe::PslldF2 as u8, Pslld, Vpslld, 0x0ff2, "pslld", "vpslld"),
    shift_row(Pe::PsllqF3 as u8, Psllq, Vpsllq, 0x0ff3, "psllq", "vpsllq"),
    mmx_row(Pe::PmuludqF4 as u8, Pmuludq, Vpmuludq, 0x0ff4, "pmuludq", "vpmuludq"),
    mmx_row(Pe::PmaddwdF5 as u8, Pmaddwd, Vpmaddwd, 0x0ff5, "pmaddwd", "vpmaddwd"),
    mmx_row(Pe::PsadbwF6 as u8, Psadbw, Vpsadbw, 0x0ff6, "psadbw", "vpsadbw"),
    // 0F F7: masked byte stores to DS:rDI
    [
        ent(Maskmovq, 0x0ff7, "maskmovq", SSE.union(ST), d1(YQ), s2(PQ, QQ), MRM, FNONE, END),
        IE,
        entp(Maskmovdqu, P66, 0x0ff7, "maskmovdqu", SSE.union(ST), d1(YDQ), s2(VDQ, WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vmaskmovdqu, P66, 0x0ff7, "vmaskmovdqu", SSE.union(ST), d1(YDQ), s2(VDQ, WDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F F8..FE
    mmx_row(Pe::PsubbF8 as u8, Psubb, Vpsubb, 0x0ff8, "psubb", "vpsubb"),
    mmx_row(Pe::PsubwF9 as u8, Psubw, Vpsubw, 0x0ff9, "psubw", "vpsubw"),
    mmx_row(Pe::PsubdFA as u8, Psubd, Vpsubd, 0x0ffa, "psubd", "vpsubd"),
    mmx_row(Pe::PsubqFB as u8, Psubq, Vpsubq, 0x0ffb, "psubq", "vpsubq"),
    mmx_row(Pe::PaddbFC as u8, Paddb, Vpaddb, 0x0ffc, "paddb", "vpaddb"),
    mmx_row(Pe::PaddwFD as u8, Paddw, Vpaddw, 0x0ffd, "paddw", "vpaddw"),
    mmx_row(Pe::PadddFE as u8, Paddd, Vpaddd, 0x0ffe, "paddd", "vpaddd"),
    // 0F 38 00..0B: SSSE3
    mmx_row(Pe::Pshufb3800 as u8, Pshufb, Vpshufb, 0x0f3800, "pshufb", "vpshufb"),
    mmx_row(Pe::Phaddw3801 as u8, Phaddw, Vphaddw, 0x0f3801, "phaddw", "vphaddw"),
    mmx_row(Pe::Phaddd3802 as u8, Phaddd, Vphaddd, 0x0f3802, "phaddd", "vphaddd"),
    mmx_row(Pe::Phaddsw3803 as u8, Phaddsw, Vphaddsw, 0x0f3803, "phaddsw", "vphaddsw"),
    mmx_row(Pe::Pmaddubsw3804 as u8, Pmaddubsw, Vpmaddubsw, 0x0f3804, "pmaddubsw", "vpmaddubsw"),
    mmx_row(Pe::Phsubw3805 as u8, Phsubw, Vphsubw, 0x0f3805, "phsubw", "vphsubw"),
    mmx_row(Pe::Phsubd3806 as u8, Phsubd, Vphsubd, 0x0f3806, "phsubd", "vphsubd"),
    mmx_row(Pe::Phsubsw3807 as u8, Phsubsw, Vphsubsw, 0x0f3807, "phsubsw", "vphsubsw"),
    mmx_row(Pe::Psignb3808 as u8, Psignb, Vpsignb, 0x0f3808, "psignb", "vpsignb"),
    mmx_row(Pe::Psignw3809 as u8, Psignw, Vpsignw, 0x0f3809, "psignw", "vpsignw"),
    mmx_row(Pe::Psignd380A as u8, Psignd, Vpsignd, 0x0f380a, "psignd", "vpsignd"),
    mmx_row(Pe::Pmulhrsw380B as u8, Pmulhrsw, Vpmulhrsw, 0x0f380b, "pmulhrsw", "vpmulhrsw"),
    // 0F 38 10/14/15: implicit-XMM0 blends
    [
        IE, IE,
        entp(Pblendvb, P66, 0x0f3810, "pblendvb", SSE, d1(VDQ), s3(WDQ, XMM0, VDQ), MRMP, FNONE, END),
        IE, IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Blendvps, P66, 0x0f3814, "blendvps", SSEFP, d1(VDQ), s3(WDQ, XMM0, VDQ), MRMP, FNONE, END),
        IE, IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Blendvpd, P66, 0x0f3815, "blendvpd", SSEFP, d1(VDQ), s3(WDQ, XMM0, VDQ), MRMP, FNONE, END),
        IE, IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F 38 17: ptest
    [
        IE, IE,
        entp(Ptest, P66, 0x0f3817, "ptest", SSE, d0(), s2(VDQ, WDQ), MRMP, FW6, END),
        IE,
        IE,
        IE,
        entp(Vptest, P66, 0x0f3817, "vptest", SSE, d0(), s2(VX, WX), VEXMP, FW6, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 38 18/19: broadcasts
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vbroadcastss, P66, 0x0f3818, "vbroadcastss", SSEFP.union(LD), d1(VX), s1(WD), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vbroadcastsd, P66, 0x0f3819, "vbroadcastsd", SSEFP.union(LD), d1(VX), s1(WQ), VEXMP.union(Attrs::VEX_L_1), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 38 1C..1E: absolute values
    mmx_unary_row(Pe::Pabsb381C as u8, Pabsb, Vpabsb, 0x0f381c, "pabsb", "vpabsb"),
    mmx_unary_row(Pe::Pabsw381D as u8, Pabsw, Vpabsw, 0x0f381d, "pabsw", "vpabsw"),
    mmx_unary_row(Pe::Pabsd381E as u8, Pabsd, Vpabsd, 0x0f381e, "pabsd", "vpabsd"),
    // 0F 38 20..25: sign extensions
    pmov_row(Pmovsxbw, Vpmovsxbw, 0x0f3820, "pmovsxbw", "vpmovsxbw", WQ, WH),
    pmov_row(Pmovsxbd, Vpmovsxbd, 0x0f3821, "pmovsxbd", "vpmovsxbd", WD, WQT),
    pmov_row(Pmovsxbq, Vpmovsxbq, 0x0f3822, "pmovsxbq", "vpmovsxbq", WW, WW),
    pmov_row(Pmovsxwd, Vpmovsxwd, 0x0f3823, "pmovsxwd", "vpmovsxwd", WQ, WH),
    pmov_row(Pmovsxwq, Vpmovsxwq, 0x0f3824, "pmovsxwq", "vpmovsxwq", WD, WQT),
    pmov_row(Pmovsxdq, Vpmovsxdq, 0x0f3825, "pmovsxdq", "vpmovsxdq", WQ, WH),
    // 0F 38 28..2B
    sse41_row(Pmuldq, Vpmuldq, 0x0f3828, "pmuldq", "vpmuldq"),
    sse41_row(Pcmpeqq, Vpcmpeqq, 0x0f3829, "pcmpeqq", "vpcmpeqq"),
    [
        IE, IE,
        entp(Movntdqa, P66, 0x0f382a, "movntdqa", SSE.union(LD), d1(VDQ), s1(MDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vmovntdqa, P66, 0x0f382a, "vmovntdqa", SSE.union(LD), d1(VX), s1(MX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    sse41_row(Packusdw, Vpackusdw, 0x0f382b, "packusdw", "vpackusdw"),
    // 0F 38 30..35: zero extensions
    pmov_row(Pmovzxbw, Vpmovzxbw, 0x0f3830, "pmovzxbw", "vpmovzxbw", WQ, WH),
    pmov_row(Pmovzxbd, Vpmovzxbd, 0x0f3831, "pmovzxbd", "vpmovzxbd", WD, WQT),
    pmov_row(Pmovzxbq, Vpmovzxbq, 0x0f3832, "pmovzxbq", "vpmovzxbq", WW, WW),
    pmov_row(Pmovzxwd, Vpmovzxwd, 0x0f3833, "pmovzxwd", "vpmovzxwd", WQ, WH),
    pmov_row(Pmovzxwq, Vpmovzxwq, 0x0f3834, "pmovzxwq", "vpmovzxwq", WD, WQT),
    pmov_row(Pmovzxdq, Vpmovzxdq, 0x0f3835, "pmovzxdq", "vpmovzxdq", WQ, WH),
    // 0F 38 37..41
    sse41_row(Pcmpgtq, Vpcmpgtq, 0x0f3837, "pcmpgtq", "vpcmpgtq"),
    sse41_row(Pminsb, Vpminsb, 0x0f3838, "pminsb", "vpminsb"),
    sse41_row(Pminsd, Vpminsd, 0x0f3839, "pminsd", "vpminsd"),
    sse41_row(Pminuw, Vpminuw, 0x0f383a, "pminuw", "vpminuw"),
    sse41_row(Pminud, Vpminud, 0x0f383b, "pminud", "vpminud"),
    sse41_row(Pmaxsb, Vpmaxsb, 0x0f383c, "pmaxsb", "vpmaxsb"),
    sse41_row(Pmaxsd, Vpmaxsd, 0x0f383d, "pmaxsd", "vpmaxsd"),
    sse41_row(Pmaxuw, Vpmaxuw, 0x0f383e, "pmaxuw", "vpmaxuw"),
    sse41_row(Pmaxud, Vpmaxud, 0x0f383f, "pmaxud", "vpmaxud"),
    sse41_row(Pmulld, Vpmulld, 0x0f3840, "pmulld", "vpmulld"),
    sse41_unary_row(Phminposuw, Vphminposuw, 0x0f3841, "phminposuw", "vphminposuw"),
    // 0F 38 55: vpopcntd/q (EVEX)
    [
        IE, IE, IE, IE, IE, IE, IE, IE, IE, IE,
        dis(EvexWbExt, Wb::Popcnt55 as u8, "(vpopcnt)"),
        IE,
    ],
    // 0F 38 58/59/78/79: integer broadcasts
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vpbroadcastd, P66, 0x0f3858, "vpbroadcastd", SSE.union(LD), d1(VX), s1(WD), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vpbroadcastq, P66, 0x0f3859, "vpbroadcastq", SSE.union(LD), d1(VX), s1(WQ), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vpbroadcastb, P66, 0x0f3878, "vpbroadcastb", SSE.union(LD), d1(VX), s1(WB8), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vpbroadcastw, P66, 0x0f3879, "vpbroadcastw", SSE.union(LD), d1(VX), s1(WW), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 38 90..93: gathers
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::Pgather90 as u8, "(vpgatherd)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::Pgather91 as u8, "(vpgatherq)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::Gather92 as u8, "(vgatherd)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::Gather93 as u8, "(vgatherq)"),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 38 98/A8/B8: fused multiply-add
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::Fma98 as u8, "(vfmadd132)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::FmaA8 as u8, "(vfmadd213)"),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        dis(VexWExt, Wv::FmaB8 as u8, "(vfmadd231)"),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 38 DB..DF: AES
    sse41_unary_row(Aesimc, Vaesimc, 0x0f38db, "aesimc", "vaesimc"),
    aes_row(Aesenc, Vaesenc, 0x0f38dc, "aesenc", "vaesenc"),
    aes_row(Aesenclast, Vaesenclast, 0x0f38dd, "aesenclast", "vaesenclast"),
    aes_row(Aesdec, Vaesdec, 0x0f38de, "aesdec", "vaesdec"),
    aes_row(Aesdeclast, Vaesdeclast, 0x0f38df, "aesdeclast", "vaesdeclast"),
    // 0F 38 F0/F1: movbe / crc32
    [
        ent(Movbe, 0x0f38f0, "movbe", INT.union(LD), d1(GV), s1(MV), MRM, FNONE, pe(Pe::MovbeF1 as u8, 0)),
        IE,
        IE,
        entp(Crc32, PF2, 0x0f38f0, "crc32", INT.union(MTH), d1(GY), s1(EB), MRMP, FNONE, END),
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    [
        ent(Movbe, 0x0f38f1, "movbe", INT.union(ST), d1(MV), s1(GV), MRM, FNONE, END),
        IE,
        IE,
        entp(Crc32, PF2, 0x0f38f1, "crc32", INT.union(MTH), d1(GY), s1(EV), MRMP, FNONE, pe(Pe::MovbeF0 as u8, 3)),
        IE, IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F 38 F2: andn (VEX)
    [
        IE, IE, IE, IE,
        ent(Andn, 0x0f38f2, "andn", INT, d1(GY), s2(BY, EY), VEXM, FW6, END),
        IE, IE, IE, IE, IE, IE, IE,
    ],
    // 0F 38 F5: bzhi / pext / pdep (VEX)
    [
        IE, IE, IE, IE,
        ent(Bzhi, 0x0f38f5, "bzhi", INT, d1(GY), s2(EY, BY), VEXM, FW6, END),
        entp(Pext, PF3, 0x0f38f5, "pext", INT, d1(GY), s2(BY, EY), VEXMP, FNONE, END),
        IE,
        entp(Pdep, PF2, 0x0f38f5, "pdep", INT, d1(GY), s2(BY, EY), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 38 F6: adox / adcx / mulx
    [
        IE,
        entp(Adox, PF3, 0x0f38f6, "adox", INT, d1(GY), s2(EY, GY), MRMP, FRWO, END),
        entp(Adcx, P66, 0x0f38f6, "adcx", INT, d1(GY), s2(EY, GY), MRMP, FRWC, END),
        IE,
        IE,
        IE,
        IE,
        entp(Mulx, PF2, 0x0f38f6, "mulx", INT.union(MTH), d2(GY, BY), s2(EY, gpry(2)), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 38 F7: bextr / sarx / shlx / shrx (VEX)
    [
        IE, IE, IE, IE,
        ent(Bextr, 0x0f38f7, "bextr", INT, d1(GY), s2(EY, BY), VEXM, FW6, crate::template::EntryRef::XopA(0x10)),
        entp(Sarx, PF3, 0x0f38f7, "sarx", INT, d1(GY), s2(EY, BY), VEXMP, FNONE, END),
        entp(Shlx, P66, 0x0f38f7, "shlx", INT, d1(GY), s2(EY, BY), VEXMP, FNONE, END),
        entp(Shrx, PF2, 0x0f38f7, "shrx", INT, d1(GY), s2(EY, BY), VEXMP, FNONE, END),
        IE, IE, IE, IE,
    ],
    // 0F 3A 08..0B: rounds
    [
        IE, IE,
        entp(Roundps, P66, 0x0f3a08, "roundps", SSEFP.union(MTH), d1(VDQ), s2(WDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vroundps, P66, 0x0f3a08, "vroundps", SSEFP.union(MTH), d1(VX), s2(WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Roundpd, P66, 0x0f3a09, "roundpd", SSEFP.union(MTH), d1(VDQ), s2(WDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vroundpd, P66, 0x0f3a09, "vroundpd", SSEFP.union(MTH), d1(VX), s2(WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Roundss, P66, 0x0f3a0a, "roundss", SSEFP.union(MTH), d1(VSS), s3(WSS, IB, VSS), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vroundss, P66, 0x0f3a0a, "vroundss", SSEFP.union(MTH), d1(VSS), s3(HSS, WSS, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Roundsd, P66, 0x0f3a0b, "roundsd", SSEFP.union(MTH), d1(VSD), s3(WSD, IB, VSD), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vroundsd, P66, 0x0f3a0b, "vroundsd", SSEFP.union(MTH), d1(VSD), s3(HSD, WSD, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 0C..0F: blends and palignr
    [
        IE, IE,
        entp(Blendps, P66, 0x0f3a0c, "blendps", SSEFP, d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vblendps, P66, 0x0f3a0c, "vblendps", SSEFP, d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Blendpd, P66, 0x0f3a0d, "blendpd", SSEFP, d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vblendpd, P66, 0x0f3a0d, "vblendpd", SSEFP, d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pblendw, P66, 0x0f3a0e, "pblendw", SSE, d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpblendw, P66, 0x0f3a0e, "vpblendw", SSE, d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        ent(Palignr, 0x0f3a0f, "palignr", SSE, d1(PQ), s3(QQ, IB, PQ), MRM, FNONE, END),
        IE,
        entp(Palignr, P66, 0x0f3a0f, "palignr", SSE, d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, pe(Pe::Palignr3A0F as u8, 0)),
        IE,
        IE,
        IE,
        entp(Vpalignr, P66, 0x0f3a0f, "vpalignr", SSE, d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 14..17: extractions
    [
        IE, IE,
        entp(Pextrb, P66, 0x0f3a14, "pextrb", SSE, d1(EB), s2(VDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpextrb, P66, 0x0f3a14, "vpextrb", SSE, d1(EB), s2(VDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pextrw, P66, 0x0f3a15, "pextrw", SSE, d1(EW), s2(VDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpextrw, P66, 0x0f3a15, "vpextrw", SSE, d1(EW), s2(VDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pextrd, P66, 0x0f3a16, "pextrd", SSE, d1(EY), s2(VDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpextrd, P66, 0x0f3a16, "vpextrd", SSE, d1(EY), s2(VDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Extractps, P66, 0x0f3a17, "extractps", SSEFP, d1(ED), s2(VDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vextractps, P66, 0x0f3a17, "vextractps", SSEFP, d1(ED), s2(VDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 18/19: 128-bit lane insert/extract
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vinsertf128, P66, 0x0f3a18, "vinsertf128", SSEFP, d1(VX), s3(HXV, WDQ, IB), VEXMP.union(Attrs::VEX_L_1), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vextractf128, P66, 0x0f3a19, "vextractf128", SSEFP, d1(WDQ), s2(VX, IB), VEXMP.union(Attrs::VEX_L_1), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 20..22: insertions
    [
        IE, IE,
        entp(Pinsrb, P66, 0x0f3a20, "pinsrb", SSE, d1(VDQ), s3(EB, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpinsrb, P66, 0x0f3a20, "vpinsrb", SSE, d1(VDQ), s3(EB, IB, HDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Insertps, P66, 0x0f3a21, "insertps", SSEFP, d1(VDQ), s3(WD, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vinsertps, P66, 0x0f3a21, "vinsertps", SSEFP, d1(VDQ), s3(HDQ, WD, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pinsrd, P66, 0x0f3a22, "pinsrd", SSE, d1(VDQ), s3(EY, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpinsrd, P66, 0x0f3a22, "vpinsrd", SSE, d1(VDQ), s3(EY, IB, HDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 40..44
    [
        IE, IE,
        entp(Dpps, P66, 0x0f3a40, "dpps", SSEFP.union(MTH), d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vdpps, P66, 0x0f3a40, "vdpps", SSEFP.union(MTH), d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Dppd, P66, 0x0f3a41, "dppd", SSEFP.union(MTH), d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vdppd, P66, 0x0f3a41, "vdppd", SSEFP.union(MTH), d1(VDQ), s3(HDQ, WDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Mpsadbw, P66, 0x0f3a42, "mpsadbw", SSE.union(MTH), d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vmpsadbw, P66, 0x0f3a42, "vmpsadbw", SSE.union(MTH), d1(VX), s3(HXV, WX, IB), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pclmulqdq, P66, 0x0f3a44, "pclmulqdq", SSE.union(MTH), d1(VDQ), s3(WDQ, IB, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vpclmulqdq, P66, 0x0f3a44, "vpclmulqdq", SSE.union(MTH), d1(VDQ), s3(HDQ, WDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 4A..4C: variable blends (IS4 selector)
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vblendvps, P66, 0x0f3a4a, "vblendvps", SSEFP, d1(VX), s3(HXV, WX, LX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vblendvpd, P66, 0x0f3a4b, "vblendvpd", SSEFP, d1(VX), s3(HXV, WX, LX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vpblendvb, P66, 0x0f3a4c, "vpblendvb", SSE, d1(VX), s3(HXV, WX, LX), VEXMP, FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 60..63: string compares
    [
        IE, IE,
        entp(Pcmpestrm, P66, 0x0f3a60, "pcmpestrm", SSE, d1(XMM0), s3(VDQ, WDQ, IB), MRMP.union(XTRA), FW6, extra(super::extras::XT_PCMPESTR)),
        IE,
        IE,
        IE,
        entp(Vpcmpestrm, P66, 0x0f3a60, "vpcmpestrm", SSE, d1(XMM0), s3(VDQ, WDQ, IB), VEXMP.union(Attrs::VEX_L_0).union(XTRA), FW6, extra(super::extras::XT_PCMPESTR)),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pcmpestri, P66, 0x0f3a61, "pcmpestri", SSE, d1(ECX), s3(VDQ, WDQ, IB), MRMP.union(XTRA), FW6, extra(super::extras::XT_PCMPESTR)),
        IE,
        IE,
        IE,
        entp(Vpcmpestri, P66, 0x0f3a61, "vpcmpestri", SSE, d1(ECX), s3(VDQ, WDQ, IB), VEXMP.union(Attrs::VEX_L_0).union(XTRA), FW6, extra(super::extras::XT_PCMPESTR)),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pcmpistrm, P66, 0x0f3a62, "pcmpistrm", SSE, d1(XMM0), s3(VDQ, WDQ, IB), MRMP, FW6, END),
        IE,
        IE,
        IE,
        entp(Vpcmpistrm, P66, 0x0f3a62, "vpcmpistrm", SSE, d1(XMM0), s3(VDQ, WDQ, IB), VEXMP.union(Attrs::VEX_L_0), FW6, END),
        IE,
        IE, IE, IE, IE,
    ],
    [
        IE, IE,
        entp(Pcmpistri, P66, 0x0f3a63, "pcmpistri", SSE, d1(ECX), s3(VDQ, WDQ, IB), MRMP, FW6, END),
        IE,
        IE,
        IE,
        entp(Vpcmpistri, P66, 0x0f3a63, "vpcmpistri", SSE, d1(ECX), s3(VDQ, WDQ, IB), VEXMP.union(Attrs::VEX_L_0), FW6, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A DF: aeskeygenassist
    [
        IE, IE,
        entp(Aeskeygenassist, P66, 0x0f3adf, "aeskeygenassist", SSE, d1(VDQ), s2(WDQ, IB), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(Vaeskeygenassist, P66, 0x0f3adf, "vaeskeygenassist", SSE, d1(VDQ), s2(WDQ, IB), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
    // 0F 3A 06: vperm2f128
    [
        IE, IE, IE, IE, IE, IE,
        entp(Vperm2f128, P66, 0x0f3a06, "vperm2f128", SSEFP, d1(VX), s3(HXV, WX, IB), VEXMP.union(Attrs::VEX_L_1), FNONE, END),
        IE,
        IE, IE, IE, IE,
    ],
];

/// Standard MMX + SSE2 + AVX integer-op row: MMX form in the no-prefix slot,
/// XMM form under 66, three-operand AVX form under VEX.66. The XMM entry is
/// the canonical encoding and chains to the MMX one.
const fn mmx_row(
    me: u8,
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
) -> [Entry; 12] {
    [
        ent(op, code, mn, SSE, d1(PQ), s2(QQ, PQ), MRM, FNONE, END),
        IE,
        entp(op, P66, code, mn, SSE, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, pe(me, 0)),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}

/// Unary variant of [`mmx_row`] (PABS family).
const fn mmx_unary_row(
    me: u8,
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
) -> [Entry; 12] {
    [
        ent(op, code, mn, SSE, d1(PQ), s1(QQ), MRM, FNONE, END),
        IE,
        entp(op, P66, code, mn, SSE, d1(VDQ), s1(WDQ), MRMP, FNONE, pe(me, 0)),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE, d1(VX), s1(WX), VEXMP, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}

/// SSE4.1-style binary row: 66-prefixed XMM form plus the three-operand AVX
/// form.
const fn sse41_row(
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
) -> [Entry; 12] {
    [
        IE,
        IE,
        entp(op, P66, code, mn, SSE, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE, d1(VX), s2(HXV, WX), VEXMP, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}

/// Unary variant of [`sse41_row`].
const fn sse41_unary_row(
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
) -> [Entry; 12] {
    [
        IE,
        IE,
        entp(op, P66, code, mn, SSE, d1(VDQ), s1(WDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE, d1(VDQ), s1(WDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}

/// Widening move row (PMOVSX/PMOVZX): the source narrows with the element
/// ratio.
const fn pmov_row(
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
    lsrc: crate::schema::operand::OperandDesc,
    vsrc: crate::schema::operand::OperandDesc,
) -> [Entry; 12] {
    [
        IE,
        IE,
        entp(op, P66, code, mn, SSE.union(CVT), d1(VDQ), s1(lsrc), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE.union(CVT), d1(VX), s1(vsrc), VEXMP, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}

/// AES row: the VEX form stays 128-bit.
const fn aes_row(
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
) -> [Entry; 12] {
    [
        IE,
        IE,
        entp(op, P66, code, mn, SSE, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, END),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE, d1(VDQ), s2(HDQ, WDQ), VEXMP.union(Attrs::VEX_L_0), FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}

/// Vector shift by the low quadword of the count operand: like [`mmx_row`],
/// but the AVX count stays 128 bits regardless of VEX.L.
const fn shift_row(
    me: u8,
    op: crate::schema::opcode::Opcode,
    vop: crate::schema::opcode::Opcode,
    code: u32,
    mn: &'static str,
    vmn: &'static str,
) -> [Entry; 12] {
    [
        ent(op, code, mn, SSE, d1(PQ), s2(QQ, PQ), MRM, FNONE, END),
        IE,
        entp(op, P66, code, mn, SSE, d1(VDQ), s2(WDQ, VDQ), MRMP, FNONE, pe(me, 0)),
        IE,
        IE,
        IE,
        entp(vop, P66, code, vmn, SSE, d1(VX), s2(HXV, WDQ), VEXMP, FNONE, END),
        IE,
        IE,
        IE,
        IE,
        IE,
    ]
}
