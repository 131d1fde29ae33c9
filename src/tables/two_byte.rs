//! The two-byte (0F-escape) opcode map.

use super::defs::*;
use super::extras::XT_CPUID;
use super::groups::Grp;
use super::prefix_ext::Pe;
use super::vex::Evr;
use crate::schema::opcode::Opcode::*;
use crate::template::DispatchKind::*;
use crate::template::Entry;

pub(crate) static TWO_BYTE: [Entry; 256] = [
    /* 00 */ dis(Extension, Grp::G6 as u8, "(grp 6)"),
    /* 01 */ dis(Extension, Grp::G7 as u8, "(grp 7)"),
    /* 02 */ ent(Lar, 0x0f02, "lar", SYS, d1(GV), s1(EW), MRM, FWZ, END),
    /* 03 */ ent(Lsl, 0x0f03, "lsl", SYS, d1(GV), s1(EW), MRM, FWZ, END),
    /* 04 */ IE,
    /* 05 */ ent(Syscall, 0x0f05, "syscall", BR.union(SYS), d1(XCX), s0(), O64, FNONE, END),
    /* 06 */ ent(Clts, 0x0f06, "clts", SYS, d0(), s0(), NA, FNONE, END),
    /* 07 */ ent(Sysret, 0x0f07, "sysret", BR.union(SYS), d0(), s1(XCX), O64, FNONE, END),
    /* 08 */ ent(Invd, 0x0f08, "invd", SYS, d0(), s0(), NA, FNONE, END),
    /* 09 */ ent(Wbinvd, 0x0f09, "wbinvd", SYS, d0(), s0(), NA, FNONE, END),
    /* 0A */ IE,
    /* 0B */ ent(Ud2, 0x0f0b, "ud2", INT, d0(), s0(), NA, FNONE, END),
    /* 0C */ IE,
    /* 0D */ dis(Extension, Grp::GP as u8, "(grp p)"),
    /* 0E */ ent(Femms, 0x0f0e, "femms", FPU.union(SYS), d0(), s0(), NA, FNONE, END),
    /* 0F */ dis(SuffixExt, 0, "(3dnow)"),
    /* 10 */ dis(PrefixExt, Pe::Movups10 as u8, "(movups)"),
    /* 11 */ dis(PrefixExt, Pe::Movups11 as u8, "(movups)"),
    /* 12 */ dis(PrefixExt, Pe::Movlps12 as u8, "(movlps)"),
    /* 13 */ dis(PrefixExt, Pe::Movlps13 as u8, "(movlps)"),
    /* 14 */ dis(PrefixExt, Pe::Unpck14 as u8, "(unpcklps)"),
    /* 15 */ dis(PrefixExt, Pe::Unpck15 as u8, "(unpckhps)"),
    /* 16 */ dis(PrefixExt, Pe::Movhps16 as u8, "(movhps)"),
    /* 17 */ dis(PrefixExt, Pe::Movhps17 as u8, "(movhps)"),
    /* 18 */ dis(Extension, Grp::G16 as u8, "(grp 16)"),
    /* 19 */ ent(Nop, 0x0f19, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 1A */ ent(Nop, 0x0f1a, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 1B */ ent(Nop, 0x0f1b, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 1C */ ent(Nop, 0x0f1c, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 1D */ ent(Nop, 0x0f1d, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 1E */ ent(Nop, 0x0f1e, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 1F */ ent(Nop, 0x0f1f, "nop", UNC, d0(), s0(), MRM, FNONE, END),
    /* 20 */ ent(MovCr, 0x0f20, "mov", SYS, d1(RY), s1(CR), MRM, FNONE, tb(0x22)),
    /* 21 */ ent(MovDr, 0x0f21, "mov", SYS, d1(RY), s1(DR), MRM, FNONE, tb(0x23)),
    /* 22 */ ent(MovCr, 0x0f22, "mov", SYS, d1(CR), s1(RY), MRM, FNONE, END),
    /* 23 */ ent(MovDr, 0x0f23, "mov", SYS, d1(DR), s1(RY), MRM, FNONE, END),
    /* 24 */ IE,
    /* 25 */ IE,
    /* 26 */ IE,
    /* 27 */ IE,
    /* 28 */ dis(PrefixExt, Pe::Movaps28 as u8, "(movaps)"),
    /* 29 */ dis(PrefixExt, Pe::Movaps29 as u8, "(movaps)"),
    /* 2A */ dis(PrefixExt, Pe::Cvt2A as u8, "(cvtpi2ps)"),
    /* 2B */ dis(PrefixExt, Pe::Movnt2B as u8, "(movntps)"),
    /* 2C */ dis(PrefixExt, Pe::Cvtt2C as u8, "(cvttps2pi)"),
    /* 2D */ dis(PrefixExt, Pe::Cvt2D as u8, "(cvtps2pi)"),
    /* 2E */ dis(PrefixExt, Pe::Ucomis2E as u8, "(ucomiss)"),
    /* 2F */ dis(PrefixExt, Pe::Comis2F as u8, "(comiss)"),
    /* 30 */ ent(Wrmsr, 0x0f30, "wrmsr", SYS, d0(), s3(ECX, EDX, EAX), NA, FNONE, END),
    /* 31 */ ent(Rdtsc, 0x0f31, "rdtsc", SYS, d2(EDX, EAX), s0(), NA, FNONE, END),
    /* 32 */ ent(Rdmsr, 0x0f32, "rdmsr", SYS, d2(EDX, EAX), s1(ECX), NA, FNONE, END),
    /* 33 */ ent(Rdpmc, 0x0f33, "rdpmc", SYS, d2(EDX, EAX), s1(ECX), NA, FNONE, END),
    /* 34 */ ent(Sysenter, 0x0f34, "sysenter", BR.union(SYS), d1(XSP), s0(), NA, FNONE, END),
    /* 35 */ ent(Sysexit, 0x0f35, "sysexit", BR.union(SYS), d1(XSP), s2(XCX, XDX), NA, FNONE, END),
    /* 36 */ IE,
    /* 37 */ IE,
    /* 38 */ dis(Escape38, 0, "(three-byte 38)"),
    /* 39 */ IE,
    /* 3A */ dis(Escape3A, 0, "(three-byte 3a)"),
    /* 3B */ IE,
    /* 3C */ IE,
    /* 3D */ IE,
    /* 3E */ IE,
    /* 3F */ IE,
    /* 40 */ ent(Cmovo, 0x0f40, "cmovo", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRO, END),
    /* 41 */ ent(Cmovno, 0x0f41, "cmovno", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRO, END),
    /* 42 */ ent(Cmovb, 0x0f42, "cmovb", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRC, END),
    /* 43 */ ent(Cmovnb, 0x0f43, "cmovnb", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRC, END),
    /* 44 */ ent(Cmovz, 0x0f44, "cmovz", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRZ, END),
    /* 45 */ ent(Cmovnz, 0x0f45, "cmovnz", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRZ, END),
    /* 46 */ ent(Cmovbe, 0x0f46, "cmovbe", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRCZ, END),
    /* 47 */ ent(Cmovnbe, 0x0f47, "cmovnbe", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRCZ, END),
    /* 48 */ ent(Cmovs, 0x0f48, "cmovs", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRS, END),
    /* 49 */ ent(Cmovns, 0x0f49, "cmovns", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRS, END),
    /* 4A */ ent(Cmovp, 0x0f4a, "cmovp", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRP, END),
    /* 4B */ ent(Cmovnp, 0x0f4b, "cmovnp", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRP, END),
    /* 4C */ ent(Cmovl, 0x0f4c, "cmovl", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRSO, END),
    /* 4D */ ent(Cmovnl, 0x0f4d, "cmovnl", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRSO, END),
    /* 4E */ ent(Cmovle, 0x0f4e, "cmovle", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRSOZ, END),
    /* 4F */ ent(Cmovnle, 0x0f4f, "cmovnle", INT, d1(GV), s1(EV), MRM.union(PREDCC), FRSOZ, END),
    /* 50 */ dis(PrefixExt, Pe::Movmsk50 as u8, "(movmskps)"),
    /* 51 */ dis(PrefixExt, Pe::Sqrt51 as u8, "(sqrtps)"),
    /* 52 */ dis(PrefixExt, Pe::Rsqrt52 as u8, "(rsqrtps)"),
    /* 53 */ dis(PrefixExt, Pe::Rcp53 as u8, "(rcpps)"),
    /* 54 */ dis(PrefixExt, Pe::And54 as u8, "(andps)"),
    /* 55 */ dis(PrefixExt, Pe::Andn55 as u8, "(andnps)"),
    /* 56 */ dis(PrefixExt, Pe::Or56 as u8, "(orps)"),
    /* 57 */ dis(PrefixExt, Pe::Xor57 as u8, "(xorps)"),
    /* 58 */ dis(PrefixExt, Pe::Add58 as u8, "(addps)"),
    /* 59 */ dis(PrefixExt, Pe::Mul59 as u8, "(mulps)"),
    /* 5A */ dis(PrefixExt, Pe::Cvt5A as u8, "(cvtps2pd)"),
    /* 5B */ dis(PrefixExt, Pe::Cvt5B as u8, "(cvtdq2ps)"),
    /* 5C */ dis(PrefixExt, Pe::Sub5C as u8, "(subps)"),
    /* 5D */ dis(PrefixExt, Pe::Min5D as u8, "(minps)"),
    /* 5E */ dis(PrefixExt, Pe::Div5E as u8, "(divps)"),
    /* 5F */ dis(PrefixExt, Pe::Max5F as u8, "(maxps)"),
    /* 60 */ dis(PrefixExt, Pe::Punpcklbw60 as u8, "(punpcklbw)"),
    /* 61 */ dis(PrefixExt, Pe::Punpcklwd61 as u8, "(punpcklwd)"),
    /* 62 */ dis(PrefixExt, Pe::Punpckldq62 as u8, "(punpckldq)"),
    /* 63 */ dis(PrefixExt, Pe::Packsswb63 as u8, "(packsswb)"),
    /* 64 */ dis(PrefixExt, Pe::Pcmpgtb64 as u8, "(pcmpgtb)"),
    /* 65 */ dis(PrefixExt, Pe::Pcmpgtw65 as u8, "(pcmpgtw)"),
    /* 66 */ dis(PrefixExt, Pe::Pcmpgtd66 as u8, "(pcmpgtd)"),
    /* 67 */ dis(PrefixExt, Pe::Packuswb67 as u8, "(packuswb)"),
    /* 68 */ dis(PrefixExt, Pe::Punpckhbw68 as u8, "(punpckhbw)"),
    /* 69 */ dis(PrefixExt, Pe::Punpckhwd69 as u8, "(punpckhwd)"),
    /* 6A */ dis(PrefixExt, Pe::Punpckhdq6A as u8, "(punpckhdq)"),
    /* 6B */ dis(PrefixExt, Pe::Packssdw6B as u8, "(packssdw)"),
    /* 6C */ dis(PrefixExt, Pe::Punpcklqdq6C as u8, "(punpcklqdq)"),
    /* 6D */ dis(PrefixExt, Pe::Punpckhqdq6D as u8, "(punpckhqdq)"),
    /* 6E */ dis(PrefixExt, Pe::Movd6E as u8, "(movd)"),
    /* 6F */ dis(PrefixExt, Pe::Movq6F as u8, "(movq)"),
    /* 70 */ dis(PrefixExt, Pe::Pshuf70 as u8, "(pshufw)"),
    /* 71 */ dis(Extension, Grp::G12 as u8, "(grp 12)"),
    /* 72 */ dis(Extension, Grp::G13 as u8, "(grp 13)"),
    /* 73 */ dis(Extension, Grp::G14 as u8, "(grp 14)"),
    /* 74 */ dis(PrefixExt, Pe::Pcmpeqb74 as u8, "(pcmpeqb)"),
    /* 75 */ dis(PrefixExt, Pe::Pcmpeqw75 as u8, "(pcmpeqw)"),
    /* 76 */ dis(PrefixExt, Pe::Pcmpeqd76 as u8, "(pcmpeqd)"),
    /* 77 */ dis(VexLExt, 0, "(emms)"),
    /* 78 */ IE,
    /* 79 */ IE,
    /* 7A */ IE,
    /* 7B */ IE,
    /* 7C */ dis(PrefixExt, Pe::Hadd7C as u8, "(haddpd)"),
    /* 7D */ dis(PrefixExt, Pe::Hsub7D as u8, "(hsubpd)"),
    /* 7E */ dis(PrefixExt, Pe::Movd7E as u8, "(movd)"),
    /* 7F */ dis(PrefixExt, Pe::Movq7F as u8, "(movq)"),
    /* 80 */ ent(Jo, 0x0f80, "jo", BR, d0(), s1(JZ), PREDCC, FRO, END),
    /* 81 */ ent(Jno, 0x0f81, "jno", BR, d0(), s1(JZ), PREDCC, FRO, END),
    /* 82 */ ent(Jb, 0x0f82, "jb", BR, d0(), s1(JZ), PREDCC, FRC, END),
    /* 83 */ ent(Jnb, 0x0f83, "jnb", BR, d0(), s1(JZ), PREDCC, FRC, END),
    /* 84 */ ent(Jz, 0x0f84, "jz", BR, d0(), s1(JZ), PREDCC, FRZ, END),
    /* 85 */ ent(Jnz, 0x0f85, "jnz", BR, d0(), s1(JZ), PREDCC, FRZ, END),
    /* 86 */ ent(Jbe, 0x0f86, "jbe", BR, d0(), s1(JZ), PREDCC, FRCZ, END),
    /* 87 */ ent(Jnbe, 0x0f87, "jnbe", BR, d0(), s1(JZ), PREDCC, FRCZ, END),
    /* 88 */ ent(Js, 0x0f88, "js", BR, d0(), s1(JZ), PREDCC, FRS, END),
    /* 89 */ ent(Jns, 0x0f89, "jns", BR, d0(), s1(JZ), PREDCC, FRS, END),
    /* 8A */ ent(Jp, 0x0f8a, "jp", BR, d0(), s1(JZ), PREDCC, FRP, END),
    /* 8B */ ent(Jnp, 0x0f8b, "jnp", BR, d0(), s1(JZ), PREDCC, FRP, END),
    /* 8C */ ent(Jl, 0x0f8c, "jl", BR, d0(), s1(JZ), PREDCC, FRSO, END),
    /* 8D */ ent(Jnl, 0x0f8d, "jnl", BR, d0(), s1(JZ), PREDCC, FRSO, END),
    /* 8E */ ent(Jle, 0x0f8e, "jle", BR, d0(), s1(JZ), PREDCC, FRSOZ, END),
    /* 8F */ ent(Jnle, 0x0f8f, "jnle", BR, d0(), s1(JZ), PREDCC, FRSOZ, END),
    /* 90 */ dis(EVexExt, Evr::Set90 as u8, "(seto/kmov)"),
    /* 91 */ dis(EVexExt, Evr::Set91 as u8, "(setno/kmov)"),
    /* 92 */ dis(EVexExt, Evr::Set92 as u8, "(setb/kmov)"),
    /* 93 */ dis(EVexExt, Evr::Set93 as u8, "(setnb/kmov)"),
    /* 94 */ ent(Setz, 0x0f94, "setz", INT, d1(EB), s0(), MRM.union(PREDCC), FRZ, END),
    /* 95 */ ent(Setnz, 0x0f95, "setnz", INT, d1(EB), s0(), MRM.union(PREDCC), FRZ, END),
    /* 96 */ ent(Setbe, 0x0f96, "setbe", INT, d1(EB), s0(), MRM.union(PREDCC), FRCZ, END),
    /* 97 */ ent(Setnbe, 0x0f97, "setnbe", INT, d1(EB), s0(), MRM.union(PREDCC), FRCZ, END),
    /* 98 */ ent(Sets, 0x0f98, "sets", INT, d1(EB), s0(), MRM.union(PREDCC), FRS, END),
    /* 99 */ ent(Setns, 0x0f99, "setns", INT, d1(EB), s0(), MRM.union(PREDCC), FRS, END),
    /* 9A */ ent(Setp, 0x0f9a, "setp", INT, d1(EB), s0(), MRM.union(PREDCC), FRP, END),
    /* 9B */ ent(Setnp, 0x0f9b, "setnp", INT, d1(EB), s0(), MRM.union(PREDCC), FRP, END),
    /* 9C */ ent(Setl, 0x0f9c, "setl", INT, d1(EB), s0(), MRM.union(PREDCC), FRSO, END),
    /* 9D */ ent(Setnl, 0x0f9d, "setnl", INT, d1(EB), s0(), MRM.union(PREDCC), FRSO, END),
    /* 9E */ ent(Setle, 0x0f9e, "setle", INT, d1(EB), s0(), MRM.union(PREDCC), FRSOZ, END),
    /* 9F */ ent(Setnle, 0x0f9f, "setnle", INT, d1(EB), s0(), MRM.union(PREDCC), FRSOZ, END),
    /* A0 */ ent(Push, 0x0fa0, "push", INT, d2(XSP, STK_PUSH), s2(SEG_FS, XSP), NA, FNONE, tb(0xa8)),
    /* A1 */ ent(Pop, 0x0fa1, "pop", INT, d2(SEG_FS, XSP), s2(XSP, STK_POP), NA, FNONE, tb(0xa9)),
    /* A2 */ ent(Cpuid, 0x0fa2, "cpuid", SYS, d2(EAX, EBX), s2(EAX, ECX), XTRA, FNONE, extra(XT_CPUID)),
    /* A3 */ ent(Bt, 0x0fa3, "bt", INT, d0(), s2(EV, GV), MRM, FWC, grp(Grp::G8 as u8, 4)),
    /* A4 */ ent(Shld, 0x0fa4, "shld", INT, d1(EV), s3(GV, IB, EV), MRM, FW6, tb(0xa5)),
    /* A5 */ ent(Shld, 0x0fa5, "shld", INT, d1(EV), s3(GV, CL, EV), MRM, FW6, END),
    /* A6 */ IE,
    /* A7 */ IE,
    /* A8 */ ent(Push, 0x0fa8, "push", INT, d2(XSP, STK_PUSH), s2(SEG_GS, XSP), NA, FNONE, END),
    /* A9 */ ent(Pop, 0x0fa9, "pop", INT, d2(SEG_GS, XSP), s2(XSP, STK_POP), NA, FNONE, END),
    /* AA */ IE,
    /* AB */ ent(Bts, 0x0fab, "bts", INT, d1(EV), s2(GV, EV), MRM, FWC, grp(Grp::G8 as u8, 5)),
    /* AC */ ent(Shrd, 0x0fac, "shrd", INT, d1(EV), s3(GV, IB, EV), MRM, FW6, tb(0xad)),
    /* AD */ ent(Shrd, 0x0fad, "shrd", INT, d1(EV), s3(GV, CL, EV), MRM, FW6, END),
    /* AE */ dis(Extension, Grp::G15 as u8, "(grp 15)"),
    /* AF */ ent(Imul, 0x0faf, "imul", INT.union(MTH), d1(GV), s2(EV, GV), MRM, FW6, ob(0x69)),
    /* B0 */ ent(Cmpxchg, 0x0fb0, "cmpxchg", INT, d2(EB, AL), s3(GB, AL, EB), MRM, FW6, END),
    /* B1 */ ent(Cmpxchg, 0x0fb1, "cmpxchg", INT, d2(EV, XAX), s3(GV, XAX, EV), MRM, FW6, tb(0xb0)),
    /* B2 */ ent(Lss, 0x0fb2, "lss", INT.union(LD), d2(GV, SEG_SS), s1(MP), MRM, FNONE, END),
    /* B3 */ ent(Btr, 0x0fb3, "btr", INT, d1(EV), s2(GV, EV), MRM, FWC, grp(Grp::G8 as u8, 6)),
    /* B4 */ ent(Lfs, 0x0fb4, "lfs", INT.union(LD), d2(GV, SEG_FS), s1(MP), MRM, FNONE, END),
    /* B5 */ ent(Lgs, 0x0fb5, "lgs", INT.union(LD), d2(GV, SEG_GS), s1(MP), MRM, FNONE, END),
    /* B6 */ ent(Movzx, 0x0fb6, "movzx", INT.union(CVT), d1(GV), s1(EB), MRM, FNONE, tb(0xb7)),
    /* B7 */ ent(Movzx, 0x0fb7, "movzx", INT.union(CVT), d1(GV), s1(EW), MRM, FNONE, END),
    /* B8 */ dis(PrefixExt, Pe::PopcntB8 as u8, "(popcnt)"),
    /* B9 */ dis(Extension, Grp::G10 as u8, "(grp 10)"),
    /* BA */ dis(Extension, Grp::G8 as u8, "(grp 8)"),
    /* BB */ ent(Btc, 0x0fbb, "btc", INT, d1(EV), s2(GV, EV), MRM, FWC, grp(Grp::G8 as u8, 7)),
    /* BC */ dis(PrefixExt, Pe::BsfBC as u8, "(bsf)"),
    /* BD */ dis(PrefixExt, Pe::BsrBD as u8, "(bsr)"),
    /* BE */ ent(Movsx, 0x0fbe, "movsx", INT.union(CVT), d1(GV), s1(EB), MRM, FNONE, tb(0xbf)),
    /* BF */ ent(Movsx, 0x0fbf, "movsx", INT.union(CVT), d1(GV), s1(EW), MRM, FNONE, END),
    /* C0 */ ent(Xadd, 0x0fc0, "xadd", INT, d2(EB, GB), s2(GB, EB), MRM, FW6, END),
    /* C1 */ ent(Xadd, 0x0fc1, "xadd", INT, d2(EV, GV), s2(GV, EV), MRM, FW6, tb(0xc0)),
    /* C2 */ dis(PrefixExt, Pe::CmpC2 as u8, "(cmpps)"),
    /* C3 */ ent(Movnti, 0x0fc3, "movnti", INT.union(ST), d1(MV), s1(GV), MRM, FNONE, END),
    /* C4 */ dis(PrefixExt, Pe::PinsrwC4 as u8, "(pinsrw)"),
    /* C5 */ dis(PrefixExt, Pe::PextrwC5 as u8, "(pextrw)"),
    /* C6 */ dis(PrefixExt, Pe::ShufC6 as u8, "(shufps)"),
    /* C7 */ dis(Extension, Grp::G9 as u8, "(grp 9)"),
    /* C8 */ ent(Bswap, 0x0fc8, "bswap", INT, d1(gpry(0)), s1(gpry(0)), NA, FNONE, tb(0xc9)),
    /* C9 */ ent(Bswap, 0x0fc9, "bswap", INT, d1(gpry(1)), s1(gpry(1)), NA, FNONE, tb(0xca)),
    /* CA */ ent(Bswap, 0x0fca, "bswap", INT, d1(gpry(2)), s1(gpry(2)), NA, FNONE, tb(0xcb)),
    /* CB */ ent(Bswap, 0x0fcb, "bswap", INT, d1(gpry(3)), s1(gpry(3)), NA, FNONE, tb(0xcc)),
    /* CC */ ent(Bswap, 0x0fcc, "bswap", INT, d1(gpry(4)), s1(gpry(4)), NA, FNONE, tb(0xcd)),
    /* CD */ ent(Bswap, 0x0fcd, "bswap", INT, d1(gpry(5)), s1(gpry(5)), NA, FNONE, tb(0xce)),
    /* CE */ ent(Bswap, 0x0fce, "bswap", INT, d1(gpry(6)), s1(gpry(6)), NA, FNONE, tb(0xcf)),
    /* CF */ ent(Bswap, 0x0fcf, "bswap", INT, d1(gpry(7)), s1(gpry(7)), NA, FNONE, END),
    /* D0 */ dis(PrefixExt, Pe::AddsubD0 as u8, "(addsubpd)"),
    /* D1 */ dis(PrefixExt, Pe::PsrlwD1 as u8, "(psrlw)"),
    /* D2 */ dis(PrefixExt, Pe::PsrldD2 as u8, "(psrld)"),
    /* D3 */ dis(PrefixExt, Pe::PsrlqD3 as u8, "(psrlq)"),
    /* D4 */ dis(PrefixExt, Pe::PaddqD4 as u8, "(paddq)"),
    /* D5 */ dis(PrefixExt, Pe::PmullwD5 as u8, "(pmullw)"),
    /* D6 */ dis(PrefixExt, Pe::MovqD6 as u8, "(movq)"),
    /* D7 */ dis(PrefixExt, Pe::PmovmskbD7 as u8, "(pmovmskb)"),
    /* D8 */ dis(PrefixExt, Pe::PsubusbD8 as u8, "(psubusb)"),
    /* D9 */ dis(PrefixExt, Pe::PsubuswD9 as u8, "(psubusw)"),
    /* DA */ dis(PrefixExt, Pe::PminubDA as u8, "(pminub)"),
    /* DB */ dis(PrefixExt, Pe::PandDB as u8, "(pand)"),
    /* DC */ dis(PrefixExt, Pe::PaddusbDC as u8, "(paddusb)"),
    /* DD */ dis(PrefixExt, Pe::PadduswDD as u8, "(paddusw)"),
    /* DE */ dis(PrefixExt, Pe::PmaxubDE as u8, "(pmaxub)"),
    /* DF */ dis(PrefixExt, Pe::PandnDF as u8, "(pandn)"),
    /* E0 */ dis(PrefixExt, Pe::PavgbE0 as u8, "(pavgb)"),
    /* E1 */ dis(PrefixExt, Pe::PsrawE1 as u8, "(psraw)"),
    /* E2 */ dis(PrefixExt, Pe::PsradE2 as u8, "(psrad)"),
    /* E3 */ dis(PrefixExt, Pe::PavgwE3 as u8, "(pavgw)"),
    /* E4 */ dis(PrefixExt, Pe::PmulhuwE4 as u8, "(pmulhuw)"),
    /* E5 */ dis(PrefixExt, Pe::PmulhwE5 as u8, "(pmulhw)"),
    /* E6 */ dis(PrefixExt, Pe::CvtE6 as u8, "(cvtpd2dq)"),
    /* E7 */ dis(PrefixExt, Pe::MovntE7 as u8, "(movntq)"),
    /* E8 */ dis(PrefixExt, Pe::PsubsbE8 as u8, "(psubsb)"),
    /* E9 */ dis(PrefixExt, Pe::PsubswE9 as u8, "(psubsw)"),
    /* EA */ dis(PrefixExt, Pe::PminswEA as u8, "(pminsw)"),
    /* EB */ dis(PrefixExt, Pe::PorEB as u8, "(por)"),
    /* EC */ dis(PrefixExt, Pe::PaddsbEC as u8, "(paddsb)"),
    /* ED */ dis(PrefixExt, Pe::PaddswED as u8, "(paddsw)"),
    /* EE */ dis(PrefixExt, Pe::PmaxswEE as u8, "(pmaxsw)"),
    /* EF */ dis(PrefixExt, Pe::PxorEF as u8, "(pxor)"),
    /* F0 */ dis(PrefixExt, Pe::LddquF0 as u8, "(lddqu)"),
    /* F1 */ dis(PrefixExt, Pe::PsllwF1 as u8, "(psllw)"),
    /* F2 */ dis(PrefixExt, Pe::PslldF2 as u8, "(pslld)"),
    /* F3 */ dis(PrefixExt, Pe::PsllqF3 as u8, "(psllq)"),
    /* F4 */ dis(PrefixExt, Pe::PmuludqF4 as u8, "(pmuludq)"),
    /* F5 */ dis(PrefixExt, Pe::PmaddwdF5 as u8, "(pmaddwd)"),
    /* F6 */ dis(PrefixExt, Pe::PsadbwF6 as u8, "(psadbw)"),
    /* F7 */ dis(PrefixExt, Pe::MaskmovF7 as u8, "(maskmovq)"),
    /* F8 */ dis(PrefixExt, Pe::PsubbF8 as u8, "(psubb)"),
    /* F9 */ dis(PrefixExt, Pe::PsubwF9 as u8, "(psubw)"),
    /* FA */ dis(PrefixExt, Pe::PsubdFA as u8, "(psubd)"),
    /* FB */ dis(PrefixExt, Pe::PsubqFB as u8, "(psubq)"),
    /* FC */ dis(PrefixExt, Pe::PaddbFC as u8, "(paddb)"),
    /* FD */ dis(PrefixExt, Pe::PaddwFD as u8, "(paddw)"),
    /* FE */ dis(PrefixExt, Pe::PadddFE as u8, "(paddd)"),
    /* FF */ IE,
];
