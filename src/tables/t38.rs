//! The 0F 38 three-byte opcode map. Sparse: unassigned bytes stay invalid.

use super::defs::*;
use super::groups::Grp;
use super::prefix_ext::Pe;
use crate::schema::opcode::Opcode::*;
use crate::template::DispatchKind::*;
use crate::template::Entry;

pub(crate) static THREE_BYTE_38: [Entry; 256] = build();

const fn pext_at(t: &mut [Entry; 256], byte: usize, row: Pe, mn: &'static str) {
    t[byte] = dis(PrefixExt, row as u8, mn);
}

const fn build() -> [Entry; 256] {
    let mut t = [IE; 256];
    pext_at(&mut t, 0x00, Pe::Pshufb3800, "(pshufb)");
    pext_at(&mut t, 0x01, Pe::Phaddw3801, "(phaddw)");
    pext_at(&mut t, 0x02, Pe::Phaddd3802, "(phaddd)");
    pext_at(&mut t, 0x03, Pe::Phaddsw3803, "(phaddsw)");
    pext_at(&mut t, 0x04, Pe::Pmaddubsw3804, "(pmaddubsw)");
    pext_at(&mut t, 0x05, Pe::Phsubw3805, "(phsubw)");
    pext_at(&mut t, 0x06, Pe::Phsubd3806, "(phsubd)");
    pext_at(&mut t, 0x07, Pe::Phsubsw3807, "(phsubsw)");
    pext_at(&mut t, 0x08, Pe::Psignb3808, "(psignb)");
    pext_at(&mut t, 0x09, Pe::Psignw3809, "(psignw)");
    pext_at(&mut t, 0x0a, Pe::Psignd380A, "(psignd)");
    pext_at(&mut t, 0x0b, Pe::Pmulhrsw380B, "(pmulhrsw)");
    pext_at(&mut t, 0x10, Pe::Pblendvb3810, "(pblendvb)");
    pext_at(&mut t, 0x14, Pe::Blendvps3814, "(blendvps)");
    pext_at(&mut t, 0x15, Pe::Blendvpd3815, "(blendvpd)");
    pext_at(&mut t, 0x17, Pe::Ptest3817, "(ptest)");
    pext_at(&mut t, 0x18, Pe::Vbroadcastss3818, "(vbroadcastss)");
    pext_at(&mut t, 0x19, Pe::Vbroadcastsd3819, "(vbroadcastsd)");
    pext_at(&mut t, 0x1c, Pe::Pabsb381C, "(pabsb)");
    pext_at(&mut t, 0x1d, Pe::Pabsw381D, "(pabsw)");
    pext_at(&mut t, 0x1e, Pe::Pabsd381E, "(pabsd)");
    pext_at(&mut t, 0x20, Pe::Pmovsxbw3820, "(pmovsxbw)");
    pext_at(&mut t, 0x21, Pe::Pmovsxbd3821, "(pmovsxbd)");
    pext_at(&mut t, 0x22, Pe::Pmovsxbq3822, "(pmovsxbq)");
    pext_at(&mut t, 0x23, Pe::Pmovsxwd3823, "(pmovsxwd)");
    pext_at(&mut t, 0x24, Pe::Pmovsxwq3824, "(pmovsxwq)");
    pext_at(&mut t, 0x25, Pe::Pmovsxdq3825, "(pmovsxdq)");
    pext_at(&mut t, 0x28, Pe::Pmuldq3828, "(pmuldq)");
    pext_at(&mut t, 0x29, Pe::Pcmpeqq3829, "(pcmpeqq)");
    pext_at(&mut t, 0x2a, Pe::Movntdqa382A, "(movntdqa)");
    pext_at(&mut t, 0x2b, Pe::Packusdw382B, "(packusdw)");
    pext_at(&mut t, 0x30, Pe::Pmovzxbw3830, "(pmovzxbw)");
    pext_at(&mut t, 0x31, Pe::Pmovzxbd3831, "(pmovzxbd)");
    pext_at(&mut t, 0x32, Pe::Pmovzxbq3832, "(pmovzxbq)");
    pext_at(&mut t, 0x33, Pe::Pmovzxwd3833, "(pmovzxwd)");
    pext_at(&mut t, 0x34, Pe::Pmovzxwq3834, "(pmovzxwq)");
    pext_at(&mut t, 0x35, Pe::Pmovzxdq3835, "(pmovzxdq)");
    pext_at(&mut t, 0x37, Pe::Pcmpgtq3837, "(pcmpgtq)");
    pext_at(&mut t, 0x38, Pe::Pminsb3838, "(pminsb)");
    pext_at(&mut t, 0x39, Pe::Pminsd3839, "(pminsd)");
    pext_at(&mut t, 0x3a, Pe::Pminuw383A, "(pminuw)");
    pext_at(&mut t, 0x3b, Pe::Pminud383B, "(pminud)");
    pext_at(&mut t, 0x3c, Pe::Pmaxsb383C, "(pmaxsb)");
    pext_at(&mut t, 0x3d, Pe::Pmaxsd383D, "(pmaxsd)");
    pext_at(&mut t, 0x3e, Pe::Pmaxuw383E, "(pmaxuw)");
    pext_at(&mut t, 0x3f, Pe::Pmaxud383F, "(pmaxud)");
    pext_at(&mut t, 0x40, Pe::Pmulld3840, "(pmulld)");
    pext_at(&mut t, 0x41, Pe::Phminposuw3841, "(phminposuw)");
    pext_at(&mut t, 0x55, Pe::Vpopcnt3855, "(vpopcnt)");
    pext_at(&mut t, 0x58, Pe::Vpbroadcastd3858, "(vpbroadcastd)");
    pext_at(&mut t, 0x59, Pe::Vpbroadcastq3859, "(vpbroadcastq)");
    pext_at(&mut t, 0x78, Pe::Vpbroadcastb3878, "(vpbroadcastb)");
    pext_at(&mut t, 0x79, Pe::Vpbroadcastw3879, "(vpbroadcastw)");
    pext_at(&mut t, 0x90, Pe::Gather3890, "(vpgatherdd)");
    pext_at(&mut t, 0x91, Pe::Gather3891, "(vpgatherqd)");
    pext_at(&mut t, 0x92, Pe::Gather3892, "(vgatherdps)");
    pext_at(&mut t, 0x93, Pe::Gather3893, "(vgatherqps)");
    pext_at(&mut t, 0x98, Pe::Fma3898, "(vfmadd132)");
    pext_at(&mut t, 0xa8, Pe::Fma38A8, "(vfmadd213)");
    pext_at(&mut t, 0xb8, Pe::Fma38B8, "(vfmadd231)");
    t[0xc6] = dis(Extension, Grp::Gpf6 as u8, "(avx512 prefetch)");
    t[0xc8] = ent(Sha1nexte, 0x0f38c8, "sha1nexte", SSE.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END);
    t[0xc9] = ent(Sha1msg1, 0x0f38c9, "sha1msg1", SSE.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END);
    t[0xca] = ent(Sha1msg2, 0x0f38ca, "sha1msg2", SSE.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END);
    t[0xcb] = ent(Sha256rnds2, 0x0f38cb, "sha256rnds2", SSE.union(MTH), d1(VDQ), s3(WDQ, XMM0, VDQ), MRM, FNONE, END);
    t[0xcc] = ent(Sha256msg1, 0x0f38cc, "sha256msg1", SSE.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END);
    t[0xcd] = ent(Sha256msg2, 0x0f38cd, "sha256msg2", SSE.union(MTH), d1(VDQ), s2(WDQ, VDQ), MRM, FNONE, END);
    pext_at(&mut t, 0xdb, Pe::Aesimc38DB, "(aesimc)");
    pext_at(&mut t, 0xdc, Pe::Aesenc38DC, "(aesenc)");
    pext_at(&mut t, 0xdd, Pe::Aesenclast38DD, "(aesenclast)");
    pext_at(&mut t, 0xde, Pe::Aesdec38DE, "(aesdec)");
    pext_at(&mut t, 0xdf, Pe::Aesdeclast38DF, "(aesdeclast)");
    pext_at(&mut t, 0xf0, Pe::MovbeF0, "(movbe)");
    pext_at(&mut t, 0xf1, Pe::MovbeF1, "(movbe)");
    pext_at(&mut t, 0xf2, Pe::AndnF2, "(andn)");
    t[0xf3] = dis(Extension, Grp::G17 as u8, "(grp 17)");
    pext_at(&mut t, 0xf5, Pe::BzhiF5, "(bzhi)");
    pext_at(&mut t, 0xf6, Pe::AdcxF6, "(adcx)");
    pext_at(&mut t, 0xf7, Pe::BextrF7, "(bextr)");
    t
}
