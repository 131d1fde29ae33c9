//! The 0F 3A three-byte opcode map. Every defined byte here carries a
//! trailing immediate.

use super::defs::*;
use super::prefix_ext::Pe;
use crate::schema::opcode::Opcode::*;
use crate::template::DispatchKind::*;
use crate::template::Entry;

pub(crate) static THREE_BYTE_3A: [Entry; 256] = build();

const fn pext_at(t: &mut [Entry; 256], byte: usize, row: Pe, mn: &'static str) {
    t[byte] = dis(PrefixExt, row as u8, mn);
}

const fn build() -> [Entry; 256] {
    let mut t = [IE; 256];
    pext_at(&mut t, 0x06, Pe::Vperm3A06, "(vperm2f128)");
    pext_at(&mut t, 0x08, Pe::Roundps3A08, "(roundps)");
    pext_at(&mut t, 0x09, Pe::Roundpd3A09, "(roundpd)");
    pext_at(&mut t, 0x0a, Pe::Roundss3A0A, "(roundss)");
    pext_at(&mut t, 0x0b, Pe::Roundsd3A0B, "(roundsd)");
    pext_at(&mut t, 0x0c, Pe::Blendps3A0C, "(blendps)");
    pext_at(&mut t, 0x0d, Pe::Blendpd3A0D, "(blendpd)");
    pext_at(&mut t, 0x0e, Pe::Pblendw3A0E, "(pblendw)");
    pext_at(&mut t, 0x0f, Pe::Palignr3A0F, "(palignr)");
    pext_at(&mut t, 0x14, Pe::Pextrb3A14, "(pextrb)");
    pext_at(&mut t, 0x15, Pe::Pextrw3A15, "(pextrw)");
    pext_at(&mut t, 0x16, Pe::Pextrd3A16, "(pextrd)");
    pext_at(&mut t, 0x17, Pe::Extractps3A17, "(extractps)");
    pext_at(&mut t, 0x18, Pe::Vinsertf3A18, "(vinsertf128)");
    pext_at(&mut t, 0x19, Pe::Vextractf3A19, "(vextractf128)");
    pext_at(&mut t, 0x20, Pe::Pinsrb3A20, "(pinsrb)");
    pext_at(&mut t, 0x21, Pe::Insertps3A21, "(insertps)");
    pext_at(&mut t, 0x22, Pe::Pinsrd3A22, "(pinsrd)");
    pext_at(&mut t, 0x40, Pe::Dpps3A40, "(dpps)");
    pext_at(&mut t, 0x41, Pe::Dppd3A41, "(dppd)");
    pext_at(&mut t, 0x42, Pe::Mpsadbw3A42, "(mpsadbw)");
    pext_at(&mut t, 0x44, Pe::Pclmul3A44, "(pclmulqdq)");
    pext_at(&mut t, 0x4a, Pe::Vblendvps3A4A, "(vblendvps)");
    pext_at(&mut t, 0x4b, Pe::Vblendvpd3A4B, "(vblendvpd)");
    pext_at(&mut t, 0x4c, Pe::Vpblendvb3A4C, "(vpblendvb)");
    pext_at(&mut t, 0x60, Pe::Pcmpestrm3A60, "(pcmpestrm)");
    pext_at(&mut t, 0x61, Pe::Pcmpestri3A61, "(pcmpestri)");
    pext_at(&mut t, 0x62, Pe::Pcmpistrm3A62, "(pcmpistrm)");
    pext_at(&mut t, 0x63, Pe::Pcmpistri3A63, "(pcmpistri)");
    t[0xcc] = ent(Sha1rnds4, 0x0f3acc, "sha1rnds4", SSE.union(MTH), d1(VDQ), s3(WDQ, IB, VDQ), MRM, FNONE, END);
    pext_at(&mut t, 0xdf, Pe::Aeskeygen3ADF, "(aeskeygenassist)");
    t
}
