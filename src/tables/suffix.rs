//! The 3DNow! suffix table (`0F 0F /r imm8`): the trailing immediate byte
//! selects the operation after the operand bytes.

use super::defs::*;
use crate::schema::opcode::Opcode::{self, *};
use crate::template::Entry;

pub(crate) static SUFFIX: [Entry; 256] = build();

const fn amd3dnow(op: Opcode, suffix: u32, mn: &'static str) -> Entry {
    ent(op, 0x0f0f00 | suffix, mn, SSEFP.union(MTH), d1(PQ), s2(QQ, PQ), MRM, FNONE, END)
}

const fn build() -> [Entry; 256] {
    let mut t = [IE; 256];
    t[0x0d] = ent(Pi2fd, 0x0f0f0d, "pi2fd", SSEFP.union(CVT), d1(PQ), s1(QQ), MRM, FNONE, END);
    t[0x1d] = ent(Pf2id, 0x0f0f1d, "pf2id", SSEFP.union(CVT), d1(PQ), s1(QQ), MRM, FNONE, END);
    t[0x90] = ent(Pfcmpge, 0x0f0f90, "pfcmpge", SSEFP, d1(PQ), s2(QQ, PQ), MRM, FNONE, END);
    t[0x94] = amd3dnow(Pfmin, 0x94, "pfmin");
    t[0x96] = ent(Pfrcp, 0x0f0f96, "pfrcp", SSEFP.union(MTH), d1(PQ), s1(QQ), MRM, FNONE, END);
    t[0x97] = ent(Pfrsqrt, 0x0f0f97, "pfrsqrt", SSEFP.union(MTH), d1(PQ), s1(QQ), MRM, FNONE, END);
    t[0x9a] = amd3dnow(Pfsub, 0x9a, "pfsub");
    t[0x9e] = amd3dnow(Pfadd, 0x9e, "pfadd");
    t[0xa4] = amd3dnow(Pfmax, 0xa4, "pfmax");
    t[0xaa] = amd3dnow(Pfsubr, 0xaa, "pfsubr");
    t[0xb0] = amd3dnow(Pfcmpeq, 0xb0, "pfcmpeq");
    t[0xb4] = amd3dnow(Pfmul, 0xb4, "pfmul");
    t[0xb7] = amd3dnow(Pmulhrw, 0xb7, "pmulhrw");
    t[0xbf] = amd3dnow(Pavgusb, 0xbf, "pavgusb");
    t
}
