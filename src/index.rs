//! The opcode index: for every opcode identifier, the head of its encoding
//! chain — the terminal entry whose re-encoding is the canonical byte
//! sequence for the instruction.
//!
//! The array is dense over [`Opcode`] and stays in lockstep with it;
//! `verify::check_tables` proves every non-END slot points at a terminal
//! entry carrying the matching identifier.

use crate::schema::opcode::Opcode;
use crate::tables::{self, Evr, Grp, Mx, Pe, Rn, Rp, Rx, Wb, Wv, Wx};
use crate::template::DispatchKind::*;
use crate::template::{Entry, EntryRef};

const fn ob(b: u8) -> EntryRef {
    EntryRef::OneByte(b)
}
const fn tb(b: u8) -> EntryRef {
    EntryRef::TwoByte(b)
}
const fn grp(t: Grp, reg: u8) -> EntryRef {
    EntryRef::Family(Extension, t as u8, reg)
}
const fn pe(t: Pe, idx: u8) -> EntryRef {
    EntryRef::Family(PrefixExt, t as u8, idx)
}
const fn mx(t: Mx, idx: u8) -> EntryRef {
    EntryRef::Family(ModExt, t as u8, idx)
}
const fn rx(t: Rx, idx: u8) -> EntryRef {
    EntryRef::Family(RmExt, t as u8, idx)
}
const fn wx(t: Wx, idx: u8) -> EntryRef {
    EntryRef::Family(RexWExt, t as u8, idx)
}
const fn wv(t: Wv, idx: u8) -> EntryRef {
    EntryRef::Family(VexWExt, t as u8, idx)
}
const fn wb(t: Wb, idx: u8) -> EntryRef {
    EntryRef::Family(EvexWbExt, t as u8, idx)
}
const fn ev(t: Evr, idx: u8) -> EntryRef {
    EntryRef::Family(EVexExt, t as u8, idx)
}
const fn rep(t: Rp, idx: u8) -> EntryRef {
    EntryRef::Family(RepExt, t as u8, idx)
}
const fn repne(t: Rn, idx: u8) -> EntryRef {
    EntryRef::Family(RepneExt, t as u8, idx)
}
const fn x64(t: u8, idx: u8) -> EntryRef {
    EntryRef::Family(X64Ext, t, idx)
}
const fn fl(t: u8, i: u8) -> EntryRef {
    EntryRef::FloatLow(t, i)
}
const fn fh(t: u8, i: u8) -> EntryRef {
    EntryRef::FloatHigh(t, i)
}
const fn sfx(b: u8) -> EntryRef {
    EntryRef::Suffix(b)
}

static INDEX: [EntryRef; Opcode::COUNT] =
    extend_x87(extend_maps38_3a(extend_avx(extend_simd(build_index()))));

/// Head of the encoding chain for `op`, or `None` for identifiers with no
/// direct encoding.
#[must_use]
pub fn encoding_head(op: Opcode) -> Option<&'static Entry> {
    tables::entry_at(INDEX[op as usize])
}

/// Raw reference form of [`encoding_head`], for the invariant checker.
pub(crate) fn encoding_head_ref(op: Opcode) -> EntryRef {
    INDEX[op as usize]
}

#[rustfmt::skip]
const fn build_index() -> [EntryRef; Opcode::COUNT] {
    use Opcode as O;
    let mut t = [EntryRef::End; Opcode::COUNT];
    // ALU core
    t[O::Add as usize] = ob(0x01);
    t[O::Or as usize] = ob(0x09);
    t[O::Adc as usize] = ob(0x11);
    t[O::Sbb as usize] = ob(0x19);
    t[O::And as usize] = ob(0x21);
    t[O::Sub as usize] = ob(0x29);
    t[O::Xor as usize] = ob(0x31);
    t[O::Cmp as usize] = ob(0x39);
    t[O::Test as usize] = ob(0x84);
    t[O::Not as usize] = grp(Grp::G3v, 2);
    t[O::Neg as usize] = grp(Grp::G3v, 3);
    t[O::Mul as usize] = grp(Grp::G3v, 4);
    t[O::Imul as usize] = tb(0xaf);
    t[O::Div as usize] = grp(Grp::G3v, 6);
    t[O::Idiv as usize] = grp(Grp::G3v, 7);
    t[O::Inc as usize] = grp(Grp::G5, 0);
    t[O::Dec as usize] = grp(Grp::G5, 1);
    // Stack, BCD, moves
    t[O::Push as usize] = ob(0x50);
    t[O::Pop as usize] = ob(0x58);
    t[O::Pusha as usize] = ob(0x60);
    t[O::Popa as usize] = ob(0x61);
    t[O::Bound as usize] = EntryRef::Family(EvexPrefixExt, 0, 0);
    t[O::Arpl as usize] = x64(16, 0);
    t[O::Movsxd as usize] = x64(16, 1);
    t[O::Daa as usize] = ob(0x27);
    t[O::Das as usize] = ob(0x2f);
    t[O::Aaa as usize] = ob(0x37);
    t[O::Aas as usize] = ob(0x3f);
    t[O::Aam as usize] = ob(0xd4);
    t[O::Aad as usize] = ob(0xd5);
    t[O::Salc as usize] = ob(0xd6);
    t[O::Xchg as usize] = ob(0x87);
    t[O::Mov as usize] = ob(0x89);
    t[O::MovSeg as usize] = ob(0x8e);
    t[O::Lea as usize] = ob(0x8d);
    t[O::Cwde as usize] = ob(0x98);
    t[O::Cdq as usize] = ob(0x99);
    t[O::Fwait as usize] = ob(0x9b);
    t[O::Pushf as usize] = ob(0x9c);
    t[O::Popf as usize] = ob(0x9d);
    t[O::Sahf as usize] = ob(0x9e);
    t[O::Lahf as usize] = ob(0x9f);
    t[O::Enter as usize] = ob(0xc8);
    t[O::Leave as usize] = ob(0xc9);
    // Strings
    t[O::Ins as usize] = rep(Rp::InsB, 0);
    t[O::RepIns as usize] = rep(Rp::InsB, 2);
    t[O::Outs as usize] = rep(Rp::OutsB, 0);
    t[O::RepOuts as usize] = rep(Rp::OutsB, 2);
    t[O::Movs as usize] = rep(Rp::MovsB, 0);
    t[O::RepMovs as usize] = rep(Rp::MovsB, 2);
    t[O::Stos as usize] = rep(Rp::StosB, 0);
    t[O::RepStos as usize] = rep(Rp::StosB, 2);
    t[O::Lods as usize] = rep(Rp::LodsB, 0);
    t[O::RepLods as usize] = rep(Rp::LodsB, 2);
    t[O::Cmps as usize] = repne(Rn::CmpsB, 0);
    t[O::RepeCmps as usize] = repne(Rn::CmpsB, 2);
    t[O::RepneCmps as usize] = repne(Rn::CmpsB, 4);
    t[O::Scas as usize] = repne(Rn::ScasB, 0);
    t[O::RepeScas as usize] = repne(Rn::ScasB, 2);
    t[O::RepneScas as usize] = repne(Rn::ScasB, 4);
    t[O::Xlat as usize] = ob(0xd7);
    // Control transfer
    t[O::Jo as usize] = ob(0x70);
    t[O::Jno as usize] = ob(0x71);
    t[O::Jb as usize] = ob(0x72);
    t[O::Jnb as usize] = ob(0x73);
    t[O::Jz as usize] = ob(0x74);
    t[O::Jnz as usize] = ob(0x75);
    t[O::Jbe as usize] = ob(0x76);
    t[O::Jnbe as usize] = ob(0x77);
    t[O::Js as usize] = ob(0x78);
    t[O::Jns as usize] = ob(0x79);
    t[O::Jp as usize] = ob(0x7a);
    t[O::Jnp as usize] = ob(0x7b);
    t[O::Jl as usize] = ob(0x7c);
    t[O::Jnl as usize] = ob(0x7d);
    t[O::Jle as usize] = ob(0x7e);
    t[O::Jnle as usize] = ob(0x7f);
    t[O::Call as usize] = ob(0xe8);
    t[O::CallFar as usize] = ob(0x9a);
    t[O::Jmp as usize] = ob(0xe9);
    t[O::JmpFar as usize] = ob(0xea);
    t[O::Ret as usize] = ob(0xc3);
    t[O::RetFar as usize] = ob(0xcb);
    t[O::Loopne as usize] = ob(0xe0);
    t[O::Loope as usize] = ob(0xe1);
    t[O::Loop as usize] = ob(0xe2);
    t[O::Jecxz as usize] = ob(0xe3);
    t[O::Int3 as usize] = ob(0xcc);
    t[O::Int as usize] = ob(0xcd);
    t[O::Int1 as usize] = ob(0xf1);
    t[O::Into as usize] = ob(0xce);
    t[O::Iret as usize] = ob(0xcf);
    // Shifts and rotates
    t[O::Rol as usize] = grp(Grp::G2v, 0);
    t[O::Ror as usize] = grp(Grp::G2v, 1);
    t[O::Rcl as usize] = grp(Grp::G2v, 2);
    t[O::Rcr as usize] = grp(Grp::G2v, 3);
    t[O::Shl as usize] = grp(Grp::G2v, 4);
    t[O::Shr as usize] = grp(Grp::G2v, 5);
    t[O::Sar as usize] = grp(Grp::G2v, 7);
    // Leftovers
    t[O::Les as usize] = EntryRef::Family(VexPrefixExt, 0, 0);
    t[O::Lds as usize] = EntryRef::Family(VexPrefixExt, 1, 0);
    t[O::In as usize] = ob(0xe4);
    t[O::Out as usize] = ob(0xe6);
    t[O::Hlt as usize] = ob(0xf4);
    t[O::Cmc as usize] = ob(0xf5);
    t[O::Clc as usize] = ob(0xf8);
    t[O::Stc as usize] = ob(0xf9);
    t[O::Cli as usize] = ob(0xfa);
    t[O::Sti as usize] = ob(0xfb);
    t[O::Cld as usize] = ob(0xfc);
    t[O::Std as usize] = ob(0xfd);
    t[O::Nop as usize] = EntryRef::Family(RexBExt, 0, 0);
    t[O::Pause as usize] = pe(Pe::Nop90, 1);
    // System
    t[O::Sldt as usize] = grp(Grp::G6, 0);
    t[O::Str as usize] = grp(Grp::G6, 1);
    t[O::Lldt as usize] = grp(Grp::G6, 2);
    t[O::Ltr as usize] = grp(Grp::G6, 3);
    t[O::Verr as usize] = grp(Grp::G6, 4);
    t[O::Verw as usize] = grp(Grp::G6, 5);
    t[O::Sgdt as usize] = mx(Mx::G7r0, 0);
    t[O::Sidt as usize] = mx(Mx::G7r1, 0);
    t[O::Lgdt as usize] = mx(Mx::G7r2, 0);
    t[O::Lidt as usize] = mx(Mx::G7r3, 0);
    t[O::Smsw as usize] = grp(Grp::G7, 4);
    t[O::Lmsw as usize] = grp(Grp::G7, 6);
    t[O::Invlpg as usize] = mx(Mx::G7r7, 0);
    t[O::Swapgs as usize] = rx(Rx::G7r7m3, 0);
    t[O::Rdtscp as usize] = rx(Rx::G7r7m3, 1);
    t[O::Vmcall as usize] = rx(Rx::G7r0m3, 1);
    t[O::Vmlaunch as usize] = rx(Rx::G7r0m3, 2);
    t[O::Vmresume as usize] = rx(Rx::G7r0m3, 3);
    t[O::Vmxoff as usize] = rx(Rx::G7r0m3, 4);
    t[O::Monitor as usize] = rx(Rx::G7r1m3, 0);
    t[O::Mwait as usize] = rx(Rx::G7r1m3, 1);
    t[O::Clac as usize] = rx(Rx::G7r1m3, 2);
    t[O::Stac as usize] = rx(Rx::G7r1m3, 3);
    t[O::Xgetbv as usize] = rx(Rx::G7r2m3, 0);
    t[O::Xsetbv as usize] = rx(Rx::G7r2m3, 1);
    t[O::Vmfunc as usize] = rx(Rx::G7r2m3, 4);
    t[O::Xend as usize] = rx(Rx::G7r2m3, 5);
    t[O::Xtest as usize] = rx(Rx::G7r2m3, 6);
    t[O::Lar as usize] = tb(0x02);
    t[O::Lsl as usize] = tb(0x03);
    t[O::Syscall as usize] = tb(0x05);
    t[O::Clts as usize] = tb(0x06);
    t[O::Sysret as usize] = tb(0x07);
    t[O::Invd as usize] = tb(0x08);
    t[O::Wbinvd as usize] = tb(0x09);
    t[O::Ud2 as usize] = tb(0x0b);
    t[O::Ud1 as usize] = grp(Grp::G10, 0);
    t[O::MovCr as usize] = tb(0x20);
    t[O::MovDr as usize] = tb(0x21);
    t[O::Wrmsr as usize] = tb(0x30);
    t[O::Rdtsc as usize] = tb(0x31);
    t[O::Rdmsr as usize] = tb(0x32);
    t[O::Rdpmc as usize] = tb(0x33);
    t[O::Sysenter as usize] = tb(0x34);
    t[O::Sysexit as usize] = tb(0x35);
    t[O::Cpuid as usize] = tb(0xa2);
    t[O::Movnti as usize] = tb(0xc3);
    // Prefetch
    t[O::Prefetch as usize] = grp(Grp::GP, 0);
    t[O::Prefetchw as usize] = grp(Grp::GP, 1);
    t[O::Prefetchnta as usize] = grp(Grp::G16, 0);
    t[O::Prefetcht0 as usize] = grp(Grp::G16, 1);
    t[O::Prefetcht1 as usize] = grp(Grp::G16, 2);
    t[O::Prefetcht2 as usize] = grp(Grp::G16, 3);
    // Conditional moves and sets
    t[O::Cmovo as usize] = tb(0x40);
    t[O::Cmovno as usize] = tb(0x41);
    t[O::Cmovb as usize] = tb(0x42);
    t[O::Cmovnb as usize] = tb(0x43);
    t[O::Cmovz as usize] = tb(0x44);
    t[O::Cmovnz as usize] = tb(0x45);
    t[O::Cmovbe as usize] = tb(0x46);
    t[O::Cmovnbe as usize] = tb(0x47);
    t[O::Cmovs as usize] = tb(0x48);
    t[O::Cmovns as usize] = tb(0x49);
    t[O::Cmovp as usize] = tb(0x4a);
    t[O::Cmovnp as usize] = tb(0x4b);
    t[O::Cmovl as usize] = tb(0x4c);
    t[O::Cmovnl as usize] = tb(0x4d);
    t[O::Cmovle as usize] = tb(0x4e);
    t[O::Cmovnle as usize] = tb(0x4f);
    t[O::Seto as usize] = ev(Evr::Set90, 0);
    t[O::Setno as usize] = ev(Evr::Set91, 0);
    t[O::Setb as usize] = ev(Evr::Set92, 0);
    t[O::Setnb as usize] = ev(Evr::Set93, 0);
    t[O::Setz as usize] = tb(0x94);
    t[O::Setnz as usize] = tb(0x95);
    t[O::Setbe as usize] = tb(0x96);
    t[O::Setnbe as usize] = tb(0x97);
    t[O::Sets as usize] = tb(0x98);
    t[O::Setns as usize] = tb(0x99);
    t[O::Setp as usize] = tb(0x9a);
    t[O::Setnp as usize] = tb(0x9b);
    t[O::Setl as usize] = tb(0x9c);
    t[O::Setnl as usize] = tb(0x9d);
    t[O::Setle as usize] = tb(0x9e);
    t[O::Setnle as usize] = tb(0x9f);
    // Bit and byte operations
    t[O::Bt as usize] = tb(0xa3);
    t[O::Bts as usize] = tb(0xab);
    t[O::Btr as usize] = tb(0xb3);
    t[O::Btc as usize] = tb(0xbb);
    t[O::Bsf as usize] = pe(Pe::BsfBC, 0);
    t[O::Bsr as usize] = pe(Pe::BsrBD, 0);
    t[O::Shld as usize] = tb(0xa4);
    t[O::Shrd as usize] = tb(0xac);
    t[O::Cmpxchg as usize] = tb(0xb1);
    t[O::Cmpxchg8b as usize] = wx(Wx::Cmpxchg8b, 0);
    t[O::Cmpxchg16b as usize] = wx(Wx::Cmpxchg8b, 1);
    t[O::Xadd as usize] = tb(0xc1);
    t[O::Bswap as usize] = tb(0xc8);
    t[O::Movzx as usize] = tb(0xb6);
    t[O::Movsx as usize] = tb(0xbe);
    t[O::Popcnt as usize] = pe(Pe::PopcntB8, 1);
    t[O::Lzcnt as usize] = pe(Pe::BsrBD, 1);
    t[O::Tzcnt as usize] = pe(Pe::BsfBC, 1);
    t[O::Movbe as usize] = pe(Pe::MovbeF0, 0);
    t[O::Crc32 as usize] = pe(Pe::MovbeF1, 3);
    t[O::Adcx as usize] = pe(Pe::AdcxF6, 2);
    t[O::Adox as usize] = pe(Pe::AdcxF6, 1);
    // Fences and processor state
    t[O::Lfence as usize] = mx(Mx::G15r5, 1);
    t[O::Mfence as usize] = mx(Mx::G15r6, 1);
    t[O::Sfence as usize] = mx(Mx::G15r7, 1);
    t[O::Clflush as usize] = mx(Mx::G15r7, 0);
    t[O::Xsave as usize] = wx(Wx::Xsave, 0);
    t[O::Xsave64 as usize] = wx(Wx::Xsave, 1);
    t[O::Xrstor as usize] = wx(Wx::Xrstor, 0);
    t[O::Xrstor64 as usize] = wx(Wx::Xrstor, 1);
    t[O::Xsaveopt as usize] = wx(Wx::Xsaveopt, 0);
    t[O::Fxsave as usize] = wx(Wx::Fxsave, 0);
    t[O::Fxsave64 as usize] = wx(Wx::Fxsave, 1);
    t[O::Fxrstor as usize] = wx(Wx::Fxrstor, 0);
    t[O::Fxrstor64 as usize] = wx(Wx::Fxrstor, 1);
    t[O::Ldmxcsr as usize] = ev(Evr::Ldmxcsr, 0);
    t[O::Stmxcsr as usize] = ev(Evr::Stmxcsr, 0);
    t[O::Vldmxcsr as usize] = ev(Evr::Ldmxcsr, 1);
    t[O::Vstmxcsr as usize] = ev(Evr::Stmxcsr, 1);
    t[O::Rdrand as usize] = mx(Mx::G9r6, 1);
    t[O::Rdseed as usize] = mx(Mx::G9r7, 1);
    t[O::Vmptrld as usize] = pe(Pe::Vmptrld, 0);
    t[O::Vmclear as usize] = pe(Pe::Vmptrld, 2);
    t[O::Vmxon as usize] = pe(Pe::Vmptrld, 1);
    t[O::Vmptrst as usize] = mx(Mx::G9r7, 0);
    t[O::Emms as usize] = EntryRef::Family(VexLExt, 0, 0);
    // 3DNow!
    t[O::Pi2fd as usize] = sfx(0x0d);
    t[O::Pf2id as usize] = sfx(0x1d);
    t[O::Pfadd as usize] = sfx(0x9e);
    t[O::Pfsub as usize] = sfx(0x9a);
    t[O::Pfsubr as usize] = sfx(0xaa);
    t[O::Pfmul as usize] = sfx(0xb4);
    t[O::Pfcmpeq as usize] = sfx(0xb0);
    t[O::Pfmin as usize] = sfx(0x94);
    t[O::Pfmax as usize] = sfx(0xa4);
    t[O::Pfrcp as usize] = sfx(0x96);
    t[O::Pfrsqrt as usize] = sfx(0x97);
    t[O::Pavgusb as usize] = sfx(0xbf);
    t[O::Pmulhrw as usize] = sfx(0xb7);
    t[O::Femms as usize] = tb(0x0e);
    t[O::Pfcmpge as usize] = sfx(0x90);
    t
}

/// Second half of the index, split so each builder stays readable.
#[rustfmt::skip]
const fn extend_simd(mut t: [EntryRef; Opcode::COUNT]) -> [EntryRef; Opcode::COUNT] {
    use Opcode as O;
    // SSE family, legacy forms
    t[O::Movups as usize] = pe(Pe::Movups10, 0);
    t[O::Movss as usize] = pe(Pe::Movups10, 1);
    t[O::Movupd as usize] = pe(Pe::Movups10, 2);
    t[O::Movsd as usize] = pe(Pe::Movups10, 3);
    t[O::Movlps as usize] = mx(Mx::Movlps12, 0);
    t[O::Movhlps as usize] = mx(Mx::Movlps12, 1);
    t[O::Movsldup as usize] = pe(Pe::Movlps12, 1);
    t[O::Movlpd as usize] = pe(Pe::Movlps12, 2);
    t[O::Movddup as usize] = pe(Pe::Movlps12, 3);
    t[O::Unpcklps as usize] = pe(Pe::Unpck14, 0);
    t[O::Unpcklpd as usize] = pe(Pe::Unpck14, 2);
    t[O::Unpckhps as usize] = pe(Pe::Unpck15, 0);
    t[O::Unpckhpd as usize] = pe(Pe::Unpck15, 2);
    t[O::Movhps as usize] = mx(Mx::Movhps16, 0);
    t[O::Movlhps as usize] = mx(Mx::Movhps16, 1);
    t[O::Movshdup as usize] = pe(Pe::Movhps16, 1);
    t[O::Movhpd as usize] = pe(Pe::Movhps16, 2);
    t[O::Movaps as usize] = pe(Pe::Movaps28, 0);
    t[O::Movapd as usize] = pe(Pe::Movaps28, 2);
    t[O::Cvtpi2ps as usize] = pe(Pe::Cvt2A, 0);
    t[O::Cvtsi2ss as usize] = pe(Pe::Cvt2A, 1);
    t[O::Cvtpi2pd as usize] = pe(Pe::Cvt2A, 2);
    t[O::Cvtsi2sd as usize] = pe(Pe::Cvt2A, 3);
    t[O::Movntps as usize] = pe(Pe::Movnt2B, 0);
    t[O::Movntpd as usize] = pe(Pe::Movnt2B, 2);
    t[O::Cvttps2pi as usize] = pe(Pe::Cvtt2C, 0);
    t[O::Cvttss2si as usize] = pe(Pe::Cvtt2C, 1);
    t[O::Cvttpd2pi as usize] = pe(Pe::Cvtt2C, 2);
    t[O::Cvttsd2si as usize] = pe(Pe::Cvtt2C, 3);
    t[O::Cvtps2pi as usize] = pe(Pe::Cvt2D, 0);
    t[O::Cvtss2si as usize] = pe(Pe::Cvt2D, 1);
    t[O::Cvtpd2pi as usize] = pe(Pe::Cvt2D, 2);
    t[O::Cvtsd2si as usize] = pe(Pe::Cvt2D, 3);
    t[O::Ucomiss as usize] = pe(Pe::Ucomis2E, 0);
    t[O::Ucomisd as usize] = pe(Pe::Ucomis2E, 2);
    t[O::Comiss as usize] = pe(Pe::Comis2F, 0);
    t[O::Comisd as usize] = pe(Pe::Comis2F, 2);
    t[O::Movmskps as usize] = pe(Pe::Movmsk50, 0);
    t[O::Movmskpd as usize] = pe(Pe::Movmsk50, 2);
    t[O::Sqrtps as usize] = pe(Pe::Sqrt51, 0);
    t[O::Sqrtss as usize] = pe(Pe::Sqrt51, 1);
    t[O::Sqrtpd as usize] = pe(Pe::Sqrt51, 2);
    t[O::Sqrtsd as usize] = pe(Pe::Sqrt51, 3);
    t[O::Rsqrtps as usize] = pe(Pe::Rsqrt52, 0);
    t[O::Rsqrtss as usize] = pe(Pe::Rsqrt52, 1);
    t[O::Rcpps as usize] = pe(Pe::Rcp53, 0);
    t[O::Rcpss as usize] = pe(Pe::Rcp53, 1);
    t[O::Andps as usize] = pe(Pe::And54, 0);
    t[O::Andpd as usize] = pe(Pe::And54, 2);
    t[O::Andnps as usize] = pe(Pe::Andn55, 0);
    t[O::Andnpd as usize] = pe(Pe::Andn55, 2);
    t[O::Orps as usize] = pe(Pe::Or56, 0);
    t[O::Orpd as usize] = pe(Pe::Or56, 2);
    t[O::Xorps as usize] = pe(Pe::Xor57, 0);
    t[O::Xorpd as usize] = pe(Pe::Xor57, 2);
    t[O::Addps as usize] = pe(Pe::Add58, 0);
    t[O::Addss as usize] = pe(Pe::Add58, 1);
    t[O::Addpd as usize] = pe(Pe::Add58, 2);
    t[O::Addsd as usize] = pe(Pe::Add58, 3);
    t[O::Mulps as usize] = pe(Pe::Mul59, 0);
    t[O::Mulss as usize] = pe(Pe::Mul59, 1);
    t[O::Mulpd as usize] = pe(Pe::Mul59, 2);
    t[O::Mulsd as usize] = pe(Pe::Mul59, 3);
    t[O::Cvtps2pd as usize] = pe(Pe::Cvt5A, 0);
    t[O::Cvtss2sd as usize] = pe(Pe::Cvt5A, 1);
    t[O::Cvtpd2ps as usize] = pe(Pe::Cvt5A, 2);
    t[O::Cvtsd2ss as usize] = pe(Pe::Cvt5A, 3);
    t[O::Cvtdq2ps as usize] = pe(Pe::Cvt5B, 0);
    t[O::Cvttps2dq as usize] = pe(Pe::Cvt5B, 1);
    t[O::Cvtps2dq as usize] = pe(Pe::Cvt5B, 2);
    t[O::Subps as usize] = pe(Pe::Sub5C, 0);
    t[O::Subss as usize] = pe(Pe::Sub5C, 1);
    t[O::Subpd as usize] = pe(Pe::Sub5C, 2);
    t[O::Subsd as usize] = pe(Pe::Sub5C, 3);
    t[O::Minps as usize] = pe(Pe::Min5D, 0);
    t[O::Minss as usize] = pe(Pe::Min5D, 1);
    t[O::Minpd as usize] = pe(Pe::Min5D, 2);
    t[O::Minsd as usize] = pe(Pe::Min5D, 3);
    t[O::Divps as usize] = pe(Pe::Div5E, 0);
    t[O::Divss as usize] = pe(Pe::Div5E, 1);
    t[O::Divpd as usize] = pe(Pe::Div5E, 2);
    t[O::Divsd as usize] = pe(Pe::Div5E, 3);
    t[O::Maxps as usize] = pe(Pe::Max5F, 0);
    t[O::Maxss as usize] = pe(Pe::Max5F, 1);
    t[O::Maxpd as usize] = pe(Pe::Max5F, 2);
    t[O::Maxsd as usize] = pe(Pe::Max5F, 3);
    t[O::Punpcklbw as usize] = pe(Pe::Punpcklbw60, 2);
    t[O::Punpcklwd as usize] = pe(Pe::Punpcklwd61, 2);
    t[O::Punpckldq as usize] = pe(Pe::Punpckldq62, 2);
    t[O::Packsswb as usize] = pe(Pe::Packsswb63, 2);
    t[O::Pcmpgtb as usize] = pe(Pe::Pcmpgtb64, 2);
    t[O::Pcmpgtw as usize] = pe(Pe::Pcmpgtw65, 2);
    t[O::Pcmpgtd as usize] = pe(Pe::Pcmpgtd66, 2);
    t[O::Packuswb as usize] = pe(Pe::Packuswb67, 2);
    t[O::Punpckhbw as usize] = pe(Pe::Punpckhbw68, 2);
    t[O::Punpckhwd as usize] = pe(Pe::Punpckhwd69, 2);
    t[O::Punpckhdq as usize] = pe(Pe::Punpckhdq6A, 2);
    t[O::Packssdw as usize] = pe(Pe::Packssdw6B, 2);
    t[O::Punpcklqdq as usize] = pe(Pe::Punpcklqdq6C, 2);
    t[O::Punpckhqdq as usize] = pe(Pe::Punpckhqdq6D, 2);
    t[O::Movd as usize] = pe(Pe::Movd6E, 2);
    t[O::Movq as usize] = pe(Pe::Movq6F, 0);
    t[O::Movdqa as usize] = pe(Pe::Movq6F, 2);
    t[O::Movdqu as usize] = pe(Pe::Movq6F, 1);
    t[O::Pshufw as usize] = pe(Pe::Pshuf70, 0);
    t[O::Pshufd as usize] = pe(Pe::Pshuf70, 2);
    t[O::Pshufhw as usize] = pe(Pe::Pshuf70, 1);
    t[O::Pshuflw as usize] = pe(Pe::Pshuf70, 3);
    t[O::Pcmpeqb as usize] = pe(Pe::Pcmpeqb74, 2);
    t[O::Pcmpeqw as usize] = pe(Pe::Pcmpeqw75, 2);
    t[O::Pcmpeqd as usize] = pe(Pe::Pcmpeqd76, 2);
    t[O::Haddpd as usize] = pe(Pe::Hadd7C, 2);
    t[O::Haddps as usize] = pe(Pe::Hadd7C, 3);
    t[O::Hsubpd as usize] = pe(Pe::Hsub7D, 2);
    t[O::Hsubps as usize] = pe(Pe::Hsub7D, 3);
    t[O::Cmpps as usize] = pe(Pe::CmpC2, 0);
    t[O::Cmpss as usize] = pe(Pe::CmpC2, 1);
    t[O::Cmppd as usize] = pe(Pe::CmpC2, 2);
    t[O::Cmpsd as usize] = pe(Pe::CmpC2, 3);
    t[O::Pinsrw as usize] = pe(Pe::PinsrwC4, 2);
    t[O::Pextrw as usize] = pe(Pe::PextrwC5, 2);
    t[O::Shufps as usize] = pe(Pe::ShufC6, 0);
    t[O::Shufpd as usize] = pe(Pe::ShufC6, 2);
    t[O::Addsubpd as usize] = pe(Pe::AddsubD0, 2);
    t[O::Addsubps as usize] = pe(Pe::AddsubD0, 3);
    t[O::Psrlw as usize] = pe(Pe::PsrlwD1, 2);
    t[O::Psrld as usize] = pe(Pe::PsrldD2, 2);
    t[O::Psrlq as usize] = pe(Pe::PsrlqD3, 2);
    t[O::Psraw as usize] = pe(Pe::PsrawE1, 2);
    t[O::Psrad as usize] = pe(Pe::PsradE2, 2);
    t[O::Psllw as usize] = pe(Pe::PsllwF1, 2);
    t[O::Pslld as usize] = pe(Pe::PslldF2, 2);
    t[O::Psllq as usize] = pe(Pe::PsllqF3, 2);
    t[O::Paddq as usize] = pe(Pe::PaddqD4, 2);
    t[O::Pmullw as usize] = pe(Pe::PmullwD5, 2);
    t[O::Movq2dq as usize] = pe(Pe::MovqD6, 1);
    t[O::Movdq2q as usize] = pe(Pe::MovqD6, 3);
    t[O::Pmovmskb as usize] = pe(Pe::PmovmskbD7, 2);
    t[O::Psubusb as usize] = pe(Pe::PsubusbD8, 2);
    t[O::Psubusw as usize] = pe(Pe::PsubuswD9, 2);
    t[O::Pminub as usize] = pe(Pe::PminubDA, 2);
    t[O::Pand as usize] = pe(Pe::PandDB, 2);
    t[O::Paddusb as usize] = pe(Pe::PaddusbDC, 2);
    t[O::Paddusw as usize] = pe(Pe::PadduswDD, 2);
    t[O::Pmaxub as usize] = pe(Pe::PmaxubDE, 2);
    t[O::Pandn as usize] = pe(Pe::PandnDF, 2);
    t[O::Pavgb as usize] = pe(Pe::PavgbE0, 2);
    t[O::Pavgw as usize] = pe(Pe::PavgwE3, 2);
    t[O::Pmulhuw as usize] = pe(Pe::PmulhuwE4, 2);
    t[O::Pmulhw as usize] = pe(Pe::PmulhwE5, 2);
    t[O::Cvttpd2dq as usize] = pe(Pe::CvtE6, 2);
    t[O::Cvtdq2pd as usize] = pe(Pe::CvtE6, 1);
    t[O::Cvtpd2dq as usize] = pe(Pe::CvtE6, 3);
    t[O::Movntq as usize] = pe(Pe::MovntE7, 0);
    t[O::Movntdq as usize] = pe(Pe::MovntE7, 2);
    t[O::Psubsb as usize] = pe(Pe::PsubsbE8, 2);
    t[O::Psubsw as usize] = pe(Pe::PsubswE9, 2);
    t[O::Pminsw as usize] = pe(Pe::PminswEA, 2);
    t[O::Por as usize] = pe(Pe::PorEB, 2);
    t[O::Paddsb as usize] = pe(Pe::PaddsbEC, 2);
    t[O::Paddsw as usize] = pe(Pe::PaddswED, 2);
    t[O::Pmaxsw as usize] = pe(Pe::PmaxswEE, 2);
    t[O::Pxor as usize] = pe(Pe::PxorEF, 2);
    t[O::Lddqu as usize] = pe(Pe::LddquF0, 3);
    t[O::Pmuludq as usize] = pe(Pe::PmuludqF4, 2);
    t[O::Pmaddwd as usize] = pe(Pe::PmaddwdF5, 2);
    t[O::Psadbw as usize] = pe(Pe::PsadbwF6, 2);
    t[O::Maskmovq as usize] = pe(Pe::MaskmovF7, 0);
    t[O::Maskmovdqu as usize] = pe(Pe::MaskmovF7, 2);
    t[O::Psubb as usize] = pe(Pe::PsubbF8, 2);
    t[O::Psubw as usize] = pe(Pe::PsubwF9, 2);
    t[O::Psubd as usize] = pe(Pe::PsubdFA, 2);
    t[O::Psubq as usize] = pe(Pe::PsubqFB, 2);
    t[O::Paddb as usize] = pe(Pe::PaddbFC, 2);
    t[O::Paddw as usize] = pe(Pe::PaddwFD, 2);
    t[O::Paddd as usize] = pe(Pe::PadddFE, 2);
    t
}

#[rustfmt::skip]
const fn extend_avx(mut t: [EntryRef; Opcode::COUNT]) -> [EntryRef; Opcode::COUNT] {
    use Opcode as O;
    t[O::Vmovups as usize] = pe(Pe::Movups10, 4);
    t[O::Vmovss as usize] = pe(Pe::Movups10, 5);
    t[O::Vmovupd as usize] = pe(Pe::Movups10, 6);
    t[O::Vmovsd as usize] = pe(Pe::Movups10, 7);
    t[O::Vmovlps as usize] = mx(Mx::Vmovlps12, 0);
    t[O::Vmovhlps as usize] = mx(Mx::Vmovlps12, 1);
    t[O::Vmovsldup as usize] = pe(Pe::Movlps12, 5);
    t[O::Vmovlpd as usize] = pe(Pe::Movlps12, 6);
    t[O::Vmovddup as usize] = pe(Pe::Movlps12, 7);
    t[O::Vunpcklps as usize] = pe(Pe::Unpck14, 4);
    t[O::Vunpcklpd as usize] = pe(Pe::Unpck14, 6);
    t[O::Vunpckhps as usize] = pe(Pe::Unpck15, 4);
    t[O::Vunpckhpd as usize] = pe(Pe::Unpck15, 6);
    t[O::Vmovhps as usize] = mx(Mx::Vmovhps16, 0);
    t[O::Vmovlhps as usize] = mx(Mx::Vmovhps16, 1);
    t[O::Vmovshdup as usize] = pe(Pe::Movhps16, 5);
    t[O::Vmovhpd as usize] = pe(Pe::Movhps16, 6);
    t[O::Vmovaps as usize] = pe(Pe::Movaps28, 4);
    t[O::Vmovapd as usize] = pe(Pe::Movaps28, 6);
    t[O::Vcvtsi2ss as usize] = pe(Pe::Cvt2A, 5);
    t[O::Vcvtsi2sd as usize] = pe(Pe::Cvt2A, 7);
    t[O::Vmovntps as usize] = pe(Pe::Movnt2B, 4);
    t[O::Vmovntpd as usize] = pe(Pe::Movnt2B, 6);
    t[O::Vcvttss2si as usize] = pe(Pe::Cvtt2C, 5);
    t[O::Vcvttsd2si as usize] = pe(Pe::Cvtt2C, 7);
    t[O::Vcvtss2si as usize] = pe(Pe::Cvt2D, 5);
    t[O::Vcvtsd2si as usize] = pe(Pe::Cvt2D, 7);
    t[O::Vucomiss as usize] = pe(Pe::Ucomis2E, 4);
    t[O::Vucomisd as usize] = pe(Pe::Ucomis2E, 6);
    t[O::Vcomiss as usize] = pe(Pe::Comis2F, 4);
    t[O::Vcomisd as usize] = pe(Pe::Comis2F, 6);
    t[O::Vmovmskps as usize] = pe(Pe::Movmsk50, 4);
    t[O::Vmovmskpd as usize] = pe(Pe::Movmsk50, 6);
    t[O::Vsqrtps as usize] = pe(Pe::Sqrt51, 4);
    t[O::Vsqrtss as usize] = pe(Pe::Sqrt51, 5);
    t[O::Vsqrtpd as usize] = pe(Pe::Sqrt51, 6);
    t[O::Vsqrtsd as usize] = pe(Pe::Sqrt51, 7);
    t[O::Vrsqrtps as usize] = pe(Pe::Rsqrt52, 4);
    t[O::Vrsqrtss as usize] = pe(Pe::Rsqrt52, 5);
    t[O::Vrcpps as usize] = pe(Pe::Rcp53, 4);
    t[O::Vrcpss as usize] = pe(Pe::Rcp53, 5);
    t[O::Vandps as usize] = pe(Pe::And54, 4);
    t[O::Vandpd as usize] = pe(Pe::And54, 6);
    t[O::Vandnps as usize] = pe(Pe::Andn55, 4);
    t[O::Vandnpd as usize] = pe(Pe::Andn55, 6);
    t[O::Vorps as usize] = pe(Pe::Or56, 4);
    t[O::Vorpd as usize] = pe(Pe::Or56, 6);
    t[O::Vxorps as usize] = pe(Pe::Xor57, 4);
    t[O::Vxorpd as usize] = pe(Pe::Xor57, 6);
    t[O::Vaddps as usize] = pe(Pe::Add58, 4);
    t[O::Vaddss as usize] = pe(Pe::Add58, 5);
    t[O::Vaddpd as usize] = pe(Pe::Add58, 6);
    t[O::Vaddsd as usize] = pe(Pe::Add58, 7);
    t[O::Vmulps as usize] = pe(Pe::Mul59, 4);
    t[O::Vmulss as usize] = pe(Pe::Mul59, 5);
    t[O::Vmulpd as usize] = pe(Pe::Mul59, 6);
    t[O::Vmulsd as usize] = pe(Pe::Mul59, 7);
    t[O::Vcvtps2pd as usize] = pe(Pe::Cvt5A, 4);
    t[O::Vcvtss2sd as usize] = pe(Pe::Cvt5A, 5);
    t[O::Vcvtpd2ps as usize] = pe(Pe::Cvt5A, 6);
    t[O::Vcvtsd2ss as usize] = pe(Pe::Cvt5A, 7);
    t[O::Vcvtdq2ps as usize] = pe(Pe::Cvt5B, 4);
    t[O::Vcvttps2dq as usize] = pe(Pe::Cvt5B, 5);
    t[O::Vcvtps2dq as usize] = pe(Pe::Cvt5B, 6);
    t[O::Vsubps as usize] = pe(Pe::Sub5C, 4);
    t[O::Vsubss as usize] = pe(Pe::Sub5C, 5);
    t[O::Vsubpd as usize] = pe(Pe::Sub5C, 6);
    t[O::Vsubsd as usize] = pe(Pe::Sub5C, 7);
    t[O::Vminps as usize] = pe(Pe::Min5D, 4);
    t[O::Vminss as usize] = pe(Pe::Min5D, 5);
    t[O::Vminpd as usize] = pe(Pe::Min5D, 6);
    t[O::Vminsd as usize] = pe(Pe::Min5D, 7);
    t[O::Vdivps as usize] = pe(Pe::Div5E, 4);
    t[O::Vdivss as usize] = pe(Pe::Div5E, 5);
    t[O::Vdivpd as usize] = pe(Pe::Div5E, 6);
    t[O::Vdivsd as usize] = pe(Pe::Div5E, 7);
    t[O::Vmaxps as usize] = pe(Pe::Max5F, 4);
    t[O::Vmaxss as usize] = pe(Pe::Max5F, 5);
    t[O::Vmaxpd as usize] = pe(Pe::Max5F, 6);
    t[O::Vmaxsd as usize] = pe(Pe::Max5F, 7);
    t[O::Vpunpcklbw as usize] = pe(Pe::Punpcklbw60, 6);
    t[O::Vpunpcklwd as usize] = pe(Pe::Punpcklwd61, 6);
    t[O::Vpunpckldq as usize] = pe(Pe::Punpckldq62, 6);
    t[O::Vpacksswb as usize] = pe(Pe::Packsswb63, 6);
    t[O::Vpcmpgtb as usize] = pe(Pe::Pcmpgtb64, 6);
    t[O::Vpcmpgtw as usize] = pe(Pe::Pcmpgtw65, 6);
    t[O::Vpcmpgtd as usize] = pe(Pe::Pcmpgtd66, 6);
    t[O::Vpackuswb as usize] = pe(Pe::Packuswb67, 6);
    t[O::Vpunpckhbw as usize] = pe(Pe::Punpckhbw68, 6);
    t[O::Vpunpckhwd as usize] = pe(Pe::Punpckhwd69, 6);
    t[O::Vpunpckhdq as usize] = pe(Pe::Punpckhdq6A, 6);
    t[O::Vpackssdw as usize] = pe(Pe::Packssdw6B, 6);
    t[O::Vpunpcklqdq as usize] = pe(Pe::Punpcklqdq6C, 6);
    t[O::Vpunpckhqdq as usize] = pe(Pe::Punpckhqdq6D, 6);
    t[O::Vmovd as usize] = pe(Pe::Movd6E, 6);
    t[O::Vmovq as usize] = pe(Pe::Movd7E, 5);
    t[O::Vmovdqa as usize] = pe(Pe::Movq6F, 6);
    t[O::Vmovdqu as usize] = pe(Pe::Movq6F, 5);
    t[O::Vpshufd as usize] = pe(Pe::Pshuf70, 6);
    t[O::Vpshufhw as usize] = pe(Pe::Pshuf70, 5);
    t[O::Vpshuflw as usize] = pe(Pe::Pshuf70, 7);
    t[O::Vpcmpeqb as usize] = pe(Pe::Pcmpeqb74, 6);
    t[O::Vpcmpeqw as usize] = pe(Pe::Pcmpeqw75, 6);
    t[O::Vpcmpeqd as usize] = pe(Pe::Pcmpeqd76, 6);
    t[O::Vhaddpd as usize] = pe(Pe::Hadd7C, 6);
    t[O::Vhaddps as usize] = pe(Pe::Hadd7C, 7);
    t[O::Vhsubpd as usize] = pe(Pe::Hsub7D, 6);
    t[O::Vhsubps as usize] = pe(Pe::Hsub7D, 7);
    t[O::Vcmpps as usize] = pe(Pe::CmpC2, 4);
    t[O::Vcmpss as usize] = pe(Pe::CmpC2, 5);
    t[O::Vcmppd as usize] = pe(Pe::CmpC2, 6);
    t[O::Vcmpsd as usize] = pe(Pe::CmpC2, 7);
    t[O::Vpinsrw as usize] = pe(Pe::PinsrwC4, 6);
    t[O::Vpextrw as usize] = pe(Pe::PextrwC5, 6);
    t[O::Vshufps as usize] = pe(Pe::ShufC6, 4);
    t[O::Vshufpd as usize] = pe(Pe::ShufC6, 6);
    t[O::Vaddsubpd as usize] = pe(Pe::AddsubD0, 6);
    t[O::Vaddsubps as usize] = pe(Pe::AddsubD0, 7);
    t[O::Vpsrlw as usize] = pe(Pe::PsrlwD1, 6);
    t[O::Vpsrld as usize] = pe(Pe::PsrldD2, 6);
    t[O::Vpsrlq as usize] = pe(Pe::PsrlqD3, 6);
    t[O::Vpsraw as usize] = pe(Pe::PsrawE1, 6);
    t[O::Vpsrad as usize] = pe(Pe::PsradE2, 6);
    t[O::Vpsllw as usize] = pe(Pe::PsllwF1, 6);
    t[O::Vpslld as usize] = pe(Pe::PslldF2, 6);
    t[O::Vpsllq as usize] = pe(Pe::PsllqF3, 6);
    t[O::Vpaddq as usize] = pe(Pe::PaddqD4, 6);
    t[O::Vpmullw as usize] = pe(Pe::PmullwD5, 6);
    t[O::Vpmovmskb as usize] = pe(Pe::PmovmskbD7, 6);
    t[O::Vpsubusb as usize] = pe(Pe::PsubusbD8, 6);
    t[O::Vpsubusw as usize] = pe(Pe::PsubuswD9, 6);
    t[O::Vpminub as usize] = pe(Pe::PminubDA, 6);
    t[O::Vpand as usize] = pe(Pe::PandDB, 6);
    t[O::Vpaddusb as usize] = pe(Pe::PaddusbDC, 6);
    t[O::Vpaddusw as usize] = pe(Pe::PadduswDD, 6);
    t[O::Vpmaxub as usize] = pe(Pe::PmaxubDE, 6);
    t[O::Vpandn as usize] = pe(Pe::PandnDF, 6);
    t[O::Vpavgb as usize] = pe(Pe::PavgbE0, 6);
    t[O::Vpavgw as usize] = pe(Pe::PavgwE3, 6);
    t[O::Vpmulhuw as usize] = pe(Pe::PmulhuwE4, 6);
    t[O::Vpmulhw as usize] = pe(Pe::PmulhwE5, 6);
    t[O::Vcvttpd2dq as usize] = pe(Pe::CvtE6, 6);
    t[O::Vcvtdq2pd as usize] = pe(Pe::CvtE6, 5);
    t[O::Vcvtpd2dq as usize] = pe(Pe::CvtE6, 7);
    t[O::Vmovntdq as usize] = pe(Pe::MovntE7, 6);
    t[O::Vpsubsb as usize] = pe(Pe::PsubsbE8, 6);
    t[O::Vpsubsw as usize] = pe(Pe::PsubswE9, 6);
    t[O::Vpminsw as usize] = pe(Pe::PminswEA, 6);
    t[O::Vpor as usize] = pe(Pe::PorEB, 6);
    t[O::Vpaddsb as usize] = pe(Pe::PaddsbEC, 6);
    t[O::Vpaddsw as usize] = pe(Pe::PaddswED, 6);
    t[O::Vpmaxsw as usize] = pe(Pe::PmaxswEE, 6);
    t[O::Vpxor as usize] = pe(Pe::PxorEF, 6);
    t[O::Vlddqu as usize] = pe(Pe::LddquF0, 7);
    t[O::Vpmuludq as usize] = pe(Pe::PmuludqF4, 6);
    t[O::Vpmaddwd as usize] = pe(Pe::PmaddwdF5, 6);
    t[O::Vpsadbw as usize] = pe(Pe::PsadbwF6, 6);
    t[O::Vmaskmovdqu as usize] = pe(Pe::MaskmovF7, 6);
    t[O::Vpsubb as usize] = pe(Pe::PsubbF8, 6);
    t[O::Vpsubw as usize] = pe(Pe::PsubwF9, 6);
    t[O::Vpsubd as usize] = pe(Pe::PsubdFA, 6);
    t[O::Vpsubq as usize] = pe(Pe::PsubqFB, 6);
    t[O::Vpaddb as usize] = pe(Pe::PaddbFC, 6);
    t[O::Vpaddw as usize] = pe(Pe::PaddwFD, 6);
    t[O::Vpaddd as usize] = pe(Pe::PadddFE, 6);
    t[O::Vzeroupper as usize] = EntryRef::Family(VexLExt, 0, 1);
    t[O::Vzeroall as usize] = EntryRef::Family(VexLExt, 0, 2);
    t[O::Kmovw as usize] = wv(Wv::K90np, 0);
    t[O::Kmovb as usize] = wv(Wv::K90p66, 0);
    t[O::Kmovq as usize] = wv(Wv::K90np, 1);
    t[O::Kmovd as usize] = wv(Wv::K90p66, 1);
    t
}

#[rustfmt::skip]
const fn extend_maps38_3a(mut t: [EntryRef; Opcode::COUNT]) -> [EntryRef; Opcode::COUNT] {
    use Opcode as O;
    t[O::Pshufb as usize] = pe(Pe::Pshufb3800, 2);
    t[O::Phaddw as usize] = pe(Pe::Phaddw3801, 2);
    t[O::Phaddd as usize] = pe(Pe::Phaddd3802, 2);
    t[O::Phaddsw as usize] = pe(Pe::Phaddsw3803, 2);
    t[O::Pmaddubsw as usize] = pe(Pe::Pmaddubsw3804, 2);
    t[O::Phsubw as usize] = pe(Pe::Phsubw3805, 2);
    t[O::Phsubd as usize] = pe(Pe::Phsubd3806, 2);
    t[O::Phsubsw as usize] = pe(Pe::Phsubsw3807, 2);
    t[O::Psignb as usize] = pe(Pe::Psignb3808, 2);
    t[O::Psignw as usize] = pe(Pe::Psignw3809, 2);
    t[O::Psignd as usize] = pe(Pe::Psignd380A, 2);
    t[O::Pmulhrsw as usize] = pe(Pe::Pmulhrsw380B, 2);
    t[O::Pblendvb as usize] = pe(Pe::Pblendvb3810, 2);
    t[O::Blendvps as usize] = pe(Pe::Blendvps3814, 2);
    t[O::Blendvpd as usize] = pe(Pe::Blendvpd3815, 2);
    t[O::Ptest as usize] = pe(Pe::Ptest3817, 2);
    t[O::Pabsb as usize] = pe(Pe::Pabsb381C, 2);
    t[O::Pabsw as usize] = pe(Pe::Pabsw381D, 2);
    t[O::Pabsd as usize] = pe(Pe::Pabsd381E, 2);
    t[O::Pmovsxbw as usize] = pe(Pe::Pmovsxbw3820, 2);
    t[O::Pmovsxbd as usize] = pe(Pe::Pmovsxbd3821, 2);
    t[O::Pmovsxbq as usize] = pe(Pe::Pmovsxbq3822, 2);
    t[O::Pmovsxwd as usize] = pe(Pe::Pmovsxwd3823, 2);
    t[O::Pmovsxwq as usize] = pe(Pe::Pmovsxwq3824, 2);
    t[O::Pmovsxdq as usize] = pe(Pe::Pmovsxdq3825, 2);
    t[O::Pmuldq as usize] = pe(Pe::Pmuldq3828, 2);
    t[O::Pcmpeqq as usize] = pe(Pe::Pcmpeqq3829, 2);
    t[O::Movntdqa as usize] = pe(Pe::Movntdqa382A, 2);
    t[O::Packusdw as usize] = pe(Pe::Packusdw382B, 2);
    t[O::Pmovzxbw as usize] = pe(Pe::Pmovzxbw3830, 2);
    t[O::Pmovzxbd as usize] = pe(Pe::Pmovzxbd3831, 2);
    t[O::Pmovzxbq as usize] = pe(Pe::Pmovzxbq3832, 2);
    t[O::Pmovzxwd as usize] = pe(Pe::Pmovzxwd3833, 2);
    t[O::Pmovzxwq as usize] = pe(Pe::Pmovzxwq3834, 2);
    t[O::Pmovzxdq as usize] = pe(Pe::Pmovzxdq3835, 2);
    t[O::Pcmpgtq as usize] = pe(Pe::Pcmpgtq3837, 2);
    t[O::Pminsb as usize] = pe(Pe::Pminsb3838, 2);
    t[O::Pminsd as usize] = pe(Pe::Pminsd3839, 2);
    t[O::Pminuw as usize] = pe(Pe::Pminuw383A, 2);
    t[O::Pminud as usize] = pe(Pe::Pminud383B, 2);
    t[O::Pmaxsb as usize] = pe(Pe::Pmaxsb383C, 2);
    t[O::Pmaxsd as usize] = pe(Pe::Pmaxsd383D, 2);
    t[O::Pmaxuw as usize] = pe(Pe::Pmaxuw383E, 2);
    t[O::Pmaxud as usize] = pe(Pe::Pmaxud383F, 2);
    t[O::Pmulld as usize] = pe(Pe::Pmulld3840, 2);
    t[O::Phminposuw as usize] = pe(Pe::Phminposuw3841, 2);
    t[O::Aesimc as usize] = pe(Pe::Aesimc38DB, 2);
    t[O::Aesenc as usize] = pe(Pe::Aesenc38DC, 2);
    t[O::Aesenclast as usize] = pe(Pe::Aesenclast38DD, 2);
    t[O::Aesdec as usize] = pe(Pe::Aesdec38DE, 2);
    t[O::Aesdeclast as usize] = pe(Pe::Aesdeclast38DF, 2);
    t[O::Sha1nexte as usize] = EntryRef::ThreeByte38(0xc8);
    t[O::Sha1msg1 as usize] = EntryRef::ThreeByte38(0xc9);
    t[O::Sha1msg2 as usize] = EntryRef::ThreeByte38(0xca);
    t[O::Sha256rnds2 as usize] = EntryRef::ThreeByte38(0xcb);
    t[O::Sha256msg1 as usize] = EntryRef::ThreeByte38(0xcc);
    t[O::Sha256msg2 as usize] = EntryRef::ThreeByte38(0xcd);
    t[O::Vpshufb as usize] = pe(Pe::Pshufb3800, 6);
    t[O::Vphaddw as usize] = pe(Pe::Phaddw3801, 6);
    t[O::Vphaddd as usize] = pe(Pe::Phaddd3802, 6);
    t[O::Vphaddsw as usize] = pe(Pe::Phaddsw3803, 6);
    t[O::Vpmaddubsw as usize] = pe(Pe::Pmaddubsw3804, 6);
    t[O::Vphsubw as usize] = pe(Pe::Phsubw3805, 6);
    t[O::Vphsubd as usize] = pe(Pe::Phsubd3806, 6);
    t[O::Vphsubsw as usize] = pe(Pe::Phsubsw3807, 6);
    t[O::Vpsignb as usize] = pe(Pe::Psignb3808, 6);
    t[O::Vpsignw as usize] = pe(Pe::Psignw3809, 6);
    t[O::Vpsignd as usize] = pe(Pe::Psignd380A, 6);
    t[O::Vpmulhrsw as usize] = pe(Pe::Pmulhrsw380B, 6);
    t[O::Vptest as usize] = pe(Pe::Ptest3817, 6);
    t[O::Vpabsb as usize] = pe(Pe::Pabsb381C, 6);
    t[O::Vpabsw as usize] = pe(Pe::Pabsw381D, 6);
    t[O::Vpabsd as usize] = pe(Pe::Pabsd381E, 6);
    t[O::Vpmovsxbw as usize] = pe(Pe::Pmovsxbw3820, 6);
    t[O::Vpmovsxbd as usize] = pe(Pe::Pmovsxbd3821, 6);
    t[O::Vpmovsxbq as usize] = pe(Pe::Pmovsxbq3822, 6);
    t[O::Vpmovsxwd as usize] = pe(Pe::Pmovsxwd3823, 6);
    t[O::Vpmovsxwq as usize] = pe(Pe::Pmovsxwq3824, 6);
    t[O::Vpmovsxdq as usize] = pe(Pe::Pmovsxdq3825, 6);
    t[O::Vpmuldq as usize] = pe(Pe::Pmuldq3828, 6);
    t[O::Vpcmpeqq as usize] = pe(Pe::Pcmpeqq3829, 6);
    t[O::Vmovntdqa as usize] = pe(Pe::Movntdqa382A, 6);
    t[O::Vpackusdw as usize] = pe(Pe::Packusdw382B, 6);
    t[O::Vpmovzxbw as usize] = pe(Pe::Pmovzxbw3830, 6);
    t[O::Vpmovzxbd as usize] = pe(Pe::Pmovzxbd3831, 6);
    t[O::Vpmovzxbq as usize] = pe(Pe::Pmovzxbq3832, 6);
    t[O::Vpmovzxwd as usize] = pe(Pe::Pmovzxwd3833, 6);
    t[O::Vpmovzxwq as usize] = pe(Pe::Pmovzxwq3834, 6);
    t[O::Vpmovzxdq as usize] = pe(Pe::Pmovzxdq3835, 6);
    t[O::Vpcmpgtq as usize] = pe(Pe::Pcmpgtq3837, 6);
    t[O::Vpminsb as usize] = pe(Pe::Pminsb3838, 6);
    t[O::Vpminsd as usize] = pe(Pe::Pminsd3839, 6);
    t[O::Vpminuw as usize] = pe(Pe::Pminuw383A, 6);
    t[O::Vpminud as usize] = pe(Pe::Pminud383B, 6);
    t[O::Vpmaxsb as usize] = pe(Pe::Pmaxsb383C, 6);
    t[O::Vpmaxsd as usize] = pe(Pe::Pmaxsd383D, 6);
    t[O::Vpmaxuw as usize] = pe(Pe::Pmaxuw383E, 6);
    t[O::Vpmaxud as usize] = pe(Pe::Pmaxud383F, 6);
    t[O::Vpmulld as usize] = pe(Pe::Pmulld3840, 6);
    t[O::Vphminposuw as usize] = pe(Pe::Phminposuw3841, 6);
    t[O::Vaesimc as usize] = pe(Pe::Aesimc38DB, 6);
    t[O::Vaesenc as usize] = pe(Pe::Aesenc38DC, 6);
    t[O::Vaesenclast as usize] = pe(Pe::Aesenclast38DD, 6);
    t[O::Vaesdec as usize] = pe(Pe::Aesdec38DE, 6);
    t[O::Vaesdeclast as usize] = pe(Pe::Aesdeclast38DF, 6);
    t[O::Vbroadcastss as usize] = pe(Pe::Vbroadcastss3818, 6);
    t[O::Vbroadcastsd as usize] = pe(Pe::Vbroadcastsd3819, 6);
    t[O::Vpbroadcastb as usize] = pe(Pe::Vpbroadcastb3878, 6);
    t[O::Vpbroadcastw as usize] = pe(Pe::Vpbroadcastw3879, 6);
    t[O::Vpbroadcastd as usize] = pe(Pe::Vpbroadcastd3858, 6);
    t[O::Vpbroadcastq as usize] = pe(Pe::Vpbroadcastq3859, 6);
    t[O::Vfmadd132ps as usize] = wv(Wv::Fma98, 0);
    t[O::Vfmadd132pd as usize] = wv(Wv::Fma98, 1);
    t[O::Vfmadd213ps as usize] = wv(Wv::FmaA8, 0);
    t[O::Vfmadd213pd as usize] = wv(Wv::FmaA8, 1);
    t[O::Vfmadd231ps as usize] = wv(Wv::FmaB8, 0);
    t[O::Vfmadd231pd as usize] = wv(Wv::FmaB8, 1);
    t[O::Andn as usize] = pe(Pe::AndnF2, 4);
    t[O::Bzhi as usize] = pe(Pe::BzhiF5, 4);
    t[O::Pext as usize] = pe(Pe::BzhiF5, 5);
    t[O::Pdep as usize] = pe(Pe::BzhiF5, 7);
    t[O::Blsr as usize] = grp(Grp::G17, 1);
    t[O::Blsmsk as usize] = grp(Grp::G17, 2);
    t[O::Blsi as usize] = grp(Grp::G17, 3);
    t[O::Bextr as usize] = pe(Pe::BextrF7, 4);
    t[O::Shlx as usize] = pe(Pe::BextrF7, 6);
    t[O::Sarx as usize] = pe(Pe::BextrF7, 5);
    t[O::Shrx as usize] = pe(Pe::BextrF7, 7);
    t[O::Mulx as usize] = pe(Pe::AdcxF6, 7);
    t[O::Vgatherdps as usize] = wv(Wv::Gather92, 0);
    t[O::Vgatherdpd as usize] = wv(Wv::Gather92, 1);
    t[O::Vgatherqps as usize] = wv(Wv::Gather93, 0);
    t[O::Vgatherqpd as usize] = wv(Wv::Gather93, 1);
    t[O::Vpgatherdd as usize] = wv(Wv::Pgather90, 0);
    t[O::Vpgatherdq as usize] = wv(Wv::Pgather90, 1);
    t[O::Vpgatherqd as usize] = wv(Wv::Pgather91, 0);
    t[O::Vpgatherqq as usize] = wv(Wv::Pgather91, 1);
    t[O::Vpopcntd as usize] = wb(Wb::Popcnt55, 0);
    t[O::Vpopcntq as usize] = wb(Wb::Popcnt55, 2);
    t[O::Vgatherpf0dps as usize] = grp(Grp::Gpf6, 1);
    t[O::Vgatherpf1dps as usize] = grp(Grp::Gpf6, 2);
    t[O::Vscatterpf0dps as usize] = grp(Grp::Gpf6, 5);
    t[O::Vscatterpf1dps as usize] = grp(Grp::Gpf6, 6);
    // 0F 3A map
    t[O::Roundps as usize] = pe(Pe::Roundps3A08, 2);
    t[O::Roundpd as usize] = pe(Pe::Roundpd3A09, 2);
    t[O::Roundss as usize] = pe(Pe::Roundss3A0A, 2);
    t[O::Roundsd as usize] = pe(Pe::Roundsd3A0B, 2);
    t[O::Blendps as usize] = pe(Pe::Blendps3A0C, 2);
    t[O::Blendpd as usize] = pe(Pe::Blendpd3A0D, 2);
    t[O::Pblendw as usize] = pe(Pe::Pblendw3A0E, 2);
    t[O::Palignr as usize] = pe(Pe::Palignr3A0F, 2);
    t[O::Pextrb as usize] = pe(Pe::Pextrb3A14, 2);
    t[O::Pextrd as usize] = pe(Pe::Pextrd3A16, 2);
    t[O::Extractps as usize] = pe(Pe::Extractps3A17, 2);
    t[O::Pinsrb as usize] = pe(Pe::Pinsrb3A20, 2);
    t[O::Insertps as usize] = pe(Pe::Insertps3A21, 2);
    t[O::Pinsrd as usize] = pe(Pe::Pinsrd3A22, 2);
    t[O::Dpps as usize] = pe(Pe::Dpps3A40, 2);
    t[O::Dppd as usize] = pe(Pe::Dppd3A41, 2);
    t[O::Mpsadbw as usize] = pe(Pe::Mpsadbw3A42, 2);
    t[O::Pclmulqdq as usize] = pe(Pe::Pclmul3A44, 2);
    t[O::Pcmpestrm as usize] = pe(Pe::Pcmpestrm3A60, 2);
    t[O::Pcmpestri as usize] = pe(Pe::Pcmpestri3A61, 2);
    t[O::Pcmpistrm as usize] = pe(Pe::Pcmpistrm3A62, 2);
    t[O::Pcmpistri as usize] = pe(Pe::Pcmpistri3A63, 2);
    t[O::Sha1rnds4 as usize] = EntryRef::ThreeByte3A(0xcc);
    t[O::Aeskeygenassist as usize] = pe(Pe::Aeskeygen3ADF, 2);
    t[O::Vroundps as usize] = pe(Pe::Roundps3A08, 6);
    t[O::Vroundpd as usize] = pe(Pe::Roundpd3A09, 6);
    t[O::Vroundss as usize] = pe(Pe::Roundss3A0A, 6);
    t[O::Vroundsd as usize] = pe(Pe::Roundsd3A0B, 6);
    t[O::Vblendps as usize] = pe(Pe::Blendps3A0C, 6);
    t[O::Vblendpd as usize] = pe(Pe::Blendpd3A0D, 6);
    t[O::Vpblendw as usize] = pe(Pe::Pblendw3A0E, 6);
    t[O::Vpalignr as usize] = pe(Pe::Palignr3A0F, 6);
    t[O::Vpextrb as usize] = pe(Pe::Pextrb3A14, 6);
    t[O::Vpextrd as usize] = pe(Pe::Pextrd3A16, 6);
    t[O::Vextractps as usize] = pe(Pe::Extractps3A17, 6);
    t[O::Vpinsrb as usize] = pe(Pe::Pinsrb3A20, 6);
    t[O::Vinsertps as usize] = pe(Pe::Insertps3A21, 6);
    t[O::Vpinsrd as usize] = pe(Pe::Pinsrd3A22, 6);
    t[O::Vdpps as usize] = pe(Pe::Dpps3A40, 6);
    t[O::Vdppd as usize] = pe(Pe::Dppd3A41, 6);
    t[O::Vmpsadbw as usize] = pe(Pe::Mpsadbw3A42, 6);
    t[O::Vpclmulqdq as usize] = pe(Pe::Pclmul3A44, 6);
    t[O::Vpcmpestrm as usize] = pe(Pe::Pcmpestrm3A60, 6);
    t[O::Vpcmpestri as usize] = pe(Pe::Pcmpestri3A61, 6);
    t[O::Vpcmpistrm as usize] = pe(Pe::Pcmpistrm3A62, 6);
    t[O::Vpcmpistri as usize] = pe(Pe::Pcmpistri3A63, 6);
    t[O::Vaeskeygenassist as usize] = pe(Pe::Aeskeygen3ADF, 6);
    t[O::Vperm2f128 as usize] = pe(Pe::Vperm3A06, 6);
    t[O::Vinsertf128 as usize] = pe(Pe::Vinsertf3A18, 6);
    t[O::Vextractf128 as usize] = pe(Pe::Vextractf3A19, 6);
    t[O::Vblendvps as usize] = pe(Pe::Vblendvps3A4A, 6);
    t[O::Vblendvpd as usize] = pe(Pe::Vblendvpd3A4B, 6);
    t[O::Vpblendvb as usize] = pe(Pe::Vpblendvb3A4C, 6);
    // XOP
    t[O::Blcfill as usize] = grp(Grp::Tbm1, 1);
    t[O::Blsfill as usize] = grp(Grp::Tbm1, 2);
    t[O::Blcs as usize] = grp(Grp::Tbm1, 3);
    t[O::Tzmsk as usize] = grp(Grp::Tbm1, 4);
    t[O::Blcic as usize] = grp(Grp::Tbm1, 5);
    t[O::Blsic as usize] = grp(Grp::Tbm1, 6);
    t[O::T1mskc as usize] = grp(Grp::Tbm1, 7);
    t[O::Blcmsk as usize] = grp(Grp::Tbm2, 1);
    t[O::Blci as usize] = grp(Grp::Tbm2, 6);
    t[O::Vpcmov as usize] = EntryRef::Xop8(0xa2);
    // Far-pointer loads
    t[O::Lss as usize] = tb(0xb2);
    t[O::Lfs as usize] = tb(0xb4);
    t[O::Lgs as usize] = tb(0xb5);
    t
}

#[rustfmt::skip]
const fn extend_x87(mut t: [EntryRef; Opcode::COUNT]) -> [EntryRef; Opcode::COUNT] {
    use Opcode as O;
    t[O::Fadd as usize] = fl(0, 0);
    t[O::Fmul as usize] = fl(0, 1);
    t[O::Fcom as usize] = fl(0, 2);
    t[O::Fcomp as usize] = fl(0, 3);
    t[O::Fsub as usize] = fl(0, 4);
    t[O::Fsubr as usize] = fl(0, 5);
    t[O::Fdiv as usize] = fl(0, 6);
    t[O::Fdivr as usize] = fl(0, 7);
    t[O::Fld as usize] = fl(1, 0);
    t[O::Fst as usize] = fl(1, 2);
    t[O::Fstp as usize] = fl(1, 3);
    t[O::Fldenv as usize] = fl(1, 4);
    t[O::Fldcw as usize] = fl(1, 5);
    t[O::Fnstenv as usize] = fl(1, 6);
    t[O::Fnstcw as usize] = fl(1, 7);
    t[O::Fiadd as usize] = fl(2, 0);
    t[O::Fimul as usize] = fl(2, 1);
    t[O::Ficom as usize] = fl(2, 2);
    t[O::Ficomp as usize] = fl(2, 3);
    t[O::Fisub as usize] = fl(2, 4);
    t[O::Fisubr as usize] = fl(2, 5);
    t[O::Fidiv as usize] = fl(2, 6);
    t[O::Fidivr as usize] = fl(2, 7);
    t[O::Fild as usize] = fl(3, 0);
    t[O::Fisttp as usize] = fl(3, 1);
    t[O::Fist as usize] = fl(3, 2);
    t[O::Fistp as usize] = fl(3, 3);
    t[O::Frstor as usize] = fl(5, 4);
    t[O::Fnsave as usize] = fl(5, 6);
    t[O::Fnstsw as usize] = fl(5, 7);
    t[O::Fbld as usize] = fl(7, 4);
    t[O::Fbstp as usize] = fl(7, 6);
    t[O::Fxch as usize] = fh(1, 8);
    t[O::Fnop as usize] = fh(1, 16);
    t[O::Fchs as usize] = fh(1, 32);
    t[O::Fabs as usize] = fh(1, 33);
    t[O::Ftst as usize] = fh(1, 36);
    t[O::Fxam as usize] = fh(1, 37);
    t[O::Fld1 as usize] = fh(1, 40);
    t[O::Fldl2t as usize] = fh(1, 41);
    t[O::Fldl2e as usize] = fh(1, 42);
    t[O::Fldpi as usize] = fh(1, 43);
    t[O::Fldlg2 as usize] = fh(1, 44);
    t[O::Fldln2 as usize] = fh(1, 45);
    t[O::Fldz as usize] = fh(1, 46);
    t[O::F2xm1 as usize] = fh(1, 48);
    t[O::Fyl2x as usize] = fh(1, 49);
    t[O::Fptan as usize] = fh(1, 50);
    t[O::Fpatan as usize] = fh(1, 51);
    t[O::Fxtract as usize] = fh(1, 52);
    t[O::Fprem1 as usize] = fh(1, 53);
    t[O::Fdecstp as usize] = fh(1, 54);
    t[O::Fincstp as usize] = fh(1, 55);
    t[O::Fprem as usize] = fh(1, 56);
    t[O::Fyl2xp1 as usize] = fh(1, 57);
    t[O::Fsqrt as usize] = fh(1, 58);
    t[O::Fsincos as usize] = fh(1, 59);
    t[O::Frndint as usize] = fh(1, 60);
    t[O::Fscale as usize] = fh(1, 61);
    t[O::Fsin as usize] = fh(1, 62);
    t[O::Fcos as usize] = fh(1, 63);
    t[O::Fcmovb as usize] = fh(2, 0);
    t[O::Fcmove as usize] = fh(2, 8);
    t[O::Fcmovbe as usize] = fh(2, 16);
    t[O::Fcmovu as usize] = fh(2, 24);
    t[O::Fucompp as usize] = fh(2, 41);
    t[O::Fcmovnb as usize] = fh(3, 0);
    t[O::Fcmovne as usize] = fh(3, 8);
    t[O::Fcmovnbe as usize] = fh(3, 16);
    t[O::Fcmovnu as usize] = fh(3, 24);
    t[O::Fnclex as usize] = fh(3, 34);
    t[O::Fninit as usize] = fh(3, 35);
    t[O::Fucomi as usize] = fh(3, 40);
    t[O::Fcomi as usize] = fh(3, 48);
    t[O::Ffree as usize] = fh(5, 0);
    t[O::Fucom as usize] = fh(5, 32);
    t[O::Fucomp as usize] = fh(5, 40);
    t[O::Faddp as usize] = fh(6, 0);
    t[O::Fmulp as usize] = fh(6, 8);
    t[O::Fcompp as usize] = fh(6, 25);
    t[O::Fsubrp as usize] = fh(6, 32);
    t[O::Fsubp as usize] = fh(6, 40);
    t[O::Fdivrp as usize] = fh(6, 48);
    t[O::Fdivp as usize] = fh(6, 56);
    t[O::Ffreep as usize] = fh(7, 0);
    t[O::Fucomip as usize] = fh(7, 40);
    t[O::Fcomip as usize] = fh(7, 48);
    t
}
