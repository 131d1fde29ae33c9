use x86_decode::schema::flags::Eflags;
use x86_decode::schema::operand::{OpSize, OperandKind, Reg};
use x86_decode::{DecodeError, Decoded, Mode, Opcode, decode};

fn ok(mode: Mode, bytes: &[u8]) -> Decoded {
    match decode(mode, bytes, 0, 15) {
        Ok(d) => d,
        Err(e) => panic!("decode of {bytes:02x?} failed: {e}"),
    }
}

fn err(mode: Mode, bytes: &[u8]) -> DecodeError {
    match decode(mode, bytes, 0, 15) {
        Ok(d) => panic!(
            "decode of {bytes:02x?} unexpectedly resolved {:?}",
            d.template.opcode
        ),
        Err(e) => e,
    }
}

#[test]
fn test_nop() {
    let d = ok(Mode::Mode32, &[0x90]);
    assert_eq!(d.template.opcode, Opcode::Nop);
    assert_eq!(d.length, 1);
    assert!(d.template.dsts().is_empty());
    assert!(d.template.srcs().is_empty());
}

#[test]
fn test_add_rex_w() {
    // add rbx, rax
    let d = ok(Mode::Mode64, &[0x48, 0x01, 0xc3]);
    assert_eq!(d.template.opcode, Opcode::Add);
    assert_eq!(d.length, 3);
    let dst = d.template.dsts()[0];
    assert_eq!(dst.kind, OperandKind::RegMem);
    assert_eq!(dst.size, OpSize::B8);
    let srcs = d.template.srcs();
    assert_eq!(srcs[0].kind, OperandKind::Greg);
    assert_eq!(srcs[0].size, OpSize::B8);
    assert_eq!(srcs[1].kind, OperandKind::RegMem);
    assert_eq!(d.template.eflags.writes(), Eflags::ARITH);
}

#[test]
fn test_popcnt() {
    let d = ok(Mode::Mode64, &[0xf3, 0x0f, 0xb8, 0xc0]);
    assert_eq!(d.template.opcode, Opcode::Popcnt);
    assert_eq!(d.length, 4);
    assert_eq!(d.template.dsts()[0].kind, OperandKind::Greg);
    assert_eq!(d.template.dsts()[0].size, OpSize::B4);
    assert_eq!(d.template.srcs()[0].kind, OperandKind::RegMem);
}

#[test]
fn test_vxorps_vex() {
    let d = ok(Mode::Mode64, &[0xc5, 0xf8, 0x57, 0xc1]);
    assert_eq!(d.template.opcode, Opcode::Vxorps);
    assert_eq!(d.length, 4);
    assert_eq!(d.template.dsts()[0].kind, OperandKind::VecReg);
    assert_eq!(d.template.dsts()[0].size, OpSize::B16);
    let srcs = d.template.srcs();
    assert_eq!(srcs[0].kind, OperandKind::VecVex);
    assert_eq!(srcs[1].kind, OperandKind::VecRm);
}

#[test]
fn test_vaddps_evex_512() {
    let d = ok(Mode::Mode64, &[0x62, 0xf1, 0x7c, 0x48, 0x58, 0xc1]);
    assert_eq!(d.template.opcode, Opcode::Vaddps);
    assert_eq!(d.length, 6);
    assert_eq!(d.template.dsts()[0].kind, OperandKind::VecReg);
    assert_eq!(d.template.dsts()[0].size, OpSize::B64);
    let srcs = d.template.srcs();
    assert_eq!(srcs[0].kind, OperandKind::VecVex);
    assert_eq!(srcs[0].size, OpSize::B64);
    assert_eq!(srcs[1].kind, OperandKind::VecRm);
    assert_eq!(srcs[1].size, OpSize::B64);
    assert_eq!(srcs[2].kind, OperandKind::MaskEvex);
}

#[test]
fn test_ptest() {
    let d = ok(Mode::Mode64, &[0x66, 0x0f, 0x38, 0x17, 0xc1]);
    assert_eq!(d.template.opcode, Opcode::Ptest);
    assert_eq!(d.length, 5);
    assert!(d.template.dsts().is_empty());
    let srcs = d.template.srcs();
    assert_eq!(srcs[0].kind, OperandKind::VecReg);
    assert_eq!(srcs[1].kind, OperandKind::VecRm);
    assert!(d.template.eflags.writes().contains(Eflags::CF | Eflags::ZF));
}

#[test]
fn test_rep_movs() {
    let d = ok(Mode::Mode32, &[0xf3, 0xa4]);
    assert_eq!(d.template.opcode, Opcode::RepMovs);
    assert_eq!(d.length, 2);
    let dsts = d.template.dsts();
    assert_eq!(dsts[0].kind, OperandKind::StrDst);
    assert_eq!(dsts[0].size, OpSize::B1);
    let srcs = d.template.srcs();
    assert_eq!(srcs[0].kind, OperandKind::StrSrc);
    assert_eq!(srcs[0].size, OpSize::B1);
    // The counter arrives through the operand-overflow chain.
    assert!(dsts.contains(&x86_decode::schema::operand::OperandDesc::new(
        OperandKind::ImplicitVar(1),
        OpSize::B4
    )));
}

#[test]
fn test_fld_m64() {
    let d = ok(Mode::Mode64, &[0xdd, 0x05, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(d.template.opcode, Opcode::Fld);
    assert_eq!(d.length, 6);
    assert_eq!(
        d.template.dsts()[0].kind,
        OperandKind::Implicit(Reg::St0)
    );
    assert_eq!(d.template.srcs()[0].kind, OperandKind::Mem);
    assert_eq!(d.template.srcs()[0].size, OpSize::B8);
}

#[test]
fn test_xgetbv() {
    let d = ok(Mode::Mode64, &[0x0f, 0x01, 0xd0]);
    assert_eq!(d.template.opcode, Opcode::Xgetbv);
    assert_eq!(d.length, 3);
    let dsts = d.template.dsts();
    assert_eq!(dsts[0].kind, OperandKind::Implicit(Reg::Eax));
    assert_eq!(dsts[1].kind, OperandKind::Implicit(Reg::Edx));
    assert_eq!(d.template.srcs()[0].kind, OperandKind::Implicit(Reg::Ecx));
}

#[test]
fn test_group5_undefined_reg() {
    // FF /0 is INC; FF /7 is undefined.
    let d = ok(Mode::Mode64, &[0xff, 0x00]);
    assert_eq!(d.template.opcode, Opcode::Inc);
    assert_eq!(err(Mode::Mode64, &[0xff, 0xff]), DecodeError::InvalidByte);
}

#[test]
fn test_truncated_prefix_only() {
    assert_eq!(err(Mode::Mode64, &[0x66]), DecodeError::Truncated);
    assert_eq!(err(Mode::Mode32, &[0xf3]), DecodeError::Truncated);
}

#[test]
fn test_prefixes_exceed_length_limit() {
    assert_eq!(err(Mode::Mode64, &[0x66; 15]), DecodeError::InvalidLength);
}

#[test]
fn test_prefix_absorption_idempotent() {
    let one = ok(Mode::Mode32, &[0x66, 0x90]);
    let two = ok(Mode::Mode32, &[0x66, 0x66, 0x90]);
    assert_eq!(one.template.opcode, two.template.opcode);
    assert_eq!(one.length, 2);
    assert_eq!(two.length, 3);
}

// One acceptance and one rejection per dispatch kind.

#[test]
fn test_escape_kinds() {
    assert_eq!(ok(Mode::Mode64, &[0x0f, 0xa2]).template.opcode, Opcode::Cpuid);
    assert_eq!(err(Mode::Mode64, &[0x0f, 0x04]), DecodeError::InvalidByte);
    assert_eq!(err(Mode::Mode64, &[0x0f, 0x38, 0xff]), DecodeError::InvalidByte);
    let d = ok(Mode::Mode64, &[0x66, 0x0f, 0x3a, 0x0f, 0xc1, 0x01]);
    assert_eq!(d.template.opcode, Opcode::Palignr);
    assert_eq!(d.length, 6);
    assert_eq!(err(Mode::Mode64, &[0x0f, 0x3a, 0x07]), DecodeError::InvalidByte);
}

#[test]
fn test_extension_kind() {
    let d = ok(Mode::Mode64, &[0xf7, 0xd8]);
    assert_eq!(d.template.opcode, Opcode::Neg);
    assert_eq!(err(Mode::Mode64, &[0xc6, 0x08]), DecodeError::InvalidByte);
}

#[test]
fn test_prefix_ext_kind() {
    // 66 with F2/F3 present and a live 66 slot is ambiguous.
    assert_eq!(
        err(Mode::Mode64, &[0x66, 0xf3, 0x0f, 0x58, 0xc1]),
        DecodeError::InvalidPrefix
    );
    // A row without a 66 form treats 0x66 as a plain size modifier.
    let d = ok(Mode::Mode64, &[0x66, 0x0f, 0xbc, 0xc1]);
    assert_eq!(d.template.opcode, Opcode::Bsf);
    assert_eq!(d.template.dsts()[0].size, OpSize::B2);
    // Competing mandatory prefixes: the last F2/F3 wins.
    let d = ok(Mode::Mode64, &[0xf2, 0xf3, 0x0f, 0xb8, 0xc0]);
    assert_eq!(d.template.opcode, Opcode::Popcnt);
}

#[test]
fn test_x64_ext_kind() {
    assert_eq!(ok(Mode::Mode32, &[0x40]).template.opcode, Opcode::Inc);
    assert_eq!(ok(Mode::Mode32, &[0x4f]).template.opcode, Opcode::Dec);
    // The same byte is a REX prefix in 64-bit mode.
    assert_eq!(ok(Mode::Mode64, &[0x48, 0x90]).template.opcode, Opcode::Nop);
    assert_eq!(ok(Mode::Mode32, &[0x63, 0xc8]).template.opcode, Opcode::Arpl);
    assert_eq!(ok(Mode::Mode64, &[0x63, 0xc8]).template.opcode, Opcode::Movsxd);
}

#[test]
fn test_vex_prefix_ext_kind() {
    // 32-bit mode: C5 with a memory-form ModR/M is LDS.
    let d = ok(Mode::Mode32, &[0xc5, 0x06]);
    assert_eq!(d.template.opcode, Opcode::Lds);
    // A legacy mandatory prefix in front of VEX is illegal.
    assert_eq!(
        err(Mode::Mode64, &[0x66, 0xc5, 0xf8, 0x57, 0xc1]),
        DecodeError::InvalidPrefix
    );
    // LDS itself does not exist in 64-bit mode; C5 is always VEX there.
    assert_eq!(ok(Mode::Mode64, &[0xc5, 0xf8, 0x57, 0xc1]).template.opcode, Opcode::Vxorps);
}

#[test]
fn test_xop_prefix_ext_kind() {
    // 8F /0 stays POP.
    assert_eq!(ok(Mode::Mode64, &[0x8f, 0xc0]).template.opcode, Opcode::Pop);
    // XOP map 9, 01 /1: blcfill.
    let d = ok(Mode::Mode64, &[0x8f, 0xe9, 0x70, 0x01, 0xc9]);
    assert_eq!(d.template.opcode, Opcode::Blcfill);
    assert_eq!(
        err(Mode::Mode64, &[0x8f, 0xe9, 0x70, 0x03, 0xc9]),
        DecodeError::InvalidByte
    );
}

#[test]
fn test_evex_prefix_ext_kind() {
    // 32-bit mode: 62 with a memory ModR/M is BOUND.
    assert_eq!(ok(Mode::Mode32, &[0x62, 0x06]).template.opcode, Opcode::Bound);
    // Reserved EVEX payload bits must be zero.
    assert_eq!(
        err(Mode::Mode64, &[0x62, 0xf5, 0x7c, 0x48, 0x58, 0xc1]),
        DecodeError::InvalidPrefix
    );
}

#[test]
fn test_rex_b_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0x90]).template.opcode, Opcode::Nop);
    assert_eq!(ok(Mode::Mode64, &[0x41, 0x90]).template.opcode, Opcode::Xchg);
    assert_eq!(ok(Mode::Mode64, &[0xf3, 0x90]).template.opcode, Opcode::Pause);
}

#[test]
fn test_rex_w_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0x0f, 0xae, 0x00]).template.opcode, Opcode::Fxsave);
    assert_eq!(
        ok(Mode::Mode64, &[0x48, 0x0f, 0xae, 0x00]).template.opcode,
        Opcode::Fxsave64
    );
}

#[test]
fn test_vex_l_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0x0f, 0x77]).template.opcode, Opcode::Emms);
    assert_eq!(ok(Mode::Mode64, &[0xc5, 0xf8, 0x77]).template.opcode, Opcode::Vzeroupper);
    assert_eq!(ok(Mode::Mode64, &[0xc5, 0xfc, 0x77]).template.opcode, Opcode::Vzeroall);
    // vmovd requires VEX.L = 0.
    assert_eq!(
        err(Mode::Mode64, &[0xc5, 0xfd, 0x6e, 0xc0]),
        DecodeError::InvalidPrefix
    );
}

#[test]
fn test_vex_w_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0xc5, 0xf8, 0x90, 0xc1]).template.opcode, Opcode::Kmovw);
    assert_eq!(
        ok(Mode::Mode64, &[0xc4, 0xe1, 0xf8, 0x90, 0xc1]).template.opcode,
        Opcode::Kmovq
    );
}

#[test]
fn test_evex_wb_ext_kind() {
    // vaddps is W0; the W1 slot of its row is empty.
    assert_eq!(
        err(Mode::Mode64, &[0x62, 0xf1, 0xfc, 0x48, 0x58, 0xc1]),
        DecodeError::InvalidByte
    );
    // vaddpd is W1 under the 66 embedded prefix.
    let d = ok(Mode::Mode64, &[0x62, 0xf1, 0xfd, 0x48, 0x58, 0xc1]);
    assert_eq!(d.template.opcode, Opcode::Vaddpd);
}

#[test]
fn test_mod_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0x0f, 0x01, 0x10]).template.opcode, Opcode::Lgdt);
    // lidt has no register form.
    assert_eq!(err(Mode::Mode64, &[0x0f, 0x01, 0xd8]), DecodeError::InvalidByte);
}

#[test]
fn test_rm_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0x0f, 0x01, 0xd1]).template.opcode, Opcode::Xsetbv);
    assert_eq!(err(Mode::Mode64, &[0x0f, 0x01, 0xd3]), DecodeError::InvalidByte);
}

#[test]
fn test_float_ext_kind() {
    let d = ok(Mode::Mode64, &[0xd8, 0xc1]);
    assert_eq!(d.template.opcode, Opcode::Fadd);
    assert_eq!(d.template.srcs()[0].kind, OperandKind::Implicit(Reg::St1));
    assert_eq!(err(Mode::Mode64, &[0xd9, 0xd1]), DecodeError::InvalidByte);
    // FFREEP, undocumented but accepted.
    assert_eq!(ok(Mode::Mode64, &[0xdf, 0xc2]).template.opcode, Opcode::Ffreep);
}

#[test]
fn test_suffix_ext_kind() {
    let d = ok(Mode::Mode64, &[0x0f, 0x0f, 0xc1, 0x9e]);
    assert_eq!(d.template.opcode, Opcode::Pfadd);
    assert_eq!(d.length, 4);
    assert_eq!(err(Mode::Mode64, &[0x0f, 0x0f, 0xc1, 0x00]), DecodeError::InvalidByte);
    // The suffix comes after the addressing bytes.
    let d = ok(Mode::Mode32, &[0x0f, 0x0f, 0x41, 0x04, 0x9e]);
    assert_eq!(d.template.opcode, Opcode::Pfadd);
    assert_eq!(d.length, 5);
}

#[test]
fn test_rep_ext_kind() {
    assert_eq!(ok(Mode::Mode32, &[0xa4]).template.opcode, Opcode::Movs);
    assert_eq!(ok(Mode::Mode32, &[0xf3, 0xaa]).template.opcode, Opcode::RepStos);
    // A REP prefix on a non-string instruction is rejected.
    assert_eq!(err(Mode::Mode64, &[0xf3, 0x01, 0xc3]), DecodeError::InvalidPrefix);
}

#[test]
fn test_repne_ext_kind() {
    assert_eq!(ok(Mode::Mode32, &[0xa6]).template.opcode, Opcode::Cmps);
    assert_eq!(ok(Mode::Mode32, &[0xf3, 0xa6]).template.opcode, Opcode::RepeCmps);
    assert_eq!(ok(Mode::Mode32, &[0xf2, 0xa6]).template.opcode, Opcode::RepneCmps);
    assert_eq!(err(Mode::Mode64, &[0xf2, 0x0f, 0xae, 0x00]), DecodeError::InvalidPrefix);
}

#[test]
fn test_e_vex_ext_kind() {
    assert_eq!(ok(Mode::Mode64, &[0x0f, 0x92, 0xc0]).template.opcode, Opcode::Setb);
    assert_eq!(
        ok(Mode::Mode64, &[0xc5, 0xf9, 0x90, 0xc1]).template.opcode,
        Opcode::Kmovb
    );
    assert_eq!(
        err(Mode::Mode64, &[0x62, 0xf1, 0x7c, 0x08, 0x92, 0xc0]),
        DecodeError::InvalidByte
    );
}

#[test]
fn test_mode_exclusion() {
    // pusha exists only outside 64-bit mode.
    assert_eq!(ok(Mode::Mode32, &[0x60]).template.opcode, Opcode::Pusha);
    assert_eq!(err(Mode::Mode64, &[0x60]), DecodeError::InvalidInMode);
    // movsxd exists only in 64-bit mode; arpl covers 32-bit (X64Ext row).
    // swapgs is 64-bit only via the attribute.
    assert_eq!(err(Mode::Mode32, &[0x0f, 0x01, 0xf8]), DecodeError::InvalidInMode);
}

#[test]
fn test_group_aliases_decode() {
    // SHL /4 and its /6 alias decode identically.
    let canonical = ok(Mode::Mode64, &[0xc0, 0xe0, 0x03]);
    let alias = ok(Mode::Mode64, &[0xc0, 0xf0, 0x03]);
    assert_eq!(canonical.template.opcode, Opcode::Shl);
    assert_eq!(alias.template.opcode, Opcode::Shl);
    // TEST /0 and /1.
    assert_eq!(ok(Mode::Mode64, &[0xf6, 0xc0, 0x01]).template.opcode, Opcode::Test);
    assert_eq!(ok(Mode::Mode64, &[0xf6, 0xc8, 0x01]).template.opcode, Opcode::Test);
}

#[test]
fn test_undocumented_opcodes() {
    assert_eq!(ok(Mode::Mode32, &[0xd6]).template.opcode, Opcode::Salc);
    assert_eq!(err(Mode::Mode64, &[0xd6]), DecodeError::InvalidInMode);
    assert_eq!(ok(Mode::Mode64, &[0xf1]).template.opcode, Opcode::Int1);
    // The duplicate x87 encodings carry their canonical identifiers.
    assert_eq!(ok(Mode::Mode64, &[0xdc, 0xd1]).template.opcode, Opcode::Fcom);
    assert_eq!(ok(Mode::Mode64, &[0xdd, 0xc9]).template.opcode, Opcode::Fxch);
}

#[test]
fn test_operand_overflow_chains() {
    let d = ok(Mode::Mode32, &[0x60]);
    // pusha reads all eight registers.
    assert_eq!(d.template.srcs().len(), 8);
    let d = ok(Mode::Mode64, &[0x0f, 0xa2]);
    assert_eq!(d.template.opcode, Opcode::Cpuid);
    assert_eq!(d.template.dsts().len(), 4);
    let d = ok(Mode::Mode64, &[0x0f, 0xc7, 0x08]);
    assert_eq!(d.template.opcode, Opcode::Cmpxchg8b);
    assert_eq!(d.template.dsts().len(), 3);
}

#[test]
fn test_rex_must_be_last_prefix() {
    // A prefix after REX invalidates the encoding.
    assert_eq!(err(Mode::Mode64, &[0x48, 0x66, 0x01, 0xc3]), DecodeError::InvalidPrefix);
    // REX before the opcode is fine.
    assert_eq!(ok(Mode::Mode64, &[0x66, 0x48, 0x01, 0xc3]).template.opcode, Opcode::Add);
}

#[test]
fn test_lengths_with_sib_and_imm() {
    // add dword [eax + ebx*4 + disp8], imm8 -> 83 44 98 10 07
    let d = ok(Mode::Mode32, &[0x83, 0x44, 0x98, 0x10, 0x07]);
    assert_eq!(d.template.opcode, Opcode::Add);
    assert_eq!(d.length, 5);
    // mov rax, imm64
    let d = ok(Mode::Mode64, &[0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(d.template.opcode, Opcode::Mov);
    assert_eq!(d.length, 10);
    // enter imm16, imm8
    let d = ok(Mode::Mode32, &[0xc8, 0x20, 0x00, 0x01]);
    assert_eq!(d.template.opcode, Opcode::Enter);
    assert_eq!(d.length, 4);
    // RIP-relative: inc dword [rip + 0]
    let d = ok(Mode::Mode64, &[0xff, 0x05, 0, 0, 0, 0]);
    assert_eq!(d.length, 6);
}

#[test]
fn test_gather_requires_sib_memory() {
    // vpgatherdd with a register operand is undefined.
    assert_eq!(
        err(Mode::Mode64, &[0xc4, 0xe2, 0x69, 0x90, 0xc1]),
        DecodeError::InvalidPrefix
    );
    // Proper VSIB form: vpgatherdd xmm0, [rax + xmm1*4], xmm2
    let d = ok(Mode::Mode64, &[0xc4, 0xe2, 0x69, 0x90, 0x04, 0x88]);
    assert_eq!(d.template.opcode, Opcode::Vpgatherdd);
    assert!(
        d.template
            .srcs()
            .iter()
            .any(|o| o.kind == OperandKind::Vsib)
    );
}

#[test]
fn test_evex_prefetch_vsib_width() {
    // vgatherpf0dps {k1}, [rax + zmm1*4]: EVEX.66.0F38 C6 /1 with L'L = 10.
    let d = ok(Mode::Mode64, &[0x62, 0xf2, 0x7d, 0x49, 0xc6, 0x0c, 0x88]);
    assert_eq!(d.template.opcode, Opcode::Vgatherpf0dps);
    assert_eq!(d.length, 7);
    // The prefetch form pins the index register to ZMM width; an XMM- or
    // YMM-width L'L is rejected.
    assert_eq!(
        err(Mode::Mode64, &[0x62, 0xf2, 0x7d, 0x09, 0xc6, 0x0c, 0x88]),
        DecodeError::InvalidPrefix
    );
    assert_eq!(
        err(Mode::Mode64, &[0x62, 0xf2, 0x7d, 0x29, 0xc6, 0x0c, 0x88]),
        DecodeError::InvalidPrefix
    );
}
