use num_enum::TryFromPrimitive;
use x86_decode::{Mode, Opcode, decode, encoding_head, verify};

#[test]
fn test_store_invariants() {
    verify::check_tables().unwrap();
}

#[test]
fn test_opcode_index_heads_are_terminal() {
    for raw in 0..Opcode::COUNT as u16 {
        let op = Opcode::try_from_primitive(raw).unwrap();
        if let Some(entry) = encoding_head(op) {
            assert!(entry.is_instruction(), "{op:?} index head is not terminal");
        }
    }
}

#[test]
fn test_common_opcodes_have_encodings() {
    for op in [
        Opcode::Add,
        Opcode::Mov,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Jmp,
        Opcode::Call,
        Opcode::Ret,
        Opcode::Nop,
        Opcode::Popcnt,
        Opcode::Vxorps,
        Opcode::Vaddps,
        Opcode::Ptest,
        Opcode::Fld,
        Opcode::Xgetbv,
        Opcode::RepMovs,
        Opcode::Vpopcntq,
    ] {
        let head = encoding_head(op).unwrap_or_else(|| panic!("{op:?} has no encoding"));
        assert!(head.is_instruction());
    }
}

#[test]
fn test_root_table_has_no_gaps() {
    // Every one-byte value must classify as something: a template, a prefix,
    // a dispatch, or an explicit invalid. Nothing may panic, and short
    // buffers must surface Truncated rather than an internal error.
    for b in 0u16..=0xff {
        let buf = [b as u8, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let _ = decode(Mode::Mode32, &buf, 0, buf.len());
        let _ = decode(Mode::Mode64, &buf, 0, buf.len());
        let _ = decode(Mode::Mode64, &buf[..1], 0, 1);
    }
}

#[test]
fn test_chain_heads_roundtrip_identity() {
    // Walking the canonical chain of a few dense opcodes must stay on the
    // same identifier; the full sweep lives in verify::check_tables.
    let add = encoding_head(Opcode::Add).unwrap();
    assert_eq!(add.mnemonic, "add");
    let shl = encoding_head(Opcode::Shl).unwrap();
    assert_eq!(shl.mnemonic, "shl");
    let movq = encoding_head(Opcode::Movq).unwrap();
    assert_eq!(movq.mnemonic, "movq");
}
