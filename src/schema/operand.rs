//! Operand type descriptors used by instruction templates.
//!
//! A template describes each operand as a `(kind, size)` pair. The pair only
//! says how the operand is *encoded* and how wide it is; extracting operand
//! values (register numbers, displacements, immediates) is the caller's job.

/// Registers that appear as implicit fixed operands in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    Al,
    Cl,
    Dl,
    Bl,
    Ah,
    Ch,
    Dh,
    Bh,
    Ax,
    Dx,
    Eax,
    Ecx,
    Edx,
    Ebx,
    Es,
    Cs,
    Ss,
    Ds,
    Fs,
    Gs,
    St0,
    St1,
    St2,
    St3,
    St4,
    St5,
    St6,
    St7,
    Xmm0,
}

/// How an operand is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Unused slot sentinel.
    None,
    /// General register selected by ModR/M.reg.
    Greg,
    /// General register selected by ModR/M.r/m; register form only.
    Grm,
    /// ModR/M.r/m: general register or memory.
    RegMem,
    /// Immediate value following the opcode bytes.
    Imm,
    /// Relative branch displacement.
    Rel,
    /// Direct far pointer (segment:offset immediate).
    FarPtr,
    /// Memory addressed by an absolute offset immediate.
    MemOffs,
    /// Memory-only ModR/M.r/m.
    Mem,
    /// MMX register selected by ModR/M.reg.
    MmxReg,
    /// MMX register or memory from ModR/M.r/m.
    MmxRm,
    /// XMM/YMM/ZMM register selected by ModR/M.reg.
    VecReg,
    /// XMM/YMM/ZMM register or memory from ModR/M.r/m.
    VecRm,
    /// General register selected by VEX.vvvv (BMI instruction groups).
    GregVex,
    /// XMM/YMM/ZMM register selected by VEX/EVEX.vvvv.
    VecVex,
    /// XMM/YMM/ZMM register selected by the high nibble of a trailing
    /// immediate byte.
    VecIs4,
    /// Opmask register selected by ModR/M.reg.
    MaskReg,
    /// Opmask register or memory from ModR/M.r/m.
    MaskRm,
    /// Opmask register selected by VEX/EVEX.vvvv.
    MaskVex,
    /// Opmask selector from EVEX.aaa.
    MaskEvex,
    /// Bounds register selected by ModR/M.reg.
    BndReg,
    /// Bounds register or memory from ModR/M.r/m.
    BndRm,
    /// Segment register selected by ModR/M.reg.
    Sreg,
    /// Control register selected by ModR/M.reg.
    Creg,
    /// Debug register selected by ModR/M.reg.
    Dreg,
    /// I/O port held in DX.
    Port,
    /// The flags register.
    Flags,
    /// Implicit fixed register.
    Implicit(Reg),
    /// Implicit general register (number 0-7) whose width follows the
    /// operand-size attribute.
    ImplicitVar(u8),
    /// Implicit stack store at the new top of stack; the stack pointer
    /// adjusts by the operand width.
    StackPush,
    /// Implicit stack load from the current top of stack.
    StackPop,
    /// Implicit small constant.
    Const(u8),
    /// x87 constant-pool value (FLD1, FLDPI, ...).
    FpConst,
    /// String-operation source DS:[rSI].
    StrSrc,
    /// String-operation destination ES:[rDI].
    StrDst,
    /// Table lookup DS:[rBX + AL].
    Xlat,
    /// Memory addressed through a vector SIB index.
    Vsib,
}

/// Operand width. Concrete widths are in bytes; `Lo*` variants are the low
/// bytes of a wider vector register; the remaining variants are variable and
/// resolve against the decode context at the end of a successful traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpSize {
    /// Unused slot sentinel.
    None,
    B1,
    B2,
    B4,
    B6,
    B8,
    B10,
    B14,
    B16,
    B28,
    B32,
    B64,
    B94,
    B108,
    B128,
    B256,
    B512,
    /// Low 1 byte of a vector register.
    Lo1,
    /// Low 2 bytes of a vector register.
    Lo2,
    /// Low 4 bytes of a vector register.
    Lo4,
    /// Low 8 bytes of a vector register.
    Lo8,
    /// Low 16 bytes of a vector register.
    Lo16,
    /// 2, 4 or 8: operand-size attribute with REX.W promotion.
    V,
    /// 4 or 8 by REX.W alone; the operand-size prefix is ignored.
    Y,
    /// 2 or 4: operand-size attribute, capped at 4 (immediates, rel32).
    Z,
    /// 4, 6 or 10: far pointer, 2-byte selector plus offset.
    P,
    /// Stack slot width: 2 with an operand-size prefix, else 8 in 64-bit
    /// mode and 4 in 32-bit mode.
    Vs,
    /// 4 or 8: operand-size attribute, promoted to 8 in 64-bit mode
    /// regardless of prefixes.
    Vd64,
    /// 16 or 32 by VEX.L.
    Vx,
    /// 16, 32 or 64 by EVEX.L'L (VEX.L when VEX-encoded).
    Vl,
    /// Half of [`OpSize::Vl`].
    Vh,
    /// Quarter of [`OpSize::Vl`].
    Vq,
    /// Processor-defined XSAVE area.
    Xsave,
}

impl OpSize {
    /// Byte width of a concrete size, `None` for variable sizes and slices.
    #[must_use]
    pub const fn bytes(self) -> Option<u16> {
        Some(match self {
            OpSize::B1 | OpSize::Lo1 => 1,
            OpSize::B2 | OpSize::Lo2 => 2,
            OpSize::B4 | OpSize::Lo4 => 4,
            OpSize::B6 => 6,
            OpSize::B8 | OpSize::Lo8 => 8,
            OpSize::B10 => 10,
            OpSize::B14 => 14,
            OpSize::B16 | OpSize::Lo16 => 16,
            OpSize::B28 => 28,
            OpSize::B32 => 32,
            OpSize::B64 => 64,
            OpSize::B94 => 94,
            OpSize::B108 => 108,
            OpSize::B128 => 128,
            OpSize::B256 => 256,
            OpSize::B512 => 512,
            _ => return None,
        })
    }

    /// Whether the width depends on the decode context.
    #[must_use]
    pub const fn is_variable(self) -> bool {
        matches!(
            self,
            OpSize::V
                | OpSize::Y
                | OpSize::Z
                | OpSize::P
                | OpSize::Vs
                | OpSize::Vd64
                | OpSize::Vx
                | OpSize::Vl
                | OpSize::Vh
                | OpSize::Vq
        )
    }
}

/// One operand slot of a template: `(kind, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandDesc {
    pub kind: OperandKind,
    pub size: OpSize,
}

impl OperandDesc {
    /// The unused-slot sentinel.
    pub const NONE: OperandDesc = OperandDesc {
        kind: OperandKind::None,
        size: OpSize::None,
    };

    #[must_use]
    pub const fn new(kind: OperandKind, size: OpSize) -> Self {
        Self { kind, size }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.kind, OperandKind::None)
    }

    /// Whether the operand is encoded as immediate bytes trailing the
    /// instruction (immediates, branch displacements, far pointers, the
    /// IS4 register byte and absolute memory offsets).
    #[must_use]
    pub const fn is_encoded_immediate(self) -> bool {
        matches!(
            self.kind,
            OperandKind::Imm
                | OperandKind::Rel
                | OperandKind::FarPtr
                | OperandKind::MemOffs
                | OperandKind::VecIs4
        )
    }

    /// Whether the operand consumes the ModR/M r/m field as a potential
    /// memory reference.
    #[must_use]
    pub const fn uses_rm_memory(self) -> bool {
        matches!(
            self.kind,
            OperandKind::RegMem
                | OperandKind::Mem
                | OperandKind::MmxRm
                | OperandKind::VecRm
                | OperandKind::MaskRm
                | OperandKind::BndRm
                | OperandKind::Vsib
        )
    }
}

#[test]
fn test_opsize_bytes() {
    assert_eq!(OpSize::B4.bytes(), Some(4));
    assert_eq!(OpSize::Lo8.bytes(), Some(8));
    assert_eq!(OpSize::V.bytes(), None);
    assert!(OpSize::Vl.is_variable());
    assert!(!OpSize::B512.is_variable());
}

#[test]
fn test_desc_sentinel() {
    assert!(OperandDesc::NONE.is_none());
    assert!(!OperandDesc::new(OperandKind::Imm, OpSize::B1).is_none());
    assert!(OperandDesc::new(OperandKind::Imm, OpSize::B1).is_encoded_immediate());
    assert!(OperandDesc::new(OperandKind::VecRm, OpSize::Vx).uses_rm_memory());
}
