use num_enum::TryFromPrimitive;

/// Stable enumeration of opcode identifiers.
///
/// This enumeration is part of the ABI between the decoder core and its
/// consumers: values are dense starting at zero, new identifiers may be
/// appended only at the tail, and reordering or removing identifiers is a
/// breaking change. The opcode index (`crate::index`) is kept in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u16)]
#[non_exhaustive]
pub enum Opcode {
    // One-byte map: ALU core
    Add = 0,
    Or,
    Adc,
    Sbb,
    And,
    Sub,
    Xor,
    Cmp,
    Test,
    Not,
    Neg,
    Mul,
    Imul,
    Div,
    Idiv,
    Inc,
    Dec,

    // One-byte map: stack, BCD, moves
    Push,
    Pop,
    Pusha,
    Popa,
    Bound,
    Arpl,
    Movsxd,
    Daa,
    Das,
    Aaa,
    Aas,
    Aam,
    Aad,
    Salc,
    Xchg,
    Mov,
    MovSeg,
    Lea,
    Cwde,
    Cdq,
    Fwait,
    Pushf,
    Popf,
    Sahf,
    Lahf,
    Enter,
    Leave,

    // One-byte map: string operations, with their REP-prefixed forms
    Ins,
    RepIns,
    Outs,
    RepOuts,
    Movs,
    RepMovs,
    Stos,
    RepStos,
    Lods,
    RepLods,
    Cmps,
    RepeCmps,
    RepneCmps,
    Scas,
    RepeScas,
    RepneScas,
    Xlat,

    // One-byte map: control transfer
    Jo,
    Jno,
    Jb,
    Jnb,
    Jz,
    Jnz,
    Jbe,
    Jnbe,
    Js,
    Jns,
    Jp,
    Jnp,
    Jl,
    Jnl,
    Jle,
    Jnle,
    Call,
    CallFar,
    Jmp,
    JmpFar,
    Ret,
    RetFar,
    Loopne,
    Loope,
    Loop,
    Jecxz,
    Int3,
    Int,
    Int1,
    Into,
    Iret,

    // One-byte map: shifts and rotates
    Rol,
    Ror,
    Rcl,
    Rcr,
    Shl,
    Shr,
    Sar,

    // One-byte map: leftovers
    Les,
    Lds,
    In,
    Out,
    Hlt,
    Cmc,
    Clc,
    Stc,
    Cli,
    Sti,
    Cld,
    Std,
    Nop,
    Pause,

    // Two-byte map: system
    Sldt,
    Str,
    Lldt,
    Ltr,
    Verr,
    Verw,
    Sgdt,
    Sidt,
    Lgdt,
    Lidt,
    Smsw,
    Lmsw,
    Invlpg,
    Swapgs,
    Rdtscp,
    Vmcall,
    Vmlaunch,
    Vmresume,
    Vmxoff,
    Monitor,
    Mwait,
    Clac,
    Stac,
    Xgetbv,
    Xsetbv,
    Vmfunc,
    Xend,
    Xtest,
    Lar,
    Lsl,
    Syscall,
    Clts,
    Sysret,
    Invd,
    Wbinvd,
    Ud2,
    Ud1,
    MovCr,
    MovDr,
    Wrmsr,
    Rdtsc,
    Rdmsr,
    Rdpmc,
    Sysenter,
    Sysexit,
    Cpuid,
    Movnti,

    // Two-byte map: prefetch
    Prefetch,
    Prefetchw,
    Prefetchnta,
    Prefetcht0,
    Prefetcht1,
    Prefetcht2,

    // Two-byte map: conditional moves and sets
    Cmovo,
    Cmovno,
    Cmovb,
    Cmovnb,
    Cmovz,
    Cmovnz,
    Cmovbe,
    Cmovnbe,
    Cmovs,
    Cmovns,
    Cmovp,
    Cmovnp,
    Cmovl,
    Cmovnl,
    Cmovle,
    Cmovnle,
    Seto,
    Setno,
    Setb,
    Setnb,
    Setz,
    Setnz,
    Setbe,
    Setnbe,
    Sets,
    Setns,
    Setp,
    Setnp,
    Setl,
    Setnl,
    Setle,
    Setnle,

    // Two-byte map: bit and byte operations
    Bt,
    Bts,
    Btr,
    Btc,
    Bsf,
    Bsr,
    Shld,
    Shrd,
    Cmpxchg,
    Cmpxchg8b,
    Cmpxchg16b,
    Xadd,
    Bswap,
    Movzx,
    Movsx,
    Popcnt,
    Lzcnt,
    Tzcnt,
    Movbe,
    Crc32,
    Adcx,
    Adox,

    // Two-byte map: fences and processor state
    Lfence,
    Mfence,
    Sfence,
    Clflush,
    Xsave,
    Xsave64,
    Xrstor,
    Xrstor64,
    Xsaveopt,
    Fxsave,
    Fxsave64,
    Fxrstor,
    Fxrstor64,
    Ldmxcsr,
    Stmxcsr,
    Vldmxcsr,
    Vstmxcsr,
    Rdrand,
    Rdseed,
    Vmptrld,
    Vmclear,
    Vmxon,
    Vmptrst,
    Emms,

    // 3DNow! (suffix-selected)
    Pi2fd,
    Pf2id,
    Pfadd,
    Pfsub,
    Pfsubr,
    Pfmul,
    Pfcmpeq,
    Pfmin,
    Pfmax,
    Pfrcp,
    Pfrsqrt,
    Pavgusb,
    Pmulhrw,
    Femms,

    // Two-byte map: SSE family, legacy forms
    Movups,
    Movupd,
    Movss,
    Movsd,
    Movlps,
    Movlpd,
    Movhlps,
    Movsldup,
    Movddup,
    Unpcklps,
    Unpcklpd,
    Unpckhps,
    Unpckhpd,
    Movhps,
    Movhpd,
    Movlhps,
    Movshdup,
    Movaps,
    Movapd,
    Cvtpi2ps,
    Cvtsi2ss,
    Cvtpi2pd,
    Cvtsi2sd,
    Movntps,
    Movntpd,
    Cvttps2pi,
    Cvttss2si,
    Cvttpd2pi,
    Cvttsd2si,
    Cvtps2pi,
    Cvtss2si,
    Cvtpd2pi,
    Cvtsd2si,
    Ucomiss,
    Ucomisd,
    Comiss,
    Comisd,
    Movmskps,
    Movmskpd,
    Sqrtps,
    Sqrtss,
    Sqrtpd,
    Sqrtsd,
    Rsqrtps,
    Rsqrtss,
    Rcpps,
    Rcpss,
    Andps,
    Andpd,
    Andnps,
    Andnpd,
    Orps,
    Orpd,
    Xorps,
    Xorpd,
    Addps,
    Addss,
    Addpd,
    Addsd,
    Mulps,
    Mulss,
    Mulpd,
    Mulsd,
    Cvtps2pd,
    Cvtpd2ps,
    Cvtss2sd,
    Cvtsd2ss,
    Cvtdq2ps,
    Cvtps2dq,
    Cvttps2dq,
    Subps,
    Subss,
    Subpd,
    Subsd,
    Minps,
    Minss,
    Minpd,
    Minsd,
    Divps,
    Divss,
    Divpd,
    Divsd,
    Maxps,
    Maxss,
    Maxpd,
    Maxsd,
    Punpcklbw,
    Punpcklwd,
    Punpckldq,
    Packsswb,
    Pcmpgtb,
    Pcmpgtw,
    Pcmpgtd,
    Packuswb,
    Punpckhbw,
    Punpckhwd,
    Punpckhdq,
    Packssdw,
    Punpcklqdq,
    Punpckhqdq,
    Movd,
    Movq,
    Movdqa,
    Movdqu,
    Pshufw,
    Pshufd,
    Pshufhw,
    Pshuflw,
    Pcmpeqb,
    Pcmpeqw,
    Pcmpeqd,
    Haddpd,
    Haddps,
    Hsubpd,
    Hsubps,
    Cmpps,
    Cmpss,
    Cmppd,
    Cmpsd,
    Pinsrw,
    Pextrw,
    Shufps,
    Shufpd,
    Addsubpd,
    Addsubps,
    Psrlw,
    Psrld,
    Psrlq,
    Psraw,
    Psrad,
    Psllw,
    Pslld,
    Psllq,
    Paddq,
    Pmullw,
    Movq2dq,
    Movdq2q,
    Pmovmskb,
    Psubusb,
    Psubusw,
    Pminub,
    Pand,
    Paddusb,
    Paddusw,
    Pmaxub,
    Pandn,
    Pavgb,
    Pavgw,
    Pmulhuw,
    Pmulhw,
    Cvttpd2dq,
    Cvtdq2pd,
    Cvtpd2dq,
    Movntq,
    Movntdq,
    Psubsb,
    Psubsw,
    Pminsw,
    Por,
    Paddsb,
    Paddsw,
    Pmaxsw,
    Pxor,
    Lddqu,
    Pmuludq,
    Pmaddwd,
    Psadbw,
    Maskmovq,
    Maskmovdqu,
    Psubb,
    Psubw,
    Psubd,
    Psubq,
    Paddb,
    Paddw,
    Paddd,

    // Two-byte map: AVX forms
    Vmovups,
    Vmovupd,
    Vmovss,
    Vmovsd,
    Vmovlps,
    Vmovlpd,
    Vmovhlps,
    Vmovsldup,
    Vmovddup,
    Vunpcklps,
    Vunpcklpd,
    Vunpckhps,
    Vunpckhpd,
    Vmovhps,
    Vmovhpd,
    Vmovlhps,
    Vmovshdup,
    Vmovaps,
    Vmovapd,
    Vcvtsi2ss,
    Vcvtsi2sd,
    Vmovntps,
    Vmovntpd,
    Vcvttss2si,
    Vcvttsd2si,
    Vcvtss2si,
    Vcvtsd2si,
    Vucomiss,
    Vucomisd,
    Vcomiss,
    Vcomisd,
    Vmovmskps,
    Vmovmskpd,
    Vsqrtps,
    Vsqrtss,
    Vsqrtpd,
    Vsqrtsd,
    Vrsqrtps,
    Vrsqrtss,
    Vrcpps,
    Vrcpss,
    Vandps,
    Vandpd,
    Vandnps,
    Vandnpd,
    Vorps,
    Vorpd,
    Vxorps,
    Vxorpd,
    Vaddps,
    Vaddss,
    Vaddpd,
    Vaddsd,
    Vmulps,
    Vmulss,
    Vmulpd,
    Vmulsd,
    Vcvtps2pd,
    Vcvtpd2ps,
    Vcvtss2sd,
    Vcvtsd2ss,
    Vcvtdq2ps,
    Vcvtps2dq,
    Vcvttps2dq,
    Vsubps,
    Vsubss,
    Vsubpd,
    Vsubsd,
    Vminps,
    Vminss,
    Vminpd,
    Vminsd,
    Vdivps,
    Vdivss,
    Vdivpd,
    Vdivsd,
    Vmaxps,
    Vmaxss,
    Vmaxpd,
    Vmaxsd,
    Vpunpcklbw,
    Vpunpcklwd,
    Vpunpckldq,
    Vpacksswb,
    Vpcmpgtb,
    Vpcmpgtw,
    Vpcmpgtd,
    Vpackuswb,
    Vpunpckhbw,
    Vpunpckhwd,
    Vpunpckhdq,
    Vpackssdw,
    Vpunpcklqdq,
    Vpunpckhqdq,
    Vmovd,
    Vmovq,
    Vmovdqa,
    Vmovdqu,
    Vpshufd,
    Vpshufhw,
    Vpshuflw,
    Vpcmpeqb,
    Vpcmpeqw,
    Vpcmpeqd,
    Vhaddpd,
    Vhaddps,
    Vhsubpd,
    Vhsubps,
    Vcmpps,
    Vcmpss,
    Vcmppd,
    Vcmpsd,
    Vpinsrw,
    Vpextrw,
    Vshufps,
    Vshufpd,
    Vaddsubpd,
    Vaddsubps,
    Vpsrlw,
    Vpsrld,
    Vpsrlq,
    Vpsraw,
    Vpsrad,
    Vpsllw,
    Vpslld,
    Vpsllq,
    Vpaddq,
    Vpmullw,
    Vpmovmskb,
    Vpsubusb,
    Vpsubusw,
    Vpminub,
    Vpand,
    Vpaddusb,
    Vpaddusw,
    Vpmaxub,
    Vpandn,
    Vpavgb,
    Vpavgw,
    Vpmulhuw,
    Vpmulhw,
    Vcvttpd2dq,
    Vcvtdq2pd,
    Vcvtpd2dq,
    Vmovntdq,
    Vpsubsb,
    Vpsubsw,
    Vpminsw,
    Vpor,
    Vpaddsb,
    Vpaddsw,
    Vpmaxsw,
    Vpxor,
    Vlddqu,
    Vpmuludq,
    Vpmaddwd,
    Vpsadbw,
    Vmaskmovdqu,
    Vpsubb,
    Vpsubw,
    Vpsubd,
    Vpsubq,
    Vpaddb,
    Vpaddw,
    Vpaddd,
    Vzeroupper,
    Vzeroall,
    Kmovw,
    Kmovb,
    Kmovq,
    Kmovd,

    // 0F 38 map, legacy forms
    Pshufb,
    Phaddw,
    Phaddd,
    Phaddsw,
    Pmaddubsw,
    Phsubw,
    Phsubd,
    Phsubsw,
    Psignb,
    Psignw,
    Psignd,
    Pmulhrsw,
    Pblendvb,
    Blendvps,
    Blendvpd,
    Ptest,
    Pabsb,
    Pabsw,
    Pabsd,
    Pmovsxbw,
    Pmovsxbd,
    Pmovsxbq,
    Pmovsxwd,
    Pmovsxwq,
    Pmovsxdq,
    Pmuldq,
    Pcmpeqq,
    Movntdqa,
    Packusdw,
    Pmovzxbw,
    Pmovzxbd,
    Pmovzxbq,
    Pmovzxwd,
    Pmovzxwq,
    Pmovzxdq,
    Pcmpgtq,
    Pminsb,
    Pminsd,
    Pminuw,
    Pminud,
    Pmaxsb,
    Pmaxsd,
    Pmaxuw,
    Pmaxud,
    Pmulld,
    Phminposuw,
    Aesimc,
    Aesenc,
    Aesenclast,
    Aesdec,
    Aesdeclast,
    Sha1nexte,
    Sha1msg1,
    Sha1msg2,
    Sha256rnds2,
    Sha256msg1,
    Sha256msg2,

    // 0F 38 map, VEX/EVEX forms and BMI
    Vpshufb,
    Vphaddw,
    Vphaddd,
    Vphaddsw,
    Vpmaddubsw,
    Vphsubw,
    Vphsubd,
    Vphsubsw,
    Vpsignb,
    Vpsignw,
    Vpsignd,
    Vpmulhrsw,
    Vptest,
    Vpabsb,
    Vpabsw,
    Vpabsd,
    Vpmovsxbw,
    Vpmovsxbd,
    Vpmovsxbq,
    Vpmovsxwd,
    Vpmovsxwq,
    Vpmovsxdq,
    Vpmuldq,
    Vpcmpeqq,
    Vmovntdqa,
    Vpackusdw,
    Vpmovzxbw,
    Vpmovzxbd,
    Vpmovzxbq,
    Vpmovzxwd,
    Vpmovzxwq,
    Vpmovzxdq,
    Vpcmpgtq,
    Vpminsb,
    Vpminsd,
    Vpminuw,
    Vpminud,
    Vpmaxsb,
    Vpmaxsd,
    Vpmaxuw,
    Vpmaxud,
    Vpmulld,
    Vphminposuw,
    Vaesimc,
    Vaesenc,
    Vaesenclast,
    Vaesdec,
    Vaesdeclast,
    Vbroadcastss,
    Vbroadcastsd,
    Vpbroadcastb,
    Vpbroadcastw,
    Vpbroadcastd,
    Vpbroadcastq,
    Vfmadd132ps,
    Vfmadd132pd,
    Vfmadd213ps,
    Vfmadd213pd,
    Vfmadd231ps,
    Vfmadd231pd,
    Andn,
    Bzhi,
    Pext,
    Pdep,
    Blsr,
    Blsmsk,
    Blsi,
    Bextr,
    Shlx,
    Sarx,
    Shrx,
    Mulx,
    Vgatherdps,
    Vgatherdpd,
    Vgatherqps,
    Vgatherqpd,
    Vpgatherdd,
    Vpgatherdq,
    Vpgatherqd,
    Vpgatherqq,
    Vpopcntd,
    Vpopcntq,
    Vgatherpf0dps,
    Vgatherpf1dps,
    Vscatterpf0dps,
    Vscatterpf1dps,

    // 0F 3A map
    Roundps,
    Roundpd,
    Roundss,
    Roundsd,
    Blendps,
    Blendpd,
    Pblendw,
    Palignr,
    Pextrb,
    Pextrd,
    Extractps,
    Pinsrb,
    Insertps,
    Pinsrd,
    Dpps,
    Dppd,
    Mpsadbw,
    Pclmulqdq,
    Pcmpestrm,
    Pcmpestri,
    Pcmpistrm,
    Pcmpistri,
    Sha1rnds4,
    Aeskeygenassist,
    Vroundps,
    Vroundpd,
    Vroundss,
    Vroundsd,
    Vblendps,
    Vblendpd,
    Vpblendw,
    Vpalignr,
    Vpextrb,
    Vpextrd,
    Vextractps,
    Vpinsrb,
    Vinsertps,
    Vpinsrd,
    Vdpps,
    Vdppd,
    Vmpsadbw,
    Vpclmulqdq,
    Vpcmpestrm,
    Vpcmpestri,
    Vpcmpistrm,
    Vpcmpistri,
    Vaeskeygenassist,
    Vperm2f128,
    Vinsertf128,
    Vextractf128,
    Vblendvps,
    Vblendvpd,
    Vpblendvb,

    // XOP maps
    Blcfill,
    Blsfill,
    Blcs,
    Tzmsk,
    Blcic,
    Blsic,
    T1mskc,
    Blcmsk,
    Blci,
    Vpcmov,

    // x87
    Fadd,
    Fmul,
    Fcom,
    Fcomp,
    Fsub,
    Fsubr,
    Fdiv,
    Fdivr,
    Fld,
    Fst,
    Fstp,
    Fldenv,
    Fldcw,
    Fnstenv,
    Fnstcw,
    Fxch,
    Fnop,
    Fchs,
    Fabs,
    Ftst,
    Fxam,
    Fld1,
    Fldl2t,
    Fldl2e,
    Fldpi,
    Fldlg2,
    Fldln2,
    Fldz,
    F2xm1,
    Fyl2x,
    Fptan,
    Fpatan,
    Fxtract,
    Fprem1,
    Fdecstp,
    Fincstp,
    Fprem,
    Fyl2xp1,
    Fsqrt,
    Fsincos,
    Frndint,
    Fscale,
    Fsin,
    Fcos,
    Fiadd,
    Fimul,
    Ficom,
    Ficomp,
    Fisub,
    Fisubr,
    Fidiv,
    Fidivr,
    Fild,
    Fist,
    Fistp,
    Fisttp,
    Fbld,
    Fbstp,
    Fucom,
    Fucomp,
    Fucompp,
    Fnclex,
    Fninit,
    Fcmovb,
    Fcmove,
    Fcmovbe,
    Fcmovu,
    Fcmovnb,
    Fcmovne,
    Fcmovnbe,
    Fcmovnu,
    Fucomi,
    Fcomi,
    Fucomip,
    Fcomip,
    Faddp,
    Fmulp,
    Fcompp,
    Fsubp,
    Fsubrp,
    Fdivp,
    Fdivrp,
    Ffree,
    Fnstsw,
    Frstor,
    Fnsave,
    Ffreep,

    // Far-pointer loads through FS/GS/SS (appended)
    Lss,
    Lfs,
    Lgs,
    // 3DNow! compare-greater-equal (appended)
    Pfcmpge,
}

impl Opcode {
    /// Number of identifiers in the enumeration. The opcode index is exactly
    /// this long; the two move in lockstep.
    pub const COUNT: usize = Opcode::Pfcmpge as usize + 1;
}

#[test]
fn test_enumeration_is_dense() {
    use num_enum::TryFromPrimitive;

    for raw in 0..Opcode::COUNT as u16 {
        assert!(Opcode::try_from_primitive(raw).is_ok(), "gap at {raw}");
    }
    assert!(Opcode::try_from_primitive(Opcode::COUNT as u16).is_err());
    assert_eq!(Opcode::try_from_primitive(0), Ok(Opcode::Add));
}
