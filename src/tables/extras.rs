//! CONTINUED entries: operand-overflow chains for the handful of
//! instructions whose operand count exceeds the fixed slots of one entry.
//!
//! Primary entries link here with [`crate::schema::flags::Attrs::HAS_EXTRAS`];
//! each chain is acyclic and ends at an END link. Several string-operation
//! templates share the counter tail.

use super::defs::*;
use crate::template::Entry;

/// Shared REP counter tail: rCX read and written.
pub(crate) const XT_REP_CX: u16 = 0;
/// MOVS tail: rSI is also written.
pub(crate) const XT_MOVS: u16 = 1;
/// REP MOVS tail: rSI plus the counter.
pub(crate) const XT_REP_MOVS: u16 = 2;
/// CMPS tail: rDI is also read.
pub(crate) const XT_CMPS: u16 = 3;
/// REPE/REPNE CMPS tail.
pub(crate) const XT_REP_CMPS: u16 = 4;
/// PUSHA register list continuation (two entries).
pub(crate) const XT_PUSHA: u16 = 5;
/// POPA register list continuation (three entries).
pub(crate) const XT_POPA: u16 = 7;
/// CPUID result continuation.
pub(crate) const XT_CPUID: u16 = 10;
/// CMPXCHG8B/16B continuation.
pub(crate) const XT_CMPXCHG8B: u16 = 11;
/// ENTER frame-pointer continuation.
pub(crate) const XT_ENTER: u16 = 12;
/// IRET third stack pop.
pub(crate) const XT_IRET: u16 = 13;
/// PCMPESTRI/PCMPESTRM implicit length registers.
pub(crate) const XT_PCMPESTR: u16 = 14;

pub(crate) static EXTRAS: [Entry; 15] = [
    /*  0 */ cont(d1(XCX), s1(XCX), END),
    /*  1 */ cont(d1(XSI), s0(), END),
    /*  2 */ cont(d2(XSI, XCX), s1(XCX), END),
    /*  3 */ cont(d0(), s1(XDI), END),
    /*  4 */ cont(d1(XCX), s2(XDI, XCX), END),
    /*  5 */ cont(d0(), s3(XDX, XBX, XBP), extra(6)),
    /*  6 */ cont(d0(), s2(XSI, XDI), END),
    /*  7 */ cont(d2(XSI, XBP), s0(), extra(8)),
    /*  8 */ cont(d2(XBX, XDX), s0(), extra(9)),
    /*  9 */ cont(d2(XCX, XAX), s0(), END),
    /* 10 */ cont(d2(ECX, EDX), s0(), END),
    /* 11 */ cont(d1(XDX), s2(XCX, XBX), END),
    /* 12 */ cont(d1(XBP), s1(XBP), END),
    /* 13 */ cont(d0(), s1(STK_POP), END),
    /* 14 */ cont(d0(), s2(EAX, EDX), END),
];
