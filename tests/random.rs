//! Property harness: random byte windows, biased toward prefix bytes, must
//! either decode or fail with one of the defined error kinds. The resolver
//! must never panic and never report a length beyond the window.

use x86_decode::{DecodeError, Mode, decode};

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn byte(&mut self) -> u8 {
        (self.next() >> 32) as u8
    }
}

const PREFIX_POOL: &[u8] = &[
    0x26, 0x2e, 0x36, 0x3e, 0x64, 0x65, 0x66, 0x66, 0x67, 0xf0, 0xf2, 0xf3, 0xf3, 0x0f, 0x0f,
    0x40, 0x44, 0x48, 0x4f, 0xc4, 0xc5, 0x62, 0x8f,
];

#[test]
fn test_random_windows_never_crash() {
    let mut rng = XorShift(0x9e3779b97f4a7c15);
    for round in 0..40_000u32 {
        let len = 1 + (rng.next() as usize % 15);
        let mut buf = [0u8; 15];
        for b in buf.iter_mut().take(len) {
            *b = if rng.next() & 1 == 0 {
                PREFIX_POOL[rng.next() as usize % PREFIX_POOL.len()]
            } else {
                rng.byte()
            };
        }
        let mode = if round & 1 == 0 { Mode::Mode32 } else { Mode::Mode64 };
        match decode(mode, &buf[..len], 0, len) {
            Ok(d) => {
                assert!(d.length as usize <= len, "length {} beyond window {len}", d.length);
                assert!(d.length > 0);
            }
            Err(
                DecodeError::InvalidByte
                | DecodeError::InvalidInMode
                | DecodeError::InvalidPrefix
                | DecodeError::InvalidLength
                | DecodeError::Truncated,
            ) => {}
        }
    }
}

#[test]
fn test_dense_two_byte_sweep() {
    // Every 0F xx value with a register-form ModR/M and padding: decode or
    // fail cleanly, in both modes.
    for b in 0u16..=0xff {
        let buf = [0x0f, b as u8, 0xc1, 0x01, 0x02, 0x03, 0x04, 0x05];
        let _ = decode(Mode::Mode32, &buf, 0, buf.len());
        let _ = decode(Mode::Mode64, &buf, 0, buf.len());
    }
}
