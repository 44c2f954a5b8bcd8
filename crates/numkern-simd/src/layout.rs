// ─────────────────────────────────────────────────────────────────────
// Numkern — Register Bit Layouts
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! IEEE 754 field masks and conversion magics shared by the intrinsic
//! backends.
//!
//! `POW2_MAGIC = 2^p + bias`: adding it to an integral `n` leaves
//! `n + bias` in the low mantissa bits, and shifting the raw lane left by
//! `p` moves it into the exponent field. `FIELD_MAGIC` is `2^p` as raw
//! bits; OR-ing a small integer into it and subtracting `POW2_MAGIC`
//! converts an exponent field straight to `field - bias`.
#![allow(dead_code)]

pub mod f32bits {
    pub const SIGN: u32 = 0x8000_0000;
    pub const EXPONENT: u32 = 0x7f80_0000;
    pub const MANTISSA: u32 = 0x007f_ffff;
    pub const ONE: u32 = 0x3f80_0000;
    pub const HALF_LOW: u32 = 0x0000_0fff;
    pub const SHIFT: u32 = 23;
    pub const POW2_MAGIC: f32 = 8_388_735.0;
    pub const FIELD_MAGIC: u32 = 0x4b00_0000;
}

pub mod f64bits {
    pub const SIGN: u64 = 0x8000_0000_0000_0000;
    pub const EXPONENT: u64 = 0x7ff0_0000_0000_0000;
    pub const MANTISSA: u64 = 0x000f_ffff_ffff_ffff;
    pub const ONE: u64 = 0x3ff0_0000_0000_0000;
    pub const HALF_LOW: u64 = 0x0000_0000_07ff_ffff;
    pub const SHIFT: u32 = 52;
    pub const POW2_MAGIC: f64 = 4_503_599_627_371_519.0;
    pub const FIELD_MAGIC: u64 = 0x4330_0000_0000_0000;
}
