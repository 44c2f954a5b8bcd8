// ─────────────────────────────────────────────────────────────────────
// Numkern — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference constants, stored in f64 and narrowed per tier at use.
#![allow(clippy::excessive_precision)]

/// ln(2)
pub const LN_2: f64 = 6.931_471_805_599_453_094_17e-1;

/// ln(2) - LN_2, the part of ln(2) below f64 precision.
pub const LN_2_LO: f64 = 2.319_046_813_846_299_558_42e-17;

/// log2(e)
pub const LOG2_E: f64 = 1.442_695_040_888_963_407_36;

/// ln(10)
pub const LN_10: f64 = 2.302_585_092_994_045_684_02;

/// log2(10)
pub const LOG2_10: f64 = 3.321_928_094_887_362_347_87;

/// log10(2)
pub const LOG10_2: f64 = 3.010_299_956_639_811_952_14e-1;

/// log10(2) - LOG10_2
pub const LOG10_2_LO: f64 = -2.803_728_127_785_170_393_73e-18;

/// log10(e)
pub const LOG10_E: f64 = 4.342_944_819_032_518_276_51e-1;

/// sqrt(2)
pub const SQRT_2: f64 = 1.414_213_562_373_095_048_80;

/// sqrt(1/2)
pub const FRAC_1_SQRT_2: f64 = 7.071_067_811_865_475_244_01e-1;

/// 2/pi
pub const FRAC_2_PI: f64 = 6.366_197_723_675_813_430_76e-1;

/// pi/2 as three parts whose sum carries ~120 bits.
/// The first two parts hold 33 significant bits each.
pub const FRAC_PI_2_PARTS: [f64; 3] = [
    1.570_796_326_734_125_614_17,
    6.077_100_506_303_965_976_60e-11,
    2.022_266_248_711_166_455_80e-21,
];

/// pi split into a rounded high part and its residual.
pub const PI_HI: f64 = 3.141_592_653_589_793_115_98;
pub const PI_LO: f64 = 1.224_646_799_147_353_177_23e-16;

/// pi/2 split into a rounded high part and its residual.
pub const FRAC_PI_2_HI: f64 = 1.570_796_326_794_896_557_99;
pub const FRAC_PI_2_LO: f64 = 6.123_233_995_736_765_886_13e-17;

/// pi/4
pub const FRAC_PI_4: f64 = 7.853_981_633_974_482_789_99e-1;

/// 3*pi/4
pub const FRAC_3PI_4: f64 = 2.356_194_490_192_344_836_99;

/// 2/sqrt(pi)
pub const FRAC_2_SQRT_PI: f64 = 1.128_379_167_095_512_573_90;

/// 1/sqrt(pi)
pub const FRAC_1_SQRT_PI: f64 = 5.641_895_835_477_562_869_48e-1;

/// Above this |x| the hyperbolic functions switch to the e^|x|/2 form.
pub const HYPERBOLIC_LARGE: f64 = 22.0;

/// Above this |x| the inverse hyperbolic functions use log(2|x|).
pub const INVERSE_HYPERBOLIC_LARGE: f64 = 268_435_456.0;

/// Switch point between the erf series and the erfc continued fraction.
pub const ERF_SPLIT: f64 = 1.5;
