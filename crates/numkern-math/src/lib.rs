// ─────────────────────────────────────────────────────────────────────
// Numkern — Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scalar elementary functions, flux limiters and banded solvers, generic
//! over the precision tiers of `numkern-types`.

pub mod acceptance;
pub mod atan;
pub mod bits;
pub mod dense;
pub mod erf;
pub mod exp;
pub mod hyperbolic;
pub mod limiter;
pub mod log;
pub mod pentadiag;
pub mod poly;
pub mod pow;
pub mod tridiag;
pub mod trig;

pub use acceptance::{minimal_multiplier, within, AcceptanceCheck};
pub use atan::{acos, asin, atan, atan2};
pub use bits::{frexp, ldexp};
pub use dense::{solve_dense, solve_dense_array, solve_dense_array_zero, solve_dense_zero};
pub use erf::{erf, erfc};
pub use exp::{exp, exp10, exp2, expm1};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use limiter::FluxLimiter;
pub use log::{log, log10, log1p, log2};
pub use pentadiag::{solve_pentadiagonal, solve_pentadiagonal_zero};
pub use pow::{pow, pown};
pub use tridiag::{solve_tridiagonal, solve_tridiagonal_zero};
pub use trig::{cos, sin, sincos, tan};
