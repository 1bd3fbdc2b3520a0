//! # denary
//!
//! A fixed-point, arbitrary-precision decimal number type for exact
//! arithmetic where binary floating point is unsuitable — financial and
//! accounting calculations, ledgers, quantities.
//!
//! A [`Decimal`] is an arbitrary-precision signed integer mantissa paired
//! with a non-negative scale: the value is `mantissa × 10^(-scale)`, so
//! `1234.56` is stored as mantissa `123456` at scale `2`. Nothing is ever
//! approximated in binary:
//!
//! - **Exact representation**: every decimal literal is stored digit for digit
//! - **Value semantics**: arithmetic returns new values, operands are never
//!   mutated
//! - **One rounding policy**: scale reduction rounds half-up-away-from-zero,
//!   everywhere
//! - **Fixed-point text**: [`Display`](std::fmt::Display) renders `"-123.45"`,
//!   `"0.5"`, `"0"` — never exponent notation
//!
//! ## Examples
//!
//! ```rust
//! use denary::Decimal;
//!
//! // Parse from a string (exponent suffixes fold away)
//! let price: Decimal = "123456.789".parse()?;
//! assert_eq!("23e5".parse::<Decimal>()?, Decimal::from(2_300_000));
//!
//! // Arithmetic takes anything the parser recognizes on the right
//! assert_eq!(price.multiplied_by("1.49")?.to_string(), "183950.61561");
//! assert_eq!(price.plus(1)?.to_string(), "123457.789");
//!
//! // Division carries at least 20 fractional digits of working precision
//! assert_eq!(
//!     price.divided_by(1)?.to_string(),
//!     "123456.78900000000000000000",
//! );
//!
//! // Equality is over values, not representations
//! assert_eq!("123456.789000".parse::<Decimal>()?, price);
//!
//! // Fixed-width rendering rounds half-up
//! assert_eq!(price.to_fixed(2), "123456.79");
//! # Ok::<(), denary::DecimalError>(())
//! ```
//!
//! ## Floats
//!
//! Construction from `f64`/`f32` goes through the float's shortest
//! round-trip decimal text. Floats carry binary representational error for
//! values that are not exact binary fractions; that error is faithfully
//! converted, not repaired. Parse from a string whenever the exact digits
//! matter.

pub(crate) mod arith;
pub(crate) mod decimal;
pub(crate) mod error;
pub(crate) mod parse;
pub(crate) mod rescale;

// Re-export main types
pub use arith::MIN_DIVISION_SCALE;
pub use decimal::{Decimal, RawParts};
pub use error::{DecimalError, DecimalResult};
pub use parse::Operand;
