// src/numerics/types/traits.rs
// Element traits shared by the numerics types.

use core::fmt::{Debug, Display};

/// Scalar is the element trait every matrix entry satisfies.
///
/// Any arithmetic-like type with the four basic operators, exact equality and
/// a zero/one pair qualifies. Integer types are included: their division
/// semantics (truncation, panic on zero) carry straight through to the
/// matrix operations that divide.
pub trait Scalar:
Copy + PartialEq + Debug + Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

/// FloatingPoint extends Scalar with the square root needed by `norm()`.
pub trait FloatingPoint: Scalar {
    fn sqrt(self) -> Self;
}

macro_rules! impl_scalar {
    ($zero:expr, $one:expr => $($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn zero() -> Self { $zero }
                #[inline]
                fn one() -> Self { $one }
            }
        )*
    };
}

impl_scalar!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(0.0, 1.0 => f32, f64);

impl FloatingPoint for f32 {
    #[inline]
    fn sqrt(self) -> Self { f32::sqrt(self) }
}

impl FloatingPoint for f64 {
    #[inline]
    fn sqrt(self) -> Self { f64::sqrt(self) }
}
