//! Laurent polynomials in z with complex coefficients.
//!
//! A [`Laurent`] is a finite sum `Σ cₚ·z^p` over integer powers p, which is
//! exactly what the z-transform of a finite sequence produces. It stands in
//! for a general symbolic algebra engine: the transforms only ever form
//! constants, powers of z, sums and products of those.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;

use super::{format_complex, unit_phasor, Scalar, ZERO_TOLERANCE};
use crate::error::{Result, SeqError};

/// A polynomial in z with positive and negative integer powers.
///
/// Terms with a zero coefficient are never stored, so structural equality
/// is mathematical equality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Laurent {
    /// Coefficient by power of z
    terms: BTreeMap<i64, Complex64>,
}

impl Laurent {
    /// A constant polynomial.
    pub fn constant(value: Complex64) -> Self {
        Self::monomial(value, 0)
    }

    /// A single term `coefficient · z^power`.
    pub fn monomial(coefficient: Complex64, power: i64) -> Self {
        let mut poly = Self::default();
        poly.accumulate(power, coefficient);
        poly
    }

    /// The variable z itself.
    pub fn z() -> Self {
        Self::monomial(Complex64::new(1.0, 0.0), 1)
    }

    /// Coefficient of `z^power` (zero if absent).
    pub fn coefficient(&self, power: i64) -> Complex64 {
        self.terms
            .get(&power)
            .copied()
            .unwrap_or_else(|| Complex64::new(0.0, 0.0))
    }

    /// Iterate over (power, coefficient) pairs in ascending power.
    pub fn terms(&self) -> impl Iterator<Item = (i64, Complex64)> + '_ {
        self.terms.iter().map(|(&p, &c)| (p, c))
    }

    /// Check whether the polynomial has no z-dependent terms.
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(|&p| p == 0)
    }

    /// Return the single (power, coefficient) term, if there is exactly one.
    pub fn as_monomial(&self) -> Option<(i64, Complex64)> {
        if self.terms.len() == 1 {
            self.terms().next()
        } else {
            None
        }
    }

    /// Evaluate at a numeric point z.
    ///
    /// Powers beyond the i32 range fall back to a real-exponent power.
    pub fn eval_at(&self, z: Complex64) -> Complex64 {
        self.terms()
            .map(|(p, c)| {
                let zp = match i32::try_from(p) {
                    Ok(p) => z.powi(p),
                    Err(_) => z.powf(p as f64),
                };
                c * zp
            })
            .sum()
    }

    fn accumulate(&mut self, power: i64, coefficient: Complex64) {
        let sum = self.coefficient(power) + coefficient;
        if sum == Complex64::new(0.0, 0.0) {
            self.terms.remove(&power);
        } else {
            self.terms.insert(power, sum);
        }
    }

    fn render(&self, typeset: bool) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (i, (power, coeff)) in self.terms.iter().rev().enumerate() {
            let term = render_term(*power, *coeff, typeset);
            match (i, term.strip_prefix('-')) {
                (0, _) => out.push_str(&term),
                (_, Some(rest)) => {
                    out.push_str(" - ");
                    out.push_str(rest);
                }
                (_, None) => {
                    out.push_str(" + ");
                    out.push_str(&term);
                }
            }
        }
        out
    }
}

fn render_term(power: i64, coeff: Complex64, typeset: bool) -> String {
    let mut coeff_str = format_complex(coeff);
    if typeset {
        coeff_str = coeff_str.replace('j', r"\mathrm{j}");
    }
    if power == 0 {
        return coeff_str;
    }

    let var = match (power, typeset) {
        (1, _) => "z".to_string(),
        (p, false) => format!("z^{}", p),
        (p, true) => format!("z^{{{}}}", p),
    };

    let sep = if typeset { " " } else { "*" };
    if coeff == Complex64::new(1.0, 0.0) {
        var
    } else if coeff == Complex64::new(-1.0, 0.0) {
        format!("-{}", var)
    } else if coeff.re != 0.0 && coeff.im != 0.0 {
        format!("({}){}{}", coeff_str, sep, var)
    } else {
        format!("{}{}{}", coeff_str, sep, var)
    }
}

impl From<f64> for Laurent {
    fn from(value: f64) -> Self {
        Self::constant(Complex64::new(value, 0.0))
    }
}

impl From<Complex64> for Laurent {
    fn from(value: Complex64) -> Self {
        Self::constant(value)
    }
}

impl Add for Laurent {
    type Output = Laurent;

    fn add(mut self, rhs: Laurent) -> Laurent {
        for (p, c) in rhs.terms {
            self.accumulate(p, c);
        }
        self
    }
}

impl Neg for Laurent {
    type Output = Laurent;

    fn neg(mut self) -> Laurent {
        for c in self.terms.values_mut() {
            *c = -*c;
        }
        self
    }
}

impl Sub for Laurent {
    type Output = Laurent;

    fn sub(self, rhs: Laurent) -> Laurent {
        self + (-rhs)
    }
}

impl Mul for Laurent {
    type Output = Laurent;

    fn mul(self, rhs: Laurent) -> Laurent {
        let mut product = Laurent::default();
        for (&p1, &c1) in &self.terms {
            for (&p2, &c2) in &rhs.terms {
                product.accumulate(p1 + p2, c1 * c2);
            }
        }
        product
    }
}

impl fmt::Display for Laurent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

impl Scalar for Laurent {
    fn zero() -> Self {
        Self::default()
    }

    fn from_real(value: f64) -> Self {
        Self::from(value)
    }

    fn twiddle(numerator: i64, denominator: usize) -> Self {
        Self::constant(unit_phasor(numerator, denominator))
    }

    fn z_power(exponent: i64) -> Result<Self> {
        Ok(Self::monomial(Complex64::new(1.0, 0.0), exponent))
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.terms.is_empty() {
            return Err(SeqError::DivisionByZero);
        }
        let (power, coeff) = rhs
            .as_monomial()
            .ok_or_else(|| SeqError::not_invertible(rhs.plain()))?;

        let mut quotient = Laurent::default();
        for (p, c) in self.terms() {
            quotient.accumulate(p - power, c / coeff);
        }
        Ok(quotient)
    }

    fn to_complex(&self) -> Result<Complex64> {
        if self.is_constant() {
            Ok(self.coefficient(0))
        } else {
            Err(SeqError::not_numeric(self.plain()))
        }
    }

    fn plain(&self) -> String {
        self.render(false)
    }

    fn latex(&self) -> String {
        self.render(true)
    }

    fn is_zero(&self) -> bool {
        self.terms.values().all(|c| c.norm() <= ZERO_TOLERANCE)
    }
}
