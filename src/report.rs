//! Text output for the CLI frontend.
//!
//! Formats sequences and evaluated samples for printing to stdout.

use crate::scalar::{format_real, Scalar};
use crate::sequence::{Samples, Sequence};

/// How sequences are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `{1, _2, 3}`
    #[default]
    Plain,
    /// `\left\{1, \underline{2}, 3\right\}`
    Latex,
    /// `δ[n + 1] + 2·δ[n] + 3·δ[n - 1]`
    Impulses,
}

/// Render a sequence, prefixed with its domain.
pub fn render_sequence<T: Scalar>(seq: &Sequence<T>, format: OutputFormat) -> String {
    let body = match format {
        OutputFormat::Plain => seq.to_string(),
        OutputFormat::Latex => seq.latex(),
        OutputFormat::Impulses => seq.impulses(),
    };
    format!("{}: {}", seq.domain(), body)
}

/// Render evaluated samples one per line, paired with their indices.
pub fn render_samples(indices: &[i64], samples: &Samples) -> String {
    let values: Vec<String> = match samples {
        Samples::Real(v) => v.iter().map(|&x| format_real(x)).collect(),
        Samples::Complex(v) => v.iter().map(|z| z.plain()).collect(),
    };

    indices
        .iter()
        .zip(values)
        .map(|(n, v)| format!("{:>6}  {}", n, v))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use num_complex::Complex64;

    #[test]
    fn test_render_sequence() {
        let s: Sequence<Complex64> = Sequence::from_reals(&[1.0, 2.0]).with_domain(Domain::Time);
        assert_eq!(render_sequence(&s, OutputFormat::Plain), "discrete-time: {_1, 2}");
        assert_eq!(
            render_sequence(&s, OutputFormat::Latex),
            r"discrete-time: \left\{\underline{1}, 2\right\}"
        );
        assert_eq!(
            render_sequence(&s, OutputFormat::Impulses),
            "discrete-time: δ[n] + 2·δ[n - 1]"
        );
    }

    #[test]
    fn test_render_samples() {
        let out = render_samples(&[-1, 0], &Samples::Real(vec![0.5, 2.0]));
        assert_eq!(out, "    -1  0.5\n     0  2");

        let out = render_samples(&[0], &Samples::Complex(vec![Complex64::new(1.0, -1.0)]));
        assert_eq!(out, "     0  1 - j");
    }
}
