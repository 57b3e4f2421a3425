//! Plain and typeset renderings of sequences.

use std::fmt;

use super::Sequence;
use crate::scalar::Scalar;

impl<T: Scalar> Sequence<T> {
    /// Render as LaTeX, with the index-0 element underlined.
    pub fn latex(&self) -> String {
        self.render(
            |v| v.latex(),
            |s| format!(r"\underline{{{}}}", s),
            r"\ldots",
            (r"\left\{", r"\right\}"),
        )
    }

    /// Render as a weighted sum of delayed unit impulses.
    ///
    /// `{1, 2, 3}` becomes `δ[n] + 2·δ[n - 1] + 3·δ[n - 2]`.
    pub fn impulses(&self) -> String {
        let var = self.domain.variable().unwrap_or('n');

        let terms: Vec<String> = self
            .iter()
            .filter(|(_, v)| !v.is_zero())
            .map(|(n, v)| {
                let arg = match n {
                    0 => var.to_string(),
                    n if n > 0 => format!("{} - {}", var, n),
                    n => format!("{} + {}", var, -n),
                };
                let weight = v.plain();
                match weight.as_str() {
                    "1" => format!("δ[{}]", arg),
                    "-1" => format!("-δ[{}]", arg),
                    w if w[1..].contains(&[' ', '+', '-'][..]) => format!("({})·δ[{}]", w, arg),
                    w => format!("{}·δ[{}]", w, arg),
                }
            })
            .collect();

        if terms.is_empty() {
            return "0".to_string();
        }

        let mut out = terms[0].clone();
        for term in &terms[1..] {
            match term.strip_prefix('-') {
                Some(rest) => {
                    out.push_str(" - ");
                    out.push_str(rest);
                }
                None => {
                    out.push_str(" + ");
                    out.push_str(term);
                }
            }
        }
        out
    }

    fn render(
        &self,
        element: impl Fn(&T) -> String,
        mark_origin: impl Fn(String) -> String,
        ellipsis: &str,
        braces: (&str, &str),
    ) -> String {
        let extended = self.zeroextend();

        let mut items = Vec::with_capacity(extended.len() + 2);
        if self.start_truncated {
            items.push(ellipsis.to_string());
        }
        for (n, v) in extended.iter() {
            let s = element(v);
            items.push(if n == 0 { mark_origin(s) } else { s });
        }
        if self.end_truncated {
            items.push(ellipsis.to_string());
        }

        format!("{}{}{}", braces.0, items.join(", "), braces.1)
    }
}

/// Plain rendering with the index-0 element prefixed by `_`.
impl<T: Scalar> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.render(|v| v.plain(), |s| format!("_{}", s), "...", ("{", "}"));
        write!(f, "{}", s)
    }
}
