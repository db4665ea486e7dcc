//! LaTeX-to-Unicode transliteration.
//!
//! A fixed pipeline of whole-string rewrite passes. Later passes rely on the
//! earlier ones having already collapsed the braces and commands they would
//! otherwise trip over, so the order in [`PASSES`] must not change.
//!
//! Brace groups are scanned to the next `}` only. Nested groups are not
//! supported.

mod tables;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use tables::{
    BLACKBOARD, GREEK, MATH_DELIMITERS, NAMED_FUNCTIONS, OPERATORS, SUBSCRIPTS, SUPERSCRIPTS,
    TEXT_COMMANDS, glyph,
};

/// `^` followed by exactly one letter or digit.
static SINGLE_SUPERSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^([A-Za-z0-9])").expect("valid superscript regex"));

/// Any command that survived the table-driven passes.
static LEFTOVER_COMMAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([A-Za-z]+)").expect("valid command regex"));

/// One whole-string rewrite stage.
#[derive(Debug, Clone, Copy)]
enum Pass {
    /// Replace each token with its symbol, in table order.
    Substitute(&'static [(&'static str, &'static str)]),
    /// `\cmd{inner}` becomes `inner`.
    UnwrapCommands(&'static [&'static str]),
    /// `\frac{a}{b}` becomes `(a/b)`.
    Fractions,
    /// `\name` becomes `name`.
    StripBackslash(&'static [&'static str]),
    /// `<opener>inner}` with each inner char mapped through a glyph table.
    BracedScript {
        opener: &'static str,
        glyphs: &'static [(char, char)],
    },
    SingleSuperscript,
    Remove(&'static [&'static str]),
    StripLeftoverCommands,
}

const PASSES: [Pass; 11] = [
    Pass::Substitute(BLACKBOARD),
    Pass::UnwrapCommands(TEXT_COMMANDS),
    Pass::Fractions,
    Pass::Substitute(GREEK),
    Pass::Substitute(OPERATORS),
    Pass::StripBackslash(NAMED_FUNCTIONS),
    Pass::BracedScript {
        opener: "^{",
        glyphs: SUPERSCRIPTS,
    },
    Pass::SingleSuperscript,
    Pass::BracedScript {
        opener: "_{",
        glyphs: SUBSCRIPTS,
    },
    Pass::Remove(MATH_DELIMITERS),
    Pass::StripLeftoverCommands,
];

/// Whether `text` could be changed by [`transliterate`] at all.
pub fn needs_transliteration(text: &str) -> bool {
    text.contains('\\') || text.contains('^') || text.contains("_{")
}

/// Rewrite LaTeX-style math notation into Unicode.
///
/// Text without a backslash, a caret or a `_{` is returned untouched without
/// allocating.
pub fn transliterate(text: &str) -> Cow<'_, str> {
    if !needs_transliteration(text) {
        return Cow::Borrowed(text);
    }
    let out = PASSES
        .iter()
        .fold(text.to_string(), |acc, pass| pass.apply(acc));
    Cow::Owned(out)
}

impl Pass {
    fn apply(self, text: String) -> String {
        match self {
            Pass::Substitute(table) => table.iter().fold(text, |acc, (token, symbol)| {
                replace_command(&acc, token, symbol)
            }),
            Pass::UnwrapCommands(commands) => commands
                .iter()
                .fold(text, |acc, command| unwrap_command(acc, command)),
            Pass::Fractions => replace_fractions(text),
            Pass::StripBackslash(names) => names.iter().fold(text, |acc, name| {
                replace_command(&acc, &format!("\\{name}"), name)
            }),
            Pass::BracedScript { opener, glyphs } => replace_braced_script(text, opener, glyphs),
            Pass::SingleSuperscript => replace_single_superscripts(text),
            Pass::Remove(tokens) => tokens
                .iter()
                .fold(text, |acc, token| acc.replace(token, "")),
            Pass::StripLeftoverCommands => LEFTOVER_COMMAND.replace_all(&text, "$1").into_owned(),
        }
    }
}

/// Replace every occurrence of `token`. A token ending in a letter only
/// matches when the next character is not a letter, so `\in` leaves `\inf`
/// alone.
fn replace_command(text: &str, token: &str, replacement: &str) -> String {
    if !text.contains(token) {
        return text.to_string();
    }
    let needs_boundary = token.ends_with(|c: char| c.is_ascii_alphabetic());
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(token) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + token.len()..];
        if needs_boundary && after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            out.push_str(token);
        } else {
            out.push_str(replacement);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Byte range of the brace group whose `{` sits right before `inner_start`,
/// as `(inner_start, closing_brace)`.
fn brace_group(text: &str, inner_start: usize) -> Option<(usize, usize)> {
    text[inner_start..]
        .find('}')
        .map(|len| (inner_start, inner_start + len))
}

fn unwrap_command(mut text: String, command: &str) -> String {
    let opener = format!("\\{command}{{");
    while let Some(start) = text.find(&opener) {
        let Some((inner_start, close)) = brace_group(&text, start + opener.len()) else {
            tracing::trace!(command, "unclosed brace command left as is");
            break;
        };
        let inner = text[inner_start..close].to_string();
        text.replace_range(start..=close, &inner);
    }
    text
}

fn replace_fractions(mut text: String) -> String {
    const OPENER: &str = "\\frac{";
    while let Some(start) = text.find(OPENER) {
        let Some((num_start, num_end)) = brace_group(&text, start + OPENER.len()) else {
            tracing::trace!("fraction without closing numerator brace");
            break;
        };
        if !text[num_end + 1..].starts_with('{') {
            tracing::trace!("fraction without denominator");
            break;
        }
        let Some((den_start, den_end)) = brace_group(&text, num_end + 2) else {
            tracing::trace!("fraction without closing denominator brace");
            break;
        };
        let fraction = format!(
            "({}/{})",
            &text[num_start..num_end],
            &text[den_start..den_end]
        );
        text.replace_range(start..=den_end, &fraction);
    }
    text
}

fn replace_braced_script(mut text: String, opener: &str, glyphs: &[(char, char)]) -> String {
    while let Some(start) = text.find(opener) {
        let Some((inner_start, close)) = brace_group(&text, start + opener.len()) else {
            break;
        };
        let mapped: String = text[inner_start..close]
            .chars()
            .map(|c| glyph(glyphs, c).unwrap_or(c))
            .collect();
        text.replace_range(start..=close, &mapped);
    }
    text
}

/// Rightmost match first so earlier byte offsets stay valid while glyph
/// widths change the string length.
fn replace_single_superscripts(mut text: String) -> String {
    let matches: Vec<(std::ops::Range<usize>, char)> = SINGLE_SUPERSCRIPT
        .captures_iter(&text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let c = caps.get(1)?.as_str().chars().next()?;
            Some((whole.range(), c))
        })
        .collect();

    for (range, c) in matches.into_iter().rev() {
        if let Some(sup) = glyph(SUPERSCRIPTS, c) {
            text.replace_range(range, sup.encode_utf8(&mut [0; 4]));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tr(text: &str) -> String {
        transliterate(text).into_owned()
    }

    #[test]
    fn plain_text_is_borrowed_unchanged() {
        for text in ["hello world", "a_b * c", "", "price: $5 (approx)", "x_1 + y"] {
            assert!(matches!(transliterate(text), Cow::Borrowed(t) if t == text));
        }
    }

    #[test]
    fn blackboard_bold() {
        assert_eq!(tr("x \\in \\mathbb{R}"), "x ∈ ℝ");
        assert_eq!(tr("\\mathbb{N} \\subset \\mathbb{Z}"), "ℕ ⊂ ℤ");
        assert_eq!(tr("\\mathbb{E}[X]"), "𝔼[X]");
    }

    #[test]
    fn unwraps_text_commands() {
        assert_eq!(tr("\\text{if } x"), "if  x");
        assert_eq!(tr("\\mathbf{v} + \\textbf{w}"), "v + w");
        assert_eq!(tr("\\operatorname{Var}(X)"), "Var(X)");
    }

    #[test]
    fn unclosed_text_command_is_left_for_cleanup() {
        assert_eq!(tr("\\text{open"), "text{open");
    }

    #[test]
    fn fractions() {
        assert_eq!(tr("\\frac{1}{2}"), "(1/2)");
        assert_eq!(tr("\\frac{a}{b} + \\frac{c}{d}"), "(a/b) + (c/d)");
        assert_eq!(tr("\\frac{\\pi}{2}"), "(π/2)");
    }

    #[test]
    fn malformed_fraction_stops_the_loop() {
        assert_eq!(tr("\\frac{1} {2}"), "frac{1} {2}");
        assert_eq!(tr("\\frac{1}{2} \\frac{3}"), "(1/2) frac{3}");
    }

    #[test]
    fn greek_letters() {
        assert_eq!(tr("\\alpha + \\beta = \\gamma"), "α + β = γ");
        assert_eq!(tr("\\Delta \\Omega \\Sigma"), "Δ Ω Σ");
    }

    #[test]
    fn greek_is_prefix_safe() {
        assert_eq!(tr("\\varepsilon"), "ε");
        assert_eq!(tr("\\epsilon"), "ϵ");
        assert_eq!(tr("\\varphi \\phi"), "φ ϕ");
        assert_eq!(tr("\\vartheta\\theta"), "ϑθ");
    }

    #[test]
    fn operators() {
        assert_eq!(tr("a \\leq b \\neq c"), "a ≤ b ≠ c");
        assert_eq!(tr("\\forall x \\exists y"), "∀ x ∃ y");
        assert_eq!(tr("A \\cup B \\cap C"), "A ∪ B ∩ C");
        assert_eq!(tr("\\infty \\partial \\nabla"), "∞ ∂ ∇");
        assert_eq!(tr("x \\to 0"), "x → 0");
    }

    #[test]
    fn operators_are_prefix_safe() {
        assert_eq!(tr("\\leftrightarrow \\rightarrow"), "↔ →");
        assert_eq!(tr("\\left( x \\right)"), "( x )");
        assert_eq!(tr("\\int \\infty \\in"), "∫ ∞ ∈");
        assert_eq!(tr("\\subseteq \\subset"), "⊆ ⊂");
    }

    #[test]
    fn spacing_commands() {
        assert_eq!(tr("a\\quad b"), "a   b");
        assert_eq!(tr("a\\qquad b"), "a     b");
        assert_eq!(tr("a\\ b"), "a b");
        assert_eq!(tr("a \\\\ b"), "a   b");
    }

    #[test]
    fn named_functions_keep_their_name() {
        assert_eq!(tr("\\sin x + \\cos y"), "sin x + cos y");
        assert_eq!(tr("\\lim_{n \\to \\infty}"), "limₙ → ∞");
        assert_eq!(tr("\\inf S"), "inf S");
        assert_eq!(tr("\\argmax_x f"), "argmax_x f");
    }

    #[test]
    fn superscripts() {
        assert_eq!(tr("x^{2}"), "x²");
        assert_eq!(tr("x^2"), "x²");
        assert_eq!(tr("e^{i\\pi}"), "eⁱπ");
        assert_eq!(tr("x^{n+1}"), "xⁿ⁺¹");
        assert_eq!(tr("a^2 + b^2 = c^2"), "a² + b² = c²");
    }

    #[test]
    fn unmapped_superscript_chars_pass_through() {
        assert_eq!(tr("x^{q}"), "xq");
        assert_eq!(tr("x^q"), "x^q");
    }

    #[test]
    fn single_superscript_takes_one_char() {
        assert_eq!(tr("10^23"), "10²3");
    }

    #[test]
    fn subscripts() {
        assert_eq!(tr("x_{1} + x_{2}"), "x₁ + x₂");
        assert_eq!(tr("a_{ij}"), "aᵢⱼ");
        assert_eq!(tr("x_{b}"), "xb");
    }

    #[test]
    fn strips_math_delimiters() {
        assert_eq!(tr("\\(x^2\\)"), "x²");
        assert_eq!(tr("\\[a+b\\]"), "a+b");
    }

    #[test]
    fn unknown_command_keeps_its_braces() {
        assert_eq!(tr("\\foobar{z}"), "foobar{z}");
        assert_eq!(tr("\\hat{x}"), "hat{x}");
    }

    #[test]
    fn pass_order_is_fixed() {
        let unwrap_first = Pass::UnwrapCommands(TEXT_COMMANDS).apply("\\foobar{z}".to_string());
        assert_eq!(unwrap_first, "\\foobar{z}");
        assert_eq!(
            Pass::StripLeftoverCommands.apply(unwrap_first),
            "foobar{z}"
        );
    }

    #[test]
    fn no_command_survives_one_run() {
        let samples = [
            "\\frac{\\alpha}{\\beta}",
            "\\sum_{i=1}^{n} x_{i}^2",
            "\\mathbb{R}^n \\to \\mathbb{R}",
            "\\text{unclosed",
            "\\foo\\bar{baz}",
            "f(x) = \\sqrt{x^{2} + 1}",
            "\\(E = mc^2\\)",
        ];
        for sample in samples {
            let once = tr(sample);
            assert!(!LEFTOVER_COMMAND.is_match(&once), "{sample} -> {once}");
        }
    }

    #[test]
    fn common_notation_is_stable_on_a_second_run() {
        let samples = [
            "\\frac{1}{2}",
            "\\sum_{i=1}^{n} x_{i}^2",
            "e^{-x^2}",
            "\\hat{\\theta} \\approx \\theta",
            "\\text{if } x \\geq 0",
            "\\frac{1}",
            "\\[ \\int_0^1 f(x)\\,dx \\]",
            "p \\implies q \\iff r",
            "^{^{2}}",
        ];
        for sample in samples {
            let once = tr(sample);
            assert_eq!(tr(&once), once, "input {sample}");
        }
    }

    #[test]
    fn late_passes_can_expose_a_caret() {
        // Delimiter and subscript removal run after the superscript passes.
        assert_eq!(tr("x^\\(2"), "x^2");
        assert_eq!(tr("x^2"), "x²");
        assert_eq!(tr("a^_{b}"), "a^b");
    }

    #[test]
    fn tables_are_longest_first() {
        for table in [BLACKBOARD, GREEK, OPERATORS] {
            for (i, (earlier, _)) in table.iter().enumerate() {
                for (later, _) in &table[i + 1..] {
                    assert!(
                        !later.starts_with(earlier),
                        "{earlier} would shadow {later}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_table_entry_substitutes() {
        for (token, symbol) in BLACKBOARD.iter().chain(GREEK).chain(OPERATORS) {
            assert_eq!(
                replace_command(&format!("{token} "), token, symbol),
                format!("{symbol} "),
                "token {token}"
            );
        }
    }

    #[test]
    fn every_glyph_maps() {
        for (from, to) in SUPERSCRIPTS {
            assert_eq!(tr(&format!("^{{{from}}}")), to.to_string());
        }
        for (from, to) in SUBSCRIPTS {
            assert_eq!(tr(&format!("_{{{from}}}")), to.to_string());
        }
    }
}
