//! Substitution tables for the LaTeX rewrite passes.
//!
//! Tables that map command tokens are ordered so that no entry is a prefix of
//! a later one; a shorter command must never fire inside a longer one.

pub const BLACKBOARD: &[(&str, &str)] = &[
    ("\\mathbb{R}", "ℝ"),
    ("\\mathbb{N}", "ℕ"),
    ("\\mathbb{Z}", "ℤ"),
    ("\\mathbb{Q}", "ℚ"),
    ("\\mathbb{C}", "ℂ"),
    ("\\mathbb{E}", "𝔼"),
    ("\\mathbb{P}", "ℙ"),
    ("\\mathbb{H}", "ℍ"),
];

/// Commands whose single brace argument is kept as plain text.
pub const TEXT_COMMANDS: &[&str] = &[
    "text",
    "mathrm",
    "mathbf",
    "textbf",
    "textit",
    "operatorname",
];

pub const GREEK: &[(&str, &str)] = &[
    ("\\varepsilon", "ε"),
    ("\\varsigma", "ς"),
    ("\\vartheta", "ϑ"),
    ("\\Upsilon", "Υ"),
    ("\\epsilon", "ϵ"),
    ("\\upsilon", "υ"),
    ("\\omicron", "ο"),
    ("\\varphi", "φ"),
    ("\\varrho", "ϱ"),
    ("\\lambda", "λ"),
    ("\\Lambda", "Λ"),
    ("\\varpi", "ϖ"),
    ("\\alpha", "α"),
    ("\\gamma", "γ"),
    ("\\Gamma", "Γ"),
    ("\\delta", "δ"),
    ("\\Delta", "Δ"),
    ("\\theta", "θ"),
    ("\\Theta", "Θ"),
    ("\\kappa", "κ"),
    ("\\sigma", "σ"),
    ("\\Sigma", "Σ"),
    ("\\omega", "ω"),
    ("\\Omega", "Ω"),
    ("\\beta", "β"),
    ("\\zeta", "ζ"),
    ("\\iota", "ι"),
    ("\\Phi", "Φ"),
    ("\\phi", "ϕ"),
    ("\\chi", "χ"),
    ("\\psi", "ψ"),
    ("\\Psi", "Ψ"),
    ("\\eta", "η"),
    ("\\rho", "ρ"),
    ("\\tau", "τ"),
    ("\\Xi", "Ξ"),
    ("\\xi", "ξ"),
    ("\\Pi", "Π"),
    ("\\pi", "π"),
    ("\\mu", "μ"),
    ("\\nu", "ν"),
];

pub const OPERATORS: &[(&str, &str)] = &[
    // arrows
    ("\\Leftrightarrow", "⇔"),
    ("\\leftrightarrow", "↔"),
    ("\\Longrightarrow", "⟹"),
    ("\\longrightarrow", "⟶"),
    ("\\rightarrow", "→"),
    ("\\Rightarrow", "⇒"),
    ("\\leftarrow", "←"),
    ("\\Leftarrow", "⇐"),
    ("\\downarrow", "↓"),
    ("\\uparrow", "↑"),
    ("\\implies", "⟹"),
    ("\\mapsto", "↦"),
    ("\\iff", "⟺"),
    ("\\to", "→"),
    // arithmetic and calculus
    ("\\parallel", "∥"),
    ("\\partial", "∂"),
    ("\\otimes", "⊗"),
    ("\\degree", "°"),
    ("\\oplus", "⊕"),
    ("\\cdots", "⋯"),
    ("\\ldots", "…"),
    ("\\infty", "∞"),
    ("\\nabla", "∇"),
    ("\\times", "×"),
    ("\\angle", "∠"),
    ("\\prime", "′"),
    ("\\cdot", "·"),
    ("\\circ", "∘"),
    ("\\dots", "…"),
    ("\\sqrt", "√"),
    ("\\perp", "⊥"),
    ("\\prod", "∏"),
    ("\\star", "⋆"),
    ("\\oint", "∮"),
    ("\\hbar", "ℏ"),
    ("\\sum", "∑"),
    ("\\int", "∫"),
    ("\\div", "÷"),
    ("\\ell", "ℓ"),
    ("\\mid", "∣"),
    ("\\pm", "±"),
    ("\\mp", "∓"),
    // sizing delimiters and spacing
    ("\\right", ""),
    ("\\left", ""),
    ("\\qquad", "    "),
    ("\\quad", "  "),
    ("\\\\", " "),
    ("\\,", " "),
    ("\\;", " "),
    ("\\:", " "),
    ("\\!", ""),
    ("\\ ", " "),
    // sets and logic
    ("\\varnothing", "∅"),
    ("\\subseteq", "⊆"),
    ("\\supseteq", "⊇"),
    ("\\emptyset", "∅"),
    ("\\setminus", "∖"),
    ("\\subset", "⊂"),
    ("\\supset", "⊃"),
    ("\\exists", "∃"),
    ("\\forall", "∀"),
    ("\\notin", "∉"),
    ("\\wedge", "∧"),
    ("\\land", "∧"),
    ("\\lnot", "¬"),
    ("\\cup", "∪"),
    ("\\cap", "∩"),
    ("\\vee", "∨"),
    ("\\lor", "∨"),
    ("\\neg", "¬"),
    ("\\in", "∈"),
    // comparison
    ("\\approx", "≈"),
    ("\\propto", "∝"),
    ("\\equiv", "≡"),
    ("\\simeq", "≃"),
    ("\\cong", "≅"),
    ("\\leq", "≤"),
    ("\\geq", "≥"),
    ("\\neq", "≠"),
    ("\\sim", "∼"),
    ("\\le", "≤"),
    ("\\ge", "≥"),
    ("\\ne", "≠"),
    ("\\ll", "≪"),
    ("\\gg", "≫"),
    // escaped literals
    ("\\{", "{"),
    ("\\}", "}"),
    ("\\%", "%"),
    ("\\$", "$"),
    ("\\&", "&"),
    ("\\#", "#"),
];

/// Functions rendered upright as their bare name.
pub const NAMED_FUNCTIONS: &[&str] = &[
    "argmin", "argmax", "rank", "min", "max", "log", "sin", "cos", "tan", "exp", "lim", "sup",
    "inf", "det", "dim", "mod", "gcd", "ln",
];

pub const SUPERSCRIPTS: &[(char, char)] = &[
    ('0', '⁰'),
    ('1', '¹'),
    ('2', '²'),
    ('3', '³'),
    ('4', '⁴'),
    ('5', '⁵'),
    ('6', '⁶'),
    ('7', '⁷'),
    ('8', '⁸'),
    ('9', '⁹'),
    ('+', '⁺'),
    ('-', '⁻'),
    ('=', '⁼'),
    ('(', '⁽'),
    (')', '⁾'),
    ('a', 'ᵃ'),
    ('b', 'ᵇ'),
    ('c', 'ᶜ'),
    ('d', 'ᵈ'),
    ('e', 'ᵉ'),
    ('f', 'ᶠ'),
    ('g', 'ᵍ'),
    ('h', 'ʰ'),
    ('i', 'ⁱ'),
    ('j', 'ʲ'),
    ('k', 'ᵏ'),
    ('l', 'ˡ'),
    ('m', 'ᵐ'),
    ('n', 'ⁿ'),
    ('o', 'ᵒ'),
    ('p', 'ᵖ'),
    ('r', 'ʳ'),
    ('s', 'ˢ'),
    ('t', 'ᵗ'),
    ('u', 'ᵘ'),
    ('v', 'ᵛ'),
    ('w', 'ʷ'),
    ('x', 'ˣ'),
    ('y', 'ʸ'),
    ('z', 'ᶻ'),
    ('T', 'ᵀ'),
];

pub const SUBSCRIPTS: &[(char, char)] = &[
    ('0', '₀'),
    ('1', '₁'),
    ('2', '₂'),
    ('3', '₃'),
    ('4', '₄'),
    ('5', '₅'),
    ('6', '₆'),
    ('7', '₇'),
    ('8', '₈'),
    ('9', '₉'),
    ('+', '₊'),
    ('-', '₋'),
    ('=', '₌'),
    ('(', '₍'),
    (')', '₎'),
    ('a', 'ₐ'),
    ('e', 'ₑ'),
    ('h', 'ₕ'),
    ('i', 'ᵢ'),
    ('j', 'ⱼ'),
    ('k', 'ₖ'),
    ('l', 'ₗ'),
    ('m', 'ₘ'),
    ('n', 'ₙ'),
    ('o', 'ₒ'),
    ('p', 'ₚ'),
    ('r', 'ᵣ'),
    ('s', 'ₛ'),
    ('t', 'ₜ'),
    ('u', 'ᵤ'),
    ('v', 'ᵥ'),
    ('x', 'ₓ'),
];

/// Inline and display math delimiters, removed outright.
pub const MATH_DELIMITERS: &[&str] = &["\\(", "\\)", "\\[", "\\]"];

pub fn glyph(table: &[(char, char)], c: char) -> Option<char> {
    table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)
}
