/// The fixed set of one-argument functions. Their names (aliases
/// included) are reserved: no variable or user function may take them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Builtin {
    Sin, Cos, Tan, Cot,
    Sinh, Cosh, Tanh, Coth,
    Sqrt, Exp, Log, Ln, Abs,
}

static NAMES: &[(&str, Builtin)] = &[
    ("sin", Builtin::Sin),
    ("cos", Builtin::Cos),
    ("tan", Builtin::Tan),
    ("tg", Builtin::Tan),
    ("cot", Builtin::Cot),
    ("ctg", Builtin::Cot),
    ("sinh", Builtin::Sinh),
    ("sh", Builtin::Sinh),
    ("cosh", Builtin::Cosh),
    ("ch", Builtin::Cosh),
    ("tanh", Builtin::Tanh),
    ("th", Builtin::Tanh),
    ("coth", Builtin::Coth),
    ("cth", Builtin::Coth),
    ("sqrt", Builtin::Sqrt),
    ("exp", Builtin::Exp),
    ("log", Builtin::Log),
    ("ln", Builtin::Ln),
    ("abs", Builtin::Abs),
];

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        NAMES.iter().find(|(n, _)| *n == name).map(|&(_, b)| b)
    }

    /// Every reserved name, aliases included.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMES.iter().map(|&(n, _)| n)
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Cot => "cot",
            Builtin::Sinh => "sinh",
            Builtin::Cosh => "cosh",
            Builtin::Tanh => "tanh",
            Builtin::Coth => "coth",
            Builtin::Sqrt => "sqrt",
            Builtin::Exp => "exp",
            Builtin::Log => "log",
            Builtin::Ln => "ln",
            Builtin::Abs => "abs",
        }
    }

    pub fn arity(&self) -> usize { 1 }

    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Builtin::Sin => x.sin(),
            Builtin::Cos => x.cos(),
            Builtin::Tan => x.tan(),
            Builtin::Cot => 1.0 / x.tan(),
            Builtin::Sinh => x.sinh(),
            Builtin::Cosh => x.cosh(),
            Builtin::Tanh => x.tanh(),
            Builtin::Coth => 1.0 / x.tanh(),
            Builtin::Sqrt => x.sqrt(),
            Builtin::Exp => x.exp(),
            Builtin::Log => x.log10(),
            Builtin::Ln => x.ln(),
            Builtin::Abs => x.abs(),
        }
    }
}
