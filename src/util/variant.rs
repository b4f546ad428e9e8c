use std::fmt;

// Typed argument values for actor expressions, e.g. "Random(17)".
#[derive(Debug, Clone)]
pub enum Variant {
    Int(i64),
    Bool(bool),
    String(String),
}

impl Variant {
    #[allow(dead_code)]
    pub fn as_int(&self) -> i64 {
        if let &Self::Int(v) = self {
            return v;
        }
        panic!();
    }

    #[allow(dead_code)]
    pub fn as_bool(&self) -> bool {
        if let &Self::Bool(v) = self {
            return v;
        }
        panic!();
    }

    #[allow(dead_code)]
    pub fn as_string(&self) -> String {
        if let Self::String(v) = self {
            return v.clone();
        }
        panic!();
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Clone)]
pub struct Arg {
    pub name: String,
    pub value: Variant,
}

impl Arg {
    #[allow(dead_code)]
    pub fn int(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Int(value),
        }
    }

    #[allow(dead_code)]
    pub fn bool(name: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Bool(value),
        }
    }

    #[allow(dead_code)]
    pub fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::String(value.to_string()),
        }
    }
}
