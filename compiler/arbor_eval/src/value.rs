//! Runtime values.
//!
//! A [`Value`] is immutable once created. Strings and arrays are
//! reference-counted so cloning a value out of a scope is cheap. Closures
//! borrow their declaration straight from the syntax tree, which is why
//! values carry the tree's lifetime `'a`.

mod format;

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use arbor_ir::{FunctionDecl, StringInterner};

use crate::{EvalResult, NativeCtx, ScopeId};

pub use format::{format_console_args, format_number, inspect};

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value<'a> {
    /// The value of unbound names and missing arguments.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Array(Rc<[Value<'a>]>),
    /// A user function together with the scope it was declared in.
    Function(Closure<'a>),
    /// A host function such as `console.log`.
    Native(NativeFunction),
    /// A host object such as `console`.
    Object(Rc<HostObject<'a>>),
}

impl<'a> Value<'a> {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn array(elements: Vec<Value<'a>>) -> Self {
        Value::Array(elements.into())
    }

    /// The `typeof` name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) | Value::Native(_) => "function",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Function(_) | Value::Native(_) | Value::Object(_) => true,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Native(_))
    }

    /// Numeric conversion.
    ///
    /// Strings are trimmed; an empty string is `0`, anything that is not a
    /// complete numeric literal is `NaN`. Arrays convert through their
    /// string form.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined | Value::Function(_) | Value::Native(_) | Value::Object(_) => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => string_to_number(s),
            Value::Array(elements) => match &**elements {
                [] => 0.0,
                [Value::Undefined | Value::Null] => 0.0,
                [single] if !matches!(single, Value::Bool(_)) => single.to_number(),
                _ => f64::NAN,
            },
        }
    }

    /// String conversion, as used by `+` concatenation and property keys.
    pub fn to_js_string(&self, interner: &StringInterner) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Str(s) => s.to_string(),
            Value::Array(elements) => elements
                .iter()
                .map(|e| match e {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_js_string(interner),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Function(closure) => {
                let params: Vec<_> = closure
                    .decl
                    .params
                    .iter()
                    .map(|p| interner.lookup(p.name))
                    .collect();
                format!(
                    "function {}({}) {{ ... }}",
                    closure.name(interner),
                    params.join(", ")
                )
            }
            Value::Native(native) => format!("function {}() {{ [native code] }}", native.name),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Whether `+` treats this operand as a string.
    pub(crate) fn concatenates(&self) -> bool {
        matches!(
            self,
            Value::Str(_)
                | Value::Array(_)
                | Value::Function(_)
                | Value::Native(_)
                | Value::Object(_)
        )
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => a.name == b.name,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value<'_> {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// A user-defined function and the scope it closes over.
#[derive(Copy, Clone)]
pub struct Closure<'a> {
    pub decl: &'a FunctionDecl,
    pub scope: ScopeId,
}

impl Closure<'_> {
    pub fn name(&self, interner: &StringInterner) -> Arc<str> {
        self.decl
            .id
            .as_identifier()
            .map_or_else(|| Arc::from("anonymous"), |name| interner.lookup(name))
    }
}

impl PartialEq for Closure<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.decl, other.decl) && self.scope == other.scope
    }
}

impl fmt::Debug for Closure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.decl.params.len())
            .field("scope", &self.scope)
            .finish()
    }
}

/// Signature of host functions: context, receiver, arguments.
pub type NativeFn =
    for<'v> fn(&NativeCtx<'_>, &Value<'v>, &[Value<'v>]) -> EvalResult<Value<'v>>;

/// A named host function.
#[derive(Copy, Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        NativeFunction { name, func }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

/// A host object: a class-like name and members in insertion order.
#[derive(Clone, Debug, Default)]
pub struct HostObject<'a> {
    name: String,
    members: Vec<(String, Value<'a>)>,
}

impl<'a> HostObject<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        HostObject {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add (or replace) a member.
    #[must_use]
    pub fn with_member(mut self, key: impl Into<String>, value: Value<'a>) -> Self {
        let key = key.into();
        match self.members.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.members.push((key, value)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.members.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &Value<'a>)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Convert a string to a number the way a unary `+` would.
fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return f64::NAN;
        }
        return hex
            .bytes()
            .fold(0.0, |acc, b| acc * 16.0 + f64::from(hex_digit(b)));
    }

    // Rust's float parser also accepts `inf` and `nan`; a numeric literal
    // only ever contains digits, a point, signs and an exponent marker.
    let literal = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !literal || !unsigned.bytes().next().is_some_and(|b| b.is_ascii_digit() || b == b'.') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}
