//! Lexical scopes for evaluation.
//!
//! Scopes form a tree: each has an optional parent and its own bindings.
//! They live in a flat arena and are addressed by [`ScopeId`], so a closure
//! can hold on to the scope it was declared in after the call that created
//! that scope has returned. Scopes are never reclaimed; the arena lives as
//! long as the interpreter.

use std::fmt;

use arbor_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// Unique identifier for a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The global scope every program runs in.
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::GLOBAL {
            write!(f, "ScopeId::GLOBAL")
        } else {
            write!(f, "ScopeId({})", self.0)
        }
    }
}

#[derive(Debug)]
struct ScopeData<'a> {
    parent: Option<ScopeId>,
    bindings: FxHashMap<Name, Value<'a>>,
}

/// Arena of every scope created during a run.
#[derive(Debug)]
pub struct Scopes<'a> {
    scopes: Vec<ScopeData<'a>>,
}

impl<'a> Scopes<'a> {
    /// Create an arena holding just the (empty) global scope.
    pub fn new() -> Self {
        Scopes {
            scopes: vec![ScopeData {
                parent: None,
                bindings: FxHashMap::default(),
            }],
        }
    }

    /// Create a new scope whose parent is `parent`.
    pub fn push(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(u32::try_from(self.scopes.len()).unwrap_or(u32::MAX));
        self.scopes.push(ScopeData {
            parent: Some(parent),
            bindings: FxHashMap::default(),
        });
        id
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.index()].parent
    }

    /// Bind `name` in `scope` itself, overwriting any existing binding there.
    pub fn set(&mut self, scope: ScopeId, name: Name, value: Value<'a>) {
        self.scopes[scope.index()].bindings.insert(name, value);
    }

    /// The binding for `name` in `scope` only.
    pub fn get_local(&self, scope: ScopeId, name: Name) -> Option<&Value<'a>> {
        self.scopes[scope.index()].bindings.get(&name)
    }

    /// Find the nearest binding for `name`, walking up the parent chain.
    ///
    /// A binding whose value is `undefined` still counts as present and
    /// shadows outer bindings.
    pub fn lookup(&self, scope: ScopeId, name: Name) -> Option<&Value<'a>> {
        let mut scope_id = scope;

        loop {
            let data = &self.scopes[scope_id.index()];

            if let Some(value) = data.bindings.get(&name) {
                return Some(value);
            }

            match data.parent {
                Some(parent) => scope_id = parent,
                None => return None,
            }
        }
    }

    /// Like [`lookup`](Self::lookup), yielding `undefined` for unbound names.
    pub fn get(&self, scope: ScopeId, name: Name) -> Value<'a> {
        self.lookup(scope, name).cloned().unwrap_or(Value::Undefined)
    }

    /// Whether `scope` itself binds `name`.
    pub fn has_local(&self, scope: ScopeId, name: Name) -> bool {
        self.scopes[scope.index()].bindings.contains_key(&name)
    }

    /// Whether `scope` itself binds `name` to a truthy value.
    pub fn has_truthy(&self, scope: ScopeId, name: Name) -> bool {
        self.get_local(scope, name).is_some_and(Value::is_truthy)
    }

    /// Number of scopes created so far, the global scope included.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Default for Scopes<'_> {
    fn default() -> Self {
        Self::new()
    }
}
