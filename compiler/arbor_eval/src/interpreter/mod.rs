//! Tree-walking interpreter.
//!
//! [`Interpreter::evaluate`] is the single dispatch point: one exhaustive
//! match over [`NodeKind`], with every error tagged with the span of the
//! innermost node that was being evaluated.
//!
//! # Names versus values
//!
//! Evaluating a bare `Identifier` yields its *name* as a string, not its
//! bound value. Call sites decide how to resolve sub-nodes:
//!
//! - Binary operands and call arguments: an `Identifier` is looked up in
//!   scope, anything else is evaluated ([`Interpreter::operand_value`]).
//! - Declared names, member objects and plain callees: the node is
//!   evaluated (or read directly when it is an `Identifier`), converted to
//!   a string and used as a name ([`Interpreter::resolve_name`]).
//! - Declarator initializers, `return` arguments and array elements are
//!   evaluated as-is, so `var b = a` binds the string `"a"`.
//!
//! These rules differ on non-identifier operands and on nested member
//! chains; keep them per call site.

mod builder;
mod call;

pub use builder::{EvalOptions, InterpreterBuilder, RedeclarationCheck, DEFAULT_MAX_CALL_DEPTH};

use arbor_ir::{Name, Node, NodeKind, StringInterner};
use arbor_stack::ensure_sufficient_stack;

use crate::errors::{duplicate_declaration, invalid_property_access, unsupported_node};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::{Closure, EvalResult, ScopeId, Scopes, Value};

/// How a statement completed.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow<'a> {
    Normal(Value<'a>),
    /// A `return` ran; enclosing blocks stop and the call yields the value.
    Return(Value<'a>),
}

impl<'a> Flow<'a> {
    /// The completion's value, whichever way it completed.
    pub fn into_value(self) -> Value<'a> {
        match self {
            Flow::Normal(v) | Flow::Return(v) => v,
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Flow::Return(_))
    }
}

/// Tree-walking interpreter over a borrowed syntax tree.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    scopes: Scopes<'a>,
    print_handler: SharedPrintHandler,
    options: EvalOptions,
    /// Closure invocations currently on the stack.
    call_depth: usize,
    /// Pre-interned `this`.
    this_name: Name,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default options, `console` seeded, printing to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn scopes(&self) -> &Scopes<'a> {
        &self.scopes
    }

    pub fn global_scope(&self) -> ScopeId {
        ScopeId::GLOBAL
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Bind `name` in the global scope.
    pub fn define_global(&mut self, name: &str, value: Value<'a>) {
        let name = self.interner.intern(name);
        self.scopes.set(ScopeId::GLOBAL, name, value);
    }

    /// Current value of a global, `undefined` if unbound.
    pub fn global(&self, name: &str) -> Value<'a> {
        self.scopes.get(ScopeId::GLOBAL, self.interner.intern(name))
    }

    /// Evaluate a whole program against the global scope.
    ///
    /// Stops at the first error; bindings made before it remain in place.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_program(&mut self, program: &'a Node) -> EvalResult<()> {
        self.evaluate(program, ScopeId::GLOBAL).map(|_| ())
    }

    /// Evaluate `node` in `scope`.
    ///
    /// Errors without a span get `node`'s span.
    pub fn evaluate(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<Flow<'a>> {
        ensure_sufficient_stack(|| self.eval_node(node, scope)).map_err(|e| e.or_span(node.span))
    }

    /// Evaluate an expression node to its value.
    pub fn eval_expr(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<Value<'a>> {
        self.evaluate(node, scope).map(Flow::into_value)
    }

    fn eval_node(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<Flow<'a>> {
        let value = match &node.kind {
            // Statements
            NodeKind::Program { body } => {
                for statement in body {
                    self.evaluate(statement, scope)?;
                }
                Value::Undefined
            }
            NodeKind::VariableDeclaration { declarations, .. } => {
                for declarator in declarations {
                    self.evaluate(declarator, scope)?;
                }
                Value::Undefined
            }
            NodeKind::VariableDeclarator { id, init } => {
                let name = self.resolve_name(id, scope)?;
                self.check_redeclaration(scope, name)?;
                let value = match init {
                    Some(init) => self.eval_expr(init, scope)?,
                    None => Value::Undefined,
                };
                tracing::debug!(name = %self.interner.lookup(name), ?value, "declare");
                self.scopes.set(scope, name, value);
                Value::Undefined
            }
            NodeKind::FunctionDeclaration(decl) => {
                let name = self.resolve_name(&decl.id, scope)?;
                self.check_redeclaration(scope, name)?;
                tracing::debug!(name = %self.interner.lookup(name), "declare function");
                self.scopes
                    .set(scope, name, Value::Function(Closure { decl, scope }));
                Value::Undefined
            }
            NodeKind::ReturnStatement { argument } => {
                let value = match argument {
                    Some(argument) => self.eval_expr(argument, scope)?,
                    None => Value::Undefined,
                };
                return Ok(Flow::Return(value));
            }
            NodeKind::BlockStatement { body } => {
                let mut last = Value::Undefined;
                for statement in body {
                    match self.evaluate(statement, scope)? {
                        Flow::Normal(v) => last = v,
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                last
            }
            NodeKind::ExpressionStatement { expression } => self.eval_expr(expression, scope)?,
            NodeKind::EmptyStatement => Value::Undefined,

            // Expressions
            NodeKind::BinaryExpression {
                operator,
                left,
                right,
            } => {
                let left = self.operand_value(left, scope)?;
                let right = self.operand_value(right, scope)?;
                evaluate_binary(*operator, &left, &right, self.interner)?
            }
            NodeKind::Identifier { name } => Value::string(&*self.interner.lookup(*name)),
            NodeKind::NumericLiteral { value } => Value::Number(*value),
            NodeKind::StringLiteral { value } => Value::string(value.as_str()),
            NodeKind::BooleanLiteral { value } => Value::Bool(*value),
            NodeKind::NullLiteral => Value::Null,
            NodeKind::ThisExpression => self.scopes.get(scope, self.this_name),
            NodeKind::ArrayExpression { elements } => {
                let values = elements
                    .iter()
                    .map(|element| self.eval_expr(element, scope))
                    .collect::<EvalResult<Vec<_>>>()?;
                Value::array(values)
            }
            NodeKind::MemberExpression {
                object, property, ..
            } => {
                let object = self.member_object(object, scope)?;
                let key = self.eval_expr(property, scope)?;
                self.get_property(&object, &key)?
            }
            NodeKind::CallExpression { callee, arguments } => {
                self.eval_call_expression(callee, arguments, scope)?
            }
            NodeKind::Unsupported { kind } => return Err(unsupported_node(*kind)),
        };
        Ok(Flow::Normal(value))
    }

    /// Value of a binary operand or call argument: identifiers are looked
    /// up, everything else is evaluated.
    fn operand_value(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<Value<'a>> {
        match node.as_identifier() {
            Some(name) => Ok(self.scopes.get(scope, name)),
            None => self.eval_expr(node, scope),
        }
    }

    /// Evaluate `node` and use its string form as a name.
    fn resolve_name(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<Name> {
        if let Some(name) = node.as_identifier() {
            return Ok(name);
        }
        let value = self.eval_expr(node, scope)?;
        Ok(self.interner.intern(&value.to_js_string(self.interner)))
    }

    /// The object of a member expression: resolved to a name, then looked up.
    fn member_object(&mut self, node: &'a Node, scope: ScopeId) -> EvalResult<Value<'a>> {
        let name = self.resolve_name(node, scope)?;
        Ok(self.scopes.get(scope, name))
    }

    fn check_redeclaration(&self, scope: ScopeId, name: Name) -> EvalResult<()> {
        let declared = match self.options.redeclaration {
            RedeclarationCheck::Presence => self.scopes.has_local(scope, name),
            RedeclarationCheck::Truthy => self.scopes.has_truthy(scope, name),
        };
        if declared {
            return Err(duplicate_declaration(&self.interner.lookup(name)));
        }
        Ok(())
    }

    /// Read `key` from `object`.
    fn get_property(&self, object: &Value<'a>, key: &Value<'a>) -> EvalResult<Value<'a>> {
        let key = key.to_js_string(self.interner);
        let value = match object {
            Value::Undefined => return Err(invalid_property_access("undefined", key)),
            Value::Null => return Err(invalid_property_access("null", key)),
            Value::Array(elements) => {
                if key == "length" {
                    Value::Number(len_to_f64(elements.len()))
                } else {
                    array_index(&key)
                        .and_then(|i| elements.get(i))
                        .cloned()
                        .unwrap_or(Value::Undefined)
                }
            }
            Value::Str(s) => {
                if key == "length" {
                    Value::Number(len_to_f64(s.encode_utf16().count()))
                } else {
                    array_index(&key)
                        .and_then(|i| s.encode_utf16().nth(i))
                        .map_or(Value::Undefined, |unit| {
                            Value::string(String::from_utf16_lossy(&[unit]))
                        })
                }
            }
            Value::Object(host) => host.get(&key).cloned().unwrap_or(Value::Undefined),
            Value::Bool(_)
            | Value::Number(_)
            | Value::Function(_)
            | Value::Native(_) => Value::Undefined,
        };
        Ok(value)
    }
}

/// A canonical array index (`"0"`, `"12"`, never `"01"` or `"1.0"`).
fn array_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

#[expect(clippy::cast_precision_loss, reason = "lengths stay far below 2^53")]
fn len_to_f64(len: usize) -> f64 {
    len as f64
}
