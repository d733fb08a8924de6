//! Call expressions and closure invocation.

use arbor_ir::{Node, NodeKind, StringInterner};

use super::{Flow, Interpreter};
use crate::builtins::NativeCtx;
use crate::errors::{not_callable, stack_overflow};
use crate::{Closure, EvalResult, ScopeId, Value};

impl<'a> Interpreter<'a> {
    /// Evaluate `callee(arguments...)`.
    ///
    /// A member callee is called with its object as the receiver; any other
    /// callee is resolved to a name, looked up, and called with a `null`
    /// receiver.
    pub(super) fn eval_call_expression(
        &mut self,
        callee: &'a Node,
        arguments: &'a [Node],
        scope: ScopeId,
    ) -> EvalResult<Value<'a>> {
        let args = arguments
            .iter()
            .map(|argument| self.operand_value(argument, scope))
            .collect::<EvalResult<Vec<_>>>()?;

        let (function, this) = match &callee.kind {
            NodeKind::MemberExpression {
                object, property, ..
            } => {
                let receiver = self.member_object(object, scope)?;
                let key = self.eval_expr(property, scope)?;
                let function = self
                    .get_property(&receiver, &key)
                    .map_err(|e| e.or_span(callee.span))?;
                (function, receiver)
            }
            _ => {
                let name = self.resolve_name(callee, scope)?;
                (self.scopes.get(scope, name), Value::Null)
            }
        };

        if !function.is_callable() {
            let name = describe_callee(callee, self.interner);
            return Err(not_callable(name).with_span(callee.span));
        }
        self.call_value(&function, this, &args)
    }

    /// Invoke a callable value.
    pub fn call_value(
        &mut self,
        function: &Value<'a>,
        this: Value<'a>,
        args: &[Value<'a>],
    ) -> EvalResult<Value<'a>> {
        match function {
            Value::Function(closure) => self.call_closure(*closure, this, args),
            Value::Native(native) => {
                let ctx = NativeCtx {
                    interner: self.interner,
                    print: &self.print_handler,
                    color: self.options.color,
                };
                tracing::trace!(native = native.name, args = args.len(), "call native");
                (native.func)(&ctx, &this, args)
            }
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Run a closure body in a fresh child of its defining scope.
    ///
    /// Parameters bind by position (missing ones to `undefined`), then
    /// `this` binds to the receiver.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(function = %closure.name(self.interner), depth = self.call_depth)
    )]
    fn call_closure(
        &mut self,
        closure: Closure<'a>,
        this: Value<'a>,
        args: &[Value<'a>],
    ) -> EvalResult<Value<'a>> {
        if self.call_depth >= self.options.max_call_depth {
            return Err(stack_overflow(self.options.max_call_depth));
        }

        let call_scope = self.scopes.push(closure.scope);
        for (i, param) in closure.decl.params.iter().enumerate() {
            let arg = args.get(i).cloned().unwrap_or(Value::Undefined);
            self.scopes.set(call_scope, param.name, arg);
        }
        self.scopes.set(call_scope, self.this_name, this);

        self.call_depth += 1;
        let result = self.evaluate(&closure.decl.body, call_scope);
        self.call_depth -= 1;

        Ok(match result? {
            Flow::Return(value) => value,
            Flow::Normal(_) => Value::Undefined,
        })
    }
}

/// Source-like name of a callee for error messages.
fn describe_callee(callee: &Node, interner: &StringInterner) -> String {
    match &callee.kind {
        NodeKind::Identifier { name } => interner.lookup(*name).to_string(),
        NodeKind::MemberExpression {
            object,
            property,
            computed: false,
        } => format!(
            "{}.{}",
            describe_callee(object, interner),
            describe_callee(property, interner)
        ),
        NodeKind::MemberExpression {
            object, property, ..
        } => format!(
            "{}[{}]",
            describe_callee(object, interner),
            describe_callee(property, interner)
        ),
        NodeKind::ThisExpression => "this".to_string(),
        NodeKind::StringLiteral { value } => format!("{value:?}"),
        NodeKind::NumericLiteral { value } => crate::format_number(*value),
        _ => "expression".to_string(),
    }
}
