//! The `console` object.

use std::rc::Rc;

use super::{NativeCtx, Tint};
use crate::print_handler::Stream;
use crate::value::{format_console_args, HostObject, NativeFunction, Value};
use crate::EvalResult;

fn emit<'v>(ctx: &NativeCtx<'_>, stream: Stream, tint: Tint, args: &[Value<'v>]) -> Value<'v> {
    ctx.print_line(stream, tint, &format_console_args(args, ctx.interner));
    Value::Undefined
}

/// `console.log(...args)`: stdout, green.
pub fn console_log<'v>(
    ctx: &NativeCtx<'_>,
    _this: &Value<'v>,
    args: &[Value<'v>],
) -> EvalResult<Value<'v>> {
    Ok(emit(ctx, Stream::Out, Tint::Green, args))
}

/// `console.info(...args)`: same as `log`.
pub fn console_info<'v>(
    ctx: &NativeCtx<'_>,
    _this: &Value<'v>,
    args: &[Value<'v>],
) -> EvalResult<Value<'v>> {
    Ok(emit(ctx, Stream::Out, Tint::Green, args))
}

/// `console.error(...args)`: stderr, red.
pub fn console_error<'v>(
    ctx: &NativeCtx<'_>,
    _this: &Value<'v>,
    args: &[Value<'v>],
) -> EvalResult<Value<'v>> {
    Ok(emit(ctx, Stream::Err, Tint::Red, args))
}

/// `console.warn(...args)`: stderr, yellow.
pub fn console_warn<'v>(
    ctx: &NativeCtx<'_>,
    _this: &Value<'v>,
    args: &[Value<'v>],
) -> EvalResult<Value<'v>> {
    Ok(emit(ctx, Stream::Err, Tint::Yellow, args))
}

/// Build the `console` host object.
pub fn console_object<'a>() -> Value<'a> {
    let object = HostObject::new("console")
        .with_member("log", Value::Native(NativeFunction::new("log", console_log)))
        .with_member("info", Value::Native(NativeFunction::new("info", console_info)))
        .with_member("error", Value::Native(NativeFunction::new("error", console_error)))
        .with_member("warn", Value::Native(NativeFunction::new("warn", console_warn)));
    Value::Object(Rc::new(object))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use arbor_ir::StringInterner;

    use super::*;
    use crate::print_handler::buffer_handler;

    #[test]
    fn log_writes_space_joined_line_to_stdout() {
        let interner = StringInterner::new();
        let print = buffer_handler();
        let ctx = NativeCtx {
            interner: &interner,
            print: &print,
            color: false,
        };
        let args = [Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)];

        let result = match console_log(&ctx, &Value::Null, &args) {
            Ok(v) => v,
            Err(e) => panic!("log failed: {e}"),
        };
        assert_eq!(result, Value::Undefined);
        assert_eq!(print.get_output(), "1 2 3\n");
        assert_eq!(print.get_errors(), "");
    }

    #[test]
    fn error_and_warn_go_to_stderr() {
        let interner = StringInterner::new();
        let print = buffer_handler();
        let ctx = NativeCtx {
            interner: &interner,
            print: &print,
            color: false,
        };

        let _ = console_error(&ctx, &Value::Null, &["bad".into()]);
        let _ = console_warn(&ctx, &Value::Null, &["careful".into()]);
        let _ = console_info(&ctx, &Value::Null, &["fyi".into()]);

        assert_eq!(print.get_errors(), "bad\ncareful\n");
        assert_eq!(print.get_output(), "fyi\n");
    }

    #[test]
    fn colors_wrap_each_line() {
        let interner = StringInterner::new();
        let print = buffer_handler();
        let ctx = NativeCtx {
            interner: &interner,
            print: &print,
            color: true,
        };

        let _ = console_log(&ctx, &Value::Null, &["ok".into()]);
        let _ = console_error(&ctx, &Value::Null, &["no".into()]);
        let _ = console_warn(&ctx, &Value::Null, &["hm".into()]);

        assert_eq!(print.get_output(), "\x1b[32mok\x1b[0m\n");
        assert_eq!(print.get_errors(), "\x1b[31mno\x1b[0m\n\x1b[33mhm\x1b[0m\n");
    }

    #[test]
    fn console_object_lists_methods_in_order() {
        let interner = StringInterner::new();
        let console = console_object();
        assert_eq!(
            crate::value::inspect(&console, &interner),
            "Object [console] { log: [Function: log], info: [Function: info], \
             error: [Function: error], warn: [Function: warn] }"
        );
    }
}
