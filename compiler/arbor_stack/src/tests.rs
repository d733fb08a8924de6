use super::*;

#[test]
fn test_nested_calls_return_value() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn test_deep_recursion_does_not_overflow() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    // Far beyond what a default 8MB thread stack holds with these frames.
    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn test_propagates_result() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(result, Err("boom"));
}
