/// Picks the value of the first branch whose condition holds.
///
/// ```ignore
/// let bg = first_match!({
///     disabled => colors.disabled,
///     hovered => colors.hover,
///     _ => colors.idle
/// });
/// ```
#[macro_export]
macro_rules! first_match {
    // Entry point.
    ({ $cond:expr => $value:expr, $($rest:tt)+ }) => {{
        if $cond { $value } else { $crate::first_match!(@branch_list [ $($rest)+ ]) }
    }};

    // Default branch wasn't last.
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` is only allowed on the last branch.");
    }};

    // Last branch.
    (@branch_list [ _ => $value:expr $(,)? ]) => {{
        $value
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::first_match!(@branch_list [ $($rest)+ ]) }
    }};

    // Last branch wasn't default.
    (@branch_list [ $cond:expr => $value:expr $(,)? ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};
}
