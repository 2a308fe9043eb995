/// Run `body` between `save` and `restore`, restoring on every path so state
/// pushed by `save` never outlives the call.
#[inline]
pub fn with_saved<C, T>(ctx: &C, save: fn(&C), restore: fn(&C), body: impl FnOnce(&C) -> T) -> T {
    save(ctx);
    let out = body(ctx);
    restore(ctx);
    out
}
