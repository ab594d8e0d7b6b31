use mosaic_motion::{ensure_keyframes_injected, keyframes_injected};

/// Hands the built-in keyframes stylesheet to `inject` once per process.
/// Web renderers pass a closure that appends a `<style>` element; native
/// renderers can skip this. Returns whether `inject` ran.
pub fn init(inject: impl FnOnce(&str)) -> bool {
    let injected = ensure_keyframes_injected(inject);

    if !injected {
        tracing::trace!("keyframes already injected");
    }

    injected
}

pub fn is_initialized() -> bool {
    keyframes_injected()
}
