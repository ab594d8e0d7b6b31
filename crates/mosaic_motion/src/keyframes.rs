use std::sync::{
    LazyLock,
    atomic::{AtomicBool, Ordering},
};

/// One `@keyframes` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    /// `(offset percentage, declarations)` pairs in ascending offset order.
    pub frames: Vec<(u8, Vec<(&'static str, &'static str)>)>,
}

impl Keyframes {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            frames: Vec::new(),
        }
    }

    pub fn frame(mut self, offset: u8, declarations: &[(&'static str, &'static str)]) -> Self {
        self.frames.push((offset.min(100), declarations.to_vec()));
        self
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);

        for (offset, declarations) in &self.frames {
            css.push_str(&format!("  {offset}% {{"));
            for (property, value) in declarations {
                css.push_str(&format!(" {property}: {value};"));
            }
            css.push_str(" }\n");
        }

        css.push('}');
        css
    }
}

/// Names of the built-in animations, usable as `animationName` values.
pub mod animation {
    pub const SPIN: &str = "mosaic-spin";
    pub const PULSE: &str = "mosaic-pulse";
    pub const SHIMMER: &str = "mosaic-shimmer";
    pub const FADE_IN: &str = "mosaic-fade-in";
    pub const FADE_OUT: &str = "mosaic-fade-out";
    pub const SCALE_IN: &str = "mosaic-scale-in";
    pub const SCALE_OUT: &str = "mosaic-scale-out";
    pub const SLIDE_IN_FROM_TOP: &str = "mosaic-slide-in-from-top";
    pub const SLIDE_IN_FROM_RIGHT: &str = "mosaic-slide-in-from-right";
    pub const SLIDE_IN_FROM_BOTTOM: &str = "mosaic-slide-in-from-bottom";
    pub const SLIDE_IN_FROM_LEFT: &str = "mosaic-slide-in-from-left";
}

static BUILTIN_KEYFRAMES: LazyLock<Vec<Keyframes>> = LazyLock::new(|| {
    use animation::*;

    vec![
        Keyframes::new(SPIN)
            .frame(0, &[("transform", "rotate(0deg)")])
            .frame(100, &[("transform", "rotate(360deg)")]),
        Keyframes::new(PULSE)
            .frame(0, &[("opacity", "1")])
            .frame(50, &[("opacity", "0.5")])
            .frame(100, &[("opacity", "1")]),
        Keyframes::new(SHIMMER)
            .frame(0, &[("background-position", "-200% 0")])
            .frame(100, &[("background-position", "200% 0")]),
        Keyframes::new(FADE_IN)
            .frame(0, &[("opacity", "0")])
            .frame(100, &[("opacity", "1")]),
        Keyframes::new(FADE_OUT)
            .frame(0, &[("opacity", "1")])
            .frame(100, &[("opacity", "0")]),
        Keyframes::new(SCALE_IN)
            .frame(0, &[("opacity", "0"), ("transform", "scale(0.96)")])
            .frame(100, &[("opacity", "1"), ("transform", "scale(1)")]),
        Keyframes::new(SCALE_OUT)
            .frame(0, &[("opacity", "1"), ("transform", "scale(1)")])
            .frame(100, &[("opacity", "0"), ("transform", "scale(0.96)")]),
        Keyframes::new(SLIDE_IN_FROM_TOP)
            .frame(0, &[("transform", "translateY(-100%)")])
            .frame(100, &[("transform", "translateY(0)")]),
        Keyframes::new(SLIDE_IN_FROM_RIGHT)
            .frame(0, &[("transform", "translateX(100%)")])
            .frame(100, &[("transform", "translateX(0)")]),
        Keyframes::new(SLIDE_IN_FROM_BOTTOM)
            .frame(0, &[("transform", "translateY(100%)")])
            .frame(100, &[("transform", "translateY(0)")]),
        Keyframes::new(SLIDE_IN_FROM_LEFT)
            .frame(0, &[("transform", "translateX(-100%)")])
            .frame(100, &[("transform", "translateX(0)")]),
    ]
});

pub fn builtin_keyframes() -> &'static [Keyframes] {
    &BUILTIN_KEYFRAMES
}

/// The stylesheet holding every built-in animation.
pub fn keyframes_stylesheet() -> String {
    builtin_keyframes()
        .iter()
        .map(Keyframes::to_css)
        .collect::<Vec<_>>()
        .join("\n")
}

static KEYFRAMES_INJECTED: AtomicBool = AtomicBool::new(false);

/// Hands the keyframes stylesheet to `inject` the first time it is called in
/// this process. Returns whether `inject` ran.
pub fn ensure_keyframes_injected(inject: impl FnOnce(&str)) -> bool {
    if KEYFRAMES_INJECTED.swap(true, Ordering::AcqRel) {
        return false;
    }

    let stylesheet = keyframes_stylesheet();
    tracing::trace!(bytes = stylesheet.len(), "injecting keyframes");
    inject(&stylesheet);
    true
}

pub fn keyframes_injected() -> bool {
    KEYFRAMES_INJECTED.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_css() {
        let css = Keyframes::new("blink")
            .frame(0, &[("opacity", "1")])
            .frame(100, &[("opacity", "0")])
            .to_css();

        assert_eq!(
            css,
            "@keyframes blink {\n  0% { opacity: 1; }\n  100% { opacity: 0; }\n}"
        );
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<_> = builtin_keyframes().iter().map(|k| k.name).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_injection_happens_once() {
        let mut calls = 0;
        let mut injected = String::new();

        let first = ensure_keyframes_injected(|css| {
            calls += 1;
            injected = css.to_string();
        });
        let second = ensure_keyframes_injected(|_| calls += 1);

        // Another test in this process may have injected first.
        assert!(!second);
        assert!(calls <= 1);
        assert!(keyframes_injected());
        if first {
            assert!(injected.contains(animation::SPIN));
        }
    }
}
