use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::RevealOptions;

// Browsers report a ratio a hair under the configured threshold when an
// element crosses it.
const RATIO_TOLERANCE: f64 = 0.001;

/// One-shot latch: once revealed, a wrapper stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    pub fn observe(self, sighting: Sighting, threshold: f64) -> Self {
        match self {
            Visibility::Hidden if sighting.qualifies(threshold) => Visibility::Revealed,
            other => other,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Visibility::Revealed
    }

    /// A revealed wrapper never needs another observer.
    pub fn needs_watch(self) -> bool {
        !self.is_revealed()
    }
}

/// A single intersection report for the wrapped element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Sighting {
    // The ratio is relative to the element, so anything taller than
    // 1 / threshold viewports never qualifies. Chapters stay well under that.
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

impl From<&IntersectionObserverEntry> for Sighting {
    fn from(entry: &IntersectionObserverEntry) -> Self {
        Self {
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        }
    }
}

/// Feeds intersection reports through a [`Visibility`] latch and fires
/// `on_first_reveal` exactly once, on the report that flips it.
#[derive(Debug)]
pub struct RevealLatch {
    visibility: Visibility,
    threshold: f64,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            visibility: Visibility::Hidden,
            threshold,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn report(&mut self, sighting: Sighting, on_first_reveal: impl FnOnce()) {
        let next = self.visibility.observe(sighting, self.threshold);
        if next != self.visibility {
            self.visibility = next;
            on_first_reveal();
        }
    }
}

pub fn reveal_classes(visibility: Visibility, extra: Classes) -> Classes {
    let state = match visibility {
        Visibility::Hidden => "reveal-hidden",
        Visibility::Revealed => "reveal-shown",
    };
    classes!("reveal", state, extra)
}

/// Live observer registration for one element. Dropping it disconnects the
/// observer, after which the callback never fires again.
struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    fn start(
        target: &Element,
        options: &RevealOptions,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let threshold = options.threshold;
        let mut latch = RevealLatch::new(threshold);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sighting = Sighting::from(&entry);
                    debug!("intersection report: {:?}", sighting);

                    latch.report(sighting, || {
                        observer.unobserve(&entry.target());
                        on_reveal();
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: RevealOptions,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visibility = use_state(Visibility::default);

    {
        let node = node.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let watch = if !visibility.needs_watch() {
                    debug!("Wrapper already revealed, not watching again");
                    None
                } else {
                    match node.cast::<Element>() {
                        Some(target) => {
                            let reveal = {
                                let visibility = visibility.clone();
                                move || {
                                    info!("Revealing chapter");
                                    visibility.set(Visibility::Revealed);
                                }
                            };
                            match ViewportWatch::start(&target, options, reveal) {
                                Ok(watch) => Some(watch),
                                Err(e) => {
                                    warn!("Intersection observer unavailable, showing content: {:?}", e);
                                    visibility.set(Visibility::Revealed);
                                    None
                                }
                            }
                        }
                        None => {
                            warn!("Reveal wrapper has no element to watch, showing content");
                            visibility.set(Visibility::Revealed);
                            None
                        }
                    }
                };

                move || drop(watch)
            },
            props.options.clone(),
        );
    }

    let style = format!("transition-duration: {}ms;", props.options.duration_ms);

    html! {
        <div ref={node} class={reveal_classes(*visibility, props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(ratio: f64) -> Sighting {
        Sighting { is_intersecting: true, ratio }
    }

    fn gone() -> Sighting {
        Sighting { is_intersecting: false, ratio: 0.0 }
    }

    #[test]
    fn starts_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!Visibility::default().is_revealed());
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = Visibility::Hidden;
        for ratio in [0.0, 0.05, 0.1, 0.19] {
            state = state.observe(seen(ratio), 0.2);
        }
        assert_eq!(state, Visibility::Hidden);
    }

    #[test]
    fn ignores_reports_that_are_not_intersecting() {
        let report = Sighting { is_intersecting: false, ratio: 0.5 };
        assert_eq!(Visibility::Hidden.observe(report, 0.2), Visibility::Hidden);
    }

    #[test]
    fn reveals_at_threshold() {
        assert_eq!(Visibility::Hidden.observe(seen(0.2), 0.2), Visibility::Revealed);
        assert_eq!(Visibility::Hidden.observe(seen(0.9), 0.2), Visibility::Revealed);
    }

    #[test]
    fn tolerates_rounding_just_under_threshold() {
        assert!(seen(0.1999).qualifies(0.2));
        assert!(!seen(0.19).qualifies(0.2));
    }

    #[test]
    fn never_reverts_once_revealed() {
        let state = Visibility::Hidden.observe(seen(0.3), 0.2);
        let state = state.observe(gone(), 0.2);
        let state = state.observe(seen(0.0), 0.2);
        assert_eq!(state, Visibility::Revealed);
    }

    #[test]
    fn latch_fires_once_on_the_first_qualifying_report() {
        let mut latch = RevealLatch::new(0.2);
        let mut unobserved = 0;
        let mut revealed = 0;

        latch.report(seen(0.1), || { unobserved += 1; revealed += 1; });
        assert_eq!(revealed, 0);
        assert_eq!(latch.visibility(), Visibility::Hidden);

        latch.report(seen(0.4), || { unobserved += 1; revealed += 1; });
        assert_eq!((unobserved, revealed), (1, 1));
        assert_eq!(latch.visibility(), Visibility::Revealed);
    }

    #[test]
    fn latch_ignores_reports_after_reveal() {
        let mut latch = RevealLatch::new(0.2);
        let mut calls = 0;

        latch.report(seen(0.5), || calls += 1);
        latch.report(gone(), || calls += 1);
        latch.report(seen(1.0), || calls += 1);
        latch.report(seen(0.3), || calls += 1);

        assert_eq!(calls, 1);
        assert_eq!(latch.visibility(), Visibility::Revealed);
    }

    #[test]
    fn revealed_wrapper_does_not_watch_again() {
        assert!(Visibility::Hidden.needs_watch());
        assert!(!Visibility::Revealed.needs_watch());
    }

    #[test]
    fn ratio_is_relative_to_the_element() {
        // A wrapper ten viewports tall tops out at a 0.1 ratio.
        assert!(!seen(0.1).qualifies(0.2));
        assert!(seen(0.1).qualifies(0.1));
    }

    #[test]
    fn hidden_classes_carry_extra_class() {
        let classes = reveal_classes(Visibility::Hidden, classes!("chapter"));
        assert!(classes.contains("reveal"));
        assert!(classes.contains("reveal-hidden"));
        assert!(classes.contains("chapter"));
        assert!(!classes.contains("reveal-shown"));
    }

    #[test]
    fn revealed_classes_drop_hidden_state() {
        let classes = reveal_classes(Visibility::Revealed, Classes::new());
        assert_eq!(classes.to_string(), "reveal reveal-shown");
    }
}
