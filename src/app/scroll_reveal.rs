use leptos::prelude::*;

use crate::reveal::{RevealOptions, RevealedSections, Section};

/// Reactive handle on the page's reveal state. Cheap to copy into views.
#[derive(Debug, Clone, Copy)]
pub struct ScrollReveal {
    mounted: ReadSignal<bool>,
    revealed: RwSignal<RevealedSections>,
}

impl ScrollReveal {
    /// `false` during server render and hydration, `true` once mounted.
    pub fn mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.with(|r| r.contains(section))
    }
}

pub fn use_scroll_reveal() -> ScrollReveal {
    use_scroll_reveal_with_options(RevealOptions::default())
}

/// Watches every `[data-scroll-section]` element present at mount with one
/// intersection observer and records the ids of those that scroll into view.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_scroll_reveal_with_options(options: RevealOptions) -> ScrollReveal {
    let (mounted, set_mounted) = signal(false);
    let revealed = RwSignal::new(RevealedSections::new());

    // effects only run in the browser, after the sections are in the DOM
    Effect::new(move |_| {
        set_mounted.set(true);
        #[cfg(feature = "hydrate")]
        observer::observe_sections(&options, revealed);
    });

    ScrollReveal { mounted, revealed }
}

#[cfg(feature = "hydrate")]
mod observer {
    use js_sys::Array;
    use leptos::prelude::*;
    use leptos_use::js;
    use send_wrapper::SendWrapper;
    use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::reveal::{
        plan_observer, ObserverPlan, RevealOptions, RevealedSections, SCROLL_SECTION_SELECTOR,
    };

    type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    fn section_elements() -> Vec<Option<Element>> {
        let Ok(nodes) = document().query_selector_all(SCROLL_SECTION_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .map(|i| nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()))
            .collect()
    }

    fn reveal_all(revealed: RwSignal<RevealedSections>) {
        revealed.update(|r| {
            r.reveal_all();
        });
    }

    /// Captures the section elements once and attaches a single observer to
    /// them. The observer is disconnected when the owning effect is disposed.
    pub fn observe_sections(options: &RevealOptions, revealed: RwSignal<RevealedSections>) {
        let supported = js!("IntersectionObserver" in &window());
        let targets = match plan_observer(supported, section_elements()) {
            ObserverPlan::Observe(targets) => targets,
            ObserverPlan::RevealAll => {
                log::warn!("IntersectionObserver unsupported, revealing all sections");
                reveal_all(revealed);
                return;
            }
            ObserverPlan::Idle => {
                log::warn!("no {SCROLL_SECTION_SELECTOR} elements to observe");
                return;
            }
        };

        let callback: EntriesCallback =
            Closure::new(move |entries: Array, _: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target().id(), entry.is_intersecting()));
                revealed.maybe_update(|r| {
                    let newly = r.record(entries);
                    if newly > 0 {
                        log::debug!("revealed sections: {:?}", r.iter().collect::<Vec<_>>());
                    }
                    newly > 0
                });
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => observer,
                Err(err) => {
                    log::error!("failed to create IntersectionObserver: {err:?}");
                    reveal_all(revealed);
                    return;
                }
            };
        for target in &targets {
            observer.observe(target);
        }
        log::debug!("observing {} scroll sections", targets.len());

        // the callback must outlive the observer, drop both together
        let handle = SendWrapper::new((observer, callback));
        on_cleanup(move || {
            let (observer, _callback) = handle.take();
            observer.disconnect();
        });
    }
}
