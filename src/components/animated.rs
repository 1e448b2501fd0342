use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Trigger once 15% of the element is inside the viewport, with the bottom
// detection edge pulled up by 50px so the transition starts just early.
const ENTER_THRESHOLD: f64 = 0.15;
const ENTER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

type EnterCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

/// One-shot viewport watcher for a single element. Fires `on_visible` at most
/// once, detaches itself on the first hit, and `stop()` covers the teardown
/// path for elements that never came into view.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _on_enter: EnterCallback,
}

impl VisibilityObserver {
    pub fn start(target: &Element, on_visible: Callback<()>) -> Option<VisibilityObserver> {
        let on_enter: EnterCallback = Closure::wrap(Box::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    // Detach before notifying so no further entries are delivered.
                    observer.disconnect();
                    on_visible.emit(());
                }
            },
        ));

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ENTER_THRESHOLD));
        options.set_root_margin(ENTER_ROOT_MARGIN);

        let observer =
            match IntersectionObserver::new_with_options(on_enter.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("intersection observer unavailable: {:?}", err);
                    return None;
                }
            };
        observer.observe(target);

        Some(VisibilityObserver {
            observer,
            _on_enter: on_enter,
        })
    }

    pub fn stop(&self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Wraps its children in a `fade-up` container whose entrance transition runs
/// the first time the wrapper scrolls into view. The flag only ever goes
/// false -> true; scrolling back out never hides the content again.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = {
                    let visible = visible.clone();
                    Callback::from(move |_| visible.set(true))
                };
                let handle = node
                    .cast::<Element>()
                    .and_then(|el| VisibilityObserver::start(&el, on_visible));
                if handle.is_none() {
                    // No observer, no animation; show the content right away.
                    visible.set(true);
                }
                move || {
                    if let Some(handle) = handle {
                        handle.stop();
                    }
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("fade-up", (*visible).then_some("visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    fn mount_div(style: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let div = document.create_element("div").unwrap();
        div.set_attribute("style", style).unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0u32));
        let callback = {
            let fired = fired.clone();
            Callback::from(move |_| fired.set(fired.get() + 1))
        };
        (callback, fired)
    }

    #[wasm_bindgen_test]
    async fn element_in_view_fires_exactly_once() {
        let div = mount_div("position: absolute; top: 0; width: 100px; height: 100px;");
        let (callback, fired) = counting_callback();

        let handle = VisibilityObserver::start(&div, callback).expect("observer starts");
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 1);

        // Already disconnected by the first hit; nothing further arrives.
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 1);

        handle.stop();
        div.remove();
    }

    #[wasm_bindgen_test]
    async fn stop_before_trigger_means_no_callback() {
        let div = mount_div("position: absolute; top: 0; width: 100px; height: 100px;");
        let (callback, fired) = counting_callback();

        let handle = VisibilityObserver::start(&div, callback).expect("observer starts");
        handle.stop();
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 0);

        div.remove();
    }

    #[wasm_bindgen_test]
    async fn element_far_below_the_viewport_does_not_fire() {
        let div = mount_div("position: absolute; top: 100000px; width: 100px; height: 100px;");
        let (callback, fired) = counting_callback();

        let handle = VisibilityObserver::start(&div, callback).expect("observer starts");
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 0);

        handle.stop();
        div.remove();
    }
}
