use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of the block that has to be on screen before it is revealed.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Rises 20px into place while fading in.
    #[default]
    FadeIn,
    /// Grows from 90% scale while fading in.
    ScaleIn,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::FadeIn => "reveal-fade",
            Variant::ScaleIn => "reveal-scale",
        }
    }
}

/// Trigger-once latch: once a block has been seen it stays revealed.
pub fn reveal(revealed: bool, intersecting: bool) -> bool {
    revealed || intersecting
}

pub fn reveal_classes(variant: Variant, revealed: bool) -> Classes {
    classes!("reveal", variant.class(), revealed.then_some("is-visible"))
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = observe_until_visible(&node, revealed.setter());
                move || {
                    // The closure has to outlive the observer, so both are dropped here.
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(reveal_classes(props.variant, *revealed), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

fn observe_until_visible(
    node: &NodeRef,
    on_reveal: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = node.cast::<Element>()?;

    let fallback = on_reveal.clone();
    let mut seen = false;
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            seen = reveal(seen, intersecting);
            if seen {
                on_reveal.set(true);
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable, showing section immediately: {:?}", e);
            fallback.set(true);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn stays_revealed_after_leaving_viewport() {
        let mut revealed = false;
        revealed = reveal(revealed, false);
        assert!(!revealed);
        revealed = reveal(revealed, true);
        assert!(revealed);
        revealed = reveal(revealed, false);
        assert!(revealed);
        revealed = reveal(revealed, true);
        assert!(revealed);
    }

    #[test]
    fn visible_class_only_after_reveal() {
        let hidden = reveal_classes(Variant::FadeIn, false);
        assert!(hidden.contains("reveal"));
        assert!(hidden.contains("reveal-fade"));
        assert!(!hidden.contains("is-visible"));

        let shown = reveal_classes(Variant::ScaleIn, true);
        assert!(shown.contains("reveal-scale"));
        assert!(shown.contains("is-visible"));
    }

    #[function_component(Wrapped)]
    fn wrapped() -> Html {
        html! {
            <AnimatedSection variant={Variant::ScaleIn}>
                <p>{"payload"}</p>
            </AnimatedSection>
        }
    }

    #[tokio::test]
    async fn renders_hidden_before_entering_viewport() {
        let rendered = ServerRenderer::<Wrapped>::new().render().await;
        assert!(rendered.contains("reveal-scale"));
        assert!(rendered.contains("payload"));
        assert!(!rendered.contains("is-visible"));
    }
}
