use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

type ChangeListener = (MediaQueryList, Closure<dyn Fn(MediaQueryListEvent)>);

/// Reactive `window.matchMedia(query).matches`. The `change` listener is detached when the
/// calling view is disposed.
pub fn use_media_query(query: &str) -> ReadSignal<bool> {
    let (matches, set_matches) = signal(false);

    let Some(list) = web_sys::window().and_then(|window| window.match_media(query).ok().flatten()) else {
        tracing::warn!(query, "matchMedia is unavailable; assuming narrow viewport");
        return matches;
    };
    set_matches.set(list.matches());

    let on_change = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
        let _ = set_matches.try_set(ev.matches());
    });
    list.set_onchange(Some(on_change.as_ref().unchecked_ref()));

    let listener = StoredValue::new_local(Some::<ChangeListener>((list, on_change)));
    on_cleanup(move || {
        let _ = listener.try_update_value(|slot| {
            if let Some((list, on_change)) = slot.take() {
                list.set_onchange(None);
                drop(on_change);
            }
        });
    });

    matches
}
