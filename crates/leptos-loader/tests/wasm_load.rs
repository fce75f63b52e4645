#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos_loader::Loader;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn load_settles_into_ready() {
    let loader = Loader::<u32>::new();
    loader.load(async { Ok::<_, String>(7) });

    assert!(loader.with(|s| s.is_loading()));
    TimeoutFuture::new(0).await;
    assert_eq!(loader.with(|s| s.ready().copied()), Some(7));
}

#[wasm_bindgen_test]
async fn slow_first_request_is_superseded() {
    let loader = Loader::<&str>::new();
    loader.load(async {
        TimeoutFuture::new(30).await;
        Ok::<_, String>("slow")
    });
    loader.load(async { Ok::<_, String>("fast") });

    TimeoutFuture::new(60).await;
    assert_eq!(loader.with(|s| s.ready().copied()), Some("fast"));
}

#[wasm_bindgen_test]
async fn load_settles_into_failed() {
    let loader = Loader::<u32>::new();
    loader.load(async { Err::<u32, _>("offline") });

    TimeoutFuture::new(0).await;
    assert_eq!(
        loader.with(|s| s.error().map(str::to_owned)),
        Some("offline".into())
    );
}
