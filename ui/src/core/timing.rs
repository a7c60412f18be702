//! Timers and cooperative yielding for the single-threaded UI loop.

/// Sleep for `ms` milliseconds without blocking the UI thread.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Give the event loop a chance to run other work (input, paint) before continuing.
pub async fn yield_now() {
    #[cfg(target_arch = "wasm32")]
    {
        // A zero-delay timeout returns to the browser's macrotask queue so it can paint.
        gloo_timers::future::TimeoutFuture::new(0).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yield_now_completes_on_plain_executor() {
        futures::executor::block_on(async {
            yield_now().await;
            yield_now().await;
        });
    }

    #[test]
    fn yield_now_lets_sibling_tasks_run() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let local = tokio::task::LocalSet::new();
        local.block_on(&rt, async {
            let flag = std::rc::Rc::new(std::cell::Cell::new(false));
            let seen = flag.clone();
            tokio::task::spawn_local(async move { seen.set(true) });
            yield_now().await;
            assert!(flag.get());
        });
    }
}
