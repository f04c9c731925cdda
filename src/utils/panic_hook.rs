use leptos::logging::log;
use std::panic;

/// Chains a hook that explains panics caused by touching reactive state
/// after its component was unmounted.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal or stored value was used after its component was unmounted.");
            log!("[PANIC] Late responses from reloads, polls or submits should go through StateCell.");
        }
    }));
}

/// Forwards panics to the browser console, then adds the hook above.
pub fn init() {
    console_error_panic_hook::set_once();
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Panic hooks installed");
}
