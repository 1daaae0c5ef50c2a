use std::time::Duration;

use leptos::prelude::*;
use tracing::warn;

use crate::state::use_storefront;

const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// Short confirmation shown after booking, when notifications are on.
///
/// Each new message restarts the timer, so a message never disappears early
/// because of the timer armed for the one before it.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_storefront().toast;
    let timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let next = if toast.get().is_some() {
            set_timeout_with_handle(move || toast.set(None), TOAST_DURATION)
                .map_err(|e| warn!("Could not schedule toast dismissal: {:?}", e))
                .ok()
        } else {
            None
        };
        replace_timer(timer, next, |handle| handle.clear());
    });

    on_cleanup(move || replace_timer(timer, None, |handle| handle.clear()));

    view! { {move || toast.get().map(|message| view! { <div class="toast">{message}</div> })} }
}

/// Store `next` as the pending timer, cancelling whichever one it replaces.
fn replace_timer<H>(slot: StoredValue<Option<H>>, next: Option<H>, clear: impl FnOnce(H))
where
    H: Send + Sync + 'static,
{
    let previous = slot.try_update_value(|pending| std::mem::replace(pending, next)).flatten();
    if let Some(handle) = previous {
        clear(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_timer_cancels_previous() {
        let owner = Owner::new();
        owner.with(|| {
            let slot = StoredValue::new(None::<u32>);
            let mut cleared = Vec::new();

            replace_timer(slot, Some(1), |h| cleared.push(h));
            assert!(cleared.is_empty());

            replace_timer(slot, Some(2), |h| cleared.push(h));
            assert_eq!(cleared, vec![1]);

            // Unmount cancels the pending one and leaves nothing armed
            replace_timer(slot, None, |h| cleared.push(h));
            assert_eq!(cleared, vec![1, 2]);
            assert_eq!(slot.get_value(), None);

            replace_timer(slot, None, |h| cleared.push(h));
            assert_eq!(cleared, vec![1, 2]);
        });
    }
}
