//! Assistant hook settings domain module

mod stop_hook;

pub use stop_hook::{
    has_stop_hook, hook_command, is_own_command, remove_stop_hooks, stop_hook_group,
    upsert_stop_hook, HookChange, HOOK_EVENT, HOOK_TIMEOUT_SECS,
};
