#![cfg_attr(windows, windows_subsystem = "windows")]

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::error;
use tracing_subscriber::EnvFilter;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Last-resort boundary around the whole UI: nothing inside the core
    // is expected to panic, but if something does, offer a full restart
    // instead of vanishing with the user's document open.
    loop {
        match catch_unwind(AssertUnwindSafe(mark_pad::run)) {
            Ok(()) => break,
            Err(_) => {
                error!("UI loop panicked");
                let choice = fltk::dialog::choice2_default(
                    "Something went wrong and the editor had to stop.\nYour last auto-saved state is on disk.",
                    "Restart",
                    "Quit",
                    "",
                );
                if choice != Some(0) {
                    break;
                }
            }
        }
    }
}
