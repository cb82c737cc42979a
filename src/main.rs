//! Binary entry point: mount the console into the document body.

use agent_console::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
