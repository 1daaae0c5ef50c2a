use wellness_storefront::app::App;
use wellness_storefront::logging;

fn main() {
    logging::install_panic_hook();
    logging::init();
    leptos::mount::mount_to_body(App);
}
