mod components;
mod game;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger initialized twice");
    log::info!("whack starting");
    yew::start_app::<components::app::App>();
}
