use calibrate_app::BootConfig;

fn main() {
    browser_panic_hook::set_once_default();

    let config = BootConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    calibrate_app::start(config);
}
