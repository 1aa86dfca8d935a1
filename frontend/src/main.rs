use crate::app::App;

mod app;
mod components;
mod context;
mod helpers;
mod http;
mod sheet;
mod storage;

/// Debug builds log at `debug`, release builds at `info`.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn main() {
    _ = console_log::init_with_level(log_level());
    log::info!("volunteer hub starting");

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(log_level(), expected);
        assert!(log_level() >= log::Level::Info);
    }
}
