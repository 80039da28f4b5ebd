use chrono::Timelike;

use mondaine_engine::logging::{init_logging, LoggingConfig};
use mondaine_ui::Application;

fn main() {
    init_logging(LoggingConfig::default());

    log::info!("starting mondaine studio");

    let mut last_minute = None;

    Application::new()
        .title("Mondaine")
        .size(300.0, 300.0)
        .on_update_time(move |t| {
            log::trace!("tick {}", t.format("%H:%M:%S%.3f"));

            let minute = (t.hour(), t.minute());
            if last_minute != Some(minute) {
                last_minute = Some(minute);
                log::info!("{}", t.format("%H:%M"));
            }
        })
        .run();
}
