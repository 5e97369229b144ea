use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", sixdot_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        sixdot_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: timing.debounce_ms={}, indicator.show_pending={}, feedback.enabled={}",
        s.timing.debounce_ms, s.indicator.show_pending, s.feedback.enabled
    );
}
