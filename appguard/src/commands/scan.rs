//! `appguard scan` — list watched applications installed on this host.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use appguard_core::guard_println;

use super::build_detector;

pub fn run(config_path: Option<&Path>, watch: bool, interval_ms: u64) -> Result<()> {
    let (detector, _config) = build_detector(config_path)?;

    if !watch {
        print_result(&detector.installed_apps());
        return Ok(());
    }

    // Scheduling lives here on the caller side; the detector is purely
    // pull-based. Results are reprinted only when they change.
    let interval = Duration::from_millis(interval_ms);
    let mut last: Option<Vec<String>> = None;
    loop {
        let apps = detector.installed_apps();
        if last.as_ref() != Some(&apps) {
            print_result(&apps);
            last = Some(apps);
        }
        thread::sleep(interval);
    }
}

fn print_result(apps: &[String]) {
    if apps.is_empty() {
        guard_println!("No watched applications detected");
    } else {
        for app in apps {
            guard_println!("{}", app);
        }
    }
}
