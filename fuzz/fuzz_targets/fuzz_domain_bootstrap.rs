#![no_main]

use libfuzzer_sys::fuzz_target;
use serverlessui::domain::services::DomainBootstrapPlanner;

fuzz_target!(|data: &[u8]| {
    if let Ok(domain) = std::str::from_utf8(data) {
        let _ = DomainBootstrapPlanner::plan(domain);
    }
});
