#![no_main]

use libfuzzer_sys::fuzz_target;
use serverlessui::domain::entities::BuildContext;
use serverlessui::domain::value_objects::BuildId;
use serverlessui::TopologyCompiler;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Arbitrary entry lists compile or fail cleanly
        let entries: Vec<&str> = content.split('\n').collect();
        let ctx = BuildContext::preview(BuildId::from_u32(0)).with_api_entries(entries);
        let _ = TopologyCompiler::compile(&ctx);
    }
});
