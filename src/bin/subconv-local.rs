//! Offline conversion: `test.yaml` + `mixin.yaml` → `new_text.yaml` in the working directory.

use std::path::Path;

use subconv::config::MixinConfig;
use subconv::observability::logging;
use subconv::offline::convert_file;

const INPUT: &str = "test.yaml";
const OUTPUT: &str = "new_text.yaml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    let mixin = MixinConfig::default();
    convert_file(Path::new(INPUT), Path::new(&mixin.path), Path::new(OUTPUT))?;
    Ok(())
}
