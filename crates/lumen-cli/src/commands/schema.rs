use lumen_core::StructuralModel;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `lumen schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(StructuralModel);
    output(&schema, flags.format, true)
}
