//! Schema traversal.

use gqlts_schema::{Schema, is_reserved};
use tracing::trace;

use crate::{GenerateContext, Result};

/// Render every non-reserved type of `schema` in declaration order and
/// concatenate the results.
pub(crate) fn walk(schema: &Schema, ctx: &GenerateContext<'_>) -> Result<String> {
    let mut content = String::new();

    for (name, def) in schema.iter() {
        if is_reserved(name) {
            trace!(type_name = name, "skipping reserved type");
            continue;
        }

        trace!(type_name = name, kind = %def.kind(), "generating type");
        content.push_str(&ctx.definition(def)?);
    }

    Ok(content)
}
