//! Warnings for operations that have no meaning for a geometry type

/// Log that `operation` has no meaning for geometries of `shape`
///
/// `target` is the log target, usually the geometry type name.
pub(crate) fn not_applicable(target: &'static str, shape: &str, operation: &str) {
    log::warn!(
        target: target,
        "This method ({operation}) has no meaning for this type of geometry ({shape})."
    );
}
