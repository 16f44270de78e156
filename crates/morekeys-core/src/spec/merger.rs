// Morekeys Additional Spec Merger
// Replaces '%' placeholder specs in a template with additional specs
// supplied at build time

use crate::spec::splitter::filter_out_empty;
use crate::spec::ADDITIONAL_SPEC_MARKER;

/// Merge additional key specs into a template spec list.
///
/// Each `%` spec in the template is replaced by the next unused additional
/// spec, in order. A `%` with no additional spec left is dropped. When the
/// template contains no `%` at all, the additional specs are prepended in
/// front of it; when there are more additional specs than `%` markers, the
/// unused rest is appended at the tail. Empty entries are filtered from both
/// inputs first.
///
/// Returns None when the merged list would be empty.
pub fn insert_additional_specs(
    specs: Option<&[String]>,
    additional: Option<&[String]>,
) -> Option<Vec<String>> {
    let specs = filter_out_empty(specs);
    let additional = filter_out_empty(additional);
    let mut merged = Vec::with_capacity(specs.len() + additional.len());
    let mut additional_index = 0;
    for spec in &specs {
        if spec.as_str() == ADDITIONAL_SPEC_MARKER {
            if additional_index < additional.len() {
                // Replace the marker with the next unused additional spec.
                merged.push(additional[additional_index].clone());
                additional_index += 1;
            }
            // An exhausted marker is dropped, not kept literally.
        } else {
            merged.push(spec.clone());
        }
    }
    if additional_index == 0 && !additional.is_empty() {
        // No marker was present. The additional specs go in front.
        let mut with_head = additional;
        with_head.append(&mut merged);
        merged = with_head;
    } else if additional_index < additional.len() {
        // Fewer markers than additional specs. The unused rest goes at the
        // tail.
        merged.extend_from_slice(&additional[additional_index..]);
    }
    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}
