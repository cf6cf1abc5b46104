use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::endpoints::Endpoint;
use crate::error::{ComposeError, Result};
use crate::groups::EndpointGroup;
use crate::router::RouteBuilder;

/// Check a descriptor set before anything is mapped.
///
/// Fails with [`ComposeError::DuplicateGroupName`] when two or more groups
/// share a name, otherwise with [`ComposeError::UnknownGroupReference`] when
/// an endpoint names a group that is not registered. Each offending name is
/// reported once, in the order it was first seen.
pub fn validate<R: RouteBuilder>(
    groups: &[Arc<dyn EndpointGroup<R>>],
    endpoints: &[Arc<dyn Endpoint<R>>],
) -> Result<()> {
    let duplicates = duplicate_group_names(groups);
    if !duplicates.is_empty() {
        return Err(ComposeError::DuplicateGroupName(duplicates));
    }

    let missing = missing_group_references(groups, endpoints);
    if !missing.is_empty() {
        return Err(ComposeError::UnknownGroupReference(missing));
    }

    Ok(())
}

pub(crate) fn duplicate_group_names<R: RouteBuilder>(groups: &[Arc<dyn EndpointGroup<R>>]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for group in groups {
        let count = seen.entry(group.name()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(group.name().to_string());
        }
    }

    duplicates
}

fn missing_group_references<R: RouteBuilder>(
    groups: &[Arc<dyn EndpointGroup<R>>],
    endpoints: &[Arc<dyn Endpoint<R>>],
) -> Vec<String> {
    let known: HashSet<&str> = groups.iter().map(|g| g.name()).collect();
    let mut reported: HashSet<&str> = HashSet::new();
    let mut missing = Vec::new();

    for name in endpoints.iter().filter_map(|e| e.group_name()) {
        if !known.contains(name) && reported.insert(name) {
            missing.push(name.to_string());
        }
    }

    missing
}
