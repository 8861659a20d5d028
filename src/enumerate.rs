use std::collections::BTreeSet;

use crate::classpath::ClasspathRoot;
use crate::error::Result;

pub const CLASS_SUFFIX: &str = ".class";

// Compiler-generated and binary-nested classes carry this marker.
const NESTED_MARKER: char = '$';

// The shared supertype of every enum; never interesting on its own.
const SENTINEL_SUPERTYPE: &str = "java.lang.Enum";

/// Recursively discovers every class under `prefix`, returning the set of
/// fully-qualified dotted names. Resources ending in `.class` become class
/// names; everything else is descended into as a sub-package. Nested classes
/// and `java.lang.Enum` are skipped.
///
/// `on_class` fires once per accepted class, at discovery time; the driver
/// uses it to echo progress in verbose mode. Any listing failure aborts the
/// whole enumeration.
pub fn enumerate_classes(
    root: &dyn ClasspathRoot,
    prefix: &str,
    on_class: &mut dyn FnMut(&str),
) -> Result<BTreeSet<String>> {
    let mut classes = BTreeSet::new();
    collect(root, prefix, &mut classes, on_class)?;
    Ok(classes)
}

fn collect(
    root: &dyn ClasspathRoot,
    prefix: &str,
    classes: &mut BTreeSet<String>,
    on_class: &mut dyn FnMut(&str),
) -> Result<()> {
    for resource in root.list_resources(prefix)? {
        if let Some(stem) = resource.strip_suffix(CLASS_SUFFIX) {
            let class_name = format!("{prefix}{stem}").replace('/', ".");
            if class_name.contains(NESTED_MARKER) || class_name == SENTINEL_SUPERTYPE {
                continue;
            }
            if classes.insert(class_name.clone()) {
                on_class(&class_name);
            }
        } else {
            collect(root, &format!("{prefix}{resource}/"), classes, on_class)?;
        }
    }
    Ok(())
}
