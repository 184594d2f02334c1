//! Canonical attribute ordering.
use crate::namespace::{ANDROID, APP, TOOLS};
use crate::token::Attribute;
use std::cmp::Ordering;

/// Android attributes that always lead their group, in this order.
const ANDROID_PRIORITY: [&str; 3] = ["id", "layout_width", "layout_height"];

/// The primary sort key of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NamespaceClass {
    Declaration,
    Android,
    App,
    Tools,
    Other,
    Unqualified,
}

impl NamespaceClass {
    fn of(attr: &Attribute) -> Self {
        if attr.is_namespace_declaration() {
            return NamespaceClass::Declaration;
        }
        match attr.name.namespace.as_deref() {
            None => NamespaceClass::Unqualified,
            Some(ANDROID) => NamespaceClass::Android,
            Some(APP) => NamespaceClass::App,
            Some(TOOLS) => NamespaceClass::Tools,
            Some(_) => NamespaceClass::Other,
        }
    }
}

fn android_rank(local: &str) -> usize {
    ANDROID_PRIORITY
        .iter()
        .position(|pinned| *pinned == local)
        .unwrap_or(ANDROID_PRIORITY.len())
}

/// Compares two attributes that belong to the same namespace class.
fn compare_within(class: NamespaceClass, a: &Attribute, b: &Attribute) -> Ordering {
    match class {
        NamespaceClass::Declaration => {
            let (a_prefix, b_prefix) = (a.declared_prefix(), b.declared_prefix());
            (a_prefix != "android")
                .cmp(&(b_prefix != "android"))
                .then_with(|| a_prefix.cmp(b_prefix))
        }
        NamespaceClass::Android => android_rank(&a.name.local)
            .cmp(&android_rank(&b.name.local))
            .then_with(|| a.name.local.cmp(&b.name.local)),
        NamespaceClass::Other => a
            .name
            .namespace
            .cmp(&b.name.namespace)
            .then_with(|| a.name.local.cmp(&b.name.local)),
        NamespaceClass::App | NamespaceClass::Tools | NamespaceClass::Unqualified => {
            a.name.local.cmp(&b.name.local)
        }
    }
}

/// Total order over attributes: namespace class, then name, then value.
pub fn compare_attributes(a: &Attribute, b: &Attribute) -> Ordering {
    let class = NamespaceClass::of(a);
    class
        .cmp(&NamespaceClass::of(b))
        .then_with(|| compare_within(class, a, b))
        .then_with(|| a.value.cmp(&b.value))
}

/// Returns the attributes of one tag in canonical order:
///
///   - `xmlns:android`
///   - `xmlns:*` (alphabetic)
///   - `android:id`, `android:layout_width`, `android:layout_height`
///   - `android:*` (alphabetic)
///   - `app:*` (alphabetic)
///   - `tools:*` (alphabetic)
///   - attributes in any other namespace, grouped by namespace
///   - unprefixed attributes such as `style` (alphabetic)
pub fn sort_attributes(attributes: &[Attribute]) -> Vec<&Attribute> {
    let mut sorted: Vec<&Attribute> = attributes.iter().collect();
    sorted.sort_by(|a, b| compare_attributes(a, b));
    sorted
}
