//! Read-only views over an assembled model.
//!
//! These are conveniences for presentation layers: the package hierarchy as a
//! tree, connectors touching an element, and diagrams carrying a payload.

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::{Connector, Diagram, Model, Package};

/// A package with its resolved child packages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackageNode {
    pub id: String,
    pub name: String,
    /// Number of member elements.
    pub element_count: usize,
    pub children: Vec<PackageNode>,
}

impl Model {
    /// Packages with no parent, or whose parent id does not resolve.
    pub fn root_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values().filter(|pkg| {
            pkg.parent_id
                .as_deref()
                .is_none_or(|parent| parent == pkg.id || !self.packages.contains_key(parent))
        })
    }

    /// The package hierarchy rooted at every root package.
    ///
    /// A package reachable twice (cyclic parent ids) is expanded once.
    pub fn package_tree(&self) -> Vec<PackageNode> {
        let mut visited = FxHashSet::default();
        self.root_packages()
            .map(|pkg| self.package_node(pkg, &mut visited))
            .collect()
    }

    fn package_node<'a>(&'a self, pkg: &'a Package, visited: &mut FxHashSet<&'a str>) -> PackageNode {
        visited.insert(pkg.id.as_str());
        let mut children = Vec::new();
        for child_id in &pkg.sub_packages {
            if visited.contains(child_id.as_str()) {
                continue;
            }
            if let Some(child) = self.packages.get(child_id) {
                children.push(self.package_node(child, visited));
            }
        }
        PackageNode {
            id: pkg.id.clone(),
            name: pkg.name.clone(),
            element_count: pkg.elements.len(),
            children,
        }
    }

    /// Connectors with `element_id` as source or target.
    pub fn connectors_for<'a>(&'a self, element_id: &'a str) -> impl Iterator<Item = &'a Connector> {
        self.connectors.values().filter(move |c| {
            c.source_id.as_deref() == Some(element_id) || c.target_id.as_deref() == Some(element_id)
        })
    }

    /// Diagrams with a detected image payload.
    pub fn diagrams_with_images(&self) -> impl Iterator<Item = &Diagram> {
        self.diagrams.values().filter(|d| d.has_image)
    }
}
