//! Dependency inversion: genealogy research.
//!
//! `Research` (high level) used to reach into the relation tuples of
//! `Relationships` (low level). Now both depend on `RelationshipBrowser`,
//! a one-query abstraction, and the storage layout can change freely.

use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

/// The only query research needs
pub trait RelationshipBrowser {
    /// Children of every person called `name`, in the order they were added
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}

/// Low-level store of `(from, relationship, to)` triples
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the relation in both directions
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn add_siblings(&mut self, a: &Person, b: &Person) {
        self.relations.push((a.clone(), Relationship::Sibling, b.clone()));
        self.relations.push((b.clone(), Relationship::Sibling, a.clone()));
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|(parent, relation, _)| parent.name == name && *relation == Relationship::Parent)
            .map(|(_, _, child)| child)
            .collect()
    }
}

/// High-level module: knows the browser trait, not the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Research {
    findings: Vec<String>,
}

impl Research {
    #[instrument(skip(browser))]
    pub fn new(browser: &impl RelationshipBrowser, name: &str) -> Self {
        let findings: Vec<String> = browser
            .find_all_children_of(name)
            .into_iter()
            .map(|child| format!("{} has a child named {}", name, child.name))
            .collect();
        debug!("Research found {} children", findings.len());
        Self { findings }
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A browser with a completely different layout
    struct FixedBrowser {
        children: Vec<Person>,
    }

    impl RelationshipBrowser for FixedBrowser {
        fn find_all_children_of(&self, _name: &str) -> Vec<&Person> {
            self.children.iter().collect()
        }
    }

    fn family() -> Relationships {
        let john = Person::new("John");
        let mut rels = Relationships::new();
        rels.add_parent_and_child(&john, &Person::new("Chris"));
        rels.add_parent_and_child(&john, &Person::new("Matt"));
        rels
    }

    #[test]
    fn test_parent_and_child_recorded_both_ways() {
        assert_eq!(family().len(), 4);
    }

    #[test]
    fn test_find_children_in_insertion_order() {
        let rels = family();
        let names: Vec<&str> = rels
            .find_all_children_of("John")
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["Chris", "Matt"]);
        assert!(rels.find_all_children_of("Chris").is_empty());
    }

    #[test]
    fn test_siblings_are_not_children() {
        let mut rels = family();
        rels.add_siblings(&Person::new("Chris"), &Person::new("Matt"));

        assert_eq!(rels.find_all_children_of("John").len(), 2);
        assert!(rels.find_all_children_of("Matt").is_empty());
    }

    #[test]
    fn test_research() {
        let research = Research::new(&family(), "John");
        assert_eq!(
            research.findings(),
            &[
                "John has a child named Chris".to_string(),
                "John has a child named Matt".to_string(),
            ]
        );
    }

    #[test]
    fn test_research_with_other_browser() {
        let browser = FixedBrowser {
            children: vec![Person::new("Ada")],
        };
        let research = Research::new(&browser, "Byron");
        assert_eq!(research.findings(), &["Byron has a child named Ada".to_string()]);
    }
}
