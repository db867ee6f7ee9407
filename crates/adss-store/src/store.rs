use std::collections::{BTreeSet, HashMap};

use adss_core::models::labels::{Activity, BiomarkerStatus, ClinicalAction, Diagnosis, Severity};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::taxonomy::{ClassDef, Taxonomy};

/// A class from the taxonomy or an individual created in a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Class { name: String },
    Individual { name: String, class: String },
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::Class { name } | Entity::Individual { name, .. } => name,
        }
    }
}

/// Immutable class registry. Shared freely across requests; anything a
/// request creates lives in its own [`Scope`].
#[derive(Debug)]
pub struct KnowledgeStore {
    version: String,
    classes: Vec<ClassDef>,
    index: HashMap<String, usize>,
}

impl KnowledgeStore {
    /// Build a store, rejecting taxonomies that are inconsistent or cannot
    /// name every label the rule engine emits.
    pub fn load(taxonomy: Taxonomy) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(taxonomy.classes.len());
        for (i, class) in taxonomy.classes.iter().enumerate() {
            if index.insert(class.name.clone(), i).is_some() {
                return Err(StoreError::DuplicateClass(class.name.clone()));
            }
        }

        let store = Self {
            version: taxonomy.version,
            classes: taxonomy.classes,
            index,
        };

        for class in &store.classes {
            if let Some(parent) = &class.parent
                && !store.index.contains_key(parent)
            {
                return Err(StoreError::UnknownParent {
                    class: class.name.clone(),
                    parent: parent.clone(),
                });
            }
        }
        for class in &store.classes {
            store.check_acyclic(&class.name)?;
        }
        for label in engine_labels() {
            if !store.has_class(label) {
                return Err(StoreError::MissingLabel(label.to_string()));
            }
        }

        info!(
            version = %store.version,
            classes = store.class_count(),
            "knowledge store loaded"
        );
        Ok(store)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The class itself followed by its ancestors, nearest first.
    pub fn ancestors(&self, name: &str) -> Result<Vec<&str>, StoreError> {
        let mut chain = Vec::new();
        let mut current = Some(self.class(name)?);
        while let Some(class) = current {
            chain.push(class.name.as_str());
            current = match &class.parent {
                Some(parent) => Some(self.class(parent)?),
                None => None,
            };
        }
        Ok(chain)
    }

    /// First class, in declaration order, whose name matches `pattern`.
    pub fn find_class(&self, pattern: &str) -> Result<Option<Entity>, StoreError> {
        let matcher = wildcard(pattern)?;
        Ok(self
            .classes
            .iter()
            .find(|c| matcher.is_match(&c.name))
            .map(|c| Entity::Class {
                name: c.name.clone(),
            }))
    }

    /// Open an isolated scope for one request.
    pub fn scope(&self) -> Scope<'_> {
        Scope {
            store: self,
            individuals: Vec::new(),
        }
    }

    fn class(&self, name: &str) -> Result<&ClassDef, StoreError> {
        self.index
            .get(name)
            .map(|&i| &self.classes[i])
            .ok_or_else(|| StoreError::UnknownClass(name.to_string()))
    }

    fn check_acyclic(&self, start: &str) -> Result<(), StoreError> {
        let mut current = self.class(start)?;
        for _ in 0..self.classes.len() {
            match &current.parent {
                Some(parent) => current = self.class(parent)?,
                None => return Ok(()),
            }
        }
        Err(StoreError::Cycle(start.to_string()))
    }
}

fn engine_labels() -> impl Iterator<Item = &'static str> {
    Severity::ALL
        .iter()
        .map(|l| l.as_str())
        .chain(BiomarkerStatus::ALL.iter().map(|l| l.as_str()))
        .chain(Diagnosis::ALL.iter().map(|l| l.as_str()))
        .chain(Activity::ALL.iter().map(|l| l.as_str()))
        .chain(ClinicalAction::ALL.iter().map(|l| l.as_str()))
}

/// Compile a `*`-wildcard pattern into an anchored regex.
fn wildcard(pattern: &str) -> Result<Regex, StoreError> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Ok(Regex::new(&format!("^{body}$"))?)
}

#[derive(Debug)]
struct Individual {
    name: String,
    class: String,
    labels: BTreeSet<String>,
}

/// Individuals created during one request. Dropping the scope releases
/// them; nothing leaks into the next request.
pub struct Scope<'a> {
    store: &'a KnowledgeStore,
    individuals: Vec<Individual>,
}

impl Scope<'_> {
    /// Classes are searched before individuals; first match wins.
    pub fn find_class_or_individual(&self, pattern: &str) -> Result<Option<Entity>, StoreError> {
        if let Some(class) = self.store.find_class(pattern)? {
            return Ok(Some(class));
        }
        let matcher = wildcard(pattern)?;
        Ok(self
            .individuals
            .iter()
            .find(|i| matcher.is_match(&i.name))
            .map(|i| Entity::Individual {
                name: i.name.clone(),
                class: i.class.clone(),
            }))
    }

    pub fn create_individual(&mut self, class: &str, name: &str) -> Result<Entity, StoreError> {
        if !self.store.has_class(class) {
            return Err(StoreError::UnknownClass(class.to_string()));
        }
        if self.individuals.iter().any(|i| i.name == name) {
            return Err(StoreError::DuplicateIndividual(name.to_string()));
        }

        self.individuals.push(Individual {
            name: name.to_string(),
            class: class.to_string(),
            labels: BTreeSet::new(),
        });
        debug!(class, name, "individual created");
        Ok(Entity::Individual {
            name: name.to_string(),
            class: class.to_string(),
        })
    }

    pub fn assign_label(&mut self, entity: &Entity, label_class: &str) -> Result<(), StoreError> {
        if !self.store.has_class(label_class) {
            return Err(StoreError::UnknownClass(label_class.to_string()));
        }
        let individual = self.individual_mut(entity)?;
        individual.labels.insert(label_class.to_string());
        Ok(())
    }

    /// For an individual: its class plus every assigned label. For a class:
    /// the class and its ancestors.
    pub fn read_labels(&self, entity: &Entity) -> Result<BTreeSet<String>, StoreError> {
        match entity {
            Entity::Class { name } => Ok(self
                .store
                .ancestors(name)?
                .into_iter()
                .map(str::to_string)
                .collect()),
            Entity::Individual { name, .. } => {
                let individual = self
                    .individuals
                    .iter()
                    .find(|i| &i.name == name)
                    .ok_or_else(|| StoreError::NotAnIndividual(name.clone()))?;
                let mut labels = individual.labels.clone();
                labels.insert(individual.class.clone());
                Ok(labels)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    fn individual_mut(&mut self, entity: &Entity) -> Result<&mut Individual, StoreError> {
        let Entity::Individual { name, .. } = entity else {
            return Err(StoreError::NotAnIndividual(entity.name().to_string()));
        };
        self.individuals
            .iter_mut()
            .find(|i| &i.name == name)
            .ok_or_else(|| StoreError::NotAnIndividual(name.clone()))
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        debug!(individuals = self.individuals.len(), "scope released");
    }
}
