//! Class diagrams: modules with their public and private functions.

use crate::identifier::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// UML marker prefixed to a member.
    pub fn marker(self) -> char {
        match self {
            Self::Public => '+',
            Self::Private => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMember {
    visibility: Visibility,
    signature: String,
}

impl ClassMember {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// One class (or module) box.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: Id,
    members: Vec<ClassMember>,
}

impl Class {
    pub fn new(name: &str) -> Self {
        Self {
            name: Id::new(name),
            members: Vec::new(),
        }
    }

    pub fn public(self, signature: &str) -> Self {
        self.member(Visibility::Public, signature)
    }

    pub fn private(self, signature: &str) -> Self {
        self.member(Visibility::Private, signature)
    }

    fn member(mut self, visibility: Visibility, signature: &str) -> Self {
        self.members.push(ClassMember {
            visibility,
            signature: signature.to_string(),
        });
        self
    }

    pub fn name(&self) -> Id {
        self.name
    }

    pub fn members(&self) -> &[ClassMember] {
        &self.members
    }
}

/// A labelled association between two classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRelation {
    from: Id,
    to: Id,
    label: Option<String>,
}

impl ClassRelation {
    pub fn from(&self) -> Id {
        self.from
    }

    pub fn to(&self) -> Id {
        self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// # Examples
///
/// ```
/// use livevue_diagrams_core::semantic::{Class, ClassDiagram};
///
/// let diagram = ClassDiagram::new()
///     .class(Class::new("LiveVue").public("vue(assigns)").private("json(data)"))
///     .class(Class::new("LiveVue_SSR").public("render(name, props, slots)"))
///     .relation("LiveVue", "LiveVue_SSR", "uses");
///
/// assert_eq!(diagram.classes()[0].members().len(), 2);
/// assert_eq!(diagram.relations()[0].label(), Some("uses"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDiagram {
    classes: Vec<Class>,
    relations: Vec<ClassRelation>,
}

impl ClassDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn relation(mut self, from: &str, to: &str, label: &str) -> Self {
        self.relations.push(ClassRelation {
            from: Id::new(from),
            to: Id::new(to),
            label: Some(label.to_string()),
        });
        self
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn relations(&self) -> &[ClassRelation] {
        &self.relations
    }
}
