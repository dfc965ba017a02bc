use narwhal::{Particle, Point};
use serde::Serialize;

/// Categorical attribute a split mode groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Which candidate the person backed before (`soutien`).
    Support,
    /// Elected office or ministerial cabinet background (`politique`).
    Office,
    /// Former minister or secretary of state, yes/no (`ministres`).
    Ministry,
    /// Media figure, yes/no (`medias`).
    Media,
}

impl Attribute {
    pub const fn column(self) -> &'static str {
        match self {
            Attribute::Support => "soutien",
            Attribute::Office => "politique",
            Attribute::Ministry => "ministres",
            Attribute::Media => "medias",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories {
    pub support: String,
    pub office: String,
    pub ministry: String,
    pub media: String,
}

impl Categories {
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Support => &self.support,
            Attribute::Office => &self.office,
            Attribute::Ministry => &self.ministry,
            Attribute::Media => &self.media,
        }
    }
}

/// Hover payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub name: String,
    pub description: String,
    pub image: String,
}

/// One bubble.
///
/// Everything except the position is fixed at construction; the position is only moved by the
/// layout engine through [`Particle`].
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    radius: f64,
    value: f64,
    group: String,
    categories: Categories,
    detail: Detail,
    position: Point,
}

impl Node {
    pub fn new(
        id: String,
        radius: f64,
        value: f64,
        group: String,
        categories: Categories,
        detail: Detail,
        position: Point,
    ) -> Self {
        Self {
            id,
            radius,
            value,
            group,
            categories,
            detail,
            position,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn category(&self, attribute: Attribute) -> &str {
        self.categories.get(attribute)
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl Particle for Node {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}
