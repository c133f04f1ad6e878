use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub title: String,
    pub price: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.title, self.price)
    }
}
