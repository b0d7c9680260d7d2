//! Dietary-restriction catalog.
//!
//! The catalog is the fixed, ordered list of options the dietary select
//! offers. It is configurable, but [`DietaryChoice::Other`] must always be
//! present: the conditional note field is keyed off it.

/// One selectable dietary restriction, plus the [`DietaryChoice::Unselected`]
/// placeholder the select starts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DietaryChoice {
    /// Placeholder sentinel; never a valid choice at submission time.
    #[default]
    Unselected,
    None,
    Vegetarian,
    Vegan,
    Gluten,
    Lactose,
    Seafood,
    Other,
}

impl DietaryChoice {
    /// Parse a select value. Unknown values map to `Unselected`, which the
    /// validator rejects at submission time.
    pub fn from_value(value: &str) -> Self {
        match value {
            "none" => DietaryChoice::None,
            "vegetarian" => DietaryChoice::Vegetarian,
            "vegan" => DietaryChoice::Vegan,
            "gluten" => DietaryChoice::Gluten,
            "lactose" => DietaryChoice::Lactose,
            "seafood" => DietaryChoice::Seafood,
            "other" => DietaryChoice::Other,
            _ => DietaryChoice::Unselected,
        }
    }

    /// The wire/select value for this choice ("" for the placeholder).
    pub fn value(self) -> &'static str {
        match self {
            DietaryChoice::Unselected => "",
            DietaryChoice::None => "none",
            DietaryChoice::Vegetarian => "vegetarian",
            DietaryChoice::Vegan => "vegan",
            DietaryChoice::Gluten => "gluten",
            DietaryChoice::Lactose => "lactose",
            DietaryChoice::Seafood => "seafood",
            DietaryChoice::Other => "other",
        }
    }

    /// `Other` requires an accompanying free-text note.
    #[inline]
    pub fn requires_note(self) -> bool {
        matches!(self, DietaryChoice::Other)
    }
}

/// One catalog entry: a choice plus its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DietaryOption {
    pub choice: DietaryChoice,
    pub label: String,
}

impl DietaryOption {
    pub fn new(choice: DietaryChoice, label: impl Into<String>) -> Self {
        Self {
            choice,
            label: label.into(),
        }
    }
}

/// Ordered dietary-option catalog.
///
/// Construction fails if `Other` is missing, since the note toggle depends
/// on it being selectable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DietaryCatalog {
    options: Vec<DietaryOption>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    MissingOther,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::MissingOther => {
                write!(f, "dietary catalog must contain the \"other\" option")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl DietaryCatalog {
    pub fn new(options: Vec<DietaryOption>) -> Result<Self, CatalogError> {
        if !options
            .iter()
            .any(|opt| opt.choice == DietaryChoice::Other)
        {
            return Err(CatalogError::MissingOther);
        }
        Ok(Self { options })
    }

    /// Options in display order.
    pub fn options(&self) -> &[DietaryOption] {
        &self.options
    }
}

impl Default for DietaryCatalog {
    fn default() -> Self {
        Self {
            options: vec![
                DietaryOption::new(DietaryChoice::Unselected, "Selecione uma opção"),
                DietaryOption::new(DietaryChoice::None, "Nenhuma"),
                DietaryOption::new(DietaryChoice::Vegetarian, "Vegetariano"),
                DietaryOption::new(DietaryChoice::Vegan, "Vegano"),
                DietaryOption::new(DietaryChoice::Gluten, "Alergia ao Glúten"),
                DietaryOption::new(DietaryChoice::Lactose, "Intolerância à Lactose"),
                DietaryOption::new(DietaryChoice::Seafood, "Alergia a Marisco"),
                DietaryOption::new(DietaryChoice::Other, "Outra"),
            ],
        }
    }
}
